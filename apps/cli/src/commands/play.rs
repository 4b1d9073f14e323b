use std::io::{BufRead, Write};

use opendict_core::{build_question, EntryStore, Question, DEFAULT_OPTION_COUNT};
use rand::Rng;

enum Answer {
    Choice(usize),
    Quit,
}

/// Read one line, `None` on end of input.
fn read_line<R: BufRead>(input: &mut R) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn is_quit(line: &str) -> bool {
    line.eq_ignore_ascii_case("q")
}

fn ask<R: BufRead, W: Write>(
    question: &Question,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<Answer> {
    writeln!(out)?;
    writeln!(out, "¿Qué significa «{}»?", question.word)?;
    for (i, option) in question.options.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, option.text)?;
    }

    let count = question.options.len();
    loop {
        write!(out, "Respuesta (1-{}, q para salir): ", count)?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(Answer::Quit);
        };
        if is_quit(&line) {
            return Ok(Answer::Quit);
        }
        match line.parse::<usize>() {
            Ok(n) if (1..=count).contains(&n) => return Ok(Answer::Choice(n - 1)),
            _ => writeln!(out, "Opción no válida.")?,
        }
    }
}

/// Run the quiz until the player quits or input ends.
pub fn play<R, W, G>(
    store: &mut EntryStore,
    input: &mut R,
    out: &mut W,
    rng: &mut G,
) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let threshold = store.config().quiz_unlock_threshold;
    if !store.is_quiz_eligible() {
        writeln!(
            out,
            "Necesitas al menos {} palabras con definiciones para jugar ({}/{}).",
            threshold,
            store.playable_count(),
            threshold
        )?;
        writeln!(out, "Busca más palabras con: opendict search <palabra>")?;
        return Ok(());
    }

    store.reset();
    let entries = store.playable_entries();

    loop {
        let Some(question) = build_question(&entries, DEFAULT_OPTION_COUNT, rng) else {
            tracing::warn!("could not build a question from {} entries", entries.len());
            writeln!(out, "No hay suficientes definiciones distintas para una pregunta.")?;
            return Ok(());
        };

        let index = match ask(&question, input, out)? {
            Answer::Choice(index) => index,
            Answer::Quit => return Ok(()),
        };

        let correct = question.is_correct(index);
        if correct {
            writeln!(out, "¡Correcto!")?;
        } else if let Some(right) = question.correct_index() {
            writeln!(
                out,
                "Incorrecto. Era la {}: {}",
                right + 1,
                question.options[right].text
            )?;
        }

        let stats = store.record_answer(correct);
        writeln!(
            out,
            "Racha: {} · Mejor: {} · Respondidas: {}",
            store.current_streak(),
            stats.best_streak,
            stats.answered
        )?;

        write!(out, "Enter para seguir, q para salir: ")?;
        out.flush()?;
        match read_line(input)? {
            Some(line) if !is_quit(&line) => {}
            _ => return Ok(()),
        }
    }
}

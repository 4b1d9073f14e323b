#[tokio::main]
async fn main() -> anyhow::Result<()> {
    opendict_cli::run().await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    opendict_backend::run().await
}

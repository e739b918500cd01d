use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    screenings_mcp::main_entry().await
}

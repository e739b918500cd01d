#![allow(dead_code)]

use anyhow::{Context, Result};
use rmcp::model::{CallToolRequestParam, CallToolResult};
use rmcp::service::{RoleClient, RunningService, ServiceExt};
use rmcp::transport::TokioChildProcess;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command;

pub type Client = RunningService<RoleClient, ()>;

pub const TIMEOUT: Duration = Duration::from_secs(10);

/// Catalog used by the end-to-end scenarios, in the wrapped document shape.
pub const CLASSICS_JSON: &str = r#"{
  "scraped_at": "2024-04-28T09:00:00Z",
  "films": [
    {
      "title": "Film A",
      "category": "classics",
      "director": "Jane Doe",
      "runtime": "95min",
      "screenings": [{"date": "2024-05-01", "time": "18:00", "location": "NFT1"}]
    },
    {
      "title": "Film B",
      "category": "classics",
      "director": "John Roe",
      "description": "An answer film to Jane Doe's debut.",
      "screenings": [{"date": "2024-05-02", "time": "20:30", "location": "IMAX"}]
    }
  ]
}"#;

/// Cargo builds the server binary before integration tests and exports its path.
pub fn screenings_mcp_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_screenings-mcp"))
}

pub async fn start_server(data: &Path) -> Result<Client> {
    let bin = screenings_mcp_bin();

    let mut cmd = Command::new(bin);
    cmd.env("SCREENINGS_DATA", data);
    cmd.env_remove("SCREENINGS_PRELOAD");
    cmd.env("RUST_LOG", "warn");

    let transport = TokioChildProcess::new(cmd).context("spawn mcp server")?;
    let client = tokio::time::timeout(TIMEOUT, ().serve(transport))
        .await
        .context("timeout starting MCP server")??;
    Ok(client)
}

pub async fn call(
    client: &Client,
    name: &'static str,
    args: serde_json::Value,
) -> Result<CallToolResult> {
    let result = tokio::time::timeout(
        TIMEOUT,
        client.call_tool(CallToolRequestParam {
            name: name.into(),
            arguments: args.as_object().cloned(),
        }),
    )
    .await
    .with_context(|| format!("timeout calling {name}"))??;
    Ok(result)
}

pub fn text_of(result: &CallToolResult) -> Result<&str> {
    result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.as_str())
        .context("tool result missing text output")
}

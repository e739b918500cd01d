use anyhow::{Context, Result};

mod support;

use support::{call, start_server, text_of, CLASSICS_JSON};

#[tokio::test]
async fn blank_and_invalid_arguments_are_tool_errors() -> Result<()> {
    let tmp = tempfile::tempdir().context("tempdir")?;
    let data = tmp.path().join("bfi_all_films.json");
    std::fs::write(&data, CLASSICS_JSON).context("write data")?;

    let client = start_server(&data).await?;

    let search = call(&client, "search-films", serde_json::json!({ "query": "   " })).await?;
    assert_eq!(search.is_error, Some(true));
    assert_eq!(text_of(&search)?, "Error: Search query cannot be empty");

    let details = call(&client, "get-film-details", serde_json::json!({ "title": "" })).await?;
    assert_eq!(details.is_error, Some(true));
    assert_eq!(text_of(&details)?, "Error: Title cannot be empty");

    let bad_date = call(
        &client,
        "list-films",
        serde_json::json!({ "start_date": "May 1st" }),
    )
    .await?;
    assert_eq!(bad_date.is_error, Some(true));
    assert!(text_of(&bad_date)?.contains("start_date"));

    client.cancel().await.context("shutdown mcp service")?;
    Ok(())
}

#[tokio::test]
async fn no_matches_are_plain_results() -> Result<()> {
    let tmp = tempfile::tempdir().context("tempdir")?;
    let data = tmp.path().join("bfi_all_films.json");
    std::fs::write(&data, CLASSICS_JSON).context("write data")?;

    let client = start_server(&data).await?;

    let window = call(
        &client,
        "list-films",
        serde_json::json!({ "start_date": "2024-06-01", "end_date": "2024-06-30" }),
    )
    .await?;
    assert_ne!(window.is_error, Some(true));
    assert_eq!(text_of(&window)?, "No films found matching the criteria.");

    let missing = call(
        &client,
        "get-film-details",
        serde_json::json!({ "title": "Film" }),
    )
    .await?;
    assert_ne!(missing.is_error, Some(true));
    assert_eq!(text_of(&missing)?, "Film 'Film' not found");

    client.cancel().await.context("shutdown mcp service")?;
    Ok(())
}

#[tokio::test]
async fn missing_data_source_fails_each_call_without_killing_the_server() -> Result<()> {
    let tmp = tempfile::tempdir().context("tempdir")?;
    let data = tmp.path().join("absent.json");

    let client = start_server(&data).await?;

    for _ in 0..2 {
        let result = call(&client, "catalog-overview", serde_json::json!({})).await?;
        assert_eq!(result.is_error, Some(true));
        let text = text_of(&result)?;
        assert!(text.starts_with("Error: Failed to load film data"), "{text}");
        assert!(text.contains("absent.json"), "{text}");
    }

    // Correcting the source is picked up by the next call.
    std::fs::write(&data, CLASSICS_JSON).context("write data")?;
    let result = call(&client, "catalog-overview", serde_json::json!({})).await?;
    assert_ne!(result.is_error, Some(true));
    assert!(text_of(&result)?.starts_with("Catalog: 2 film(s), 2 screening(s)"));

    client.cancel().await.context("shutdown mcp service")?;
    Ok(())
}

#[tokio::test]
async fn directory_source_merges_documents() -> Result<()> {
    let tmp = tempfile::tempdir().context("tempdir")?;
    std::fs::write(
        tmp.path().join("bfi_christmas_films.json"),
        r#"[{"title": "Elf", "category": "christmas_films", "screenings": []}]"#,
    )
    .context("write christmas")?;
    std::fs::write(tmp.path().join("bfi_classics.json"), CLASSICS_JSON).context("write classics")?;

    let client = start_server(tmp.path()).await?;

    let result = call(
        &client,
        "catalog-overview",
        serde_json::json!({ "max_directors": 0 }),
    )
    .await?;
    let text = text_of(&result)?;
    assert!(text.starts_with("Catalog: 3 film(s), 2 screening(s)"), "{text}");
    assert!(text.contains("Categories (2): christmas_films, classics"));
    assert!(!text.contains("Directors"));

    client.cancel().await.context("shutdown mcp service")?;
    Ok(())
}

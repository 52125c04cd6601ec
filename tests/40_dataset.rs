mod common;

use anyhow::Result;
use reqwest::StatusCode;
use std::time::Duration;

// Loader failure modes degrade to an empty result, never an error response.

#[tokio::test]
async fn missing_data_file_yields_empty_result() -> Result<()> {
    let server = common::TestServer::spawn_with_data_file("/nonexistent/offers.json")?;
    server.wait_ready(Duration::from_secs(10)).await?;

    let token = common::obtain_token(&server).await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/offers", server.base_url))
        .bearer_auth(token)
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["total"], 0, "unexpected body: {}", body);
    assert_eq!(body["data"], serde_json::json!([]));
    Ok(())
}

#[tokio::test]
async fn unparseable_data_file_yields_empty_result() -> Result<()> {
    let path = std::env::temp_dir().join(format!(
        "offers-gateway-corrupt-{}.json",
        std::process::id()
    ));
    std::fs::write(&path, "{ not json")?;

    let server = common::TestServer::spawn_with_data_file(path.to_str().unwrap())?;
    server.wait_ready(Duration::from_secs(10)).await?;

    let token = common::obtain_token(&server).await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/offers", server.base_url))
        .bearer_auth(token)
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["total"], 0, "unexpected body: {}", body);
    Ok(())
}

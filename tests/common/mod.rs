use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;

pub const CLIENT_ID: &str = "integration-client";
pub const CLIENT_SECRET: &str = "integration-secret";
pub const JWT_SECRET: &str = "integration-jwt-secret";

// Five raw records; two are ineligible (null / absent sku_id) and must be
// dropped at load time, leaving three servable offers.
const FIXTURE: &str = r#"[
  {"sku_id": "SKU-1", "brand": "Acme", "price": 10, "category": "tools"},
  {"sku_id": "SKU-2", "brand": "Acme", "price": 10.5, "stock": null},
  {"sku_id": "SKU-3", "brand": "Globex", "price": 7, "category": "tools"},
  {"sku_id": null, "brand": "Initech"},
  {"brand": "Umbrella", "price": 3}
]"#;

static SERVER: OnceLock<TestServer> = OnceLock::new();

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    child: Child,
}

impl TestServer {
    /// Spawn the gateway binary against an arbitrary data file path.
    pub fn spawn_with_data_file(data_file: &str) -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let mut cmd = Command::new(env!("CARGO_BIN_EXE_offers-gateway"));
        cmd.env("PORT", port.to_string())
            .env("DATA_FILE", data_file)
            .env("JWT_SECRET", JWT_SECRET)
            .env("CLIENT_ID", CLIENT_ID)
            .env("CLIENT_SECRET", CLIENT_SECRET)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { port, base_url, child })
    }

    fn spawn() -> Result<Self> {
        let path = fixture_path();
        std::fs::write(&path, FIXTURE).context("failed to write fixture data file")?;
        Self::spawn_with_data_file(path.to_str().context("non-utf8 fixture path")?)
    }

    pub async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!(
            "server did not become ready on {} within {:?}",
            self.base_url,
            timeout
        )
    }
}

fn fixture_path() -> PathBuf {
    std::env::temp_dir().join(format!("offers-gateway-fixture-{}.json", std::process::id()))
}

/// Shared per-test-binary server instance serving the standard fixture.
pub async fn ensure_server() -> Result<&'static TestServer> {
    let server = SERVER.get_or_init(|| TestServer::spawn().expect("failed to spawn server binary"));
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

/// Run the full credential exchange and return a valid bearer token.
pub async fn obtain_token(server: &TestServer) -> Result<String> {
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/auth/token", server.base_url))
        .json(&serde_json::json!({
            "clientId": CLIENT_ID,
            "clientSecret": CLIENT_SECRET,
        }))
        .send()
        .await?;

    anyhow::ensure!(
        res.status() == StatusCode::OK,
        "token request failed: {}",
        res.status()
    );

    let body = res.json::<serde_json::Value>().await?;
    body["access_token"]
        .as_str()
        .map(str::to_string)
        .context("response missing access_token")
}

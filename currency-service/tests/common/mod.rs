#![allow(dead_code)]

use currency_service::config::CurrencyConfig;
use currency_service::startup::Application;
use reqwest::Client;
use service_core::config::Config;
use std::time::Duration;

pub struct TestApp {
    pub http_address: String,
    pub port: u16,
    pub client: Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let config = CurrencyConfig {
            common: Config { port: 0 },
            ..CurrencyConfig::default()
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let http_address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Local loopback only; ignore any proxy configured in the environment.
        let client = Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(5))
            .build()
            .expect("Failed to build HTTP client");

        // Wait for the server to answer the health probe
        let health_url = format!("{}/health", http_address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        TestApp {
            http_address,
            port,
            client,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.http_address, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn exchange(&self, from: &str, to: &str, amount: &str) -> reqwest::Response {
        self.client
            .get(self.url("/exchange"))
            .query(&[("from", from), ("to", to), ("amount", amount)])
            .send()
            .await
            .expect("Failed to execute request")
    }
}

pub fn assert_json_content_type(response: &reqwest::Response) {
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/json"),
        "expected application/json, got '{}'",
        content_type
    );
}

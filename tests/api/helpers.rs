use std::io::Result;
use thuto::{routes::get_router, telemetry::init_tracing};
use tokio::net::TcpListener;

/// Only for integration tests.
#[derive(Debug)]
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}{path}", self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub async fn spawn_app_testing() -> Result<TestApp> {
    init_tracing()?;

    // randomized OS port
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let address = {
        let x = listener.local_addr()?;
        format!("http://{x}")
    };

    let router = get_router();

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Test server failed");
    });

    Ok(TestApp {
        address,
        api_client: reqwest::Client::new(),
    })
}

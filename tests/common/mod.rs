#![allow(dead_code)]

use lynalyze_analyzer::{server, AnalyzerSettings, AppState};
use tokio::net::TcpListener;

/// Starts the service on an ephemeral port and returns its base URL.
pub async fn spawn_app(settings: AnalyzerSettings) -> String {
    let state = AppState::from_settings(settings).expect("state should build");
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        server::serve_with_shutdown(listener, state, std::future::pending())
            .await
            .unwrap();
    });

    format!("http://{}", addr)
}

pub fn is_hex_color(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

//! In-memory transport serving the JSON fixtures.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use mushaf_client::{ClientConfig, MushafError, RawResponse, Result, Transport};
use serde_json::{Value, json};

pub const BASE_URL: &str = "http://fixture.test/api/v4";

pub const CHAPTERS_JSON: &str = include_str!("../../../mushaf-core/tests/fixtures/chapters.json");
pub const TRANSLATIONS_JSON: &str =
    include_str!("../../../mushaf-core/tests/fixtures/translations.json");

pub fn config() -> ClientConfig {
    ClientConfig::new().with_base_url(BASE_URL)
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Serves canned responses by URL and records every request.
#[derive(Debug, Default)]
pub struct FixtureTransport {
    routes: HashMap<String, RawResponse>,
    requests: Mutex<Vec<String>>,
}

impl FixtureTransport {
    /// Routes for the chapter list, every single-chapter URL and the
    /// translation list, all answering 200.
    pub fn healthy() -> Self {
        let config = config();
        let mut transport = Self::default();
        transport.route(&config.chapters_url().unwrap(), 200, CHAPTERS_JSON);
        transport.route(&config.translations_url().unwrap(), 200, TRANSLATIONS_JSON);

        let listing: Value = serde_json::from_str(CHAPTERS_JSON).unwrap();
        for chapter in listing["chapters"].as_array().unwrap() {
            let id = chapter["id"].as_u64().unwrap();
            let url = format!("{BASE_URL}/chapters/{id}?language=en");
            let body = json!({ "chapter": chapter }).to_string();
            transport.route(&url, 200, &body);
        }
        transport
    }

    /// Every route answers `status` with an error body.
    pub fn failing(status: u16) -> Self {
        let mut transport = Self::healthy();
        for response in transport.routes.values_mut() {
            response.status = status;
            response.body = r#"{"status":500,"error":"Internal Server Error"}"#.to_string();
        }
        transport
    }

    pub fn route(&mut self, url: &str, status: u16, body: &str) {
        self.routes.insert(
            url.to_string(),
            RawResponse {
                status,
                body: body.to_string(),
            },
        );
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for FixtureTransport {
    fn get(&self, url: &str) -> Result<RawResponse> {
        self.requests.lock().unwrap().push(url.to_string());
        self.routes
            .get(url)
            .cloned()
            .ok_or_else(|| MushafError::Transport {
                url: url.to_string(),
                message: "connection refused".to_string(),
            })
    }
}

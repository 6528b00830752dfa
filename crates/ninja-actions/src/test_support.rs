//! In-memory CMS backend served by `tiny_http` on `127.0.0.1:0`.
//!
//! Implements the REST contract (`/api/v1/cms/{resource}/` and
//! `/api/v1/cms/{resource}/{id}/`) closely enough for action-layer, command
//! and admin-server tests, and records every request it receives. Enabled for
//! other crates with the `test-support` feature.

#![allow(clippy::missing_panics_doc, clippy::must_use_candidate)]

use std::collections::HashMap;
use std::io::Read;
use std::net::TcpListener;
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

use ninja_client::ApiClient;
use ninja_config::{ApiConfig, NinjaConfig};
use ninja_schema::SchemaRegistry;
use serde_json::{Map, Value, json};
use tiny_http::{Header, Response, Server};

use crate::{CmsService, ListCache};

/// One request as the backend saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub body: String,
}

#[derive(Default)]
struct State {
    rows: HashMap<String, Vec<Map<String, Value>>>,
    next_id: u64,
    fail_with: Option<u16>,
    requests: Vec<Recorded>,
}

pub struct StubBackend {
    server: Arc<Server>,
    state: Arc<Mutex<State>>,
    base_url: String,
}

impl StubBackend {
    pub fn start() -> Self {
        let server = Arc::new(Server::http("127.0.0.1:0").expect("bind stub backend"));
        let port = server.server_addr().to_ip().expect("ip addr").port();
        let state = Arc::new(Mutex::new(State {
            next_id: 100,
            ..State::default()
        }));

        let worker = Arc::clone(&server);
        let shared = Arc::clone(&state);
        thread::spawn(move || {
            for mut request in worker.incoming_requests() {
                let mut body = String::new();
                let _ = request.as_reader().read_to_string(&mut body);
                let method = request.method().to_string();
                let path = request.url().to_string();

                let (status, reply) = {
                    let mut state = shared.lock().expect("stub state");
                    state.requests.push(Recorded {
                        method: method.clone(),
                        path: path.clone(),
                        body: body.clone(),
                    });
                    answer(&mut state, &method, &path, &body)
                };

                let header = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).expect("header");
                let text = reply.map(|v| v.to_string()).unwrap_or_default();
                let _ = request.respond(Response::from_string(text).with_status_code(status).with_header(header));
            }
        });

        Self {
            server,
            state,
            base_url: format!("http://127.0.0.1:{port}/api/v1"),
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("stub state")
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Add rows to a resource; rows without an id get the next one.
    pub fn seed(&self, resource: &str, rows: Vec<Value>) {
        let mut state = self.state();
        for row in rows {
            let Value::Object(mut map) = row else { continue };
            if !map.contains_key("id") {
                let id = state.next_id;
                map.insert("id".into(), json!(id));
                state.next_id += 1;
            }
            state.rows.entry(resource.to_string()).or_default().push(map);
        }
    }

    /// Answer every following request with this status.
    pub fn fail_with(&self, status: u16) {
        self.state().fail_with = Some(status);
    }

    pub fn recover(&self) {
        self.state().fail_with = None;
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.state().requests.len()
    }

    pub fn api_config(&self) -> ApiConfig {
        api_config_for(&self.base_url)
    }

    /// Default configuration pointed at this backend.
    pub fn config(&self) -> NinjaConfig {
        config_for(&self.base_url)
    }

    /// Service with an explicit list cache lifetime.
    pub fn service(&self, cache_ttl: Duration) -> CmsService {
        service_for(&self.api_config(), cache_ttl)
    }
}

impl Drop for StubBackend {
    fn drop(&mut self) {
        self.server.unblock();
    }
}

pub fn service_for(config: &ApiConfig, cache_ttl: Duration) -> CmsService {
    CmsService::with_parts(
        ApiClient::new(config).expect("client builds"),
        Arc::new(SchemaRegistry::builtin()),
        ListCache::new(cache_ttl),
    )
}

/// API settings for a port nothing listens on.
pub fn unreachable_config() -> ApiConfig {
    let port = TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .expect("free port")
        .port();
    api_config_for(&format!("http://127.0.0.1:{port}/api/v1"))
}

/// Full configuration whose API is unreachable.
pub fn unreachable_ninja_config() -> NinjaConfig {
    let mut config = NinjaConfig::default();
    config.api = unreachable_config();
    config
}

fn api_config_for(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        timeout_secs: 2,
        ..ApiConfig::default()
    }
}

fn config_for(base_url: &str) -> NinjaConfig {
    let mut config = NinjaConfig::default();
    config.api = api_config_for(base_url);
    config
}

fn answer(state: &mut State, method: &str, path: &str, body: &str) -> (u16, Option<Value>) {
    if let Some(status) = state.fail_with {
        return (status, Some(json!({"detail": "stub backend failure"})));
    }
    let Some(rest) = path.strip_prefix("/api/v1/cms/") else {
        return (404, Some(json!({"detail": "Not found."})));
    };
    let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();
    let not_found = (404, Some(json!({"detail": "Not found."})));

    match (method, segments.as_slice()) {
        ("GET", [resource]) => {
            let rows = state.rows.get(*resource).cloned().unwrap_or_default();
            (200, Some(Value::Array(rows.into_iter().map(Value::Object).collect())))
        }
        ("POST", [resource]) => {
            let Ok(Value::Object(mut row)) = serde_json::from_str::<Value>(body) else {
                return (400, Some(json!({"detail": "JSON object expected"})));
            };
            row.insert("id".into(), json!(state.next_id));
            state.next_id += 1;
            state.rows.entry((*resource).to_string()).or_default().push(row.clone());
            (201, Some(Value::Object(row)))
        }
        ("GET", [resource, id]) => state
            .rows
            .get(*resource)
            .and_then(|rows| rows.iter().find(|row| has_id(row, id)))
            .map_or(not_found, |row| (200, Some(Value::Object(row.clone())))),
        ("PUT", [resource, id]) => {
            let Ok(Value::Object(patch)) = serde_json::from_str::<Value>(body) else {
                return (400, Some(json!({"detail": "JSON object expected"})));
            };
            let Some(row) = state
                .rows
                .get_mut(*resource)
                .and_then(|rows| rows.iter_mut().find(|row| has_id(row, id)))
            else {
                return not_found;
            };
            row.extend(patch.into_iter().filter(|(key, _)| key != "id"));
            (200, Some(Value::Object(row.clone())))
        }
        ("DELETE", [resource, id]) => {
            let rows = state.rows.entry((*resource).to_string()).or_default();
            let before = rows.len();
            rows.retain(|row| !has_id(row, id));
            if rows.len() == before { not_found } else { (204, None) }
        }
        _ => (405, Some(json!({"detail": "Method not allowed."}))),
    }
}

fn has_id(row: &Map<String, Value>, id: &str) -> bool {
    match row.get("id") {
        Some(Value::Number(n)) => n.to_string() == id,
        Some(Value::String(s)) => s == id,
        _ => false,
    }
}

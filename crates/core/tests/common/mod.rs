// ═══════════════════════════════════════════════════════════════════
// Shared test doubles: scripted transport + recording notifier
// ═══════════════════════════════════════════════════════════════════

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

use pension_planner_core::errors::CoreError;
use pension_planner_core::notify::Notifier;
use pension_planner_core::transport::traits::ApiTransport;

/// One request the mock saw, in arrival order.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: String,
    pub path: String,
    pub body: Option<Value>,
}

enum Route {
    Ok(Value),
    Fail(u16, String),
}

/// Scripted transport: responses are keyed by `"METHOD /path"`; every
/// unrouted request answers 404, which is exactly what a probe miss
/// looks like. All requests are recorded for path/payload assertions.
pub struct MockTransport {
    routes: Mutex<HashMap<String, Route>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            routes: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A transport where all four kind list endpoints return empty
    /// arrays, so mutations can run their list refresh against it.
    pub fn with_empty_lists() -> Self {
        let mock = Self::new();
        for kind in ["etf", "insurance", "company", "state"] {
            mock.on("GET", &format!("/pensions/{kind}"), json!([]));
        }
        mock
    }

    pub fn on(&self, method: &str, path: &str, response: Value) {
        self.routes
            .lock()
            .unwrap()
            .insert(format!("{method} {path}"), Route::Ok(response));
    }

    pub fn fail(&self, method: &str, path: &str, status: u16) {
        self.routes.lock().unwrap().insert(
            format!("{method} {path}"),
            Route::Fail(status, "scripted failure".into()),
        );
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Paths of all recorded requests with the given method, in order.
    pub fn paths(&self, method: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.method == method)
            .map(|c| c.path)
            .collect()
    }

    /// Recorded bodies of requests with the given method and path.
    pub fn bodies(&self, method: &str, path: &str) -> Vec<Value> {
        self.calls()
            .into_iter()
            .filter(|c| c.method == method && c.path == path)
            .filter_map(|c| c.body)
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn respond(&self, method: &str, path: &str, body: Option<&Value>) -> Result<Value, CoreError> {
        self.calls.lock().unwrap().push(RecordedCall {
            method: method.to_string(),
            path: path.to_string(),
            body: body.cloned(),
        });
        match self.routes.lock().unwrap().get(&format!("{method} {path}")) {
            Some(Route::Ok(value)) => Ok(value.clone()),
            Some(Route::Fail(status, message)) => Err(CoreError::Api {
                status: *status,
                message: message.clone(),
            }),
            None => Err(CoreError::Api {
                status: 404,
                message: format!("no route for {method} {path}"),
            }),
        }
    }
}

#[async_trait]
impl ApiTransport for MockTransport {
    async fn get(&self, path: &str) -> Result<Value, CoreError> {
        self.respond("GET", path, None)
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, CoreError> {
        self.respond("POST", path, Some(body))
    }

    async fn put(&self, path: &str, body: &Value) -> Result<Value, CoreError> {
        self.respond("PUT", path, Some(body))
    }

    async fn delete(&self, path: &str) -> Result<(), CoreError> {
        self.respond("DELETE", path, None).map(|_| ())
    }
}

/// Notifier that keeps every reported message for assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

// ── JSON fixtures ───────────────────────────────────────────────────
// Only required fields; everything optional rides on serde defaults.

pub fn etf_pension_json(id: i64, name: &str, etf_id: &str) -> Value {
    json!({ "id": id, "name": name, "member_id": 1, "etf_id": etf_id })
}

pub fn insurance_pension_json(id: i64, name: &str) -> Value {
    json!({ "id": id, "name": name, "member_id": 1, "provider": "Allianz" })
}

pub fn company_pension_json(id: i64, name: &str) -> Value {
    json!({ "id": id, "name": name, "member_id": 1, "employer": "ACME GmbH" })
}

pub fn state_pension_json(id: i64, name: &str) -> Value {
    json!({ "id": id, "name": name, "member_id": 1 })
}

pub fn statistics_json(invested: f64, current: f64) -> Value {
    json!({ "total_invested_amount": invested, "current_value": current })
}

pub fn company_statement_json(id: i64, date: &str, value: f64) -> Value {
    json!({ "id": id, "statement_date": date, "value": value })
}

pub fn insurance_statement_json(id: i64, date: &str, value: f64) -> Value {
    json!({ "id": id, "statement_date": date, "value": value })
}

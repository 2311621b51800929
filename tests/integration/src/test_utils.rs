//! Test utilities: an in-process stand-in for the MEATER cloud
//!
//! Serves both the private API (`/login`, `/v2/cooks`) and the public API
//! (`/v1/login`, `/v1/devices`) on a random local port and records what the
//! client sent.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use meater_core::Config;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const EMAIL: &str = "cook@example.com";
pub const PASSWORD: &str = "secret";
pub const ACCESS_TOKEN: &str = "private-token-1";
pub const PUBLIC_TOKEN: &str = "public-token-1";

/// Recorded state of the mock cloud
#[derive(Default)]
pub struct MockCloud {
    pub login_calls: AtomicUsize,
    pub cooks_calls: AtomicUsize,
    pub fail_cooks: AtomicBool,
    pub last_login: Mutex<Option<Value>>,
    pub last_user_agent: Mutex<Option<String>>,
}

impl MockCloud {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn login_calls(&self) -> usize {
        self.login_calls.load(Ordering::SeqCst)
    }

    pub fn cooks_calls(&self) -> usize {
        self.cooks_calls.load(Ordering::SeqCst)
    }

    pub fn last_login(&self) -> Option<Value> {
        self.last_login.lock().unwrap().clone()
    }

    pub fn last_user_agent(&self) -> Option<String> {
        self.last_user_agent.lock().unwrap().clone()
    }
}

fn bearer_matches(headers: &HeaderMap, token: &str) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(|value| value == format!("Bearer {}", token))
        .unwrap_or(false)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"status": "Unauthorized", "statusCode": 401})),
    )
        .into_response()
}

async fn private_login(
    State(cloud): State<Arc<MockCloud>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    cloud.login_calls.fetch_add(1, Ordering::SeqCst);
    *cloud.last_user_agent.lock().unwrap() = headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    *cloud.last_login.lock().unwrap() = Some(body.clone());

    if body["email"] == EMAIL && body["password"] == PASSWORD {
        Json(json!({"accessToken": ACCESS_TOKEN})).into_response()
    } else {
        unauthorized()
    }
}

async fn private_cooks(State(cloud): State<Arc<MockCloud>>, headers: HeaderMap) -> Response {
    cloud.cooks_calls.fetch_add(1, Ordering::SeqCst);

    if !bearer_matches(&headers, ACCESS_TOKEN) {
        return unauthorized();
    }

    if cloud.fail_cooks.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response();
    }

    Json(json!({"data": sample_cooks()})).into_response()
}

async fn public_login(Json(body): Json<Value>) -> Response {
    if body["email"] == EMAIL && body["password"] == PASSWORD {
        Json(json!({
            "status": "OK",
            "statusCode": 200,
            "data": {"token": PUBLIC_TOKEN, "userId": "user-1"},
            "meta": {}
        }))
        .into_response()
    } else {
        unauthorized()
    }
}

async fn public_devices(headers: HeaderMap) -> Response {
    if !bearer_matches(&headers, PUBLIC_TOKEN) {
        return unauthorized();
    }

    Json(json!({
        "status": "OK",
        "statusCode": 200,
        "data": {"devices": sample_devices()},
        "meta": {}
    }))
    .into_response()
}

async fn public_device(Path(id): Path<String>, headers: HeaderMap) -> Response {
    if !bearer_matches(&headers, PUBLIC_TOKEN) {
        return unauthorized();
    }

    let devices = sample_devices();
    let found = devices
        .as_array()
        .and_then(|devices| devices.iter().find(|device| device["id"] == id.as_str()))
        .cloned();

    match found {
        Some(device) => Json(json!({"status": "OK", "statusCode": 200, "data": device}))
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"status": "Not Found", "statusCode": 404})),
        )
            .into_response(),
    }
}

/// Start the mock cloud and return its base URL
pub async fn start_mock_cloud(cloud: Arc<MockCloud>) -> String {
    let app = Router::new()
        .route("/login", post(private_login))
        .route("/v2/cooks", get(private_cooks))
        .route("/v1/login", post(public_login))
        .route("/v1/devices", get(public_devices))
        .route("/v1/devices/:id", get(public_device))
        .with_state(cloud);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let local_addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", local_addr)
}

/// Configuration pointing both APIs at `base_url` with the session file in `dir`
pub fn test_config(base_url: &str, dir: &std::path::Path) -> Config {
    let mut config = Config::default();
    config.api.base_url = base_url.to_string();
    config.api.public_base_url = base_url.to_string();
    config.api.timeout_secs = 5;
    config.session.path = dir.join("config.json");
    config
}

fn cook(id: &str, deleted: bool, start_time: i64, values: Value) -> Value {
    json!({
        "id": id,
        "totalTime": 5400,
        "isFavourite": !deleted,
        "isDeleted": deleted,
        "isOwner": true,
        "updatedAt": "2024-12-21T18:33:10.000Z",
        "feedback": 4,
        "raw": {
            "masterType": 5,
            "probeID": "PROBE-1",
            "probeNumber": 17,
            "probeFirmwareRevision": "v2.1",
            "parentDeviceID": "BLOCK-1",
            "parentDeviceProbeNumber": 1,
            "parentDeviceFirmwareRevision": "v1.4",
            "setup": {
                "sequenceNumber": 12,
                "state": 6,
                "name": "Ribeye",
                "targetInternalTemperature": 1824,
                "alarms": [{"type": 3, "state": 2, "limit": 1824}],
                "cookID": id,
                "cutID": 3,
                "presetID": 31,
                "clipNumber": 0,
                "cookingAppliance": 2,
                "estimatorConfig": {
                    "temperatureChangeBeforeReady": 64,
                    "secondsDelayBeforeReady": 0,
                    "secondsDelayBeforeResting": 300,
                    "estimatorType": 2
                }
            },
            "history": {
                "interval": 10,
                "startTime": start_time,
                "values": values
            },
            "deviceInfo": "MEATER Block",
            "peak": 1888,
            "appVersion": "4.4.2",
            "osVersion": "18.2",
            "emailAddress": EMAIL,
            "sendingDeviceCloudID": "CLOUD-1"
        }
    })
}

pub fn sample_cooks() -> Value {
    json!([
        cook(
            "cook-1",
            false,
            1734793200,
            json!([
                {"ambient": 4800, "internal": 640},
                {"ambient": 5120, "internal": 1024},
                {"ambient": 5120, "internal": 1888}
            ])
        ),
        cook("cook-2", true, 1734000000, json!([]))
    ])
}

pub fn sample_devices() -> Value {
    json!([
        {
            "id": "device-1",
            "temperature": {"internal": 52.5, "ambient": 180.0},
            "cook": {
                "id": "cook-live",
                "name": "Brisket",
                "state": "Started",
                "temperature": {"target": 93.0, "peak": 52.5},
                "time": {"elapsed": 7200, "remaining": 14400}
            },
            "updated_at": 1734800000
        },
        {
            "id": "device-2",
            "temperature": {"internal": 21.0, "ambient": 21.0},
            "cook": null,
            "updated_at": 1734800000
        }
    ])
}

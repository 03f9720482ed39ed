#![allow(dead_code)]

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::TcpListener as StdListener;
use std::sync::{Arc, Mutex};

/// In-memory stand-in for the habit API that counts every request it serves.
#[derive(Default)]
pub struct StubData {
    pub habits: Vec<Value>,
    pub completions: Vec<Value>,
    pub next_id: i64,
    pub hits: HashMap<String, usize>,
    pub fail_create: Option<(u16, String)>,
    pub fail_history: bool,
    pub analytics: Option<Value>,
}

#[derive(Clone)]
pub struct Stub {
    pub base_url: String,
    pub data: Arc<Mutex<StubData>>,
}

impl Stub {
    pub async fn start() -> Stub {
        let data = Arc::new(Mutex::new(StubData::default()));
        let app = Router::new()
            .route("/health", get(health))
            .route("/habits/", get(list_habits).post(create_habit))
            .route("/habits/complete/", post(complete))
            .route("/habits/:id", delete(delete_habit))
            .route("/habits/:id/completions/", get(completions))
            .route("/analytics/", get(analytics))
            .with_state(Arc::clone(&data));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub");
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub server");
        });

        Stub {
            base_url: format!("http://{addr}"),
            data,
        }
    }

    pub fn hits(&self, key: &str) -> usize {
        self.data.lock().unwrap().hits.get(key).copied().unwrap_or(0)
    }

    pub fn add_habit(&self, name: &str, description: Option<&str>) -> i64 {
        let mut data = self.data.lock().unwrap();
        data.next_id += 1;
        let id = data.next_id;
        data.habits.push(json!({
            "id": id,
            "name": name,
            "description": description,
            "habit_type": "bad",
            "frequency": "daily",
            "target_count": 1,
            "motivation_text": null,
            "difficulty_level": "medium",
            "created_at": "2026-01-01 08:00:00"
        }));
        id
    }

    /// Pushes a habit row as given, assigning only its id.
    pub fn add_raw_habit(&self, mut habit: Value) -> i64 {
        let mut data = self.data.lock().unwrap();
        data.next_id += 1;
        let id = data.next_id;
        habit["id"] = json!(id);
        data.habits.push(habit);
        id
    }

    pub fn add_completion(&self, habit_id: i64, date: &str, notes: &str) {
        self.data.lock().unwrap().completions.push(json!({
            "habit_id": habit_id,
            "completion_date": date,
            "completed": true,
            "notes": notes,
            "craving_level": 3,
            "resistance_level": 8
        }));
    }

    pub fn fail_create(&self, status: u16, body: &str) {
        self.data.lock().unwrap().fail_create = Some((status, body.to_string()));
    }

    pub fn fail_history(&self, fail: bool) {
        self.data.lock().unwrap().fail_history = fail;
    }

    pub fn set_analytics(&self, analytics: Value) {
        self.data.lock().unwrap().analytics = Some(analytics);
    }

    pub fn last_completion(&self) -> Option<Value> {
        self.data.lock().unwrap().completions.last().cloned()
    }
}

/// A port with nothing listening on it.
pub fn dead_base_url() -> String {
    let listener = StdListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

type Shared = State<Arc<Mutex<StubData>>>;

fn hit(data: &Mutex<StubData>, key: &str) {
    *data.lock().unwrap().hits.entry(key.to_string()).or_default() += 1;
}

async fn health(State(data): Shared) -> Json<Value> {
    hit(&data, "GET /health");
    Json(json!({ "status": "healthy" }))
}

async fn list_habits(State(data): Shared) -> Json<Value> {
    hit(&data, "GET /habits/");
    let habits = data.lock().unwrap().habits.clone();
    Json(Value::Array(habits))
}

async fn create_habit(State(data): Shared, Json(body): Json<Value>) -> Response {
    hit(&data, "POST /habits/");
    let mut data = data.lock().unwrap();
    if let Some((status, message)) = data.fail_create.clone() {
        return (StatusCode::from_u16(status).unwrap(), message).into_response();
    }
    data.next_id += 1;
    let id = data.next_id;
    let mut habit = body;
    habit["id"] = json!(id);
    data.habits.push(habit);
    Json(json!({ "id": id, "message": "Habit created successfully" })).into_response()
}

async fn delete_habit(State(data): Shared, Path(id): Path<i64>) -> Response {
    hit(&data, "DELETE /habits/:id");
    let mut data = data.lock().unwrap();
    let before = data.habits.len();
    data.habits.retain(|habit| habit["id"] != json!(id));
    if data.habits.len() == before {
        return (StatusCode::NOT_FOUND, r#"{"detail":"Habit not found"}"#).into_response();
    }
    Json(json!({ "message": "Habit deleted successfully" })).into_response()
}

async fn complete(State(data): Shared, Json(body): Json<Value>) -> Json<Value> {
    hit(&data, "POST /habits/complete/");
    data.lock().unwrap().completions.push(body);
    Json(json!({ "message": "Habit completion recorded" }))
}

async fn completions(State(data): Shared, Path(id): Path<i64>) -> Response {
    hit(&data, "GET /habits/:id/completions/");
    if data.lock().unwrap().fail_history {
        return (StatusCode::INTERNAL_SERVER_ERROR, "history unavailable").into_response();
    }
    let records: Vec<Value> = data
        .lock()
        .unwrap()
        .completions
        .iter()
        .filter(|record| record["habit_id"] == json!(id))
        .cloned()
        .collect();
    Json(Value::Array(records)).into_response()
}

async fn analytics(State(data): Shared) -> Json<Value> {
    hit(&data, "GET /analytics/");
    let data = data.lock().unwrap();
    if let Some(analytics) = data.analytics.clone() {
        return Json(analytics);
    }
    if data.habits.is_empty() {
        return Json(json!({ "total_stats": {}, "habit_stats": [] }));
    }
    let habit_stats: Vec<Value> = data
        .habits
        .iter()
        .map(|habit| {
            let done = data
                .completions
                .iter()
                .filter(|record| record["habit_id"] == habit["id"] && record["completed"] == json!(true))
                .count();
            json!({
                "habit_id": habit["id"],
                "habit_name": habit["name"],
                "completed_count": done,
                "completion_rate": (done as f64 / 30.0 * 1000.0).round() / 10.0,
            })
        })
        .collect();
    Json(json!({
        "total_stats": {
            "total_habits": data.habits.len(),
            "daily_habits": data.habits.iter().filter(|habit| habit["frequency"] == "daily").count(),
            "weekly_habits": data.habits.iter().filter(|habit| habit["frequency"] == "weekly").count(),
            "monthly_habits": data.habits.iter().filter(|habit| habit["frequency"] == "monthly").count(),
        },
        "habit_stats": habit_stats,
    }))
}

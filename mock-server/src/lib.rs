use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Karyawan {
    pub id: i64,
    pub employee_id: String,
    pub name: String,
    pub department: String,
    pub position: String,
    pub salary: f64,
    pub hire_date: Option<NaiveDate>,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Deserialize)]
pub struct KaryawanInput {
    pub employee_id: String,
    pub name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub salary: f64,
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// Envelope wrapped around every reply.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T, message: &str) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.to_string()),
        }
    }

    fn failure(message: &str) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.to_string()),
        }
    }
}

#[derive(Debug, Default)]
pub struct Store {
    last_id: i64,
    rows: BTreeMap<i64, Karyawan>,
}

impl Store {
    fn employee_id_taken(&self, employee_id: &str, except: Option<i64>) -> bool {
        self.rows
            .values()
            .any(|row| row.employee_id == employee_id && Some(row.id) != except)
    }
}

pub type Db = Arc<RwLock<Store>>;

type Reply<T> = (StatusCode, Json<ApiResponse<T>>);
type Failure = Reply<()>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/karyawan", get(list_karyawan).post(create_karyawan))
        .route(
            "/karyawan/{id}",
            get(get_karyawan).put(update_karyawan).delete(delete_karyawan),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn fail(status: StatusCode, message: &str) -> Failure {
    (status, Json(ApiResponse::failure(message)))
}

fn not_found() -> Failure {
    fail(StatusCode::NOT_FOUND, "Karyawan not found")
}

fn validate(input: &KaryawanInput) -> Result<(), Failure> {
    if input.employee_id.trim().is_empty() {
        return Err(fail(StatusCode::BAD_REQUEST, "employee_id is required"));
    }
    if input.name.trim().is_empty() {
        return Err(fail(StatusCode::BAD_REQUEST, "name is required"));
    }
    Ok(())
}

fn to_row(id: i64, input: KaryawanInput) -> Karyawan {
    Karyawan {
        id,
        employee_id: input.employee_id,
        name: input.name,
        department: input.department,
        position: input.position,
        salary: input.salary,
        hire_date: input.hire_date,
        email: input.email,
        phone: input.phone,
    }
}

async fn list_karyawan(State(db): State<Db>) -> Reply<Vec<Karyawan>> {
    let store = db.read().await;
    let rows: Vec<Karyawan> = store.rows.values().cloned().collect();
    (StatusCode::OK, Json(ApiResponse::ok(rows, "Karyawan retrieved")))
}

async fn create_karyawan(
    State(db): State<Db>,
    Json(input): Json<KaryawanInput>,
) -> Result<Reply<Karyawan>, Failure> {
    validate(&input)?;
    let mut store = db.write().await;
    if store.employee_id_taken(&input.employee_id, None) {
        return Err(fail(StatusCode::CONFLICT, "employee_id already exists"));
    }
    store.last_id += 1;
    let row = to_row(store.last_id, input);
    store.rows.insert(row.id, row.clone());
    tracing::info!(id = row.id, employee_id = %row.employee_id, "karyawan created");
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(row, "Karyawan created"))))
}

async fn get_karyawan(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Reply<Karyawan>, Failure> {
    let store = db.read().await;
    let row = store.rows.get(&id).cloned().ok_or_else(not_found)?;
    Ok((StatusCode::OK, Json(ApiResponse::ok(row, "Karyawan found"))))
}

async fn update_karyawan(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<KaryawanInput>,
) -> Result<Reply<Karyawan>, Failure> {
    validate(&input)?;
    let mut store = db.write().await;
    if !store.rows.contains_key(&id) {
        return Err(not_found());
    }
    if store.employee_id_taken(&input.employee_id, Some(id)) {
        return Err(fail(StatusCode::CONFLICT, "employee_id already exists"));
    }
    let row = to_row(id, input);
    store.rows.insert(id, row.clone());
    tracing::info!(id, "karyawan updated");
    Ok((StatusCode::OK, Json(ApiResponse::ok(row, "Karyawan updated"))))
}

async fn delete_karyawan(State(db): State<Db>, Path(id): Path<i64>) -> Result<Failure, Failure> {
    let mut store = db.write().await;
    store.rows.remove(&id).ok_or_else(not_found)?;
    tracing::info!(id, "karyawan deleted");
    Ok((
        StatusCode::OK,
        Json(ApiResponse {
            success: true,
            data: None,
            message: Some("Karyawan deleted".to_string()),
        }),
    ))
}

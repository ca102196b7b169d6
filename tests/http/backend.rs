//! Axum stub of the REST backend, serving an `InMemoryDirectory` under `/api`.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use profile_directory::{ClientError, DirectoryClient, InMemoryDirectory, Profile, Role};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RenameParams {
    current_name: String,
    new_name: String,
}

#[derive(Deserialize)]
struct DeleteParams {
    username: String,
}

#[derive(Deserialize)]
struct RoleBody {
    role: Role,
}

fn status_of(err: ClientError) -> StatusCode {
    match err {
        ClientError::Rejected { status } => {
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn reply<T: serde::Serialize>(result: Result<T, ClientError>, ok: StatusCode) -> Response {
    match result {
        Ok(body) => (ok, Json(body)).into_response(),
        Err(err) => status_of(err).into_response(),
    }
}

async fn list_profiles(State(dir): State<InMemoryDirectory>) -> impl IntoResponse {
    reply(dir.list_profiles().await, StatusCode::OK)
}

async fn create_profile(
    State(dir): State<InMemoryDirectory>,
    Json(profile): Json<Profile>,
) -> impl IntoResponse {
    reply(dir.create_profile(&profile).await, StatusCode::CREATED)
}

async fn rename_profile(
    State(dir): State<InMemoryDirectory>,
    Query(params): Query<RenameParams>,
) -> impl IntoResponse {
    reply(
        dir.rename_profile(&params.current_name, &params.new_name).await,
        StatusCode::OK,
    )
}

async fn delete_profile(
    State(dir): State<InMemoryDirectory>,
    Query(params): Query<DeleteParams>,
) -> impl IntoResponse {
    reply(dir.delete_profile(&params.username).await, StatusCode::OK)
}

async fn list_interests(State(dir): State<InMemoryDirectory>) -> impl IntoResponse {
    reply(dir.list_interests().await, StatusCode::OK)
}

async fn set_role(
    State(dir): State<InMemoryDirectory>,
    Json(body): Json<RoleBody>,
) -> impl IntoResponse {
    reply(dir.set_role(body.role).await, StatusCode::OK)
}

pub fn router(dir: InMemoryDirectory) -> Router {
    Router::new()
        .route(
            "/api/profiles",
            get(list_profiles)
                .post(create_profile)
                .put(rename_profile)
                .delete(delete_profile),
        )
        .route("/api/interests", get(list_interests))
        .route("/api/admin/role", post(set_role))
        .with_state(dir)
}

/// Bind to port 0 and return the API base URL.
pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api")
}

pub async fn start(dir: InMemoryDirectory) -> String {
    serve(router(dir)).await
}

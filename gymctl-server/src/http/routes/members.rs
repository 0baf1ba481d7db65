//! Member endpoints
//!
//! POST /register, then CRUD and single-field patch under /members.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, MemberId};
use crate::http::server::AppState;
use crate::models::{FieldUpdate, Member, MemberSummary};

/// Plain acknowledgement body
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Register response
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub member_id: i64,
}

/// POST /register - create member, emergency contact and membership
async fn register_member(
    State(state): State<Arc<AppState>>,
    JsonBody(member): JsonBody<Member>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let member_id = state.members.register(&member).await?;
    tracing::info!(member_id, plan = %member.membership.plan, "member registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Member registered successfully",
            member_id,
        }),
    ))
}

/// GET /members/{id} - one member with contact and membership
async fn get_member(
    State(state): State<Arc<AppState>>,
    MemberId(id): MemberId,
) -> Result<Json<Member>, ApiError> {
    let member = state.members.get(id).await?;
    Ok(Json(member))
}

/// GET /members - summaries of every member, by id
async fn list_members(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MemberSummary>>, ApiError> {
    let members = state.members.list().await?;
    Ok(Json(members))
}

/// PUT /members/{id} - replace all member, contact and membership fields
async fn update_member(
    State(state): State<Arc<AppState>>,
    MemberId(id): MemberId,
    JsonBody(member): JsonBody<Member>,
) -> Result<Json<MessageResponse>, ApiError> {
    let updated = state.members.update(id, &member).await?;
    tracing::info!(member_id = id, rows = updated, "member updated");

    Ok(Json(MessageResponse {
        message: "Member updated successfully",
    }))
}

/// DELETE /members/{id}
async fn delete_member(
    State(state): State<Arc<AppState>>,
    MemberId(id): MemberId,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = state.members.delete(id).await?;
    tracing::info!(member_id = id, rows = deleted, "member deleted");

    Ok(Json(MessageResponse {
        message: "Member deleted successfully",
    }))
}

/// PATCH /members/{id}/field - set a single member column
async fn update_member_field(
    State(state): State<Arc<AppState>>,
    MemberId(id): MemberId,
    JsonBody(body): JsonBody<Map<String, Value>>,
) -> Result<Json<MessageResponse>, ApiError> {
    let update = FieldUpdate::from_body(body)?;
    let updated = state.members.update_field(id, &update).await?;
    tracing::debug!(member_id = id, field = update.field.as_str(), rows = updated, "member field updated");

    Ok(Json(MessageResponse {
        message: "Field updated successfully",
    }))
}

/// Member routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", post(register_member))
        .route("/members", get(list_members))
        .route(
            "/members/{id}",
            get(get_member).put(update_member).delete(delete_member),
        )
        .route("/members/{id}/field", patch(update_member_field))
}

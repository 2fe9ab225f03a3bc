use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use super::error_response::ErrorResponse;
use super::models::MessageResponse;
use super::state::AppState;
use crate::domain::members::{Member, MemberDraft, MemberId, RepositoryError};

/// List all members
pub async fn list_members(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Member>>, ErrorResponse> {
    let members = state.members.list().await.map_err(store_failure)?;
    debug!("Listing {} members", members.len());
    Ok(Json(members))
}

/// Create a new member
pub async fn create_member(
    State(state): State<Arc<AppState>>,
    request: Result<Json<MemberDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ErrorResponse> {
    let draft = validated_draft(request)?;

    let member = state.members.create(&draft).await.map_err(store_failure)?;
    info!("Member {} created with ID: {}", member.name, member.id);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Member added successfully")),
    ))
}

/// Replace all fields of a member
pub async fn update_member(
    State(state): State<Arc<AppState>>,
    id: Result<Path<MemberId>, PathRejection>,
    request: Result<Json<MemberDraft>, JsonRejection>,
) -> Result<Json<MessageResponse>, ErrorResponse> {
    let id = member_id(id)?;
    let draft = validated_draft(request)?;

    let affected = state
        .members
        .update(id, &draft)
        .await
        .map_err(store_failure)?;
    if affected == 0 {
        debug!("Update matched no member with ID: {}", id);
    } else {
        info!("Member {} updated", id);
    }

    Ok(Json(MessageResponse::new("Member updated successfully")))
}

/// Delete a member. Unknown IDs succeed without touching any row.
pub async fn delete_member(
    State(state): State<Arc<AppState>>,
    id: Result<Path<MemberId>, PathRejection>,
) -> Result<Json<MessageResponse>, ErrorResponse> {
    let id = member_id(id)?;

    let affected = state.members.delete(id).await.map_err(store_failure)?;
    if affected == 0 {
        debug!("Delete matched no member with ID: {}", id);
    } else {
        info!("Member {} deleted", id);
    }

    Ok(Json(MessageResponse::new("Member deleted successfully")))
}

fn validated_draft(
    request: Result<Json<MemberDraft>, JsonRejection>,
) -> Result<MemberDraft, ErrorResponse> {
    let Json(draft) = request.map_err(|e| {
        warn!("JSON parsing error: {:?}", e);
        ErrorResponse::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("Invalid JSON: {}", e.body_text()),
        )
    })?;

    draft.validated().map_err(|e| {
        warn!("Invalid member: {}", e);
        ErrorResponse::new(StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
    })
}

// 整数以外のIDはルートが存在しないものとして扱う
fn member_id(id: Result<Path<MemberId>, PathRejection>) -> Result<MemberId, ErrorResponse> {
    match id {
        Ok(Path(id)) => Ok(id),
        Err(e) => {
            debug!("Invalid member id: {}", e.body_text());
            Err(ErrorResponse::new(
                StatusCode::NOT_FOUND,
                "Member id must be an integer",
            ))
        }
    }
}

fn store_failure(e: RepositoryError) -> ErrorResponse {
    error!("Members store failed: {}", e);
    ErrorResponse::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

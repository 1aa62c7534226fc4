/// Users API routes
use crate::{error::Result, state::AppState};
use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::{header, HeaderMap, StatusCode},
    Json,
};
use roster_core::{ApiResponse, RosterError, User, UserId, UserInput};
use serde::Deserialize;

/// Body of create and update requests
///
/// Both fields are optional at the decoding stage so that a missing field
/// surfaces as a validation failure instead of a decoder error.
#[derive(Debug, Default, Deserialize)]
pub struct UserPayload {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserPayload {
    fn into_input(self) -> Result<UserInput> {
        UserInput::from_fields(self.name.as_deref(), self.email.as_deref()).map_err(Into::into)
    }
}

/// Raw `:id` segment, or the reason it could not be decoded
type IdSegment = std::result::Result<Path<String>, PathRejection>;

/// Decode a request body. A request without a JSON content type, or with
/// an empty body, counts as an empty payload.
fn payload(headers: &HeaderMap, body: &Bytes) -> Result<UserPayload> {
    if !has_json_content_type(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(UserPayload::default());
    }

    let Json(payload) = Json::<UserPayload>::from_bytes(body)?;
    Ok(payload)
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim();
            mime.eq_ignore_ascii_case("application/json") || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

/// Ids that do not parse, or do not even decode, match no user
fn parse_id(segment: IdSegment) -> Result<UserId> {
    segment
        .ok()
        .and_then(|Path(raw)| UserId::from_path(&raw))
        .ok_or_else(|| RosterError::NotFound.into())
}

/// GET /users
/// List all users in insertion order
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<ApiResponse<Vec<User>>>> {
    let users = app_state.users.list()?;
    Ok(Json(ApiResponse::list(users)))
}

/// GET /users/:id
/// Get a single user
pub async fn get_user(
    id: IdSegment,
    State(app_state): State<AppState>,
) -> Result<Json<ApiResponse<User>>> {
    let user = app_state.users.get(parse_id(id)?)?;
    Ok(Json(ApiResponse::ok(user)))
}

/// POST /users
/// Create a new user
pub async fn create_user(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<ApiResponse<User>>)> {
    let input = payload(&headers, &body)?.into_input()?;
    let user = app_state.users.create(input)?;

    tracing::info!(id = %user.id, "User created");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("User created successfully", user)),
    ))
}

/// PUT /users/:id
/// Replace a user's name and email
pub async fn update_user(
    id: IdSegment,
    State(app_state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ApiResponse<User>>> {
    let input = payload(&headers, &body)?.into_input()?;
    let user = app_state.users.update(parse_id(id)?, input)?;

    tracing::info!(id = %user.id, "User updated");
    Ok(Json(ApiResponse::with_message(
        "User updated successfully",
        user,
    )))
}

/// DELETE /users/:id
/// Delete a user
pub async fn delete_user(
    id: IdSegment,
    State(app_state): State<AppState>,
) -> Result<Json<ApiResponse<User>>> {
    let user = app_state.users.delete(parse_id(id)?)?;

    tracing::info!(id = %user.id, "User deleted");
    Ok(Json(ApiResponse::with_message(
        "User deleted successfully",
        user,
    )))
}

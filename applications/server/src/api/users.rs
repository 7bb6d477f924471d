/// User record API routes
use crate::{
    error::{Result, ServerError},
    services::export::{EXPORT_FILENAME, XLSX_CONTENT_TYPE},
    state::AppState,
};
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use kiosk_core::NewUser;
use serde_json::{Map, Value};

/// POST /api/users
///
/// Accepts `{name, email}`. Fields are only checked for presence: absent
/// fields, an empty body, or a body that is not declared as JSON are stored as
/// absent values. Numbers and booleans are stored as text. A JSON body that
/// does not parse is rejected with 400.
pub async fn create_user(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());
    let user = parse_new_user(content_type, &body)?;
    tracing::info!(name = ?user.name, email = ?user.email, "Received request to add user");

    let id = app_state.store.create_user(user).await?;
    tracing::info!(id, "User added to database");

    Ok(StatusCode::OK)
}

/// GET /api/users/export
///
/// Sends every record as an XLSX attachment. A store failure is reported
/// before any document is built.
pub async fn export_users(State(app_state): State<AppState>) -> Result<Response> {
    tracing::info!("Received request to export users");

    let users = app_state.store.list_users().await?;
    tracing::debug!(count = users.len(), "Fetched users from database");

    let document = app_state.exporter.build_document(&users)?;
    tracing::info!(
        rows = users.len(),
        bytes = document.len(),
        "Spreadsheet written and sent to client"
    );

    let disposition = format!("attachment; filename={}", EXPORT_FILENAME);

    Ok((
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE),
            (header::CONTENT_DISPOSITION, disposition.as_str()),
        ],
        document,
    )
        .into_response())
}

fn parse_new_user(content_type: Option<&str>, body: &[u8]) -> Result<NewUser> {
    if !content_type.is_some_and(is_json) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(NewUser::default());
    }

    let value: Value =
        serde_json::from_slice(body).map_err(|e| ServerError::BadRequest(e.to_string()))?;

    match value {
        Value::Object(fields) => Ok(NewUser {
            name: field_text(&fields, "name")?,
            email: field_text(&fields, "email")?,
        }),
        Value::Array(_) => Ok(NewUser::default()),
        _ => Err(ServerError::BadRequest(
            "request body must be a JSON object".to_string(),
        )),
    }
}

fn is_json(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || essence.ends_with("+json")
}

/// Scalars become their stored text; booleans are stored as 1 or 0
fn field_text(fields: &Map<String, Value>, key: &str) -> Result<Option<String>> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(Value::Bool(flag)) => Ok(Some(u8::from(*flag).to_string())),
        Some(_) => Err(ServerError::BadRequest(format!(
            "`{}` must be a string, number, or boolean",
            key
        ))),
    }
}

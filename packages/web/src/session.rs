//! Session-backed authentication and one-shot flash messages.

use api::auth::{SessionUser, SESSION_USER_KEY};
use axum::{
    extract::FromRequestParts,
    http::{header::LOCATION, request::Parts, StatusCode},
    response::{IntoResponse, Response},
};
use store::User;
use tower_sessions::Session;
use tracing::warn;

use crate::app::AppState;
use crate::error::AppError;

/// 301 to `to`. Used by the auth guard and `/`.
pub fn moved_permanently(to: &'static str) -> Response {
    (StatusCode::MOVED_PERMANENTLY, [(LOCATION, to)]).into_response()
}

/// The signed-in user, loaded fresh from the store.
///
/// Rejects with a 301 to `/login` when the session carries no identity or the
/// user no longer exists.
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let identity = session
            .get::<SessionUser>(SESSION_USER_KEY)
            .await
            .map_err(|e| AppError::from(e).into_response())?;
        let Some(identity) = identity else {
            return Err(moved_permanently("/login"));
        };
        if identity.username.is_empty() {
            return Err(moved_permanently("/login"));
        }

        match state.store.find_user(&identity.username).await {
            Ok(Some(user)) => Ok(CurrentUser(user)),
            Ok(None) => {
                warn!("session refers to unknown user {:?}", identity.username);
                session
                    .flush()
                    .await
                    .map_err(|e| AppError::from(e).into_response())?;
                Err(moved_permanently("/login"))
            }
            Err(e) => Err(AppError::from(e).into_response()),
        }
    }
}

/// Store `message` for the next render of the page that reads `key`.
pub async fn set_flash(session: &Session, key: &str, message: String) -> Result<(), AppError> {
    session.insert(key, message).await?;
    Ok(())
}

/// Take the pending message for `key`, or an empty string.
pub async fn take_flash(session: &Session, key: &str) -> Result<String, AppError> {
    Ok(session.remove::<String>(key).await?.unwrap_or_default())
}

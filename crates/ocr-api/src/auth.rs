//! Session and role middleware.
//!
//! Requests carry `Authorization: Bearer <token>` where the token is the
//! UUID issued at login. The session layer resolves it to a `User` and
//! stashes both in request extensions; the role layers then gate whole
//! route groups. A missing or dead token is 401, a live session with the
//! wrong role is 403.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use ocr_types::{User, UserRole};

use crate::error::ApiError;
use crate::AppState;

/// The raw session token, kept alongside the resolved user so `logout`
/// can revoke it.
#[derive(Debug, Clone, Copy)]
pub struct SessionToken(pub Uuid);

fn bearer_token(req: &Request) -> Option<Uuid> {
    let header = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?;
    Uuid::parse_str(token.trim()).ok()
}

/// Resolve the bearer token to a logged-in user.
pub async fn require_session(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(&req).ok_or(ApiError::Unauthenticated)?;
    let user = state
        .store
        .current_user(&token)
        .ok_or(ApiError::Unauthenticated)?;
    req.extensions_mut().insert(SessionToken(token));
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

async fn require_role(role: UserRole, req: Request, next: Next) -> Result<Response, ApiError> {
    let user = req
        .extensions()
        .get::<User>()
        .ok_or(ApiError::Unauthenticated)?;
    if user.role != role {
        return Err(ApiError::Forbidden(format!(
            "requires the {role} role"
        )));
    }
    Ok(next.run(req).await)
}

pub async fn require_company_user(req: Request, next: Next) -> Result<Response, ApiError> {
    require_role(UserRole::User, req, next).await
}

pub async fn require_staff(req: Request, next: Next) -> Result<Response, ApiError> {
    require_role(UserRole::Staff, req, next).await
}

pub async fn require_admin(req: Request, next: Next) -> Result<Response, ApiError> {
    require_role(UserRole::Admin, req, next).await
}

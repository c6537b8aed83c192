//! Gateway-injected identity header extractors.

use axum::extract::FromRequestParts;
use http::StatusCode;
use http::request::Parts;
use uuid::Uuid;

/// Authenticated user identity injected by the gateway via the
/// `x-platter-user-id` header.
///
/// Rejects with 401 if the header is absent or cannot be parsed as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Uuid,
}

fn parse_user_id(parts: &Parts) -> Option<Uuid> {
    parts
        .headers
        .get("x-platter-user-id")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<Uuid>().ok())
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // Extract values synchronously and return a 'static async block to avoid
    // the E0195 lifetime-capture mismatch on Rust 1.82+.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let user_id = parse_user_id(parts);
        async move {
            let user_id = user_id.ok_or(StatusCode::UNAUTHORIZED)?;
            Ok(Self { user_id })
        }
    }
}

/// Optional identity for endpoints that allow anonymous reads.
///
/// Never rejects: a missing or malformed header yields `MaybeIdentity(None)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaybeIdentity(pub Option<Identity>);

impl MaybeIdentity {
    pub fn user_id(&self) -> Option<Uuid> {
        self.0.map(|i| i.user_id)
    }
}

impl<S> FromRequestParts<S> for MaybeIdentity
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let user_id = parse_user_id(parts);
        async move { Ok(Self(user_id.map(|user_id| Identity { user_id }))) }
    }
}

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::AuthError;

/// User re-authenticated from the remember-me cookie on this request.
///
/// Inserted into the request extensions by
/// [`crate::middleware::remember_me_middleware`] on a success outcome.
/// Extraction rejects with a 401 response when no remembered user is
/// present; use [`OptionalRememberedUser`] in handlers that also serve
/// logged-out requests.
#[derive(Debug, Clone)]
pub struct RememberedUser<U, I = ()> {
    pub user: U,
    pub info: Option<I>,
}

/// Non-rejecting variant of [`RememberedUser`].
#[derive(Debug, Clone)]
pub struct OptionalRememberedUser<U, I = ()>(pub Option<RememberedUser<U, I>>);

impl<S, U, I> FromRequestParts<S> for RememberedUser<U, I>
where
    S: Send + Sync,
    U: Clone + Send + Sync + 'static,
    I: Clone + Send + Sync + 'static,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RememberedUser<U, I>>()
            .cloned()
            .ok_or(AuthError::NotRemembered)
    }
}

impl<S, U, I> FromRequestParts<S> for OptionalRememberedUser<U, I>
where
    S: Send + Sync,
    U: Clone + Send + Sync + 'static,
    I: Clone + Send + Sync + 'static,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        match RememberedUser::<U, I>::from_request_parts(parts, state).await {
            Ok(remembered) => Ok(OptionalRememberedUser(Some(remembered))),
            Err(_) => Ok(OptionalRememberedUser(None)),
        }
    }
}

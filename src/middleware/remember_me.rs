use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    extractors::RememberedUser,
    strategy::{AuthOutcome, Authenticated, Strategy},
};

/// Shared state for [`remember_me_middleware`].
pub struct RememberMeState<S> {
    pub strategy: Arc<S>,
}

impl<S> RememberMeState<S> {
    pub fn new(strategy: S) -> Self {
        Self {
            strategy: Arc::new(strategy),
        }
    }
}

impl<S> Clone for RememberMeState<S> {
    fn clone(&self) -> Self {
        Self {
            strategy: Arc::clone(&self.strategy),
        }
    }
}

/// Axum middleware running the remember-me strategy once per request.
///
/// Mount with `axum::middleware::from_fn_with_state`. On success the
/// resolved user is inserted into the request extensions as
/// [`RememberedUser`] together with the [`Authenticated`] marker, and the
/// rotated cookie travels out on the response. A pass leaves the request
/// untouched. A backend error short-circuits with the strategy's error
/// response; the handler never runs.
pub async fn remember_me_middleware<S>(
    State(state): State<RememberMeState<S>>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response
where
    S: Strategy,
    S::User: Clone,
    S::Info: Clone,
{
    let (parts, body) = request.into_parts();
    let (jar, outcome) = state.strategy.authenticate(&parts, jar).await;
    let mut request = Request::from_parts(parts, body);

    match outcome {
        AuthOutcome::Success { user, info } => {
            request.extensions_mut().insert(Authenticated);
            request.extensions_mut().insert(RememberedUser { user, info });
        }
        AuthOutcome::Pass | AuthOutcome::Fail => {}
        AuthOutcome::Error(err) => return (jar, err.into_response()).into_response(),
    }

    // Returning the jar alongside the response applies any cookie the
    // strategy set or cleared.
    (jar, next.run(request).await).into_response()
}

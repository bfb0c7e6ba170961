use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use crate::{
    config::{CookieOptions, CookieOverrides},
    error::{AuthError, ConfigError},
    verify::{TokenIssuer, TokenVerifier, Verified},
};

/// Default name of the remember-me cookie.
pub const DEFAULT_COOKIE_KEY: &str = "remember_me";

/// Marker extension recording that the request is already authenticated.
///
/// Session middleware or an earlier strategy inserts this into the request
/// extensions; the remember-me strategy stands down when it is present. The
/// remember-me cookie is a fallback for unauthenticated requests only, so
/// this check runs before the cookie is ever consulted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Authenticated;

/// Outcome of one `authenticate` invocation, the host framework's signal set.
///
/// Exactly one outcome is produced per invocation. The remember-me strategy
/// itself never yields `Fail`: a cookie that does not check out degrades to
/// `Pass` rather than denying the request.
#[derive(Debug)]
pub enum AuthOutcome<U, I> {
    /// The cookie resolved to a user and a rotated token was set.
    Success { user: U, info: Option<I> },
    /// Authentication was attempted and refused. Unused by this strategy.
    Fail,
    /// No opinion; defer to other strategies or render logged-out state.
    Pass,
    /// A backend failure from verify or issue; not retried.
    Error(AuthError),
}

impl<U, I> AuthOutcome<U, I> {
    pub fn is_pass(&self) -> bool {
        matches!(self, AuthOutcome::Pass)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AuthOutcome::Success { .. })
    }
}

/// A pluggable authentication strategy.
///
/// Strategies read the request head and the incoming cookie jar and produce
/// a single [`AuthOutcome`]. The jar is taken and returned by value so cookie
/// mutations flow to the response explicitly, instead of the strategy
/// reaching from the request to the response through a back-reference.
pub trait Strategy: Send + Sync {
    type User: Send + Sync + 'static;
    type Info: Send + Sync + 'static;

    /// Name the strategy is registered under.
    fn name(&self) -> &'static str;

    /// Authenticate one request.
    fn authenticate(
        &self,
        parts: &Parts,
        jar: CookieJar,
    ) -> impl std::future::Future<Output = (CookieJar, AuthOutcome<Self::User, Self::Info>)> + Send;
}

/// Remember-me cookie authentication strategy.
///
/// Composes two caller-supplied async operations: a [`TokenVerifier`] that
/// resolves the cookie's token to a user, and a [`TokenIssuer`] that mints
/// the rotating replacement token. All fields are immutable after
/// construction, so one strategy value is safely shared across concurrent
/// requests.
pub struct RememberMeStrategy<V, I> {
    key: String,
    options: CookieOptions,
    verifier: V,
    issuer: I,
}

/// Builder for [`RememberMeStrategy`].
///
/// `build` fails with a [`ConfigError`] if the verifier or issuer is
/// missing; that check runs before cookie overrides are merged.
pub struct RememberMeBuilder<V, I> {
    key: Option<String>,
    cookie: CookieOverrides,
    verifier: Option<V>,
    issuer: Option<I>,
}

impl<V, I> Default for RememberMeBuilder<V, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, I> RememberMeBuilder<V, I> {
    pub fn new() -> Self {
        Self {
            key: None,
            cookie: CookieOverrides::default(),
            verifier: None,
            issuer: None,
        }
    }

    /// Cookie name to read and write. Defaults to `"remember_me"`.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Adjustments applied over the default cookie attributes.
    pub fn cookie(mut self, cookie: CookieOverrides) -> Self {
        self.cookie = cookie;
        self
    }

    pub fn verifier(mut self, verifier: V) -> Self {
        self.verifier = Some(verifier);
        self
    }

    pub fn issuer(mut self, issuer: I) -> Self {
        self.issuer = Some(issuer);
        self
    }

    pub fn build(self) -> std::result::Result<RememberMeStrategy<V, I>, ConfigError> {
        let verifier = self.verifier.ok_or(ConfigError::MissingVerifier)?;
        let issuer = self.issuer.ok_or(ConfigError::MissingIssuer)?;

        Ok(RememberMeStrategy {
            key: self.key.unwrap_or_else(|| DEFAULT_COOKIE_KEY.to_string()),
            options: CookieOptions::default().merged(self.cookie),
            verifier,
            issuer,
        })
    }
}

impl<V, I> RememberMeStrategy<V, I> {
    pub fn builder() -> RememberMeBuilder<V, I> {
        RememberMeBuilder::new()
    }

    /// Construct with the default key and cookie attributes.
    pub fn new(verifier: V, issuer: I) -> Self {
        Self {
            key: DEFAULT_COOKIE_KEY.to_string(),
            options: CookieOptions::default(),
            verifier,
            issuer,
        }
    }

    /// The configured cookie name.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The merged cookie attributes.
    pub fn cookie_options(&self) -> &CookieOptions {
        &self.options
    }
}

impl<V, I> Strategy for RememberMeStrategy<V, I>
where
    V: TokenVerifier,
    I: TokenIssuer<V::User>,
{
    type User = V::User;
    type Info = V::Info;

    fn name(&self) -> &'static str {
        "remember-me"
    }

    async fn authenticate(
        &self,
        parts: &Parts,
        jar: CookieJar,
    ) -> (CookieJar, AuthOutcome<Self::User, Self::Info>) {
        // The remember-me cookie is only consumed if the request is not
        // authenticated, in preference to the session, which is typically
        // established at the same time the remember-me cookie is issued.
        if parts.extensions.get::<Authenticated>().is_some() {
            return (jar, AuthOutcome::Pass);
        }

        // The cookie is a convenience, so its absence is not a failure: the
        // application should render a logged-out state rather than deny the
        // request.
        let Some(token) = jar.get(&self.key).map(|c| c.value().to_string()) else {
            return (jar, AuthOutcome::Pass);
        };

        let verified = match self.verifier.verify(&token).await {
            Ok(verified) => verified,
            Err(err) => return (jar, AuthOutcome::Error(AuthError::Verification(err))),
        };

        let Some(Verified { user, info }) = verified else {
            // The cookie did not check out. Clear it and fall through
            // unauthenticated instead of denying the request. An invalid
            // submission here may indicate theft of the cookie; detecting
            // that is up to the application's token encoding.
            let jar = jar.remove(self.options.removal_cookie(&self.key));
            return (jar, AuthOutcome::Pass);
        };

        // The token was valid and consumed; the verifier is expected to have
        // invalidated it. Rotate: mint a replacement and set it as the new
        // cookie value.
        let new_token = match self.issuer.issue(&user).await {
            Ok(token) => token,
            Err(err) => return (jar, AuthOutcome::Error(AuthError::Issuance(err))),
        };

        let jar = jar.add(self.options.build_cookie(&self.key, new_token));
        (jar, AuthOutcome::Success { user, info })
    }
}

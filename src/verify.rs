use crate::error::BoxError;

/// A user resolved from a remember-me token, plus any auxiliary info the
/// application wants forwarded on success. Both values are opaque to this
/// crate and pass through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Verified<U, I> {
    pub user: U,
    pub info: Option<I>,
}

impl<U, I> Verified<U, I> {
    pub fn new(user: U) -> Self {
        Self { user, info: None }
    }

    pub fn with_info(mut self, info: I) -> Self {
        self.info = Some(info);
        self
    }
}

/// Trait for resolving a remember-me token to a user.
///
/// The token is an opaque string; this crate assumes nothing about its
/// structure. Return `Ok(None)` for a token that does not resolve to a
/// user (stale, revoked, forged): that is not an error, the strategy clears
/// the cookie and falls through unauthenticated. Reserve `Err` for genuine
/// backend failures.
///
/// Because the just-used token should be invalidated on success, a typical
/// implementation consumes the token from storage as it looks it up.
/// Note that a token that fails to resolve may indicate cookie theft;
/// detecting that is up to the application's token encoding, not this crate.
///
/// # Example Implementation
///
/// ```rust
/// use std::collections::HashMap;
/// use std::sync::Arc;
/// use tokio::sync::RwLock;
/// use axum_remember_me::{BoxError, TokenVerifier, Verified};
///
/// #[derive(Clone)]
/// struct User {
///     id: String,
/// }
///
/// struct TokenStore {
///     tokens: Arc<RwLock<HashMap<String, User>>>,
/// }
///
/// impl TokenVerifier for TokenStore {
///     type User = User;
///     type Info = ();
///
///     async fn verify(
///         &self,
///         token: &str,
///     ) -> Result<Option<Verified<User, ()>>, BoxError> {
///         // Consume the token so it cannot be replayed.
///         let user = self.tokens.write().await.remove(token);
///         Ok(user.map(Verified::new))
///     }
/// }
/// ```
pub trait TokenVerifier: Send + Sync {
    type User: Send + Sync + 'static;
    type Info: Send + Sync + 'static;

    /// Resolve `token` to a user, or `None` if the token is not valid.
    fn verify(
        &self,
        token: &str,
    ) -> impl std::future::Future<Output = std::result::Result<Option<Verified<Self::User, Self::Info>>, BoxError>>
    + Send;
}

/// Trait for minting a fresh remember-me token for a user.
///
/// Called once per successful verification so the cookie rotates on every
/// use, limiting the replay value of a stolen token. The implementation is
/// expected to persist the new token so a later [`TokenVerifier::verify`]
/// call can resolve it.
///
/// # Example Implementation
///
/// ```rust
/// use std::collections::HashMap;
/// use std::sync::Arc;
/// use tokio::sync::RwLock;
/// use axum_remember_me::{BoxError, TokenIssuer};
///
/// #[derive(Clone)]
/// struct User {
///     id: String,
/// }
///
/// struct TokenStore {
///     tokens: Arc<RwLock<HashMap<String, User>>>,
/// }
///
/// impl TokenIssuer<User> for TokenStore {
///     async fn issue(&self, user: &User) -> Result<String, BoxError> {
///         let token = format!("{}-{}", user.id, rand_suffix());
///         self.tokens
///             .write()
///             .await
///             .insert(token.clone(), user.clone());
///         Ok(token)
///     }
/// }
///
/// fn rand_suffix() -> u128 {
///     std::time::SystemTime::now()
///         .duration_since(std::time::UNIX_EPOCH)
///         .map(|d| d.as_nanos())
///         .unwrap_or_default()
/// }
/// ```
pub trait TokenIssuer<U>: Send + Sync {
    /// Mint a new token for `user`.
    fn issue(
        &self,
        user: &U,
    ) -> impl std::future::Future<Output = std::result::Result<String, BoxError>> + Send;
}

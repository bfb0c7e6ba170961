use std::{collections::HashMap, sync::Arc};

use axum::http::Request;
use axum_extra::extract::cookie::{Cookie, CookieJar};
use axum_remember_me::prelude::*;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct User {
    id: String,
}

/// In-memory token store acting as both verifier and issuer. Tokens are
/// consumed on verification and replaced on issuance, so every successful
/// use rotates the cookie value.
#[derive(Clone, Default)]
struct TokenStore {
    tokens: Arc<RwLock<HashMap<String, User>>>,
}

impl TokenVerifier for TokenStore {
    type User = User;
    type Info = ();

    async fn verify(&self, token: &str) -> Result<Option<Verified<User, ()>>, BoxError> {
        let user = self.tokens.write().await.remove(token);
        Ok(user.map(Verified::new))
    }
}

impl TokenIssuer<User> for TokenStore {
    async fn issue(&self, user: &User) -> Result<String, BoxError> {
        let token = format!("token-for-{}-{}", user.id, self.tokens.read().await.len());
        self.tokens
            .write()
            .await
            .insert(token.clone(), user.clone());
        Ok(token)
    }
}

#[tokio::main]
async fn main() {
    let store = TokenStore::default();
    store.tokens.write().await.insert(
        "seed-token".to_string(),
        User {
            id: "alice".to_string(),
        },
    );

    let strategy = RememberMeStrategy::builder()
        .verifier(store.clone())
        .issuer(store.clone())
        .build()
        .expect("verifier and issuer are both set");

    let (parts, _) = Request::builder().uri("/").body(()).unwrap().into_parts();

    // First visit with the seed cookie: re-authenticates and rotates.
    let jar = CookieJar::new().add(Cookie::new("remember_me", "seed-token"));
    let (jar, outcome) = strategy.authenticate(&parts, jar).await;
    match outcome {
        AuthOutcome::Success { user, .. } => {
            println!("remembered {}", user.id);
            println!(
                "cookie rotated to {:?}",
                jar.get("remember_me").map(|c| c.value().to_string())
            );
        }
        other => println!("unexpected outcome: {other:?}"),
    }

    // Replaying the consumed token: cookie is cleared, request passes
    // through unauthenticated.
    let jar = CookieJar::new().add(Cookie::new("remember_me", "seed-token"));
    let (jar, outcome) = strategy.authenticate(&parts, jar).await;
    println!(
        "replay outcome: pass={}, cookie now {:?}",
        outcome.is_pass(),
        jar.get("remember_me").map(|c| c.value().to_string())
    );
}

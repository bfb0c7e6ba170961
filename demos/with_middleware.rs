use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use axum_extra::extract::cookie::CookieJar;
use axum_remember_me::prelude::*;
use time::Duration;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct User {
    id: String,
    email: String,
}

#[derive(Clone, Default)]
struct TokenStore {
    tokens: Arc<RwLock<HashMap<String, User>>>,
    minted: Arc<AtomicU64>,
}

impl TokenStore {
    async fn mint(&self, user: &User) -> String {
        let serial = self.minted.fetch_add(1, Ordering::SeqCst);
        let token = format!("{}:{serial}", user.id);
        self.tokens
            .write()
            .await
            .insert(token.clone(), user.clone());
        token
    }
}

impl TokenVerifier for TokenStore {
    type User = User;
    type Info = ();

    async fn verify(&self, token: &str) -> Result<Option<Verified<User, ()>>, BoxError> {
        // Consume the token so it cannot be replayed.
        let user = self.tokens.write().await.remove(token);
        Ok(user.map(Verified::new))
    }
}

impl TokenIssuer<User> for TokenStore {
    async fn issue(&self, user: &User) -> Result<String, BoxError> {
        Ok(self.mint(user).await)
    }
}

type AppStrategy = RememberMeStrategy<TokenStore, TokenStore>;

async fn login(
    axum::extract::State(store): axum::extract::State<TokenStore>,
    jar: CookieJar,
) -> (CookieJar, &'static str) {
    // A real application verifies credentials here, then issues the initial
    // remember-me token alongside its session.
    let user = User {
        id: "alice".to_string(),
        email: "alice@example.com".to_string(),
    };
    let token = store.mint(&user).await;
    let cookie = CookieOptions::default()
        .merged(CookieOverrides::default().max_age(Duration::days(30)))
        .build_cookie("remember_me", token);
    (jar.add(cookie), "logged in\n")
}

async fn profile(RememberedUser { user, .. }: RememberedUser<User, ()>) -> String {
    format!("signed in as {} <{}>\n", user.id, user.email)
}

async fn landing(OptionalRememberedUser(remembered): OptionalRememberedUser<User, ()>) -> String {
    match remembered {
        Some(RememberedUser { user, .. }) => format!("welcome back, {}\n", user.id),
        None => "hello, stranger\n".to_string(),
    }
}

#[tokio::main]
async fn main() {
    let store = TokenStore::default();

    let strategy = RememberMeStrategy::builder()
        .cookie(CookieOverrides::default().max_age(Duration::days(30)))
        .verifier(store.clone())
        .issuer(store.clone())
        .build()
        .expect("verifier and issuer are both set");

    let app = Router::new()
        .route("/", get(landing))
        .route("/profile", get(profile))
        .route("/login", post(login))
        .layer(from_fn_with_state(
            RememberMeState::new(strategy),
            remember_me_middleware::<AppStrategy>,
        ))
        .with_state(store);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000")
        .await
        .unwrap();
    println!("listening on http://127.0.0.1:3000");
    axum::serve(listener, app).await.unwrap();
}

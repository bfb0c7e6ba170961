pub mod config;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod strategy;
pub mod verify;

pub use config::{CookieOptions, CookieOverride, CookieOverrides};
pub use error::{AuthError, BoxError, ConfigError, Result};
pub use extractors::{OptionalRememberedUser, RememberedUser};
pub use middleware::{RememberMeState, remember_me_middleware};
pub use strategy::{
    AuthOutcome, Authenticated, DEFAULT_COOKIE_KEY, RememberMeBuilder, RememberMeStrategy, Strategy,
};
pub use verify::{TokenIssuer, TokenVerifier, Verified};

pub mod prelude {
    pub use crate::{
        config::{CookieOptions, CookieOverride, CookieOverrides},
        error::{AuthError, BoxError, ConfigError, Result},
        extractors::{OptionalRememberedUser, RememberedUser},
        middleware::{RememberMeState, remember_me_middleware},
        strategy::{AuthOutcome, Authenticated, RememberMeBuilder, RememberMeStrategy, Strategy},
        verify::{TokenIssuer, TokenVerifier, Verified},
    };
}

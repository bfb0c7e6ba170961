use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

/// Attributes applied to the remember-me cookie.
///
/// A `None` field means the attribute is omitted from the emitted cookie
/// entirely, it does not mean "use a default". Defaults are supplied by
/// [`CookieOptions::default`] and callers adjust them through
/// [`CookieOverrides`].
#[derive(Debug, Clone, PartialEq)]
pub struct CookieOptions {
    pub path: Option<String>,
    pub http_only: Option<bool>,
    pub max_age: Option<Duration>,
    pub secure: Option<bool>,
    pub domain: Option<String>,
    pub same_site: Option<SameSite>,
}

impl Default for CookieOptions {
    /// `path=/`, `HttpOnly`, `Max-Age` of seven days. Everything else unset.
    fn default() -> Self {
        Self {
            path: Some("/".to_string()),
            http_only: Some(true),
            max_age: Some(Duration::days(7)),
            secure: None,
            domain: None,
            same_site: None,
        }
    }
}

/// Per-attribute override applied over the defaults.
///
/// `Unset` removes an attribute that the defaults would otherwise emit,
/// which is distinct from `Keep` (leave the default alone).
#[derive(Debug, Clone, PartialEq)]
pub enum CookieOverride<T> {
    Keep,
    Set(T),
    Unset,
}

impl<T> Default for CookieOverride<T> {
    fn default() -> Self {
        CookieOverride::Keep
    }
}

impl<T> CookieOverride<T> {
    fn apply(self, slot: &mut Option<T>) {
        match self {
            CookieOverride::Keep => {}
            CookieOverride::Set(value) => *slot = Some(value),
            CookieOverride::Unset => *slot = None,
        }
    }
}

/// Caller-supplied adjustments to the default cookie attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CookieOverrides {
    pub path: CookieOverride<String>,
    pub http_only: CookieOverride<bool>,
    pub max_age: CookieOverride<Duration>,
    pub secure: CookieOverride<bool>,
    pub domain: CookieOverride<String>,
    pub same_site: CookieOverride<SameSite>,
}

impl CookieOverrides {
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = CookieOverride::Set(path.into());
        self
    }

    pub fn http_only(mut self, http_only: bool) -> Self {
        self.http_only = CookieOverride::Set(http_only);
        self
    }

    pub fn max_age(mut self, max_age: Duration) -> Self {
        self.max_age = CookieOverride::Set(max_age);
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = CookieOverride::Set(secure);
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = CookieOverride::Set(domain.into());
        self
    }

    pub fn same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = CookieOverride::Set(same_site);
        self
    }
}

impl CookieOptions {
    /// Apply `overrides` over these options, field by field.
    pub fn merged(mut self, overrides: CookieOverrides) -> Self {
        overrides.path.apply(&mut self.path);
        overrides.http_only.apply(&mut self.http_only);
        overrides.max_age.apply(&mut self.max_age);
        overrides.secure.apply(&mut self.secure);
        overrides.domain.apply(&mut self.domain);
        overrides.same_site.apply(&mut self.same_site);
        self
    }

    /// Build the outgoing remember-me cookie with these attributes.
    pub fn build_cookie(&self, key: &str, value: String) -> Cookie<'static> {
        let mut builder = Cookie::build((key.to_string(), value));
        if let Some(path) = &self.path {
            builder = builder.path(path.clone());
        }
        if let Some(http_only) = self.http_only {
            builder = builder.http_only(http_only);
        }
        if let Some(max_age) = self.max_age {
            builder = builder.max_age(max_age);
        }
        if let Some(secure) = self.secure {
            builder = builder.secure(secure);
        }
        if let Some(domain) = &self.domain {
            builder = builder.domain(domain.clone());
        }
        if let Some(same_site) = self.same_site {
            builder = builder.same_site(same_site);
        }
        builder.build()
    }

    /// Build a cookie naming `key` on the same path/domain, suitable for
    /// passing to `CookieJar::remove` so the client drops the stale cookie.
    pub fn removal_cookie(&self, key: &str) -> Cookie<'static> {
        let mut builder = Cookie::build(key.to_string());
        if let Some(path) = &self.path {
            builder = builder.path(path.clone());
        }
        if let Some(domain) = &self.domain {
            builder = builder.domain(domain.clone());
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let opts = CookieOptions::default();
        assert_eq!(opts.path.as_deref(), Some("/"));
        assert_eq!(opts.http_only, Some(true));
        assert_eq!(opts.max_age, Some(Duration::days(7)));
        assert_eq!(opts.secure, None);
        assert_eq!(opts.domain, None);
        assert_eq!(opts.same_site, None);
    }

    #[test]
    fn overriding_one_field_preserves_the_rest() {
        let opts =
            CookieOptions::default().merged(CookieOverrides::default().max_age(Duration::days(30)));
        assert_eq!(opts.max_age, Some(Duration::days(30)));
        assert_eq!(opts.path.as_deref(), Some("/"));
        assert_eq!(opts.http_only, Some(true));
    }

    #[test]
    fn unset_removes_an_attribute_instead_of_overwriting_it() {
        let overrides = CookieOverrides {
            secure: CookieOverride::Set(true),
            max_age: CookieOverride::Unset,
            ..Default::default()
        };
        let opts = CookieOptions::default().merged(overrides);
        assert_eq!(opts.secure, Some(true));
        assert_eq!(opts.max_age, None);
        // Untouched fields keep their defaults.
        assert_eq!(opts.path.as_deref(), Some("/"));
        assert_eq!(opts.http_only, Some(true));
    }

    #[test]
    fn build_cookie_emits_configured_attributes() {
        let opts = CookieOptions::default().merged(
            CookieOverrides::default()
                .secure(true)
                .same_site(SameSite::Lax),
        );
        let cookie = opts.build_cookie("remember_me", "token-value".to_string());
        assert_eq!(cookie.name(), "remember_me");
        assert_eq!(cookie.value(), "token-value");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.max_age(), Some(Duration::days(7)));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    }

    #[test]
    fn unset_attributes_are_absent_from_the_cookie() {
        let overrides = CookieOverrides {
            max_age: CookieOverride::Unset,
            http_only: CookieOverride::Unset,
            ..Default::default()
        };
        let opts = CookieOptions::default().merged(overrides);
        let cookie = opts.build_cookie("remember_me", "token-value".to_string());
        assert_eq!(cookie.max_age(), None);
        assert_eq!(cookie.http_only(), None);
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn removal_cookie_carries_path_and_domain() {
        let opts =
            CookieOptions::default().merged(CookieOverrides::default().domain("example.com"));
        let cookie = opts.removal_cookie("remember_me");
        assert_eq!(cookie.name(), "remember_me");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.domain(), Some("example.com"));
    }
}

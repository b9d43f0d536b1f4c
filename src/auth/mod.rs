//! Sign-out delegation to the identity provider.
//!
//! The sidebar never talks to the provider's API itself. It hands a
//! [`SignOutRequest`] to whatever [`IdentityProvider`] the host put in
//! context and moves on.

use async_trait::async_trait;
use std::rc::Rc;
use thiserror::Error;

/// Where users land after signing out.
pub const SIGN_OUT_REDIRECT: &str = "/";

/// Same-origin endpoint that ends the session.
pub const SIGN_OUT_ENDPOINT: &str = "/auth/sign-out";

#[derive(Debug, Error, PartialEq)]
pub enum AuthError {
    #[error("redirect target must be a same-origin path, got {0:?}")]
    InvalidRedirect(String),
    #[error("navigation failed: {0}")]
    Navigation(String),
    #[error("sign-out is only available in the browser")]
    Unsupported,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignOutRequest {
    pub redirect_url: String,
}

impl SignOutRequest {
    /// Sign out and return to the application root.
    pub fn to_root() -> Self {
        Self {
            redirect_url: SIGN_OUT_REDIRECT.to_string(),
        }
    }
}

/// External identity provider.
#[async_trait(?Send)]
pub trait IdentityProvider {
    async fn sign_out(&self, request: SignOutRequest) -> Result<(), AuthError>;
}

/// Sign the current user out, redirecting to `/` afterwards.
pub async fn sign_out(provider: &dyn IdentityProvider) -> Result<(), AuthError> {
    provider.sign_out(SignOutRequest::to_root()).await
}

/// Returns true for absolute paths on this origin (`/x`, not `//host` or `http:`).
pub fn is_local_redirect(target: &str) -> bool {
    target.starts_with('/') && !target.starts_with("//") && !target.contains('\\')
}

/// Provider backed by a hosted sign-out endpoint.
///
/// In the browser it navigates to `{sign_out_url}?redirect_url=...`; the
/// endpoint ends the session and bounces to the redirect target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostedSignOut {
    sign_out_url: String,
}

impl HostedSignOut {
    pub fn new(sign_out_url: impl Into<String>) -> Self {
        Self {
            sign_out_url: sign_out_url.into(),
        }
    }

    /// Full URL the browser is sent to for `request`.
    pub fn location_for(&self, request: &SignOutRequest) -> Result<String, AuthError> {
        if !is_local_redirect(&request.redirect_url) {
            return Err(AuthError::InvalidRedirect(request.redirect_url.clone()));
        }
        let separator = if self.sign_out_url.contains('?') {
            '&'
        } else {
            '?'
        };
        Ok(format!(
            "{}{}redirect_url={}",
            self.sign_out_url,
            separator,
            urlencoding::encode(&request.redirect_url)
        ))
    }
}

impl Default for HostedSignOut {
    fn default() -> Self {
        Self::new(SIGN_OUT_ENDPOINT)
    }
}

#[async_trait(?Send)]
impl IdentityProvider for HostedSignOut {
    async fn sign_out(&self, request: SignOutRequest) -> Result<(), AuthError> {
        let location = self.location_for(&request)?;
        tracing::info!(%location, "signing out");
        navigate(&location)
    }
}

#[cfg(target_arch = "wasm32")]
fn navigate(location: &str) -> Result<(), AuthError> {
    let window = web_sys::window().ok_or_else(|| AuthError::Navigation("no window".into()))?;
    window
        .location()
        .set_href(location)
        .map_err(|e| AuthError::Navigation(format!("{e:?}")))
}

#[cfg(not(target_arch = "wasm32"))]
fn navigate(_location: &str) -> Result<(), AuthError> {
    Err(AuthError::Unsupported)
}

/// Identity provider handed down through context.
#[derive(Clone)]
pub struct AuthContext {
    provider: Rc<dyn IdentityProvider>,
}

impl AuthContext {
    pub fn new(provider: impl IdentityProvider + 'static) -> Self {
        Self {
            provider: Rc::new(provider),
        }
    }

    pub fn provider(&self) -> Rc<dyn IdentityProvider> {
        self.provider.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingProvider {
        calls: RefCell<Vec<SignOutRequest>>,
        fail: bool,
    }

    #[async_trait(?Send)]
    impl IdentityProvider for RecordingProvider {
        async fn sign_out(&self, request: SignOutRequest) -> Result<(), AuthError> {
            self.calls.borrow_mut().push(request);
            if self.fail {
                Err(AuthError::Navigation("provider down".into()))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn sign_out_calls_provider_once_with_root_redirect() {
        let provider = RecordingProvider::default();
        tokio_test::block_on(sign_out(&provider)).expect("sign out");

        let calls = provider.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].redirect_url, "/");
    }

    #[test]
    fn provider_errors_are_returned_not_retried() {
        let provider = RecordingProvider {
            fail: true,
            ..Default::default()
        };
        let err = tokio_test::block_on(sign_out(&provider)).unwrap_err();

        assert_eq!(err, AuthError::Navigation("provider down".into()));
        assert_eq!(provider.calls.borrow().len(), 1);
    }

    #[test]
    fn hosted_location_encodes_redirect() {
        let hosted = HostedSignOut::default();
        let url = hosted
            .location_for(&SignOutRequest::to_root())
            .expect("valid");
        assert_eq!(url, "/auth/sign-out?redirect_url=%2F");

        let hosted = HostedSignOut::new("https://accounts.example.com/sign-out?app=cal");
        let url = hosted
            .location_for(&SignOutRequest {
                redirect_url: "/calendar?view=week".into(),
            })
            .expect("valid");
        assert_eq!(
            url,
            "https://accounts.example.com/sign-out?app=cal&redirect_url=%2Fcalendar%3Fview%3Dweek"
        );
    }

    #[test]
    fn hosted_rejects_offsite_redirects() {
        let hosted = HostedSignOut::default();
        for target in ["https://evil.example", "//evil.example", "calendar", "/\\evil"] {
            let req = SignOutRequest {
                redirect_url: target.into(),
            };
            assert_eq!(
                hosted.location_for(&req),
                Err(AuthError::InvalidRedirect(target.into())),
                "{target}"
            );
        }
    }

    #[test]
    fn hosted_is_unsupported_outside_browser() {
        let hosted = HostedSignOut::default();
        assert_eq!(
            tokio_test::block_on(sign_out(&hosted)),
            Err(AuthError::Unsupported)
        );
    }

    #[test]
    fn context_shares_one_provider() {
        let ctx = AuthContext::new(HostedSignOut::default());
        let cloned = ctx.clone();
        assert!(Rc::ptr_eq(&ctx.provider(), &cloned.provider()));
    }
}

//! OAuth redirect: the one recovery action the flow has.

use std::sync::Arc;

use tracing::warn;

use crate::browser::{is_embedded, Browser};

/// Builds the OAuth redirect URL and navigates away to it.
///
/// This is a terminal action: the page unloads and the whole flow restarts
/// from a fresh page load. There is no retry.
#[derive(Clone)]
pub struct Redirector {
    auth_base_url: String,
    browser: Arc<dyn Browser>,
}

impl std::fmt::Debug for Redirector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Redirector")
            .field("auth_base_url", &self.auth_base_url)
            .finish_non_exhaustive()
    }
}

impl Redirector {
    /// Create a new redirector for the given auth microservice.
    pub fn new(auth_base_url: impl Into<String>, browser: Arc<dyn Browser>) -> Self {
        Self {
            auth_base_url: auth_base_url.into().trim_end_matches('/').to_string(),
            browser,
        }
    }

    /// Navigate to the OAuth sign-in page for the given app and shop.
    ///
    /// When embedded, the top-level window is navigated so the whole admin
    /// page leaves the iframe; otherwise the current window is navigated.
    /// Returns the computed URL for observability.
    pub fn redirect_to_auth(&self, app_name: &str, shop_name: &str) -> String {
        let url = format!(
            "{}/auth/{}/{}/redirect",
            self.auth_base_url, app_name, shop_name
        );

        warn!(%app_name, %shop_name, "Redirecting to OAuth sign-in");

        if is_embedded(&*self.browser) {
            self.browser.navigate_top(&url);
        } else {
            self.browser.navigate(&url);
        }

        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::{NavigationTarget, VirtualWindow};

    #[test]
    fn test_embedded_redirect_targets_top_window() {
        let window = Arc::new(VirtualWindow::embedded());
        let redirector = Redirector::new("https://auth.example.com", window.clone());

        let url = redirector.redirect_to_auth("acme", "foo");

        assert_eq!(url, "https://auth.example.com/auth/acme/foo/redirect");
        let navigations = window.navigations();
        assert_eq!(navigations.len(), 1);
        assert_eq!(navigations[0].url, url);
        assert_eq!(navigations[0].target, NavigationTarget::TopWindow);
    }

    #[test]
    fn test_standalone_redirect_targets_current_window() {
        let window = Arc::new(VirtualWindow::top_level());
        let redirector = Redirector::new("https://auth.example.com/", window.clone());

        let url = redirector.redirect_to_auth("acme", "foo");

        let navigations = window.navigations();
        assert_eq!(navigations.len(), 1);
        assert_eq!(navigations[0].url, url);
        assert_eq!(navigations[0].target, NavigationTarget::CurrentWindow);
    }
}

//! Browser window seam: frame detection and navigation.
//!
//! The SDK never touches a real `window` object directly; everything goes
//! through the [`Browser`] trait so that embedding glue can wire in the
//! actual window primitives and tests can observe navigations.

use std::sync::Mutex;

/// Raised when reading the top window is denied by the browser's
/// cross-origin policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cross-origin access to the top window was denied")]
pub struct ProbeDenied;

/// Access to the hosting browser window.
pub trait Browser: Send + Sync {
    /// Whether this window is the top-level window.
    ///
    /// Fails with [`ProbeDenied`] when the browser refuses the probe, which
    /// some browsers do for cross-origin frames.
    fn probe_top(&self) -> std::result::Result<bool, ProbeDenied>;

    /// Navigate the current window to the given URL.
    fn navigate(&self, url: &str);

    /// Navigate the top-level window to the given URL.
    fn navigate_top(&self, url: &str);
}

/// Whether this document is framed by another window.
///
/// A denied probe counts as embedded: the denial itself is evidence of a
/// cross-origin parent frame. Never panics.
pub fn is_embedded(browser: &dyn Browser) -> bool {
    match browser.probe_top() {
        Ok(is_top) => !is_top,
        Err(ProbeDenied) => true,
    }
}

/// Which window a navigation targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationTarget {
    TopWindow,
    CurrentWindow,
}

/// A recorded navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// The URL navigated to.
    pub url: String,
    /// The window the navigation targeted.
    pub target: NavigationTarget,
}

/// Window stand-in with fixed embedding and recorded navigations.
///
/// Used by tests and by headless callers that have no real window to
/// navigate. Navigations are recorded instead of performed, so "the page
/// went away" becomes an observable fact.
#[derive(Debug)]
pub struct VirtualWindow {
    is_top: bool,
    deny_probe: bool,
    navigations: Mutex<Vec<Navigation>>,
}

impl VirtualWindow {
    /// A window framed by a same-origin parent.
    pub fn embedded() -> Self {
        Self {
            is_top: false,
            deny_probe: false,
            navigations: Mutex::new(Vec::new()),
        }
    }

    /// A top-level window (not embedded).
    pub fn top_level() -> Self {
        Self {
            is_top: true,
            deny_probe: false,
            navigations: Mutex::new(Vec::new()),
        }
    }

    /// A window whose top probe is denied by cross-origin policy.
    pub fn cross_origin() -> Self {
        Self {
            is_top: false,
            deny_probe: true,
            navigations: Mutex::new(Vec::new()),
        }
    }

    /// All navigations recorded so far.
    pub fn navigations(&self) -> Vec<Navigation> {
        self.navigations
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }

    fn record(&self, url: &str, target: NavigationTarget) {
        if let Ok(mut navigations) = self.navigations.lock() {
            navigations.push(Navigation {
                url: url.to_string(),
                target,
            });
        }
    }
}

impl Browser for VirtualWindow {
    fn probe_top(&self) -> std::result::Result<bool, ProbeDenied> {
        if self.deny_probe {
            Err(ProbeDenied)
        } else {
            Ok(self.is_top)
        }
    }

    fn navigate(&self, url: &str) {
        self.record(url, NavigationTarget::CurrentWindow);
    }

    fn navigate_top(&self, url: &str) {
        self.record(url, NavigationTarget::TopWindow);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_when_not_top() {
        let window = VirtualWindow::embedded();
        assert!(is_embedded(&window));
    }

    #[test]
    fn test_not_embedded_when_top() {
        let window = VirtualWindow::top_level();
        assert!(!is_embedded(&window));
    }

    #[test]
    fn test_denied_probe_counts_as_embedded() {
        let window = VirtualWindow::cross_origin();
        assert!(is_embedded(&window));
    }

    #[test]
    fn test_navigations_are_recorded() {
        let window = VirtualWindow::embedded();
        window.navigate_top("https://auth.example.com/auth/acme/foo/redirect");
        window.navigate("https://example.com/plain");

        let navigations = window.navigations();
        assert_eq!(navigations.len(), 2);
        assert_eq!(navigations[0].target, NavigationTarget::TopWindow);
        assert_eq!(navigations[1].target, NavigationTarget::CurrentWindow);
    }
}

//! One-shot navigation actions outside the submission flow

use crate::state::Router;

/// Something that can move between screens like a browser history
pub trait Navigator {
    /// Number of history entries, including the current one
    fn history_len(&self) -> usize;
    fn back(&mut self);
    fn navigate_to(&mut self, path: &str);
}

impl Navigator for Router {
    fn history_len(&self) -> usize {
        self.depth()
    }

    fn back(&mut self) {
        self.pop();
    }

    fn navigate_to(&mut self, path: &str) {
        self.push(path);
    }
}

/// Go back one screen, or to `root_path` when there is nothing to go back to
pub fn go_back(nav: &mut impl Navigator, root_path: &str) {
    if nav.history_len() > 1 {
        tracing::debug!("Navigating back");
        nav.back();
    } else {
        tracing::debug!("No history, navigating to {root_path}");
        nav.navigate_to(root_path);
    }
}

pub fn redirect_to_login(nav: &mut impl Navigator, login_path: &str) {
    tracing::debug!("Redirecting to {login_path}");
    nav.navigate_to(login_path);
}

/// Third-party identity providers offered on the signup screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialProvider {
    Google,
    Apple,
}

impl SocialProvider {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Apple => "apple",
        }
    }

    pub fn authorize_url(&self) -> &'static str {
        match self {
            Self::Google => "https://accounts.google.com/oauth/authorize",
            Self::Apple => "https://appleid.apple.com/auth/authorize",
        }
    }

    /// Notice shown when the provider is picked. The OAuth redirect itself
    /// is not performed.
    pub fn redirect_notice(&self) -> String {
        tracing::info!(
            provider = self.name(),
            url = self.authorize_url(),
            "Social login selected"
        );
        format!("Redirecting to {} login...", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Route;

    #[test]
    fn test_go_back_pops_history() {
        let mut router = Router::new(Route::Home);
        router.navigate_to("/signup");
        go_back(&mut router, "/");
        assert_eq!(router.current(), Route::Home);
        assert_eq!(router.history_len(), 1);
    }

    #[test]
    fn test_go_back_without_history_goes_to_root() {
        let mut router = Router::new(Route::Signup);
        go_back(&mut router, "/");
        assert_eq!(router.current(), Route::Home);
    }

    #[test]
    fn test_redirect_to_login() {
        let mut router = Router::default();
        redirect_to_login(&mut router, "/login");
        assert_eq!(router.current(), Route::Login);
        // Back returns to the form
        go_back(&mut router, "/");
        assert_eq!(router.current(), Route::Signup);
    }

    #[test]
    fn test_social_redirect_notice() {
        assert_eq!(
            SocialProvider::Google.redirect_notice(),
            "Redirecting to google login..."
        );
        assert_eq!(
            SocialProvider::Apple.redirect_notice(),
            "Redirecting to apple login..."
        );
    }

    #[test]
    fn test_authorize_urls() {
        assert!(SocialProvider::Google
            .authorize_url()
            .starts_with("https://accounts.google.com/"));
        assert!(SocialProvider::Apple
            .authorize_url()
            .starts_with("https://appleid.apple.com/"));
    }
}

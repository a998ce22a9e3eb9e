//! Screen routing with a browser-like history

/// Screens the app can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    Home,
    #[default]
    Signup,
    Login,
}

impl Route {
    /// Map a path to a screen. Unknown paths land on the home screen.
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/signup" => Self::Signup,
            "/login" => Self::Login,
            _ => Self::Home,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Signup => "/signup",
            Self::Login => "/login",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Signup => "Create your account",
            Self::Login => "Log in",
        }
    }
}

/// History of visited screens; the last entry is the current one
#[derive(Debug, Clone)]
pub struct Router {
    history: Vec<Route>,
}

impl Router {
    pub fn new(start: Route) -> Self {
        Self {
            history: vec![start],
        }
    }

    pub fn current(&self) -> Route {
        self.history.last().copied().unwrap_or_default()
    }

    /// Number of entries, including the current screen
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    pub fn push(&mut self, path: &str) {
        self.history.push(Route::from_path(path));
    }

    /// Drop the current screen. The first entry is never popped.
    pub fn pop(&mut self) {
        if self.history.len() > 1 {
            self.history.pop();
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Route::default())
    }
}

//! Application state and key dispatch

use crate::config::SignupConfig;
use crate::navigation::{go_back, redirect_to_login, SocialProvider};
use crate::platform::is_command;
use crate::state::{Focus, Form, FormSurface, Route, Router, SignupScreen};
use crate::submission::{SimulatedTransport, SubmissionController, SubmissionTransport};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Instant;

type SignupController = SubmissionController<SignupScreen, dyn SubmissionTransport>;

/// Main application struct
pub struct App {
    /// Signup form and its submission state machine
    pub signup: SignupController,
    /// Screen history
    pub router: Router,
    pub config: SignupConfig,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create the app with the simulated transport described by `config`
    pub fn new(config: SignupConfig) -> Self {
        let transport: Arc<dyn SubmissionTransport> =
            Arc::new(SimulatedTransport::from_config(&config));
        Self::with_transport(config, transport)
    }

    pub fn with_transport(config: SignupConfig, transport: Arc<dyn SubmissionTransport>) -> Self {
        let signup = SubmissionController::new(SignupScreen::new(), transport, &config);
        Self {
            signup,
            router: Router::default(),
            config,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    pub fn screen(&self) -> &SignupScreen {
        self.signup.surface()
    }

    /// Periodic work between input events: finish a completed submission
    /// and drop expired notifications
    pub async fn tick(&mut self) {
        self.signup.poll_submission().await;
        self.signup.expire_notifications(Instant::now());
    }

    /// Handle a key event for the current screen
    pub fn handle_key(&mut self, key: KeyEvent) {
        // A blocking alert swallows input until dismissed
        if self.screen().alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.signup.surface_mut().dismiss_alert();
            }
            return;
        }

        match self.router.current() {
            Route::Signup => self.handle_signup_key(key),
            Route::Home => match key.code {
                KeyCode::Char('s') | KeyCode::Enter => self.router.push("/signup"),
                KeyCode::Char('q') => self.quit(),
                _ => {}
            },
            Route::Login => match key.code {
                KeyCode::Esc => go_back(&mut self.router, &self.config.root_path),
                KeyCode::Char('q') => self.quit(),
                _ => {}
            },
        }
    }

    fn handle_signup_key(&mut self, key: KeyEvent) {
        if is_command(&key) {
            match key.code {
                KeyCode::Char('s') => self.submit(),
                KeyCode::Char('p') => self.signup.surface_mut().toggle_password_visibility(),
                KeyCode::Char('l') => redirect_to_login(&mut self.router, &self.config.login_path),
                KeyCode::Char('g') => self.social_login(SocialProvider::Google),
                KeyCode::Char('a') => self.social_login(SocialProvider::Apple),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Tab => self.move_focus(|screen| screen.next_field()),
            KeyCode::BackTab => self.move_focus(|screen| screen.prev_field()),
            KeyCode::Esc => go_back(&mut self.router, &self.config.root_path),
            KeyCode::Enter => match self.screen().focus() {
                Focus::Terms => self.signup.surface_mut().toggle_terms(),
                Focus::Input(_) | Focus::Submit => self.submit(),
            },
            KeyCode::Char(' ') if self.screen().focus() == Focus::Terms => {
                self.signup.surface_mut().toggle_terms();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
                if let Some(name) = self.signup.surface_mut().input_char(c) {
                    self.signup.on_input(name);
                }
            }
            KeyCode::Backspace => {
                if let Some(name) = self.signup.surface_mut().backspace() {
                    self.signup.on_input(name);
                }
            }
            _ => {}
        }
    }

    /// Move focus and validate the input that was left
    fn move_focus(&mut self, step: impl FnOnce(&mut SignupScreen)) {
        let left = self.screen().focused_input();
        step(self.signup.surface_mut());
        if let Some(name) = left {
            self.signup.on_blur(name);
        }
    }

    /// Submit the form unless the submit control is disabled
    fn submit(&mut self) {
        if !self.screen().submit.enabled {
            return;
        }
        if let Err(reason) = self.signup.submit_intent() {
            tracing::debug!("Submit rejected: {reason}");
        }
    }

    fn social_login(&mut self, provider: SocialProvider) {
        let notice = provider.redirect_notice();
        self.signup.surface_mut().alert(&notice);
    }
}

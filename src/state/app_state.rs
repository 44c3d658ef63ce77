//! Application state definitions

use super::forms::FormState;

/// Current screen in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    SignIn,
    SignUp,
    ForgotPassword,
}

impl View {
    /// Parse a configured start screen name ("signin", "signup",
    /// "forgotpassword")
    pub fn from_config_name(name: &str) -> Option<Self> {
        match name {
            "signin" => Some(Self::SignIn),
            "signup" => Some(Self::SignUp),
            "forgotpassword" => Some(Self::ForgotPassword),
            _ => None,
        }
    }
}

/// Severity of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A modal message shown to the user until dismissed
#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Top-level application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Current screen
    pub current_view: View,
    /// Screen history for Esc navigation
    pub view_history: Vec<View>,
    /// Form for the current screen; replaced wholesale on navigation
    pub form: FormState,
    /// Pending notices, shown modally in FIFO order
    pub notices: Vec<Notice>,
}

impl AppState {
    /// Queue a notice for modal display
    pub fn push_notice(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.notices.push(Notice {
            level,
            message: message.into(),
        });
    }

    /// Whether a notice is currently awaiting dismissal
    pub fn has_notices(&self) -> bool {
        !self.notices.is_empty()
    }

    /// Dismiss the oldest notice
    pub fn dismiss_notice(&mut self) {
        if !self.notices.is_empty() {
            self.notices.remove(0);
        }
    }

    /// The notice currently shown, if any
    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.first()
    }
}

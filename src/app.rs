//! Application core: key dispatch, navigation, and submit flows

use crate::config::TuiConfig;
use crate::sink::AuthSink;
use crate::state::{AppState, Form, FormState, NoticeLevel, ResetStep, SignInStep, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User preferences
    pub config: TuiConfig,
    /// Receiver of validated submissions
    sink: Box<dyn AuthSink>,
    /// Whether the app should quit
    quit: bool,
    /// Transient feedback shown in the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig, sink: Box<dyn AuthSink>) -> Self {
        let mut state = AppState::default();
        if let Some(view) = config
            .start_screen
            .as_deref()
            .and_then(View::from_config_name)
        {
            state.current_view = view;
            state.form = FormState::for_view(view);
        }

        Self {
            state,
            config,
            sink,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Navigate to a new screen. The target always starts with a fresh form;
    /// values, errors, and step state never survive navigation.
    pub fn navigate(&mut self, view: View) {
        self.state.view_history.push(self.state.current_view);
        self.state.current_view = view;
        self.state.form = FormState::for_view(view);
        self.status_message = None;
    }

    /// Return to the previous screen, or quit from the root of the history
    pub fn back_or_quit(&mut self) {
        if let Some(view) = self.state.view_history.pop() {
            self.state.current_view = view;
            self.state.form = FormState::for_view(view);
            self.status_message = None;
        } else {
            self.quit = true;
        }
    }

    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle notice dismissal first (modal)
        if self.state.has_notices() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_notice();
            }
            return Ok(());
        }

        // Clear any status message on key press
        self.status_message = None;

        match self.state.current_view {
            View::SignIn => self.handle_sign_in_key(key).await?,
            View::SignUp => self.handle_sign_up_key(key).await?,
            View::ForgotPassword => self.handle_forgot_password_key(key).await?,
        }

        Ok(())
    }

    /// Handle keys in the Sign In screen
    async fn handle_sign_in_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Enter => return self.submit_sign_in().await,
            KeyCode::Esc => {
                self.back_or_quit();
                return Ok(());
            }
            // Links to the sibling screens
            KeyCode::Char('f') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.navigate(View::ForgotPassword);
                return Ok(());
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.navigate(View::SignUp);
                return Ok(());
            }
            _ => {}
        }

        let FormState::SignIn(form) = &mut self.state.form else {
            return Ok(());
        };
        let on_buttons = form.is_buttons_row_active();
        match key.code {
            KeyCode::Tab => {
                form.validate_active_field();
                form.next_field();
            }
            KeyCode::BackTab => {
                form.validate_active_field();
                form.prev_field();
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(field) = form.get_active_field_mut() {
                    field.toggle_reveal();
                }
            }
            // Form field input (only when not on the buttons row)
            KeyCode::Char(c) if !on_buttons => {
                if let Some(field) = form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace if !on_buttons => {
                if let Some(field) = form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Submit the current sign-in step
    async fn submit_sign_in(&mut self) -> Result<()> {
        let FormState::SignIn(form) = &mut self.state.form else {
            return Ok(());
        };
        match form.step {
            SignInStep::Credentials => {
                // Step 1: email and password gate the MFA step
                if form.validate_step() {
                    form.advance_to_mfa();
                }
            }
            SignInStep::Mfa => {
                if form.mfa_complete() {
                    let email = form.email.as_text().to_string();
                    let code = form.mfa_code.as_text().to_string();
                    if let Err(error) = self.sink.sign_in(&email, &code).await {
                        tracing::warn!(%error, "sign-in sink failed");
                        self.state
                            .push_notice(NoticeLevel::Error, "Sign-in failed, try again");
                    } else {
                        self.state
                            .push_notice(NoticeLevel::Success, "Welcome to Dashboard");
                    }
                } else {
                    self.state.push_notice(
                        NoticeLevel::Error,
                        "Please enter a valid 6-digit MFA code",
                    );
                }
            }
        }
        Ok(())
    }

    /// Handle keys in the Sign Up screen
    async fn handle_sign_up_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Enter => return self.submit_sign_up().await,
            KeyCode::Esc => {
                self.back_or_quit();
                return Ok(());
            }
            _ => {}
        }

        let FormState::SignUp(form) = &mut self.state.form else {
            return Ok(());
        };
        let on_buttons = form.is_buttons_row_active();
        match key.code {
            KeyCode::Tab => {
                form.validate_active_field();
                form.next_field();
            }
            KeyCode::BackTab => {
                form.validate_active_field();
                form.prev_field();
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(field) = form.get_active_field_mut() {
                    field.toggle_reveal();
                }
            }
            KeyCode::Char(c) if !on_buttons => {
                if let Some(field) = form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace if !on_buttons => {
                if let Some(field) = form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Submit the registration form
    async fn submit_sign_up(&mut self) -> Result<()> {
        let FormState::SignUp(form) = &mut self.state.form else {
            return Ok(());
        };
        if !form.validate_step() {
            return Ok(());
        }

        let first_name = form.first_name.as_text().to_string();
        let last_name = form.last_name.as_text().to_string();
        let email = form.email.as_text().to_string();
        if let Err(error) = self.sink.sign_up(&first_name, &last_name, &email).await {
            tracing::warn!(%error, "registration sink failed");
            self.state
                .push_notice(NoticeLevel::Error, "Registration failed, try again");
        } else {
            // Sign-up stays on the screen; the status line carries the feedback
            self.status_message = Some("Registration submitted".to_string());
        }
        Ok(())
    }

    /// Handle keys in the Forgot Password screen
    async fn handle_forgot_password_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Enter => return self.submit_forgot_password().await,
            KeyCode::Esc => {
                self.back_or_quit();
                return Ok(());
            }
            _ => {}
        }

        let FormState::ForgotPassword(form) = &mut self.state.form else {
            return Ok(());
        };
        let on_buttons = form.is_buttons_row_active();
        match key.code {
            KeyCode::Tab => {
                form.validate_active_field();
                form.next_field();
            }
            KeyCode::BackTab => {
                form.validate_active_field();
                form.prev_field();
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(field) = form.get_active_field_mut() {
                    field.toggle_reveal();
                }
            }
            KeyCode::Char(c) if !on_buttons => {
                if let Some(field) = form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace if !on_buttons => {
                if let Some(field) = form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Submit the current forgot-password step
    async fn submit_forgot_password(&mut self) -> Result<()> {
        let FormState::ForgotPassword(form) = &mut self.state.form else {
            return Ok(());
        };
        match form.step {
            ResetStep::Email => {
                if !form.validate_step() {
                    return Ok(());
                }
                let email = form.email.as_text().to_string();
                form.advance_to_reset();
                if let Err(error) = self.sink.request_reset(&email).await {
                    tracing::warn!(%error, "reset request sink failed");
                    self.state.push_notice(
                        NoticeLevel::Error,
                        "Could not send reset link, try again",
                    );
                } else {
                    self.status_message = Some(format!("Reset link sent to {email}"));
                }
            }
            ResetStep::Reset => {
                if !form.validate_step() {
                    return Ok(());
                }
                let email = form.email.as_text().to_string();
                if let Err(error) = self.sink.reset_password(&email).await {
                    tracing::warn!(%error, "password reset sink failed");
                    self.state
                        .push_notice(NoticeLevel::Error, "Password reset failed, try again");
                } else {
                    self.state.push_notice(
                        NoticeLevel::Success,
                        "Your password has been successfully reset!",
                    );
                    self.navigate(View::SignIn);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MockAuthSink;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// App backed by a mock with no expectations: any sink call panics,
    /// which is exactly what "submission blocked" tests want to observe
    fn app() -> App {
        App::new(TuiConfig::default(), Box::new(MockAuthSink::new()))
    }

    fn app_with(sink: MockAuthSink) -> App {
        App::new(TuiConfig::default(), Box::new(sink))
    }

    async fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
    }

    async fn press(app: &mut App, code: KeyCode) {
        app.handle_key(key(code)).await.unwrap();
    }

    /// Drive the sign-in form to the MFA step with valid credentials
    async fn advance_to_mfa(app: &mut App) {
        type_str(app, "m@example.com").await;
        press(app, KeyCode::Tab).await;
        type_str(app, "abcdef1!").await;
        press(app, KeyCode::Enter).await;
    }

    mod navigation_tests {
        use super::*;

        #[tokio::test]
        async fn test_default_screen_is_sign_in() {
            let app = app();
            assert_eq!(app.state.current_view, View::SignIn);
        }

        #[tokio::test]
        async fn test_config_start_screen() {
            let config = TuiConfig {
                start_screen: Some("signup".to_string()),
                ..Default::default()
            };
            let app = App::new(config, Box::new(MockAuthSink::new()));
            assert_eq!(app.state.current_view, View::SignUp);
            assert!(matches!(app.state.form, FormState::SignUp(_)));
        }

        #[tokio::test]
        async fn test_links_from_sign_in() {
            let mut app = app();
            app.handle_key(ctrl('f')).await.unwrap();
            assert_eq!(app.state.current_view, View::ForgotPassword);

            app.back_or_quit();
            app.handle_key(ctrl('u')).await.unwrap();
            assert_eq!(app.state.current_view, View::SignUp);
        }

        #[tokio::test]
        async fn test_esc_returns_to_previous_screen() {
            let mut app = app();
            app.handle_key(ctrl('u')).await.unwrap();
            press(&mut app, KeyCode::Esc).await;
            assert_eq!(app.state.current_view, View::SignIn);
            assert!(!app.should_quit());
        }

        #[tokio::test]
        async fn test_esc_on_root_quits() {
            let mut app = app();
            press(&mut app, KeyCode::Esc).await;
            assert!(app.should_quit());
        }

        #[tokio::test]
        async fn test_navigation_drops_form_state() {
            let mut app = app();
            type_str(&mut app, "half-typed").await;
            app.handle_key(ctrl('u')).await.unwrap();
            press(&mut app, KeyCode::Esc).await;

            let FormState::SignIn(form) = &app.state.form else {
                unreachable!()
            };
            assert_eq!(form.email.as_text(), "");
            assert_eq!(form.step, SignInStep::Credentials);
        }
    }

    mod sign_in_tests {
        use super::*;

        #[tokio::test]
        async fn test_valid_credentials_advance_to_mfa() {
            let mut app = app();
            advance_to_mfa(&mut app).await;

            let FormState::SignIn(form) = &app.state.form else {
                unreachable!()
            };
            assert_eq!(form.step, SignInStep::Mfa);
            assert_eq!(form.get_field(0).unwrap().name, "mfa_code");
        }

        #[tokio::test]
        async fn test_invalid_email_blocks_step_advance() {
            let mut app = app();
            type_str(&mut app, "not-an-email").await;
            press(&mut app, KeyCode::Tab).await;
            type_str(&mut app, "abcdef1!").await;
            press(&mut app, KeyCode::Enter).await;

            let FormState::SignIn(form) = &app.state.form else {
                unreachable!()
            };
            assert_eq!(form.step, SignInStep::Credentials);
            assert_eq!(form.email.error, Some("Invalid email format."));
        }

        #[tokio::test]
        async fn test_short_password_reports_length_message() {
            let mut app = app();
            type_str(&mut app, "m@example.com").await;
            press(&mut app, KeyCode::Tab).await;
            type_str(&mut app, "abc").await;
            press(&mut app, KeyCode::Enter).await;

            let FormState::SignIn(form) = &app.state.form else {
                unreachable!()
            };
            assert_eq!(
                form.password.error,
                Some("Password must be at least 8 characters.")
            );
        }

        #[tokio::test]
        async fn test_tab_validates_field_on_leave() {
            let mut app = app();
            type_str(&mut app, "nope").await;
            press(&mut app, KeyCode::Tab).await;

            let FormState::SignIn(form) = &app.state.form else {
                unreachable!()
            };
            assert_eq!(form.email.error, Some("Invalid email format."));
        }

        #[tokio::test]
        async fn test_mfa_entry_drops_non_digits_and_caps_length() {
            let mut app = app();
            advance_to_mfa(&mut app).await;
            type_str(&mut app, "12a345").await;

            let FormState::SignIn(form) = &app.state.form else {
                unreachable!()
            };
            assert_eq!(form.mfa_code.as_text(), "12345");

            type_str(&mut app, "678").await;
            let FormState::SignIn(form) = &app.state.form else {
                unreachable!()
            };
            assert_eq!(form.mfa_code.as_text(), "123456");
        }

        #[tokio::test]
        async fn test_complete_mfa_submits_and_notifies() {
            let mut sink = MockAuthSink::new();
            sink.expect_sign_in()
                .withf(|email, code| email == "m@example.com" && code == "123456")
                .times(1)
                .returning(|_, _| Ok(()));
            let mut app = app_with(sink);

            advance_to_mfa(&mut app).await;
            type_str(&mut app, "123456").await;
            press(&mut app, KeyCode::Enter).await;

            let notice = app.state.current_notice().unwrap();
            assert_eq!(notice.level, NoticeLevel::Success);
            assert_eq!(notice.message, "Welcome to Dashboard");
        }

        #[tokio::test]
        async fn test_incomplete_mfa_shows_error_notice() {
            let mut app = app();
            advance_to_mfa(&mut app).await;
            type_str(&mut app, "123").await;
            press(&mut app, KeyCode::Enter).await;

            let notice = app.state.current_notice().unwrap();
            assert_eq!(notice.level, NoticeLevel::Error);
            assert_eq!(notice.message, "Please enter a valid 6-digit MFA code");

            // Still on the MFA step afterwards
            let FormState::SignIn(form) = &app.state.form else {
                unreachable!()
            };
            assert_eq!(form.step, SignInStep::Mfa);
        }

        #[tokio::test]
        async fn test_notice_is_modal_until_dismissed() {
            let mut app = app();
            advance_to_mfa(&mut app).await;
            press(&mut app, KeyCode::Enter).await; // empty code -> error notice

            // Typing while the notice is up must not reach the form
            type_str(&mut app, "1").await;
            let FormState::SignIn(form) = &app.state.form else {
                unreachable!()
            };
            assert_eq!(form.mfa_code.as_text(), "");

            press(&mut app, KeyCode::Enter).await; // dismiss
            assert!(!app.state.has_notices());
        }

        #[tokio::test]
        async fn test_reveal_toggle_on_password_field() {
            let mut app = app();
            press(&mut app, KeyCode::Tab).await; // focus password
            type_str(&mut app, "abcdef1!").await;

            app.handle_key(ctrl('r')).await.unwrap();
            let FormState::SignIn(form) = &app.state.form else {
                unreachable!()
            };
            assert!(form.password.revealed);
            assert_eq!(form.password.display_value(), "abcdef1!");
        }
    }

    mod sign_up_tests {
        use super::*;

        #[tokio::test]
        async fn test_valid_registration_reaches_sink() {
            let mut sink = MockAuthSink::new();
            sink.expect_sign_up()
                .withf(|first, last, email| {
                    first == "John" && last == "Doe" && email == "m@example.com"
                })
                .times(1)
                .returning(|_, _, _| Ok(()));
            let mut app = app_with(sink);
            app.navigate(View::SignUp);

            type_str(&mut app, "John").await;
            press(&mut app, KeyCode::Tab).await;
            type_str(&mut app, "Doe").await;
            press(&mut app, KeyCode::Tab).await;
            type_str(&mut app, "m@example.com").await;
            press(&mut app, KeyCode::Tab).await;
            type_str(&mut app, "abcdef1!").await;
            press(&mut app, KeyCode::Enter).await;

            assert_eq!(
                app.status_message.as_deref(),
                Some("Registration submitted")
            );
        }

        #[tokio::test]
        async fn test_empty_submit_blocks_and_reports_all_fields() {
            // Mock has no expectations; a sink call would panic
            let mut app = app();
            app.navigate(View::SignUp);
            press(&mut app, KeyCode::Enter).await;

            let FormState::SignUp(form) = &app.state.form else {
                unreachable!()
            };
            assert_eq!(form.first_name.error, Some("First name is required."));
            assert_eq!(form.last_name.error, Some("Last name is required."));
            assert_eq!(form.email.error, Some("Email is required."));
            assert_eq!(form.password.error, Some("Password is required."));
        }
    }

    mod forgot_password_tests {
        use super::*;

        async fn reset_app() -> App {
            let mut sink = MockAuthSink::new();
            sink.expect_request_reset()
                .times(1)
                .returning(|_| Ok(()));
            sink.expect_reset_password().returning(|_| Ok(()));
            let mut app = app_with(sink);
            app.navigate(View::ForgotPassword);
            app
        }

        #[tokio::test]
        async fn test_email_step_advances_to_reset() {
            let mut app = reset_app().await;
            type_str(&mut app, "m@example.com").await;
            press(&mut app, KeyCode::Enter).await;

            let FormState::ForgotPassword(form) = &app.state.form else {
                unreachable!()
            };
            assert_eq!(form.step, ResetStep::Reset);
            assert_eq!(
                app.status_message.as_deref(),
                Some("Reset link sent to m@example.com")
            );
        }

        #[tokio::test]
        async fn test_invalid_email_blocks_reset_request() {
            let mut app = app();
            app.navigate(View::ForgotPassword);
            type_str(&mut app, "user@example").await;
            press(&mut app, KeyCode::Enter).await;

            let FormState::ForgotPassword(form) = &app.state.form else {
                unreachable!()
            };
            assert_eq!(form.step, ResetStep::Email);
            assert_eq!(form.email.error, Some("Invalid email format."));
        }

        #[tokio::test]
        async fn test_successful_reset_notifies_and_returns_to_sign_in() {
            let mut app = reset_app().await;
            type_str(&mut app, "m@example.com").await;
            press(&mut app, KeyCode::Enter).await;

            type_str(&mut app, "abcdef1!").await;
            press(&mut app, KeyCode::Tab).await;
            type_str(&mut app, "abcdef1!").await;
            press(&mut app, KeyCode::Enter).await;

            assert_eq!(app.state.current_view, View::SignIn);
            let notice = app.state.current_notice().unwrap();
            assert_eq!(notice.level, NoticeLevel::Success);
            assert_eq!(
                notice.message,
                "Your password has been successfully reset!"
            );
        }

        #[tokio::test]
        async fn test_mismatched_confirmation_blocks_reset() {
            let mut app = reset_app().await;
            type_str(&mut app, "m@example.com").await;
            press(&mut app, KeyCode::Enter).await;

            type_str(&mut app, "abcdef1!").await;
            press(&mut app, KeyCode::Tab).await;
            type_str(&mut app, "different1!").await;
            press(&mut app, KeyCode::Enter).await;

            assert_eq!(app.state.current_view, View::ForgotPassword);
            let FormState::ForgotPassword(form) = &app.state.form else {
                unreachable!()
            };
            assert_eq!(
                form.confirm_password.error,
                Some("Passwords do not match.")
            );
        }
    }
}

//! Form state management and form structs

use super::field::FormField;
use crate::state::View;
use crate::validation::{
    email_rules, password_rules, Check, FieldErrors, FieldSource, Rule, RuleSet,
};

/// Length of the multi-factor authentication code
pub const MFA_CODE_LEN: usize = 6;

/// Trait for common form operations
///
/// Every form exposes its visible fields as a window of indices for the
/// current step, with a trailing buttons row as the last index
/// (`get_field` returns `None` there).
pub trait Form: FieldSource {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField>;
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let index = self.active_field();
        self.get_field_mut(index)
    }

    /// Returns true if the buttons row is currently active
    fn is_buttons_row_active(&self) -> bool {
        self.active_field() == self.field_count() - 1
    }

    /// Rules for the currently visible step
    fn rules(&self) -> RuleSet;

    /// Validate the field under focus, storing the result in its error slot.
    /// Called when focus is about to leave the field.
    fn validate_active_field(&mut self) {
        let rules = self.rules();
        let index = self.active_field();
        if let Some(field) = self.get_field_mut(index) {
            field.error = rules.validate_field(field.name, field.as_text());
        }
    }

    /// Recompute validation for every visible field. Stores the per-field
    /// results and returns true when the step is clean.
    fn validate_step(&mut self) -> bool
    where
        Self: Sized,
    {
        let errors = self.rules().validate(&*self);
        self.apply_errors(&errors);
        errors.is_empty()
    }

    /// Replace every visible field's error slot from a validation result
    fn apply_errors(&mut self, errors: &FieldErrors) {
        for index in 0..self.field_count() {
            if let Some(field) = self.get_field_mut(index) {
                field.error = errors.get(field.name).copied();
            }
        }
    }

    /// Whether any visible field currently holds an error
    fn has_errors(&self) -> bool {
        (0..self.field_count())
            .any(|index| self.get_field(index).is_some_and(|f| f.error.is_some()))
    }
}

/// Enum holding the form for the current screen
#[derive(Debug, Clone)]
pub enum FormState {
    SignIn(SignInForm),
    SignUp(SignUpForm),
    ForgotPassword(ForgotPasswordForm),
}

impl Default for FormState {
    fn default() -> Self {
        FormState::SignIn(SignInForm::new())
    }
}

impl FormState {
    /// Fresh form for a screen. Entering a screen always starts over:
    /// values, errors, and step state are not carried across navigation.
    pub fn for_view(view: View) -> Self {
        match view {
            View::SignIn => FormState::SignIn(SignInForm::new()),
            View::SignUp => FormState::SignUp(SignUpForm::new()),
            View::ForgotPassword => FormState::ForgotPassword(ForgotPasswordForm::new()),
        }
    }
}

/// Sign-in progresses from credentials to the MFA code, forward only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignInStep {
    #[default]
    Credentials,
    Mfa,
}

impl SignInStep {
    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Credentials => "SIGN IN",
            Self::Mfa => "SUBMIT MFA",
        }
    }
}

// Sign In Form
#[derive(Debug, Clone)]
pub struct SignInForm {
    pub email: FormField,
    pub password: FormField,
    pub mfa_code: FormField,
    pub step: SignInStep,
    pub active_field_index: usize,
}

impl SignInForm {
    pub fn new() -> Self {
        Self {
            email: FormField::text("email", "Email", "m@example.com"),
            password: FormField::secret("password", "Password", "********"),
            mfa_code: FormField::code(
                "mfa_code",
                "MFA Code (6 Digits)",
                "Enter 6-digit code",
                MFA_CODE_LEN,
            ),
            step: SignInStep::default(),
            active_field_index: 0,
        }
    }

    /// Move to the MFA step. Caller gates this on a clean credentials step.
    pub fn advance_to_mfa(&mut self) {
        self.step = SignInStep::Mfa;
        self.active_field_index = 0;
    }

    /// Whether the entered code is exactly six digits
    pub fn mfa_complete(&self) -> bool {
        Check::DigitsExactly(MFA_CODE_LEN).passes(self.mfa_code.as_text())
    }
}

impl Default for SignInForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldSource for SignInForm {
    fn value(&self, field: &'static str) -> &str {
        match field {
            "email" => self.email.as_text(),
            "password" => self.password.as_text(),
            "mfa_code" => self.mfa_code.as_text(),
            _ => "",
        }
    }
}

impl Form for SignInForm {
    fn field_count(&self) -> usize {
        match self.step {
            SignInStep::Credentials => 3, // email, password, buttons
            SignInStep::Mfa => 2,         // mfa code, buttons
        }
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match (self.step, index) {
            (SignInStep::Credentials, 0) => Some(&self.email),
            (SignInStep::Credentials, 1) => Some(&self.password),
            (SignInStep::Mfa, 0) => Some(&self.mfa_code),
            _ => None,
        }
    }
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match (self.step, index) {
            (SignInStep::Credentials, 0) => Some(&mut self.email),
            (SignInStep::Credentials, 1) => Some(&mut self.password),
            (SignInStep::Mfa, 0) => Some(&mut self.mfa_code),
            _ => None,
        }
    }
    fn rules(&self) -> RuleSet {
        match self.step {
            SignInStep::Credentials => RuleSet::new()
                .field("email", email_rules())
                .field("password", password_rules("Password is required.")),
            // Code completeness is checked on submit; entry is constrained
            // to digits already
            SignInStep::Mfa => RuleSet::new(),
        }
    }
}

// Sign Up Form
#[derive(Debug, Clone)]
pub struct SignUpForm {
    pub first_name: FormField,
    pub last_name: FormField,
    pub email: FormField,
    pub password: FormField,
    pub active_field_index: usize,
}

impl SignUpForm {
    pub fn new() -> Self {
        Self {
            first_name: FormField::text("first_name", "First Name", "John"),
            last_name: FormField::text("last_name", "Last Name", "Doe"),
            email: FormField::text("email", "Email", "m@example.com"),
            password: FormField::secret("password", "Password", "********"),
            active_field_index: 0,
        }
    }
}

impl Default for SignUpForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldSource for SignUpForm {
    fn value(&self, field: &'static str) -> &str {
        match field {
            "first_name" => self.first_name.as_text(),
            "last_name" => self.last_name.as_text(),
            "email" => self.email.as_text(),
            "password" => self.password.as_text(),
            _ => "",
        }
    }
}

impl Form for SignUpForm {
    fn field_count(&self) -> usize {
        5 // first name, last name, email, password, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(4);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.first_name),
            1 => Some(&self.last_name),
            2 => Some(&self.email),
            3 => Some(&self.password),
            _ => None,
        }
    }
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.first_name),
            1 => Some(&mut self.last_name),
            2 => Some(&mut self.email),
            3 => Some(&mut self.password),
            _ => None,
        }
    }
    fn rules(&self) -> RuleSet {
        RuleSet::new()
            .field(
                "first_name",
                vec![Rule::new(Check::Required, "First name is required.")],
            )
            .field(
                "last_name",
                vec![Rule::new(Check::Required, "Last name is required.")],
            )
            .field("email", email_rules())
            .field("password", password_rules("Password is required."))
    }
}

/// Forgot-password progresses from the email to the reset step, forward only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetStep {
    #[default]
    Email,
    Reset,
}

impl ResetStep {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Email => "Forgot Password",
            Self::Reset => "Reset Password",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Email => "Send Reset Link",
            Self::Reset => "Reset Password",
        }
    }
}

// Forgot Password Form
#[derive(Debug, Clone)]
pub struct ForgotPasswordForm {
    pub email: FormField,
    pub new_password: FormField,
    pub confirm_password: FormField,
    pub step: ResetStep,
    pub active_field_index: usize,
}

impl ForgotPasswordForm {
    pub fn new() -> Self {
        Self {
            email: FormField::text("email", "Email", "m@example.com"),
            new_password: FormField::secret(
                "new_password",
                "New Password",
                "Enter new password",
            ),
            confirm_password: FormField::secret(
                "confirm_password",
                "Confirm Password",
                "Confirm new password",
            ),
            step: ResetStep::default(),
            active_field_index: 0,
        }
    }

    /// Move to the reset step. Caller gates this on a clean email step.
    pub fn advance_to_reset(&mut self) {
        self.step = ResetStep::Reset;
        self.active_field_index = 0;
    }
}

impl Default for ForgotPasswordForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldSource for ForgotPasswordForm {
    fn value(&self, field: &'static str) -> &str {
        match field {
            "email" => self.email.as_text(),
            "new_password" => self.new_password.as_text(),
            "confirm_password" => self.confirm_password.as_text(),
            _ => "",
        }
    }
}

impl Form for ForgotPasswordForm {
    fn field_count(&self) -> usize {
        match self.step {
            ResetStep::Email => 2, // email, buttons
            ResetStep::Reset => 3, // new password, confirm password, buttons
        }
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match (self.step, index) {
            (ResetStep::Email, 0) => Some(&self.email),
            (ResetStep::Reset, 0) => Some(&self.new_password),
            (ResetStep::Reset, 1) => Some(&self.confirm_password),
            _ => None,
        }
    }
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match (self.step, index) {
            (ResetStep::Email, 0) => Some(&mut self.email),
            (ResetStep::Reset, 0) => Some(&mut self.new_password),
            (ResetStep::Reset, 1) => Some(&mut self.confirm_password),
            _ => None,
        }
    }
    fn rules(&self) -> RuleSet {
        match self.step {
            ResetStep::Email => RuleSet::new().field("email", email_rules()),
            ResetStep::Reset => RuleSet::new()
                .field(
                    "new_password",
                    password_rules("New password is required."),
                )
                .pair(
                    "confirm_password",
                    "new_password",
                    "Passwords do not match.",
                ),
        }
    }
}

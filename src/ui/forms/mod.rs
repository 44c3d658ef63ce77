//! Form rendering module
//!
//! This module contains UI components for rendering the screens:
//! - `field_renderer`: Field rendering utilities
//! - `sign_in`: Sign-in form (credentials and MFA steps)
//! - `sign_up`: Registration form
//! - `forgot_password`: Forgot-password form (email and reset steps)

mod field_renderer;
mod forgot_password;
mod sign_in;
mod sign_up;

pub use forgot_password::draw as draw_forgot_password;
pub use sign_in::draw as draw_sign_in;
pub use sign_up::draw as draw_sign_up;

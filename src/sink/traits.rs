//! Trait abstraction for the submission sink to enable mocking in tests

use anyhow::Result;
use async_trait::async_trait;

/// Receiver of successfully validated form submissions.
///
/// The validator never calls this: submissions reach the sink only after
/// the current step validates clean. Implementations decide what a
/// submission means (log it, hand it to a backend, record it for a test).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthSink: Send + Sync {
    /// Complete a sign-in after credentials and the MFA code pass
    async fn sign_in(&mut self, email: &str, mfa_code: &str) -> Result<()>;

    /// Submit a new registration
    async fn sign_up(&mut self, first_name: &str, last_name: &str, email: &str) -> Result<()>;

    /// Request a password-reset link for an address
    async fn request_reset(&mut self, email: &str) -> Result<()>;

    /// Complete a password reset for an address
    async fn reset_password(&mut self, email: &str) -> Result<()>;
}

//! Logging sink: reports submissions to the tracing output

use super::traits::AuthSink;
use anyhow::Result;
use async_trait::async_trait;

/// Sink that logs each submission and succeeds.
///
/// Credential material (passwords, codes) is deliberately left out of the
/// log lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

#[async_trait]
impl AuthSink for ConsoleSink {
    async fn sign_in(&mut self, email: &str, _mfa_code: &str) -> Result<()> {
        tracing::info!(email, "sign-in submitted");
        Ok(())
    }

    async fn sign_up(&mut self, first_name: &str, last_name: &str, email: &str) -> Result<()> {
        tracing::info!(first_name, last_name, email, "registration submitted");
        Ok(())
    }

    async fn request_reset(&mut self, email: &str) -> Result<()> {
        tracing::info!(email, "reset link requested");
        Ok(())
    }

    async fn reset_password(&mut self, email: &str) -> Result<()> {
        tracing::info!(email, "password reset");
        Ok(())
    }
}

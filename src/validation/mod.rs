//! Client-side form validation
//!
//! Pure, synchronous field checks: a [`RuleSet`] maps field names to ordered
//! predicate rules and produces [`FieldErrors`] without touching the UI.

mod patterns;
mod rules;

pub use rules::{email_rules, password_rules, Check, FieldErrors, FieldSource, Rule, RuleSet};

//! Compiled patterns shared by the validation rules

use regex::Regex;
use std::sync::LazyLock;

/// local@domain.tld shape: no whitespace, a single `@`, a dotted domain
pub static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// Characters counted as "special" for password strength
pub const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

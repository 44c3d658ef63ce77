//! Ordered validation rules and the rule-set evaluator
//!
//! A form declares one `RuleSet`: per-field ordered rules where the first
//! failing predicate wins, plus optional pair rules comparing two fields.
//! Full validation and per-field validation share a single code path so the
//! two can never report different messages for the same value.

use super::patterns;
use std::collections::HashMap;

/// Field name → error message for every field that failed validation
pub type FieldErrors = HashMap<&'static str, &'static str>;

/// Anything that can hand the validator the current value of a named field
pub trait FieldSource {
    /// Current value of `field`; empty string if the form has no such field
    fn value(&self, field: &'static str) -> &str;
}

/// A single validation predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Value must contain something other than whitespace
    Required,
    /// Minimum number of characters
    MinLen(usize),
    /// Must match the email shape pattern
    Email,
    /// Must contain at least one special character
    HasSpecial,
    /// Must contain at least one numeric digit
    HasDigit,
    /// Exactly `n` characters, all numeric
    DigitsExactly(usize),
}

impl Check {
    /// Whether `value` satisfies this predicate
    pub fn passes(self, value: &str) -> bool {
        match self {
            Check::Required => !value.trim().is_empty(),
            Check::MinLen(n) => value.chars().count() >= n,
            Check::Email => patterns::EMAIL.is_match(value.trim()),
            Check::HasSpecial => value.chars().any(|c| patterns::SPECIAL_CHARS.contains(c)),
            Check::HasDigit => value.chars().any(|c| c.is_ascii_digit()),
            Check::DigitsExactly(n) => {
                value.chars().count() == n && value.chars().all(|c| c.is_ascii_digit())
            }
        }
    }
}

/// A predicate with the message reported when it fails
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub check: Check,
    pub message: &'static str,
}

impl Rule {
    pub fn new(check: Check, message: &'static str) -> Self {
        Self { check, message }
    }
}

/// Ordered rules for one field; the first failure short-circuits
#[derive(Debug, Clone)]
struct FieldRules {
    field: &'static str,
    rules: Vec<Rule>,
}

/// Equality constraint between two fields, reported on `field`
#[derive(Debug, Clone, Copy)]
struct PairRule {
    field: &'static str,
    other: &'static str,
    message: &'static str,
}

/// The complete rule declaration for one form step
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    fields: Vec<FieldRules>,
    pairs: Vec<PairRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the ordered rules for `field`
    pub fn field(mut self, field: &'static str, rules: Vec<Rule>) -> Self {
        self.fields.push(FieldRules { field, rules });
        self
    }

    /// Require `field` to equal `other`, reporting `message` on `field`.
    /// Pair rules run only in [`RuleSet::validate`]; they never override an
    /// error already reported for the same field.
    pub fn pair(mut self, field: &'static str, other: &'static str, message: &'static str) -> Self {
        self.pairs.push(PairRule {
            field,
            other,
            message,
        });
        self
    }

    /// First failing rule's message for a single field, or `None` if the
    /// value passes (or the field has no rules)
    pub fn validate_field(&self, field: &str, value: &str) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|f| f.field == field)?
            .rules
            .iter()
            .find(|rule| !rule.check.passes(value))
            .map(|rule| rule.message)
    }

    /// Validate every declared field, then apply pair rules.
    /// Per-field results come from [`RuleSet::validate_field`] so the full
    /// pass and the per-field pass always agree.
    pub fn validate(&self, source: &dyn FieldSource) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for field_rules in &self.fields {
            let value = source.value(field_rules.field);
            if let Some(message) = self.validate_field(field_rules.field, value) {
                errors.insert(field_rules.field, message);
            }
        }
        for pair in &self.pairs {
            if source.value(pair.field) != source.value(pair.other) {
                errors.entry(pair.field).or_insert(pair.message);
            }
        }
        errors
    }

    /// Names of all fields with declared rules, in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.field)
    }
}

/// The ordered password rule chain shared by every password field:
/// required → min length 8 → special character → digit
pub fn password_rules(required_message: &'static str) -> Vec<Rule> {
    vec![
        Rule::new(Check::Required, required_message),
        Rule::new(Check::MinLen(8), "Password must be at least 8 characters."),
        Rule::new(
            Check::HasSpecial,
            "Password must contain at least one special character.",
        ),
        Rule::new(
            Check::HasDigit,
            "Password must contain at least one numeric value.",
        ),
    ]
}

/// The email rule chain: required → shape regex
pub fn email_rules() -> Vec<Rule> {
    vec![
        Rule::new(Check::Required, "Email is required."),
        Rule::new(Check::Email, "Invalid email format."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Plain map-backed source for exercising the evaluator
    struct TestSource(HashMap<&'static str, &'static str>);

    impl TestSource {
        fn new(values: &[(&'static str, &'static str)]) -> Self {
            Self(values.iter().copied().collect())
        }
    }

    impl FieldSource for TestSource {
        fn value(&self, field: &'static str) -> &str {
            self.0.get(field).copied().unwrap_or("")
        }
    }

    fn password_set() -> RuleSet {
        RuleSet::new().field("password", password_rules("Password is required."))
    }

    mod check_tests {
        use super::*;

        #[test]
        fn test_required_rejects_empty_and_whitespace() {
            assert!(!Check::Required.passes(""));
            assert!(!Check::Required.passes("   "));
            assert!(Check::Required.passes("x"));
        }

        #[test]
        fn test_min_len_counts_chars() {
            assert!(!Check::MinLen(8).passes("abcdefg"));
            assert!(Check::MinLen(8).passes("abcdefgh"));
        }

        #[test]
        fn test_has_special() {
            assert!(!Check::HasSpecial.passes("abcdefgh"));
            assert!(Check::HasSpecial.passes("abcdefg!"));
        }

        #[test]
        fn test_has_digit() {
            assert!(!Check::HasDigit.passes("abcdefg!"));
            assert!(Check::HasDigit.passes("abcdef1!"));
        }

        #[test]
        fn test_digits_exactly() {
            assert!(Check::DigitsExactly(6).passes("123456"));
            assert!(!Check::DigitsExactly(6).passes("12345"));
            assert!(!Check::DigitsExactly(6).passes("1234567"));
            assert!(!Check::DigitsExactly(6).passes("12345a"));
        }

        #[test]
        fn test_email_rejects_non_matching_shapes() {
            for bad in ["", "plain", "no@tld", "two@@example.com", "a b@c.d"] {
                assert!(!Check::Email.passes(bad), "accepted {bad:?}");
            }
        }

        #[test]
        fn test_email_trims_before_matching() {
            assert!(Check::Email.passes("  m@example.com  "));
        }
    }

    mod rule_order_tests {
        use super::*;

        #[test]
        fn test_empty_password_reports_required_first() {
            let set = password_set();
            assert_eq!(
                set.validate_field("password", ""),
                Some("Password is required.")
            );
        }

        #[test]
        fn test_short_password_reports_length() {
            // "abc" also lacks a digit and special char; length fires first
            let set = password_set();
            assert_eq!(
                set.validate_field("password", "abc"),
                Some("Password must be at least 8 characters.")
            );
        }

        #[test]
        fn test_length_takes_precedence_for_all_short_passwords() {
            let set = password_set();
            for p in ["a", "1!", "abcdefg", "12345!a"] {
                assert_eq!(
                    set.validate_field("password", p),
                    Some("Password must be at least 8 characters."),
                    "for {p:?}"
                );
            }
        }

        #[test]
        fn test_special_char_fires_before_digit() {
            // 8 chars, no digit, no special char
            let set = password_set();
            assert_eq!(
                set.validate_field("password", "abcdefgh"),
                Some("Password must contain at least one special character.")
            );
        }

        #[test]
        fn test_digit_reported_when_special_present() {
            let set = password_set();
            assert_eq!(
                set.validate_field("password", "abcdefg!"),
                Some("Password must contain at least one numeric value.")
            );
        }

        #[test]
        fn test_valid_password_passes() {
            let set = password_set();
            assert_eq!(set.validate_field("password", "abcdef1!"), None);
        }

        #[test]
        fn test_unknown_field_has_no_rules() {
            let set = password_set();
            assert_eq!(set.validate_field("nope", ""), None);
        }
    }

    mod validate_tests {
        use super::*;

        fn credentials_set() -> RuleSet {
            RuleSet::new()
                .field("email", email_rules())
                .field("password", password_rules("Password is required."))
        }

        #[test]
        fn test_all_valid_yields_empty_errors() {
            let set = credentials_set();
            let source = TestSource::new(&[("email", "m@example.com"), ("password", "abcdef1!")]);
            assert!(set.validate(&source).is_empty());
        }

        #[test]
        fn test_each_failing_field_gets_one_message() {
            let set = credentials_set();
            let source = TestSource::new(&[("email", "not-an-email"), ("password", "")]);
            let errors = set.validate(&source);
            assert_eq!(errors.get("email"), Some(&"Invalid email format."));
            assert_eq!(errors.get("password"), Some(&"Password is required."));
            assert_eq!(errors.len(), 2);
        }

        #[test]
        fn test_full_and_per_field_agree() {
            // The cross-check property: for every field/value combination the
            // full pass and the per-field pass report identical text.
            let set = credentials_set();
            let values = [
                "",
                "   ",
                "abc",
                "abcdefgh",
                "abcdefg!",
                "abcdef1!",
                "m@example.com",
                "not-an-email",
            ];
            for value in values {
                for field in ["email", "password"] {
                    let source = TestSource::new(&[
                        ("email", if field == "email" { value } else { "m@example.com" }),
                        ("password", if field == "password" { value } else { "abcdef1!" }),
                    ]);
                    let full = set.validate(&source);
                    assert_eq!(
                        full.get(field).copied(),
                        set.validate_field(field, value),
                        "divergence for {field}={value:?}"
                    );
                }
            }
        }

        #[test]
        fn test_field_names_in_declaration_order() {
            let set = credentials_set();
            let names: Vec<_> = set.field_names().collect();
            assert_eq!(names, vec!["email", "password"]);
        }
    }

    mod pair_tests {
        use super::*;

        fn reset_set() -> RuleSet {
            RuleSet::new()
                .field("new_password", password_rules("New password is required."))
                .pair("confirm_password", "new_password", "Passwords do not match.")
        }

        #[test]
        fn test_mismatch_reports_on_confirm_field() {
            let set = reset_set();
            let source =
                TestSource::new(&[("new_password", "abcdef1!"), ("confirm_password", "abcdef1?")]);
            let errors = set.validate(&source);
            assert_eq!(
                errors.get("confirm_password"),
                Some(&"Passwords do not match.")
            );
        }

        #[test]
        fn test_matching_pair_passes() {
            let set = reset_set();
            let source =
                TestSource::new(&[("new_password", "abcdef1!"), ("confirm_password", "abcdef1!")]);
            assert!(set.validate(&source).is_empty());
        }

        #[test]
        fn test_pair_does_not_override_field_error() {
            let set = RuleSet::new()
                .field(
                    "confirm_password",
                    vec![Rule::new(Check::Required, "Confirmation is required.")],
                )
                .pair("confirm_password", "new_password", "Passwords do not match.");
            let source =
                TestSource::new(&[("new_password", "abcdef1!"), ("confirm_password", "")]);
            let errors = set.validate(&source);
            assert_eq!(
                errors.get("confirm_password"),
                Some(&"Confirmation is required.")
            );
        }
    }
}

//! Error types.

use thiserror::Error;

/// Failure to resolve a [`RuleSet`](crate::rule_set::RuleSet).
///
/// Both variants mean the caller asked for a rule set outside the closed
/// enumeration; neither is ever defaulted to a valid rule set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleSetError {
    /// A name that does not match any rule set.
    #[error("unknown rule set '{0}' (expected one of: divisible, extended-divisible, digits, divisible-or-digits)")]
    UnknownName(String),

    /// A raw discriminant outside `0..=3`.
    #[error("invalid rule set discriminant {0}")]
    InvalidDiscriminant(u8),
}

//! Rule set selection.

use std::fmt;
use std::str::FromStr;

use crate::error::RuleSetError;
use crate::rules::{Digits, Divisible, DivisibleOrDigits, ExtendedDivisible, Rule};

/// The closed set of rule strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum RuleSet {
    /// Multiples of 3 and 5.
    Divisible,
    /// Multiples of 3, 5, 7, 11 and 13.
    ExtendedDivisible,
    /// Occurrences of the digits 3 and 5.
    Digits,
    /// Divisible tokens followed by Digits tokens.
    DivisibleOrDigits,
}

impl RuleSet {
    /// All rule sets, in discriminant order.
    pub const ALL: [RuleSet; 4] = [
        RuleSet::Divisible,
        RuleSet::ExtendedDivisible,
        RuleSet::Digits,
        RuleSet::DivisibleOrDigits,
    ];

    /// Returns the canonical (kebab-case) name.
    pub fn name(self) -> &'static str {
        match self {
            RuleSet::Divisible => "divisible",
            RuleSet::ExtendedDivisible => "extended-divisible",
            RuleSet::Digits => "digits",
            RuleSet::DivisibleOrDigits => "divisible-or-digits",
        }
    }
}

/// Maps a rule set to a freshly constructed rule.
///
/// Composite rules get their parts wired here.
pub fn select(rule_set: RuleSet) -> Box<dyn Rule> {
    tracing::debug!(rule_set = rule_set.name(), "selecting rule");
    match rule_set {
        RuleSet::Divisible => Box::new(Divisible),
        RuleSet::ExtendedDivisible => Box::new(ExtendedDivisible::new()),
        RuleSet::Digits => Box::new(Digits),
        RuleSet::DivisibleOrDigits => Box::new(DivisibleOrDigits::new(Divisible, Digits)),
    }
}

/// Resolves a rule set by name, then selects its rule.
///
/// # Errors
///
/// Returns [`RuleSetError::UnknownName`] if `name` is not a rule set.
pub fn select_by_name(name: &str) -> Result<Box<dyn Rule>, RuleSetError> {
    Ok(select(name.parse()?))
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuleSet {
    type Err = RuleSetError;

    /// Accepts kebab-case, snake_case or CamelCase, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "divisible" => Ok(RuleSet::Divisible),
            "extendeddivisible" => Ok(RuleSet::ExtendedDivisible),
            "digits" => Ok(RuleSet::Digits),
            "divisibleordigits" => Ok(RuleSet::DivisibleOrDigits),
            _ => Err(RuleSetError::UnknownName(s.to_string())),
        }
    }
}

impl TryFrom<u8> for RuleSet {
    type Error = RuleSetError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        RuleSet::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(RuleSetError::InvalidDiscriminant(value))
    }
}

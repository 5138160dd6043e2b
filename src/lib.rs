//! Composable number labelling rules.
//!
//! Given an integer and a rule set, produces either a label built from
//! fixed tokens ("Fizz", "Buzz", "Boom", "Bang", "Crash") or, when no
//! token applies, the number's decimal text.
//!
//! - **Rules**: divisibility (3, 5), extended divisibility (3, 5, 7, 11,
//!   13), digit occurrence (3, 5) and divisibility-then-digits. Each is a
//!   pure [`rules::Rule`] returning `Option<String>`.
//! - **Rule sets**: the closed [`rule_set::RuleSet`] enum and the
//!   [`rule_set::select`] mapping from set to rule.
//! - **Engine**: [`engine::Engine`] wraps one rule and applies the numeral
//!   fallback, for single numbers or whole ranges.
//!
//! # Examples
//!
//! ```
//! use u_fizzbuzz::engine::Engine;
//! use u_fizzbuzz::rule_set::RuleSet;
//!
//! let engine = Engine::for_rule_set(RuleSet::DivisibleOrDigits);
//! assert_eq!(engine.text(30), "FizzBuzzFizz");
//! assert_eq!(engine.text(92), "92");
//! ```
//!
//! # Negative numbers
//!
//! Divisibility is sign-agnostic and digits are read from the absolute
//! value, so `-35` labels like `35`. The numeral fallback keeps the sign.

pub mod digits;
pub mod engine;
pub mod error;
pub mod rule_set;
pub mod rules;

#[cfg(feature = "wasm")]
pub mod wasm;

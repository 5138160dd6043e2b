//! Composite rule: divisibility tokens followed by digit tokens.

use super::digits::Digits;
use super::divisible::Divisible;
use super::types::{LabelBuffer, Rule};

/// Concatenates a [`Divisible`] result and a [`Digits`] result, in that order.
///
/// Either part may be absent; the whole is absent only when both are.
///
/// # Examples
///
/// ```
/// use u_fizzbuzz::rules::{Digits, Divisible, DivisibleOrDigits, Rule};
///
/// let rule = DivisibleOrDigits::new(Divisible, Digits);
/// assert_eq!(rule.evaluate(30).as_deref(), Some("FizzBuzzFizz"));
/// assert_eq!(rule.evaluate(92), None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DivisibleOrDigits {
    divisible: Divisible,
    digits: Digits,
}

impl DivisibleOrDigits {
    pub fn new(divisible: Divisible, digits: Digits) -> Self {
        Self { divisible, digits }
    }
}

impl Rule for DivisibleOrDigits {
    fn name(&self) -> &str {
        "DivisibleOrDigits"
    }

    fn evaluate(&self, number: i64) -> Option<String> {
        let by_divisor = self.divisible.evaluate(number);
        let by_digit = self.digits.evaluate(number);

        let mut label = LabelBuffer::from_label(by_divisor);
        label.append(by_digit.as_deref());
        label.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule() -> DivisibleOrDigits {
        DivisibleOrDigits::new(Divisible, Digits)
    }

    #[test]
    fn test_divisor_only() {
        assert_eq!(rule().evaluate(12).as_deref(), Some("Fizz"));
        assert_eq!(rule().evaluate(10).as_deref(), Some("Buzz"));
    }

    #[test]
    fn test_digit_only() {
        assert_eq!(rule().evaluate(13).as_deref(), Some("Fizz"));
    }

    #[test]
    fn test_divisor_tokens_precede_digit_tokens() {
        assert_eq!(rule().evaluate(53).as_deref(), Some("BuzzFizz"));
        assert_eq!(rule().evaluate(30).as_deref(), Some("FizzBuzzFizz"));
        assert_eq!(
            rule().evaluate(51435).as_deref(),
            Some("FizzBuzzBuzzFizzBuzz")
        );
    }

    #[test]
    fn test_absent_when_both_absent() {
        assert_eq!(rule().evaluate(92), None);
    }
}

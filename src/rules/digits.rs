//! Digit-occurrence rule.

use super::types::{LabelBuffer, Rule, Token};
use crate::digits::digits;

/// "Fizz" for every digit 3 and "Buzz" for every digit 5, in digit order.
///
/// Each occurrence counts, so 3535 yields "FizzBuzzFizzBuzz".
#[derive(Debug, Clone, Copy, Default)]
pub struct Digits;

impl Rule for Digits {
    fn name(&self) -> &str {
        "Digits"
    }

    fn evaluate(&self, number: i64) -> Option<String> {
        let mut label = LabelBuffer::new();
        for d in digits(number) {
            match d {
                3 => label.push(Token::Fizz),
                5 => label.push(Token::Buzz),
                _ => {}
            }
        }
        label.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_occurrence() {
        assert_eq!(Digits.evaluate(13).as_deref(), Some("Fizz"));
        assert_eq!(Digits.evaluate(51).as_deref(), Some("Buzz"));
    }

    #[test]
    fn test_digit_order() {
        assert_eq!(Digits.evaluate(365).as_deref(), Some("FizzBuzz"));
        assert_eq!(Digits.evaluate(532).as_deref(), Some("BuzzFizz"));
    }

    #[test]
    fn test_every_occurrence() {
        assert_eq!(
            Digits.evaluate(325395).as_deref(),
            Some("FizzBuzzFizzBuzz")
        );
        assert_eq!(Digits.evaluate(333).as_deref(), Some("FizzFizzFizz"));
    }

    #[test]
    fn test_no_matching_digit() {
        assert_eq!(Digits.evaluate(91), None);
        assert_eq!(Digits.evaluate(0), None);
    }

    #[test]
    fn test_divisibility_is_irrelevant() {
        // 12 is divisible by 3 but contains no 3 or 5.
        assert_eq!(Digits.evaluate(12), None);
    }

    #[test]
    fn test_negative_uses_magnitude() {
        assert_eq!(Digits.evaluate(-53).as_deref(), Some("BuzzFizz"));
    }
}

//! Divisibility rules.

use super::types::{LabelBuffer, Rule, Token};

/// Classic FizzBuzz: "Fizz" for multiples of 3, "Buzz" for multiples of 5.
///
/// Both conditions are checked independently, so 15 yields "FizzBuzz".
#[derive(Debug, Clone, Copy, Default)]
pub struct Divisible;

impl Divisible {
    fn label(&self, number: i64) -> LabelBuffer {
        let mut label = LabelBuffer::new();
        label.push_if(number % 3 == 0, Token::Fizz);
        label.push_if(number % 5 == 0, Token::Buzz);
        label
    }
}

impl Rule for Divisible {
    fn name(&self) -> &str {
        "Divisible"
    }

    fn evaluate(&self, number: i64) -> Option<String> {
        self.label(number).finish()
    }
}

/// [`Divisible`] followed by "Boom" (7), "Bang" (11) and "Crash" (13).
///
/// The base result is computed first by the wrapped [`Divisible`]; the
/// extra tokens are appended in that fixed order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtendedDivisible {
    base: Divisible,
}

impl ExtendedDivisible {
    pub fn new() -> Self {
        Self { base: Divisible }
    }
}

impl Rule for ExtendedDivisible {
    fn name(&self) -> &str {
        "ExtendedDivisible"
    }

    fn evaluate(&self, number: i64) -> Option<String> {
        let mut label = self.base.label(number);
        label.push_if(number % 7 == 0, Token::Boom);
        label.push_if(number % 11 == 0, Token::Bang);
        label.push_if(number % 13 == 0, Token::Crash);
        label.finish()
    }
}

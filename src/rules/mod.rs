//! Labelling rules.
//!
//! Each rule maps a number to an optional label built from fixed tokens:
//!
//! - **Divisible**: "Fizz" for multiples of 3, "Buzz" for multiples of 5.
//! - **ExtendedDivisible**: Divisible, then "Boom" (7), "Bang" (11),
//!   "Crash" (13).
//! - **Digits**: "Fizz" per digit 3, "Buzz" per digit 5.
//! - **DivisibleOrDigits**: the Divisible label followed by the Digits label.
//!
//! Rules never fall back to the numeral; see [`Engine`](crate::engine::Engine).
//! Custom rules implement the [`Rule`] trait and build their text with
//! [`LabelBuffer`].

mod combined;
mod digits;
mod divisible;
mod types;

pub use combined::DivisibleOrDigits;
pub use digits::Digits;
pub use divisible::{Divisible, ExtendedDivisible};
pub use types::{LabelBuffer, Rule, Token};

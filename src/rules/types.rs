//! Core trait for labelling rules, plus the token buffer they share.

/// A rule that maps a number to an optional text label.
///
/// Rules return `None` when they have nothing to say about a number;
/// they never return an empty string. Falling back to the decimal
/// numeral is the [`Engine`](crate::engine::Engine)'s job, not the rule's.
///
/// # Examples
///
/// ```
/// use u_fizzbuzz::rules::{LabelBuffer, Rule, Token};
///
/// // Label even numbers only.
/// struct Even;
///
/// impl Rule for Even {
///     fn name(&self) -> &str { "Even" }
///     fn evaluate(&self, number: i64) -> Option<String> {
///         let mut label = LabelBuffer::new();
///         if number % 2 == 0 {
///             label.push(Token::Fizz);
///         }
///         label.finish()
///     }
/// }
///
/// assert_eq!(Even.evaluate(4).as_deref(), Some("Fizz"));
/// assert_eq!(Even.evaluate(5), None);
/// ```
pub trait Rule: Send + Sync {
    /// Returns the name of this rule.
    fn name(&self) -> &str;

    /// Computes the label for `number`, or `None` if no token applies.
    fn evaluate(&self, number: i64) -> Option<String>;
}

/// A fixed substitution string appended when its condition holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Fizz,
    Buzz,
    Boom,
    Bang,
    Crash,
}

impl Token {
    /// Returns the text this token contributes to a label.
    pub fn as_str(self) -> &'static str {
        match self {
            Token::Fizz => "Fizz",
            Token::Buzz => "Buzz",
            Token::Boom => "Boom",
            Token::Bang => "Bang",
            Token::Crash => "Crash",
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accumulates tokens into a label that stays absent until something is
/// appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelBuffer {
    text: Option<String>,
}

impl LabelBuffer {
    /// Creates an empty (absent) buffer.
    pub fn new() -> Self {
        Self { text: None }
    }

    /// Starts from an existing rule result.
    pub fn from_label(label: Option<String>) -> Self {
        Self {
            text: label.filter(|s| !s.is_empty()),
        }
    }

    /// Appends a token.
    pub fn push(&mut self, token: Token) {
        self.push_str(token.as_str());
    }

    /// Appends the token when `condition` holds.
    pub fn push_if(&mut self, condition: bool, token: Token) {
        if condition {
            self.push(token);
        }
    }

    /// Appends another rule's result. `None` and `""` are no-ops.
    pub fn append(&mut self, label: Option<&str>) {
        if let Some(s) = label {
            self.push_str(s);
        }
    }

    fn push_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.text.get_or_insert_with(String::new).push_str(s);
    }

    /// Returns `true` if nothing has been appended.
    pub fn is_absent(&self) -> bool {
        self.text.is_none()
    }

    /// Consumes the buffer, yielding the label if any token was appended.
    pub fn finish(self) -> Option<String> {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer_is_absent() {
        let buf = LabelBuffer::new();
        assert!(buf.is_absent());
        assert_eq!(buf.finish(), None);
    }

    #[test]
    fn test_tokens_concatenate_in_push_order() {
        let mut buf = LabelBuffer::new();
        buf.push(Token::Buzz);
        buf.push(Token::Fizz);
        buf.push(Token::Crash);
        assert_eq!(buf.finish().as_deref(), Some("BuzzFizzCrash"));
    }

    #[test]
    fn test_push_if() {
        let mut buf = LabelBuffer::new();
        buf.push_if(false, Token::Fizz);
        assert!(buf.is_absent());
        buf.push_if(true, Token::Boom);
        assert_eq!(buf.finish().as_deref(), Some("Boom"));
    }

    #[test]
    fn test_append_absent_and_empty_stay_absent() {
        let mut buf = LabelBuffer::new();
        buf.append(None);
        buf.append(Some(""));
        assert!(buf.is_absent());
    }

    #[test]
    fn test_from_label_normalizes_empty() {
        assert!(LabelBuffer::from_label(Some(String::new())).is_absent());
        let mut buf = LabelBuffer::from_label(Some("Fizz".into()));
        buf.push(Token::Bang);
        assert_eq!(buf.finish().as_deref(), Some("FizzBang"));
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::Crash.to_string(), "Crash");
        assert_eq!(Token::Fizz.as_str(), "Fizz");
    }
}

//! Base-10 digit extraction.

/// Splits a number into its decimal digits, most significant first.
///
/// The sign is ignored: digits are taken from the absolute value, so
/// `-35` and `35` both yield `[3, 5]`. Zero yields `[0]`.
///
/// # Examples
///
/// ```
/// use u_fizzbuzz::digits::digits;
///
/// assert_eq!(digits(325), vec![3, 2, 5]);
/// assert_eq!(digits(-7), vec![7]);
/// ```
pub fn digits(number: i64) -> Vec<u8> {
    number
        .unsigned_abs()
        .to_string()
        .bytes()
        .map(|b| b - b'0')
        .collect()
}

//! Range rendering configuration.

/// Configuration for [`Engine::render`](super::Engine::render).
///
/// # Examples
///
/// ```
/// use u_fizzbuzz::engine::RenderConfig;
///
/// let config = RenderConfig::default()
///     .with_range(1, 100)
///     .with_separator(", ");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderConfig {
    /// First number to label (inclusive).
    pub start: i64,

    /// Last number to label (inclusive).
    pub end: i64,

    /// Separator used by `render_joined`.
    pub separator: String,

    /// Whether to label numbers in parallel using rayon.
    ///
    /// Has no effect unless the `parallel` feature is enabled.
    /// Output order is the same either way.
    pub parallel: bool,

    /// Upper bound on the number of labels a single render may produce.
    pub max_len: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            start: 1,
            end: 100,
            separator: "\n".to_string(),
            parallel: false,
            max_len: 10_000_000,
        }
    }
}

impl RenderConfig {
    pub fn with_range(mut self, start: i64, end: i64) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Number of labels the range produces.
    ///
    /// `i64::MIN..=i64::MAX` spans 2^64 numbers, so the count is a `u128`.
    pub fn len(&self) -> u128 {
        if self.start > self.end {
            0
        } else {
            (i128::from(self.end) - i128::from(self.start) + 1) as u128
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.start > self.end {
            return Err(format!(
                "start must not exceed end, got {}..={}",
                self.start, self.end
            ));
        }
        if self.max_len == 0 {
            return Err("max_len must be positive".into());
        }
        let len = self.len();
        if len > self.max_len as u128 {
            return Err(format!(
                "range {}..={} has {len} numbers, exceeding max_len {}",
                self.start, self.end, self.max_len
            ));
        }
        Ok(())
    }
}

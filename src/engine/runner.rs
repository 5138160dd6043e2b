//! Labelling engine: one rule plus the numeral fallback.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::RenderConfig;
use crate::rule_set::{select, RuleSet};
use crate::rules::Rule;

/// Wraps a single [`Rule`] and turns its optional label into text.
///
/// When the rule yields `None`, the engine substitutes the number's
/// decimal representation. This is the only place the fallback happens.
///
/// # Examples
///
/// ```
/// use u_fizzbuzz::engine::Engine;
/// use u_fizzbuzz::rule_set::RuleSet;
///
/// let engine = Engine::for_rule_set(RuleSet::Divisible);
/// assert_eq!(engine.text(15), "FizzBuzz");
/// assert_eq!(engine.text(14), "14");
/// ```
pub struct Engine {
    rule: Box<dyn Rule>,
}

impl Engine {
    /// Creates an engine around an arbitrary rule.
    pub fn new<R: Rule + 'static>(rule: R) -> Self {
        Self::from_boxed(Box::new(rule))
    }

    /// Selects the rule for `rule_set` and wraps it.
    pub fn for_rule_set(rule_set: RuleSet) -> Self {
        Self::from_boxed(select(rule_set))
    }

    /// Wraps an already boxed rule without re-boxing it.
    pub fn from_boxed(rule: Box<dyn Rule>) -> Self {
        tracing::debug!(rule = rule.name(), "engine created");
        Self { rule }
    }

    /// Returns the name of the wrapped rule.
    pub fn rule_name(&self) -> &str {
        self.rule.name()
    }

    /// Returns the label for `number`, or its decimal text if the rule
    /// has no label for it. Never empty.
    pub fn text(&self, number: i64) -> String {
        match self.rule.evaluate(number) {
            Some(label) => label,
            None => {
                tracing::trace!(number, rule = self.rule.name(), "no label, using numeral");
                number.to_string()
            }
        }
    }

    /// Labels every number in `config.start..=config.end`, in order.
    ///
    /// Uses rayon when `config.parallel` is set and the `parallel` feature
    /// is enabled; the result is identical either way.
    pub fn render(&self, config: &RenderConfig) -> Result<Vec<String>, String> {
        config.validate()?;
        Ok(self.label_range(config.start, config.end, config.parallel))
    }

    #[cfg(feature = "parallel")]
    fn label_range(&self, start: i64, end: i64, parallel: bool) -> Vec<String> {
        if parallel {
            (start..=end).into_par_iter().map(|n| self.text(n)).collect()
        } else {
            (start..=end).map(|n| self.text(n)).collect()
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn label_range(&self, start: i64, end: i64, _parallel: bool) -> Vec<String> {
        (start..=end).map(|n| self.text(n)).collect()
    }

    /// Like [`render`](Self::render), joined with `config.separator`.
    pub fn render_joined(&self, config: &RenderConfig) -> Result<String, String> {
        Ok(self.render(config)?.join(&config.separator))
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("rule", &self.rule.name())
            .finish()
    }
}

impl From<RuleSet> for Engine {
    fn from(rule_set: RuleSet) -> Self {
        Self::for_rule_set(rule_set)
    }
}

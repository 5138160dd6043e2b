//! Labelling engine.
//!
//! An [`Engine`] holds exactly one rule for its lifetime and applies the
//! fallback policy: when the rule has no label for a number, the number's
//! decimal text is returned instead. Output is therefore never empty.
//!
//! [`Engine::render`] labels a whole inclusive range, optionally in
//! parallel (feature `parallel`), configured by [`RenderConfig`].

mod config;
mod runner;

pub use config::RenderConfig;
pub use runner::Engine;

//! `TerminalReporter`: Presentation-layer implementation of `ProgressReporter`.
//!
//! Wraps `&OutputContext` and implements the `application::ports::ProgressReporter`
//! trait so application services can narrate without depending on any
//! presentation type directly.

use crate::application::ports::ProgressReporter;
use crate::output::OutputContext;

/// Terminal progress reporter that wraps an `OutputContext`.
///
/// Everything except `error()` is suppressed when `ctx.quiet`.
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
}

impl<'a> TerminalReporter<'a> {
    /// Create a new `TerminalReporter` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }
}

impl ProgressReporter for TerminalReporter<'_> {
    fn header(&self, title: &str) {
        self.ctx.section(title, true);
    }

    fn footer(&self, title: &str) {
        self.ctx.section(title, false);
    }

    fn step(&self, message: &str) {
        self.ctx.step(message);
    }

    fn success(&self, message: &str) {
        self.ctx.success(message);
    }

    fn warn(&self, message: &str) {
        self.ctx.warn(message);
    }

    fn error(&self, message: &str) {
        self.ctx.error(message);
    }

    fn info(&self, message: &str) {
        self.ctx.info(message);
    }

    fn detail(&self, key: &str, value: &str) {
        self.ctx.kv(key, value);
    }
}

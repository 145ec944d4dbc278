//! Human-readable terminal renderer for text that is not per-agent narration.

use crate::domain::Action;
use crate::output::OutputContext;

/// Renders usage and loader messages using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Note which manifest file is in use.
    pub fn render_loaded(&self, path: &std::path::Path) {
        self.ctx.info(&format!(
            "Loaded agent configurations from {}",
            path.display()
        ));
    }

    /// Render the usage text, preceded by an unknown-action notice when the
    /// operator typed something that is not an action. Printed even when quiet.
    pub fn render_usage(&self, unknown: Option<&str>) {
        if let Some(action) = unknown {
            println!("Unknown action: {action}.");
            println!();
        }
        println!("{}", usage_text());
    }
}

/// Usage summary with examples.
#[must_use]
pub fn usage_text() -> String {
    let actions: Vec<&str> = Action::ALL.iter().map(|a| a.as_str()).collect();
    format!(
        "Usage: brigade [OPTIONS] [{}]\n\
         \n\
         Example: brigade start\n  To start all defined agent containers.\n\
         \n\
         Example: brigade stop\n  To stop all running agent containers.\n\
         \n\
         Example: brigade full_cycle\n  To stop, clean up, build (if needed), and then start all agents.\n\
         \n\
         Run 'brigade --help' for options.",
        actions.join("|")
    )
}

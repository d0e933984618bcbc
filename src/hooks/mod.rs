pub mod settle;

use std::path::PathBuf;

use tracing::debug;

use crate::error::SettleResult;

/// Name of the action that flashes a compiled artifact onto the device.
/// Post-action hooks registered under this name run after a successful flash.
pub const UPLOAD_ACTION: &str = "upload";

/// Context handed to a post-action hook by the runner. Hooks are free to
/// ignore all of it; it exists so a hook can be triggered without caring
/// what the action actually produced.
#[derive(Debug, Clone)]
pub struct ActionContext {
    pub action: String,
    pub source: Vec<PathBuf>,
    pub target: Vec<PathBuf>,
}

impl ActionContext {
    /// Context for an action with no artifacts attached
    pub fn for_action(action: &str) -> ActionContext {
        ActionContext {
            action: action.to_owned(),
            source: Vec::new(),
            target: Vec::new(),
        }
    }
}

/// A completion handler registered against a named action. The runner invokes
/// it once per successful run of that action, on the runner's own thread.
pub trait PostActionHook {
    fn name(&self) -> &str;

    /// Invoked after the named action succeeds
    fn run(&self, ctx: &ActionContext) -> SettleResult<()>;
}

/// Holds post-action hooks keyed by action name, in registration order.
pub struct HookRegistry {
    hooks: Vec<(String, Box<dyn PostActionHook>)>,
}

impl HookRegistry {
    pub fn new() -> HookRegistry {
        HookRegistry { hooks: Vec::new() }
    }

    /// Register a hook to run after `action` completes successfully
    pub fn add_post_action(&mut self, action: &str, hook: Box<dyn PostActionHook>) {
        self.hooks.push((action.to_owned(), hook));
    }

    /// Run every hook registered for `ctx.action`, in registration order.
    /// The first hook error aborts the remaining hooks and is propagated
    /// unmodified to the caller.
    pub fn run_post_actions(&self, ctx: &ActionContext) -> SettleResult<()> {
        for (action, hook) in &self.hooks {
            if action == &ctx.action {
                debug!("Running post-action hook {} for {}", hook.name(), ctx.action);
                hook.run(ctx)?;
            }
        }

        Ok(())
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        HookRegistry::new()
    }
}

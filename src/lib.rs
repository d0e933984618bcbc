use error::SettleResult;
pub use hooks::{ActionContext, HookRegistry, PostActionHook, UPLOAD_ACTION};
use hooks::settle::SettleDelayHook;

pub(crate) mod constants;
pub mod error;
pub mod hooks;
pub(crate) mod util;

/// Drives a named action and fires the registered post-action hooks once the
/// action reports success. If the action fails, no hook runs and the action's
/// error is returned as-is.
pub struct UploadRunner {
    registry: HookRegistry,
}

impl UploadRunner {
    pub fn new() -> UploadRunner {
        UploadRunner {
            registry: HookRegistry::new(),
        }
    }

    /// Runner with the fixed settle delay already registered for the
    /// upload action
    pub fn with_settle_hook() -> UploadRunner {
        let mut runner = UploadRunner::new();
        runner
            .registry
            .add_post_action(UPLOAD_ACTION, Box::new(SettleDelayHook::new()));

        runner
    }

    pub fn add_post_action(&mut self, action: &str, hook: Box<dyn PostActionHook>) {
        self.registry.add_post_action(action, hook);
    }

    /// Run `action` under the given context. Post-action hooks fire only
    /// after the action returns Ok, and the runner returns only after the
    /// last hook has returned.
    pub fn run_action<F>(&self, ctx: ActionContext, action: F) -> SettleResult<()>
    where
        F: FnOnce(&ActionContext) -> SettleResult<()>,
    {
        action(&ctx)?;
        self.registry.run_post_actions(&ctx)
    }
}

impl Default for UploadRunner {
    fn default() -> Self {
        UploadRunner::new()
    }
}

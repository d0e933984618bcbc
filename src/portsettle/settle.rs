use clap::Parser;
use portsettle::error::SettleResult;
use portsettle::hooks::settle::SettleDelayHook;
use portsettle::{ActionContext, PostActionHook, UPLOAD_ACTION};

#[derive(Parser, Debug, Clone)]
pub(crate) struct SettleOptions {
    /// Show a spinner while waiting
    #[clap(short, long, default_value_t = false)]
    progress: bool,
}

/// Runs the settle hook standalone, for use right after an external flash
/// tool has finished uploading.
pub(crate) fn handle_settle(opts: SettleOptions) -> SettleResult<()> {
    let mut hook = SettleDelayHook::new();
    hook.spinner(opts.progress);

    let ctx = ActionContext::for_action(UPLOAD_ACTION);
    hook.run(&ctx)?;

    Ok(())
}

use std::thread;
use std::time::{Duration, Instant};

use tracing::info;

use super::{ActionContext, PostActionHook};
use crate::constants::{POST_UPLOAD_SETTLE_DELAY_MS, SPINNER_TICK_MS};
use crate::error::SettleResult;
use crate::util::create_settle_spinner;

/// Blocks for a fixed duration after an upload so the device's serial/USB
/// interface has time to reset and re-enumerate before a serial monitor or
/// other tooling tries to open the port.
///
/// The hook keeps no state between invocations; running it N times gives N
/// independent delays.
pub struct SettleDelayHook {
    delay: Duration,
    spinner_enable: bool,
}

impl SettleDelayHook {
    pub fn new() -> SettleDelayHook {
        SettleDelayHook {
            delay: Duration::from_millis(POST_UPLOAD_SETTLE_DELAY_MS),
            spinner_enable: false,
        }
    }

    /// Show an elapsed-time spinner while waiting
    pub fn spinner(&mut self, enable: bool) {
        self.spinner_enable = enable;
    }
}

impl Default for SettleDelayHook {
    fn default() -> Self {
        SettleDelayHook::new()
    }
}

impl PostActionHook for SettleDelayHook {
    fn name(&self) -> &str {
        "settle-delay"
    }

    fn run(&self, _ctx: &ActionContext) -> SettleResult<()> {
        info!("Wait for device/port to get online again...");

        if self.spinner_enable {
            let spinner = create_settle_spinner("Waiting for port");
            let deadline = Instant::now() + self.delay;
            while Instant::now() < deadline {
                thread::sleep(Duration::from_millis(SPINNER_TICK_MS));
                spinner.tick();
            }
            spinner.finish_and_clear();
        } else {
            thread::sleep(self.delay);
        }

        Ok(())
    }
}

/// Settle delay after an upload, carried over unchanged from the device this
/// was tuned on. Shortening it can reintroduce the race where a monitor opens
/// the port before the device has re-enumerated.
pub(crate) const POST_UPLOAD_SETTLE_DELAY_MS: u64 = 2000;

pub(crate) const SPINNER_TICK_MS: u64 = 100;

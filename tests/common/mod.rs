use std::sync::{LazyLock, Mutex};

use flexi_logger::LoggerHandle;
use pair_partition::logging;
use scopeguard::{OnUnwind, ScopeGuard};

pub mod slow_counter;

#[allow(dead_code)]
pub static LOGGER: LazyLock<Mutex<LoggerHandle>> =
    LazyLock::new(|| Mutex::new(logging::start_captured("info").unwrap()));

#[allow(dead_code)]
pub fn init_logger() {
    let _ = &*LOGGER;
}

/// Logs the full state if the test panics while holding it.
#[allow(dead_code)]
pub fn guard<T: std::fmt::Debug>(t: T) -> ScopeGuard<T, impl FnOnce(T), OnUnwind> {
    scopeguard::guard_on_unwind(t, |t| log::error!("Crash with {t:?}"))
}

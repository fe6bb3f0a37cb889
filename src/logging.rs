//! Console sink behind `debug_log!` / `warn_log!`.
//!
//! Native builds (integration tests, headless use) have no browser console,
//! so both sinks compile down to nothing there.

use std::cell::Cell;

thread_local! {
    static DEBUG_ENABLED: Cell<bool> = Cell::new(true);
}

pub fn set_debug_enabled(enabled: bool) {
    DEBUG_ENABLED.with(|flag| flag.set(enabled));
}

pub fn debug_enabled() -> bool {
    DEBUG_ENABLED.with(Cell::get)
}

pub fn debug(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if debug_enabled() {
            web_sys::console::log_1(&msg.into());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = msg;
    }
}

pub fn warn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::warn_1(&msg.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = msg;
    }
}

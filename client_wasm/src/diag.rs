//! Logging macros that route to the browser console in WASM builds and
//! compile to no-ops in native/test builds.

#[cfg(target_arch = "wasm32")]
macro_rules! console_log {
    ($($arg:tt)*) => {
        web_sys::console::log_1(&format!($($arg)*).into())
    };
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! console_log {
    ($($arg:tt)*) => {
        if false { let _ = format_args!($($arg)*); }
    };
}

#[cfg(target_arch = "wasm32")]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        web_sys::console::warn_1(&format!($($arg)*).into())
    };
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        if false { let _ = format_args!($($arg)*); }
    };
}

pub(crate) use console_log;
pub(crate) use console_warn;

//! Logging macros shared across the workspace.
//!
//! Thin wrappers over [`tracing`] events so every crate logs through the
//! same levels without caring how the subscriber renders them. `success!`
//! logs at INFO under its own target, which the CLI formatter styles apart
//! from ordinary progress messages.

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        tracing::error!($($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        tracing::info!(target: "sweepr::success", $($arg)*)
    };
}

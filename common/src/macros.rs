//! Status reporting macros.
//!
//! Every crate reports progress through these so the CLI formatter can pick a
//! symbol by target instead of parsing messages.

pub const SUCCESS_TARGET: &str = "drill::success";

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::__tracing::info!(target: "drill::status", $($arg)+)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)+) => {
        $crate::__tracing::info!(target: "drill::success", $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::__tracing::warn!(target: "drill::status", $($arg)+)
    };
}

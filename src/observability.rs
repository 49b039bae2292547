//! Structured diagnostics for the unwinder and the driver.
//!
//! The `log_metric!` macro renders key/value pairs as a single JSON-like line
//! and hands it to the `log` facade at `debug` level. Nothing is printed unless
//! the host installs a logger (the `speedy` binary uses `env_logger`).

/// Logs a structured key-value metric string at debug level.
///
/// # Example
/// ```
/// use speedy::log_metric;
/// let depth = 4;
/// log_metric!("event"="unwind_step", "depth"=&depth);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        if ::log::log_enabled!(::log::Level::Debug) {
            // Collect each pair as a JSON string fragment
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+

            ::log::debug!("SPEEDY_METRIC: {{ {} }}", parts.join(", "));
        }
    };
}

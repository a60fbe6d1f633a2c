//! Process-wide logging setup.

/// Tracing subscriber configuration (filters, formatting).
pub mod tracing;

pub use self::tracing::LogFormat;

/// Initialize process-wide logging with the format chosen by the environment.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(LogFormat::from_env());
}

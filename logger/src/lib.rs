//! Helper crate for fast log initializing.
//!
//! Reexports the [`log`] macros and sets an [`env_logger`] up with colored
//! levels. The `LOG_LEVEL` environment variable always wins over the level
//! passed in code.
//!
//! Example:
//! ```rust
//! use logger::*;
//!
//! init_logger(None);
//!
//! info!("Logger initialized successfully!");
//! ```

pub use log::{debug, error, info, trace, warn};

/// Default log level for debug compilations.
const DEBUG_LOG_LEVEL: &str = "trace";

/// Default log level for release compilations.
const RELEASE_LOG_LEVEL: &str = "info";

/// Environment variable for log level setting.
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Environment variable for log style setting.
pub const LOG_STYLE_ENV: &str = "LOG_STYLE";

/// Default log style.
const LOG_STYLE: &str = "auto";

use env_logger::fmt::Formatter;
use log::Record;
use std::io;

/// Logger initializer. Run this function in binary crate to initialize logging.
/// If `level` is none, the build profile picks one. Later calls are ignored.
pub fn init_logger(level: Option<&str>) {
	let builder = env_logger::Builder::from_env(
		env_logger::Env::default()
			.filter_or(LOG_LEVEL_ENV, level.unwrap_or_else(|| default_level()))
			.write_style_or(LOG_STYLE_ENV, LOG_STYLE),
	)
	.format(format)
	.try_init();

	if let Err(e) = builder {
		log::warn!("Logger is already initialized: {}", e);
	}
}

/// Level used when neither the caller nor the environment asks for one.
pub fn default_level() -> &'static str {
	match cfg!(debug_assertions) {
		true => DEBUG_LOG_LEVEL,
		false => RELEASE_LOG_LEVEL,
	}
}

/// Logging output format: colored level, module path, message.
fn format(buf: &'_ mut Formatter, record: &'_ Record<'_>) -> io::Result<()> {
	use env_logger::fmt::Color;
	use log::Level;
	use std::io::Write;

	let mut style = buf.style();
	match record.level() {
		Level::Error => style.set_color(Color::Red).set_bold(true),
		Level::Warn => style.set_color(Color::Yellow),
		Level::Info => style.set_color(Color::Cyan),
		Level::Debug => style.set_color(Color::Magenta),
		Level::Trace => style.set_color(Color::Blue),
	};

	writeln!(
		buf,
		"{}\t{}\t{}",
		style.value(record.level()),
		record.target(),
		record.args()
	)
}

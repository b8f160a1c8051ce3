//! # DiwKit
//!
//! G-code generator for serpentine direct-ink-write test prints.
//!
//! ## Architecture
//!
//! DiwKit is organized as a workspace with multiple crates:
//!
//! 1. **diwkit-core** - Trace, layer and instruction data model, rounding helpers, errors
//! 2. **diwkit-designer** - Serpentine and segment geometry, positioning, layer stacking
//! 3. **diwkit-camtools** - Nozzle motion model, printer, G-code and CSV output
//! 4. **diwkit-settings** - TOML/JSON configuration with key lookup
//! 5. **diwkit** - Print job assembly and the command line binary
//!
//! ## Pipeline
//!
//! ```text
//! Config ─► set_position ─► Serpentine / Segment ─► Sketch ─► Printer(Nozzle) ─► G-code
//! ```

pub mod job;

pub use diwkit_camtools as camtools;
pub use diwkit_core::{data, instruction};
pub use diwkit_designer as designer;
pub use diwkit_settings as settings;

pub use job::{Outline, PrintJob};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, leaving stdout to command output
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

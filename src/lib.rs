// filewright - edit local files through a hosted text-generation model
// The model never touches the disk: we read, we prompt, we write.

pub mod config;
pub mod editor;
pub mod error;
pub mod integrations;
pub mod utils;

use anyhow::Result;
use tracing::info;

pub use config::EditorConfig;
pub use editor::FileEditor;
pub use error::{EditError, EditResult, ErrorKind};
pub use integrations::TextGenerator;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Initialize logging for the CLI
///
/// Logs go to stderr so stdout carries only the edited content.
/// `RUST_LOG` overrides the level chosen by `verbose`.
pub fn init_with_logger(verbose: bool) -> Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "filewright=debug" } else { "filewright=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(verbose)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    info!("Initializing filewright v{}", version());

    Ok(())
}

//! Whole-file edits driven by a text-generation model.
//!
//! [`FileEditor::edit`] reads a file, asks the model for its complete
//! replacement and writes the answer back verbatim. The model's output is
//! trusted as-is: an empty or unrelated reply still replaces the file.

use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::EditorConfig;
use crate::error::{EditError, EditResult};
use crate::integrations::{build_generator, TextGenerator};
use crate::utils::fs::{LocalFs, TextStore};

pub mod prompt;

pub use prompt::build_edit_prompt;

/// Instruction used by the `demo` command
pub const DEMO_INSTRUCTION: &str = "Add a friendly header and make the text more professional";

/// Initial content of the `demo` sample file
pub const DEMO_CONTENT: &str = "Hello world\nThis is a test file.\n";

pub struct FileEditor {
    generator: Arc<dyn TextGenerator>,
    store: Arc<dyn TextStore>,
}

impl FileEditor {
    pub fn new(generator: Arc<dyn TextGenerator>, store: Arc<dyn TextStore>) -> Self {
        Self { generator, store }
    }

    /// Editor over the local filesystem
    pub fn local(generator: Arc<dyn TextGenerator>) -> Self {
        Self::new(generator, Arc::new(LocalFs))
    }

    /// Build the configured provider and an editor over the local filesystem
    pub fn from_config(config: &EditorConfig) -> EditResult<Self> {
        Self::from_config_with_store(config, Arc::new(LocalFs))
    }

    pub fn from_config_with_store(
        config: &EditorConfig,
        store: Arc<dyn TextStore>,
    ) -> EditResult<Self> {
        let generator = build_generator(config)?;
        Ok(Self::new(generator, store))
    }

    /// Replace the content of `path` with the model's answer to
    /// `instruction`, returning the new content.
    pub async fn edit(&self, path: impl AsRef<Path>, instruction: &str) -> EditResult<String> {
        let path = path.as_ref();

        info!("Reading {}...", path.display());
        let content = self.read(path)?;

        info!("Sending to model with instruction: {}", instruction);
        let prompt = build_edit_prompt(path, &content, instruction);
        let updated = self.generator.generate(&prompt).await?;
        debug!("Model returned {} bytes", updated.len());

        info!("Writing updated content to {}...", path.display());
        self.store
            .write(path, &updated)
            .map_err(|e| EditError::write_error(path, e))?;

        info!("File updated successfully");
        Ok(updated)
    }

    fn read(&self, path: &Path) -> EditResult<String> {
        read_text(self.store.as_ref(), path)
    }
}

/// Build the prompt `edit` would send for `path`, reading the file through
/// `store`. Needs no generator, so no credential.
pub fn preview_prompt(store: &dyn TextStore, path: &Path, instruction: &str) -> EditResult<String> {
    let content = read_text(store, path)?;
    Ok(build_edit_prompt(path, &content, instruction))
}

fn read_text(store: &dyn TextStore, path: &Path) -> EditResult<String> {
    store
        .read_to_string(path)
        .map_err(|e| EditError::read_error(path, e))
}

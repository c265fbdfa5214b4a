use std::path::Path;

/// Build the request asking the model for the full replacement content of
/// `path`. The current content is embedded verbatim inside a fenced block.
pub fn build_edit_prompt(path: &Path, content: &str, instruction: &str) -> String {
    format!(
        "You are editing the file: {}\n\n\
         Current content:\n\
         ```\n\
         {}\n\
         ```\n\n\
         Task: {}\n\n\
         Please provide the complete updated file content. \
         Return ONLY the file content, no explanations.",
        path.display(),
        content,
        instruction
    )
}

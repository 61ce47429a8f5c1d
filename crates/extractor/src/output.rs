use crate::error::{ExtractError, Result};
use crate::types::TemplateCollection;
use std::fs;
use std::path::Path;

/// Assignment header the visualizer expects when loading the artifact.
pub const OUTPUT_PREFIX: &str = "const TEMPLATES = ";
/// Statement terminator appended after the JSON object.
pub const OUTPUT_SUFFIX: &str = ";";

/// Render the collection as the `const TEMPLATES = {...};` artifact text,
/// with the JSON object 2-space indented.
pub fn render(collection: &TemplateCollection) -> Result<String> {
    let json = serde_json::to_string_pretty(&collection.to_json()?)?;
    Ok(format!("{OUTPUT_PREFIX}{json}{OUTPUT_SUFFIX}"))
}

/// Render and write the artifact, truncating any previous file.
pub fn write_artifact(path: &Path, collection: &TemplateCollection) -> Result<()> {
    let text = render(collection)?;
    fs::write(path, text).map_err(|source| ExtractError::WriteArtifact {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Wrote {} records to {}", collection.len(), path.display());
    Ok(())
}

use jsx_i18n::ExtractorConfig;
use std::fs;
use std::path::Path;

/// Reads an extractor configuration file (JSON).
pub fn load(path: &Path) -> anyhow::Result<ExtractorConfig> {
    let content = fs::read_to_string(path)?;
    let config = ExtractorConfig::from_json(&content)?;
    Ok(config)
}

/// Loads `path` when given, otherwise the defaults.
pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<ExtractorConfig> {
    match path {
        Some(path) => load(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path.display(), e)),
        None => Ok(ExtractorConfig::default()),
    }
}

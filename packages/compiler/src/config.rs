//! Extractor configuration
//!
//! Names of the translation markers and the attribute whitelist. Every field
//! has a default, so `{}` is a valid configuration.

use crate::error::{ExtractionError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// `tag|attribute`, with `*` matching any tag
static WHITELIST_ENTRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\*|[A-Za-z_$][\w$.:-]*)\|[A-Za-z_][\w:.-]*$").unwrap());

pub const DEFAULT_BLOCK_ELEMENT: &str = "I18N";
pub const DEFAULT_BLOCK_FUNCTION: &str = "i18n";
pub const DEFAULT_ID_ATTRIBUTE: &str = "i18n-id";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractorConfig {
    /// Element marking a translation block (`<I18N>...</I18N>`)
    pub block_element: String,
    /// Function marking a plain string message (`i18n("...")`)
    pub block_function: String,
    /// Reserved attribute carrying an element identifier
    pub id_attribute: String,
    /// Extra `tag|attribute` whitelist entries
    pub attributes: Vec<String>,
    /// Use only `attributes`, dropping the built-in whitelist
    pub replace_default_attributes: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        ExtractorConfig {
            block_element: DEFAULT_BLOCK_ELEMENT.to_string(),
            block_function: DEFAULT_BLOCK_FUNCTION.to_string(),
            id_attribute: DEFAULT_ID_ATTRIBUTE.to_string(),
            attributes: Vec::new(),
            replace_default_attributes: false,
        }
    }
}

impl ExtractorConfig {
    pub fn from_json(content: &str) -> Result<Self> {
        let config: ExtractorConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("blockElement", &self.block_element),
            ("blockFunction", &self.block_function),
            ("idAttribute", &self.id_attribute),
        ] {
            if value.trim().is_empty() {
                return Err(ExtractionError::Config(format!("`{}` must not be empty", field)));
            }
        }

        if let Some(entry) = self.attributes.iter().find(|e| !WHITELIST_ENTRY.is_match(e)) {
            return Err(ExtractionError::Config(format!(
                "invalid whitelist entry `{}`, expected `tag|attribute`",
                entry
            )));
        }

        Ok(())
    }
}

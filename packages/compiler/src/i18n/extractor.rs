//! Message Extractor
//!
//! Wires the default naming and whitelisting together: every block is
//! validated, then serialized. Blocks are independent of each other, so
//! several of them are extracted in parallel.

use crate::config::ExtractorConfig;
use crate::error::Result;
use crate::i18n::naming::JsxNaming;
use crate::i18n::serializer::MessageSerializer;
use crate::i18n::validation::validate_message;
use crate::i18n::whitelisting::AttributeWhitelist;
use crate::jsx::{element_from_value, Element};
use crate::logging::{Logger, NullLogger};
use crate::parse_util::ParseSourceSpan;
use rayon::prelude::*;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// How a message was marked in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageKind {
    /// `i18n("...")`
    Call,
    /// `<I18N>...</I18N>`
    Element,
}

/// One extracted message
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedMessage {
    pub message: String,
    pub kind: MessageKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<ParseSourceSpan>,
}

pub struct MessageExtractor {
    config: ExtractorConfig,
    naming: JsxNaming,
    whitelist: AttributeWhitelist,
    logger: Arc<dyn Logger>,
}

impl MessageExtractor {
    pub fn new(config: ExtractorConfig, logger: Arc<dyn Logger>) -> Result<Self> {
        config.validate()?;
        Ok(MessageExtractor {
            naming: JsxNaming::from_config(&config),
            whitelist: AttributeWhitelist::new(&config, logger.clone()),
            config,
            logger,
        })
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    pub fn logger(&self) -> &dyn Logger {
        self.logger.as_ref()
    }

    pub fn serializer(&self) -> MessageSerializer<'_> {
        MessageSerializer::new(&self.naming, &self.whitelist)
    }

    /// Validates and serializes one translation block.
    pub fn extract_block(&self, root: &Element) -> Result<String> {
        validate_message(root, &self.naming, &self.whitelist)?;
        self.serializer().extract_message(root)
    }

    /// Converts a `JSXElement` JSON node, then extracts it.
    pub fn extract_block_value(&self, node: &Value) -> Result<String> {
        self.extract_block(&element_from_value(node)?)
    }

    /// Extracts independent blocks in parallel. Results keep input order; on
    /// failure the error of the earliest failing block is returned.
    pub fn extract_blocks(&self, roots: &[Element]) -> Result<Vec<String>> {
        let results: Vec<Result<String>> = roots.par_iter().map(|root| self.extract_block(root)).collect();
        results.into_iter().collect()
    }
}

impl Default for MessageExtractor {
    fn default() -> Self {
        let config = ExtractorConfig::default();
        let logger: Arc<dyn Logger> = Arc::new(NullLogger::new());
        MessageExtractor {
            naming: JsxNaming::from_config(&config),
            whitelist: AttributeWhitelist::new(&config, logger.clone()),
            config,
            logger,
        }
    }
}

//! I18n Module
//!
//! Message extraction from JSX translation blocks

pub mod extractor;
pub mod naming;
pub mod scan;
pub mod serializer;
pub mod validation;
pub mod whitelisting;

// Re-export commonly used items
pub use extractor::{ExtractedMessage, MessageExtractor, MessageKind};
pub use naming::{JsxNaming, Naming};
pub use scan::{scan_json, scan_program};
pub use serializer::MessageSerializer;
pub use validation::validate_message;
pub use whitelisting::{default_whitelist, AttributeWhitelist, Whitelist};

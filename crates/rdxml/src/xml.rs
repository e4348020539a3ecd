//! XML document model, grammar and formatting

pub mod format;
pub mod model;
pub mod parser;

pub use format::TreePrinter;
pub use model::{Document, Element, DEFAULT_VERSION};
pub use parser::{Config, Parser, MAX_SAFE_DEPTH};

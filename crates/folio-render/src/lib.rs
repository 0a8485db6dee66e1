//! Static HTML rendering for portfolio documents.
//!
//! Serializes a portfolio into one self-contained HTML document (inline
//! styles, embedded CSS, scroll-reveal asset references) and writes the
//! export artifact.

pub mod export;
pub mod sections;
pub mod serializer;
pub mod templates;

pub use export::{export_to_file, ExportError, EXPORT_FILE_NAME};
pub use sections::{render_section, render_sections};
pub use serializer::serialize;
pub use templates::{ShellContext, TemplateEngine, DOCUMENT_TITLE};

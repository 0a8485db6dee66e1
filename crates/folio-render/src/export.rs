//! Export trigger: write the serialized document to disk.

use std::fs;
use std::path::{Path, PathBuf};

use folio_doc::Portfolio;

use crate::serializer::serialize;

/// Default export filename.
pub const EXPORT_FILE_NAME: &str = "portfolio.html";

/// Errors that can occur during export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to write export: {0}")]
    WriteError(String),
}

/// Serialize `portfolio` and write it to `output`.
///
/// If `output` is a directory, the document lands there as
/// `portfolio.html`. The write is a pass-through of the serializer's bytes;
/// no post-processing is applied. Returns the path written.
pub fn export_to_file(portfolio: &Portfolio, output: &Path) -> Result<PathBuf, ExportError> {
    let path = if output.is_dir() {
        output.join(EXPORT_FILE_NAME)
    } else {
        output.to_path_buf()
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| ExportError::WriteError(e.to_string()))?;
        }
    }

    let html = serialize(portfolio);
    fs::write(&path, &html).map_err(|e| ExportError::WriteError(e.to_string()))?;

    tracing::info!("Exported {} bytes to {}", html.len(), path.display());

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_doc::{HeroContent, Section, SectionContent};
    use std::fs;
    use tempfile::tempdir;

    fn sample_portfolio() -> Portfolio {
        let mut portfolio = Portfolio::new();
        portfolio.sections.push(Section::with_id(
            "hero",
            SectionContent::Hero(HeroContent {
                heading: Some("Hi".to_string()),
                ..HeroContent::default()
            }),
        ));
        portfolio
    }

    #[test]
    fn exports_into_a_directory_under_the_default_name() {
        let temp = tempdir().unwrap();

        let path = export_to_file(&sample_portfolio(), temp.path()).unwrap();

        assert_eq!(path.file_name().unwrap(), EXPORT_FILE_NAME);
        assert!(path.exists());
    }

    #[test]
    fn written_bytes_match_the_serializer_exactly() {
        let temp = tempdir().unwrap();
        let portfolio = sample_portfolio();

        let path = export_to_file(&portfolio, &temp.path().join("out.html")).unwrap();

        let written = fs::read_to_string(path).unwrap();
        assert_eq!(written, serialize(&portfolio));
    }

    #[test]
    fn creates_missing_parent_directories() {
        let temp = tempdir().unwrap();
        let nested = temp.path().join("a/b/portfolio.html");

        let path = export_to_file(&sample_portfolio(), &nested).unwrap();

        assert!(path.exists());
    }
}

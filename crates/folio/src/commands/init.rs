//! Initialize a portfolio in the current directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use folio_doc::{
    AboutContent, ContactContent, DocumentStore, HeroContent, Portfolio, Section, SectionContent,
};

/// Run the init command.
pub async fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing folio...");

    let config_path = Path::new("folio.toml");
    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG).context("Failed to write folio.toml")?;
        tracing::info!("Created folio.toml");
    } else {
        tracing::warn!("folio.toml already exists. Use --yes to overwrite.");
    }

    let document_path = Path::new("portfolio.json");
    if !document_path.exists() || yes {
        let json = starter_portfolio()?
            .to_json()
            .context("Failed to encode starter portfolio")?;
        fs::write(document_path, json).context("Failed to write portfolio.json")?;
        tracing::info!("Created portfolio.json");
    } else {
        tracing::warn!("portfolio.json already exists. Use --yes to overwrite.");
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'folio preview' to open the live preview.");

    Ok(())
}

/// Build the starter document through the store, the same way the editing
/// toolbar does: a fresh id plus variant-appropriate initial content per
/// section.
fn starter_portfolio() -> Result<Portfolio> {
    let mut store = DocumentStore::new();

    store
        .add_section(Section::new(SectionContent::Hero(HeroContent {
            heading: Some("Your Name".to_string()),
            subheading: Some("What you do, in one line".to_string()),
            ..HeroContent::default()
        })))
        .context("Failed to add hero section")?;

    store
        .add_section(Section::new(SectionContent::About(AboutContent {
            title: Some("About Me".to_string()),
            bio: Some("A few sentences about who you are and the work you enjoy.".to_string()),
            skills: vec!["Rust".to_string(), "TypeScript".to_string()],
            ..AboutContent::default()
        })))
        .context("Failed to add about section")?;

    store
        .add_section(Section::new(SectionContent::Contact(ContactContent {
            title: Some("Get in Touch".to_string()),
            email: Some("you@example.com".to_string()),
            ..ContactContent::default()
        })))
        .context("Failed to add contact section")?;

    Ok(store.into_portfolio())
}

const DEFAULT_CONFIG: &str = r#"# Folio Configuration

[portfolio]
# Portfolio document
file = "portfolio.json"

# Export output
output = "portfolio.html"

[preview]
# Preview server port
port = 7777

# Preview server host
host = "127.0.0.1"
"#;

//! Portfolio to standalone HTML document.

use folio_doc::Portfolio;

use crate::sections::render_sections;
use crate::templates::{ShellContext, TemplateEngine, DOCUMENT_TITLE};

/// Serialize a portfolio to one self-contained HTML document.
///
/// Pure and total: any well-formed portfolio serializes without error, in
/// section order, with the dark/light body palette picked by
/// `theme.dark_mode`. The preview server serves these exact bytes, so the
/// preview and the exported artifact cannot differ.
pub fn serialize(portfolio: &Portfolio) -> String {
    let dark = portfolio.theme.dark_mode;

    let context = ShellContext {
        title: DOCUMENT_TITLE.to_string(),
        body_color: if dark { "#f3f4f6" } else { "#1f2937" }.to_string(),
        body_background: if dark { "#111827" } else { "#f9fafb" }.to_string(),
        card_color: if dark { "#1f2937" } else { "#ffffff" }.to_string(),
        sections: render_sections(portfolio),
    };

    // The shell template is static and the context is always serializable,
    // so rendering cannot fail for a well-formed portfolio.
    TemplateEngine::new()
        .render_document(&context)
        .expect("document shell always renders")
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_doc::{
        DocumentStore, HeroContent, Section, SectionContent, SectionKind, ThemePatch,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_one_block_per_section_in_order() {
        let mut store = DocumentStore::new();
        for kind in [SectionKind::Hero, SectionKind::About, SectionKind::Contact] {
            store
                .add_section(Section::new(SectionContent::initial(kind)))
                .unwrap();
        }

        let html = serialize(store.portfolio());

        assert_eq!(html.matches("<section").count(), 3);
    }

    #[test]
    fn round_trips_hero_edits_through_the_store() {
        let mut store = DocumentStore::new();
        store
            .add_section(Section::with_id(
                "hero",
                SectionContent::Hero(HeroContent {
                    heading: Some("Hi".to_string()),
                    subheading: Some("Engineer".to_string()),
                    ..HeroContent::default()
                }),
            ))
            .unwrap();

        let html = serialize(store.portfolio());
        assert!(html.contains("Hi"));
        assert!(html.contains("Engineer"));

        // Wholesale replacement without the subheading removes its markup
        // entirely from a re-serialization.
        store
            .update_section(
                "hero",
                SectionContent::Hero(HeroContent {
                    heading: Some("Hi".to_string()),
                    ..HeroContent::default()
                }),
            )
            .unwrap();

        let html = serialize(store.portfolio());
        assert!(html.contains("Hi"));
        assert!(!html.contains("Engineer"));
    }

    #[test]
    fn light_theme_uses_the_light_palette() {
        let html = serialize(&folio_doc::Portfolio::new());

        assert!(html.contains("color: #1f2937;"));
        assert!(html.contains("background-color: #f9fafb;"));
    }

    #[test]
    fn dark_mode_switches_the_body_palette() {
        let mut store = DocumentStore::new();
        store.update_theme(ThemePatch {
            dark_mode: Some(true),
            ..ThemePatch::default()
        });

        let html = serialize(store.portfolio());

        assert!(html.contains("color: #f3f4f6;"));
        assert!(html.contains("background-color: #111827;"));
        assert!(html.contains("background-color: #1f2937;"));
    }

    #[test]
    fn unknown_sections_keep_their_position() {
        let json = r#"{
            "sections": [
                {"id": "a", "type": "hero", "content": {"heading": "First"}},
                {"id": "b", "type": "mystery", "content": {}},
                {"id": "c", "type": "hero", "content": {"heading": "Last"}}
            ]
        }"#;
        let portfolio = folio_doc::Portfolio::from_json(json).unwrap();

        let html = serialize(&portfolio);

        assert_eq!(html.matches("<section").count(), 3);
        let first = html.find("First").unwrap();
        let last = html.find("Last").unwrap();
        assert!(first < last);
    }

    #[test]
    fn serialization_is_deterministic() {
        let mut store = DocumentStore::new();
        store
            .add_section(Section::new(SectionContent::initial(SectionKind::About)))
            .unwrap();

        assert_eq!(serialize(store.portfolio()), serialize(store.portfolio()));
    }
}

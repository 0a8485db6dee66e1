//! Document store: the single mutation surface for a portfolio.
//!
//! Collaborators (toolbar, section editor, drag reorder) never touch the
//! document directly; they go through a caller-owned `DocumentStore` handle.
//! Every operation is a synchronous, total state transition with no I/O.

use crate::document::{DeviceType, Portfolio, ThemePatch};
use crate::section::{Section, SectionContent};

/// Caller-contract violations surfaced by the store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Section id already exists: {0}")]
    DuplicateId(String),

    #[error("Section {id} is a {existing} section; replacement content is {incoming}")]
    KindMismatch {
        id: String,
        existing: &'static str,
        incoming: &'static str,
    },
}

/// Owns one portfolio for the lifetime of an editing session.
///
/// The store is an explicit handle rather than process-wide state, so any
/// number of independent sessions can run side by side.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    portfolio: Portfolio,
}

impl DocumentStore {
    /// Start a session with an empty portfolio and the default theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session over an existing document.
    pub fn with_portfolio(portfolio: Portfolio) -> Self {
        Self { portfolio }
    }

    /// The current document.
    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    /// End the session, taking the document.
    pub fn into_portfolio(self) -> Portfolio {
        self.portfolio
    }

    /// Append a section. The id must not collide with an existing one;
    /// callers are expected to use a collision-resistant generator
    /// (`Section::new`).
    pub fn add_section(&mut self, section: Section) -> Result<(), StoreError> {
        if self.portfolio.section(&section.id).is_some() {
            return Err(StoreError::DuplicateId(section.id));
        }
        self.portfolio.sections.push(section);
        Ok(())
    }

    /// Remove the section with the given id; silently ignored if absent.
    pub fn remove_section(&mut self, id: &str) {
        self.portfolio.sections.retain(|s| s.id != id);
    }

    /// Replace the entire content of the section with the given id.
    ///
    /// This is a wholesale replacement, not a merge: an editor that wants to
    /// change one field reads the current content, rebuilds the full value,
    /// and passes it here. Absent ids are silently ignored. The section's
    /// variant is fixed at creation, so content of a different variant is
    /// rejected.
    pub fn update_section(
        &mut self,
        id: &str,
        content: SectionContent,
    ) -> Result<(), StoreError> {
        let Some(section) = self.portfolio.sections.iter_mut().find(|s| s.id == id) else {
            return Ok(());
        };
        if !section.content.is_same_kind(&content) {
            return Err(StoreError::KindMismatch {
                id: id.to_string(),
                existing: section.content.kind_name(),
                incoming: content.kind_name(),
            });
        }
        section.content = content;
        Ok(())
    }

    /// Replace the section list wholesale with a caller-supplied permutation.
    ///
    /// The store does not verify that `sections` is a permutation of the
    /// current ids; that is the reorder collaborator's contract.
    pub fn reorder_sections(&mut self, sections: Vec<Section>) {
        self.portfolio.sections = sections;
    }

    /// Move the section at `from` to position `to`, preserving the relative
    /// order of everything else. Out-of-range indices are ignored.
    pub fn move_section(&mut self, from: usize, to: usize) {
        let len = self.portfolio.sections.len();
        if from >= len || to >= len || from == to {
            return;
        }
        let section = self.portfolio.sections.remove(from);
        self.portfolio.sections.insert(to, section);
    }

    /// Shallow-merge a partial theme update.
    pub fn update_theme(&mut self, patch: ThemePatch) {
        self.portfolio.theme.apply(patch);
    }

    /// Switch the preview viewport.
    pub fn set_preview_device(&mut self, device: DeviceType) {
        self.portfolio.preview_device = device;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::{ContactContent, HeroContent, SectionKind};
    use pretty_assertions::assert_eq;

    fn hero(id: &str) -> Section {
        Section::with_id(id, SectionContent::initial(SectionKind::Hero))
    }

    fn ids(store: &DocumentStore) -> Vec<&str> {
        store
            .portfolio()
            .sections
            .iter()
            .map(|s| s.id.as_str())
            .collect()
    }

    #[test]
    fn add_and_remove_preserve_insertion_order() {
        let mut store = DocumentStore::new();

        store.add_section(hero("a")).unwrap();
        store.add_section(hero("b")).unwrap();
        store.add_section(hero("c")).unwrap();
        store.remove_section("b");
        store.add_section(hero("d")).unwrap();

        assert_eq!(ids(&store), vec!["a", "c", "d"]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut store = DocumentStore::new();
        store.add_section(hero("a")).unwrap();

        let err = store.add_section(hero("a")).unwrap_err();

        assert!(matches!(err, StoreError::DuplicateId(id) if id == "a"));
        assert_eq!(ids(&store), vec!["a"]);
    }

    #[test]
    fn removing_a_missing_id_is_a_no_op() {
        let mut store = DocumentStore::new();
        store.add_section(hero("a")).unwrap();

        store.remove_section("missing");

        assert_eq!(ids(&store), vec!["a"]);
    }

    #[test]
    fn update_replaces_content_wholesale() {
        let mut store = DocumentStore::new();
        store
            .add_section(Section::with_id(
                "a",
                SectionContent::Hero(HeroContent {
                    heading: Some("Hi".to_string()),
                    subheading: Some("Engineer".to_string()),
                    ..HeroContent::default()
                }),
            ))
            .unwrap();

        // Omitting a field deletes it; the store does not merge.
        let replacement = SectionContent::Hero(HeroContent {
            heading: Some("Hello".to_string()),
            ..HeroContent::default()
        });
        store.update_section("a", replacement.clone()).unwrap();

        assert_eq!(store.portfolio().section("a").unwrap().content, replacement);
    }

    #[test]
    fn updating_a_missing_id_is_a_no_op() {
        let mut store = DocumentStore::new();
        store.add_section(hero("a")).unwrap();

        store
            .update_section("missing", SectionContent::Hero(HeroContent::default()))
            .unwrap();

        assert_eq!(ids(&store), vec!["a"]);
    }

    #[test]
    fn updates_cannot_change_the_section_variant() {
        let mut store = DocumentStore::new();
        store.add_section(hero("a")).unwrap();

        let err = store
            .update_section("a", SectionContent::Contact(ContactContent::default()))
            .unwrap_err();

        assert!(matches!(
            err,
            StoreError::KindMismatch {
                existing: "hero",
                incoming: "contact",
                ..
            }
        ));
    }

    #[test]
    fn reorder_yields_exactly_the_supplied_permutation() {
        let mut store = DocumentStore::new();
        store.add_section(hero("a")).unwrap();
        store.add_section(hero("b")).unwrap();
        store.add_section(hero("c")).unwrap();

        let permutation: Vec<Section> = ["c", "a", "b"]
            .iter()
            .map(|id| store.portfolio().section(id).unwrap().clone())
            .collect();

        store.reorder_sections(permutation.clone());
        assert_eq!(ids(&store), vec!["c", "a", "b"]);

        // Applying the same permutation again is idempotent.
        store.reorder_sections(permutation);
        assert_eq!(ids(&store), vec!["c", "a", "b"]);
    }

    #[test]
    fn move_section_preserves_relative_order_of_the_rest() {
        let mut store = DocumentStore::new();
        for id in ["a", "b", "c", "d"] {
            store.add_section(hero(id)).unwrap();
        }

        store.move_section(3, 1);
        assert_eq!(ids(&store), vec!["a", "d", "b", "c"]);

        store.move_section(0, 3);
        assert_eq!(ids(&store), vec!["d", "b", "c", "a"]);

        // Out-of-range moves are ignored.
        store.move_section(9, 0);
        assert_eq!(ids(&store), vec!["d", "b", "c", "a"]);
    }

    #[test]
    fn theme_and_device_updates() {
        let mut store = DocumentStore::new();

        store.update_theme(ThemePatch {
            primary_color: Some("#ff0000".to_string()),
            ..ThemePatch::default()
        });
        store.set_preview_device(DeviceType::Tablet);

        assert_eq!(store.portfolio().theme.primary_color, "#ff0000");
        assert_eq!(store.portfolio().theme.secondary_color, "#1e40af");
        assert_eq!(store.portfolio().preview_device, DeviceType::Tablet);
    }
}

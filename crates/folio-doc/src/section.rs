//! Section variants and their content schemas.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::presentation::Presentation;

/// The closed set of section variants a portfolio can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Hero,
    About,
    Experience,
    TechStack,
    Portfolio,
    Contact,
    Custom,
}

impl SectionKind {
    /// All variants, in toolbar order.
    pub const ALL: [SectionKind; 7] = [
        SectionKind::Hero,
        SectionKind::About,
        SectionKind::Experience,
        SectionKind::TechStack,
        SectionKind::Portfolio,
        SectionKind::Contact,
        SectionKind::Custom,
    ];

    /// The document tag for this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::About => "about",
            SectionKind::Experience => "experience",
            SectionKind::TechStack => "techstack",
            SectionKind::Portfolio => "portfolio",
            SectionKind::Contact => "contact",
            SectionKind::Custom => "custom",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ordered content block of the portfolio document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Opaque identifier, stable for the section's lifetime. Used as the
    /// reorder and removal key; must be unique within a portfolio.
    pub id: String,

    #[serde(flatten)]
    pub content: SectionContent,
}

impl Section {
    /// Create a section with a freshly generated id.
    pub fn new(content: SectionContent) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content,
        }
    }

    /// Create a section with a caller-supplied id.
    pub fn with_id(id: impl Into<String>, content: SectionContent) -> Self {
        Self {
            id: id.into(),
            content,
        }
    }
}

/// Typed content of a section, tagged by the section's variant.
///
/// The variant is fixed at creation; replacing a section's content keeps the
/// same variant (see `DocumentStore::update_section`). A document carrying a
/// tag outside the known set deserializes to `Unknown` and renders as an
/// empty block rather than failing the load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum SectionContent {
    Hero(HeroContent),
    About(AboutContent),
    Experience(ExperienceContent),
    Techstack(TechStackContent),
    Portfolio(PortfolioContent),
    Contact(ContactContent),
    Custom(CustomContent),
    #[serde(other)]
    Unknown,
}

static EMPTY_PRESENTATION: Presentation = Presentation::EMPTY;

impl SectionContent {
    /// Variant-appropriate initial content, as the section toolbar seeds it.
    pub fn initial(kind: SectionKind) -> Self {
        match kind {
            SectionKind::Hero => SectionContent::Hero(HeroContent::default()),
            SectionKind::About => SectionContent::About(AboutContent::default()),
            SectionKind::Experience => SectionContent::Experience(ExperienceContent {
                title: Some("Professional Experience".to_string()),
                experiences: Vec::new(),
                presentation: Presentation::color_fill("#ffffff"),
            }),
            SectionKind::TechStack => SectionContent::Techstack(TechStackContent::default()),
            SectionKind::Portfolio => SectionContent::Portfolio(PortfolioContent::default()),
            SectionKind::Contact => SectionContent::Contact(ContactContent::default()),
            SectionKind::Custom => SectionContent::Custom(CustomContent {
                title: Some("Custom Section".to_string()),
                subtitle: None,
                content: None,
                presentation: Presentation::color_fill("#ffffff"),
            }),
        }
    }

    /// The known variant of this content, or `None` for an unknown tag.
    pub fn kind(&self) -> Option<SectionKind> {
        match self {
            SectionContent::Hero(_) => Some(SectionKind::Hero),
            SectionContent::About(_) => Some(SectionKind::About),
            SectionContent::Experience(_) => Some(SectionKind::Experience),
            SectionContent::Techstack(_) => Some(SectionKind::TechStack),
            SectionContent::Portfolio(_) => Some(SectionKind::Portfolio),
            SectionContent::Contact(_) => Some(SectionKind::Contact),
            SectionContent::Custom(_) => Some(SectionKind::Custom),
            SectionContent::Unknown => None,
        }
    }

    /// The document tag of this content.
    pub fn kind_name(&self) -> &'static str {
        self.kind().map(|k| k.as_str()).unwrap_or("unknown")
    }

    /// Whether `other` carries the same variant as `self`.
    pub fn is_same_kind(&self, other: &SectionContent) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// The presentation fields of this content.
    pub fn presentation(&self) -> &Presentation {
        match self {
            SectionContent::Hero(c) => &c.presentation,
            SectionContent::About(c) => &c.presentation,
            SectionContent::Experience(c) => &c.presentation,
            SectionContent::Techstack(c) => &c.presentation,
            SectionContent::Portfolio(c) => &c.presentation,
            SectionContent::Contact(c) => &c.presentation,
            SectionContent::Custom(c) => &c.presentation,
            SectionContent::Unknown => &EMPTY_PRESENTATION,
        }
    }
}

/// Landing banner: a large heading and an optional strapline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheading: Option<String>,

    #[serde(flatten)]
    pub presentation: Presentation,
}

/// Bio block with an optional profile image and skill badges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Multiline text, rendered with whitespace preserved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    /// Profile image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,

    #[serde(flatten)]
    pub presentation: Presentation,
}

/// One employment entry of an experience section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceItem {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

/// Work history, one card per entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub experiences: Vec<ExperienceItem>,

    #[serde(flatten)]
    pub presentation: Presentation,
}

/// Technology badges with an optional lead-in paragraph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TechStackContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub technologies: Vec<String>,

    #[serde(flatten)]
    pub presentation: Presentation,
}

/// One project card of a portfolio section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectItem {
    pub title: String,
    pub description: String,

    /// Cover image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// External project link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub technologies: Vec<String>,
}

/// Project gallery grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<ProjectItem>,

    #[serde(flatten)]
    pub presentation: Presentation,
}

/// Contact details and social links.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_message: Option<String>,

    #[serde(flatten)]
    pub presentation: Presentation,
}

/// Free-form block. The `content` field is trusted raw HTML: it is emitted
/// into the export unescaped, by contract with the document author.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(flatten)]
    pub presentation: Presentation,
}

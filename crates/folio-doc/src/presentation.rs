//! Common presentation fields shared by every section variant.

use serde::{Deserialize, Deserializer, Serialize};

/// Keyword-valued presentation enums.
///
/// Documents carry these as plain strings. An unrecognized keyword never
/// fails the document load: it deserializes to `None` and the style resolver
/// applies the variant's documented default.
pub trait Keyword: Sized {
    /// Parse a keyword, returning `None` for anything unrecognized.
    fn from_keyword(keyword: &str) -> Option<Self>;
}

/// Which background fields of a section apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundStyle {
    /// Flat fill from `backgroundColor`
    Color,
    /// Linear gradient from `gradientStart`/`gradientEnd`/`gradientDirection`
    Gradient,
    /// Cover-fit image from `backgroundImage`
    Image,
}

impl Keyword for BackgroundStyle {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "color" => Some(Self::Color),
            "gradient" => Some(Self::Gradient),
            "image" => Some(Self::Image),
            _ => None,
        }
    }
}

/// Compass direction of a linear gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GradientDirection {
    #[serde(rename = "to-r")]
    ToRight,
    #[serde(rename = "to-l")]
    ToLeft,
    #[serde(rename = "to-t")]
    ToTop,
    #[serde(rename = "to-b")]
    ToBottom,
    #[serde(rename = "to-tr")]
    ToTopRight,
    #[serde(rename = "to-tl")]
    ToTopLeft,
    #[serde(rename = "to-br")]
    ToBottomRight,
    #[serde(rename = "to-bl")]
    ToBottomLeft,
}

impl Keyword for GradientDirection {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "to-r" => Some(Self::ToRight),
            "to-l" => Some(Self::ToLeft),
            "to-t" => Some(Self::ToTop),
            "to-b" => Some(Self::ToBottom),
            "to-tr" => Some(Self::ToTopRight),
            "to-tl" => Some(Self::ToTopLeft),
            "to-br" => Some(Self::ToBottomRight),
            "to-bl" => Some(Self::ToBottomLeft),
            _ => None,
        }
    }
}

/// Font family keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FontFamily {
    #[serde(rename = "font-sans")]
    Sans,
    #[serde(rename = "font-serif")]
    Serif,
    #[serde(rename = "font-mono")]
    Mono,
}

impl Keyword for FontFamily {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "font-sans" => Some(Self::Sans),
            "font-serif" => Some(Self::Serif),
            "font-mono" => Some(Self::Mono),
            _ => None,
        }
    }
}

/// Font size keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FontSize {
    #[serde(rename = "text-sm")]
    Small,
    #[serde(rename = "text-base")]
    Base,
    #[serde(rename = "text-lg")]
    Large,
    #[serde(rename = "text-xl")]
    ExtraLarge,
    #[serde(rename = "text-2xl")]
    ExtraLarge2,
}

impl Keyword for FontSize {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "text-sm" => Some(Self::Small),
            "text-base" => Some(Self::Base),
            "text-lg" => Some(Self::Large),
            "text-xl" => Some(Self::ExtraLarge),
            "text-2xl" => Some(Self::ExtraLarge2),
            _ => None,
        }
    }
}

/// Font weight keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FontWeight {
    #[serde(rename = "font-normal")]
    Normal,
    #[serde(rename = "font-medium")]
    Medium,
    #[serde(rename = "font-semibold")]
    Semibold,
    #[serde(rename = "font-bold")]
    Bold,
}

impl Keyword for FontWeight {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "font-normal" => Some(Self::Normal),
            "font-medium" => Some(Self::Medium),
            "font-semibold" => Some(Self::Semibold),
            "font-bold" => Some(Self::Bold),
            _ => None,
        }
    }
}

/// Deserialize an optional keyword field, mapping unknown keywords to `None`.
fn lenient_keyword<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Keyword,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(T::from_keyword))
}

/// Presentation sub-schema layered on every section variant.
///
/// All fields are optional; the style resolver supplies the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Presentation {
    #[serde(
        deserialize_with = "lenient_keyword",
        skip_serializing_if = "Option::is_none"
    )]
    pub background_style: Option<BackgroundStyle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_start: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_end: Option<String>,

    #[serde(
        deserialize_with = "lenient_keyword",
        skip_serializing_if = "Option::is_none"
    )]
    pub gradient_direction: Option<GradientDirection>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,

    #[serde(
        deserialize_with = "lenient_keyword",
        skip_serializing_if = "Option::is_none"
    )]
    pub font_family: Option<FontFamily>,

    #[serde(
        deserialize_with = "lenient_keyword",
        skip_serializing_if = "Option::is_none"
    )]
    pub font_size: Option<FontSize>,

    #[serde(
        deserialize_with = "lenient_keyword",
        skip_serializing_if = "Option::is_none"
    )]
    pub font_weight: Option<FontWeight>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_color: Option<String>,
}

impl Presentation {
    /// A presentation with every field absent.
    pub const EMPTY: Presentation = Presentation {
        background_style: None,
        background_color: None,
        gradient_start: None,
        gradient_end: None,
        gradient_direction: None,
        background_image: None,
        font_family: None,
        font_size: None,
        font_weight: None,
        text_color: None,
        heading_color: None,
    };

    /// Flat color fill, the default the section toolbar seeds.
    pub fn color_fill(color: impl Into<String>) -> Self {
        Presentation {
            background_style: Some(BackgroundStyle::Color),
            background_color: Some(color.into()),
            ..Presentation::EMPTY
        }
    }
}

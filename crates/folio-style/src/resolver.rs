//! Resolution of presentation fields into concrete CSS declarations.
//!
//! The live preview and the exporter both go through `resolve`; there is no
//! second copy of these lookup tables anywhere, so the two presentations
//! cannot drift.

use folio_doc::{
    BackgroundStyle, FontFamily, FontSize, FontWeight, GradientDirection, Presentation,
};

/// Concrete style for one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStyle {
    /// Background declaration(s), or `None` for transparent/inherited.
    pub background: Option<String>,

    /// Font family/size/weight declarations.
    pub typography: String,

    /// Body text color, `inherit` when unset.
    pub text_color: String,

    /// Heading color, `inherit` when unset.
    pub heading_color: String,
}

impl ResolvedStyle {
    /// Inline declaration list for the section element itself.
    pub fn section_declaration(&self) -> String {
        let color = format!("color: {};", self.text_color);
        match &self.background {
            Some(background) => format!("{} {} {}", background, self.typography, color),
            None => format!("{} {}", self.typography, color),
        }
    }

    /// Inline declaration for headings inside the section.
    pub fn heading_declaration(&self) -> String {
        format!("color: {};", self.heading_color)
    }
}

/// Resolve a section's presentation fields to concrete style rules.
///
/// Pure and deterministic: the same presentation always resolves to the same
/// style, with a documented default for every absent or unrecognized value.
pub fn resolve(presentation: &Presentation) -> ResolvedStyle {
    ResolvedStyle {
        background: background_rule(presentation),
        typography: format!(
            "font-family: {}; font-size: {}; font-weight: {};",
            font_stack(presentation.font_family),
            font_size(presentation.font_size),
            font_weight(presentation.font_weight),
        ),
        text_color: color_or_inherit(&presentation.text_color),
        heading_color: color_or_inherit(&presentation.heading_color),
    }
}

/// Angle for a gradient direction. An absent direction keeps the reference
/// fallback of 225° (`to-bl`).
fn gradient_angle(direction: Option<GradientDirection>) -> u16 {
    match direction {
        Some(GradientDirection::ToRight) => 90,
        Some(GradientDirection::ToLeft) => 270,
        Some(GradientDirection::ToTop) => 0,
        Some(GradientDirection::ToBottom) => 180,
        Some(GradientDirection::ToTopRight) => 45,
        Some(GradientDirection::ToTopLeft) => 315,
        Some(GradientDirection::ToBottomRight) => 135,
        Some(GradientDirection::ToBottomLeft) | None => 225,
    }
}

fn font_stack(family: Option<FontFamily>) -> &'static str {
    match family {
        Some(FontFamily::Serif) => "Georgia, 'Times New Roman', serif",
        Some(FontFamily::Mono) => "ui-monospace, SFMono-Regular, monospace",
        Some(FontFamily::Sans) | None => "system-ui, -apple-system, sans-serif",
    }
}

fn font_size(size: Option<FontSize>) -> &'static str {
    match size {
        Some(FontSize::Small) => "0.875rem",
        Some(FontSize::Large) => "1.125rem",
        Some(FontSize::ExtraLarge) => "1.25rem",
        Some(FontSize::ExtraLarge2) => "1.5rem",
        Some(FontSize::Base) | None => "1rem",
    }
}

fn font_weight(weight: Option<FontWeight>) -> &'static str {
    match weight {
        Some(FontWeight::Medium) => "500",
        Some(FontWeight::Semibold) => "600",
        Some(FontWeight::Bold) => "700",
        Some(FontWeight::Normal) | None => "400",
    }
}

/// A background rule applies only when its style is selected AND the fields
/// that style needs are present; otherwise the section stays transparent.
fn background_rule(presentation: &Presentation) -> Option<String> {
    match presentation.background_style {
        Some(BackgroundStyle::Gradient) => {
            let start = non_empty(&presentation.gradient_start)?;
            let end = non_empty(&presentation.gradient_end)?;
            Some(format!(
                "background: linear-gradient({}deg, {}, {});",
                gradient_angle(presentation.gradient_direction),
                start,
                end
            ))
        }
        Some(BackgroundStyle::Color) => {
            let color = non_empty(&presentation.background_color)?;
            Some(format!("background-color: {};", color))
        }
        Some(BackgroundStyle::Image) => {
            let url = non_empty(&presentation.background_image)?;
            Some(format!(
                "background-image: url({}); background-size: cover; \
                 background-position: center; background-attachment: fixed;",
                url
            ))
        }
        None => None,
    }
}

fn color_or_inherit(color: &Option<String>) -> String {
    non_empty(color).unwrap_or("inherit").to_string()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn gradient_resolves_with_angle_and_both_colors() {
        let presentation = Presentation {
            background_style: Some(BackgroundStyle::Gradient),
            gradient_start: Some("#fff".to_string()),
            gradient_end: Some("#000".to_string()),
            gradient_direction: Some(GradientDirection::ToRight),
            ..Presentation::EMPTY
        };

        let style = resolve(&presentation);

        assert_eq!(
            style.background.as_deref(),
            Some("background: linear-gradient(90deg, #fff, #000);")
        );
    }

    #[test]
    fn gradient_angle_lookup_covers_all_directions() {
        let cases = [
            (GradientDirection::ToRight, 90),
            (GradientDirection::ToLeft, 270),
            (GradientDirection::ToTop, 0),
            (GradientDirection::ToBottom, 180),
            (GradientDirection::ToTopRight, 45),
            (GradientDirection::ToTopLeft, 315),
            (GradientDirection::ToBottomRight, 135),
            (GradientDirection::ToBottomLeft, 225),
        ];
        for (direction, angle) in cases {
            assert_eq!(gradient_angle(Some(direction)), angle);
        }
        assert_eq!(gradient_angle(None), 225);
    }

    #[test]
    fn gradient_without_both_stops_emits_no_background() {
        let presentation = Presentation {
            background_style: Some(BackgroundStyle::Gradient),
            gradient_start: Some("#fff".to_string()),
            ..Presentation::EMPTY
        };

        assert_eq!(resolve(&presentation).background, None);
    }

    #[test]
    fn color_fill_resolves_to_a_flat_background() {
        let style = resolve(&Presentation::color_fill("#1e40af"));

        assert_eq!(
            style.background.as_deref(),
            Some("background-color: #1e40af;")
        );
    }

    #[test]
    fn image_background_is_cover_fit_centered_and_fixed() {
        let presentation = Presentation {
            background_style: Some(BackgroundStyle::Image),
            background_image: Some("https://example.com/bg.jpg".to_string()),
            ..Presentation::EMPTY
        };

        let background = resolve(&presentation).background.unwrap();

        assert!(background.contains("background-image: url(https://example.com/bg.jpg);"));
        assert!(background.contains("background-size: cover;"));
        assert!(background.contains("background-position: center;"));
        assert!(background.contains("background-attachment: fixed;"));
    }

    #[test]
    fn empty_presentation_resolves_to_the_documented_defaults() {
        let style = resolve(&Presentation::EMPTY);

        assert_eq!(style.background, None);
        assert_eq!(
            style.typography,
            "font-family: system-ui, -apple-system, sans-serif; \
             font-size: 1rem; font-weight: 400;"
        );
        assert_eq!(style.text_color, "inherit");
        assert_eq!(style.heading_color, "inherit");
    }

    #[test]
    fn empty_color_strings_count_as_absent() {
        let presentation = Presentation {
            background_style: Some(BackgroundStyle::Color),
            background_color: Some(String::new()),
            text_color: Some(String::new()),
            ..Presentation::EMPTY
        };

        let style = resolve(&presentation);

        assert_eq!(style.background, None);
        assert_eq!(style.text_color, "inherit");
    }

    #[test]
    fn resolution_is_deterministic() {
        let presentation = Presentation {
            background_style: Some(BackgroundStyle::Gradient),
            gradient_start: Some("#abc".to_string()),
            gradient_end: Some("#def".to_string()),
            font_size: Some(FontSize::ExtraLarge),
            font_weight: Some(FontWeight::Bold),
            heading_color: Some("#123456".to_string()),
            ..Presentation::EMPTY
        };

        assert_eq!(resolve(&presentation), resolve(&presentation));
    }

    #[test]
    fn section_declaration_concatenates_background_typography_and_color() {
        let presentation = Presentation {
            background_style: Some(BackgroundStyle::Color),
            background_color: Some("#ffffff".to_string()),
            text_color: Some("#111111".to_string()),
            ..Presentation::EMPTY
        };

        let declaration = resolve(&presentation).section_declaration();

        assert!(declaration.starts_with("background-color: #ffffff;"));
        assert!(declaration.contains("font-family:"));
        assert!(declaration.ends_with("color: #111111;"));
    }

    #[test]
    fn heading_declaration_defaults_to_inherit() {
        assert_eq!(
            resolve(&Presentation::EMPTY).heading_declaration(),
            "color: inherit;"
        );
    }
}

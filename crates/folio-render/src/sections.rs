//! Per-variant HTML block templates.
//!
//! Each section renders to one `<section>` block whose inline style comes
//! from the style resolver and whose inner markup interpolates only the
//! fields actually present in the content. Absent optional fields produce no
//! markup at all, not empty placeholders. List fields render one sub-block
//! per element in stored order, with an animation delay derived from the
//! element's index.

use folio_doc::{
    AboutContent, ContactContent, CustomContent, ExperienceContent, HeroContent, Portfolio,
    PortfolioContent, Section, SectionContent, TechStackContent,
};
use folio_style::{resolve, ResolvedStyle};

/// Render all sections of a portfolio in document order.
pub fn render_sections(portfolio: &Portfolio) -> String {
    portfolio
        .sections
        .iter()
        .map(render_section)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render one section block.
///
/// A section with an unknown variant still occupies its position in the
/// output, as an empty styled block.
pub fn render_section(section: &Section) -> String {
    let style = resolve(section.content.presentation());

    let body = match &section.content {
        SectionContent::Hero(content) => hero_block(content, &style),
        SectionContent::About(content) => about_block(content, &style),
        SectionContent::Experience(content) => experience_block(content, &style),
        SectionContent::Techstack(content) => techstack_block(content, &style),
        SectionContent::Portfolio(content) => portfolio_block(content, &style),
        SectionContent::Contact(content) => contact_block(content, &style),
        SectionContent::Custom(content) => custom_block(content, &style),
        SectionContent::Unknown => String::new(),
    };

    format!(
        "<section style=\"{}\">\n{}</section>",
        style.section_declaration(),
        body
    )
}

fn hero_block(content: &HeroContent, style: &ResolvedStyle) -> String {
    let mut out = String::from(
        "<div style=\"text-align: center; padding: 2rem;\" data-aos=\"fade-up\" data-aos-duration=\"1000\">\n",
    );
    if let Some(heading) = non_empty(&content.heading) {
        out.push_str(&format!(
            "<h1 style=\"font-size: 2.25rem; font-weight: bold; margin-bottom: 0.5rem; {}\" data-aos=\"zoom-in\" data-aos-delay=\"200\">{}</h1>\n",
            style.heading_declaration(),
            escape_html(heading)
        ));
    }
    if let Some(subheading) = non_empty(&content.subheading) {
        out.push_str(&format!(
            "<p style=\"font-size: 1.125rem;\" data-aos=\"fade-up\" data-aos-delay=\"400\">{}</p>\n",
            escape_html(subheading)
        ));
    }
    out.push_str("</div>\n");
    out
}

fn about_block(content: &AboutContent, style: &ResolvedStyle) -> String {
    let mut out = String::from(
        "<div style=\"padding: 1.5rem 1rem;\" data-aos=\"fade-up\" data-aos-duration=\"1000\">\n",
    );
    if let Some(title) = non_empty(&content.title) {
        out.push_str(&format!(
            "<h2 style=\"font-size: 1.5rem; font-weight: bold; margin-bottom: 1rem; text-align: center; {}\" data-aos=\"fade-down\">{}</h2>\n",
            style.heading_declaration(),
            escape_html(title)
        ));
    }
    if let Some(image) = non_empty(&content.image) {
        out.push_str(&format!(
            "<div style=\"text-align: center; margin-bottom: 1rem;\" data-aos=\"zoom-in\" data-aos-delay=\"200\">\n\
             <img src=\"{}\" alt=\"Profile\" style=\"width: 12rem; height: 12rem; border-radius: 50%; object-fit: cover; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); transition: transform 0.3s ease-in-out;\" class=\"hover-rotate\">\n\
             </div>\n",
            escape_html(image)
        ));
    }
    if let Some(bio) = non_empty(&content.bio) {
        out.push_str(&format!(
            "<div style=\"max-width: 42rem; margin: 0 auto;\" data-aos=\"fade-up\" data-aos-delay=\"400\">\n\
             <p style=\"margin-bottom: 1rem; white-space: pre-wrap;\">{}</p>\n\
             </div>\n",
            escape_html(bio)
        ));
    }
    if !content.skills.is_empty() {
        out.push_str("<div style=\"margin-top: 1.5rem;\" data-aos=\"fade-up\" data-aos-delay=\"600\">\n");
        out.push_str(&format!(
            "<h3 style=\"font-size: 1.25rem; font-weight: 600; margin-bottom: 0.75rem; text-align: center; {}\">Key Skills</h3>\n",
            style.heading_declaration()
        ));
        out.push_str(
            "<div style=\"display: flex; flex-wrap: wrap; justify-content: center; gap: 0.5rem;\">\n",
        );
        for (index, skill) in content.skills.iter().enumerate() {
            out.push_str(&format!(
                "<span style=\"padding: 0.25rem 0.75rem; background-color: rgba(59, 130, 246, 0.1); border-radius: 9999px; font-size: 0.875rem; transition: transform 0.3s ease, background-color 0.3s ease;\" class=\"skill-badge\" data-aos=\"zoom-in\" data-aos-delay=\"{}\">{}</span>\n",
                200 + index * 100,
                escape_html(skill)
            ));
        }
        out.push_str("</div>\n</div>\n");
    }
    out.push_str("</div>\n");
    out
}

fn experience_block(content: &ExperienceContent, style: &ResolvedStyle) -> String {
    let mut out = String::from(
        "<div style=\"padding: 1.5rem 1rem;\" data-aos=\"fade-up\" data-aos-duration=\"1000\">\n",
    );
    if let Some(title) = non_empty(&content.title) {
        out.push_str(&format!(
            "<h2 style=\"font-size: 1.5rem; font-weight: bold; margin-bottom: 1.5rem; text-align: center; {}\" data-aos=\"fade-down\">{}</h2>\n",
            style.heading_declaration(),
            escape_html(title)
        ));
    }
    out.push_str("<div style=\"max-width: 42rem; margin: 0 auto;\">\n");
    for (index, experience) in content.experiences.iter().enumerate() {
        out.push_str(&format!(
            "<div style=\"margin-bottom: 2rem; padding: 1.5rem; border-radius: 0.5rem; transition: transform 0.3s ease, box-shadow 0.3s ease;\" class=\"experience-card\" data-aos=\"fade-up\" data-aos-delay=\"{}\">\n",
            200 * index
        ));
        out.push_str(&format!(
            "<h3 style=\"font-size: 1.25rem; font-weight: 600; margin-bottom: 0.25rem; {}\">{}</h3>\n",
            style.heading_declaration(),
            escape_html(&experience.title)
        ));
        out.push_str(&format!(
            "<p style=\"font-size: 1.125rem; margin-bottom: 0.25rem;\">{}</p>\n",
            escape_html(&experience.company)
        ));
        out.push_str(&format!(
            "<p style=\"color: #666; margin-bottom: 0.5rem;\">{}</p>\n",
            escape_html(&experience.period)
        ));
        out.push_str(&format!(
            "<p style=\"white-space: pre-wrap;\">{}</p>\n",
            escape_html(&experience.description)
        ));
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n</div>\n");
    out
}

fn techstack_block(content: &TechStackContent, style: &ResolvedStyle) -> String {
    let mut out = String::from(
        "<div style=\"padding: 1.5rem 1rem;\" data-aos=\"fade-up\" data-aos-duration=\"1000\">\n",
    );
    if let Some(title) = non_empty(&content.title) {
        out.push_str(&format!(
            "<h2 style=\"font-size: 1.5rem; font-weight: bold; margin-bottom: 1rem; text-align: center; {}\" data-aos=\"fade-down\">{}</h2>\n",
            style.heading_declaration(),
            escape_html(title)
        ));
    }
    if let Some(description) = non_empty(&content.description) {
        out.push_str(&format!(
            "<p style=\"text-align: center; margin-bottom: 1.5rem; max-width: 42rem; margin-left: auto; margin-right: auto;\" data-aos=\"fade-up\" data-aos-delay=\"200\">{}</p>\n",
            escape_html(description)
        ));
    }
    if !content.technologies.is_empty() {
        out.push_str(
            "<div style=\"display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; max-width: 48rem; margin: 0 auto;\">\n",
        );
        for (index, technology) in content.technologies.iter().enumerate() {
            out.push_str(&format!(
                "<span style=\"padding: 0.5rem 1rem; background-color: rgba(59, 130, 246, 0.1); border-radius: 0.5rem; font-size: 1rem; transition: transform 0.3s ease, background-color 0.3s ease;\" class=\"tech-badge\" data-aos=\"zoom-in\" data-aos-delay=\"{}\">{}</span>\n",
                100 * index,
                escape_html(technology)
            ));
        }
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n");
    out
}

fn portfolio_block(content: &PortfolioContent, style: &ResolvedStyle) -> String {
    let mut out = String::from(
        "<div style=\"padding: 1.5rem 1rem;\" data-aos=\"fade-up\" data-aos-duration=\"1000\">\n",
    );
    if let Some(title) = non_empty(&content.title) {
        out.push_str(&format!(
            "<h2 style=\"font-size: 1.5rem; font-weight: bold; margin-bottom: 1.5rem; text-align: center; {}\" data-aos=\"fade-down\">{}</h2>\n",
            style.heading_declaration(),
            escape_html(title)
        ));
    }
    out.push_str(
        "<div style=\"display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 2rem; max-width: 64rem; margin: 0 auto;\">\n",
    );
    for (index, project) in content.projects.iter().enumerate() {
        out.push_str(&format!(
            "<div style=\"border: 1px solid #e5e7eb; border-radius: 0.5rem; overflow: hidden; transition: transform 0.3s ease, box-shadow 0.3s ease;\" class=\"project-card\" data-aos=\"fade-up\" data-aos-delay=\"{}\">\n",
            200 * index
        ));
        if let Some(image) = non_empty(&project.image) {
            out.push_str(&format!(
                "<div style=\"overflow: hidden;\">\n\
                 <img src=\"{}\" alt=\"{}\" style=\"width: 100%; height: 200px; object-fit: cover; transition: transform 0.3s ease;\" class=\"project-image\">\n\
                 </div>\n",
                escape_html(image),
                escape_html(&project.title)
            ));
        }
        out.push_str("<div style=\"padding: 1rem;\">\n");
        out.push_str(&format!(
            "<h3 style=\"font-size: 1.25rem; font-weight: 600; margin-bottom: 0.5rem; {}\">{}</h3>\n",
            style.heading_declaration(),
            escape_html(&project.title)
        ));
        out.push_str(&format!(
            "<p style=\"margin-bottom: 1rem;\">{}</p>\n",
            escape_html(&project.description)
        ));
        if !project.technologies.is_empty() {
            out.push_str(
                "<div style=\"display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 1rem;\">\n",
            );
            for technology in &project.technologies {
                out.push_str(&format!(
                    "<span style=\"padding: 0.25rem 0.5rem; background-color: rgba(59, 130, 246, 0.1); border-radius: 9999px; font-size: 0.75rem; transition: transform 0.3s ease;\" class=\"tech-badge\">{}</span>\n",
                    escape_html(technology)
                ));
            }
            out.push_str("</div>\n");
        }
        if let Some(link) = non_empty(&project.link) {
            out.push_str(&format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" style=\"display: inline-block; padding: 0.5rem 1rem; background-color: #3b82f6; color: white; border-radius: 0.375rem; text-decoration: none; transition: transform 0.3s ease, background-color 0.3s ease;\" class=\"project-link\">View Project</a>\n",
                escape_html(link)
            ));
        }
        out.push_str("</div>\n</div>\n");
    }
    out.push_str("</div>\n</div>\n");
    out
}

fn contact_block(content: &ContactContent, style: &ResolvedStyle) -> String {
    let mut out = String::from(
        "<div style=\"padding: 1.5rem 1rem;\" data-aos=\"fade-up\" data-aos-duration=\"1000\">\n",
    );
    if let Some(title) = non_empty(&content.title) {
        out.push_str(&format!(
            "<h2 style=\"font-size: 1.5rem; font-weight: bold; margin-bottom: 1.5rem; text-align: center; {}\" data-aos=\"fade-down\">{}</h2>\n",
            style.heading_declaration(),
            escape_html(title)
        ));
    }
    out.push_str("<div style=\"max-width: 42rem; margin: 0 auto;\">\n");
    if let Some(message) = non_empty(&content.form_message) {
        out.push_str(&format!(
            "<p style=\"text-align: center; margin-bottom: 1.5rem;\" data-aos=\"fade-up\" data-aos-delay=\"200\">{}</p>\n",
            escape_html(message)
        ));
    }
    out.push_str(
        "<div style=\"display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 1.5rem; margin-bottom: 2rem;\">\n",
    );
    if let Some(email) = non_empty(&content.email) {
        out.push_str(&format!(
            "<div style=\"text-align: center;\" data-aos=\"zoom-in\" data-aos-delay=\"300\">\n\
             <h3 style=\"font-size: 1.125rem; font-weight: 600; margin-bottom: 0.5rem; {}\">Email</h3>\n\
             <a href=\"mailto:{}\" style=\"color: #3b82f6; text-decoration: none; transition: color 0.3s ease;\" class=\"contact-link\">{}</a>\n\
             </div>\n",
            style.heading_declaration(),
            escape_html(email),
            escape_html(email)
        ));
    }
    if let Some(phone) = non_empty(&content.phone) {
        out.push_str(&format!(
            "<div style=\"text-align: center;\" data-aos=\"zoom-in\" data-aos-delay=\"400\">\n\
             <h3 style=\"font-size: 1.125rem; font-weight: 600; margin-bottom: 0.5rem; {}\">Phone</h3>\n\
             <a href=\"tel:{}\" style=\"color: #3b82f6; text-decoration: none; transition: color 0.3s ease;\" class=\"contact-link\">{}</a>\n\
             </div>\n",
            style.heading_declaration(),
            escape_html(phone),
            escape_html(phone)
        ));
    }
    if let Some(location) = non_empty(&content.location) {
        out.push_str(&format!(
            "<div style=\"text-align: center;\" data-aos=\"zoom-in\" data-aos-delay=\"500\">\n\
             <h3 style=\"font-size: 1.125rem; font-weight: 600; margin-bottom: 0.5rem; {}\">Location</h3>\n\
             <p>{}</p>\n\
             </div>\n",
            style.heading_declaration(),
            escape_html(location)
        ));
    }
    out.push_str("</div>\n");
    out.push_str(
        "<div style=\"display: flex; justify-content: center; gap: 1.5rem;\" data-aos=\"fade-up\" data-aos-delay=\"600\">\n",
    );
    for (url, label) in [
        (&content.linkedin, "LinkedIn"),
        (&content.github, "GitHub"),
        (&content.twitter, "Twitter"),
    ] {
        if let Some(url) = non_empty(url) {
            out.push_str(&format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" style=\"color: #3b82f6; text-decoration: none; transition: transform 0.3s ease, color 0.3s ease;\" class=\"social-link\">{}</a>\n",
                escape_html(url),
                label
            ));
        }
    }
    out.push_str("</div>\n</div>\n</div>\n");
    out
}

fn custom_block(content: &CustomContent, style: &ResolvedStyle) -> String {
    let mut out = String::from(
        "<div style=\"padding: 1.5rem 1rem;\" data-aos=\"fade-up\" data-aos-duration=\"1000\">\n",
    );
    if let Some(title) = non_empty(&content.title) {
        out.push_str(&format!(
            "<h2 style=\"font-size: 1.5rem; font-weight: bold; margin-bottom: 0.5rem; text-align: center; {}\" data-aos=\"fade-down\">{}</h2>\n",
            style.heading_declaration(),
            escape_html(title)
        ));
    }
    if let Some(subtitle) = non_empty(&content.subtitle) {
        out.push_str(&format!(
            "<p style=\"text-align: center; margin-bottom: 1.5rem;\" data-aos=\"fade-up\" data-aos-delay=\"200\">{}</p>\n",
            escape_html(subtitle)
        ));
    }
    if let Some(body) = non_empty(&content.content) {
        // Trusted raw HTML by contract with the document author; emitted
        // without escaping.
        out.push_str(&format!(
            "<div style=\"max-width: 42rem; margin: 0 auto;\" data-aos=\"fade-up\" data-aos-delay=\"400\">{}</div>\n",
            body
        ));
    }
    out.push_str("</div>\n");
    out
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Escape text for interpolation into HTML element bodies and double-quoted
/// attributes.
fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_doc::{ExperienceItem, Presentation, ProjectItem, SectionKind};

    fn section(content: SectionContent) -> Section {
        Section::with_id("test", content)
    }

    #[test]
    fn hero_renders_heading_and_subheading() {
        let html = render_section(&section(SectionContent::Hero(HeroContent {
            heading: Some("Hi".to_string()),
            subheading: Some("Engineer".to_string()),
            ..HeroContent::default()
        })));

        assert!(html.contains("<h1"));
        assert!(html.contains("Hi"));
        assert!(html.contains("Engineer"));
    }

    #[test]
    fn absent_fields_emit_no_markup_at_all() {
        let html = render_section(&section(SectionContent::Hero(HeroContent {
            heading: Some("Hi".to_string()),
            ..HeroContent::default()
        })));

        assert!(html.contains("<h1"));
        assert!(!html.contains("<p"));
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let html = render_section(&section(SectionContent::Hero(HeroContent {
            heading: Some("Hi".to_string()),
            subheading: Some(String::new()),
            ..HeroContent::default()
        })));

        assert!(!html.contains("<p"));
    }

    #[test]
    fn unknown_sections_render_as_empty_blocks() {
        let html = render_section(&section(SectionContent::Unknown));

        assert!(html.starts_with("<section style=\""));
        assert!(html.ends_with("</section>"));
        assert!(!html.contains("<div"));
    }

    #[test]
    fn skills_render_in_order_with_indexed_delays() {
        let html = render_section(&section(SectionContent::About(AboutContent {
            skills: vec!["Rust".to_string(), "SQL".to_string(), "CSS".to_string()],
            ..AboutContent::default()
        })));

        assert!(html.contains("Key Skills"));
        let rust = html.find("Rust").unwrap();
        let sql = html.find("SQL").unwrap();
        let css = html.find("CSS").unwrap();
        assert!(rust < sql && sql < css);
        assert!(html.contains("data-aos-delay=\"200\">Rust"));
        assert!(html.contains("data-aos-delay=\"300\">SQL"));
        assert!(html.contains("data-aos-delay=\"400\">CSS"));
    }

    #[test]
    fn experience_cards_stagger_by_index() {
        let entry = |title: &str| ExperienceItem {
            title: title.to_string(),
            company: "Acme".to_string(),
            period: "2020".to_string(),
            description: "Things".to_string(),
        };
        let html = render_section(&section(SectionContent::Experience(ExperienceContent {
            title: Some("Experience".to_string()),
            experiences: vec![entry("First"), entry("Second")],
            ..ExperienceContent::default()
        })));

        assert!(html.contains("data-aos-delay=\"0\""));
        assert!(html.contains("data-aos-delay=\"200\""));
        assert_eq!(html.matches("experience-card").count(), 2);
    }

    #[test]
    fn project_link_and_image_are_optional() {
        let html = render_section(&section(SectionContent::Portfolio(PortfolioContent {
            projects: vec![ProjectItem {
                title: "Tool".to_string(),
                description: "Does things".to_string(),
                image: None,
                link: Some(String::new()),
                technologies: vec![],
            }],
            ..PortfolioContent::default()
        })));

        assert!(html.contains("Tool"));
        assert!(!html.contains("<img"));
        assert!(!html.contains("View Project"));
    }

    #[test]
    fn contact_links_use_mailto_and_tel_schemes() {
        let html = render_section(&section(SectionContent::Contact(ContactContent {
            email: Some("me@example.com".to_string()),
            phone: Some("+1 555 0100".to_string()),
            github: Some("https://github.com/me".to_string()),
            ..ContactContent::default()
        })));

        assert!(html.contains("href=\"mailto:me@example.com\""));
        assert!(html.contains("href=\"tel:+1 555 0100\""));
        assert!(html.contains(">GitHub</a>"));
        assert!(!html.contains(">LinkedIn</a>"));
    }

    #[test]
    fn custom_content_is_emitted_raw() {
        let html = render_section(&section(SectionContent::Custom(CustomContent {
            title: Some("Widgets & Co".to_string()),
            content: Some("<marquee>hello</marquee>".to_string()),
            ..CustomContent::default()
        })));

        // The title is text and gets escaped; the body is trusted markup.
        assert!(html.contains("Widgets &amp; Co"));
        assert!(html.contains("<marquee>hello</marquee>"));
    }

    #[test]
    fn section_style_comes_from_the_resolver() {
        let html = render_section(&section(SectionContent::Hero(HeroContent {
            heading: Some("Hi".to_string()),
            presentation: Presentation::color_fill("#123456"),
            ..HeroContent::default()
        })));

        assert!(html.contains("<section style=\"background-color: #123456;"));
    }

    #[test]
    fn heading_color_lands_on_headings_only() {
        let html = render_section(&section(SectionContent::Hero(HeroContent {
            heading: Some("Hi".to_string()),
            presentation: Presentation {
                heading_color: Some("#ff0000".to_string()),
                ..Presentation::EMPTY
            },
            ..HeroContent::default()
        })));

        assert!(html.contains("<h1 style=\"font-size: 2.25rem; font-weight: bold; margin-bottom: 0.5rem; color: #ff0000;\""));
    }

    #[test]
    fn one_block_per_section_in_document_order() {
        let mut portfolio = Portfolio::new();
        for kind in [SectionKind::Contact, SectionKind::Hero, SectionKind::About] {
            portfolio
                .sections
                .push(Section::new(SectionContent::initial(kind)));
        }

        let html = render_sections(&portfolio);

        assert_eq!(html.matches("<section").count(), 3);
        // Hero carries an <h1>; contact does not. Contact was added first.
        let contact_grid = html.find("minmax(200px, 1fr)").unwrap();
        let hero_div = html.find("padding: 2rem;").unwrap();
        assert!(contact_grid < hero_div);
    }

    #[test]
    fn text_fields_are_escaped() {
        let html = render_section(&section(SectionContent::Hero(HeroContent {
            heading: Some("<script>alert(1)</script>".to_string()),
            ..HeroContent::default()
        })));

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }
}

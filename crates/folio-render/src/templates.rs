//! Document shell template.

use minijinja::{context, Environment};

/// Exported document title.
pub const DOCUMENT_TITLE: &str = "My Portfolio";

/// Scroll-reveal animation assets referenced by the export. The only
/// external references in the document; everything else is inline.
pub const AOS_STYLESHEET: &str = "https://unpkg.com/aos@2.3.1/dist/aos.css";
pub const AOS_SCRIPT: &str = "https://unpkg.com/aos@2.3.1/dist/aos.js";

/// Context for rendering the document shell.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ShellContext {
    /// Document title
    pub title: String,
    /// Body text color (dark/light per theme)
    pub body_color: String,
    /// Body background color (dark/light per theme)
    pub body_background: String,
    /// Card surface color for experience/project cards
    pub card_color: String,
    /// Pre-rendered section blocks, in document order
    pub sections: String,
}

/// Template engine holding the document shell.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create an engine with the built-in shell template.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("portfolio.html".to_string(), SHELL_TEMPLATE.to_string())
            .expect("Failed to add shell template");

        Self { env }
    }

    /// Render the full document around pre-rendered section blocks.
    pub fn render_document(&self, context: &ShellContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("portfolio.html")?;

        tmpl.render(context! {
            title => &context.title,
            body_color => &context.body_color,
            body_background => &context.body_background,
            card_color => &context.card_color,
            sections => &context.sections,
            aos_stylesheet => AOS_STYLESHEET,
            aos_script => AOS_SCRIPT,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const SHELL_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{{ title }}</title>
  <link href="{{ aos_stylesheet }}" rel="stylesheet">
  <style>
    * {
      margin: 0;
      padding: 0;
      box-sizing: border-box;
    }

    html {
      scroll-behavior: smooth;
    }

    body {
      font-family: system-ui, -apple-system, sans-serif;
      line-height: 1.5;
      color: {{ body_color }};
      background-color: {{ body_background }};
    }

    .hover-rotate:hover {
      transform: rotate(5deg) scale(1.05);
    }

    .skill-badge:hover {
      transform: translateY(-2px);
      background-color: rgba(59, 130, 246, 0.2);
    }

    .tech-badge:hover {
      transform: translateY(-2px);
      background-color: rgba(59, 130, 246, 0.2);
    }

    .experience-card {
      background-color: {{ card_color }};
      box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
    }

    .experience-card:hover {
      transform: translateY(-4px);
      box-shadow: 0 4px 8px rgba(0, 0, 0, 0.2);
    }

    .project-card {
      background-color: {{ card_color }};
      box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
    }

    .project-card:hover {
      transform: translateY(-4px);
      box-shadow: 0 8px 16px rgba(0, 0, 0, 0.2);
    }

    .project-image:hover {
      transform: scale(1.05);
    }

    .project-link:hover {
      transform: translateY(-2px);
      background-color: #2563eb;
    }

    .contact-link:hover {
      color: #2563eb;
    }

    .social-link:hover {
      transform: translateY(-2px);
      color: #2563eb;
    }

    @keyframes float {
      0% { transform: translateY(0px); }
      50% { transform: translateY(-10px); }
      100% { transform: translateY(0px); }
    }

    .floating {
      animation: float 3s ease-in-out infinite;
    }
  </style>
</head>
<body>
{{ sections | safe }}
<script src="{{ aos_script }}"></script>
<script>
  AOS.init({
    duration: 1000,
    once: false,
    mirror: true
  });
</script>
</body>
</html>
"##;

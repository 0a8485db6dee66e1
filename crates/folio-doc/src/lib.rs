//! Portfolio document model and store.
//!
//! This crate defines the content schema (seven typed section variants plus
//! a shared presentation sub-schema), the portfolio document, its JSON codec,
//! and the `DocumentStore` mutation surface that editing collaborators drive.

pub mod document;
pub mod presentation;
pub mod section;
pub mod store;

pub use document::{DeviceType, DocumentError, Portfolio, Theme, ThemePatch};
pub use presentation::{
    BackgroundStyle, FontFamily, FontSize, FontWeight, GradientDirection, Keyword, Presentation,
};
pub use section::{
    AboutContent, ContactContent, CustomContent, ExperienceContent, ExperienceItem, HeroContent,
    PortfolioContent, ProjectItem, Section, SectionContent, SectionKind, TechStackContent,
};
pub use store::{DocumentStore, StoreError};

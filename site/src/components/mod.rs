//! Leptos UI components for the landing page.
//!
//! Every component is a pure function of its props; the only state lives in
//! [`Nav`] (scroll/menu) and [`Reveal`] (one-shot entrance latch).
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument (static export only)
//! └── Page
//!     ├── Nav
//!     │   └── CtaLink ×2
//!     ├── Hero
//!     │   └── CtaLink
//!     ├── Features
//!     │   └── Reveal → FeatureCard (per feature)
//!     ├── Gallery
//!     │   ├── SectionHeading
//!     │   ├── Reveal → GalleryTile (per image)
//!     │   └── AmenitiesBar
//!     ├── CtaSection
//!     │   └── CtaLink
//!     └── Footer
//! ```
//!
//! # Usage
//!
//! Components are normally rendered through [`crate::render_page`] or
//! mounted by the browser build, but sections can be used on their own:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use arenda_site::components::{Gallery, SectionHeading};
//!
//! view! {
//!     <SectionHeading title="ИНТЕРЬЕРЫ" subtitle="Фотографии" />
//!     <Gallery images=content.gallery amenities=content.amenities link=content.outbound_link />
//! }
//! ```

mod cta;
mod cta_link;
mod document;
mod features;
mod footer;
mod gallery;
mod heading;
mod hero;
mod icons;
mod nav;
mod page;
mod reveal;

pub use cta::CtaSection;
pub use cta_link::{cta_class, CtaLink, CtaVariant};
pub use document::PageDocument;
pub use features::Features;
pub use footer::Footer;
pub use gallery::{AmenitiesBar, Gallery};
pub use heading::SectionHeading;
pub use hero::Hero;
pub use icons::*;
pub use nav::Nav;
pub use page::{Page, SiteStyles};
pub use reveal::{stagger, Reveal, RevealStyle, FEATURE_STAGGER_MS, GALLERY_STAGGER_MS};

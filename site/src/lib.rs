//! # arenda-site
//!
//! Leptos components for the ArendaPrime landing page, plus the two ways of
//! getting them onto a screen:
//!
//! - **Static export** - [`render_page`] server-renders a complete HTML
//!   document with inline CSS and a small enhancement script (`ssr` feature)
//! - **Browser build** - `mount` attaches the live page to `#root`
//!   (`csr` feature, used by the `landing` crate)
//!
//! ## Quick Start
//!
//! ```rust
//! use arenda_site::{render_page, PageContext, content::Content};
//!
//! let context = PageContext::new(Content::default(), 2025);
//! let html = render_page(&context);
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("© 2025 АрендаПрайм"));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - immutable content registry (features, gallery, amenities, link)
//! - [`state`] - navigation and reveal state models
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS and the static enhancement script
//! - [`error`] - content and mount errors

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod content;
pub mod error;
pub mod state;
pub mod styles;

use components::PageDocument;
use content::Content;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

pub use error::ContentError;
#[cfg(feature = "csr")]
pub use error::MountError;

/// Id of the element the page attaches to.
pub const MOUNT_ID: &str = "root";

/// Everything one rendering of the page depends on.
///
/// The year is an input rather than a clock read so that output is
/// reproducible for a given context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageContext {
    /// Content registry
    pub content: Content,
    /// Year shown in the footer copyright
    pub year: i32,
}

impl PageContext {
    /// Bundle a registry with the footer year.
    pub fn new(content: Content, year: i32) -> Self {
        Self { content, year }
    }
}

/// Render the complete landing page as a static HTML document.
///
/// # Example
///
/// ```rust
/// use arenda_site::{render_page, PageContext, content::Content};
///
/// let html = render_page(&PageContext::new(Content::default(), 2030));
/// assert!(html.contains("id=\"root\""));
/// ```
pub fn render_page(context: &PageContext) -> String {
    tracing::debug!(
        features = context.content.features.len(),
        gallery = context.content.gallery.len(),
        amenities = context.content.amenities.len(),
        "rendering landing page"
    );

    let doc = view! { <PageDocument context=context.clone() /> };
    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Mount the live page into the [`MOUNT_ID`] element of the current document.
///
/// The footer year comes from the browser clock.
#[cfg(feature = "csr")]
pub fn mount(content: Content) -> Result<(), MountError> {
    use components::{Page, SiteStyles};
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(MountError::NoDocument)?;
    let container = document
        .get_element_by_id(MOUNT_ID)
        .ok_or(MountError::MissingContainer(MOUNT_ID))?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| MountError::NotHtmlElement(MOUNT_ID))?;

    let year = js_sys::Date::new_0().get_full_year() as i32;
    let context = PageContext::new(content, year);

    leptos::mount::mount_to(container, move || {
        view! {
            <SiteStyles />
            <Page context=context />
        }
    })
    .forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::OutboundLink;
    use pretty_assertions::assert_eq;
    use scraper::{ElementRef, Html, Selector};

    fn render_default() -> Html {
        Html::parse_document(&render_page(&PageContext::new(Content::default(), 2025)))
    }

    fn select<'a>(doc: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
        let selector = Selector::parse(css).unwrap();
        doc.select(&selector).collect()
    }

    fn text_of(element: ElementRef<'_>, css: &str) -> String {
        let selector = Selector::parse(css).unwrap();
        element
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_default()
    }

    #[test]
    fn renders_document_shell() {
        let html = render_page(&PageContext::new(Content::default(), 2025));

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("lang=\"ru\""));
        assert!(html.contains("Content-Security-Policy"));
        assert!(html.contains("IntersectionObserver"));
        assert!(html.contains(".reveal.visible"));
    }

    #[test]
    fn page_lives_inside_mount_container() {
        let doc = render_default();
        let roots = select(&doc, "#root");
        assert_eq!(roots.len(), 1);
        assert_eq!(select(&doc, "#root nav[data-role=\"nav\"]").len(), 1);
        assert_eq!(select(&doc, "#root footer").len(), 1);
    }

    #[test]
    fn sections_render_in_page_order() {
        let doc = render_default();
        let order: Vec<String> = select(&doc, "#root .page > *")
            .into_iter()
            .map(|el| {
                let name = el.value().name().to_string();
                match el.value().attr("id") {
                    Some(id) => format!("{name}#{id}"),
                    None => name,
                }
            })
            .collect();

        assert_eq!(
            order,
            vec!["nav", "header", "section#about", "section#gallery", "section", "footer"]
        );
    }

    #[test]
    fn renders_three_features_with_pairs() {
        let content = Content::default();
        let doc = render_default();
        let cards = select(&doc, "#about .feature-card");

        assert_eq!(cards.len(), 3);
        let rendered: Vec<(String, String)> = cards
            .into_iter()
            .map(|card| (text_of(card, ".feature-title"), text_of(card, ".feature-description")))
            .collect();
        let expected: Vec<(String, String)> = content
            .features
            .iter()
            .map(|f| (f.title.clone(), f.description.clone()))
            .collect();
        assert_eq!(rendered, expected);
    }

    #[test]
    fn renders_one_tile_per_gallery_image_in_order() {
        let content = Content::default();
        let doc = render_default();
        let tiles = select(&doc, "#gallery a.gallery-tile");

        assert_eq!(tiles.len(), content.gallery.len());
        for (tile, image) in tiles.into_iter().zip(&content.gallery) {
            assert_eq!(text_of(tile, ".gallery-title"), image.title);
            assert_eq!(text_of(tile, ".gallery-subtitle"), image.subtitle);

            let img_selector = Selector::parse("img").unwrap();
            let img = tile.select(&img_selector).next().unwrap();
            assert_eq!(img.value().attr("src"), Some(image.url.as_str()));
            assert_eq!(img.value().attr("alt"), Some(image.title.as_str()));
        }
    }

    #[test]
    fn renders_four_amenities() {
        let content = Content::default();
        let doc = render_default();
        let labels: Vec<String> = select(&doc, ".amenities .amenity")
            .into_iter()
            .map(|item| text_of(item, ".amenity-label"))
            .collect();
        let expected: Vec<String> = content.amenities.iter().map(|a| a.label.clone()).collect();

        assert_eq!(labels.len(), 4);
        assert_eq!(labels, expected);
    }

    #[test]
    fn every_cta_targets_outbound_link() {
        let doc = render_default();
        let ctas = select(&doc, "a[data-role=\"cta\"]");

        // desktop nav, mobile nav, hero, closing block
        assert_eq!(ctas.len(), 4);
        for cta in ctas {
            assert_eq!(cta.value().attr("href"), Some(content::DEFAULT_OUTBOUND_LINK));
            assert_eq!(cta.value().attr("target"), Some("_blank"));
            assert_eq!(cta.value().attr("rel"), Some("noopener noreferrer"));
        }
    }

    #[test]
    fn injected_link_reaches_every_external_anchor() {
        let mut content = Content::default();
        content.outbound_link = OutboundLink::new("https://example.com/listing");
        let doc = Html::parse_document(&render_page(&PageContext::new(content, 2025)));

        let external = select(&doc, "a[target=\"_blank\"]");
        // 4 CTAs + 8 tiles + footer pin
        assert_eq!(external.len(), 13);
        for anchor in external {
            assert_eq!(anchor.value().attr("href"), Some("https://example.com/listing"));
        }
    }

    #[test]
    fn in_page_links_point_at_sections() {
        let doc = render_default();
        let anchors: Vec<&str> = select(&doc, "nav a:not([target])")
            .into_iter()
            .filter_map(|a| a.value().attr("href"))
            .collect();

        assert_eq!(anchors, vec!["#about", "#gallery", "#about", "#gallery"]);
        assert_eq!(select(&doc, "#about").len(), 1);
        assert_eq!(select(&doc, "#gallery").len(), 1);
    }

    #[test]
    fn nav_starts_unscrolled_and_closed() {
        let doc = render_default();
        let nav = select(&doc, "nav[data-role=\"nav\"]");
        assert_eq!(nav[0].value().attr("class"), Some("nav"));

        let toggle = select(&doc, "[data-role=\"menu-toggle\"]");
        assert_eq!(toggle[0].value().attr("aria-expanded"), Some("false"));
    }

    #[test]
    fn footer_shows_injected_year() {
        let html = render_page(&PageContext::new(Content::default(), 2031));
        assert!(html.contains("© 2031 АрендаПрайм"));
        assert!(!html.contains("© 2025"));
    }

    #[test]
    fn hero_uses_registry_image() {
        let mut content = Content::default();
        content.hero_image = "https://example.com/hero.jpg".into();
        let doc = Html::parse_document(&render_page(&PageContext::new(content, 2025)));

        let hero = select(&doc, "header.hero img.hero-image");
        assert_eq!(hero[0].value().attr("src"), Some("https://example.com/hero.jpg"));
    }

    #[test]
    fn reveal_blocks_start_hidden() {
        let doc = render_default();
        let blocks = select(&doc, "[data-reveal]");

        // 3 features + 8 tiles + 2 heading lines
        assert_eq!(blocks.len(), 13);
        for block in blocks {
            let class = block.value().attr("class").unwrap_or_default();
            assert!(class.starts_with("reveal"), "{class}");
            assert!(!class.contains("visible"), "{class}");
        }
    }
}

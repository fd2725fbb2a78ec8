//! Content registry: every literal the page renders.
//!
//! The registry is plain data. It is built once (either [`Content::default`]
//! or [`Content::from_json_path`]) and handed to the renderer; components never
//! reach for a global.
//!
//! These types are:
//!
//! - **Serializable** - the CLI can dump and reload the registry as JSON
//! - **Clone-friendly** - sections take owned slices of it as props
//! - **Immutable by convention** - nothing mutates a registry after it is built
//!
//! # Example
//!
//! ```rust
//! use arenda_site::content::Content;
//!
//! let content = Content::default();
//! assert_eq!(content.features.len(), 3);
//! assert_eq!(content.gallery.len(), 8);
//! assert!(content.validate().is_ok());
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// Maps listing every call-to-action points to.
pub const DEFAULT_OUTBOUND_LINK: &str = "https://yandex.ru/maps/-/CLfdUR8I";

/// Background photo of the hero banner.
pub const DEFAULT_HERO_IMAGE: &str = "https://radikal.cloud/i/XXXL.cdicTp";

/// Icons the registry may reference.
///
/// Serialized in kebab-case (`"shield-check"`), so a content file names icons
/// the same way the icon set does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    /// Contactless check-in
    Key,
    /// Privacy
    ShieldCheck,
    /// Premium standard, hero badge
    Star,
    /// Internet
    Wifi,
    /// Smart TV
    Monitor,
    /// Coffee machine
    Coffee,
    /// Parking, footer map link
    MapPin,
}

/// The single external URL shared by every call-to-action and gallery tile.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutboundLink(String);

impl OutboundLink {
    /// Wrap a URL. No validation happens here; see [`Content::validate`].
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// The URL as it goes into `href`.
    pub fn href(&self) -> &str {
        &self.0
    }
}

impl Default for OutboundLink {
    fn default() -> Self {
        Self::new(DEFAULT_OUTBOUND_LINK)
    }
}

impl fmt::Display for OutboundLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of the "about" feature grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    /// Icon shown above the title
    pub icon: IconKind,
    /// Card title
    pub title: String,
    /// One-sentence description
    pub description: String,
}

/// One photo tile of the gallery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    /// Absolute image URL (external, never hosted here)
    pub url: String,
    /// Tile title, also used as the image `alt`
    pub title: String,
    /// Small caption under the title
    pub subtitle: String,
}

/// One entry of the amenities bar under the gallery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmenityItem {
    /// Leading icon
    pub icon: IconKind,
    /// Short label
    pub label: String,
}

/// The complete registry for one rendering of the page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    /// Target of every CTA, gallery tile and the footer map link
    pub outbound_link: OutboundLink,
    /// Hero banner background
    pub hero_image: String,
    /// Feature grid, rendered in order
    pub features: Vec<Feature>,
    /// Gallery tiles, rendered in order
    pub gallery: Vec<GalleryImage>,
    /// Amenities bar, rendered in order
    pub amenities: Vec<AmenityItem>,
}

impl Default for Content {
    fn default() -> Self {
        Self {
            outbound_link: OutboundLink::default(),
            hero_image: DEFAULT_HERO_IMAGE.into(),
            features: vec![
                feature(
                    IconKind::Key,
                    "Бесконтактный доступ",
                    "Заселение в любое время суток без ожидания администратора.",
                ),
                feature(
                    IconKind::ShieldCheck,
                    "Приватность",
                    "Строгая конфиденциальность для деловых встреч и отдыха.",
                ),
                feature(
                    IconKind::Star,
                    "Премиум стандарт",
                    "Идеальная чистота, дорогое постельное белье и халаты.",
                ),
            ],
            gallery: vec![
                photo("https://radikal.cloud/i/XXXL-%283%29.cdBogD", "Гостиная зона", "Простор и стиль"),
                photo("https://radikal.cloud/i/XXXL-%284%29.cdBAQg", "Спальня", "Комфортный отдых"),
                photo("https://radikal.cloud/i/XXXL-%285%29.cdBxqc", "Кухня", "Современное оснащение"),
                photo("https://radikal.cloud/i/XXXL-%286%29.cdBN3L", "Ванная комната", "Идеальная чистота"),
                photo("https://radikal.cloud/i/XXXL-%287%29.cdBIYj", "Интерьер", "Внимание к деталям"),
                photo("https://radikal.cloud/i/XXXL-%288%29.cdiCRS", "Детали", "Атмосфера уюта"),
                photo("https://radikal.cloud/i/XXXL-%281%29.cdiRWn", "Обстановка", "Премиум класс"),
                photo("https://radikal.cloud/i/XXXL-%282%29.cdiS4X", "Апартаменты", "Общий вид"),
            ],
            amenities: vec![
                amenity(IconKind::Wifi, "Wi-Fi 500 Мбит/с"),
                amenity(IconKind::Monitor, "Smart TV + Netflix"),
                amenity(IconKind::Coffee, "Кофемашина"),
                amenity(IconKind::MapPin, "Паркинг"),
            ],
        }
    }
}

fn feature(icon: IconKind, title: &str, description: &str) -> Feature {
    Feature { icon, title: title.into(), description: description.into() }
}

fn photo(url: &str, title: &str, subtitle: &str) -> GalleryImage {
    GalleryImage { url: url.into(), title: title.into(), subtitle: subtitle.into() }
}

fn amenity(icon: IconKind, label: &str) -> AmenityItem {
    AmenityItem { icon, label: label.into() }
}

impl Content {
    /// Parse a registry from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a registry from a JSON file. The result is not validated; call
    /// [`Content::validate`] before rendering untrusted input.
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading content registry");
        let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Pretty JSON of the registry, the format [`Content::from_json_str`] reads.
    pub fn to_json_pretty(&self) -> Result<String, ContentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check a registry before rendering it.
    ///
    /// URLs must be absolute `http`/`https`, no list may be empty and no
    /// visible text may be blank. Reachability is never checked.
    pub fn validate(&self) -> Result<(), ContentError> {
        check_url("outbound_link", self.outbound_link.href())?;
        check_url("hero_image", &self.hero_image)?;

        if self.features.is_empty() {
            return Err(ContentError::EmptySection("features"));
        }
        if self.gallery.is_empty() {
            return Err(ContentError::EmptySection("gallery"));
        }
        if self.amenities.is_empty() {
            return Err(ContentError::EmptySection("amenities"));
        }

        for (idx, item) in self.features.iter().enumerate() {
            check_text(format!("features[{idx}].title"), &item.title)?;
            check_text(format!("features[{idx}].description"), &item.description)?;
        }
        for (idx, image) in self.gallery.iter().enumerate() {
            check_url(&format!("gallery[{idx}].url"), &image.url)?;
            check_text(format!("gallery[{idx}].title"), &image.title)?;
            check_text(format!("gallery[{idx}].subtitle"), &image.subtitle)?;
        }
        for (idx, item) in self.amenities.iter().enumerate() {
            check_text(format!("amenities[{idx}].label"), &item.label)?;
        }
        Ok(())
    }
}

fn check_url(field: &str, value: &str) -> Result<(), ContentError> {
    let invalid = || ContentError::InvalidUrl { field: field.to_string(), value: value.to_string() };
    let parsed = url::Url::parse(value).map_err(|_| invalid())?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(invalid()),
    }
}

fn check_text(field: String, value: &str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::BlankText { field });
    }
    Ok(())
}

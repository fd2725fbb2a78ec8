//! Inline SVG icons (24px stroke set, Feather/Lucide geometry).
//!
//! Each constant is the `d` attribute of a single path; multi-part icons are
//! written as one path with several subpaths so [`Icon`] stays one element.

use leptos::prelude::*;

use crate::content::IconKind;

/// Renders an inline stroke icon from a path data string.
///
/// # Props
///
/// * `path` - SVG path data (d attribute)
/// * `size` - Icon size in pixels (default: "20")
/// * `class` - Additional CSS classes (default: "")
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon path=ICON_MAP_PIN size="24" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let class = if class.is_empty() { "icon".to_string() } else { format!("icon {class}") };
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=class
        >
            <path d=path></path>
        </svg>
    }
}

impl IconKind {
    /// Path data for this icon.
    pub fn path(self) -> &'static str {
        match self {
            Self::Key => ICON_KEY,
            Self::ShieldCheck => ICON_SHIELD_CHECK,
            Self::Star => ICON_STAR,
            Self::Wifi => ICON_WIFI,
            Self::Monitor => ICON_MONITOR,
            Self::Coffee => ICON_COFFEE,
            Self::MapPin => ICON_MAP_PIN,
        }
    }
}

// =============================================================================
// Content icons
// =============================================================================

/// Key (contactless access)
pub const ICON_KEY: &str = "M21 2l-2 2m-7.61 7.61a5.5 5.5 0 1 1-7.778 7.778 5.5 5.5 0 0 1 7.777-7.777zm0 0L15.5 7.5m0 0l3 3L22 7l-3-3m-3.5 3.5L19 4";

/// Shield with check mark (privacy)
pub const ICON_SHIELD_CHECK: &str = "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10zM9 12l2 2 4-4";

/// Five-point star
pub const ICON_STAR: &str = "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z";

/// Wi-Fi waves
pub const ICON_WIFI: &str = "M5 12.55a11 11 0 0 1 14.08 0M1.42 9a16 16 0 0 1 21.16 0M8.53 16.11a6 6 0 0 1 6.95 0M12 20h.01";

/// Monitor / TV
pub const ICON_MONITOR: &str = "M4 3h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2zM8 21h8M12 17v4";

/// Coffee cup
pub const ICON_COFFEE: &str = "M18 8h1a4 4 0 0 1 0 8h-1M2 8h16v9a4 4 0 0 1-4 4H6a4 4 0 0 1-4-4V8zM6 1v3M10 1v3M14 1v3";

/// Map pin
pub const ICON_MAP_PIN: &str = "M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0zM15 10a3 3 0 1 1-6 0 3 3 0 0 1 6 0z";

// =============================================================================
// UI icons
// =============================================================================

/// Arrow pointing right (gallery tile hover)
pub const ICON_ARROW_RIGHT: &str = "M5 12h14M12 5l7 7-7 7";

/// Box with outgoing arrow (external link marker)
pub const ICON_EXTERNAL_LINK: &str = "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6M15 3h6v6M10 14L21 3";

/// Hamburger menu
pub const ICON_MENU: &str = "M3 12h18M3 6h18M3 18h18";

/// Close cross
pub const ICON_CLOSE: &str = "M18 6L6 18M6 6l12 12";

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn every_content_icon_has_path() {
        let kinds = [
            IconKind::Key,
            IconKind::ShieldCheck,
            IconKind::Star,
            IconKind::Wifi,
            IconKind::Monitor,
            IconKind::Coffee,
            IconKind::MapPin,
        ];
        for kind in kinds {
            assert!(kind.path().starts_with('M'), "{kind:?}");
        }
    }

    #[test]
    fn icon_renders_stroke_svg() {
        let html = view! { <Icon path=ICON_MENU class="nav-toggle-open" /> }.to_html();
        assert!(html.contains("<svg"));
        assert!(html.contains("0 0 24 24"));
        assert!(html.contains("class=\"icon nav-toggle-open\""));
        assert!(html.contains(ICON_MENU));
    }
}

//! Call-to-action link - the only interactive element that leaves the page

use leptos::prelude::*;

use super::{Icon, ICON_EXTERNAL_LINK};
use crate::content::OutboundLink;

/// Visual weight of a call-to-action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CtaVariant {
    /// Solid gold fill
    #[default]
    Primary,
    /// Gold outline on transparent background
    Outline,
}

impl CtaVariant {
    fn class_name(self) -> &'static str {
        match self {
            Self::Primary => "cta-primary",
            Self::Outline => "cta-outline",
        }
    }
}

/// Class list for a call-to-action of the given variant plus caller extras.
pub fn cta_class(variant: CtaVariant, extra: &str) -> String {
    if extra.is_empty() {
        format!("cta {}", variant.class_name())
    } else {
        format!("cta {} {extra}", variant.class_name())
    }
}

/// Outbound call-to-action, always opened in a new browsing context.
#[component]
pub fn CtaLink(
    /// Destination shared by every CTA on the page
    link: OutboundLink,
    /// Visible label
    label: &'static str,
    #[prop(default = CtaVariant::Primary)] variant: CtaVariant,
    /// Extra classes (size modifiers)
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <a
            href=link.href().to_owned()
            target="_blank"
            rel="noopener noreferrer"
            class=cta_class(variant, class)
            data-role="cta"
        >
            <span class="cta-shine"></span>
            <span class="cta-label">
                {label}
                <Icon path=ICON_EXTERNAL_LINK size="14" class="cta-icon" />
            </span>
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn class_list_per_variant() {
        assert_eq!(cta_class(CtaVariant::Primary, ""), "cta cta-primary");
        assert_eq!(cta_class(CtaVariant::Outline, "cta-compact"), "cta cta-outline cta-compact");
    }

    #[test]
    fn renders_outbound_anchor() {
        let link = OutboundLink::new("https://example.com/listing");
        let html = view! { <CtaLink link=link label="Смотреть" variant=CtaVariant::Outline /> }.to_html();

        assert!(html.contains("href=\"https://example.com/listing\""));
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("rel=\"noopener noreferrer\""));
        assert!(html.contains("cta-outline"));
        assert!(html.contains("Смотреть"));
    }
}

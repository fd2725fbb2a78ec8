use leptos::prelude::*;

use super::{Icon, ICON_MAP_PIN};
use crate::content::OutboundLink;

/// Copyright line and a map pin pointing at the listing.
#[component]
pub fn Footer(link: OutboundLink, year: i32) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <div class="footer-copyright">{format!("© {year} АрендаПрайм")}</div>
                <div class="footer-links">
                    <a
                        href=link.href().to_owned()
                        target="_blank"
                        rel="noreferrer"
                        class="footer-link"
                        aria-label="Яндекс.Карты"
                    >
                        <Icon path=ICON_MAP_PIN size="20" />
                    </a>
                </div>
            </div>
        </footer>
    }
}

//! Fixed navigation bar with mobile menu
//!
//! The bar owns its [`NavState`]; nothing else in the tree can see it. Both
//! menus are always in the markup and CSS decides which one shows, so the
//! server-rendered page and the browser build share the same DOM contract.

use leptos::prelude::*;

use super::{CtaLink, CtaVariant, Icon, ICON_CLOSE, ICON_MENU};
use crate::content::OutboundLink;
use crate::state::{NavState, SCROLL_THRESHOLD};

/// In-page anchors shown in both menus.
const NAV_LINKS: [(&str, &str); 2] = [("#about", "Преимущества"), ("#gallery", "Апартаменты")];

/// Top bar: brand, section links, map CTA and the mobile menu.
#[component]
pub fn Nav(link: OutboundLink) -> impl IntoView {
    let nav = RwSignal::new(NavState::default());

    #[cfg(feature = "csr")]
    track_scroll(nav);

    let close_menu = move |_| nav.update(NavState::activate_link);

    view! {
        <nav
            class=move || nav.get().class_name()
            data-role="nav"
            data-scroll-threshold=SCROLL_THRESHOLD.to_string()
        >
            <div class="container nav-inner">
                <div class="nav-brand">
                    <span class="nav-brand-mark"></span>
                    "АРЕНДА"
                    <span class="accent">"ПРАЙМ"</span>
                </div>

                <div class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| view! { <a href=*href class="nav-link">{*label}</a> })
                        .collect_view()}
                    <CtaLink
                        link=link.clone()
                        label="Профиль на картах"
                        variant=CtaVariant::Outline
                        class="cta-compact"
                    />
                </div>

                <button
                    type="button"
                    class="nav-toggle"
                    data-role="menu-toggle"
                    aria-label="Меню"
                    aria-expanded=move || nav.get().menu_open.to_string()
                    on:click=move |_| nav.update(NavState::toggle_menu)
                >
                    <Icon path=ICON_MENU size="24" class="nav-toggle-open" />
                    <Icon path=ICON_CLOSE size="24" class="nav-toggle-close" />
                </button>
            </div>

            <div class="nav-mobile">
                {NAV_LINKS
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <a href=*href class="nav-mobile-link" data-role="menu-link" on:click=close_menu>
                                {*label}
                            </a>
                        }
                    })
                    .collect_view()}
                <CtaLink link=link label="Смотреть профиль" class="cta-block" />
            </div>
        </nav>
    }
}

/// Keep `scrolled` in sync with the window scroll offset.
#[cfg(feature = "csr")]
fn track_scroll(nav: RwSignal<NavState>) {
    let sync = move || {
        let offset = window().scroll_y().unwrap_or_default();
        nav.maybe_update(|state| state.observe_scroll(offset));
    };
    // Reloads can restore a scrolled position before any event fires.
    sync();

    let handle = window_event_listener(leptos::ev::scroll, move |_| sync());
    on_cleanup(move || handle.remove());
}

use leptos::prelude::*;

use super::{CtaLink, Icon, ICON_STAR};
use crate::content::OutboundLink;

/// Full-height banner over the hero photo. Animates in on load, not on scroll.
#[component]
pub fn Hero(image: String, link: OutboundLink) -> impl IntoView {
    view! {
        <header class="hero">
            <div class="hero-backdrop">
                <img src=image alt="Интерьер апартаментов" class="hero-image" />
                <div class="hero-gradient"></div>
                <div class="hero-vignette"></div>
            </div>

            <div class="container hero-content enter-on-load">
                <div class="hero-badge">
                    <Icon path=ICON_STAR size="12" class="icon-filled" />
                    <span>"Премиум класс"</span>
                    <Icon path=ICON_STAR size="12" class="icon-filled" />
                </div>

                <h1 class="hero-title">
                    "ВАШ СТАТУС"
                    <br />
                    <span class="hero-title-accent">"В ДЕТАЛЯХ"</span>
                </h1>

                <p class="hero-lead">
                    "Аренда квартир бизнес-класса для тех, кто ценит стиль, комфорт и абсолютную приватность."
                </p>

                <div class="hero-actions">
                    <CtaLink link=link label="Выбрать квартиру" />
                </div>
            </div>
        </header>
    }
}

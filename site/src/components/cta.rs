use leptos::prelude::*;

use super::CtaLink;
use crate::content::OutboundLink;

/// Closing call-to-action block before the footer.
#[component]
pub fn CtaSection(link: OutboundLink) -> impl IntoView {
    view! {
        <section class="cta-section">
            <div class="cta-backdrop">
                <div class="cta-texture"></div>
                <div class="cta-glow"></div>
            </div>
            <div class="container cta-section-body">
                <h2 class="cta-title">
                    "АРЕНДА"
                    <span class="accent">"ПРАЙМ"</span>
                </h2>
                <p class="cta-text">
                    "Перейдите на нашу страницу в Яндекс.Картах, чтобы увидеть полное портфолио, "
                    "актуальные цены и отзывы наших гостей."
                </p>
                <div class="cta-actions">
                    <CtaLink link=link label="Перейти к каталогу" class="cta-large" />
                </div>
            </div>
        </section>
    }
}

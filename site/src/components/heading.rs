//! Section heading atom

use leptos::prelude::*;

use super::{Reveal, RevealStyle};

/// Eyebrow line, title and divider above a section.
#[component]
pub fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="section-heading">
            <Reveal motion=RevealStyle::Fade>
                <span class="section-eyebrow">{subtitle}</span>
            </Reveal>
            <Reveal delay_ms=100>
                <h2 class="section-title">{title}</h2>
            </Reveal>
            <div class="section-divider"></div>
        </div>
    }
}

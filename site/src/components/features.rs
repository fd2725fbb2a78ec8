//! "About" feature grid

use leptos::prelude::*;

use super::{stagger, Icon, Reveal, FEATURE_STAGGER_MS};
use crate::content::Feature;

/// One card per feature, in registry order, revealed with a stagger.
#[component]
pub fn Features(features: Vec<Feature>) -> impl IntoView {
    view! {
        <section id="about" class="features">
            <div class="section-rule"></div>
            <div class="container">
                <div class="features-grid">
                    {features
                        .into_iter()
                        .enumerate()
                        .map(|(idx, feature)| view! {
                            <Reveal delay_ms=stagger(idx, FEATURE_STAGGER_MS)>
                                <FeatureCard feature=feature />
                            </Reveal>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class="feature-glow"></div>
            <div class="feature-body">
                <div class="feature-icon">
                    <Icon path=feature.icon.path() size="32" />
                </div>
                <h4 class="feature-title">{feature.title}</h4>
                <p class="feature-description">{feature.description}</p>
            </div>
        </article>
    }
}

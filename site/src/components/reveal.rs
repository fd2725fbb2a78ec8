//! Reveal-once wrapper for entrance animations.
//!
//! Server output carries the hidden `reveal` class and the static enhancement
//! script flips it; in the browser build an IntersectionObserver drives the
//! [`RevealState`] latch directly.

use leptos::prelude::*;

use crate::state::RevealState;

/// Stagger step between feature cards.
pub const FEATURE_STAGGER_MS: u32 = 200;

/// Stagger step between gallery tiles.
pub const GALLERY_STAGGER_MS: u32 = 100;

/// Share of the block that must be visible before it reveals.
#[cfg(feature = "csr")]
const REVEAL_THRESHOLD: f64 = 0.15;

/// How a block enters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealStyle {
    /// Opacity only
    Fade,
    /// Opacity plus a short upward slide
    #[default]
    SlideUp,
}

impl RevealStyle {
    fn class_name(self) -> &'static str {
        match self {
            Self::Fade => "reveal reveal-fade",
            Self::SlideUp => "reveal reveal-up",
        }
    }
}

/// Delay of the `idx`-th item in a staggered list.
pub fn stagger(idx: usize, step_ms: u32) -> u32 {
    u32::try_from(idx).unwrap_or(u32::MAX).saturating_mul(step_ms)
}

/// Wraps children in a block that animates in the first time it is seen.
#[component]
pub fn Reveal(
    #[prop(default = RevealStyle::SlideUp)] motion: RevealStyle,
    /// Animation delay in milliseconds
    #[prop(default = 0)]
    delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let state = RwSignal::new(RevealState::default());
    let node = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    observe_once(node, state);

    let class = move || {
        if state.get().is_revealed() {
            format!("{} visible", motion.class_name())
        } else {
            motion.class_name().to_string()
        }
    };

    view! {
        <div node_ref=node class=class style=format!("--reveal-delay: {delay_ms}ms") data-reveal="">
            {children()}
        </div>
    }
}

#[cfg(feature = "csr")]
fn observe_once(node: NodeRef<leptos::html::Div>, state: RwSignal<RevealState>) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    Effect::new(move |_| {
        let Some(element) = node.get() else {
            return;
        };

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let intersecting = entries
                    .iter()
                    .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
                let mut revealed = false;
                state.maybe_update(|latch| {
                    revealed = latch.observe(intersecting);
                    revealed
                });
                if revealed {
                    observer.disconnect();
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&wasm_bindgen::JsValue::from_f64(REVEAL_THRESHOLD));
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer.observe(&element),
            // No observer support: show the block rather than leave it hidden.
            Err(_) => state.update(|latch| {
                latch.observe(true);
            }),
        }
        callback.forget();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn stagger_steps_linearly() {
        assert_eq!(stagger(0, FEATURE_STAGGER_MS), 0);
        assert_eq!(stagger(2, FEATURE_STAGGER_MS), 400);
        assert_eq!(stagger(7, GALLERY_STAGGER_MS), 700);
        assert_eq!(stagger(usize::MAX, GALLERY_STAGGER_MS), u32::MAX);
    }

    #[test]
    fn renders_hidden_until_observed() {
        let html = view! {
            <Reveal motion=RevealStyle::Fade delay_ms=300>
                <p>"inside"</p>
            </Reveal>
        }
        .to_html();

        assert!(html.contains("reveal reveal-fade"));
        assert!(!html.contains("visible"));
        assert!(html.contains("--reveal-delay: 300ms"));
        assert!(html.contains("inside"));
    }
}

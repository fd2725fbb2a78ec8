//! Photo gallery and the amenities bar under it
//!
//! Every tile is itself an outbound link: the photos are a preview of the
//! listing, not a lightbox. A broken image URL falls back to the browser's
//! placeholder; there is no retry and no substitute image.

use leptos::prelude::*;

use super::{stagger, Icon, Reveal, SectionHeading, GALLERY_STAGGER_MS, ICON_ARROW_RIGHT};
use crate::content::{AmenityItem, GalleryImage, OutboundLink};

/// Section heading, one linked tile per image, then the amenities bar.
#[component]
pub fn Gallery(
    images: Vec<GalleryImage>,
    amenities: Vec<AmenityItem>,
    link: OutboundLink,
) -> impl IntoView {
    view! {
        <section id="gallery" class="gallery">
            <div class="container">
                <SectionHeading title="ИНТЕРЬЕРЫ" subtitle="Фотографии" />

                <div class="gallery-grid">
                    {images
                        .into_iter()
                        .enumerate()
                        .map(|(idx, image)| {
                            let link = link.clone();
                            view! {
                                <Reveal delay_ms=stagger(idx, GALLERY_STAGGER_MS)>
                                    <GalleryTile image=image link=link />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>

                <AmenitiesBar amenities=amenities />
            </div>
        </section>
    }
}

#[component]
fn GalleryTile(image: GalleryImage, link: OutboundLink) -> impl IntoView {
    view! {
        <a
            href=link.href().to_owned()
            target="_blank"
            rel="noopener noreferrer"
            class="gallery-tile"
            data-role="gallery-tile"
        >
            <img src=image.url alt=image.title.clone() loading="lazy" class="gallery-image" />
            <div class="gallery-shade"></div>
            <div class="gallery-caption">
                <div class="gallery-caption-row">
                    <div>
                        <h4 class="gallery-title">{image.title}</h4>
                        <p class="gallery-subtitle">{image.subtitle}</p>
                    </div>
                    <Icon path=ICON_ARROW_RIGHT size="24" class="gallery-arrow" />
                </div>
            </div>
        </a>
    }
}

/// Row of amenity labels with leading icons.
#[component]
pub fn AmenitiesBar(amenities: Vec<AmenityItem>) -> impl IntoView {
    view! {
        <ul class="amenities">
            {amenities
                .into_iter()
                .map(|item| view! {
                    <li class="amenity">
                        <span class="amenity-icon">
                            <Icon path=item.icon.path() size="18" />
                        </span>
                        <span class="amenity-label">{item.label}</span>
                    </li>
                })
                .collect_view()}
        </ul>
    }
}

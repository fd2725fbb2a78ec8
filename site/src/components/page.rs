//! Page composition - the whole landing page below the mount point

use leptos::prelude::*;

use super::{CtaSection, Features, Footer, Gallery, Hero, Nav};
use crate::content::Content;
use crate::styles::SITE_CSS;
use crate::PageContext;

/// All sections in page order, fed from one content registry.
///
/// The registry is split here and each section receives only its slice.
#[component]
pub fn Page(context: PageContext) -> impl IntoView {
    let PageContext { content, year } = context;
    let Content { outbound_link, hero_image, features, gallery, amenities } = content;

    view! {
        <div class="page">
            <Nav link=outbound_link.clone() />
            <Hero image=hero_image link=outbound_link.clone() />
            <Features features=features />
            <Gallery images=gallery amenities=amenities link=outbound_link.clone() />
            <CtaSection link=outbound_link.clone() />
            <Footer link=outbound_link year=year />
        </div>
    }
}

/// Site stylesheet as a `<style>` element, for the browser build where no
/// server-rendered `<head>` exists.
#[component]
pub fn SiteStyles() -> impl IntoView {
    view! { <style inner_html=SITE_CSS></style> }
}

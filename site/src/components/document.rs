//! Root document component - the complete static HTML page
//!
//! Used for static export. The page itself is rendered inside the mount
//! container so the markup matches what the browser build produces.

use leptos::prelude::*;

use super::Page;
use crate::styles::{CSP, ENHANCE_SCRIPT, NOSCRIPT_CSS, SITE_CSS};
use crate::{PageContext, MOUNT_ID};

const TITLE: &str = "АрендаПрайм — апартаменты бизнес-класса";

const DESCRIPTION: &str =
    "Аренда квартир бизнес-класса: бесконтактное заселение, приватность, премиум стандарт.";

/// The complete HTML document for the landing page
#[component]
pub fn PageDocument(context: PageContext) -> impl IntoView {
    view! {
        <html lang="ru">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <meta name="description" content=DESCRIPTION />
                <title>{TITLE}</title>
                <style inner_html=SITE_CSS></style>
                <noscript>
                    <style inner_html=NOSCRIPT_CSS></style>
                </noscript>
            </head>
            <body>
                <div id=MOUNT_ID>
                    <Page context=context />
                </div>
                <script inner_html=ENHANCE_SCRIPT></script>
            </body>
        </html>
    }
}

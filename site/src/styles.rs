//! CSS and the static enhancement script.
//!
//! # Customization
//!
//! To extend or override styles:
//!
//! ```rust
//! use arenda_site::styles::SITE_CSS;
//!
//! let my_css = ".hero-title { letter-spacing: 0.1em; }";
//! let combined = format!("{}\n{}", SITE_CSS, my_css);
//! ```
//!
//! # Features
//!
//! - Black and gold theme, serif display type
//! - Fixed navigation bar with solid `nav-scrolled` state
//! - Mobile menu driven by the `menu-open` class
//! - Reveal-once entrance animations (`reveal` / `visible`)

/// Complete CSS for the landing page.
pub const SITE_CSS: &str = r#"
:root {
    --bg-page: #050505;
    --bg-card: #080808;
    --bg-card-hover: #0a0a0a;
    --bg-tile: #101010;
    --gold-200: #f3e3b5;
    --gold-400: #e0bf6b;
    --gold-500: #d4a94a;
    --gold-600: #b8902f;
    --gold-900: #4a3a12;
    --text-100: #f5f5f5;
    --text-200: #e5e5e5;
    --text-400: #a3a3a3;
    --text-500: #737373;
    --text-600: #525252;
    --font-serif: 'Playfair Display', 'Cormorant Garamond', Georgia, serif;
    --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;
    --container-max: 1200px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    background: var(--bg-page);
    color: var(--text-400);
    font-family: var(--font-sans);
    overflow-x: hidden;
}

::selection {
    background: var(--gold-500);
    color: #000;
}

a {
    color: inherit;
    text-decoration: none;
}

img {
    display: block;
}

.container {
    width: 100%;
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

.accent {
    color: var(--gold-500);
}

.icon-filled {
    fill: currentColor;
}

/* ---------- Call to action ---------- */

.cta {
    position: relative;
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 12px;
    padding: 16px 32px;
    overflow: hidden;
    font-size: 12px;
    font-weight: 700;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    transition: all 0.5s;
}

.cta-primary {
    background: var(--gold-600);
    color: #000;
}

.cta-primary:hover {
    background: var(--gold-500);
}

.cta-outline {
    border: 1px solid rgba(212, 169, 74, 0.5);
    color: var(--gold-500);
}

.cta-outline:hover {
    border-color: var(--gold-400);
    color: var(--gold-400);
}

.cta-shine {
    position: absolute;
    inset: 0;
    background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.2), transparent);
    transform: translateX(-100%);
    transition: transform 1s ease-in-out;
}

.cta:hover .cta-shine {
    transform: translateX(100%);
}

.cta-label {
    position: relative;
    z-index: 1;
    display: inline-flex;
    align-items: center;
    gap: 8px;
}

.cta-icon {
    opacity: 0.7;
}

.cta-compact {
    padding: 12px 24px;
    font-size: 10px;
}

.cta-block {
    width: 100%;
}

.cta-large {
    padding: 20px 48px;
    font-size: 14px;
}

/* ---------- Navigation ---------- */

.nav {
    position: fixed;
    top: 0;
    width: 100%;
    z-index: 50;
    padding: 24px 0;
    background: linear-gradient(to bottom, rgba(0, 0, 0, 0.8), transparent);
    transition: all 0.5s;
}

.nav.nav-scrolled {
    padding: 16px 0;
    background: rgba(0, 0, 0, 0.9);
    backdrop-filter: blur(16px);
    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
}

.nav-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-brand {
    display: flex;
    align-items: center;
    gap: 8px;
    font-family: var(--font-serif);
    font-size: 24px;
    font-weight: 700;
    letter-spacing: 0.1em;
    color: #fff;
}

.nav-brand-mark {
    width: 8px;
    height: 8px;
    background: var(--gold-500);
    transform: rotate(45deg);
}

.nav-links {
    display: flex;
    align-items: center;
    gap: 48px;
}

.nav-link {
    font-size: 12px;
    letter-spacing: 0.15em;
    text-transform: uppercase;
    color: var(--text-400);
    transition: color 0.3s;
}

.nav-link:hover {
    color: var(--gold-500);
}

.nav-toggle {
    display: none;
    padding: 0;
    border: 0;
    background: none;
    color: var(--gold-500);
    cursor: pointer;
}

.nav-toggle-close,
.nav.menu-open .nav-toggle-open {
    display: none;
}

.nav.menu-open .nav-toggle-close {
    display: block;
}

.nav-mobile {
    display: none;
    position: absolute;
    top: 100%;
    left: 0;
    width: 100%;
    flex-direction: column;
    gap: 24px;
    padding: 32px;
    background: #000;
    border-bottom: 1px solid rgba(212, 169, 74, 0.2);
    animation: fade-in 0.3s ease-out;
}

.nav-mobile-link {
    font-size: 14px;
    letter-spacing: 0.1em;
    text-transform: uppercase;
    color: var(--text-200);
}

@media (max-width: 767px) {
    .nav-brand {
        font-size: 20px;
    }

    .nav-links {
        display: none;
    }

    .nav-toggle {
        display: block;
    }

    .nav.menu-open .nav-mobile {
        display: flex;
    }
}

/* ---------- Hero ---------- */

.hero {
    position: relative;
    height: 90vh;
    display: flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
}

.hero-backdrop {
    position: absolute;
    inset: 0;
}

.hero-image {
    width: 100%;
    height: 100%;
    object-fit: cover;
    opacity: 0.6;
    filter: brightness(0.9) contrast(1.1);
}

.hero-gradient {
    position: absolute;
    inset: 0;
    background: linear-gradient(to top, var(--bg-page), rgba(5, 5, 5, 0.6), rgba(5, 5, 5, 0.3));
}

.hero-vignette {
    position: absolute;
    inset: 0;
    background: radial-gradient(circle at center, transparent 0%, var(--bg-page) 100%);
}

.hero-content {
    position: relative;
    z-index: 1;
    margin-top: 48px;
    text-align: center;
}

.hero-badge {
    display: inline-flex;
    align-items: center;
    gap: 12px;
    margin-bottom: 32px;
    padding: 8px 16px;
    border: 1px solid rgba(212, 169, 74, 0.3);
    border-radius: 999px;
    background: rgba(0, 0, 0, 0.5);
    backdrop-filter: blur(4px);
    color: var(--gold-500);
    font-size: 10px;
    letter-spacing: 0.2em;
    text-transform: uppercase;
}

.hero-badge span {
    color: var(--gold-400);
}

.hero-title {
    margin: 0 0 24px;
    font-family: var(--font-serif);
    font-size: clamp(36px, 7vw, 72px);
    font-weight: 400;
    line-height: 1.2;
    letter-spacing: 0.03em;
    color: #fff;
}

.hero-title-accent {
    font-style: italic;
    background: linear-gradient(90deg, var(--gold-400), var(--gold-200), var(--gold-500));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.hero-lead {
    max-width: 576px;
    margin: 0 auto 48px;
    font-size: 18px;
    font-weight: 300;
    line-height: 1.7;
}

.hero-actions {
    display: flex;
    justify-content: center;
}

.enter-on-load {
    animation: enter-up 1s ease-out both;
}

/* ---------- Section heading ---------- */

.section-heading {
    margin-bottom: 80px;
    text-align: center;
}

.section-eyebrow {
    display: block;
    margin-bottom: 16px;
    color: var(--gold-500);
    font-size: 12px;
    font-weight: 700;
    letter-spacing: 0.3em;
    text-transform: uppercase;
}

.section-title {
    margin: 0;
    font-family: var(--font-serif);
    font-size: clamp(30px, 5vw, 48px);
    font-weight: 400;
    color: var(--text-100);
}

.section-divider {
    width: 64px;
    height: 2px;
    margin: 32px auto 0;
    background: var(--gold-600);
}

.section-rule {
    position: absolute;
    top: 0;
    left: 0;
    width: 100%;
    height: 1px;
    background: linear-gradient(90deg, transparent, rgba(74, 58, 18, 0.2), transparent);
}

/* ---------- Features ---------- */

.features {
    position: relative;
    padding: 128px 0;
}

.features-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 1px;
    background: rgba(74, 58, 18, 0.2);
    border: 1px solid rgba(74, 58, 18, 0.2);
}

.feature-card {
    position: relative;
    height: 100%;
    padding: 48px;
    background: var(--bg-card);
    text-align: center;
    transition: background 0.5s;
}

.feature-card:hover {
    background: var(--bg-card-hover);
}

.feature-glow {
    position: absolute;
    inset: 0;
    background: linear-gradient(to bottom, rgba(212, 169, 74, 0.05), transparent);
    opacity: 0;
    transition: opacity 0.5s;
}

.feature-card:hover .feature-glow {
    opacity: 1;
}

.feature-body {
    position: relative;
    z-index: 1;
    display: flex;
    flex-direction: column;
    align-items: center;
}

.feature-icon {
    margin-bottom: 24px;
    padding: 16px;
    border: 1px solid rgba(212, 169, 74, 0.2);
    border-radius: 50%;
    background: #000;
    color: var(--gold-500);
    transition: all 0.5s;
}

.feature-card:hover .feature-icon {
    border-color: rgba(212, 169, 74, 0.5);
    transform: scale(1.1);
}

.feature-title {
    margin: 0 0 12px;
    font-family: var(--font-serif);
    font-size: 18px;
    font-weight: 400;
    letter-spacing: 0.05em;
    text-transform: uppercase;
    color: var(--text-200);
}

.feature-description {
    max-width: 320px;
    margin: 0;
    font-size: 14px;
    font-weight: 300;
    line-height: 1.7;
    color: var(--text-500);
}

/* ---------- Gallery ---------- */

.gallery {
    padding: 128px 0;
}

.gallery-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 32px;
}

.gallery-tile {
    position: relative;
    display: block;
    aspect-ratio: 16 / 10;
    overflow: hidden;
    border: 1px solid rgba(255, 255, 255, 0.05);
    background: var(--bg-tile);
    cursor: pointer;
}

.gallery-image {
    width: 100%;
    height: 100%;
    object-fit: cover;
    filter: brightness(0.9) contrast(1.05) grayscale(0.1);
    transition: all 0.7s ease-out;
}

.gallery-tile:hover .gallery-image {
    transform: scale(1.05);
    filter: brightness(1) grayscale(0);
}

.gallery-shade {
    position: absolute;
    inset: 0;
    background: linear-gradient(to top, rgba(0, 0, 0, 0.9), rgba(0, 0, 0, 0.2), transparent);
    opacity: 0.8;
    transition: opacity 0.5s;
}

.gallery-tile:hover .gallery-shade {
    opacity: 0.6;
}

.gallery-caption {
    position: absolute;
    bottom: 0;
    left: 0;
    width: 100%;
    padding: 32px;
    transform: translateY(8px);
    transition: transform 0.5s;
}

.gallery-tile:hover .gallery-caption {
    transform: translateY(0);
}

.gallery-caption-row {
    display: flex;
    align-items: flex-end;
    justify-content: space-between;
    margin-bottom: 16px;
    padding-bottom: 16px;
    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
}

.gallery-title {
    margin: 0;
    font-family: var(--font-serif);
    font-size: 24px;
    font-weight: 400;
    color: var(--text-200);
    transition: color 0.3s;
}

.gallery-tile:hover .gallery-title {
    color: var(--gold-500);
}

.gallery-subtitle {
    margin: 4px 0 0;
    font-size: 12px;
    letter-spacing: 0.1em;
    text-transform: uppercase;
    color: var(--text-500);
}

.gallery-arrow {
    color: var(--gold-500);
    opacity: 0;
    transform: translateX(-16px);
    transition: all 0.5s;
}

.gallery-tile:hover .gallery-arrow {
    opacity: 1;
    transform: translateX(0);
}

.amenities {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 64px;
    margin: 80px 0 0;
    padding: 32px 0;
    list-style: none;
    border-top: 1px solid rgba(255, 255, 255, 0.05);
    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
}

.amenity {
    display: flex;
    align-items: center;
    gap: 12px;
    color: var(--text-500);
}

.amenity-icon {
    display: inline-flex;
    color: var(--gold-600);
}

.amenity-label {
    font-size: 12px;
    letter-spacing: 0.15em;
    text-transform: uppercase;
}

/* ---------- Closing CTA ---------- */

.cta-section {
    position: relative;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 128px 0;
    overflow: hidden;
}

.cta-backdrop {
    position: absolute;
    inset: 0;
    background: var(--bg-card);
}

.cta-texture {
    position: absolute;
    inset: 0;
    background-image: url('https://www.transparenttextures.com/patterns/carbon-fibre.png');
    opacity: 0.2;
}

.cta-glow {
    position: absolute;
    top: 50%;
    left: 50%;
    width: 500px;
    height: 500px;
    border-radius: 50%;
    background: rgba(212, 169, 74, 0.05);
    filter: blur(100px);
    transform: translate(-50%, -50%);
}

.cta-section-body {
    position: relative;
    z-index: 1;
    text-align: center;
}

.cta-title {
    margin: 0 0 32px;
    font-family: var(--font-serif);
    font-size: clamp(36px, 6vw, 60px);
    font-weight: 400;
    letter-spacing: -0.01em;
    color: #fff;
}

.cta-text {
    max-width: 672px;
    margin: 0 auto 48px;
    font-size: 18px;
    font-weight: 300;
}

.cta-actions {
    display: flex;
    justify-content: center;
}

/* ---------- Footer ---------- */

.footer {
    padding: 48px 0;
    background: #000;
    border-top: 1px solid rgba(212, 169, 74, 0.1);
}

.footer-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 24px;
}

.footer-copyright {
    font-size: 12px;
    letter-spacing: 0.1em;
    text-transform: uppercase;
    color: var(--text-600);
}

.footer-links {
    display: flex;
    gap: 32px;
}

.footer-link {
    color: var(--text-500);
    transition: color 0.3s;
}

.footer-link:hover {
    color: var(--gold-500);
}

/* ---------- Reveal-once animations ---------- */

.reveal {
    height: 100%;
    opacity: 0;
    transition: opacity 0.7s ease-out, transform 0.7s ease-out;
    transition-delay: var(--reveal-delay, 0ms);
}

.reveal-up {
    transform: translateY(20px);
}

.reveal.visible {
    opacity: 1;
    transform: none;
}

@keyframes enter-up {
    from { opacity: 0; transform: translateY(30px); }
    to { opacity: 1; transform: none; }
}

@keyframes fade-in {
    from { opacity: 0; }
    to { opacity: 1; }
}

@media (max-width: 767px) {
    .features-grid,
    .gallery-grid {
        grid-template-columns: 1fr;
    }

    .amenities {
        gap: 32px;
    }

    .footer-inner {
        flex-direction: column;
    }
}

@media (prefers-reduced-motion: reduce) {
    .reveal,
    .enter-on-load {
        opacity: 1;
        transform: none;
        transition: none;
        animation: none;
    }
}
"#;

/// Without scripts nothing would ever reveal; show everything instead.
pub const NOSCRIPT_CSS: &str = ".reveal { opacity: 1; transform: none; }";

/// Content Security Policy for the static page. Images and the CTA texture are
/// external `https:` resources; styles and the enhancement script are inline.
pub const CSP: &str = "default-src 'self'; img-src 'self' https: data:; style-src 'self' 'unsafe-inline'; script-src 'self' 'unsafe-inline'; connect-src 'none'; font-src 'self' data:;";

/// Behaviour of the static export: nav scroll state, mobile menu and
/// reveal-once animations. Mirrors `NavState` and `RevealState`.
pub const ENHANCE_SCRIPT: &str = r#"
(() => {
  const nav = document.querySelector('[data-role="nav"]');
  if (nav) {
    const threshold = Number(nav.dataset.scrollThreshold || 50);
    const toggle = nav.querySelector('[data-role="menu-toggle"]');

    const syncScroll = () => nav.classList.toggle('nav-scrolled', window.scrollY > threshold);
    const setMenu = (open) => {
      nav.classList.toggle('menu-open', open);
      if (toggle) toggle.setAttribute('aria-expanded', String(open));
    };

    window.addEventListener('scroll', syncScroll, { passive: true });
    syncScroll();

    if (toggle) {
      toggle.addEventListener('click', () => setMenu(!nav.classList.contains('menu-open')));
    }
    nav.querySelectorAll('[data-role="menu-link"]').forEach(link => {
      link.addEventListener('click', () => setMenu(false));
    });
  }

  const blocks = document.querySelectorAll('[data-reveal]');
  if (!('IntersectionObserver' in window)) {
    blocks.forEach(block => block.classList.add('visible'));
    return;
  }
  const observer = new IntersectionObserver((entries) => {
    entries.forEach(entry => {
      if (entry.isIntersecting) {
        entry.target.classList.add('visible');
        observer.unobserve(entry.target);
      }
    });
  }, { threshold: 0.15 });
  blocks.forEach(block => observer.observe(block));
})();
"#;

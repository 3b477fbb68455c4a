//! Global CSS styles for Stillframe.
//!
//! Quiet gallery aesthetic: generous whitespace, monochrome surfaces, one
//! brass accent. Both palettes live here as CSS custom properties switched
//! by the root `data-theme` attribute.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* INK (Dark surfaces) */
  --bg: #101113;
  --bg-raised: #17181b;
  --border: #26282c;

  /* TEXT */
  --text-primary: #ececec;
  --text-muted: rgba(236, 236, 236, 0.6);

  /* ACCENT */
  --accent: #b08d57;
  --accent-soft: rgba(176, 141, 87, 0.18);

  /* SEMANTIC */
  --danger: #d4534f;
  --success: #5c8a5e;

  /* Scrim over cover images */
  --scrim: linear-gradient(to top, rgba(0, 0, 0, 0.55), transparent);

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.25rem;
  --text-xl: 1.75rem;
  --text-2xl: 2.5rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

[data-theme="light"] {
  --bg: #faf9f7;
  --bg-raised: #ffffff;
  --border: #e4e1dc;
  --text-primary: #1d1d1f;
  --text-muted: rgba(29, 29, 31, 0.6);
  --scrim: linear-gradient(to top, rgba(0, 0, 0, 0.5), transparent);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  line-height: 1.6;
  min-height: 100vh;
}

.site {
  background: var(--bg);
  color: var(--text-primary);
  min-height: 100vh;
  transition: background var(--transition-normal), color var(--transition-normal);
}

img {
  display: block;
  max-width: 100%;
}

button {
  font: inherit;
  color: inherit;
  background: none;
  border: none;
  cursor: pointer;
}

a {
  color: inherit;
  text-decoration: none;
}

a:hover {
  opacity: 0.8;
}

/* === Header === */
.site-header {
  position: sticky;
  top: 0;
  z-index: 40;
  border-bottom: 1px solid var(--border);
  background: color-mix(in srgb, var(--bg) 85%, transparent);
  backdrop-filter: blur(8px);
}

.site-header__inner {
  max-width: 72rem;
  margin: 0 auto;
  padding: 0 1rem;
  height: 4rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.brand {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.brand__name {
  font-family: var(--font-serif);
  font-size: var(--text-lg);
  letter-spacing: 0.02em;
  white-space: nowrap;
}

.site-nav {
  display: flex;
  align-items: center;
  gap: 1.5rem;
  font-size: var(--text-sm);
}

.site-header__actions {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.icon-button {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.25rem;
  height: 2.25rem;
  border-radius: 0.5rem;
  transition: background var(--transition-fast);
}

.icon-button:hover {
  background: var(--accent-soft);
}

.menu-button {
  display: none;
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  height: 2.5rem;
  padding: 0 1.1rem;
  border-radius: 0.6rem;
  font-size: var(--text-sm);
  font-weight: 500;
  transition: opacity var(--transition-fast), background var(--transition-fast);
}

.btn--primary {
  background: var(--accent);
  color: #fff;
}

.btn--primary:hover {
  opacity: 0.9;
}

.btn--secondary {
  background: var(--accent-soft);
  color: var(--text-primary);
}

.btn--ghost {
  color: var(--text-primary);
}

.btn--ghost:hover {
  background: var(--accent-soft);
}

/* === Badges === */
.badge {
  display: inline-flex;
  align-items: center;
  padding: 0.15rem 0.65rem;
  border-radius: 999px;
  font-size: var(--text-xs);
  background: var(--accent);
  color: #fff;
  white-space: nowrap;
}

.badge--secondary {
  background: var(--accent-soft);
  color: var(--text-primary);
}

.badge--outline {
  background: transparent;
  color: var(--text-primary);
  border: 1px solid var(--border);
}

/* === Inputs === */
.field-label {
  display: block;
  font-size: var(--text-sm);
  color: var(--text-muted);
  margin-bottom: 0.35rem;
}

.text-input {
  width: 100%;
  height: 2.5rem;
  padding: 0 0.75rem;
  border-radius: 0.6rem;
  border: 1px solid var(--border);
  background: var(--bg);
  color: var(--text-primary);
  font: inherit;
  font-size: var(--text-sm);
}

.text-input:focus {
  outline: 2px solid var(--accent);
  outline-offset: 1px;
}

textarea.text-input {
  height: auto;
  min-height: 7rem;
  padding: 0.6rem 0.75rem;
  resize: vertical;
}

.error-text {
  color: var(--danger);
  font-size: var(--text-sm);
  margin-top: 0.5rem;
}

.hint-text {
  color: var(--text-muted);
  font-size: var(--text-xs);
  margin-top: 0.75rem;
}

.hint-text code {
  font-family: monospace;
}

/* === Sections === */
.section {
  padding: 3.5rem 0;
}

.section--band {
  background: var(--bg-raised);
  border-top: 1px solid var(--border);
  border-bottom: 1px solid var(--border);
}

.section-inner {
  max-width: 72rem;
  margin: 0 auto;
  padding: 0 1rem;
}

.section-inner--narrow {
  max-width: 60rem;
}

.section-title {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  font-weight: 600;
}

.section-head {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 1.5rem;
}

.section-sub {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

/* === Hero === */
.hero {
  position: relative;
  isolation: isolate;
}

.hero__image {
  position: absolute;
  inset: 0;
  z-index: -1;
  overflow: hidden;
}

.hero__image img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.hero__inner {
  max-width: 72rem;
  margin: 0 auto;
  padding: 0 1rem;
  height: 60vh;
  min-height: 24rem;
  display: flex;
  align-items: flex-end;
  padding-bottom: 2.5rem;
}

.hero__panel {
  background: color-mix(in srgb, var(--bg) 75%, transparent);
  backdrop-filter: blur(8px);
  border-radius: 1rem;
  padding: 1.5rem;
  max-width: 38rem;
}

.hero__title {
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
  font-weight: 600;
  line-height: 1.2;
}

.hero__sub {
  color: var(--text-muted);
  margin-top: 0.5rem;
}

.hero__tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-top: 1rem;
}

/* === Work toolbar === */
.work-toolbar {
  display: flex;
  flex-wrap: wrap;
  align-items: flex-end;
  justify-content: space-between;
  gap: 1rem;
  margin-bottom: 1.5rem;
}

.work-toolbar__controls {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 0.75rem;
}

.search-box {
  position: relative;
}

.search-box .text-input {
  padding-left: 2.25rem;
  width: 14rem;
}

.search-box__icon {
  position: absolute;
  left: 0.6rem;
  top: 50%;
  transform: translateY(-50%);
  color: var(--text-muted);
  display: inline-flex;
}

/* === Tag tabs === */
.tag-tabs {
  display: flex;
  flex-wrap: wrap;
  gap: 0.25rem;
  padding: 0.25rem;
  border: 1px solid var(--border);
  border-radius: 0.75rem;
  background: var(--bg-raised);
}

.tag-tab {
  padding: 0.3rem 0.75rem;
  border-radius: 0.5rem;
  font-size: var(--text-sm);
  color: var(--text-muted);
  transition: background var(--transition-fast), color var(--transition-fast);
}

.tag-tab:hover {
  color: var(--text-primary);
}

.tag-tab.active {
  background: var(--accent-soft);
  color: var(--text-primary);
}

/* === Masonry grid === */
.masonry {
  columns: 3;
  column-gap: 1.5rem;
}

.photo-card {
  break-inside: avoid;
  margin-bottom: 1.5rem;
  border: 1px solid var(--border);
  border-radius: 1rem;
  overflow: hidden;
  background: var(--bg-raised);
  transition: box-shadow var(--transition-fast);
}

.photo-card:hover {
  box-shadow: 0 6px 24px rgba(0, 0, 0, 0.25);
}

.photo-card__frame {
  display: block;
  width: 100%;
  padding: 0;
}

.photo-card__frame img {
  width: 100%;
  height: auto;
}

.photo-card__meta {
  padding: 1rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 0.75rem;
}

.photo-card__title {
  font-weight: 500;
  font-size: var(--text-sm);
}

.photo-card__sub {
  color: var(--text-muted);
  font-size: var(--text-xs);
}

.photo-card__tags {
  display: flex;
  gap: 0.4rem;
}

.empty-note {
  color: var(--text-muted);
  font-size: var(--text-sm);
  padding: 2rem 0;
  text-align: center;
}

/* === Collections === */
.collection-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1.5rem;
  margin-top: 1.5rem;
}

.collection-card {
  border: 1px solid var(--border);
  border-radius: 1rem;
  overflow: hidden;
  background: var(--bg-raised);
  display: block;
}

.collection-card__cover {
  position: relative;
  height: 16rem;
  overflow: hidden;
  background: var(--border);
}

.collection-card__cover img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform var(--transition-normal);
}

.collection-card:hover .collection-card__cover img {
  transform: scale(1.02);
}

.collection-card__caption {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  justify-content: flex-end;
  padding: 1rem;
  background: var(--scrim);
  color: #fff;
}

.collection-card__caption h3 {
  font-family: var(--font-serif);
  font-size: var(--text-lg);
}

.collection-card__caption p {
  font-size: var(--text-sm);
  opacity: 0.9;
}

.collection-card__footer {
  padding: 1rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.collection-card__view {
  display: inline-flex;
  align-items: center;
  gap: 0.25rem;
  color: var(--text-primary);
}

/* === Client portal === */
.portal-card {
  border: 1px solid var(--border);
  border-radius: 1rem;
  background: var(--bg-raised);
  padding: 1.5rem;
}

.portal-form {
  display: grid;
  grid-template-columns: 1fr auto;
  gap: 0.75rem;
  align-items: end;
}

.deliverable-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1.5rem;
  margin-top: 1.5rem;
}

.deliverable-card {
  border: 1px solid var(--border);
  border-radius: 1rem;
  overflow: hidden;
  background: var(--bg-raised);
}

.deliverable-card img {
  width: 100%;
  height: 12rem;
  object-fit: cover;
}

.deliverable-card__body {
  padding: 1rem;
}

.deliverable-card__body .btn {
  width: 100%;
  margin-top: 0.75rem;
}

/* === Contact === */
.contact-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 2.5rem;
  align-items: start;
}

.contact-rows {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  font-size: var(--text-sm);
  margin-top: 1.5rem;
}

.contact-row {
  display: flex;
  align-items: center;
  gap: 0.6rem;
}

.contact-row a:hover {
  text-decoration: underline;
}

.contact-form {
  display: grid;
  gap: 0.9rem;
}

.form-status {
  font-size: var(--text-sm);
}

.form-status--ok {
  color: var(--success);
}

.form-status--err {
  color: var(--danger);
}

/* === About === */
.about-grid {
  display: grid;
  grid-template-columns: 2fr 1fr;
  gap: 2.5rem;
  align-items: start;
}

.about-copy {
  color: var(--text-muted);
  line-height: 1.8;
  margin-top: 0.75rem;
}

.feature-list {
  list-style: none;
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 0.75rem;
  margin-top: 1.5rem;
  font-size: var(--text-sm);
}

.feature-list li {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.feature-list li::before {
  content: "";
  width: 0.4rem;
  height: 0.4rem;
  border-radius: 999px;
  background: var(--accent);
  flex-shrink: 0;
}

.headshot-card {
  border: 1px solid var(--border);
  border-radius: 1rem;
  overflow: hidden;
  background: var(--bg-raised);
}

.headshot-card img {
  width: 100%;
  height: 16rem;
  object-fit: cover;
}

.headshot-card__body {
  padding: 1rem;
}

.headshot-card__body .btn {
  width: 100%;
  margin-top: 0.75rem;
}

/* === Footer === */
.site-footer {
  border-top: 1px solid var(--border);
  padding: 2rem 0;
  font-size: var(--text-sm);
}

.site-footer__inner {
  max-width: 72rem;
  margin: 0 auto;
  padding: 0 1rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  flex-wrap: wrap;
}

.site-footer__copy {
  color: var(--text-muted);
}

.site-footer__links {
  display: flex;
  gap: 1.25rem;
}

.site-footer__links a:hover {
  text-decoration: underline;
}

/* === Modals === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  background: rgba(0, 0, 0, 0.6);
  backdrop-filter: blur(4px);
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
}

.lightbox-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  background: rgba(0, 0, 0, 0.9);
  backdrop-filter: blur(4px);
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
}

.lightbox-photo {
  max-height: 90vh;
  max-width: 90vw;
  border-radius: 1rem;
  box-shadow: 0 24px 64px rgba(0, 0, 0, 0.5);
}

.mobile-menu {
  width: 100%;
  max-width: 24rem;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 1rem;
  padding: 1.5rem;
}

.mobile-menu__head {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 1rem;
}

.mobile-menu__title {
  font-family: var(--font-serif);
  font-size: var(--text-lg);
}

.mobile-menu__links {
  display: grid;
  gap: 0.25rem;
}

.mobile-menu__links a {
  padding: 0.6rem 0;
  border-bottom: 1px solid var(--border);
}

.mobile-menu__footer {
  margin-top: 1.25rem;
  display: flex;
  justify-content: flex-end;
}

/* === Collection page === */
.collection-page__head {
  padding: 2.5rem 0 1rem;
}

.back-link {
  display: inline-flex;
  align-items: center;
  gap: 0.25rem;
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.back-link:hover {
  color: var(--text-primary);
}

.collection-page__title {
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
  margin-top: 0.75rem;
}

.collection-page__blurb {
  color: var(--text-muted);
  margin-top: 0.25rem;
  max-width: 40rem;
}

.not-found {
  padding: 6rem 1rem;
  text-align: center;
}

.not-found h1 {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  margin-bottom: 0.5rem;
}

/* === Responsive === */
@media (max-width: 1024px) {
  .masonry {
    columns: 2;
  }

  .deliverable-grid {
    grid-template-columns: repeat(2, 1fr);
  }
}

@media (max-width: 768px) {
  .site-nav {
    display: none;
  }

  .menu-button {
    display: inline-flex;
  }

  .masonry {
    columns: 1;
  }

  .collection-grid,
  .deliverable-grid,
  .contact-grid,
  .about-grid,
  .feature-list {
    grid-template-columns: 1fr;
  }

  .portal-form {
    grid-template-columns: 1fr;
  }

  .search-box .text-input {
    width: 100%;
  }

  .hero__title {
    font-size: var(--text-xl);
  }
}
"#;

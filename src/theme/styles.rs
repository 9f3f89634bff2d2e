//! Global CSS styles for OPTCG Collector.
//!
//! Dark collector's-binder look: black page, near-black panels, indigo for
//! navigation and search, emerald for adding to the collection.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --bg-page: #000000;
  --bg-panel: #030712;
  --bg-card: #111827;
  --bg-input: #030712;
  --bg-muted: #1f2937;
  --border: #1f2937;
  --border-strong: #374151;

  /* Accents */
  --indigo: #4f46e5;
  --indigo-hover: #6366f1;
  --emerald: #059669;
  --emerald-hover: #10b981;

  /* Text */
  --text-primary: #f3f4f6;
  --text-secondary: #d1d5db;
  --text-muted: #9ca3af;
  --text-faint: #6b7280;
  --danger: #f87171;

  /* Typography */
  --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.25rem;
  --text-2xl: 1.5rem;

  --radius: 0.25rem;
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--bg-page);
  color: var(--text-primary);
  min-height: 100vh;
}

/* === Layout === */
.app {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
}

.app-header {
  position: sticky;
  top: 0;
  z-index: 10;
  background: rgba(0, 0, 0, 0.8);
  backdrop-filter: blur(8px);
  border-bottom: 1px solid var(--border);
}

.app-header__inner,
.app-main {
  max-width: 80rem;
  width: 100%;
  margin: 0 auto;
  padding: 1rem;
}

.app-header__inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.app-header__tagline {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.app-main {
  flex: 1;
  padding-top: 1.5rem;
}

.app-footer {
  border-top: 1px solid var(--border);
  padding: 1.5rem 1rem;
  text-align: center;
  font-size: var(--text-sm);
  color: var(--text-faint);
}

/* === Typography === */
.page-title {
  font-size: var(--text-xl);
  font-weight: 600;
  letter-spacing: -0.01em;
}

.section-header {
  font-size: var(--text-lg);
  font-weight: 600;
  margin-bottom: 0.75rem;
}

/* === Panels === */
.panel {
  background: var(--bg-panel);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1rem;
}

.dashboard-section {
  margin-top: 2rem;
}

/* === Inputs === */
.input-field,
.select-field {
  background: var(--bg-input);
  border: 1px solid var(--border-strong);
  border-radius: var(--radius);
  color: var(--text-secondary);
  padding: 0.5rem 0.75rem;
  font-family: inherit;
}

.input-field::placeholder {
  color: var(--text-faint);
}

.input-field--small,
.select-field {
  padding: 0.25rem 0.5rem;
  font-size: var(--text-sm);
}

/* === Buttons === */
.btn-primary,
.btn-add,
.tab,
.image-upload__pick,
.image-upload-btn {
  border: none;
  border-radius: var(--radius);
  cursor: pointer;
  font-family: inherit;
  transition: background var(--transition-fast);
}

.btn-primary {
  background: var(--indigo);
  color: white;
  padding: 0 1rem;
}

.btn-primary:hover {
  background: var(--indigo-hover);
}

.btn-add {
  background: var(--emerald);
  color: white;
  font-size: var(--text-sm);
  padding: 0.25rem 0.75rem;
}

.btn-add:hover {
  background: var(--emerald-hover);
}

button:disabled {
  opacity: 0.6;
  cursor: default;
}

/* === Search Bar === */
.search-bar {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  width: 100%;
}

.search-bar__input {
  flex: 1;
}

.search-bar__loading {
  color: var(--text-muted);
}

.search-bar__error {
  color: var(--danger);
}

/* === Card Grid === */
.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(10rem, 1fr));
  gap: 1rem;
  margin-top: 1rem;
}

.card-tile {
  background: var(--bg-card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 0.5rem;
}

.card-tile__art {
  aspect-ratio: 3 / 4;
  background: rgba(0, 0, 0, 0.5);
  border-radius: var(--radius);
  overflow: hidden;
  display: flex;
  align-items: center;
  justify-content: center;
}

.card-tile__img {
  width: 100%;
  height: 100%;
  object-fit: contain;
}

.card-tile__placeholder {
  color: var(--text-faint);
  font-size: var(--text-sm);
}

.card-tile__meta {
  margin-top: 0.5rem;
}

.card-tile__name {
  margin-top: 0.5rem;
  font-size: var(--text-sm);
  color: var(--text-primary);
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

.card-tile__meta .card-tile__name {
  margin-top: 0;
}

.card-tile__subtitle {
  font-size: var(--text-xs);
  color: var(--text-faint);
}

/* === Add Form === */
.add-form {
  margin-top: 0.5rem;
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.add-form__price {
  flex: 1;
  min-width: 0;
}

.add-form__qty {
  width: 4rem;
}

/* === Dashboard === */
.dashboard__toolbar {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 1rem;
}

.tab-bar {
  display: flex;
  gap: 0.5rem;
  font-size: var(--text-sm);
}

.tab {
  background: var(--bg-muted);
  color: var(--text-secondary);
  padding: 0.25rem 0.75rem;
}

.tab.active {
  background: var(--indigo);
  color: white;
}

.total-card {
  background: var(--bg-card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1rem;
  color: var(--text-secondary);
}

.total-card__label {
  font-size: var(--text-sm);
  margin-bottom: 0.5rem;
}

.total-card__value {
  font-size: var(--text-2xl);
  font-weight: 600;
}

.tab-placeholder {
  color: var(--text-muted);
}

/* === Currency Toggle === */
.currency-toggle {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.currency-label {
  padding: 0.25rem 0.5rem;
  border-radius: var(--radius);
  color: var(--text-muted);
}

.currency-label.active {
  background: rgba(255, 255, 255, 0.1);
  color: white;
}

.switch {
  display: inline-flex;
  align-items: center;
  cursor: pointer;
}

.switch__input {
  position: absolute;
  width: 1px;
  height: 1px;
  opacity: 0;
}

.switch__track {
  position: relative;
  width: 3rem;
  height: 1.5rem;
  background: var(--border-strong);
  border-radius: 9999px;
  transition: background var(--transition-fast);
}

.switch__track.on {
  background: var(--indigo);
}

.switch__knob {
  position: absolute;
  top: 0.125rem;
  left: 0.125rem;
  width: 1.25rem;
  height: 1.25rem;
  background: white;
  border-radius: 9999px;
  transition: left var(--transition-fast);
}

.switch__track.on .switch__knob {
  left: 1.625rem;
}

/* === Image Upload === */
.image-upload {
  margin-top: 0.5rem;
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.image-upload__pick {
  flex: 1;
  min-width: 0;
  background: transparent;
  color: var(--text-muted);
  font-size: var(--text-xs);
  text-align: left;
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

.image-upload-btn {
  background: var(--bg-muted);
  color: var(--text-secondary);
  font-size: var(--text-xs);
  padding: 0.25rem 0.5rem;
}
"#;

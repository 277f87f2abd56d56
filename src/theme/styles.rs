//! Global CSS styles for the Magical Media Showcase.
//!
//! Deep-night background, purple accents, amber favorites.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --primary-color: #7c3aed;
  --primary-glow: rgba(124, 58, 237, 0.4);
  --secondary-color: #10b981;
  --favorite-color: #f59e0b;
  --danger-color: #ef4444;

  --night: #0f0a1e;
  --night-lighter: #1a1333;
  --night-border: rgba(255, 255, 255, 0.08);

  --text-primary: #f5f3ff;
  --text-secondary: rgba(245, 243, 255, 0.7);

  --font-display: 'Cinzel', Georgia, serif;
  --font-body: 'Poppins', 'Segoe UI', sans-serif;

  --radius: 14px;
  --transition: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html { scroll-behavior: smooth; }

body {
  background: radial-gradient(ellipse at top, var(--night-lighter), var(--night));
  color: var(--text-primary);
  font-family: var(--font-body);
  min-height: 100vh;
  overflow-x: hidden;
}

a { color: inherit; text-decoration: none; }

/* === Particles === */
.particles-container {
  position: fixed;
  inset: 0;
  pointer-events: none;
  z-index: 0;
  overflow: hidden;
}

.particle {
  position: absolute;
  border-radius: 50%;
  opacity: 0.7;
  filter: blur(1px);
}

.showcase, .upload-page {
  position: relative;
  z-index: 1;
  outline: none;
}

/* === Navigation === */
.navbar {
  position: sticky;
  top: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 2rem;
  background: rgba(15, 10, 30, 0.85);
  backdrop-filter: blur(10px);
  border-bottom: 1px solid var(--night-border);
}

.logo {
  font-family: var(--font-display);
  font-size: 1.4rem;
  color: var(--text-primary);
}

.nav-links {
  display: flex;
  gap: 1.5rem;
  list-style: none;
}

.nav-link {
  color: var(--text-secondary);
  transition: color var(--transition);
}

.nav-link:hover, .nav-link.active { color: var(--primary-color); }

.menu-toggle {
  display: none;
  background: none;
  border: none;
  color: var(--text-primary);
  font-size: 1.5rem;
  cursor: pointer;
}

@media (max-width: 768px) {
  .menu-toggle { display: block; }
  .nav-links { display: none; }
  .nav-links.open {
    display: flex;
    flex-direction: column;
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    padding: 1rem 2rem;
    background: var(--night);
  }
}

/* === Hero === */
.hero {
  min-height: 70vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1.5rem;
  text-align: center;
  padding: 4rem 2rem;
}

.hero-title {
  font-family: var(--font-display);
  font-size: 3.5rem;
  background: linear-gradient(90deg, var(--primary-color), var(--secondary-color));
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
}

.hero-subtitle { color: var(--text-secondary); max-width: 40rem; }

.section-title {
  font-family: var(--font-display);
  font-size: 2rem;
  text-align: center;
  margin-bottom: 1.5rem;
}

/* === Buttons === */
.btn-primary, .btn-secondary, .btn-favorite {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.75rem 1.5rem;
  border-radius: 999px;
  font: inherit;
  cursor: pointer;
  transition: all var(--transition);
}

.btn-primary {
  background: var(--primary-color);
  border: 1px solid var(--primary-color);
  color: white;
}

.btn-primary:hover { box-shadow: 0 0 20px var(--primary-glow); transform: translateY(-2px); }

.btn-secondary {
  background: transparent;
  border: 1px solid var(--night-border);
  color: var(--text-secondary);
}

.btn-favorite {
  background: transparent;
  border: 1px solid var(--favorite-color);
  color: var(--favorite-color);
}

.btn-favorite.active { background: var(--favorite-color); color: var(--night); }

.close-btn {
  position: absolute;
  top: 1rem;
  right: 1rem;
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 50%;
  border: none;
  background: rgba(0, 0, 0, 0.5);
  color: white;
  font-size: 1.5rem;
  cursor: pointer;
  z-index: 2;
}

/* === Gallery === */
.gallery-section, .about-section, .upload-section {
  max-width: 1200px;
  margin: 0 auto;
  padding: 4rem 2rem;
}

.filter-bar {
  display: flex;
  justify-content: center;
  flex-wrap: wrap;
  gap: 0.75rem;
  margin-bottom: 2rem;
}

.filter-btn {
  padding: 0.5rem 1.25rem;
  border-radius: 999px;
  border: 1px solid var(--night-border);
  background: transparent;
  color: var(--text-secondary);
  font: inherit;
  cursor: pointer;
  transition: all var(--transition);
}

.filter-btn.active, .filter-btn:hover {
  background: var(--primary-color);
  border-color: var(--primary-color);
  color: white;
}

.gallery-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: 1.5rem;
}

.gallery-empty { text-align: center; color: var(--text-secondary); }

.gallery-item {
  position: relative;
  border-radius: var(--radius);
  overflow: hidden;
  background: var(--night-lighter);
  cursor: pointer;
  aspect-ratio: 4 / 3;
  animation: fadeIn 0.5s ease;
  transition: transform var(--transition), box-shadow var(--transition);
}

.gallery-item:hover { transform: translateY(-5px); box-shadow: 0 10px 30px var(--primary-glow); }

.media-container, .media-container img, .media-container video {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.media-overlay {
  position: absolute;
  inset: auto 0 0 0;
  padding: 1rem;
  background: linear-gradient(transparent, rgba(0, 0, 0, 0.85));
}

.media-title { font-size: 1.1rem; }

.media-type {
  display: inline-block;
  margin-top: 0.25rem;
  padding: 0.15rem 0.6rem;
  border-radius: 999px;
  font-size: 0.75rem;
  background: rgba(124, 58, 237, 0.3);
}

.favorite-btn {
  position: absolute;
  top: 0.75rem;
  right: 0.75rem;
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 50%;
  border: none;
  background: rgba(0, 0, 0, 0.5);
  color: white;
  font-size: 1.25rem;
  cursor: pointer;
}

.favorite-btn.active { color: var(--favorite-color); }

/* === Loading === */
.loading-indicator {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  padding: 2rem;
  color: var(--text-secondary);
}

.spinner {
  width: 3rem;
  height: 3rem;
  border: 3px solid var(--night-border);
  border-top-color: var(--primary-color);
  border-radius: 50%;
  animation: spin 1s linear infinite;
}

/* === Lightbox & Modals === */
.lightbox-modal, .modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 2000;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(5, 3, 12, 0.9);
  outline: none;
  animation: fadeIn 0.3s ease;
}

.lightbox-content {
  position: relative;
  display: grid;
  grid-template-columns: 2fr 1fr;
  width: min(1100px, 92vw);
  max-height: 90vh;
  border-radius: var(--radius);
  overflow: hidden;
  background: var(--night-lighter);
}

.lightbox-media img, .lightbox-media video {
  width: 100%;
  height: 100%;
  max-height: 90vh;
  object-fit: contain;
  background: black;
}

.lightbox-info {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  padding: 2rem;
}

.lightbox-meta {
  display: flex;
  gap: 1rem;
  align-items: center;
  color: var(--text-secondary);
  font-size: 0.875rem;
}

@media (max-width: 768px) {
  .lightbox-content { grid-template-columns: 1fr; }
}

.modal-content {
  position: relative;
  width: min(420px, 92vw);
  padding: 2rem;
  border-radius: var(--radius);
  background: var(--night-lighter);
  border: 1px solid var(--night-border);
}

.modal-header { margin-bottom: 1rem; }

.modal-body { display: flex; flex-direction: column; gap: 0.5rem; }

.input-label { color: var(--text-secondary); font-size: 0.875rem; }

.input-field {
  padding: 0.75rem 1rem;
  border-radius: 10px;
  border: 1px solid var(--night-border);
  background: var(--night);
  color: var(--text-primary);
  font: inherit;
}

.input-field:focus { outline: none; border-color: var(--primary-color); }

.modal-footer {
  display: flex;
  justify-content: flex-end;
  gap: 0.75rem;
  margin-top: 1.5rem;
}

/* === Upload === */
.upload-section { text-align: center; }
.upload-note { color: var(--text-secondary); margin-bottom: 1.5rem; }
.upload-actions { display: flex; justify-content: center; gap: 1rem; }

/* === Notifications === */
.notification {
  position: fixed;
  bottom: 20px;
  right: 20px;
  z-index: 3000;
  padding: 1rem 1.5rem;
  border-radius: 10px;
  color: white;
  box-shadow: 0 5px 15px rgba(0, 0, 0, 0.3);
  animation: slideUp 0.3s ease;
}

.notification-info { background: var(--primary-color); }
.notification-error { background: var(--danger-color); }

/* === Footer === */
.footer {
  padding: 2rem;
  text-align: center;
  color: var(--text-secondary);
  border-top: 1px solid var(--night-border);
}

/* === Animations === */
@keyframes fadeIn {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes slideUp {
  from { opacity: 0; transform: translateY(100px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes spin {
  to { transform: rotate(360deg); }
}
"#;

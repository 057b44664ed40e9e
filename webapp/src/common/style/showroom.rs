pub const SHOWROOM_STYLES: &str = r#"
/* Landing page */
.showroom {
  min-height: 100vh;
}

/* Hero */
.hero {
  position: relative;
  width: 100%;
  height: 90vh;
  overflow: hidden;
  background: var(--black);
}

.hero-backdrop {
  position: absolute;
  inset: 0;
  animation: ken-burns 10s ease-in-out infinite alternate;
}

.hero-backdrop .image-fill {
  opacity: 0.8;
}

.hero-shade {
  position: absolute;
  inset: 0;
  background: linear-gradient(to top, black, transparent, rgba(0, 0, 0, 0.4));
}

.hero-copy-wrap {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  justify-content: flex-end;
  padding-bottom: var(--space-24);
  z-index: 10;
}

.hero-copy {
  animation: rise-in 0.8s var(--easing-standard) 0.2s both;
}

.hero-eyebrow {
  display: block;
  color: rgba(255, 255, 255, 0.8);
  text-transform: uppercase;
  letter-spacing: 0.2em;
  font-size: 0.875rem;
  margin-bottom: var(--space-4);
}

.hero-title {
  font-family: Georgia, serif;
  font-size: 4.5rem;
  font-weight: 400;
  color: white;
  margin-bottom: var(--space-6);
}

.hero-subtitle {
  color: rgba(255, 255, 255, 0.8);
  font-size: 1.25rem;
  font-weight: 300;
  max-width: 36rem;
  margin-bottom: var(--space-8);
}

.hero-actions {
  display: flex;
  gap: var(--space-4);
}

@media (max-width: 767px) {
  .hero-title {
    font-size: 3rem;
  }

  .hero-subtitle {
    font-size: 1.125rem;
  }
}

@media (max-width: 639px) {
  .hero-actions {
    flex-direction: column;
  }
}

@keyframes ken-burns {
  from { transform: scale(1.1); }
  to { transform: scale(1); }
}

@keyframes rise-in {
  from { opacity: 0; transform: translateY(50px); }
  to { opacity: 1; transform: translateY(0); }
}

/* Models */
.models {
  padding: var(--space-10) 0;
  background: var(--background-muted);
  overflow: hidden;
}

.shelf-header {
  display: flex;
  justify-content: space-between;
  align-items: flex-end;
  margin-bottom: var(--space-8);
  padding-bottom: var(--space-4);
  border-bottom: 1px solid var(--border-strong);
}

.shelf-header .section-heading {
  margin-bottom: 0;
}

.shelf-action {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  font-size: 0.875rem;
  font-weight: 600;
  color: var(--text-primary);
  margin-bottom: var(--space-2);
}

.shelf-action:hover {
  color: var(--primary);
  text-decoration: none;
}

.shelf-strip {
  display: flex;
  gap: var(--space-6);
  overflow-x: auto;
  padding-bottom: var(--space-8);
  scroll-snap-type: x mandatory;
  scrollbar-width: none;
}

.shelf-strip::-webkit-scrollbar {
  display: none;
}

.shelf-slot {
  scroll-snap-align: center;
}

@media (max-width: 767px) {
  .shelf-strip {
    margin: 0 calc(-1 * var(--space-6));
    padding-left: var(--space-6);
    padding-right: var(--space-6);
  }
}

/* Car card */
.car-card {
  position: relative;
  min-width: 350px;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius-xl);
  overflow: hidden;
  box-shadow: var(--shadow-sm);
  transition: transform var(--transition-normal) var(--easing-standard),
              box-shadow var(--transition-normal) var(--easing-standard);
}

.car-card:hover {
  transform: translateY(-5px);
  box-shadow: var(--shadow-xl);
}

@media (max-width: 767px) {
  .car-card {
    min-width: 300px;
  }
}

.car-card-image {
  aspect-ratio: 16 / 9;
}

.car-card-image .image-fill {
  transition: transform var(--transition-slow) var(--easing-standard);
}

.car-card:hover .car-card-image .image-fill {
  transform: scale(1.05);
}

.badges {
  position: absolute;
  top: var(--space-3);
  left: var(--space-3);
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
}

.badge {
  display: flex;
  align-items: center;
  gap: var(--space-1);
  color: white;
  font-size: 10px;
  font-weight: 700;
  padding: var(--space-1) var(--space-2);
  border-radius: var(--radius-sm);
  text-transform: uppercase;
  letter-spacing: 0.05em;
}

.badge-new {
  background: var(--info);
}

.badge-choice {
  background: var(--accent);
}

.badge-popular {
  background: var(--neutral-900);
}

.car-card-body {
  padding: var(--space-5);
}

.car-card-head {
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
  margin-bottom: var(--space-2);
}

.car-card-name {
  font-size: 1.125rem;
  font-weight: 600;
  color: var(--text-primary);
  transition: color var(--transition-fast) var(--easing-standard);
}

.car-card:hover .car-card-name {
  color: var(--primary);
}

.car-card-category {
  font-size: 0.75rem;
  color: var(--text-tertiary);
  text-transform: uppercase;
  letter-spacing: 0.1em;
}

.car-card-price {
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-primary);
  text-align: right;
}

.car-card-specs {
  display: flex;
  align-items: center;
  gap: var(--space-4);
  font-size: 0.75rem;
  color: var(--text-tertiary);
  margin: var(--space-4) 0;
  padding-top: var(--space-3);
  border-top: 1px solid var(--border);
}

.car-card-specs span {
  display: flex;
  align-items: center;
  gap: var(--space-1);
}

.car-card-actions {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-2);
}

/* Innovation */
.innovation {
  background: var(--surface-inverse);
  color: white;
  padding: var(--space-24) 0;
}

.innovation-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-16);
  align-items: center;
}

@media (max-width: 767px) {
  .innovation-grid {
    grid-template-columns: 1fr;
  }
}

.innovation-eyebrow {
  display: block;
  color: var(--primary);
  font-weight: 600;
  letter-spacing: 0.05em;
  text-transform: uppercase;
  margin-bottom: var(--space-2);
}

.innovation-title {
  font-family: Georgia, serif;
  font-size: 3rem;
  font-weight: 400;
  margin-bottom: var(--space-6);
}

.innovation-copy {
  color: var(--neutral-400);
  font-size: 1.125rem;
  font-weight: 300;
  line-height: 1.625;
  margin-bottom: var(--space-8);
}

.innovation-points {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
}

.innovation-points li {
  display: flex;
  align-items: center;
  gap: var(--space-4);
  font-size: 1.125rem;
  font-weight: 300;
}

.innovation-point-icon {
  padding: var(--space-2);
  background: rgba(255, 255, 255, 0.1);
  border-radius: var(--radius-full);
  display: flex;
}

.innovation-visual {
  aspect-ratio: 16 / 9;
  border-radius: var(--radius-xl);
  background: #262626;
}

/* Footer */
.site-footer {
  background: rgba(0, 0, 0, 0.9);
  color: white;
  padding: var(--space-20) 0 var(--space-10);
  border-top: 1px solid var(--neutral-800);
}

.footer-grid {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: var(--space-12);
  margin-bottom: var(--space-16);
}

@media (max-width: 767px) {
  .footer-grid {
    grid-template-columns: repeat(2, 1fr);
  }
}

.footer-grid h4 {
  font-weight: 700;
  margin-bottom: var(--space-6);
}

.footer-grid ul {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
  font-size: 0.875rem;
  font-weight: 300;
  color: var(--neutral-400);
}

.footer-grid li {
  cursor: pointer;
}

.footer-grid li:hover {
  color: white;
}

.newsletter {
  display: flex;
  gap: var(--space-2);
}

.newsletter input {
  width: 100%;
  padding: var(--space-2) var(--space-3);
  font-size: 0.875rem;
  color: white;
  background: transparent;
  border: 1px solid var(--neutral-500);
  border-radius: var(--radius-2xl);
}

.newsletter button {
  background: white;
  color: black;
  padding: 0 var(--space-4);
  font-size: 0.875rem;
  font-weight: 700;
  border: none;
  border-radius: var(--radius-2xl);
  cursor: pointer;
}

.footer-legal {
  border-top: 1px solid var(--neutral-800);
  padding-top: var(--space-8);
  font-size: 0.75rem;
  color: var(--neutral-400);
}

/* Menu demo and placeholder pages */
.plain-page {
  min-height: 100vh;
  padding: var(--space-6) 0;
  background: var(--background);
  color: var(--text-primary);
}

.backdrop {
  width: 70vw;
  height: 480px;
  margin: var(--space-4) auto 0;
  border-radius: var(--radius-lg);
}

.placeholder {
  text-align: center;
  padding: var(--space-24) 0;
}

.placeholder h1 {
  font-size: 2rem;
  font-weight: 300;
  margin-bottom: var(--space-4);
}

.placeholder code {
  color: var(--primary);
}

.placeholder p {
  color: var(--text-secondary);
  margin-bottom: var(--space-8);
}
"#;

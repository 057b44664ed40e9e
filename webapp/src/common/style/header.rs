pub const HEADER_STYLES: &str = r#"
/* Site header */
.site-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  color: white;
  transition: background var(--transition-normal) var(--easing-standard),
              padding var(--transition-normal) var(--easing-standard);
}

.site-header.solid {
  background: var(--black);
  padding: var(--space-4) 0;
}

.site-header.translucent {
  background: linear-gradient(to bottom, rgba(0, 0, 0, 0.8), transparent);
  padding: var(--space-6) 0;
}

.header-bar {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.brand {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  cursor: pointer;
  z-index: 50;
  color: inherit;
}

.brand:hover {
  text-decoration: none;
}

.brand-mark {
  width: 32px;
  height: 32px;
  border-radius: var(--radius-full);
  border: 2px solid currentColor;
  display: flex;
  align-items: center;
  justify-content: center;
  font-family: Georgia, serif;
  font-size: 0.75rem;
}

.brand-name {
  font-family: Georgia, serif;
  letter-spacing: 0.1em;
  font-size: 1.125rem;
}

@media (max-width: 639px) {
  .brand-name {
    display: none;
  }
}

.header-nav {
  display: flex;
  align-items: center;
  gap: var(--space-8);
}

.header-nav a {
  color: inherit;
  font-size: 0.875rem;
  font-weight: 500;
  transition: color var(--transition-fast) var(--easing-standard);
}

.header-nav a:hover {
  color: var(--primary);
  text-decoration: none;
}

.header-tools {
  display: flex;
  align-items: center;
  gap: var(--space-6);
}

.menu-button {
  z-index: 50;
}

/* Mobile overlay */
.mobile-overlay {
  position: absolute;
  top: 0;
  left: 0;
  width: 100%;
  height: 100vh;
  background: var(--black);
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
  padding: var(--space-24) var(--space-6) 0;
  animation: overlay-in var(--transition-normal) var(--easing-standard);
}

.mobile-overlay a {
  color: white;
  font-size: 1.5rem;
  font-weight: 300;
  border-bottom: 1px solid var(--neutral-800);
  padding-bottom: var(--space-4);
}

.mobile-overlay a:hover {
  text-decoration: none;
  color: var(--primary);
}

.mobile-overlay .overlay-tools {
  display: flex;
  gap: var(--space-6);
}

@keyframes overlay-in {
  from { opacity: 0; transform: translateY(-20px); }
  to { opacity: 1; transform: translateY(0); }
}
"#;

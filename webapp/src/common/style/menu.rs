pub const MENU_STYLES: &str = r#"
/* Navigation menu */
.nav-menu-shell {
  width: 100%;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-2);
}

.nav-menu {
  position: relative;
  max-width: max-content;
}

.nav-list {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: center;
  gap: var(--space-1);
  list-style: none;
}

.nav-item {
  position: relative;
}

.nav-trigger {
  display: inline-flex;
  align-items: center;
  gap: var(--space-1);
  height: 36px;
  padding: 0 var(--space-4);
  border-radius: var(--radius-md);
  background: var(--background);
  color: var(--text-primary);
  border: none;
  font-size: 0.875rem;
  font-weight: 500;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard);
}

.nav-trigger:hover,
.nav-trigger.open {
  background: var(--neutral-100);
  text-decoration: none;
}

.nav-trigger .chevron {
  width: 12px;
  height: 12px;
  transition: transform var(--transition-normal) var(--easing-standard);
}

.nav-trigger.open .chevron {
  transform: rotate(180deg);
}

.nav-panel {
  list-style: none;
  display: grid;
  gap: var(--space-2);
  padding: var(--space-2);
  background: var(--surface);
  color: var(--text-primary);
  border: 1px solid var(--border-strong);
  border-radius: var(--radius-md);
  box-shadow: var(--shadow-md);
  animation: panel-in var(--transition-fast) var(--easing-standard);
}

/* floating panels hang below their trigger */
.nav-menu.floating .nav-panel {
  position: absolute;
  top: calc(100% + 6px);
  left: 0;
  z-index: 40;
}

/* in-place panels take the full row and push content down */
.nav-menu.in-place .nav-item.open {
  flex-basis: 100%;
}

.nav-menu.in-place .nav-panel {
  position: static;
  margin-top: var(--space-2);
  width: 100%;
}

.nav-panel.featured {
  width: 500px;
  grid-template-columns: 0.75fr 1fr;
}

.nav-panel.featured .feature-card {
  grid-row: span 3;
}

.nav-panel.two-column {
  width: 600px;
  grid-template-columns: 1fr 1fr;
}

.nav-panel.stack {
  width: 300px;
  gap: var(--space-4);
}

.nav-menu.in-place .nav-panel.featured,
.nav-menu.in-place .nav-panel.two-column,
.nav-menu.in-place .nav-panel.stack {
  width: 100%;
  grid-template-columns: 1fr;
}

.nav-link {
  display: flex;
  flex-direction: column;
  gap: var(--space-1);
  padding: var(--space-2);
  border-radius: var(--radius-sm);
  color: inherit;
  font-size: 0.875rem;
  transition: background-color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover {
  background: var(--neutral-100);
  text-decoration: none;
}

.nav-link.with-icon {
  flex-direction: row;
  align-items: center;
  gap: var(--space-2);
}

.nav-link-title {
  font-weight: 500;
  line-height: 1;
}

.nav-link-description {
  color: var(--text-tertiary);
  line-height: 1.375;
  overflow: hidden;
  display: -webkit-box;
  -webkit-line-clamp: 2;
  -webkit-box-orient: vertical;
}

.feature-card {
  display: flex;
  flex-direction: column;
  justify-content: flex-end;
  height: 100%;
  padding: var(--space-6);
  border-radius: var(--radius-md);
  background: linear-gradient(to bottom, var(--neutral-50), var(--neutral-100));
  color: inherit;
}

.feature-card:hover {
  text-decoration: none;
  box-shadow: var(--shadow-md);
}

.feature-card .feature-title {
  font-size: 1.125rem;
  font-weight: 500;
  margin-bottom: var(--space-2);
}

.feature-card .feature-blurb {
  color: var(--text-tertiary);
  font-size: 0.875rem;
  line-height: 1.25;
}

@keyframes panel-in {
  from { opacity: 0; transform: translateY(-4px) scale(0.98); }
  to { opacity: 1; transform: none; }
}
"#;

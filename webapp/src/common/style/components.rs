pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  height: 40px;
  padding: 0 var(--space-4);
  border-radius: var(--radius-md);
  font-size: 0.875rem;
  font-weight: 500;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard);
  border: 1px solid transparent;
  outline: none;
}

.btn:focus-visible {
  box-shadow: 0 0 0 3px rgba(0, 173, 239, 0.3);
}

.btn:active {
  transform: translateY(1px);
}

.btn-primary {
  background-color: var(--primary);
  color: white;
}

.btn-primary:hover {
  background-color: var(--primary-dark);
}

.btn-dark {
  background-color: var(--black);
  color: white;
}

.btn-dark:hover {
  background-color: var(--neutral-800);
}

.btn-outline {
  background-color: transparent;
  border-color: var(--border-strong);
  color: var(--text-primary);
}

.btn-outline:hover {
  background-color: var(--neutral-100);
}

.btn-ghost-light {
  background-color: transparent;
  border-color: white;
  color: white;
}

.btn-ghost-light:hover {
  background-color: white;
  color: black;
}

.btn-sm {
  height: 36px;
  font-size: 0.75rem;
}

.btn-block {
  width: 100%;
}

.icon-button {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  background: none;
  border: none;
  color: inherit;
  cursor: pointer;
  padding: 0;
  transition: color var(--transition-fast) var(--easing-standard);
}

.icon-button:hover {
  color: var(--primary);
}

/* Icons */
.icon {
  width: 20px;
  height: 20px;
  flex-shrink: 0;
}

.icon-xs {
  width: 10px;
  height: 10px;
}

.icon-sm {
  width: 12px;
  height: 12px;
}

.icon-md {
  width: 16px;
  height: 16px;
}

.icon-accent {
  color: var(--primary);
}

/* Images */
.image-frame {
  position: relative;
  overflow: hidden;
  background-color: var(--neutral-100);
}

.image-fill {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.image-missing {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  color: var(--text-tertiary);
  font-size: 0.75rem;
  background-color: var(--neutral-200);
}

/* Layout utilities */
.container {
  width: 100%;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-6);
}

.section-heading {
  margin-bottom: var(--space-8);
}

.section-heading h2 {
  font-size: 1.875rem;
  font-weight: 300;
  color: var(--text-primary);
  margin-bottom: var(--space-2);
}

.section-heading p {
  color: var(--text-secondary);
  max-width: 42rem;
  font-weight: 300;
}

@media (max-width: 767px) {
  .md-up {
    display: none;
  }

  .section-heading h2 {
    font-size: 1.5rem;
  }
}

@media (max-width: 1023px) {
  .lg-up {
    display: none !important;
  }
}

@media (min-width: 1024px) {
  .lg-down {
    display: none !important;
  }
}
"#;

pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #00ADEF;          /* Brand cyan */
  --primary-light: #33BEF2;    /* Lighter cyan for hover states */
  --primary-dark: #0090C5;     /* Darker cyan for active states */
  --accent: #F59E0B;           /* Amber for "top choice" ribbons */
  --info: #3B82F6;             /* Blue for "just added" ribbons */

  /* Neutrals */
  --neutral-50: #F8FAFC;
  --neutral-100: #F1F5F9;
  --neutral-200: #E2E8F0;
  --neutral-300: #CBD5E1;
  --neutral-400: #94A3B8;
  --neutral-500: #64748B;
  --neutral-600: #475569;
  --neutral-700: #334155;
  --neutral-800: #1E293B;
  --neutral-900: #0F172A;
  --black: #000000;

  /* Background and Surface Colors */
  --background: #FFFFFF;
  --background-muted: var(--neutral-50);
  --surface: #FFFFFF;
  --surface-inverse: #171717;

  /* Text Colors */
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-600);
  --text-tertiary: var(--neutral-500);
  --text-inverse: #FFFFFF;

  /* Border Colors */
  --border: #F3F4F6;
  --border-strong: var(--neutral-200);

  /* Layout */
  --header-height: 72px;
  --container-width: 1280px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-5: 20px;
  --space-6: 24px;
  --space-8: 32px;
  --space-10: 40px;
  --space-12: 48px;
  --space-16: 64px;
  --space-20: 80px;
  --space-24: 96px;

  /* Border Radius */
  --radius-sm: 2px;
  --radius-md: 6px;
  --radius-lg: 8px;
  --radius-xl: 12px;
  --radius-2xl: 16px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
  --shadow-xl: 0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 300ms;
  --transition-slow: 700ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}

html[data-theme="dark"] {
  --background: #0A0A0A;
  --background-muted: #111111;
  --surface: #171717;
  --surface-inverse: #0A0A0A;

  --text-primary: #F5F5F5;
  --text-secondary: #A3A3A3;
  --text-tertiary: #737373;

  --border: #262626;
  --border-strong: #404040;

  --neutral-100: #1F1F1F;
  --neutral-200: #262626;
}"#;

use std::{fmt, str::FromStr};

use anyhow;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

// the toggle advertises where a press will take you, not where you are
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeIcon {
    Moon,
    Sun,
}

impl ThemePreference {
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn icon(self) -> ThemeIcon {
        match self {
            ThemePreference::Light => ThemeIcon::Moon,
            ThemePreference::Dark => ThemeIcon::Sun,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" | "Light" => Ok(ThemePreference::Light),
            "dark" | "Dark" => Ok(ThemePreference::Dark),
            other => Err(anyhow::Error::msg(format!(
                "unknown theme preference: {other}"
            ))),
        }
    }
}

// read/write capability over the shared light/dark preference
//
// the preference itself is owned elsewhere (in the webapp, a signal backed by
// local storage); components receive an implementation instead of reaching for a
// global
pub trait ThemeProvider {
    fn current(&self) -> ThemePreference;

    fn set(&mut self, value: ThemePreference);
}

pub fn toggle<P: ThemeProvider + ?Sized>(provider: &mut P) -> ThemePreference {
    let next = provider.current().toggled();

    debug!(%next, "theme toggled");

    provider.set(next);
    next
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoryTheme {
    value: ThemePreference,
}

impl MemoryTheme {
    pub fn new(value: ThemePreference) -> Self {
        MemoryTheme { value }
    }
}

impl ThemeProvider for MemoryTheme {
    fn current(&self) -> ThemePreference {
        self.value
    }

    fn set(&mut self, value: ThemePreference) {
        self.value = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOTH: [ThemePreference; 2] = [ThemePreference::Light, ThemePreference::Dark];

    #[test]
    fn toggling_twice_is_identity() {
        for start in BOTH {
            assert_eq!(start.toggled().toggled(), start);

            let mut provider = MemoryTheme::new(start);
            toggle(&mut provider);
            toggle(&mut provider);
            assert_eq!(provider.current(), start);
        }
    }

    #[test]
    fn toggle_sets_the_other_value() {
        let mut provider = MemoryTheme::new(ThemePreference::Light);

        assert_eq!(toggle(&mut provider), ThemePreference::Dark);
        assert_eq!(provider.current(), ThemePreference::Dark);
    }

    #[test]
    fn icon_shows_target_state() {
        assert_eq!(ThemePreference::Light.icon(), ThemeIcon::Moon);
        assert_eq!(ThemePreference::Dark.icon(), ThemeIcon::Sun);
    }

    #[test]
    fn parse_and_display() -> anyhow::Result<()> {
        assert_eq!("dark".parse::<ThemePreference>()?, ThemePreference::Dark);
        assert_eq!(" Light ".parse::<ThemePreference>()?, ThemePreference::Light);
        assert!("sepia".parse::<ThemePreference>().is_err());

        for value in BOTH {
            assert_eq!(value.to_string().parse::<ThemePreference>()?, value);
        }

        Ok(())
    }

    #[test]
    fn toggle_through_trait_object() {
        let mut provider = MemoryTheme::default();
        let dynamic: &mut dyn ThemeProvider = &mut provider;

        toggle(dynamic);

        assert_eq!(provider.current(), ThemePreference::Dark);
    }
}

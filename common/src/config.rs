use serde::{Deserialize, Serialize};
use toml;
use tracing::{Level, debug, error, instrument};

use crate::{
    NARROW_VIEWPORT_WIDTH, SCROLL_THRESHOLD, image::ImagePolicy, image::RemotePattern,
    theme::ThemePreference,
};

// shipped configuration, baked in at compile time since the webapp has no
// filesystem to read from
pub const DEFAULT_CONFIG: &str = include_str!("../storefront.toml");

// storefront configuration
//
// each subtable may be omitted, in which case the compiled-in defaults apply
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub header: HeaderConfig,

    #[serde(default)]
    pub menu: MenuConfig,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub images: ImageConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct HeaderConfig {
    // vertical offset, in pixels, past which the header turns solid
    pub scroll_threshold: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        HeaderConfig {
            scroll_threshold: SCROLL_THRESHOLD,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct MenuConfig {
    // viewports strictly narrower than this expand menu panels in place
    pub narrow_viewport_width: f64,
}

impl Default for MenuConfig {
    fn default() -> Self {
        MenuConfig {
            narrow_viewport_width: NARROW_VIEWPORT_WIDTH,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ThemeConfig {
    // used when nothing usable is in local storage
    pub default: ThemePreference,

    // local storage key, prefixed by the webapp storage helpers
    pub storage_key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            default: ThemePreference::Light,
            storage_key: String::from("theme"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ImageConfig {
    #[serde(default)]
    pub remote: Vec<RemotePattern>,
}

impl StorefrontConfig {
    #[instrument(level=Level::DEBUG, skip(contents))]
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let config: StorefrontConfig = toml::from_str(contents)?;

        config.validate()?;

        debug!(
            remote_patterns = config.images.remote.len(),
            "parsed storefront config"
        );

        Ok(config)
    }

    // the shipped file is part of the build, so a failure here is a packaging bug;
    // we still come up with the compiled-in defaults rather than a blank page
    pub fn load() -> Self {
        match Self::from_toml(DEFAULT_CONFIG) {
            Ok(config) => config,
            Err(err) => {
                error!("failed to parse storefront config, using defaults: {err:#}");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let threshold = self.header.scroll_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(anyhow::Error::msg(format!(
                "header.scroll_threshold must be a non-negative number, got {threshold}"
            )));
        }

        let width = self.menu.narrow_viewport_width;
        if !width.is_finite() || width <= 0.0 {
            return Err(anyhow::Error::msg(format!(
                "menu.narrow_viewport_width must be positive, got {width}"
            )));
        }

        if self.theme.storage_key.trim().is_empty() {
            return Err(anyhow::Error::msg("theme.storage_key must not be empty"));
        }

        // compiling the globs is the validation
        self.image_policy()?;

        Ok(())
    }

    pub fn image_policy(&self) -> anyhow::Result<ImagePolicy> {
        ImagePolicy::new(&self.images.remote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_config_parses() -> anyhow::Result<()> {
        let config = StorefrontConfig::from_toml(DEFAULT_CONFIG)?;

        assert_eq!(config.header.scroll_threshold, 50.0);
        assert_eq!(config.menu.narrow_viewport_width, 1024.0);
        assert_eq!(config.theme.default, ThemePreference::Light);
        assert!(!config.images.remote.is_empty());

        let policy = config.image_policy()?;
        for car in crate::catalog::CAR_DATA {
            policy.check(car.image)?;
        }

        Ok(())
    }

    #[test]
    fn shipped_allow_list_covers_every_host() -> anyhow::Result<()> {
        let config = StorefrontConfig::from_toml(DEFAULT_CONFIG)?;
        assert_eq!(config.images.remote.len(), 15);

        let policy = config.image_policy()?;
        for src in [
            "http://localhost:5000/uploads/a.jpg",
            "http://127.0.0.1:5000/uploads/a.jpg",
            "https://moksh-varanasi-backend.vercel.app/uploads/a.jpg",
            "https://moksh-varanasi-backend.onrender.com/uploads/a.jpg",
            "https://lh3.googleusercontent.com/a/avatar",
            "https://images.unsplash.com/photo-1",
            "https://plus.unsplash.com/premium-1",
            "https://media.istockphoto.com/id/1/photo.jpg",
            "https://encrypted-tbn0.gstatic.com/images",
            "https://myoksha.com/wp-content/a.png",
            "https://m.media-amazon.com/images/I/a.jpg",
            "https://berqwp-cdn.sfo3.cdn.digitaloceanspaces.com/cache/a.webp",
            "https://rukminim2.flixcart.com/image/a.jpeg",
            "https://astrotalk.store/cdn/a.png",
            "https://images.astroyogi.com/a.jpg",
        ] {
            assert!(policy.allows(src), "{src}");
        }

        assert!(!policy.allows("https://moksh-varanasi-backend.vercel.app/admin/a.jpg"));

        Ok(())
    }

    #[test]
    fn omitted_tables_use_defaults() -> anyhow::Result<()> {
        let config = StorefrontConfig::from_toml("[header]\nscroll_threshold = 80.0\n")?;

        assert_eq!(config.header.scroll_threshold, 80.0);
        assert_eq!(config.menu, MenuConfig::default());
        assert_eq!(config.theme, ThemeConfig::default());
        assert!(config.images.remote.is_empty());

        Ok(())
    }

    #[test]
    fn theme_default_is_lowercase() -> anyhow::Result<()> {
        let config =
            StorefrontConfig::from_toml("[theme]\ndefault = \"dark\"\nstorage_key = \"mode\"\n")?;

        assert_eq!(config.theme.default, ThemePreference::Dark);
        assert_eq!(config.theme.storage_key, "mode");

        Ok(())
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(StorefrontConfig::from_toml("[header]\nscroll_threshold = -1.0\n").is_err());
        assert!(StorefrontConfig::from_toml("[menu]\nnarrow_viewport_width = 0.0\n").is_err());
        assert!(
            StorefrontConfig::from_toml("[theme]\ndefault = \"light\"\nstorage_key = \" \"\n")
                .is_err()
        );
        assert!(StorefrontConfig::from_toml("[theme]\ndefault = \"sepia\"\n").is_err());
        assert!(StorefrontConfig::from_toml("header = 3").is_err());
    }

    #[test]
    fn load_never_fails() {
        let config = StorefrontConfig::load();

        assert_eq!(config.header.scroll_threshold, SCROLL_THRESHOLD);
    }
}

use anyhow::{self, Context};
use http::Uri;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

// remote image allow-list entry
//
// port and pathname are optional; leaving either out matches anything.  pathname
// is a glob where ** crosses path separators and * does not
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RemotePattern {
    pub protocol: String,
    pub hostname: String,

    #[serde(default)]
    pub port: Option<u16>,

    #[serde(default)]
    pub pathname: Option<String>,
}

#[derive(Clone, Debug)]
struct CompiledPattern {
    pattern: RemotePattern,
    pathname: Option<Regex>,
}

impl CompiledPattern {
    fn matches(&self, uri: &Uri) -> bool {
        let scheme = uri.scheme_str().unwrap_or_default();
        let host = uri.host().unwrap_or_default();

        if !scheme.eq_ignore_ascii_case(&self.pattern.protocol) {
            return false;
        }

        if !host.eq_ignore_ascii_case(&self.pattern.hostname) {
            return false;
        }

        if let Some(port) = self.pattern.port {
            if uri.port_u16() != Some(port) {
                return false;
            }
        }

        match &self.pathname {
            Some(re) => re.is_match(uri.path()),
            None => true,
        }
    }
}

fn glob_to_regex(glob: &str) -> anyhow::Result<Regex> {
    let mut expr = String::from("^");
    let mut chars = glob.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '*' {
            if chars.peek() == Some(&'*') {
                chars.next();
                expr.push_str(".*");
            } else {
                expr.push_str("[^/]*");
            }
        } else {
            expr.push_str(&regex::escape(&c.to_string()));
        }
    }

    expr.push('$');

    Regex::new(&expr).with_context(|| format!("invalid pathname pattern {glob}"))
}

// image source policy
//
// root-relative sources are bundled assets and always allowed; absolute urls
// have to match one of the configured remote patterns
#[derive(Clone, Debug, Default)]
pub struct ImagePolicy {
    patterns: Vec<CompiledPattern>,
}

impl ImagePolicy {
    pub fn new(patterns: &[RemotePattern]) -> anyhow::Result<Self> {
        let patterns = patterns
            .iter()
            .map(|pattern| -> anyhow::Result<CompiledPattern> {
                let pathname = pattern.pathname.as_deref().map(glob_to_regex).transpose()?;

                Ok(CompiledPattern {
                    pattern: pattern.clone(),
                    pathname,
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(ImagePolicy { patterns })
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    #[instrument(skip(self))]
    pub fn check(&self, src: &str) -> anyhow::Result<()> {
        if src.starts_with('/') && !src.starts_with("//") {
            return Ok(());
        }

        let uri: Uri = src
            .parse()
            .with_context(|| format!("image source is not a valid url: {src}"))?;

        if uri.scheme().is_none() || uri.host().is_none() {
            return Err(anyhow::Error::msg(format!(
                "image source must be root-relative or absolute: {src}"
            )));
        }

        match self.patterns.iter().find(|compiled| compiled.matches(&uri)) {
            Some(compiled) => {
                debug!(hostname = %compiled.pattern.hostname, "image source allowed");
                Ok(())
            }
            None => Err(anyhow::Error::msg(format!(
                "image host is not configured: {}",
                uri.host().unwrap_or_default()
            ))),
        }
    }

    pub fn allows(&self, src: &str) -> bool {
        self.check(src).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(
        protocol: &str,
        hostname: &str,
        port: Option<u16>,
        pathname: Option<&str>,
    ) -> RemotePattern {
        RemotePattern {
            protocol: protocol.to_owned(),
            hostname: hostname.to_owned(),
            port,
            pathname: pathname.map(str::to_owned),
        }
    }

    fn policy() -> anyhow::Result<ImagePolicy> {
        ImagePolicy::new(&[
            pattern("https", "images.unsplash.com", None, Some("/**")),
            pattern("http", "localhost", Some(5000), Some("/uploads/**")),
            pattern("https", "lh3.googleusercontent.com", None, None),
            pattern("https", "cdn.example.com", None, Some("/img/*.avif")),
        ])
    }

    #[test]
    fn bundled_assets_are_allowed() -> anyhow::Result<()> {
        let policy = policy()?;

        assert!(policy.allows("/front-left-side-47.avif"));
        assert!(!policy.allows("//evil.example.com/x.png"));

        Ok(())
    }

    #[test]
    fn unsplash_with_query_is_allowed() -> anyhow::Result<()> {
        let policy = policy()?;

        policy.check(
            "https://images.unsplash.com/photo-1617788138017-80ad40651399?q=80&w=1000&auto=format&fit=crop",
        )?;

        Ok(())
    }

    #[test]
    fn protocol_and_port_must_match() -> anyhow::Result<()> {
        let policy = policy()?;

        assert!(!policy.allows("http://images.unsplash.com/photo"));
        assert!(policy.allows("http://localhost:5000/uploads/a/b.png"));
        assert!(!policy.allows("http://localhost:8080/uploads/a.png"));
        assert!(!policy.allows("http://localhost:5000/private/a.png"));

        Ok(())
    }

    #[test]
    fn single_star_stays_in_segment() -> anyhow::Result<()> {
        let policy = policy()?;

        assert!(policy.allows("https://cdn.example.com/img/car.avif"));
        assert!(!policy.allows("https://cdn.example.com/img/nested/car.avif"));

        Ok(())
    }

    #[test]
    fn missing_pathname_matches_anything() -> anyhow::Result<()> {
        let policy = policy()?;

        assert!(policy.allows("https://lh3.googleusercontent.com/a/b/c"));

        Ok(())
    }

    #[test]
    fn unknown_and_malformed_sources_are_rejected() -> anyhow::Result<()> {
        let policy = policy()?;

        assert!(policy.check("https://example.org/car.png").is_err());
        assert!(policy.check("car.png").is_err());
        assert!(policy.check("").is_err());

        Ok(())
    }

    #[test]
    fn glob_escapes_regex_metacharacters() -> anyhow::Result<()> {
        let re = glob_to_regex("/a.b/**")?;

        assert!(re.is_match("/a.b/c"));
        assert!(!re.is_match("/axb/c"));

        Ok(())
    }
}

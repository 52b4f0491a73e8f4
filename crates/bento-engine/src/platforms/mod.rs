//! Social platform lookup.
//!
//! Tiles consume platform metadata (icon, label, brand colour, profile URL
//! template) through [`PlatformResolver`]; they never hard-code networks
//! beyond the legacy fallbacks in [`crate::variant::icon`].

/// Display metadata and URL builder for one social network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformOption {
    pub key: String,
    pub label: String,
    /// Generic glyph name, always available
    pub icon: String,
    /// Brand logo glyph name, when the network has one
    pub brand_icon: Option<String>,
    pub brand_color: Option<String>,
    /// Profile URL with a `{handle}` placeholder
    pub url_template: String,
}

impl PlatformOption {
    /// Profile URL for `handle`; a leading `@` is dropped
    pub fn build_url(&self, handle: &str) -> String {
        let handle = handle.trim().trim_start_matches('@');
        self.url_template.replace("{handle}", handle)
    }
}

/// Maps platform keys and raw URLs to platform metadata
pub trait PlatformResolver {
    fn option(&self, key: &str) -> Option<PlatformOption>;

    /// Best-effort platform key for a profile URL
    fn infer_from_url(&self, url: &str) -> Option<String>;
}

/// Resolver that knows no platforms at all
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPlatforms;

impl PlatformResolver for NoPlatforms {
    fn option(&self, _key: &str) -> Option<PlatformOption> {
        None
    }

    fn infer_from_url(&self, _url: &str) -> Option<String> {
        None
    }
}

struct PlatformEntry {
    key: &'static str,
    label: &'static str,
    icon: &'static str,
    brand_icon: Option<&'static str>,
    brand_color: Option<&'static str>,
    url_template: &'static str,
    hosts: &'static [&'static str],
}

const PLATFORMS: &[PlatformEntry] = &[
    PlatformEntry {
        key: "x",
        label: "X (Twitter)",
        icon: "twitter",
        brand_icon: Some("x"),
        brand_color: Some("#000000"),
        url_template: "https://x.com/{handle}",
        hosts: &["x.com", "twitter.com"],
    },
    PlatformEntry {
        key: "instagram",
        label: "Instagram",
        icon: "instagram",
        brand_icon: Some("instagram"),
        brand_color: Some("#E4405F"),
        url_template: "https://instagram.com/{handle}",
        hosts: &["instagram.com"],
    },
    PlatformEntry {
        key: "github",
        label: "GitHub",
        icon: "github",
        brand_icon: Some("github"),
        brand_color: Some("#181717"),
        url_template: "https://github.com/{handle}",
        hosts: &["github.com"],
    },
    PlatformEntry {
        key: "linkedin",
        label: "LinkedIn",
        icon: "linkedin",
        brand_icon: Some("linkedin"),
        brand_color: Some("#0A66C2"),
        url_template: "https://linkedin.com/in/{handle}",
        hosts: &["linkedin.com"],
    },
    PlatformEntry {
        key: "youtube",
        label: "YouTube",
        icon: "youtube",
        brand_icon: Some("youtube"),
        brand_color: Some("#FF0000"),
        url_template: "https://youtube.com/@{handle}",
        hosts: &["youtube.com", "youtu.be"],
    },
    PlatformEntry {
        key: "tiktok",
        label: "TikTok",
        icon: "music",
        brand_icon: Some("tiktok"),
        brand_color: Some("#000000"),
        url_template: "https://tiktok.com/@{handle}",
        hosts: &["tiktok.com"],
    },
    PlatformEntry {
        key: "twitch",
        label: "Twitch",
        icon: "twitch",
        brand_icon: Some("twitch"),
        brand_color: Some("#9146FF"),
        url_template: "https://twitch.tv/{handle}",
        hosts: &["twitch.tv"],
    },
    PlatformEntry {
        key: "bluesky",
        label: "Bluesky",
        icon: "cloud",
        brand_icon: Some("bluesky"),
        brand_color: Some("#0085FF"),
        url_template: "https://bsky.app/profile/{handle}",
        hosts: &["bsky.app"],
    },
    PlatformEntry {
        key: "website",
        label: "Website",
        icon: "globe",
        brand_icon: None,
        brand_color: None,
        url_template: "https://{handle}",
        hosts: &[],
    },
];

/// Built-in registry of common networks
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinPlatforms;

impl PlatformResolver for BuiltinPlatforms {
    fn option(&self, key: &str) -> Option<PlatformOption> {
        let key = match key {
            "twitter" => "x",
            other => other,
        };
        PLATFORMS
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| PlatformOption {
                key: entry.key.to_string(),
                label: entry.label.to_string(),
                icon: entry.icon.to_string(),
                brand_icon: entry.brand_icon.map(str::to_string),
                brand_color: entry.brand_color.map(str::to_string),
                url_template: entry.url_template.to_string(),
            })
    }

    fn infer_from_url(&self, url: &str) -> Option<String> {
        let host = host_of(url)?;
        PLATFORMS
            .iter()
            .find(|entry| {
                entry
                    .hosts
                    .iter()
                    .any(|known| host == *known || host.ends_with(&format!(".{known}")))
            })
            .map(|entry| entry.key.to_string())
    }
}

/// Lowercased host of an absolute http(s) URL
fn host_of(url: &str) -> Option<String> {
    let rest = url
        .trim()
        .strip_prefix("https://")
        .or_else(|| url.trim().strip_prefix("http://"))?;
    let host = rest.split(['/', '?', '#']).next()?;
    let host = host.rsplit('@').next()?.split(':').next()?;
    if host.is_empty() {
        return None;
    }
    Some(host.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://twitter.com/jack", Some("x"))]
    #[case("https://www.github.com/octocat", Some("github"))]
    #[case("http://m.youtube.com/watch?v=1", Some("youtube"))]
    #[case("https://bsky.app/profile/me", Some("bluesky"))]
    #[case("https://notgithub.com/x", None)]
    #[case("github.com/octocat", None)]
    #[case("", None)]
    fn test_infer_from_url(#[case] url: &str, #[case] expected: Option<&str>) {
        assert_eq!(
            BuiltinPlatforms.infer_from_url(url).as_deref(),
            expected,
            "{url}"
        );
    }

    #[test]
    fn test_build_url_strips_at() {
        let option = BuiltinPlatforms.option("github").unwrap();
        assert_eq!(option.build_url("@octocat"), "https://github.com/octocat");
    }

    #[test]
    fn test_twitter_alias() {
        let option = BuiltinPlatforms.option("twitter").unwrap();
        assert_eq!(option.key, "x");
    }

    #[test]
    fn test_unknown_key() {
        assert!(BuiltinPlatforms.option("myspace").is_none());
        assert!(NoPlatforms.option("github").is_none());
    }
}

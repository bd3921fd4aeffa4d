use std::path::Path;

use anyhow::{Context, Result, bail};
use reqwest::Url;
use serde::Deserialize;

/// A shortcut as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShortcutEntry {
    pub name: String,
    pub url: String,
    pub icon: String,
}

impl ShortcutEntry {
    fn new(name: &str, url: &str, icon: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// The built-in list used when the config file names no shortcuts.
pub fn default_entries() -> Vec<ShortcutEntry> {
    vec![
        ShortcutEntry::new("Netflix", "https://www.netflix.com", "icons/netflix.png"),
        ShortcutEntry::new("Disney+ Hotstar", "https://www.hotstar.com", "icons/hotstar.png"),
        ShortcutEntry::new("Zee5", "https://www.zee5.com", "icons/zee5.png"),
        ShortcutEntry::new("Prime Video", "https://www.primevideo.com", "icons/prime.png"),
    ]
}

/// A validated launcher target. One tile is rendered per shortcut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    pub name: String,
    pub url: Url,
    pub icon: String,
}

impl Shortcut {
    pub fn from_entry(entry: &ShortcutEntry) -> Result<Self> {
        let name = entry.name.trim();
        if name.is_empty() {
            bail!("Shortcut for {} has an empty name", entry.url);
        }
        let url = parse_web_url(&entry.url)
            .with_context(|| format!("Invalid URL for shortcut {name:?}"))?;
        Ok(Self {
            name: name.to_string(),
            url,
            icon: entry.icon.clone(),
        })
    }

    /// Short text stand-in for the icon, derived from its file stem.
    pub fn badge(&self) -> &str {
        Path::new(&self.icon)
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.name)
    }
}

/// Validate a list of entries, keeping their order.
pub fn from_entries(entries: &[ShortcutEntry]) -> Result<Vec<Shortcut>> {
    if entries.is_empty() {
        bail!("At least one shortcut is required");
    }
    entries.iter().map(Shortcut::from_entry).collect()
}

/// Parse `raw` and require an http or https scheme.
pub fn parse_web_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).with_context(|| format!("Failed to parse URL: {raw}"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => bail!("Unsupported URL scheme {other:?} in {raw}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid_and_ordered() {
        let shortcuts = from_entries(&default_entries()).unwrap();
        let names: Vec<_> = shortcuts.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Netflix", "Disney+ Hotstar", "Zee5", "Prime Video"]);
        assert_eq!(shortcuts[0].url.as_str(), "https://www.netflix.com/");
    }

    #[test]
    fn rejects_non_web_scheme() {
        let entry = ShortcutEntry::new("Local", "file:///etc/passwd", "icons/x.png");
        assert!(Shortcut::from_entry(&entry).is_err());
    }

    #[test]
    fn rejects_unparseable_url() {
        let entry = ShortcutEntry::new("Broken", "not a url", "icons/x.png");
        assert!(Shortcut::from_entry(&entry).is_err());
    }

    #[test]
    fn rejects_blank_name() {
        let entry = ShortcutEntry::new("  ", "https://example.com", "icons/x.png");
        assert!(Shortcut::from_entry(&entry).is_err());
    }

    #[test]
    fn rejects_empty_list() {
        assert!(from_entries(&[]).is_err());
    }

    #[test]
    fn badge_from_icon_stem() {
        let s = Shortcut::from_entry(&ShortcutEntry::new(
            "Prime Video",
            "https://www.primevideo.com",
            "icons/prime.png",
        ))
        .unwrap();
        assert_eq!(s.badge(), "prime");
    }

    #[test]
    fn badge_falls_back_to_name() {
        let s = Shortcut::from_entry(&ShortcutEntry::new("Zee5", "https://www.zee5.com", ""))
            .unwrap();
        assert_eq!(s.badge(), "Zee5");
    }
}

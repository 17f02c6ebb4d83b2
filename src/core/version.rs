//! Game client version parsing and manifest reading.
//!
//! World of Tanks identifies client builds with dotted versions such as
//! `1.19.1.0`. The installed version is published in the game directory's
//! `version.xml` manifest, and replay files carry a decorated form like
//! `World of Tanks v.1.19.1.0 #1148` in their metadata.
//!
//! # Public API
//! - [`GameVersion`]: Parsed dotted version with lexicographic ordering
//! - [`read_manifest_version`]: Extract the installed version from `version.xml`

use crate::core::error::{ReplayNavigatorError, Result};
use std::fmt;
use std::path::Path;

/// A dotted game client version such as `1.19.1.0`.
///
/// Ordering compares numeric components left to right, so `1.9.1.2` sorts
/// before `1.19.1.0` and a shorter version sorts before a longer one with the
/// same leading components.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct GameVersion(Vec<u32>);

impl GameVersion {
    /// Parses a strict dotted version string such as `2.0.0.0`.
    ///
    /// Every dot-separated component must be an unsigned number. Leading and
    /// trailing whitespace is ignored. Returns `None` for anything else.
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        trimmed
            .split('.')
            .map(|component| component.parse::<u32>().ok())
            .collect::<Option<Vec<u32>>>()
            .map(Self)
    }

    /// Extracts a version from decorated launcher or replay text.
    ///
    /// Accepts forms like `v.2.0.0.0 #731` or `World of Tanks v.1.19.1.0 #1148`
    /// (the words may be joined by non-breaking spaces). Tokens marked with a
    /// `v.` prefix win; otherwise the first bare dotted token is used. Build
    /// numbers after `#` are ignored.
    pub fn from_marked(text: &str) -> Option<Self> {
        let tokens: Vec<&str> = text.split_whitespace().collect();

        for token in &tokens {
            if let Some(rest) = token.strip_prefix("v.") {
                if let Some(version) = Self::parse(rest) {
                    return Some(version);
                }
            }
        }

        tokens
            .iter()
            .filter(|token| token.contains('.'))
            .find_map(|token| Self::parse(token))
    }

    /// Returns the numeric components in order.
    pub fn components(&self) -> &[u32] {
        &self.0
    }
}

impl fmt::Display for GameVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dotted: Vec<String> = self.0.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", dotted.join("."))
    }
}

/// Reads the installed client version from the game's `version.xml` manifest.
///
/// Any failure (unreadable file, missing element, unrecognizable text) is
/// reported as a [`ReplayNavigatorError::VersionManifest`] naming the path.
pub fn read_manifest_version(path: &Path) -> Result<GameVersion> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ReplayNavigatorError::version_manifest(path, e.to_string()))?;

    let element = version_element_text(&content)
        .ok_or_else(|| ReplayNavigatorError::version_manifest(path, "no <version> element"))?;

    GameVersion::from_marked(element).ok_or_else(|| {
        ReplayNavigatorError::version_manifest(
            path,
            format!("unrecognized version text '{}'", element.trim()),
        )
    })
}

// The manifest's root element is literally named <version.xml>, so a plain
// search for "<version>" lands on the inner element.
fn version_element_text(content: &str) -> Option<&str> {
    let start = content.find("<version>")? + "<version>".len();
    let end = content[start..].find("</version>")? + start;
    Some(&content[start..end])
}

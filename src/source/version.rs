use std::{fs, path::Path, sync::LazyLock};

use anyhow::{Context, Result};
use regex::Regex;

/// File in the documentation directory that declares the release version.
pub const VERSION_FILE: &str = "version.sgml";

static VERSION_ENTITY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<!ENTITY\s+version\s+"([0-9.]+)"\s*>"#).unwrap());

/// Release tag for a version declaration: `<!ENTITY version "16.4">` becomes
/// `REL_16_4`.
pub fn version_tag(src: &str) -> Option<String> {
    let caps = VERSION_ENTITY_REGEX.captures(src)?;
    let version = caps.get(1)?.as_str();
    Some(format!("REL_{}", version.replace('.', "_")))
}

/// Reads `version.sgml` under `root` and derives the release tag.
pub fn resolve_version_tag(root: &Path) -> Result<String> {
    let path = root.join(VERSION_FILE);
    let src = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    version_tag(&src).with_context(|| format!("No version declaration in {}", path.display()))
}

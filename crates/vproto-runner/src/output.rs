//! Output directory resolution.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

/// Local fallback output root.
pub const DEFAULT_OUTPUT_ROOT: &str = "generated_specs";

/// Host-application resources path probed under the working directory.
const HOST_RESOURCES_DIR: &str = "Packages/vproto-prototypes/Resources";

/// Subdirectory holding the generated specification artifacts.
const SPEC_SUBDIR: &str = "FunctionalSpecification";

/// Normalize a string to a filesystem-friendly directory name.
pub fn safe_dir_name(value: &str) -> String {
    if value.is_empty() {
        return "batch".to_string();
    }
    static UNSAFE: OnceLock<Regex> = OnceLock::new();
    let unsafe_chars = UNSAFE.get_or_init(|| Regex::new(r"[^A-Za-z0-9._-]+").unwrap());
    unsafe_chars.replace_all(value, "_").into_owned()
}

/// Resolve the output root: explicit override, else the host
/// application's resources folder when present, else a local default.
pub fn resolve_output_root(override_root: Option<&Path>) -> PathBuf {
    if let Some(root) = override_root {
        return root.to_path_buf();
    }
    let host_root = std::env::current_dir()
        .map(|cwd| cwd.join(HOST_RESOURCES_DIR))
        .unwrap_or_else(|_| PathBuf::from(HOST_RESOURCES_DIR));
    if host_root.exists() {
        host_root
    } else {
        PathBuf::from(DEFAULT_OUTPUT_ROOT)
    }
}

/// Resolve (and create) the output directories for a group's specs.
///
/// Returns `(group_dir, spec_dir)` where `spec_dir` is
/// `<root>/<group>/FunctionalSpecification`.
pub fn output_dirs(root: &Path, group: &str) -> std::io::Result<(PathBuf, PathBuf)> {
    let group = if group.is_empty() {
        "GeneratedGroup"
    } else {
        group
    };
    let group_dir = root.join(group);
    let spec_dir = group_dir.join(SPEC_SUBDIR);
    fs::create_dir_all(&spec_dir)?;
    debug!("Output directory: {}", spec_dir.display());
    Ok((group_dir, spec_dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_safe_dir_name_replaces_unsafe_runs() {
        assert_eq!(safe_dir_name("Coffee Maker #2"), "Coffee_Maker_2");
        assert_eq!(safe_dir_name("toaster"), "toaster");
        assert_eq!(safe_dir_name("a/b\\c"), "a_b_c");
        assert_eq!(safe_dir_name(""), "batch");
        assert_eq!(safe_dir_name("ok-name_1.2"), "ok-name_1.2");
    }

    #[test]
    fn test_explicit_override_wins() {
        let root = resolve_output_root(Some(Path::new("/tmp/spec-out")));
        assert_eq!(root, PathBuf::from("/tmp/spec-out"));
    }

    #[test]
    fn test_output_dirs_created_under_group() {
        let root = TempDir::new().unwrap();
        let (group_dir, spec_dir) = output_dirs(root.path(), "Kitchen").unwrap();
        assert_eq!(group_dir, root.path().join("Kitchen"));
        assert_eq!(spec_dir, group_dir.join("FunctionalSpecification"));
        assert!(spec_dir.is_dir());
    }

    #[test]
    fn test_empty_group_gets_placeholder() {
        let root = TempDir::new().unwrap();
        let (group_dir, _) = output_dirs(root.path(), "").unwrap();
        assert_eq!(group_dir, root.path().join("GeneratedGroup"));
    }
}

//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// An absolute `config_name` is returned as-is when it exists.
///
/// # Example
/// ```text
/// /home/user/site/docs/guide/  ← start
/// /home/user/site/docnav.toml  ← found!
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        // Move to parent directory
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_in_parent() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("docnav.toml");
        fs::write(&config, "").unwrap();
        let nested = dir.path().join("docs").join("guide");
        fs::create_dir_all(&nested).unwrap();

        let found = find_config_file(Path::new("docnav.toml"), &nested).unwrap();
        assert_eq!(found, config);
    }

    #[test]
    fn test_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(find_config_file(Path::new("no-such-docnav.toml"), dir.path()).is_none());
    }

    #[test]
    fn test_absolute_path() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("site.json");
        fs::write(&config, "{}").unwrap();

        assert_eq!(find_config_file(&config, Path::new("/")), Some(config.clone()));
        assert!(find_config_file(&dir.path().join("missing.json"), Path::new("/")).is_none());
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

enum Child {
    Dir(PathBuf),
    File(PathBuf),
}

/// Total size in bytes of every regular file below `path`.
///
/// Every subdirectory is included, nested `node_modules` too. Directories
/// that cannot be listed and files that cannot be stat'ed count as zero, so
/// this never fails; a missing `path` is 0. Symlinks are not followed and
/// contribute nothing. Siblings are measured in parallel on the current
/// rayon pool.
pub fn size_of(path: &Path) -> u64 {
    let Ok(entries) = fs::read_dir(path) else {
        return 0;
    };

    let children: Vec<Child> = entries
        .flatten()
        .filter_map(|entry| {
            let kind = entry.file_type().ok()?;
            if kind.is_dir() {
                Some(Child::Dir(entry.path()))
            } else if kind.is_file() {
                Some(Child::File(entry.path()))
            } else {
                None
            }
        })
        .collect();

    children
        .into_par_iter()
        .map(|child| match child {
            Child::Dir(dir) => size_of(&dir),
            Child::File(file) => fs::symlink_metadata(&file).map_or(0, |meta| meta.len()),
        })
        .sum()
}

/// Format size in human-readable format
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KiB", "MiB", "GiB", "TiB"];
    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    if unit_idx == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", size, UNITS[unit_idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(60), "60 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1024), "1.0 KiB");
        assert_eq!(format_size(1536), "1.5 KiB");
        assert_eq!(format_size(250 * 1024 * 1024), "250.0 MiB");
        assert_eq!(format_size(1024 * 1024 * 1024), "1.0 GiB");
        assert_eq!(format_size(1024_u64.pow(4)), "1.0 TiB");
        assert_eq!(format_size(3 * 1024_u64.pow(5)), "3072.0 TiB");
    }

    #[test]
    fn test_size_of_missing_path_is_zero() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        assert_eq!(size_of(&temp_dir.path().join("nope")), 0);
    }

    #[test]
    fn test_size_of_file_path_is_zero() {
        // only directories are measured
        let temp_dir = tempfile::TempDir::new().unwrap();
        let file = temp_dir.path().join("package.json");
        fs::write(&file, "{}").unwrap();
        assert_eq!(size_of(&file), 0);
    }
}

//! Project Layout

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::errors::CliError;

/// Directories under `src` that are never offered for copying.
const EXCLUDED_FOLDERS: [&str; 2] = ["lib", "cli"];

/// A directory directly under the project's `src` folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ModuleFolder {
    /// Directory name
    pub name: String,

    /// Full path to the directory
    pub path: PathBuf,

    /// Whether the directory contains the entry file
    pub has_entry: bool,
}

impl ModuleFolder {
    /// Path of the entry file inside this folder.
    pub fn entry_path(&self, entry: &str) -> PathBuf {
        self.path.join(entry)
    }
}

/// Finds the nearest ancestor of `start` (including itself) that contains
/// `marker`, falling back to `start`.
pub(crate) fn find_project_root(start: &Path, marker: &str) -> PathBuf {
    start
        .ancestors()
        .find(|dir| dir.join(marker).exists())
        .unwrap_or(start)
        .to_path_buf()
}

/// Lists the module folders in `src_dir`, sorted by name.
pub(crate) fn scan_module_folders(
    src_dir: &Path,
    entry: &str,
) -> Result<Vec<ModuleFolder>, CliError> {
    let scan_error = |source| CliError::Scan {
        path: src_dir.to_path_buf(),
        source,
    };

    let mut folders = Vec::new();

    for dir_entry in fs::read_dir(src_dir).map_err(scan_error)? {
        let dir_entry = dir_entry.map_err(scan_error)?;

        if !dir_entry.file_type().map_err(scan_error)?.is_dir() {
            continue;
        }

        let name = dir_entry.file_name().to_string_lossy().into_owned();

        if EXCLUDED_FOLDERS.contains(&name.as_str()) {
            continue;
        }

        let path = dir_entry.path();
        let has_entry = path.join(entry).is_file();

        folders.push(ModuleFolder {
            name,
            path,
            has_entry,
        });
    }

    folders.sort_by(|a, b| a.name.cmp(&b.name));

    debug!(src = %src_dir.display(), folders = folders.len(), "scanned module folders");

    Ok(folders)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use testresult::TestResult;

    use super::*;

    #[test]
    fn finds_root_in_ancestor() -> TestResult {
        let dir = tempfile::tempdir()?;
        let nested = dir.path().join("src").join("adrian");
        fs::create_dir_all(&nested)?;
        fs::write(dir.path().join("package.json"), "{}")?;

        assert_eq!(find_project_root(&nested, "package.json"), dir.path());

        Ok(())
    }

    #[test]
    fn falls_back_to_start_without_marker() -> TestResult {
        let dir = tempfile::tempdir()?;

        let root = find_project_root(dir.path(), "no-such-marker.json");

        assert_eq!(root, dir.path());

        Ok(())
    }

    #[test]
    fn scans_folders_sorted_and_skips_excluded() -> TestResult {
        let dir = tempfile::tempdir()?;

        for name in ["zeta", "adrian", "lib", "cli"] {
            fs::create_dir(dir.path().join(name))?;
        }

        fs::write(dir.path().join("adrian").join("index.ts"), "export {};")?;
        fs::write(dir.path().join("index.ts"), "export {};")?;

        let folders = scan_module_folders(dir.path(), "index.ts")?;

        let names: Vec<&str> = folders.iter().map(|folder| folder.name.as_str()).collect();
        assert_eq!(names, ["adrian", "zeta"]);

        let has_entry: Vec<bool> = folders.iter().map(|folder| folder.has_entry).collect();
        assert_eq!(has_entry, [true, false]);

        Ok(())
    }

    #[test]
    fn scan_errors_on_missing_directory() -> TestResult {
        let dir = tempfile::tempdir()?;

        let result = scan_module_folders(&dir.path().join("missing"), "index.ts");

        assert!(matches!(result, Err(CliError::Scan { .. })));

        Ok(())
    }
}

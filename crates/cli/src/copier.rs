//! Module Copier

use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use jiff::Timestamp;
use tracing::info;

use crate::{errors::CliError, project::ModuleFolder};

/// Resolves the destination against the working directory unless it is absolute.
pub(crate) fn resolve_output_path(cwd: &Path, output: &str) -> PathBuf {
    let output = Path::new(output);

    if output.is_absolute() {
        return output.to_path_buf();
    }

    output
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .fold(cwd.to_path_buf(), |path, component| path.join(component))
}

/// Comment placed at the top of every copied file.
pub(crate) fn module_header(module: &str, source: &Path, generated_at: Timestamp) -> String {
    format!(
        "/**\n \
         * Comercify - Copied from {module} module\n \
         *\n \
         * This file was copied by the Comercify CLI.\n \
         * Source: {source}\n \
         *\n \
         * Generated on: {generated_at}\n \
         */\n\n",
        source = source.display(),
    )
}

/// Copies the folder's entry file to `destination`, prefixed with a header.
///
/// Missing parent directories of `destination` are created. Returns the path
/// of the copied source file.
pub(crate) fn copy_module_file(
    folder: &ModuleFolder,
    entry: &str,
    destination: &Path,
    generated_at: Timestamp,
) -> Result<PathBuf, CliError> {
    let source = folder.entry_path(entry);

    let contents = fs::read_to_string(&source).map_err(|source_error| CliError::Read {
        path: source.clone(),
        source: source_error,
    })?;

    let write_error = |source| CliError::Write {
        path: destination.to_path_buf(),
        source,
    };

    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent).map_err(write_error)?;
    }

    let mut copied = module_header(&folder.name, &source, generated_at);
    copied.push_str(&contents);

    fs::write(destination, copied).map_err(write_error)?;

    info!(
        module = %folder.name,
        source = %source.display(),
        destination = %destination.display(),
        "copied module file"
    );

    Ok(source)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn relative_output_resolves_against_cwd() {
        let cwd = Path::new("/work/shop");

        assert_eq!(
            resolve_output_path(cwd, "./src/lib/comercify.ts"),
            PathBuf::from("/work/shop/src/lib/comercify.ts")
        );
        assert_eq!(
            resolve_output_path(cwd, "lib/out.ts"),
            PathBuf::from("/work/shop/lib/out.ts")
        );
        assert_eq!(
            resolve_output_path(cwd, "../shared/out.ts"),
            PathBuf::from("/work/shop/../shared/out.ts")
        );
    }

    #[cfg(unix)]
    #[test]
    fn absolute_output_is_kept() {
        assert_eq!(
            resolve_output_path(Path::new("/work/shop"), "/tmp/out.ts"),
            PathBuf::from("/tmp/out.ts")
        );
    }

    #[test]
    fn header_names_module_source_and_time() -> TestResult {
        let generated_at = Timestamp::from_second(1_700_000_000)?;

        let header = module_header("adrian", Path::new("/p/src/adrian/index.ts"), generated_at);

        assert_eq!(
            header,
            "/**\n \
             * Comercify - Copied from adrian module\n \
             *\n \
             * This file was copied by the Comercify CLI.\n \
             * Source: /p/src/adrian/index.ts\n \
             *\n \
             * Generated on: 2023-11-14T22:13:20Z\n \
             */\n\n"
        );

        Ok(())
    }

    #[test]
    fn copies_with_header_and_creates_directories() -> TestResult {
        let dir = tempfile::tempdir()?;
        let module_dir = dir.path().join("src").join("adrian");
        fs::create_dir_all(&module_dir)?;
        fs::write(module_dir.join("index.ts"), "export const x = 1;\n")?;

        let folder = ModuleFolder {
            name: "adrian".to_string(),
            path: module_dir.clone(),
            has_entry: true,
        };
        let destination = dir.path().join("src").join("lib").join("comercify.ts");

        let source = copy_module_file(
            &folder,
            "index.ts",
            &destination,
            Timestamp::from_second(0)?,
        )?;

        let copied = fs::read_to_string(&destination)?;

        assert_eq!(source, module_dir.join("index.ts"));
        assert!(copied.starts_with("/**\n * Comercify - Copied from adrian module\n"));
        assert!(copied.contains("Generated on: 1970-01-01T00:00:00Z"));
        assert!(copied.ends_with("*/\n\nexport const x = 1;\n"));

        Ok(())
    }

    #[test]
    fn missing_entry_file_is_a_read_error() -> TestResult {
        let dir = tempfile::tempdir()?;
        let folder = ModuleFolder {
            name: "draft".to_string(),
            path: dir.path().to_path_buf(),
            has_entry: false,
        };

        let result = copy_module_file(
            &folder,
            "index.ts",
            &dir.path().join("out.ts"),
            Timestamp::now(),
        );

        assert!(matches!(result, Err(CliError::Read { .. })));

        Ok(())
    }
}

use std::{io, path::Path};

use jiff::Timestamp;
use tracing::{debug, info};

use crate::{
    config::{CopyConfig, DEFAULT_OUTPUT},
    copier::{copy_module_file, resolve_output_path},
    errors::CliError,
    project::{ModuleFolder, find_project_root, scan_module_folders},
    prompt::{Prompter, Selection, answer_or_default, parse_selection},
};

/// How a copy session ended without an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CopyOutcome {
    Copied,
    Cancelled,
    NothingToCopy,
}

pub(crate) fn run(
    config: &CopyConfig,
    cwd: &Path,
    prompter: &mut impl Prompter,
    mut out: impl io::Write,
) -> Result<CopyOutcome, CliError> {
    writeln!(out, "Comercify CLI - copy module")?;

    let root = find_project_root(cwd, &config.marker);
    let src_dir = root.join("src");

    debug!(root = %root.display(), "found project root");

    if !src_dir.is_dir() {
        return Err(CliError::MissingSrcDirectory(src_dir));
    }

    writeln!(out, "Scanning module folders...")?;

    let folders = scan_module_folders(&src_dir, &config.entry)?;

    if folders.is_empty() {
        writeln!(out, "No module folders found in {}", src_dir.display())?;
        return Ok(CopyOutcome::NothingToCopy);
    }

    let folder = match &config.module {
        Some(name) => named_folder(&folders, name, &config.entry)?,
        None => match choose_folder(&folders, &config.entry, prompter, &mut out)? {
            Some(folder) => folder,
            None => {
                writeln!(out, "Operation cancelled.")?;
                return Ok(CopyOutcome::Cancelled);
            }
        },
    };

    writeln!(out, "Selected folder: {}", folder.name)?;

    let output = match &config.output {
        Some(output) => output.clone(),
        None => {
            out.flush()?;
            let answer = prompter.ask(&format!("Enter output path (default: {DEFAULT_OUTPUT})"))?;
            answer_or_default(&answer, DEFAULT_OUTPUT)
        }
    };

    let destination = resolve_output_path(cwd, &output);

    writeln!(out, "Copying {}...", config.entry)?;

    let source = copy_module_file(folder, &config.entry, &destination, Timestamp::now())?;

    writeln!(out, "File copied successfully to: {}", destination.display())?;
    writeln!(out, "\nSummary:")?;
    writeln!(out, "   Source: {}", source.display())?;
    writeln!(out, "   Destination: {}", destination.display())?;

    Ok(CopyOutcome::Copied)
}

fn named_folder<'a>(
    folders: &'a [ModuleFolder],
    name: &str,
    entry: &str,
) -> Result<&'a ModuleFolder, CliError> {
    let folder = folders
        .iter()
        .find(|folder| folder.name == name)
        .ok_or_else(|| CliError::UnknownModule(name.to_string()))?;

    if !folder.has_entry {
        return Err(CliError::MissingEntry {
            module: folder.name.clone(),
            entry: entry.to_string(),
        });
    }

    Ok(folder)
}

/// Lists the folders and asks for one. `None` when the user backs out.
fn choose_folder<'a>(
    folders: &'a [ModuleFolder],
    entry: &str,
    prompter: &mut impl Prompter,
    out: &mut impl io::Write,
) -> Result<Option<&'a ModuleFolder>, CliError> {
    writeln!(out, "\nAvailable module folders:")?;

    for (idx, folder) in folders.iter().enumerate() {
        let status = if folder.has_entry { "has" } else { "no" };
        writeln!(out, "  {}. {} ({status} {entry})", idx + 1, folder.name)?;
    }

    out.flush()?;

    let answer = prompter.ask("Select a folder number (or press Enter to cancel)")?;

    match parse_selection(&answer, folders) {
        Selection::Selected(folder) => Ok(Some(folder)),
        Selection::Cancelled => Ok(None),
        Selection::Invalid => {
            info!(answer = %answer, "invalid folder selection");
            writeln!(out, "Invalid selection.")?;
            Ok(None)
        }
        Selection::MissingEntry(folder) => {
            writeln!(out, "Selected folder {} does not have an {entry} file.", folder.name)?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use tempfile::TempDir;
    use testresult::TestResult;

    use super::*;
    use crate::prompt::tests::ScriptedPrompter;

    fn config() -> CopyConfig {
        CopyConfig {
            marker: "package.json".to_string(),
            entry: "index.ts".to_string(),
            module: None,
            output: None,
        }
    }

    /// A project with `src/adrian/index.ts`, an empty `src/draft` and `src/lib`.
    fn project() -> Result<TempDir, io::Error> {
        let dir = tempfile::tempdir()?;
        let src = dir.path().join("src");

        fs::write(dir.path().join("package.json"), "{}")?;
        fs::create_dir_all(src.join("adrian"))?;
        fs::create_dir_all(src.join("draft"))?;
        fs::create_dir_all(src.join("lib"))?;
        fs::write(src.join("adrian").join("index.ts"), "export const eurilize = 1;\n")?;

        Ok(dir)
    }

    fn default_destination(dir: &TempDir) -> PathBuf {
        dir.path().join("src").join("lib").join("comercify.ts")
    }

    #[test]
    fn interactive_copy_uses_default_output() -> TestResult {
        let dir = project()?;
        let mut prompter = ScriptedPrompter::new(&["1", ""]);
        let mut out = Vec::new();

        let outcome = run(&config(), dir.path(), &mut prompter, &mut out)?;

        assert_eq!(outcome, CopyOutcome::Copied);

        let copied = fs::read_to_string(default_destination(&dir))?;
        assert!(copied.contains("Copied from adrian module"));
        assert!(copied.ends_with("export const eurilize = 1;\n"));

        let output = String::from_utf8(out)?;
        assert!(output.contains("1. adrian (has index.ts)"));
        assert!(output.contains("2. draft (no index.ts)"));
        assert!(!output.contains("lib ("));
        assert!(output.contains("Summary:"));
        assert_eq!(prompter.asked.len(), 2);

        Ok(())
    }

    #[test]
    fn runs_from_nested_directory() -> TestResult {
        let dir = project()?;
        let nested = dir.path().join("src").join("adrian");
        let mut prompter = ScriptedPrompter::new(&["1", "copied.ts"]);

        let outcome = run(&config(), &nested, &mut prompter, Vec::new())?;

        assert_eq!(outcome, CopyOutcome::Copied);
        assert!(nested.join("copied.ts").is_file());

        Ok(())
    }

    #[test]
    fn empty_answer_cancels() -> TestResult {
        let dir = project()?;
        let mut prompter = ScriptedPrompter::new(&[""]);
        let mut out = Vec::new();

        let outcome = run(&config(), dir.path(), &mut prompter, &mut out)?;

        assert_eq!(outcome, CopyOutcome::Cancelled);
        assert!(String::from_utf8(out)?.contains("Operation cancelled."));
        assert!(!default_destination(&dir).exists());

        Ok(())
    }

    #[test]
    fn invalid_selection_cancels() -> TestResult {
        let dir = project()?;
        let mut prompter = ScriptedPrompter::new(&["9"]);
        let mut out = Vec::new();

        let outcome = run(&config(), dir.path(), &mut prompter, &mut out)?;

        assert_eq!(outcome, CopyOutcome::Cancelled);
        assert!(String::from_utf8(out)?.contains("Invalid selection."));

        Ok(())
    }

    #[test]
    fn folder_without_entry_cancels() -> TestResult {
        let dir = project()?;
        let mut prompter = ScriptedPrompter::new(&["2"]);
        let mut out = Vec::new();

        let outcome = run(&config(), dir.path(), &mut prompter, &mut out)?;

        assert_eq!(outcome, CopyOutcome::Cancelled);
        assert!(String::from_utf8(out)?.contains("does not have an index.ts file"));

        Ok(())
    }

    #[test]
    fn module_and_output_flags_skip_prompts() -> TestResult {
        let dir = project()?;
        let destination = dir.path().join("vendor").join("helpers.ts");
        let config = CopyConfig {
            module: Some("adrian".to_string()),
            output: Some(destination.display().to_string()),
            ..config()
        };
        let mut prompter = ScriptedPrompter::default();

        let outcome = run(&config, dir.path(), &mut prompter, Vec::new())?;

        assert_eq!(outcome, CopyOutcome::Copied);
        assert!(destination.is_file());
        assert!(prompter.asked.is_empty());

        Ok(())
    }

    #[test]
    fn unknown_module_flag_is_an_error() -> TestResult {
        let dir = project()?;
        let config = CopyConfig {
            module: Some("missing".to_string()),
            ..config()
        };

        let result = run(&config, dir.path(), &mut ScriptedPrompter::default(), Vec::new());

        assert!(matches!(result, Err(CliError::UnknownModule(name)) if name == "missing"));

        Ok(())
    }

    #[test]
    fn module_flag_without_entry_is_an_error() -> TestResult {
        let dir = project()?;
        let config = CopyConfig {
            module: Some("draft".to_string()),
            ..config()
        };

        let result = run(&config, dir.path(), &mut ScriptedPrompter::default(), Vec::new());

        assert!(matches!(result, Err(CliError::MissingEntry { .. })));

        Ok(())
    }

    #[test]
    fn missing_src_directory_is_an_error() -> TestResult {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("package.json"), "{}")?;

        let result = run(&config(), dir.path(), &mut ScriptedPrompter::default(), Vec::new());

        assert!(matches!(result, Err(CliError::MissingSrcDirectory(_))));

        Ok(())
    }

    #[test]
    fn no_module_folders_is_not_an_error() -> TestResult {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("package.json"), "{}")?;
        fs::create_dir_all(dir.path().join("src").join("lib"))?;
        let mut out = Vec::new();

        let outcome = run(&config(), dir.path(), &mut ScriptedPrompter::default(), &mut out)?;

        assert_eq!(outcome, CopyOutcome::NothingToCopy);
        assert!(String::from_utf8(out)?.contains("No module folders found"));

        Ok(())
    }
}

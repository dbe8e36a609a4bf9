//! Prompts

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::{Input, theme::SimpleTheme};

use crate::{errors::CliError, project::ModuleFolder};

/// Source of answers to interactive questions.
pub(crate) trait Prompter {
    /// Asks a free-text question. Empty answers are allowed and returned as is.
    fn ask(&mut self, prompt: &str) -> Result<String, CliError>;
}

/// Asks on the terminal, or reads plain lines when stdin is piped.
#[derive(Debug, Default)]
pub(crate) struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String, CliError> {
        if !io::stdin().is_terminal() {
            return LinePrompter::new(io::stdin().lock(), io::stdout()).ask(prompt);
        }

        let answer = Input::<String>::with_theme(&SimpleTheme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;

        Ok(answer)
    }
}

/// Writes the prompt and reads one line as the answer. End of input reads as
/// an empty answer.
#[derive(Debug)]
pub(crate) struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<String, CliError> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer).map_err(CliError::Input)?;

        Ok(answer.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Outcome of answering the folder selection question.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Selection<'a> {
    /// Nothing was entered
    Cancelled,

    /// The answer is not the number of a listed folder
    Invalid,

    /// The chosen folder has no entry file
    MissingEntry(&'a ModuleFolder),

    /// A folder that can be copied
    Selected(&'a ModuleFolder),
}

/// Interprets an answer to the numbered folder list (1-based).
///
/// Like `parseInt`, only the leading digits of the answer are considered, so
/// `"2."` selects the second folder.
pub(crate) fn parse_selection<'a>(answer: &str, folders: &'a [ModuleFolder]) -> Selection<'a> {
    let answer = answer.trim();

    if answer.is_empty() {
        return Selection::Cancelled;
    }

    let digits: String = answer.chars().take_while(char::is_ascii_digit).collect();

    let folder = digits
        .parse::<usize>()
        .ok()
        .and_then(|number| number.checked_sub(1))
        .and_then(|idx| folders.get(idx));

    match folder {
        None => Selection::Invalid,
        Some(folder) if !folder.has_entry => Selection::MissingEntry(folder),
        Some(folder) => Selection::Selected(folder),
    }
}

/// Takes the default when the answer is blank.
pub(crate) fn answer_or_default(answer: &str, default: &str) -> String {
    let answer = answer.trim();

    if answer.is_empty() {
        default.to_string()
    } else {
        answer.to_string()
    }
}

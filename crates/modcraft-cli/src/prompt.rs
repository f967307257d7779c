//! Prompt collaborators for the scaffold interviews.
//!
//! A terminal gets dialoguer prompts (with the `interactive` feature); piped
//! stdin is read up front and answered line by line.

use std::io::Read as _;

use modcraft_adapters::ScriptedPrompter;
use modcraft_core::application::Prompter;

use crate::error::{CliResult, IntoCli as _};

/// Pick the prompter for this invocation.
pub fn for_stdin() -> CliResult<Box<dyn Prompter>> {
    if let Some(prompter) = terminal_prompter() {
        return Ok(prompter);
    }

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .with_cli_context(|| "reading answers from stdin")?;
    tracing::debug!(lines = input.lines().count(), "using scripted answers");
    Ok(Box::new(ScriptedPrompter::from_lines(&input)))
}

#[cfg(feature = "interactive")]
fn terminal_prompter() -> Option<Box<dyn Prompter>> {
    use std::io::IsTerminal as _;

    std::io::stdin()
        .is_terminal()
        .then(|| Box::new(interactive::DialoguerPrompter::new()) as Box<dyn Prompter>)
}

#[cfg(not(feature = "interactive"))]
fn terminal_prompter() -> Option<Box<dyn Prompter>> {
    None
}

#[cfg(feature = "interactive")]
mod interactive {
    use dialoguer::{Input, MultiSelect, theme::ColorfulTheme};

    use modcraft_core::{
        application::{ApplicationError, PromptSpec, Prompter},
        domain::YesNo,
        error::{ModcraftError, ModcraftResult},
    };

    pub struct DialoguerPrompter {
        theme: ColorfulTheme,
    }

    impl DialoguerPrompter {
        pub fn new() -> Self {
            Self {
                theme: ColorfulTheme::default(),
            }
        }
    }

    fn label(spec: &PromptSpec) -> String {
        match &spec.hint {
            Some(hint) => format!("{} ({hint})", spec.label),
            None => spec.label.clone(),
        }
    }

    fn failed(e: dialoguer::Error) -> ModcraftError {
        ApplicationError::PromptFailed {
            reason: e.to_string(),
        }
        .into()
    }

    impl Prompter for DialoguerPrompter {
        fn ask(&self, spec: &PromptSpec) -> ModcraftResult<String> {
            let answer: String = Input::with_theme(&self.theme)
                .with_prompt(label(spec))
                .allow_empty(!spec.required)
                .interact_text()
                .map_err(failed)?;
            Ok(answer.trim().to_string())
        }

        fn confirm(&self, spec: &PromptSpec) -> ModcraftResult<YesNo> {
            let answer: String = Input::with_theme(&self.theme)
                .with_prompt(label(spec))
                .interact_text()
                .map_err(failed)?;
            Ok(YesNo::parse(&answer))
        }

        fn select_many(
            &self,
            spec: &PromptSpec,
            options: &[String],
            defaults: &[usize],
        ) -> ModcraftResult<Vec<usize>> {
            let checked: Vec<bool> = (0..options.len()).map(|i| defaults.contains(&i)).collect();
            MultiSelect::with_theme(&self.theme)
                .with_prompt(label(spec))
                .items(options)
                .defaults(&checked)
                .interact()
                .map_err(failed)
        }
    }
}

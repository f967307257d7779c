//! Non-interactive prompt collaborator.

use std::collections::VecDeque;
use std::sync::Mutex;

use tracing::debug;

use modcraft_core::{
    application::{ApplicationError, ports::{PromptSpec, Prompter}},
    domain::YesNo,
    error::ModcraftResult,
};

/// Answers questions from a fixed script, in order.
///
/// Multi-select answers are comma-separated option labels or indices; an
/// empty answer takes the defaults.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<String>>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Mutex::new(answers.into_iter().map(Into::into).collect()),
        }
    }

    /// One answer per line.
    pub fn from_lines(input: &str) -> Self {
        Self::new(input.lines().map(|l| l.trim_end_matches('\r').to_string()))
    }

    pub fn remaining(&self) -> usize {
        self.answers.lock().map(|a| a.len()).unwrap_or(0)
    }

    fn next(&self, spec: &PromptSpec) -> ModcraftResult<String> {
        let mut answers = self
            .answers
            .lock()
            .map_err(|_| ApplicationError::StoreLockError)?;
        let answer = answers.pop_front().ok_or_else(|| ApplicationError::PromptFailed {
            reason: format!("no answer for \"{}\"", spec.label),
        })?;
        debug!(question = %spec.label, answer = %answer, "scripted answer");
        Ok(answer.trim().to_string())
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&self, spec: &PromptSpec) -> ModcraftResult<String> {
        self.next(spec)
    }

    fn confirm(&self, spec: &PromptSpec) -> ModcraftResult<YesNo> {
        Ok(YesNo::parse(&self.next(spec)?))
    }

    fn select_many(
        &self,
        spec: &PromptSpec,
        options: &[String],
        defaults: &[usize],
    ) -> ModcraftResult<Vec<usize>> {
        let answer = self.next(spec)?;
        if answer.is_empty() {
            return Ok(defaults.to_vec());
        }
        Ok(parse_selection(&answer, options))
    }
}

/// Map `"migration, 3"` onto option indices; unknown items are dropped.
pub fn parse_selection(answer: &str, options: &[String]) -> Vec<usize> {
    let mut picked = Vec::new();
    for item in answer.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let index = item.parse::<usize>().ok().filter(|i| *i < options.len()).or_else(|| {
            options
                .iter()
                .position(|o| o.eq_ignore_ascii_case(item))
        });
        if let Some(i) = index
            && !picked.contains(&i)
        {
            picked.push(i);
        }
    }
    picked
}

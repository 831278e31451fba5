//! # Interactive Questions
//!
//! Attribute groups gather their values by asking questions through the [`Prompter`] trait.
//! The trait is the only way core code talks to a user, which keeps the command layer free
//! of terminal assumptions: the binary plugs in a [`LinePrompter`] over stdin/stdout, tests
//! plug in a [`scripted::ScriptedPrompter`] with canned answers.
//!
//! Two kinds of questions exist:
//!
//! - Free text ([`Prompter::ask`]): any answer is accepted verbatim (trimmed).
//! - Enumerated ([`ask_choice`]): the question is suffixed with the accepted options and
//!   re-asked until one of them is given.

use crate::attributes::choices::Choice;
use crate::error::{RealtyError, Result};
use std::io::{BufRead, Write};

pub trait Prompter {
    /// Asks a free-text question and returns the trimmed answer.
    fn ask(&mut self, question: &str) -> Result<String>;

    /// How many rejected answers [`ask_choice`] tolerates. Zero means keep asking.
    fn max_attempts(&self) -> u32 {
        0
    }
}

/// Formats an enumerated question: `"Is the yard fenced? (yes, no) "`.
pub fn choice_question<C: Choice>(question: &str) -> String {
    format!("{} ({}) ", question.trim_end(), C::options().join(", "))
}

/// Asks until the answer is one of `C`'s options.
pub fn ask_choice<C: Choice>(prompter: &mut dyn Prompter, question: &str) -> Result<C> {
    let full_question = choice_question::<C>(question);
    let limit = prompter.max_attempts();
    let mut rejected = 0;

    loop {
        let answer = prompter.ask(&full_question)?;
        if let Ok(choice) = answer.parse::<C>() {
            return Ok(choice);
        }

        rejected += 1;
        tracing::debug!(
            question = question.trim_end(),
            answer = %answer,
            rejected,
            "answer not in the accepted set"
        );

        if limit > 0 && rejected >= limit {
            return Err(RealtyError::TooManyAttempts {
                question: question.trim_end().to_string(),
                attempts: rejected,
            });
        }
    }
}

/// Line-oriented prompter over any reader/writer pair.
///
/// Questions are written without a trailing newline and flushed, so the answer is typed on
/// the same line in a terminal.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
    max_attempts: u32,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            max_attempts: 0,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn set_max_attempts(&mut self, max_attempts: u32) {
        self.max_attempts = max_attempts;
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one line without its line terminator. `None` at end of input.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut buffer = String::new();
        if self.input.read_line(&mut buffer)? == 0 {
            return Ok(None);
        }
        Ok(Some(buffer.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        match self.read_line()? {
            Some(line) => Ok(line.trim().to_string()),
            None => Err(RealtyError::InputClosed),
        }
    }

    fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod scripted {
    use super::Prompter;
    use crate::error::{RealtyError, Result};
    use std::collections::VecDeque;

    /// Answers questions from a fixed script and records what was asked.
    #[derive(Debug, Default)]
    pub struct ScriptedPrompter {
        answers: VecDeque<String>,
        asked: Vec<String>,
        max_attempts: u32,
    }

    impl ScriptedPrompter {
        pub fn new<I, S>(answers: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self {
                answers: answers.into_iter().map(Into::into).collect(),
                asked: Vec::new(),
                max_attempts: 0,
            }
        }

        pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
            self.max_attempts = max_attempts;
            self
        }

        pub fn asked(&self) -> &[String] {
            &self.asked
        }

        pub fn remaining(&self) -> usize {
            self.answers.len()
        }
    }

    impl Prompter for ScriptedPrompter {
        fn ask(&mut self, question: &str) -> Result<String> {
            self.asked.push(question.to_string());
            self.answers
                .pop_front()
                .map(|answer| answer.trim().to_string())
                .ok_or(RealtyError::InputClosed)
        }

        fn max_attempts(&self) -> u32 {
            self.max_attempts
        }
    }
}

#[cfg(test)]
mod tests {
    use super::scripted::ScriptedPrompter;
    use super::*;
    use crate::attributes::choices::{Garage, YesNo};
    use std::io::Cursor;

    #[test]
    fn choice_question_lists_options() {
        assert_eq!(
            choice_question::<Garage>("Is there a garage? "),
            "Is there a garage? (attached, detached, none) "
        );
    }

    #[test]
    fn ask_choice_reasks_until_valid() {
        let mut prompter = ScriptedPrompter::new(["maybe", "", "YES"]);
        let answer: YesNo = ask_choice(&mut prompter, "Is the yard fenced?").unwrap();

        assert_eq!(answer, YesNo::Yes);
        assert_eq!(prompter.asked().len(), 3);
        assert!(prompter
            .asked()
            .iter()
            .all(|q| q == "Is the yard fenced? (yes, no) "));
    }

    #[test]
    fn ask_choice_ignores_surrounding_whitespace() {
        let mut prompter = ScriptedPrompter::new(["  detached  "]);
        let answer: Garage = ask_choice(&mut prompter, "Is there a garage?").unwrap();
        assert_eq!(answer, Garage::Detached);
    }

    #[test]
    fn ask_choice_gives_up_after_max_attempts() {
        let mut prompter = ScriptedPrompter::new(["a", "b", "c", "yes"]).with_max_attempts(2);
        let err = ask_choice::<YesNo>(&mut prompter, "Is the property furnished?").unwrap_err();

        assert!(matches!(
            err,
            RealtyError::TooManyAttempts { attempts: 2, .. }
        ));
        assert_eq!(prompter.remaining(), 2);
    }

    #[test]
    fn ask_choice_fails_when_input_runs_out() {
        let mut prompter = ScriptedPrompter::new(["nope"]);
        let err = ask_choice::<YesNo>(&mut prompter, "Is the yard fenced?").unwrap_err();
        assert!(matches!(err, RealtyError::InputClosed));
    }

    #[test]
    fn line_prompter_writes_question_and_reads_answer() {
        let mut prompter = LinePrompter::new(Cursor::new("  1200 \n"), Vec::new());
        let answer = prompter.ask("Enter the square feet: ").unwrap();

        assert_eq!(answer, "1200");
        let written = String::from_utf8(prompter.into_output()).unwrap();
        assert_eq!(written, "Enter the square feet: ");
    }

    #[test]
    fn line_prompter_reports_closed_input() {
        let mut prompter = LinePrompter::new(Cursor::new(""), Vec::new());
        let err = prompter.ask("How many stories? ").unwrap_err();
        assert!(matches!(err, RealtyError::InputClosed));
    }

    #[test]
    fn read_line_strips_crlf() {
        let mut prompter = LinePrompter::new(Cursor::new("list\r\nquit\n"), Vec::new());
        assert_eq!(prompter.read_line().unwrap().as_deref(), Some("list"));
        assert_eq!(prompter.read_line().unwrap().as_deref(), Some("quit"));
        assert_eq!(prompter.read_line().unwrap(), None);
    }

    #[test]
    fn line_prompter_carries_attempt_limit() {
        let prompter = LinePrompter::new(Cursor::new(""), Vec::new()).with_max_attempts(3);
        assert_eq!(Prompter::max_attempts(&prompter), 3);
    }
}

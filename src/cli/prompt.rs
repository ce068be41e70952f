// src/cli/prompt.rs
use crate::application::{AnswerOutcome, Respondent};
use crate::domain::QuizQuestion;
use crate::ports::TextPresenter;
use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};

/// Asks questions on a text stream and reads one line per answer.
pub struct TerminalRespondent<I: BufRead, O: Write> {
    input: I,
    output: O,
    presenter: TextPresenter,
}

impl<I: BufRead, O: Write> TerminalRespondent<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self {
            input,
            output,
            presenter: TextPresenter::new(),
        }
    }

    pub fn into_output(self) -> O {
        self.output
    }
}

impl<I: BufRead, O: Write> Respondent for TerminalRespondent<I, O> {
    fn respond(&mut self, position: usize, total: usize, question: &QuizQuestion) -> Result<String> {
        let prompt = if question.choices().is_empty() {
            "정답 > "
        } else {
            "정답 (번호) > "
        };
        writeln!(self.output, "{}", self.presenter.question(position, total, question))?;
        write!(self.output, "\n  {prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read answer")?;
        if read == 0 {
            bail!("Input closed before question {} of {}", position, total);
        }
        Ok(line.trim().to_string())
    }

    fn acknowledge(&mut self, outcome: &AnswerOutcome) {
        let _ = writeln!(self.output, "{}", self.presenter.outcome(outcome));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use std::io::Cursor;

    #[test]
    fn given_line_when_responding_then_returns_trimmed_answer() {
        let quiz = QuizQuestion::free_text("해시 함수의 출력 길이가 256비트인 SHA-2 계열은?", Category::General, "SHA-256");
        let mut respondent = TerminalRespondent::new(Cursor::new("  sha-256 \n"), Vec::new());

        let answer = respondent.respond(1, 1, &quiz).unwrap();

        assert_eq!(answer, "sha-256");
        let shown = String::from_utf8(respondent.into_output()).unwrap();
        assert!(shown.contains("문제 1/1"));
        assert!(shown.contains("정답 > "));
    }

    #[test]
    fn given_closed_input_when_responding_then_errors() {
        let quiz = QuizQuestion::free_text("Q", Category::System, "A");
        let mut respondent = TerminalRespondent::new(Cursor::new(""), Vec::new());

        assert!(respondent.respond(1, 3, &quiz).is_err());
    }
}

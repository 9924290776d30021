use std::{
    collections::VecDeque,
    io::{self, BufRead, Write},
};

/// Yes/no gate in front of a mutation.
pub trait Confirmer {
    /// Asks `question` and returns the answer.
    ///
    /// # Errors
    /// Returns an I/O error if the question cannot be asked or answered.
    fn confirm(&mut self, question: &str) -> io::Result<bool>;
}

/// Picks one value out of a list of choices.
pub trait Chooser {
    /// Asks the operator to pick one of `choices`. `None` means no choice was made.
    ///
    /// # Errors
    /// Returns an I/O error if the question cannot be asked or answered.
    fn choose(&mut self, question: &str, choices: &[String]) -> io::Result<Option<String>>;
}

/// Both prompting capabilities a command may need.
pub trait Prompt: Confirmer + Chooser {
    /// This prompt as a [`Confirmer`].
    fn confirmer(&mut self) -> &mut dyn Confirmer;

    /// This prompt as a [`Chooser`].
    fn chooser(&mut self) -> &mut dyn Chooser;
}

impl<T: Confirmer + Chooser> Prompt for T {
    fn confirmer(&mut self) -> &mut dyn Confirmer {
        self
    }

    fn chooser(&mut self) -> &mut dyn Chooser {
        self
    }
}

/// Interactive prompt over a line reader and a writer
///
/// Questions go to the writer (stderr in the binary); answers are read one
/// line at a time. End of input counts as "no".
pub struct TerminalPrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    /// Creates a prompt reading answers from `reader` and asking on `writer`.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn read_answer(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl TerminalPrompt<io::BufReader<io::Stdin>, io::Stderr> {
    /// Prompt on the process terminal.
    ///
    /// Holds no stdin lock between reads.
    pub fn stdio() -> Self {
        Self::new(io::BufReader::new(io::stdin()), io::stderr())
    }
}

impl<R: BufRead, W: Write> Confirmer for TerminalPrompt<R, W> {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        write!(self.writer, "{question} (yes/no) [no]: ")?;
        self.writer.flush()?;

        let answer = self.read_answer()?.unwrap_or_default().to_lowercase();
        Ok(matches!(answer.as_str(), "y" | "yes"))
    }
}

impl<R: BufRead, W: Write> Chooser for TerminalPrompt<R, W> {
    fn choose(&mut self, question: &str, choices: &[String]) -> io::Result<Option<String>> {
        if choices.is_empty() {
            return Ok(None);
        }

        writeln!(self.writer, "{question}")?;
        for (i, choice) in choices.iter().enumerate() {
            writeln!(self.writer, "  [{i}] {choice}")?;
        }
        write!(self.writer, "> ")?;
        self.writer.flush()?;

        let Some(answer) = self.read_answer()? else {
            return Ok(None);
        };

        // Accept either the listed index or the value itself.
        let picked = match answer.parse::<usize>() {
            Ok(index) => choices.get(index).cloned(),
            Err(_) => choices.iter().find(|choice| **choice == answer).cloned(),
        };
        Ok(picked)
    }
}

/// Answers every confirmation the same way without prompting.
///
/// Used for `--yes` and `--no-interaction`. Never makes a choice.
#[derive(Debug, Clone, Copy)]
pub struct AutoAnswer(pub bool);

impl Confirmer for AutoAnswer {
    fn confirm(&mut self, _question: &str) -> io::Result<bool> {
        Ok(self.0)
    }
}

impl Chooser for AutoAnswer {
    fn choose(&mut self, _question: &str, _choices: &[String]) -> io::Result<Option<String>> {
        Ok(None)
    }
}

/// Pre-recorded answers, consumed in order.
///
/// Every question asked is recorded. Once the queue is exhausted all further
/// confirmations are declined and no choice is made.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAnswers {
    confirmations: VecDeque<bool>,
    choices: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedAnswers {
    /// Queues `answers` for successive confirmations.
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            confirmations: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Queues a choice for the next [`Chooser::choose`] call.
    pub fn with_choice(mut self, choice: impl Into<String>) -> Self {
        self.choices.push_back(choice.into());
        self
    }

    /// Questions asked so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Confirmer for ScriptedAnswers {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        self.asked.push(question.to_string());
        Ok(self.confirmations.pop_front().unwrap_or(false))
    }
}

impl Chooser for ScriptedAnswers {
    fn choose(&mut self, question: &str, _choices: &[String]) -> io::Result<Option<String>> {
        self.asked.push(question.to_string());
        Ok(self.choices.pop_front())
    }
}

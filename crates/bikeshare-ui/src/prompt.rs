//! Line-oriented console prompts.
//!
//! [`Prompter`] is generic over its input and output so the whole interactive
//! flow can be driven from an in-memory script in tests.

use std::io::{BufRead, Write};

use bikeshare_core::models::{City, DayFilter, FilterSelection, MonthFilter};
use bikeshare_core::{BikeshareError, Result};
use tracing::debug;

pub const GREETING: &str = "Hello! Let's explore some US bikeshare data!";
pub const CITY_QUESTION: &str =
    "Please choose one of the three cities: chicago, new york city, washington:";
pub const MONTH_QUESTION: &str =
    "Please choose one of the following months: january, february, march, april, may, june, all:";
pub const DAY_QUESTION: &str =
    "Please choose one of the following day of week: monday, tuesday, wednesday, thursday, friday, all:";
pub const RETRY_NOTICE: &str = "You did not type the correct name, please try it again:";

/// Horizontal rule printed between sections.
pub fn separator() -> String {
    "-".repeat(40)
}

/// Reads answers from `input` and writes questions to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Direct access to the output stream for report rendering.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Write one line of text.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print `question` and return the trimmed, lower-cased answer.
    ///
    /// Fails with [`BikeshareError::InputClosed`] at end of input.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        writeln!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(BikeshareError::InputClosed);
        }
        Ok(line.trim().to_lowercase())
    }

    /// Repeat `question` until `parse` accepts the answer.
    pub fn ask_until<T>(&mut self, question: &str, parse: impl Fn(&str) -> Option<T>) -> Result<T> {
        loop {
            let answer = self.ask(question)?;
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }
            debug!("rejected answer \"{}\"", answer);
            self.say(RETRY_NOTICE)?;
        }
    }

    /// `true` only when the answer is `yes` in any letter case.
    ///
    /// End of input counts as "no".
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        match self.ask(question) {
            Ok(answer) => Ok(answer == "yes"),
            Err(BikeshareError::InputClosed) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

/// Ask for city, month and day, re-prompting each until it is valid.
pub fn collect_filters<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<FilterSelection> {
    prompter.say(GREETING)?;
    let city = prompter.ask_until(CITY_QUESTION, City::parse)?;
    let month = prompter.ask_until(MONTH_QUESTION, MonthFilter::parse)?;
    let day = prompter.ask_until(DAY_QUESTION, DayFilter::parse)?;
    prompter.say(&separator())?;

    let selection = FilterSelection::new(city, month, day);
    debug!("selected {}", selection);
    Ok(selection)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

// Console helpers: every line the tool prints or asks shares the same
// two-space margin, so the output reads as one indented block.

use anyhow::Result;
use dialoguer::{Confirm, Input};

const MARGIN: usize = 2;

/// Prefix a message with the output margin.
pub fn indent(message: &str) -> String {
    format!("{}{}", " ".repeat(MARGIN), message)
}

/// Print one indented line.
pub fn output(message: &str) {
    println!("{}", indent(message));
}

/// Interactive input seam. The binaries use the `dialoguer`-backed
/// [`Console`]; tests substitute a scripted implementation so nothing
/// ever blocks on stdin.
pub trait Prompt {
    /// Ask a free-form question and return the raw answer.
    fn ask(&mut self, message: &str) -> Result<String>;

    /// Ask a yes/no question.
    fn confirm(&mut self, message: &str) -> Result<bool>;
}

/// Terminal-backed prompt implementation.
pub struct Console;

impl Prompt for Console {
    fn ask(&mut self, message: &str) -> Result<String> {
        let answer: String = Input::new().with_prompt(indent(message)).interact_text()?;
        Ok(answer)
    }

    fn confirm(&mut self, message: &str) -> Result<bool> {
        Ok(Confirm::new().with_prompt(indent(message)).interact()?)
    }
}

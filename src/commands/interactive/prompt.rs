//! Thin wrappers over dialoguer prompts

use anyhow::Result;
use dialoguer::{Confirm, Input};

/// Free text; an empty answer is allowed and returned trimmed
pub fn text(prompt: &str) -> Result<String> {
    let answer: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(answer.trim().to_string())
}

/// Free text that must not be empty; asks again until it gets an answer
pub fn required(prompt: &str) -> Result<String> {
    loop {
        let answer = text(prompt)?;
        if !answer.is_empty() {
            return Ok(answer);
        }
        eprintln!("A value is required.");
    }
}

pub fn confirm(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Typing `0` at an order prompt asks to cancel the whole order
pub fn is_cancel(answer: &str) -> bool {
    answer == "0"
}

pub fn pause() -> Result<()> {
    let _ = text("Press Enter to return to the menu")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_cancels() {
        assert!(is_cancel("0"));
        assert!(!is_cancel("00"));
        assert!(!is_cancel("P0"));
    }
}

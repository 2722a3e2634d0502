mod scripted;
mod terminal;

pub use scripted::ScriptedPrompter;
pub use terminal::TerminalPrompter;

use anyhow::Result;

/// Menu shown for every 1-5 category score
pub const SCORE_OPTIONS: [&str; 5] = [
    "1 - Very Poor",
    "2 - Poor",
    "3 - Fair",
    "4 - Good",
    "5 - Excellent",
];

/// Capability interface for the interview. The collection pipeline only ever
/// talks to this trait, so it can run against a real terminal, a recorded
/// answer file, or a test script.
pub trait Prompter {
    /// Ask a free-text question. Empty input falls back to the default when
    /// one is given.
    fn ask_text(&mut self, label: &str, default: Option<&str>) -> Result<String>;

    /// Present a numbered single-choice menu. Returns the 1-based selection.
    fn ask_choice(&mut self, label: &str, options: &[&str]) -> Result<usize>;

    /// Collect free-form lines until a blank line ends the list.
    fn ask_lines(&mut self, prompt: &str) -> Result<Vec<String>>;
}

/// Ask for a 1-5 score via the standard menu.
pub fn ask_score(prompter: &mut dyn Prompter, label: &str) -> Result<u8> {
    let choice = prompter.ask_choice(label, &SCORE_OPTIONS)?;
    Ok(choice as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_score_maps_choice_to_value() {
        let mut prompter = ScriptedPrompter::new(["4"]);
        assert_eq!(ask_score(&mut prompter, "Score").unwrap(), 4);
    }
}

use anyhow::Result;
use inquire::Select;

pub struct Prompt;

impl Prompt {
    pub fn select(message: &str, options: Vec<&str>, default: usize) -> Result<usize> {
        let selection = Select::new(message, options.clone())
            .with_starting_cursor(default)
            .prompt()?;

        // Find the index of the selected option
        Ok(options.iter().position(|&x| x == selection).unwrap_or(0))
    }
}

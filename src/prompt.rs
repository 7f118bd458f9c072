//! Interactive input
//!
//! The orchestrator asks questions through the [`Prompt`] trait; the real
//! implementation uses `inquire`, tests script the answers.

use inquire::validator::Validation;
use inquire::{Confirm, Text};

use crate::domain::{validate_author_name, validate_project_name};
use crate::error::Result;

/// Questions asked while creating a project
pub trait Prompt {
    fn project_name(&self) -> Result<String>;

    fn author_name(&self) -> Result<String>;

    fn confirm_install(&self) -> Result<bool>;
}

/// Terminal prompts backed by `inquire`
#[derive(Debug, Default)]
pub struct InquirePrompt;

impl Prompt for InquirePrompt {
    fn project_name(&self) -> Result<String> {
        let name = Text::new("Enter project name:")
            .with_validator(|input: &str| {
                Ok(match validate_project_name(input.trim()) {
                    Ok(()) => Validation::Valid,
                    Err(e) => Validation::Invalid(e.to_string().into()),
                })
            })
            .prompt()?;
        Ok(name)
    }

    fn author_name(&self) -> Result<String> {
        let name = Text::new("Enter author name:")
            .with_validator(|input: &str| {
                Ok(match validate_author_name(input) {
                    Ok(()) => Validation::Valid,
                    Err(e) => Validation::Invalid(e.to_string().into()),
                })
            })
            .prompt()?;
        Ok(name)
    }

    fn confirm_install(&self) -> Result<bool> {
        let answer = Confirm::new("Do you want to install dependencies right now?")
            .with_default(true)
            .with_help_message("Runs npm install in the new project")
            .prompt()?;
        Ok(answer)
    }
}

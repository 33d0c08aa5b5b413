use inquire::{Confirm, InquireError};
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum PromptError {
    #[error("prompt was canceled")]
    #[diagnostic(
        code(sprout::prompt::canceled),
        help("Nothing was created. Run again and answer the prompt, or drop --interactive")
    )]
    Canceled,

    #[error("unable to prompt user")]
    #[diagnostic(
        code(sprout::prompt::inquire),
        help("--interactive needs a terminal on stdin")
    )]
    Inquire(#[source] InquireError),
}
impl From<InquireError> for PromptError {
    fn from(error: InquireError) -> Self {
        match error {
            InquireError::OperationCanceled | InquireError::OperationInterrupted => Self::Canceled,
            other => Self::Inquire(other),
        }
    }
}

/// Asks whether the previewed tree should be written to disk.
pub fn confirm_apply() -> Result<bool, PromptError> {
    let answer = Confirm::new("Create this tree?")
        .with_default(true)
        .with_help_message("Existing files are never overwritten")
        .prompt()?;

    Ok(answer)
}

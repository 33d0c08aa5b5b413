use crate::{
    entry::Entry,
    errors::{FileOperation, IoError},
    parser,
};
use miette::Diagnostic;
use std::{fs, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum SourceError {
    #[error("I/O error within source domain")]
    #[diagnostic(
        code(sprout::source::io),
        help("The outline must be a readable UTF-8 text file")
    )]
    Io(#[from] IoError),
}

/// The outline text a tree is grown from.
#[derive(Debug, Clone)]
pub struct Outline {
    pub path: PathBuf,
    pub text: String,
}
impl Outline {
    pub fn load(source: &str) -> Result<Self, SourceError> {
        let path = PathBuf::from(source);

        let text = fs::read_to_string(&path).map_err(IoError::on(FileOperation::Read, &path))?;

        log::debug!("read {} bytes from: {}", text.len(), path.display());

        Ok(Outline { path, text })
    }

    pub fn entries(&self) -> Vec<Entry> {
        parser::parse(&self.text)
    }
}

//! Grow a directory tree of folders and empty files from an indented text outline.
//!
//! ```text
//! src/
//!   *.py main utils
//! README.md
//! ```
//!
//! The outline is parsed into flat [`entry::Entry`] values by [`parser`], then
//! [`materializer`] works out which entries are directories, resolves every path and creates
//! the tree.

pub mod api;
pub mod config;
pub mod entry;
pub mod errors;
pub mod ignore;
pub mod materializer;
pub mod parser;
pub mod plan;
pub mod preview;
pub mod prompt;
pub mod source;
pub mod utils;

pub use api::{scaffold, Options, SproutError};

use std::path::PathBuf;

use crate::{
    config::{self, Config},
    materializer::{self, Report},
    preview::preview_as_tree,
    prompt,
    source::{self, Outline},
};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum SproutError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Source(#[from] source::SourceError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Materialize(#[from] materializer::MaterializeError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Prompt(#[from] prompt::PromptError),
}

/// How a single run should behave.
#[derive(Debug, Clone)]
pub struct Options {
    /// Directory the tree is grown under.
    pub output: PathBuf,
    /// Optional toml file with extra settings.
    pub config: Option<PathBuf>,
    /// Print the tree without touching the filesystem.
    pub dry_run: bool,
    /// Print the tree and ask before touching the filesystem.
    pub interactive: bool,
}
impl Default for Options {
    fn default() -> Self {
        Self {
            output: PathBuf::from("."),
            config: None,
            dry_run: false,
            interactive: false,
        }
    }
}

/// Grows the tree described by the outline at `input` under `options.output`.
///
/// Returns `None` when nothing was written, either because of a dry run or because the user
/// declined the interactive prompt.
///
/// # Errors
///
/// Returns a [`SproutError`] if:
///
/// - The outline or the config file cannot be read.
/// - The config file is not valid toml.
/// - A directory or file cannot be created.
/// - The interactive prompt fails or is canceled.
pub fn scaffold(input: &str, options: &Options) -> Result<Option<Report>, SproutError> {
    let outline = Outline::load(input)?;

    let config = Config::load(options.config.as_deref())?;

    let mut entries = outline.entries();

    log::debug!(
        "parsed {} entries from: {}",
        entries.len(),
        outline.path.display()
    );

    materializer::infer_directories(&mut entries);

    let plan = materializer::build_plan(&entries, &config.ignore_set());

    log::debug!(
        "planned {} directories, {} files, {} ignored",
        plan.directories().count(),
        plan.files().count(),
        plan.ignored.len()
    );

    if options.dry_run || options.interactive {
        preview_as_tree(&plan, &options.output);
    }

    if options.dry_run {
        log::debug!("dry run, nothing written");
        return Ok(None);
    }

    if options.interactive && !prompt::confirm_apply()? {
        log::debug!("user declined, nothing written");
        return Ok(None);
    }

    let report = materializer::apply_plan(&plan, &options.output)?;

    Ok(Some(report))
}

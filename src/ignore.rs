use std::collections::HashSet;

lazy_static::lazy_static! {
    /// Binary, media and archive formats that are never scaffolded as empty files.
    static ref BUILTIN_IGNORED: HashSet<&'static str> = [
        // images
        "jpg", "jpeg", "png", "gif", "bmp", "webp", "ico", "svg",
        // documents and archives
        "pdf", "zip", "tar", "gz", "rar", "7z",
        // executables and libraries
        "exe", "bin", "dll",
        // audio and video
        "mp3", "mp4", "avi", "mov", "mkv", "flac", "ogg",
    ]
    .into_iter()
    .collect();
}

/// Extensions whose files are recognised in an outline but never created.
///
/// Always contains the built-in table; configuration can only add to it.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    extra: HashSet<String>,
}
impl IgnoreSet {
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Extends the built-in table. Entries are lower-cased and may carry a leading dot.
    pub fn with_extra<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extra = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();

        Self { extra }
    }

    /// Whether a file called `name` should be skipped, judged by the text after its last `.`.
    pub fn is_ignored(&self, name: &str) -> bool {
        let Some((_, extension)) = name.rsplit_once('.') else {
            return false;
        };

        let extension = extension.to_lowercase();

        BUILTIN_IGNORED.contains(extension.as_str()) || self.extra.contains(&extension)
    }
}

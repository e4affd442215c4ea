//! Attachment discovery and classification.
//!
//! For input file `X.ext` the attachment sources live in a sibling
//! directory `X/`: fonts inside `X/attachments/`, subtitle files and an
//! optional `chapters.xml` directly inside `X/`. Both `X/` and
//! `X/attachments/` must exist; empty scans inside them are fine.

mod language;
mod mime;

pub use language::{standardize_language_code, subtitle_language};
pub use mime::mimetype_by_extension;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::scan::files_in_dir;

/// Font file patterns accepted inside the `attachments/` folder.
pub const FONT_PATTERNS: &[&str] = &["*.ttf", "*.otf", "*.eot"];

/// Subtitle file patterns accepted next to the attachments folder.
pub const SUBTITLE_PATTERNS: &[&str] = &["*.ssa", "*.ass", "*.srt"];

/// Fixed chapter file name.
pub const CHAPTER_FILE: &str = "chapters.xml";

/// Errors from classifying attachment files.
#[derive(Error, Debug)]
pub enum AttachmentError {
    /// The input file has no corresponding stem-named directory.
    #[error("the file does not have a corresponding directory `{0}`")]
    MissingDirectory(PathBuf),

    /// The stem-named directory exists but has no `attachments` subfolder.
    #[error("no `attachments` folder found in `{0}`; put your fonts in an `attachments` folder")]
    MissingAttachmentsDir(PathBuf),

    /// A font file carries an extension outside the fixed MIME table.
    #[error("no MIME type known for font extension `{0}` (expected ttf, otf or eot)")]
    UnknownFontExtension(String),

    /// The last three stem characters do not form a language identifier.
    #[error("`{0}` is not a valid language code")]
    InvalidLanguageCode(String),
}

/// A font file with its derived metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    pub path: PathBuf,
    /// File name used as the attachment name inside the container.
    pub name: String,
    pub mime: &'static str,
}

/// A subtitle file with its derived language tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subtitle {
    pub path: PathBuf,
    pub language: String,
}

/// All classified attachment files for one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttachmentSet {
    pub fonts: Vec<Font>,
    pub subtitles: Vec<Subtitle>,
    pub chapters: Vec<PathBuf>,
}

impl AttachmentSet {
    /// Collect and classify attachment files from `dir`.
    ///
    /// `dir` is the input file's stem-named directory. Fails fast when the
    /// directory or its `attachments/` subfolder is missing; finding no
    /// subtitles or chapters is a valid, supported state.
    pub fn collect(dir: &Path) -> Result<Self, AttachmentError> {
        if !dir.exists() {
            return Err(AttachmentError::MissingDirectory(dir.to_path_buf()));
        }

        let font_dir = dir.join("attachments");
        if !font_dir.exists() {
            return Err(AttachmentError::MissingAttachmentsDir(dir.to_path_buf()));
        }

        let fonts = files_in_dir(&font_dir, FONT_PATTERNS)
            .into_iter()
            .map(|path| {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                let ext = path
                    .extension()
                    .map(|e| e.to_string_lossy().to_string())
                    .unwrap_or_default();
                let mime = mimetype_by_extension(&ext)?;
                Ok(Font { path, name, mime })
            })
            .collect::<Result<Vec<_>, AttachmentError>>()?;

        let subtitles = files_in_dir(dir, SUBTITLE_PATTERNS)
            .into_iter()
            .map(|path| {
                let language = subtitle_language(&path)?;
                Ok(Subtitle { path, language })
            })
            .collect::<Result<Vec<_>, AttachmentError>>()?;

        let chapters = files_in_dir(dir, &[CHAPTER_FILE]);

        Ok(Self {
            fonts,
            subtitles,
            chapters,
        })
    }

    /// True when there is nothing to attach.
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty() && self.subtitles.is_empty() && self.chapters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn collects_full_set() {
        let dir = tempdir().unwrap();
        let movie = dir.path().join("movie");
        touch(&movie.join("attachments/font.ttf"));
        touch(&movie.join("sub.eng.srt"));
        touch(&movie.join("chapters.xml"));

        let set = AttachmentSet::collect(&movie).unwrap();
        assert_eq!(set.fonts.len(), 1);
        assert_eq!(set.fonts[0].name, "font.ttf");
        assert_eq!(set.fonts[0].mime, "application/x-truetype-font");
        assert_eq!(set.subtitles.len(), 1);
        assert_eq!(set.subtitles[0].language, "eng");
        assert_eq!(set.chapters.len(), 1);
        assert!(!set.is_empty());
    }

    #[test]
    fn empty_optional_matches_are_valid() {
        let dir = tempdir().unwrap();
        let movie = dir.path().join("movie");
        fs::create_dir_all(movie.join("attachments")).unwrap();

        let set = AttachmentSet::collect(&movie).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn missing_directory_fails_fast() {
        let dir = tempdir().unwrap();
        let err = AttachmentSet::collect(&dir.path().join("movie")).unwrap_err();
        assert!(matches!(err, AttachmentError::MissingDirectory(_)));
    }

    #[test]
    fn missing_attachments_subfolder_fails_fast() {
        let dir = tempdir().unwrap();
        let movie = dir.path().join("movie");
        fs::create_dir_all(&movie).unwrap();

        let err = AttachmentSet::collect(&movie).unwrap_err();
        assert!(matches!(err, AttachmentError::MissingAttachmentsDir(_)));
    }

    #[test]
    fn bad_subtitle_language_is_fatal() {
        let dir = tempdir().unwrap();
        let movie = dir.path().join("movie");
        fs::create_dir_all(movie.join("attachments")).unwrap();
        touch(&movie.join("sub.0-1.srt"));

        let err = AttachmentSet::collect(&movie).unwrap_err();
        assert!(matches!(err, AttachmentError::InvalidLanguageCode(_)));
    }
}

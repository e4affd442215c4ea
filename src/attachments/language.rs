//! Subtitle language tag derivation.
//!
//! Subtitle files carry their language as the last three characters of the
//! file stem (`sub.eng.srt`). The code is canonicalized through
//! `unic-langid` so casing and subtag form are normalized; anything that
//! does not parse as a language identifier is rejected.

use std::path::Path;

use unic_langid::LanguageIdentifier;

use super::AttachmentError;

/// Canonicalize a language code into its normalized tag form.
///
/// Canonicalization is idempotent: feeding a canonical tag back in
/// returns it unchanged.
pub fn standardize_language_code(code: &str) -> Result<String, AttachmentError> {
    let langid: LanguageIdentifier = code
        .parse()
        .map_err(|_| AttachmentError::InvalidLanguageCode(code.to_string()))?;
    Ok(langid.to_string())
}

/// Derive the language tag for a subtitle file from its name.
pub fn subtitle_language(path: &Path) -> Result<String, AttachmentError> {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let char_count = stem.chars().count();
    let code: String = stem.chars().skip(char_count.saturating_sub(3)).collect();

    standardize_language_code(&code)
}

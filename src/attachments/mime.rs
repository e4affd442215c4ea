//! Font MIME type lookup.
//!
//! General-purpose MIME guessing cannot resolve font mimes, so the table
//! is fixed. Anything outside it is a configuration error, never a
//! fallback type.

use super::AttachmentError;

/// Map a font file extension to its MIME type.
///
/// The extension is lower-cased and a leading dot is stripped before
/// lookup.
pub fn mimetype_by_extension(file_extension: &str) -> Result<&'static str, AttachmentError> {
    let ext = file_extension.to_lowercase();
    let ext = ext.strip_prefix('.').unwrap_or(&ext);

    match ext {
        "ttf" => Ok("application/x-truetype-font"),
        "otf" => Ok("application/vnd.ms-opentype"),
        "eot" => Ok("application/vnd.ms-fontobject"),
        _ => Err(AttachmentError::UnknownFontExtension(
            file_extension.to_string(),
        )),
    }
}

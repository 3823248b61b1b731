//! Player and club tag normalisation.

use crate::error::{Error, Result};

/// Normalise a tag: trim, drop one leading `#`, upper-case, and replace the
/// letter `O` (never valid in tags) with the digit `0`.
pub fn clean_tag(tag: &str) -> String {
    let tag = tag.trim();
    let tag = tag.strip_prefix('#').unwrap_or(tag);
    tag.to_uppercase().replace('O', "0")
}

/// Path segment for a tag, with the `#` percent-encoded.
///
/// Tags are ASCII letters and digits only. Anything else is rejected so the
/// tag cannot leave its path segment.
pub fn tag_segment(tag: &str) -> Result<String> {
    let cleaned = clean_tag(tag);
    if cleaned.is_empty() || !cleaned.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(Error::InvalidTag(tag.to_string()));
    }
    Ok(format!("%23{}", cleaned))
}

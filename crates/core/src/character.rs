//! Input rules for characters and their comments.
//!
//! The limits mirror the column bounds in the schema migrations so that
//! oversize input is rejected before it reaches the store.

use percent_encoding::percent_decode_str;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum length of a character name, in characters.
pub const MAX_NAME_LEN: usize = 140;

/// Maximum length of a comment body, in characters.
pub const MAX_COMMENT_LEN: usize = 4000;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a character name (non-blank, <= 140 chars).
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Name must not be empty".into()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Name must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a money amount. NaN and infinities cannot round-trip through
/// the store or JSON.
pub fn validate_money(money: f64) -> Result<(), CoreError> {
    if !money.is_finite() {
        return Err(CoreError::Validation("Money must be a finite number".into()));
    }
    Ok(())
}

/// Validate a comment body (non-empty, <= 4000 chars).
pub fn validate_comment_text(text: &str) -> Result<(), CoreError> {
    if text.is_empty() {
        return Err(CoreError::Validation("Comment text must not be empty".into()));
    }
    if text.chars().count() > MAX_COMMENT_LEN {
        return Err(CoreError::Validation(format!(
            "Comment text must be at most {MAX_COMMENT_LEN} characters"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Delete key decoding
// ---------------------------------------------------------------------------

/// Decode the `name` query parameter of a delete request.
///
/// Clients encode the name twice before putting it in the URL, so after the
/// query extractor has done its own pass two more rounds of percent-decoding
/// are applied. `+` is left untouched. Byte sequences that are not UTF-8
/// become U+FFFD, so such a key simply matches no stored name.
pub fn decode_name_param(raw: &str) -> String {
    let once = percent_decode_str(raw).decode_utf8_lossy();
    percent_decode_str(&once).decode_utf8_lossy().into_owned()
}

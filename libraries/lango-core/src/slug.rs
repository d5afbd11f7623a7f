//! Custom URL slugs for summaries

use crate::error::{LangoError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum slug length after normalization
pub const MIN_SLUG_LEN: usize = 2;

/// Maximum slug length after normalization
pub const MAX_SLUG_LEN: usize = 60;

static DISALLOWED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9-]").expect("valid slug charset regex"));
static DASH_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").expect("valid dash run regex"));

/// Normalize a requested slug and check its length
///
/// Lowercases, maps every character outside `[a-z0-9-]` to `-`, collapses
/// dash runs, and strips leading/trailing dashes.
///
/// # Errors
/// Returns `LangoError::InvalidInput` when the result is shorter than
/// [`MIN_SLUG_LEN`] or longer than [`MAX_SLUG_LEN`].
pub fn normalize_slug(raw: &str) -> Result<String> {
    let lowered = raw.to_lowercase();
    let replaced = DISALLOWED_RE.replace_all(&lowered, "-");
    let collapsed = DASH_RUN_RE.replace_all(&replaced, "-");
    let slug = collapsed.trim_matches('-').to_string();

    let len = slug.chars().count();
    if len < MIN_SLUG_LEN {
        return Err(LangoError::invalid_input("Slug too short (min 2 chars)"));
    }
    if len > MAX_SLUG_LEN {
        return Err(LangoError::invalid_input("Slug too long (max 60 chars)"));
    }

    Ok(slug)
}

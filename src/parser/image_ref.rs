//! Image-reference line parsing.

use super::IMAGE_MARKER;
use crate::model::ImageReference;

/// Check if a line is an image reference (starts with `![`).
pub fn is_image_line(line: &str) -> bool {
    line.starts_with(IMAGE_MARKER)
}

/// Parse an image line into alt text and link target.
///
/// The target is everything between the first `](` and the next `)`, or to
/// the end of the line when there is no closing parenthesis. Returns `None`
/// when the line is not an image line or has no `](`.
pub fn parse_image_line(line: &str) -> Option<ImageReference> {
    let rest = line.strip_prefix(IMAGE_MARKER)?;
    let (alt, after) = rest.split_once("](")?;
    let target = after.split(')').next().unwrap_or_default();
    Some(ImageReference::new(alt, target))
}

/// Remove the image-root prefix from a link target, if present.
pub fn strip_image_prefix<'a>(target: &'a str, prefix: &str) -> &'a str {
    if prefix.is_empty() {
        return target;
    }
    target.strip_prefix(prefix).unwrap_or(target)
}

pub mod url_validator;

use std::borrow::Cow;

/// Percent-decode a raw request path.
///
/// Falls back to the raw path when the decoded bytes are not valid UTF-8.
#[inline]
pub fn decode_path(raw: &str) -> Cow<'_, str> {
    urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw))
}

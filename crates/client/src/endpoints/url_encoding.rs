//! URL encoding utilities for constructing safe API paths.
//!
//! Tag ids and user names are interpolated into request paths; without
//! percent-encoding a `/` or `?` in them would change the route.

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in URL path segments.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a URL path segment.
///
/// # Examples
///
/// ```
/// use typist_client::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("simple"), "simple");
/// assert_eq!(encode_path_segment("user name"), "user%20name");
/// assert_eq!(encode_path_segment("tag/../x"), "tag%2F..%2Fx");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

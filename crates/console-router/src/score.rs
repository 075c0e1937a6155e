//! Segment match scoring
//!
//! Ranks overlapping candidates: the pattern text and the pathname are split
//! on `/` and compared position by position. Parameter segments such as
//! `:userID` never equal a concrete URL segment, so the pattern with more
//! literal segments scores higher.

use memchr::memchr_iter;

/// Count of positions where the pattern segment equals the path segment
///
/// Returns 0 when the two have a different number of segments.
///
/// # Example
/// ```
/// use console_router::segment_score;
///
/// assert_eq!(segment_score("/users/create", "/users/create"), 3);
/// assert_eq!(segment_score("/users/:userID", "/users/create"), 2);
/// assert_eq!(segment_score("/users", "/users/create"), 0);
/// ```
pub fn segment_score(pattern: &str, path: &str) -> usize {
    if slash_count(pattern) != slash_count(path) {
        return 0;
    }

    pattern
        .split('/')
        .zip(path.split('/'))
        .filter(|(p, s)| p == s)
        .count()
}

#[inline]
fn slash_count(s: &str) -> usize {
    memchr_iter(b'/', s.as_bytes()).count()
}

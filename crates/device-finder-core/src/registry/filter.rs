//! Live search matching for the sidebar.
//!
//! Matching is case-insensitive substring search on the device name. The
//! frontend highlights the matched run, so `match_span` reports byte
//! offsets into the original (unlowered) name and must stay on char
//! boundaries for non-ASCII names.

/// Whether a device name matches the search query.
///
/// An empty query matches everything.
pub fn matches(name: &str, query: &str) -> bool {
    query.is_empty() || match_span(name, query).is_some()
}

/// Byte offset and length of the first case-insensitive match of `query`
/// in `name`, or `None` if there is no match (or the query is empty).
pub fn match_span(name: &str, query: &str) -> Option<(usize, usize)> {
    if query.is_empty() {
        return None;
    }

    let query = query.to_lowercase();
    for (start, _) in name.char_indices() {
        if let Some(len) = prefix_match_len(&name[start..], &query) {
            return Some((start, len));
        }
    }
    None
}

/// Byte length of the shortest prefix of `haystack` whose lowercase form
/// starts with `query` (already lowercased). Lowercasing a single char can
/// expand to several (e.g. 'İ'), so the query is consumed unit by unit and
/// a partially-consumed char is included whole.
fn prefix_match_len(haystack: &str, query: &str) -> Option<usize> {
    let mut remaining = query.chars().peekable();

    for (idx, ch) in haystack.char_indices() {
        if remaining.peek().is_none() {
            return Some(idx);
        }

        for low in ch.to_lowercase() {
            match remaining.next() {
                Some(expected) if expected == low => {}
                Some(_) => return None,
                None => return Some(idx + ch.len_utf8()),
            }
        }
    }

    if remaining.peek().is_none() {
        Some(haystack.len())
    } else {
        None
    }
}

use alloc::vec::Vec;

/// Split `payload` into `parts` roughly equal-sized chunks without breaking
/// UTF-8 code points.
///
/// # Panics
///
/// Panics if `parts` is zero.
#[must_use]
pub fn split_into(payload: &str, parts: usize) -> Vec<&str> {
    assert!(parts > 0);
    split_every(payload, payload.len().div_ceil(parts).max(1))
}

/// Split `payload` into chunks of at most `size` bytes, extending a chunk
/// past `size` only as far as the next UTF-8 code point boundary.
///
/// # Panics
///
/// Panics if `size` is zero.
#[must_use]
pub fn split_every(payload: &str, size: usize) -> Vec<&str> {
    assert!(size > 0);
    let len = payload.len();
    let mut chunks = Vec::new();
    let mut start = 0;
    while start < len {
        let mut end = core::cmp::min(start + size, len);
        while end < len && !payload.is_char_boundary(end) {
            end += 1;
        }
        chunks.push(&payload[start..end]);
        start = end;
    }
    chunks
}

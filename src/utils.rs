//! Small shared helpers.

/// True if `needle` occurs in `hay` in order, not necessarily contiguously.
pub fn is_subsequence(needle: &[u8], hay: &[u8]) -> bool {
    let mut it = hay.iter();
    needle.iter().all(|&ch| it.any(|&h| h == ch))
}

#[cfg(test)]
mod tests {
    use super::is_subsequence;

    #[test]
    fn empty_is_subsequence_of_anything() {
        assert!(is_subsequence(b"", b""));
        assert!(is_subsequence(b"", b"ABC"));
    }

    #[test]
    fn respects_order_and_multiplicity() {
        assert!(is_subsequence(b"ACE", b"ABCDEF"));
        assert!(!is_subsequence(b"CA", b"ABC"));
        assert!(is_subsequence(b"AAB", b"AABB"));
        assert!(!is_subsequence(b"AAA", b"AAB"));
    }

    #[test]
    fn nothing_nonempty_fits_in_empty() {
        assert!(!is_subsequence(b"A", b""));
    }
}

//! Navigation index rules.
//!
//! Two policies exist: explicit navigation clamps into range, while a
//! restored (persisted) index that is out of range falls back to the first
//! question.

/// Clamp a requested index into `[0, len - 1]`.
///
/// An empty question set always yields `0`.
#[must_use]
pub fn clamp_index(requested: i64, len: usize) -> usize {
    let Some(last) = len.checked_sub(1) else {
        return 0;
    };
    match usize::try_from(requested) {
        Ok(index) => index.min(last),
        Err(_) => 0,
    }
}

/// Resolve a persisted index against the number of loaded questions.
///
/// `len` is `None` while questions are not loaded yet; only negative values
/// are rejected then.
#[must_use]
pub fn restore_index(stored: Option<i64>, len: Option<usize>) -> usize {
    let Some(index) = stored.and_then(|value| usize::try_from(value).ok()) else {
        return 0;
    };
    match len {
        Some(len) if index >= len => 0,
        _ => index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_index_in_range() {
        assert_eq!(clamp_index(-5, 5), 0);
        assert_eq!(clamp_index(9999, 5), 4);
        assert_eq!(clamp_index(2, 5), 2);
        assert_eq!(clamp_index(3, 0), 0);
    }

    #[test]
    fn restore_falls_back_to_first_question() {
        assert_eq!(restore_index(None, Some(3)), 0);
        assert_eq!(restore_index(Some(-1), Some(3)), 0);
        assert_eq!(restore_index(Some(3), Some(3)), 0);
        assert_eq!(restore_index(Some(2), Some(3)), 2);
    }

    #[test]
    fn restore_before_load_only_rejects_negatives() {
        assert_eq!(restore_index(Some(12), None), 12);
        assert_eq!(restore_index(Some(-4), None), 0);
    }
}

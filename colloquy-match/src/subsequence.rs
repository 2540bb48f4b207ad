//! Contiguous span enumeration.
//!
//! Not used by the matching engine; kept as a primitive for partial-overlap
//! matching strategies.

/// Every non-empty contiguous span of `items`, ordered by increasing start
/// index, then increasing end index. Yields n(n+1)/2 spans for length n.
pub fn ordered_contiguous_subsequences<T>(items: &[T]) -> impl Iterator<Item = &[T]> {
    (0..items.len())
        .flat_map(move |start| (start + 1..=items.len()).map(move |end| &items[start..end]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_all_six_spans_of_three_items() {
        let spans: Vec<&[i32]> = ordered_contiguous_subsequences(&[1, 2, 3]).collect();

        assert_eq!(spans.len(), 6);
        assert_eq!(
            spans,
            [
                &[1][..],
                &[1, 2][..],
                &[1, 2, 3][..],
                &[2][..],
                &[2, 3][..],
                &[3][..],
            ]
        );
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(ordered_contiguous_subsequences::<i32>(&[]).count(), 0);
    }

    #[test]
    fn span_count_is_triangular() {
        let items: Vec<usize> = (0..7).collect();
        assert_eq!(ordered_contiguous_subsequences(&items).count(), 7 * 8 / 2);
    }
}

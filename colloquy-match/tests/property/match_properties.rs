//! Property tests for the matching primitives: bounded candidate lists,
//! the max-comparison fold, subsequence enumeration, and ranker caps.

use proptest::prelude::*;

use colloquy_compare::LevenshteinComparator;
use colloquy_core::errors::ColloquyResult;
use colloquy_core::statement::Statement;
use colloquy_core::traits::IComparator;
use colloquy_match::{
    max_comparison, ordered_contiguous_subsequences, BoundedCandidateList, CandidateRanker,
};
use test_fixtures::seeded_store;

/// Scripted comparator: the candidate's text is an index into a fixed
/// score table. Lets the fold's tie-breaking be tested exactly.
struct TableComparator {
    scores: Vec<f64>,
}

impl IComparator for TableComparator {
    fn compare(&self, _target: &Statement, candidate: &Statement) -> ColloquyResult<f64> {
        let index: usize = candidate.text.parse().expect("candidate text is an index");
        Ok(self.scores[index])
    }
}

proptest! {
    #[test]
    fn subsequence_count_is_triangular(len in 0usize..12) {
        let items: Vec<usize> = (0..len).collect();
        let count = ordered_contiguous_subsequences(&items).count();
        prop_assert_eq!(count, len * (len + 1) / 2);
    }

    #[test]
    fn subsequences_are_ordered_by_start_then_end(len in 1usize..8) {
        let items: Vec<usize> = (0..len).collect();
        let spans: Vec<&[usize]> = ordered_contiguous_subsequences(&items).collect();
        let keys: Vec<(usize, usize)> = spans
            .iter()
            .map(|span| (span[0], span[0] + span.len()))
            .collect();

        let mut sorted = keys.clone();
        sorted.sort();
        prop_assert_eq!(keys, sorted);
    }

    #[test]
    fn bounded_list_never_exceeds_capacity(
        cap in 1usize..8,
        scores in proptest::collection::vec(0.0f64..100.0, 0..40),
    ) {
        let mut list = BoundedCandidateList::new(cap);
        for (i, score) in scores.iter().enumerate() {
            list.push(*score, Statement::new(i.to_string()));
        }
        prop_assert_eq!(list.len(), cap.min(scores.len()));
    }

    #[test]
    fn bounded_list_always_retains_the_maximum_score(
        cap in 1usize..8,
        scores in proptest::collection::vec(0.0f64..100.0, 1..40),
    ) {
        let mut list = BoundedCandidateList::new(cap);
        for (i, score) in scores.iter().enumerate() {
            list.push(*score, Statement::new(i.to_string()));
        }

        let max_pushed = scores.iter().cloned().fold(f64::MIN, f64::max);
        let max_retained = list
            .into_entries()
            .into_iter()
            .map(|(score, _)| score)
            .fold(f64::MIN, f64::max);
        prop_assert_eq!(max_retained, max_pushed);
    }

    #[test]
    fn max_comparison_picks_the_first_maximum(
        scores in proptest::collection::vec(0u32..100, 0..30),
    ) {
        let comparator = TableComparator {
            scores: scores.iter().map(|s| *s as f64).collect(),
        };
        let candidates: Vec<Statement> = (0..scores.len())
            .map(|i| Statement::new(i.to_string()))
            .collect();

        let result = max_comparison(&comparator, &Statement::new("target"), &candidates).unwrap();

        match scores.iter().max() {
            None => prop_assert!(result.is_none()),
            Some(max) => {
                let first_max_index = scores
                    .iter()
                    .position(|s| s == max)
                    .expect("max exists in a non-empty list");
                let (score, statement) = result.expect("non-empty candidates yield a match");
                prop_assert_eq!(score, *max as f64);
                prop_assert_eq!(statement.text, first_max_index.to_string());
            }
        }
    }

    #[test]
    fn ranker_output_respects_the_per_query_cap(
        corpus_size in 0usize..25,
        k in 1usize..6,
    ) {
        let texts: Vec<String> = (0..corpus_size)
            .map(|i| format!("statement number {i}"))
            .collect();
        let store = seeded_store(&[]);
        for text in &texts {
            test_fixtures::train_sequence(&store, &[text.as_str()]);
        }

        let comparator = LevenshteinComparator::new();
        let queries = vec![
            Statement::new("statement number 0"),
            Statement::new("something else entirely"),
        ];

        let candidates = CandidateRanker::new(k)
            .rank(&store, &comparator, &queries)
            .unwrap();

        for index in 0..queries.len() {
            let per_query = candidates
                .iter()
                .filter(|c| c.query_index == index)
                .count();
            prop_assert!(per_query <= k);
            prop_assert_eq!(per_query, k.min(corpus_size));
        }
    }
}

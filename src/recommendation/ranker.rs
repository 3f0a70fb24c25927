//! Deterministic ordering of match results.

use std::cmp::Ordering;

use crate::matching::aggregator::MatchResult;

/// Order by overall score descending, then candidate id ascending.
pub fn compare(a: &MatchResult, b: &MatchResult) -> Ordering {
    b.overall_match_score()
        .total_cmp(&a.overall_match_score())
        .then_with(|| a.candidate_id().cmp(b.candidate_id()))
}

/// Return a ranked copy of `results`; the input is left untouched.
pub fn rank(results: &[MatchResult]) -> Vec<MatchResult> {
    let mut ranked = results.to_vec();
    rank_in_place(&mut ranked);
    ranked
}

/// Rank an owned list without copying it.
pub fn rank_in_place(results: &mut [MatchResult]) {
    results.sort_by(compare);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::aggregator::MatchResultData;

    fn result(candidate_id: &str, score: f64) -> MatchResult {
        MatchResult::try_from(MatchResultData {
            job_id: "job-1".into(),
            candidate_id: candidate_id.into(),
            overall_match_score: score,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_rank_by_score_descending() {
        let results = vec![result("a", 0.2), result("b", 0.9), result("c", 0.5)];
        let ranked = rank(&results);
        let ids: Vec<&str> = ranked.iter().map(|r| r.candidate_id()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_rank_breaks_ties_by_candidate_id() {
        let results = vec![result("b", 0.5), result("a", 0.5)];
        let ranked = rank(&results);
        assert_eq!(ranked[0].candidate_id(), "a");
        assert_eq!(ranked[1].candidate_id(), "b");
        // Input is not reordered.
        assert_eq!(results[0].candidate_id(), "b");
    }

    #[test]
    fn test_negative_zero_ties_with_zero() {
        let results: Vec<MatchResult> = serde_json::from_str(
            r#"[
                {"job_id": "job-1", "candidate_id": "b", "overall_match_score": 0.0},
                {"job_id": "job-1", "candidate_id": "a", "overall_match_score": -0.0}
            ]"#,
        )
        .unwrap();
        assert!(results[1].overall_match_score().is_sign_positive());

        let ranked = rank(&results);
        let ids: Vec<&str> = ranked.iter().map(|r| r.candidate_id()).collect();
        assert_eq!(ids, vec!["a", "b"]);

        let built = vec![result("d", -0.0), result("c", 0.0)];
        let ranked = rank(&built);
        assert_eq!(ranked[0].candidate_id(), "c");
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(&[]).is_empty());
    }
}

//! Chunk planning for the batched query executor.
//!
//! The replica bounds both the parameters one statement may bind and the
//! statements one batch call may carry. Both bounds arrive as configuration;
//! the planners here are pure so the arithmetic is testable without a
//! database.

use models_minerals::StrLocation;

/// A location occupies one bind slot per STR component in a tuple-IN query.
pub(crate) const BINDS_PER_LOCATION: usize = 4;

/// Splits `locations` so every chunk fits one statement's parameter budget.
pub(crate) fn location_chunks(
    locations: &[StrLocation],
    max_bind_params: usize,
) -> impl Iterator<Item = &[StrLocation]> {
    let capacity = (max_bind_params / BINDS_PER_LOCATION).max(1);
    locations.chunks(capacity)
}

/// How many statements may be in flight at once without exceeding either the
/// configured concurrency or the batch-statement limit.
pub(crate) fn effective_concurrency(concurrency: usize, max_batch_statements: usize) -> usize {
    concurrency.min(max_batch_statements).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locations(count: usize) -> Vec<StrLocation> {
        (0..count)
            .map(|i| StrLocation::new((i % 36) as i32 + 1, "9N", "5W", "IM").unwrap())
            .collect()
    }

    #[test]
    fn chunks_never_exceed_the_parameter_budget() {
        let locations = locations(1_000);
        for max_bind_params in [4, 7, 100, 999] {
            for chunk in location_chunks(&locations, max_bind_params) {
                assert!(
                    chunk.len() * BINDS_PER_LOCATION <= max_bind_params.max(BINDS_PER_LOCATION),
                    "chunk of {} locations exceeds {} params",
                    chunk.len(),
                    max_bind_params
                );
            }
        }
    }

    #[test]
    fn an_oversized_portfolio_produces_multiple_chunks() {
        let locations = locations(60);
        // 100 params / 4 per location = 25 locations per chunk.
        let chunks: Vec<_> = location_chunks(&locations, 100).collect();
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].len(), 25);
        assert_eq!(chunks[2].len(), 10);
    }

    #[test]
    fn a_degenerate_parameter_budget_still_makes_progress() {
        let locations = locations(3);
        let chunks: Vec<_> = location_chunks(&locations, 1).collect();
        assert_eq!(chunks.len(), 3);
    }

    #[test]
    fn concurrency_is_bounded_by_the_batch_statement_limit() {
        assert_eq!(effective_concurrency(8, 10), 8);
        assert_eq!(effective_concurrency(16, 10), 10);
        assert_eq!(effective_concurrency(0, 10), 1);
    }
}

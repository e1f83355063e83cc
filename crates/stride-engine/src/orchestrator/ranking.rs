//! Result ordering.

use std::cmp::Ordering;

use stride_core::types::SimulationResult;

/// Best first: success probability descending, then expected skill gain
/// descending, then project id ascending. Total over finite and non-finite
/// values alike.
pub fn compare_results(a: &SimulationResult, b: &SimulationResult) -> Ordering {
    b.success_probability()
        .total_cmp(&a.success_probability())
        .then_with(|| {
            b.metrics()
                .expected_skill_gain
                .total_cmp(&a.metrics().expected_skill_gain)
        })
        .then_with(|| a.project_id().cmp(&b.project_id()))
}

/// Sort `results` in place so the order never depends on completion order.
pub fn rank_results(results: &mut [SimulationResult]) {
    results.sort_by(compare_results);
}

use crate::problem::{
    distance_matrix::{DistanceMatrix, Stop},
    location::JobIdx,
};

const IMPROVEMENT_EPSILON: f64 = 1e-9;
const MAX_ITERATIONS: usize = 1_000;

/// **Intra-Route 2-Opt**
///
/// Reverses the sequence of jobs between `from` and `to` (inclusive).
/// This eliminates crossing edges within a single route.
///
/// ```text
/// BEFORE:
///    ... (prev) --x--> [from] -> ... -> [to] --x--> (next) ...
///          ^             ^               ^            ^
///          A             B               C            D
///
/// AFTER (Sequence Reversed):
///    ... (prev) -----> [to] -> ... -> [from] -----> (next) ...
///          ^             ^               ^            ^
///          A             C               B            D
///
/// Edges Removed: (prev->from), (to->next)
/// Edges Added:   (prev->to),   (from->next)
/// ```
///
/// The delta assumes symmetric distances, which great-circle distances are.
#[derive(Debug)]
pub struct TwoOptOperator {
    params: TwoOptParams,
}

#[derive(Debug)]
pub struct TwoOptParams {
    pub from: usize,
    pub to: usize,
}

impl TwoOptOperator {
    pub fn new(params: TwoOptParams) -> Self {
        debug_assert!(params.from < params.to, "TwoOpt: cannot have from >= to");

        TwoOptOperator { params }
    }

    pub fn distance_delta(&self, matrix: &DistanceMatrix, route: &[JobIdx]) -> f64 {
        let TwoOptParams { from, to } = self.params;

        let a = match from {
            0 => Stop::Depot,
            _ => Stop::Job(route[from - 1]),
        };
        let b = Stop::Job(route[from]);
        let c = Stop::Job(route[to]);
        let d = route.get(to + 1).map_or(Stop::Depot, |&next| Stop::Job(next));

        matrix.distance(a, c) + matrix.distance(b, d)
            - matrix.distance(a, b)
            - matrix.distance(c, d)
    }

    pub fn apply(&self, route: &mut [JobIdx]) {
        route[self.params.from..=self.params.to].reverse();
    }
}

/// Applies the best improving reversal until none shortens the route.
/// Returns the number of reversals applied.
pub fn intensify_route(matrix: &DistanceMatrix, route: &mut [JobIdx]) -> usize {
    for iteration in 0..MAX_ITERATIONS {
        let mut best: Option<(TwoOptOperator, f64)> = None;

        for from in 0..route.len() {
            for to in (from + 1)..route.len() {
                let operator = TwoOptOperator::new(TwoOptParams { from, to });
                let delta = operator.distance_delta(matrix, route);

                if delta < -IMPROVEMENT_EPSILON
                    && best.as_ref().is_none_or(|(_, best_delta)| delta < *best_delta)
                {
                    best = Some((operator, delta));
                }
            }
        }

        match best {
            Some((operator, _)) => operator.apply(route),
            None => return iteration,
        }
    }

    MAX_ITERATIONS
}

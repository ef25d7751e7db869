use tracing::debug;

use crate::problem::{
    distance_matrix::{DistanceMatrix, Stop},
    location::JobIdx,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Insertion {
    pub route: usize,
    pub job: JobIdx,
    pub position: usize,

    /// Marginal distance in kilometers
    pub cost: f64,
}

/// Extra distance of inserting `job` before `route[position]`.
pub fn insertion_cost(
    matrix: &DistanceMatrix,
    route: &[JobIdx],
    job: JobIdx,
    position: usize,
) -> f64 {
    let previous = match position {
        0 => Stop::Depot,
        _ => Stop::Job(route[position - 1]),
    };
    let next = route.get(position).map_or(Stop::Depot, |&next| Stop::Job(next));

    matrix.distance(previous, Stop::Job(job)) + matrix.distance(Stop::Job(job), next)
        - matrix.distance(previous, next)
}

/// Cheapest insertion construction.
///
/// Repeatedly inserts the unassigned job whose best position is the cheapest
/// over all routes. Candidates are scanned by route, then job, then position,
/// and only a strictly cheaper candidate replaces the current best, so ties go
/// to the lowest truck, then the lowest job index, then the earliest position.
#[derive(Default)]
pub struct BestInsertion;

impl BestInsertion {
    pub fn best_insertion(
        matrix: &DistanceMatrix,
        routes: &[Vec<JobIdx>],
        unassigned: &[JobIdx],
    ) -> Option<Insertion> {
        let mut best_insertion: Option<Insertion> = None;

        for (route_index, route) in routes.iter().enumerate() {
            for &job in unassigned {
                for position in 0..=route.len() {
                    let cost = insertion_cost(matrix, route, job, position);

                    if best_insertion.is_none_or(|best| cost < best.cost) {
                        best_insertion = Some(Insertion {
                            route: route_index,
                            job,
                            position,
                            cost,
                        });
                    }
                }
            }
        }

        best_insertion
    }

    /// Inserts jobs until none is left. Returns the jobs that could not be
    /// placed, which only happens when there is no route at all.
    pub fn insert_jobs(
        matrix: &DistanceMatrix,
        routes: &mut [Vec<JobIdx>],
        mut unassigned: Vec<JobIdx>,
    ) -> Vec<JobIdx> {
        while !unassigned.is_empty() {
            let Some(insertion) = Self::best_insertion(matrix, routes, &unassigned) else {
                break;
            };

            debug!(
                "Insert job {} in route {} at {} (+{:.3} km)",
                insertion.job, insertion.route, insertion.position, insertion.cost
            );

            routes[insertion.route].insert(insertion.position, insertion.job);
            unassigned.retain(|&job| job != insertion.job);
        }

        unassigned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jobs(indices: &[usize]) -> Vec<JobIdx> {
        indices.iter().copied().map(JobIdx::new).collect()
    }

    fn line_matrix() -> DistanceMatrix {
        // depot at 0, jobs at 1, 2, 3 and 10 on a line
        let positions = [0.0_f64, 1.0, 2.0, 3.0, 10.0];
        DistanceMatrix::from_rows(
            positions
                .iter()
                .map(|from| positions.iter().map(|to| (from - to).abs()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_insertion_cost() {
        let matrix = line_matrix();
        let route = jobs(&[0, 2]);

        assert_eq!(insertion_cost(&matrix, &route, JobIdx::new(1), 1), 0.0);
        assert_eq!(insertion_cost(&matrix, &route, JobIdx::new(1), 0), 2.0);
        assert_eq!(insertion_cost(&matrix, &[], JobIdx::new(3), 0), 20.0);
    }

    #[test]
    fn test_insert_jobs_in_order() {
        let matrix = line_matrix();
        let mut routes = vec![jobs(&[3])];

        let unassigned = BestInsertion::insert_jobs(&matrix, &mut routes, jobs(&[2, 0, 1]));

        assert!(unassigned.is_empty());
        assert_eq!(routes, vec![jobs(&[0, 1, 2, 3])]);
    }

    #[test]
    fn test_ties_go_to_lowest_route() {
        let matrix = line_matrix();
        let routes = vec![jobs(&[1]), jobs(&[1])];

        let insertion = BestInsertion::best_insertion(&matrix, &routes, &jobs(&[0])).unwrap();

        assert_eq!(insertion.route, 0);
        assert_eq!(insertion.position, 0);
    }

    #[test]
    fn test_no_route_leaves_jobs_unassigned() {
        let matrix = line_matrix();

        let unassigned = BestInsertion::insert_jobs(&matrix, &mut [], jobs(&[0, 1]));

        assert_eq!(unassigned, jobs(&[0, 1]));
    }
}

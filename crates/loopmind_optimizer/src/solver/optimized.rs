use tracing::{debug, instrument, warn};

use crate::{
    problem::{distance_matrix::DistanceMatrix, location::Location},
    solver::{
        best_insertion::BestInsertion,
        construction::create_initial_routes,
        naive::build_naive,
        route_assignment::{RouteAssignment, is_complete},
        two_opt::intensify_route,
    },
};

/// Distance-reducing plan over great-circle distances.
///
/// Seeds one route per truck, fills them by cheapest insertion and removes
/// crossings with 2-opt. The naive split is returned instead whenever it is
/// estimated shorter. Deterministic: the same jobs in the same order always
/// give the same assignment.
#[instrument(skip_all, level = "debug", fields(jobs = jobs.len(), trucks = truck_count))]
pub fn build_optimized(
    depot: &Location,
    jobs: &[Location],
    truck_count: usize,
) -> Vec<RouteAssignment> {
    let matrix = DistanceMatrix::from_haversine(depot, jobs);
    build_optimized_with_matrix(&matrix, truck_count)
}

pub fn build_optimized_with_matrix(
    matrix: &DistanceMatrix,
    truck_count: usize,
) -> Vec<RouteAssignment> {
    let job_count = matrix.num_jobs();
    let naive = build_naive(job_count, truck_count);

    let (mut routes, unassigned) = create_initial_routes(matrix, truck_count);
    let unassigned = BestInsertion::insert_jobs(matrix, &mut routes, unassigned);

    if !unassigned.is_empty() {
        warn!(
            "{} jobs could not be inserted, keeping the naive plan",
            unassigned.len()
        );
        return naive;
    }

    for route in routes.iter_mut() {
        intensify_route(matrix, route);
    }

    let optimized = routes
        .into_iter()
        .enumerate()
        .filter(|(_, route)| !route.is_empty())
        .map(|(index, route)| RouteAssignment::new(index + 1, route))
        .collect::<Vec<_>>();

    if !is_complete(&optimized, job_count) {
        warn!("Optimized plan is incomplete, keeping the naive plan");
        return naive;
    }

    let optimized_distance = matrix.total_distance(&optimized);
    let naive_distance = matrix.total_distance(&naive);

    if optimized_distance > naive_distance {
        debug!(
            "Naive plan is shorter ({:.3} km < {:.3} km), keeping it",
            naive_distance, optimized_distance
        );
        return naive;
    }

    debug!(
        "Optimized plan: {:.3} km (naive {:.3} km)",
        optimized_distance, naive_distance
    );

    optimized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{problem::location::JobIdx, test_utils};

    fn job_indices(routes: &[RouteAssignment]) -> Vec<(usize, Vec<usize>)> {
        routes
            .iter()
            .map(|route| {
                (
                    route.truck_id,
                    route.job_indices.iter().map(JobIdx::get).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_groups_clusters() {
        let (depot, jobs) = test_utils::cluster_scenario();

        let routes = build_optimized(&depot, &jobs, 2);

        assert_eq!(
            job_indices(&routes),
            vec![(1, vec![0, 1]), (2, vec![2, 3])]
        );
    }

    #[test]
    fn test_groups_clusters_from_shuffled_input() {
        let depot = test_utils::depot(0.0, 0.0);
        let jobs = test_utils::create_jobs(&[(0.0, 1.0), (1.0, 0.0), (0.0, 2.0), (2.0, 0.0)]);
        let matrix = DistanceMatrix::from_haversine(&depot, &jobs);

        let optimized = build_optimized(&depot, &jobs, 2);
        let naive = build_naive(jobs.len(), 2);

        let mut groups = optimized
            .iter()
            .map(|route| {
                let mut jobs = route.job_indices.iter().map(JobIdx::get).collect::<Vec<_>>();
                jobs.sort_unstable();
                jobs
            })
            .collect::<Vec<_>>();
        groups.sort();

        assert_eq!(groups, vec![vec![0, 2], vec![1, 3]]);
        assert!(matrix.total_distance(&optimized) < matrix.total_distance(&naive));
    }

    #[test]
    fn test_single_job() {
        let depot = test_utils::depot(50.85, 4.35);
        let jobs = test_utils::create_jobs(&[(50.9, 4.4)]);

        assert_eq!(build_optimized(&depot, &jobs, 1), build_naive(1, 1));
    }

    #[test]
    fn test_fewer_jobs_than_trucks() {
        let depot = test_utils::depot(0.0, 0.0);
        let jobs = test_utils::create_jobs(&[(0.0, 1.0), (1.0, 0.0)]);

        let routes = build_optimized(&depot, &jobs, 5);

        assert_eq!(routes.len(), 2);
        assert!(routes.iter().all(|route| route.len() == 1));
        assert!(is_complete(&routes, 2));
    }

    #[test]
    fn test_completeness() {
        let depot = test_utils::depot(50.85, 4.35);

        for job_count in 1..30 {
            let jobs = test_utils::scattered_jobs(job_count);
            for truck_count in 1..8 {
                let routes = build_optimized(&depot, &jobs, truck_count);

                assert!(is_complete(&routes, job_count));
                assert!(routes.len() <= truck_count);
                assert!(routes.iter().all(|route| !route.is_empty()));
                assert!(
                    routes
                        .iter()
                        .all(|route| (1..=truck_count).contains(&route.truck_id))
                );
            }
        }
    }

    #[test]
    fn test_determinism() {
        let depot = test_utils::depot(50.85, 4.35);
        let jobs = test_utils::scattered_jobs(40);

        let first = build_optimized(&depot, &jobs, 4);
        let second = build_optimized(&depot, &jobs, 4);

        assert_eq!(first, second);
    }

    #[test]
    fn test_never_estimated_worse_than_naive() {
        let depot = test_utils::depot(50.85, 4.35);

        for job_count in [3, 8, 15, 25] {
            let jobs = test_utils::scattered_jobs(job_count);
            let matrix = DistanceMatrix::from_haversine(&depot, &jobs);

            for truck_count in 1..5 {
                let optimized = build_optimized_with_matrix(&matrix, truck_count);
                let naive = build_naive(job_count, truck_count);

                assert!(matrix.total_distance(&optimized) <= matrix.total_distance(&naive));
            }
        }
    }
}

use tracing::{Level, debug, instrument};

use crate::problem::{
    distance_matrix::{DistanceMatrix, Stop},
    location::JobIdx,
};

/// Opens `min(truck_count, job_count)` routes, each seeded with a single job.
///
/// The first seed is the job farthest from the depot; every next seed is the
/// job whose closest already chosen seed is the farthest away. Ties go to the
/// lowest job index. Seed `i` is given to route `i`.
///
/// Returns the seeded routes and the remaining jobs in ascending order.
#[instrument(skip_all, level = Level::DEBUG)]
pub fn create_initial_routes(
    matrix: &DistanceMatrix,
    truck_count: usize,
) -> (Vec<Vec<JobIdx>>, Vec<JobIdx>) {
    let job_count = matrix.num_jobs();
    let route_count = truck_count.min(job_count);

    let mut unassigned = (0..job_count).map(JobIdx::new).collect::<Vec<_>>();
    let mut seeds: Vec<JobIdx> = Vec::with_capacity(route_count);

    while seeds.len() < route_count {
        let next_seed = unassigned
            .iter()
            .copied()
            .fold(None, |best: Option<(JobIdx, f64)>, job| {
                let spread = if seeds.is_empty() {
                    matrix.distance(Stop::Depot, Stop::Job(job))
                } else {
                    seeds
                        .iter()
                        .map(|&seed| matrix.distance(Stop::Job(seed), Stop::Job(job)))
                        .fold(f64::INFINITY, f64::min)
                };

                match best {
                    Some((_, best_spread)) if spread <= best_spread => best,
                    _ => Some((job, spread)),
                }
            });

        let Some((seed, _)) = next_seed else {
            break;
        };

        seeds.push(seed);
        unassigned.retain(|&job| job != seed);
    }

    debug!("Seeded {} routes: {:?}", seeds.len(), seeds);

    (seeds.into_iter().map(|seed| vec![seed]).collect(), unassigned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;

    #[test]
    fn test_seeds_are_spread_out() {
        let depot = test_utils::depot(0.0, 0.0);
        let jobs = test_utils::create_jobs(&[(0.0, 1.0), (0.0, 2.0), (1.0, 0.0), (2.0, 0.0)]);
        let matrix = DistanceMatrix::from_haversine(&depot, &jobs);

        let (routes, unassigned) = create_initial_routes(&matrix, 2);

        assert_eq!(routes, vec![vec![JobIdx::new(1)], vec![JobIdx::new(3)]]);
        assert_eq!(unassigned, vec![JobIdx::new(0), JobIdx::new(2)]);
    }

    #[test]
    fn test_no_more_routes_than_jobs() {
        let depot = test_utils::depot(0.0, 0.0);
        let jobs = test_utils::create_jobs(&[(0.0, 1.0), (1.0, 0.0)]);
        let matrix = DistanceMatrix::from_haversine(&depot, &jobs);

        let (routes, unassigned) = create_initial_routes(&matrix, 5);

        assert_eq!(routes.len(), 2);
        assert!(unassigned.is_empty());
    }

    #[test]
    fn test_ties_go_to_lowest_index() {
        let matrix = DistanceMatrix::from_rows(vec![
            vec![0.0, 3.0, 3.0, 1.0],
            vec![3.0, 0.0, 2.0, 2.0],
            vec![3.0, 2.0, 0.0, 2.0],
            vec![1.0, 2.0, 2.0, 0.0],
        ]);

        let (routes, _) = create_initial_routes(&matrix, 2);

        assert_eq!(routes, vec![vec![JobIdx::new(0)], vec![JobIdx::new(1)]]);
    }
}

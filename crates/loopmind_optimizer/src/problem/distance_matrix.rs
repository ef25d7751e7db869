use loopmind_routing::as_the_crow_flies::haversine_distance;

use crate::{
    problem::location::{JobIdx, Location},
    solver::route_assignment::RouteAssignment,
};

/// A node of a route: the depot or one of the jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stop {
    Depot,
    Job(JobIdx),
}

/// Great-circle distances in kilometers between the depot and every job.
///
/// Flat storage, the depot is node `0` and job `i` is node `i + 1`:
/// `index = from * num_nodes + to`.
pub struct DistanceMatrix {
    distances: Vec<f64>,
    num_nodes: usize,
}

impl DistanceMatrix {
    pub fn from_haversine(depot: &Location, jobs: &[Location]) -> Self {
        let nodes = std::iter::once(depot).chain(jobs.iter()).collect::<Vec<_>>();
        let num_nodes = nodes.len();
        let mut distances = vec![0.0; num_nodes * num_nodes];

        for (i, &from) in nodes.iter().enumerate() {
            for (j, &to) in nodes.iter().enumerate() {
                if i != j {
                    distances[i * num_nodes + j] = haversine_distance(from, to);
                }
            }
        }

        DistanceMatrix {
            distances,
            num_nodes,
        }
    }

    /// Builds a matrix from precomputed rows, node `0` being the depot.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let num_nodes = rows.len();
        DistanceMatrix {
            distances: rows.into_iter().flatten().collect(),
            num_nodes,
        }
    }

    #[inline(always)]
    fn node(stop: Stop) -> usize {
        match stop {
            Stop::Depot => 0,
            Stop::Job(job) => job.get() + 1,
        }
    }

    #[inline(always)]
    pub fn distance(&self, from: Stop, to: Stop) -> f64 {
        self.distances[Self::node(from) * self.num_nodes + Self::node(to)]
    }

    pub fn num_jobs(&self) -> usize {
        self.num_nodes.saturating_sub(1)
    }

    /// Depot, `jobs` in order, depot.
    pub fn route_distance(&self, jobs: &[JobIdx]) -> f64 {
        if jobs.is_empty() {
            return 0.0;
        }

        let mut distance = 0.0;
        let mut previous = Stop::Depot;
        for &job in jobs {
            distance += self.distance(previous, Stop::Job(job));
            previous = Stop::Job(job);
        }

        distance + self.distance(previous, Stop::Depot)
    }

    pub fn total_distance(&self, routes: &[RouteAssignment]) -> f64 {
        routes
            .iter()
            .map(|route| self.route_distance(&route.job_indices))
            .fold(0.0, |total, distance| total + distance)
    }
}

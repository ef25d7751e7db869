use serde::Serialize;

use crate::problem::location::JobIdx;

/// Jobs given to one truck, in visiting order. Depot stops are implicit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteAssignment {
    /// 1-based
    pub truck_id: usize,
    pub job_indices: Vec<JobIdx>,
}

impl RouteAssignment {
    pub fn new(truck_id: usize, job_indices: Vec<JobIdx>) -> Self {
        RouteAssignment {
            truck_id,
            job_indices,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.job_indices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.job_indices.len()
    }
}

/// Every job in `0..job_count` appears exactly once across `routes`.
pub fn is_complete(routes: &[RouteAssignment], job_count: usize) -> bool {
    let mut seen = vec![false; job_count];

    for job in routes.iter().flat_map(|route| route.job_indices.iter()) {
        match seen.get_mut(job.get()) {
            Some(seen) if !*seen => *seen = true,
            _ => return false,
        }
    }

    seen.into_iter().all(|seen| seen)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(truck_id: usize, jobs: &[usize]) -> RouteAssignment {
        RouteAssignment::new(truck_id, jobs.iter().copied().map(JobIdx::new).collect())
    }

    #[test]
    fn test_is_complete() {
        assert!(is_complete(&[route(1, &[0, 2]), route(2, &[1])], 3));
        assert!(is_complete(&[], 0));
    }

    #[test]
    fn test_is_complete_detects_missing_and_duplicates() {
        assert!(!is_complete(&[route(1, &[0]), route(2, &[1])], 3));
        assert!(!is_complete(&[route(1, &[0, 1]), route(2, &[1])], 2));
        assert!(!is_complete(&[route(1, &[0, 5])], 2));
    }

    #[test]
    fn test_serialize() {
        assert_eq!(
            serde_json::to_string(&route(2, &[3, 1])).unwrap(),
            r#"{"truckId":2,"jobIndices":[3,1]}"#
        );
    }
}

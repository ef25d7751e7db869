use crate::{problem::location::JobIdx, solver::route_assignment::RouteAssignment};

/// Baseline plan: jobs split in input order into `truck_count` contiguous
/// chunks whose sizes differ by at most one, the first trucks taking the
/// extra jobs.
///
/// Trucks left without a job are omitted, so fewer routes than trucks come
/// back when there are fewer jobs than trucks.
pub fn build_naive(job_count: usize, truck_count: usize) -> Vec<RouteAssignment> {
    if truck_count == 0 {
        return Vec::new();
    }

    let base_size = job_count / truck_count;
    let extra_jobs = job_count % truck_count;
    let mut next_job = 0;

    (0..truck_count.min(job_count))
        .filter_map(|truck| {
            let size = base_size + usize::from(truck < extra_jobs);
            let job_indices = (next_job..next_job + size)
                .map(JobIdx::new)
                .collect::<Vec<_>>();
            next_job += size;

            (size > 0).then(|| RouteAssignment::new(truck + 1, job_indices))
        })
        .collect()
}

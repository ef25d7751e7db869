use thiserror::Error;

/// Input rejected before any routing request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptimizeError {
    #[error("No depot defined")]
    MissingDepot,

    #[error("Only one depot is allowed, found {0}")]
    MultipleDepots(usize),

    #[error("At least one job is required")]
    NoJobs,

    #[error("At least two locations are required, got {0}")]
    NotEnoughLocations(usize),

    #[error("At least one truck is required")]
    NoTrucks,

    #[error("Location {0} is a depot but was given as a job")]
    UnexpectedDepot(String),

    #[error("Location id {0} is used more than once")]
    DuplicateLocationId(String),

    #[error("Location {0} has coordinates out of range")]
    InvalidCoordinate(String),
}

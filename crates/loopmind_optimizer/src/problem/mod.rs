pub mod distance_matrix;
pub mod location;

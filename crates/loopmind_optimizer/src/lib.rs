pub mod error;
pub mod json;
pub mod optimizer;
pub mod params;
pub mod plan;
pub mod problem;
pub mod solver;
mod utils;

#[cfg(test)]
pub(crate) mod test_utils;

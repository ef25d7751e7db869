pub mod best_insertion;
pub mod construction;
pub mod naive;
pub mod optimized;
pub mod route_assignment;
pub mod two_opt;

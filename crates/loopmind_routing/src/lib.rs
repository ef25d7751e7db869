pub mod as_the_crow_flies;
pub mod coordinate;
pub mod kmh;
pub mod leg_stats;
pub mod osrm_client;
pub mod route_provider;
pub mod route_resolver;
pub mod routing_error;

#[cfg(test)]
pub(crate) mod test_utils;

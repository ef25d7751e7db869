use loopmind_optimizer::optimizer::Optimizer;
use loopmind_routing::osrm_client::OsrmRouteClient;

pub struct AppState {
    pub optimizer: Optimizer<OsrmRouteClient>,
}

use std::{fs::File, io::BufReader, path::PathBuf, time::Duration};

use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};
use loopmind_optimizer::{
    json::types::JsonOptimizationRequest,
    optimizer::{OptimizationResult, Optimizer},
    params::OptimizerParams,
};
use loopmind_routing::osrm_client::OsrmRouteClientParams;
use tracing::info;

use crate::{export::plans_to_geojson, parsers};

#[derive(Args)]
pub struct OptimizeArgs {
    /// A list of locations, or `{"locations": [...], "truckCount": n}`
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Overrides the truck count of the input file
    #[arg(short, long)]
    trucks: Option<usize>,

    /// Straight-line estimates only, OSRM is never contacted
    #[arg(long)]
    offline: bool,

    /// Per routing request (e.g., "10s", "PT10S")
    #[arg(long, value_parser = parsers::parse_duration, default_value = "10s")]
    timeout: jiff::SignedDuration,

    /// Print the full result as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Write both plans as a GeoJSON FeatureCollection
    #[arg(long)]
    geojson: Option<PathBuf>,
}

pub async fn run(args: OptimizeArgs) -> anyhow::Result<()> {
    let f = File::open(&args.input)?;
    let mut request: JsonOptimizationRequest = serde_json::from_reader(BufReader::new(f))?;

    if let Some(trucks) = args.trucks {
        request = request.with_truck_count(trucks);
    }

    let params = OptimizerParams {
        request_timeout: Duration::try_from(args.timeout)?,
        ..OptimizerParams::default()
    };

    let result = if args.offline {
        info!("Offline mode, using straight-line estimates");
        request.optimize(&Optimizer::offline(params)).await?
    } else {
        let client_params = OsrmRouteClientParams::from_env();
        info!("Routing through {}", client_params.osrm_url);
        let optimizer = Optimizer::with_osrm(client_params, params)?;
        request.optimize(&optimizer).await?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", comparison_table(&result));
    }

    if let Some(path) = args.geojson {
        let collection = plans_to_geojson(&result);
        std::fs::write(&path, serde_json::to_string(&collection)?)?;
        info!("Wrote {} routes to {}", collection.features.len(), path.display());
    }

    Ok(())
}

fn comparison_table(result: &OptimizationResult) -> Table {
    let naive = &result.naive.stats;
    let optimized = &result.optimized.stats;
    let savings = &result.savings;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["", "Naive", "Optimized", "Saved"])
        .add_row(vec![
            String::from("Trucks used"),
            result.naive.routes.len().to_string(),
            result.optimized.routes.len().to_string(),
            String::new(),
        ])
        .add_row(vec![
            String::from("Distance (km)"),
            format!("{:.2}", naive.total_distance_km()),
            format!("{:.2}", optimized.total_distance_km()),
            format!("{:.2}", savings.distance_saved_km),
        ])
        .add_row(vec![
            String::from("Time (min)"),
            format!("{:.1}", naive.total_time_minutes()),
            format!("{:.1}", optimized.total_time_minutes()),
            format!("{:.1}", savings.time_saved_minutes),
        ])
        .add_row(vec![
            String::from("Fuel cost"),
            format!("{:.2}", naive.estimated_fuel_cost()),
            format!("{:.2}", optimized.estimated_fuel_cost()),
            format!("{:.2} ({:.1}%)", savings.money_saved, savings.percent_improvement),
        ]);

    table
}

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use loopmind_optimizer::{optimizer::OptimizationResult, plan::route_plan::Plan};

/// One `LineString` per route of both plans, naive first.
pub fn plans_to_geojson(result: &OptimizationResult) -> FeatureCollection {
    let features = [("naive", &result.naive), ("optimized", &result.optimized)]
        .into_iter()
        .flat_map(|(name, plan)| plan_features(name, plan))
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

fn plan_features<'a>(name: &'a str, plan: &'a Plan) -> impl Iterator<Item = Feature> + 'a {
    plan.routes.iter().map(move |route| {
        let points = route
            .geometry
            .iter()
            .map(|coordinate| vec![coordinate.lng, coordinate.lat])
            .collect::<Vec<_>>();

        let mut properties = JsonObject::new();
        properties.insert(String::from("plan"), name.into());
        properties.insert(String::from("truckId"), route.truck_id.into());
        properties.insert(String::from("color"), route.color.clone().into());

        Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::LineString(points))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    })
}

#[cfg(test)]
mod tests {
    use loopmind_optimizer::{
        optimizer::Optimizer, params::OptimizerParams, problem::location::Location,
    };

    use super::*;

    #[tokio::test]
    async fn test_plans_to_geojson() {
        let depot = Location::depot("depot", "Central Depot", 0.0, 0.0);
        let jobs = vec![
            Location::job("a", "North 1", 0.0, 1.0),
            Location::job("b", "North 2", 0.0, 2.0),
            Location::job("c", "East 1", 1.0, 0.0),
        ];
        let result = Optimizer::offline(OptimizerParams::default())
            .optimize(&depot, &jobs, 2)
            .await
            .unwrap();

        let collection = plans_to_geojson(&result);

        assert_eq!(
            collection.features.len(),
            result.naive.routes.len() + result.optimized.routes.len()
        );

        let first = &collection.features[0];
        let properties = first.properties.as_ref().unwrap();
        assert_eq!(properties["plan"], "naive");
        assert_eq!(properties["truckId"], 1);
        assert_eq!(properties["color"], "#ef4444");

        match &first.geometry.as_ref().unwrap().value {
            Value::LineString(points) => {
                assert_eq!(points.first(), Some(&vec![0.0, 0.0]));
                assert_eq!(points[1], vec![1.0, 0.0]);
            }
            other => panic!("expected a line string, got {other:?}"),
        }
    }
}

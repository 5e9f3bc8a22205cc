use std::sync::Arc;

use chart_options::transform::{ChartTransformer, MapTransformer};
use chart_options::{ChartError, ColorConfig, GeoJsonDocument, StaticGeoSource};
use serde_json::{Value, json};

fn regions_doc(names: &[&str]) -> GeoJsonDocument {
    let features: Vec<Value> = names
        .iter()
        .map(|name| json!({ "properties": { "name": name }, "geometry": {} }))
        .collect();
    serde_json::from_value(json!({ "type": "FeatureCollection", "features": features }))
        .expect("valid geojson")
}

fn transformer_with(names: &[&str]) -> MapTransformer {
    let source = StaticGeoSource::new().with_document("world", regions_doc(names));
    MapTransformer::new(ColorConfig::default(), Arc::new(source), "world".to_owned())
}

#[test]
fn join_outputs_one_entry_per_geojson_region_in_order() {
    let transformer = transformer_with(&["A", "B", "C"]);
    let input = json!({ "series": [{ "data": [{ "name": "A", "value": 5 }] }] });
    let out = transformer.transform(&input).expect("transform");

    let data = out["series"][0]["data"].as_array().expect("data");
    assert_eq!(data.len(), 3);
    assert_eq!(data[0], json!({ "name": "A", "value": 5.0 }));
    assert_eq!(data[1], json!({ "name": "B", "value": 0.0 }));
    assert_eq!(data[2], json!({ "name": "C", "value": 0.0 }));
}

#[test]
fn caller_regions_unknown_to_the_geojson_are_dropped() {
    let transformer = transformer_with(&["A"]);
    let input = json!({ "series": [{ "data": [{ "name": "Atlantis", "value": 9 }] }] });
    let out = transformer.transform(&input).expect("transform");

    let data = out["series"][0]["data"].as_array().expect("data");
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], "A");
    assert_eq!(data[0]["value"], 0.0);
}

#[test]
fn repeated_region_names_use_last_write() {
    let transformer = transformer_with(&["A"]);
    let input = json!({
        "series": [{ "data": [
            { "name": "A", "value": 1 },
            { "name": "A", "value": 8 },
        ] }]
    });
    let out = transformer.transform(&input).expect("transform");
    assert_eq!(out["series"][0]["data"][0]["value"], 8.0);
}

#[test]
fn value_range_excludes_zeros_then_pads() {
    let transformer = transformer_with(&["A", "B", "C", "D"]);
    let input = json!({
        "series": [{ "data": [
            { "name": "C", "value": 7 },
            { "name": "D", "value": 3 },
        ] }]
    });
    let out = transformer.transform(&input).expect("transform");
    // Resolved values are [0, 0, 7, 3]; zeros read as "no data".
    assert_eq!(out["visualMap"]["min"], (3.0_f64 * 0.9).floor());
    assert_eq!(out["visualMap"]["max"], (7.0_f64 * 1.1).ceil());
}

#[test]
fn all_zero_values_fall_back_to_fixed_range() {
    let transformer = transformer_with(&["A", "B"]);
    let input = json!({ "series": [{ "data": [{ "name": "A", "value": 0 }] }] });
    let out = transformer.transform(&input).expect("transform");
    assert_eq!(out["visualMap"]["min"], 0.0);
    assert_eq!(out["visualMap"]["max"], 100.0);
}

#[test]
fn resolved_document_and_map_name_ride_along_for_the_renderer() {
    let transformer = transformer_with(&["A"]);
    let input = json!({ "series": [{ "data": [["A", 2]] }] });
    let out = transformer.transform(&input).expect("transform");

    assert_eq!(out["mapName"], "world");
    assert_eq!(out["mapGeoJson"]["type"], "FeatureCollection");
    assert_eq!(
        out["mapGeoJson"]["features"].as_array().expect("features").len(),
        1
    );
    assert_eq!(out["series"][0]["map"], "world");
    assert_eq!(out["series"][0]["type"], "map");
}

#[test]
fn unseeded_map_is_fatal_for_the_call() {
    let source = StaticGeoSource::new();
    let transformer =
        MapTransformer::new(ColorConfig::default(), Arc::new(source), "world".to_owned());
    let err = transformer
        .transform(&json!({ "series": [{ "data": [1] }] }))
        .expect_err("must fail without a document");
    assert!(matches!(err, ChartError::GeoFetch { .. }));
}

#[test]
fn caller_map_name_override_wins() {
    let source = StaticGeoSource::new()
        .with_document("world", regions_doc(&["A"]))
        .with_document("province", regions_doc(&["P1", "P2"]));
    let transformer =
        MapTransformer::new(ColorConfig::default(), Arc::new(source), "world".to_owned());
    let input = json!({ "mapName": "province", "series": [{ "data": [["P2", 4]] }] });
    let out = transformer.transform(&input).expect("transform");

    assert_eq!(out["mapName"], "province");
    let data = out["series"][0]["data"].as_array().expect("data");
    assert_eq!(data.len(), 2);
    assert_eq!(data[1]["value"], 4.0);
}

#[test]
fn transform_is_idempotent_on_its_own_output() {
    let transformer = transformer_with(&["A", "B"]);
    let input = json!({ "series": [{ "data": [{ "name": "B", "value": 6 }] }] });
    let once = transformer.transform(&input).expect("first pass");
    let twice = transformer.transform(&once).expect("second pass");
    assert_eq!(once, twice);
}

#[test]
fn missing_series_means_empty_series_even_with_a_document() {
    let transformer = transformer_with(&["A", "B"]);
    let out = transformer.transform(&json!({})).expect("transform");
    assert_eq!(out["series"], json!([]));
}

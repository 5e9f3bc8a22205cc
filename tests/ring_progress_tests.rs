use chart_options::ColorConfig;
use chart_options::transform::{ChartTransformer, RingProgressTransformer};
use serde_json::json;

#[test]
fn each_value_becomes_its_own_ring() {
    let colors = ColorConfig::default();
    let transformer = RingProgressTransformer::new(colors.clone());
    let input = json!({ "series": [{ "data": [30, { "name": "cpu", "value": 75 }] }] });
    let out = transformer.transform(&input).expect("transform");

    let series = out["series"].as_array().expect("series");
    assert_eq!(series.len(), 2);
    assert_eq!(series[0]["type"], "pie");
    assert_eq!(series[0]["name"], "Ring 1");
    assert_eq!(series[1]["name"], "cpu");

    let data = series[1]["data"].as_array().expect("two slices");
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["value"], 75.0);
    assert_eq!(data[1]["value"], 25.0, "remainder completes the ring");
    assert_eq!(
        data[0]["itemStyle"]["color"],
        json!(colors.series_color(1)),
        "ring color index is global across the flattened list"
    );
}

#[test]
fn five_rings_sit_on_a_three_by_two_grid() {
    let transformer = RingProgressTransformer::new(ColorConfig::default());
    let input = json!({ "series": [{ "data": [10, 20, 30, 40, 50] }] });
    let out = transformer.transform(&input).expect("transform");
    let series = out["series"].as_array().expect("series");
    assert_eq!(series.len(), 5);

    // First cell midpoint of a 3x2 grid.
    let expected_x = format!("{}%", 0.5 / 3.0 * 100.0);
    assert_eq!(series[0]["center"][0], json!(expected_x));
    assert_eq!(series[0]["center"][1], "25%");
    assert_eq!(series[0]["radius"], json!(["22%", "30%"]));
    // Fourth ring starts the second row.
    assert_eq!(series[3]["center"][1], "75%");
}

#[test]
fn single_ring_is_centered_and_large() {
    let transformer = RingProgressTransformer::new(ColorConfig::default());
    let input = json!({ "series": [{ "data": [42] }] });
    let out = transformer.transform(&input).expect("transform");
    assert_eq!(out["series"][0]["center"], json!(["50%", "50%"]));
    assert_eq!(out["series"][0]["radius"], json!(["50%", "65%"]));
    assert_eq!(out["series"][0]["label"]["formatter"], "42%");
}

#[test]
fn values_clamp_into_the_percent_range() {
    let transformer = RingProgressTransformer::new(ColorConfig::default());
    let input = json!({ "series": [{ "data": [-10, 250] }] });
    let out = transformer.transform(&input).expect("transform");
    assert_eq!(out["series"][0]["data"][0]["value"], 0.0);
    assert_eq!(out["series"][1]["data"][0]["value"], 100.0);
    assert_eq!(out["series"][1]["data"][1]["value"], 0.0);
}

#[test]
fn legend_defaults_hidden_unless_the_caller_asks() {
    let transformer = RingProgressTransformer::new(ColorConfig::default());

    let out = transformer
        .transform(&json!({ "series": [{ "data": [10] }] }))
        .expect("transform");
    assert_eq!(out["legend"]["show"], false);

    let out = transformer
        .transform(&json!({ "legend": { "show": true }, "series": [{ "data": [10] }] }))
        .expect("transform");
    assert_eq!(out["legend"]["show"], true);
}

use chart_options::ColorConfig;
use chart_options::transform::{ChartTransformer, ParallelTransformer, RadarTransformer};
use serde_json::json;

#[test]
fn parallel_infers_numeric_axes_with_padding() {
    let transformer = ParallelTransformer::new(ColorConfig::default());
    let input = json!({
        "series": [{ "data": [[10, "slow"], [30, "fast"]] }]
    });
    let out = transformer.transform(&input).expect("transform");

    let axes = out["parallelAxis"].as_array().expect("axes");
    assert_eq!(axes.len(), 2);
    assert_eq!(axes[0]["dim"], 0);
    assert_eq!(axes[0]["min"], 8.0);
    assert_eq!(axes[0]["max"], 32.0);
    assert_eq!(axes[1]["type"], "category");
    assert_eq!(axes[1]["data"], json!(["slow", "fast"]));
    assert_eq!(axes[1]["axisLabel"]["rotate"], 0);
}

#[test]
fn parallel_rotates_crowded_category_labels() {
    let transformer = ParallelTransformer::new(ColorConfig::default());
    let data: Vec<_> = (0..7).map(|i| json!([i, format!("c{i}")])).collect();
    let input = json!({ "series": [{ "data": data }] });
    let out = transformer.transform(&input).expect("transform");
    assert_eq!(out["parallelAxis"][1]["axisLabel"]["rotate"], 45);
}

#[test]
fn parallel_caller_axes_win_wholesale() {
    let transformer = ParallelTransformer::new(ColorConfig::default());
    let input = json!({
        "parallelAxis": [{ "dim": 0, "name": "Mine" }],
        "series": [{ "data": [[1, 2, 3]] }]
    });
    let out = transformer.transform(&input).expect("transform");
    let axes = out["parallelAxis"].as_array().expect("axes");
    assert_eq!(axes.len(), 1, "no inferred axes alongside caller ones");
    assert_eq!(axes[0]["name"], "Mine");
}

#[test]
fn parallel_line_color_is_per_series() {
    let colors = ColorConfig::default();
    let transformer = ParallelTransformer::new(colors.clone());
    let input = json!({
        "series": [
            { "data": [[1, 2]] },
            { "data": [[3, 4]] },
        ]
    });
    let out = transformer.transform(&input).expect("transform");
    assert_eq!(
        out["series"][0]["lineStyle"]["color"],
        json!(colors.series_color(0))
    );
    assert_eq!(
        out["series"][1]["lineStyle"]["color"],
        json!(colors.series_color(1))
    );
    assert_eq!(out["series"][0]["type"], "parallel");
}

#[test]
fn parallel_object_items_contribute_their_value_rows() {
    let transformer = ParallelTransformer::new(ColorConfig::default());
    let input = json!({
        "series": [{ "data": [
            { "value": [1, 2] },
            { "no_value": true },
            7,
        ] }]
    });
    let out = transformer.transform(&input).expect("transform");
    let data = out["series"][0]["data"].as_array().expect("data");
    assert_eq!(data.len(), 1);
    assert_eq!(data[0], json!([1, 2]));
}

#[test]
fn radar_indicator_max_is_observed_max_plus_ten_percent() {
    let transformer = RadarTransformer::new(ColorConfig::default());
    let input = json!({
        "series": [{ "data": [
            { "name": "a", "value": [50, 10] },
            { "name": "b", "value": [80, 20] },
        ] }]
    });
    let out = transformer.transform(&input).expect("transform");
    let indicators = out["radar"]["indicator"].as_array().expect("indicators");
    assert_eq!(indicators.len(), 2);
    assert_eq!(indicators[0]["name"], "Dim 1");
    assert!((indicators[0]["max"].as_f64().expect("max") - 88.0).abs() < 1e-9);
    assert!((indicators[1]["max"].as_f64().expect("max") - 22.0).abs() < 1e-9);
}

#[test]
fn radar_caller_indicator_fields_win_per_entry() {
    let transformer = RadarTransformer::new(ColorConfig::default());
    let input = json!({
        "radar": { "indicator": [{ "name": "Speed" }, { "max": 500 }] },
        "series": [{ "data": [{ "value": [50, 10] }] }]
    });
    let out = transformer.transform(&input).expect("transform");
    let indicators = out["radar"]["indicator"].as_array().expect("indicators");
    assert_eq!(indicators[0]["name"], "Speed");
    assert!((indicators[0]["max"].as_f64().expect("max") - 55.0).abs() < 1e-9);
    assert_eq!(indicators[1]["name"], "Dim 2");
    assert_eq!(indicators[1]["max"], 500.0);
}

#[test]
fn radar_all_zero_dimension_falls_back_to_one_hundred() {
    let transformer = RadarTransformer::new(ColorConfig::default());
    let input = json!({ "series": [{ "data": [{ "value": [0, 0] }] }] });
    let out = transformer.transform(&input).expect("transform");
    let indicators = out["radar"]["indicator"].as_array().expect("indicators");
    assert_eq!(indicators[0]["max"], 100.0);
}

#[test]
fn radar_polygons_take_per_item_colors_and_area() {
    let colors = ColorConfig::default();
    let transformer = RadarTransformer::new(colors.clone());
    let input = json!({
        "series": [{ "data": [
            [1, 2, 3],
            { "name": "mine", "value": [4, 5, 6], "itemStyle": { "color": "#fff" } },
            "dropped",
        ] }]
    });
    let out = transformer.transform(&input).expect("transform");
    let data = out["series"][0]["data"].as_array().expect("polygons");
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["name"], "Radar 1");
    assert_eq!(data[0]["itemStyle"]["color"], json!(colors.series_color(0)));
    assert_eq!(data[0]["areaStyle"]["opacity"], 0.3);
    assert_eq!(data[1]["itemStyle"]["color"], "#fff");
}

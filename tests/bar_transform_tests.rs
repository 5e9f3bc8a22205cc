use chart_options::ColorConfig;
use chart_options::transform::{BarTransformer, ChartTransformer};
use serde_json::json;

#[test]
fn missing_series_yields_empty_series_not_error() {
    let transformer = BarTransformer::new(ColorConfig::default());
    let out = transformer.transform(&json!({})).expect("transform");
    assert_eq!(out["series"], json!([]));
}

#[test]
fn empty_data_series_are_dropped() {
    let transformer = BarTransformer::new(ColorConfig::default());
    let input = json!({
        "series": [
            { "data": [] },
            { "data": [1, 2] },
            { "name": "no data at all" },
        ]
    });
    let out = transformer.transform(&input).expect("transform");
    let series = out["series"].as_array().expect("series array");
    assert_eq!(series.len(), 1);
    assert_eq!(series[0]["data"].as_array().expect("data").len(), 2);
}

#[test]
fn bare_numbers_become_named_items_with_cyclic_colors() {
    let colors = ColorConfig::default();
    let transformer = BarTransformer::new(colors.clone());
    let input = json!({ "series": [{ "data": [7, 11] }] });
    let out = transformer.transform(&input).expect("transform");

    let data = out["series"][0]["data"].as_array().expect("data");
    assert_eq!(data[0]["name"], "Bar 1");
    assert_eq!(data[0]["value"], 7.0);
    assert_eq!(data[0]["itemStyle"]["color"], json!(colors.series_color(0)));
    assert_eq!(data[1]["name"], "Bar 2");
    assert_eq!(data[1]["itemStyle"]["color"], json!(colors.series_color(1)));
}

#[test]
fn color_index_is_per_series_not_global() {
    let colors = ColorConfig::default();
    let transformer = BarTransformer::new(colors.clone());
    let input = json!({ "series": [{ "data": [1] }, { "data": [2] }] });
    let out = transformer.transform(&input).expect("transform");

    // Both first items sit at index 0 of their own series.
    let first = &out["series"][0]["data"][0]["itemStyle"]["color"];
    let second = &out["series"][1]["data"][0]["itemStyle"]["color"];
    assert_eq!(first, &json!(colors.series_color(0)));
    assert_eq!(second, &json!(colors.series_color(0)));
}

#[test]
fn series_name_and_type_are_defaulted() {
    let transformer = BarTransformer::new(ColorConfig::default());
    let input = json!({ "series": [{ "data": [1] }, { "name": "Kept", "data": [2] }] });
    let out = transformer.transform(&input).expect("transform");
    assert_eq!(out["series"][0]["name"], "Bar 1");
    assert_eq!(out["series"][0]["type"], "bar");
    assert_eq!(out["series"][1]["name"], "Kept");
}

#[test]
fn caller_title_text_wins_while_sibling_defaults_fill_in() {
    let transformer = BarTransformer::new(ColorConfig::default());
    let input = json!({ "title": { "text": "X" }, "series": [{ "data": [1] }] });
    let out = transformer.transform(&input).expect("transform");
    assert_eq!(out["title"]["text"], "X");
    assert_eq!(out["title"]["left"], "center");
    assert!(out["title"]["textStyle"]["fontSize"].is_number());
}

#[test]
fn category_axis_takes_first_series_item_names() {
    let transformer = BarTransformer::new(ColorConfig::default());
    let input = json!({ "series": [{ "data": [["east", 1], ["west", 2]] }] });
    let out = transformer.transform(&input).expect("transform");
    assert_eq!(out["xAxis"]["data"], json!(["east", "west"]));
    assert_eq!(out["yAxis"]["type"], "value");
}

#[test]
fn transform_is_idempotent_on_its_own_output() {
    let transformer = BarTransformer::new(ColorConfig::default());
    let input = json!({
        "title": { "text": "Revenue" },
        "series": [{ "data": [3, ["east", 5], { "name": "n", "value": 9 }] }],
    });
    let once = transformer.transform(&input).expect("first pass");
    let twice = transformer.transform(&once).expect("second pass");
    assert_eq!(once, twice);
}

#[test]
fn malformed_items_become_zero_placeholders() {
    let transformer = BarTransformer::new(ColorConfig::default());
    let input = json!({ "series": [{ "data": [null, true, "not a number"] }] });
    let out = transformer.transform(&input).expect("transform");
    let data = out["series"][0]["data"].as_array().expect("data");
    assert_eq!(data.len(), 3);
    for (i, item) in data.iter().enumerate() {
        assert_eq!(item["value"], 0.0);
        assert_eq!(item["name"], json!(format!("Bar {}", i + 1)));
    }
}

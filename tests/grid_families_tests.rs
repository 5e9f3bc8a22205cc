use chart_options::ColorConfig;
use chart_options::transform::{
    BoxplotTransformer, CandlestickTransformer, ChartTransformer, HeatmapTransformer,
    ThemeRiverTransformer,
};
use serde_json::json;

#[test]
fn boxplot_rows_are_zero_filled_to_five_values() {
    let transformer = BoxplotTransformer::new(ColorConfig::default());
    let input = json!({
        "series": [{ "data": [
            [1, 2, 3, 4, 5, 6],
            [1, 2],
            "not a row",
        ] }]
    });
    let out = transformer.transform(&input).expect("transform");
    let data = out["series"][0]["data"].as_array().expect("data");
    assert_eq!(data.len(), 2, "non-array rows are dropped");
    assert_eq!(data[0], json!([1.0, 2.0, 3.0, 4.0, 5.0]), "long rows truncate");
    assert_eq!(data[1], json!([1.0, 2.0, 0.0, 0.0, 0.0]), "short rows zero-fill");
}

#[test]
fn boxplot_border_color_comes_from_the_series_palette() {
    let colors = ColorConfig::default();
    let transformer = BoxplotTransformer::new(colors.clone());
    let input = json!({
        "series": [
            { "data": [[1, 2, 3, 4, 5]] },
            { "data": [[2, 3, 4, 5, 6]] },
        ]
    });
    let out = transformer.transform(&input).expect("transform");
    assert_eq!(out["series"][0]["itemStyle"]["color"], "transparent");
    assert_eq!(
        out["series"][0]["itemStyle"]["borderColor"],
        json!(colors.series_color(0))
    );
    assert_eq!(
        out["series"][1]["itemStyle"]["borderColor"],
        json!(colors.series_color(1))
    );
}

#[test]
fn boxplot_categories_are_index_strings_over_the_longest_series() {
    let transformer = BoxplotTransformer::new(ColorConfig::default());
    let input = json!({
        "series": [
            { "data": [[1, 2, 3, 4, 5]] },
            { "data": [[1, 2, 3, 4, 5], [2, 3, 4, 5, 6], [3, 4, 5, 6, 7]] },
        ]
    });
    let out = transformer.transform(&input).expect("transform");
    assert_eq!(out["xAxis"]["data"], json!(["1", "2", "3"]));
    assert_eq!(out["tooltip"]["trigger"], "axis");
}

#[test]
fn candlestick_uses_status_colors_for_up_and_down() {
    let colors = ColorConfig::default();
    let transformer = CandlestickTransformer::new(colors.clone());
    let input = json!({ "series": [{ "data": [[10, 12, 9, 13]] }] });
    let out = transformer.transform(&input).expect("transform");
    let style = &out["series"][0]["itemStyle"];
    assert_eq!(style["color"], json!(colors.status.up));
    assert_eq!(style["color0"], json!(colors.status.down));
    assert_eq!(style["borderColor"], json!(colors.status.up));
    assert_eq!(out["series"][0]["type"], "candlestick");
}

#[test]
fn candlestick_rows_normalize_to_four_values() {
    let transformer = CandlestickTransformer::new(ColorConfig::default());
    let input = json!({ "series": [{ "data": [["10", 12], [1, 2, 3, 4, 5]] }] });
    let out = transformer.transform(&input).expect("transform");
    let data = out["series"][0]["data"].as_array().expect("data");
    assert_eq!(data[0], json!([10.0, 12.0, 0.0, 0.0]), "numeric strings parse");
    assert_eq!(data[1], json!([1.0, 2.0, 3.0, 4.0]));
}

#[test]
fn heatmap_visual_map_spans_the_observed_values() {
    let transformer = HeatmapTransformer::new(ColorConfig::default());
    let input = json!({
        "series": [{ "data": [[0, 0, 5], [1, 0, -2], [0, 1, 9]] }]
    });
    let out = transformer.transform(&input).expect("transform");
    assert_eq!(out["visualMap"]["min"], -2.0);
    assert_eq!(out["visualMap"]["max"], 9.0);
    assert!(out["visualMap"]["inRange"]["color"].is_array());
}

#[test]
fn heatmap_axes_list_distinct_coordinates_in_first_seen_order() {
    let transformer = HeatmapTransformer::new(ColorConfig::default());
    let input = json!({
        "series": [{ "data": [[2, 7, 1], [0, 7, 1], [2, 3, 1]] }]
    });
    let out = transformer.transform(&input).expect("transform");
    assert_eq!(out["xAxis"]["data"], json!([2.0, 0.0]));
    assert_eq!(out["yAxis"]["data"], json!([7.0, 3.0]));
    assert_eq!(out["xAxis"]["type"], "category");
}

#[test]
fn heatmap_without_rows_uses_a_fixed_fallback_range() {
    let transformer = HeatmapTransformer::new(ColorConfig::default());
    let out = transformer
        .transform(&json!({ "series": [{ "data": ["junk"] }] }))
        .expect("transform");
    assert_eq!(out["series"], json!([]));
    assert_eq!(out["visualMap"]["min"], 0.0);
    assert_eq!(out["visualMap"]["max"], 10.0);
}

#[test]
fn theme_river_flattens_all_series_into_one() {
    let transformer = ThemeRiverTransformer::new(ColorConfig::default());
    let input = json!({
        "series": [
            { "data": [["2024-01-01", 10, "alpha"], ["2024-01-02", 12]] },
            { "data": [["2024-01-01", 4]] },
        ]
    });
    let out = transformer.transform(&input).expect("transform");
    let series = out["series"].as_array().expect("series");
    assert_eq!(series.len(), 1);
    assert_eq!(series[0]["type"], "themeRiver");

    let rows = series[0]["data"].as_array().expect("rows");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], json!(["2024-01-01", 10.0, "alpha"]));
    assert_eq!(rows[1], json!(["2024-01-02", 12.0, "Theme 1"]));
    assert_eq!(rows[2], json!(["2024-01-01", 4.0, "Theme 2"]));
    assert_eq!(out["singleAxis"]["type"], "time");
}

#[test]
fn theme_river_drops_non_array_rows_entirely() {
    let transformer = ThemeRiverTransformer::new(ColorConfig::default());
    let input = json!({ "series": [{ "data": [5, "text", { "t": 1 }] }] });
    let out = transformer.transform(&input).expect("transform");
    assert_eq!(out["series"], json!([]));
}

#[test]
fn theme_river_drops_rows_too_short_to_carry_a_value() {
    let transformer = ThemeRiverTransformer::new(ColorConfig::default());
    let input = json!({
        "series": [{ "data": [
            [5],
            [null],
            ["2024-01-01", 3],
        ] }]
    });
    let out = transformer.transform(&input).expect("transform");
    let rows = out["series"][0]["data"].as_array().expect("rows");
    assert_eq!(rows.len(), 1, "single-cell rows are dropped, not padded");
    assert_eq!(rows[0], json!(["2024-01-01", 3.0, "Theme 1"]));
}

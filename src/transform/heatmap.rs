//! Heatmap transformer. Items are `[x, y, value]` rows; the color scale is a
//! visual-map section driven by the observed value range and the map-gradient
//! palette.

use indexmap::IndexSet;
use ordered_float::OrderedFloat;
use serde_json::{Map, Value, json};

use crate::error::ChartResult;
use crate::merge::merged_section;
use crate::palette::ColorConfig;
use crate::scaffold::{self, TooltipTrigger};

use super::{
    ChartKind, ChartTransformer, data_series, numeric_row, resolved_series, series_data,
    series_name,
};

const LABEL: &str = "Heatmap";
const ROW_ARITY: usize = 3;

pub struct HeatmapTransformer {
    colors: ColorConfig,
}

impl HeatmapTransformer {
    #[must_use]
    pub fn new(colors: ColorConfig) -> Self {
        Self { colors }
    }

    fn series_defaults(&self, entry: &Map<String, Value>, index: usize) -> Value {
        json!({
            "name": series_name(entry, LABEL, index),
            "type": "heatmap",
            "label": {
                "show": true,
                "color": self.colors.theme.text,
                "fontSize": 12,
            },
            "emphasis": {
                "itemStyle": {
                    "shadowBlur": 10,
                    "shadowColor": "rgba(0, 0, 0, 0.5)",
                },
            },
        })
    }

    fn visual_map_defaults(&self, min: f64, max: f64) -> Value {
        json!({
            "show": true,
            "min": min,
            "max": max,
            "calculable": true,
            "orient": "horizontal",
            "left": "center",
            "bottom": "0%",
            "inRange": { "color": self.colors.map_gradient },
            "textStyle": { "color": self.colors.theme.text },
        })
    }
}

impl ChartTransformer for HeatmapTransformer {
    fn kind(&self) -> ChartKind {
        ChartKind::Heatmap
    }

    fn transform(&self, input: &Value) -> ChartResult<Value> {
        let mut xs: IndexSet<OrderedFloat<f64>> = IndexSet::new();
        let mut ys: IndexSet<OrderedFloat<f64>> = IndexSet::new();
        let mut min_value = f64::INFINITY;
        let mut max_value = f64::NEG_INFINITY;
        let mut series_out: Vec<Value> = Vec::new();

        for (s_idx, entry) in data_series(input).into_iter().enumerate() {
            let rows: Vec<Value> = series_data(entry)
                .iter()
                .filter_map(|raw| numeric_row(raw, ROW_ARITY))
                .map(|row| {
                    xs.insert(OrderedFloat(row[0]));
                    ys.insert(OrderedFloat(row[1]));
                    min_value = min_value.min(row[2]);
                    max_value = max_value.max(row[2]);
                    json!(row)
                })
                .collect();
            if rows.is_empty() {
                continue;
            }

            let mut merged = resolved_series(self.series_defaults(entry, s_idx), entry);
            if let Some(obj) = merged.as_object_mut() {
                obj.insert("data".to_owned(), Value::Array(rows));
            }
            series_out.push(merged);
        }

        let (min_value, max_value) = if min_value.is_finite() {
            (min_value, max_value)
        } else {
            (0.0, 10.0)
        };
        let x_data: Vec<Value> = xs.into_iter().map(|x| json!(x.into_inner())).collect();
        let y_data: Vec<Value> = ys.into_iter().map(|y| json!(y.into_inner())).collect();

        let mut out = scaffold::apply(&self.colors, TooltipTrigger::Item, input);
        out.insert(
            "xAxis".to_owned(),
            scaffold::merged_axis(input, "xAxis", scaffold::category_axis(&self.colors, x_data)),
        );
        out.insert(
            "yAxis".to_owned(),
            scaffold::merged_axis(input, "yAxis", scaffold::category_axis(&self.colors, y_data)),
        );
        out.insert(
            "visualMap".to_owned(),
            merged_section(input, "visualMap", self.visual_map_defaults(min_value, max_value)),
        );
        out.insert("series".to_owned(), Value::Array(series_out));
        Ok(Value::Object(out))
    }
}

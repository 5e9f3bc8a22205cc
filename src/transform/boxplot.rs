//! Boxplot transformer. Items are `[min, q1, median, q3, max]` rows; short
//! rows are zero-filled to five values, non-array items are dropped.

use serde_json::{Map, Value, json};

use crate::error::ChartResult;
use crate::palette::ColorConfig;
use crate::scaffold::{self, TooltipTrigger};

use super::{
    ChartKind, ChartTransformer, data_series, numeric_row, resolved_series, series_data,
    series_name,
};

const LABEL: &str = "Boxplot";
const ROW_ARITY: usize = 5;

pub struct BoxplotTransformer {
    colors: ColorConfig,
}

impl BoxplotTransformer {
    #[must_use]
    pub fn new(colors: ColorConfig) -> Self {
        Self { colors }
    }

    fn series_defaults(&self, entry: &Map<String, Value>, index: usize) -> Value {
        json!({
            "name": series_name(entry, LABEL, index),
            "type": "boxplot",
            "boxWidth": [7, 30],
            "itemStyle": {
                "color": "transparent",
                "borderColor": self.colors.series_color(index),
                "borderWidth": 1.5,
            },
            "emphasis": {
                "itemStyle": {
                    "borderWidth": 2.5,
                    "shadowBlur": 5,
                    "shadowColor": "rgba(0, 0, 0, 0.4)",
                },
            },
        })
    }
}

impl ChartTransformer for BoxplotTransformer {
    fn kind(&self) -> ChartKind {
        ChartKind::Boxplot
    }

    fn transform(&self, input: &Value) -> ChartResult<Value> {
        let mut category_count = 0usize;
        let mut series_out: Vec<Value> = Vec::new();

        for (s_idx, entry) in data_series(input).into_iter().enumerate() {
            let rows: Vec<Value> = series_data(entry)
                .iter()
                .filter_map(|raw| numeric_row(raw, ROW_ARITY))
                .map(|row| json!(row))
                .collect();
            if rows.is_empty() {
                continue;
            }
            category_count = category_count.max(rows.len());

            let mut merged = resolved_series(self.series_defaults(entry, s_idx), entry);
            if let Some(obj) = merged.as_object_mut() {
                obj.insert("data".to_owned(), Value::Array(rows));
            }
            series_out.push(merged);
        }

        let categories: Vec<Value> = (1..=category_count).map(|i| json!(i.to_string())).collect();

        let mut out = scaffold::apply(&self.colors, TooltipTrigger::Axis, input);
        out.insert(
            "xAxis".to_owned(),
            scaffold::merged_axis(input, "xAxis", scaffold::category_axis(&self.colors, categories)),
        );
        out.insert(
            "yAxis".to_owned(),
            scaffold::merged_axis(input, "yAxis", scaffold::value_axis(&self.colors)),
        );
        out.insert("series".to_owned(), Value::Array(series_out));
        Ok(Value::Object(out))
    }
}

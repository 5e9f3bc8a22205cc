//! Scatter/bubble transformer. Accepts bare numbers (`y` at the item's own
//! index), `[x, y]` pairs and `[x, y, size]` bubbles; structured objects pass
//! through with missing sub-fields filled.

use serde_json::{Map, Value, json};

use crate::error::ChartResult;
use crate::merge::lenient_f64;
use crate::palette::ColorConfig;
use crate::scaffold::{self, TooltipTrigger};
use crate::shape::{ItemShape, classify};

use super::{
    ChartKind, ChartTransformer, data_series, ensure_style_color, resolved_series, series_data,
    series_name,
};

const LABEL: &str = "Scatter";
const DEFAULT_SYMBOL_SIZE: f64 = 10.0;

pub struct ScatterTransformer {
    colors: ColorConfig,
}

impl ScatterTransformer {
    #[must_use]
    pub fn new(colors: ColorConfig) -> Self {
        Self { colors }
    }

    fn item(&self, raw: &Value, index: usize) -> Option<Map<String, Value>> {
        let mut item = match classify(raw) {
            ItemShape::Number(y) => {
                let mut m = Map::new();
                m.insert("value".to_owned(), json!([index as f64, y]));
                m
            }
            ItemShape::Pair(x, y) => {
                let mut m = Map::new();
                m.insert(
                    "value".to_owned(),
                    json!([
                        lenient_f64(x).unwrap_or(0.0),
                        lenient_f64(y).unwrap_or(0.0)
                    ]),
                );
                m
            }
            ItemShape::Tuple(cells) => {
                let x = cells.first().and_then(lenient_f64).unwrap_or(0.0);
                let y = cells.get(1).and_then(lenient_f64).unwrap_or(0.0);
                let size = cells
                    .get(2)
                    .and_then(lenient_f64)
                    .unwrap_or(DEFAULT_SYMBOL_SIZE);
                let mut m = Map::new();
                m.insert("value".to_owned(), json!([x, y]));
                m.insert("symbolSize".to_owned(), json!(size));
                m
            }
            ItemShape::Object(map) => {
                let mut m = map.clone();
                m.entry("value".to_owned()).or_insert_with(|| json!([0, 0]));
                m
            }
            ItemShape::Unrecognized => return None,
        };
        ensure_style_color(&mut item, "itemStyle", self.colors.series_color(index));
        Some(item)
    }

    fn series_defaults(&self, entry: &Map<String, Value>, index: usize) -> Value {
        json!({
            "name": series_name(entry, LABEL, index),
            "type": "scatter",
            "symbolSize": DEFAULT_SYMBOL_SIZE,
            "emphasis": {
                "focus": "series",
                "itemStyle": {
                    "shadowBlur": 10,
                    "shadowColor": "rgba(0, 0, 0, 0.3)",
                },
            },
        })
    }
}

impl ChartTransformer for ScatterTransformer {
    fn kind(&self) -> ChartKind {
        ChartKind::Scatter
    }

    fn transform(&self, input: &Value) -> ChartResult<Value> {
        let mut series_out: Vec<Value> = Vec::new();

        for (s_idx, entry) in data_series(input).into_iter().enumerate() {
            let items: Vec<Value> = series_data(entry)
                .iter()
                .enumerate()
                .filter_map(|(i, raw)| self.item(raw, i).map(Value::Object))
                .collect();
            if items.is_empty() {
                continue;
            }

            let mut merged = resolved_series(self.series_defaults(entry, s_idx), entry);
            if let Some(obj) = merged.as_object_mut() {
                obj.insert("data".to_owned(), Value::Array(items));
            }
            series_out.push(merged);
        }

        let mut out = scaffold::apply(&self.colors, TooltipTrigger::Item, input);
        out.insert(
            "xAxis".to_owned(),
            scaffold::merged_axis(input, "xAxis", scaffold::value_axis(&self.colors)),
        );
        out.insert(
            "yAxis".to_owned(),
            scaffold::merged_axis(input, "yAxis", scaffold::value_axis(&self.colors)),
        );
        out.insert("series".to_owned(), Value::Array(series_out));
        Ok(Value::Object(out))
    }
}

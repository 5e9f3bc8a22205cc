//! Bar chart transformer.

use serde_json::{Map, Value, json};

use crate::error::ChartResult;
use crate::palette::ColorConfig;
use crate::scaffold::{self, TooltipTrigger};
use crate::shape::named_item;

use super::{
    ChartKind, ChartTransformer, data_series, ensure_style_color, resolved_series, series_data,
    series_name,
};

const LABEL: &str = "Bar";

pub struct BarTransformer {
    colors: ColorConfig,
}

impl BarTransformer {
    #[must_use]
    pub fn new(colors: ColorConfig) -> Self {
        Self { colors }
    }

    fn series_defaults(&self, entry: &Map<String, Value>, index: usize) -> Value {
        json!({
            "name": series_name(entry, LABEL, index),
            "type": "bar",
            "barMaxWidth": 40,
            "label": {
                "show": false,
                "position": "top",
                "color": self.colors.theme.text,
                "fontSize": 12,
            },
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

impl ChartTransformer for BarTransformer {
    fn kind(&self) -> ChartKind {
        ChartKind::Bar
    }

    fn transform(&self, input: &Value) -> ChartResult<Value> {
        let mut categories: Vec<Value> = Vec::new();
        let mut series_out: Vec<Value> = Vec::new();

        for (s_idx, entry) in data_series(input).into_iter().enumerate() {
            let items: Vec<Value> = series_data(entry)
                .iter()
                .enumerate()
                .map(|(i, raw)| {
                    let mut item = named_item(raw, LABEL, i);
                    ensure_style_color(&mut item, "itemStyle", self.colors.series_color(i));
                    Value::Object(item)
                })
                .collect();

            if s_idx == 0 {
                categories = items
                    .iter()
                    .map(|item| item.get("name").cloned().unwrap_or(Value::Null))
                    .collect();
            }

            let mut merged = resolved_series(self.series_defaults(entry, s_idx), entry);
            if let Some(obj) = merged.as_object_mut() {
                obj.insert("data".to_owned(), Value::Array(items));
            }
            series_out.push(merged);
        }

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

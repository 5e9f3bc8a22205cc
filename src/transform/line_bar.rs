//! Mixed line+bar transformer: one cartesian chart where each series renders
//! as either a bar or a line. A caller-supplied per-series `type` of `"line"`
//! or `"bar"` wins; otherwise even series indexes become bars and odd ones
//! lines.

use serde_json::{Map, Value, json};

use crate::error::ChartResult;
use crate::palette::ColorConfig;
use crate::scaffold::{self, TooltipTrigger};
use crate::shape::named_item;

use super::{
    ChartKind, ChartTransformer, data_series, resolved_series, series_data, series_name,
};

const LABEL: &str = "Series";

pub struct LineBarTransformer {
    colors: ColorConfig,
}

impl LineBarTransformer {
    #[must_use]
    pub fn new(colors: ColorConfig) -> Self {
        Self { colors }
    }

    fn series_kind(entry: &Map<String, Value>, index: usize) -> &'static str {
        match entry.get("type").and_then(Value::as_str) {
            Some("line") => "line",
            Some("bar") => "bar",
            _ if index % 2 == 0 => "bar",
            _ => "line",
        }
    }

    fn series_defaults(&self, entry: &Map<String, Value>, index: usize) -> Value {
        let color = self.colors.series_color(index);
        let kind = Self::series_kind(entry, index);
        let mut defaults = json!({
            "name": series_name(entry, LABEL, index),
            "type": kind,
            "itemStyle": { "color": color },
            "label": {
                "show": false,
                "position": "top",
                "color": self.colors.theme.text,
                "fontSize": 12,
            },
            "emphasis": { "focus": "series" },
        });
        if let Some(obj) = defaults.as_object_mut() {
            if kind == "bar" {
                obj.insert("barMaxWidth".to_owned(), json!(40));
            } else {
                obj.insert("smooth".to_owned(), json!(false));
                obj.insert("symbol".to_owned(), json!("circle"));
                obj.insert("symbolSize".to_owned(), json!(6));
                obj.insert("lineStyle".to_owned(), json!({ "width": 2, "color": color }));
            }
        }
        defaults
    }
}

impl ChartTransformer for LineBarTransformer {
    fn kind(&self) -> ChartKind {
        ChartKind::LineBar
    }

    fn transform(&self, input: &Value) -> ChartResult<Value> {
        let mut categories: Vec<Value> = Vec::new();
        let mut series_out: Vec<Value> = Vec::new();

        for (s_idx, entry) in data_series(input).into_iter().enumerate() {
            let items: Vec<Value> = series_data(entry)
                .iter()
                .enumerate()
                .map(|(i, raw)| Value::Object(named_item(raw, LABEL, i)))
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

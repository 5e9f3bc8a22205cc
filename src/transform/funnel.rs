//! Funnel transformer: descending stages, inside labels, per-item colors.

use serde_json::{Map, Value, json};

use crate::error::ChartResult;
use crate::palette::ColorConfig;
use crate::scaffold::{self, TooltipTrigger};
use crate::shape::named_item;

use super::{
    ChartKind, ChartTransformer, data_series, ensure_style_color, resolved_series, series_data,
    series_name,
};

const LABEL: &str = "Funnel";

pub struct FunnelTransformer {
    colors: ColorConfig,
}

impl FunnelTransformer {
    #[must_use]
    pub fn new(colors: ColorConfig) -> Self {
        Self { colors }
    }

    fn series_defaults(&self, entry: &Map<String, Value>, index: usize) -> Value {
        json!({
            "name": series_name(entry, LABEL, index),
            "type": "funnel",
            "sort": "descending",
            "gap": 2,
            "left": "10%",
            "top": "15%",
            "bottom": "10%",
            "width": "80%",
            "label": {
                "show": true,
                "position": "inside",
                "color": self.colors.theme.text,
                "fontSize": 12,
            },
            "itemStyle": {
                "borderWidth": 0,
            },
            "emphasis": {
                "label": { "fontSize": 16 },
            },
        })
    }
}

impl ChartTransformer for FunnelTransformer {
    fn kind(&self) -> ChartKind {
        ChartKind::Funnel
    }

    fn transform(&self, input: &Value) -> ChartResult<Value> {
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

            let mut merged = resolved_series(self.series_defaults(entry, s_idx), entry);
            if let Some(obj) = merged.as_object_mut() {
                obj.insert("data".to_owned(), Value::Array(items));
            }
            series_out.push(merged);
        }

        let mut out = scaffold::apply(&self.colors, TooltipTrigger::Item, input);
        out.insert("series".to_owned(), Value::Array(series_out));
        Ok(Value::Object(out))
    }
}

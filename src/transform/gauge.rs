//! Gauge transformer. Each data item is one dial; dial colors cycle the
//! series palette.

use serde_json::{Map, Value, json};

use crate::error::ChartResult;
use crate::palette::ColorConfig;
use crate::scaffold::{self, TooltipTrigger};
use crate::shape::named_item;

use super::{
    ChartKind, ChartTransformer, data_series, ensure_style_color, resolved_series, series_data,
    series_name,
};

const LABEL: &str = "Gauge";

pub struct GaugeTransformer {
    colors: ColorConfig,
}

impl GaugeTransformer {
    #[must_use]
    pub fn new(colors: ColorConfig) -> Self {
        Self { colors }
    }

    fn series_defaults(&self, entry: &Map<String, Value>, index: usize) -> Value {
        json!({
            "name": series_name(entry, LABEL, index),
            "type": "gauge",
            "min": 0,
            "max": 100,
            "progress": { "show": true, "width": 10 },
            "axisLine": { "lineStyle": { "width": 10 } },
            "axisTick": { "show": false },
            "splitLine": { "show": false },
            "axisLabel": {
                "show": true,
                "color": self.colors.theme.text,
                "fontSize": 10,
                "distance": 16,
            },
            "pointer": { "show": true },
            "title": {
                "show": true,
                "color": self.colors.theme.text,
                "fontSize": 14,
            },
            "detail": {
                "formatter": "{value}",
                "color": self.colors.theme.text,
                "fontSize": 22,
            },
        })
    }
}

impl ChartTransformer for GaugeTransformer {
    fn kind(&self) -> ChartKind {
        ChartKind::Gauge
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

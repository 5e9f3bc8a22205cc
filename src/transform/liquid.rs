//! Liquid-fill transformer. Data items are fill fractions; wave color comes
//! from the percentage-based gradient lookup. Values above 1 are read as
//! percentages and scaled down.

use serde_json::{Map, Value, json};

use crate::error::ChartResult;
use crate::merge::{get_f64, lenient_f64};
use crate::palette::ColorConfig;
use crate::scaffold::{self, TooltipTrigger};
use crate::shape::{ItemShape, classify};

use super::{
    ChartKind, ChartTransformer, data_series, ensure_style_color, resolved_series, series_data,
    series_name,
};

const LABEL: &str = "Liquid";

pub struct LiquidTransformer {
    colors: ColorConfig,
}

impl LiquidTransformer {
    #[must_use]
    pub fn new(colors: ColorConfig) -> Self {
        Self { colors }
    }

    fn fraction(raw: f64) -> f64 {
        let v = if raw > 1.0 { raw / 100.0 } else { raw };
        v.clamp(0.0, 1.0)
    }

    fn item(&self, raw: &Value) -> Value {
        let mut item = match classify(raw) {
            ItemShape::Number(v) => {
                let mut m = Map::new();
                m.insert("value".to_owned(), json!(Self::fraction(v)));
                m
            }
            ItemShape::Object(map) => {
                let mut m = map.clone();
                let v = get_f64(&m, "value").map_or(0.0, Self::fraction);
                m.insert("value".to_owned(), json!(v));
                m
            }
            ItemShape::Pair(_, b) => {
                let mut m = Map::new();
                m.insert(
                    "value".to_owned(),
                    json!(Self::fraction(lenient_f64(b).unwrap_or(0.0))),
                );
                m
            }
            ItemShape::Tuple(_) | ItemShape::Unrecognized => {
                let mut m = Map::new();
                m.insert("value".to_owned(), json!(0.0));
                m
            }
        };
        let pct = get_f64(&item, "value").unwrap_or(0.0) * 100.0;
        let color = self.colors.gradient_color(pct).to_owned();
        ensure_style_color(&mut item, "itemStyle", &color);
        Value::Object(item)
    }

    fn series_defaults(&self, entry: &Map<String, Value>, index: usize) -> Value {
        json!({
            "name": series_name(entry, LABEL, index),
            "type": "liquidFill",
            "radius": "80%",
            "center": ["50%", "50%"],
            "amplitude": "8%",
            "outline": { "show": false },
            "backgroundStyle": {
                "color": "transparent",
                "borderColor": self.colors.theme.border,
                "borderWidth": 1,
            },
            "label": {
                "show": true,
                "formatter": "{c}",
                "color": self.colors.theme.text,
                "fontSize": 40,
            },
        })
    }
}

impl ChartTransformer for LiquidTransformer {
    fn kind(&self) -> ChartKind {
        ChartKind::LiquidFill
    }

    fn transform(&self, input: &Value) -> ChartResult<Value> {
        let mut series_out: Vec<Value> = Vec::new();

        for (s_idx, entry) in data_series(input).into_iter().enumerate() {
            let items: Vec<Value> = series_data(entry).iter().map(|raw| self.item(raw)).collect();

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

//! Radar transformer. Indicator ranges are inferred from the data (observed
//! per-dimension maximum padded by 10%); each data item is one polygon and
//! takes its own palette color.

use serde_json::{Map, Value, json};

use crate::error::ChartResult;
use crate::merge::{label_string, lenient_f64, merged_section};
use crate::palette::ColorConfig;
use crate::scaffold::{self, TooltipTrigger};
use crate::shape::{ItemShape, classify};

use super::{
    ChartKind, ChartTransformer, data_series, ensure_style_color, resolved_series, series_data,
    series_name,
};

const LABEL: &str = "Radar";

pub struct RadarTransformer {
    colors: ColorConfig,
}

impl RadarTransformer {
    #[must_use]
    pub fn new(colors: ColorConfig) -> Self {
        Self { colors }
    }

    /// One polygon per item: `{name, value: [..]}` objects or bare vectors.
    fn polygon(&self, raw: &Value, index: usize) -> Option<Map<String, Value>> {
        let mut item = match classify(raw) {
            ItemShape::Object(map) => {
                let mut m = map.clone();
                if !m.get("value").is_some_and(Value::is_array) {
                    return None;
                }
                m.entry("name".to_owned())
                    .or_insert_with(|| json!(format!("{LABEL} {}", index + 1)));
                m
            }
            ItemShape::Pair(a, b) => {
                let mut m = Map::new();
                m.insert("name".to_owned(), json!(format!("{LABEL} {}", index + 1)));
                m.insert("value".to_owned(), json!([a.clone(), b.clone()]));
                m
            }
            ItemShape::Tuple(cells) => {
                let mut m = Map::new();
                m.insert("name".to_owned(), json!(format!("{LABEL} {}", index + 1)));
                m.insert("value".to_owned(), Value::Array(cells.to_vec()));
                m
            }
            ItemShape::Number(_) | ItemShape::Unrecognized => return None,
        };
        ensure_style_color(&mut item, "itemStyle", self.colors.series_color(index));
        item.entry("areaStyle".to_owned())
            .or_insert_with(|| json!({ "opacity": 0.3 }));
        Some(item)
    }

    /// Per-dimension maxima across every polygon, padded by 10%. Caller
    /// indicator entries win field by field; only what is missing is
    /// inferred.
    fn indicators(&self, input: &Value, polygons: &[Vec<f64>]) -> Vec<Value> {
        let caller: &[Value] = input
            .get("radar")
            .and_then(|r| r.get("indicator"))
            .and_then(Value::as_array)
            .map_or(&[], Vec::as_slice);

        let arity = polygons.first().map_or(0, Vec::len).max(caller.len());
        (0..arity)
            .map(|dim| {
                let max = polygons
                    .iter()
                    .filter_map(|p| p.get(dim))
                    .copied()
                    .fold(f64::NEG_INFINITY, f64::max);
                let max = if max.is_finite() && max > 0.0 {
                    max * 1.1
                } else {
                    100.0
                };
                let entry = caller.get(dim);
                let name = entry
                    .and_then(|e| e.get("name"))
                    .and_then(label_string)
                    .unwrap_or_else(|| format!("Dim {}", dim + 1));
                let max = entry
                    .and_then(|e| e.get("max"))
                    .and_then(lenient_f64)
                    .unwrap_or(max);
                json!({ "name": name, "max": max })
            })
            .collect()
    }

    fn series_defaults(&self, entry: &Map<String, Value>, index: usize) -> Value {
        json!({
            "name": series_name(entry, LABEL, index),
            "type": "radar",
            "symbol": "circle",
            "symbolSize": 6,
            "lineStyle": { "width": 2 },
            "emphasis": { "focus": "self" },
        })
    }
}

impl ChartTransformer for RadarTransformer {
    fn kind(&self) -> ChartKind {
        ChartKind::Radar
    }

    fn transform(&self, input: &Value) -> ChartResult<Value> {
        let mut numeric_polygons: Vec<Vec<f64>> = Vec::new();
        let mut series_out: Vec<Value> = Vec::new();

        for (s_idx, entry) in data_series(input).into_iter().enumerate() {
            let items: Vec<Value> = series_data(entry)
                .iter()
                .enumerate()
                .filter_map(|(i, raw)| self.polygon(raw, i))
                .map(|item| {
                    if let Some(values) = item.get("value").and_then(Value::as_array) {
                        numeric_polygons.push(
                            values
                                .iter()
                                .map(|v| lenient_f64(v).unwrap_or(0.0))
                                .collect(),
                        );
                    }
                    Value::Object(item)
                })
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
        let radar_defaults = json!({
            "center": ["50%", "50%"],
            "radius": "65%",
            "axisName": { "color": self.colors.theme.text, "fontSize": 12 },
            "axisLine": { "lineStyle": { "color": self.colors.theme.axis } },
            "splitLine": { "lineStyle": { "color": self.colors.theme.border } },
            "splitArea": { "show": false },
        });
        let mut radar = merged_section(input, "radar", radar_defaults);
        if let Some(section) = radar.as_object_mut() {
            section.insert(
                "indicator".to_owned(),
                Value::Array(self.indicators(input, &numeric_polygons)),
            );
        }
        out.insert("radar".to_owned(), radar);
        out.insert("series".to_owned(), Value::Array(series_out));
        Ok(Value::Object(out))
    }
}

//! Map transformer. Reconciles caller values against the full region list of
//! a GeoJSON document: the output carries exactly one entry per GeoJSON
//! region, in feature order, zero-filled where the caller supplied nothing.
//! Regions the GeoJSON does not know are silently dropped.

use std::sync::Arc;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde_json::{Map, Value, json};
use tracing::debug;

use crate::error::ChartResult;
use crate::geo::GeoSource;
use crate::merge::merged_section;
use crate::palette::ColorConfig;
use crate::scaffold::{self, TooltipTrigger};
use crate::shape::{ItemShape, classify};

use super::{
    ChartKind, ChartTransformer, data_series, resolved_series, series_data, series_name,
};

const LABEL: &str = "Map";
/// Color-scale range used when every resolved value is zero ("no data").
const DEFAULT_RANGE: (f64, f64) = (0.0, 100.0);

pub struct MapTransformer {
    colors: ColorConfig,
    geo: Arc<dyn GeoSource + Send + Sync>,
    default_map: String,
}

impl MapTransformer {
    #[must_use]
    pub fn new(
        colors: ColorConfig,
        geo: Arc<dyn GeoSource + Send + Sync>,
        default_map: String,
    ) -> Self {
        Self {
            colors,
            geo,
            default_map,
        }
    }

    /// Region name → value, built from one series' data. Last write wins on
    /// repeated names.
    fn region_values(entry: &Map<String, Value>) -> IndexMap<String, f64> {
        let mut values: IndexMap<String, f64> = IndexMap::new();
        for raw in series_data(entry) {
            let (name, value) = match classify(raw) {
                ItemShape::Object(item) => {
                    let name = item.get("name").and_then(Value::as_str);
                    let value = item.get("value").and_then(crate::merge::lenient_f64);
                    match name {
                        Some(name) => (name.to_owned(), value.unwrap_or(0.0)),
                        None => continue,
                    }
                }
                ItemShape::Pair(a, b) => match crate::merge::label_string(a) {
                    Some(name) => (name, crate::merge::lenient_f64(b).unwrap_or(0.0)),
                    None => continue,
                },
                _ => continue,
            };
            values.insert(name, value);
        }
        values
    }

    /// Left outer join from the GeoJSON region list to the caller's values.
    fn joined_data(regions: &[String], values: &IndexMap<String, f64>) -> Vec<Value> {
        regions
            .iter()
            .map(|region| {
                let value = values.get(region).copied().unwrap_or(0.0);
                json!({ "name": region, "value": value })
            })
            .collect()
    }

    /// Min/max across all resolved values, zeros excluded ("no data"), then
    /// padded to `(floor(min*0.9), ceil(max*1.1))`.
    fn value_range(all_values: &[f64]) -> (f64, f64) {
        let non_zero: Vec<f64> = all_values.iter().copied().filter(|v| *v != 0.0).collect();
        let min = non_zero.iter().copied().map(OrderedFloat).min();
        let max = non_zero.iter().copied().map(OrderedFloat).max();
        match (min, max) {
            (Some(min), Some(max)) => ((min.0 * 0.9).floor(), (max.0 * 1.1).ceil()),
            _ => DEFAULT_RANGE,
        }
    }

    fn series_defaults(&self, entry: &Map<String, Value>, index: usize, map_name: &str) -> Value {
        json!({
            "name": series_name(entry, LABEL, index),
            "type": "map",
            "map": map_name,
            "roam": true,
            "zoom": 1.0,
            "label": {
                "show": true,
                "color": self.colors.theme.text,
                "fontSize": 10,
            },
            "itemStyle": {
                "areaColor": self.colors.theme.background,
                "borderColor": self.colors.theme.border,
                "borderWidth": 0.8,
            },
            "emphasis": {
                "label": { "color": self.colors.tooltip.text },
                "itemStyle": { "areaColor": self.colors.accent },
            },
        })
    }
}

impl ChartTransformer for MapTransformer {
    fn kind(&self) -> ChartKind {
        ChartKind::Map
    }

    fn transform(&self, input: &Value) -> ChartResult<Value> {
        let map_name = input
            .get("mapName")
            .and_then(Value::as_str)
            .unwrap_or(&self.default_map)
            .to_owned();

        // Fatal on fetch/decode failure: a defaulted region set would
        // silently mislead the rendered output.
        let document = self.geo.document(&map_name)?;
        let regions = document.region_names();
        debug!(
            map = map_name.as_str(),
            regions = regions.len(),
            "resolved geo region list"
        );

        let mut all_values: Vec<f64> = Vec::new();
        let mut series_out: Vec<Value> = Vec::new();
        for (s_idx, entry) in data_series(input).into_iter().enumerate() {
            let values = Self::region_values(entry);
            let data = Self::joined_data(&regions, &values);
            all_values.extend(data.iter().filter_map(|item| {
                item.get("value").and_then(crate::merge::lenient_f64)
            }));

            let mut merged = resolved_series(self.series_defaults(entry, s_idx, &map_name), entry);
            if let Some(obj) = merged.as_object_mut() {
                obj.insert("data".to_owned(), Value::Array(data));
            }
            series_out.push(merged);
        }

        let (min, max) = Self::value_range(&all_values);

        let mut out = scaffold::apply(&self.colors, TooltipTrigger::Item, input);
        out.insert(
            "visualMap".to_owned(),
            merged_section(
                input,
                "visualMap",
                json!({
                    "show": true,
                    "min": min,
                    "max": max,
                    "calculable": true,
                    "left": "2%",
                    "bottom": "2%",
                    "inRange": { "color": self.colors.map_gradient },
                    "textStyle": { "color": self.colors.theme.text },
                }),
            ),
        );
        // Side-channel fields for the renderer: the resolved document and
        // the map name it should be registered under.
        out.insert("mapName".to_owned(), json!(map_name));
        let geo_value = serde_json::to_value(&document).map_err(|e| {
            crate::error::ChartError::InvalidData(format!("failed to serialize geo document: {e}"))
        })?;
        out.insert("mapGeoJson".to_owned(), geo_value);
        out.insert("series".to_owned(), Value::Array(series_out));
        Ok(Value::Object(out))
    }
}

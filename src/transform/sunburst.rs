//! Sunburst transformer. Same hierarchical defaulting as tree, without the
//! symbol sizing; sector opacity fades toward the rim.

use serde_json::{Map, Value, json};

use crate::error::ChartResult;
use crate::palette::ColorConfig;
use crate::scaffold::{self, TooltipTrigger};

use super::hierarchy::{DepthStyle, default_nodes};
use super::{ChartKind, ChartTransformer, data_series, resolved_series, series_data, series_name};

const LABEL: &str = "Sector";

const DEPTH_STYLE: DepthStyle = DepthStyle {
    base_opacity: 1.0,
    opacity_step: 0.15,
    min_opacity: 0.4,
    base_font_size: 14.0,
    font_step: 2.0,
    min_font_size: 10.0,
    symbol: None,
};

pub struct SunburstTransformer {
    colors: ColorConfig,
}

impl SunburstTransformer {
    #[must_use]
    pub fn new(colors: ColorConfig) -> Self {
        Self { colors }
    }

    fn series_defaults(&self, entry: &Map<String, Value>, index: usize) -> Value {
        json!({
            "name": series_name(entry, "Sunburst", index),
            "type": "sunburst",
            "radius": ["15%", "90%"],
            "center": ["50%", "50%"],
            "sort": null,
            "itemStyle": {
                "borderColor": self.colors.theme.background,
                "borderWidth": 1,
            },
            "emphasis": { "focus": "ancestor" },
        })
    }
}

impl ChartTransformer for SunburstTransformer {
    fn kind(&self) -> ChartKind {
        ChartKind::Sunburst
    }

    fn transform(&self, input: &Value) -> ChartResult<Value> {
        let mut series_out: Vec<Value> = Vec::new();

        for (s_idx, entry) in data_series(input).into_iter().enumerate() {
            let roots = default_nodes(&self.colors, series_data(entry), LABEL, &DEPTH_STYLE);

            let mut merged = resolved_series(self.series_defaults(entry, s_idx), entry);
            if let Some(obj) = merged.as_object_mut() {
                obj.insert("data".to_owned(), Value::Array(roots));
            }
            series_out.push(merged);
        }

        let mut out = scaffold::apply(&self.colors, TooltipTrigger::Item, input);
        out.insert("series".to_owned(), Value::Array(series_out));
        Ok(Value::Object(out))
    }
}

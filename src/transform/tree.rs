//! Tree transformer. Hierarchical node data defaulted depth-first with the
//! shared work-stack walker; symbol and label sizes shrink with depth.

use serde_json::{Map, Value, json};

use crate::error::ChartResult;
use crate::palette::ColorConfig;
use crate::scaffold::{self, TooltipTrigger};

use super::hierarchy::{DepthStyle, default_nodes};
use super::{ChartKind, ChartTransformer, data_series, resolved_series, series_data, series_name};

const LABEL: &str = "Node";

const DEPTH_STYLE: DepthStyle = DepthStyle {
    base_opacity: 1.0,
    opacity_step: 0.1,
    min_opacity: 0.5,
    base_font_size: 14.0,
    font_step: 1.0,
    min_font_size: 10.0,
    symbol: Some((14.0, 2.0, 4.0)),
};

pub struct TreeTransformer {
    colors: ColorConfig,
}

impl TreeTransformer {
    #[must_use]
    pub fn new(colors: ColorConfig) -> Self {
        Self { colors }
    }

    fn series_defaults(&self, entry: &Map<String, Value>, index: usize) -> Value {
        json!({
            "name": series_name(entry, "Tree", index),
            "type": "tree",
            "layout": "orthogonal",
            "orient": "LR",
            "symbol": "emptyCircle",
            "expandAndCollapse": true,
            "roam": true,
            "lineStyle": {
                "color": self.colors.theme.border,
                "width": 1.5,
                "curveness": 0.5,
            },
            "leaves": {
                "label": { "position": "right" },
            },
            "emphasis": { "focus": "descendant" },
        })
    }
}

impl ChartTransformer for TreeTransformer {
    fn kind(&self) -> ChartKind {
        ChartKind::Tree
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

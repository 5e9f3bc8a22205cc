//! Sankey transformer. Nodes and links are defaulted independently; node
//! colors cycle the palette, link style has its own fixed fallback.

use serde_json::{Map, Value, json};

use crate::error::ChartResult;
use crate::palette::ColorConfig;
use crate::scaffold::{self, TooltipTrigger};

use super::{ChartKind, ChartTransformer, ensure_style_color, resolved_series, series_list};

const LABEL: &str = "Node";

pub struct SankeyTransformer {
    colors: ColorConfig,
}

impl SankeyTransformer {
    #[must_use]
    pub fn new(colors: ColorConfig) -> Self {
        Self { colors }
    }

    fn nodes(&self, root: &Map<String, Value>) -> Vec<Value> {
        root.get("data")
            .or_else(|| root.get("nodes"))
            .and_then(Value::as_array)
            .map_or(&[][..], Vec::as_slice)
            .iter()
            .enumerate()
            .map(|(i, raw)| {
                // Sankey nodes carry no default value; a zero would render as
                // a degenerate bar, so only `name` is guaranteed here.
                let mut node = match raw {
                    Value::Object(map) => {
                        let mut m = map.clone();
                        m.entry("name".to_owned())
                            .or_insert_with(|| json!(format!("{LABEL} {}", i + 1)));
                        m
                    }
                    Value::String(s) if !s.trim().is_empty() => {
                        let mut m = Map::new();
                        m.insert("name".to_owned(), json!(s));
                        m
                    }
                    _ => {
                        let mut m = Map::new();
                        m.insert("name".to_owned(), json!(format!("{LABEL} {}", i + 1)));
                        m
                    }
                };
                ensure_style_color(&mut node, "itemStyle", self.colors.series_color(i));
                Value::Object(node)
            })
            .collect()
    }

    fn links(&self, root: &Map<String, Value>) -> Vec<Value> {
        root.get("links")
            .or_else(|| root.get("edges"))
            .and_then(Value::as_array)
            .map_or(&[][..], Vec::as_slice)
            .iter()
            .filter_map(Value::as_object)
            .filter(|link| link.contains_key("source") && link.contains_key("target"))
            .map(|link| {
                let mut l = link.clone();
                l.entry("value".to_owned()).or_insert_with(|| json!(0));
                let style = l
                    .entry("lineStyle".to_owned())
                    .or_insert_with(|| Value::Object(Map::new()));
                if let Some(style) = style.as_object_mut() {
                    style
                        .entry("color".to_owned())
                        .or_insert_with(|| json!("gradient"));
                    style
                        .entry("opacity".to_owned())
                        .or_insert_with(|| json!(0.4));
                    style
                        .entry("curveness".to_owned())
                        .or_insert_with(|| json!(0.5));
                }
                Value::Object(l)
            })
            .collect()
    }

    fn series_defaults(&self, entry: &Map<String, Value>) -> Value {
        json!({
            "name": super::series_name(entry, "Sankey", 0),
            "type": "sankey",
            "left": "10%",
            "right": "10%",
            "nodeWidth": 20,
            "nodeGap": 8,
            "label": {
                "show": true,
                "color": self.colors.theme.text,
                "fontSize": 12,
            },
            "emphasis": { "focus": "adjacency" },
        })
    }
}

impl ChartTransformer for SankeyTransformer {
    fn kind(&self) -> ChartKind {
        ChartKind::Sankey
    }

    fn transform(&self, input: &Value) -> ChartResult<Value> {
        let empty = Map::new();
        let entry: &Map<String, Value> = series_list(input)
            .first()
            .and_then(Value::as_object)
            .unwrap_or(&empty);
        let has_lists = ["data", "nodes", "links", "edges"]
            .iter()
            .any(|key| entry.contains_key(*key));
        let root: &Map<String, Value> = if has_lists {
            entry
        } else {
            input.as_object().unwrap_or(&empty)
        };

        let mut series_out: Vec<Value> = Vec::new();
        let nodes = self.nodes(root);
        if !nodes.is_empty() {
            let mut merged = resolved_series(self.series_defaults(entry), entry);
            if let Some(obj) = merged.as_object_mut() {
                obj.remove("nodes");
                obj.remove("edges");
                obj.insert("data".to_owned(), Value::Array(nodes));
                obj.insert("links".to_owned(), Value::Array(self.links(root)));
            }
            series_out.push(merged);
        }

        let mut out = scaffold::apply(&self.colors, TooltipTrigger::Item, input);
        out.insert("series".to_owned(), Value::Array(series_out));
        Ok(Value::Object(out))
    }
}

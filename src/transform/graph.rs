//! Graph (force layout) transformer. Nodes, links and categories are
//! defaulted independently, then recombined into a single series.
//!
//! Node color resolution order: explicit node color, then the referenced
//! category's resolved color, then the cyclic palette. The category list is
//! the one fallback list that is never left empty: a fully absent/filtered
//! list is replaced with a single synthetic default category.

use serde_json::{Map, Value, json};

use crate::error::ChartResult;
use crate::merge::get_f64;
use crate::palette::ColorConfig;
use crate::scaffold::{self, TooltipTrigger};
use crate::shape::named_item;

use super::{
    ChartKind, ChartTransformer, ensure_style_color, resolved_series, series_list, style_color,
};

const LABEL: &str = "Node";
const DEFAULT_LINK_OPACITY: f64 = 0.6;

pub struct GraphTransformer {
    colors: ColorConfig,
}

impl GraphTransformer {
    #[must_use]
    pub fn new(colors: ColorConfig) -> Self {
        Self { colors }
    }

    fn categories(&self, root: &Map<String, Value>) -> Vec<Value> {
        let mut out: Vec<Value> = root
            .get("categories")
            .and_then(Value::as_array)
            .map_or(&[][..], Vec::as_slice)
            .iter()
            .filter_map(Value::as_object)
            .enumerate()
            .map(|(i, category)| {
                let mut c = category.clone();
                c.entry("name".to_owned())
                    .or_insert_with(|| json!(format!("Category {}", i + 1)));
                ensure_style_color(&mut c, "itemStyle", self.colors.series_color(i));
                Value::Object(c)
            })
            .collect();

        if out.is_empty() {
            out.push(json!({
                "name": "Category 1",
                "itemStyle": { "color": self.colors.series_color(0) },
            }));
        }
        out
    }

    fn nodes(&self, root: &Map<String, Value>, categories: &[Value]) -> Vec<Value> {
        let raw = root
            .get("data")
            .or_else(|| root.get("nodes"))
            .and_then(Value::as_array)
            .map_or(&[][..], Vec::as_slice);

        raw.iter()
            .enumerate()
            .map(|(i, raw_node)| {
                let mut node = named_item(raw_node, LABEL, i);
                let fallback = match style_color(&node, "itemStyle") {
                    Some(explicit) => explicit,
                    None => self
                        .category_color(&node, categories)
                        .unwrap_or_else(|| self.colors.series_color(i).to_owned()),
                };
                ensure_style_color(&mut node, "itemStyle", &fallback);
                node.entry("symbolSize".to_owned()).or_insert_with(|| json!(30));
                Value::Object(node)
            })
            .collect()
    }

    fn category_color(&self, node: &Map<String, Value>, categories: &[Value]) -> Option<String> {
        let index = get_f64(node, "category")? as usize;
        let category = categories.get(index)?.as_object()?;
        style_color(category, "itemStyle")
    }

    fn links(&self, root: &Map<String, Value>) -> Vec<Value> {
        let raw = root
            .get("links")
            .or_else(|| root.get("edges"))
            .and_then(Value::as_array)
            .map_or(&[][..], Vec::as_slice);

        raw.iter()
            .filter_map(Value::as_object)
            .filter(|link| link.contains_key("source") && link.contains_key("target"))
            .map(|link| {
                let mut l = link.clone();
                // Link color falls back on its own, independent of endpoints.
                let style = l
                    .entry("lineStyle".to_owned())
                    .or_insert_with(|| Value::Object(Map::new()));
                if let Some(style) = style.as_object_mut() {
                    style
                        .entry("color".to_owned())
                        .or_insert_with(|| json!(self.colors.theme.border));
                    style
                        .entry("opacity".to_owned())
                        .or_insert_with(|| json!(DEFAULT_LINK_OPACITY));
                    style
                        .entry("curveness".to_owned())
                        .or_insert_with(|| json!(0.3));
                }
                Value::Object(l)
            })
            .collect()
    }

    fn series_defaults(&self, entry: &Map<String, Value>) -> Value {
        json!({
            "name": super::series_name(entry, "Graph", 0),
            "type": "graph",
            "layout": "force",
            "roam": true,
            "draggable": true,
            "force": {
                "repulsion": 200,
                "edgeLength": 80,
                "gravity": 0.1,
            },
            "label": {
                "show": true,
                "position": "right",
                "color": self.colors.theme.text,
                "fontSize": 12,
            },
            "emphasis": { "focus": "adjacency" },
        })
    }
}

impl ChartTransformer for GraphTransformer {
    fn kind(&self) -> ChartKind {
        ChartKind::Graph
    }

    fn transform(&self, input: &Value) -> ChartResult<Value> {
        // Node/link/category lists live on the first series entry; bare
        // top-level lists are accepted as a convenience.
        let empty = Map::new();
        let entry: &Map<String, Value> = series_list(input)
            .first()
            .and_then(Value::as_object)
            .unwrap_or(&empty);
        let has_lists = ["data", "nodes", "links", "edges", "categories"]
            .iter()
            .any(|key| entry.contains_key(*key));
        let root: &Map<String, Value> = if has_lists {
            entry
        } else {
            input.as_object().unwrap_or(&empty)
        };

        let mut series_out: Vec<Value> = Vec::new();
        let categories = self.categories(root);
        let nodes = self.nodes(root, &categories);
        if !nodes.is_empty() {
            let mut merged = resolved_series(self.series_defaults(entry), entry);
            if let Some(obj) = merged.as_object_mut() {
                obj.remove("nodes");
                obj.remove("edges");
                obj.insert("data".to_owned(), Value::Array(nodes));
                obj.insert("links".to_owned(), Value::Array(self.links(root)));
                obj.insert("categories".to_owned(), Value::Array(categories));
            }
            series_out.push(merged);
        }

        let mut out = scaffold::apply(&self.colors, TooltipTrigger::Item, input);
        out.insert("series".to_owned(), Value::Array(series_out));
        Ok(Value::Object(out))
    }
}

//! Iterative defaulting for hierarchical node trees (tree, sunburst).
//!
//! Nodes are walked with an explicit work stack, so arbitrarily deep caller
//! input cannot overflow the call stack. Color index for a node is
//! `(depth + sibling_index) % palette_len`; this reuses colors across
//! branches at different depths, which is the documented behavior. Opacity
//! and label font size shrink linearly with depth, clamped at a floor.

use serde_json::{Map, Value, json};

use crate::merge::deep_merge;
use crate::palette::ColorConfig;
use crate::shape::named_item;

use super::ensure_style_color;

/// Depth-dependent styling knobs for one hierarchical family.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DepthStyle {
    pub base_opacity: f64,
    pub opacity_step: f64,
    pub min_opacity: f64,
    pub base_font_size: f64,
    pub font_step: f64,
    pub min_font_size: f64,
    /// Symbol size shrink (tree only): `(base, step, min)`.
    pub symbol: Option<(f64, f64, f64)>,
}

impl DepthStyle {
    fn opacity(&self, depth: usize) -> f64 {
        (self.base_opacity - depth as f64 * self.opacity_step).max(self.min_opacity)
    }

    fn font_size(&self, depth: usize) -> f64 {
        (self.base_font_size - depth as f64 * self.font_step).max(self.min_font_size)
    }
}

struct Frame<'a> {
    item: Map<String, Value>,
    raw_children: std::slice::Iter<'a, Value>,
    children_out: Vec<Value>,
    depth: usize,
    next_child_index: usize,
}

/// Defaults every root (and its descendants) independently.
pub(crate) fn default_nodes(
    colors: &ColorConfig,
    roots: &[Value],
    label: &str,
    style: &DepthStyle,
) -> Vec<Value> {
    roots
        .iter()
        .enumerate()
        .map(|(i, root)| default_subtree(colors, root, label, i, style))
        .collect()
}

fn default_subtree(
    colors: &ColorConfig,
    root: &Value,
    label: &str,
    root_index: usize,
    style: &DepthStyle,
) -> Value {
    let mut stack: Vec<Frame<'_>> = vec![frame_for(colors, root, label, 0, root_index, style)];

    loop {
        let pending = match stack.last_mut() {
            Some(top) => top.raw_children.next().map(|raw_child| {
                let sibling_index = top.next_child_index;
                top.next_child_index += 1;
                (raw_child, top.depth + 1, sibling_index)
            }),
            None => return Value::Object(Map::new()),
        };

        match pending {
            Some((raw_child, depth, sibling_index)) => {
                stack.push(frame_for(colors, raw_child, label, depth, sibling_index, style));
            }
            None => {
                let Some(done) = stack.pop() else {
                    return Value::Object(Map::new());
                };
                let mut item = done.item;
                if !done.children_out.is_empty() {
                    item.insert("children".to_owned(), Value::Array(done.children_out));
                }
                match stack.last_mut() {
                    Some(parent) => parent.children_out.push(Value::Object(item)),
                    None => return Value::Object(item),
                }
            }
        }
    }
}

fn frame_for<'a>(
    colors: &ColorConfig,
    raw: &'a Value,
    label: &str,
    depth: usize,
    sibling_index: usize,
    style: &DepthStyle,
) -> Frame<'a> {
    // Shallow per-node normalization; children stay borrowed so deep trees
    // are cloned once, not once per ancestor level.
    let (mut item, raw_children): (Map<String, Value>, &'a [Value]) = match raw {
        Value::Object(map) => {
            let mut m = Map::new();
            let mut children: &'a [Value] = &[];
            for (key, value) in map {
                if key == "children" {
                    if let Value::Array(list) = value {
                        children = list.as_slice();
                    }
                    continue;
                }
                m.insert(key.clone(), value.clone());
            }
            m.entry("name".to_owned())
                .or_insert_with(|| json!(format!("{label} {}", sibling_index + 1)));
            m.entry("value".to_owned()).or_insert_with(|| json!(0));
            (m, children)
        }
        other => (named_item(other, label, sibling_index), &[]),
    };

    let palette_len = colors.series.len().max(1);
    let color_index = (depth + sibling_index) % palette_len;
    ensure_style_color(&mut item, "itemStyle", colors.series_color(color_index));
    if let Some(item_style) = item.get_mut("itemStyle").and_then(Value::as_object_mut) {
        item_style
            .entry("opacity".to_owned())
            .or_insert_with(|| json!(style.opacity(depth)));
    }

    let label_defaults = json!({
        "show": true,
        "color": colors.theme.text,
        "fontSize": style.font_size(depth),
    });
    let caller_label = item.remove("label").unwrap_or(Value::Null);
    item.insert(
        "label".to_owned(),
        deep_merge(label_defaults, &caller_label),
    );

    if let Some((base, step, min)) = style.symbol {
        item.entry("symbolSize".to_owned())
            .or_insert_with(|| json!((base - depth as f64 * step).max(min)));
    }

    Frame {
        item,
        raw_children: raw_children.iter(),
        children_out: Vec::new(),
        depth,
        next_child_index: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> DepthStyle {
        DepthStyle {
            base_opacity: 1.0,
            opacity_step: 0.15,
            min_opacity: 0.4,
            base_font_size: 14.0,
            font_step: 2.0,
            min_font_size: 10.0,
            symbol: None,
        }
    }

    #[test]
    fn color_index_combines_depth_and_sibling_index() {
        let colors = ColorConfig::default();
        let roots = vec![json!({
            "name": "root",
            "children": [{"name": "a"}, {"name": "b"}],
        })];
        let out = default_nodes(&colors, &roots, "Node", &style());
        let root = out[0].as_object().expect("root object");
        assert_eq!(
            root["itemStyle"]["color"],
            json!(colors.series_color(0)),
            "root: depth 0 + index 0"
        );
        let children = root["children"].as_array().expect("children");
        // depth 1 + sibling 0 and depth 1 + sibling 1
        assert_eq!(children[0]["itemStyle"]["color"], json!(colors.series_color(1)));
        assert_eq!(children[1]["itemStyle"]["color"], json!(colors.series_color(2)));
    }

    #[test]
    fn opacity_and_font_clamp_at_floor() {
        let s = style();
        assert!((s.opacity(0) - 1.0).abs() < 1e-9);
        assert!((s.opacity(2) - 0.7).abs() < 1e-9);
        assert!((s.opacity(50) - 0.4).abs() < 1e-9);
        assert!((s.font_size(50) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn caller_label_fields_survive_depth_defaults() {
        let colors = ColorConfig::default();
        let roots = vec![json!({"name": "r", "label": {"fontSize": 30}})];
        let out = default_nodes(&colors, &roots, "Node", &style());
        assert_eq!(out[0]["label"]["fontSize"], 30);
        assert_eq!(out[0]["label"]["show"], true);
    }
}

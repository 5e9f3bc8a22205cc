//! Family-independent chart scaffold: title, legend, grid, toolbox, tooltip.
//!
//! Defaults are built first, then the caller's sections are merged over them,
//! so caller overrides win at every depth while sibling defaults still fill
//! in. Unmanaged top-level keys pass through untouched.

use serde_json::{Map, Value, json};

use crate::merge::{deep_merge, merged_section};
use crate::palette::ColorConfig;

/// Tooltip trigger tag attached per family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipTrigger {
    Item,
    Axis,
}

impl TooltipTrigger {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Axis => "axis",
        }
    }
}

/// Keys owned by the scaffold merge; everything else passes through verbatim.
const MANAGED_KEYS: [&str; 6] = ["title", "legend", "grid", "toolbox", "tooltip", "color"];

/// Builds the defaulted chart-level scaffold for one transform call.
///
/// The result starts from the caller's top-level object (preserving unknown
/// keys), then rewrites each managed section with defaults merged under the
/// caller's values. `series` and axes are the family's responsibility and are
/// left for the caller of this function to overwrite.
#[must_use]
pub fn apply(colors: &ColorConfig, trigger: TooltipTrigger, input: &Value) -> Map<String, Value> {
    let mut out = input.as_object().cloned().unwrap_or_default();

    out.insert(
        "title".to_owned(),
        merged_section(input, "title", title_defaults(colors)),
    );
    out.insert(
        "legend".to_owned(),
        merged_section(input, "legend", legend_defaults(colors)),
    );
    out.insert(
        "grid".to_owned(),
        merged_section(input, "grid", grid_defaults()),
    );
    out.insert(
        "toolbox".to_owned(),
        merged_section(input, "toolbox", toolbox_defaults()),
    );
    out.insert(
        "tooltip".to_owned(),
        merged_section(input, "tooltip", tooltip_defaults(colors, trigger)),
    );

    // Top-level palette: only when the caller did not bring their own.
    if !out.get("color").is_some_and(Value::is_array) {
        out.insert("color".to_owned(), json!(colors.series));
    }

    debug_assert!(MANAGED_KEYS.iter().all(|k| out.contains_key(*k)));
    out
}

fn title_defaults(colors: &ColorConfig) -> Value {
    json!({
        "show": true,
        "text": "",
        "left": "center",
        "top": "3%",
        "textStyle": {
            "color": colors.theme.text,
            "fontSize": 18,
            "fontWeight": "bold",
        },
    })
}

fn legend_defaults(colors: &ColorConfig) -> Value {
    json!({
        "show": true,
        "bottom": "2%",
        "icon": "circle",
        "textStyle": {
            "color": colors.theme.text,
            "fontSize": 12,
        },
    })
}

fn grid_defaults() -> Value {
    json!({
        "show": false,
        "left": "10%",
        "right": "10%",
        "top": "15%",
        "bottom": "12%",
        "containLabel": true,
    })
}

fn toolbox_defaults() -> Value {
    json!({
        "show": false,
        "feature": {
            "saveAsImage": { "show": true },
        },
    })
}

fn tooltip_defaults(colors: &ColorConfig, trigger: TooltipTrigger) -> Value {
    json!({
        "show": true,
        "trigger": trigger.as_str(),
        "backgroundColor": colors.tooltip.background,
        "borderColor": colors.theme.border,
        "textStyle": {
            "color": colors.tooltip.text,
            "fontSize": 12,
        },
    })
}

/// Category axis defaults with the given category labels.
#[must_use]
pub fn category_axis(colors: &ColorConfig, data: Vec<Value>) -> Value {
    let mut axis = axis_base(colors);
    if let Some(map) = axis.as_object_mut() {
        map.insert("type".to_owned(), json!("category"));
        map.insert("boundaryGap".to_owned(), json!(true));
        map.insert("data".to_owned(), Value::Array(data));
    }
    axis
}

/// Value axis defaults.
#[must_use]
pub fn value_axis(colors: &ColorConfig) -> Value {
    let mut axis = axis_base(colors);
    if let Some(map) = axis.as_object_mut() {
        map.insert("type".to_owned(), json!("value"));
        map.insert(
            "splitLine".to_owned(),
            json!({
                "show": true,
                "lineStyle": { "color": colors.theme.border, "type": "dashed" },
            }),
        );
    }
    axis
}

fn axis_base(colors: &ColorConfig) -> Value {
    json!({
        "show": true,
        "axisLine": {
            "show": true,
            "lineStyle": { "color": colors.theme.axis },
        },
        "axisTick": { "show": false },
        "axisLabel": {
            "show": true,
            "color": colors.theme.text,
            "fontSize": 12,
        },
    })
}

/// Resolves one axis section: family default merged under the caller's axis
/// object (if present).
#[must_use]
pub fn merged_axis(input: &Value, key: &str, defaults: Value) -> Value {
    match input.get(key) {
        Some(axis) => deep_merge(defaults, axis),
        None => defaults,
    }
}

//! Chart option transformers, one per chart family.
//!
//! Every transformer implements [`ChartTransformer`]: take a partial
//! configuration tree, return a fully defaulted one. Inputs are never
//! mutated. Only the map family can actually fail (geo fetch); the trait is
//! fallible uniformly so callers dispatch without special cases.

use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::{ChartError, ChartResult};
use crate::geo::GeoSource;
use crate::merge::deep_merge;
use crate::palette::ColorConfig;

pub mod bar;
pub mod boxplot;
pub mod candlestick;
pub mod funnel;
pub mod gauge;
pub mod graph;
pub mod heatmap;
pub(crate) mod hierarchy;
pub mod line;
pub mod line_bar;
pub mod liquid;
pub mod map;
pub mod parallel;
pub mod pie;
pub mod radar;
pub mod ring_progress;
pub mod sankey;
pub mod scatter;
pub mod sunburst;
pub mod theme_river;
pub mod tree;

pub use bar::BarTransformer;
pub use boxplot::BoxplotTransformer;
pub use candlestick::CandlestickTransformer;
pub use funnel::FunnelTransformer;
pub use gauge::GaugeTransformer;
pub use graph::GraphTransformer;
pub use heatmap::HeatmapTransformer;
pub use line::LineTransformer;
pub use line_bar::LineBarTransformer;
pub use liquid::LiquidTransformer;
pub use map::MapTransformer;
pub use parallel::ParallelTransformer;
pub use pie::PieTransformer;
pub use radar::RadarTransformer;
pub use ring_progress::RingProgressTransformer;
pub use sankey::SankeyTransformer;
pub use scatter::ScatterTransformer;
pub use sunburst::SunburstTransformer;
pub use theme_river::ThemeRiverTransformer;
pub use tree::TreeTransformer;

/// One supported chart family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Scatter,
    Boxplot,
    Candlestick,
    Funnel,
    Gauge,
    Graph,
    Heatmap,
    Map,
    LineBar,
    Parallel,
    Radar,
    RingProgress,
    Sankey,
    Sunburst,
    ThemeRiver,
    Tree,
    LiquidFill,
}

impl ChartKind {
    pub const ALL: [ChartKind; 20] = [
        ChartKind::Bar,
        ChartKind::Line,
        ChartKind::Pie,
        ChartKind::Scatter,
        ChartKind::Boxplot,
        ChartKind::Candlestick,
        ChartKind::Funnel,
        ChartKind::Gauge,
        ChartKind::Graph,
        ChartKind::Heatmap,
        ChartKind::Map,
        ChartKind::LineBar,
        ChartKind::Parallel,
        ChartKind::Radar,
        ChartKind::RingProgress,
        ChartKind::Sankey,
        ChartKind::Sunburst,
        ChartKind::ThemeRiver,
        ChartKind::Tree,
        ChartKind::LiquidFill,
    ];

    /// Stable registry key for this family.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Pie => "pie",
            Self::Scatter => "scatter",
            Self::Boxplot => "boxplot",
            Self::Candlestick => "candlestick",
            Self::Funnel => "funnel",
            Self::Gauge => "gauge",
            Self::Graph => "graph",
            Self::Heatmap => "heatmap",
            Self::Map => "map",
            Self::LineBar => "line-bar",
            Self::Parallel => "parallel",
            Self::Radar => "radar",
            Self::RingProgress => "ring-progress",
            Self::Sankey => "sankey",
            Self::Sunburst => "sunburst",
            Self::ThemeRiver => "theme-river",
            Self::Tree => "tree",
            Self::LiquidFill => "liquid-fill",
        }
    }

    /// Parses a registry key back into a kind.
    #[must_use]
    pub fn from_str_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == key)
    }
}

/// A pure chart-family transformer.
pub trait ChartTransformer {
    fn kind(&self) -> ChartKind;

    /// Fills defaults into `input`, returning a renderer-ready option tree.
    fn transform(&self, input: &Value) -> ChartResult<Value>;
}

/// All family transformers behind one dispatch table.
pub struct TransformerRegistry {
    transformers: IndexMap<ChartKind, Box<dyn ChartTransformer + Send + Sync>>,
}

impl TransformerRegistry {
    /// Builds the full registry. `geo` and `default_map` serve the map
    /// family only; every other transformer just takes the color config.
    #[must_use]
    pub fn new(
        colors: ColorConfig,
        geo: Arc<dyn GeoSource + Send + Sync>,
        default_map: impl Into<String>,
    ) -> Self {
        let c = &colors;
        let mut transformers: IndexMap<ChartKind, Box<dyn ChartTransformer + Send + Sync>> =
            IndexMap::new();
        let boxed: Vec<Box<dyn ChartTransformer + Send + Sync>> = vec![
            Box::new(BarTransformer::new(c.clone())),
            Box::new(LineTransformer::new(c.clone())),
            Box::new(PieTransformer::new(c.clone())),
            Box::new(ScatterTransformer::new(c.clone())),
            Box::new(BoxplotTransformer::new(c.clone())),
            Box::new(CandlestickTransformer::new(c.clone())),
            Box::new(FunnelTransformer::new(c.clone())),
            Box::new(GaugeTransformer::new(c.clone())),
            Box::new(GraphTransformer::new(c.clone())),
            Box::new(HeatmapTransformer::new(c.clone())),
            Box::new(MapTransformer::new(c.clone(), geo, default_map.into())),
            Box::new(LineBarTransformer::new(c.clone())),
            Box::new(ParallelTransformer::new(c.clone())),
            Box::new(RadarTransformer::new(c.clone())),
            Box::new(RingProgressTransformer::new(c.clone())),
            Box::new(SankeyTransformer::new(c.clone())),
            Box::new(SunburstTransformer::new(c.clone())),
            Box::new(ThemeRiverTransformer::new(c.clone())),
            Box::new(TreeTransformer::new(c.clone())),
            Box::new(LiquidTransformer::new(c.clone())),
        ];
        for transformer in boxed {
            transformers.insert(transformer.kind(), transformer);
        }
        Self { transformers }
    }

    #[must_use]
    pub fn get(&self, kind: ChartKind) -> Option<&(dyn ChartTransformer + Send + Sync)> {
        self.transformers.get(&kind).map(|boxed| boxed.as_ref())
    }

    /// Transforms `input` with the family transformer for `kind`.
    pub fn transform(&self, kind: ChartKind, input: &Value) -> ChartResult<Value> {
        match self.get(kind) {
            Some(transformer) => transformer.transform(input),
            None => Err(ChartError::InvalidData(format!(
                "no transformer registered for kind {}",
                kind.as_str()
            ))),
        }
    }

    /// Transforms by registry key, for callers holding a type tag string.
    pub fn transform_by_key(&self, key: &str, input: &Value) -> ChartResult<Value> {
        let kind = ChartKind::from_str_key(key)
            .ok_or_else(|| ChartError::InvalidData(format!("unknown chart kind \"{key}\"")))?;
        self.transform(kind, input)
    }

    /// Registered kinds, in registration order.
    pub fn kinds(&self) -> impl Iterator<Item = ChartKind> + '_ {
        self.transformers.keys().copied()
    }
}

// ---- shared helpers used across family modules ----

/// The raw `series` array, or empty when absent/not an array.
pub(crate) fn series_list(input: &Value) -> &[Value] {
    input
        .get("series")
        .and_then(Value::as_array)
        .map_or(&[], Vec::as_slice)
}

/// Series entries retained for output: objects whose `data` is a non-empty
/// array. Everything else is dropped, not passed through empty.
pub(crate) fn data_series(input: &Value) -> Vec<&Map<String, Value>> {
    series_list(input)
        .iter()
        .filter_map(Value::as_object)
        .filter(|entry| {
            entry
                .get("data")
                .and_then(Value::as_array)
                .is_some_and(|data| !data.is_empty())
        })
        .collect()
}

/// Series display name: caller's, else `"<FamilyLabel> <1-based index>"`.
pub(crate) fn series_name(entry: &Map<String, Value>, label: &str, index: usize) -> String {
    match entry.get("name").and_then(Value::as_str) {
        Some(name) if !name.is_empty() => name.to_owned(),
        _ => format!("{label} {}", index + 1),
    }
}

/// The series' `data` array (validated non-empty by [`data_series`]).
pub(crate) fn series_data<'a>(entry: &'a Map<String, Value>) -> &'a [Value] {
    entry
        .get("data")
        .and_then(Value::as_array)
        .map_or(&[], Vec::as_slice)
}

/// Explicit color under `entry[style_key].color`, if any.
pub(crate) fn style_color(entry: &Map<String, Value>, style_key: &str) -> Option<String> {
    entry
        .get(style_key)?
        .as_object()?
        .get("color")?
        .as_str()
        .map(str::to_owned)
}

/// Inserts `color` under `item[style_key].color` unless the caller already
/// set one; other style sub-fields are preserved.
pub(crate) fn ensure_style_color(item: &mut Map<String, Value>, style_key: &str, color: &str) {
    let style = item
        .entry(style_key.to_owned())
        .or_insert_with(|| Value::Object(Map::new()));
    if !style.is_object() {
        return;
    }
    if let Some(style) = style.as_object_mut() {
        style
            .entry("color".to_owned())
            .or_insert_with(|| Value::String(color.to_owned()));
    }
}

/// Builds a resolved series entry: family defaults merged under the caller's
/// series object, so caller leaves win at every depth.
pub(crate) fn resolved_series(defaults: Value, entry: &Map<String, Value>) -> Value {
    deep_merge(defaults, &Value::Object(entry.clone()))
}

/// Reads one tuple-shaped item as a numeric row of exactly `arity` values.
///
/// Non-array and empty-array items yield `None` (the tuple families drop
/// them); short rows are zero-filled, long rows truncated, and non-numeric
/// cells read as zero.
pub(crate) fn numeric_row(raw: &Value, arity: usize) -> Option<Vec<f64>> {
    let cells = raw.as_array()?;
    if cells.is_empty() {
        return None;
    }
    let mut row: Vec<f64> = cells
        .iter()
        .take(arity)
        .map(|cell| crate::merge::lenient_f64(cell).unwrap_or(0.0))
        .collect();
    row.resize(arity, 0.0);
    Some(row)
}

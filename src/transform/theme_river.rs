//! Theme-river transformer. Rows are `[time, value, label]` triples drawn on
//! a single time axis; all retained series flatten into one river.

use serde_json::{Value, json};

use crate::error::ChartResult;
use crate::merge::{label_string, lenient_f64, merged_section};
use crate::palette::ColorConfig;
use crate::scaffold::{self, TooltipTrigger};
use crate::shape::{ItemShape, classify};

use super::{ChartKind, ChartTransformer, data_series, series_data};

const LABEL: &str = "Theme";

pub struct ThemeRiverTransformer {
    colors: ColorConfig,
}

impl ThemeRiverTransformer {
    #[must_use]
    pub fn new(colors: ColorConfig) -> Self {
        Self { colors }
    }

    /// `[t, v, name]` with the label defaulted from the series position;
    /// rows that are not arrays, or too short to carry a value, are dropped.
    fn row(raw: &Value, series_index: usize) -> Option<Value> {
        let cells: &[Value] = match classify(raw) {
            ItemShape::Pair(a, b) => return Some(Self::assemble(a, b, None, series_index)),
            ItemShape::Tuple(cells) => cells,
            _ => return None,
        };
        let (t, v) = match (cells.first(), cells.get(1)) {
            (Some(t), Some(v)) => (t, v),
            _ => return None,
        };
        let label = cells.get(2).and_then(label_string);
        Some(Self::assemble(t, v, label, series_index))
    }

    fn assemble(t: &Value, v: &Value, label: Option<String>, series_index: usize) -> Value {
        let label = label.unwrap_or_else(|| format!("{LABEL} {}", series_index + 1));
        json!([
            t.clone(),
            lenient_f64(v).unwrap_or(0.0),
            label,
        ])
    }
}

impl ChartTransformer for ThemeRiverTransformer {
    fn kind(&self) -> ChartKind {
        ChartKind::ThemeRiver
    }

    fn transform(&self, input: &Value) -> ChartResult<Value> {
        let mut rows: Vec<Value> = Vec::new();
        for (s_idx, entry) in data_series(input).into_iter().enumerate() {
            rows.extend(
                series_data(entry)
                    .iter()
                    .filter_map(|raw| Self::row(raw, s_idx)),
            );
        }

        let series_out: Vec<Value> = if rows.is_empty() {
            Vec::new()
        } else {
            vec![json!({
                "name": "Theme River 1",
                "type": "themeRiver",
                "data": rows,
                "label": {
                    "show": true,
                    "color": self.colors.theme.text,
                    "fontSize": 12,
                },
                "emphasis": {
                    "itemStyle": {
                        "shadowBlur": 20,
                        "shadowColor": "rgba(0, 0, 0, 0.6)",
                    },
                },
            })]
        };

        let mut out = scaffold::apply(&self.colors, TooltipTrigger::Axis, input);
        out.insert(
            "singleAxis".to_owned(),
            merged_section(
                input,
                "singleAxis",
                json!({
                    "type": "time",
                    "top": "15%",
                    "bottom": "15%",
                    "axisLine": { "lineStyle": { "color": self.colors.theme.axis } },
                    "axisLabel": { "color": self.colors.theme.text, "fontSize": 12 },
                }),
            ),
        );
        out.insert("series".to_owned(), Value::Array(series_out));
        Ok(Value::Object(out))
    }
}

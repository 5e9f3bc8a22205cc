//! Ring-progress transformer. Every data value becomes its own ring
//! sub-chart; rings are placed on a fixed grid whose shape depends only on
//! the ring count, with radii shrinking as the grid gets denser.

use serde_json::{Value, json};

use crate::error::ChartResult;
use crate::layout::ring_cells;
use crate::merge::get_f64;
use crate::palette::ColorConfig;
use crate::scaffold::{self, TooltipTrigger};
use crate::shape::named_item;

use super::{ChartKind, ChartTransformer, data_series, series_data};

const LABEL: &str = "Ring";

pub struct RingProgressTransformer {
    colors: ColorConfig,
}

impl RingProgressTransformer {
    #[must_use]
    pub fn new(colors: ColorConfig) -> Self {
        Self { colors }
    }

    /// Flattens every retained series into one `(name, percent)` list.
    fn ring_values(&self, input: &Value) -> Vec<(String, f64)> {
        let mut out = Vec::new();
        for entry in data_series(input) {
            for raw in series_data(entry) {
                let item = named_item(raw, LABEL, out.len());
                let name = item
                    .get("name")
                    .and_then(Value::as_str)
                    .unwrap_or(LABEL)
                    .to_owned();
                let value = get_f64(&item, "value").unwrap_or(0.0).clamp(0.0, 100.0);
                out.push((name, value));
            }
        }
        out
    }
}

impl ChartTransformer for RingProgressTransformer {
    fn kind(&self) -> ChartKind {
        ChartKind::RingProgress
    }

    fn transform(&self, input: &Value) -> ChartResult<Value> {
        let values = self.ring_values(input);
        let cells = ring_cells(values.len());

        let series_out: Vec<Value> = values
            .iter()
            .zip(cells.iter())
            .enumerate()
            .map(|(i, ((name, value), cell))| {
                let color = self.colors.series_color(i);
                json!({
                    "name": name,
                    "type": "pie",
                    "radius": [
                        format!("{}%", cell.inner_radius_pct),
                        format!("{}%", cell.outer_radius_pct),
                    ],
                    "center": [
                        format!("{}%", cell.center_x_pct),
                        format!("{}%", cell.center_y_pct),
                    ],
                    "avoidLabelOverlap": false,
                    "silent": true,
                    "label": {
                        "show": true,
                        "position": "center",
                        "formatter": format!("{value}%"),
                        "color": self.colors.theme.text,
                        "fontSize": 16,
                    },
                    "labelLine": { "show": false },
                    "data": [
                        {
                            "name": name,
                            "value": value,
                            "itemStyle": { "color": color },
                        },
                        {
                            "name": "",
                            "value": 100.0 - value,
                            "itemStyle": { "color": self.colors.theme.border, "opacity": 0.35 },
                            "tooltip": { "show": false },
                            "emphasis": { "disabled": true },
                        },
                    ],
                })
            })
            .collect();

        let mut out = scaffold::apply(&self.colors, TooltipTrigger::Item, input);
        // One legend entry per ring would duplicate the center labels, so the
        // legend defaults to hidden here unless the caller asked for it.
        let caller_set_legend = input
            .get("legend")
            .and_then(|legend| legend.get("show"))
            .is_some();
        if !caller_set_legend {
            if let Some(legend) = out.get_mut("legend").and_then(Value::as_object_mut) {
                legend.insert("show".to_owned(), json!(false));
            }
        }
        out.insert("series".to_owned(), Value::Array(series_out));
        Ok(Value::Object(out))
    }
}

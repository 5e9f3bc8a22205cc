//! Parallel-coordinates transformer. Axes are inferred from the data: a
//! dimension is numeric only when every observed value parses as a number,
//! otherwise it becomes a category axis with first-seen value order.

use serde_json::{Map, Value, json};

use crate::error::ChartResult;
use crate::layout::{ParallelAxis, infer_parallel_axes};
use crate::merge::merged_section;
use crate::palette::ColorConfig;
use crate::scaffold::{self, TooltipTrigger};
use crate::shape::{ItemShape, classify};

use super::{
    ChartKind, ChartTransformer, data_series, resolved_series, series_data, series_name,
};

const LABEL: &str = "Parallel";

pub struct ParallelTransformer {
    colors: ColorConfig,
}

impl ParallelTransformer {
    #[must_use]
    pub fn new(colors: ColorConfig) -> Self {
        Self { colors }
    }

    /// One data row per item: arrays are taken as-is, objects contribute
    /// their `value` array, everything else is dropped.
    fn row(raw: &Value) -> Option<Vec<Value>> {
        match classify(raw) {
            ItemShape::Pair(a, b) => Some(vec![a.clone(), b.clone()]),
            ItemShape::Tuple(cells) => Some(cells.to_vec()),
            ItemShape::Object(map) => map.get("value").and_then(Value::as_array).cloned(),
            ItemShape::Number(_) | ItemShape::Unrecognized => None,
        }
    }

    fn axis_option(&self, dim: usize, axis: &ParallelAxis) -> Value {
        let mut option = json!({
            "dim": dim,
            "name": format!("Dim {}", dim + 1),
            "nameTextStyle": { "color": self.colors.theme.text, "fontSize": 12 },
            "axisLine": { "lineStyle": { "color": self.colors.theme.axis } },
            "axisLabel": { "color": self.colors.theme.text, "fontSize": 11, "rotate": 0 },
        });
        if let Some(map) = option.as_object_mut() {
            match axis {
                ParallelAxis::Numeric { min, max } => {
                    map.insert("min".to_owned(), json!(min));
                    map.insert("max".to_owned(), json!(max));
                }
                ParallelAxis::Categorical {
                    values,
                    rotate_labels,
                } => {
                    map.insert("type".to_owned(), json!("category"));
                    map.insert("data".to_owned(), json!(values));
                    if *rotate_labels {
                        if let Some(labels) =
                            map.get_mut("axisLabel").and_then(Value::as_object_mut)
                        {
                            labels.insert("rotate".to_owned(), json!(45));
                        }
                    }
                }
            }
        }
        option
    }

    fn series_defaults(&self, entry: &Map<String, Value>, index: usize) -> Value {
        json!({
            "name": series_name(entry, LABEL, index),
            "type": "parallel",
            "smooth": false,
            "lineStyle": {
                "width": 2,
                "opacity": 0.8,
                "color": self.colors.series_color(index),
            },
            "emphasis": {
                "lineStyle": { "width": 3, "opacity": 1.0 },
            },
        })
    }
}

impl ChartTransformer for ParallelTransformer {
    fn kind(&self) -> ChartKind {
        ChartKind::Parallel
    }

    fn transform(&self, input: &Value) -> ChartResult<Value> {
        let mut all_rows: Vec<Vec<Value>> = Vec::new();
        let mut series_out: Vec<Value> = Vec::new();

        for (s_idx, entry) in data_series(input).into_iter().enumerate() {
            let rows: Vec<Vec<Value>> = series_data(entry).iter().filter_map(Self::row).collect();
            if rows.is_empty() {
                continue;
            }
            let data: Vec<Value> = rows.iter().map(|row| json!(row)).collect();
            all_rows.extend(rows);

            let mut merged = resolved_series(self.series_defaults(entry, s_idx), entry);
            if let Some(obj) = merged.as_object_mut() {
                obj.insert("data".to_owned(), Value::Array(data));
            }
            series_out.push(merged);
        }

        let mut out = scaffold::apply(&self.colors, TooltipTrigger::Item, input);

        // A caller-supplied parallelAxis wins wholesale; otherwise infer.
        if !out.get("parallelAxis").is_some_and(Value::is_array) {
            let axes: Vec<Value> = infer_parallel_axes(&all_rows)
                .iter()
                .enumerate()
                .map(|(dim, axis)| self.axis_option(dim, axis))
                .collect();
            out.insert("parallelAxis".to_owned(), Value::Array(axes));
        }
        out.insert(
            "parallel".to_owned(),
            merged_section(
                input,
                "parallel",
                json!({
                    "left": "10%",
                    "right": "13%",
                    "top": "20%",
                    "bottom": "12%",
                }),
            ),
        );
        out.insert("series".to_owned(), Value::Array(series_out));
        Ok(Value::Object(out))
    }
}

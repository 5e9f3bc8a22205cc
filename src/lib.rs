//! chart-options: renderer-agnostic chart option normalization.
//!
//! This crate takes a partially specified chart configuration (series data,
//! titles, axes, colors) and fills in defaults to produce a complete option
//! tree consumable by a charting renderer. One transformer per chart family;
//! every transformer is pure and synchronous. The map family additionally
//! resolves a GeoJSON region set through an injected [`geo::GeoSource`].

pub mod error;
pub mod geo;
pub mod layout;
pub mod merge;
pub mod palette;
pub mod scaffold;
pub mod shape;
pub mod telemetry;
pub mod transform;

pub use error::{ChartError, ChartResult};
pub use geo::{GeoJsonDocument, GeoSource, HttpGeoSource, StaticGeoSource};
pub use palette::ColorConfig;
pub use transform::{ChartKind, ChartTransformer, TransformerRegistry};

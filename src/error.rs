use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("geo fetch failed for map \"{map}\": {detail}")]
    GeoFetch { map: String, detail: String },

    #[error("geo document for map \"{map}\" is not a feature collection: {detail}")]
    GeoDecode { map: String, detail: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}

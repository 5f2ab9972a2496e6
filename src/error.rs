use thiserror::Error;

use crate::catalog::PaletteId;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The query color is not a parseable hex triplet.
    #[error("invalid color {input:?}: {reason}")]
    InvalidColorFormat { input: String, reason: String },
    /// A bundled catalog failed validation while loading.
    #[error("cannot load the {palette} catalog: {reason}")]
    CatalogLoad { palette: PaletteId, reason: String },
    /// Name-attribute filters were requested for a palette without them.
    #[error("the {palette} palette has no name attributes to filter on")]
    FilterNotSupported { palette: PaletteId },
    /// Results could not be serialized for `--json` output.
    #[error("cannot render matches as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

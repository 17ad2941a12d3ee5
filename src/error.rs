//! Error taxonomy for the layout engine.
//!
//! Only two classes of failure abort a generation: ordering mistakes in the
//! assembler (drawing before a page exists) and unsupported input (a corrupt
//! or foreign-format image, a malformed date). Missing resume data is never
//! an error; every renderer treats absence as a drawing-suppression
//! condition.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    /// A draw primitive was called before `add_page` created a drawing
    /// target. Indicates an ordering bug in the caller, not bad data.
    #[error("no active page: add_page must be called before drawing")]
    NoActivePage,

    /// The image data URI carries a MIME type other than JPEG or PNG.
    #[error("unsupported image format: {0}")]
    UnsupportedImage(String),

    /// The image bytes could not be decoded or embedded.
    #[error("invalid image data: {0}")]
    InvalidImage(String),

    /// A date string was not valid `YYYY-MM-DD`.
    #[error("invalid date string: {0}")]
    InvalidDate(String),
}

//! # rle565
//!
//! A 100% Rust converter for RGB565 images embedded as C header arrays.
//!
//! Firmware for small displays often ships icons and splash screens as flat
//! `uint16_t` arrays. For assets with low color variety, storing
//! `(color, count)` runs instead of raw pixels cuts the flash footprint
//! substantially. This crate reads such a header, run-length encodes the
//! pixel data, and renders an equivalent header holding the runs.
//!
//! ## Features
//!
//! - **Extractor**: Permissive scan that pulls dimensions and pixel data out
//!   of existing RGB565 headers
//! - **Encoder**: Deterministic run-length encoder with a 16-bit run cap
//! - **Serializer**: Renders runs back into a header the firmware can include
//!
//! ## Quick Start
//!
//! ```ignore
//! use rle565::{extract_image, rle_encode, render_header};
//!
//! let text = std::fs::read_to_string("logo.h")?;
//! let image = extract_image(&text)?;
//! let runs = rle_encode(&image.pixels);
//! let header = render_header("logo", image.width, image.height, &runs);
//! std::fs::write("compressed/logo.h", header)?;
//! ```

use thiserror::Error;

pub mod encoder;
pub mod extract;
pub mod header;

pub use encoder::{rle_encode, Run, MAX_RUN_LENGTH};
pub use extract::{extract_image, Image};
pub use header::render_header;

/// Errors that can occur while extracting an image from header text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
    /// Width or height declaration not found in the input text
    #[error("missing {which} declaration (expected `#define <NAME>_{which} <n>`)")]
    MissingDimension { which: &'static str },

    /// No 4-digit hex pixel literals found in the input text
    #[error("no RGB565 pixel data found")]
    NoPixelData,

    /// Number of pixel tokens disagrees with the declared width * height
    #[error("pixel count mismatch: found {found} pixels, expected {expected}")]
    PixelCountMismatch { found: usize, expected: usize },

    /// Dimension literal or area computation exceeds the native integer range
    #[error("integer overflow")]
    IntegerOverflow,
}

/// Result type for header extraction.
pub type Result<T> = core::result::Result<T, HeaderError>;

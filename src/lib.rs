//! Patch-based texture synthesis and image healing.
//!
//! The engine grows an output image by stitching together pixels sampled
//! from a reference image (the *corpus*), matching each output position
//! against its already-synthesized neighborhood. The same machinery fills
//! masked regions when a healing front-end feeds it the unmasked pixels as
//! a corpus. Output pixels are always copied corpus samples, never blends,
//! and a given seed reproduces its output byte for byte.
//!
//! ## Usage
//!
//! Build a [`Synthesizer`] from a corpus [`image::Image`], tune a
//! [`Params`], and run:
//!
//! ```
//! use resynth::image::Image;
//! use resynth::{Params, Synthesizer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let corpus = Image::from_pixels(2, 2, 3, vec![
//!     255, 0, 0, 0, 255, 0,
//!     0, 0, 255, 0, 0, 0,
//! ])?;
//!
//! let mut params = Params::new();
//! params.set_seed(1);
//!
//! let mut synthesizer = Synthesizer::new(corpus, 8, 8)?;
//! synthesizer.run(&params)?;
//! assert_eq!(synthesizer.data().as_bytes().len(), 8 * 8 * 3);
//! # Ok(())
//! # }
//! ```
//!
//! The [`synthesize_from_bytes`] convenience entry point accepts a raw
//! component buffer instead of a constructed [`image::Image`].
//!
//! ## Healing boundary
//!
//! The engine itself never interprets selection masks. A healing caller is
//! expected to split its picture into a corpus (the readable, unmasked
//! pixels) and an output (the region to fill) before constructing the
//! state; how masks map onto that split is front-end policy.
#![forbid(
    absolute_paths_not_starting_with_crate,
    missing_docs,
    non_ascii_idents,
    noop_method_call,
    unsafe_code,
    unused_results
)]
#![warn(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]

pub mod error;
pub mod image;
pub mod params;

mod diff;
mod offsets;
mod plan;
mod synth;

pub use params::Params;
pub use synth::{synthesize_from_bytes, Synthesizer};

/// Integer position or displacement on the pixel grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Coord {
    /// X-coordinate.
    pub x: i32,
    /// Y-coordinate.
    pub y: i32,
}

/// Derive the output extent for texture synthesis from a scale argument.
///
/// A positive `scale` multiplies the corpus dimensions, a negative `scale`
/// is an absolute square edge length regardless of the corpus aspect, and
/// `0` keeps the historical default of 256 by 256.
#[inline]
#[must_use]
pub fn output_extent(scale: i32, corpus_width: u32, corpus_height: u32) -> (u32, u32) {
    match scale.cmp(&0) {
        std::cmp::Ordering::Greater => (
            corpus_width.saturating_mul(scale.unsigned_abs()),
            corpus_height.saturating_mul(scale.unsigned_abs()),
        ),
        std::cmp::Ordering::Less => (scale.unsigned_abs(), scale.unsigned_abs()),
        std::cmp::Ordering::Equal => (256, 256),
    }
}

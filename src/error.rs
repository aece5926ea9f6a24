//! Synthesis error enums.
use std::collections::TryReserveError;

/// Error for texture synthesis runs.
#[derive(Clone, Debug)]
pub enum SynthError {
    /// The corpus image has zero area.
    EmptyCorpus,
    /// The output image has zero area.
    EmptyData,
    /// The channel count is outside of `1..=4`.
    InvalidChannelCount,
    /// An image dimension does not fit in signed coordinate math.
    InvalidImageDimension,
    /// The supplied pixel buffer length does not match the dimensions.
    MismatchedPixelBuffer,
    /// The run was cancelled through the progress callback.
    Cancelled,
    /// Space could not be reserved for a collection required by the
    /// synthesis loop.
    Reserve(TryReserveError),
    /// A general error occurred.
    General(&'static str),
}

impl std::fmt::Display for SynthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCorpus => write!(f, "Corpus image has no pixels"),
            Self::EmptyData => write!(f, "Output image has no pixels"),
            Self::InvalidChannelCount => write!(f, "Channel count must be between 1 and 4"),
            Self::InvalidImageDimension => write!(f, "Image dimension larger than i32"),
            Self::MismatchedPixelBuffer => {
                write!(f, "Pixel buffer length does not equal image dimensions")
            }
            Self::Cancelled => write!(f, "Synthesis cancelled before completion"),
            Self::Reserve(e) => write!(f, "{e}"),
            Self::General(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SynthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Reserve(e) => e.source(),
            Self::EmptyCorpus
            | Self::EmptyData
            | Self::InvalidChannelCount
            | Self::InvalidImageDimension
            | Self::MismatchedPixelBuffer
            | Self::Cancelled
            | Self::General(_) => None,
        }
    }
}

impl std::convert::From<TryReserveError> for SynthError {
    fn from(error: TryReserveError) -> Self {
        Self::Reserve(error)
    }
}

impl std::convert::From<&'static str> for SynthError {
    fn from(error: &'static str) -> Self {
        Self::General(error)
    }
}

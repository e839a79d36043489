// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Why an element could not be bound for UV editing.
///
/// None of these are fatal: the editor stays unbound, or, for
/// [`LoadError::NoTexture`], stays bound without a background texture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadError {
    /// The element has no UV coordinate array.
    NoUvData,
    /// The element is neither a triangle list nor a triangle strip.
    UnsupportedTopology,
    /// No source texture is bound to the element.
    NoTexture,
    /// A face corner refers to a UV point that does not exist.
    IndexOutOfRange {
        /// Index of the offending face.
        face: usize,
        /// The dangling point index.
        index: usize,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoUvData => f.write_str("element has no UV coordinates"),
            Self::UnsupportedTopology => {
                f.write_str("element is neither a triangle list nor a triangle strip")
            }
            Self::NoTexture => f.write_str("element has no bound source texture"),
            Self::IndexOutOfRange { face, index } => {
                write!(f, "face {face} refers to missing UV point {index}")
            }
        }
    }
}

impl core::error::Error for LoadError {}

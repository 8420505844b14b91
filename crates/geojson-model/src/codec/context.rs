//! Decode state threaded through the recursive descent.

use crate::error::{GeoJsonError, Result};
use crate::options::CodecOptions;

/// Options plus the current nesting depth.
#[derive(Debug)]
pub struct DecodeContext<'a> {
    options: &'a CodecOptions,
    depth: usize,
}

impl<'a> DecodeContext<'a> {
    pub(crate) fn new(options: &'a CodecOptions) -> Self {
        Self { options, depth: 0 }
    }

    pub fn options(&self) -> &CodecOptions {
        self.options
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Runs `f` one nesting level deeper, failing once `max_depth` is
    /// exceeded.
    pub(crate) fn descend<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= self.options.max_depth {
            return Err(GeoJsonError::DepthLimitExceeded(self.options.max_depth));
        }
        self.depth += 1;
        let out = f(self);
        self.depth -= 1;
        out
    }
}

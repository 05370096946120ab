#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// Default maximum nesting of structs and unions while decoding.
pub const DEFAULT_DEPTH_LIMIT: u32 = 500;

/// Resource caps applied by [`XdrReader`](crate::XdrReader) and
/// [`XdrWriter`](crate::XdrWriter).
///
/// The depth cap bounds recursion through nested unions (such as extension
/// version chains) and the length cap bounds the number of bytes consumed or
/// produced.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum nesting depth of structs and unions.
    pub depth: u32,

    /// Maximum number of bytes read or written.
    pub len: usize,
}

impl Limits {
    /// No limits at all.
    pub const fn none() -> Self {
        Self {
            depth: u32::MAX,
            len: usize::MAX,
        }
    }

    #[must_use]
    pub const fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub const fn with_len(mut self, len: usize) -> Self {
        self.len = len;
        self
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH_LIMIT,
            len: usize::MAX,
        }
    }
}

//! Reader and writer configuration.
//!
//! Size and depth caps bound memory and recursion; the extension toggles
//! switch off the syntax that plain JSON does not have (`//` comments,
//! unquoted object keys, `u`/`d` numeric suffixes).

/// Default nesting cap for arrays/objects.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 512;

/// Default input size cap (256 MiB).
pub const DEFAULT_MAX_INPUT_SIZE: usize = 256 * 1024 * 1024;

/// Limits and syntax toggles shared by [`Reader`](super::Reader) and
/// [`Writer`](super::Writer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum total input size in bytes
    pub max_input_size: usize,
    /// Maximum nesting depth for arrays/objects
    pub max_nesting_depth: usize,
    /// Accept `//` line comments
    pub comments: bool,
    /// Accept unquoted object keys
    pub bare_keys: bool,
    /// Accept `u` (unsigned) and `d` (real) numeric suffixes
    pub numeric_suffixes: bool,
}

impl Limits {
    /// Every extension enabled. This is the default.
    pub const fn lenient() -> Self {
        Self {
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            comments: true,
            bare_keys: true,
            numeric_suffixes: true,
        }
    }

    /// Plain JSON syntax only.
    pub const fn strict() -> Self {
        Self {
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            comments: false,
            bare_keys: false,
            numeric_suffixes: false,
        }
    }

    /// Same limits with a different nesting cap.
    pub const fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    /// Same limits with a different input size cap.
    pub const fn with_max_input_size(mut self, size: usize) -> Self {
        self.max_input_size = size;
        self
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::lenient()
    }
}

//! DoS protection limits for the JSON input framing.
//!
//! The C entry point accepts arbitrary caller-supplied strings, so the
//! framing layer bounds the work done before any field arithmetic starts.

/// Length of the decimal form of the largest canonical element.
pub const MAX_DECIMAL_DIGITS: u64 = 77;

/// DoS protection limits for JSON input parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum total input size in bytes (E110)
    pub max_input_size: u64,
    /// Maximum length of one decimal string in bytes (E112)
    pub max_string_length: u64,
    /// Maximum number of elements in the input array (E114)
    pub max_array_length: u64,
}

impl Limits {
    /// Default limits used by the C entry point.
    ///
    /// Strings longer than any canonical element are rejected before they are
    /// parsed, and arrays are capped just above the largest supported arity so
    /// that arity errors stay distinguishable from oversized input.
    pub const fn strict() -> Self {
        Self {
            max_input_size: 64 * 1024, // 64 KiB
            max_string_length: MAX_DECIMAL_DIGITS + 1,
            max_array_length: 16,
        }
    }

    /// Lenient limits for tooling that feeds larger documents.
    pub const fn lenient() -> Self {
        Self {
            max_input_size: 16 * 1024 * 1024, // 16 MiB
            max_string_length: 64 * 1024,     // 64 KiB
            max_array_length: 100_000,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::strict()
    }
}

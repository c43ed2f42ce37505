//! Error types for spvcrs operations

use spvc::{
    SPVC_ERROR_INVALID_ARGUMENT, SPVC_ERROR_INVALID_SPIRV, SPVC_ERROR_OUT_OF_MEMORY,
    SPVC_ERROR_UNSUPPORTED_SPIRV, SPVC_SUCCESS, spvc_result,
};
use std::fmt;
use thiserror::Error;

/// Result codes returned by the SPIRV-Cross C API
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpvcResult(pub spvc_result);

impl SpvcResult {
    pub const SUCCESS: SpvcResult = SpvcResult(SPVC_SUCCESS);
    pub const INVALID_SPIRV: SpvcResult = SpvcResult(SPVC_ERROR_INVALID_SPIRV);
    pub const UNSUPPORTED_SPIRV: SpvcResult = SpvcResult(SPVC_ERROR_UNSUPPORTED_SPIRV);
    pub const OUT_OF_MEMORY: SpvcResult = SpvcResult(SPVC_ERROR_OUT_OF_MEMORY);
    pub const INVALID_ARGUMENT: SpvcResult = SpvcResult(SPVC_ERROR_INVALID_ARGUMENT);

    /// Returns true if the result indicates success
    #[inline]
    pub fn is_success(&self) -> bool {
        self.0 >= 0
    }

    /// Returns true if the result indicates an error
    #[inline]
    pub fn is_error(&self) -> bool {
        self.0 < 0
    }

    /// Returns the raw result code
    #[inline]
    pub fn code(&self) -> spvc_result {
        self.0
    }

    fn name(&self) -> Option<&'static str> {
        Some(match *self {
            Self::SUCCESS => "SPVC_SUCCESS",
            Self::INVALID_SPIRV => "SPVC_ERROR_INVALID_SPIRV",
            Self::UNSUPPORTED_SPIRV => "SPVC_ERROR_UNSUPPORTED_SPIRV",
            Self::OUT_OF_MEMORY => "SPVC_ERROR_OUT_OF_MEMORY",
            Self::INVALID_ARGUMENT => "SPVC_ERROR_INVALID_ARGUMENT",
            _ => return None,
        })
    }
}

impl fmt::Debug for SpvcResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "SpvcResult({name})"),
            None => write!(f, "SpvcResult({})", self.0),
        }
    }
}

impl fmt::Display for SpvcResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

impl From<spvc_result> for SpvcResult {
    fn from(code: spvc_result) -> Self {
        SpvcResult(code)
    }
}

/// Error type for spvcrs operations
#[derive(Error, Debug)]
pub enum Error {
    /// An argument was rejected, either locally or by SPIRV-Cross
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The SPIR-V module is malformed
    #[error("Invalid SPIR-V: {0}")]
    InvalidSpirv(String),

    /// The SPIR-V module uses something SPIRV-Cross cannot handle
    #[error("Unsupported SPIR-V: {0}")]
    UnsupportedSpirv(String),

    /// SPIRV-Cross ran out of memory
    #[error("Out of memory: {0}")]
    OutOfMemory(String),

    /// A result code outside the documented set
    #[error("SPIRV-Cross failed ({result}): {message}")]
    Native {
        /// The raw result code
        result: SpvcResult,
        /// Last error string of the context
        message: String,
    },

    /// The object, or one of its ancestors, has been released
    #[error("Object is no longer alive: {0}")]
    MissingParent(String),

    /// The object belongs to a different owner than the one it was used with
    #[error("Object belongs to a different owner: {0}")]
    InvalidParent(String),

    /// SPIRV-Cross returned an enumerant this crate does not know
    #[error("Unexpected {kind} value {value}")]
    UnexpectedValue {
        /// Name of the enumeration
        kind: &'static str,
        /// The raw value
        value: u32,
    },

    /// A string argument contained an interior NUL byte
    #[error("String contains a NUL byte: {0}")]
    Nul(#[from] std::ffi::NulError),

    /// The native library could not be loaded, or lacks the entry point
    /// an operation needs
    #[error("Failed to load SPIRV-Cross: {0}")]
    Load(String),
}

impl From<spvc::SpvcError> for Error {
    fn from(err: spvc::SpvcError) -> Error {
        Error::Load(err.to_string())
    }
}

impl Error {
    /// Translates a failed native result into the matching error.
    pub fn from_native(result: SpvcResult, message: String) -> Error {
        match result {
            SpvcResult::INVALID_ARGUMENT => Error::InvalidArgument(message),
            SpvcResult::INVALID_SPIRV => Error::InvalidSpirv(message),
            SpvcResult::UNSUPPORTED_SPIRV => Error::UnsupportedSpirv(message),
            SpvcResult::OUT_OF_MEMORY => Error::OutOfMemory(message),
            result => Error::Native { result, message },
        }
    }
}

/// Result type for spvcrs operations
pub type Result<T> = std::result::Result<T, Error>;

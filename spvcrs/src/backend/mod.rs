//! Compiler backends
//!
//! A [`Compiler`](crate::Compiler) is parameterized by one of the marker types
//! in this module. The marker picks the native backend, the option payload
//! applied on every compile, and the backend-specific methods available on
//! the compiler.

mod cpp;
mod glsl;
mod hlsl;
mod json;
mod msl;

pub use glsl::{GlslOptions, Precision};
pub use hlsl::{HlslOptions, HlslResourceBinding, RegisterMapping, RootConstants, VertexAttributeRemap};
pub use msl::{
    ArgumentBuffersTier, ChromaLocation, ComponentSwizzle, ConstexprSampler, FormatResolution,
    IndexType, MslOptions, MslResourceBinding, MslVersion, Platform, SamplerAddress,
    SamplerBorderColor, SamplerCompareFunc, SamplerCoord, SamplerFilter, SamplerMipFilter,
    SamplerYcbcrConversion, SamplerYcbcrModelConversion, SamplerYcbcrRange, ShaderInterfaceVar,
    ShaderVariableFormat, ShaderVariableRate,
};

use crate::options::ApplyOptions;
use spirv::ExecutionModel;
use spvc::{
    SPV_EXECUTION_MODEL_MAX, SPVC_BACKEND_CPP, SPVC_BACKEND_GLSL, SPVC_BACKEND_HLSL,
    SPVC_BACKEND_JSON, SPVC_BACKEND_MSL, SPVC_BACKEND_NONE, spvc_backend,
};
use std::fmt;

/// Declares a C enumeration mirrored as a Rust enum with a `u32` conversion.
macro_rules! native_enum {
    ($(
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident = $value:literal,)*
        }
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            #[repr(u32)]
            pub enum $name {
                $($(#[$variant_meta])* $variant = $value,)*
            }

            impl From<$name> for u32 {
                fn from(value: $name) -> u32 {
                    value as u32
                }
            }
        )*
    };
}
pub(crate) use native_enum;

/// Native backend of a compiler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Reflection only; cannot emit source
    None,
    Glsl,
    Hlsl,
    Msl,
    Cpp,
    /// Emits reflection data as JSON
    Json,
}

impl Backend {
    pub(crate) fn raw(self) -> spvc_backend {
        match self {
            Backend::None => SPVC_BACKEND_NONE,
            Backend::Glsl => SPVC_BACKEND_GLSL,
            Backend::Hlsl => SPVC_BACKEND_HLSL,
            Backend::Msl => SPVC_BACKEND_MSL,
            Backend::Cpp => SPVC_BACKEND_CPP,
            Backend::Json => SPVC_BACKEND_JSON,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Backend::None => "none",
            Backend::Glsl => "glsl",
            Backend::Hlsl => "hlsl",
            Backend::Msl => "msl",
            Backend::Cpp => "cpp",
            Backend::Json => "json",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A source-emitting backend usable with [`Compiler`](crate::Compiler).
///
/// Implemented only by the marker types of this module.
pub trait CompilerBackend: sealed::Sealed + 'static {
    const BACKEND: Backend;

    /// Whether the native options object accepts the common options.
    /// SPIRV-Cross only enables them for the GLSL family.
    const COMMON_OPTIONS: bool = true;

    /// Options applied on every compile, in addition to the common ones
    type Options: ApplyOptions;
}

macro_rules! backends {
    ($($(#[$meta:meta])* $marker:ident => $backend:ident, $options:ty $(, common = $common:literal)?;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub struct $marker;

            impl sealed::Sealed for $marker {}

            impl CompilerBackend for $marker {
                const BACKEND: Backend = Backend::$backend;
                $(const COMMON_OPTIONS: bool = $common;)?
                type Options = $options;
            }
        )*
    };
}

backends! {
    /// GLSL and ESSL
    Glsl => Glsl, GlslOptions;
    /// HLSL shader models 3.0 to 6.x
    Hlsl => Hlsl, HlslOptions;
    /// Metal Shading Language
    Msl => Msl, MslOptions;
    /// C++ source, mostly useful for debugging
    Cpp => Cpp, (), common = false;
    /// JSON reflection output
    Json => Json, (), common = false;
}

/// Encodes an optional stage, `None` meaning every stage.
pub(crate) fn stage_or_all(stage: Option<ExecutionModel>) -> u32 {
    stage.map_or(SPV_EXECUTION_MODEL_MAX, |stage| stage as u32)
}

//! Safe, ergonomic Rust API for SPIRV-Cross
//!
//! This crate wraps the SPIRV-Cross C API loaded at runtime by `spvc`. Every
//! object hangs off a [`Context`]; disposing the context, or dropping the
//! owner of an object, makes the object unusable instead of dangling.
//!
//! # Example
//!
//! ```no_run
//! use spvcrs::{Context, backend::Hlsl};
//!
//! # fn main() -> spvcrs::Result<()> {
//! let spirv = std::fs::read("shader.spv").unwrap();
//! let context = Context::new()?;
//! let mut compiler = context.create_compiler_from_spirv::<Hlsl>(&spirv)?;
//!
//! // Reflect on the module
//! let resources = compiler.create_shader_resources()?;
//! for ubo in resources.uniform_buffers()? {
//!     println!("cbuffer {} at binding {}", ubo.name, compiler.decoration(ubo.id, spvcrs::spirv::Decoration::Binding)?);
//! }
//!
//! // Cross-compile it
//! compiler.backend_options.shader_model = 50;
//! println!("{}", compiler.compile()?);
//! # Ok(())
//! # }
//! ```

pub mod backend;
mod compiler;
mod context;
mod error;
mod flags;
mod graph;
mod ids;
mod options;
pub mod reflect;
mod strings;


pub use compiler::Compiler;
pub use context::{Context, ParsedIr};
pub use error::{Error, Result, SpvcResult};
pub use flags::HlslBindingFlags;
pub use ids::{ConstantId, Id, TypeId, VariableId};
pub use options::{ApplyOptions, CompilerOptions, OptionSink};
pub use reflect::{
    BufferRange, CombinedImageSampler, Constant, EntryPoint, ReflectedBuiltinResource,
    ReflectedResource, Reflector, Resources, Set, SpecializationConstant, Type,
    WorkGroupSizeConstants,
};
pub use spirv;

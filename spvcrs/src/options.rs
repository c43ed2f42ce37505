//! Compiler option structs and their application to a native options object

use crate::context::Session;
use crate::Result;
use spvc::{SPVC_FALSE, SPVC_TRUE, spvc_compiler_option, spvc_compiler_options};
use std::fmt;

/// Declares a plain-data option struct.
///
/// Each field names its default and the native option it is written to:
///
/// ```ignore
/// backend_options! {
///     pub struct GlslOptions {
///         pub version: u32 = 450 => set_uint(SPVC_COMPILER_OPTION_GLSL_VERSION),
///     }
/// }
/// ```
///
/// Non-primitive field types convert into `bool` or `u32` through `From`.
macro_rules! backend_options {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                pub $field:ident: $ty:ty = $default:expr => $setter:ident($option:ident),
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                $name {
                    $($field: $default,)*
                }
            }
        }

        impl $crate::options::ApplyOptions for $name {
            fn apply(&self, sink: &mut $crate::options::OptionSink<'_>) -> $crate::Result<()> {
                $(sink.$setter(spvc::$option, self.$field.into())?;)*
                Ok(())
            }
        }
    };
}
pub(crate) use backend_options;

/// Writes option values into a native options object.
pub struct OptionSink<'a> {
    session: &'a Session,
    handle: spvc_compiler_options,
}

impl<'a> OptionSink<'a> {
    pub(crate) fn new(session: &'a Session, handle: spvc_compiler_options) -> Self {
        OptionSink { session, handle }
    }

    pub fn set_bool(&mut self, option: spvc_compiler_option, value: bool) -> Result<()> {
        log::trace!("option {option:#x} = {value}");
        let value = if value { SPVC_TRUE } else { SPVC_FALSE };
        self.session
            .check(unsafe { (self.session.api.spvc_compiler_options_set_bool()?)(self.handle, option, value) })
    }

    pub fn set_uint(&mut self, option: spvc_compiler_option, value: u32) -> Result<()> {
        log::trace!("option {option:#x} = {value}");
        self.session
            .check(unsafe { (self.session.api.spvc_compiler_options_set_uint()?)(self.handle, option, value) })
    }
}

impl fmt::Debug for OptionSink<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionSink").field("handle", &self.handle).finish()
    }
}

/// An option payload that can be written into a native options object
pub trait ApplyOptions: Default + Clone + fmt::Debug {
    fn apply(&self, sink: &mut OptionSink<'_>) -> Result<()>;
}

/// Backends without options of their own
impl ApplyOptions for () {
    fn apply(&self, _sink: &mut OptionSink<'_>) -> Result<()> {
        Ok(())
    }
}

backend_options! {
    /// Options shared by every source-emitting backend
    pub struct CompilerOptions {
        /// Emit temporaries for every expression. Debugging aid.
        pub force_temporary: bool = false => set_bool(SPVC_COMPILER_OPTION_FORCE_TEMPORARY),
        /// Flatten `a[x][y][z]` into `a[x * y * z]` in emitted code.
        pub flatten_multidimensional_arrays: bool = false
            => set_bool(SPVC_COMPILER_OPTION_FLATTEN_MULTIDIMENSIONAL_ARRAYS),
        /// Deduce readonly/writeonly for storage images that carry neither decoration.
        pub enable_storage_image_qualifier_deduction: bool = false
            => set_bool(SPVC_COMPILER_OPTION_ENABLE_STORAGE_IMAGE_QUALIFIER_DEDUCTION),
        /// Zero-initialize variables that would otherwise be uninitialized.
        pub force_zero_initialized_variables: bool = false
            => set_bool(SPVC_COMPILER_OPTION_FORCE_ZERO_INITIALIZED_VARIABLES),
        /// Ignore NaN semantics in clamps, min/max and comparisons.
        pub relax_nan_checks: bool = false => set_bool(SPVC_COMPILER_OPTION_RELAX_NAN_CHECKS),
        /// Rewrite clip space depth between the `[0, w]` and `[-w, w]` conventions
        /// in vertex-like stages, in the direction the target expects.
        pub fixup_clip_space: bool = false => set_bool(SPVC_COMPILER_OPTION_FIXUP_DEPTH_CONVENTION),
        /// Invert `gl_Position.y` or its equivalent in vertex-like stages.
        pub flip_vertex_y: bool = false => set_bool(SPVC_COMPILER_OPTION_FLIP_VERTEX_Y),
        pub emit_line_directives: bool = false => set_bool(SPVC_COMPILER_OPTION_EMIT_LINE_DIRECTIVES),
    }
}

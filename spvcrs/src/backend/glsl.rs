use super::{Glsl, native_enum};
use crate::compiler::Compiler;
use crate::options::backend_options;
use crate::{Result, VariableId};

native_enum! {
    /// Default precision qualifier for ESSL
    pub enum Precision {
        #[default]
        Mediump = 0,
        Highp = 1,
    }
}

backend_options! {
    /// GLSL specific options
    pub struct GlslOptions {
        /// The `#version` to target
        pub version: u32 = 450 => set_uint(SPVC_COMPILER_OPTION_GLSL_VERSION),
        /// Emit ESSL instead of desktop GLSL
        pub es: bool = false => set_bool(SPVC_COMPILER_OPTION_GLSL_ES),
        /// Emit Vulkan GLSL rather than GL-compatible GLSL
        pub vulkan_semantics: bool = false => set_bool(SPVC_COMPILER_OPTION_GLSL_VULKAN_SEMANTICS),
        /// Redeclare `gl_PerVertex` in pre-rasterization stages. Ignored for ESSL.
        pub separate_shader_objects: bool = false
            => set_bool(SPVC_COMPILER_OPTION_GLSL_SEPARATE_SHADER_OBJECTS),
        /// Use `GL_ARB_shading_language_420pack` below version 420 to keep
        /// `layout(binding)`; bindings are stripped otherwise.
        pub enable_420pack_extension: bool = true
            => set_bool(SPVC_COMPILER_OPTION_GLSL_ENABLE_420PACK_EXTENSION),
        pub emit_push_constant_as_uniform_buffer: bool = false
            => set_bool(SPVC_COMPILER_OPTION_GLSL_EMIT_PUSH_CONSTANT_AS_UNIFORM_BUFFER),
        pub emit_uniform_buffer_as_plain_uniforms: bool = false
            => set_bool(SPVC_COMPILER_OPTION_GLSL_EMIT_UNIFORM_BUFFER_AS_PLAIN_UNIFORMS),
        pub force_flattened_io_blocks: bool = false
            => set_bool(SPVC_COMPILER_OPTION_GLSL_FORCE_FLATTENED_IO_BLOCKS),
        /// Wrap row-major UBO matrix loads for old AMD drivers
        pub enable_row_major_load_workaround: bool = true
            => set_bool(SPVC_COMPILER_OPTION_GLSL_ENABLE_ROW_MAJOR_LOAD_WORKAROUND),
        /// `layout(num_views = N)` for `GL_OVR_multiview2`; 0 disables it
        pub ovr_multiview_view_count: u32 = 0 => set_uint(SPVC_COMPILER_OPTION_GLSL_OVR_MULTIVIEW_VIEW_COUNT),
        pub support_nonzero_base_instance: bool = true
            => set_bool(SPVC_COMPILER_OPTION_GLSL_SUPPORT_NONZERO_BASE_INSTANCE),
        pub default_float_precision: Precision = Precision::Mediump
            => set_uint(SPVC_COMPILER_OPTION_GLSL_ES_DEFAULT_FLOAT_PRECISION_HIGHP),
        pub default_int_precision: Precision = Precision::Highp
            => set_uint(SPVC_COMPILER_OPTION_GLSL_ES_DEFAULT_INT_PRECISION_HIGHP),
    }
}

impl Compiler<Glsl> {
    /// Emits the buffer block `id` as a plain array of vectors.
    pub fn flatten_buffer_block(&mut self, id: VariableId) -> Result<()> {
        let (api, compiler) = self.raw()?;
        self.check(unsafe { (api.spvc_compiler_flatten_buffer_block()?)(compiler, id.0) })
    }
}

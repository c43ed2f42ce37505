//! Raw bindings for the SPIRV-Cross C API
//!
//! This crate declares the `spvc_*` types, constants and structures of
//! `spirv_cross_c.h` and resolves the entry points from the shared library at
//! runtime. Nothing here validates arguments or tracks lifetimes; see `spvcrs`
//! for the safe layer.

#![allow(non_camel_case_types)]
#![allow(clippy::missing_safety_doc)]

mod api;
mod loader;

pub use api::NativeApi;
pub use loader::{LIBRARY_PATH_ENV, Library, api, library};

use std::ffi::{c_char, c_void};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpvcError {
    #[error("Failed to load library: {0}")]
    LoadError(String),
    #[error("Function not found: {0}")]
    FunctionNotFound(String),
    #[error("Dynamic loading is not supported on this platform")]
    Unsupported,
}

pub type Result<T> = std::result::Result<T, SpvcError>;

macro_rules! opaque_handles {
    ($($object:ident => $handle:ident: $ptr:tt),* $(,)?) => {
        $(
            #[repr(C)]
            pub struct $object {
                _private: [u8; 0],
            }

            pub type $handle = *$ptr $object;
        )*
    };
}

opaque_handles! {
    spvc_context_s => spvc_context: mut,
    spvc_parsed_ir_s => spvc_parsed_ir: mut,
    spvc_compiler_s => spvc_compiler: mut,
    spvc_compiler_options_s => spvc_compiler_options: mut,
    spvc_resources_s => spvc_resources: mut,
    spvc_type_s => spvc_type: const,
    spvc_constant_s => spvc_constant: mut,
    spvc_set_s => spvc_set: const,
}

// Scalar typedefs
pub type spvc_bool = u8;
pub type SpvId = u32;
pub type spvc_type_id = SpvId;
pub type spvc_variable_id = SpvId;
pub type spvc_constant_id = SpvId;
pub type spvc_result = i32;

// C enums are int sized; values are passed through untouched.
pub type spvc_capture_mode = u32;
pub type spvc_backend = u32;
pub type spvc_resource_type = u32;
pub type spvc_builtin_resource_type = u32;
pub type spvc_basetype = u32;
pub type spvc_compiler_option = u32;
pub type spvc_hlsl_binding_flags = u32;
pub type spvc_msl_platform = u32;
pub type spvc_msl_index_type = u32;
pub type spvc_msl_shader_variable_format = u32;
pub type spvc_msl_shader_variable_rate = u32;
pub type spvc_msl_sampler_coord = u32;
pub type spvc_msl_sampler_filter = u32;
pub type spvc_msl_sampler_mip_filter = u32;
pub type spvc_msl_sampler_address = u32;
pub type spvc_msl_sampler_compare_func = u32;
pub type spvc_msl_sampler_border_color = u32;
pub type spvc_msl_format_resolution = u32;
pub type spvc_msl_chroma_location = u32;
pub type spvc_msl_component_swizzle = u32;
pub type spvc_msl_sampler_ycbcr_model_conversion = u32;
pub type spvc_msl_sampler_ycbcr_range = u32;

pub type SpvDecoration = u32;
pub type SpvExecutionModel = u32;
pub type SpvExecutionMode = u32;
pub type SpvBuiltIn = u32;
pub type SpvStorageClass = u32;
pub type SpvCapability = u32;
pub type SpvDim = u32;
pub type SpvImageFormat = u32;
pub type SpvAccessQualifier = u32;

pub type spvc_error_callback =
    Option<unsafe extern "C" fn(userdata: *mut c_void, error: *const c_char)>;

pub const SPVC_TRUE: spvc_bool = 1;
pub const SPVC_FALSE: spvc_bool = 0;

// spvc_result
pub const SPVC_SUCCESS: spvc_result = 0;
pub const SPVC_ERROR_INVALID_SPIRV: spvc_result = -1;
pub const SPVC_ERROR_UNSUPPORTED_SPIRV: spvc_result = -2;
pub const SPVC_ERROR_OUT_OF_MEMORY: spvc_result = -3;
pub const SPVC_ERROR_INVALID_ARGUMENT: spvc_result = -4;

// spvc_capture_mode
pub const SPVC_CAPTURE_MODE_COPY: spvc_capture_mode = 0;
pub const SPVC_CAPTURE_MODE_TAKE_OWNERSHIP: spvc_capture_mode = 1;

// spvc_backend
pub const SPVC_BACKEND_NONE: spvc_backend = 0;
pub const SPVC_BACKEND_GLSL: spvc_backend = 1;
pub const SPVC_BACKEND_HLSL: spvc_backend = 2;
pub const SPVC_BACKEND_MSL: spvc_backend = 3;
pub const SPVC_BACKEND_CPP: spvc_backend = 4;
pub const SPVC_BACKEND_JSON: spvc_backend = 5;

// spvc_resource_type
pub const SPVC_RESOURCE_TYPE_UNKNOWN: spvc_resource_type = 0;
pub const SPVC_RESOURCE_TYPE_UNIFORM_BUFFER: spvc_resource_type = 1;
pub const SPVC_RESOURCE_TYPE_STORAGE_BUFFER: spvc_resource_type = 2;
pub const SPVC_RESOURCE_TYPE_STAGE_INPUT: spvc_resource_type = 3;
pub const SPVC_RESOURCE_TYPE_STAGE_OUTPUT: spvc_resource_type = 4;
pub const SPVC_RESOURCE_TYPE_SUBPASS_INPUT: spvc_resource_type = 5;
pub const SPVC_RESOURCE_TYPE_STORAGE_IMAGE: spvc_resource_type = 6;
pub const SPVC_RESOURCE_TYPE_SAMPLED_IMAGE: spvc_resource_type = 7;
pub const SPVC_RESOURCE_TYPE_ATOMIC_COUNTER: spvc_resource_type = 8;
pub const SPVC_RESOURCE_TYPE_PUSH_CONSTANT: spvc_resource_type = 9;
pub const SPVC_RESOURCE_TYPE_SEPARATE_IMAGE: spvc_resource_type = 10;
pub const SPVC_RESOURCE_TYPE_SEPARATE_SAMPLERS: spvc_resource_type = 11;
pub const SPVC_RESOURCE_TYPE_ACCELERATION_STRUCTURE: spvc_resource_type = 12;
pub const SPVC_RESOURCE_TYPE_RAY_QUERY: spvc_resource_type = 13;
pub const SPVC_RESOURCE_TYPE_SHADER_RECORD_BUFFER: spvc_resource_type = 14;
pub const SPVC_RESOURCE_TYPE_GL_PLAIN_UNIFORM: spvc_resource_type = 15;

// spvc_builtin_resource_type
pub const SPVC_BUILTIN_RESOURCE_TYPE_UNKNOWN: spvc_builtin_resource_type = 0;
pub const SPVC_BUILTIN_RESOURCE_TYPE_STAGE_INPUT: spvc_builtin_resource_type = 1;
pub const SPVC_BUILTIN_RESOURCE_TYPE_STAGE_OUTPUT: spvc_builtin_resource_type = 2;

// spvc_basetype
pub const SPVC_BASETYPE_UNKNOWN: spvc_basetype = 0;
pub const SPVC_BASETYPE_VOID: spvc_basetype = 1;
pub const SPVC_BASETYPE_BOOLEAN: spvc_basetype = 2;
pub const SPVC_BASETYPE_INT8: spvc_basetype = 3;
pub const SPVC_BASETYPE_UINT8: spvc_basetype = 4;
pub const SPVC_BASETYPE_INT16: spvc_basetype = 5;
pub const SPVC_BASETYPE_UINT16: spvc_basetype = 6;
pub const SPVC_BASETYPE_INT32: spvc_basetype = 7;
pub const SPVC_BASETYPE_UINT32: spvc_basetype = 8;
pub const SPVC_BASETYPE_INT64: spvc_basetype = 9;
pub const SPVC_BASETYPE_UINT64: spvc_basetype = 10;
pub const SPVC_BASETYPE_ATOMIC_COUNTER: spvc_basetype = 11;
pub const SPVC_BASETYPE_FP16: spvc_basetype = 12;
pub const SPVC_BASETYPE_FP32: spvc_basetype = 13;
pub const SPVC_BASETYPE_FP64: spvc_basetype = 14;
pub const SPVC_BASETYPE_STRUCT: spvc_basetype = 15;
pub const SPVC_BASETYPE_IMAGE: spvc_basetype = 16;
pub const SPVC_BASETYPE_SAMPLED_IMAGE: spvc_basetype = 17;
pub const SPVC_BASETYPE_SAMPLER: spvc_basetype = 18;
pub const SPVC_BASETYPE_ACCELERATION_STRUCTURE: spvc_basetype = 19;

// spvc_hlsl_binding_flag_bits
pub const SPVC_HLSL_BINDING_AUTO_NONE_BIT: spvc_hlsl_binding_flags = 0;
pub const SPVC_HLSL_BINDING_AUTO_PUSH_CONSTANT_BIT: spvc_hlsl_binding_flags = 1 << 0;
pub const SPVC_HLSL_BINDING_AUTO_CBV_BIT: spvc_hlsl_binding_flags = 1 << 1;
pub const SPVC_HLSL_BINDING_AUTO_SRV_BIT: spvc_hlsl_binding_flags = 1 << 2;
pub const SPVC_HLSL_BINDING_AUTO_UAV_BIT: spvc_hlsl_binding_flags = 1 << 3;
pub const SPVC_HLSL_BINDING_AUTO_SAMPLER_BIT: spvc_hlsl_binding_flags = 1 << 4;
pub const SPVC_HLSL_BINDING_AUTO_ALL: spvc_hlsl_binding_flags = 0x7fffffff;

pub const SPVC_HLSL_PUSH_CONSTANT_DESC_SET: u32 = !0;
pub const SPVC_HLSL_PUSH_CONSTANT_BINDING: u32 = 0;

pub const SPVC_MSL_PUSH_CONSTANT_DESC_SET: u32 = !0;
pub const SPVC_MSL_PUSH_CONSTANT_BINDING: u32 = 0;
pub const SPVC_MSL_SWIZZLE_BUFFER_BINDING: u32 = !1;
pub const SPVC_MSL_BUFFER_SIZE_BUFFER_BINDING: u32 = !2;
pub const SPVC_MSL_ARGUMENT_BUFFER_BINDING: u32 = !3;

/// `SpvExecutionModelMax`, used by binding structs to mean "every stage".
pub const SPV_EXECUTION_MODEL_MAX: SpvExecutionModel = 0x7fffffff;
/// `SpvBuiltInMax`, used by interface variables to mean "not a builtin".
pub const SPV_BUILT_IN_MAX: SpvBuiltIn = 0x7fffffff;

// spvc_compiler_option
pub const SPVC_COMPILER_OPTION_COMMON_BIT: spvc_compiler_option = 0x1000000;
pub const SPVC_COMPILER_OPTION_GLSL_BIT: spvc_compiler_option = 0x2000000;
pub const SPVC_COMPILER_OPTION_HLSL_BIT: spvc_compiler_option = 0x4000000;
pub const SPVC_COMPILER_OPTION_MSL_BIT: spvc_compiler_option = 0x8000000;
pub const SPVC_COMPILER_OPTION_LANG_BITS: spvc_compiler_option = 0x0f000000;
pub const SPVC_COMPILER_OPTION_ENUM_BITS: spvc_compiler_option = 0xffffff;

macro_rules! compiler_options {
    ($($name:ident = $value:literal | $bit:ident;)*) => {
        $(pub const $name: spvc_compiler_option = $value | $bit;)*
    };
}

compiler_options! {
    SPVC_COMPILER_OPTION_FORCE_TEMPORARY = 1 | SPVC_COMPILER_OPTION_COMMON_BIT;
    SPVC_COMPILER_OPTION_FLATTEN_MULTIDIMENSIONAL_ARRAYS = 2 | SPVC_COMPILER_OPTION_COMMON_BIT;
    SPVC_COMPILER_OPTION_FIXUP_DEPTH_CONVENTION = 3 | SPVC_COMPILER_OPTION_COMMON_BIT;
    SPVC_COMPILER_OPTION_FLIP_VERTEX_Y = 4 | SPVC_COMPILER_OPTION_COMMON_BIT;

    SPVC_COMPILER_OPTION_GLSL_SUPPORT_NONZERO_BASE_INSTANCE = 5 | SPVC_COMPILER_OPTION_GLSL_BIT;
    SPVC_COMPILER_OPTION_GLSL_SEPARATE_SHADER_OBJECTS = 6 | SPVC_COMPILER_OPTION_GLSL_BIT;
    SPVC_COMPILER_OPTION_GLSL_ENABLE_420PACK_EXTENSION = 7 | SPVC_COMPILER_OPTION_GLSL_BIT;
    SPVC_COMPILER_OPTION_GLSL_VERSION = 8 | SPVC_COMPILER_OPTION_GLSL_BIT;
    SPVC_COMPILER_OPTION_GLSL_ES = 9 | SPVC_COMPILER_OPTION_GLSL_BIT;
    SPVC_COMPILER_OPTION_GLSL_VULKAN_SEMANTICS = 10 | SPVC_COMPILER_OPTION_GLSL_BIT;
    SPVC_COMPILER_OPTION_GLSL_ES_DEFAULT_FLOAT_PRECISION_HIGHP = 11 | SPVC_COMPILER_OPTION_GLSL_BIT;
    SPVC_COMPILER_OPTION_GLSL_ES_DEFAULT_INT_PRECISION_HIGHP = 12 | SPVC_COMPILER_OPTION_GLSL_BIT;

    SPVC_COMPILER_OPTION_HLSL_SHADER_MODEL = 13 | SPVC_COMPILER_OPTION_HLSL_BIT;
    SPVC_COMPILER_OPTION_HLSL_POINT_SIZE_COMPAT = 14 | SPVC_COMPILER_OPTION_HLSL_BIT;
    SPVC_COMPILER_OPTION_HLSL_POINT_COORD_COMPAT = 15 | SPVC_COMPILER_OPTION_HLSL_BIT;
    SPVC_COMPILER_OPTION_HLSL_SUPPORT_NONZERO_BASE_VERTEX_BASE_INSTANCE = 16 | SPVC_COMPILER_OPTION_HLSL_BIT;

    SPVC_COMPILER_OPTION_MSL_VERSION = 17 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_TEXEL_BUFFER_TEXTURE_WIDTH = 18 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_SWIZZLE_BUFFER_INDEX = 19 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_INDIRECT_PARAMS_BUFFER_INDEX = 20 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_SHADER_OUTPUT_BUFFER_INDEX = 21 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_SHADER_PATCH_OUTPUT_BUFFER_INDEX = 22 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_SHADER_TESS_FACTOR_OUTPUT_BUFFER_INDEX = 23 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_SHADER_INPUT_WORKGROUP_INDEX = 24 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_ENABLE_POINT_SIZE_BUILTIN = 25 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_DISABLE_RASTERIZATION = 26 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_CAPTURE_OUTPUT_TO_BUFFER = 27 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_SWIZZLE_TEXTURE_SAMPLES = 28 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_PAD_FRAGMENT_OUTPUT_COMPONENTS = 29 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_TESS_DOMAIN_ORIGIN_LOWER_LEFT = 30 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_PLATFORM = 31 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_ARGUMENT_BUFFERS = 32 | SPVC_COMPILER_OPTION_MSL_BIT;

    SPVC_COMPILER_OPTION_GLSL_EMIT_PUSH_CONSTANT_AS_UNIFORM_BUFFER = 33 | SPVC_COMPILER_OPTION_GLSL_BIT;

    SPVC_COMPILER_OPTION_MSL_TEXTURE_BUFFER_NATIVE = 34 | SPVC_COMPILER_OPTION_MSL_BIT;

    SPVC_COMPILER_OPTION_GLSL_EMIT_UNIFORM_BUFFER_AS_PLAIN_UNIFORMS = 35 | SPVC_COMPILER_OPTION_GLSL_BIT;

    SPVC_COMPILER_OPTION_MSL_BUFFER_SIZE_BUFFER_INDEX = 36 | SPVC_COMPILER_OPTION_MSL_BIT;

    SPVC_COMPILER_OPTION_EMIT_LINE_DIRECTIVES = 37 | SPVC_COMPILER_OPTION_COMMON_BIT;

    SPVC_COMPILER_OPTION_MSL_MULTIVIEW = 38 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_VIEW_MASK_BUFFER_INDEX = 39 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_DEVICE_INDEX = 40 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_VIEW_INDEX_FROM_DEVICE_INDEX = 41 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_DISPATCH_BASE = 42 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_DYNAMIC_OFFSETS_BUFFER_INDEX = 43 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_TEXTURE_1D_AS_2D = 44 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_ENABLE_BASE_INDEX_ZERO = 45 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_FRAMEBUFFER_FETCH_SUBPASS = 46 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_INVARIANT_FP_MATH = 47 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_EMULATE_CUBEMAP_ARRAY = 48 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_ENABLE_DECORATION_BINDING = 49 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_FORCE_ACTIVE_ARGUMENT_BUFFER_RESOURCES = 50 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_FORCE_NATIVE_ARRAYS = 51 | SPVC_COMPILER_OPTION_MSL_BIT;

    SPVC_COMPILER_OPTION_ENABLE_STORAGE_IMAGE_QUALIFIER_DEDUCTION = 52 | SPVC_COMPILER_OPTION_COMMON_BIT;

    SPVC_COMPILER_OPTION_HLSL_FORCE_STORAGE_BUFFER_AS_UAV = 53 | SPVC_COMPILER_OPTION_HLSL_BIT;

    SPVC_COMPILER_OPTION_FORCE_ZERO_INITIALIZED_VARIABLES = 54 | SPVC_COMPILER_OPTION_COMMON_BIT;

    SPVC_COMPILER_OPTION_HLSL_NONWRITABLE_UAV_TEXTURE_AS_SRV = 55 | SPVC_COMPILER_OPTION_HLSL_BIT;

    SPVC_COMPILER_OPTION_MSL_ENABLE_FRAG_OUTPUT_MASK = 56 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_ENABLE_FRAG_DEPTH_BUILTIN = 57 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_ENABLE_FRAG_STENCIL_REF_BUILTIN = 58 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_ENABLE_CLIP_DISTANCE_USER_VARYING = 59 | SPVC_COMPILER_OPTION_MSL_BIT;

    SPVC_COMPILER_OPTION_HLSL_ENABLE_16BIT_TYPES = 60 | SPVC_COMPILER_OPTION_HLSL_BIT;

    SPVC_COMPILER_OPTION_MSL_MULTI_PATCH_WORKGROUP = 61 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_SHADER_INPUT_BUFFER_INDEX = 62 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_SHADER_INDEX_BUFFER_INDEX = 63 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_VERTEX_FOR_TESSELLATION = 64 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_VERTEX_INDEX_TYPE = 65 | SPVC_COMPILER_OPTION_MSL_BIT;

    SPVC_COMPILER_OPTION_GLSL_FORCE_FLATTENED_IO_BLOCKS = 66 | SPVC_COMPILER_OPTION_GLSL_BIT;

    SPVC_COMPILER_OPTION_MSL_MULTIVIEW_LAYERED_RENDERING = 67 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_ARRAYED_SUBPASS_INPUT = 68 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_R32UI_LINEAR_TEXTURE_ALIGNMENT = 69 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_R32UI_ALIGNMENT_CONSTANT_ID = 70 | SPVC_COMPILER_OPTION_MSL_BIT;

    SPVC_COMPILER_OPTION_HLSL_FLATTEN_MATRIX_VERTEX_INPUT_SEMANTICS = 71 | SPVC_COMPILER_OPTION_HLSL_BIT;

    SPVC_COMPILER_OPTION_MSL_IOS_USE_SIMDGROUP_FUNCTIONS = 72 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_EMULATE_SUBGROUPS = 73 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_FIXED_SUBGROUP_SIZE = 74 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_FORCE_SAMPLE_RATE_SHADING = 75 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_IOS_SUPPORT_BASE_VERTEX_INSTANCE = 76 | SPVC_COMPILER_OPTION_MSL_BIT;

    SPVC_COMPILER_OPTION_GLSL_OVR_MULTIVIEW_VIEW_COUNT = 77 | SPVC_COMPILER_OPTION_GLSL_BIT;

    SPVC_COMPILER_OPTION_RELAX_NAN_CHECKS = 78 | SPVC_COMPILER_OPTION_COMMON_BIT;

    SPVC_COMPILER_OPTION_MSL_RAW_BUFFER_TESE_INPUT = 79 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_SHADER_PATCH_INPUT_BUFFER_INDEX = 80 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_MANUAL_HELPER_INVOCATION_UPDATES = 81 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_CHECK_DISCARDED_FRAG_STORES = 82 | SPVC_COMPILER_OPTION_MSL_BIT;

    SPVC_COMPILER_OPTION_GLSL_ENABLE_ROW_MAJOR_LOAD_WORKAROUND = 83 | SPVC_COMPILER_OPTION_GLSL_BIT;

    SPVC_COMPILER_OPTION_MSL_ARGUMENT_BUFFERS_TIER = 84 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_SAMPLE_DREF_LOD_ARRAY_AS_GRAD = 85 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_READWRITE_TEXTURE_FENCES = 86 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_REPLACE_RECURSIVE_INPUTS = 87 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_AGX_MANUAL_CUBE_GRAD_FIXUP = 88 | SPVC_COMPILER_OPTION_MSL_BIT;
    SPVC_COMPILER_OPTION_MSL_FORCE_FRAGMENT_WITH_SIDE_EFFECTS_EXECUTION = 89 | SPVC_COMPILER_OPTION_MSL_BIT;

    SPVC_COMPILER_OPTION_HLSL_USE_ENTRY_POINT_NAME = 90 | SPVC_COMPILER_OPTION_HLSL_BIT;
    SPVC_COMPILER_OPTION_HLSL_PRESERVE_STRUCTURED_BUFFERS = 91 | SPVC_COMPILER_OPTION_HLSL_BIT;
}

// Reflection structures

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct spvc_reflected_resource {
    pub id: spvc_variable_id,
    pub base_type_id: spvc_type_id,
    pub type_id: spvc_type_id,
    pub name: *const c_char,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct spvc_reflected_builtin_resource {
    pub builtin: SpvBuiltIn,
    pub value_type_id: spvc_type_id,
    pub resource: spvc_reflected_resource,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct spvc_entry_point {
    pub execution_model: SpvExecutionModel,
    pub name: *const c_char,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct spvc_combined_image_sampler {
    pub combined_id: spvc_variable_id,
    pub image_id: spvc_variable_id,
    pub sampler_id: spvc_variable_id,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct spvc_specialization_constant {
    pub id: spvc_constant_id,
    pub constant_id: u32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct spvc_buffer_range {
    pub index: u32,
    pub offset: usize,
    pub range: usize,
}

// HLSL structures

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct spvc_hlsl_root_constants {
    pub start: u32,
    pub end: u32,
    pub binding: u32,
    pub space: u32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct spvc_hlsl_vertex_attribute_remap {
    pub location: u32,
    pub semantic: *const c_char,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct spvc_hlsl_resource_binding_mapping {
    pub register_space: u32,
    pub register_binding: u32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct spvc_hlsl_resource_binding {
    pub stage: SpvExecutionModel,
    pub desc_set: u32,
    pub binding: u32,
    pub cbv: spvc_hlsl_resource_binding_mapping,
    pub uav: spvc_hlsl_resource_binding_mapping,
    pub srv: spvc_hlsl_resource_binding_mapping,
    pub sampler: spvc_hlsl_resource_binding_mapping,
}

// MSL structures

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct spvc_msl_resource_binding_2 {
    pub stage: SpvExecutionModel,
    pub desc_set: u32,
    pub binding: u32,
    pub count: u32,
    pub msl_buffer: u32,
    pub msl_texture: u32,
    pub msl_sampler: u32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct spvc_msl_shader_interface_var_2 {
    pub location: u32,
    pub format: spvc_msl_shader_variable_format,
    pub builtin: SpvBuiltIn,
    pub vecsize: u32,
    pub rate: spvc_msl_shader_variable_rate,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct spvc_msl_constexpr_sampler {
    pub coord: spvc_msl_sampler_coord,
    pub min_filter: spvc_msl_sampler_filter,
    pub mag_filter: spvc_msl_sampler_filter,
    pub mip_filter: spvc_msl_sampler_mip_filter,
    pub s_address: spvc_msl_sampler_address,
    pub t_address: spvc_msl_sampler_address,
    pub r_address: spvc_msl_sampler_address,
    pub compare_func: spvc_msl_sampler_compare_func,
    pub border_color: spvc_msl_sampler_border_color,
    pub lod_clamp_min: f32,
    pub lod_clamp_max: f32,
    pub max_anisotropy: i32,
    pub compare_enable: spvc_bool,
    pub lod_clamp_enable: spvc_bool,
    pub anisotropy_enable: spvc_bool,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct spvc_msl_sampler_ycbcr_conversion {
    pub planes: u32,
    pub resolution: spvc_msl_format_resolution,
    pub chroma_filter: spvc_msl_sampler_filter,
    pub x_chroma_offset: spvc_msl_chroma_location,
    pub y_chroma_offset: spvc_msl_chroma_location,
    pub swizzle: [spvc_msl_component_swizzle; 4],
    pub ycbcr_model: spvc_msl_sampler_ycbcr_model_conversion,
    pub ycbcr_range: spvc_msl_sampler_ycbcr_range,
    pub bpc: u32,
}

use super::{Msl, native_enum, stage_or_all};
use crate::compiler::Compiler;
use crate::options::backend_options;
use crate::strings::{c_string, native_string};
use crate::{Result, VariableId};
use spirv::{BuiltIn, ExecutionModel};
use spvc::{
    SPV_BUILT_IN_MAX, SPVC_FALSE, SPVC_TRUE, spvc_bool, spvc_msl_constexpr_sampler,
    spvc_msl_resource_binding_2, spvc_msl_sampler_ycbcr_conversion, spvc_msl_shader_interface_var_2,
};

native_enum! {
    pub enum Platform {
        Ios = 0,
        #[default]
        MacOS = 1,
    }

    /// Index buffer type of a vertex shader run for tessellation
    pub enum IndexType {
        #[default]
        None = 0,
        UInt16 = 1,
        UInt32 = 2,
    }

    pub enum ArgumentBuffersTier {
        #[default]
        Tier1 = 0,
        Tier2 = 1,
    }

    pub enum ShaderVariableFormat {
        #[default]
        Other = 0,
        UInt8 = 1,
        UInt16 = 2,
        Any16 = 3,
        Any32 = 4,
    }

    pub enum ShaderVariableRate {
        #[default]
        PerVertex = 0,
        PerPrimitive = 1,
        PerPatch = 2,
    }

    pub enum SamplerCoord {
        #[default]
        Normalized = 0,
        Pixel = 1,
    }

    pub enum SamplerFilter {
        #[default]
        Nearest = 0,
        Linear = 1,
    }

    pub enum SamplerMipFilter {
        #[default]
        None = 0,
        Nearest = 1,
        Linear = 2,
    }

    pub enum SamplerAddress {
        ClampToZero = 0,
        #[default]
        ClampToEdge = 1,
        ClampToBorder = 2,
        Repeat = 3,
        MirroredRepeat = 4,
    }

    pub enum SamplerCompareFunc {
        #[default]
        Never = 0,
        Less = 1,
        LessEqual = 2,
        Greater = 3,
        GreaterEqual = 4,
        Equal = 5,
        NotEqual = 6,
        Always = 7,
    }

    pub enum SamplerBorderColor {
        #[default]
        TransparentBlack = 0,
        OpaqueBlack = 1,
        OpaqueWhite = 2,
    }

    /// Chroma subsampling of a multi-planar format
    pub enum FormatResolution {
        #[default]
        Res444 = 0,
        Res422 = 1,
        Res420 = 2,
    }

    pub enum ChromaLocation {
        #[default]
        CositedEven = 0,
        Midpoint = 1,
    }

    pub enum ComponentSwizzle {
        #[default]
        Identity = 0,
        Zero = 1,
        One = 2,
        R = 3,
        G = 4,
        B = 5,
        A = 6,
    }

    pub enum SamplerYcbcrModelConversion {
        #[default]
        RgbIdentity = 0,
        YcbcrIdentity = 1,
        YcbcrBt709 = 2,
        YcbcrBt601 = 3,
        YcbcrBt2020 = 4,
    }

    pub enum SamplerYcbcrRange {
        #[default]
        ItuFull = 0,
        ItuNarrow = 1,
    }
}

/// A Metal Shading Language version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MslVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl MslVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        MslVersion { major, minor, patch }
    }
}

impl Default for MslVersion {
    fn default() -> Self {
        MslVersion::new(1, 2, 0)
    }
}

impl From<MslVersion> for u32 {
    fn from(version: MslVersion) -> u32 {
        version.major * 10000 + version.minor * 100 + version.patch
    }
}

backend_options! {
    /// MSL specific options
    pub struct MslOptions {
        pub platform: Platform = Platform::MacOS => set_uint(SPVC_COMPILER_OPTION_MSL_PLATFORM),
        pub version: MslVersion = MslVersion::new(1, 2, 0) => set_uint(SPVC_COMPILER_OPTION_MSL_VERSION),
        /// Width of 2D textures that emulate texel buffers
        pub texel_buffer_texture_width: u32 = 4096
            => set_uint(SPVC_COMPILER_OPTION_MSL_TEXEL_BUFFER_TEXTURE_WIDTH),
        pub r32ui_linear_texture_alignment: u32 = 4
            => set_uint(SPVC_COMPILER_OPTION_MSL_R32UI_LINEAR_TEXTURE_ALIGNMENT),
        pub r32ui_alignment_constant_id: u32 = 65535
            => set_uint(SPVC_COMPILER_OPTION_MSL_R32UI_ALIGNMENT_CONSTANT_ID),
        pub swizzle_buffer_index: u32 = 30 => set_uint(SPVC_COMPILER_OPTION_MSL_SWIZZLE_BUFFER_INDEX),
        pub indirect_params_buffer_index: u32 = 29
            => set_uint(SPVC_COMPILER_OPTION_MSL_INDIRECT_PARAMS_BUFFER_INDEX),
        pub shader_output_buffer_index: u32 = 28
            => set_uint(SPVC_COMPILER_OPTION_MSL_SHADER_OUTPUT_BUFFER_INDEX),
        pub shader_patch_output_buffer_index: u32 = 27
            => set_uint(SPVC_COMPILER_OPTION_MSL_SHADER_PATCH_OUTPUT_BUFFER_INDEX),
        pub shader_tess_factor_buffer_index: u32 = 26
            => set_uint(SPVC_COMPILER_OPTION_MSL_SHADER_TESS_FACTOR_OUTPUT_BUFFER_INDEX),
        pub buffer_size_buffer_index: u32 = 25 => set_uint(SPVC_COMPILER_OPTION_MSL_BUFFER_SIZE_BUFFER_INDEX),
        pub view_mask_buffer_index: u32 = 24 => set_uint(SPVC_COMPILER_OPTION_MSL_VIEW_MASK_BUFFER_INDEX),
        pub dynamic_offsets_buffer_index: u32 = 23
            => set_uint(SPVC_COMPILER_OPTION_MSL_DYNAMIC_OFFSETS_BUFFER_INDEX),
        pub shader_input_buffer_index: u32 = 22 => set_uint(SPVC_COMPILER_OPTION_MSL_SHADER_INPUT_BUFFER_INDEX),
        pub shader_index_buffer_index: u32 = 21 => set_uint(SPVC_COMPILER_OPTION_MSL_SHADER_INDEX_BUFFER_INDEX),
        pub shader_patch_input_buffer_index: u32 = 20
            => set_uint(SPVC_COMPILER_OPTION_MSL_SHADER_PATCH_INPUT_BUFFER_INDEX),
        pub shader_input_wg_index: u32 = 0 => set_uint(SPVC_COMPILER_OPTION_MSL_SHADER_INPUT_WORKGROUP_INDEX),
        pub device_index: u32 = 0 => set_uint(SPVC_COMPILER_OPTION_MSL_DEVICE_INDEX),
        /// Bit mask of fragment outputs to keep, by location
        pub enable_frag_output_mask: u32 = 0xffff_ffff => set_uint(SPVC_COMPILER_OPTION_MSL_ENABLE_FRAG_OUTPUT_MASK),
        pub enable_point_size_builtin: bool = true => set_bool(SPVC_COMPILER_OPTION_MSL_ENABLE_POINT_SIZE_BUILTIN),
        pub enable_frag_depth_builtin: bool = true => set_bool(SPVC_COMPILER_OPTION_MSL_ENABLE_FRAG_DEPTH_BUILTIN),
        pub enable_frag_stencil_ref_builtin: bool = true
            => set_bool(SPVC_COMPILER_OPTION_MSL_ENABLE_FRAG_STENCIL_REF_BUILTIN),
        pub disable_rasterization: bool = false => set_bool(SPVC_COMPILER_OPTION_MSL_DISABLE_RASTERIZATION),
        pub capture_output_to_buffer: bool = false => set_bool(SPVC_COMPILER_OPTION_MSL_CAPTURE_OUTPUT_TO_BUFFER),
        pub swizzle_texture_samples: bool = false => set_bool(SPVC_COMPILER_OPTION_MSL_SWIZZLE_TEXTURE_SAMPLES),
        pub tess_domain_origin_lower_left: bool = false
            => set_bool(SPVC_COMPILER_OPTION_MSL_TESS_DOMAIN_ORIGIN_LOWER_LEFT),
        pub multiview: bool = false => set_bool(SPVC_COMPILER_OPTION_MSL_MULTIVIEW),
        pub multiview_layered_rendering: bool = true
            => set_bool(SPVC_COMPILER_OPTION_MSL_MULTIVIEW_LAYERED_RENDERING),
        pub view_index_from_device_index: bool = false
            => set_bool(SPVC_COMPILER_OPTION_MSL_VIEW_INDEX_FROM_DEVICE_INDEX),
        pub dispatch_base: bool = false => set_bool(SPVC_COMPILER_OPTION_MSL_DISPATCH_BASE),
        pub texture_1d_as_2d: bool = false => set_bool(SPVC_COMPILER_OPTION_MSL_TEXTURE_1D_AS_2D),
        /// Place resources in argument buffers, one per descriptor set
        pub argument_buffers: bool = false => set_bool(SPVC_COMPILER_OPTION_MSL_ARGUMENT_BUFFERS),
        pub argument_buffers_tier: ArgumentBuffersTier = ArgumentBuffersTier::Tier1
            => set_uint(SPVC_COMPILER_OPTION_MSL_ARGUMENT_BUFFERS_TIER),
        pub enable_base_index_zero: bool = false => set_bool(SPVC_COMPILER_OPTION_MSL_ENABLE_BASE_INDEX_ZERO),
        pub pad_fragment_output_components: bool = false
            => set_bool(SPVC_COMPILER_OPTION_MSL_PAD_FRAGMENT_OUTPUT_COMPONENTS),
        pub ios_support_base_vertex_instance: bool = false
            => set_bool(SPVC_COMPILER_OPTION_MSL_IOS_SUPPORT_BASE_VERTEX_INSTANCE),
        pub use_framebuffer_fetch_subpasses: bool = false
            => set_bool(SPVC_COMPILER_OPTION_MSL_FRAMEBUFFER_FETCH_SUBPASS),
        pub invariant_float_math: bool = false => set_bool(SPVC_COMPILER_OPTION_MSL_INVARIANT_FP_MATH),
        pub emulate_cube_array: bool = false => set_bool(SPVC_COMPILER_OPTION_MSL_EMULATE_CUBEMAP_ARRAY),
        pub enable_decoration_binding: bool = false
            => set_bool(SPVC_COMPILER_OPTION_MSL_ENABLE_DECORATION_BINDING),
        pub texture_buffer_native: bool = false => set_bool(SPVC_COMPILER_OPTION_MSL_TEXTURE_BUFFER_NATIVE),
        pub force_active_argument_buffer_resources: bool = false
            => set_bool(SPVC_COMPILER_OPTION_MSL_FORCE_ACTIVE_ARGUMENT_BUFFER_RESOURCES),
        pub force_native_arrays: bool = false => set_bool(SPVC_COMPILER_OPTION_MSL_FORCE_NATIVE_ARRAYS),
        pub enable_clip_distance_user_varying: bool = true
            => set_bool(SPVC_COMPILER_OPTION_MSL_ENABLE_CLIP_DISTANCE_USER_VARYING),
        pub multi_patch_workgroup: bool = false => set_bool(SPVC_COMPILER_OPTION_MSL_MULTI_PATCH_WORKGROUP),
        pub raw_buffer_tese_input: bool = false => set_bool(SPVC_COMPILER_OPTION_MSL_RAW_BUFFER_TESE_INPUT),
        pub vertex_for_tessellation: bool = false => set_bool(SPVC_COMPILER_OPTION_MSL_VERTEX_FOR_TESSELLATION),
        pub vertex_index_type: IndexType = IndexType::None => set_uint(SPVC_COMPILER_OPTION_MSL_VERTEX_INDEX_TYPE),
        pub arrayed_subpass_input: bool = false => set_bool(SPVC_COMPILER_OPTION_MSL_ARRAYED_SUBPASS_INPUT),
        pub ios_use_simdgroup_functions: bool = false
            => set_bool(SPVC_COMPILER_OPTION_MSL_IOS_USE_SIMDGROUP_FUNCTIONS),
        pub emulate_subgroups: bool = false => set_bool(SPVC_COMPILER_OPTION_MSL_EMULATE_SUBGROUPS),
        /// 0 leaves the subgroup size up to the driver
        pub fixed_subgroup_size: u32 = 0 => set_uint(SPVC_COMPILER_OPTION_MSL_FIXED_SUBGROUP_SIZE),
        pub force_sample_rate_shading: bool = false
            => set_bool(SPVC_COMPILER_OPTION_MSL_FORCE_SAMPLE_RATE_SHADING),
        pub manual_helper_invocation_updates: bool = true
            => set_bool(SPVC_COMPILER_OPTION_MSL_MANUAL_HELPER_INVOCATION_UPDATES),
        pub check_discarded_frag_stores: bool = false
            => set_bool(SPVC_COMPILER_OPTION_MSL_CHECK_DISCARDED_FRAG_STORES),
        pub sample_dref_lod_array_as_grad: bool = false
            => set_bool(SPVC_COMPILER_OPTION_MSL_SAMPLE_DREF_LOD_ARRAY_AS_GRAD),
        pub readwrite_texture_fences: bool = true => set_bool(SPVC_COMPILER_OPTION_MSL_READWRITE_TEXTURE_FENCES),
        pub replace_recursive_inputs: bool = false
            => set_bool(SPVC_COMPILER_OPTION_MSL_REPLACE_RECURSIVE_INPUTS),
        pub agx_manual_cube_grad_fixup: bool = false
            => set_bool(SPVC_COMPILER_OPTION_MSL_AGX_MANUAL_CUBE_GRAD_FIXUP),
        pub force_fragment_with_side_effects_execution: bool = false
            => set_bool(SPVC_COMPILER_OPTION_MSL_FORCE_FRAGMENT_WITH_SIDE_EFFECTS_EXECUTION),
    }
}

/// Metal resource indices for the Vulkan resource at `(desc_set, binding)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MslResourceBinding {
    /// `None` applies the binding to every stage
    pub stage: Option<ExecutionModel>,
    pub desc_set: u32,
    pub binding: u32,
    /// Array size of the resource; 0 for runtime arrays
    pub count: u32,
    pub msl_buffer: u32,
    pub msl_texture: u32,
    pub msl_sampler: u32,
}

impl From<&MslResourceBinding> for spvc_msl_resource_binding_2 {
    fn from(value: &MslResourceBinding) -> Self {
        spvc_msl_resource_binding_2 {
            stage: stage_or_all(value.stage),
            desc_set: value.desc_set,
            binding: value.binding,
            count: value.count,
            msl_buffer: value.msl_buffer,
            msl_texture: value.msl_texture,
            msl_sampler: value.msl_sampler,
        }
    }
}

/// Layout of a stage input or output at `location`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShaderInterfaceVar {
    pub location: u32,
    pub format: ShaderVariableFormat,
    pub builtin: Option<BuiltIn>,
    pub vecsize: u32,
    pub rate: ShaderVariableRate,
}

impl From<&ShaderInterfaceVar> for spvc_msl_shader_interface_var_2 {
    fn from(value: &ShaderInterfaceVar) -> Self {
        spvc_msl_shader_interface_var_2 {
            location: value.location,
            format: value.format.into(),
            builtin: value.builtin.map_or(SPV_BUILT_IN_MAX, |builtin| builtin as u32),
            vecsize: value.vecsize,
            rate: value.rate.into(),
        }
    }
}

fn native_bool(value: bool) -> spvc_bool {
    if value { SPVC_TRUE } else { SPVC_FALSE }
}

/// A sampler baked into the shader source
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstexprSampler {
    pub coord: SamplerCoord,
    pub min_filter: SamplerFilter,
    pub mag_filter: SamplerFilter,
    pub mip_filter: SamplerMipFilter,
    pub s_address: SamplerAddress,
    pub t_address: SamplerAddress,
    pub r_address: SamplerAddress,
    pub compare_func: SamplerCompareFunc,
    pub border_color: SamplerBorderColor,
    pub lod_clamp_min: f32,
    pub lod_clamp_max: f32,
    pub max_anisotropy: i32,
    pub compare_enable: bool,
    pub lod_clamp_enable: bool,
    pub anisotropy_enable: bool,
}

impl Default for ConstexprSampler {
    fn default() -> Self {
        ConstexprSampler {
            coord: SamplerCoord::Normalized,
            min_filter: SamplerFilter::Nearest,
            mag_filter: SamplerFilter::Nearest,
            mip_filter: SamplerMipFilter::None,
            s_address: SamplerAddress::ClampToEdge,
            t_address: SamplerAddress::ClampToEdge,
            r_address: SamplerAddress::ClampToEdge,
            compare_func: SamplerCompareFunc::Never,
            border_color: SamplerBorderColor::TransparentBlack,
            lod_clamp_min: 0.0,
            lod_clamp_max: 1000.0,
            max_anisotropy: 1,
            compare_enable: false,
            lod_clamp_enable: false,
            anisotropy_enable: false,
        }
    }
}

impl From<&ConstexprSampler> for spvc_msl_constexpr_sampler {
    fn from(value: &ConstexprSampler) -> Self {
        spvc_msl_constexpr_sampler {
            coord: value.coord.into(),
            min_filter: value.min_filter.into(),
            mag_filter: value.mag_filter.into(),
            mip_filter: value.mip_filter.into(),
            s_address: value.s_address.into(),
            t_address: value.t_address.into(),
            r_address: value.r_address.into(),
            compare_func: value.compare_func.into(),
            border_color: value.border_color.into(),
            lod_clamp_min: value.lod_clamp_min,
            lod_clamp_max: value.lod_clamp_max,
            max_anisotropy: value.max_anisotropy,
            compare_enable: native_bool(value.compare_enable),
            lod_clamp_enable: native_bool(value.lod_clamp_enable),
            anisotropy_enable: native_bool(value.anisotropy_enable),
        }
    }
}

/// Y'CbCr conversion applied by a constexpr sampler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerYcbcrConversion {
    pub planes: u32,
    pub resolution: FormatResolution,
    pub chroma_filter: SamplerFilter,
    pub x_chroma_offset: ChromaLocation,
    pub y_chroma_offset: ChromaLocation,
    pub swizzle: [ComponentSwizzle; 4],
    pub ycbcr_model: SamplerYcbcrModelConversion,
    pub ycbcr_range: SamplerYcbcrRange,
    /// Bits per channel
    pub bpc: u32,
}

impl Default for SamplerYcbcrConversion {
    fn default() -> Self {
        SamplerYcbcrConversion {
            planes: 0,
            resolution: FormatResolution::Res444,
            chroma_filter: SamplerFilter::Nearest,
            x_chroma_offset: ChromaLocation::CositedEven,
            y_chroma_offset: ChromaLocation::CositedEven,
            swizzle: [ComponentSwizzle::Identity; 4],
            ycbcr_model: SamplerYcbcrModelConversion::RgbIdentity,
            ycbcr_range: SamplerYcbcrRange::ItuFull,
            bpc: 8,
        }
    }
}

impl From<&SamplerYcbcrConversion> for spvc_msl_sampler_ycbcr_conversion {
    fn from(value: &SamplerYcbcrConversion) -> Self {
        spvc_msl_sampler_ycbcr_conversion {
            planes: value.planes,
            resolution: value.resolution.into(),
            chroma_filter: value.chroma_filter.into(),
            x_chroma_offset: value.x_chroma_offset.into(),
            y_chroma_offset: value.y_chroma_offset.into(),
            swizzle: value.swizzle.map(u32::from),
            ycbcr_model: value.ycbcr_model.into(),
            ycbcr_range: value.ycbcr_range.into(),
            bpc: value.bpc,
        }
    }
}

macro_rules! msl_queries {
    ($($(#[$meta:meta])* $name:ident => $native:ident;)*) => {
        $(
            $(#[$meta])*
            pub fn $name(&self) -> Result<bool> {
                let (api, compiler) = self.raw()?;
                Ok(unsafe { (api.$native()?)(compiler) } != SPVC_FALSE)
            }
        )*
    };
}

impl Compiler<Msl> {
    msl_queries! {
        is_rasterization_disabled => spvc_compiler_msl_is_rasterization_disabled;
        /// Whether the output reads texture swizzles from the swizzle buffer.
        needs_swizzle_buffer => spvc_compiler_msl_needs_swizzle_buffer;
        needs_buffer_size_buffer => spvc_compiler_msl_needs_buffer_size_buffer;
        needs_output_buffer => spvc_compiler_msl_needs_output_buffer;
        needs_patch_output_buffer => spvc_compiler_msl_needs_patch_output_buffer;
        needs_input_threadgroup_mem => spvc_compiler_msl_needs_input_threadgroup_mem;
    }

    pub fn add_resource_binding(&mut self, binding: &MslResourceBinding) -> Result<()> {
        let (api, compiler) = self.raw()?;
        let raw = spvc_msl_resource_binding_2::from(binding);
        self.check(unsafe { (api.spvc_compiler_msl_add_resource_binding_2()?)(compiler, &raw) })
    }

    pub fn add_shader_input(&mut self, input: &ShaderInterfaceVar) -> Result<()> {
        let (api, compiler) = self.raw()?;
        let raw = spvc_msl_shader_interface_var_2::from(input);
        self.check(unsafe { (api.spvc_compiler_msl_add_shader_input_2()?)(compiler, &raw) })
    }

    pub fn add_shader_output(&mut self, output: &ShaderInterfaceVar) -> Result<()> {
        let (api, compiler) = self.raw()?;
        let raw = spvc_msl_shader_interface_var_2::from(output);
        self.check(unsafe { (api.spvc_compiler_msl_add_shader_output_2()?)(compiler, &raw) })
    }

    /// Keeps `desc_set` out of argument buffers.
    pub fn add_discrete_descriptor_set(&mut self, desc_set: u32) -> Result<()> {
        let (api, compiler) = self.raw()?;
        self.check(unsafe { (api.spvc_compiler_msl_add_discrete_descriptor_set()?)(compiler, desc_set) })
    }

    pub fn set_argument_buffer_device_address_space(&mut self, desc_set: u32, device_address: bool) -> Result<()> {
        let (api, compiler) = self.raw()?;
        self.check(unsafe {
            (api.spvc_compiler_msl_set_argument_buffer_device_address_space()?)(
                compiler,
                desc_set,
                native_bool(device_address),
            )
        })
    }

    pub fn is_shader_input_used(&self, location: u32) -> Result<bool> {
        let (api, compiler) = self.raw()?;
        Ok(unsafe { (api.spvc_compiler_msl_is_shader_input_used()?)(compiler, location) } != SPVC_FALSE)
    }

    pub fn is_shader_output_used(&self, location: u32) -> Result<bool> {
        let (api, compiler) = self.raw()?;
        Ok(unsafe { (api.spvc_compiler_msl_is_shader_output_used()?)(compiler, location) } != SPVC_FALSE)
    }

    /// Whether a binding added with [`add_resource_binding`](Self::add_resource_binding)
    /// was used by the last compile.
    pub fn is_resource_used(&self, model: ExecutionModel, desc_set: u32, binding: u32) -> Result<bool> {
        let (api, compiler) = self.raw()?;
        let used = unsafe { (api.spvc_compiler_msl_is_resource_used()?)(compiler, model as u32, desc_set, binding) };
        Ok(used != SPVC_FALSE)
    }

    pub fn remap_constexpr_sampler(&mut self, id: VariableId, sampler: &ConstexprSampler) -> Result<()> {
        let (api, compiler) = self.raw()?;
        let sampler = spvc_msl_constexpr_sampler::from(sampler);
        self.check(unsafe { (api.spvc_compiler_msl_remap_constexpr_sampler()?)(compiler, id.0, &sampler) })
    }

    pub fn remap_constexpr_sampler_by_binding(
        &mut self,
        desc_set: u32,
        binding: u32,
        sampler: &ConstexprSampler,
    ) -> Result<()> {
        let (api, compiler) = self.raw()?;
        let sampler = spvc_msl_constexpr_sampler::from(sampler);
        self.check(unsafe {
            (api.spvc_compiler_msl_remap_constexpr_sampler_by_binding()?)(compiler, desc_set, binding, &sampler)
        })
    }

    pub fn remap_constexpr_sampler_ycbcr(
        &mut self,
        id: VariableId,
        sampler: &ConstexprSampler,
        conversion: &SamplerYcbcrConversion,
    ) -> Result<()> {
        let (api, compiler) = self.raw()?;
        let sampler = spvc_msl_constexpr_sampler::from(sampler);
        let conversion = spvc_msl_sampler_ycbcr_conversion::from(conversion);
        self.check(unsafe {
            (api.spvc_compiler_msl_remap_constexpr_sampler_ycbcr()?)(compiler, id.0, &sampler, &conversion)
        })
    }

    pub fn remap_constexpr_sampler_by_binding_ycbcr(
        &mut self,
        desc_set: u32,
        binding: u32,
        sampler: &ConstexprSampler,
        conversion: &SamplerYcbcrConversion,
    ) -> Result<()> {
        let (api, compiler) = self.raw()?;
        let sampler = spvc_msl_constexpr_sampler::from(sampler);
        let conversion = spvc_msl_sampler_ycbcr_conversion::from(conversion);
        self.check(unsafe {
            (api.spvc_compiler_msl_remap_constexpr_sampler_by_binding_ycbcr()?)(
                compiler,
                desc_set,
                binding,
                &sampler,
                &conversion,
            )
        })
    }

    /// Pads the fragment output at `location` to `components` components.
    pub fn set_fragment_output_components(&mut self, location: u32, components: u32) -> Result<()> {
        let (api, compiler) = self.raw()?;
        self.check(unsafe { (api.spvc_compiler_msl_set_fragment_output_components()?)(compiler, location, components) })
    }

    /// Metal index assigned to `id` by the last compile, if any.
    pub fn automatic_resource_binding(&self, id: VariableId) -> Result<Option<u32>> {
        let (api, compiler) = self.raw()?;
        let index = unsafe { (api.spvc_compiler_msl_get_automatic_resource_binding()?)(compiler, id.0) };
        Ok((index != u32::MAX).then_some(index))
    }

    /// Secondary index, such as the sampler half of a combined image sampler.
    pub fn automatic_resource_binding_secondary(&self, id: VariableId) -> Result<Option<u32>> {
        let (api, compiler) = self.raw()?;
        let index = unsafe { (api.spvc_compiler_msl_get_automatic_resource_binding_secondary()?)(compiler, id.0) };
        Ok((index != u32::MAX).then_some(index))
    }

    pub fn add_dynamic_buffer(&mut self, desc_set: u32, binding: u32, index: u32) -> Result<()> {
        let (api, compiler) = self.raw()?;
        self.check(unsafe { (api.spvc_compiler_msl_add_dynamic_buffer()?)(compiler, desc_set, binding, index) })
    }

    pub fn add_inline_uniform_block(&mut self, desc_set: u32, binding: u32) -> Result<()> {
        let (api, compiler) = self.raw()?;
        self.check(unsafe { (api.spvc_compiler_msl_add_inline_uniform_block()?)(compiler, desc_set, binding) })
    }

    pub fn combined_sampler_suffix(&self) -> Result<String> {
        let (api, compiler) = self.raw()?;
        Ok(unsafe { native_string((api.spvc_compiler_msl_get_combined_sampler_suffix()?)(compiler)) })
    }

    pub fn set_combined_sampler_suffix(&mut self, suffix: &str) -> Result<()> {
        let (api, compiler) = self.raw()?;
        let suffix = c_string(suffix)?;
        self.check(unsafe { (api.spvc_compiler_msl_set_combined_sampler_suffix()?)(compiler, suffix.as_ptr()) })
    }
}

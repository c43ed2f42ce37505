use super::{Hlsl, stage_or_all};
use crate::compiler::Compiler;
use crate::flags::HlslBindingFlags;
use crate::options::backend_options;
use crate::strings::c_string;
use crate::{Result, VariableId};
use spirv::ExecutionModel;
use spvc::{
    SPVC_FALSE, spvc_hlsl_resource_binding, spvc_hlsl_resource_binding_mapping,
    spvc_hlsl_root_constants, spvc_hlsl_vertex_attribute_remap,
};

backend_options! {
    /// HLSL specific options
    pub struct HlslOptions {
        /// Shader model times ten, e.g. 50 for SM 5.0
        pub shader_model: u32 = 30 => set_uint(SPVC_COMPILER_OPTION_HLSL_SHADER_MODEL),
        /// Accept and ignore `PointSize` on SM 4.0+
        pub point_size_compat: bool = false => set_bool(SPVC_COMPILER_OPTION_HLSL_POINT_SIZE_COMPAT),
        /// Accept `PointCoord`, which then reads as `float2(0.5, 0.5)`
        pub point_coord_compat: bool = false => set_bool(SPVC_COMPILER_OPTION_HLSL_POINT_COORD_COMPAT),
        /// Offset `VertexIndex` and `InstanceIndex` through an extra cbuffer
        pub support_nonzero_base_vertex_base_instance: bool = false
            => set_bool(SPVC_COMPILER_OPTION_HLSL_SUPPORT_NONZERO_BASE_VERTEX_BASE_INSTANCE),
        /// Declare read-only storage buffers as UAVs too
        pub force_storage_buffer_as_uav: bool = false
            => set_bool(SPVC_COMPILER_OPTION_HLSL_FORCE_STORAGE_BUFFER_AS_UAV),
        /// Treat `NonWritable` storage images as SRVs
        pub nonwritable_uav_texture_as_srv: bool = false
            => set_bool(SPVC_COMPILER_OPTION_HLSL_NONWRITABLE_UAV_TEXTURE_AS_SRV),
        /// Native 16-bit types, SM 6.2+
        pub enable_16bit_types: bool = false => set_bool(SPVC_COMPILER_OPTION_HLSL_ENABLE_16BIT_TYPES),
        /// Give matrix inputs consecutive `TEXCOORD` semantics
        pub flatten_matrix_vertex_input_semantics: bool = false
            => set_bool(SPVC_COMPILER_OPTION_HLSL_FLATTEN_MATRIX_VERTEX_INPUT_SEMANTICS),
    }
}

/// A push constant range mapped to a root constant buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RootConstants {
    /// First byte of the range
    pub start: u32,
    /// One past the last byte of the range
    pub end: u32,
    pub binding: u32,
    pub space: u32,
}

impl From<&RootConstants> for spvc_hlsl_root_constants {
    fn from(value: &RootConstants) -> Self {
        spvc_hlsl_root_constants {
            start: value.start,
            end: value.end,
            binding: value.binding,
            space: value.space,
        }
    }
}

/// Semantic to use for the vertex input at `location`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexAttributeRemap {
    pub location: u32,
    pub semantic: String,
}

/// An HLSL register and register space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegisterMapping {
    pub space: u32,
    pub binding: u32,
}

impl From<RegisterMapping> for spvc_hlsl_resource_binding_mapping {
    fn from(value: RegisterMapping) -> Self {
        spvc_hlsl_resource_binding_mapping {
            register_space: value.space,
            register_binding: value.binding,
        }
    }
}

/// Explicit registers for the resource at `(desc_set, binding)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HlslResourceBinding {
    /// Stage the mapping applies to; `None` applies it to every stage
    pub stage: Option<ExecutionModel>,
    pub desc_set: u32,
    pub binding: u32,
    pub cbv: RegisterMapping,
    pub uav: RegisterMapping,
    pub srv: RegisterMapping,
    pub sampler: RegisterMapping,
}

impl From<&HlslResourceBinding> for spvc_hlsl_resource_binding {
    fn from(value: &HlslResourceBinding) -> Self {
        spvc_hlsl_resource_binding {
            stage: stage_or_all(value.stage),
            desc_set: value.desc_set,
            binding: value.binding,
            cbv: value.cbv.into(),
            uav: value.uav.into(),
            srv: value.srv.into(),
            sampler: value.sampler.into(),
        }
    }
}

impl Compiler<Hlsl> {
    /// Maps push constant ranges to root constant buffers.
    pub fn set_root_constants_layout(&mut self, layout: &[RootConstants]) -> Result<()> {
        let (api, compiler) = self.raw()?;
        let raw: Vec<spvc_hlsl_root_constants> = layout.iter().map(Into::into).collect();
        self.check(unsafe { (api.spvc_compiler_hlsl_set_root_constants_layout()?)(compiler, raw.as_ptr(), raw.len()) })
    }

    /// Overrides the `TEXCOORD` semantics of vertex inputs.
    pub fn add_vertex_attribute_remap(&mut self, remaps: &[VertexAttributeRemap]) -> Result<()> {
        let (api, compiler) = self.raw()?;
        let semantics = remaps
            .iter()
            .map(|remap| c_string(&remap.semantic))
            .collect::<Result<Vec<_>>>()?;
        let raw: Vec<_> = remaps
            .iter()
            .zip(&semantics)
            .map(|(remap, semantic)| spvc_hlsl_vertex_attribute_remap {
                location: remap.location,
                semantic: semantic.as_ptr(),
            })
            .collect();
        self.check(unsafe { (api.spvc_compiler_hlsl_add_vertex_attribute_remap()?)(compiler, raw.as_ptr(), raw.len()) })
    }

    /// Replaces the `NumWorkgroups` builtin with a cbuffer and returns its
    /// variable, or `None` if the shader does not use the builtin. Call before
    /// building resource lists so the new variable shows up in them; sets
    /// obtained earlier are stale afterwards.
    pub fn remap_num_workgroups_builtin(&mut self) -> Result<Option<VariableId>> {
        let (api, compiler) = self.raw()?;
        let id = unsafe { (api.spvc_compiler_hlsl_remap_num_workgroups_builtin()?)(compiler) };
        if id == 0 {
            return Ok(None);
        }
        self.bump_interface_revision();
        Ok(Some(VariableId(id)))
    }

    /// Selects which resource classes get registers assigned automatically.
    pub fn set_resource_binding_flags(&mut self, flags: HlslBindingFlags) -> Result<()> {
        let (api, compiler) = self.raw()?;
        self.check(unsafe { (api.spvc_compiler_hlsl_set_resource_binding_flags()?)(compiler, flags.bits()) })
    }

    pub fn add_resource_binding(&mut self, binding: &HlslResourceBinding) -> Result<()> {
        let (api, compiler) = self.raw()?;
        let raw = spvc_hlsl_resource_binding::from(binding);
        self.check(unsafe { (api.spvc_compiler_hlsl_add_resource_binding()?)(compiler, &raw) })
    }

    /// Whether a binding added with [`add_resource_binding`](Self::add_resource_binding)
    /// was used by the last compile.
    pub fn is_resource_used(&self, model: ExecutionModel, desc_set: u32, binding: u32) -> Result<bool> {
        let (api, compiler) = self.raw()?;
        let used = unsafe { (api.spvc_compiler_hlsl_is_resource_used()?)(compiler, model as u32, desc_set, binding) };
        Ok(used != SPVC_FALSE)
    }
}

//! Shader resource lists

use super::from_spirv;
use crate::graph::Link;
use crate::strings::{native_slice, native_string};
use crate::{Result, TypeId, VariableId};
use spirv::BuiltIn;
use spvc::{
    NativeApi, spvc_builtin_resource_type, spvc_reflected_resource, spvc_resource_type,
    spvc_resources,
};
use std::fmt;
use std::ptr;

/// Resource categories reported by SPIRV-Cross
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ResourceType {
    UniformBuffer = 1,
    StorageBuffer = 2,
    StageInput = 3,
    StageOutput = 4,
    SubpassInput = 5,
    StorageImage = 6,
    SampledImage = 7,
    AtomicCounter = 8,
    PushConstant = 9,
    SeparateImage = 10,
    SeparateSamplers = 11,
    AccelerationStructure = 12,
    RayQuery = 13,
    ShaderRecordBuffer = 14,
    GlPlainUniform = 15,
}

impl ResourceType {
    fn raw(self) -> spvc_resource_type {
        self as spvc_resource_type
    }
}

/// Builtin variable categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum BuiltinResourceType {
    StageInput = 1,
    StageOutput = 2,
}

impl BuiltinResourceType {
    fn raw(self) -> spvc_builtin_resource_type {
        self as spvc_builtin_resource_type
    }
}

/// One interface variable
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReflectedResource {
    pub id: VariableId,
    /// Type with array and pointer wrappers removed
    pub base_type_id: TypeId,
    /// Full type of the variable
    pub type_id: TypeId,
    pub name: String,
}

impl ReflectedResource {
    fn from_native(raw: &spvc_reflected_resource) -> Self {
        ReflectedResource {
            id: VariableId(raw.id),
            base_type_id: TypeId(raw.base_type_id),
            type_id: TypeId(raw.type_id),
            name: unsafe { native_string(raw.name) },
        }
    }
}

/// One builtin interface variable
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReflectedBuiltinResource {
    pub builtin: BuiltIn,
    /// Type of the builtin value itself, without block wrappers
    pub value_type_id: TypeId,
    pub resource: ReflectedResource,
}

macro_rules! resource_lists {
    ($($(#[$meta:meta])* $name:ident => $kind:ident;)*) => {
        $(
            $(#[$meta])*
            pub fn $name(&self) -> Result<Vec<ReflectedResource>> {
                self.resource_list(ResourceType::$kind)
            }
        )*
    };
}

/// Resources of a shader, grouped by category.
///
/// A snapshot: it does not follow later changes made through the reflector,
/// such as building combined image samplers. Create a new one after such
/// changes.
pub struct Resources {
    pub(crate) link: Link,
    handle: spvc_resources,
}

impl Resources {
    pub(crate) fn new(link: Link, handle: spvc_resources) -> Resources {
        Resources { link, handle }
    }

    fn raw(&self) -> Result<(&'static NativeApi, spvc_resources)> {
        self.link.validate()?;
        Ok((self.link.session().api, self.handle))
    }

    pub fn is_alive(&self) -> bool {
        self.link.is_alive()
    }

    pub fn resource_list(&self, kind: ResourceType) -> Result<Vec<ReflectedResource>> {
        let (api, resources) = self.raw()?;
        let mut list = ptr::null();
        let mut count = 0;
        self.link.session().check(unsafe {
            (api.spvc_resources_get_resource_list_for_type()?)(resources, kind.raw(), &mut list, &mut count)
        })?;
        Ok(unsafe { native_slice(list, count) }
            .iter()
            .map(ReflectedResource::from_native)
            .collect())
    }

    pub fn builtin_resource_list(&self, kind: BuiltinResourceType) -> Result<Vec<ReflectedBuiltinResource>> {
        let (api, resources) = self.raw()?;
        let mut list = ptr::null();
        let mut count = 0;
        self.link.session().check(unsafe {
            (api.spvc_resources_get_builtin_resource_list_for_type()?)(resources, kind.raw(), &mut list, &mut count)
        })?;
        unsafe { native_slice(list, count) }
            .iter()
            .map(|raw| {
                Ok(ReflectedBuiltinResource {
                    builtin: from_spirv!(BuiltIn, raw.builtin)?,
                    value_type_id: TypeId(raw.value_type_id),
                    resource: ReflectedResource::from_native(&raw.resource),
                })
            })
            .collect()
    }

    resource_lists! {
        uniform_buffers => UniformBuffer;
        storage_buffers => StorageBuffer;
        stage_inputs => StageInput;
        stage_outputs => StageOutput;
        subpass_inputs => SubpassInput;
        storage_images => StorageImage;
        sampled_images => SampledImage;
        atomic_counters => AtomicCounter;
        push_constant_buffers => PushConstant;
        separate_images => SeparateImage;
        separate_samplers => SeparateSamplers;
        acceleration_structures => AccelerationStructure;
        ray_queries => RayQuery;
        shader_record_buffers => ShaderRecordBuffer;
        /// Uniforms outside any block, only produced by GL-flavoured SPIR-V
        gl_plain_uniforms => GlPlainUniform;
    }

    pub fn builtin_inputs(&self) -> Result<Vec<ReflectedBuiltinResource>> {
        self.builtin_resource_list(BuiltinResourceType::StageInput)
    }

    pub fn builtin_outputs(&self) -> Result<Vec<ReflectedBuiltinResource>> {
        self.builtin_resource_list(BuiltinResourceType::StageOutput)
    }
}

impl fmt::Debug for Resources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resources").field("link", &self.link).finish()
    }
}

//! Shader reflection API
//!
//! A [`Reflector`] wraps a SPIRV-Cross compiler bound to one parsed module.
//! It answers questions about names, decorations, entry points, types and
//! constants, and produces [`Resources`] listing every interface variable by
//! category.
//!
//! # Example
//! ```no_run
//! use spvcrs::Context;
//!
//! # fn main() -> spvcrs::Result<()> {
//! let spirv = std::fs::read("shader.spv").unwrap();
//! let context = Context::new()?;
//! let reflector = context.create_reflector_from_spirv(&spirv)?;
//!
//! let resources = reflector.create_shader_resources()?;
//! for ubo in resources.uniform_buffers()? {
//!     let ty = reflector.type_handle(ubo.base_type_id)?;
//!     let size = reflector.declared_struct_size(&ty)?;
//!     println!("{}: {} bytes", ubo.name, size);
//! }
//! # Ok(())
//! # }
//! ```

mod constant;
mod resources;
mod set;
mod types;

pub use constant::Constant;
pub use resources::{
    BuiltinResourceType, ReflectedBuiltinResource, ReflectedResource, ResourceType, Resources,
};
pub use set::Set;
pub use types::{ArrayDimension, BaseType, Type};

use crate::backend::Backend;
use crate::context::Session;
use crate::graph::{Link, NodeKind};
use crate::strings::{c_string, native_slice, native_string};
use crate::{ConstantId, Error, Id, Result, TypeId, VariableId};
use spirv::{BuiltIn, Capability, Decoration, ExecutionMode, ExecutionModel, StorageClass};
use spvc::{NativeApi, SPVC_FALSE, spvc_compiler, spvc_specialization_constant};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::ptr;
use std::rc::Rc;

/// Converts a raw enumerant into its `spirv` crate type.
macro_rules! from_spirv {
    ($ty:ident, $value:expr) => {{
        let value: u32 = $value;
        spirv::$ty::from_u32(value).ok_or($crate::Error::UnexpectedValue {
            kind: stringify!($ty),
            value,
        })
    }};
}
pub(crate) use from_spirv;

/// Fails with `InvalidArgument` unless `index < count`. The C API indexes
/// its arrays without bounds checks.
pub(crate) fn check_index(what: &str, index: u32, count: u32) -> Result<()> {
    if index < count {
        return Ok(());
    }
    Err(Error::InvalidArgument(format!(
        "{what} index {index} is out of range (count {count})"
    )))
}

/// An entry point declared by the module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPoint {
    pub name: String,
    pub execution_model: ExecutionModel,
}

/// A combined image sampler synthesized from a separate image and sampler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CombinedImageSampler {
    pub combined_id: VariableId,
    pub image_id: VariableId,
    pub sampler_id: VariableId,
}

/// A specialization constant and its `SpecId`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpecializationConstant {
    pub id: ConstantId,
    pub constant_id: u32,
}

impl SpecializationConstant {
    fn from_native(raw: spvc_specialization_constant) -> Option<Self> {
        (raw.id != 0).then_some(SpecializationConstant {
            id: ConstantId(raw.id),
            constant_id: raw.constant_id,
        })
    }
}

/// The `WorkgroupSize` builtin constant and its specializable components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkGroupSizeConstants {
    pub constant: ConstantId,
    pub x: Option<SpecializationConstant>,
    pub y: Option<SpecializationConstant>,
    pub z: Option<SpecializationConstant>,
}

/// A member range of a buffer that is statically accessed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferRange {
    pub index: u32,
    pub offset: usize,
    pub range: usize,
}

/// Reflection over one parsed SPIR-V module.
///
/// Types and constants are cached per reflector: asking twice for the same
/// id returns the same `Rc`.
pub struct Reflector {
    pub(crate) link: Link,
    handle: spvc_compiler,
    backend: Backend,
    types: RefCell<HashMap<TypeId, Rc<Type>>>,
    constants: RefCell<HashMap<ConstantId, Rc<Constant>>>,
    interface_revision: Cell<u32>,
}

impl Reflector {
    pub(crate) fn new(session: &Rc<Session>, handle: spvc_compiler, backend: Backend) -> Reflector {
        Reflector {
            link: Link::new(session, None, NodeKind::Reflector),
            handle,
            backend,
            types: RefCell::new(HashMap::new()),
            constants: RefCell::new(HashMap::new()),
            interface_revision: Cell::new(0),
        }
    }

    /// Validates liveness and returns the function table and native handle.
    pub(crate) fn raw(&self) -> Result<(&'static NativeApi, spvc_compiler)> {
        self.link.validate()?;
        Ok((self.link.session().api, self.handle))
    }

    pub(crate) fn check(&self, result: spvc::spvc_result) -> Result<()> {
        self.link.session().check(result)
    }

    pub(crate) fn interface_revision(&self) -> u32 {
        self.interface_revision.get()
    }

    /// Marks previously returned [`Set`]s as stale.
    pub(crate) fn bump_interface_revision(&self) {
        self.interface_revision.set(self.interface_revision.get().wrapping_add(1));
    }

    pub fn is_alive(&self) -> bool {
        self.link.is_alive()
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    // Names and decorations

    /// Name of `id`, or an empty string if it has none.
    pub fn name(&self, id: impl Into<Id>) -> Result<String> {
        let (api, compiler) = self.raw()?;
        Ok(unsafe { native_string((api.spvc_compiler_get_name()?)(compiler, id.into().0)) })
    }

    pub fn set_name(&mut self, id: impl Into<Id>, name: &str) -> Result<()> {
        let (api, compiler) = self.raw()?;
        let name = c_string(name)?;
        unsafe { (api.spvc_compiler_set_name()?)(compiler, id.into().0, name.as_ptr()) };
        Ok(())
    }

    pub fn has_decoration(&self, id: impl Into<Id>, decoration: Decoration) -> Result<bool> {
        let (api, compiler) = self.raw()?;
        let has = unsafe { (api.spvc_compiler_has_decoration()?)(compiler, id.into().0, decoration as u32) };
        Ok(has != SPVC_FALSE)
    }

    /// Literal argument of `decoration`, or 0 if it is not set.
    pub fn decoration(&self, id: impl Into<Id>, decoration: Decoration) -> Result<u32> {
        let (api, compiler) = self.raw()?;
        Ok(unsafe { (api.spvc_compiler_get_decoration()?)(compiler, id.into().0, decoration as u32) })
    }

    pub fn decoration_string(&self, id: impl Into<Id>, decoration: Decoration) -> Result<String> {
        let (api, compiler) = self.raw()?;
        Ok(unsafe {
            native_string((api.spvc_compiler_get_decoration_string()?)(compiler, id.into().0, decoration as u32))
        })
    }

    pub fn set_decoration(&mut self, id: impl Into<Id>, decoration: Decoration, argument: u32) -> Result<()> {
        let (api, compiler) = self.raw()?;
        unsafe { (api.spvc_compiler_set_decoration()?)(compiler, id.into().0, decoration as u32, argument) };
        Ok(())
    }

    pub fn set_decoration_string(&mut self, id: impl Into<Id>, decoration: Decoration, argument: &str) -> Result<()> {
        let (api, compiler) = self.raw()?;
        let argument = c_string(argument)?;
        unsafe {
            (api.spvc_compiler_set_decoration_string()?)(compiler, id.into().0, decoration as u32, argument.as_ptr())
        };
        Ok(())
    }

    pub fn unset_decoration(&mut self, id: impl Into<Id>, decoration: Decoration) -> Result<()> {
        let (api, compiler) = self.raw()?;
        unsafe { (api.spvc_compiler_unset_decoration()?)(compiler, id.into().0, decoration as u32) };
        Ok(())
    }

    pub fn member_name(&self, id: TypeId, index: u32) -> Result<String> {
        let (api, compiler) = self.raw()?;
        Ok(unsafe { native_string((api.spvc_compiler_get_member_name()?)(compiler, id.0, index)) })
    }

    pub fn set_member_name(&mut self, id: TypeId, index: u32, name: &str) -> Result<()> {
        let (api, compiler) = self.raw()?;
        let name = c_string(name)?;
        unsafe { (api.spvc_compiler_set_member_name()?)(compiler, id.0, index, name.as_ptr()) };
        Ok(())
    }

    pub fn has_member_decoration(&self, id: TypeId, index: u32, decoration: Decoration) -> Result<bool> {
        let (api, compiler) = self.raw()?;
        let has = unsafe { (api.spvc_compiler_has_member_decoration()?)(compiler, id.0, index, decoration as u32) };
        Ok(has != SPVC_FALSE)
    }

    pub fn member_decoration(&self, id: TypeId, index: u32, decoration: Decoration) -> Result<u32> {
        let (api, compiler) = self.raw()?;
        Ok(unsafe { (api.spvc_compiler_get_member_decoration()?)(compiler, id.0, index, decoration as u32) })
    }

    pub fn member_decoration_string(&self, id: TypeId, index: u32, decoration: Decoration) -> Result<String> {
        let (api, compiler) = self.raw()?;
        Ok(unsafe {
            native_string((api.spvc_compiler_get_member_decoration_string()?)(
                compiler,
                id.0,
                index,
                decoration as u32,
            ))
        })
    }

    pub fn set_member_decoration(&mut self, id: TypeId, index: u32, decoration: Decoration, argument: u32) -> Result<()> {
        let (api, compiler) = self.raw()?;
        unsafe { (api.spvc_compiler_set_member_decoration()?)(compiler, id.0, index, decoration as u32, argument) };
        Ok(())
    }

    pub fn set_member_decoration_string(
        &mut self,
        id: TypeId,
        index: u32,
        decoration: Decoration,
        argument: &str,
    ) -> Result<()> {
        let (api, compiler) = self.raw()?;
        let argument = c_string(argument)?;
        unsafe {
            (api.spvc_compiler_set_member_decoration_string()?)(
                compiler,
                id.0,
                index,
                decoration as u32,
                argument.as_ptr(),
            )
        };
        Ok(())
    }

    pub fn unset_member_decoration(&mut self, id: TypeId, index: u32, decoration: Decoration) -> Result<()> {
        let (api, compiler) = self.raw()?;
        unsafe { (api.spvc_compiler_unset_member_decoration()?)(compiler, id.0, index, decoration as u32) };
        Ok(())
    }

    // Entry points and execution modes

    pub fn entry_points(&self) -> Result<Vec<EntryPoint>> {
        let (api, compiler) = self.raw()?;
        let mut entries = ptr::null();
        let mut count = 0;
        self.check(unsafe { (api.spvc_compiler_get_entry_points()?)(compiler, &mut entries, &mut count) })?;

        unsafe { native_slice(entries, count) }
            .into_iter()
            .map(|entry| {
                Ok(EntryPoint {
                    name: unsafe { native_string(entry.name) },
                    execution_model: from_spirv!(ExecutionModel, entry.execution_model)?,
                })
            })
            .collect()
    }

    /// Selects the entry point that reflection and compilation operate on.
    pub fn set_entry_point(&mut self, name: &str, model: ExecutionModel) -> Result<()> {
        let (api, compiler) = self.raw()?;
        let name = c_string(name)?;
        self.check(unsafe { (api.spvc_compiler_set_entry_point()?)(compiler, name.as_ptr(), model as u32) })
    }

    pub fn rename_entry_point(&mut self, old_name: &str, new_name: &str, model: ExecutionModel) -> Result<()> {
        let (api, compiler) = self.raw()?;
        let old_name = c_string(old_name)?;
        let new_name = c_string(new_name)?;
        self.check(unsafe {
            (api.spvc_compiler_rename_entry_point()?)(compiler, old_name.as_ptr(), new_name.as_ptr(), model as u32)
        })
    }

    /// Name the entry point will have in emitted source.
    pub fn cleansed_entry_point_name(&self, name: &str, model: ExecutionModel) -> Result<String> {
        let (api, compiler) = self.raw()?;
        let name = c_string(name)?;
        Ok(unsafe {
            native_string((api.spvc_compiler_get_cleansed_entry_point_name()?)(
                compiler,
                name.as_ptr(),
                model as u32,
            ))
        })
    }

    /// Execution model of the current entry point.
    pub fn execution_model(&self) -> Result<ExecutionModel> {
        let (api, compiler) = self.raw()?;
        from_spirv!(ExecutionModel, unsafe { (api.spvc_compiler_get_execution_model()?)(compiler) })
    }

    pub fn set_execution_mode(&mut self, mode: ExecutionMode) -> Result<()> {
        let (api, compiler) = self.raw()?;
        unsafe { (api.spvc_compiler_set_execution_mode()?)(compiler, mode as u32) };
        Ok(())
    }

    pub fn set_execution_mode_with_arguments(&mut self, mode: ExecutionMode, arguments: [u32; 3]) -> Result<()> {
        let (api, compiler) = self.raw()?;
        let [arg0, arg1, arg2] = arguments;
        unsafe { (api.spvc_compiler_set_execution_mode_with_arguments()?)(compiler, mode as u32, arg0, arg1, arg2) };
        Ok(())
    }

    pub fn unset_execution_mode(&mut self, mode: ExecutionMode) -> Result<()> {
        let (api, compiler) = self.raw()?;
        unsafe { (api.spvc_compiler_unset_execution_mode()?)(compiler, mode as u32) };
        Ok(())
    }

    pub fn execution_modes(&self) -> Result<Vec<ExecutionMode>> {
        let (api, compiler) = self.raw()?;
        let mut modes = ptr::null();
        let mut count = 0;
        self.check(unsafe { (api.spvc_compiler_get_execution_modes()?)(compiler, &mut modes, &mut count) })?;
        unsafe { native_slice(modes, count) }
            .into_iter()
            .map(|mode| from_spirv!(ExecutionMode, mode))
            .collect()
    }

    /// First literal argument of `mode`.
    pub fn execution_mode_argument(&self, mode: ExecutionMode) -> Result<u32> {
        let (api, compiler) = self.raw()?;
        Ok(unsafe { (api.spvc_compiler_get_execution_mode_argument()?)(compiler, mode as u32) })
    }

    pub fn execution_mode_argument_by_index(&self, mode: ExecutionMode, index: u32) -> Result<u32> {
        let (api, compiler) = self.raw()?;
        Ok(unsafe { (api.spvc_compiler_get_execution_mode_argument_by_index()?)(compiler, mode as u32, index) })
    }

    /// Recomputes which builtins the current entry point uses.
    pub fn update_active_builtins(&mut self) -> Result<()> {
        let (api, compiler) = self.raw()?;
        unsafe { (api.spvc_compiler_update_active_builtins()?)(compiler) };
        Ok(())
    }

    /// Only meaningful after [`update_active_builtins`](Self::update_active_builtins).
    pub fn has_active_builtin(&self, builtin: BuiltIn, storage: StorageClass) -> Result<bool> {
        let (api, compiler) = self.raw()?;
        let has = unsafe { (api.spvc_compiler_has_active_builtin()?)(compiler, builtin as u32, storage as u32) };
        Ok(has != SPVC_FALSE)
    }

    // Types and constants

    /// Returns the type for `id`, cached for the lifetime of the reflector.
    pub fn type_handle(&self, id: TypeId) -> Result<Rc<Type>> {
        let (api, compiler) = self.raw()?;
        if let Some(ty) = self.types.borrow().get(&id) {
            return Ok(Rc::clone(ty));
        }

        let handle = unsafe { (api.spvc_compiler_get_type_handle()?)(compiler, id.0) };
        if handle.is_null() {
            return Err(Error::InvalidArgument(self.link.session().last_error()));
        }

        let ty = Rc::new(Type::new(
            Link::new(self.link.session(), Some(&self.link), NodeKind::Type),
            handle,
            id,
        ));
        self.types.borrow_mut().insert(id, Rc::clone(&ty));
        Ok(ty)
    }

    /// Resolves the member types of a struct through the type cache.
    pub fn member_types(&self, ty: &Type) -> Result<Vec<Rc<Type>>> {
        ty.link.compare_parent(&self.link)?;
        ty.member_type_ids()?
            .into_iter()
            .map(|id| self.type_handle(id))
            .collect()
    }

    /// Returns the constant for `id`, cached for the lifetime of the reflector.
    pub fn constant_handle(&self, id: ConstantId) -> Result<Rc<Constant>> {
        let (api, compiler) = self.raw()?;
        if let Some(constant) = self.constants.borrow().get(&id) {
            return Ok(Rc::clone(constant));
        }

        let handle = unsafe { (api.spvc_compiler_get_constant_handle()?)(compiler, id.0) };
        if handle.is_null() {
            return Err(Error::InvalidArgument(self.link.session().last_error()));
        }

        // (columns, rows) of the constant's type, for bounds checks
        let shape = unsafe {
            let ty = (api.spvc_compiler_get_type_handle()?)(compiler, (api.spvc_constant_get_type()?)(handle));
            if ty.is_null() {
                (1, 1)
            } else {
                ((api.spvc_type_get_columns()?)(ty), (api.spvc_type_get_vector_size()?)(ty))
            }
        };

        let constant = Rc::new(Constant::new(
            Link::new(self.link.session(), Some(&self.link), NodeKind::Constant),
            handle,
            id,
            shape,
        ));
        self.constants.borrow_mut().insert(id, Rc::clone(&constant));
        Ok(constant)
    }

    pub fn specialization_constants(&self) -> Result<Vec<SpecializationConstant>> {
        let (api, compiler) = self.raw()?;
        let mut constants = ptr::null();
        let mut count = 0;
        self.check(unsafe {
            (api.spvc_compiler_get_specialization_constants()?)(compiler, &mut constants, &mut count)
        })?;
        Ok(unsafe { native_slice(constants, count) }
            .into_iter()
            .map(|raw| SpecializationConstant {
                id: ConstantId(raw.id),
                constant_id: raw.constant_id,
            })
            .collect())
    }

    /// The `WorkgroupSize` builtin constant, if the module declares one.
    pub fn work_group_size_specialization_constants(&self) -> Result<Option<WorkGroupSizeConstants>> {
        let (api, compiler) = self.raw()?;
        let mut x = spvc_specialization_constant::default();
        let mut y = spvc_specialization_constant::default();
        let mut z = spvc_specialization_constant::default();
        let constant = unsafe {
            (api.spvc_compiler_get_work_group_size_specialization_constants()?)(compiler, &mut x, &mut y, &mut z)
        };
        if constant == 0 {
            return Ok(None);
        }
        Ok(Some(WorkGroupSizeConstants {
            constant: ConstantId(constant),
            x: SpecializationConstant::from_native(x),
            y: SpecializationConstant::from_native(y),
            z: SpecializationConstant::from_native(z),
        }))
    }

    // Buffer layout

    pub fn declared_struct_size(&self, ty: &Type) -> Result<usize> {
        ty.link.compare_parent(&self.link)?;
        let (api, compiler) = self.raw()?;
        let mut size = 0;
        self.check(unsafe { (api.spvc_compiler_get_declared_struct_size()?)(compiler, ty.handle, &mut size) })?;
        Ok(size)
    }

    /// Size of a struct whose trailing runtime array has `array_size` elements.
    pub fn declared_struct_size_runtime_array(&self, ty: &Type, array_size: usize) -> Result<usize> {
        ty.link.compare_parent(&self.link)?;
        let (api, compiler) = self.raw()?;
        let mut size = 0;
        self.check(unsafe {
            (api.spvc_compiler_get_declared_struct_size_runtime_array()?)(compiler, ty.handle, array_size, &mut size)
        })?;
        Ok(size)
    }

    pub fn declared_struct_member_size(&self, ty: &Type, index: u32) -> Result<usize> {
        ty.link.compare_parent(&self.link)?;
        let (api, compiler) = self.raw()?;
        ty.check_member(index)?;
        let mut size = 0;
        self.check(unsafe {
            (api.spvc_compiler_get_declared_struct_member_size()?)(compiler, ty.handle, index, &mut size)
        })?;
        Ok(size)
    }

    pub fn struct_member_offset(&self, ty: &Type, index: u32) -> Result<u32> {
        ty.link.compare_parent(&self.link)?;
        let (api, compiler) = self.raw()?;
        ty.check_member(index)?;
        let mut offset = 0;
        self.check(unsafe { (api.spvc_compiler_type_struct_member_offset()?)(compiler, ty.handle, index, &mut offset) })?;
        Ok(offset)
    }

    pub fn struct_member_array_stride(&self, ty: &Type, index: u32) -> Result<u32> {
        ty.link.compare_parent(&self.link)?;
        let (api, compiler) = self.raw()?;
        ty.check_member(index)?;
        let mut stride = 0;
        self.check(unsafe {
            (api.spvc_compiler_type_struct_member_array_stride()?)(compiler, ty.handle, index, &mut stride)
        })?;
        Ok(stride)
    }

    pub fn struct_member_matrix_stride(&self, ty: &Type, index: u32) -> Result<u32> {
        ty.link.compare_parent(&self.link)?;
        let (api, compiler) = self.raw()?;
        ty.check_member(index)?;
        let mut stride = 0;
        self.check(unsafe {
            (api.spvc_compiler_type_struct_member_matrix_stride()?)(compiler, ty.handle, index, &mut stride)
        })?;
        Ok(stride)
    }

    /// Members of the buffer `id` that are statically accessed.
    pub fn active_buffer_ranges(&self, id: VariableId) -> Result<Vec<BufferRange>> {
        let (api, compiler) = self.raw()?;
        let mut ranges = ptr::null();
        let mut count = 0;
        self.check(unsafe { (api.spvc_compiler_get_active_buffer_ranges()?)(compiler, id.0, &mut ranges, &mut count) })?;
        Ok(unsafe { native_slice(ranges, count) }
            .into_iter()
            .map(|raw| BufferRange {
                index: raw.index,
                offset: raw.offset,
                range: raw.range,
            })
            .collect())
    }

    // Module-level queries

    pub fn current_id_bound(&self) -> Result<u32> {
        let (api, compiler) = self.raw()?;
        Ok(unsafe { (api.spvc_compiler_get_current_id_bound()?)(compiler) })
    }

    /// Adds an extension to emit in the output. Not available on reflection-only compilers.
    pub fn require_extension(&mut self, extension: &str) -> Result<()> {
        let (api, compiler) = self.raw()?;
        let extension = c_string(extension)?;
        self.check(unsafe { (api.spvc_compiler_require_extension()?)(compiler, extension.as_ptr()) })
    }

    /// Extensions the emitted source will enable. Only GLSL compilers track
    /// these; every other backend reports none.
    pub fn required_extensions(&self) -> Result<Vec<String>> {
        let (api, compiler) = self.raw()?;
        if self.backend != Backend::Glsl {
            return Ok(Vec::new());
        }
        let count = unsafe { (api.spvc_compiler_get_num_required_extensions()?)(compiler) };
        let get_extension = api.spvc_compiler_get_required_extension()?;
        Ok((0..count)
            .map(|index| unsafe { native_string(get_extension(compiler, index)) })
            .collect())
    }

    pub fn variable_is_depth_or_compare(&self, id: VariableId) -> Result<bool> {
        let (api, compiler) = self.raw()?;
        let is = unsafe { (api.spvc_compiler_variable_is_depth_or_compare()?)(compiler, id.0) };
        Ok(is != SPVC_FALSE)
    }

    /// Word offset of the literal of `decoration` on `id` in the original binary.
    pub fn binary_offset_for_decoration(&self, id: VariableId, decoration: Decoration) -> Result<Option<u32>> {
        let (api, compiler) = self.raw()?;
        let mut offset = 0;
        let found = unsafe {
            (api.spvc_compiler_get_binary_offset_for_decoration()?)(compiler, id.0, decoration as u32, &mut offset)
        };
        Ok((found != SPVC_FALSE).then_some(offset))
    }

    pub fn declared_capabilities(&self) -> Result<Vec<Capability>> {
        let (api, compiler) = self.raw()?;
        let mut capabilities = ptr::null();
        let mut count = 0;
        self.check(unsafe {
            (api.spvc_compiler_get_declared_capabilities()?)(compiler, &mut capabilities, &mut count)
        })?;
        unsafe { native_slice(capabilities, count) }
            .into_iter()
            .map(|capability| from_spirv!(Capability, capability))
            .collect()
    }

    pub fn declared_extensions(&self) -> Result<Vec<String>> {
        let (api, compiler) = self.raw()?;
        let mut extensions = ptr::null_mut();
        let mut count = 0;
        self.check(unsafe { (api.spvc_compiler_get_declared_extensions()?)(compiler, &mut extensions, &mut count) })?;
        Ok(unsafe { native_slice(extensions as *const *const _, count) }
            .into_iter()
            .map(|extension| unsafe { native_string(extension) })
            .collect())
    }

    pub fn remapped_declared_block_name(&self, id: VariableId) -> Result<String> {
        let (api, compiler) = self.raw()?;
        Ok(unsafe { native_string((api.spvc_compiler_get_remapped_declared_block_name()?)(compiler, id.0)) })
    }

    pub fn buffer_block_decorations(&self, id: VariableId) -> Result<Vec<Decoration>> {
        let (api, compiler) = self.raw()?;
        let mut decorations = ptr::null();
        let mut count = 0;
        self.check(unsafe {
            (api.spvc_compiler_get_buffer_block_decorations()?)(compiler, id.0, &mut decorations, &mut count)
        })?;
        unsafe { native_slice(decorations, count) }
            .into_iter()
            .map(|decoration| from_spirv!(Decoration, decoration))
            .collect()
    }

    // Resources

    /// Variables statically used by the current entry point.
    pub fn active_interface_variables(&self) -> Result<Set> {
        let (api, compiler) = self.raw()?;
        let mut handle = ptr::null();
        self.check(unsafe { (api.spvc_compiler_get_active_interface_variables()?)(compiler, &mut handle) })?;
        Ok(Set::new(
            Link::new(self.link.session(), Some(&self.link), NodeKind::Set),
            handle,
            self.interface_revision(),
        ))
    }

    pub fn create_shader_resources(&self) -> Result<Resources> {
        let (api, compiler) = self.raw()?;
        let mut handle = ptr::null_mut();
        self.check(unsafe { (api.spvc_compiler_create_shader_resources()?)(compiler, &mut handle) })?;
        Ok(Resources::new(
            Link::new(self.link.session(), Some(&self.link), NodeKind::Resources),
            handle,
        ))
    }

    /// Like [`create_shader_resources`](Self::create_shader_resources), limited
    /// to the variables in `active`.
    pub fn create_shader_resources_for_active_variables(&self, active: &Set) -> Result<Resources> {
        active.link.compare_parent(&self.link)?;
        active.warn_if_stale(self.interface_revision());
        let (api, compiler) = self.raw()?;
        let mut handle = ptr::null_mut();
        self.check(unsafe {
            (api.spvc_compiler_create_shader_resources_for_active_variables()?)(compiler, &mut handle, active.handle)
        })?;
        Ok(Resources::new(
            Link::new(self.link.session(), Some(&self.link), NodeKind::Resources),
            handle,
        ))
    }
}

impl fmt::Debug for Reflector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reflector")
            .field("backend", &self.backend)
            .field("link", &self.link)
            .field("cached_types", &self.types.borrow().len())
            .field("cached_constants", &self.constants.borrow().len())
            .finish()
    }
}

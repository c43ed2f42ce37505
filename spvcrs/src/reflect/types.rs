//! Shader type reflection

use super::{check_index, from_spirv};
use crate::graph::Link;
use crate::{ConstantId, Error, Result, TypeId};
use spirv::{AccessQualifier, Dim, ImageFormat, StorageClass};
use spvc::{NativeApi, SPVC_FALSE, spvc_type};
use std::fmt;

/// Fundamental kind of a SPIR-V type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum BaseType {
    Unknown = 0,
    Void = 1,
    Boolean = 2,
    Int8 = 3,
    Uint8 = 4,
    Int16 = 5,
    Uint16 = 6,
    Int32 = 7,
    Uint32 = 8,
    Int64 = 9,
    Uint64 = 10,
    AtomicCounter = 11,
    Fp16 = 12,
    Fp32 = 13,
    Fp64 = 14,
    Struct = 15,
    Image = 16,
    SampledImage = 17,
    Sampler = 18,
    AccelerationStructure = 19,
}

impl BaseType {
    /// Maps a native `spvc_basetype`; `None` for values this crate does not know.
    pub fn from_u32(value: u32) -> Option<BaseType> {
        Some(match value {
            0 => BaseType::Unknown,
            1 => BaseType::Void,
            2 => BaseType::Boolean,
            3 => BaseType::Int8,
            4 => BaseType::Uint8,
            5 => BaseType::Int16,
            6 => BaseType::Uint16,
            7 => BaseType::Int32,
            8 => BaseType::Uint32,
            9 => BaseType::Int64,
            10 => BaseType::Uint64,
            11 => BaseType::AtomicCounter,
            12 => BaseType::Fp16,
            13 => BaseType::Fp32,
            14 => BaseType::Fp64,
            15 => BaseType::Struct,
            16 => BaseType::Image,
            17 => BaseType::SampledImage,
            18 => BaseType::Sampler,
            19 => BaseType::AccelerationStructure,
            _ => return None,
        })
    }

    pub fn is_scalar_numeric(self) -> bool {
        matches!(
            self,
            BaseType::Int8
                | BaseType::Uint8
                | BaseType::Int16
                | BaseType::Uint16
                | BaseType::Int32
                | BaseType::Uint32
                | BaseType::Int64
                | BaseType::Uint64
                | BaseType::Fp16
                | BaseType::Fp32
                | BaseType::Fp64
        )
    }
}

/// Length of one array dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrayDimension {
    /// A literal length; 0 for runtime arrays
    Literal(u32),
    /// Length given by a specialization constant
    SpecConstant(ConstantId),
}

/// A type owned by a [`Reflector`](super::Reflector).
///
/// Obtained through [`Reflector::type_handle`](super::Reflector::type_handle);
/// the same id always yields the same `Rc<Type>` from one reflector.
pub struct Type {
    pub(crate) link: Link,
    pub(crate) handle: spvc_type,
    id: TypeId,
}

impl Type {
    pub(crate) fn new(link: Link, handle: spvc_type, id: TypeId) -> Type {
        Type { link, handle, id }
    }

    fn raw(&self) -> Result<(&'static NativeApi, spvc_type)> {
        self.link.validate()?;
        Ok((self.link.session().api, self.handle))
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn is_alive(&self) -> bool {
        self.link.is_alive()
    }

    /// The type with array and pointer wrappers removed.
    pub fn base_type_id(&self) -> Result<TypeId> {
        let (api, ty) = self.raw()?;
        Ok(TypeId(unsafe { (api.spvc_type_get_base_type_id()?)(ty) }))
    }

    pub fn basetype(&self) -> Result<BaseType> {
        let (api, ty) = self.raw()?;
        let value = unsafe { (api.spvc_type_get_basetype()?)(ty) };
        BaseType::from_u32(value).ok_or(Error::UnexpectedValue {
            kind: "BaseType",
            value,
        })
    }

    pub fn bit_width(&self) -> Result<u32> {
        let (api, ty) = self.raw()?;
        Ok(unsafe { (api.spvc_type_get_bit_width()?)(ty) })
    }

    pub fn vector_size(&self) -> Result<u32> {
        let (api, ty) = self.raw()?;
        Ok(unsafe { (api.spvc_type_get_vector_size()?)(ty) })
    }

    pub fn columns(&self) -> Result<u32> {
        let (api, ty) = self.raw()?;
        Ok(unsafe { (api.spvc_type_get_columns()?)(ty) })
    }

    pub fn num_array_dimensions(&self) -> Result<u32> {
        let (api, ty) = self.raw()?;
        Ok(unsafe { (api.spvc_type_get_num_array_dimensions()?)(ty) })
    }

    pub fn array_dimension(&self, dimension: u32) -> Result<ArrayDimension> {
        let (api, ty) = self.raw()?;
        check_index("array dimension", dimension, self.num_array_dimensions()?)?;
        let (literal, value) = unsafe {
            (
                (api.spvc_type_array_dimension_is_literal()?)(ty, dimension),
                (api.spvc_type_get_array_dimension()?)(ty, dimension),
            )
        };
        Ok(if literal != SPVC_FALSE {
            ArrayDimension::Literal(value)
        } else {
            ArrayDimension::SpecConstant(ConstantId(value))
        })
    }

    /// Array dimensions, outermost last.
    pub fn array_dimensions(&self) -> Result<Vec<ArrayDimension>> {
        (0..self.num_array_dimensions()?)
            .map(|dimension| self.array_dimension(dimension))
            .collect()
    }

    pub fn member_count(&self) -> Result<u32> {
        let (api, ty) = self.raw()?;
        Ok(unsafe { (api.spvc_type_get_num_member_types()?)(ty) })
    }

    pub fn member_type_id(&self, index: u32) -> Result<TypeId> {
        let (api, ty) = self.raw()?;
        self.check_member(index)?;
        Ok(TypeId(unsafe { (api.spvc_type_get_member_type()?)(ty, index) }))
    }

    /// Fails with `InvalidArgument` unless `index` names a member.
    pub(crate) fn check_member(&self, index: u32) -> Result<()> {
        check_index("member", index, self.member_count()?)
    }

    pub fn member_type_ids(&self) -> Result<Vec<TypeId>> {
        (0..self.member_count()?)
            .map(|index| self.member_type_id(index))
            .collect()
    }

    pub fn storage_class(&self) -> Result<StorageClass> {
        let (api, ty) = self.raw()?;
        from_spirv!(StorageClass, unsafe { (api.spvc_type_get_storage_class()?)(ty) })
    }

    // Image traits; only meaningful for image and sampled image types

    pub fn image_sampled_type(&self) -> Result<TypeId> {
        let (api, ty) = self.raw()?;
        Ok(TypeId(unsafe { (api.spvc_type_get_image_sampled_type()?)(ty) }))
    }

    pub fn image_dimension(&self) -> Result<Dim> {
        let (api, ty) = self.raw()?;
        from_spirv!(Dim, unsafe { (api.spvc_type_get_image_dimension()?)(ty) })
    }

    pub fn image_is_depth(&self) -> Result<bool> {
        let (api, ty) = self.raw()?;
        Ok(unsafe { (api.spvc_type_get_image_is_depth()?)(ty) } != SPVC_FALSE)
    }

    pub fn image_arrayed(&self) -> Result<bool> {
        let (api, ty) = self.raw()?;
        Ok(unsafe { (api.spvc_type_get_image_arrayed()?)(ty) } != SPVC_FALSE)
    }

    pub fn image_multisampled(&self) -> Result<bool> {
        let (api, ty) = self.raw()?;
        Ok(unsafe { (api.spvc_type_get_image_multisampled()?)(ty) } != SPVC_FALSE)
    }

    pub fn image_is_storage(&self) -> Result<bool> {
        let (api, ty) = self.raw()?;
        Ok(unsafe { (api.spvc_type_get_image_is_storage()?)(ty) } != SPVC_FALSE)
    }

    pub fn image_storage_format(&self) -> Result<ImageFormat> {
        let (api, ty) = self.raw()?;
        from_spirv!(ImageFormat, unsafe { (api.spvc_type_get_image_storage_format()?)(ty) })
    }

    pub fn image_access_qualifier(&self) -> Result<AccessQualifier> {
        let (api, ty) = self.raw()?;
        from_spirv!(AccessQualifier, unsafe { (api.spvc_type_get_image_access_qualifier()?)(ty) })
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Type")
            .field("id", &self.id)
            .field("link", &self.link)
            .finish()
    }
}

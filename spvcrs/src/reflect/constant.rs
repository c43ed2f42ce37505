//! Constant reflection and specialization

use super::check_index;
use crate::graph::Link;
use crate::strings::native_slice;
use crate::{ConstantId, Result, TypeId};
use spvc::{NativeApi, spvc_constant};
use std::fmt;
use std::ptr;

macro_rules! scalar_accessors {
    ($(
        $(#[$meta:meta])*
        $get:ident / $set:ident: $ty:ty => $native_get:ident, $native_set:ident;
    )*) => {
        $(
            $(#[$meta])*
            pub fn $get(&self, column: u32, row: u32) -> Result<$ty> {
                let (api, constant) = self.raw()?;
                self.check_scalar(column, row)?;
                let value = unsafe { (api.$native_get()?)(constant, column, row) };
                Ok(value as $ty)
            }

            pub fn $set(&self, column: u32, row: u32, value: $ty) -> Result<()> {
                let (api, constant) = self.raw()?;
                self.check_scalar(column, row)?;
                unsafe { (api.$native_set()?)(constant, column, row, value) };
                Ok(())
            }
        )*
    };
}

/// A constant owned by a [`Reflector`](super::Reflector).
///
/// Scalars are addressed by `(column, row)`; a plain scalar is `(0, 0)` and
/// a vector component is `(0, component)`. Positions outside the type's
/// columns and components, or beyond 4x4, are rejected. Setting a value on a
/// specialization constant changes the default emitted by later compiles.
pub struct Constant {
    pub(crate) link: Link,
    handle: spvc_constant,
    id: ConstantId,
    columns: u32,
    rows: u32,
}

impl Constant {
    const MAX_DIMENSION: u32 = 4;

    pub(crate) fn new(link: Link, handle: spvc_constant, id: ConstantId, (columns, rows): (u32, u32)) -> Constant {
        Constant {
            link,
            handle,
            id,
            columns: columns.min(Self::MAX_DIMENSION),
            rows: rows.min(Self::MAX_DIMENSION),
        }
    }

    fn check_scalar(&self, column: u32, row: u32) -> Result<()> {
        check_index("column", column, self.columns)?;
        check_index("row", row, self.rows)
    }

    fn raw(&self) -> Result<(&'static NativeApi, spvc_constant)> {
        self.link.validate()?;
        Ok((self.link.session().api, self.handle))
    }

    pub fn id(&self) -> ConstantId {
        self.id
    }

    pub fn is_alive(&self) -> bool {
        self.link.is_alive()
    }

    /// Half-precision value, widened to `f32`.
    pub fn scalar_f16(&self, column: u32, row: u32) -> Result<f32> {
        let (api, constant) = self.raw()?;
        self.check_scalar(column, row)?;
        Ok(unsafe { (api.spvc_constant_get_scalar_fp16()?)(constant, column, row) })
    }

    /// Stores raw IEEE 754 binary16 bits.
    pub fn set_scalar_f16(&self, column: u32, row: u32, bits: u16) -> Result<()> {
        let (api, constant) = self.raw()?;
        self.check_scalar(column, row)?;
        unsafe { (api.spvc_constant_set_scalar_fp16()?)(constant, column, row, bits) };
        Ok(())
    }

    scalar_accessors! {
        scalar_f32 / set_scalar_f32: f32 => spvc_constant_get_scalar_fp32, spvc_constant_set_scalar_fp32;
        scalar_f64 / set_scalar_f64: f64 => spvc_constant_get_scalar_fp64, spvc_constant_set_scalar_fp64;
        scalar_u32 / set_scalar_u32: u32 => spvc_constant_get_scalar_u32, spvc_constant_set_scalar_u32;
        scalar_i32 / set_scalar_i32: i32 => spvc_constant_get_scalar_i32, spvc_constant_set_scalar_i32;
        scalar_u64 / set_scalar_u64: u64 => spvc_constant_get_scalar_u64, spvc_constant_set_scalar_u64;
        scalar_i64 / set_scalar_i64: i64 => spvc_constant_get_scalar_i64, spvc_constant_set_scalar_i64;
        // The native getters for narrow types return the value widened to 32 bits
        scalar_u16 / set_scalar_u16: u16 => spvc_constant_get_scalar_u16, spvc_constant_set_scalar_u16;
        scalar_i16 / set_scalar_i16: i16 => spvc_constant_get_scalar_i16, spvc_constant_set_scalar_i16;
        scalar_u8 / set_scalar_u8: u8 => spvc_constant_get_scalar_u8, spvc_constant_set_scalar_u8;
        scalar_i8 / set_scalar_i8: i8 => spvc_constant_get_scalar_i8, spvc_constant_set_scalar_i8;
    }

    /// Constituents of a composite constant.
    pub fn subconstants(&self) -> Result<Vec<ConstantId>> {
        let (api, constant) = self.raw()?;
        let mut ids = ptr::null();
        let mut count = 0;
        unsafe { (api.spvc_constant_get_subconstants()?)(constant, &mut ids, &mut count) };
        Ok(unsafe { native_slice(ids, count) }
            .into_iter()
            .map(ConstantId)
            .collect())
    }

    pub fn type_id(&self) -> Result<TypeId> {
        let (api, constant) = self.raw()?;
        Ok(TypeId(unsafe { (api.spvc_constant_get_type()?)(constant) }))
    }
}

impl fmt::Debug for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constant")
            .field("id", &self.id)
            .field("link", &self.link)
            .finish()
    }
}

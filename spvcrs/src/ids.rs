//! SPIR-V id newtypes

use std::fmt;

macro_rules! define_id {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
            #[repr(transparent)]
            pub struct $name(pub u32);

            impl $name {
                /// The raw SPIR-V id
                #[inline]
                pub fn raw(self) -> u32 {
                    self.0
                }
            }

            impl fmt::Debug for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}(%{})", stringify!($name), self.0)
                }
            }

            impl From<u32> for $name {
                fn from(raw: u32) -> Self {
                    $name(raw)
                }
            }
        )*
    };
}

define_id! {
    /// Any SPIR-V result id
    Id,
    /// Id of an `OpType*` instruction
    TypeId,
    /// Id of an `OpVariable`
    VariableId,
    /// Id of an `OpConstant*` or `OpSpecConstant*` instruction
    ConstantId,
}

impl From<TypeId> for Id {
    fn from(id: TypeId) -> Self {
        Id(id.0)
    }
}

impl From<VariableId> for Id {
    fn from(id: VariableId) -> Self {
        Id(id.0)
    }
}

impl From<ConstantId> for Id {
    fn from(id: ConstantId) -> Self {
        Id(id.0)
    }
}

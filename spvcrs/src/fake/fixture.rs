//! Hand-assembled SPIR-V modules used throughout the unit tests

use crate::{ConstantId, TypeId, VariableId};
use spirv::{
    AddressingModel, BuiltIn, Capability, Decoration, Dim, ExecutionMode, ExecutionModel,
    FunctionControl, ImageFormat, MemoryModel, Op, StorageClass,
};

const MAGIC: u32 = 0x0723_0203;
const VERSION_1_0: u32 = 0x0001_0000;

/// Builds a module one instruction at a time.
struct Assembler {
    words: Vec<u32>,
}

impl Assembler {
    fn new(bound: u32) -> Assembler {
        Assembler {
            words: vec![MAGIC, VERSION_1_0, 0, bound, 0],
        }
    }

    fn op(&mut self, op: Op, operands: &[u32]) -> &mut Self {
        self.words.push(((operands.len() as u32 + 1) << 16) | op as u32);
        self.words.extend_from_slice(operands);
        self
    }

    /// An instruction with a literal string between `head` and `tail`.
    fn op_str(&mut self, op: Op, head: &[u32], text: &str, tail: &[u32]) -> &mut Self {
        let mut operands = head.to_vec();
        operands.extend(string_words(text));
        operands.extend_from_slice(tail);
        self.op(op, &operands)
    }

    fn decorate(&mut self, target: u32, decoration: Decoration, literals: &[u32]) -> &mut Self {
        let mut operands = vec![target, decoration as u32];
        operands.extend_from_slice(literals);
        self.op(Op::Decorate, &operands)
    }

    fn member_decorate(&mut self, target: u32, member: u32, decoration: Decoration, literals: &[u32]) -> &mut Self {
        let mut operands = vec![target, member, decoration as u32];
        operands.extend_from_slice(literals);
        self.op(Op::MemberDecorate, &operands)
    }

    fn finish(&mut self) -> Vec<u32> {
        std::mem::take(&mut self.words)
    }
}

/// NUL-terminated, zero-padded, little-endian packed.
fn string_words(text: &str) -> Vec<u32> {
    let mut bytes = text.as_bytes().to_vec();
    bytes.push(0);
    while bytes.len() % 4 != 0 {
        bytes.push(0);
    }
    bytes
        .chunks_exact(4)
        .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixture {
    /// Fragment shader `pixel` reading a uniform block, an input and
    /// `gl_FragCoord`, and writing one output. Also declares an unused
    /// separate image and sampler, a specialization constant, a struct
    /// without offsets and an array type.
    Fragment,
    /// Compute shader `main` whose workgroup size is a composite with a
    /// specializable `x`.
    Compute,
}

impl Fixture {
    pub const FLOAT_TYPE: TypeId = TypeId(4);
    pub const VEC4_TYPE: TypeId = TypeId(5);
    pub const MAT4_TYPE: TypeId = TypeId(6);
    pub const GLOBALS_TYPE: TypeId = TypeId(7);
    pub const GLOBALS_PTR: TypeId = TypeId(8);
    pub const GLOBALS_VAR: VariableId = VariableId(9);
    pub const FRAG_COORD_VAR: VariableId = VariableId(14);
    pub const UINT_TYPE: TypeId = TypeId(15);
    pub const SPEC_CONSTANT: ConstantId = ConstantId(16);
    pub const PLAIN_TYPE: TypeId = TypeId(17);
    pub const ARRAY_TYPE: TypeId = TypeId(19);
    pub const IMAGE_VAR: VariableId = VariableId(22);
    pub const SAMPLER_VAR: VariableId = VariableId(25);

    pub const WORKGROUP_SIZE: ConstantId = ConstantId(9);

    pub fn bound(self) -> u32 {
        match self {
            Fixture::Fragment => 34,
            Fixture::Compute => 11,
        }
    }

    pub fn words(self) -> Vec<u32> {
        match self {
            Fixture::Fragment => fragment(),
            Fixture::Compute => compute(),
        }
    }

    /// Words in native byte order, as `Context::parse_spirv` reads them.
    pub fn bytes(self) -> Vec<u8> {
        self.words().iter().flat_map(|word| word.to_ne_bytes()).collect()
    }
}

fn fragment() -> Vec<u32> {
    let mut asm = Assembler::new(Fixture::Fragment.bound());
    asm.op(Op::Capability, &[Capability::Shader as u32])
        .op_str(Op::Extension, &[], "SPV_GOOGLE_user_type", &[])
        .op(Op::MemoryModel, &[AddressingModel::Logical as u32, MemoryModel::GLSL450 as u32])
        .op_str(Op::EntryPoint, &[ExecutionModel::Fragment as u32, 1], "pixel", &[11, 13, 14])
        .op(Op::ExecutionMode, &[1, ExecutionMode::OriginUpperLeft as u32]);

    asm.op_str(Op::Name, &[7], "Globals", &[])
        .op_str(Op::MemberName, &[7, 1], "m", &[])
        .op_str(Op::Name, &[9], "globals", &[])
        .op_str(Op::Name, &[11], "uv", &[])
        .op_str(Op::Name, &[13], "color", &[])
        .op_str(Op::Name, &[14], "gl_FragCoord", &[])
        .op_str(Op::Name, &[17], "Plain", &[])
        .op_str(Op::Name, &[22], "tex", &[])
        .op_str(Op::Name, &[25], "samp", &[]);

    asm.decorate(7, Decoration::Block, &[])
        .member_decorate(7, 0, Decoration::Offset, &[0])
        .member_decorate(7, 1, Decoration::ColMajor, &[])
        .member_decorate(7, 1, Decoration::Offset, &[16])
        .member_decorate(7, 1, Decoration::MatrixStride, &[16])
        .decorate(9, Decoration::DescriptorSet, &[0])
        .decorate(9, Decoration::Binding, &[0])
        .decorate(11, Decoration::Location, &[0])
        .decorate(13, Decoration::Location, &[0])
        .decorate(14, Decoration::BuiltIn, &[BuiltIn::FragCoord as u32])
        .decorate(16, Decoration::SpecId, &[3])
        .decorate(19, Decoration::ArrayStride, &[16])
        .decorate(22, Decoration::DescriptorSet, &[0])
        .decorate(22, Decoration::Binding, &[1])
        .decorate(25, Decoration::DescriptorSet, &[0])
        .decorate(25, Decoration::Binding, &[2]);

    asm.op(Op::TypeVoid, &[2])
        .op(Op::TypeFunction, &[3, 2])
        .op(Op::TypeFloat, &[4, 32])
        .op(Op::TypeVector, &[5, 4, 4])
        .op(Op::TypeMatrix, &[6, 5, 4])
        .op(Op::TypeStruct, &[7, 5, 6])
        .op(Op::TypePointer, &[8, StorageClass::Uniform as u32, 7])
        .op(Op::Variable, &[8, 9, StorageClass::Uniform as u32])
        .op(Op::TypePointer, &[10, StorageClass::Input as u32, 5])
        .op(Op::Variable, &[10, 11, StorageClass::Input as u32])
        .op(Op::TypePointer, &[12, StorageClass::Output as u32, 5])
        .op(Op::Variable, &[12, 13, StorageClass::Output as u32])
        .op(Op::Variable, &[10, 14, StorageClass::Input as u32])
        .op(Op::TypeInt, &[15, 32, 0])
        .op(Op::SpecConstant, &[15, 16, 16])
        .op(Op::TypeStruct, &[17, 4])
        .op(Op::Constant, &[15, 18, 4])
        .op(Op::TypeArray, &[19, 5, 18])
        .op(
            Op::TypeImage,
            &[20, 4, Dim::Dim2D as u32, 0, 0, 0, 1, ImageFormat::Unknown as u32],
        )
        .op(Op::TypePointer, &[21, StorageClass::UniformConstant as u32, 20])
        .op(Op::Variable, &[21, 22, StorageClass::UniformConstant as u32])
        .op(Op::TypeSampler, &[23])
        .op(Op::TypePointer, &[24, StorageClass::UniformConstant as u32, 23])
        .op(Op::Variable, &[24, 25, StorageClass::UniformConstant as u32])
        .op(Op::TypeInt, &[26, 32, 1])
        .op(Op::Constant, &[26, 27, 1])
        .op(Op::TypePointer, &[28, StorageClass::Uniform as u32, 6]);

    asm.op(Op::Function, &[2, 1, FunctionControl::NONE.bits(), 3])
        .op(Op::Label, &[29])
        .op(Op::AccessChain, &[28, 30, 9, 27])
        .op(Op::Load, &[6, 31, 30])
        .op(Op::Load, &[5, 32, 14])
        .op(Op::Load, &[5, 33, 11])
        .op(Op::Store, &[13, 32])
        .op(Op::Return, &[])
        .op(Op::FunctionEnd, &[]);
    asm.finish()
}

fn compute() -> Vec<u32> {
    let mut asm = Assembler::new(Fixture::Compute.bound());
    asm.op(Op::Capability, &[Capability::Shader as u32])
        .op(Op::MemoryModel, &[AddressingModel::Logical as u32, MemoryModel::GLSL450 as u32])
        .op_str(Op::EntryPoint, &[ExecutionModel::GLCompute as u32, 1], "main", &[])
        .op(Op::ExecutionMode, &[1, ExecutionMode::LocalSize as u32, 1, 1, 1])
        .op_str(Op::Name, &[9], "gl_WorkGroupSize", &[])
        .decorate(6, Decoration::SpecId, &[0])
        .decorate(9, Decoration::BuiltIn, &[BuiltIn::WorkgroupSize as u32]);

    asm.op(Op::TypeVoid, &[2])
        .op(Op::TypeFunction, &[3, 2])
        .op(Op::TypeInt, &[4, 32, 0])
        .op(Op::TypeVector, &[5, 4, 3])
        .op(Op::SpecConstant, &[4, 6, 8])
        .op(Op::Constant, &[4, 7, 1])
        .op(Op::Constant, &[4, 8, 1])
        .op(Op::SpecConstantComposite, &[5, 9, 6, 7, 8]);

    asm.op(Op::Function, &[2, 1, FunctionControl::NONE.bits(), 3])
        .op(Op::Label, &[10])
        .op(Op::Return, &[])
        .op(Op::FunctionEnd, &[]);
    asm.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_string_words_are_padded() {
        assert_eq!(string_words("main"), vec![0x6e69_616d, 0]);
        assert_eq!(string_words("uv"), vec![0x0000_7675]);
    }

    #[test]
    fn test_fixtures_load_with_rspirv() {
        for fixture in [Fixture::Fragment, Fixture::Compute] {
            let module = rspirv::dr::load_words(fixture.words()).unwrap();
            let header = module.header.unwrap();
            assert_eq!(header.bound, fixture.bound());
            assert_eq!(module.entry_points.len(), 1);
        }
    }
}

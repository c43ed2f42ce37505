//! In-memory module model the fake compiler answers queries from

use rspirv::dr::{self, Operand};
use spirv::{Decoration, Op, StorageClass};
use spvc::*;
use std::result::Result;
use std::cell::Cell;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// A parse or layout failure, reported through the context like the native
/// library does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub code: spvc_result,
    pub message: String,
}

impl Failure {
    pub fn invalid_spirv(message: &str) -> Failure {
        Failure {
            code: SPVC_ERROR_INVALID_SPIRV,
            message: message.to_string(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Failure {
        Failure {
            code: SPVC_ERROR_INVALID_ARGUMENT,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DecorationValue {
    pub value: u32,
    pub string: Option<String>,
    /// Word index of the literal in the parsed binary
    pub word_offset: Option<u32>,
}

/// Decorations of one id or member, ordered by decoration value
pub type Decorations = BTreeMap<u32, DecorationValue>;

#[derive(Debug, Clone, Copy)]
pub struct ImageTraits {
    pub sampled_type: u32,
    pub dim: u32,
    pub depth: bool,
    pub arrayed: bool,
    pub multisampled: bool,
    pub sampled: u32,
    pub format: u32,
    pub access: u32,
}

impl Default for ImageTraits {
    fn default() -> Self {
        ImageTraits {
            sampled_type: 0,
            dim: 0,
            depth: false,
            arrayed: false,
            multisampled: false,
            sampled: 0,
            format: 0,
            access: 0x7fff_ffff,
        }
    }
}

/// A type as SPIRV-Cross sees it. Arrays and pointers inherit everything
/// from the type they wrap, including `self_id`.
#[derive(Debug, Clone)]
pub struct FakeType {
    pub id: u32,
    pub self_id: u32,
    pub basetype: u32,
    pub width: u32,
    pub vecsize: u32,
    pub columns: u32,
    pub array: Vec<u32>,
    pub array_literal: Vec<bool>,
    pub members: Vec<u32>,
    pub storage: u32,
    pub pointer: bool,
    pub parent: u32,
    pub image: ImageTraits,
}

impl FakeType {
    fn new(id: u32, basetype: u32) -> FakeType {
        FakeType {
            id,
            self_id: id,
            basetype,
            width: 0,
            vecsize: 1,
            columns: 1,
            array: Vec::new(),
            array_literal: Vec::new(),
            members: Vec::new(),
            storage: StorageClass::Generic as u32,
            pointer: false,
            parent: 0,
            image: ImageTraits::default(),
        }
    }
}

/// A constant whose scalars can be rewritten in place through a shared
/// handle. Each slot holds the raw bits of one scalar.
#[derive(Debug, Clone, Default)]
pub struct FakeConstant {
    pub id: u32,
    pub type_id: u32,
    pub specialization: bool,
    pub scalars: [[Cell<u64>; 4]; 4],
    pub subconstants: Vec<u32>,
}

impl FakeConstant {
    /// Fixed 4x4 storage indexed without checks, like the native
    /// `m.c[column].r[row]`.
    pub fn slot(&self, column: u32, row: u32) -> &Cell<u64> {
        &self.scalars[column as usize][row as usize]
    }

    pub fn low_bits(&self, column: u32, row: u32) -> u32 {
        self.slot(column, row).get() as u32
    }

    /// Writes the low 32 bits, keeping the high half.
    pub fn set_low_bits(&self, column: u32, row: u32, value: u32) {
        let slot = self.slot(column, row);
        slot.set((slot.get() & !0xffff_ffff) | u64::from(value));
    }

    pub fn bits(&self, column: u32, row: u32) -> u64 {
        self.slot(column, row).get()
    }

    pub fn set_bits(&self, column: u32, row: u32, value: u64) {
        self.slot(column, row).set(value);
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Variable {
    pub type_id: u32,
    pub storage: u32,
}

#[derive(Debug, Clone)]
pub struct EntryPoint {
    pub model: u32,
    pub function: u32,
    pub name: String,
}

/// One reflected resource before it is handed out through C structs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    pub id: u32,
    pub base_type_id: u32,
    pub type_id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinEntry {
    pub builtin: u32,
    pub value_type_id: u32,
    pub resource: ResourceEntry,
}

#[derive(Debug, Default)]
pub struct ResourceLists {
    pub resources: BTreeMap<spvc_resource_type, Vec<ResourceEntry>>,
    pub builtins: BTreeMap<spvc_builtin_resource_type, Vec<BuiltinEntry>>,
}

#[derive(Debug, Clone, Default)]
pub struct Module {
    pub bound: u32,
    pub capabilities: Vec<u32>,
    pub extensions: Vec<String>,
    pub entry_points: Vec<EntryPoint>,
    /// Execution modes of the module, each with up to three literals
    pub execution_modes: BTreeMap<u32, Vec<u32>>,
    pub names: HashMap<u32, String>,
    pub member_names: HashMap<(u32, u32), String>,
    pub decorations: HashMap<u32, Decorations>,
    pub member_decorations: HashMap<(u32, u32), Decorations>,
    pub types: BTreeMap<u32, Box<FakeType>>,
    pub constants: BTreeMap<u32, Box<FakeConstant>>,
    pub variables: BTreeMap<u32, Variable>,
    /// Variables loaded, stored or indexed inside a function
    pub accessed: BTreeSet<u32>,
    /// `(variable, member)` pairs reached through an access chain
    pub member_accesses: BTreeSet<(u32, u32)>,
}

fn word(operand: &Operand) -> u32 {
    match *operand {
        Operand::IdRef(id) => id,
        Operand::LiteralBit32(value) => value,
        Operand::LiteralBit64(value) => value as u32,
        Operand::Decoration(value) => value as u32,
        Operand::BuiltIn(value) => value as u32,
        Operand::StorageClass(value) => value as u32,
        Operand::Dim(value) => value as u32,
        Operand::ImageFormat(value) => value as u32,
        Operand::AccessQualifier(value) => value as u32,
        Operand::ExecutionModel(value) => value as u32,
        Operand::ExecutionMode(value) => value as u32,
        Operand::Capability(value) => value as u32,
        _ => 0,
    }
}

fn string(operand: Option<&Operand>) -> Option<String> {
    match operand {
        Some(Operand::LiteralString(value)) => Some(value.clone()),
        _ => None,
    }
}

fn words(operands: &[Operand]) -> Vec<u32> {
    operands.iter().map(word).collect()
}

impl Module {
    pub fn parse(binary: &[u32]) -> Result<Module, Failure> {
        if binary.len() < 5 {
            return Err(Failure::invalid_spirv("SPIRV file too small."));
        }
        let parsed = dr::load_words(binary).map_err(|_| Failure::invalid_spirv("Invalid SPIRV format."))?;

        let mut module = Module {
            bound: parsed.header.as_ref().map_or(binary[3], |header| header.bound),
            ..Module::default()
        };

        for inst in &parsed.capabilities {
            module.capabilities.extend(inst.operands.first().map(word));
        }
        for inst in &parsed.extensions {
            module.extensions.extend(string(inst.operands.first()));
        }
        for inst in &parsed.entry_points {
            let operands = words(&inst.operands);
            module.entry_points.push(EntryPoint {
                model: operands.first().copied().unwrap_or(0),
                function: operands.get(1).copied().unwrap_or(0),
                name: string(inst.operands.get(2)).unwrap_or_default(),
            });
        }
        for inst in &parsed.execution_modes {
            let operands = words(&inst.operands);
            if let Some(&mode) = operands.get(1) {
                module.execution_modes.insert(mode, operands[2..].to_vec());
            }
        }
        for inst in &parsed.debug_names {
            let target = inst.operands.first().map_or(0, word);
            match inst.class.opcode {
                Op::Name => {
                    module.names.insert(target, string(inst.operands.get(1)).unwrap_or_default());
                }
                Op::MemberName => {
                    let index = inst.operands.get(1).map_or(0, word);
                    module
                        .member_names
                        .insert((target, index), string(inst.operands.get(2)).unwrap_or_default());
                }
                _ => {}
            }
        }
        for inst in &parsed.annotations {
            module.add_annotation(inst);
        }
        for inst in &parsed.types_global_values {
            module.add_global(inst);
        }
        for function in &parsed.functions {
            for block in &function.blocks {
                for inst in &block.instructions {
                    module.add_access(inst);
                }
            }
        }
        module.record_decoration_offsets(binary);
        Ok(module)
    }

    fn add_annotation(&mut self, inst: &dr::Instruction) {
        let target = inst.operands.first().map_or(0, word);
        match inst.class.opcode {
            Op::Decorate | Op::DecorateId | Op::DecorateString => {
                let decoration = inst.operands.get(1).map_or(0, word);
                let value = DecorationValue {
                    value: inst.operands.get(2).map_or(0, word),
                    string: string(inst.operands.get(2)),
                    word_offset: None,
                };
                self.decorations.entry(target).or_default().insert(decoration, value);
            }
            Op::MemberDecorate | Op::MemberDecorateString => {
                let member = inst.operands.get(1).map_or(0, word);
                let decoration = inst.operands.get(2).map_or(0, word);
                let value = DecorationValue {
                    value: inst.operands.get(3).map_or(0, word),
                    string: string(inst.operands.get(3)),
                    word_offset: None,
                };
                self.member_decorations
                    .entry((target, member))
                    .or_default()
                    .insert(decoration, value);
            }
            _ => {}
        }
    }

    /// Copies `base` under a new id, as SPIRV-Cross does for derived types.
    fn derive(&self, base: u32, id: u32) -> FakeType {
        let mut ty = self
            .types
            .get(&base)
            .map_or_else(|| FakeType::new(id, SPVC_BASETYPE_UNKNOWN), |ty| (**ty).clone());
        ty.id = id;
        ty
    }

    fn add_global(&mut self, inst: &dr::Instruction) {
        let Some(id) = inst.result_id else {
            return;
        };
        let operands = words(&inst.operands);
        let operand = |index: usize| operands.get(index).copied().unwrap_or(0);

        let ty = match inst.class.opcode {
            Op::TypeVoid => FakeType::new(id, SPVC_BASETYPE_VOID),
            Op::TypeBool => FakeType::new(id, SPVC_BASETYPE_BOOLEAN),
            Op::TypeInt => {
                let signed = operand(1) != 0;
                let basetype = match (operand(0), signed) {
                    (8, true) => SPVC_BASETYPE_INT8,
                    (8, false) => SPVC_BASETYPE_UINT8,
                    (16, true) => SPVC_BASETYPE_INT16,
                    (16, false) => SPVC_BASETYPE_UINT16,
                    (64, true) => SPVC_BASETYPE_INT64,
                    (64, false) => SPVC_BASETYPE_UINT64,
                    (_, true) => SPVC_BASETYPE_INT32,
                    (_, false) => SPVC_BASETYPE_UINT32,
                };
                FakeType {
                    width: operand(0),
                    ..FakeType::new(id, basetype)
                }
            }
            Op::TypeFloat => {
                let basetype = match operand(0) {
                    16 => SPVC_BASETYPE_FP16,
                    64 => SPVC_BASETYPE_FP64,
                    _ => SPVC_BASETYPE_FP32,
                };
                FakeType {
                    width: operand(0),
                    ..FakeType::new(id, basetype)
                }
            }
            Op::TypeVector => FakeType {
                self_id: id,
                vecsize: operand(1),
                parent: operand(0),
                ..self.derive(operand(0), id)
            },
            Op::TypeMatrix => FakeType {
                self_id: id,
                columns: operand(1),
                parent: operand(0),
                ..self.derive(operand(0), id)
            },
            Op::TypeImage => FakeType {
                image: ImageTraits {
                    sampled_type: operand(0),
                    dim: operand(1),
                    depth: operand(2) == 1,
                    arrayed: operand(3) != 0,
                    multisampled: operand(4) != 0,
                    sampled: operand(5),
                    format: operand(6),
                    access: operands.get(7).copied().unwrap_or(0x7fff_ffff),
                },
                ..FakeType::new(id, SPVC_BASETYPE_IMAGE)
            },
            Op::TypeSampler => FakeType::new(id, SPVC_BASETYPE_SAMPLER),
            Op::TypeSampledImage => FakeType {
                self_id: id,
                basetype: SPVC_BASETYPE_SAMPLED_IMAGE,
                ..self.derive(operand(0), id)
            },
            Op::TypeAccelerationStructureKHR => FakeType::new(id, SPVC_BASETYPE_ACCELERATION_STRUCTURE),
            Op::TypeArray => {
                let mut ty = self.derive(operand(0), id);
                match self.constants.get(&operand(1)) {
                    Some(length) if !length.specialization => {
                        ty.array.push(length.low_bits(0, 0));
                        ty.array_literal.push(true);
                    }
                    _ => {
                        ty.array.push(operand(1));
                        ty.array_literal.push(false);
                    }
                }
                ty.parent = operand(0);
                ty
            }
            Op::TypeRuntimeArray => {
                let mut ty = self.derive(operand(0), id);
                ty.array.push(0);
                ty.array_literal.push(true);
                ty.parent = operand(0);
                ty
            }
            Op::TypeStruct => FakeType {
                members: operands.clone(),
                ..FakeType::new(id, SPVC_BASETYPE_STRUCT)
            },
            Op::TypePointer => FakeType {
                storage: operand(0),
                pointer: true,
                parent: operand(1),
                ..self.derive(operand(1), id)
            },
            Op::TypeFunction => FakeType::new(id, SPVC_BASETYPE_UNKNOWN),
            Op::Constant | Op::SpecConstant => {
                let constant = self.new_constant(inst, id, inst.class.opcode == Op::SpecConstant);
                let bits = match inst.operands.first() {
                    Some(Operand::LiteralBit64(value)) => *value,
                    Some(operand) => u64::from(word(operand)),
                    None => 0,
                };
                constant.set_bits(0, 0, bits);
                self.constants.insert(id, constant);
                return;
            }
            Op::ConstantTrue | Op::ConstantFalse | Op::SpecConstantTrue | Op::SpecConstantFalse => {
                let opcode = inst.class.opcode;
                let constant = self.new_constant(inst, id, matches!(opcode, Op::SpecConstantTrue | Op::SpecConstantFalse));
                constant.set_bits(0, 0, u64::from(matches!(opcode, Op::ConstantTrue | Op::SpecConstantTrue)));
                self.constants.insert(id, constant);
                return;
            }
            Op::ConstantNull => {
                let constant = self.new_constant(inst, id, false);
                self.constants.insert(id, constant);
                return;
            }
            Op::ConstantComposite | Op::SpecConstantComposite => {
                let mut constant = self.new_constant(inst, id, inst.class.opcode == Op::SpecConstantComposite);
                constant.subconstants = operands.clone();
                self.constants.insert(id, constant);
                return;
            }
            Op::Variable => {
                self.variables.insert(
                    id,
                    Variable {
                        type_id: inst.result_type.unwrap_or(0),
                        storage: operand(0),
                    },
                );
                return;
            }
            _ => return,
        };
        self.types.insert(id, Box::new(ty));
    }

    fn new_constant(&self, inst: &dr::Instruction, id: u32, specialization: bool) -> Box<FakeConstant> {
        Box::new(FakeConstant {
            id,
            type_id: inst.result_type.unwrap_or(0),
            specialization,
            ..FakeConstant::default()
        })
    }

    fn add_access(&mut self, inst: &dr::Instruction) {
        let operands = words(&inst.operands);
        match inst.class.opcode {
            Op::Load => self.touch(operands.first().copied()),
            Op::Store => {
                self.touch(operands.first().copied());
                self.touch(operands.get(1).copied());
            }
            Op::AccessChain | Op::InBoundsAccessChain => {
                let Some(&base) = operands.first() else {
                    return;
                };
                self.touch(Some(base));
                if self.variables.contains_key(&base)
                    && let Some(index) = operands.get(1).and_then(|index| self.constants.get(index))
                {
                    let member = index.low_bits(0, 0);
                    self.member_accesses.insert((base, member));
                }
            }
            _ => {}
        }
    }

    fn touch(&mut self, id: Option<u32>) {
        if let Some(id) = id
            && self.variables.contains_key(&id)
        {
            self.accessed.insert(id);
        }
    }

    /// Finds where the literal of each `OpDecorate` sits in `binary`.
    fn record_decoration_offsets(&mut self, binary: &[u32]) {
        let mut index = 5;
        while index < binary.len() {
            let count = (binary[index] >> 16) as usize;
            let opcode = binary[index] & 0xffff;
            if count == 0 {
                break;
            }
            if opcode == Op::Decorate as u32 && count >= 4 && index + 2 < binary.len() {
                let target = binary[index + 1];
                let decoration = binary[index + 2];
                if let Some(value) = self
                    .decorations
                    .get_mut(&target)
                    .and_then(|decorations| decorations.get_mut(&decoration))
                {
                    value.word_offset = Some((index + 3) as u32);
                }
            }
            index += count;
        }
    }

    // Queries

    pub fn decoration(&self, id: u32, decoration: Decoration) -> Option<&DecorationValue> {
        self.decorations.get(&id)?.get(&(decoration as u32))
    }

    pub fn member_decoration(&self, id: u32, member: u32, decoration: Decoration) -> Option<&DecorationValue> {
        self.member_decorations.get(&(id, member))?.get(&(decoration as u32))
    }

    pub fn name(&self, id: u32) -> &str {
        self.names.get(&id).map_or("", String::as_str)
    }

    /// The type a variable points to.
    pub fn variable_type(&self, id: u32) -> Option<&FakeType> {
        let variable = self.variables.get(&id)?;
        let pointer = self.types.get(&variable.type_id)?;
        self.types.get(&pointer.self_id).map(|ty| &**ty)
    }

    fn struct_type(&self, id: u32) -> Result<&FakeType, Failure> {
        match self.types.get(&id) {
            Some(ty) if ty.basetype == SPVC_BASETYPE_STRUCT => Ok(ty),
            _ => Err(Failure::invalid_argument("Bad cast")),
        }
    }

    pub fn member_offset(&self, struct_id: u32, index: u32) -> Result<u32, Failure> {
        self.member_decoration(struct_id, index, Decoration::Offset)
            .map(|offset| offset.value)
            .ok_or_else(|| Failure::invalid_argument("Struct member does not have Offset set."))
    }

    pub fn member_array_stride(&self, struct_id: u32, index: u32) -> Result<u32, Failure> {
        let ty = self.struct_type(struct_id)?;
        ty.members
            .get(index as usize)
            .and_then(|member| self.decoration(*member, Decoration::ArrayStride))
            .map(|stride| stride.value)
            .ok_or_else(|| Failure::invalid_argument("Struct member does not have ArrayStride set."))
    }

    pub fn member_matrix_stride(&self, struct_id: u32, index: u32) -> Result<u32, Failure> {
        self.member_decoration(struct_id, index, Decoration::MatrixStride)
            .map(|stride| stride.value)
            .ok_or_else(|| Failure::invalid_argument("Struct member does not have MatrixStride set."))
    }

    pub fn member_size(&self, struct_id: u32, index: u32) -> Result<usize, Failure> {
        let parent = self.struct_type(struct_id)?;
        let Some(member) = parent.members.get(index as usize).and_then(|id| self.types.get(id)) else {
            return Err(Failure::invalid_argument("Bad cast"));
        };

        if let (Some(&length), Some(&literal)) = (member.array.last(), member.array_literal.last()) {
            let count = if literal {
                length
            } else {
                self.constants.get(&length).map_or(0, |constant| constant.low_bits(0, 0))
            };
            let stride = self.member_array_stride(struct_id, index)?;
            return Ok(stride as usize * count as usize);
        }

        if member.basetype == SPVC_BASETYPE_STRUCT {
            return self.struct_size(member.self_id);
        }

        if member.columns == 1 {
            return Ok((member.width / 8) as usize * member.vecsize as usize);
        }

        let stride = self.member_matrix_stride(struct_id, index)?;
        let row_major = self.member_decoration(struct_id, index, Decoration::RowMajor).is_some();
        let vectors = if row_major { member.vecsize } else { member.columns };
        Ok(stride as usize * vectors as usize)
    }

    pub fn struct_size(&self, struct_id: u32) -> Result<usize, Failure> {
        let ty = self.struct_type(struct_id)?;
        if ty.members.is_empty() {
            return Err(Failure::invalid_argument("Declared struct in block cannot be empty."));
        }
        let last = (ty.members.len() - 1) as u32;
        Ok(self.member_offset(struct_id, last)? as usize + self.member_size(struct_id, last)?)
    }

    pub fn struct_size_runtime_array(&self, struct_id: u32, array_size: usize) -> Result<usize, Failure> {
        let mut size = self.struct_size(struct_id)?;
        let ty = self.struct_type(struct_id)?;
        let last = (ty.members.len() - 1) as u32;
        if let Some(member) = ty.members.last().and_then(|id| self.types.get(id))
            && member.array.first() == Some(&0)
            && member.array_literal.first() == Some(&true)
        {
            size += array_size * self.member_array_stride(struct_id, last)? as usize;
        }
        Ok(size)
    }

    /// Decorations of a buffer variable plus those shared by every member of
    /// its block.
    pub fn buffer_block_decorations(&self, id: u32) -> Vec<u32> {
        let mut decorations: BTreeSet<u32> = self
            .decorations
            .get(&id)
            .map(|decorations| decorations.keys().copied().collect())
            .unwrap_or_default();

        if let Some(ty) = self.variable_type(id)
            && ty.basetype == SPVC_BASETYPE_STRUCT
        {
            let mut shared: Option<BTreeSet<u32>> = None;
            for index in 0..ty.members.len() as u32 {
                let member: BTreeSet<u32> = self
                    .member_decorations
                    .get(&(ty.self_id, index))
                    .map(|decorations| decorations.keys().copied().collect())
                    .unwrap_or_default();
                shared = Some(match shared {
                    Some(shared) => shared.intersection(&member).copied().collect(),
                    None => member,
                });
            }
            decorations.extend(shared.unwrap_or_default());
        }
        decorations.into_iter().collect()
    }

    pub fn is_builtin(&self, id: u32) -> Option<u32> {
        self.decoration(id, Decoration::BuiltIn).map(|builtin| builtin.value)
    }

    /// Sorts variables into resource lists, optionally limited to `active`.
    pub fn resources(&self, active: Option<&BTreeSet<u32>>) -> ResourceLists {
        let mut lists = ResourceLists::default();
        for (&id, variable) in &self.variables {
            if active.is_some_and(|active| !active.contains(&id)) {
                continue;
            }
            let Some(pointer) = self.types.get(&variable.type_id) else {
                continue;
            };
            let Some(base) = self.types.get(&pointer.self_id) else {
                continue;
            };
            let entry = |name: &str| ResourceEntry {
                id,
                base_type_id: base.self_id,
                type_id: variable.type_id,
                name: name.to_string(),
            };
            let block_name = if self.name(base.self_id).is_empty() {
                self.name(id)
            } else {
                self.name(base.self_id)
            };

            let list = match StorageClass::from_u32(variable.storage) {
                Some(storage @ (StorageClass::Input | StorageClass::Output)) => {
                    let input = storage == StorageClass::Input;
                    if let Some(builtin) = self.is_builtin(id) {
                        let kind = if input {
                            SPVC_BUILTIN_RESOURCE_TYPE_STAGE_INPUT
                        } else {
                            SPVC_BUILTIN_RESOURCE_TYPE_STAGE_OUTPUT
                        };
                        lists.builtins.entry(kind).or_default().push(BuiltinEntry {
                            builtin,
                            value_type_id: pointer.parent,
                            resource: entry(self.name(id)),
                        });
                        continue;
                    }
                    if input {
                        SPVC_RESOURCE_TYPE_STAGE_INPUT
                    } else {
                        SPVC_RESOURCE_TYPE_STAGE_OUTPUT
                    }
                }
                Some(StorageClass::Uniform) => {
                    if self.decoration(base.self_id, Decoration::BufferBlock).is_some() {
                        lists.resources.entry(SPVC_RESOURCE_TYPE_STORAGE_BUFFER).or_default().push(entry(block_name));
                    } else if self.decoration(base.self_id, Decoration::Block).is_some() {
                        lists.resources.entry(SPVC_RESOURCE_TYPE_UNIFORM_BUFFER).or_default().push(entry(block_name));
                    }
                    continue;
                }
                Some(StorageClass::StorageBuffer) => {
                    lists.resources.entry(SPVC_RESOURCE_TYPE_STORAGE_BUFFER).or_default().push(entry(block_name));
                    continue;
                }
                Some(StorageClass::PushConstant) => SPVC_RESOURCE_TYPE_PUSH_CONSTANT,
                Some(StorageClass::AtomicCounter) => SPVC_RESOURCE_TYPE_ATOMIC_COUNTER,
                Some(StorageClass::ShaderRecordBufferKHR) => SPVC_RESOURCE_TYPE_SHADER_RECORD_BUFFER,
                Some(StorageClass::UniformConstant) => match base.basetype {
                    SPVC_BASETYPE_IMAGE if base.image.dim == spirv::Dim::DimSubpassData as u32 => {
                        SPVC_RESOURCE_TYPE_SUBPASS_INPUT
                    }
                    SPVC_BASETYPE_IMAGE if base.image.sampled == 2 => SPVC_RESOURCE_TYPE_STORAGE_IMAGE,
                    SPVC_BASETYPE_IMAGE => SPVC_RESOURCE_TYPE_SEPARATE_IMAGE,
                    SPVC_BASETYPE_SAMPLED_IMAGE => SPVC_RESOURCE_TYPE_SAMPLED_IMAGE,
                    SPVC_BASETYPE_SAMPLER => SPVC_RESOURCE_TYPE_SEPARATE_SAMPLERS,
                    SPVC_BASETYPE_ACCELERATION_STRUCTURE => SPVC_RESOURCE_TYPE_ACCELERATION_STRUCTURE,
                    _ => SPVC_RESOURCE_TYPE_GL_PLAIN_UNIFORM,
                },
                _ => continue,
            };
            lists.resources.entry(list).or_default().push(entry(self.name(id)));
        }
        lists
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::Fixture;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fixture_model() {
        let module = Module::parse(&Fixture::Fragment.words()).unwrap();
        assert_eq!(module.bound, Fixture::Fragment.bound());
        assert_eq!(module.entry_points.len(), 1);
        assert_eq!(module.name(Fixture::GLOBALS_TYPE.0), "Globals");

        let pointer = &module.types[&Fixture::GLOBALS_PTR.0];
        assert!(pointer.pointer);
        assert_eq!(pointer.self_id, Fixture::GLOBALS_TYPE.0);
        assert_eq!(module.struct_size(Fixture::GLOBALS_TYPE.0), Ok(80));
        assert!(module.accessed.contains(&Fixture::GLOBALS_VAR.0));
        assert!(!module.accessed.contains(&Fixture::IMAGE_VAR.0));
        assert_eq!(
            module.member_accesses.iter().copied().collect::<Vec<_>>(),
            vec![(Fixture::GLOBALS_VAR.0, 1)]
        );
    }

    #[test]
    fn test_garbage_is_rejected() {
        let err = Module::parse(&[0xdead_beef; 8]).unwrap_err();
        assert_eq!(err, Failure::invalid_spirv("Invalid SPIRV format."));
        let err = Module::parse(&[0x0723_0203]).unwrap_err();
        assert_eq!(err.message, "SPIRV file too small.");
    }
}

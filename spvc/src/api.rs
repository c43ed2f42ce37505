//! Function table for the `spvc_*` entry points

use crate::*;
use spvc_proc::native_api;
use std::ffi::c_char;

fn unresolved_symbol(name: &str) -> SpvcError {
    SpvcError::FunctionNotFound(name.to_string())
}

native_api! {
    /// Resolved SPIRV-Cross C API entry points.
    ///
    /// Signatures follow `spirv_cross_c.h`. Entries missing from the loaded
    /// library are `None`; their getters return `FunctionNotFound`.
    pub struct NativeApi {
        fn spvc_get_version(major: *mut u32, minor: *mut u32, patch: *mut u32);
        fn spvc_get_commit_revision_and_timestamp() -> *const c_char;

        // Context
        fn spvc_context_create(context: *mut spvc_context) -> spvc_result;
        fn spvc_context_destroy(context: spvc_context);
        fn spvc_context_release_allocations(context: spvc_context);
        fn spvc_context_get_last_error_string(context: spvc_context) -> *const c_char;
        fn spvc_context_set_error_callback(context: spvc_context, cb: spvc_error_callback, userdata: *mut c_void);
        fn spvc_context_parse_spirv(context: spvc_context, spirv: *const SpvId, word_count: usize, parsed_ir: *mut spvc_parsed_ir) -> spvc_result;
        fn spvc_context_create_compiler(context: spvc_context, backend: spvc_backend, parsed_ir: spvc_parsed_ir, mode: spvc_capture_mode, compiler: *mut spvc_compiler) -> spvc_result;

        // Options
        fn spvc_compiler_get_current_id_bound(compiler: spvc_compiler) -> u32;
        fn spvc_compiler_create_compiler_options(compiler: spvc_compiler, options: *mut spvc_compiler_options) -> spvc_result;
        fn spvc_compiler_options_set_bool(options: spvc_compiler_options, option: spvc_compiler_option, value: spvc_bool) -> spvc_result;
        fn spvc_compiler_options_set_uint(options: spvc_compiler_options, option: spvc_compiler_option, value: u32) -> spvc_result;
        fn spvc_compiler_install_compiler_options(compiler: spvc_compiler, options: spvc_compiler_options) -> spvc_result;

        // Compilation
        fn spvc_compiler_compile(compiler: spvc_compiler, source: *mut *const c_char) -> spvc_result;
        fn spvc_compiler_add_header_line(compiler: spvc_compiler, line: *const c_char) -> spvc_result;
        fn spvc_compiler_require_extension(compiler: spvc_compiler, ext: *const c_char) -> spvc_result;
        fn spvc_compiler_get_num_required_extensions(compiler: spvc_compiler) -> usize;
        fn spvc_compiler_get_required_extension(compiler: spvc_compiler, index: usize) -> *const c_char;
        fn spvc_compiler_flatten_buffer_block(compiler: spvc_compiler, id: spvc_variable_id) -> spvc_result;
        fn spvc_compiler_variable_is_depth_or_compare(compiler: spvc_compiler, id: spvc_variable_id) -> spvc_bool;
        fn spvc_compiler_mask_stage_output_by_location(compiler: spvc_compiler, location: u32, component: u32) -> spvc_result;
        fn spvc_compiler_mask_stage_output_by_builtin(compiler: spvc_compiler, builtin: SpvBuiltIn) -> spvc_result;

        // HLSL
        fn spvc_compiler_hlsl_set_root_constants_layout(compiler: spvc_compiler, constant_info: *const spvc_hlsl_root_constants, count: usize) -> spvc_result;
        fn spvc_compiler_hlsl_add_vertex_attribute_remap(compiler: spvc_compiler, remap: *const spvc_hlsl_vertex_attribute_remap, remaps: usize) -> spvc_result;
        fn spvc_compiler_hlsl_remap_num_workgroups_builtin(compiler: spvc_compiler) -> spvc_variable_id;
        fn spvc_compiler_hlsl_set_resource_binding_flags(compiler: spvc_compiler, flags: spvc_hlsl_binding_flags) -> spvc_result;
        fn spvc_compiler_hlsl_add_resource_binding(compiler: spvc_compiler, binding: *const spvc_hlsl_resource_binding) -> spvc_result;
        fn spvc_compiler_hlsl_is_resource_used(compiler: spvc_compiler, model: SpvExecutionModel, set: u32, binding: u32) -> spvc_bool;

        // MSL
        fn spvc_compiler_msl_is_rasterization_disabled(compiler: spvc_compiler) -> spvc_bool;
        fn spvc_compiler_msl_needs_swizzle_buffer(compiler: spvc_compiler) -> spvc_bool;
        fn spvc_compiler_msl_needs_buffer_size_buffer(compiler: spvc_compiler) -> spvc_bool;
        fn spvc_compiler_msl_needs_output_buffer(compiler: spvc_compiler) -> spvc_bool;
        fn spvc_compiler_msl_needs_patch_output_buffer(compiler: spvc_compiler) -> spvc_bool;
        fn spvc_compiler_msl_needs_input_threadgroup_mem(compiler: spvc_compiler) -> spvc_bool;
        fn spvc_compiler_msl_add_resource_binding_2(compiler: spvc_compiler, binding: *const spvc_msl_resource_binding_2) -> spvc_result;
        fn spvc_compiler_msl_add_shader_input_2(compiler: spvc_compiler, input: *const spvc_msl_shader_interface_var_2) -> spvc_result;
        fn spvc_compiler_msl_add_shader_output_2(compiler: spvc_compiler, output: *const spvc_msl_shader_interface_var_2) -> spvc_result;
        fn spvc_compiler_msl_add_discrete_descriptor_set(compiler: spvc_compiler, desc_set: u32) -> spvc_result;
        fn spvc_compiler_msl_set_argument_buffer_device_address_space(compiler: spvc_compiler, desc_set: u32, device_address: spvc_bool) -> spvc_result;
        fn spvc_compiler_msl_is_shader_input_used(compiler: spvc_compiler, location: u32) -> spvc_bool;
        fn spvc_compiler_msl_is_shader_output_used(compiler: spvc_compiler, location: u32) -> spvc_bool;
        fn spvc_compiler_msl_is_resource_used(compiler: spvc_compiler, model: SpvExecutionModel, set: u32, binding: u32) -> spvc_bool;
        fn spvc_compiler_msl_remap_constexpr_sampler(compiler: spvc_compiler, id: spvc_variable_id, sampler: *const spvc_msl_constexpr_sampler) -> spvc_result;
        fn spvc_compiler_msl_remap_constexpr_sampler_by_binding(compiler: spvc_compiler, desc_set: u32, binding: u32, sampler: *const spvc_msl_constexpr_sampler) -> spvc_result;
        fn spvc_compiler_msl_remap_constexpr_sampler_ycbcr(compiler: spvc_compiler, id: spvc_variable_id, sampler: *const spvc_msl_constexpr_sampler, conv: *const spvc_msl_sampler_ycbcr_conversion) -> spvc_result;
        fn spvc_compiler_msl_remap_constexpr_sampler_by_binding_ycbcr(compiler: spvc_compiler, desc_set: u32, binding: u32, sampler: *const spvc_msl_constexpr_sampler, conv: *const spvc_msl_sampler_ycbcr_conversion) -> spvc_result;
        fn spvc_compiler_msl_set_fragment_output_components(compiler: spvc_compiler, location: u32, components: u32) -> spvc_result;
        fn spvc_compiler_msl_get_automatic_resource_binding(compiler: spvc_compiler, id: spvc_variable_id) -> u32;
        fn spvc_compiler_msl_get_automatic_resource_binding_secondary(compiler: spvc_compiler, id: spvc_variable_id) -> u32;
        fn spvc_compiler_msl_add_dynamic_buffer(compiler: spvc_compiler, desc_set: u32, binding: u32, index: u32) -> spvc_result;
        fn spvc_compiler_msl_add_inline_uniform_block(compiler: spvc_compiler, desc_set: u32, binding: u32) -> spvc_result;
        fn spvc_compiler_msl_set_combined_sampler_suffix(compiler: spvc_compiler, suffix: *const c_char) -> spvc_result;
        fn spvc_compiler_msl_get_combined_sampler_suffix(compiler: spvc_compiler) -> *const c_char;

        // Reflection
        fn spvc_compiler_get_active_interface_variables(compiler: spvc_compiler, set: *mut spvc_set) -> spvc_result;
        fn spvc_compiler_set_enabled_interface_variables(compiler: spvc_compiler, set: spvc_set) -> spvc_result;
        fn spvc_compiler_create_shader_resources(compiler: spvc_compiler, resources: *mut spvc_resources) -> spvc_result;
        fn spvc_compiler_create_shader_resources_for_active_variables(compiler: spvc_compiler, resources: *mut spvc_resources, active: spvc_set) -> spvc_result;
        fn spvc_resources_get_resource_list_for_type(resources: spvc_resources, ty: spvc_resource_type, resource_list: *mut *const spvc_reflected_resource, resource_size: *mut usize) -> spvc_result;
        fn spvc_resources_get_builtin_resource_list_for_type(resources: spvc_resources, ty: spvc_builtin_resource_type, resource_list: *mut *const spvc_reflected_builtin_resource, resource_size: *mut usize) -> spvc_result;

        // Decorations
        fn spvc_compiler_set_decoration(compiler: spvc_compiler, id: SpvId, decoration: SpvDecoration, argument: u32);
        fn spvc_compiler_set_decoration_string(compiler: spvc_compiler, id: SpvId, decoration: SpvDecoration, argument: *const c_char);
        fn spvc_compiler_set_name(compiler: spvc_compiler, id: SpvId, argument: *const c_char);
        fn spvc_compiler_set_member_decoration(compiler: spvc_compiler, id: spvc_type_id, member_index: u32, decoration: SpvDecoration, argument: u32);
        fn spvc_compiler_set_member_decoration_string(compiler: spvc_compiler, id: spvc_type_id, member_index: u32, decoration: SpvDecoration, argument: *const c_char);
        fn spvc_compiler_set_member_name(compiler: spvc_compiler, id: spvc_type_id, member_index: u32, argument: *const c_char);
        fn spvc_compiler_unset_decoration(compiler: spvc_compiler, id: SpvId, decoration: SpvDecoration);
        fn spvc_compiler_unset_member_decoration(compiler: spvc_compiler, id: spvc_type_id, member_index: u32, decoration: SpvDecoration);
        fn spvc_compiler_has_decoration(compiler: spvc_compiler, id: SpvId, decoration: SpvDecoration) -> spvc_bool;
        fn spvc_compiler_has_member_decoration(compiler: spvc_compiler, id: spvc_type_id, member_index: u32, decoration: SpvDecoration) -> spvc_bool;
        fn spvc_compiler_get_name(compiler: spvc_compiler, id: SpvId) -> *const c_char;
        fn spvc_compiler_get_decoration(compiler: spvc_compiler, id: SpvId, decoration: SpvDecoration) -> u32;
        fn spvc_compiler_get_decoration_string(compiler: spvc_compiler, id: SpvId, decoration: SpvDecoration) -> *const c_char;
        fn spvc_compiler_get_member_decoration(compiler: spvc_compiler, id: spvc_type_id, member_index: u32, decoration: SpvDecoration) -> u32;
        fn spvc_compiler_get_member_decoration_string(compiler: spvc_compiler, id: spvc_type_id, member_index: u32, decoration: SpvDecoration) -> *const c_char;
        fn spvc_compiler_get_member_name(compiler: spvc_compiler, id: spvc_type_id, member_index: u32) -> *const c_char;

        // Entry points
        fn spvc_compiler_get_entry_points(compiler: spvc_compiler, entry_points: *mut *const spvc_entry_point, num_entry_points: *mut usize) -> spvc_result;
        fn spvc_compiler_set_entry_point(compiler: spvc_compiler, name: *const c_char, model: SpvExecutionModel) -> spvc_result;
        fn spvc_compiler_rename_entry_point(compiler: spvc_compiler, old_name: *const c_char, new_name: *const c_char, model: SpvExecutionModel) -> spvc_result;
        fn spvc_compiler_get_cleansed_entry_point_name(compiler: spvc_compiler, name: *const c_char, model: SpvExecutionModel) -> *const c_char;
        fn spvc_compiler_set_execution_mode(compiler: spvc_compiler, mode: SpvExecutionMode);
        fn spvc_compiler_unset_execution_mode(compiler: spvc_compiler, mode: SpvExecutionMode);
        fn spvc_compiler_set_execution_mode_with_arguments(compiler: spvc_compiler, mode: SpvExecutionMode, arg0: u32, arg1: u32, arg2: u32);
        fn spvc_compiler_get_execution_modes(compiler: spvc_compiler, modes: *mut *const SpvExecutionMode, num_modes: *mut usize) -> spvc_result;
        fn spvc_compiler_get_execution_mode_argument(compiler: spvc_compiler, mode: SpvExecutionMode) -> u32;
        fn spvc_compiler_get_execution_mode_argument_by_index(compiler: spvc_compiler, mode: SpvExecutionMode, index: u32) -> u32;
        fn spvc_compiler_get_execution_model(compiler: spvc_compiler) -> SpvExecutionModel;
        fn spvc_compiler_update_active_builtins(compiler: spvc_compiler);
        fn spvc_compiler_has_active_builtin(compiler: spvc_compiler, builtin: SpvBuiltIn, storage: SpvStorageClass) -> spvc_bool;

        // Types
        fn spvc_compiler_get_type_handle(compiler: spvc_compiler, id: spvc_type_id) -> spvc_type;
        fn spvc_type_get_base_type_id(ty: spvc_type) -> spvc_type_id;
        fn spvc_type_get_basetype(ty: spvc_type) -> spvc_basetype;
        fn spvc_type_get_bit_width(ty: spvc_type) -> u32;
        fn spvc_type_get_vector_size(ty: spvc_type) -> u32;
        fn spvc_type_get_columns(ty: spvc_type) -> u32;
        fn spvc_type_get_num_array_dimensions(ty: spvc_type) -> u32;
        fn spvc_type_array_dimension_is_literal(ty: spvc_type, dimension: u32) -> spvc_bool;
        fn spvc_type_get_array_dimension(ty: spvc_type, dimension: u32) -> SpvId;
        fn spvc_type_get_num_member_types(ty: spvc_type) -> u32;
        fn spvc_type_get_member_type(ty: spvc_type, index: u32) -> spvc_type_id;
        fn spvc_type_get_storage_class(ty: spvc_type) -> SpvStorageClass;
        fn spvc_type_get_image_sampled_type(ty: spvc_type) -> spvc_type_id;
        fn spvc_type_get_image_dimension(ty: spvc_type) -> SpvDim;
        fn spvc_type_get_image_is_depth(ty: spvc_type) -> spvc_bool;
        fn spvc_type_get_image_arrayed(ty: spvc_type) -> spvc_bool;
        fn spvc_type_get_image_multisampled(ty: spvc_type) -> spvc_bool;
        fn spvc_type_get_image_is_storage(ty: spvc_type) -> spvc_bool;
        fn spvc_type_get_image_storage_format(ty: spvc_type) -> SpvImageFormat;
        fn spvc_type_get_image_access_qualifier(ty: spvc_type) -> SpvAccessQualifier;

        // Buffer layout
        fn spvc_compiler_get_declared_struct_size(compiler: spvc_compiler, struct_type: spvc_type, size: *mut usize) -> spvc_result;
        fn spvc_compiler_get_declared_struct_size_runtime_array(compiler: spvc_compiler, struct_type: spvc_type, array_size: usize, size: *mut usize) -> spvc_result;
        fn spvc_compiler_get_declared_struct_member_size(compiler: spvc_compiler, struct_type: spvc_type, index: u32, size: *mut usize) -> spvc_result;
        fn spvc_compiler_type_struct_member_offset(compiler: spvc_compiler, ty: spvc_type, index: u32, offset: *mut u32) -> spvc_result;
        fn spvc_compiler_type_struct_member_array_stride(compiler: spvc_compiler, ty: spvc_type, index: u32, stride: *mut u32) -> spvc_result;
        fn spvc_compiler_type_struct_member_matrix_stride(compiler: spvc_compiler, ty: spvc_type, index: u32, stride: *mut u32) -> spvc_result;

        // Combined image samplers
        fn spvc_compiler_build_dummy_sampler_for_combined_images(compiler: spvc_compiler, id: *mut spvc_variable_id) -> spvc_result;
        fn spvc_compiler_build_combined_image_samplers(compiler: spvc_compiler) -> spvc_result;
        fn spvc_compiler_get_combined_image_samplers(compiler: spvc_compiler, samplers: *mut *const spvc_combined_image_sampler, num_samplers: *mut usize) -> spvc_result;

        // Constants
        fn spvc_compiler_get_specialization_constants(compiler: spvc_compiler, constants: *mut *const spvc_specialization_constant, num_constants: *mut usize) -> spvc_result;
        fn spvc_compiler_get_constant_handle(compiler: spvc_compiler, id: spvc_constant_id) -> spvc_constant;
        fn spvc_compiler_get_work_group_size_specialization_constants(compiler: spvc_compiler, x: *mut spvc_specialization_constant, y: *mut spvc_specialization_constant, z: *mut spvc_specialization_constant) -> spvc_constant_id;
        fn spvc_compiler_get_active_buffer_ranges(compiler: spvc_compiler, id: spvc_variable_id, ranges: *mut *const spvc_buffer_range, num_ranges: *mut usize) -> spvc_result;

        fn spvc_constant_get_scalar_fp16(constant: spvc_constant, column: u32, row: u32) -> f32;
        fn spvc_constant_get_scalar_fp32(constant: spvc_constant, column: u32, row: u32) -> f32;
        fn spvc_constant_get_scalar_fp64(constant: spvc_constant, column: u32, row: u32) -> f64;
        fn spvc_constant_get_scalar_u32(constant: spvc_constant, column: u32, row: u32) -> u32;
        fn spvc_constant_get_scalar_i32(constant: spvc_constant, column: u32, row: u32) -> i32;
        fn spvc_constant_get_scalar_u16(constant: spvc_constant, column: u32, row: u32) -> u32;
        fn spvc_constant_get_scalar_i16(constant: spvc_constant, column: u32, row: u32) -> i32;
        fn spvc_constant_get_scalar_u8(constant: spvc_constant, column: u32, row: u32) -> u32;
        fn spvc_constant_get_scalar_i8(constant: spvc_constant, column: u32, row: u32) -> i32;
        fn spvc_constant_get_scalar_u64(constant: spvc_constant, column: u32, row: u32) -> u64;
        fn spvc_constant_get_scalar_i64(constant: spvc_constant, column: u32, row: u32) -> i64;
        fn spvc_constant_get_subconstants(constant: spvc_constant, constituents: *mut *const spvc_constant_id, count: *mut usize);
        fn spvc_constant_get_type(constant: spvc_constant) -> spvc_type_id;
        fn spvc_constant_set_scalar_fp16(constant: spvc_constant, column: u32, row: u32, value: u16);
        fn spvc_constant_set_scalar_fp32(constant: spvc_constant, column: u32, row: u32, value: f32);
        fn spvc_constant_set_scalar_fp64(constant: spvc_constant, column: u32, row: u32, value: f64);
        fn spvc_constant_set_scalar_u32(constant: spvc_constant, column: u32, row: u32, value: u32);
        fn spvc_constant_set_scalar_i32(constant: spvc_constant, column: u32, row: u32, value: i32);
        fn spvc_constant_set_scalar_u64(constant: spvc_constant, column: u32, row: u32, value: u64);
        fn spvc_constant_set_scalar_i64(constant: spvc_constant, column: u32, row: u32, value: i64);
        fn spvc_constant_set_scalar_u16(constant: spvc_constant, column: u32, row: u32, value: u16);
        fn spvc_constant_set_scalar_i16(constant: spvc_constant, column: u32, row: u32, value: i16);
        fn spvc_constant_set_scalar_u8(constant: spvc_constant, column: u32, row: u32, value: u8);
        fn spvc_constant_set_scalar_i8(constant: spvc_constant, column: u32, row: u32, value: i8);

        // Misc reflection
        fn spvc_compiler_get_binary_offset_for_decoration(compiler: spvc_compiler, id: spvc_variable_id, decoration: SpvDecoration, word_offset: *mut u32) -> spvc_bool;
        fn spvc_compiler_buffer_is_hlsl_counter_buffer(compiler: spvc_compiler, id: spvc_variable_id) -> spvc_bool;
        fn spvc_compiler_buffer_get_hlsl_counter_buffer(compiler: spvc_compiler, id: spvc_variable_id, counter_id: *mut spvc_variable_id) -> spvc_bool;
        fn spvc_compiler_get_declared_capabilities(compiler: spvc_compiler, capabilities: *mut *const SpvCapability, num_capabilities: *mut usize) -> spvc_result;
        fn spvc_compiler_get_declared_extensions(compiler: spvc_compiler, extensions: *mut *mut *const c_char, num_extensions: *mut usize) -> spvc_result;
        fn spvc_compiler_get_remapped_declared_block_name(compiler: spvc_compiler, id: spvc_variable_id) -> *const c_char;
        fn spvc_compiler_get_buffer_block_decorations(compiler: spvc_compiler, id: spvc_variable_id, decorations: *mut *const SpvDecoration, num_decorations: *mut usize) -> spvc_result;
    }
}

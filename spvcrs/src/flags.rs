//! HLSL automatic binding flags

use bitflags::bitflags;
use spvc::{
    SPVC_HLSL_BINDING_AUTO_ALL, SPVC_HLSL_BINDING_AUTO_CBV_BIT,
    SPVC_HLSL_BINDING_AUTO_PUSH_CONSTANT_BIT, SPVC_HLSL_BINDING_AUTO_SAMPLER_BIT,
    SPVC_HLSL_BINDING_AUTO_SRV_BIT, SPVC_HLSL_BINDING_AUTO_UAV_BIT,
};

bitflags! {
    /// Resource classes for which the HLSL backend picks registers itself
    ///
    /// Resources in a class that is not set keep the register given by their
    /// `Binding` decoration, or one set through
    /// [`add_resource_binding`](crate::Compiler::add_resource_binding).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HlslBindingFlags: u32 {
        /// Push constant blocks become plain cbuffers without a register
        const AUTO_PUSH_CONSTANT = SPVC_HLSL_BINDING_AUTO_PUSH_CONSTANT_BIT;

        /// Constant buffers (`b` registers)
        const AUTO_CBV = SPVC_HLSL_BINDING_AUTO_CBV_BIT;

        /// Shader resource views (`t` registers)
        const AUTO_SRV = SPVC_HLSL_BINDING_AUTO_SRV_BIT;

        /// Unordered access views (`u` registers)
        const AUTO_UAV = SPVC_HLSL_BINDING_AUTO_UAV_BIT;

        /// Samplers (`s` registers)
        const AUTO_SAMPLER = SPVC_HLSL_BINDING_AUTO_SAMPLER_BIT;

        const AUTO_ALL = SPVC_HLSL_BINDING_AUTO_ALL;
    }
}

impl Default for HlslBindingFlags {
    fn default() -> Self {
        HlslBindingFlags::empty()
    }
}

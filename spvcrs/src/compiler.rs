//! Source-emitting compilers

use crate::backend::CompilerBackend;
use crate::options::{ApplyOptions, CompilerOptions, OptionSink};
use crate::reflect::{CombinedImageSampler, Reflector, Set};
use crate::strings::{c_string, native_slice, native_string};
use crate::{Result, VariableId};
use spirv::BuiltIn;
use spvc::{SPVC_FALSE, spvc_compiler_options};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::ptr;

/// A compiler for backend `B`.
///
/// Dereferences to [`Reflector`], so every reflection query is available on
/// a compiler as well. Options live in plain public fields and are written
/// to the native options object on each [`compile`](Self::compile).
pub struct Compiler<B: CompilerBackend> {
    reflector: Reflector,
    options_handle: spvc_compiler_options,
    /// Options shared by every backend
    pub options: CompilerOptions,
    /// Options of backend `B`
    pub backend_options: B::Options,
}

impl<B: CompilerBackend> Compiler<B> {
    pub(crate) fn new(reflector: Reflector) -> Result<Compiler<B>> {
        let (api, compiler) = reflector.raw()?;
        let mut options_handle = ptr::null_mut();
        reflector.check(unsafe { (api.spvc_compiler_create_compiler_options()?)(compiler, &mut options_handle) })?;

        Ok(Compiler {
            reflector,
            options_handle,
            options: CompilerOptions::default(),
            backend_options: B::Options::default(),
        })
    }

    /// Applies the current options and emits source.
    pub fn compile(&mut self) -> Result<String> {
        let (api, compiler) = self.reflector.raw()?;
        let session = self.reflector.link.session();
        {
            let mut sink = OptionSink::new(session, self.options_handle);
            self.backend_options.apply(&mut sink)?;
            if B::COMMON_OPTIONS {
                self.options.apply(&mut sink)?;
            }
        }
        session.check(unsafe { (api.spvc_compiler_install_compiler_options()?)(compiler, self.options_handle) })?;

        let mut source = ptr::null();
        session.check(unsafe { (api.spvc_compiler_compile()?)(compiler, &mut source) })?;
        let source = unsafe { native_string(source) };
        log::debug!("compiled {} bytes of {}", source.len(), B::BACKEND);
        Ok(source)
    }

    /// Adds a line to the top of the emitted source.
    pub fn add_header_line(&mut self, line: &str) -> Result<()> {
        let (api, compiler) = self.raw()?;
        let line = c_string(line)?;
        self.check(unsafe { (api.spvc_compiler_add_header_line()?)(compiler, line.as_ptr()) })
    }

    /// Drops the stage output at `location`, or only its `component`.
    pub fn mask_stage_output_by_location(&mut self, location: u32, component: u32) -> Result<()> {
        let (api, compiler) = self.raw()?;
        self.check(unsafe { (api.spvc_compiler_mask_stage_output_by_location()?)(compiler, location, component) })
    }

    pub fn mask_stage_output_by_builtin(&mut self, builtin: BuiltIn) -> Result<()> {
        let (api, compiler) = self.raw()?;
        self.check(unsafe { (api.spvc_compiler_mask_stage_output_by_builtin()?)(compiler, builtin as u32) })
    }

    /// Adds a sampler for images that are sampled without one, such as
    /// `texelFetch` targets. Returns `None` if no sampler is needed.
    ///
    /// Sets obtained earlier no longer cover every interface variable.
    pub fn build_dummy_sampler_for_combined_images(&mut self) -> Result<Option<VariableId>> {
        let (api, compiler) = self.raw()?;
        let mut id = 0;
        self.check(unsafe { (api.spvc_compiler_build_dummy_sampler_for_combined_images()?)(compiler, &mut id) })?;
        self.bump_interface_revision();
        Ok((id != 0).then_some(VariableId(id)))
    }

    /// Synthesizes combined image samplers for every image and sampler pair
    /// used together.
    ///
    /// Sets obtained earlier no longer cover every interface variable.
    pub fn build_combined_image_samplers(&mut self) -> Result<()> {
        let (api, compiler) = self.raw()?;
        self.check(unsafe { (api.spvc_compiler_build_combined_image_samplers()?)(compiler) })?;
        self.bump_interface_revision();
        Ok(())
    }

    pub fn combined_image_samplers(&self) -> Result<Vec<CombinedImageSampler>> {
        let (api, compiler) = self.raw()?;
        let mut samplers = ptr::null();
        let mut count = 0;
        self.check(unsafe { (api.spvc_compiler_get_combined_image_samplers()?)(compiler, &mut samplers, &mut count) })?;
        Ok(unsafe { native_slice(samplers, count) }
            .into_iter()
            .map(|raw| CombinedImageSampler {
                combined_id: VariableId(raw.combined_id),
                image_id: VariableId(raw.image_id),
                sampler_id: VariableId(raw.sampler_id),
            })
            .collect())
    }

    /// Restricts emitted interface variables to `set`.
    pub fn set_enabled_interface_variables(&mut self, set: &Set) -> Result<()> {
        set.link.compare_root(&self.link)?;
        set.warn_if_stale(self.interface_revision());
        let (api, compiler) = self.raw()?;
        self.check(unsafe { (api.spvc_compiler_set_enabled_interface_variables()?)(compiler, set.handle) })
    }

    /// Whether `id` is the counter buffer of an HLSL append/consume buffer.
    pub fn buffer_is_hlsl_counter_buffer(&self, id: VariableId) -> Result<bool> {
        let (api, compiler) = self.raw()?;
        Ok(unsafe { (api.spvc_compiler_buffer_is_hlsl_counter_buffer()?)(compiler, id.0) } != SPVC_FALSE)
    }

    /// The counter buffer paired with the buffer `id`, if any.
    pub fn buffer_hlsl_counter_buffer(&self, id: VariableId) -> Result<Option<VariableId>> {
        let (api, compiler) = self.raw()?;
        let mut counter = 0;
        let found = unsafe { (api.spvc_compiler_buffer_get_hlsl_counter_buffer()?)(compiler, id.0, &mut counter) };
        Ok((found != SPVC_FALSE).then_some(VariableId(counter)))
    }
}

impl<B: CompilerBackend> Deref for Compiler<B> {
    type Target = Reflector;

    fn deref(&self) -> &Reflector {
        &self.reflector
    }
}

impl<B: CompilerBackend> DerefMut for Compiler<B> {
    fn deref_mut(&mut self) -> &mut Reflector {
        &mut self.reflector
    }
}

impl<B: CompilerBackend> fmt::Debug for Compiler<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compiler")
            .field("reflector", &self.reflector)
            .field("options", &self.options)
            .field("backend_options", &self.backend_options)
            .finish()
    }
}

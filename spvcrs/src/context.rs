//! Context, the root of every SPIRV-Cross object

use crate::backend::{Backend, CompilerBackend};
use crate::compiler::Compiler;
use crate::graph::{Graph, Link, NodeKind};
use crate::reflect::Reflector;
use crate::strings::native_string;
use crate::{Error, Result, SpvcResult};
use spvc::{
    NativeApi, SPVC_CAPTURE_MODE_COPY, SPVC_CAPTURE_MODE_TAKE_OWNERSHIP, SPVC_SUCCESS,
    spvc_capture_mode, spvc_context, spvc_parsed_ir, spvc_result,
};
use std::cell::{Cell, RefCell};
use std::ffi::{c_char, c_void};
use std::fmt;
use std::ptr;
use std::rc::Rc;

/// State shared by a [`Context`] and everything created from it.
pub(crate) struct Session {
    pub api: &'static NativeApi,
    handle: Cell<spvc_context>,
    pub graph: RefCell<Graph>,
}

impl Session {
    pub fn is_destroyed(&self) -> bool {
        self.handle.get().is_null()
    }

    pub fn handle(&self) -> Result<spvc_context> {
        let handle = self.handle.get();
        if handle.is_null() {
            return Err(Error::MissingParent("Context has been disposed".into()));
        }
        Ok(handle)
    }

    /// Last diagnostic reported by SPIRV-Cross for this session.
    pub fn last_error(&self) -> String {
        let handle = self.handle.get();
        if handle.is_null() {
            return String::new();
        }
        match self.api.spvc_context_get_last_error_string() {
            Ok(last_error) => unsafe { native_string(last_error(handle)) },
            Err(_) => String::new(),
        }
    }

    /// Translates a native result code.
    pub fn check(&self, result: spvc_result) -> Result<()> {
        if result == SPVC_SUCCESS {
            return Ok(());
        }
        Err(Error::from_native(SpvcResult(result), self.last_error()))
    }

    fn destroy(&self) {
        let handle = self.handle.replace(ptr::null_mut());
        if handle.is_null() {
            return;
        }
        match self.api.spvc_context_destroy() {
            Ok(destroy) => unsafe { destroy(handle) },
            Err(err) => log::warn!("leaking SPIRV-Cross context {handle:p}: {err}"),
        }
        if let Ok(mut graph) = self.graph.try_borrow_mut() {
            graph.clear();
        }
        log::debug!("destroyed SPIRV-Cross context {handle:p}");
    }
}

unsafe extern "C" fn log_native_error(_userdata: *mut c_void, error: *const c_char) {
    let message = unsafe { native_string(error) };
    log::debug!("SPIRV-Cross: {message}");
}

/// Root owner of one SPIRV-Cross session.
///
/// Every [`ParsedIr`], [`Reflector`] and [`Compiler`] is created from a
/// context and becomes unusable once the context is disposed or dropped.
/// Operations on such objects then fail with [`Error::MissingParent`]
/// without reaching the native library.
///
/// ```no_run
/// use spvcrs::{Context, backend::Glsl};
///
/// # fn main() -> spvcrs::Result<()> {
/// let spirv = std::fs::read("shader.spv").unwrap();
/// let context = Context::new()?;
/// let mut compiler = context.create_compiler_from_spirv::<Glsl>(&spirv)?;
/// compiler.backend_options.version = 310;
/// compiler.backend_options.es = true;
/// println!("{}", compiler.compile()?);
/// # Ok(())
/// # }
/// ```
pub struct Context {
    session: Rc<Session>,
}

impl Context {
    /// Creates a context over the process-wide SPIRV-Cross library.
    pub fn new() -> Result<Context> {
        let api = spvc::api().map_err(|err| Error::Load(err.to_string()))?;
        Self::with_api(api)
    }

    /// Creates a context over an explicit function table.
    pub fn with_api(api: &'static NativeApi) -> Result<Context> {
        let mut handle = ptr::null_mut();
        let result = unsafe { (api.spvc_context_create()?)(&mut handle) };
        if result != SPVC_SUCCESS || handle.is_null() {
            return Err(Error::OutOfMemory(format!(
                "spvc_context_create failed ({})",
                SpvcResult(result)
            )));
        }
        if let Ok(set_callback) = api.spvc_context_set_error_callback() {
            unsafe { set_callback(handle, Some(log_native_error), ptr::null_mut()) };
        }
        log::debug!("created SPIRV-Cross context {handle:p}");

        Ok(Context {
            session: Rc::new(Session {
                api,
                handle: Cell::new(handle),
                graph: RefCell::new(Graph::new()),
            }),
        })
    }

    pub fn is_alive(&self) -> bool {
        !self.session.is_destroyed()
    }

    /// Destroys the native session. Every object created from this context
    /// becomes invalid. Calling it again does nothing.
    pub fn dispose(&mut self) {
        self.session.destroy();
    }

    /// Frees all native allocations made through this context and
    /// invalidates every object created from it, while keeping the context
    /// itself usable.
    pub fn release_allocations(&mut self) -> Result<()> {
        let handle = self.session.handle()?;
        let released = {
            let mut graph = self.session.graph.borrow_mut();
            let released = graph.len();
            graph.clear();
            released
        };
        unsafe { (self.session.api.spvc_context_release_allocations()?)(handle) };
        log::debug!("released {released} objects from context {handle:p}");
        Ok(())
    }

    /// Last diagnostic reported by SPIRV-Cross, empty if none.
    pub fn last_error(&self) -> String {
        self.session.last_error()
    }

    /// Parses a SPIR-V binary.
    ///
    /// The length of `bytes` must be a multiple of four. Words are read in
    /// native byte order.
    pub fn parse_spirv(&self, bytes: &[u8]) -> Result<ParsedIr> {
        if bytes.len() % 4 != 0 {
            return Err(Error::InvalidArgument(format!(
                "SPIR-V length {} is not a multiple of 4",
                bytes.len()
            )));
        }
        let words: Vec<u32> = bytes
            .chunks_exact(4)
            .map(|chunk| u32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();
        self.parse_spirv_words(&words)
    }

    /// Parses a SPIR-V module given as words.
    pub fn parse_spirv_words(&self, words: &[u32]) -> Result<ParsedIr> {
        let context = self.session.handle()?;
        let mut handle = ptr::null_mut();
        let result = unsafe {
            (self.session.api.spvc_context_parse_spirv()?)(context, words.as_ptr(), words.len(), &mut handle)
        };
        self.session.check(result)?;

        Ok(ParsedIr {
            link: Link::new(&self.session, None, NodeKind::ParsedIr),
            handle,
        })
    }

    /// Creates a reflection-only compiler over a copy of `ir`.
    pub fn create_reflector(&self, ir: &ParsedIr) -> Result<Reflector> {
        let handle = self.create_native(Backend::None, ir, SPVC_CAPTURE_MODE_COPY)?;
        Ok(Reflector::new(&self.session, handle, Backend::None))
    }

    /// Creates a reflection-only compiler that takes ownership of `ir`.
    pub fn create_reflector_owned(&self, ir: ParsedIr) -> Result<Reflector> {
        let handle = self.create_native(Backend::None, &ir, SPVC_CAPTURE_MODE_TAKE_OWNERSHIP)?;
        Ok(Reflector::new(&self.session, handle, Backend::None))
    }

    /// Parses `bytes` and creates a reflection-only compiler from the result.
    pub fn create_reflector_from_spirv(&self, bytes: &[u8]) -> Result<Reflector> {
        let ir = self.parse_spirv(bytes)?;
        self.create_reflector_owned(ir)
    }

    /// Creates a compiler for backend `B` over a copy of `ir`.
    pub fn create_compiler<B: CompilerBackend>(&self, ir: &ParsedIr) -> Result<Compiler<B>> {
        let handle = self.create_native(B::BACKEND, ir, SPVC_CAPTURE_MODE_COPY)?;
        Compiler::new(Reflector::new(&self.session, handle, B::BACKEND))
    }

    /// Creates a compiler for backend `B` that takes ownership of `ir`.
    ///
    /// The IR cannot be used again afterwards:
    ///
    /// ```compile_fail
    /// use spvcrs::{Context, backend::Glsl};
    ///
    /// fn twice(context: &Context, words: &[u32]) -> spvcrs::Result<()> {
    ///     let ir = context.parse_spirv_words(words)?;
    ///     let first = context.create_compiler_owned::<Glsl>(ir)?;
    ///     let second = context.create_compiler_owned::<Glsl>(ir)?;
    ///     Ok(())
    /// }
    /// ```
    pub fn create_compiler_owned<B: CompilerBackend>(&self, ir: ParsedIr) -> Result<Compiler<B>> {
        let handle = self.create_native(B::BACKEND, &ir, SPVC_CAPTURE_MODE_TAKE_OWNERSHIP)?;
        Compiler::new(Reflector::new(&self.session, handle, B::BACKEND))
    }

    /// Parses `bytes` and creates a compiler for backend `B` from the result.
    pub fn create_compiler_from_spirv<B: CompilerBackend>(&self, bytes: &[u8]) -> Result<Compiler<B>> {
        let ir = self.parse_spirv(bytes)?;
        self.create_compiler_owned(ir)
    }

    fn create_native(
        &self,
        backend: Backend,
        ir: &ParsedIr,
        mode: spvc_capture_mode,
    ) -> Result<spvc::spvc_compiler> {
        let context = self.session.handle()?;
        ir.link.compare_session(&self.session)?;

        let mut handle = ptr::null_mut();
        let result = unsafe {
            (self.session.api.spvc_context_create_compiler()?)(
                context,
                backend.raw(),
                ir.handle,
                mode,
                &mut handle,
            )
        };
        self.session.check(result)?;
        log::trace!("created {backend:?} compiler {handle:p}");
        Ok(handle)
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("handle", &self.session.handle.get())
            .finish()
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// A parsed SPIR-V module owned by a [`Context`].
///
/// Pass it by reference to build several compilers from copies, or by value
/// to hand it to a single compiler.
pub struct ParsedIr {
    link: Link,
    handle: spvc_parsed_ir,
}

impl ParsedIr {
    pub fn is_alive(&self) -> bool {
        self.link.is_alive()
    }
}

impl fmt::Debug for ParsedIr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParsedIr").field("link", &self.link).finish()
    }
}

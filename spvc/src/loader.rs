use crate::{NativeApi, Result, SpvcError};
use std::ffi::{CStr, c_void};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Environment variable naming an explicit path to the shared library.
pub const LIBRARY_PATH_ENV: &str = "SPVC_LIBRARY_PATH";

#[cfg(target_os = "macos")]
static LIBRARY_NAMES: &[&str] = &["libspirv-cross-c-shared.dylib", "libspirv-cross-c-shared.0.dylib"];
#[cfg(windows)]
static LIBRARY_NAMES: &[&str] = &["spirv-cross-c-shared.dll"];
#[cfg(not(any(target_os = "macos", windows)))]
static LIBRARY_NAMES: &[&str] = &["libspirv-cross-c-shared.so.0", "libspirv-cross-c-shared.so"];

static LIBRARY: OnceLock<Result<Library>> = OnceLock::new();

/// A loaded SPIRV-Cross shared library and its resolved entry points.
pub struct Library {
    api: NativeApi,
    path: PathBuf,
    missing: Vec<&'static str>,
    // Keeps the entry points in `api` mapped.
    _library: libloading::Library,
}

impl std::fmt::Debug for Library {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Library")
            .field("path", &self.path)
            .field("missing", &self.missing)
            .finish()
    }
}

impl Library {
    /// Opens the library at `path` and resolves every entry point.
    ///
    /// Symbols the library does not export are logged and left unresolved;
    /// their getters on [`NativeApi`] return `FunctionNotFound`. The library
    /// must at least export `spvc_context_create`.
    pub fn open(path: impl AsRef<Path>) -> Result<Library> {
        let path = path.as_ref();
        let library = unsafe { libloading::Library::new(path) }
            .map_err(|err| SpvcError::LoadError(format!("{}: {err}", path.display())))?;

        let api = unsafe {
            NativeApi::load_with(|name: &CStr| {
                library
                    .get::<unsafe extern "C" fn()>(name.to_bytes_with_nul())
                    .map_or(std::ptr::null(), |symbol| *symbol as *const c_void)
            })
        };

        let missing = api.unresolved();
        if missing.contains(&"spvc_context_create") {
            return Err(SpvcError::FunctionNotFound("spvc_context_create".into()));
        }
        for name in &missing {
            log::warn!("{}: missing symbol {name}", path.display());
        }

        log::debug!(
            "loaded {} ({} of {} symbols)",
            path.display(),
            NativeApi::SYMBOLS.len() - missing.len(),
            NativeApi::SYMBOLS.len()
        );

        Ok(Library {
            api,
            path: path.to_path_buf(),
            missing,
            _library: library,
        })
    }

    pub fn api(&self) -> &NativeApi {
        &self.api
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether `name` was resolved from the library.
    pub fn has_symbol(&self, name: &str) -> bool {
        NativeApi::SYMBOLS.contains(&name) && !self.missing.contains(&name)
    }

    /// Version reported by `spvc_get_version` as `(major, minor, patch)`.
    pub fn version(&self) -> Result<(u32, u32, u32)> {
        let get_version = self.api.spvc_get_version()?;
        let (mut major, mut minor, mut patch) = (0, 0, 0);
        unsafe { get_version(&mut major, &mut minor, &mut patch) };
        Ok((major, minor, patch))
    }

    /// Build revision and timestamp string, or `None` if the library does
    /// not export it.
    pub fn commit_revision(&self) -> Option<String> {
        let get_revision = self.api.spvc_get_commit_revision_and_timestamp().ok()?;
        let revision = unsafe { get_revision() };
        if revision.is_null() {
            return None;
        }
        Some(unsafe { CStr::from_ptr(revision) }.to_string_lossy().into_owned())
    }
}

/// Candidate paths in search order: the environment override, next to the
/// executable, then the bare names for the system loader.
fn candidate_paths() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(path) = std::env::var_os(LIBRARY_PATH_ENV) {
        candidates.push(PathBuf::from(path));
    }
    if let Ok(exe) = std::env::current_exe() {
        for name in LIBRARY_NAMES {
            let path = exe.with_file_name(name);
            if path.exists() {
                candidates.push(path);
            }
        }
    }
    candidates.extend(LIBRARY_NAMES.iter().map(PathBuf::from));
    candidates
}

fn load() -> Result<Library> {
    if !cfg!(any(unix, windows)) {
        return Err(SpvcError::Unsupported);
    }
    let mut errors = Vec::new();
    for path in candidate_paths() {
        match Library::open(&path) {
            Ok(library) => return Ok(library),
            Err(err) => {
                log::trace!("{}: {err}", path.display());
                errors.push(err.to_string());
            }
        }
    }
    Err(SpvcError::LoadError(errors.join("; ")))
}

/// The process-wide library, loaded on first use.
pub fn library() -> &'static Result<Library> {
    LIBRARY.get_or_init(|| {
        let library = load();
        if let Err(err) = &library {
            log::error!("SPIRV-Cross unavailable: {err}");
        }
        library
    })
}

/// Shorthand for the entry points of [`library`].
pub fn api() -> std::result::Result<&'static NativeApi, &'static SpvcError> {
    library().as_ref().map(Library::api)
}

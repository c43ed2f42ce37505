//! The C++ backend emits the shader as a C++ class against the
//! `spirv_cross` runtime headers. It takes no options of its own, and the
//! native options object for it rejects the common ones.

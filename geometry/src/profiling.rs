//! Profiling support via Tracy.
//!
//! Mesh generation is instrumented with [Tracy](https://github.com/wolfpld/tracy)
//! spans when the `profiling` Cargo feature is enabled:
//!
//! ```toml
//! [dependencies]
//! sandbox-geometry = { version = "0.1", features = ["profiling"] }
//! ```
//!
//! Spans are only recorded while a Tracy client is running
//! (`tracy_client::Client::start()`); without one the macros do nothing.
//!
//! When profiling is disabled (the default), all macros compile to no-ops.

#[cfg(feature = "profiling")]
pub use tracy_client::{self, Client};

/// Create a profiling span for the current scope.
///
/// ```ignore
/// {
///     profile_scope!("side_wall");
///     // ... profiled work ...
/// }
/// ```
#[macro_export]
#[cfg(feature = "profiling")]
macro_rules! profile_scope {
    ($name:expr) => {
        let _profile_span = $crate::profiling::Client::running()
            .map(|c| c.span_alloc(Some($name), "", file!(), line!(), 0));
    };
}

/// Create a profiling span (no-op when profiling disabled).
#[macro_export]
#[cfg(not(feature = "profiling"))]
macro_rules! profile_scope {
    ($name:expr) => {};
}

/// Create a profiling span for the entire function.
#[macro_export]
#[cfg(feature = "profiling")]
macro_rules! profile_function {
    () => {
        let _profile_span = $crate::profiling::Client::running()
            .map(|c| c.span_alloc(None, module_path!(), file!(), line!(), 0));
    };
}

/// Create a profiling span for function (no-op when profiling disabled).
#[macro_export]
#[cfg(not(feature = "profiling"))]
macro_rules! profile_function {
    () => {};
}

pub use profile_function;
pub use profile_scope;

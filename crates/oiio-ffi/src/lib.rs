//! Smoke-test bindings for OpenImageIO.
//!
//! This crate provides a minimal safe wrapper over a thin C ABI layer built on
//! top of OpenImageIO's C++ API. It exposes only the library's read-only
//! global query points: the version string and the global attribute registry
//! (`format_list`, `extension_list`, and friends). A failure to build or link
//! this crate is the signal the surrounding test package exists to produce.
#![allow(unsafe_code)]
// FFI wrappers necessarily use unsafe externs and raw pointers.

mod attributes;
mod error;
mod formats;
mod sys;

pub use attributes::{RuntimeVersion, int_attribute, runtime_version, string_attribute, version};
pub use error::OiioError;
pub use formats::{FormatExtensions, extension_map, format_list};

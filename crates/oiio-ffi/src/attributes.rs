use std::ffi::{CStr, CString};
use std::fmt;

use crate::error::{OiioError, ffi_error};
use crate::sys;

/// Version of the OpenImageIO library actually loaded at run time, as
/// reported by `openimageio_version()`. May disagree with [`version`] when
/// the dynamic loader resolves a different library than the headers the
/// wrapper was compiled against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl RuntimeVersion {
    /// Decode the packed integer OIIO uses for versions
    /// (`major * 10000 + minor * 100 + patch`).
    pub(crate) fn from_packed(packed: i32) -> Self {
        let packed = packed.max(0) as u32;
        Self {
            major: packed / 10000,
            minor: (packed / 100) % 100,
            patch: packed % 100,
        }
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// The `OIIO_VERSION_STRING` the C ABI shim was compiled against.
pub fn version() -> Result<String, OiioError> {
    // SAFETY: FFI returns a pointer to a static version string, or null.
    let ptr = unsafe { sys::oiio_version_string() };
    cstr_to_string(ptr).ok_or_else(ffi_error)
}

/// The version of the library resolved at run time.
pub fn runtime_version() -> RuntimeVersion {
    // SAFETY: no arguments, plain integer return.
    let packed = unsafe { sys::oiio_runtime_version() };
    RuntimeVersion::from_packed(packed)
}

/// Query a global string attribute (`format_list`, `oiio:simd`, ...).
///
/// Returns `None` when the attribute is unknown or empty; OIIO answers
/// unknown names with its default, the empty string.
pub fn string_attribute(name: &str) -> Result<Option<String>, OiioError> {
    let name = CString::new(name)?;
    // SAFETY: name outlives the call; FFI returns a thread-local NUL-terminated string.
    let ptr = unsafe { sys::oiio_get_string_attribute(name.as_ptr()) };
    Ok(cstr_to_string(ptr))
}

/// Query a global integer attribute (`threads`, `exr_threads`, ...),
/// falling back to `default` when the attribute is unknown.
pub fn int_attribute(name: &str, default: i32) -> Result<i32, OiioError> {
    let name = CString::new(name)?;
    // SAFETY: name outlives the call.
    Ok(unsafe { sys::oiio_get_int_attribute(name.as_ptr(), default) })
}

fn cstr_to_string(ptr: *const std::ffi::c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    // SAFETY: FFI contract returns valid NUL-terminated strings.
    let s = unsafe { CStr::from_ptr(ptr) }.to_string_lossy();
    if s.is_empty() { None } else { Some(s.into_owned()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_version_decodes_major_minor_patch() {
        let v = RuntimeVersion::from_packed(20504);
        assert_eq!(
            v,
            RuntimeVersion {
                major: 2,
                minor: 5,
                patch: 4
            }
        );
    }

    #[test]
    fn test_packed_version_negative_is_zero() {
        let v = RuntimeVersion::from_packed(-1);
        assert_eq!(
            v,
            RuntimeVersion {
                major: 0,
                minor: 0,
                patch: 0
            }
        );
    }

    #[test]
    fn test_runtime_version_display() {
        let v = RuntimeVersion::from_packed(30012);
        assert_eq!(v.to_string(), "3.0.12");
    }
}

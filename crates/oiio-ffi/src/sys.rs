use std::ffi::{c_char, c_int};

unsafe extern "C" {
    pub fn oiio_get_last_error() -> *const c_char;

    pub fn oiio_version_string() -> *const c_char;
    pub fn oiio_runtime_version() -> c_int;

    pub fn oiio_get_string_attribute(name: *const c_char) -> *const c_char;
    pub fn oiio_get_int_attribute(name: *const c_char, defaultval: c_int) -> c_int;
}

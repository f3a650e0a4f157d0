use std::fmt;

use oiio_ffi::{OiioError, RuntimeVersion};

/// What the smoke test saw: the version the shim was compiled against, the
/// version of the library that actually loaded, and the raw `format_list`
/// attribute.
pub struct SmokeReport {
    pub version: String,
    pub runtime: RuntimeVersion,
    pub formats: String,
}

impl SmokeReport {
    pub fn collect() -> Result<Self, OiioError> {
        let version = oiio_ffi::version()?;
        let runtime = oiio_ffi::runtime_version();
        let formats = oiio_ffi::string_attribute("format_list")?.unwrap_or_default();

        if !versions_agree(&version, runtime) {
            tracing::warn!(
                header = %version,
                runtime = %runtime,
                "loaded library version disagrees with compile-time headers"
            );
        }
        if formats.is_empty() {
            tracing::warn!("format_list attribute came back empty");
        }

        tracing::debug!(%runtime, "runtime library version");
        for key in ["oiio:simd", "hw:simd"] {
            if let Some(value) = oiio_ffi::string_attribute(key)? {
                tracing::debug!(attribute = key, %value);
            }
        }

        Ok(Self {
            version,
            runtime,
            formats,
        })
    }
}

impl fmt::Display for SmokeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "OpenImageIO {}", self.version)?;
        writeln!(f, "Supported formats:")?;
        writeln!(f, "{}", self.formats)
    }
}

/// The header version string is `MAJOR.MINOR.PATCH.TWEAK` with an optional
/// suffix. Matching on the dot-terminated runtime version keeps `2.5.1`
/// from claiming agreement with a `2.5.14.x` header.
fn versions_agree(header: &str, runtime: RuntimeVersion) -> bool {
    let runtime = runtime.to_string();
    header == runtime || header.starts_with(&format!("{runtime}."))
}

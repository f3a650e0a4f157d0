use std::env;
use std::path::{Path, PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=csrc/oiio_capi.h");
    println!("cargo:rerun-if-changed=csrc/oiio_capi.cpp");
    for var in [
        "OIIO_FFI_PREBUILT_DIR",
        "OIIO_FFI_SOURCE_DIR",
        "OIIO_FFI_SKIP_NATIVE_BUILD",
        "OIIO_FFI_CMAKE_PREFIX_PATH",
    ] {
        println!("cargo:rerun-if-env-changed={var}");
    }

    if env_truthy("OIIO_FFI_SKIP_NATIVE_BUILD") {
        println!(
            "cargo:warning=OIIO_FFI_SKIP_NATIVE_BUILD=1: \
             skipping OpenImageIO native build (check-only mode)"
        );
        return;
    }

    if let Some(prebuilt_dir) = env_path("OIIO_FFI_PREBUILT_DIR") {
        use_prebuilt(&prebuilt_dir);
        return;
    }

    // A system dev package is the common case for a test package, so try
    // pkg-config before falling back to a source build. The probe emits
    // the link directives itself.
    if let Ok(oiio) = pkg_config::Config::new().probe("OpenImageIO") {
        compile_wrapper(&oiio.include_paths);
        link_cpp_runtime();
        return;
    }

    build_from_source();
}

fn use_prebuilt(prebuilt_dir: &Path) {
    let include_dir = prebuilt_dir.join("include");
    let lib_dir = pick_lib_dir(prebuilt_dir);
    if !include_dir.exists() || !lib_dir.exists() {
        panic!(
            "no include/ and lib/ under OIIO_FFI_PREBUILT_DIR ({})",
            prebuilt_dir.display()
        );
    }
    compile_wrapper(&[include_dir]);
    link_oiio(&lib_dir);
}

fn build_from_source() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let oiio_src = env_path("OIIO_FFI_SOURCE_DIR")
        .unwrap_or_else(|| manifest_dir.join("../../extern/OpenImageIO"));
    if !oiio_src.exists() {
        panic!(
            "OpenImageIO is neither installed (pkg-config) nor checked out at {}; \
             point OIIO_FFI_SOURCE_DIR at a source tree or OIIO_FFI_PREBUILT_DIR \
             at an install prefix",
            oiio_src.display()
        );
    }

    let mut cmake_cfg = cmake::Config::new(&oiio_src);
    cmake_cfg
        .define("BUILD_SHARED_LIBS", "ON")
        .define("OIIO_BUILD_TOOLS", "OFF")
        .define("OIIO_BUILD_TESTS", "OFF")
        .define("USE_PYTHON", "OFF")
        .define("BUILD_DOCS", "OFF")
        .define("INSTALL_DOCS", "OFF")
        .define("CMAKE_POSITION_INDEPENDENT_CODE", "ON");
    if let Some(prefix_path) = env_string("OIIO_FFI_CMAKE_PREFIX_PATH") {
        cmake_cfg.define("CMAKE_PREFIX_PATH", prefix_path);
    }

    let oiio_dst = cmake_cfg.build();
    compile_wrapper(&[oiio_dst.join("include")]);
    link_oiio(&pick_lib_dir(&oiio_dst));
}

fn pick_lib_dir(root: &Path) -> PathBuf {
    let lib = root.join("lib");
    let lib64 = root.join("lib64");
    if !lib.exists() && lib64.exists() { lib64 } else { lib }
}

fn compile_wrapper(oiio_includes: &[PathBuf]) {
    let mut build = cc::Build::new();
    build
        .cpp(true)
        .file("csrc/oiio_capi.cpp")
        .include("csrc")
        .flag_if_supported("-std=c++17");
    for include in oiio_includes {
        build.include(include);
    }
    build.compile("oiio_capi");
}

fn link_oiio(lib_dir: &Path) {
    println!("cargo:rustc-link-search=native={}", lib_dir.display());
    println!("cargo:rustc-link-lib=OpenImageIO");
    link_cpp_runtime();
}

fn link_cpp_runtime() {
    if cfg!(target_os = "linux") {
        println!("cargo:rustc-link-lib=dylib=stdc++");
    } else if cfg!(target_os = "macos") {
        println!("cargo:rustc-link-lib=dylib=c++");
    }
}

fn env_path(var: &str) -> Option<PathBuf> {
    env_string(var).map(PathBuf::from)
}

fn env_string(var: &str) -> Option<String> {
    env::var(var).ok().filter(|v| !v.is_empty())
}

fn env_truthy(var: &str) -> bool {
    matches!(
        env::var(var).ok().as_deref(),
        Some("1") | Some("true") | Some("TRUE") | Some("yes") | Some("YES")
    )
}

use std::env;

fn link(lib: &str) {
    println!("cargo:rustc-link-lib=dylib={}", lib);
}

fn addon_libs() -> Vec<&'static str> {
    let mut libs = Vec::new();
    if env::var("CARGO_FEATURE_FLAC").is_ok() {
        libs.push("bassflac");
    }
    if env::var("CARGO_FEATURE_DSD").is_ok() {
        libs.push("bassdsd");
    }
    if env::var("CARGO_FEATURE_OPUS").is_ok() {
        libs.push("bassopus");
    }
    if env::var("CARGO_FEATURE_WV").is_ok() {
        libs.push("basswv");
    }
    libs
}

fn main() {
    println!("cargo:rerun-if-env-changed=BASS_LIB_DIR");

    // Explicit directory takes priority: the BASS packages from un4seen.com
    // ship bare .so/.dylib/.lib files with no pkg-config metadata.
    if let Ok(dir) = env::var("BASS_LIB_DIR") {
        println!("cargo:rustc-link-search=native={}", dir);
        link("bass");
        for lib in addon_libs() {
            link(lib);
        }
        return;
    }

    // Fall back to pkg-config where a distribution packages the core library.
    // No probe failure panic: a missing library surfaces as a linker error.
    if pkg_config::Config::new().probe("bass").is_err() {
        link("bass");
    }
    for lib in addon_libs() {
        link(lib);
    }
}

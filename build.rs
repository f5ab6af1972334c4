fn main() {
    // ── libvips linking ──────────────────────────────────────────────────────
    //
    // The libvips-rs bindings crate ships no build script of its own, so the
    // `libvips` feature must tell cargo where to find the library. The default
    // build uses the pure Rust codecs and links nothing.
    if std::env::var_os("CARGO_FEATURE_LIBVIPS").is_some() {
        link_libvips();
    }
}

fn link_libvips() {
    // Re-run whenever the override env-var changes.
    println!("cargo:rerun-if-env-changed=VIPS_DIR");

    // VIPS_DIR points at an unpacked libvips distribution (lib/ + include/).
    let lib_dir = std::env::var("VIPS_DIR")
        .ok()
        .map(|dir| std::path::Path::new(&dir).join("lib"));

    if let Some(lib_dir) = &lib_dir {
        if lib_dir.exists() {
            println!("cargo:rustc-link-search=native={}", lib_dir.display());
        } else {
            println!(
                "cargo:warning=VIPS_DIR is set but '{}' does not exist.",
                lib_dir.display()
            );
        }
    }

    if cfg!(target_os = "windows") {
        println!("cargo:rustc-link-lib=dylib=libvips");
        // GLib symbols (g_free, g_object_unref, …) are called directly by
        // libvips-rs and must be linked explicitly on MSVC.
        println!("cargo:rustc-link-lib=dylib=libglib-2.0");
        println!("cargo:rustc-link-lib=dylib=libgobject-2.0");
    } else {
        // Linux / macOS: the system libvips package is sufficient.
        println!("cargo:rustc-link-lib=dylib=vips");
    }
}

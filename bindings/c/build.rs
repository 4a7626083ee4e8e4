fn main() {
    let crate_dir = std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is set");

    // Header generation is best-effort: a cbindgen parse failure must not
    // break the library build itself.
    if let Ok(bindings) = cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_language(cbindgen::Language::C)
        .with_include_guard("C_BNPAIR_H")
        .generate()
    {
        bindings.write_to_file(std::path::Path::new(&crate_dir).join("bnpair.h"));
    }

    println!("cargo:rerun-if-changed=src/lib.rs");
}

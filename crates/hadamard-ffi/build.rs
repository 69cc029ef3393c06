use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    let crate_dir: PathBuf = env::var("CARGO_MANIFEST_DIR").unwrap().into();

    let config =
        cbindgen::Config::from_file(crate_dir.join("cbindgen.toml")).expect("bad cbindgen.toml");

    let header = crate_dir.join("include").join("hadamard.h");
    fs::create_dir_all(header.parent().unwrap()).expect("failed to create include/");

    cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_config(config)
        .generate()
        .expect("cbindgen failed to generate bindings")
        .write_to_file(header);
}

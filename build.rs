use std::{env, fs, path::Path};

// Place config.json next to the built binary so the server finds it at startup.
fn main() {
    // OUT_DIR = target/<profile>/build/<crate>/out; the binary lives 3 levels up.
    let out_dir = env::var("OUT_DIR").expect("Cannot read OUT_DIR");
    let bin_dir = Path::new(&out_dir)
        .ancestors()
        .nth(3)
        .expect("Cannot find binary directory");

    let dst = bin_dir.join("config.json");
    match fs::copy("config.json", &dst) {
        Ok(_) => println!("cargo:warning=Copied config.json to {}", dst.display()),
        Err(e) => println!("cargo:warning=Could not copy config.json: {}", e),
    }

    println!("cargo:rerun-if-changed=config.json");
}

use std::{env, fs, path::Path};

use chrono::Datelike;

fn main() {
    // Capture the current year so server and client render the same figures
    let now = chrono::Utc::now();

    let out_dir = env::var("OUT_DIR").expect("cargo should set OUT_DIR");
    let dest = Path::new(&out_dir).join("build_info.rs");
    fs::write(
        &dest,
        format!("pub const BUILD_YEAR: i32 = {};\n", now.year()),
    )
    .expect("Should be able to write build info");

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}

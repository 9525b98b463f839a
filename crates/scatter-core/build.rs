// File: crates/scatter-core/build.rs
// Summary: Links the Windows system library Skia's font manager needs for registry access.

fn main() {
    #[cfg(target_os = "windows")]
    println!("cargo:rustc-link-lib=advapi32");
}

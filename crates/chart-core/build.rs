// File: crates/chart-core/build.rs
// Summary: Link the Windows system libraries Skia/ICU need for font lookup.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW (font manager registry scan)
        println!("cargo:rustc-link-lib=advapi32");
    }
}

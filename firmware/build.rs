fn main() {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let arch = std::env::var("CARGO_CFG_TARGET_ARCH").unwrap();
    let os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

    // Only use the linker script for bare-metal Arm builds, not for host tests
    if arch == "arm" && os == "none" {
        println!("cargo:rustc-link-arg-bins=-T{}/link.x", manifest_dir);
    }

    println!("cargo:rerun-if-changed=link.x");
    println!("cargo:rerun-if-changed=build.rs");
}

// build.rs — assemble the multiboot2 entry stub and pin the link layout
use std::{env, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=asm/x86_64/boot.asm");
    println!("cargo:rerun-if-changed=linker.ld");

    let target = env::var("TARGET").unwrap_or_default();
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if !target.starts_with("x86_64-") {
        println!("cargo:warning=Skipping ASM for non-x86_64 target: {target}");
        return;
    }
    // Host builds only run the unit tests; they never need the boot stub.
    if target_os != "none" {
        return;
    }

    let mut build = nasm_rs::Build::new();

    // ELF64 object even though the stub starts out in 32-bit protected mode.
    build.flag("-f").flag("elf64");
    build.include("asm/x86_64");

    if env::var("PROFILE").as_deref() == Ok("debug") {
        build.debug(true);
        build.flag("-w+all");
    }

    build.file("asm/x86_64/boot.asm");

    if let Err(e) = build.compile("boot_x86_64_asm") {
        panic!("NASM build failed: {e}");
    }

    let out_dir = PathBuf::from(env::var_os("OUT_DIR").unwrap());
    let manifest_dir = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR").unwrap());
    println!("cargo:rustc-link-search=native={}", out_dir.display());
    println!("cargo:rustc-link-lib=static=boot_x86_64_asm");
    println!(
        "cargo:rustc-link-arg-bins=-T{}",
        manifest_dir.join("linker.ld").display()
    );
    // Nothing in Rust references the stub; pull it out of the archive by name.
    println!("cargo:rustc-link-arg-bins=--undefined=_start");
    // The stub uses absolute 32-bit relocations.
    println!("cargo:rustc-link-arg-bins=--no-pie");
}

//! This build script copies the `memory.x` file from the crate root into
//! a directory where the linker can always find it at build time, and
//! forwards the match configuration from the environment (or a `.env` file)
//! to the compiler so the firmware can pick it up with `option_env!`.

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

const MATCH_CONFIG_VARS: [&str; 7] = [
    "LC_PLAYER_1_NAME",
    "LC_PLAYER_2_NAME",
    "LC_PLAYER_3_NAME",
    "LC_PLAYER_4_NAME",
    "LC_STARTING_LIFE",
    "LC_STARTING_CMDR",
    "LC_DEBOUNCE_FRAMES",
];

fn forward_match_config() {
    for var_name in MATCH_CONFIG_VARS {
        if let Ok(var_value) = env::var(var_name) {
            println!("cargo:rustc-env={}={}", var_name, var_value);
        }
        println!("cargo:rerun-if-env-changed={}", var_name);
    }
}

fn copy_memory_x() -> std::io::Result<()> {
    let out = &PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"));
    File::create(out.join("memory.x"))?.write_all(include_bytes!("memory.x"))?;
    println!("cargo:rustc-link-search={}", out.display());
    println!("cargo:rerun-if-changed=memory.x");
    Ok(())
}

fn main() {
    // Load .env file if it exists
    if dotenvy::dotenv().is_ok() {
        println!("cargo:warning=Loaded .env file");
    }
    println!("cargo:rerun-if-changed=.env");

    forward_match_config();

    /**************************************************************************************
     *  Linker configuration
     **************************************************************************************/

    // Put `memory.x` in our output directory and ensure it's
    // on the linker search path.
    copy_memory_x().expect("Failed to copy memory.x");

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    if env::var("CARGO_FEATURE_DEFMT").is_ok() {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }
}

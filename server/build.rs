//! Stages the front-end bundle for `rust-embed`.
//!
//! `frontend/index.html` is always copied into the dist directory. With
//! `TASK_DESK_BUILD_WASM=1` the front-end is also compiled for
//! `wasm32-unknown-unknown` and passed through `wasm-bindgen`.
//!
//! The dist directory is exported as `TASK_FRONTEND_DIST`.

use std::path::Path;
use std::process::Command;
use std::{env, fs};

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let frontend_dir = Path::new(&manifest_dir).join("../frontend");
    let dist_dir = Path::new(&out_dir).join("task-frontend-dist");

    println!("cargo:rerun-if-changed=../frontend/src");
    println!("cargo:rerun-if-changed=../frontend/Cargo.toml");
    println!("cargo:rerun-if-changed=../frontend/index.html");
    println!("cargo:rerun-if-env-changed=TASK_DESK_BUILD_WASM");

    fs::create_dir_all(&dist_dir).expect("Failed to create dist directory");
    fs::copy(frontend_dir.join("index.html"), dist_dir.join("index.html"))
        .expect("Failed to copy index.html");

    if env::var("TASK_DESK_BUILD_WASM").is_ok_and(|value| value == "1") {
        build_wasm(&frontend_dir, Path::new(&out_dir), &dist_dir);
    }

    println!("cargo:rustc-env=TASK_FRONTEND_DIST={}", dist_dir.display());
}

fn build_wasm(frontend_dir: &Path, out_dir: &Path, dist_dir: &Path) {
    // A separate target dir keeps the nested build off the outer build's lock.
    let target_dir = out_dir.join("wasm-target");
    let cargo = env::var("CARGO").unwrap_or_else(|_| "cargo".to_string());

    println!("cargo:warning=Building front-end WASM...");
    let status = Command::new(cargo)
        .current_dir(frontend_dir)
        .args([
            "build",
            "--target",
            "wasm32-unknown-unknown",
            "--release",
            "--lib",
            "--features",
            "hydrate",
            "--target-dir",
        ])
        .arg(&target_dir)
        .status()
        .expect("Failed to run cargo build for the front-end");

    if !status.success() {
        panic!("Front-end WASM build failed");
    }

    let wasm_file = target_dir.join("wasm32-unknown-unknown/release/task_frontend.wasm");
    if !wasm_file.exists() {
        panic!("WASM file not found at {wasm_file:?}. Front-end build may have failed.");
    }

    println!("cargo:warning=Running wasm-bindgen...");
    let status = Command::new("wasm-bindgen")
        .arg(&wasm_file)
        .arg("--out-dir")
        .arg(dist_dir)
        .args(["--target", "web", "--no-typescript"])
        .status()
        .expect(
            "Failed to run wasm-bindgen. Is it installed?\n\
             Run: cargo install wasm-bindgen-cli --version 0.2.104",
        );

    if !status.success() {
        panic!("wasm-bindgen failed");
    }
}

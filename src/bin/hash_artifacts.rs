//! Artifact hashing utility for Cytoradar model directories.
//!
//! Writes `manifest.json` with the SHA-256 digests of `model.json` and
//! `scaler.json`, enabling integrity checks at startup.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin hash_artifacts -- <model_dir>
//! ```

use std::env;
use std::path::PathBuf;

use cytoradar::adapters::model::{ArtifactManifest, MANIFEST_FILE, MODEL_FILE, SCALER_FILE};

fn usage() -> String {
    "Usage: hash_artifacts <model_dir>".to_string()
}

fn parse_args() -> Result<PathBuf, String> {
    let mut model_dir: Option<PathBuf> = None;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => return Err(usage()),
            _ => {
                if model_dir.is_none() {
                    model_dir = Some(PathBuf::from(arg));
                } else {
                    return Err(usage());
                }
            }
        }
    }

    model_dir.ok_or_else(usage)
}

fn main() -> Result<(), String> {
    let model_dir = parse_args()?;

    let model_dir = if model_dir.is_file() {
        model_dir
            .parent()
            .ok_or_else(|| "Model path has no parent directory".to_string())?
            .to_path_buf()
    } else {
        model_dir
    };

    let manifest = ArtifactManifest::build(&model_dir, &[MODEL_FILE, SCALER_FILE])
        .map_err(|e| e.to_string())?;
    manifest.write(&model_dir).map_err(|e| e.to_string())?;

    for (name, digest) in &manifest.files {
        println!("{name}: {digest}");
    }
    println!("Wrote manifest: {:?}", model_dir.join(MANIFEST_FILE));

    Ok(())
}

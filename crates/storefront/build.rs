//! Build script for the storefront crate.
//!
//! Fingerprints the stylesheet so it can be served under an immutable,
//! content-addressed URL.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

fn main() {
    let Some(manifest_dir) = env::var_os("CARGO_MANIFEST_DIR").map(PathBuf::from) else {
        println!("cargo:rustc-env=CSS_HASH=");
        return;
    };

    let hash = match hash_css(&manifest_dir) {
        Ok(hash) => hash,
        Err(e) => {
            println!("cargo:warning=Could not fingerprint main.css: {e}");
            String::new()
        }
    };

    // Empty hash makes templates fall back to the unhashed stylesheet.
    println!("cargo:rustc-env=CSS_HASH={hash}");
}

/// Hash `static/css/main.css` and copy it to `static/css/derived/main.{hash}.css`.
///
/// Returns the first eight hex digits of the SHA-256 digest.
fn hash_css(manifest_dir: &Path) -> io::Result<String> {
    let css_path = manifest_dir.join("static/css/main.css");
    println!("cargo:rerun-if-changed={}", css_path.display());

    let content = fs::read(&css_path)?;
    let digest = format!("{:x}", Sha256::digest(&content));
    let short_hash: String = digest.chars().take(8).collect();

    let derived_dir = manifest_dir.join("static/css/derived");
    fs::create_dir_all(&derived_dir)?;
    fs::copy(&css_path, derived_dir.join(format!("main.{short_hash}.css")))?;

    Ok(short_hash)
}

//! Rebuild when the backend location changes.
//!
//! `VDM_STORE_URL` is read with `option_env!` in `main.rs`; cargo does not
//! track that on its own.

fn main() {
    println!("cargo:rerun-if-env-changed=VDM_STORE_URL");
}

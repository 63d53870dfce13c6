//! # Voxel World Entry Point
//!
//! Calls into the library's `run()` to start a headless session.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release -- [config.json]
//! ```

fn main() {
    if let Err(err) = voxel_world::run() {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

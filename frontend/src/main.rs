#[cfg(target_arch = "wasm32")]
fn main() {
    yariga_frontend::run();
}

// The binary only has meaning in the browser; host builds produce an empty
// executable so `cargo test` can compile the whole package.
#[cfg(not(target_arch = "wasm32"))]
fn main() {}

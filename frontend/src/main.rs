//! Entry point for the WASM application

pub fn main() {
    brainai_frontend::run();
}

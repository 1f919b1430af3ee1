pub mod traits;

// Data sources
#[cfg(not(target_arch = "wasm32"))]
pub mod file;
pub mod http;

// Upstream price board
pub mod ngoc_tham;

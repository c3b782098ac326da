pub mod clipboard;
pub mod colors;
pub mod export;
pub mod qr;
#[cfg(target_arch = "wasm32")]
pub mod share_url;

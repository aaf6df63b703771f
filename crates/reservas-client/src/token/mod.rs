//! Credential backends implementing [`TokenStore`](reservas_core::traits::TokenStore).

pub mod file;
pub mod memory;

pub use file::FileTokenStore;
pub use memory::MemoryTokenStore;

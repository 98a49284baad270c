//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod client_directory;
pub mod menu_client;
pub mod order_client;

pub use client_directory::*;
pub use menu_client::*;
pub use order_client::*;

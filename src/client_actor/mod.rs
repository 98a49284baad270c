//! Client table: walk-in customers and their passcodes.

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Client;

/// Creates a new Client actor and its client. The actor needs no context.
pub fn new(buffer_size: usize) -> (ResourceActor<Client>, ResourceClient<Client>) {
    ResourceActor::new(buffer_size)
}

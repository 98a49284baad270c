//! # Menu Actor
//!
//! The menu catalog. Orders read it through [`MenuClient`](crate::clients::MenuClient)
//! to check availability and capture prices; nothing in the order path writes to it.

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::MenuItem;

/// Creates a new Menu actor and its client. The actor needs no context.
pub fn new(buffer_size: usize) -> (ResourceActor<MenuItem>, ResourceClient<MenuItem>) {
    ResourceActor::new(buffer_size)
}

//! Card metadata supplied by the external lookup collaborator.

pub mod commander;

pub use commander::{Commander, ImageUris};

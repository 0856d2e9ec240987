//! Wire-format mirrors of the backend's entities.
//!
//! The backend speaks camelCase JSON; every type here renames fields
//! accordingly and decodes leniently, defaulting optional and collection
//! fields that a payload may omit. These are snapshots of server state:
//! the client never treats its cached copy as authoritative, and
//! mutations re-fetch from the server instead of patching locally.

mod feature;
mod project;
mod task;
mod user;

pub use feature::*;
pub use project::*;
pub use task::*;
pub use user::*;

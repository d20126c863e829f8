mod id;

pub use id::{IdError, IdErrorExt, IdGuard};

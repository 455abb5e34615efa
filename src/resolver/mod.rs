mod by_number;
mod by_sha;

pub use by_number::resolve_by_number;
pub use by_sha::resolve_by_sha;

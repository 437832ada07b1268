pub mod mirror;

pub use mirror::{sync_mappings, CopiedDir, SyncReport};

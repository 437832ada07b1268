pub mod fs_ops;

pub use fs_ops::{copy_dir_recursive, list_subdirectories};

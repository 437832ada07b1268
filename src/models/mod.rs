pub mod mapping;

pub use mapping::{
    Destination, DestinationRole, PathMapping, SyncMode, COMPONENT_SPLIT_CHILD, HTML_SPLIT_CHILD,
};

pub mod error;
pub mod file;
pub mod ids;
pub mod remote;
pub mod seed;
pub mod snapshot;
pub mod store;

pub use error::{Result, StoreError};
pub use file::FileStore;
pub use remote::RemoteStore;
pub use snapshot::Snapshot;
pub use store::{BoardStore, IssueRemoval, Provider, SprintRemoval, select_store};

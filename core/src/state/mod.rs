pub mod info;
pub mod session;
pub mod snapshot;

pub use info::SystemInfo;
pub use session::SessionContext;
pub use snapshot::GameSnapshot;

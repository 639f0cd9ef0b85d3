pub mod checker;
pub mod executor;
pub mod host;
pub mod listing;
pub mod manager;

pub use checker::{CheckResult, PresenceChecker};
pub use executor::{CommandExecutor, DEFAULT_COMMAND_TIMEOUT};
pub use host::HostIdentifier;
pub use listing::Listing;
pub use manager::PackageManager;

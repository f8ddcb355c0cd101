//! Outbound ports: what the player needs from the account backend and the host

pub mod account_port;
pub mod platform;

#[cfg(any(test, feature = "testing"))]
pub use account_port::MockAccountPort;
pub use account_port::{AccountError, AccountPort};
pub use platform::{
    storage_keys, Clock, HostDocument, PlatformPort, PreferenceStore, SleepFuture,
};

//! Client-side state for the user roster: the canonical record list with its
//! edit flow, the creation form, and the read-only user directory client.

pub mod config;
pub mod creator;
pub mod directory;
pub mod filter;
pub mod roster;

pub use config::{load_settings, Settings, SettingsError, SettingsFile};
pub use creator::RecordCreator;
pub use directory::{decode_users, DirectoryError, HttpUserDirectory, UserDirectory};
pub use filter::FilteredView;
pub use roster::{CommitOutcome, IdAssignment, Roster};

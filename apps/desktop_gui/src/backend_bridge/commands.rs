//! Backend commands queued from UI to backend worker.

pub enum BackendCommand {
    /// Read the user directory once; the result comes back as
    /// `UiEvent::DirectoryLoaded`.
    FetchDirectory,
}

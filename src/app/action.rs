/// Side effects returned by handlers and executed by the main loop, keeping
/// the handlers themselves free of I/O.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// Write the whole task collection back to disk.
    PersistTasks,
    Quit,
}

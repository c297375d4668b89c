use thiserror::Error;

/// Typed failures raised by the library
///
/// I/O and configuration problems travel as `anyhow::Error` with context;
/// these variants cover what callers may want to match on.
#[derive(Debug, Error)]
pub enum RouteError {
    /// A route declaration names neither a component nor a redirect
    #[error("route `{name}` ({path}) declares neither a component nor a redirect")]
    MissingTarget { path: String, name: String },

    /// The process-wide tables were already built
    #[error("route tables are already initialized")]
    AlreadyInitialized,
}

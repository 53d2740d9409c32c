//! Error types.

/// Error enumerates the startup failures of an ACME Check run.
///
/// Per-name lookup failures never surface here: they are absorbed into the
/// [`Report`][crate::checker::Report] for that name. See
/// [`ResolverError`][crate::resolver::ResolverError].
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Returned when the configured resolver address is neither an IP address, a socket address,
    /// nor a host name that resolves to at least one address.
    #[error("invalid DNS server address \"{0}\"")]
    InvalidServer(String),

    /// Returned when a generic IO error occurs.
    #[error("an IO error occurred")]
    IO(#[from] std::io::Error),

    /// Returned when [trying to load a `Config`][crate::config::Config::try_from_file] fails
    /// due to invalid JSON content.
    #[error("invalid JSON")]
    InvalidJSON(#[from] serde_json::Error),
}

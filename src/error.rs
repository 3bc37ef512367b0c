use thiserror::Error;

/// Problems with what the visitor typed into the subscription form.
/// The `Display` text is shown verbatim in the form's error slot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your email address")]
    Empty,
    #[error("Please enter a valid email address")]
    Malformed,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Could not reach the server: {0}")]
    Network(String),
    #[error("Subscription was rejected (status {0})")]
    Rejected(u16),
}

/// Failures of the offline cache lifecycle. Any of these during install
/// fails the whole install.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("failed to open cache {name}: {reason}")]
    Open { name: String, reason: String },
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },
    #[error("bad response for {url}: status {status}")]
    Status { url: String, status: u16 },
    #[error("failed to store {url}: {reason}")]
    Store { url: String, reason: String },
    #[error("failed to delete cache {name}: {reason}")]
    Delete { name: String, reason: String },
    #[error("cache lookup failed: {0}")]
    Lookup(String),
}

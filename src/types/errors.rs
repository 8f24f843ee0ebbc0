use std::fmt;

// === ValidationError ===

/// Errors raised while validating bookmark input, before any store call.
#[derive(Debug)]
pub enum ValidationError {
    /// The title is empty after trimming.
    EmptyTitle,
    /// The URL is empty after trimming.
    EmptyUrl,
    /// The URL does not parse even after scheme defaulting.
    MalformedUrl(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyTitle => write!(f, "Title must not be empty"),
            ValidationError::EmptyUrl => write!(f, "URL must not be empty"),
            ValidationError::MalformedUrl(url) => write!(f, "Malformed URL: {}", url),
        }
    }
}

impl std::error::Error for ValidationError {}

// === StoreError ===

/// Errors from the remote record store.
#[derive(Debug)]
pub enum StoreError {
    /// The store rejected the request.
    Rejected(String),
    /// The store could not be reached.
    Network(String),
    /// The store's response could not be decoded.
    Serialization(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Rejected(msg) => write!(f, "Store rejected the request: {}", msg),
            StoreError::Network(msg) => write!(f, "Store network error: {}", msg),
            StoreError::Serialization(msg) => write!(f, "Store response error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

// === FeedError ===

/// Errors related to the change feed subscription.
#[derive(Debug)]
pub enum FeedError {
    /// The subscription could not be established.
    SubscribeFailed(String),
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::SubscribeFailed(msg) => write!(f, "Feed subscription failed: {}", msg),
        }
    }
}

impl std::error::Error for FeedError {}

// === SubmitError ===

/// Errors from submitting a new bookmark. Validation errors are raised
/// before any network traffic; store errors leave local state untouched.
#[derive(Debug)]
pub enum SubmitError {
    Validation(ValidationError),
    Store(StoreError),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Validation(err) => write!(f, "{}", err),
            SubmitError::Store(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SubmitError {}

// === DashboardError ===

/// Errors raised while opening the dashboard view.
#[derive(Debug)]
pub enum DashboardError {
    /// The initial record list could not be loaded.
    Store(StoreError),
    /// The change feed subscription could not be established.
    Feed(FeedError),
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardError::Store(err) => write!(f, "{}", err),
            DashboardError::Feed(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for DashboardError {}

// === SettingsError ===

/// Errors related to store settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

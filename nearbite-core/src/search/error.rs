use thiserror::Error;

/// Errors from [`crate::PlaceSearch::search_nearby`].
///
/// Zero results is not an error; adapters return an empty list instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaceSearchError {
    /// The request could not be sent or the connection failed.
    #[error("network error contacting {url}: {message}")]
    Network {
        /// Request URL with credentials redacted.
        url: String,
        /// Transport error description.
        message: String,
    },
    /// The request did not complete in time.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Request URL with credentials redacted.
        url: String,
        /// Configured timeout.
        timeout_secs: u64,
    },
    /// The service answered with a non-success HTTP status.
    #[error("HTTP {status} from {url}: {message}")]
    HttpStatus {
        /// Request URL with credentials redacted.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error description.
        message: String,
    },
    /// The service answered with a non-success status in its payload.
    #[error("place search failed with status {status}: {message}")]
    ServiceStatus {
        /// Upstream status code, e.g. `REQUEST_DENIED`.
        status: String,
        /// Upstream error message, possibly empty.
        message: String,
    },
    /// The payload could not be decoded.
    #[error("failed to parse place search response: {message}")]
    Parse {
        /// Decoder error description.
        message: String,
    },
}

/// Errors from [`crate::Geocoder::geocode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeocodeError {
    /// The address was empty or whitespace.
    #[error("cannot geocode an empty address")]
    EmptyAddress,
    /// The service found no match for the address.
    #[error("no geocoding match for '{address}'")]
    NoMatch {
        /// Address that failed to resolve.
        address: String,
    },
    /// The request could not be sent or the connection failed.
    #[error("network error contacting {url}: {message}")]
    Network {
        /// Request URL with credentials redacted.
        url: String,
        /// Transport error description.
        message: String,
    },
    /// The request did not complete in time.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Request URL with credentials redacted.
        url: String,
        /// Configured timeout.
        timeout_secs: u64,
    },
    /// The service answered with a non-success HTTP status.
    #[error("HTTP {status} from {url}: {message}")]
    HttpStatus {
        /// Request URL with credentials redacted.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error description.
        message: String,
    },
    /// The service answered with a non-success status in its payload.
    #[error("geocoding failed with status {status}: {message}")]
    ServiceStatus {
        /// Upstream status code.
        status: String,
        /// Upstream error message, possibly empty.
        message: String,
    },
    /// The payload could not be decoded.
    #[error("failed to parse geocoding response: {message}")]
    Parse {
        /// Decoder error description.
        message: String,
    },
}

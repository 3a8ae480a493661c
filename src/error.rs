use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;
use std::io;

/// HTTP method type, re-exported for use with error inspection.
pub use reqwest::Method;
/// HTTP status code type, re-exported for use with error inspection.
pub use reqwest::StatusCode;

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Credentials were supplied in an unsupported combination, or the secret file is unusable
    InvalidCredentialConfiguration,
    /// Location is not one of the supported regions
    UnknownLocation,
    /// Algorithm name is not present in the registry
    UnknownAlgorithm,
    /// Algorithm index is outside the registry
    InvalidAlgorithm,
    /// Registry lookup by index is outside the registry
    IndexOutOfRange,
    /// Parameter is neither an algorithm name nor an algorithm index
    InvalidParameterType,
    /// Persisted pool record is missing a required field
    MalformedPoolRecord,
    /// Transport failure, timeout or non-successful HTTP status
    RemoteRequest,
    /// Response body is not JSON or lacks the expected fields
    RemoteResponse,
    /// Internal error from dependencies
    Internal,
}

#[derive(Debug)]
pub struct Error {
    kind: Kind,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    backtrace: Backtrace,
}

impl Error {
    pub fn with_source<S: StdError + Send + Sync + 'static>(kind: Kind, source: S) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
            backtrace: Backtrace::capture(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    #[must_use]
    pub fn inner(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    #[must_use]
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        let e = self.source.as_deref()?;
        e.downcast_ref::<E>()
    }

    pub fn credentials<S: Into<String>>(reason: S) -> Self {
        InvalidCredentials {
            reason: reason.into(),
        }
        .into()
    }

    pub fn response<S: Into<String>>(reason: S) -> Self {
        MalformedResponse {
            reason: reason.into(),
        }
        .into()
    }

    pub fn status<S: Into<String>>(
        status_code: StatusCode,
        method: Method,
        path: String,
        message: S,
    ) -> Self {
        Status {
            status_code,
            method,
            path,
            message: message.into(),
        }
        .into()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(src) => write!(f, "{:?}: {}", self.kind, src),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

#[non_exhaustive]
#[derive(Debug)]
pub struct InvalidCredentials {
    pub reason: String,
}

impl fmt::Display for InvalidCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid credential configuration: {}", self.reason)
    }
}

impl StdError for InvalidCredentials {}

impl From<InvalidCredentials> for Error {
    fn from(err: InvalidCredentials) -> Self {
        Error::with_source(Kind::InvalidCredentialConfiguration, err)
    }
}

#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct UnknownLocation {
    pub value: String,
}

impl fmt::Display for UnknownLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown location: {}", self.value)
    }
}

impl StdError for UnknownLocation {}

impl From<UnknownLocation> for Error {
    fn from(err: UnknownLocation) -> Self {
        Error::with_source(Kind::UnknownLocation, err)
    }
}

#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct UnknownAlgorithm {
    pub name: String,
}

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm: {}", self.name)
    }
}

impl StdError for UnknownAlgorithm {}

impl From<UnknownAlgorithm> for Error {
    fn from(err: UnknownAlgorithm) -> Self {
        Error::with_source(Kind::UnknownAlgorithm, err)
    }
}

/// An algorithm index supplied as a request parameter that the registry does not contain.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct InvalidAlgorithm {
    pub index: i64,
    pub len: usize,
}

impl fmt::Display for InvalidAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid algorithm option {}, must be in [0, {})",
            self.index, self.len
        )
    }
}

impl StdError for InvalidAlgorithm {}

impl From<InvalidAlgorithm> for Error {
    fn from(err: InvalidAlgorithm) -> Self {
        Error::with_source(Kind::InvalidAlgorithm, err)
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, Copy)]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

impl fmt::Display for IndexOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "algorithm index {} out of range [0, {})",
            self.index, self.len
        )
    }
}

impl StdError for IndexOutOfRange {}

impl From<IndexOutOfRange> for Error {
    fn from(err: IndexOutOfRange) -> Self {
        Error::with_source(Kind::IndexOutOfRange, err)
    }
}

#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct InvalidParameterType {
    /// JSON type name of the rejected value, e.g. `boolean`
    pub found: &'static str,
}

impl fmt::Display for InvalidParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected an algorithm name or index, found {}",
            self.found
        )
    }
}

impl StdError for InvalidParameterType {}

impl From<InvalidParameterType> for Error {
    fn from(err: InvalidParameterType) -> Self {
        Error::with_source(Kind::InvalidParameterType, err)
    }
}

#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct MalformedPoolRecord {
    pub field: &'static str,
}

impl fmt::Display for MalformedPoolRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pool record is missing field {}", self.field)
    }
}

impl StdError for MalformedPoolRecord {}

impl From<MalformedPoolRecord> for Error {
    fn from(err: MalformedPoolRecord) -> Self {
        Error::with_source(Kind::MalformedPoolRecord, err)
    }
}

#[non_exhaustive]
#[derive(Debug)]
pub struct Status {
    pub status_code: StatusCode,
    pub method: Method,
    pub path: String,
    pub message: String,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error({}) making {} call to {} with {}",
            self.status_code, self.method, self.path, self.message
        )
    }
}

impl StdError for Status {}

impl From<Status> for Error {
    fn from(err: Status) -> Self {
        Error::with_source(Kind::RemoteRequest, err)
    }
}

#[non_exhaustive]
#[derive(Debug)]
pub struct MalformedResponse {
    pub reason: String,
}

impl fmt::Display for MalformedResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed response: {}", self.reason)
    }
}

impl StdError for MalformedResponse {}

impl From<MalformedResponse> for Error {
    fn from(err: MalformedResponse) -> Self {
        Error::with_source(Kind::RemoteResponse, err)
    }
}

/// An error reported in-band by the API, i.e. `{"result": {"error": "..."}}` with a 2xx status.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct ApiError {
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API error: {}", self.message)
    }
}

impl StdError for ApiError {}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::with_source(Kind::RemoteResponse, err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Error::with_source(Kind::RemoteResponse, e)
        } else if e.is_builder() {
            Error::with_source(Kind::Internal, e)
        } else {
            Error::with_source(Kind::RemoteRequest, e)
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::with_source(Kind::RemoteResponse, e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<serde_html_form::ser::Error> for Error {
    fn from(e: serde_html_form::ser::Error) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

//! Correlation id for one peak request.
//!
//! The HTTP middleware picks the id (the caller's `trace-id` header when it
//! holds a UUID, a fresh one otherwise) and runs the handler inside
//! [`TraceId::scope`]. Domain errors built during that request read the id
//! back through [`TraceId::current`] and echo it to the client.
//!
//! The id lives in a Tokio task-local, so work spawned onto another task must
//! be wrapped in its own `scope` call to keep it.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use tokio::task_local;
use uuid::Uuid;

/// Header carrying the id on both requests and responses.
pub const TRACE_ID_HEADER: &str = "trace-id";

task_local! {
    static CURRENT: TraceId;
}

/// Request correlation id, a UUID rendered in hyphenated form.
///
/// # Examples
/// ```
/// use peak_service::TraceId;
///
/// let reused = TraceId::from_header(Some("7f1d7a1e-3c1b-4b6e-9e0c-0a8f5d2c9b11"));
/// assert_eq!(reused.to_string(), "7f1d7a1e-3c1b-4b6e-9e0c-0a8f5d2c9b11");
///
/// let fresh = TraceId::from_header(Some("not a uuid"));
/// assert_ne!(fresh, reused);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Random v4 id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Reuse a caller-supplied header value, or generate when it is absent
    /// or not a UUID.
    #[must_use]
    pub fn from_header(value: Option<&str>) -> Self {
        value
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or_else(Self::generate)
    }

    /// The id of the request being handled on this task, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }

    /// Run `fut` with `trace_id` as the current id.
    ///
    /// # Examples
    /// ```
    /// use peak_service::TraceId;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let id = TraceId::generate();
    /// assert_eq!(TraceId::scope(id, async { TraceId::current() }).await, Some(id));
    /// # });
    /// ```
    pub async fn scope<Fut: Future>(trace_id: Self, fut: Fut) -> Fut::Output {
        CURRENT.scope(trace_id, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

//! Request context carrying cancellation and an optional deadline

use std::time::Duration;

use thiserror::Error;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Reason a request context stopped accepting work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("context canceled")]
    Canceled,

    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

/// Per-request context handed to `DataSource::read`
///
/// Cloning shares the cancellation token, so cancelling any clone cancels all of them.
#[derive(Debug, Clone, Default)]
pub struct Context {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl Context {
    /// Creates a context with no deadline
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context that expires `timeout` from now
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            token: CancellationToken::new(),
            deadline: Some(Instant::now() + timeout),
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Cancels this context and every clone of it
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Returns the reason the context is done, or `None` while it is still live
    pub fn err(&self) -> Option<ContextError> {
        if self.token.is_cancelled() {
            return Some(ContextError::Canceled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(ContextError::DeadlineExceeded),
            _ => None,
        }
    }

    /// Drives `fut` until it completes or the context is done
    ///
    /// When the context finishes first the future is dropped and the context
    /// error is returned through `E`.
    pub async fn run<T, E, F>(&self, fut: F) -> Result<T, E>
    where
        F: Future<Output = Result<T, E>>,
        E: From<ContextError>,
    {
        if let Some(err) = self.err() {
            return Err(err.into());
        }

        let expired = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(ContextError::Canceled.into()),
            _ = expired => Err(ContextError::DeadlineExceeded.into()),
            result = fut => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum TestError {
        Context(ContextError),
        Inner(&'static str),
    }

    impl From<ContextError> for TestError {
        fn from(e: ContextError) -> Self {
            TestError::Context(e)
        }
    }

    #[tokio::test]
    async fn run_returns_future_output_when_context_is_live() {
        let ctx = Context::new();

        let result: Result<u32, TestError> = ctx.run(async { Ok(7) }).await;

        assert_eq!(result, Ok(7));
    }

    #[tokio::test]
    async fn run_passes_through_future_error() {
        let ctx = Context::new();

        let result: Result<u32, TestError> = ctx.run(async { Err(TestError::Inner("boom")) }).await;

        assert_eq!(result, Err(TestError::Inner("boom")));
    }

    #[tokio::test]
    async fn run_returns_canceled_when_already_cancelled() {
        let ctx = Context::new();
        ctx.cancel();

        let result: Result<u32, TestError> = ctx.run(async { Ok(7) }).await;

        assert_eq!(result, Err(TestError::Context(ContextError::Canceled)));
    }

    #[tokio::test]
    async fn run_returns_canceled_when_cancelled_in_flight() {
        let ctx = Context::new();
        let canceller = ctx.clone();

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            canceller.cancel();
        });

        let result: Result<u32, TestError> = ctx
            .run(async {
                std::future::pending::<()>().await;
                Ok(7)
            })
            .await;

        assert_eq!(result, Err(TestError::Context(ContextError::Canceled)));
    }

    #[tokio::test]
    async fn run_returns_deadline_exceeded_when_timeout_elapses() {
        let ctx = Context::with_timeout(Duration::from_millis(20));

        let result: Result<u32, TestError> = ctx
            .run(async {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(7)
            })
            .await;

        assert_eq!(
            result,
            Err(TestError::Context(ContextError::DeadlineExceeded))
        );
        assert_eq!(ctx.err(), Some(ContextError::DeadlineExceeded));
    }

    #[test]
    fn context_error_messages() {
        assert_eq!(ContextError::Canceled.to_string(), "context canceled");
        assert_eq!(
            ContextError::DeadlineExceeded.to_string(),
            "context deadline exceeded"
        );
    }
}

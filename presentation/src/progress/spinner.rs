//! Spinner shown while a remote call is in flight

use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

const TICK_INTERVAL: Duration = Duration::from_millis(100);
const TICK_CHARS: [&str; 5] = ["|", "/", "-", "\\", " "];

/// Animates `"{message} |/-\"` on stderr until the wrapped future completes
#[derive(Debug, Clone)]
pub struct ThinkingSpinner {
    message: String,
    enabled: bool,
}

impl ThinkingSpinner {
    pub fn new() -> Self {
        Self {
            message: "Assistant is thinking".to_string(),
            enabled: true,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// A disabled spinner just awaits the future.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Await `future` with the spinner running.
    ///
    /// The animation task is cancelled and joined before this returns, so
    /// its line is already cleared when the caller prints the result.
    pub async fn run<F, T>(&self, future: F) -> T
    where
        F: Future<Output = T>,
    {
        if !self.enabled {
            return future.await;
        }

        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::style());
        bar.set_message(self.message.clone());

        let token = CancellationToken::new();
        let animation = tokio::spawn(animate(bar, token.clone()));
        // cancels the animation even if this future is dropped mid-call
        let guard = token.drop_guard();

        let output = future.await;

        drop(guard);
        let _ = animation.await;
        output
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{msg} {spinner}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&TICK_CHARS)
    }
}

impl Default for ThinkingSpinner {
    fn default() -> Self {
        Self::new()
    }
}

async fn animate(bar: ProgressBar, token: CancellationToken) {
    let mut ticker = tokio::time::interval(TICK_INTERVAL);
    loop {
        tokio::select! {
            _ = token.cancelled() => break,
            _ = ticker.tick() => bar.tick(),
        }
    }
    bar.finish_and_clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_spinner_passes_output_through() {
        let spinner = ThinkingSpinner::new().enabled(false);
        let value = spinner.run(async { 42 }).await;
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn test_spinner_returns_output_after_stopping() {
        let spinner = ThinkingSpinner::new().with_message("Looking up problem");
        let result: Result<&str, String> = spinner
            .run(async {
                tokio::time::sleep(Duration::from_millis(250)).await;
                Err("boom".to_string())
            })
            .await;
        assert_eq!(result, Err("boom".to_string()));
    }

    #[tokio::test]
    async fn test_dropped_call_stops_animation() {
        let metrics = tokio::runtime::Handle::current().metrics();
        let before = metrics.num_alive_tasks();

        let spinner = ThinkingSpinner::new();
        let outcome = tokio::time::timeout(
            Duration::from_millis(150),
            spinner.run(tokio::time::sleep(Duration::from_secs(60))),
        )
        .await;
        assert!(outcome.is_err());

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(metrics.num_alive_tasks(), before);
    }
}

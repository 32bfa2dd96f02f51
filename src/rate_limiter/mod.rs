use std::time::Duration;
use tokio::time::sleep;

/// Spaces out windowed gateway requests. The first request goes out
/// immediately; every later one waits the configured delay first, which
/// keeps the request rate predictable for the upstream firewall.
pub struct WindowThrottle {
    delay: Duration,
    windows_issued: usize,
}

impl WindowThrottle {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            windows_issued: 0,
        }
    }

    pub async fn wait(&mut self) {
        if self.windows_issued > 0 {
            sleep(self.delay).await;
        }
        self.windows_issued += 1;
    }
}

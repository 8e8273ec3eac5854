//! One-shot timer handle

use std::{pin::Pin, time::Duration};

use tokio::time::{sleep, Sleep};

/// Cancellable one-shot timer; empty once fired or cancelled
#[derive(Debug)]
pub struct Delay {
    duration: Duration,
    sleep: Option<Pin<Box<Sleep>>>,
}

impl Delay {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            sleep: None,
        }
    }

    /// Arm the delay from now, replacing any pending deadline
    pub fn arm(&mut self) {
        self.sleep = Some(Box::pin(sleep(self.duration)));
    }

    pub fn cancel(&mut self) {
        self.sleep = None;
    }

    pub fn is_armed(&self) -> bool {
        self.sleep.is_some()
    }

    /// Wait for the deadline. Cancel safe; the handle is emptied on completion.
    pub async fn fired(&mut self) {
        match self.sleep.as_mut() {
            Some(sleep) => {
                sleep.as_mut().await;
                self.sleep = None;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{advance, timeout, Instant};

    #[tokio::test(start_paused = true)]
    async fn fires_once_then_empties() {
        let mut delay = Delay::new(Duration::from_millis(500));
        delay.arm();
        let started = Instant::now();
        delay.fired().await;
        assert_eq!(started.elapsed(), Duration::from_millis(500));
        assert!(!delay.is_armed());
        assert!(timeout(Duration::from_secs(1), delay.fired()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_before_deadline_never_fires() {
        let mut delay = Delay::new(Duration::from_millis(500));
        delay.arm();
        advance(Duration::from_millis(200)).await;
        delay.cancel();
        assert!(timeout(Duration::from_secs(2), delay.fired()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn rearm_pushes_deadline_out() {
        let mut delay = Delay::new(Duration::from_millis(500));
        delay.arm();
        advance(Duration::from_millis(300)).await;
        delay.arm();
        let rearmed = Instant::now();
        delay.fired().await;
        assert_eq!(rearmed.elapsed(), Duration::from_millis(500));
    }
}

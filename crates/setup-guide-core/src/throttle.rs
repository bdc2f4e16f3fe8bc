use serde::{Deserialize, Serialize};

/// Leading-edge rate limiter: the first call in a window passes, every other
/// call before the window closes is dropped rather than deferred.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Throttle {
    limit_ms: u32,
    blocked_until_ms: Option<f64>,
}

impl Throttle {
    pub fn new(limit_ms: u32) -> Self {
        Self {
            limit_ms,
            blocked_until_ms: None,
        }
    }

    pub fn limit_ms(&self) -> u32 {
        self.limit_ms
    }

    pub fn try_acquire(&mut self, now_ms: f64) -> bool {
        if let Some(until) = self.blocked_until_ms {
            if now_ms < until {
                return false;
            }
        }
        self.blocked_until_ms = Some(now_ms + f64::from(self.limit_ms));
        true
    }

    pub fn is_open(&self, now_ms: f64) -> bool {
        self.blocked_until_ms.is_none_or(|until| now_ms >= until)
    }
}

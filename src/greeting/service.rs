use crate::domain::{GreetingRequest, GreetingResponse};
use chrono::{SecondsFormat, Utc};
use futures_util::Stream;
use std::time::Duration;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Produces an endless, paced greeting for a name
#[derive(Debug, Clone)]
pub struct GreetingService {
    interval: Duration,
}

impl GreetingService {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
        }
    }

    /// One greeting per interval, the first one interval after the call
    pub fn greet(&self, request: GreetingRequest) -> impl Stream<Item = GreetingResponse> + Send + 'static {
        let period = self.interval;

        async_stream::stream! {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                yield GreetingResponse::from(format!(
                    "Hello {} at {}",
                    request.name,
                    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
                ));
            }
        }
    }
}

impl Default for GreetingService {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;

    #[tokio::test(start_paused = true)]
    async fn test_greets_once_per_interval() {
        let service = GreetingService::default();
        let deadline = tokio::time::sleep(Duration::from_millis(2500));

        let greetings: Vec<GreetingResponse> = service
            .greet(GreetingRequest::from("Ada".to_string()))
            .take_until(deadline)
            .collect()
            .await;

        assert_eq!(greetings.len(), 2);
        for greeting in &greetings {
            assert!(greeting.message.starts_with("Hello Ada at "));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_message_carries_timestamp() {
        let service = GreetingService::new(Duration::from_millis(10));
        let greeting = Box::pin(service.greet(GreetingRequest::from("Bob".to_string())))
            .next()
            .await
            .unwrap();

        let stamp = greeting.message.trim_start_matches("Hello Bob at ");
        assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok());
    }
}

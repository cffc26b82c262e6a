use async_trait::async_trait;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogPublisher emits domain events as structured log lines; there is no
// external broker in a single-process deployment.
pub struct LogPublisher {}

impl LogPublisher {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for LogPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for LogPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        tracing::info!(
            event_id = event.event_id.as_str(),
            name = event.name.as_str(),
            key = event.key.as_str(),
            "published {:?} event", event.kind);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::logs::publisher::LogPublisher;

    #[tokio::test]
    async fn test_should_publish_event() {
        let publisher = LogPublisher::new();
        let event = DomainEvent::added(
            "book_added", "isbn", &HashMap::new(), &"data".to_string()).expect("build event");
        publisher.publish(&event).await.expect("should publish event");
    }
}

use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// MemoryPublisher keeps the names and keys of published events in order
#[derive(Debug, Default)]
pub struct MemoryPublisher {
    published: RwLock<Vec<(String, String)>>,
}

impl MemoryPublisher {
    pub(crate) fn new() -> Self {
        Self {
            published: RwLock::new(vec![]),
        }
    }

    pub(crate) async fn published(&self) -> Vec<(String, String)> {
        self.published.read().await.clone()
    }
}

#[async_trait]
impl EventPublisher for MemoryPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        self.published.write().await.push((event.name.to_string(), event.key.to_string()));
        Ok(())
    }
}

//! In-memory label repository

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use taskgate_domain::Label;
use taskgate_domain::error::Result;
use taskgate_domain::ports::LabelRepository;

use super::IdSequence;

/// Label repository keeping records in a concurrent map
#[derive(Debug, Default)]
pub struct InMemoryLabelRepository {
    ids: IdSequence,
    labels: DashMap<i64, Label>,
}

impl InMemoryLabelRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LabelRepository for InMemoryLabelRepository {
    async fn find_label_by_id(&self, id: i64) -> Result<Option<Label>> {
        Ok(self.labels.get(&id).map(|entry| entry.value().clone()))
    }

    async fn create_label(&self, name: &str) -> Result<Label> {
        let id = self.ids.next();
        let label = Label {
            id,
            name: name.to_string(),
            created_at: Utc::now(),
        };
        self.labels.insert(id, label.clone());
        Ok(label)
    }

    async fn delete_label(&self, id: i64) -> Result<bool> {
        Ok(self.labels.remove(&id).is_some())
    }
}

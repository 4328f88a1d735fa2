use std::collections::HashMap;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryRepository is a list guarded by a single lock, mutations are serialized through it
#[derive(Debug)]
pub(crate) struct MemoryRepository<Entity> {
    name: String,
    records: RwLock<Vec<Entity>>,
}

impl<Entity> MemoryRepository<Entity>
    where Entity: Identifiable + Serialize + Clone + 'static {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            records: RwLock::new(vec![]),
        }
    }

    // applies update to the first record accepted by the filter, under the write lock
    pub(crate) async fn update_first<F, U>(&self, filter: F, update: U) -> bool
        where F: Fn(&Entity) -> bool + Send, U: FnOnce(&mut Entity) + Send {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| filter(r)) {
            Some(record) => {
                update(record);
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl<Entity> Repository<Entity> for MemoryRepository<Entity>
    where Entity: Identifiable + Serialize + Clone + 'static {
    async fn create(&self, entity: &Entity) -> LibraryResult<usize> {
        self.records.write().await.push(entity.clone());
        Ok(1)
    }

    async fn update(&self, key: &str, entity: &Entity) -> LibraryResult<usize> {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.key() == key) {
            Some(record) => {
                *record = entity.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn get(&self, key: &str) -> LibraryResult<Entity> {
        self.records.read().await.iter()
            .find(|r| r.key() == key)
            .cloned()
            .ok_or_else(|| LibraryError::not_found(format!("{} with key {} not found", self.name, key).as_str()))
    }

    async fn delete(&self, key: &str) -> LibraryResult<usize> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.key() != key);
        Ok(before - records.len())
    }

    async fn query(&self, predicate: &HashMap::<String, String>) -> LibraryResult<Vec<Entity>> {
        let records = self.records.read().await;
        let mut matched = vec![];
        for record in records.iter() {
            if matches_predicate(serde_json::to_value(record)?, predicate) {
                matched.push(record.clone());
            }
        }
        Ok(matched)
    }
}

fn matches_predicate(value: Value, predicate: &HashMap<String, String>) -> bool {
    predicate.iter().all(|(k, expected)| {
        match value.get(k) {
            Some(Value::String(actual)) => actual == expected,
            Some(Value::Null) | None => false,
            Some(other) => other.to_string() == *expected,
        }
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use serde::Serialize;
    use crate::core::domain::Identifiable;
    use crate::core::repository::Repository;
    use crate::utils::memory::MemoryRepository;

    #[derive(Debug, PartialEq, Clone, Serialize)]
    struct Record {
        name: String,
        count: i64,
        active: bool,
    }

    impl Record {
        fn new(name: &str, count: i64, active: bool) -> Self {
            Self { name: name.to_string(), count, active }
        }
    }

    impl Identifiable for Record {
        fn key(&self) -> String {
            self.name.to_string()
        }
    }

    #[tokio::test]
    async fn test_should_keep_duplicate_keys() {
        let repo = MemoryRepository::new("records");
        let _ = repo.create(&Record::new("a", 1, true)).await.expect("should create");
        let _ = repo.create(&Record::new("a", 2, true)).await.expect("should create");
        let loaded = repo.get("a").await.expect("should get");
        assert_eq!(1, loaded.count);
        assert_eq!(2, repo.query(&HashMap::new()).await.expect("should query").len());
    }

    #[tokio::test]
    async fn test_should_report_missing_key() {
        let repo: MemoryRepository<Record> = MemoryRepository::new("records");
        let err = repo.get("missing").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_should_update_first_only() {
        let repo = MemoryRepository::new("records");
        let _ = repo.create(&Record::new("a", 1, true)).await.expect("should create");
        let _ = repo.create(&Record::new("a", 2, true)).await.expect("should create");
        assert_eq!(1, repo.update("a", &Record::new("b", 9, false)).await.expect("should update"));
        assert_eq!(0, repo.update("zzz", &Record::new("c", 9, false)).await.expect("should update"));
        assert_eq!(9, repo.get("b").await.expect("should get").count);
        assert_eq!(2, repo.get("a").await.expect("should get").count);
    }

    #[tokio::test]
    async fn test_should_delete_all_matches() {
        let repo = MemoryRepository::new("records");
        let _ = repo.create(&Record::new("a", 1, true)).await.expect("should create");
        let _ = repo.create(&Record::new("b", 2, true)).await.expect("should create");
        let _ = repo.create(&Record::new("a", 3, true)).await.expect("should create");
        assert_eq!(2, repo.delete("a").await.expect("should delete"));
        let rest = repo.query(&HashMap::new()).await.expect("should query");
        assert_eq!(vec![Record::new("b", 2, true)], rest);
    }

    #[tokio::test]
    async fn test_should_query_by_fields() {
        let repo = MemoryRepository::new("records");
        let _ = repo.create(&Record::new("a", 1, true)).await.expect("should create");
        let _ = repo.create(&Record::new("b", 1, false)).await.expect("should create");
        let res = repo.query(&HashMap::from([
            ("count".to_string(), "1".to_string()),
            ("active".to_string(), "true".to_string())])).await.expect("should query");
        assert_eq!(vec![Record::new("a", 1, true)], res);
        let res = repo.query(&HashMap::from([("missing".to_string(), "x".to_string())])).await.expect("should query");
        assert!(res.is_empty());
    }

    #[tokio::test]
    async fn test_should_update_first_matching_filter() {
        let repo = MemoryRepository::new("records");
        let _ = repo.create(&Record::new("a", 1, false)).await.expect("should create");
        let _ = repo.create(&Record::new("a", 2, true)).await.expect("should create");
        assert!(repo.update_first(|r| r.name == "a" && r.active, |r| r.active = false).await);
        assert!(!repo.update_first(|r| r.active, |r| r.active = false).await);
        let res = repo.query(&HashMap::from([("active".to_string(), "false".to_string())])).await.expect("should query");
        assert_eq!(2, res.len());
    }
}

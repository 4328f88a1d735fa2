use serde::{Deserialize, Serialize};

// Identifiable defines the lookup key shared by stored records; keys are not unique
pub trait Identifiable : Sync + Send {
    fn key(&self) -> String;
}


// Configuration abstracts config options for a rental branch
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub branch_id: String,
    pub max_upload_bytes: usize,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.branch_id.as_str());
        assert_eq!(10 * 1024 * 1024, config.max_upload_bytes);
    }
}

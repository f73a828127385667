use std::collections::HashMap;
use std::sync::RwLock;

use crate::category::AssetCategory;
use crate::error::{AssetError, AssetResult};
use crate::name::generate_name;
use crate::traits::AssetStore;

/// In-memory asset store for tests and embedding.
#[derive(Default)]
pub struct InMemoryAssetStore {
    assets: RwLock<HashMap<(AssetCategory, String), Vec<u8>>>,
}

impl InMemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored assets across all categories.
    pub fn len(&self) -> usize {
        self.assets.read().expect("lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AssetStore for InMemoryAssetStore {
    fn store(
        &self,
        category: AssetCategory,
        bytes: &[u8],
        original_name: &str,
    ) -> AssetResult<String> {
        if bytes.is_empty() {
            return Err(AssetError::Empty);
        }
        let mut map = self.assets.write().expect("lock poisoned");
        let base = generate_name(original_name);
        for attempt in 0..16 {
            let name = if attempt == 0 {
                base.clone()
            } else {
                format!("{attempt}-{base}")
            };
            let key = (category, name.clone());
            if !map.contains_key(&key) {
                map.insert(key, bytes.to_vec());
                return Ok(name);
            }
        }
        Err(AssetError::NameExhausted(base))
    }

    fn delete(&self, category: AssetCategory, name: &str) -> AssetResult<bool> {
        let mut map = self.assets.write().expect("lock poisoned");
        Ok(map.remove(&(category, name.to_string())).is_some())
    }

    fn exists(&self, category: AssetCategory, name: &str) -> AssetResult<bool> {
        let map = self.assets.read().expect("lock poisoned");
        Ok(map.contains_key(&(category, name.to_string())))
    }

    fn read(&self, category: AssetCategory, name: &str) -> AssetResult<Option<Vec<u8>>> {
        let map = self.assets.read().expect("lock poisoned");
        Ok(map.get(&(category, name.to_string())).cloned())
    }
}

use crate::category::AssetCategory;
use crate::error::AssetResult;

/// Category-keyed binary asset store.
///
/// Implementations must generate collision-resistant names on `store` and
/// must treat deletion of a missing asset as a non-error (`Ok(false)`).
pub trait AssetStore: Send + Sync {
    /// Persist `bytes` under a freshly generated name in the category.
    ///
    /// Returns the generated name; the caller links it into a record only
    /// after this succeeds, so records never reference a missing asset.
    fn store(&self, category: AssetCategory, bytes: &[u8], original_name: &str)
        -> AssetResult<String>;

    /// Delete an asset by name. Returns `true` if it existed.
    ///
    /// A missing asset is `Ok(false)`, not an error.
    fn delete(&self, category: AssetCategory, name: &str) -> AssetResult<bool>;

    /// Whether the asset currently exists.
    fn exists(&self, category: AssetCategory, name: &str) -> AssetResult<bool>;

    /// Read an asset's bytes. `Ok(None)` if absent.
    fn read(&self, category: AssetCategory, name: &str) -> AssetResult<Option<Vec<u8>>>;

    /// Best-effort cleanup delete.
    ///
    /// The superseded-asset and delete-record paths call this: failure is
    /// logged and swallowed so the caller's primary operation is never
    /// blocked by cleanup.
    fn discard(&self, category: AssetCategory, name: &str) {
        match self.delete(category, name) {
            Ok(true) => tracing::debug!(%category, name, "discarded asset"),
            Ok(false) => tracing::debug!(%category, name, "asset already gone"),
            Err(err) => tracing::warn!(%category, name, %err, "failed to discard asset"),
        }
    }
}

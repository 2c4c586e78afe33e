use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::Document;

use crate::document::{encode, BlogDocument, BlogFields};
use crate::error::{StoreError, StoreResult};
use crate::mapper::{decode_document, encode_id, NativeId};
use crate::traits::BlogStore;

/// In-memory, HashMap-based blog store.
///
/// Records are kept as raw BSON documents, the way the database holds them,
/// so a record that does not have the blog shape fails to decode on read
/// exactly as it would against MongoDB. A read-only switch makes every write
/// fail, and a second switch does the same for reads.
pub struct InMemoryBlogStore {
    records: RwLock<HashMap<ObjectId, Document>>,
    read_only: AtomicBool,
    reads_failing: AtomicBool,
}

impl InMemoryBlogStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            read_only: AtomicBool::new(false),
            reads_failing: AtomicBool::new(false),
        }
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.records.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.read().expect("lock poisoned").is_empty()
    }

    /// Remove all records.
    pub fn clear(&self) {
        self.records.write().expect("lock poisoned").clear();
    }

    /// Make every subsequent write fail (or succeed again).
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }

    /// Make every subsequent read fail (or succeed again).
    pub fn set_reads_failing(&self, failing: bool) {
        self.reads_failing.store(failing, Ordering::SeqCst);
    }

    /// Store a raw record as-is, bypassing the blog shape. Assigns an `_id`
    /// when the record has none.
    pub fn insert_raw(&self, mut raw: Document) -> NativeId {
        let id = raw.get_object_id("_id").unwrap_or_else(|_| ObjectId::new());
        raw.insert("_id", id);
        self.records.write().expect("lock poisoned").insert(id, raw);
        id
    }

    /// The raw record stored under `id`, if any.
    pub fn raw(&self, id: &NativeId) -> Option<Document> {
        self.records.read().expect("lock poisoned").get(id).cloned()
    }

    fn check_writable(&self) -> StoreResult<()> {
        if self.read_only.load(Ordering::SeqCst) {
            return Err(StoreError::WriteFailure("store is read-only".into()));
        }
        Ok(())
    }
}

impl Default for InMemoryBlogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlogStore for InMemoryBlogStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn insert(&self, document: &BlogDocument) -> StoreResult<NativeId> {
        self.check_writable()?;
        let mut raw = encode(document).map_err(|e| StoreError::WriteFailure(e.to_string()))?;
        let id = document.id.unwrap_or_else(ObjectId::new);
        raw.insert("_id", id);
        let mut map = self.records.write().expect("lock poisoned");
        if map.contains_key(&id) {
            return Err(StoreError::WriteFailure(format!(
                "duplicate key: {}",
                encode_id(&id)
            )));
        }
        map.insert(id, raw);
        Ok(id)
    }

    async fn find_by_id(&self, id: &NativeId) -> StoreResult<BlogDocument> {
        if self.reads_failing.load(Ordering::SeqCst) {
            return Err(StoreError::ReadFailure("store is unavailable for reads".into()));
        }
        let raw = self
            .records
            .read()
            .expect("lock poisoned")
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(encode_id(id)))?;
        decode_document(raw, id)
    }

    async fn update_by_id(&self, id: &NativeId, fields: &BlogFields) -> StoreResult<()> {
        self.check_writable()?;
        let set = encode(fields).map_err(|e| StoreError::WriteFailure(e.to_string()))?;
        let mut map = self.records.write().expect("lock poisoned");
        let record = map
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(encode_id(id)))?;
        for (key, value) in set {
            record.insert(key, value);
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: &NativeId) -> StoreResult<()> {
        self.check_writable()?;
        let mut map = self.records.write().expect("lock poisoned");
        match map.remove(id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(encode_id(id))),
        }
    }
}

impl std::fmt::Debug for InMemoryBlogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryBlogStore")
            .field("record_count", &self.len())
            .field("read_only", &self.read_only.load(Ordering::SeqCst))
            .field("reads_failing", &self.reads_failing.load(Ordering::SeqCst))
            .finish()
    }
}

//! In-memory hierarchy store using dashmap.
//!
//! Used by the `memory` store provider and by tests. It counts handle
//! checkouts and operations so callers can assert how much of the store a
//! request actually touched.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use tracing::debug;

use notehub_core::error::AppError;
use notehub_core::result::AppResult;
use notehub_core::types::{DocumentId, FolderId, UserId};
use notehub_entity::document::{Document, DocumentPatch, DocumentSummary, NewDocument};
use notehub_entity::folder::{Folder, NewFolder};

use crate::store::{HierarchyStore, StoreHandle, StoreLease};

/// A stored record and its insertion sequence number.
#[derive(Debug, Clone)]
struct Row<T> {
    seq: u64,
    value: T,
}

#[derive(Debug, Default)]
struct Inner {
    folders: DashMap<FolderId, Row<Folder>>,
    documents: DashMap<DocumentId, Row<Document>>,
    sequence: AtomicU64,
    unavailable: AtomicBool,
    acquisitions: AtomicU64,
    live_handles: AtomicU64,
    reads: AtomicU64,
    writes: AtomicU64,
}

impl Inner {
    fn next_seq(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::SeqCst)
    }
}

/// Snapshot of store usage counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreStats {
    /// Handles checked out since creation.
    pub acquisitions: u64,
    /// Handles currently checked out.
    pub live_handles: u64,
    /// Read operations performed.
    pub reads: u64,
    /// Write operations performed.
    pub writes: u64,
}

/// Hierarchy store kept entirely in process memory.
///
/// Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryHierarchyStore {
    inner: Arc<Inner>,
}

impl MemoryHierarchyStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current usage counters.
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            acquisitions: self.inner.acquisitions.load(Ordering::SeqCst),
            live_handles: self.inner.live_handles.load(Ordering::SeqCst),
            reads: self.inner.reads.load(Ordering::SeqCst),
            writes: self.inner.writes.load(Ordering::SeqCst),
        }
    }

    /// Simulate an outage: while set, `acquire` fails with `StoreUnavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.inner.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of folders across all owners.
    pub fn folder_count(&self) -> usize {
        self.inner.folders.len()
    }

    /// Insert a document whose folder may not exist.
    ///
    /// Only reachable through corrupted data in a real database; exposed so
    /// the dangling-reference path can be exercised.
    pub fn insert_orphan_document(&self, folder_id: FolderId, title: &str) -> Document {
        let now = Utc::now();
        let document = Document {
            id: DocumentId::new(),
            folder_id,
            title: title.to_string(),
            content: serde_json::Value::Object(Default::default()),
            created_at: now,
            updated_at: now,
        };
        self.inner.documents.insert(
            document.id,
            Row {
                seq: self.inner.next_seq(),
                value: document.clone(),
            },
        );
        document
    }
}

#[async_trait]
impl HierarchyStore for MemoryHierarchyStore {
    async fn acquire(&self) -> AppResult<StoreLease> {
        if self.inner.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::store_unavailable("In-memory store is offline"));
        }
        self.inner.acquisitions.fetch_add(1, Ordering::SeqCst);
        self.inner.live_handles.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MemoryStoreHandle {
            inner: Arc::clone(&self.inner),
        }))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(!self.inner.unavailable.load(Ordering::SeqCst))
    }
}

/// A checked-out handle on the in-memory store.
#[derive(Debug)]
pub struct MemoryStoreHandle {
    inner: Arc<Inner>,
}

impl MemoryStoreHandle {
    fn read(&self) {
        self.inner.reads.fetch_add(1, Ordering::SeqCst);
    }

    fn write(&self) {
        self.inner.writes.fetch_add(1, Ordering::SeqCst);
    }
}

impl Drop for MemoryStoreHandle {
    fn drop(&mut self) {
        self.inner.live_handles.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl StoreHandle for MemoryStoreHandle {
    async fn list_folders_by_owner(&mut self, owner_id: UserId) -> AppResult<Vec<Folder>> {
        self.read();
        let mut rows: Vec<(u64, Folder)> = self
            .inner
            .folders
            .iter()
            .filter(|entry| entry.value.owner_id == owner_id)
            .map(|entry| (entry.seq, entry.value.clone()))
            .collect();
        rows.sort_by_key(|(seq, _)| *seq);
        Ok(rows.into_iter().map(|(_, folder)| folder).collect())
    }

    async fn get_folder(&mut self, folder_id: FolderId) -> AppResult<Folder> {
        self.read();
        self.inner
            .folders
            .get(&folder_id)
            .map(|row| row.value.clone())
            .ok_or_else(|| AppError::not_found(format!("Folder {folder_id} not found")))
    }

    async fn create_folder(&mut self, owner_id: UserId, name: &str) -> AppResult<Folder> {
        let data = NewFolder::new(owner_id, name)?;
        self.write();
        let folder = Folder {
            id: FolderId::new(),
            owner_id: data.owner_id,
            name: data.name,
            created_at: Utc::now(),
        };
        self.inner.folders.insert(
            folder.id,
            Row {
                seq: self.inner.next_seq(),
                value: folder.clone(),
            },
        );
        debug!(folder_id = %folder.id, "Stored folder");
        Ok(folder)
    }

    async fn list_documents_by_folder(
        &mut self,
        folder_id: FolderId,
    ) -> AppResult<Vec<DocumentSummary>> {
        self.read();
        let mut rows: Vec<(u64, DocumentSummary)> = self
            .inner
            .documents
            .iter()
            .filter(|entry| entry.value.folder_id == folder_id)
            .map(|entry| (entry.seq, entry.value.summary()))
            .collect();
        rows.sort_by_key(|(seq, _)| *seq);
        Ok(rows.into_iter().map(|(_, summary)| summary).collect())
    }

    async fn get_document(&mut self, document_id: DocumentId) -> AppResult<Document> {
        self.read();
        self.inner
            .documents
            .get(&document_id)
            .map(|row| row.value.clone())
            .ok_or_else(|| AppError::not_found(format!("Document {document_id} not found")))
    }

    async fn create_document(
        &mut self,
        folder_id: FolderId,
        document: &NewDocument,
    ) -> AppResult<Document> {
        if !self.inner.folders.contains_key(&folder_id) {
            return Err(AppError::not_found(format!("Folder {folder_id} not found")));
        }
        self.write();
        let now = Utc::now();
        let created = Document {
            id: DocumentId::new(),
            folder_id,
            title: document.title.clone(),
            content: document.content.clone(),
            created_at: now,
            updated_at: now,
        };
        self.inner.documents.insert(
            created.id,
            Row {
                seq: self.inner.next_seq(),
                value: created.clone(),
            },
        );
        Ok(created)
    }

    async fn update_document(
        &mut self,
        document_id: DocumentId,
        patch: &DocumentPatch,
    ) -> AppResult<Document> {
        self.write();
        // The shard stays write-locked until `row` drops, so the merge is atomic.
        let mut row = self
            .inner
            .documents
            .get_mut(&document_id)
            .ok_or_else(|| AppError::not_found(format!("Document {document_id} not found")))?;

        let mut updated = row.value.clone();
        patch.apply(&mut updated, Utc::now())?;
        row.value = updated.clone();
        Ok(updated)
    }
}

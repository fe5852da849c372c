//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for creating test snapshot store directories
pub struct StoreBuilder {
    temp_dir: TempDir,
}

impl StoreBuilder {
    /// Create a new builder with an empty store directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the store directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a snapshot file named after the builder's run id
    pub fn with_snapshot(self, snapshot: SnapshotBuilder) -> Self {
        let path = self.temp_dir.path().join(format!("{}.json", snapshot.id));
        fs::write(path, snapshot.to_json()).expect("Failed to write snapshot");
        self
    }

    /// Add an arbitrary file with the given name and content
    pub fn with_file(self, name: &str, content: &str) -> Self {
        fs::write(self.temp_dir.path().join(name), content).expect("Failed to write file");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for snapshot file contents
pub struct SnapshotBuilder {
    id: String,
    reported_at: String,
    added: Vec<String>,
    removed: Vec<String>,
    updated: Vec<String>,
    moved: Vec<String>,
    copied: Vec<String>,
    restored: Vec<String>,
    timings_nanos: [u64; 6],
}

impl SnapshotBuilder {
    /// Create a snapshot for `id` with no changes and zero timings
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            reported_at: "2023-01-01 00:00".to_string(),
            added: Vec::new(),
            removed: Vec::new(),
            updated: Vec::new(),
            moved: Vec::new(),
            copied: Vec::new(),
            restored: Vec::new(),
            timings_nanos: [0; 6],
        }
    }

    /// Set the producer's own timestamp string
    pub fn reported_at(mut self, reported_at: &str) -> Self {
        self.reported_at = reported_at.to_string();
        self
    }

    /// Add `n` generated added paths
    pub fn added(mut self, n: usize) -> Self {
        self.added = generated_paths("added", n);
        self
    }

    /// Add `n` generated removed paths
    pub fn removed(mut self, n: usize) -> Self {
        self.removed = generated_paths("removed", n);
        self
    }

    /// Set the updated paths explicitly
    pub fn updated_paths(mut self, paths: &[&str]) -> Self {
        self.updated = paths.iter().map(|p| p.to_string()).collect();
        self
    }

    /// Add `n` generated moved paths
    pub fn moved(mut self, n: usize) -> Self {
        self.moved = generated_paths("moved", n);
        self
    }

    /// Add `n` generated copied paths
    pub fn copied(mut self, n: usize) -> Self {
        self.copied = generated_paths("copied", n);
        self
    }

    /// Add `n` generated restored paths
    pub fn restored(mut self, n: usize) -> Self {
        self.restored = generated_paths("restored", n);
        self
    }

    /// Set step durations in seconds: touch, diff, sync, scrub, smart, total
    pub fn timings_secs(mut self, secs: [u64; 6]) -> Self {
        self.timings_nanos = secs.map(|s| s * 1_000_000_000);
        self
    }

    /// Convert to the JSON document the maintenance tool writes
    pub fn to_value(&self) -> Value {
        let [touch, diff, sync, scrub, smart, total] = self.timings_nanos;
        json!({
            "timestamp": self.reported_at,
            "result": {
                "added": self.added,
                "removed": self.removed,
                "updated": self.updated,
                "moved": self.moved,
                "copied": self.copied,
                "restored": self.restored,
            },
            "timings": {
                "touch": touch,
                "diff": diff,
                "sync": sync,
                "scrub": scrub,
                "smart": smart,
                "total": total,
            },
            "error": null,
        })
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }
}

fn generated_paths(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("/mnt/disk1/{}/file{}.bin", prefix, i)).collect()
}

/// Store from the reference scenario: one run with 3 added and 1 removed
/// file, followed by a run without changes
pub fn scenario_a_store() -> TempDir {
    StoreBuilder::new()
        .with_snapshot(SnapshotBuilder::new("2023-01-01T00:00:00Z").added(3).removed(1))
        .with_snapshot(SnapshotBuilder::new("2023-01-02T00:00:00Z"))
        .build()
}

/// Helper to create a store with several realistic runs
pub fn realistic_store() -> TempDir {
    StoreBuilder::new()
        .with_snapshot(
            SnapshotBuilder::new("2024-05-01T03:00:00Z")
                .reported_at("2024-05-01 03:00")
                .added(12)
                .updated_paths(&["/mnt/disk2/photos/2024/img_0001.jpg"])
                .timings_secs([5, 40, 1800, 3600, 2, 5447]),
        )
        .with_snapshot(
            SnapshotBuilder::new("2024-05-02T03:00:00Z")
                .reported_at("2024-05-02 03:00")
                .removed(2)
                .moved(1)
                .timings_secs([4, 35, 60, 3500, 2, 3601]),
        )
        .with_snapshot(
            SnapshotBuilder::new("2024-05-03T03:00:00Z")
                .reported_at("2024-05-03 03:00")
                .copied(3)
                .restored(1)
                .timings_secs([4, 30, 120, 0, 2, 156]),
        )
        .with_file("snapraid.log", "not a snapshot")
        .build()
}

use crate::{Pattern, Point, Stroke};
use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Snapshot key the GUI saves and loads under
pub const DESIGN_KEY: &str = "design";

/// Store manifest containing metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub version: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl Manifest {
    /// Create a new manifest
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            version: "0.1.0".to_string(),
            created: now,
            modified: now,
        }
    }

    /// Update the modified timestamp
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }

    /// Save manifest to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create manifest file: {}", path.display()))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .with_context(|| format!("Failed to write manifest to: {}", path.display()))?;
        Ok(())
    }

    /// Load manifest from file
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open manifest file: {}", path.display()))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse manifest from: {}", path.display()))
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self::new()
    }
}

/// The exact wire shape of a saved design: the point slot sequence
/// (tombstones as `null`, preserving indices) and the stroke sequence.
/// Interaction state is never part of it.
#[derive(Debug, Serialize, Deserialize)]
pub struct PatternBlob {
    points: Vec<Option<Point>>,
    #[serde(default)]
    strokes: Vec<Stroke>,
}

impl PatternBlob {
    /// Capture a pattern
    pub fn from_pattern(pattern: &Pattern) -> Self {
        Self {
            points: pattern.slots().to_vec(),
            strokes: pattern.strokes().to_vec(),
        }
    }

    /// Rebuild the pattern, rejecting blobs whose strokes reference
    /// out-of-range or tombstoned slots, or whose stored degrees disagree
    /// with the stroke list. The editor never writes such a blob; this
    /// guards hand-edited or foreign files.
    pub fn into_pattern(self) -> Result<Pattern> {
        let pattern = Pattern::from_parts(self.points, self.strokes);
        pattern
            .validate_references()
            .context("saved design has dangling stroke references")?;
        if !pattern.degrees_consistent() {
            return Err(anyhow!("saved design has inconsistent point degrees"));
        }
        Ok(pattern)
    }
}

/// Raw parse target used to distinguish "no saved data" from real blobs:
/// a JSON object without a `points` field counts as absent.
#[derive(Debug, Deserialize)]
struct RawBlob {
    points: Option<Vec<Option<Point>>>,
    #[serde(default)]
    strokes: Vec<Stroke>,
}

/// Directory-rooted key/value store for design snapshots.
///
/// Each key maps to `<root>/<key>.json`; a `manifest.json` beside them
/// tracks creation and modification times.
pub struct SnapshotStore {
    root_dir: PathBuf,
}

impl SnapshotStore {
    /// Open a store at the given directory, creating it (and an initial
    /// manifest) if needed
    pub fn open(path: &Path) -> Result<Self> {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create store directory: {}", path.display()))?;

        let manifest_path = path.join("manifest.json");
        if !manifest_path.exists() {
            Manifest::new().save(&manifest_path)?;
        }

        Ok(Self {
            root_dir: path.to_path_buf(),
        })
    }

    /// Get the root directory
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Get path to manifest.json
    pub fn manifest_path(&self) -> PathBuf {
        self.root_dir.join("manifest.json")
    }

    /// Get path to a snapshot blob
    pub fn blob_path(&self, key: &str) -> PathBuf {
        self.root_dir.join(format!("{}.json", key))
    }

    /// Load the manifest
    pub fn load_manifest(&self) -> Result<Manifest> {
        Manifest::load(&self.manifest_path())
    }

    /// Serialize a pattern under the given key. Succeeds for an empty
    /// pattern too; the caller is expected to surface its own confirmation.
    pub fn save(&self, key: &str, pattern: &Pattern) -> Result<()> {
        let blob_path = self.blob_path(key);
        let blob = PatternBlob::from_pattern(pattern);

        let file = File::create(&blob_path)
            .with_context(|| format!("Failed to create snapshot: {}", blob_path.display()))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &blob)
            .with_context(|| format!("Failed to write snapshot: {}", blob_path.display()))?;

        let mut manifest = self.load_manifest().unwrap_or_default();
        manifest.touch();
        manifest.save(&self.manifest_path())?;

        Ok(())
    }

    /// Read the snapshot stored under the given key.
    ///
    /// `Ok(None)` means "no saved data": the file is absent, not valid
    /// JSON, or has no `points` field. The caller leaves its current graph
    /// untouched in that case. A blob that parses but references missing
    /// points is rejected with an error, never partially applied.
    pub fn load(&self, key: &str) -> Result<Option<Pattern>> {
        let blob_path = self.blob_path(key);

        let bytes = match fs::read(&blob_path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read snapshot: {}", blob_path.display())
                })
            }
        };

        let raw: RawBlob = match serde_json::from_slice(&bytes) {
            Ok(raw) => raw,
            Err(_) => return Ok(None),
        };
        let Some(points) = raw.points else {
            return Ok(None);
        };

        let blob = PatternBlob {
            points,
            strokes: raw.strokes,
        };
        blob.into_pattern()
            .with_context(|| format!("Rejected snapshot: {}", blob_path.display()))
            .map(Some)
    }
}

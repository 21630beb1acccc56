//! In-memory diagram document persisted as JSON.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

use super::{DiagramHost, Geometry, HostMutationError, NodeId, Viewport};

const MIN_SCALE: f64 = 0.25;
const MAX_SCALE: f64 = 4.0;

/// Errors that can occur when loading or saving a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to access diagram '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse diagram '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A diagram node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    pub geometry: Geometry,
    pub style: String,
}

/// Diagram model plus the editor state around it.
///
/// `revision` advances once per outermost `end_update` that saw changes.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    nodes: Vec<Node>,
    #[serde(default)]
    viewport: Viewport,
    #[serde(skip)]
    selection: Vec<NodeId>,
    #[serde(skip)]
    update_depth: usize,
    #[serde(skip)]
    pending_changes: usize,
    #[serde(skip)]
    revision: u64,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a document. A missing file yields an empty document.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let content = fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| DocumentError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), DocumentError> {
        let content = serde_json::to_string_pretty(self).map_err(|source| DocumentError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, content).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), nodes = self.nodes.len(), "Diagram saved");
        Ok(())
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|node| &node.id == id)
    }

    pub fn selection(&self) -> &[NodeId] {
        &self.selection
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn update_depth(&self) -> usize {
        self.update_depth
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Resize the visible area, keeping scroll and zoom.
    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        self.viewport.width = width;
        self.viewport.height = height;
    }

    pub fn scroll_by(&mut self, dx: f64, dy: f64) {
        self.viewport.scroll_x = (self.viewport.scroll_x + dx).max(0.0);
        self.viewport.scroll_y = (self.viewport.scroll_y + dy).max(0.0);
    }

    pub fn zoom_by(&mut self, factor: f64) {
        self.viewport.scale = (self.viewport.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
    }
}

impl DiagramHost for Document {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn begin_update(&mut self) {
        self.update_depth += 1;
    }

    fn end_update(&mut self) {
        if self.update_depth == 0 {
            tracing::warn!("end_update without matching begin_update");
            return;
        }
        self.update_depth -= 1;
        if self.update_depth == 0 && self.pending_changes > 0 {
            self.revision += 1;
            self.pending_changes = 0;
        }
    }

    fn insert_image_node(
        &mut self,
        label: &str,
        geometry: Geometry,
        style: &str,
    ) -> Result<NodeId, HostMutationError> {
        if self.update_depth == 0 {
            return Err(HostMutationError::NotInUpdate);
        }
        if !geometry.is_valid() {
            return Err(HostMutationError::InvalidGeometry { geometry });
        }
        let id = NodeId::new(Uuid::new_v4().to_string());
        self.nodes.push(Node {
            id: id.clone(),
            label: label.to_string(),
            geometry,
            style: style.to_string(),
        });
        self.pending_changes += 1;
        Ok(id)
    }

    fn set_selection(&mut self, node: &NodeId) -> Result<(), HostMutationError> {
        if self.node(node).is_none() {
            return Err(HostMutationError::UnknownNode { id: node.clone() });
        }
        self.selection = vec![node.clone()];
        Ok(())
    }
}

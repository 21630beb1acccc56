//! Host document API the pictogram inserter works against.
//!
//! The host owns the diagram model. Mutations are bracketed by
//! `begin_update`/`end_update` so one user action is one revision.

mod document;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub use document::{Document, DocumentError, Node};

/// Visible part of the diagram, in screen units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub scroll_x: f64,
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
    /// Zoom factor; 1.0 means one screen unit per diagram unit.
    pub scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scroll_x: 0.0,
            scroll_y: 0.0,
            width: 800.0,
            height: 600.0,
            scale: 1.0,
        }
    }
}

impl Viewport {
    /// Center of the visible area in diagram coordinates.
    pub fn logical_center(&self) -> (f64, f64) {
        (
            (self.scroll_x + self.width / 2.0) / self.scale,
            (self.scroll_y + self.height / 2.0) / self.scale,
        )
    }
}

/// Position and size of a node in diagram coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Geometry {
    /// Geometry of a `width`×`height` box whose center is `(cx, cy)`.
    pub fn centered_at(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self {
            x: cx - width / 2.0,
            y: cy - height / 2.0,
            width,
            height,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.0}, {:.0}) {:.0}×{:.0}",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Handle of a node created in the host document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Failure reported by the host while mutating the document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HostMutationError {
    #[error("Invalid node geometry {geometry}")]
    InvalidGeometry { geometry: Geometry },

    #[error("Document mutation outside of an update")]
    NotInUpdate,

    #[error("Unknown node '{id}'")]
    UnknownNode { id: NodeId },

    #[error("Host error: {0}")]
    Other(String),
}

/// Document operations the inserter needs from its host.
pub trait DiagramHost {
    fn viewport(&self) -> Viewport;

    /// Open an edit transaction. Transactions nest.
    fn begin_update(&mut self);

    /// Close the innermost edit transaction.
    fn end_update(&mut self);

    /// Create an image node carrying `label` as caption.
    fn insert_image_node(
        &mut self,
        label: &str,
        geometry: Geometry,
        style: &str,
    ) -> Result<NodeId, HostMutationError>;

    /// Make `node` the only selected node.
    fn set_selection(&mut self, node: &NodeId) -> Result<(), HostMutationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logical_center_accounts_for_scroll_and_scale() {
        let viewport = Viewport {
            scroll_x: 200.0,
            scroll_y: 100.0,
            width: 800.0,
            height: 600.0,
            scale: 2.0,
        };
        assert_eq!(viewport.logical_center(), (300.0, 200.0));
    }

    #[test]
    fn centered_geometry() {
        let geometry = Geometry::centered_at(400.0, 300.0, 120.0, 120.0);
        assert_eq!(geometry.x, 340.0);
        assert_eq!(geometry.y, 240.0);
        assert!(geometry.is_valid());
    }

    #[test]
    fn non_finite_geometry_is_invalid() {
        assert!(!Geometry::centered_at(f64::INFINITY, 0.0, 120.0, 120.0).is_valid());
        assert!(!Geometry::centered_at(0.0, 0.0, 0.0, 120.0).is_valid());
    }
}

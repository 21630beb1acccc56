//! Insertion of a selected pictogram into the host diagram.

use scopeguard::guard;

use crate::catalog::{CatalogEndpoints, PictogramId, PictogramRecord};
use crate::host::{DiagramHost, Geometry, HostMutationError, NodeId, Viewport};
use crate::session::SearchSession;

/// Width and height of an inserted pictogram node.
pub const IMAGE_SIZE: f64 = 120.0;

/// Everything needed to insert one pictogram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertionRequest {
    pub id: PictogramId,
    /// Caption of the node: keyword in the session language or the identifier.
    pub name: String,
    pub image_url: String,
}

impl InsertionRequest {
    pub fn for_record(
        record: &PictogramRecord,
        session: &SearchSession,
        endpoints: &CatalogEndpoints,
    ) -> Self {
        Self {
            id: record.id.clone(),
            name: session.resolve_label(record).to_string(),
            image_url: endpoints.image_url(&record.id),
        }
    }
}

/// Style string of an image node showing `image_url` with its caption on top.
pub fn image_style(image_url: &str) -> String {
    format!(
        "shape=image;image={};verticalAlign=bottom;verticalLabelPosition=top;",
        image_url
    )
}

/// Node geometry centered on the visible part of the diagram.
pub fn insertion_geometry(viewport: &Viewport) -> Geometry {
    let (cx, cy) = viewport.logical_center();
    Geometry::centered_at(cx, cy, IMAGE_SIZE, IMAGE_SIZE)
}

/// Insert `request` as one image node and select it, in a single update.
///
/// The update is closed on every path, including when the host fails.
pub fn insert_pictogram<H>(host: &mut H, request: &InsertionRequest) -> Result<NodeId, HostMutationError>
where
    H: DiagramHost + ?Sized,
{
    let geometry = insertion_geometry(&host.viewport());
    let style = image_style(&request.image_url);

    host.begin_update();
    let mut host = guard(host, |host| host.end_update());

    let node = host.insert_image_node(&request.name, geometry, &style)?;
    host.set_selection(&node)?;

    tracing::info!(
        pictogram = %request.id,
        node = %node,
        geometry = %geometry,
        "Pictogram inserted"
    );
    Ok(node)
}

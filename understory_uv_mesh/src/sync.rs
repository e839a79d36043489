// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

use tracing::{debug, trace, warn};

use crate::{LoadError, TextureCache, UvBuffer, UvDocument, UvMesh};

/// Reads the UV coordinates and faces of `element`.
///
/// # Errors
///
/// - [`LoadError::NoUvData`] if the element has no UV set.
/// - [`LoadError::UnsupportedTopology`] if it is neither a triangle list nor a strip.
/// - [`LoadError::IndexOutOfRange`] if a face refers to a missing UV point.
pub fn load_mesh<D: UvDocument>(doc: &D, element: &D::Element) -> Result<UvMesh, LoadError> {
    let result = read_mesh(doc, element);
    match &result {
        Ok(mesh) => debug!(
            points = mesh.buffer().len(),
            faces = mesh.faces().len(),
            "loaded uv mesh"
        ),
        Err(err) => warn!(%err, "cannot load uv mesh"),
    }
    result
}

fn read_mesh<D: UvDocument>(doc: &D, element: &D::Element) -> Result<UvMesh, LoadError> {
    let coords = doc.uv_set(element).ok_or(LoadError::NoUvData)?;
    let topology = doc.topology(element).ok_or(LoadError::UnsupportedTopology)?;
    UvMesh::new(UvBuffer::new(coords), topology.faces())
}

/// Resolves the file of the first source texture bound to `element`.
///
/// The stored name is looked up through [`TextureCache::find`] relative to
/// the document's folder. The returned path may still fail to bind.
///
/// # Errors
///
/// [`LoadError::NoTexture`] if no source texture is bound.
pub fn resolve_texture<D, C>(doc: &D, element: &D::Element, cache: &C) -> Result<PathBuf, LoadError>
where
    D: UvDocument,
    C: TextureCache + ?Sized,
{
    let Some(file) = doc.texture_file_name(element) else {
        debug!("element has no source texture");
        return Err(LoadError::NoTexture);
    };
    let path = cache.find(&file, &doc.folder());
    debug!(file = %file, path = %path.display(), "resolved texture");
    Ok(path)
}

/// Loads the mesh of `element` and resolves its texture in one go.
///
/// Callers that want to keep editing a texture-less element should use
/// [`load_mesh`] and [`resolve_texture`] separately.
///
/// # Errors
///
/// Any error of [`load_mesh`] or [`resolve_texture`], in that order.
pub fn load<D, C>(doc: &D, element: &D::Element, cache: &C) -> Result<(UvMesh, PathBuf), LoadError>
where
    D: UvDocument,
    C: TextureCache + ?Sized,
{
    let mesh = load_mesh(doc, element)?;
    let texture = resolve_texture(doc, element, cache)?;
    Ok((mesh, texture))
}

/// Overwrites the UV set of `element` with `buffer`, same length and order.
pub fn write_back<D: UvDocument>(doc: &mut D, element: &D::Element, buffer: &UvBuffer) {
    trace!(points = buffer.len(), "writing uv set back");
    doc.set_uv_set(element, buffer.as_slice());
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::{Path, PathBuf};

use kurbo::Point;

use crate::Topology;

/// The slice of a document model that UV editing needs.
///
/// Documents keep their own schema; this trait only asks for the first UV
/// set of an element, its triangle topology, a way to write the UV set back,
/// and the file name of the first source texture bound to it.
pub trait UvDocument {
    /// Reference to an element (a shape) inside the document.
    type Element: Clone;

    /// The element's first UV set, or `None` if it has none.
    fn uv_set(&self, element: &Self::Element) -> Option<Vec<Point>>;

    /// The element's triangle topology, or `None` if it is neither a
    /// triangle list nor a triangle strip.
    fn topology(&self, element: &Self::Element) -> Option<Topology>;

    /// Replaces the element's first UV set.
    ///
    /// Callers always pass as many points as [`UvDocument::uv_set`] returned.
    fn set_uv_set(&mut self, element: &Self::Element, coords: &[Point]);

    /// File name of the first source texture reachable from the element's
    /// texturing property, as stored in the document.
    fn texture_file_name(&self, element: &Self::Element) -> Option<String>;

    /// Folder the document was loaded from, used to resolve relative texture names.
    fn folder(&self) -> PathBuf;
}

/// The texture cache service used to preview textures behind the UVs.
///
/// Decoding and GPU upload are the cache's business; the editor only asks
/// it to resolve names and bind files, and reacts to failure.
pub trait TextureCache {
    /// Binds the texture at `path`, returning its mipmap level count.
    ///
    /// `0` means the texture could not be loaded.
    fn bind(&mut self, path: &Path) -> u32;

    /// Resolves a texture file name as stored in a document to a path.
    ///
    /// The default tries, in order: the name itself if it is absolute, the
    /// name under `folder`, and the bare file name under `folder`. If none exists the
    /// name is returned unchanged so that the cache can report the failure.
    fn find(&self, file: &str, folder: &Path) -> PathBuf {
        // Names written on another platform may use either separator.
        let normalized = file.replace('\\', "/");
        let as_given = PathBuf::from(&normalized);
        if as_given.is_absolute() && as_given.exists() {
            return as_given;
        }
        let under_folder = folder.join(&normalized);
        if under_folder.exists() {
            return under_folder;
        }
        if let Some(name) = as_given.file_name() {
            let flat = folder.join(name);
            if flat.exists() {
                return flat;
            }
        }
        as_given
    }
}

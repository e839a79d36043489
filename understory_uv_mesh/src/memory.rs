// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory document made of linked blocks.
//!
//! [`MemoryDocument`] models the part of a scene file that UV editing
//! touches: shapes linked to their geometry data and to a list of property
//! blocks, texturing properties linking to source textures, and source
//! textures naming a file. It is useful for tests and for hosts that do not
//! have a document model of their own.

use std::path::PathBuf;

use kurbo::Point;

use crate::{Topology, UvDocument};

/// Index of a block inside a [`MemoryDocument`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockId(usize);

impl BlockId {
    /// Position of the block in the document.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One block of a [`MemoryDocument`].
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    /// A shape drawn as independent triangles.
    TriShape {
        /// Link to the geometry data block.
        data: Option<BlockId>,
        /// Links to property blocks.
        properties: Vec<BlockId>,
    },
    /// A shape drawn as triangle strips.
    TriStrips {
        /// Link to the geometry data block.
        data: Option<BlockId>,
        /// Links to property blocks.
        properties: Vec<BlockId>,
    },
    /// Geometry shared by shapes.
    GeometryData {
        /// UV sets; editing only touches the first.
        uv_sets: Vec<Vec<Point>>,
        /// Triangle list, used by [`Block::TriShape`].
        triangles: Vec<[u32; 3]>,
        /// Strip index lists, used by [`Block::TriStrips`]. `None` if absent.
        strips: Option<Vec<Vec<u32>>>,
    },
    /// A texturing property linking to its textures.
    TexturingProperty {
        /// Child links; only source textures among them are considered.
        children: Vec<BlockId>,
    },
    /// A texture stored in a file next to (or below) the document.
    SourceTexture {
        /// File name as stored in the document.
        file_name: String,
    },
    /// Any other block, by type name.
    Other(String),
}

/// A document held entirely in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    folder: PathBuf,
    blocks: Vec<Block>,
}

impl MemoryDocument {
    /// Creates an empty document rooted at `folder`.
    #[must_use]
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
            blocks: Vec::new(),
        }
    }

    /// Appends a block and returns its id.
    pub fn push(&mut self, block: Block) -> BlockId {
        self.blocks.push(block);
        BlockId(self.blocks.len() - 1)
    }

    /// Returns the block with id `id`.
    #[must_use]
    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.get(id.0)
    }

    /// Number of blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns `true` if the document has no blocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Adds a triangle-list shape with one UV set and returns the shape id.
    pub fn add_tri_shape(&mut self, uvs: Vec<Point>, triangles: Vec<[u32; 3]>) -> BlockId {
        let data = self.push(Block::GeometryData {
            uv_sets: vec![uvs],
            triangles,
            strips: None,
        });
        self.push(Block::TriShape {
            data: Some(data),
            properties: Vec::new(),
        })
    }

    /// Adds a triangle-strip shape with one UV set and returns the shape id.
    pub fn add_tri_strips(&mut self, uvs: Vec<Point>, strips: Vec<Vec<u32>>) -> BlockId {
        let data = self.push(Block::GeometryData {
            uv_sets: vec![uvs],
            triangles: Vec::new(),
            strips: Some(strips),
        });
        self.push(Block::TriStrips {
            data: Some(data),
            properties: Vec::new(),
        })
    }

    /// Links `property` to `shape`. Returns `false` if `shape` is not a shape.
    pub fn link_property(&mut self, shape: BlockId, property: BlockId) -> bool {
        match self.blocks.get_mut(shape.0) {
            Some(Block::TriShape { properties, .. } | Block::TriStrips { properties, .. }) => {
                properties.push(property);
                true
            }
            _ => false,
        }
    }

    /// Adds a texturing property with a single source texture to `shape`.
    ///
    /// Returns the id of the source texture block, or `None` if `shape` is
    /// not a shape.
    pub fn attach_texture(&mut self, shape: BlockId, file_name: impl Into<String>) -> Option<BlockId> {
        if !matches!(
            self.block(shape),
            Some(Block::TriShape { .. } | Block::TriStrips { .. })
        ) {
            return None;
        }
        let source = self.push(Block::SourceTexture {
            file_name: file_name.into(),
        });
        let property = self.push(Block::TexturingProperty {
            children: vec![source],
        });
        self.link_property(shape, property);
        Some(source)
    }

    fn shape_links(&self, shape: BlockId) -> Option<(Option<BlockId>, &[BlockId])> {
        match self.block(shape)? {
            Block::TriShape { data, properties } | Block::TriStrips { data, properties } => {
                Some((*data, properties))
            }
            _ => None,
        }
    }

    fn geometry(&self, shape: BlockId) -> Option<&Block> {
        let (data, _) = self.shape_links(shape)?;
        match self.block(data?)? {
            geometry @ Block::GeometryData { .. } => Some(geometry),
            _ => None,
        }
    }
}

impl UvDocument for MemoryDocument {
    type Element = BlockId;

    fn uv_set(&self, element: &BlockId) -> Option<Vec<Point>> {
        match self.geometry(*element)? {
            Block::GeometryData { uv_sets, .. } => uv_sets.first().cloned(),
            _ => None,
        }
    }

    fn topology(&self, element: &BlockId) -> Option<Topology> {
        let Some(Block::GeometryData {
            triangles, strips, ..
        }) = self.geometry(*element)
        else {
            return None;
        };
        match self.block(*element)? {
            Block::TriShape { .. } => Some(Topology::Triangles(triangles.clone())),
            Block::TriStrips { .. } => strips.clone().map(Topology::Strips),
            _ => None,
        }
    }

    fn set_uv_set(&mut self, element: &BlockId, coords: &[Point]) {
        let Some((Some(data), _)) = self.shape_links(*element) else {
            return;
        };
        if let Some(Block::GeometryData { uv_sets, .. }) = self.blocks.get_mut(data.0)
            && let Some(first) = uv_sets.first_mut()
        {
            first.clear();
            first.extend_from_slice(coords);
        }
    }

    fn texture_file_name(&self, element: &BlockId) -> Option<String> {
        let (_, properties) = self.shape_links(*element)?;
        // First texturing property that links a source texture wins.
        properties.iter().find_map(|&prop| match self.block(prop)? {
            Block::TexturingProperty { children } => {
                children.iter().find_map(|&child| match self.block(child)? {
                    Block::SourceTexture { file_name } => Some(file_name.clone()),
                    _ => None,
                })
            }
            _ => None,
        })
    }

    fn folder(&self) -> PathBuf {
        self.folder.clone()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{Block, MemoryDocument};
    use crate::{Topology, UvDocument};

    #[test]
    fn texture_walk_skips_unrelated_properties() {
        let mut doc = MemoryDocument::new("/scene");
        let shape = doc.add_tri_shape(vec![Point::ZERO; 3], vec![[0, 1, 2]]);

        let material = doc.push(Block::Other("MaterialProperty".into()));
        let empty = doc.push(Block::TexturingProperty {
            children: vec![material],
        });
        doc.link_property(shape, material);
        doc.link_property(shape, empty);
        assert_eq!(doc.texture_file_name(&shape), None);

        doc.attach_texture(shape, "textures/wood.dds");
        doc.attach_texture(shape, "textures/ignored.dds");
        assert_eq!(
            doc.texture_file_name(&shape).as_deref(),
            Some("textures/wood.dds")
        );
    }

    #[test]
    fn strips_without_index_lists_are_unsupported() {
        let mut doc = MemoryDocument::new("");
        let data = doc.push(Block::GeometryData {
            uv_sets: vec![vec![Point::ZERO]],
            triangles: Vec::new(),
            strips: None,
        });
        let strips = doc.push(Block::TriStrips {
            data: Some(data),
            properties: Vec::new(),
        });
        assert_eq!(doc.topology(&strips), None);
        assert_eq!(doc.uv_set(&strips), Some(vec![Point::ZERO]));
    }

    #[test]
    fn non_shapes_expose_nothing() {
        let mut doc = MemoryDocument::new("");
        let other = doc.push(Block::Other("Node".into()));
        assert_eq!(doc.uv_set(&other), None);
        assert_eq!(doc.topology(&other), None);
        assert_eq!(doc.texture_file_name(&other), None);
        assert!(!doc.link_property(other, other));
        assert_eq!(doc.attach_texture(other, "x.dds"), None);
    }

    #[test]
    fn set_uv_set_replaces_the_first_set_only() {
        let mut doc = MemoryDocument::new("");
        let shape = doc.add_tri_shape(vec![Point::ZERO; 3], vec![[0, 1, 2]]);
        let moved = [Point::new(1.0, 0.0), Point::new(0.0, 1.0), Point::new(1.0, 1.0)];
        doc.set_uv_set(&shape, &moved);
        assert_eq!(doc.uv_set(&shape).as_deref(), Some(&moved[..]));
        assert_eq!(
            doc.topology(&shape),
            Some(Topology::Triangles(vec![[0, 1, 2]]))
        );
    }
}

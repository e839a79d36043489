// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_uv_mesh --heading-base-level=0

//! Understory UV Mesh: UV buffers and their round trip through a document.
//!
//! A UV editor binds to one element of an external document, copies its UV
//! coordinates and triangle topology into memory, lets the user move points,
//! and writes the coordinates back. This crate owns that data and the sync:
//!
//! - [`UvDocument`] is the narrow view of the document model the editor
//!   needs, and [`TextureCache`] the texture service it previews with.
//! - [`load_mesh`] builds a [`UvMesh`] (a [`UvBuffer`] plus [`Face`]s) from
//!   a triangle list or from triangle strips ([`Topology`]).
//! - [`resolve_texture`] finds the file of the element's first source texture.
//! - [`UvBuffer::drag_point`] moves a point by a screen-space delta and
//!   [`write_back`] stores the buffer in the document again.
//!
//! [`MemoryDocument`](memory::MemoryDocument) is a small in-memory document
//! implementing [`UvDocument`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use understory_uv_mesh::memory::MemoryDocument;
//! use understory_uv_mesh::{UvDocument, load_mesh, write_back};
//!
//! let mut doc = MemoryDocument::new("/models");
//! let shape = doc.add_tri_shape(
//!     vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0)],
//!     vec![[0, 1, 2]],
//! );
//!
//! let mut mesh = load_mesh(&doc, &shape).unwrap();
//! assert_eq!(mesh.faces().len(), 1);
//!
//! // Drag the first point 64 pixels right at zoom 1.
//! mesh.buffer_mut().drag_point(0, Vec2::new(64.0, 0.0), 1.0 / 512.0);
//! write_back(&mut doc, &shape, mesh.buffer());
//! assert_eq!(doc.uv_set(&shape).unwrap()[0], Point::new(0.125, 0.0));
//! ```

mod buffer;
mod document;
mod error;
pub mod memory;
mod sync;
mod topology;

pub use buffer::{UvBuffer, UvMesh};
pub use document::{TextureCache, UvDocument};
pub use error::LoadError;
pub use sync::{load, load_mesh, resolve_texture, write_back};
pub use topology::{Face, Topology, strip_faces};

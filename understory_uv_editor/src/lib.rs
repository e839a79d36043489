// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_uv_editor --heading-base-level=0

//! Understory UV Editor: a headless UV editing viewport.
//!
//! [`UvEditor`] binds to one element of a [`UvDocument`], shows its texture
//! coordinates over the bound texture, and lets the user inspect and move
//! them:
//!
//! - Primary click picks the point or face under the pointer. Clicking again
//!   in place steps through everything stacked there.
//! - Primary drag moves the selected point and writes it back immediately.
//! - Auxiliary (middle) drag pans, secondary drag and the wheel zoom.
//!
//! The editor owns no window and no GPU state. The host forwards pointer,
//! wheel and resize events, and redraws from [`UvEditor::scene`] whenever an
//! event returns [`EventResult::Redraw`].
//!
//! ## Minimal example
//!
//! ```rust
//! use std::path::Path;
//!
//! use kurbo::{Point, Size};
//! use understory_uv_editor::pointer::{PointerButton, PointerButtons};
//! use understory_uv_editor::{Selection, UvEditor, UvEditorConfig};
//! use understory_uv_mesh::memory::MemoryDocument;
//! use understory_uv_mesh::{LoadError, TextureCache, UvDocument};
//!
//! struct NoTextures;
//!
//! impl TextureCache for NoTextures {
//!     fn bind(&mut self, _path: &Path) -> u32 {
//!         0
//!     }
//! }
//!
//! let mut doc = MemoryDocument::new("");
//! let shape = doc.add_tri_shape(
//!     vec![Point::new(0.25, 0.25), Point::new(0.75, 0.25), Point::new(0.75, 0.75)],
//!     vec![[0, 1, 2]],
//! );
//!
//! let config = UvEditorConfig { initial_zoom: 1.0, ..UvEditorConfig::default() };
//! let mut editor = UvEditor::with_config(Size::new(512.0, 512.0), NoTextures, config);
//!
//! // No source texture: reported, but the mesh is still editable.
//! assert_eq!(editor.bind(&doc, shape), Err(LoadError::NoTexture));
//!
//! // UV (0.25, 0.25) sits at pixel (128, 384) in a 512 px widget at zoom 1.
//! editor.pointer_down(Point::new(128.0, 384.0), PointerButton::Primary);
//! assert_eq!(editor.selection(), Selection::Point(0));
//!
//! editor.pointer_move(&mut doc, Point::new(192.0, 384.0), PointerButtons::PRIMARY);
//! assert_eq!(doc.uv_set(&shape).unwrap()[0], Point::new(0.375, 0.25));
//! ```

mod config;
mod editor;
pub mod pointer;
pub mod scene;
mod selection;

pub use config::{GridConfig, OverlayStyle, UvEditorConfig};
pub use editor::{EventResult, UvEditor};
pub use scene::UvScene;
pub use selection::{HighlightedPoints, Selection, SelectionState};

pub use understory_uv_mesh::{LoadError, TextureCache, UvDocument};

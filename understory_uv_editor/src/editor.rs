// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Point, Size};
use tracing::{debug, trace, warn};
use understory_uv_mesh::{LoadError, TextureCache, UvDocument, UvMesh, load_mesh, resolve_texture};
use understory_uv_pick::{PickNames, PickPass, PickResolver};
use understory_uv_view::{ViewportTransform, drag_zoom_factor, wheel_zoom_factor};

use crate::pointer::{PointerButton, PointerButtons, PointerTracker};
use crate::scene::{self, Drawn, TextureBinding, UvScene};
use crate::{Selection, SelectionState, UvEditorConfig};

/// Whether an event changed anything visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventResult {
    /// Nothing changed.
    Ignored,
    /// The host should schedule a redraw.
    Redraw,
}

impl EventResult {
    /// Returns `true` for [`EventResult::Redraw`].
    #[must_use]
    pub fn needs_redraw(self) -> bool {
        matches!(self, Self::Redraw)
    }
}

struct Binding<E> {
    element: E,
    mesh: UvMesh,
    texture: Option<TextureBinding>,
}

/// A headless UV editing viewport bound to one element of a document.
///
/// The host forwards widget events to the editor and redraws from
/// [`UvEditor::scene`] whenever an event returns [`EventResult::Redraw`].
/// The document is only borrowed for the duration of a call: immutably to
/// bind, mutably when a point drag is written back.
pub struct UvEditor<D: UvDocument, C: TextureCache> {
    config: UvEditorConfig,
    viewport: ViewportTransform,
    resolver: PickResolver,
    selection: SelectionState,
    pointer: PointerTracker,
    textures: C,
    binding: Option<Binding<D::Element>>,
}

impl<D: UvDocument, C: TextureCache> UvEditor<D, C> {
    /// Creates an unbound editor for a widget of `size` pixels.
    #[must_use]
    pub fn new(size: Size, textures: C) -> Self {
        Self::with_config(size, textures, UvEditorConfig::default())
    }

    /// Creates an unbound editor with explicit tunables.
    #[must_use]
    pub fn with_config(size: Size, textures: C, config: UvEditorConfig) -> Self {
        let mut viewport = ViewportTransform::new(size);
        viewport.set_zoom_limits(config.min_zoom, config.max_zoom);
        viewport.set_zoom(config.initial_zoom);
        Self {
            resolver: PickResolver::new(config.pick_tolerance, config.cycle_radius),
            config,
            viewport,
            selection: SelectionState::new(),
            pointer: PointerTracker::default(),
            textures,
            binding: None,
        }
    }

    /// Binds the editor to `element` of `doc`.
    ///
    /// The previous binding and the selection are discarded first. If the
    /// mesh loads but the element has no source texture, the mesh stays bound
    /// and can be edited; [`LoadError::NoTexture`] is still returned. A
    /// texture the cache fails to load is not an error: the view just has
    /// no background.
    ///
    /// # Errors
    ///
    /// Any [`LoadError`]. On every error except [`LoadError::NoTexture`] the
    /// editor is left unbound.
    pub fn bind(&mut self, doc: &D, element: D::Element) -> Result<(), LoadError> {
        self.unbind();
        let mesh = load_mesh(doc, &element)?;
        let resolved = resolve_texture(doc, &element, &self.textures);
        let texture = match &resolved {
            Ok(path) => match self.textures.bind(path) {
                0 => {
                    warn!(path = %path.display(), "texture failed to load");
                    None
                }
                mip_levels => Some(TextureBinding {
                    path: path.clone(),
                    mip_levels,
                }),
            },
            Err(_) => None,
        };
        debug!(
            points = mesh.buffer().len(),
            faces = mesh.faces().len(),
            textured = texture.is_some(),
            "bound uv editor"
        );
        self.binding = Some(Binding {
            element,
            mesh,
            texture,
        });
        resolved.map(drop)
    }

    /// Drops the bound mesh, texture and selection.
    ///
    /// The pointer anchor is forgotten too, so the next click starts a fresh
    /// cycle.
    pub fn unbind(&mut self) {
        if self.binding.take().is_some() {
            debug!("unbound uv editor");
        }
        self.selection.clear();
        self.pointer.reset();
    }

    /// Returns `true` if a mesh is bound.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    /// The bound mesh, if any.
    #[must_use]
    pub fn mesh(&self) -> Option<&UvMesh> {
        self.binding.as_ref().map(|b| &b.mesh)
    }

    /// The bound background texture, if any.
    #[must_use]
    pub fn texture(&self) -> Option<&TextureBinding> {
        self.binding.as_ref().and_then(|b| b.texture.as_ref())
    }

    /// UV coordinate under widget position `pos`.
    #[must_use]
    pub fn uv_at(&self, pos: Point) -> Point {
        scene::world_to_uv(self.viewport.screen_to_world(pos))
    }

    /// The current selection.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection.get()
    }

    /// The selection together with its revision counter.
    #[must_use]
    pub fn selection_state(&self) -> &SelectionState {
        &self.selection
    }

    /// The pan/zoom camera.
    #[must_use]
    pub fn viewport(&self) -> &ViewportTransform {
        &self.viewport
    }

    /// The texture cache.
    #[must_use]
    pub fn textures(&self) -> &C {
        &self.textures
    }

    /// The tunables the editor was created with.
    #[must_use]
    pub fn config(&self) -> &UvEditorConfig {
        &self.config
    }

    /// Handles a button press at widget position `pos`.
    ///
    /// Every press moves the pointer anchor used for drag deltas. Only the
    /// primary button advances click cycling: it picks the primitive under
    /// the pointer and replaces the selection with it.
    pub fn pointer_down(&mut self, pos: Point, button: PointerButton) -> EventResult {
        let travel = self.pointer.press(pos);
        if button != PointerButton::Primary {
            return EventResult::Ignored;
        }
        self.resolver.press(travel);
        let picked = self.pick(pos);
        trace!(?picked, cycle = self.resolver.cycle().count(), "pick");
        self.selection.set(picked);
        EventResult::Redraw
    }

    /// Handles a pointer move to `pos` while `buttons` are held.
    ///
    /// Exactly one held button is acted on: primary drags the selected point
    /// and writes it back to `doc`, auxiliary pans, secondary zooms.
    pub fn pointer_move(&mut self, doc: &mut D, pos: Point, buttons: PointerButtons) -> EventResult {
        let delta = self.pointer.delta(pos);
        if buttons == PointerButtons::PRIMARY {
            let Some(index) = self.selection.point() else {
                return EventResult::Ignored;
            };
            let units = self.viewport.world_units_per_pixel();
            let Some(binding) = self.binding.as_mut() else {
                return EventResult::Ignored;
            };
            if !binding.mesh.buffer_mut().drag_point(index, delta, units) {
                return EventResult::Ignored;
            }
            trace!(index, "writing dragged point back");
            understory_uv_mesh::write_back(doc, &binding.element, binding.mesh.buffer());
        } else if buttons == PointerButtons::AUXILIARY {
            self.viewport.pan_by(delta);
        } else if buttons == PointerButtons::SECONDARY {
            self.viewport.zoom_by(drag_zoom_factor(delta.y));
        } else {
            return EventResult::Ignored;
        }
        self.pointer.advance(pos);
        EventResult::Redraw
    }

    /// Handles a button release; releases end drags implicitly.
    pub fn pointer_up(&mut self, _pos: Point, _button: PointerButton) -> EventResult {
        EventResult::Ignored
    }

    /// Zooms by a wheel rotation of `delta` (eighths of a degree, as most
    /// platforms report it).
    pub fn wheel(&mut self, delta: f64) -> EventResult {
        self.viewport.zoom_by(wheel_zoom_factor(delta));
        EventResult::Redraw
    }

    /// Updates the widget size in pixels.
    pub fn resize(&mut self, size: Size) -> EventResult {
        self.viewport.set_size(size);
        EventResult::Redraw
    }

    /// Writes the current UV buffer back to the bound element.
    ///
    /// Returns `false` if nothing is bound.
    pub fn write_back(&self, doc: &mut D) -> bool {
        let Some(binding) = &self.binding else {
            return false;
        };
        understory_uv_mesh::write_back(doc, &binding.element, binding.mesh.buffer());
        true
    }

    /// Describes the current frame for a renderer.
    #[must_use]
    pub fn scene(&self) -> UvScene {
        let view_rect = self.viewport.view_rect();
        let zoom = self.viewport.zoom();
        let (edges, points, texture) = match &self.binding {
            Some(binding) => {
                let lit = self.selection.highlighted_points(binding.mesh.faces());
                let (edges, points) = scene::overlay(&binding.mesh, self.selection.face(), lit);
                (edges, points, binding.texture.clone())
            }
            None => (Vec::new(), Vec::new(), None),
        };
        UvScene {
            view_rect,
            zoom,
            texture,
            tiles: scene::tiles(self.config.style.tile_tint),
            border: scene::border(),
            grid: scene::grid_lines(view_rect, zoom, &self.config.grid),
            edges,
            points,
            style: self.config.style,
        }
    }

    /// Every primitive under `pos`, in ascending pick-name order.
    #[must_use]
    pub fn hits_at(&self, pos: Point) -> Vec<Selection> {
        let Some(binding) = &self.binding else {
            return Vec::new();
        };
        let names = names_of(&binding.mesh);
        let hits = self
            .resolver
            .hits_at(pos, |pass| self.replay(&binding.mesh, &names, pass));
        hits.as_slice()
            .iter()
            .map(|name| Selection::from(names.decode(*name)))
            .collect()
    }

    fn pick(&self, pos: Point) -> Selection {
        let Some(binding) = &self.binding else {
            return Selection::None;
        };
        let names = names_of(&binding.mesh);
        let picked = self
            .resolver
            .pick_at(pos, |pass| self.replay(&binding.mesh, &names, pass));
        Selection::from(picked.and_then(|name| names.decode(name)))
    }

    fn replay(&self, mesh: &UvMesh, names: &PickNames, pass: &mut PickPass) {
        scene::for_each_primitive(mesh, |drawn| match drawn {
            Drawn::Face { index, corners, .. } => {
                if let Some(name) = names.face(index) {
                    pass.outline(name, &corners.map(|c| self.viewport.world_to_screen(c)));
                }
            }
            Drawn::Point { index, at } => {
                if let Some(name) = names.point(index) {
                    pass.point(name, self.viewport.world_to_screen(at));
                }
            }
        });
    }
}

fn names_of(mesh: &UvMesh) -> PickNames {
    PickNames::new(mesh.buffer().len(), mesh.faces().len())
}

impl<D: UvDocument, C: TextureCache> fmt::Debug for UvEditor<D, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UvEditor")
            .field("viewport", &self.viewport)
            .field("selection", &self.selection)
            .field("pointer", &self.pointer)
            .field("points", &self.mesh().map(|m| m.buffer().len()))
            .field("texture", &self.texture())
            .finish_non_exhaustive()
    }
}

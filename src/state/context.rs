//! The editing engine: owns the shape list, the selection, the calibration,
//! the current mode and the gesture context, and mutates them in response to
//! pointer and keyboard input.
//!
//! All public operations are total. Policy rejections (a drag box that is
//! too small, closing a polygon too early, deleting an unknown id) are logged
//! and reported as [`EditorEvent`]s instead of being returned as errors.

use std::f32::consts::FRAC_PI_2;

use egui::{Color32, CursorIcon, Pos2};
use log::{debug, info, warn};

use super::{EditorMode, HoverTarget, Interaction};
use crate::calibration::ScaleCalibration;
use crate::config::EditorConfig;
use crate::error::TransitionError;
use crate::event::{EditorEvent, EventBus};
use crate::geometry::{drag_rect, to_local};
use crate::gizmo::{self, GizmoHandle, Handle};
use crate::id_generator::IdGenerator;
use crate::input::EditorKey;
use crate::shape::{factory, palette_index, Shape, ShapeGeometry, ShapeId, ShapeKind, PALETTE};

#[derive(Debug)]
pub struct EditorContext {
    mode: EditorMode,
    shapes: Vec<Shape>,
    selected: Option<ShapeId>,
    interaction: Interaction,
    calibration: ScaleCalibration,
    active_kind: ShapeKind,
    ids: IdGenerator,
    image_size: Option<[u32; 2]>,
    /// Last known pointer position in image space.
    pointer: Option<Pos2>,
    config: EditorConfig,
    events: EventBus,
}

impl Default for EditorContext {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorContext {
    pub fn new(config: EditorConfig) -> Self {
        let calibration = ScaleCalibration::new(config.scale_length, config.scale_unit.clone());
        Self {
            mode: EditorMode::Idle,
            shapes: Vec::new(),
            selected: None,
            interaction: Interaction::default(),
            calibration,
            active_kind: ShapeKind::default(),
            ids: IdGenerator::default(),
            image_size: None,
            pointer: None,
            config,
            events: EventBus::new(),
        }
    }

    // ---- read access -------------------------------------------------------

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    pub fn selected_id(&self) -> Option<ShapeId> {
        self.selected
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected.and_then(|id| self.shape(id))
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn calibration(&self) -> &ScaleCalibration {
        &self.calibration
    }

    pub fn active_kind(&self) -> ShapeKind {
        self.active_kind
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn image_size(&self) -> Option<[u32; 2]> {
        self.image_size
    }

    pub fn has_image(&self) -> bool {
        self.image_size.is_some()
    }

    pub fn pointer(&self) -> Option<Pos2> {
        self.pointer
    }

    /// Color the next created shape will receive.
    pub fn next_color(&self) -> Color32 {
        PALETTE[palette_index(self.ids.peek())]
    }

    /// Events emitted since the last call, oldest first.
    pub fn drain_events(&mut self) -> Vec<EditorEvent> {
        self.events.drain()
    }

    /// Topmost shape containing `pos`.
    pub fn shape_at(&self, pos: Pos2) -> Option<ShapeId> {
        self.shapes.iter().rev().find(|s| s.contains(pos)).map(Shape::id)
    }

    /// Handle of the selected shape under `pos`.
    pub fn handle_at(&self, pos: Pos2) -> Option<Handle> {
        let shape = self.selected_shape()?;
        gizmo::handle_at(pos, shape.geometry(), &self.config)
    }

    /// Handles of the selected shape, in priority order.
    pub fn selected_handles(&self) -> Vec<Handle> {
        self.selected_shape()
            .map(|s| gizmo::handles_for(s.geometry(), self.config.rotation_handle_distance))
            .unwrap_or_default()
    }

    // ---- measurement -------------------------------------------------------

    /// Physical units per pixel, or `None` while the calibration is undefined.
    pub fn factor(&self) -> Option<f32> {
        self.calibration.factor()
    }

    pub fn area_of(&self, id: ShapeId) -> Option<f32> {
        self.shape(id)?.area(self.factor())
    }

    /// Sum of all shape areas, or `None` while the calibration is undefined.
    pub fn total_area(&self) -> Option<f32> {
        let factor = self.factor()?;
        Some(self.shapes.iter().filter_map(|s| s.area(Some(factor))).sum())
    }

    // ---- previews ----------------------------------------------------------

    /// Outline of the ellipse/rectangle being dragged out, regardless of size.
    pub fn draw_preview(&self) -> Option<ShapeGeometry> {
        if self.mode != EditorMode::Drawing {
            return None;
        }
        let rect = drag_rect(self.interaction.drag_origin?, self.pointer?);
        match self.active_kind {
            ShapeKind::Ellipse => Some(ShapeGeometry::Ellipse {
                center: rect.center(),
                rx: rect.width() / 2.0,
                ry: rect.height() / 2.0,
                rotation: 0.0,
            }),
            ShapeKind::Rectangle => Some(ShapeGeometry::Rectangle {
                center: rect.center(),
                w: rect.width(),
                h: rect.height(),
                rotation: 0.0,
            }),
            ShapeKind::Polygon => None,
        }
    }

    /// Cursor the UI should show for the current mode and hover.
    pub fn cursor_icon(&self) -> CursorIcon {
        match self.mode {
            EditorMode::Rotating => CursorIcon::Grabbing,
            EditorMode::DraggingShape => CursorIcon::Move,
            EditorMode::ResizingHandle | EditorMode::DraggingVertex => CursorIcon::PointingHand,
            EditorMode::Drawing
            | EditorMode::DrawingPolygon
            | EditorMode::SettingScale1
            | EditorMode::SettingScale2 => CursorIcon::Crosshair,
            EditorMode::Idle => match self.interaction.hover {
                Some(HoverTarget::Handle { handle, .. }) => handle.cursor_icon(),
                Some(HoverTarget::Shape(_)) => CursorIcon::Move,
                None => CursorIcon::Default,
            },
        }
    }

    // ---- explicit actions --------------------------------------------------

    /// A new image of `width` x `height` pixels replaces the old one.
    ///
    /// Shapes, ids, selection, calibration points and any gesture are reset.
    /// The entered calibration length and unit are kept.
    pub fn load_image(&mut self, width: u32, height: u32) {
        info!("Loading image of {width}x{height} px; resetting shapes");
        self.image_size = Some([width, height]);
        self.reset_shapes();
        self.events.emit(EditorEvent::ImageReset { width, height });
    }

    /// Forget the image as well as everything drawn on it.
    pub fn reset_all(&mut self) {
        info!("Resetting editor");
        self.image_size = None;
        self.pointer = None;
        self.reset_shapes();
    }

    fn reset_shapes(&mut self) {
        self.return_to_idle();
        self.shapes.clear();
        self.ids.reset();
        self.set_selection(None);
        self.calibration.clear_points();
    }

    /// Arm the two-click calibration capture. Needs an image.
    pub fn begin_calibration(&mut self) -> bool {
        if !self.has_image() {
            debug!("Ignoring calibration request without an image");
            return false;
        }
        self.cancel_in_progress();
        self.calibration.begin();
        self.try_transition(EditorMode::SettingScale1);
        self.events.emit(EditorEvent::CalibrationStarted);
        true
    }

    pub fn set_real_length(&mut self, length: f32) {
        self.calibration.set_real_length(length);
        self.config.scale_length = self.calibration.real_length();
    }

    pub fn set_unit(&mut self, unit: &str) {
        self.calibration.set_unit(unit);
        self.config.scale_unit = self.calibration.unit().to_owned();
    }

    /// Choose the kind of shape "add shape" draws. Re-arms a pending draw.
    pub fn set_active_kind(&mut self, kind: ShapeKind) {
        if self.active_kind == kind {
            return;
        }
        self.active_kind = kind;
        if self.mode.is_drawing() {
            self.begin_add_shape();
        }
    }

    /// Arm drawing of the active kind. Needs an image and a placed calibration.
    pub fn begin_add_shape(&mut self) -> bool {
        if !self.has_image() || !self.calibration.is_defined() {
            debug!("Ignoring add-shape request: image or scale missing");
            return false;
        }
        self.cancel_in_progress();
        let mode = match self.active_kind {
            ShapeKind::Polygon => EditorMode::DrawingPolygon,
            ShapeKind::Ellipse | ShapeKind::Rectangle => EditorMode::Drawing,
        };
        self.try_transition(mode);
        self.events.emit(EditorEvent::DrawingStarted { kind: self.active_kind });
        true
    }

    /// Select a shape from the list. Unknown ids are ignored.
    pub fn select_shape(&mut self, id: ShapeId) {
        if self.mode.is_gesture() {
            return;
        }
        if self.shape(id).is_some() {
            self.set_selection(Some(id));
        } else {
            debug!("Ignoring selection of unknown shape {id}");
        }
    }

    /// Remove a shape. Returns false if no shape has this id.
    pub fn delete_shape(&mut self, id: ShapeId) -> bool {
        let Some(index) = self.shapes.iter().position(|s| s.id() == id) else {
            debug!("Ignoring delete of unknown shape {id}");
            return false;
        };

        self.shapes.remove(index);
        if self.interaction.target == Some(id) {
            self.return_to_idle();
        }
        if self.interaction.hover.is_some_and(|h| hover_shape(h) == id) {
            self.interaction.hover = None;
        }
        if self.selected == Some(id) {
            self.set_selection(None);
        }
        info!("Deleted shape {id}");
        self.events.emit(EditorEvent::ShapeDeleted { id });
        true
    }

    // ---- pointer and keyboard input ----------------------------------------

    pub fn on_pointer_down(&mut self, pos: Pos2) {
        if !self.has_image() {
            return;
        }
        self.pointer = Some(pos);

        match self.mode {
            EditorMode::SettingScale1 => {
                self.calibration.place_first_point(pos);
                self.try_transition(EditorMode::SettingScale2);
                self.events.emit(EditorEvent::CalibrationPointPlaced);
            }
            EditorMode::SettingScale2 => {
                self.calibration.place_second_point(pos);
                self.try_transition(EditorMode::Idle);
                self.events.emit(EditorEvent::ScaleDefined {
                    factor: self.calibration.factor(),
                });
            }
            EditorMode::DrawingPolygon => {
                self.interaction.poly_points.push(pos);
            }
            EditorMode::Drawing => {
                self.interaction.drag_origin = Some(pos);
            }
            EditorMode::Idle => self.press_idle(pos),
            EditorMode::DraggingShape
            | EditorMode::ResizingHandle
            | EditorMode::DraggingVertex
            | EditorMode::Rotating => {
                debug!("Pointer down during {}; ignored", self.mode.name());
            }
        }
    }

    fn press_idle(&mut self, pos: Pos2) {
        if let Some(handle) = self.handle_at(pos) {
            if let Some(id) = self.selected {
                self.start_gesture(EditorMode::for_handle(handle.kind), id, handle.kind, pos);
                return;
            }
        }

        match self.shape_at(pos) {
            Some(id) => {
                self.set_selection(Some(id));
                self.start_gesture(EditorMode::DraggingShape, id, GizmoHandle::Center, pos);
            }
            None => self.set_selection(None),
        }
    }

    fn start_gesture(&mut self, mode: EditorMode, id: ShapeId, handle: GizmoHandle, pos: Pos2) {
        let Some(shape) = self.shape(id) else {
            return;
        };
        let snapshot = shape.clone();

        if self.try_transition(mode) {
            self.interaction.drag_origin = Some(pos);
            self.interaction.target = Some(id);
            self.interaction.active_handle = Some(handle);
            self.interaction.snapshot = Some(snapshot);
            debug!("{} on shape {id} via {}", mode.name(), handle.name());
        }
    }

    pub fn on_pointer_move(&mut self, pos: Pos2) {
        if !self.has_image() {
            return;
        }
        self.pointer = Some(pos);

        match self.mode {
            EditorMode::Idle => self.update_hover(pos),
            mode if mode.is_gesture() => self.apply_gesture(pos),
            // Draw and calibration previews read the pointer directly.
            _ => {}
        }
    }

    pub fn on_pointer_up(&mut self, pos: Pos2) {
        if !self.has_image() {
            return;
        }
        self.pointer = Some(pos);

        match self.mode {
            EditorMode::Drawing => {
                // A release without a press in this mode belongs to another gesture.
                if let Some(origin) = self.interaction.drag_origin {
                    self.finish_drawing(origin, pos);
                }
            }
            mode if mode.is_gesture() => {
                self.apply_gesture(pos);
                debug!("{} finished", mode.name());
                self.try_transition(EditorMode::Idle);
            }
            _ => {}
        }
    }

    pub fn on_double_click(&mut self, _pos: Pos2) {
        if self.mode != EditorMode::DrawingPolygon {
            return;
        }

        let count = self.interaction.poly_points.len();
        match factory::closed_polygon(&self.interaction.poly_points) {
            Some(geometry) => {
                self.add_shape(geometry);
                self.try_transition(EditorMode::Idle);
            }
            None => {
                debug!("Polygon finalize with {count} vertices ignored");
                self.events.emit(EditorEvent::PolygonNeedsMoreVertices { count });
            }
        }
    }

    pub fn on_key(&mut self, key: EditorKey) {
        match key {
            EditorKey::Delete | EditorKey::Backspace => {
                if let (EditorMode::Idle, Some(id)) = (self.mode, self.selected) {
                    self.delete_shape(id);
                }
            }
            EditorKey::Escape => {
                self.cancel_in_progress();
                self.set_selection(None);
            }
        }
    }

    // ---- internals ---------------------------------------------------------

    fn finish_drawing(&mut self, origin: Pos2, end: Pos2) {
        match factory::from_drag(self.active_kind, origin, end) {
            Some(geometry) => self.add_shape(geometry),
            None => {
                debug!("Drag from {origin:?} to {end:?} too small for a shape");
                self.events.emit(EditorEvent::ShapeTooSmall);
            }
        }
        self.try_transition(EditorMode::Idle);
    }

    fn add_shape(&mut self, geometry: ShapeGeometry) {
        let id = self.ids.next_id();
        let kind = geometry.kind();
        self.shapes.push(Shape::new(id, geometry));
        info!("Added {} #{id}", kind.label());
        self.events.emit(EditorEvent::ShapeAdded { id, kind });
        self.set_selection(Some(id));
    }

    /// Recompute the target shape from the gesture snapshot and `pos`.
    fn apply_gesture(&mut self, pos: Pos2) {
        let (Some(origin), Some(id), Some(handle), Some(snapshot)) = (
            self.interaction.drag_origin,
            self.interaction.target,
            self.interaction.active_handle,
            self.interaction.snapshot.as_ref(),
        ) else {
            warn!("{} without gesture context", self.mode.name());
            return;
        };

        let reference = snapshot.geometry();
        let mut geometry = reference.clone();
        match self.mode {
            EditorMode::DraggingShape => geometry.translate(pos - origin),
            EditorMode::ResizingHandle => {
                if let (Some(center), Some(axis)) = (reference.center(), handle.axis()) {
                    let local = to_local(pos, center, reference.rotation());
                    geometry.set_extent(axis, local);
                }
            }
            EditorMode::DraggingVertex => {
                if let GizmoHandle::Vertex(index) = handle {
                    if let Some(start) = reference.vertex(index) {
                        geometry.set_vertex(index, start + (pos - origin));
                    }
                }
            }
            EditorMode::Rotating => {
                if let Some(center) = reference.center() {
                    let d = pos - center;
                    // The rotation handle rests straight above the center.
                    geometry.set_rotation(d.y.atan2(d.x) + FRAC_PI_2);
                }
            }
            _ => return,
        }

        if let Some(shape) = self.shapes.iter_mut().find(|s| s.id() == id) {
            shape.set_geometry(geometry);
        }
    }

    /// Abandon whatever is in progress and return to idle.
    ///
    /// Draws are discarded, an armed calibration is dropped, and a shape
    /// being manipulated is restored from its gesture snapshot.
    fn cancel_in_progress(&mut self) {
        let mode = self.mode;
        match mode {
            EditorMode::Idle => return,
            EditorMode::SettingScale1 | EditorMode::SettingScale2 => {
                self.calibration.clear_points()
            }
            EditorMode::Drawing | EditorMode::DrawingPolygon => {}
            EditorMode::DraggingShape
            | EditorMode::ResizingHandle
            | EditorMode::DraggingVertex
            | EditorMode::Rotating => self.revert_gesture(),
        }
        debug!("Cancelled {}", mode.name());
        self.return_to_idle();
        self.events.emit(EditorEvent::GestureCancelled { mode });
    }

    fn revert_gesture(&mut self) {
        let (Some(id), Some(snapshot)) = (self.interaction.target, self.interaction.snapshot.take())
        else {
            return;
        };
        if let Some(shape) = self.shapes.iter_mut().find(|s| s.id() == id) {
            *shape = snapshot;
        }
    }

    fn update_hover(&mut self, pos: Pos2) {
        self.interaction.hover = match (self.selected, self.handle_at(pos)) {
            (Some(shape), Some(handle)) => Some(HoverTarget::Handle {
                shape,
                handle: handle.kind,
            }),
            _ => self.shape_at(pos).map(HoverTarget::Shape),
        };
    }

    fn set_selection(&mut self, id: Option<ShapeId>) {
        if self.selected != id {
            self.selected = id;
            self.events.emit(EditorEvent::SelectionChanged { id });
        }
    }

    fn return_to_idle(&mut self) {
        self.try_transition(EditorMode::Idle);
        self.interaction.clear();
    }

    /// Move to `new_mode` if the state machine allows it. Entering `Idle`
    /// clears the gesture context; any other mode drops the hover.
    fn try_transition(&mut self, new_mode: EditorMode) -> bool {
        match self.transition_to(new_mode) {
            Ok(()) => true,
            Err(e) => {
                warn!("{e}");
                false
            }
        }
    }

    fn transition_to(&mut self, new_mode: EditorMode) -> Result<(), TransitionError> {
        if self.mode == new_mode {
            return Ok(());
        }
        if !self.mode.can_transition_to(&new_mode) {
            return Err(TransitionError::InvalidTransition {
                from: self.mode,
                to: new_mode,
            });
        }

        let old = self.mode;
        self.mode = new_mode;
        if new_mode.is_idle() {
            self.interaction.clear();
        } else {
            // Hover highlights only apply while idle.
            self.interaction.hover = None;
        }
        debug!("Mode {} -> {}", old.name(), new_mode.name());
        self.events.emit(EditorEvent::ModeChanged { old, new: new_mode });
        Ok(())
    }
}

fn hover_shape(hover: HoverTarget) -> ShapeId {
    match hover {
        HoverTarget::Handle { shape, .. } | HoverTarget::Shape(shape) => shape,
    }
}

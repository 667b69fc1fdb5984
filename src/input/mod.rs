use egui::{Context, Key, PointerButton, Pos2};

mod router;
mod transform;

pub use router::route_event;
pub use transform::CanvasTransform;

/// Keys the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    Escape,
    Delete,
    Backspace,
}

/// Input for the editing engine, with positions in image pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed over the canvas
    PointerDown { pos: Pos2 },
    /// Pointer moved, with or without the primary button held
    PointerMove { pos: Pos2 },
    /// Primary button released after a press that started on the canvas
    PointerUp { pos: Pos2 },
    /// Second click of a double click
    DoubleClick { pos: Pos2 },
    Key(EditorKey),
}

/// Handles converting raw egui input into [`InputEvent`]s for the canvas.
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    /// A press started on the canvas and has not been released yet.
    pressed_on_canvas: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process this frame's egui input. Presses only count over the image;
    /// moves are reported anywhere on the canvas or while a press is held.
    pub fn process_input(&mut self, ctx: &Context, transform: &CanvasTransform) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let pointer = &input.pointer;
            let screen_pos = pointer.interact_pos().or(pointer.hover_pos());

            // The press lands where the button went down, even if the pointer
            // moved again within the same frame.
            if pointer.button_pressed(PointerButton::Primary) {
                if let Some(press) = pointer.press_origin().or(screen_pos) {
                    if transform.image_rect().contains(press) {
                        self.pressed_on_canvas = true;
                        self.last_pointer_pos = Some(press);
                        events.push(InputEvent::PointerDown {
                            pos: transform.to_image(press),
                        });
                    }
                }
            }

            let Some(screen) = screen_pos else {
                self.last_pointer_pos = None;
                return;
            };
            let pos = transform.to_image(screen);
            let on_canvas = transform.canvas_rect().contains(screen);

            if (on_canvas || self.pressed_on_canvas) && Some(screen) != self.last_pointer_pos {
                events.push(InputEvent::PointerMove { pos });
            }
            self.last_pointer_pos = Some(screen);

            if self.pressed_on_canvas && pointer.button_released(PointerButton::Primary) {
                self.pressed_on_canvas = false;
                events.push(InputEvent::PointerUp { pos });
            }
            if transform.image_rect().contains(screen)
                && pointer.button_double_clicked(PointerButton::Primary)
            {
                events.push(InputEvent::DoubleClick { pos });
            }
        });

        // Keystrokes belong to a focused text field, not the canvas.
        if !ctx.wants_keyboard_input() {
            ctx.input(|input| {
                for (key, editor_key) in [
                    (Key::Escape, EditorKey::Escape),
                    (Key::Delete, EditorKey::Delete),
                    (Key::Backspace, EditorKey::Backspace),
                ] {
                    if input.key_pressed(key) {
                        events.push(InputEvent::Key(editor_key));
                    }
                }
            });
        }

        events
    }
}

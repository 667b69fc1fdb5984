use crate::state::EditorContext;

use super::InputEvent;

/// Routes one input event to the editing engine.
pub fn route_event(event: &InputEvent, editor: &mut EditorContext) {
    match *event {
        InputEvent::PointerDown { pos } => editor.on_pointer_down(pos),
        InputEvent::PointerMove { pos } => editor.on_pointer_move(pos),
        InputEvent::PointerUp { pos } => editor.on_pointer_up(pos),
        InputEvent::DoubleClick { pos } => editor.on_double_click(pos),
        InputEvent::Key(key) => editor.on_key(key),
    }
}

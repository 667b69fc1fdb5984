mod central_panel;
mod shape_list;
mod tools_panel;

pub use central_panel::{central_panel, status_bar};
pub use shape_list::shape_list;
pub use tools_panel::side_panel;

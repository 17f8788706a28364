// handlers/classes/mod.rs - Class and time slot handlers
//
// GET    /api/classes                              list
// POST   /api/classes                              create
// GET    /api/classes/:id                          show
// DELETE /api/classes/:id                          delete
// POST   /api/classes/:id/duplicate                duplicate
// PUT    /api/classes/:class_id/slots/:slot_id     slot assign

pub mod create;
pub mod delete;
pub mod duplicate;
pub mod list;
pub mod show;
pub mod slots;

pub use create::class_create;
pub use delete::class_delete;
pub use duplicate::class_duplicate;
pub use list::class_list;
pub use show::class_show;
pub use slots::slot_assign;

use crate::app::AppState;
use crate::database::models::Class;

/// Shape a class for output according to the date field setting
pub(crate) fn present(state: &AppState, class: Class) -> Class {
    if state.date_field_enabled() {
        class
    } else {
        class.without_date()
    }
}

//! Widget state shared between the controller and the frontend.

mod result_list;
mod text_field;

pub use result_list::ResultList;
pub use text_field::TextField;

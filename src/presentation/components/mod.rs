mod errors;
mod fields;
mod footer;
mod form;

pub use errors::render_errors;
pub use fields::render_field_list;
pub use footer::render_footer;
pub use form::render_form;

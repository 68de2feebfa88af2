pub mod auth;
pub mod common;
pub mod home;

pub use auth::{AuthFormTemplate, FieldView};
pub use common::{Navbar, NotFoundTemplate};
pub use home::HomeTemplate;

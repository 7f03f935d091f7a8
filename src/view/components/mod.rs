pub mod flash;
pub mod form;
pub mod layout;
pub mod navbar;
pub mod rack_diagram;

pub use flash::FlashBanner;
pub use form::CsrfField;
pub use layout::{Document, Layout};
pub use navbar::Navbar;
pub use rack_diagram::RackDiagram;

//! Data transfer types shared by the server and the rendered views.

pub mod api;
pub mod flash;
pub mod port;
pub mod rack;
pub mod user;

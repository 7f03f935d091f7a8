//! DocRack: self-hosted documentation for network racks, the equipment mounted in them and the
//! cables between their ports.

pub mod model;
pub mod server;
pub mod view;

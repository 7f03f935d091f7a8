//! `SeaORM` Entity prelude

pub use super::docrack_connection::Entity as DocrackConnection;
pub use super::docrack_equipment::Entity as DocrackEquipment;
pub use super::docrack_port::Entity as DocrackPort;
pub use super::docrack_rack::Entity as DocrackRack;
pub use super::docrack_user::Entity as DocrackUser;

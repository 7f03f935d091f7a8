use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::rack::EquipmentDto;

/// A port together with where it physically lives.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PortEndpointDto {
    pub port_id: i32,
    pub port_name: String,
    pub equipment_id: i32,
    pub equipment_name: String,
    pub rack_id: i32,
    pub rack_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PortLinkDto {
    pub connection_id: i32,
    /// The port at the other end of the cable
    pub peer: PortEndpointDto,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PortDto {
    pub id: i32,
    pub name: String,
    pub connection: Option<PortLinkDto>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConnectionDto {
    pub id: i32,
    pub a: PortEndpointDto,
    pub b: PortEndpointDto,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EquipmentDetailDto {
    pub equipment: EquipmentDto,
    pub rack_name: String,
    pub ports: Vec<PortDto>,
}

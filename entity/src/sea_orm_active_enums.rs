use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    #[sea_orm(string_value = "ORDERED")]
    Ordered,
    #[sea_orm(string_value = "CANCELED")]
    Canceled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "UPPERCASE")]
pub enum DeliveryStatus {
    #[sea_orm(string_value = "READY")]
    Ready,
    #[sea_orm(string_value = "COMP")]
    Comp,
}

//! SeaORM entity definitions for the shop schema.

pub mod prelude;

pub mod delivery;
pub mod member;
pub mod order_item;
pub mod orders;
pub mod sea_orm_active_enums;

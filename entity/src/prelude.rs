pub use super::delivery::Entity as Delivery;
pub use super::member::Entity as Member;
pub use super::order_item::Entity as OrderItem;
pub use super::orders::Entity as Orders;

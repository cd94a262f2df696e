use crate::server::{
    data::order::{
        item::OrderItemRepository, simple_query::OrderSimpleQueryRepository, OrderRepository,
    },
    model::order::{OrderPage, OrderSearch, OrderStatus, SimpleOrder},
};
use entity::sea_orm_active_enums;
use sea_orm::{DatabaseConnection, DbErr};
use test_utils::{builder::TestBuilder, factory};

mod find_all;
mod find_all_with_member_delivery;
mod find_by_order_ids;
mod find_page_with_member_delivery;
mod find_related;
mod find_simple_orders;

/// Creates `kim` with one ordered order and `lee` with one canceled order.
///
/// Each delivery gets its own address so tests can tell it apart from the
/// member address.
async fn seed_two_orders(
    db: &DatabaseConnection,
) -> Result<(entity::orders::Model, entity::orders::Model), DbErr> {
    let kim = factory::member::MemberFactory::new(db)
        .name("kim")
        .address("Home A", "Home Street A", "00001")
        .build()
        .await?;
    let lee = factory::create_member_with_name(db, "lee").await?;

    let kim_delivery = factory::delivery::DeliveryFactory::new(db)
        .address("Seoul", "Street 1", "11111")
        .build()
        .await?;
    let lee_delivery = factory::delivery::DeliveryFactory::new(db)
        .address("Busan", "Street 2", "22222")
        .build()
        .await?;

    let kim_order = factory::create_order(db, kim.id, kim_delivery.id).await?;
    let lee_order = factory::order::OrderFactory::new(db, lee.id, lee_delivery.id)
        .status(sea_orm_active_enums::OrderStatus::Canceled)
        .build()
        .await?;

    Ok((kim_order, lee_order))
}

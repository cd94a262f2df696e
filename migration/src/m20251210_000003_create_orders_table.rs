use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251210_000001_create_member_table::Member,
    m20251210_000002_create_delivery_table::Delivery,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(pk_auto(Orders::Id))
                    .col(integer(Orders::MemberId))
                    .col(integer_uniq(Orders::DeliveryId))
                    .col(timestamp_with_time_zone(Orders::OrderDate))
                    .col(string_len(Orders::Status, 16))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_member_id")
                            .from(Orders::Table, Orders::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_delivery_id")
                            .from(Orders::Table, Orders::DeliveryId)
                            .to(Delivery::Table, Delivery::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Orders {
    Table,
    Id,
    MemberId,
    DeliveryId,
    OrderDate,
    Status,
}

//! Delivery factory for creating test delivery entities.

use crate::factory::helpers::next_id;
use entity::sea_orm_active_enums::DeliveryStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test deliveries with customizable fields.
pub struct DeliveryFactory<'a> {
    db: &'a DatabaseConnection,
    city: Option<String>,
    street: Option<String>,
    zipcode: Option<String>,
    status: DeliveryStatus,
}

impl<'a> DeliveryFactory<'a> {
    /// Creates a new DeliveryFactory with default values.
    ///
    /// Defaults:
    /// - address: `"Delivery City {id}"`, `"Delivery Street {id}"`, `"D{id}"`
    /// - status: `READY`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            city: Some(format!("Delivery City {}", id)),
            street: Some(format!("Delivery Street {}", id)),
            zipcode: Some(format!("D{}", id)),
            status: DeliveryStatus::Ready,
        }
    }

    /// Sets every address field of the delivery.
    pub fn address(
        mut self,
        city: impl Into<String>,
        street: impl Into<String>,
        zipcode: impl Into<String>,
    ) -> Self {
        self.city = Some(city.into());
        self.street = Some(street.into());
        self.zipcode = Some(zipcode.into());
        self
    }

    /// Sets the delivery status.
    pub fn status(mut self, status: DeliveryStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the delivery entity into the database.
    pub async fn build(self) -> Result<entity::delivery::Model, DbErr> {
        entity::delivery::ActiveModel {
            city: ActiveValue::Set(self.city),
            street: ActiveValue::Set(self.street),
            zipcode: ActiveValue::Set(self.zipcode),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a delivery with default values.
pub async fn create_delivery(db: &DatabaseConnection) -> Result<entity::delivery::Model, DbErr> {
    DeliveryFactory::new(db).build().await
}

use crate::model::order::AddressDto;

/// Embedded address value shared by members and deliveries.
///
/// Has no identity of its own and is copied by value wherever it is used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub city: Option<String>,
    pub street: Option<String>,
    pub zipcode: Option<String>,
}

impl Address {
    pub fn new(
        city: impl Into<String>,
        street: impl Into<String>,
        zipcode: impl Into<String>,
    ) -> Self {
        Self {
            city: Some(city.into()),
            street: Some(street.into()),
            zipcode: Some(zipcode.into()),
        }
    }

    pub fn from_member_entity(entity: &entity::member::Model) -> Self {
        Self {
            city: entity.city.clone(),
            street: entity.street.clone(),
            zipcode: entity.zipcode.clone(),
        }
    }

    pub fn from_delivery_entity(entity: &entity::delivery::Model) -> Self {
        Self {
            city: entity.city.clone(),
            street: entity.street.clone(),
            zipcode: entity.zipcode.clone(),
        }
    }

    pub fn into_dto(self) -> AddressDto {
        AddressDto {
            city: self.city,
            street: self.street,
            zipcode: self.zipcode,
        }
    }
}

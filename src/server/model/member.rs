//! Member domain models and parameters.
//!
//! Provides the member domain model and the validated parameter types for member
//! creation and renaming. Validation happens while converting request DTOs into
//! parameters, so services never see an empty name.

use crate::{
    model::member::{
        CreateMemberDto, MemberDetailDto, MemberDto, MemberEntityDto, UpdateMemberDto,
    },
    server::{error::member::MemberError, model::address::Address},
};

/// Shop member with its embedded address.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    /// Database id of the member.
    pub id: i32,
    /// Unique display name.
    pub name: String,
    /// Home address, every field optional.
    pub address: Address,
}

impl Member {
    /// Converts an entity model to a member domain model at the repository boundary.
    pub fn from_entity(entity: entity::member::Model) -> Self {
        let address = Address::from_member_entity(&entity);

        Self {
            id: entity.id,
            name: entity.name,
            address,
        }
    }

    /// Converts to the name-only DTO used by the member list endpoint.
    pub fn into_dto(self) -> MemberDto {
        MemberDto { name: self.name }
    }

    /// Converts to the DTO carrying both id and name.
    pub fn into_detail_dto(self) -> MemberDetailDto {
        MemberDetailDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Parameters for creating a member.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateMemberParam {
    /// Validated, trimmed member name.
    pub name: String,
    /// Address stored with the member.
    pub address: Address,
}

impl CreateMemberParam {
    /// Validates a creation request.
    ///
    /// # Returns
    /// - `Ok(CreateMemberParam)` - Name present and non-blank
    /// - `Err(MemberError::EmptyName)` - Name missing, empty or whitespace only
    pub fn from_dto(dto: CreateMemberDto) -> Result<Self, MemberError> {
        Ok(Self {
            name: validate_name(dto.name)?,
            address: Address::default(),
        })
    }

    /// Validates a registration sent in the stored-row shape, keeping its address.
    ///
    /// # Returns
    /// - `Ok(CreateMemberParam)` - Name present and non-blank
    /// - `Err(MemberError::EmptyName)` - Name missing, empty or whitespace only
    pub fn from_entity_dto(dto: MemberEntityDto) -> Result<Self, MemberError> {
        Ok(Self {
            name: validate_name(dto.name)?,
            address: Address {
                city: dto.city,
                street: dto.street,
                zipcode: dto.zipcode,
            },
        })
    }
}

/// Parameters for renaming a member.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateMemberParam {
    /// Id of the member to rename.
    pub id: i32,
    /// Validated, trimmed new name.
    pub name: String,
}

impl UpdateMemberParam {
    /// Validates a rename request for member `id`.
    ///
    /// # Returns
    /// - `Ok(UpdateMemberParam)` - Name present and non-blank
    /// - `Err(MemberError::EmptyName)` - Name missing, empty or whitespace only
    pub fn from_dto(id: i32, dto: UpdateMemberDto) -> Result<Self, MemberError> {
        Ok(Self {
            id,
            name: validate_name(dto.name)?,
        })
    }
}

fn validate_name(name: Option<String>) -> Result<String, MemberError> {
    match name {
        Some(name) if !name.trim().is_empty() => Ok(name.trim().to_string()),
        _ => Err(MemberError::EmptyName),
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct MemberDto {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct MemberDetailDto {
    pub id: i32,
    pub name: String,
}

/// `name` is optional at the serde level so a missing field is reported as a
/// validation failure instead of a deserialization rejection.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct CreateMemberDto {
    #[serde(default)]
    pub name: Option<String>,
}

/// Registration body shaped like a stored member row.
///
/// An `id` sent by the client is ignored; the database assigns one.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct MemberEntityDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub zipcode: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CreateMemberResponseDto {
    pub id: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
pub struct UpdateMemberDto {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct UpdateMemberResponseDto {
    pub id: i32,
    pub name: String,
}

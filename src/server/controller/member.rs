use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataEnvelope, ErrorDto},
        member::{
            CreateMemberDto, CreateMemberResponseDto, MemberDetailDto, MemberDto, MemberEntityDto,
            UpdateMemberDto, UpdateMemberResponseDto,
        },
    },
    server::{
        error::AppError,
        model::member::{CreateMemberParam, Member, UpdateMemberParam},
        service::member::MemberService,
        state::AppState,
    },
};

/// Tag for grouping member endpoints in OpenAPI documentation
pub static MEMBER_TAG: &str = "member";

/// List members by returning stored rows directly.
///
/// The response is a bare array whose element shape is the storage row, so any
/// schema change leaks into the API. Kept for comparison with the v2 listing.
///
/// # Returns
/// - `200 OK` - Array of member rows
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/members",
    tag = MEMBER_TAG,
    responses(
        (status = 200, description = "Stored member rows"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_members_v1(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = MemberService::new(&state.db);

    let members = service.find_member_entities().await?;

    Ok((StatusCode::OK, Json(members)))
}

/// Register a member from a body shaped like a stored member row.
///
/// Counterpart of the v1 listing: the request mirrors the storage columns instead of a
/// dedicated request contract. Validation and the duplicate-name guard match v2.
///
/// # Returns
/// - `201 Created` - `{ "id": ... }` of the new member
/// - `400 Bad Request` - Name missing or blank
/// - `409 Conflict` - A member with this name already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/members",
    tag = MEMBER_TAG,
    request_body = MemberEntityDto,
    responses(
        (status = 201, description = "Member created", body = CreateMemberResponseDto),
        (status = 400, description = "Name missing or blank, or malformed body", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_member_v1(
    State(state): State<AppState>,
    payload: Result<Json<MemberEntityDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = CreateMemberParam::from_entity_dto(payload)?;

    let service = MemberService::new(&state.db);
    let member = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateMemberResponseDto { id: member.id }),
    ))
}

/// List member names.
///
/// Maps every member into a name-only DTO and wraps the list in a `data` envelope.
///
/// # Returns
/// - `200 OK` - `{ "data": [{ "name": ... }] }`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v2/members",
    tag = MEMBER_TAG,
    responses(
        (status = 200, description = "Member names", body = DataEnvelope<MemberDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_members_v2(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = MemberService::new(&state.db);

    let members = service.find_members().await?;
    let data = members.into_iter().map(Member::into_dto).collect();

    Ok((StatusCode::OK, Json(DataEnvelope::new(data))))
}

/// Register a new member.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Request body with the member name
///
/// # Returns
/// - `201 Created` - `{ "id": ... }` of the new member
/// - `400 Bad Request` - Name missing or blank
/// - `409 Conflict` - A member with this name already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v2/members",
    tag = MEMBER_TAG,
    request_body = CreateMemberDto,
    responses(
        (status = 201, description = "Member created", body = CreateMemberResponseDto),
        (status = 400, description = "Name missing or blank, or malformed body", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_member_v2(
    State(state): State<AppState>,
    payload: Result<Json<CreateMemberDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = CreateMemberParam::from_dto(payload)?;

    let service = MemberService::new(&state.db);
    let member = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateMemberResponseDto { id: member.id }),
    ))
}

/// Get a member by id.
///
/// # Returns
/// - `200 OK` - `{ "id": ..., "name": ... }`
/// - `404 Not Found` - No member with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v2/members/{id}",
    tag = MEMBER_TAG,
    params(
        ("id" = i32, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Member found", body = MemberDetailDto),
        (status = 400, description = "Id is not an integer", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_member_v2(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let service = MemberService::new(&state.db);

    let member = service.find_one(id).await?;

    Ok((StatusCode::OK, Json(member.into_detail_dto())))
}

/// Rename a member.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Member ID to rename
/// - `payload` - Request body with the new name
///
/// # Returns
/// - `200 OK` - `{ "id": ..., "name": ... }` after the update
/// - `400 Bad Request` - Name missing or blank
/// - `404 Not Found` - No member with that id
/// - `409 Conflict` - Another member already has the name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v2/members/{id}",
    tag = MEMBER_TAG,
    params(
        ("id" = i32, Path, description = "Member ID")
    ),
    request_body = UpdateMemberDto,
    responses(
        (status = 200, description = "Member renamed", body = UpdateMemberResponseDto),
        (status = 400, description = "Name missing or blank, or malformed body", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_member_v2(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateMemberDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let params = UpdateMemberParam::from_dto(id, payload)?;

    let service = MemberService::new(&state.db);
    let member = service.update(params).await?;

    Ok((
        StatusCode::OK,
        Json(UpdateMemberResponseDto {
            id: member.id,
            name: member.name,
        }),
    ))
}

//! Member data repository for database operations.
//!
//! This module provides the `MemberRepository` for managing member records. It handles
//! creation, renaming and lookups with conversion between entity models and domain
//! models at the infrastructure boundary.

use crate::server::model::member::{CreateMemberParam, Member};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

/// Repository providing database operations for member management.
pub struct MemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberRepository<'a, C> {
    /// Creates a new MemberRepository instance.
    ///
    /// # Arguments
    /// - `db` - Connection pool or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new member.
    ///
    /// # Arguments
    /// - `param` - Validated member name and address
    ///
    /// # Returns
    /// - `Ok(Member)` - The created member with its generated id
    /// - `Err(DbErr)` - Database error, including a unique violation on `name`
    pub async fn create(&self, param: CreateMemberParam) -> Result<Member, DbErr> {
        let entity = entity::member::ActiveModel {
            name: ActiveValue::Set(param.name),
            city: ActiveValue::Set(param.address.city),
            street: ActiveValue::Set(param.address.street),
            zipcode: ActiveValue::Set(param.address.zipcode),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Member::from_entity(entity))
    }

    /// Finds a member by id.
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - Member found
    /// - `Ok(None)` - No member with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Member>, DbErr> {
        let entity = entity::prelude::Member::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Member::from_entity))
    }

    /// Finds every member whose name equals `name` exactly.
    ///
    /// # Returns
    /// - `Ok(Vec<Member>)` - Matching members (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<Member>, DbErr> {
        let entities = entity::prelude::Member::find()
            .filter(entity::member::Column::Name.eq(name))
            .order_by_asc(entity::member::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Member::from_entity).collect())
    }

    /// Gets all members ordered by id.
    pub async fn find_all(&self) -> Result<Vec<Member>, DbErr> {
        let entities = self.find_all_entities().await?;

        Ok(entities.into_iter().map(Member::from_entity).collect())
    }

    /// Gets all member rows ordered by id without converting them.
    ///
    /// Only the raw entity listing endpoint uses this.
    pub async fn find_all_entities(&self) -> Result<Vec<entity::member::Model>, DbErr> {
        entity::prelude::Member::find()
            .order_by_asc(entity::member::Column::Id)
            .all(self.db)
            .await
    }

    /// Renames a member.
    ///
    /// # Arguments
    /// - `id` - Id of the member to rename
    /// - `name` - New name
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - The updated member
    /// - `Ok(None)` - No member with that id
    /// - `Err(DbErr)` - Database error, including a unique violation on `name`
    pub async fn update_name(&self, id: i32, name: String) -> Result<Option<Member>, DbErr> {
        let Some(entity) = entity::prelude::Member::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::member::ActiveModel = entity.into();
        active.name = ActiveValue::Set(name);
        let updated = active.update(self.db).await?;

        Ok(Some(Member::from_entity(updated)))
    }

    /// Counts members.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Member::find().count(self.db).await
    }
}

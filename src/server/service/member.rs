//! Member service for business logic.
//!
//! This module provides the `MemberService` which owns the unit of work for member
//! writes. Each write opens a transaction, passes it to the repository, and commits
//! only after every step succeeded; returning early drops the transaction, which
//! rolls it back.

use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::server::{
    data::member::MemberRepository,
    error::{member::MemberError, AppError},
    model::member::{CreateMemberParam, Member, UpdateMemberParam},
};

/// Service providing business logic for member management.
pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    /// Creates a new MemberService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new member.
    ///
    /// Looks up existing members with the same name first and rejects the request if
    /// any exist. Two concurrent requests can both pass that lookup; the unique index on
    /// `member.name` then rejects the second insert, which is reported the same way.
    ///
    /// # Arguments
    /// - `param` - Validated member name and address
    ///
    /// # Returns
    /// - `Ok(Member)` - The created member with its id
    /// - `Err(AppError::MemberErr(DuplicateName))` - A member with this name exists
    /// - `Err(AppError::DbErr)` - Database error; nothing was written
    pub async fn create(&self, param: CreateMemberParam) -> Result<Member, AppError> {
        let txn = self.db.begin().await?;
        let repo = MemberRepository::new(&txn);

        if !repo.find_by_name(&param.name).await?.is_empty() {
            return Err(MemberError::DuplicateName(param.name).into());
        }

        let name = param.name.clone();
        let member = repo
            .create(param)
            .await
            .map_err(|err| duplicate_name_or(err, &name))?;

        txn.commit().await?;

        tracing::info!("Created member {} ({})", member.id, member.name);

        Ok(member)
    }

    /// Gets all members ordered by id.
    pub async fn find_members(&self) -> Result<Vec<Member>, AppError> {
        let repo = MemberRepository::new(self.db);

        Ok(repo.find_all().await?)
    }

    /// Gets all member rows as stored, for the raw entity listing.
    pub async fn find_member_entities(&self) -> Result<Vec<entity::member::Model>, AppError> {
        let repo = MemberRepository::new(self.db);

        Ok(repo.find_all_entities().await?)
    }

    /// Gets a single member by id.
    ///
    /// # Returns
    /// - `Ok(Member)` - Member found
    /// - `Err(AppError::MemberErr(NotFound))` - No member with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_one(&self, id: i32) -> Result<Member, AppError> {
        let repo = MemberRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| MemberError::NotFound(id).into())
    }

    /// Gets every member whose name equals `name`.
    #[cfg(test)]
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<Member>, AppError> {
        let repo = MemberRepository::new(self.db);

        Ok(repo.find_by_name(name).await?)
    }

    /// Renames a member, keeping its id.
    ///
    /// # Arguments
    /// - `param` - Member id and validated new name
    ///
    /// # Returns
    /// - `Ok(Member)` - The renamed member
    /// - `Err(AppError::MemberErr(NotFound))` - No member with that id
    /// - `Err(AppError::MemberErr(DuplicateName))` - Another member already has the name
    /// - `Err(AppError::DbErr)` - Database error; nothing was written
    pub async fn update(&self, param: UpdateMemberParam) -> Result<Member, AppError> {
        let txn = self.db.begin().await?;
        let repo = MemberRepository::new(&txn);

        let member = repo
            .update_name(param.id, param.name.clone())
            .await
            .map_err(|err| duplicate_name_or(err, &param.name))?
            .ok_or(MemberError::NotFound(param.id))?;

        txn.commit().await?;

        tracing::info!("Renamed member {} to {}", member.id, member.name);

        Ok(member)
    }
}

/// Maps a unique violation to `DuplicateName`, passing other errors through.
fn duplicate_name_or(err: DbErr, name: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            MemberError::DuplicateName(name.to_string()).into()
        }
        _ => err.into(),
    }
}

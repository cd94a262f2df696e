use crate::server::{
    data::member::MemberRepository,
    model::{address::Address, member::CreateMemberParam},
};
use sea_orm::{DbErr, EntityTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_id;
mod find_by_name;
mod update_name;

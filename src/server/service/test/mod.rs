use crate::server::{
    error::{member::MemberError, AppError},
    model::{
        address::Address,
        member::{CreateMemberParam, UpdateMemberParam},
        order::{FetchStrategy, OrderPage, OrderSearch, OrderStatus},
    },
    service::{member::MemberService, order::OrderService},
};
use test_utils::{builder::TestBuilder, factory};

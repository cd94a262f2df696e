//! Order data repositories.
//!
//! `OrderRepository` loads order entities either one relation at a time or with both
//! to-one relations join-fetched in a single statement. `simple_query` selects summary
//! columns directly, and `item` batch-loads line items for a set of orders.

pub mod item;
pub mod simple_query;

use sea_orm::{
    sea_query::{Expr, LikeExpr},
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, FromQueryResult, IdenStatic, Iterable,
    JoinType, ModelTrait, QueryFilter, QueryOrder, QueryResult, QuerySelect, RelationTrait,
    Select,
};

use crate::server::model::order::{OrderGraph, OrderPage, OrderSearch};

/// Upper bound on rows returned by the unpaginated order listings.
pub const MAX_ORDER_RESULTS: u64 = 1000;

const ORDER_PREFIX: &str = "o_";
const MEMBER_PREFIX: &str = "m_";
const DELIVERY_PREFIX: &str = "d_";

/// Reads one row of the join-fetch query back into three entity models.
///
/// Each entity's columns are aliased with its own prefix so identically named
/// columns (`id`, `city`, ...) do not collide.
impl FromQueryResult for OrderGraph {
    fn from_query_result(res: &QueryResult, _pre: &str) -> Result<Self, DbErr> {
        Ok(Self {
            order: entity::orders::Model::from_query_result(res, ORDER_PREFIX)?,
            member: entity::member::Model::from_query_result(res, MEMBER_PREFIX)?,
            delivery: entity::delivery::Model::from_query_result(res, DELIVERY_PREFIX)?,
        })
    }
}

/// Repository providing order reads.
pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Loads order rows matching `search`, without any related entity.
    ///
    /// Filtering by member name joins `member` for the predicate only; no member
    /// columns are selected.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - At most `MAX_ORDER_RESULTS` orders ordered by id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_all(
        &self,
        search: &OrderSearch,
    ) -> Result<Vec<entity::orders::Model>, DbErr> {
        let mut query = entity::prelude::Orders::find();

        if let Some(member_name) = &search.member_name {
            query = query
                .join(
                    JoinType::InnerJoin,
                    entity::orders::Relation::Member.def(),
                )
                .filter(member_name_contains(member_name));
        }
        if let Some(status) = search.order_status {
            query = query.filter(entity::orders::Column::Status.eq(status.into_entity()));
        }

        query
            .order_by_asc(entity::orders::Column::Id)
            .limit(MAX_ORDER_RESULTS)
            .all(self.db)
            .await
    }

    /// Loads the member who placed `order` with its own query.
    pub async fn find_member(
        &self,
        order: &entity::orders::Model,
    ) -> Result<Option<entity::member::Model>, DbErr> {
        order
            .find_related(entity::prelude::Member)
            .one(self.db)
            .await
    }

    /// Loads the delivery owned by `order` with its own query.
    pub async fn find_delivery(
        &self,
        order: &entity::orders::Model,
    ) -> Result<Option<entity::delivery::Model>, DbErr> {
        order
            .find_related(entity::prelude::Delivery)
            .one(self.db)
            .await
    }

    /// Loads orders matching `search` with member and delivery in one statement.
    ///
    /// # Returns
    /// - `Ok(Vec<OrderGraph>)` - At most `MAX_ORDER_RESULTS` graphs ordered by order id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_all_with_member_delivery(
        &self,
        search: &OrderSearch,
    ) -> Result<Vec<OrderGraph>, DbErr> {
        let mut query = join_fetch_query();

        if let Some(member_name) = &search.member_name {
            query = query.filter(member_name_contains(member_name));
        }
        if let Some(status) = search.order_status {
            query = query.filter(entity::orders::Column::Status.eq(status.into_entity()));
        }

        query
            .order_by_asc(entity::orders::Column::Id)
            .limit(MAX_ORDER_RESULTS)
            .into_model::<OrderGraph>()
            .all(self.db)
            .await
    }

    /// Loads one page of orders with member and delivery join-fetched.
    ///
    /// Only to-one relations are joined, so every order maps to exactly one row and
    /// `LIMIT`/`OFFSET` count orders. Line items must be loaded separately.
    pub async fn find_page_with_member_delivery(
        &self,
        page: OrderPage,
    ) -> Result<Vec<OrderGraph>, DbErr> {
        join_fetch_query()
            .order_by_asc(entity::orders::Column::Id)
            .offset(page.offset)
            .limit(page.limit)
            .into_model::<OrderGraph>()
            .all(self.db)
            .await
    }
}

/// `member.name LIKE '%…%'` with `%`, `_` and `\` in `name` matched literally.
fn member_name_contains(name: &str) -> Expr {
    let mut pattern = String::with_capacity(name.len() + 2);
    pattern.push('%');
    for c in name.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');

    entity::member::Column::Name.like(LikeExpr::new(pattern).escape('\\'))
}

/// Orders inner-joined with member and delivery, selecting every column of all
/// three tables under per-entity prefixes.
fn join_fetch_query() -> Select<entity::prelude::Orders> {
    let query = entity::prelude::Orders::find()
        .select_only()
        .join(
            JoinType::InnerJoin,
            entity::orders::Relation::Member.def(),
        )
        .join(
            JoinType::InnerJoin,
            entity::orders::Relation::Delivery.def(),
        );

    let query = select_prefixed::<entity::prelude::Orders>(query, ORDER_PREFIX);
    let query = select_prefixed::<entity::prelude::Member>(query, MEMBER_PREFIX);
    select_prefixed::<entity::prelude::Delivery>(query, DELIVERY_PREFIX)
}

fn select_prefixed<E: EntityTrait>(
    query: Select<entity::prelude::Orders>,
    prefix: &str,
) -> Select<entity::prelude::Orders> {
    E::Column::iter().fold(query, |query, column| {
        query.column_as(column, format!("{}{}", prefix, column.as_str()))
    })
}

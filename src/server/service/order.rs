//! Order read service.
//!
//! `OrderService` selects and runs a `FetchStrategy`. Every strategy yields the same
//! `SimpleOrder` values for the same data; they differ only in how many statements
//! reach the database.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::order::{
        item::OrderItemRepository, simple_query::OrderSimpleQueryRepository, OrderRepository,
    },
    error::AppError,
    model::order::{
        FetchStrategy, OrderGraph, OrderPage, OrderSearch, OrderWithItems, SimpleOrder,
    },
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the order graph one relation at a time.
    ///
    /// Issues one query for the orders, then one for the member and one for the
    /// delivery of each order.
    ///
    /// # Returns
    /// - `Ok(Vec<OrderGraph>)` - Graphs ordered by order id
    /// - `Err(AppError::InternalError)` - An order references a missing member or delivery
    /// - `Err(AppError::DbErr)` - Database error during any query
    pub async fn order_graphs(&self, search: &OrderSearch) -> Result<Vec<OrderGraph>, AppError> {
        let graphs = self.load_graphs(search).await?;

        let strategy = FetchStrategy::RawGraph;
        tracing::debug!(
            "Loaded {} order graphs with {:?} in {} queries",
            graphs.len(),
            strategy,
            strategy.query_count(graphs.len())
        );

        Ok(graphs)
    }

    /// Produces order summaries using the given fetch strategy.
    ///
    /// # Arguments
    /// - `strategy` - Fetch plan to run
    /// - `search` - Optional member name / status filter
    ///
    /// # Returns
    /// - `Ok(Vec<SimpleOrder>)` - Summaries ordered by order id
    /// - `Err(AppError)` - Database error or broken order reference
    pub async fn simple_orders(
        &self,
        strategy: FetchStrategy,
        search: &OrderSearch,
    ) -> Result<Vec<SimpleOrder>, AppError> {
        let orders = match strategy {
            FetchStrategy::RawGraph => self
                .load_graphs(search)
                .await?
                .iter()
                .map(SimpleOrder::from_graph)
                .collect(),
            FetchStrategy::LazyPerField => self.simple_orders_per_entity(search).await?,
            FetchStrategy::JoinFetch => OrderRepository::new(self.db)
                .find_all_with_member_delivery(search)
                .await?
                .iter()
                .map(SimpleOrder::from_graph)
                .collect(),
            FetchStrategy::Projection => {
                OrderSimpleQueryRepository::new(self.db)
                    .find_simple_orders(search)
                    .await?
            }
        };

        tracing::debug!(
            "Loaded {} orders with {:?} in {} queries",
            orders.len(),
            strategy,
            strategy.query_count(orders.len())
        );

        Ok(orders)
    }

    /// Gets one page of orders with their line items.
    ///
    /// Member and delivery are join-fetched so pagination applies to order rows;
    /// line items for the whole page are then loaded with a single batched query.
    pub async fn orders_with_items(&self, page: OrderPage) -> Result<Vec<OrderWithItems>, AppError> {
        let graphs = OrderRepository::new(self.db)
            .find_page_with_member_delivery(page)
            .await?;

        let order_ids: Vec<i32> = graphs.iter().map(|graph| graph.order.id).collect();
        let mut items = OrderItemRepository::new(self.db)
            .find_by_order_ids(&order_ids)
            .await?;

        Ok(graphs
            .iter()
            .map(|graph| OrderWithItems {
                order: SimpleOrder::from_graph(graph),
                items: items.remove(&graph.order.id).unwrap_or_default(),
            })
            .collect())
    }

    async fn load_graphs(&self, search: &OrderSearch) -> Result<Vec<OrderGraph>, AppError> {
        let repo = OrderRepository::new(self.db);

        let orders = repo.find_all(search).await?;

        let mut graphs = Vec::with_capacity(orders.len());
        for order in orders {
            let (member, delivery) = self.load_relations(&repo, &order).await?;
            graphs.push(OrderGraph {
                order,
                member,
                delivery,
            });
        }

        Ok(graphs)
    }

    async fn simple_orders_per_entity(
        &self,
        search: &OrderSearch,
    ) -> Result<Vec<SimpleOrder>, AppError> {
        let repo = OrderRepository::new(self.db);

        let orders = repo.find_all(search).await?;

        let mut result = Vec::with_capacity(orders.len());
        for order in &orders {
            let (member, delivery) = self.load_relations(&repo, order).await?;
            result.push(SimpleOrder::from_entities(order, &member, &delivery));
        }

        Ok(result)
    }

    async fn load_relations(
        &self,
        repo: &OrderRepository<'_, DatabaseConnection>,
        order: &entity::orders::Model,
    ) -> Result<(entity::member::Model, entity::delivery::Model), AppError> {
        let member = repo.find_member(order).await?.ok_or_else(|| {
            AppError::InternalError(format!("Order {} has no member", order.id))
        })?;
        let delivery = repo.find_delivery(order).await?.ok_or_else(|| {
            AppError::InternalError(format!("Order {} has no delivery", order.id))
        })?;

        Ok((member, delivery))
    }
}

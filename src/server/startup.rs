use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait,
};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    data::member::MemberRepository,
    error::AppError,
    model::{address::Address, member::CreateMemberParam},
};

const DEFAULT_LOG_FILTER: &str = "shop=info,tower_http=info";

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG` and falls back to `shop=info,tower_http=info`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is up-to-date
/// before any request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

struct SampleOrder {
    member: &'static str,
    address: (&'static str, &'static str, &'static str),
    items: [(&'static str, i32, i32); 2],
}

const SAMPLE_ORDERS: [SampleOrder; 2] = [
    SampleOrder {
        member: "userA",
        address: ("Seoul", "1", "1111"),
        items: [("JPA1 BOOK", 10000, 1), ("JPA2 BOOK", 20000, 2)],
    },
    SampleOrder {
        member: "userB",
        address: ("Jinju", "2", "2222"),
        items: [("SPRING1 BOOK", 20000, 3), ("SPRING2 BOOK", 40000, 4)],
    },
];

/// Inserts two sample members with one order each.
///
/// Does nothing when any member already exists. All rows are written in a single
/// transaction.
///
/// # Returns
/// - `Ok(true)` - Sample data inserted
/// - `Ok(false)` - Database already had members
/// - `Err(AppError)` - Database error; nothing was inserted
pub async fn seed_sample_data(db: &DatabaseConnection) -> Result<bool, AppError> {
    if MemberRepository::new(db).count().await? > 0 {
        return Ok(false);
    }

    let txn = db.begin().await?;
    for sample in &SAMPLE_ORDERS {
        insert_sample_order(&txn, sample).await?;
    }
    txn.commit().await?;

    tracing::info!("Seeded {} sample orders", SAMPLE_ORDERS.len());

    Ok(true)
}

async fn insert_sample_order<C: ConnectionTrait>(db: &C, sample: &SampleOrder) -> Result<(), DbErr> {
    let (city, street, zipcode) = sample.address;
    let address = Address::new(city, street, zipcode);

    let member = MemberRepository::new(db)
        .create(CreateMemberParam {
            name: sample.member.to_string(),
            address: address.clone(),
        })
        .await?;

    let delivery = entity::delivery::ActiveModel {
        city: ActiveValue::Set(address.city),
        street: ActiveValue::Set(address.street),
        zipcode: ActiveValue::Set(address.zipcode),
        status: ActiveValue::Set(entity::sea_orm_active_enums::DeliveryStatus::Ready),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let order = entity::orders::ActiveModel {
        member_id: ActiveValue::Set(member.id),
        delivery_id: ActiveValue::Set(delivery.id),
        order_date: ActiveValue::Set(Utc::now()),
        status: ActiveValue::Set(entity::sea_orm_active_enums::OrderStatus::Ordered),
        ..Default::default()
    }
    .insert(db)
    .await?;

    for (item_name, order_price, count) in sample.items {
        entity::order_item::ActiveModel {
            order_id: ActiveValue::Set(order.id),
            item_name: ActiveValue::Set(item_name.to_string()),
            order_price: ActiveValue::Set(order_price),
            count: ActiveValue::Set(count),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    Ok(())
}

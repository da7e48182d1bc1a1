use crate::models::{customer, customer_account, order, order_products, product};
use sea_orm::sea_query::OnConflict;
use sea_orm::*;

const DEMO_EMAIL: &str = "demo@example.com";

pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    // 1. Products
    let products = [("Notebook", 4.5), ("Fountain Pen", 32.0), ("Ink Bottle", 12.25)];

    for (name, price) in products {
        let exists = product::Entity::find()
            .filter(product::Column::Name.eq(name))
            .one(db)
            .await?
            .is_some();
        if exists {
            continue;
        }

        product::ActiveModel {
            name: Set(name.to_owned()),
            price: Set(price),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    // 2. Demo customer and their account
    let demo = customer::ActiveModel {
        name: Set("Demo Customer".to_owned()),
        email: Set(DEMO_EMAIL.to_owned()),
        phone: Set("5550100".to_owned()),
        ..Default::default()
    };

    customer::Entity::insert(demo)
        .on_conflict(
            OnConflict::column(customer::Column::Email)
                .do_nothing()
                .to_owned(),
        )
        .do_nothing()
        .exec(db)
        .await?;

    let demo = customer::Entity::find()
        .filter(customer::Column::Email.eq(DEMO_EMAIL))
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound(DEMO_EMAIL.to_owned()))?;

    let account = customer_account::ActiveModel {
        username: Set("demo".to_owned()),
        password: Set("demo".to_owned()),
        customer_id: Set(Some(demo.id)),
        ..Default::default()
    };

    customer_account::Entity::insert(account)
        .on_conflict(
            OnConflict::column(customer_account::Column::Username)
                .do_nothing()
                .to_owned(),
        )
        .do_nothing()
        .exec(db)
        .await?;

    // 3. One order with the first two products, only if the demo customer has none
    let has_orders = demo.find_related(order::Entity).count(db).await? > 0;
    if has_orders {
        return Ok(());
    }

    let txn = db.begin().await?;

    let new_order = order::ActiveModel {
        order_date: Set(chrono::Utc::now()),
        customer_id: Set(demo.id),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let line_items = product::Entity::find()
        .order_by_asc(product::Column::Id)
        .limit(2)
        .all(&txn)
        .await?;

    for item in line_items {
        order_products::ActiveModel {
            order_id: Set(new_order.id),
            product_id: Set(item.id),
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;
    tracing::info!("Seeded demo order {} for {}", new_order.id, DEMO_EMAIL);

    Ok(())
}

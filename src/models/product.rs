use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub price: f64, // never negative, enforced by a CHECK constraint
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        super::order_products::Relation::Order.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::order_products::Relation::Product.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

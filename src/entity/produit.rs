use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// Fiche produit du catalogue. Une seule table, aucune relation.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "produit")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nom: String,
    pub type_the: String,
    pub origine: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub prix: Decimal,
    pub quantite_stock: i32,
    pub description: Option<String>,
    pub date_reception: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

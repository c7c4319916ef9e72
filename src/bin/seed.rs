use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use boutique_thes::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    entity::produit::{ActiveModel, Column, Entity as Produits},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    run_migrations(&orm).await?;

    seed_produits(&orm).await?;

    println!("Catalogue de démonstration en place");
    Ok(())
}

async fn seed_produits(orm: &DatabaseConnection) -> anyhow::Result<()> {
    let produits: Vec<(&str, &str, &str, Decimal, i32, &str, &str)> = vec![
        (
            "Sencha Ariake",
            "Vert",
            "Japon",
            dec!(12.50),
            40,
            "Thé vert de printemps, notes végétales et iodées.",
            "2026-03-02",
        ),
        (
            "Long Jing",
            "Vert",
            "Chine",
            dec!(24.00),
            25,
            "Puits du Dragon, feuilles plates torréfiées au wok.",
            "2026-04-18",
        ),
        (
            "Darjeeling First Flush",
            "Noir",
            "Inde",
            dec!(18.90),
            30,
            "Première récolte, tasse claire et fleurie.",
            "2026-04-02",
        ),
        (
            "Bai Mu Dan",
            "Blanc",
            "Chine",
            dec!(15.40),
            20,
            "Pivoine blanche, bourgeons et jeunes feuilles.",
            "2026-05-12",
        ),
        (
            "Tie Guan Yin",
            "Oolong",
            "Chine",
            dec!(21.70),
            35,
            "Oolong de roche faiblement oxydé, final beurré.",
            "2026-06-01",
        ),
    ];

    for (nom, type_the, origine, prix, stock, description, date) in produits {
        let existant = Produits::find()
            .filter(Column::Nom.eq(nom))
            .one(orm)
            .await?;
        if existant.is_some() {
            println!("Déjà présent : {nom}");
            continue;
        }

        let actif = ActiveModel {
            id: NotSet,
            nom: Set(nom.to_string()),
            type_the: Set(type_the.to_string()),
            origine: Set(origine.to_string()),
            prix: Set(prix),
            quantite_stock: Set(stock),
            description: Set(Some(description.to_string())),
            date_reception: Set(date.parse::<NaiveDate>()?),
        };
        actif.insert(orm).await?;
        println!("Ajouté : {nom}");
    }

    Ok(())
}

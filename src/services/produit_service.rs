use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::{
    dto::produits::ChampsProduit,
    entity::produit::{ActiveModel, Column, Entity as Produits, Model as ProduitModel},
    error::{AppError, AppResult},
    routes::params::{FiltreProduits, SelectionProduits, TriProduits},
    state::AppState,
};

/// Charge le catalogue selon le filtre et le tri demandés. La sélection
/// est toujours triée, le tri par nom servant de repli.
pub async fn lister_produits(
    state: &AppState,
    selection: &SelectionProduits,
) -> AppResult<Vec<ProduitModel>> {
    let mut condition = Condition::all();

    match &selection.filtre {
        FiltreProduits::Tous => {}
        FiltreProduits::ParNom(nom) => {
            condition = condition.add(nom_contient(nom));
        }
        FiltreProduits::ParType(type_the) => {
            condition = condition.add(Column::TypeThe.eq(type_the.as_str()));
        }
        FiltreProduits::ParNomEtType { nom, type_the } => {
            condition = condition
                .add(nom_contient(nom))
                .add(Column::TypeThe.eq(type_the.as_str()));
        }
    }

    let finder = Produits::find().filter(condition);
    let finder = match selection.tri {
        TriProduits::Nom => finder.order_by_asc(Column::Nom),
        TriProduits::Prix => finder.order_by_asc(Column::Prix),
        TriProduits::PrixDesc => finder.order_by_desc(Column::Prix),
        TriProduits::QuantiteStock => finder.order_by_asc(Column::QuantiteStock),
        TriProduits::DateReception => finder.order_by_desc(Column::DateReception),
    };

    Ok(finder.all(&state.orm).await?)
}

pub async fn trouver_produit(state: &AppState, id: i64) -> AppResult<Option<ProduitModel>> {
    Ok(Produits::find_by_id(id).one(&state.orm).await?)
}

/// Insère un nouveau produit ou remplace toutes les colonnes du produit
/// dont l'identifiant est fourni.
pub async fn enregistrer_produit(
    state: &AppState,
    id: Option<i64>,
    champs: ChampsProduit,
) -> AppResult<ProduitModel> {
    let actif = ActiveModel {
        id: match id {
            Some(id) => Set(id),
            None => NotSet,
        },
        nom: Set(champs.nom),
        type_the: Set(champs.type_the),
        origine: Set(champs.origine),
        prix: Set(champs.prix),
        quantite_stock: Set(champs.quantite_stock),
        description: Set(champs.description),
        date_reception: Set(champs.date_reception),
    };

    let produit = match id {
        None => {
            let produit = actif.insert(&state.orm).await?;
            tracing::info!(id = produit.id, nom = %produit.nom, "produit créé");
            produit
        }
        Some(id) => {
            let produit = actif.update(&state.orm).await?;
            tracing::info!(id, nom = %produit.nom, "produit mis à jour");
            produit
        }
    };

    Ok(produit)
}

/// Supprime un produit après avoir vérifié qu'il existe, et renvoie le
/// produit supprimé pour que l'appelant puisse citer son nom.
pub async fn supprimer_produit(state: &AppState, id: i64) -> AppResult<ProduitModel> {
    let produit = Produits::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::ProduitIntrouvable(id))?;

    Produits::delete_by_id(id).exec(&state.orm).await?;
    tracing::info!(id, nom = %produit.nom, "produit supprimé");

    Ok(produit)
}

// LIKE est sensible à la casse selon le moteur; on abaisse les deux
// côtés pour un comportement identique partout.
fn nom_contient(nom: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(Column::Nom))).like(format!("%{}%", nom.to_lowercase()))
}

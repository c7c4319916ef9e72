use std::collections::BTreeMap;

use axum::{
    Router,
    extract::{Form, Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use uuid::Uuid;

use crate::{
    dto::produits::{FormulaireProduit, erreurs_en_map},
    error::{AppError, AppResult},
    flash::Flash,
    routes::params::{ListeParams, SelectionProduits},
    services::produit_service,
    state::AppState,
    vues::{PageCatalogue, PageFormulaire, rendre},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(liste_produits))
        .route("/nouveau", get(nouveau_produit))
        .route("/enregistrer", post(enregistrer_produit))
        .route(
            "/modifier/{id}",
            get(formulaire_modification).post(modifier_produit),
        )
        .route("/supprimer/{id}", post(supprimer_produit))
}

pub async fn liste_produits(
    State(state): State<AppState>,
    Query(params): Query<ListeParams>,
) -> AppResult<Html<String>> {
    let selection = SelectionProduits::depuis_params(
        params.search.as_deref(),
        params.type_the.as_deref(),
        params.sort.as_deref(),
    );
    let produits = produit_service::lister_produits(&state, &selection).await?;

    // Jeton illisible ou inconnu : pas de bandeau, la page reste valide.
    let flash = params
        .flash
        .as_deref()
        .and_then(|jeton| Uuid::parse_str(jeton).ok())
        .and_then(|jeton| state.flash.take(&jeton));

    let page = PageCatalogue {
        produits,
        recherche: params.search.unwrap_or_default(),
        type_the: params.type_the.unwrap_or_default(),
        tri: selection.tri.cle(),
        flash,
    };
    rendre(&page)
}

pub async fn nouveau_produit() -> AppResult<Html<String>> {
    let page = PageFormulaire {
        titre: "Nouveau produit",
        action: "/enregistrer".to_string(),
        formulaire: FormulaireProduit::default(),
        erreurs: BTreeMap::new(),
    };
    rendre(&page)
}

pub async fn enregistrer_produit(
    State(state): State<AppState>,
    Form(formulaire): Form<FormulaireProduit>,
) -> AppResult<Response> {
    match formulaire.valider() {
        Ok(champs) => {
            produit_service::enregistrer_produit(&state, None, champs).await?;
            Ok(Redirect::to("/").into_response())
        }
        Err(erreurs) => {
            let page = PageFormulaire {
                titre: "Nouveau produit",
                action: "/enregistrer".to_string(),
                formulaire,
                erreurs: erreurs_en_map(&erreurs),
            };
            Ok(rendre(&page)?.into_response())
        }
    }
}

pub async fn formulaire_modification(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    let Some(produit) = produit_service::trouver_produit(&state, id).await? else {
        return Ok(Redirect::to("/").into_response());
    };

    let page = PageFormulaire {
        titre: "Modifier le produit",
        action: format!("/modifier/{id}"),
        formulaire: FormulaireProduit::from(&produit),
        erreurs: BTreeMap::new(),
    };
    Ok(rendre(&page)?.into_response())
}

/// L'identifiant du chemin fait foi : le corps du formulaire n'en porte
/// pas, un champ `id` soumis par un client est donc ignoré.
pub async fn modifier_produit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(formulaire): Form<FormulaireProduit>,
) -> AppResult<Response> {
    match formulaire.valider() {
        Ok(champs) => {
            produit_service::enregistrer_produit(&state, Some(id), champs).await?;
            Ok(Redirect::to("/").into_response())
        }
        Err(erreurs) => {
            let page = PageFormulaire {
                titre: "Modifier le produit",
                action: format!("/modifier/{id}"),
                formulaire,
                erreurs: erreurs_en_map(&erreurs),
            };
            Ok(rendre(&page)?.into_response())
        }
    }
}

/// La suppression redirige toujours vers le catalogue : l'issue, bonne
/// ou mauvaise, est racontée par le message flash.
pub async fn supprimer_produit(State(state): State<AppState>, Path(id): Path<i64>) -> Redirect {
    let flash = match produit_service::supprimer_produit(&state, id).await {
        Ok(produit) => Flash::succes(format!(
            "Le produit \"{}\" a été supprimé avec succès",
            produit.nom
        )),
        Err(AppError::ProduitIntrouvable(id)) => {
            Flash::erreur(format!("Produit non trouvé avec l'ID : {id}"))
        }
        Err(erreur) => {
            tracing::error!(id, erreur = %erreur, "échec de la suppression");
            Flash::erreur(format!("Erreur lors de la suppression : {erreur}"))
        }
    };

    let jeton = state.flash.store(flash);
    Redirect::to(&format!("/?flash={jeton}"))
}

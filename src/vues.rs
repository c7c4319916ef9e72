use std::collections::BTreeMap;

use askama::Template;
use axum::response::Html;

use crate::{
    dto::produits::FormulaireProduit, entity::produit, error::AppResult, flash::Flash,
};

/// Page catalogue : la liste filtrée et triée, l'écho des critères pour
/// pré-remplir la barre de recherche, et l'éventuel bandeau flash.
#[derive(Template)]
#[template(path = "index.html")]
pub struct PageCatalogue {
    pub produits: Vec<produit::Model>,
    pub recherche: String,
    pub type_the: String,
    pub tri: &'static str,
    pub flash: Option<Flash>,
}

/// Page formulaire, partagée entre la création et la modification. Les
/// erreurs sont indexées par nom de champ exposé.
#[derive(Template)]
#[template(path = "formulaire_produit.html")]
pub struct PageFormulaire {
    pub titre: &'static str,
    pub action: String,
    pub formulaire: FormulaireProduit,
    pub erreurs: BTreeMap<String, String>,
}

pub fn rendre<T: Template>(page: &T) -> AppResult<Html<String>> {
    Ok(Html(page.render()?))
}

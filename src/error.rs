use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Produit non trouvé avec l'ID : {0}")]
    ProduitIntrouvable(i64),

    #[error("Erreur de base de données : {0}")]
    Orm(#[from] sea_orm::DbErr),

    #[error("Erreur de rendu de la page")]
    Rendu(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::ProduitIntrouvable(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Orm(_) | AppError::Rendu(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Une erreur interne est survenue".to_string(),
            ),
        };

        // Le détail reste dans les journaux, jamais dans la réponse.
        tracing::error!(error = %self, status = %status, "request failed");

        let body = Html(format!(
            "<!doctype html><html lang=\"fr\"><head><meta charset=\"utf-8\">\
             <title>Erreur</title></head><body><h1>{}</h1>\
             <p>{message}</p><p><a href=\"/\">Retour au catalogue</a></p></body></html>",
            status.as_u16(),
        ));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

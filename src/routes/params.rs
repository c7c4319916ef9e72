use serde::Deserialize;

/// Paramètres de requête de la page catalogue. Tout est optionnel; les
/// noms exposés (`typeThe`, etc.) suivent la casse des champs du
/// formulaire HTML.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListeParams {
    pub search: Option<String>,
    pub type_the: Option<String>,
    pub sort: Option<String>,
    /// Jeton déposé par une redirection, consommé au rendu suivant.
    pub flash: Option<String>,
}

/// Clé de tri symbolique. L'ensemble est fermé : toute valeur absente,
/// vide ou inconnue retombe sur le tri par nom croissant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TriProduits {
    #[default]
    Nom,
    Prix,
    PrixDesc,
    QuantiteStock,
    DateReception,
}

impl TriProduits {
    pub fn depuis_cle(cle: Option<&str>) -> Self {
        match cle {
            Some("prix") => TriProduits::Prix,
            Some("prixDesc") => TriProduits::PrixDesc,
            Some("quantiteStock") => TriProduits::QuantiteStock,
            Some("dateReception") => TriProduits::DateReception,
            _ => TriProduits::Nom,
        }
    }

    /// Clé canonique, telle que la page la réaffiche dans son sélecteur.
    pub fn cle(&self) -> &'static str {
        match self {
            TriProduits::Nom => "nom",
            TriProduits::Prix => "prix",
            TriProduits::PrixDesc => "prixDesc",
            TriProduits::QuantiteStock => "quantiteStock",
            TriProduits::DateReception => "dateReception",
        }
    }
}

/// Les quatre combinaisons de présence des filtres.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FiltreProduits {
    Tous,
    ParNom(String),
    ParType(String),
    ParNomEtType { nom: String, type_the: String },
}

/// Sélection complète d'un listage : un filtre parmi quatre et un tri
/// toujours résolu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionProduits {
    pub filtre: FiltreProduits,
    pub tri: TriProduits,
}

impl SelectionProduits {
    /// Construit la sélection à partir des paramètres bruts.
    ///
    /// Un filtre n'est retenu que si sa valeur est non vide une fois
    /// élaguée. La valeur de recherche est élaguée avant usage; la
    /// valeur du type est comparée telle quelle, espaces compris. Si
    /// les deux filtres sont présents, la requête combinée l'emporte.
    pub fn depuis_params(
        search: Option<&str>,
        type_the: Option<&str>,
        sort: Option<&str>,
    ) -> Self {
        let recherche = search.map(str::trim).filter(|s| !s.is_empty());
        let type_filtre = type_the.filter(|s| !s.trim().is_empty());

        let filtre = match (recherche, type_filtre) {
            (Some(nom), Some(type_the)) => FiltreProduits::ParNomEtType {
                nom: nom.to_string(),
                type_the: type_the.to_string(),
            },
            (Some(nom), None) => FiltreProduits::ParNom(nom.to_string()),
            (None, Some(type_the)) => FiltreProduits::ParType(type_the.to_string()),
            (None, None) => FiltreProduits::Tous,
        };

        Self {
            filtre,
            tri: TriProduits::depuis_cle(sort),
        }
    }
}

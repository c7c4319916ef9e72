use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::entity::produit;

pub const NOM_MAX: usize = 100;
pub const TYPE_THE_MAX: usize = 50;
pub const ORIGINE_MAX: usize = 100;
pub const DESCRIPTION_MAX: usize = 500;
pub const PRIX_MIN: Decimal = dec!(5.00);
pub const PRIX_MAX: Decimal = dec!(100.00);

const FORMAT_DATE: &str = "%Y-%m-%d";

/// Soumission brute du formulaire produit. Tous les champs arrivent en
/// texte pour que les valeurs illisibles produisent un message par champ
/// au lieu d'un rejet de la requête entière.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct FormulaireProduit {
    #[validate(custom = "valider_nom")]
    pub nom: String,
    #[validate(custom = "valider_type_the")]
    pub type_the: String,
    #[validate(custom = "valider_origine")]
    pub origine: String,
    #[validate(custom = "valider_prix")]
    pub prix: String,
    #[validate(custom = "valider_quantite_stock")]
    pub quantite_stock: String,
    #[validate(custom = "valider_description")]
    pub description: String,
    #[validate(custom = "valider_date_reception")]
    pub date_reception: String,
}

/// Valeurs d'un produit une fois la soumission validée et convertie.
#[derive(Debug, Clone, PartialEq)]
pub struct ChampsProduit {
    pub nom: String,
    pub type_the: String,
    pub origine: String,
    pub prix: Decimal,
    pub quantite_stock: i32,
    pub description: Option<String>,
    pub date_reception: NaiveDate,
}

impl FormulaireProduit {
    /// Applique les règles métier puis convertit les champs texte en
    /// valeurs typées. Les conversions refaites ici ne peuvent échouer
    /// qu'après un contournement des validateurs, auquel cas l'erreur
    /// est rapportée sur le champ concerné comme une saisie invalide.
    pub fn valider(&self) -> Result<ChampsProduit, ValidationErrors> {
        Validate::validate(self)?;

        let prix = Decimal::from_str(self.prix.trim())
            .map_err(|_| erreurs_sur("prix", "prix_invalide", "Le prix est invalide"))?;
        let quantite_stock = self.quantite_stock.trim().parse::<i32>().map_err(|_| {
            erreurs_sur(
                "quantiteStock",
                "quantite_invalide",
                "La quantité en stock est invalide",
            )
        })?;
        let date_reception = NaiveDate::parse_from_str(self.date_reception.trim(), FORMAT_DATE)
            .map_err(|_| {
                erreurs_sur(
                    "dateReception",
                    "date_invalide",
                    "La date de réception est invalide",
                )
            })?;

        let description = match self.description.trim() {
            "" => None,
            _ => Some(self.description.clone()),
        };

        Ok(ChampsProduit {
            nom: self.nom.clone(),
            type_the: self.type_the.clone(),
            origine: self.origine.clone(),
            prix,
            quantite_stock,
            description,
            date_reception,
        })
    }
}

impl From<&produit::Model> for FormulaireProduit {
    fn from(modele: &produit::Model) -> Self {
        Self {
            nom: modele.nom.clone(),
            type_the: modele.type_the.clone(),
            origine: modele.origine.clone(),
            prix: modele.prix.to_string(),
            quantite_stock: modele.quantite_stock.to_string(),
            description: modele.description.clone().unwrap_or_default(),
            date_reception: modele.date_reception.format(FORMAT_DATE).to_string(),
        }
    }
}

/// Aplatie les erreurs de validation en un message par champ, clé par le
/// nom exposé dans le formulaire HTML plutôt que par le nom Rust.
pub fn erreurs_en_map(erreurs: &ValidationErrors) -> BTreeMap<String, String> {
    erreurs
        .field_errors()
        .iter()
        .filter_map(|(champ, liste)| {
            liste.first().and_then(|erreur| {
                erreur
                    .message
                    .as_ref()
                    .map(|message| (nom_expose(champ).to_string(), message.to_string()))
            })
        })
        .collect()
}

fn nom_expose(champ: &str) -> &str {
    match champ {
        "type_the" => "typeThe",
        "quantite_stock" => "quantiteStock",
        "date_reception" => "dateReception",
        autre => autre,
    }
}

fn erreur(code: &'static str, message: &'static str) -> ValidationError {
    let mut erreur = ValidationError::new(code);
    erreur.message = Some(message.into());
    erreur
}

fn erreurs_sur(champ: &'static str, code: &'static str, message: &'static str) -> ValidationErrors {
    let mut erreurs = ValidationErrors::new();
    erreurs.add(champ, erreur(code, message));
    erreurs
}

fn valider_nom(nom: &str) -> Result<(), ValidationError> {
    if nom.trim().is_empty() {
        return Err(erreur("nom_obligatoire", "Le nom est obligatoire"));
    }
    if nom.chars().count() > NOM_MAX {
        return Err(erreur(
            "nom_trop_long",
            "Le nom ne doit pas dépasser 100 caractères",
        ));
    }
    Ok(())
}

fn valider_type_the(type_the: &str) -> Result<(), ValidationError> {
    if type_the.trim().is_empty() {
        return Err(erreur(
            "type_the_obligatoire",
            "Le type de thé est obligatoire",
        ));
    }
    if type_the.chars().count() > TYPE_THE_MAX {
        return Err(erreur(
            "type_the_trop_long",
            "Le type de thé ne doit pas dépasser 50 caractères",
        ));
    }
    Ok(())
}

fn valider_origine(origine: &str) -> Result<(), ValidationError> {
    if origine.trim().is_empty() {
        return Err(erreur("origine_obligatoire", "L'origine est obligatoire"));
    }
    if origine.chars().count() > ORIGINE_MAX {
        return Err(erreur(
            "origine_trop_longue",
            "L'origine ne doit pas dépasser 100 caractères",
        ));
    }
    Ok(())
}

fn valider_prix(prix: &str) -> Result<(), ValidationError> {
    let brut = prix.trim();
    if brut.is_empty() {
        return Err(erreur("prix_obligatoire", "Le prix est obligatoire"));
    }
    let Ok(valeur) = Decimal::from_str(brut) else {
        return Err(erreur("prix_invalide", "Le prix est invalide"));
    };
    if valeur < PRIX_MIN {
        return Err(erreur("prix_minimum", "Le prix minimum est de 5,00€"));
    }
    if valeur > PRIX_MAX {
        return Err(erreur("prix_maximum", "Le prix maximum est de 100,00€"));
    }
    Ok(())
}

fn valider_quantite_stock(quantite: &str) -> Result<(), ValidationError> {
    let brut = quantite.trim();
    if brut.is_empty() {
        return Err(erreur(
            "quantite_obligatoire",
            "La quantité en stock est obligatoire",
        ));
    }
    let Ok(valeur) = brut.parse::<i32>() else {
        return Err(erreur(
            "quantite_invalide",
            "La quantité en stock est invalide",
        ));
    };
    if valeur < 0 {
        return Err(erreur(
            "quantite_negative",
            "La quantité en stock ne peut pas être négative",
        ));
    }
    Ok(())
}

fn valider_description(description: &str) -> Result<(), ValidationError> {
    if description.chars().count() > DESCRIPTION_MAX {
        return Err(erreur(
            "description_trop_longue",
            "La description ne doit pas dépasser 500 caractères",
        ));
    }
    Ok(())
}

fn valider_date_reception(date: &str) -> Result<(), ValidationError> {
    let brut = date.trim();
    if brut.is_empty() {
        return Err(erreur(
            "date_obligatoire",
            "La date de réception est obligatoire",
        ));
    }
    let Ok(valeur) = NaiveDate::parse_from_str(brut, FORMAT_DATE) else {
        return Err(erreur("date_invalide", "La date de réception est invalide"));
    };
    if valeur > Local::now().date_naive() {
        return Err(erreur(
            "date_future",
            "La date de réception ne peut pas être dans le futur",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn formulaire_valide() -> FormulaireProduit {
        FormulaireProduit {
            nom: "Sencha".to_string(),
            type_the: "Vert".to_string(),
            origine: "Japon".to_string(),
            prix: "12.50".to_string(),
            quantite_stock: "10".to_string(),
            description: String::new(),
            date_reception: "2025-03-01".to_string(),
        }
    }

    fn message_du_champ(erreurs: &ValidationErrors, champ: &str) -> String {
        erreurs_en_map(erreurs)
            .get(champ)
            .cloned()
            .unwrap_or_else(|| panic!("aucune erreur sur le champ {champ}"))
    }

    #[test]
    fn un_formulaire_valide_est_converti_en_champs_types() {
        let champs = formulaire_valide().valider().unwrap();

        assert_eq!(champs.nom, "Sencha");
        assert_eq!(champs.type_the, "Vert");
        assert_eq!(champs.origine, "Japon");
        assert_eq!(champs.prix, dec!(12.50));
        assert_eq!(champs.quantite_stock, 10);
        assert_eq!(champs.description, None);
        assert_eq!(
            champs.date_reception,
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
    }

    #[test]
    fn une_description_renseignee_est_conservee() {
        let mut formulaire = formulaire_valide();
        formulaire.description = "Thé de printemps, cueillette fine.".to_string();

        let champs = formulaire.valider().unwrap();
        assert_eq!(
            champs.description.as_deref(),
            Some("Thé de printemps, cueillette fine.")
        );
    }

    #[test]
    fn une_description_blanche_devient_absente() {
        let mut formulaire = formulaire_valide();
        formulaire.description = "   ".to_string();

        let champs = formulaire.valider().unwrap();
        assert_eq!(champs.description, None);
    }

    #[test]
    fn le_nom_blanc_est_refuse() {
        let mut formulaire = formulaire_valide();
        formulaire.nom = "   ".to_string();

        let erreurs = formulaire.valider().unwrap_err();
        assert_eq!(message_du_champ(&erreurs, "nom"), "Le nom est obligatoire");
    }

    #[test]
    fn le_nom_est_limite_a_cent_caracteres() {
        let mut formulaire = formulaire_valide();
        formulaire.nom = "é".repeat(NOM_MAX);
        assert!(formulaire.valider().is_ok());

        formulaire.nom = "é".repeat(NOM_MAX + 1);
        let erreurs = formulaire.valider().unwrap_err();
        assert_eq!(
            message_du_champ(&erreurs, "nom"),
            "Le nom ne doit pas dépasser 100 caractères"
        );
    }

    #[test]
    fn le_type_est_limite_a_cinquante_caracteres() {
        let mut formulaire = formulaire_valide();
        formulaire.type_the = "a".repeat(TYPE_THE_MAX);
        assert!(formulaire.valider().is_ok());

        formulaire.type_the = "a".repeat(TYPE_THE_MAX + 1);
        let erreurs = formulaire.valider().unwrap_err();
        assert_eq!(
            message_du_champ(&erreurs, "typeThe"),
            "Le type de thé ne doit pas dépasser 50 caractères"
        );
    }

    #[test]
    fn l_origine_manquante_est_refusee() {
        let mut formulaire = formulaire_valide();
        formulaire.origine = String::new();

        let erreurs = formulaire.valider().unwrap_err();
        assert_eq!(
            message_du_champ(&erreurs, "origine"),
            "L'origine est obligatoire"
        );
    }

    #[test]
    fn le_prix_respecte_les_bornes_incluses() {
        let mut formulaire = formulaire_valide();

        formulaire.prix = "5.00".to_string();
        assert!(formulaire.valider().is_ok());

        formulaire.prix = "100.00".to_string();
        assert!(formulaire.valider().is_ok());

        formulaire.prix = "4.99".to_string();
        let erreurs = formulaire.valider().unwrap_err();
        assert_eq!(
            message_du_champ(&erreurs, "prix"),
            "Le prix minimum est de 5,00€"
        );

        formulaire.prix = "100.01".to_string();
        let erreurs = formulaire.valider().unwrap_err();
        assert_eq!(
            message_du_champ(&erreurs, "prix"),
            "Le prix maximum est de 100,00€"
        );
    }

    #[test]
    fn le_prix_illisible_ou_absent_est_signale() {
        let mut formulaire = formulaire_valide();

        formulaire.prix = String::new();
        let erreurs = formulaire.valider().unwrap_err();
        assert_eq!(message_du_champ(&erreurs, "prix"), "Le prix est obligatoire");

        formulaire.prix = "douze".to_string();
        let erreurs = formulaire.valider().unwrap_err();
        assert_eq!(message_du_champ(&erreurs, "prix"), "Le prix est invalide");
    }

    #[test]
    fn le_prix_saisi_avec_des_espaces_est_accepte() {
        let mut formulaire = formulaire_valide();
        formulaire.prix = " 12.50 ".to_string();

        let champs = formulaire.valider().unwrap();
        assert_eq!(champs.prix, dec!(12.50));
    }

    #[test]
    fn la_quantite_negative_est_refusee() {
        let mut formulaire = formulaire_valide();

        formulaire.quantite_stock = "0".to_string();
        assert!(formulaire.valider().is_ok());

        formulaire.quantite_stock = "-1".to_string();
        let erreurs = formulaire.valider().unwrap_err();
        assert_eq!(
            message_du_champ(&erreurs, "quantiteStock"),
            "La quantité en stock ne peut pas être négative"
        );
    }

    #[test]
    fn la_quantite_illisible_ou_absente_est_signalee() {
        let mut formulaire = formulaire_valide();

        formulaire.quantite_stock = String::new();
        let erreurs = formulaire.valider().unwrap_err();
        assert_eq!(
            message_du_champ(&erreurs, "quantiteStock"),
            "La quantité en stock est obligatoire"
        );

        formulaire.quantite_stock = "3.5".to_string();
        let erreurs = formulaire.valider().unwrap_err();
        assert_eq!(
            message_du_champ(&erreurs, "quantiteStock"),
            "La quantité en stock est invalide"
        );
    }

    #[test]
    fn la_description_est_limitee_a_cinq_cents_caracteres() {
        let mut formulaire = formulaire_valide();
        formulaire.description = "d".repeat(DESCRIPTION_MAX);
        assert!(formulaire.valider().is_ok());

        formulaire.description = "d".repeat(DESCRIPTION_MAX + 1);
        let erreurs = formulaire.valider().unwrap_err();
        assert_eq!(
            message_du_champ(&erreurs, "description"),
            "La description ne doit pas dépasser 500 caractères"
        );
    }

    #[test]
    fn la_date_du_jour_est_acceptee_mais_pas_demain() {
        let aujourd_hui = Local::now().date_naive();
        let mut formulaire = formulaire_valide();

        formulaire.date_reception = aujourd_hui.format("%Y-%m-%d").to_string();
        assert!(formulaire.valider().is_ok());

        formulaire.date_reception = (aujourd_hui + Duration::days(1))
            .format("%Y-%m-%d")
            .to_string();
        let erreurs = formulaire.valider().unwrap_err();
        assert_eq!(
            message_du_champ(&erreurs, "dateReception"),
            "La date de réception ne peut pas être dans le futur"
        );
    }

    #[test]
    fn la_date_illisible_ou_absente_est_signalee() {
        let mut formulaire = formulaire_valide();

        formulaire.date_reception = String::new();
        let erreurs = formulaire.valider().unwrap_err();
        assert_eq!(
            message_du_champ(&erreurs, "dateReception"),
            "La date de réception est obligatoire"
        );

        formulaire.date_reception = "01/03/2025".to_string();
        let erreurs = formulaire.valider().unwrap_err();
        assert_eq!(
            message_du_champ(&erreurs, "dateReception"),
            "La date de réception est invalide"
        );
    }

    #[test]
    fn chaque_champ_invalide_recoit_son_message() {
        let formulaire = FormulaireProduit::default();
        let erreurs = formulaire.valider().unwrap_err();
        let messages = erreurs_en_map(&erreurs);

        assert_eq!(messages.len(), 6);
        assert_eq!(messages["nom"], "Le nom est obligatoire");
        assert_eq!(messages["typeThe"], "Le type de thé est obligatoire");
        assert_eq!(messages["origine"], "L'origine est obligatoire");
        assert_eq!(messages["prix"], "Le prix est obligatoire");
        assert_eq!(
            messages["quantiteStock"],
            "La quantité en stock est obligatoire"
        );
        assert_eq!(
            messages["dateReception"],
            "La date de réception est obligatoire"
        );
    }

    #[test]
    fn un_modele_se_reedite_avec_ses_valeurs_formatees() {
        let modele = produit::Model {
            id: 7,
            nom: "Gyokuro".to_string(),
            type_the: "Vert".to_string(),
            origine: "Japon".to_string(),
            prix: dec!(48.00),
            quantite_stock: 3,
            description: Some("Ombré trois semaines.".to_string()),
            date_reception: NaiveDate::from_ymd_opt(2025, 2, 14).unwrap(),
        };

        let formulaire = FormulaireProduit::from(&modele);
        assert_eq!(formulaire.nom, "Gyokuro");
        assert_eq!(formulaire.prix, "48.00");
        assert_eq!(formulaire.quantite_stock, "3");
        assert_eq!(formulaire.description, "Ombré trois semaines.");
        assert_eq!(formulaire.date_reception, "2025-02-14");

        assert!(formulaire.valider().is_ok());
    }
}

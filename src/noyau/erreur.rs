// src/noyau/erreur.rs
//
// Erreurs du noyau
// ----------------
// Toute la chaîne validation -> jetons -> évaluation remonte une ErreurCalcul
// (jamais de valeur par défaut silencieuse). Le noyau n’affiche rien : c’est
// la vue qui décide quoi montrer.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErreurCalcul {
    #[error("Entrée vide")]
    EntreeVide,

    #[error("caractère invalide '{caractere}' (position {position})")]
    CaractereInvalide { position: usize, caractere: char },

    /// Nom de fonction présent, mais ni `f(...)`, ni `f123`, ni `!`.
    #[error("format de fonction invalide : {0}")]
    FormatFonctionInvalide(String),

    #[error("jeton invalide : {0:?}")]
    JetonInvalide(String),

    #[error("opérateur inconnu : {0:?}")]
    OperateurInconnu(String),

    #[error("fonction inconnue : {0:?}")]
    FonctionInconnue(String),

    #[error("division par zéro")]
    DivisionParZero,

    #[error("factorielle d’un nombre négatif")]
    FactorielleNegative,

    #[error("factorielle trop grande (limite : {limite})")]
    FactorielleTropGrande { limite: u32 },

    #[error("factorielle d’un nombre non entier")]
    FactorielleNonEntiere,

    /// log(x ≤ 0), sqrt(x < 0).
    #[error("{fonction}({valeur}) hors domaine")]
    HorsDomaine { fonction: &'static str, valeur: f64 },

    /// Pile d’opérandes ≠ 1 à la fin, opérande manquant, ou parenthèses mal appariées.
    #[error("expression mal formée : {0}")]
    ExpressionMalformee(&'static str),
}

pub type ResultatCalcul<T> = Result<T, ErreurCalcul>;

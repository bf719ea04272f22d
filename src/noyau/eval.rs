//! Noyau — évaluation (pipeline réel)
//!
//! normalisation -> validation -> jetons -> deux piles -> f64
//!
//! Chaque appel part de zéro (piles fraîches) : aucun état ne traverse deux appels,
//! l’API peut être appelée depuis plusieurs threads.

use super::erreur::{ErreurCalcul, ResultatCalcul};
use super::jetons::{format_tokens, tokenize};
use super::piles::evaluer;
use super::validation::valider;

/// Résultat + démarche (jetons) d’un calcul.
#[derive(Clone, Debug, PartialEq)]
pub struct Calcul {
    pub valeur: f64,
    pub jetons: String,
}

/// Lettres en minuscules ("SIN(30)" == "sin(30)").
///
/// Les blancs restent en place (le découpage les jette) : une position rapportée
/// par la validation compte dans la chaîne de l’appelant.
pub fn normaliser(expr: &str) -> String {
    expr.to_lowercase()
}

/// Le caractère fautif tel que saisi ('X' et non 'x').
///
/// Tout caractère modifié par la mise en minuscules est lui-même refusé : le premier
/// fautif précède toute expansion, sa position vaut donc dans les deux chaînes.
fn caractere_d_origine(expr: &str, e: ErreurCalcul) -> ErreurCalcul {
    match e {
        ErreurCalcul::CaractereInvalide {
            position,
            caractere,
        } => ErreurCalcul::CaractereInvalide {
            position,
            caractere: expr.chars().nth(position).unwrap_or(caractere),
        },
        autre => autre,
    }
}

/// API publique : évalue une expression et retourne la valeur + la démarche.
pub fn calculer_detaille(expr: &str) -> ResultatCalcul<Calcul> {
    let s = normaliser(expr);

    // 1) Forme générale (avant tout travail)
    valider(&s).map_err(|e| caractere_d_origine(expr, e))?;

    // 2) Jetons
    let jetons = tokenize(&s)?;

    // 3) Deux piles
    let valeur = evaluer(&jetons)?;

    Ok(Calcul {
        valeur,
        jetons: format_tokens(&jetons),
    })
}

/// API publique : évalue une expression.
pub fn calculer(expr: &str) -> ResultatCalcul<f64> {
    calculer_detaille(expr).map(|c| c.valeur)
}

//! Noyau de calcul (f64)
//!
//! Organisation interne :
//! - erreur.rs      : ErreurCalcul (taxonomie complète)
//! - factorielle.rs : n! itératif
//! - trig.rs        : table d’angles usuels + séries de Maclaurin
//! - operations.rs  : registre symbole -> op binaire, nom -> fonction
//! - validation.rs  : contrôle de forme avant tokenisation
//! - jetons.rs      : tokenisation
//! - piles.rs       : shunting-yard à deux piles
//! - format.rs      : affichage d’un résultat
//! - eval.rs        : pipeline complet

pub mod erreur;
pub mod eval;
pub mod factorielle;
pub mod format;
pub mod jetons;
pub mod operations;
pub mod piles;
pub mod trig;
pub mod validation;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurCalcul;
pub use eval::{calculer, calculer_detaille, Calcul};
pub use format::format_resultat;

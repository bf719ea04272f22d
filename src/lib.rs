//! Calculatrice scientifique : noyau d’évaluation (f64, deux piles).
//!
//! ```
//! use calculatrice_sci::noyau::{calculer, format_resultat};
//!
//! assert_eq!(calculer("2+3*4"), Ok(14.0));
//! assert_eq!(format_resultat(calculer("sin(30)").unwrap()), "0.5");
//! ```

pub mod noyau;

pub use noyau::{calculer, calculer_detaille, format_resultat, Calcul, ErreurCalcul};

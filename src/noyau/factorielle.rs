// src/noyau/factorielle.rs
//
// Factorielle entière (itérative).
// - Utilisée par l’opération scientifique "!" (bornée à 10 par l’appelant)
// - Réutilisée par les séries de Taylor (indices fixes ≤ 9)

use super::erreur::{ErreurCalcul, ResultatCalcul};

/// n! pour un entier signé.
///
/// - n < 0 => FactorielleNegative
/// - dépassement u64 => FactorielleTropGrande (n ≥ 21)
pub fn factorielle(n: i64) -> ResultatCalcul<u64> {
    if n < 0 {
        return Err(ErreurCalcul::FactorielleNegative);
    }

    let mut acc: u64 = 1;
    for k in 2..=n as u64 {
        acc = acc
            .checked_mul(k)
            .ok_or(ErreurCalcul::FactorielleTropGrande { limite: 20 })?;
    }
    Ok(acc)
}

/// Petits indices des séries (n < PROFONDEUR). Au-delà de 20, u64 déborde.
pub(crate) fn factorielle_petite(n: u32) -> u64 {
    debug_assert!(n <= 20, "factorielle_petite({n}) : dépasse u64");
    (2..=u64::from(n)).product()
}

// src/noyau/format.rs

/// Affichage d’un résultat pour la vue et l’historique.
///
/// - -0 => "0"
/// - ±∞ => "∞" / "-∞"
/// - NaN => "indéfini"
/// - sinon : Display de f64 ("5", "0.5", "-2.25")
pub fn format_resultat(x: f64) -> String {
    if x.is_nan() {
        return "indéfini".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "∞".into() } else { "-∞".into() };
    }
    if x == 0.0 {
        return "0".to_string();
    }
    format!("{x}")
}

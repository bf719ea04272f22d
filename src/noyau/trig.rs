// src/noyau/trig.rs
//
// Trig (degrés en entrée) : table d’angles usuels + séries de Maclaurin
// --------------------------------------------------------------------
// - Table : angles entiers en degrés {0, 30, 45, ..., 360} -> valeurs exactes f64
//   (consultée AVANT la conversion en radians, seulement si l’angle est entier)
// - Sinon : série tronquée sur la valeur en radians
//     sin x ≈ x - x³/3! + x⁵/5! - x⁷/7! + x⁹/9!
//     cos x ≈ 1 - x²/2! + x⁴/4! - x⁶/6! + x⁸/8!
// - tan = sin/cos, cotg = cos/sin (±∞ propagé tel quel)
//
// Borne de précision : 5 termes seulement. L’erreur est < 1e-12 jusqu’à ~20°,
// de l’ordre de 1e-5 vers 100°, et devient visible (> 1e-2) au-delà de ~200°
// (pas de réduction de période).

use std::f64::consts::FRAC_1_SQRT_2;

use num_traits::ToPrimitive;

use super::factorielle::factorielle_petite;

/// Nombre de puissances parcourues par les séries (indices 0..PROFONDEUR).
pub const PROFONDEUR: u32 = 10;

/// √3/2 en f64.
const RAC3_SUR_2: f64 = 0.866_025_403_784_438_6;

/// (degrés, sin, cos)
const TABLE: [(i32, f64, f64); 17] = [
    (0, 0.0, 1.0),
    (30, 0.5, RAC3_SUR_2),
    (45, FRAC_1_SQRT_2, FRAC_1_SQRT_2),
    (60, RAC3_SUR_2, 0.5),
    (90, 1.0, 0.0),
    (120, RAC3_SUR_2, -0.5),
    (135, FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
    (150, 0.5, -RAC3_SUR_2),
    (180, 0.0, -1.0),
    (210, -0.5, -RAC3_SUR_2),
    (225, -FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
    (240, -RAC3_SUR_2, -0.5),
    (270, -1.0, 0.0),
    (300, -RAC3_SUR_2, 0.5),
    (315, -FRAC_1_SQRT_2, FRAC_1_SQRT_2),
    (330, -0.5, RAC3_SUR_2),
    (360, 0.0, 1.0),
];

#[derive(Clone, Copy, Debug)]
enum TrigFn {
    Sin,
    Cos,
}

/// Cherche un angle entier (en degrés) dans la table.
fn angle_tabule(degres: f64, f: TrigFn) -> Option<f64> {
    if degres.fract() != 0.0 {
        return None;
    }
    let d = degres.to_i32()?;

    TABLE
        .iter()
        .find(|(k, _, _)| *k == d)
        .map(|&(_, s, c)| match f {
            TrigFn::Sin => s,
            TrigFn::Cos => c,
        })
}

/// Somme des termes de Maclaurin d’indice `premier`, `premier + 2`, ... (< PROFONDEUR).
fn serie(x: f64, premier: u32) -> f64 {
    let mut somme = 0.0;
    let mut signe = 1.0;
    let mut i = premier;
    while i < PROFONDEUR {
        somme += signe * x.powi(i as i32) / factorielle_petite(i) as f64;
        signe = -signe;
        i += 2;
    }
    somme
}

/// sin(x) par série, x en radians.
pub fn sin_serie(radians: f64) -> f64 {
    serie(radians, 1)
}

/// cos(x) par série, x en radians.
pub fn cos_serie(radians: f64) -> f64 {
    serie(radians, 0)
}

/// sin d’un angle en degrés : table si possible, sinon série sur les radians.
pub fn sin_degres(degres: f64) -> f64 {
    angle_tabule(degres, TrigFn::Sin).unwrap_or_else(|| sin_serie(degres.to_radians()))
}

pub fn cos_degres(degres: f64) -> f64 {
    angle_tabule(degres, TrigFn::Cos).unwrap_or_else(|| cos_serie(degres.to_radians()))
}

/// tan = sin/cos ; tan(90°) = +∞ (cos tabulé à 0 exact).
pub fn tan_degres(degres: f64) -> f64 {
    sin_degres(degres) / cos_degres(degres)
}

/// cotg = cos/sin ; cotg(0°) = +∞.
pub fn cotg_degres(degres: f64) -> f64 {
    cos_degres(degres) / sin_degres(degres)
}

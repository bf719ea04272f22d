// src/noyau/operations.rs
//
// Registre des opérations
// -----------------------
// - OpBinaire  : + - * / ^        (symbole -> comportement)
// - FonctionSci: sin cos tan log exp sqrt !   (nom -> comportement)
//
// Les deux tables sont des enums : pas d’état global, pas de dispatch dynamique.
// Les comportements sont purs (f64 -> f64) ; les erreurs remontent en ErreurCalcul.

use std::fmt;

use num_traits::ToPrimitive;

use super::erreur::{ErreurCalcul, ResultatCalcul};
use super::factorielle::factorielle;
use super::trig::{cos_degres, sin_degres, tan_degres};

/// Borne de "!" (au-delà : FactorielleTropGrande).
pub const FACTORIELLE_MAX: u32 = 10;

/* ------------------------ Opérations binaires ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpBinaire {
    Addition,
    Soustraction,
    Multiplication,
    Division,
    Puissance,
}

impl OpBinaire {
    pub const TOUTES: [OpBinaire; 5] = [
        OpBinaire::Addition,
        OpBinaire::Soustraction,
        OpBinaire::Multiplication,
        OpBinaire::Division,
        OpBinaire::Puissance,
    ];

    pub fn depuis_symbole(s: &str) -> ResultatCalcul<Self> {
        match s {
            "+" => Ok(OpBinaire::Addition),
            "-" => Ok(OpBinaire::Soustraction),
            "*" => Ok(OpBinaire::Multiplication),
            "/" => Ok(OpBinaire::Division),
            "^" => Ok(OpBinaire::Puissance),
            _ => Err(ErreurCalcul::OperateurInconnu(s.to_string())),
        }
    }

    pub fn symbole(self) -> char {
        match self {
            OpBinaire::Addition => '+',
            OpBinaire::Soustraction => '-',
            OpBinaire::Multiplication => '*',
            OpBinaire::Division => '/',
            OpBinaire::Puissance => '^',
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            OpBinaire::Addition | OpBinaire::Soustraction => 1,
            OpBinaire::Multiplication | OpBinaire::Division => 2,
            OpBinaire::Puissance => 3,
        }
    }

    pub fn associatif_droite(self) -> bool {
        matches!(self, OpBinaire::Puissance)
    }

    /// Applique l’opération : `a` = opérande gauche, `b` = opérande droit.
    pub fn appliquer(self, a: f64, b: f64) -> ResultatCalcul<f64> {
        match self {
            OpBinaire::Addition => Ok(a + b),
            OpBinaire::Soustraction => Ok(a - b),
            OpBinaire::Multiplication => Ok(a * b),
            OpBinaire::Division => {
                if b == 0.0 {
                    return Err(ErreurCalcul::DivisionParZero);
                }
                Ok(a / b)
            }
            OpBinaire::Puissance => Ok(a.powf(b)),
        }
    }
}

impl fmt::Display for OpBinaire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

/* ------------------------ Fonctions scientifiques (unaires) ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FonctionSci {
    Sin,
    Cos,
    Tan,
    Log,
    Exp,
    Sqrt,
    Factorielle,
}

impl FonctionSci {
    /// Fonctions nommées (le "!" n’est pas un nom : marque postfixe).
    pub const NOMMEES: [FonctionSci; 6] = [
        FonctionSci::Sin,
        FonctionSci::Cos,
        FonctionSci::Tan,
        FonctionSci::Log,
        FonctionSci::Exp,
        FonctionSci::Sqrt,
    ];

    pub fn depuis_nom(nom: &str) -> ResultatCalcul<Self> {
        match nom {
            "sin" => Ok(FonctionSci::Sin),
            "cos" => Ok(FonctionSci::Cos),
            "tan" => Ok(FonctionSci::Tan),
            "log" => Ok(FonctionSci::Log),
            "exp" => Ok(FonctionSci::Exp),
            "sqrt" => Ok(FonctionSci::Sqrt),
            "!" => Ok(FonctionSci::Factorielle),
            _ => Err(ErreurCalcul::FonctionInconnue(nom.to_string())),
        }
    }

    pub fn nom(self) -> &'static str {
        match self {
            FonctionSci::Sin => "sin",
            FonctionSci::Cos => "cos",
            FonctionSci::Tan => "tan",
            FonctionSci::Log => "log",
            FonctionSci::Exp => "exp",
            FonctionSci::Sqrt => "sqrt",
            FonctionSci::Factorielle => "!",
        }
    }

    /// sin/cos/tan : argument en degrés. log : logarithme népérien.
    pub fn appliquer(self, x: f64) -> ResultatCalcul<f64> {
        match self {
            FonctionSci::Sin => Ok(sin_degres(x)),
            FonctionSci::Cos => Ok(cos_degres(x)),
            FonctionSci::Tan => Ok(tan_degres(x)),
            FonctionSci::Log => {
                if x <= 0.0 || x.is_nan() {
                    return Err(ErreurCalcul::HorsDomaine {
                        fonction: "log",
                        valeur: x,
                    });
                }
                Ok(x.ln())
            }
            FonctionSci::Exp => Ok(x.exp()),
            FonctionSci::Sqrt => {
                if x < 0.0 || x.is_nan() {
                    return Err(ErreurCalcul::HorsDomaine {
                        fonction: "sqrt",
                        valeur: x,
                    });
                }
                Ok(x.sqrt())
            }
            FonctionSci::Factorielle => factorielle_bornee(x),
        }
    }
}

impl fmt::Display for FonctionSci {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nom())
    }
}

/// "!" : entier, 0 ≤ x ≤ FACTORIELLE_MAX.
fn factorielle_bornee(x: f64) -> ResultatCalcul<f64> {
    if x < 0.0 {
        return Err(ErreurCalcul::FactorielleNegative);
    }
    if x > f64::from(FACTORIELLE_MAX) {
        return Err(ErreurCalcul::FactorielleTropGrande {
            limite: FACTORIELLE_MAX,
        });
    }
    if x.fract() != 0.0 {
        return Err(ErreurCalcul::FactorielleNonEntiere);
    }
    let n = x.to_i64().ok_or(ErreurCalcul::FactorielleNonEntiere)?;
    Ok(factorielle(n)? as f64)
}

// src/noyau/jetons.rs
//
// Découpage en jetons
// -------------------
// On coupe la chaîne à chaque frontière de classe de caractères :
// - chaque opérateur + - * / ^, parenthèse ou marque ! forme un fragment à lui seul
// - lettres | blancs | le reste (chiffres, '.') : changement de classe => coupure
// Les fragments blancs sont jetés. Ainsi "sin60", "sin(60)" et "3!" se découpent
// sans séparateur explicite.

use std::fmt;

use super::erreur::{ErreurCalcul, ResultatCalcul};
use super::operations::{FonctionSci, OpBinaire};
use super::validation::{est_operateur, est_parenthese};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(OpBinaire),
    LPar,
    RPar,
    Fonction(FonctionSci),
    /// Marque postfixe `!`.
    Factorielle,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Classe {
    Seul,
    Blanc,
    Lettre,
    Autre,
}

fn classe(c: char) -> Classe {
    if est_operateur(c) || est_parenthese(c) || c == '!' {
        Classe::Seul
    } else if c.is_whitespace() {
        Classe::Blanc
    } else if c.is_alphabetic() {
        Classe::Lettre
    } else {
        Classe::Autre
    }
}

/// Coupe aux frontières de classes ; les fragments blancs sont retirés.
pub fn fragments(s: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut debut = 0usize;
    let mut precedente: Option<Classe> = None;

    for (i, c) in s.char_indices() {
        let k = classe(c);
        if let Some(p) = precedente {
            if p == Classe::Seul || k == Classe::Seul || p != k {
                out.push(&s[debut..i]);
                debut = i;
            }
        }
        precedente = Some(k);
    }
    if debut < s.len() {
        out.push(&s[debut..]);
    }

    out.retain(|f| !f.trim().is_empty());
    out
}

fn jeton(fragment: &str) -> ResultatCalcul<Tok> {
    let invalide = || ErreurCalcul::JetonInvalide(fragment.to_string());

    let mut it = fragment.chars();
    let premier = it.next().ok_or_else(invalide)?;
    let seul = it.next().is_none();

    if seul {
        match premier {
            '(' => return Ok(Tok::LPar),
            ')' => return Ok(Tok::RPar),
            '!' => return Ok(Tok::Factorielle),
            c if est_operateur(c) => return OpBinaire::depuis_symbole(fragment).map(Tok::Op),
            _ => {}
        }
    }

    if premier.is_ascii_digit() || premier == '.' {
        return fragment
            .parse::<f64>()
            .map(Tok::Num)
            .map_err(|_| invalide());
    }

    if premier.is_alphabetic() {
        return match FonctionSci::depuis_nom(fragment) {
            Ok(f) if f != FonctionSci::Factorielle => Ok(Tok::Fonction(f)),
            _ => Err(invalide()),
        };
    }

    Err(invalide())
}

/// Tokenize une chaîne (déjà validée, en minuscules).
pub fn tokenize(s: &str) -> ResultatCalcul<Vec<Tok>> {
    fragments(s).into_iter().map(jeton).collect()
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(x) => write!(f, "{x}"),
            Tok::Op(op) => write!(f, "{op}"),
            Tok::LPar => f.write_str("("),
            Tok::RPar => f.write_str(")"),
            Tok::Fonction(fun) => write!(f, "{fun}"),
            Tok::Factorielle => f.write_str("!"),
        }
    }
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(Tok::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

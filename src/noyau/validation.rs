// src/noyau/validation.rs
//
// Validation structurelle AVANT tokenisation.
//
// Règles :
// - vide / blanc => EntreeVide
// - si un nom de fonction apparaît (sous-chaîne) : l’expression sans espaces doit contenir
//   `f(...)`, ou `f` suivi d’un chiffre ASCII, ou une marque `!` ; sinon FormatFonctionInvalide
// - sinon : chaque caractère ∈ {chiffre, '.', + - * / ^, ( ), blanc, !} ; sinon
//   CaractereInvalide au premier fautif

use std::sync::OnceLock;

use regex::Regex;

use super::erreur::{ErreurCalcul, ResultatCalcul};

const FONCTIONS: &str = "(sin|cos|tan|log|exp|sqrt)";

struct Motifs {
    nom: Regex,
    appel_parenthese: Regex,
    appel_chiffres: Regex,
}

fn motifs() -> &'static Motifs {
    static MOTIFS: OnceLock<Motifs> = OnceLock::new();
    MOTIFS.get_or_init(|| Motifs {
        nom: Regex::new(FONCTIONS).expect("motif constant"),
        appel_parenthese: Regex::new(&format!(r"{FONCTIONS}\(.*\)")).expect("motif constant"),
        appel_chiffres: Regex::new(&format!(r"{FONCTIONS}[0-9]")).expect("motif constant"),
    })
}

pub fn est_operateur(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '^')
}

pub fn est_parenthese(c: char) -> bool {
    matches!(c, '(' | ')')
}

pub fn est_numerique(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Vérifie la forme d’une expression (déjà normalisée en minuscules).
pub fn valider(expr: &str) -> ResultatCalcul<()> {
    if expr.trim().is_empty() {
        return Err(ErreurCalcul::EntreeVide);
    }

    let m = motifs();

    if m.nom.is_match(expr) {
        let compacte: String = expr.chars().filter(|c| !c.is_whitespace()).collect();
        if m.appel_parenthese.is_match(&compacte)
            || m.appel_chiffres.is_match(&compacte)
            || compacte.contains('!')
        {
            return Ok(());
        }
        return Err(ErreurCalcul::FormatFonctionInvalide(expr.to_string()));
    }

    for (position, caractere) in expr.chars().enumerate() {
        let permis = est_numerique(caractere)
            || est_operateur(caractere)
            || est_parenthese(caractere)
            || caractere.is_whitespace()
            || caractere == '!';
        if !permis {
            return Err(ErreurCalcul::CaractereInvalide {
                position,
                caractere,
            });
        }
    }

    Ok(())
}

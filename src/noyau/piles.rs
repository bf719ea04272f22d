// src/noyau/piles.rs
//
// Shunting-yard à deux piles (évaluation directe, sans RPN intermédiaire)
// ----------------------------------------------------------------------
// - pile d’opérandes  : f64
// - pile d’opérateurs : ( , op binaire, fonction préfixe, moins unaire
//
// Règles:
// - Num                  => empile, puis applique les fonctions préfixes collées ("sin30")
// - Op                   => dépile/applique tant que la précédence l’exige, puis empile
// - '('                  => empile
// - ')'                  => applique jusqu’à '(' (absente => mal formée), puis fonctions collées
// - Fonction             => empile (jamais dépilée par la précédence)
// - '!'                  => postfixe : appliquée tout de suite au sommet des opérandes
// - Moins unaire :
//    - si '-' arrive quand on n’attend PAS une valeur => Negation (précédence de ^)
//    - "-2^2" = -(2^2), "2*-3" = -6, "-3!" = -(3!)

use super::erreur::{ErreurCalcul, ResultatCalcul};
use super::jetons::Tok;
use super::operations::{FonctionSci, OpBinaire};

/// Précédence du moins unaire (= celle de ^, associatif à droite).
const PRECEDENCE_NEGATION: u8 = 3;

#[derive(Clone, Copy, Debug, PartialEq)]
enum EnAttente {
    LPar,
    Op(OpBinaire),
    Fonction(FonctionSci),
    Negation,
}

#[derive(Default, Debug)]
struct Piles {
    operandes: Vec<f64>,
    operateurs: Vec<EnAttente>,
}

impl Piles {
    fn depiler_operande(&mut self) -> ResultatCalcul<f64> {
        self.operandes
            .pop()
            .ok_or(ErreurCalcul::ExpressionMalformee("opérande manquant"))
    }

    fn appliquer(&mut self, op: EnAttente) -> ResultatCalcul<()> {
        let v = match op {
            EnAttente::Fonction(f) => {
                let x = self.depiler_operande()?;
                f.appliquer(x)?
            }
            EnAttente::Negation => -self.depiler_operande()?,
            EnAttente::Op(op) => {
                // premier dépilé = opérande droit
                let b = self.depiler_operande()?;
                let a = self.depiler_operande()?;
                op.appliquer(a, b)?
            }
            EnAttente::LPar => {
                return Err(ErreurCalcul::ExpressionMalformee("parenthèse non fermée"))
            }
        };
        self.operandes.push(v);
        Ok(())
    }

    /// Une valeur vient d’être complétée : les fonctions qui l’attendaient s’appliquent.
    ///
    /// Des négations posées juste au-dessus d’une fonction ("sqrt-4") font partie de
    /// son argument : appliquées d’abord. Sans fonction dessous, elles restent en
    /// attente ("-2^2" = -(2^2)).
    fn reduire_fonctions(&mut self) -> ResultatCalcul<()> {
        loop {
            let negations = self
                .operateurs
                .iter()
                .rev()
                .take_while(|op| **op == EnAttente::Negation)
                .count();
            let dessous = self.operateurs.len() - negations;

            let f = match dessous.checked_sub(1).map(|i| self.operateurs[i]) {
                Some(EnAttente::Fonction(f)) => f,
                _ => return Ok(()),
            };

            for _ in 0..negations {
                self.operateurs.pop();
                self.appliquer(EnAttente::Negation)?;
            }
            self.operateurs.pop();
            self.appliquer(EnAttente::Fonction(f))?;
        }
    }

    fn doit_depiler(sommet: EnAttente, entrant: OpBinaire) -> bool {
        let p_sommet = match sommet {
            // ni '(' ni une fonction ne sont dépilés par la précédence
            EnAttente::LPar | EnAttente::Fonction(_) => return false,
            EnAttente::Negation => PRECEDENCE_NEGATION,
            EnAttente::Op(op) => op.precedence(),
        };
        let p_entrant = entrant.precedence();

        if entrant.associatif_droite() {
            p_sommet > p_entrant
        } else {
            p_sommet >= p_entrant
        }
    }

    fn operateur(&mut self, entrant: OpBinaire) -> ResultatCalcul<()> {
        while let Some(&sommet) = self.operateurs.last() {
            if !Self::doit_depiler(sommet, entrant) {
                break;
            }
            self.operateurs.pop();
            self.appliquer(sommet)?;
        }
        self.operateurs.push(EnAttente::Op(entrant));
        Ok(())
    }

    fn fermer_parenthese(&mut self) -> ResultatCalcul<()> {
        loop {
            match self.operateurs.pop() {
                Some(EnAttente::LPar) => break,
                Some(op) => self.appliquer(op)?,
                None => {
                    return Err(ErreurCalcul::ExpressionMalformee(
                        "parenthèse fermante sans ouvrante",
                    ))
                }
            }
        }
        self.reduire_fonctions()
    }

    fn terminer(mut self) -> ResultatCalcul<f64> {
        while let Some(op) = self.operateurs.pop() {
            self.appliquer(op)?;
        }

        match self.operandes.as_slice() {
            [v] => Ok(*v),
            [] => Err(ErreurCalcul::ExpressionMalformee("aucune valeur")),
            _ => Err(ErreurCalcul::ExpressionMalformee("valeurs en trop")),
        }
    }
}

/// Évalue une suite de jetons (piles fraîches à chaque appel).
pub fn evaluer(tokens: &[Tok]) -> ResultatCalcul<f64> {
    let mut piles = Piles::default();

    // “valeur” = un nombre ou une expression fermée.
    // Sert à détecter le moins unaire.
    let mut prev_was_value = false;

    for &tok in tokens {
        match tok {
            Tok::Num(x) => {
                piles.operandes.push(x);
                piles.reduire_fonctions()?;
                prev_was_value = true;
            }

            Tok::Op(OpBinaire::Soustraction) if !prev_was_value => {
                piles.operateurs.push(EnAttente::Negation);
            }

            Tok::Op(op) => {
                piles.operateur(op)?;
                prev_was_value = false;
            }

            Tok::LPar => {
                piles.operateurs.push(EnAttente::LPar);
                prev_was_value = false;
            }

            Tok::RPar => {
                piles.fermer_parenthese()?;
                prev_was_value = true;
            }

            Tok::Fonction(f) => {
                piles.operateurs.push(EnAttente::Fonction(f));
                prev_was_value = false;
            }

            Tok::Factorielle => {
                piles.appliquer(EnAttente::Fonction(FonctionSci::Factorielle))?;
                prev_was_value = true;
            }
        }
    }

    piles.terminer()
}

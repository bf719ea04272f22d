//! src/app/historique.rs
//!
//! Historique des calculs : liste en mémoire de lignes "expression = résultat",
//! sauvegardée / relue dans un fichier texte (une ligne par calcul).

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use calculatrice_sci::noyau::format_resultat;
use log::info;
use thiserror::Error;

/// Nom du fichier, relatif au répertoire courant.
pub const FICHIER_HISTORIQUE: &str = "calculator_history.txt";

#[derive(Error, Debug)]
pub enum ErreurHistorique {
    #[error("E/S historique : {0}")]
    Io(#[from] io::Error),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Historique {
    lignes: Vec<String>,
}

impl Historique {
    /// Ajoute "expression = résultat" (uniquement après un calcul réussi).
    pub fn ajouter(&mut self, expression: &str, resultat: f64) -> &str {
        let ligne = format!("{} = {}", expression.trim(), format_resultat(resultat));
        self.lignes.push(ligne);
        self.lignes.last().map(String::as_str).unwrap_or_default()
    }

    pub fn lignes(&self) -> &[String] {
        &self.lignes
    }

    pub fn len(&self) -> usize {
        self.lignes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lignes.is_empty()
    }

    /// Écrase le fichier avec toutes les lignes (terminées par '\n').
    pub fn enregistrer(&self, chemin: &Path) -> Result<(), ErreurHistorique> {
        let mut w = BufWriter::new(File::create(chemin)?);
        for ligne in &self.lignes {
            writeln!(w, "{ligne}")?;
        }
        w.flush()?;
        info!(
            "historique enregistré : {} ligne(s) dans {}",
            self.lignes.len(),
            chemin.display()
        );
        Ok(())
    }

    /// Relit un fichier d’historique (lignes vides ignorées).
    pub fn charger(chemin: &Path) -> Result<Vec<String>, ErreurHistorique> {
        let r = BufReader::new(File::open(chemin)?);
        let mut out = Vec::new();
        for ligne in r.lines() {
            let ligne = ligne?;
            if !ligne.trim().is_empty() {
                out.push(ligne);
            }
        }
        info!(
            "historique relu : {} ligne(s) depuis {}",
            out.len(),
            chemin.display()
        );
        Ok(out)
    }
}

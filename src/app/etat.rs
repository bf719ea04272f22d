//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, zone de sortie, historique,
//! préférences, démarche) et offrir des opérations simples sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de parsing) : la vue appelle le noyau puis dépose
//!   le résultat ou l’erreur.
//! - Actions déterministes ; les seuls effets de bord (fichiers) passent par
//!   historique.rs / preferences.rs, appelés depuis la vue.

use std::path::PathBuf;

use super::historique::{Historique, FICHIER_HISTORIQUE};
use super::preferences::{Preferences, Theme, FICHIER_PREFERENCES};

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub sortie: Vec<String>, // zone de sortie : "expr = résultat" / "Erreur : ..."
    pub erreur: String,      // dernière erreur (vide si le dernier calcul a réussi)
    pub statut: String,      // retour des actions fichier (historique / préférences)

    // --- démarche (jetons du dernier calcul) ---
    pub demarche: String,

    // --- données ---
    pub historique: Historique,
    pub preferences: Preferences,
    pub chemin_historique: PathBuf,
    pub chemin_preferences: PathBuf,

    // --- UX ---
    pub preferences_ouvertes: bool,
    // Thème / police modifiés : app.rs les réapplique au prochain frame.
    pub style_a_appliquer: bool,
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(
            Preferences::default(),
            PathBuf::from(FICHIER_PREFERENCES),
            PathBuf::from(FICHIER_HISTORIQUE),
        )
    }
}

impl AppCalc {
    pub fn new(
        preferences: Preferences,
        chemin_preferences: PathBuf,
        chemin_historique: PathBuf,
    ) -> Self {
        Self {
            entree: String::new(),
            sortie: Vec::new(),
            erreur: String::new(),
            statut: String::new(),
            demarche: String::new(),
            historique: Historique::default(),
            preferences,
            chemin_historique,
            chemin_preferences,
            preferences_ouvertes: false,
            style_a_appliquer: true, // premier frame : appliquer thème + police
            focus_entree: true,      // au lancement, on veut pouvoir taper tout de suite
        }
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// ESC : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// Clear : zone de sortie + entrée (l’historique mémorisé est conservé).
    pub fn clear(&mut self) {
        self.entree.clear();
        self.sortie.clear();
        self.erreur.clear();
        self.statut.clear();
        self.demarche.clear();
        self.focus_entree = true;
    }

    /// Calcul réussi : ligne dans la sortie + historique ; l’entrée est vidée.
    pub fn set_resultat(&mut self, expression: &str, valeur: f64, jetons: String) {
        let ligne = self.historique.ajouter(expression, valeur).to_string();
        self.sortie.push(ligne);
        self.erreur.clear();
        self.demarche = jetons;
        self.entree.clear();
        self.focus_entree = true;
    }

    /// Calcul refusé : message dans la sortie, rien dans l’historique.
    ///
    /// Choix UX : on vide l’entrée comme après un calcul réussi.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.sortie.push(format!("Erreur : {}", self.erreur));
        self.demarche.clear();
        self.entree.clear();
        self.focus_entree = true;
    }

    /// Lignes relues depuis le fichier : ajoutées à la sortie seulement.
    pub fn ajouter_lignes_chargees(&mut self, lignes: Vec<String>) {
        self.sortie.extend(lignes);
        self.focus_entree = true;
    }

    pub fn set_statut(&mut self, msg: impl Into<String>) {
        self.statut = msg.into();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        if self.preferences.theme != theme {
            self.preferences.theme = theme;
            self.style_a_appliquer = true;
        }
    }

    pub fn set_taille_police(&mut self, taille: u32) {
        let avant = self.preferences.taille_police;
        self.preferences.set_taille_police(taille);
        if self.preferences.taille_police != avant {
            self.style_a_appliquer = true;
        }
    }
}

// src/app.rs
//
// Calculatrice scientifique — module App (racine)
// -----------------------------------------------
// Rôle:
// - Déclarer les sous-modules (état, vue, historique, préférences)
// - Ré-exporter AppCalc (pour main.rs: use app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Appliquer thème + taille de police quand l’état le demande
//
// La gestion Enter/Backspace est faite dans vue.rs (quand le champ a le focus).

pub mod etat;
pub mod historique;
pub mod preferences;
pub mod vue;

pub use etat::AppCalc;

use eframe::egui;
use preferences::{Preferences, Theme};

/// Thème clair/sombre + tailles de texte dérivées de `taille_police`.
pub fn appliquer_preferences(ctx: &egui::Context, prefs: &Preferences) {
    let taille = prefs.taille_police as f32;

    ctx.style_mut(|style| {
        style.visuals = match prefs.theme {
            Theme::Clair => egui::Visuals::light(),
            Theme::Sombre => egui::Visuals::dark(),
        };

        for (texte, police) in style.text_styles.iter_mut() {
            police.size = match texte {
                egui::TextStyle::Heading => taille * 1.4,
                egui::TextStyle::Small => taille * 0.75,
                _ => taille,
            };
        }
    });
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.style_a_appliquer {
            appliquer_preferences(ctx, &self.preferences);
            self.style_a_appliquer = false;
        }

        // ESC = effacer seulement l’entrée.
        // Enter/Backspace restent dans la vue (évite le double déclenchement).
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.clear_entree();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}

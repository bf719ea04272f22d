// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue, Backspace efface (quand le champ est focus)
// - Pavé : disposition classique (chiffres, opérateurs, fonctions,
//   Save History / Load History / Clear / Preferences)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)

use calculatrice_sci::noyau::calculer_detaille;
use eframe::egui;
use log::{debug, warn};

use super::etat::AppCalc;
use super::historique::Historique;
use super::preferences::{Theme, TAILLE_POLICE_MAX, TAILLE_POLICE_MIN};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice scientifique");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_sortie(ui);

                if self.preferences_ouvertes {
                    ui.add_space(8.0);
                    ui.separator();
                    self.ui_preferences(ui);
                }

                ui.add_space(8.0);
                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2+3*4, sin(30), sqrt16, 5!")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
        }

        // --- Clavier : Backspace “intelligent” ("sin(", "sqrt(" d’un coup) ---
        let backspace = ui.input(|i| i.key_pressed(egui::Key::Backspace));
        if resp.has_focus() && backspace {
            self.backspace_entree();
            self.focus_entree = true;
        }

        if !self.erreur.is_empty() {
            ui.add_space(4.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_scientifique")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7", InsertKind::Digit);
                self.bouton_insert(ui, "8", InsertKind::Digit);
                self.bouton_insert(ui, "9", InsertKind::Digit);
                self.bouton_insert(ui, "/", InsertKind::Op);
                self.bouton_insert(ui, "^", InsertKind::Op);
                ui.end_row();

                self.bouton_insert(ui, "4", InsertKind::Digit);
                self.bouton_insert(ui, "5", InsertKind::Digit);
                self.bouton_insert(ui, "6", InsertKind::Digit);
                self.bouton_insert(ui, "*", InsertKind::Op);
                self.bouton_insert(ui, "!", InsertKind::Postfix);
                ui.end_row();

                self.bouton_insert(ui, "1", InsertKind::Digit);
                self.bouton_insert(ui, "2", InsertKind::Digit);
                self.bouton_insert(ui, "3", InsertKind::Digit);
                self.bouton_insert(ui, "-", InsertKind::Op);
                self.bouton_insert(ui, "sin", InsertKind::Func);
                ui.end_row();

                self.bouton_insert(ui, "0", InsertKind::Digit);
                self.bouton_insert(ui, ".", InsertKind::Digit);
                self.bouton_action(ui, "=", "Évaluer", Action::Evaluer);
                self.bouton_insert(ui, "+", InsertKind::Op);
                self.bouton_insert(ui, "cos", InsertKind::Func);
                ui.end_row();

                self.bouton_insert(ui, "(", InsertKind::OpenParen);
                self.bouton_insert(ui, ")", InsertKind::CloseParen);
                self.bouton_insert(ui, "tan", InsertKind::Func);
                self.bouton_insert(ui, "log", InsertKind::Func);
                self.bouton_insert(ui, "exp", InsertKind::Func);
                ui.end_row();

                self.bouton_insert(ui, "sqrt", InsertKind::Func);
                self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
                self.bouton_action(ui, "Clear", "Efface entrée + sortie", Action::Clear);
                self.bouton_action(
                    ui,
                    "Save",
                    "Enregistre l’historique dans un fichier",
                    Action::SaveHistory,
                );
                self.bouton_action(
                    ui,
                    "Load",
                    "Relit l’historique enregistré",
                    Action::LoadHistory,
                );
                ui.end_row();

                self.bouton_action(ui, "Prefs", "Thème et police", Action::Preferences);
                ui.end_row();
            });
    }

    fn ui_sortie(&mut self, ui: &mut egui::Ui) {
        ui.label("Sortie :");

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(6.0 * ui.text_style_height(&egui::TextStyle::Monospace));

                egui::ScrollArea::vertical()
                    .id_salt("sortie_scroll")
                    .max_height(240.0)
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for ligne in &self.sortie {
                            ui.monospace(ligne);
                        }
                    });
            });

        if !self.statut.is_empty() {
            ui.add_space(4.0);
            ui.label(&self.statut);
        }
    }

    fn ui_preferences(&mut self, ui: &mut egui::Ui) {
        ui.label("Préférences :");

        ui.horizontal(|ui| {
            let mut theme = self.preferences.theme;
            egui::ComboBox::from_label("Thème")
                .selected_text(theme.libelle())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut theme, Theme::Clair, Theme::Clair.libelle());
                    ui.selectable_value(&mut theme, Theme::Sombre, Theme::Sombre.libelle());
                });
            self.set_theme(theme);

            ui.separator();

            ui.label("Police :");
            let mut taille = self.preferences.taille_police;
            let resp = ui.add(
                egui::DragValue::new(&mut taille)
                    .speed(1)
                    .range(TAILLE_POLICE_MIN..=TAILLE_POLICE_MAX)
                    .suffix(" pt"),
            );
            if resp.changed() {
                self.set_taille_police(taille);
            }

            ui.separator();

            if ui.button("Enregistrer").clicked() {
                self.enregistrer_preferences();
            }
        });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                ui.label("Jetons :");
                egui::Frame::group(ui.style())
                    .fill(ui.visuals().extreme_bg_color)
                    .show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        ui.monospace(&self.demarche);
                    });
            });
    }

    /* ------------------------ Boutons ------------------------ */

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([64.0, 32.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::Evaluer => self.eval_via_noyau(),
                Action::Backspace => self.backspace_entree(),
                Action::Clear => self.clear(),
                Action::SaveHistory => self.enregistrer_historique(),
                Action::LoadHistory => self.charger_historique(),
                Action::Preferences => self.preferences_ouvertes = !self.preferences_ouvertes,
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, kind: InsertKind) {
        let resp = ui.add_sized([64.0, 32.0], egui::Button::new(label));
        if !resp.clicked() {
            return;
        }

        match kind {
            InsertKind::CloseParen | InsertKind::Postfix => {
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                self.entree.push_str(label);
            }
            InsertKind::OpenParen | InsertKind::Func => {
                if let Some(c) = self.entree.chars().rev().find(|c| !c.is_whitespace()) {
                    if c.is_ascii_digit() || c == ')' || c == '!' {
                        self.entree.push(' ');
                    }
                }
                self.entree.push_str(label);
                if matches!(kind, InsertKind::Func) {
                    self.entree.push('(');
                }
            }
            InsertKind::Op => {
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                if !self.entree.is_empty() {
                    self.entree.push(' ');
                }
                self.entree.push_str(label);
                self.entree.push(' ');
            }
            InsertKind::Digit => {
                // chiffres: pas d’espaces auto
                self.entree.push_str(label);
            }
        }

        self.focus_entree = true;
    }

    /// Backspace “intelligent” : retire d’un coup les appels de fonction ("sin(", ...).
    fn backspace_entree(&mut self) {
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }

        for pat in ["sqrt(", "sin(", "cos(", "tan(", "log(", "exp("] {
            if self.entree.ends_with(pat) {
                self.entree.truncate(self.entree.len() - pat.len());
                return;
            }
        }

        self.entree.pop();
    }

    /* ------------------------ Actions (noyau + fichiers) ------------------------ */

    /// Évalue l’entrée via le noyau, puis dépose résultat / erreur dans l’état UI.
    fn eval_via_noyau(&mut self) {
        let expression = self.entree.trim().to_string();

        match calculer_detaille(&expression) {
            Ok(calcul) => {
                debug!("{expression:?} = {}", calcul.valeur);
                self.set_resultat(&expression, calcul.valeur, calcul.jetons);
            }
            Err(e) => {
                debug!("{expression:?} refusée : {e}");
                self.set_erreur(e.to_string());
            }
        }
    }

    fn enregistrer_historique(&mut self) {
        match self.historique.enregistrer(&self.chemin_historique) {
            Ok(()) => self.set_statut(format!(
                "Historique enregistré ({} ligne(s)).",
                self.historique.len()
            )),
            Err(e) => {
                warn!("{e}");
                self.set_statut(format!("Échec de l’enregistrement : {e}"));
            }
        }
    }

    fn charger_historique(&mut self) {
        match Historique::charger(&self.chemin_historique) {
            Ok(lignes) => {
                let n = lignes.len();
                self.ajouter_lignes_chargees(lignes);
                self.set_statut(format!("Historique relu ({n} ligne(s))."));
            }
            Err(e) => {
                warn!("{e}");
                self.set_statut(format!("Échec de la lecture : {e}"));
            }
        }
    }

    fn enregistrer_preferences(&mut self) {
        match self.preferences.enregistrer(&self.chemin_preferences) {
            Ok(()) => self.set_statut("Préférences enregistrées."),
            Err(e) => {
                warn!("{e}");
                self.set_statut(format!("Échec de l’enregistrement : {e}"));
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    Evaluer,
    Backspace,
    Clear,
    SaveHistory,
    LoadHistory,
    Preferences,
}

#[derive(Clone, Copy, Debug)]
enum InsertKind {
    Digit,
    Func,
    Op,
    Postfix,
    OpenParen,
    CloseParen,
}

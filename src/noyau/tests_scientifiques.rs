//! Tests scientifiques (campagne) : propriétés attendues + limites contrôlées.
//!
//! Notes importantes (aligné avec l’état actuel du noyau) :
//! - sin/cos/tan prennent des degrés. Les angles entiers usuels (0, 30, 45, ..., 360)
//!   sortent de la table : valeurs exactes, comparées avec `assert_eq!`.
//! - Hors table : série de Maclaurin à 5 termes, sans réduction de période.
//!   L’erreur est minuscule près de 0 et grandit avec l’angle ; on teste la borne.
//! - "!" est borné à 10.

use std::time::{Duration, Instant};

use super::{calculer, ErreurCalcul};

fn ok(expr: &str) -> f64 {
    calculer(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn err(expr: &str) -> ErreurCalcul {
    match calculer(expr) {
        Ok(v) => panic!("expr={expr:?} : erreur attendue, obtenu {v}"),
        Err(e) => e,
    }
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Arithmétique ------------------------ */

#[test]
fn sci_binaires_egaux_au_calcul_direct() {
    let valeurs = [0.0, 1.0, 2.5, 3.0, 7.0, 12.0];
    for &a in &valeurs {
        for &b in &valeurs {
            assert_eq!(ok(&format!("{a}+{b}")), a + b);
            assert_eq!(ok(&format!("{a}-{b}")), a - b);
            assert_eq!(ok(&format!("{a}*{b}")), a * b);
            assert_eq!(ok(&format!("{a}^{b}")), a.powf(b));
            if b != 0.0 {
                assert_eq!(ok(&format!("{a}/{b}")), a / b);
            }
        }
    }
}

#[test]
fn sci_division_par_zero() {
    assert_eq!(err("5/0"), ErreurCalcul::DivisionParZero);
    assert_eq!(err("5/(3-3)"), ErreurCalcul::DivisionParZero);
    assert_eq!(err("1/sin(0)"), ErreurCalcul::DivisionParZero);
}

#[test]
fn sci_precedence() {
    assert_eq!(ok("2+3*4"), 14.0);
    assert_eq!(ok("(2+3)*4"), 20.0);
    assert_eq!(ok("10-4-3"), 3.0);
    assert_eq!(ok("2*(3+(4-1))^2"), 72.0);
}

/* ------------------------ Factorielle ------------------------ */

#[test]
fn sci_factorielle_bornes() {
    assert_eq!(ok("5!"), 120.0);
    assert_eq!(ok("0!"), 1.0);
    assert_eq!(ok("10!"), 3_628_800.0);
    assert_eq!(err("11!"), ErreurCalcul::FactorielleTropGrande { limite: 10 });
    assert_eq!(err("(-2)!"), ErreurCalcul::FactorielleNegative);
    assert_eq!(err("2.5!"), ErreurCalcul::FactorielleNonEntiere);
}

/* ------------------------ Trig : table exacte ------------------------ */

#[test]
fn sci_table_exacte() {
    assert_eq!(ok("sin(30)"), 0.5);
    assert_eq!(ok("cos(90)"), 0.0);
    assert_eq!(ok("cos(60)"), 0.5);
    assert_eq!(ok("sin(270)"), -1.0);
    assert_eq!(ok("tan(45)"), 1.0);
    assert_eq!(ok("sin90"), 1.0);
}

#[test]
fn sci_tangente_infinie_propagee() {
    assert_eq!(ok("tan(90)"), f64::INFINITY);
    assert_eq!(ok("tan(270)"), f64::NEG_INFINITY);
}

/* ------------------------ Trig : série (borne d’erreur) ------------------------ */

#[test]
fn sci_serie_petits_angles() {
    let v = ok("sin(10)");
    let vrai = 10f64.to_radians().sin();
    assert!((v - vrai).abs() < 1e-12, "sin(10)={v} vrai={vrai}");

    let v = ok("cos(20)");
    assert!((v - 20f64.to_radians().cos()).abs() < 1e-10);
}

#[test]
fn sci_serie_erreur_croissante() {
    // 5 termes : l’erreur augmente avec l’angle (pas de réduction)
    let e = |deg: f64| (ok(&format!("sin({deg})")) - deg.to_radians().sin()).abs();

    assert!(e(10.0) < e(100.0));
    assert!(e(100.0) < e(200.0));
    assert!(e(100.0) < 1e-4);
    assert!(e(200.0) > 1e-2);
}

/* ------------------------ Log / exp / sqrt ------------------------ */

#[test]
fn sci_log_exp_sqrt() {
    assert_eq!(ok("log(1)"), 0.0);
    assert!((ok("log(exp(2))") - 2.0).abs() < 1e-12);
    assert_eq!(ok("sqrt(16)+sqrt9"), 7.0);
    assert!(matches!(err("log(0)"), ErreurCalcul::HorsDomaine { .. }));
    assert!(matches!(err("sqrt(0-1)"), ErreurCalcul::HorsDomaine { .. }));
}

#[test]
fn sci_fonction_et_moins_unaire() {
    assert!((ok("sin(30)+sin-30+1") - 1.0).abs() < 1e-9);
    assert_eq!(ok("sqrt(4)+sqrt4+5"), 9.0);
    assert_eq!(ok("cos(0)+cos-0"), 2.0);
    assert!(matches!(
        err("sqrt(4)+sqrt-4+5"),
        ErreurCalcul::HorsDomaine { fonction: "sqrt", .. }
    ));
    assert!(matches!(
        err("log(1)+log-2"),
        ErreurCalcul::HorsDomaine { fonction: "log", .. }
    ));
}

/* ------------------------ Entrées mal formées ------------------------ */

#[test]
fn sci_entrees_mal_formees() {
    assert_eq!(err(""), ErreurCalcul::EntreeVide);

    let e = err("2++");
    assert!(
        matches!(
            e,
            ErreurCalcul::ExpressionMalformee(_) | ErreurCalcul::JetonInvalide(_)
        ),
        "2++ => {e:?}"
    );

    assert_eq!(
        err("2&3"),
        ErreurCalcul::CaractereInvalide {
            position: 1,
            caractere: '&'
        }
    );
    assert!(matches!(err("sin"), ErreurCalcul::FormatFonctionInvalide(_)));
    assert!(matches!(err("sin(30)+foo(2)"), ErreurCalcul::JetonInvalide(_)));
    assert!(matches!(err("(1+2"), ErreurCalcul::ExpressionMalformee(_)));
    assert!(matches!(err("1+2)"), ErreurCalcul::ExpressionMalformee(_)));
    assert!(matches!(err("1 2"), ErreurCalcul::ExpressionMalformee(_)));
}

/* ------------------------ Idempotence / concurrence ------------------------ */

#[test]
fn sci_idempotence() {
    for expr in ["2+3*4", "sin(10)", "5!", "sqrt(2)*exp(1)", "tan(89)"] {
        let a = ok(expr);
        let b = ok(expr);
        assert_eq!(a.to_bits(), b.to_bits(), "expr={expr:?}");
    }
}

#[test]
fn sci_appels_concurrents() {
    let exprs = ["2+3*4", "sin(10)", "5!", "(2+3)*4", "cos(45)^2"];
    let attendus: Vec<f64> = exprs.iter().map(|e| ok(e)).collect();

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..50 {
                    for (e, attendu) in exprs.iter().zip(&attendus) {
                        assert_eq!(ok(e).to_bits(), attendu.to_bits());
                    }
                }
            });
        }
    });
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_longue_somme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut expr = String::new();
    for k in 0..2_000 {
        if k > 0 {
            expr.push_str(" + ");
        }
        expr.push_str("0.5");
        budget(t0, max);
    }

    assert_eq!(ok(&expr), 1_000.0);
}

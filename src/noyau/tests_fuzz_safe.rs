//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - expressions générées bien formées : seules les erreurs “de domaine” sont acceptées
//!   (division par zéro, factorielle hors bornes, log/sqrt hors domaine)
//! - invariant clé : deux évaluations de la même chaîne donnent exactement le même résultat
//! - "f-n" s’évalue exactement comme "f(-n)"

use std::time::{Duration, Instant};

use super::{calculer, ErreurCalcul};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn is_erreur_attendue(e: &ErreurCalcul) -> bool {
    // Liste blanche : erreurs *normales* sur une expression bien formée.
    matches!(
        e,
        ErreurCalcul::DivisionParZero
            | ErreurCalcul::FactorielleNegative
            | ErreurCalcul::FactorielleTropGrande { .. }
            | ErreurCalcul::FactorielleNonEntiere
            | ErreurCalcul::HorsDomaine { .. }
    )
}

/// Égalité stricte (bits) : NaN == NaN, 0.0 != -0.0.
fn meme_resultat(a: &Result<f64, ErreurCalcul>, b: &Result<f64, ErreurCalcul>) -> bool {
    match (a, b) {
        (Ok(x), Ok(y)) => x.to_bits() == y.to_bits(),
        (Err(e1), Err(e2)) => e1.to_string() == e2.to_string(),
        _ => false,
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let n = rng.pick(13);
    match rng.pick(4) {
        0 => format!("{n}.5"),
        1 => format!("(-{n})"),
        _ => format!("{n}"),
    }
}

fn gen_angle(rng: &mut Rng) -> String {
    // moitié tabulés, moitié série
    const TABULES: [u32; 8] = [0, 30, 45, 60, 90, 180, 270, 360];
    if rng.coin() {
        TABULES[rng.pick(TABULES.len() as u32) as usize].to_string()
    } else {
        format!("{}", rng.pick(120))
    }
}

/// Même appel sous deux écritures : ("f-n", "f(-n)").
fn gen_fonction_moins(rng: &mut Rng) -> (String, String) {
    const FONCTIONS: [&str; 6] = ["sin", "cos", "tan", "log", "exp", "sqrt"];
    let f = FONCTIONS[rng.pick(FONCTIONS.len() as u32) as usize];
    let n = rng.pick(60);
    let n = if rng.coin() {
        format!("{n}")
    } else {
        format!("{n}.5")
    };
    (format!("{f}-{n}"), format!("{f}(-{n})"))
}

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(9) {
        0 => format!("sin({})", gen_angle(rng)),
        1 => format!("cos({})", gen_angle(rng)),
        2 => format!("tan({})", gen_angle(rng)),
        3 => format!("{}!", rng.pick(13)),
        4 => format!("sqrt({})", gen_nombre(rng)),
        5 => format!("log({})", gen_nombre(rng)),
        6 => gen_fonction_moins(rng).0,
        _ => gen_nombre(rng),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    match rng.pick(8) {
        0 => gen_atom(rng),
        1 => format!("({}+{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        2 => format!("({}-{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("{}*{}", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        4 => format!("({}/{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        5 => format!("({})^2", gen_expr(rng, depth - 1)),
        6 => format!("exp({})", gen_atom(rng)),
        _ => format!("-{}", gen_expr(rng, depth - 1)),
    }
}

/* ------------------------ Helper somme balancée ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_erreurs_attendues() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        // préfixe neutre : garantit une forme "f(...)" pour la validation ("sin-30" seul est refusé)
        let expr = format!("sqrt(0)+{}", gen_expr(&mut rng, 4));

        let r1 = calculer(&expr);
        let r2 = calculer(&expr);
        assert!(meme_resultat(&r1, &r2), "non déterministe: expr={expr:?}");

        match r1 {
            Ok(_) => seen_ok += 1,
            Err(e) => {
                assert!(
                    is_erreur_attendue(&e),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 30, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_fonction_moins_comme_parenthese() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..200 {
        budget(t0, max);

        let (collee, parenthesee) = gen_fonction_moins(&mut rng);
        for gabarit in ["sqrt(0)+{}+1", "sqrt(0)+2*{}", "sqrt(0)+{}^2"] {
            let a = gabarit.replace("{}", &collee);
            let b = gabarit.replace("{}", &parenthesee);
            let (ra, rb) = (calculer(&a), calculer(&b));
            assert!(meme_resultat(&ra, &rb), "{a:?} => {ra:?}, {b:?} => {rb:?}");
        }
    }
}

#[test]
fn fuzz_safe_angles_tabules_exacts() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..80 {
        budget(t0, max);

        let a = gen_angle(&mut rng);
        let s = calculer(&format!("sin({a})")).unwrap_or_else(|e| panic!("sin({a}): {e}"));
        let c = calculer(&format!("cos({a})")).unwrap_or_else(|e| panic!("cos({a}): {e}"));

        // sin² + cos² ≈ 1 (exact pour la table, série bornée < 120°)
        let norme = s * s + c * c;
        assert!((norme - 1.0).abs() < 1e-3, "angle={a} norme={norme}");
    }
}

#[test]
fn fuzz_safe_caracteres_aleatoires_sans_panique() {
    const ALPHABET: &[char] = &[
        '0', '1', '9', '.', '+', '-', '*', '/', '^', '(', ')', '!', ' ', 's', 'i', 'n', 'q', 'r',
        't', 'x', '&',
    ];

    let t0 = Instant::now();
    let max = Duration::from_millis(200);
    let mut rng = Rng::new(42);

    for _ in 0..500 {
        budget(t0, max);

        let len = 1 + rng.pick(12) as usize;
        let expr: String = (0..len)
            .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
            .collect();

        // seule exigence : pas de panique, et résultat stable
        let r1 = calculer(&expr);
        let r2 = calculer(&expr);
        assert!(meme_resultat(&r1, &r2), "non déterministe: expr={expr:?}");
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = somme_balancee("0.5", 800);
    budget(t0, max);

    let v = calculer(&expr).unwrap_or_else(|e| panic!("err: {e}"));

    // 800 * 0.5 = 400
    assert_eq!(v, 400.0);
}

#[test]
fn fuzz_safe_imbrication_profonde() {
    // évaluation itérative : pas de récursion, donc pas de débordement de pile
    let n = 5_000;
    let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    assert_eq!(calculer(&expr), Ok(1.0));
}

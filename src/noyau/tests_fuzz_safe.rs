//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler la façade sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariants clés : `evaluer` ne panique jamais et ne rend que "",
//!   "Error" ou un décimal fini ; réévaluer une sortie est un point fixe.

use std::time::{Duration, Instant};

use super::eval::evaluer;

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
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn est_decimal_fini(s: &str) -> bool {
    s.parse::<f64>().map(|v| v.is_finite()).unwrap_or(false)
}

fn est_sortie_canonique(s: &str) -> bool {
    s.is_empty() || s == "Error" || est_decimal_fini(s)
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 => "0".to_string(),
        1 => format!("{}", rng.pick(10)),
        2 => format!("{}", rng.pick(1000)),
        3 => format!("{}.{}", rng.pick(100), rng.pick(100)),
        4 => format!(".{}", 1 + rng.pick(99)),
        _ => format!("{}%", 1 + rng.pick(400)),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    match rng.pick(8) {
        0 => gen_nombre(rng),
        1 => format!("({}+{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        2 => format!("({}-{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("({}*{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        4 => format!("({}/{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        5 => format!("-{}", gen_expr(rng, depth - 1)),
        6 => format!("({})%", gen_expr(rng, depth - 1)),
        _ => gen_soupe(rng),
    }
}

/// Soupe de caractères arbitraires : le tokenizer doit tout avaler.
fn gen_soupe(rng: &mut Rng) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '9', '.', '+', '-', '*', '/', '%', '(', ')', ' ', 'x', '=', '!', 'é', '$',
    ];
    let n = 1 + rng.pick(12) as usize;
    let mut s = String::new();
    for _ in 0..n {
        s.push(ALPHABET[rng.pick(ALPHABET.len() as u32) as usize]);
    }
    s
}

/* ------------------------ Helper somme longue anti-gel ------------------------ */

fn somme_longue(terme: &str, n: usize) -> String {
    let mut s = String::with_capacity(n * (terme.len() + 1));
    s.push_str(terme);
    for _ in 1..n {
        s.push('+');
        s.push_str(terme);
    }
    s
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_jamais_de_panique_sorties_canoniques() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut vus_ok = 0usize;
    let mut vus_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 5);
        let sortie = evaluer(&expr);

        assert!(
            est_sortie_canonique(&sortie),
            "sortie non canonique: expr={expr:?} sortie={sortie:?}"
        );

        if sortie == "Error" {
            vus_err += 1;
        } else {
            vus_ok += 1;
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne balaye rien.
    assert!(vus_ok > 10, "trop peu de succès: {vus_ok}");
    assert!(vus_err > 0, "aucune erreur vue: fuzz trop sage");
}

#[test]
fn fuzz_safe_reevaluation_point_fixe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let premier = evaluer(&expr);

        // "" et "Error" sont leurs propres points fixes. Un décimal affiché
        // re-parse et ré-arrondit à l'identique tant que sa grandeur laisse
        // 12 décimales exprimables en f64 ; on borne donc la vérification.
        let dans_le_domaine = match premier.parse::<f64>() {
            Ok(v) => v.abs() < 1e3,
            Err(_) => true, // "" ou "Error"
        };
        if dans_le_domaine {
            assert_eq!(evaluer(&premier), premier, "expr={expr:?}");
        }
    }
}

#[test]
fn fuzz_safe_entrees_longues() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // longue somme plate : 5000 termes
    let expr = somme_longue("1", 5000);
    assert_eq!(evaluer(&expr), "5000");
    budget(t0, max);

    // imbrication profonde : le pipeline est itératif, pas de pile d'appels
    let profondeur = 2000;
    let mut expr = String::new();
    for _ in 0..profondeur {
        expr.push('(');
    }
    expr.push('7');
    for _ in 0..profondeur {
        expr.push(')');
    }
    assert_eq!(evaluer(&expr), "7");
    budget(t0, max);
}

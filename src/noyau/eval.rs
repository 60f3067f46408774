//! Noyau — évaluation (pipeline réel)
//!
//! tokenise -> moins unaires -> RPN -> évaluation postfixe -> finitude
//!        -> arrondi d'affichage -> décimal canonique
//!
//! `evaluer` est la seule opération vue des collaborateurs : elle rend
//! toujours une chaîne ("" pour entrée vide, "Error" pour toute panne
//! interne, sinon le décimal canonique du résultat).

use tracing::debug;

use super::erreur::ErreurNoyau;
use super::format::format_decimal;
use super::jetons::{format_jetons, tokenise, Jeton, Op};
use super::rpn::vers_rpn;
use super::unaire::normalise_unaires;

/// Marqueur d'erreur unique montré à l'appelant.
pub const AFFICHAGE_ERREUR: &str = "Error";

/// Évalue une suite postfixe contre une pile de f64.
///
/// - nombre : empilé
/// - '%' : dépile a, empile a/100
/// - binaire : dépile b puis a, empile a <op> b
/// - a/0 ne panique pas : NaN sentinelle, rattrapée plus haut par la
///   vérification de finitude
///
/// Fin : exactement une valeur doit rester sur la pile.
pub fn evalue_rpn(rpn: &[Jeton]) -> Result<f64, ErreurNoyau> {
    let mut pile: Vec<f64> = Vec::new();

    for jeton in rpn.iter().copied() {
        let op = match jeton {
            Jeton::Nombre(v) => {
                pile.push(v);
                continue;
            }
            Jeton::Op(op) => op,
        };

        match op {
            Op::Pourcent => {
                let a = pile.pop().ok_or(ErreurNoyau::PourcentSansOperande)?;
                pile.push(a / 100.0);
            }

            Op::Plus | Op::Moins | Op::Fois | Op::Divise => {
                let b = pile.pop().ok_or(ErreurNoyau::ExpressionInvalide)?;
                let a = pile.pop().ok_or(ErreurNoyau::ExpressionInvalide)?;

                let v = match op {
                    Op::Plus => a + b,
                    Op::Moins => a - b,
                    Op::Fois => a * b,
                    Op::Divise => {
                        if b == 0.0 {
                            f64::NAN
                        } else {
                            a / b
                        }
                    }
                    _ => unreachable!(),
                };
                pile.push(v);
            }

            Op::ParG | Op::ParD => return Err(ErreurNoyau::ParentheseEnRpn),
        }
    }

    if pile.len() != 1 {
        return Err(ErreurNoyau::ExpressionInvalide);
    }
    Ok(pile.pop().unwrap())
}

/// Pipeline complet sans politique d'affichage : f64 fini ou erreur typée.
pub fn evaluer_expression(entree: &str) -> Result<f64, ErreurNoyau> {
    let jetons = tokenise(entree);
    debug!(jetons = %format_jetons(&jetons), "tokenisation");

    let jetons = normalise_unaires(&jetons);

    let rpn = vers_rpn(&jetons)?;
    debug!(rpn = %format_jetons(&rpn), "forme postfixe");

    let v = evalue_rpn(&rpn)?;
    if !v.is_finite() {
        return Err(ErreurNoyau::ResultatNonFini);
    }
    Ok(v)
}

/// Façade sûre : toute panne interne devient le marqueur `"Error"`.
///
/// Entrée vide => chaîne vide, sans erreur. Sinon le pipeline complet,
/// puis arrondi à 12 décimales et rendu décimal canonique.
pub fn evaluer(entree: &str) -> String {
    if entree.is_empty() {
        return String::new();
    }

    match evaluer_expression(entree) {
        Ok(v) => format_decimal(v),
        Err(e) => {
            debug!(erreur = %e, entree, "évaluation échouée");
            AFFICHAGE_ERREUR.to_string()
        }
    }
}

// src/noyau/unaire.rs
//
// Moins unaire rendu explicite : "-x" devient "0 - x".
//
// Règle:
// - un '-' est unaire quand il n'a pas de jeton précédent, ou que le
//   précédent est un opérateur autre que ')'
// - le jeton "précédent" suivi est celui de la suite D'ORIGINE, pas la
//   paire réécrite
//
// Le reste du pipeline ne voit ainsi que des opérateurs binaires : pas de
// chemin unaire séparé dans le shunting-yard ni dans l'évaluateur.

use super::jetons::{Jeton, Op};

fn est_position_unaire(precedent: Option<Jeton>) -> bool {
    match precedent {
        None => true,
        Some(Jeton::Op(op)) => op != Op::ParD,
        Some(Jeton::Nombre(_)) => false,
    }
}

/// Réécrit chaque moins unaire en paire `0, -`.
/// Totale : ne perd aucun jeton, n'échoue jamais.
pub fn normalise_unaires(jetons: &[Jeton]) -> Vec<Jeton> {
    let mut out = Vec::with_capacity(jetons.len());
    let mut precedent: Option<Jeton> = None;

    for jeton in jetons.iter().copied() {
        if matches!(jeton, Jeton::Op(Op::Moins)) && est_position_unaire(precedent) {
            out.push(Jeton::Nombre(0.0));
            out.push(Jeton::Op(Op::Moins));
        } else {
            out.push(jeton);
        }
        precedent = Some(jeton);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::normalise_unaires;
    use crate::noyau::jetons::{tokenise, Jeton};

    fn normalise(s: &str) -> Vec<Jeton> {
        normalise_unaires(&tokenise(s))
    }

    #[test]
    fn moins_de_tete() {
        assert_eq!(normalise("-5"), tokenise("0-5"));
    }

    #[test]
    fn moins_apres_operateur() {
        assert_eq!(normalise("3*-2"), tokenise("3*0-2"));
        assert_eq!(normalise("(-5)"), tokenise("(0-5)"));
    }

    #[test]
    fn moins_apres_pourcent_est_unaire() {
        // '%' est un opérateur autre que ')' : la règle le couvre aussi
        assert_eq!(normalise("5%-3"), tokenise("5%0-3"));
    }

    #[test]
    fn moins_binaire_inchange() {
        assert_eq!(normalise("7-5"), tokenise("7-5"));
        assert_eq!(normalise("(1+2)-3"), tokenise("(1+2)-3"));
    }

    #[test]
    fn double_moins() {
        // le précédent suivi est le '-' d'origine : le second est unaire
        assert_eq!(normalise("--5"), tokenise("0-0-5"));
    }
}

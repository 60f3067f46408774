// src/noyau/rpn.rs
//
// Shunting-yard : suite infixe (déjà normalisée) -> suite postfixe.
//
// Règles:
// - nombre : sortie directe
// - '(' : empilé ; ')' : dépile jusqu'à la '(' appariée
// - '%' : sortie directe dès sa lecture — il ne lie que la valeur déjà au
//   sommet de la future pile d'évaluation, jamais en concurrence avec les
//   opérateurs en attente
// - binaires : dépile tant que le sommet est de précédence supérieure ou
//   égale (+ - * / tous associatifs à gauche), puis empile
//
// Pannes : ')' sans '(' pendant le dépilage, '(' restée au fond en fin
// d'entrée. Les deux portent la même erreur "parenthèses non appariées".

use super::erreur::ErreurNoyau;
use super::jetons::{Jeton, Op};

fn precedence(op: Op) -> i32 {
    match op {
        Op::Plus | Op::Moins => 1,
        Op::Fois | Op::Divise => 2,
        // nominale : '%' ne passe jamais par la pile d'opérateurs
        Op::Pourcent => 3,
        Op::ParG | Op::ParD => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [2, +, 3, *, 4]
///   rpn:    [2, 3, 4, *, +]
pub fn vers_rpn(jetons: &[Jeton]) -> Result<Vec<Jeton>, ErreurNoyau> {
    let mut out: Vec<Jeton> = Vec::with_capacity(jetons.len());
    let mut ops: Vec<Op> = Vec::new();

    for jeton in jetons.iter().copied() {
        let op = match jeton {
            Jeton::Nombre(_) => {
                out.push(jeton);
                continue;
            }
            Jeton::Op(op) => op,
        };

        match op {
            Op::ParG => ops.push(op),

            Op::ParD => loop {
                match ops.pop() {
                    Some(Op::ParG) => break,
                    Some(top) => out.push(Jeton::Op(top)),
                    None => return Err(ErreurNoyau::ParenthesesNonAppariees),
                }
            },

            Op::Pourcent => out.push(jeton),

            Op::Plus | Op::Moins | Op::Fois | Op::Divise => {
                while let Some(&top) = ops.last() {
                    if top == Op::ParG || precedence(top) < precedence(op) {
                        break;
                    }
                    ops.pop();
                    out.push(Jeton::Op(top));
                }
                ops.push(op);
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if op == Op::ParG {
            return Err(ErreurNoyau::ParenthesesNonAppariees);
        }
        out.push(Jeton::Op(op));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::vers_rpn;
    use crate::noyau::erreur::ErreurNoyau;
    use crate::noyau::jetons::{format_jetons, tokenise};

    fn rpn(s: &str) -> String {
        format_jetons(&vers_rpn(&tokenise(s)).expect("RPN"))
    }

    #[test]
    fn priorite_simple() {
        assert_eq!(rpn("2+3*4"), "2 3 4 * +");
        assert_eq!(rpn("2*3+4"), "2 3 * 4 +");
    }

    #[test]
    fn associativite_gauche() {
        assert_eq!(rpn("8-3-2"), "8 3 - 2 -");
        assert_eq!(rpn("8/4/2"), "8 4 / 2 /");
    }

    #[test]
    fn parentheses_forcent_l_ordre() {
        assert_eq!(rpn("(2+3)*4"), "2 3 + 4 *");
    }

    #[test]
    fn pourcent_sort_immediatement() {
        // '%' colle à la valeur qui le précède, avant même le '*' en attente
        assert_eq!(rpn("2*50%"), "2 50 % *");
        assert_eq!(rpn("(1+2)%"), "1 2 + %");
    }

    #[test]
    fn parenthese_fermante_orpheline() {
        assert_eq!(
            vers_rpn(&tokenise("1+2)")),
            Err(ErreurNoyau::ParenthesesNonAppariees)
        );
    }

    #[test]
    fn parenthese_ouvrante_orpheline() {
        assert_eq!(
            vers_rpn(&tokenise("(1+2")),
            Err(ErreurNoyau::ParenthesesNonAppariees)
        );
    }
}

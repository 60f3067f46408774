// src/app.rs
//
// Calculatrice de poche — module App (racine)
// -------------------------------------------
// Rôle:
// - Déclarer le sous-module d'état (etat.rs)
// - Fournir la boucle terminal qui pilote Calculatrice
//
// La boucle lit une ligne, l'applique au tampon avec les mêmes gardes que
// des frappes de touches, recalcule, puis affiche tampon et réponse — le
// cycle « chaque édition re-soumet tout le tampon » du contrat noyau.

pub mod etat;

pub use etat::Calculatrice;

use std::io::{self, BufRead, Write};

const AIDE: &str = "\
commandes : c effacer · < retour arrière · s bascule du signe · q quitter
toute autre ligne s'ajoute au tampon d'expression";

/// Boucle interactive sur stdin/stdout.
pub fn boucle_terminal() -> io::Result<()> {
    let stdin = io::stdin();
    let mut lignes = stdin.lock().lines();
    let mut sortie = io::stdout();

    let mut calc = Calculatrice::default();

    writeln!(sortie, "{AIDE}")?;

    loop {
        write!(sortie, "> ")?;
        sortie.flush()?;

        let Some(ligne) = lignes.next() else {
            break; // fin d'entrée
        };

        match ligne?.trim() {
            "q" => break,
            "c" => calc.effacer(),
            "<" => calc.retour_arriere(),
            "s" => calc.basculer_signe(),
            texte => calc.saisir_texte(texte),
        }

        calc.calculer();
        writeln!(sortie, "  {} = {}", calc.entree, calc.reponse)?;
    }

    Ok(())
}

// src/noyau/erreur.rs

use thiserror::Error;

/// Pannes internes du pipeline d'évaluation.
///
/// Aucune ne franchit la façade : `eval::evaluer` les replie toutes sur le
/// marqueur unique `"Error"`. La granularité reste disponible ici pour le
/// journal et les tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurNoyau {
    /// ')' sans '(' correspondante, ou '(' restée ouverte en fin d'entrée.
    #[error("parenthèses non appariées")]
    ParenthesesNonAppariees,

    /// '%' alors que la pile d'évaluation est vide.
    #[error("pourcentage sans opérande")]
    PourcentSansOperande,

    /// Opérateur binaire sans ses deux opérandes, ou pile finale ≠ 1 valeur.
    #[error("expression invalide")]
    ExpressionInvalide,

    /// Une parenthèse a atteint l'évaluateur postfixe.
    /// Inatteignable tant que `vers_rpn` consomme toutes les parenthèses.
    #[error("parenthèse inattendue en RPN")]
    ParentheseEnRpn,

    /// NaN ou ±infini après une évaluation structurellement valide
    /// (division par zéro, dépassement, numéral mal formé).
    #[error("résultat non fini")]
    ResultatNonFini,
}

// src/noyau/format.rs

/// Échelle d'arrondi : 12 décimales conservées à l'affichage.
/// Masque le bruit de représentation binaire (0.1+0.2 doit se lire 0.3).
const ECHELLE_ARRONDI: f64 = 1e12;

/// Au-delà de ce seuil un f64 n'a plus de partie fractionnaire, et la mise
/// à l'échelle de l'arrondi pourrait elle-même déborder : valeur inchangée.
const SEUIL_SANS_ARRONDI: f64 = 1e15;

/// Arrondit à 12 décimales (moitié éloignée de zéro).
pub fn arrondi_affichage(x: f64) -> f64 {
    if x.abs() >= SEUIL_SANS_ARRONDI {
        return x;
    }
    (x * ECHELLE_ARRONDI).round() / ECHELLE_ARRONDI
}

/// Forme décimale canonique d'un résultat fini.
///
/// `Display` de f64 rend la plus courte écriture qui re-parse à l'identique
/// ("0.3", "14", "0.333333333333") — jamais de notation scientifique.
/// -0 est normalisé en "0".
pub fn format_decimal(x: f64) -> String {
    let arrondi = arrondi_affichage(x);
    if arrondi == 0.0 {
        return "0".to_string();
    }
    format!("{arrondi}")
}

#[cfg(test)]
mod tests {
    use super::{arrondi_affichage, format_decimal};

    #[test]
    fn bruit_binaire_efface() {
        assert_eq!(format_decimal(0.1 + 0.2), "0.3");
        assert_eq!(arrondi_affichage(0.1 + 0.2), 0.3);
    }

    #[test]
    fn entiers_sans_decimales() {
        assert_eq!(format_decimal(14.0), "14");
        assert_eq!(format_decimal(-2.0), "-2");
    }

    #[test]
    fn zero_negatif_normalise() {
        assert_eq!(format_decimal(-0.0), "0");
    }

    #[test]
    fn douze_decimales_conservees() {
        assert_eq!(format_decimal(1.0 / 3.0), "0.333333333333");
    }

    #[test]
    fn tres_petit_arrondi_a_zero() {
        assert_eq!(format_decimal(1e-300), "0");
    }

    #[test]
    fn grandes_valeurs_inchangees() {
        // au-delà du seuil, pas de passage par l'échelle 1e12
        assert_eq!(arrondi_affichage(1e300), 1e300);
        assert_eq!(format_decimal(1e15), format!("{}", 1e15_f64));
    }
}

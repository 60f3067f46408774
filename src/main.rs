// src/main.rs
//
// Calculatrice de poche — point d'entrée terminal
// -----------------------------------------------
// But:
// - `calculatrice_poche "2+3*4"` : évalue une fois et imprime le résultat
// - sans argument : boucle interactive
// - journal du pipeline via RUST_LOG (ex: RUST_LOG=debug)

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod app;
mod noyau;

/// Calculatrice arithmétique de poche : + - * / %, parenthèses, moins
/// unaire. Toute panne d'évaluation s'affiche `Error`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Expression à évaluer en une passe ; sans elle, boucle interactive.
    expression: Option<String>,
}

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    match args.expression {
        Some(expr) => {
            println!("{}", noyau::evaluer(&expr));
            Ok(())
        }
        None => app::boucle_terminal(),
    }
}

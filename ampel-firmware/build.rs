// Build-Script: Wird vor dem Kompilieren ausgeführt
// Konfiguriert den Linker für ESP32-C6 Embedded Rust und erzeugt
// die Ampel-Konfiguration aus Environment-Variablen

use ampel_core::{DEFAULT_MAX_DISTANCE_CM, IndicatorConfig};
use std::fmt::Display;
use std::str::FromStr;
use std::{env, fs, path::PathBuf};

// Defaults wenn keine Environment Variable gesetzt ist
const DEFAULT_LOW_THRESHOLD_CM: f32 = 20.0;
const DEFAULT_HIGH_THRESHOLD_CM: f32 = 80.0;
const DEFAULT_POLL_INTERVAL_MS: u64 = 200;

fn main() {
    // Lade .env file für optionale Konfiguration
    // Fehler ignorieren wenn .env nicht existiert (dann gelten ENV vars oder Defaults)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("⚠️  .env file nicht gefunden: {}", e);
        eprintln!("   Nutze AMPEL_* Environment-Variablen oder Defaults");
    }
    println!("cargo:rerun-if-changed=.env");

    generate_config();

    // Registriere hilfsbereiten Error-Handler für Linker-Fehler
    linker_be_nice();

    // Füge Linker-Skripte hinzu:

    // 1. defmt.x - defmt Logging-Support
    //    Definiert Symbole für defmt's binäres Log-Format
    println!("cargo:rustc-link-arg=-Tdefmt.x");

    // 2. linkall.x - ESP32 Memory-Layout
    //    WICHTIG: Muss als LETZTES kommen (sonst Probleme mit flip-link)
    //    Definiert Flash/RAM-Layout und Startup-Code
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}

/// Liest die Ampel-Konfiguration und schreibt sie als Konstanten nach
/// `$OUT_DIR/ampel_config.rs` (wird von `config.rs` per `include!` geladen)
///
/// Ungültige Werte brechen den Build ab - eine Firmware mit inkonsistenten
/// Schwellwerten wird gar nicht erst gebaut.
fn generate_config() {
    let low: f32 = env_or("AMPEL_LOW_THRESHOLD_CM", DEFAULT_LOW_THRESHOLD_CM);
    let high: f32 = env_or("AMPEL_HIGH_THRESHOLD_CM", DEFAULT_HIGH_THRESHOLD_CM);
    let interval: u64 = env_or("AMPEL_POLL_INTERVAL_MS", DEFAULT_POLL_INTERVAL_MS);
    let max_distance: f32 = env_or("AMPEL_MAX_DISTANCE_CM", DEFAULT_MAX_DISTANCE_CM);

    if let Err(e) = IndicatorConfig::new(low, high, interval) {
        panic!("Ungültige AMPEL_* Konfiguration: {}", e);
    }
    if !max_distance.is_finite() || max_distance <= high {
        panic!(
            "AMPEL_MAX_DISTANCE_CM ({}) muss größer als AMPEL_HIGH_THRESHOLD_CM ({}) sein",
            max_distance, high
        );
    }

    let code = format!(
        "pub const LOW_THRESHOLD_CM: f32 = {:?};\n\
         pub const HIGH_THRESHOLD_CM: f32 = {:?};\n\
         pub const POLL_INTERVAL_MS: u64 = {};\n\
         pub const MAX_DISTANCE_CM: f32 = {:?};\n",
        low, high, interval, max_distance
    );

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("ampel_config.rs"), code).unwrap();
}

// Liest eine Environment Variable und parst sie, sonst Default
fn env_or<T>(name: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    println!("cargo:rerun-if-env-changed={}", name);
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{} = {:?} ist ungültig: {}", name, raw, e)),
        Err(_) => default,
    }
}

// Error-Handler: Zeigt hilfreiche Tipps bei Linker-Fehlern
// Wird vom Linker als "--error-handling-script" aufgerufen
fn linker_be_nice() {
    let args: Vec<String> = std::env::args().collect();

    // Wenn vom Linker aufgerufen (mit Error-Typ und Symbol-Name)
    if args.len() > 1 {
        let kind = &args[1]; // Fehler-Typ (z.B. "undefined-symbol")
        let what = &args[2]; // Symbol-Name (z.B. "_defmt_...")

        match kind.as_str() {
            // Undefiniertes Symbol gefunden
            "undefined-symbol" => match what.as_str() {
                what if what.starts_with("_defmt_") => {
                    eprintln!();
                    eprintln!(
                        "💡 `defmt` not found - make sure `defmt.x` is added as a linker script and you have included `use esp_println as _;`"
                    );
                    eprintln!();
                }
                "_stack_start" => {
                    eprintln!();
                    eprintln!("💡 Is the linker script `linkall.x` missing?");
                    eprintln!();
                }
                what if what.starts_with("esp_rtos_") => {
                    eprintln!();
                    eprintln!(
                        "💡 `esp-rtos` is not started. Make sure `esp_rtos::start()` is called before spawning tasks."
                    );
                    eprintln!();
                }
                _ => (),
            },
            _ => {
                std::process::exit(1);
            }
        }

        std::process::exit(0);
    }

    println!(
        "cargo:rustc-link-arg=--error-handling-script={}",
        std::env::current_exe().unwrap().display()
    );
}

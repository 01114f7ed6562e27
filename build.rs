use std::env;
use std::fs;
use std::path::Path;

/// Claves que se reenvían de `.env` a `option_env!` en `config.rs`
const FORWARDED_KEYS: &[&str] = &[
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "LOG_LEVEL",
    "SESSION_STORAGE_KEY",
    "SIGN_IN_ANSWER",
    "EASTER_EGG_TOKEN",
    "ROOT_ELEMENT_ID",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    for key in FORWARDED_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!("cargo:warning=No .env file found, using built-in defaults.");
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=Could not read .env, using built-in defaults.");
        return;
    };

    for line in contents.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');

        // El entorno real tiene prioridad sobre .env
        if FORWARDED_KEYS.contains(&key) && env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}

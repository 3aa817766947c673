//! Common utilities for aliasmatch benchmarks

#![allow(dead_code)]

const FIRSTS: &[&str] = &["FIG", "Acme", "Risk", "Blue", "North", "Delta", "Apex", "Vega"];
const MIDDLES: &[&str] = &["WorldWide", "Capital", "Finance", "Global", "Holdings", "F", "W", "G"];
const LASTS: &[&str] = &["LLC", "Inc", "Ltd", "GmbH"];

/// Deterministic alias set mixing two- and three-token names.
pub fn generate_aliases(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let first = FIRSTS[i % FIRSTS.len()];
            let last = LASTS[(i / FIRSTS.len()) % LASTS.len()];
            if i % 3 == 0 {
                format!("{first} {last}")
            } else {
                let middle = MIDDLES[(i / 3) % MIDDLES.len()];
                format!("{first} {middle} {last}")
            }
        })
        .collect()
}

/// Records that exercise every rule plus the reject paths.
pub fn sample_records() -> Vec<&'static str> {
    vec![
        "FIG WorldWide LLC",
        "WorldWide FIG LLC",
        "FIG W LLC",
        "FIG LLC",
        "Risk Capital Inc",
        "Nobody Known Corp",
        "FIG",
        "FIG Global Risk LLC",
    ]
}

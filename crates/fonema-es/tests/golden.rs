//! Golden tests: compare transcriptions against the recorded corpus.
//!
//! `tests/golden/words.json` holds one entry per word with the expected
//! output for each locale and the folded Castilian form.
//!
//! Run: cargo test -p fonema-es --test golden

use std::path::PathBuf;

use fonema_es::{Locale, StressMarks, Transcriber, TranscriberOptions, transcribe};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct GoldenEntry {
    word: String,
    #[serde(rename = "es_ES")]
    castilian: String,
    #[serde(rename = "es_MX")]
    mexican: String,
    #[serde(rename = "es_ES_folded")]
    castilian_folded: String,
}

/// Load the golden JSON file.
fn load_golden() -> Vec<GoldenEntry> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden/words.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

/// Run every entry through `check` and report all mismatches at once.
fn compare(label: &str, check: impl Fn(&GoldenEntry) -> Option<String>) {
    let entries = load_golden();
    assert!(entries.len() > 100, "golden corpus unexpectedly small");

    let failures: Vec<String> = entries.iter().filter_map(&check).collect();
    if !failures.is_empty() {
        panic!(
            "{label}: {} of {} words differ:\n{}",
            failures.len(),
            entries.len(),
            failures.join("\n")
        );
    }
}

fn mismatch(word: &str, expected: &str, actual: Result<String, impl std::fmt::Debug>) -> Option<String> {
    match actual {
        Ok(ipa) if ipa == expected => None,
        other => Some(format!("  {word}: expected {expected:?}, got {other:?}")),
    }
}

#[test]
fn golden_castilian() {
    compare("es_ES", |e| mismatch(&e.word, &e.castilian, transcribe(&e.word, "es_ES")));
}

#[test]
fn golden_mexican() {
    compare("es_MX", |e| mismatch(&e.word, &e.mexican, transcribe(&e.word, "es_MX")));
}

#[test]
fn golden_castilian_folded() {
    let transcriber = Transcriber::new(TranscriberOptions {
        locale: Locale::Castilian,
        stress_marks: StressMarks::Fold,
    });
    compare("es_ES folded", |e| {
        mismatch(&e.word, &e.castilian_folded, transcriber.transcribe(&e.word))
    });
}

#[test]
fn golden_folding_matches_post_pass() {
    compare("fold of kept", |e| {
        let folded = transcribe(&e.word, "es_ES").map(|ipa| fonema_es::fold_stress_markers(&ipa));
        mismatch(&e.word, &e.castilian_folded, folded)
    });
}

#[test]
fn golden_uppercase_input() {
    compare("uppercase", |e| {
        mismatch(&e.word, &e.mexican, transcribe(&e.word.to_uppercase(), "es_MX"))
    });
}

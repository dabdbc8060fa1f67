//! File formats spoken by the surrounding collaborators: the recognizer's
//! word JSON on the way in, the words CSV and plain-text transcript on the
//! way out. The core engine itself owns no format; these readers and writers
//! exist so the CLI and callers share one implementation.

use std::path::Path;

use serde::Deserialize;

use crate::error::AlignError;
use crate::types::{CorrectedWord, HypWordInput};

/// Recognizer output is either a bare word array or a Vosk-style result
/// envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum HypothesisFile {
    Words(Vec<HypWordInput>),
    Envelope { result: Vec<HypWordInput> },
}

/// Read hypothesis words from a JSON file. Missing `conf` fields default
/// to 1.0.
pub fn read_hypothesis_json(path: &Path) -> Result<Vec<HypWordInput>, AlignError> {
    let data =
        std::fs::read_to_string(path).map_err(|e| AlignError::io("read hypothesis json", e))?;
    let parsed: HypothesisFile =
        serde_json::from_str(&data).map_err(|e| AlignError::json("parse hypothesis json", e))?;
    Ok(match parsed {
        HypothesisFile::Words(words) => words,
        HypothesisFile::Envelope { result } => result,
    })
}

/// Read hypothesis words from a `word,start,end,conf` CSV file (the same
/// layout [`words_to_csv`] writes).
pub fn read_hypothesis_csv(path: &Path) -> Result<Vec<HypWordInput>, AlignError> {
    let data =
        std::fs::read_to_string(path).map_err(|e| AlignError::io("read hypothesis csv", e))?;
    parse_words_csv(&data)
}

fn parse_words_csv(data: &str) -> Result<Vec<HypWordInput>, AlignError> {
    let mut words = Vec::new();
    for (line_no, line) in data.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        if line_no == 0 && line.eq_ignore_ascii_case("word,start,end,conf") {
            continue;
        }
        // Numeric columns never contain commas, so split from the right and
        // let the word column keep any commas of its own.
        let mut fields = line.rsplitn(4, ',');
        let (conf, end, start, word) = match (
            fields.next(),
            fields.next(),
            fields.next(),
            fields.next(),
        ) {
            (Some(conf), Some(end), Some(start), Some(word)) => (conf, end, start, word),
            _ => {
                return Err(AlignError::parse(
                    "parse words csv",
                    format!("line {}: expected 4 columns", line_no + 1),
                ))
            }
        };
        let parse_num = |field: &str, name: &str| {
            field.trim().parse::<f64>().map_err(|_| {
                AlignError::parse(
                    "parse words csv",
                    format!("line {}: invalid {name} value {field:?}", line_no + 1),
                )
            })
        };
        words.push(HypWordInput {
            word: word.to_string(),
            start: parse_num(start, "start")?,
            end: parse_num(end, "end")?,
            confidence: parse_num(conf, "conf")?,
        });
    }
    Ok(words)
}

/// Render corrected words as `word,start,end,conf` rows with a header, times
/// and confidence to three decimals.
pub fn words_to_csv(words: &[CorrectedWord]) -> String {
    let mut out = String::from("word,start,end,conf");
    for w in words {
        out.push('\n');
        out.push_str(&format!(
            "{},{:.3},{:.3},{:.3}",
            w.word, w.start_sec, w.end_sec, w.confidence
        ));
    }
    out.push('\n');
    out
}

/// Join corrected words into a single-spaced plain-text transcript.
pub fn words_to_text(words: &[CorrectedWord]) -> String {
    words
        .iter()
        .map(|w| w.word.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn read_reference_text(path: &Path) -> Result<String, AlignError> {
    std::fs::read_to_string(path).map_err(|e| AlignError::io("read reference text", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, start: f64, end: f64, confidence: f64) -> CorrectedWord {
        CorrectedWord {
            word: text.to_string(),
            start_sec: start,
            end_sec: end,
            confidence,
        }
    }

    #[test]
    fn csv_round_trip() {
        let words = vec![word("Hello,", 0.0, 0.5, 1.0), word("world!", 0.5, 1.0, 0.5)];
        let csv = words_to_csv(&words);
        assert!(csv.starts_with("word,start,end,conf\n"));

        let parsed = parse_words_csv(&csv).expect("csv should parse");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].word, "Hello,");
        assert_eq!(parsed[0].start, 0.0);
        assert_eq!(parsed[0].end, 0.5);
        assert_eq!(parsed[1].confidence, 0.5);
    }

    #[test]
    fn csv_rejects_short_rows() {
        let err = parse_words_csv("word,start,end,conf\nonly,two").unwrap_err();
        assert!(matches!(err, AlignError::Parse { .. }));
    }

    #[test]
    fn csv_rejects_non_numeric_columns() {
        let err = parse_words_csv("hello,zero,0.5,1.0").unwrap_err();
        assert!(matches!(err, AlignError::Parse { .. }));
    }

    #[test]
    fn hypothesis_json_bare_array() {
        let json = r#"[{"word":"teh","start":0.0,"end":0.5,"conf":0.9}]"#;
        let parsed: HypothesisFile = serde_json::from_str(json).expect("valid json");
        let words = match parsed {
            HypothesisFile::Words(w) => w,
            HypothesisFile::Envelope { result } => result,
        };
        assert_eq!(words[0].word, "teh");
        assert_eq!(words[0].confidence, 0.9);
    }

    #[test]
    fn hypothesis_json_envelope_and_default_conf() {
        let json = r#"{"result":[{"word":"cat","start":0.5,"end":1.0}]}"#;
        let parsed: HypothesisFile = serde_json::from_str(json).expect("valid json");
        let words = match parsed {
            HypothesisFile::Words(w) => w,
            HypothesisFile::Envelope { result } => result,
        };
        assert_eq!(words[0].confidence, 1.0);
    }

    #[test]
    fn words_to_text_joins_with_spaces() {
        let words = vec![word("the", 0.0, 0.5, 1.0), word("cat", 0.5, 1.0, 1.0)];
        assert_eq!(words_to_text(&words), "the cat");
    }
}

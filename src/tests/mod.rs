//! Cross-module tests for the full pipeline.


use std::thread;

use crate::mapper::map_phonemes;
use crate::segment::segment;
use crate::stress::annotate;
use crate::{RespellError, Respeller, SymbolTable};

/// Every stage on its own, checked against the end-to-end result.
#[test]
fn stages_compose() {
    let table = SymbolTable::default_table();
    let mapped = map_phonemes(&table, &["B", "AH1", "T", "ER0"]).unwrap();
    assert_eq!(mapped, "bŭ1tur");
    let segmented = segment(&mapped).unwrap();
    assert_eq!(segmented, "bŭ1-tur");
    assert_eq!(annotate(&segmented), "ˈBŬ-tur");
    assert_eq!(
        Respeller::new().convert("B AH1 T ER0").unwrap(),
        annotate(&segmented)
    );
}

#[test]
fn unknown_token_anywhere_aborts() {
    let r = Respeller::new();
    for input in ["XX K AE1 T", "K XX AE1 T", "K AE1 T XX", "K ae1 T"] {
        let err = r.convert(input).unwrap_err();
        assert!(matches!(err, RespellError::UnknownPhoneme(_)), "{input}");
    }
}

#[test]
fn first_unknown_token_is_reported() {
    let err = Respeller::new().convert("K QQ AE1 ZZ").unwrap_err();
    assert_eq!(err, RespellError::UnknownPhoneme("QQ".into()));
}

#[test]
fn secondary_stress_word() {
    // "rain coat" style compound with secondary stress on the second syllable.
    let r = Respeller::new();
    assert_eq!(r.convert("R EY1 N K OW2 T").unwrap(), "ˈRĀN-KŌT");
}

#[test]
fn unstressed_syllables_stay_lowercase() {
    let out = Respeller::new().convert("AH0 L OW1 N").unwrap();
    assert_eq!(out, "ŭ-ˈLŌN");
}

#[test]
fn shared_respeller_across_threads() {
    let r = Respeller::new();
    let words = ["K AE1 T", "B AH1 T ER0", "W AO1 T ER0", "HH AW1"];
    let expected: Vec<String> = words.iter().map(|w| r.convert(w).unwrap()).collect();

    thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let r = &r;
                s.spawn(move || {
                    words
                        .iter()
                        .map(|w| r.convert(w).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

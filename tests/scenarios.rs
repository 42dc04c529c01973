//! Worked examples with hand-checked outputs.

use proptest::prelude::*;
use tabula::alphabet::builtin;
use tabula::modular::{gcd, valid_coprimes_up_to, AffineParams};
use tabula::{Cipher, CipherError, CipherVariant, Config, Context};

fn english(variant: CipherVariant) -> Cipher {
    Cipher::new(builtin::english(), variant, &Context::default()).unwrap()
}

fn secret(s: &str) -> String {
    s.to_string()
}

// ═══════════════════════════════════════════════════════════════════════
// Caesar
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn caesar_shift_twelve() {
    let mut cipher = english(CipherVariant::Caesar { key: 'M' });
    assert_eq!(cipher.encode("CMZ").unwrap(), "OYL");
    assert_eq!(cipher.decode("OYL").unwrap(), "CMZ");
}

#[test]
fn caesar_preserves_case_and_punctuation() {
    let mut cipher = english(CipherVariant::Caesar { key: 'M' });
    assert_eq!(cipher.encode("Hello, World!").unwrap(), "Tqxxa, Iadxp!");
    assert_eq!(cipher.decode("Tqxxa, Iadxp!").unwrap(), "Hello, World!");
}

#[test]
fn caesar_lowercase_key_is_folded() {
    let mut cipher = english(CipherVariant::Caesar { key: 'm' });
    assert_eq!(cipher.encode("CMZ").unwrap(), "OYL");
}

#[test]
fn caesar_without_case_folding_skips_lowercase() {
    let ctx = Context::new(Config {
        fold_case: false,
        ..Config::default()
    });
    let mut cipher =
        Cipher::new(builtin::english(), CipherVariant::Caesar { key: 'M' }, &ctx).unwrap();
    assert_eq!(cipher.encode("Cmz").unwrap(), "Omz");
}

#[test]
fn caesar_greek_wraps() {
    let mut cipher =
        Cipher::new(builtin::greek(), CipherVariant::Caesar { key: 'Γ' }, &Context::default())
            .unwrap();
    assert_eq!(cipher.encode("αβω").unwrap(), "γδβ");
    assert_eq!(cipher.decode("γδβ").unwrap(), "αβω");
}

#[test]
fn greek_final_sigma_passes_through() {
    let mut cipher =
        Cipher::new(builtin::greek(), CipherVariant::Caesar { key: 'Γ' }, &Context::default())
            .unwrap();
    assert_eq!(cipher.encode("λογος").unwrap(), "νρερς");
    assert_eq!(cipher.decode("νρερς").unwrap(), "λογος");
    assert_eq!(cipher.encode("ΛΟΓΟΣ").unwrap(), "ΝΡΕΡΥ");
}

#[test]
fn caesar_german_sharp_s() {
    let mut cipher =
        Cipher::new(builtin::german(), CipherVariant::Caesar { key: 'B' }, &Context::default())
            .unwrap();
    assert_eq!(cipher.encode("ß").unwrap(), "a");
    assert_eq!(cipher.decode("a").unwrap(), "ß");
    assert_eq!(cipher.encode("ẞ").unwrap(), "A");
}

// ═══════════════════════════════════════════════════════════════════════
// Position-dependent schedules
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn didimus_alternates_keys() {
    let mut cipher = english(CipherVariant::Didimus {
        key: 'B',
        offset: 2,
    });
    assert_eq!(cipher.encode("AAAA").unwrap(), "BDBD");
    assert_eq!(cipher.encode("AA AA").unwrap(), "BD BD");
}

#[test]
fn didimus_offset_landing_on_first_symbol_is_bumped() {
    // Z + 1 wraps to A, which would be no shift.
    let mut cipher = english(CipherVariant::Didimus {
        key: 'Z',
        offset: 1,
    });
    assert_eq!(cipher.encode("AA").unwrap(), "ZB");
}

#[test]
fn fibonacci_series_offsets() {
    let mut cipher = english(CipherVariant::Fibonacci { key: 'C' });
    assert_eq!(cipher.encode("AAAAAAAAAAAA").unwrap(), "CDDEFHKPXKCD");
    assert_eq!(cipher.encode("AA-AA").unwrap(), "CD-DE");
}

#[test]
fn bellaso_periodic_secret() {
    let mut cipher = english(CipherVariant::Bellaso {
        secret: secret("KEY"),
    });
    assert_eq!(cipher.encode("ATTACK AT DAWN").unwrap(), "KXRKGI KX BKAL");
    assert_eq!(cipher.decode("KXRKGI KX BKAL").unwrap(), "ATTACK AT DAWN");
}

#[test]
fn bellaso_secret_is_trimmed() {
    let mut padded = english(CipherVariant::Bellaso {
        secret: secret("  KEY \n"),
    });
    assert_eq!(padded.encode("AAAA").unwrap(), "KEYK");
}

#[test]
fn vigenere_autokey() {
    let mut cipher = english(CipherVariant::Vigenere {
        secret: secret("KEY"),
    });
    assert_eq!(cipher.encode("MESSAGE").unwrap(), "WIQEEYW");
    assert_eq!(cipher.decode("WIQEEYW").unwrap(), "MESSAGE");
}

#[test]
fn vigenere_autokey_lowercase_and_spacing() {
    let mut cipher = english(CipherVariant::Vigenere {
        secret: secret("KEY"),
    });
    assert_eq!(cipher.encode("message").unwrap(), "wiqeeyw");
    assert_eq!(cipher.encode("MES SAGE").unwrap(), "WIQ EEYW");
    assert_eq!(cipher.decode("WIQ EEYW").unwrap(), "MES SAGE");
}

#[test]
fn sessions_are_independent() {
    let mut cipher = english(CipherVariant::Vigenere {
        secret: secret("KEY"),
    });
    let first = cipher.encode("MESSAGE").unwrap();
    let second = cipher.encode("MESSAGE").unwrap();
    assert_eq!(first, second);
}

// ═══════════════════════════════════════════════════════════════════════
// Affine
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn affine_five_three() {
    let mut cipher = english(CipherVariant::Affine { a: 5, b: 3 });
    assert_eq!(cipher.encode("D").unwrap(), "S");
    assert_eq!(cipher.decode("S").unwrap(), "D");
    assert_eq!(cipher.encode("dog").unwrap(), "svh");
}

#[test]
fn affine_b_applied_modulo_n() {
    let mut wrapped = english(CipherVariant::Affine { a: 5, b: 29 });
    assert_eq!(wrapped.encode("D").unwrap(), "S");
    assert_eq!(wrapped.decode("S").unwrap(), "D");
}

#[test]
fn affine_extreme_coefficients() {
    let text = "The quick brown fox";
    for (a, b) in [(1, usize::MAX), (usize::MAX, 0), (usize::MAX, usize::MAX)] {
        let mut cipher = english(CipherVariant::Affine { a, b });
        let mut reduced = english(CipherVariant::Affine {
            a: a % 26,
            b: b % 26,
        });
        let sealed = cipher.encode(text).unwrap();
        assert_eq!(sealed, reduced.encode(text).unwrap());
        assert_eq!(cipher.decode(&sealed).unwrap(), text);
    }
}

#[test]
fn affine_rejects_non_coprime() {
    let err = Cipher::new(
        builtin::english(),
        CipherVariant::Affine { a: 13, b: 3 },
        &Context::default(),
    )
    .unwrap_err();
    assert_eq!(err, CipherError::NotCoprime { a: 13, n: 26 });
    assert_eq!(
        Cipher::new(
            builtin::english(),
            CipherVariant::Affine { a: 0, b: 3 },
            &Context::default()
        )
        .unwrap_err(),
        CipherError::InvalidCoefficient(0)
    );
}

#[test]
fn coprimes_of_twenty_six() {
    assert_eq!(
        valid_coprimes_up_to(26),
        vec![1, 3, 5, 7, 9, 11, 15, 17, 19, 21, 23, 25]
    );
}

proptest! {
    #[test]
    fn affine_params_valid_iff_coprime(a in 1usize..300, b in 0usize..300, n in 2usize..300) {
        match AffineParams::new(a, b, n) {
            Ok(p) => {
                prop_assert_eq!(gcd(a, n), 1);
                prop_assert_eq!((p.a() * p.a_inverse()) % n, 1 % n);
                for x in 0..n {
                    prop_assert_eq!(p.decode(p.encode(x)), x);
                }
            }
            Err(e) => {
                prop_assert_ne!(gcd(a, n), 1);
                prop_assert_eq!(e, CipherError::NotCoprime { a, n });
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Key validation
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn secret_outside_alphabet_rejected() {
    let err = Cipher::new(
        builtin::english(),
        CipherVariant::Bellaso {
            secret: secret("K3Y"),
        },
        &Context::default(),
    )
    .unwrap_err();
    assert!(matches!(err, CipherError::KeyNotInAlphabet { ref alphabet, .. } if alphabet == "English"));
}

#[test]
fn blank_secret_rejected() {
    let err = Cipher::new(
        builtin::english(),
        CipherVariant::Vigenere {
            secret: secret(" \t"),
        },
        &Context::default(),
    )
    .unwrap_err();
    assert_eq!(err, CipherError::EmptySecret);
}

#[test]
fn alphabet_string_exposed() {
    let cipher = english(CipherVariant::Caesar { key: 'A' });
    assert_eq!(cipher.alphabet(), "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
}

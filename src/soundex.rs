use derive_builder::Builder;

use crate::error::Error;
use crate::string_strategy::{StringStrategy, UnicodeStringStrategy};

/// Soundex digit classes for `'A'..='Z'`. Vowels and the near-silent
/// consonants map to class 0, the six consonant classes to 1-6.
const DIGIT_CLASSES: &[u8; 26] = b"01230120022455012623010202";

pub const DEFAULT_CODE_LENGTH: usize = 4;
pub const DEFAULT_PAD: char = '0';

/// Knuth-variant soundex encoder.
///
/// Produces codes of exactly `code_length` characters: the word's first
/// letter followed by consonant-class digits, right-padded with `pad`.
#[derive(Builder, Clone)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct Soundex<T: StringStrategy> {
    #[builder(default = "DEFAULT_CODE_LENGTH")]
    code_length: usize,
    #[builder(default = "DEFAULT_PAD")]
    pad: char,
    #[builder(default = "T::new()", setter(skip))]
    string_strategy: T,
}

impl<T: StringStrategy> Default for Soundex<T> {
    fn default() -> Soundex<T> {
        Soundex {
            code_length: DEFAULT_CODE_LENGTH,
            pad: DEFAULT_PAD,
            string_strategy: T::new(),
        }
    }
}

impl<T: StringStrategy> SoundexBuilder<T> {
    fn validate(&self) -> Result<(), String> {
        if self.code_length == Some(0) {
            return Err(Error::InvalidCodeLength.to_string());
        }
        Ok(())
    }
}

impl<T: StringStrategy> Soundex<T> {
    /// Encode a word into its phonetic code.
    ///
    /// The result is always exactly `code_length` characters. Input with no
    /// alphabetic characters (the empty string included) encodes to
    /// `code_length` pad characters; no letter substitution happens for the
    /// first position in that case.
    pub fn encode(&self, word: &str) -> String {
        let word = self.string_strategy.prepare(word);

        let mut first_letter = None;
        let mut digits = String::new();

        for c in word.chars() {
            if !c.is_ascii_alphabetic() {
                continue;
            }

            let c = c.to_ascii_uppercase();

            if first_letter.is_none() {
                first_letter = Some(c);
            }

            let digit = DIGIT_CLASSES[(c as u8 - b'A') as usize] as char;

            // double letters sound once
            if digits.chars().last() != Some(digit) {
                digits.push(digit);
            }
        }

        let mut code = String::with_capacity(self.code_length);
        let mut digits = digits.chars();

        // the first digit slot belongs to the letter itself
        if let Some(first) = first_letter {
            code.push(first);
            digits.next();
        }

        // vowel-class digits are dropped entirely, not just collapsed
        code.extend(digits.filter(|&d| d != '0'));

        code.truncate(self.code_length);
        while code.chars().count() < self.code_length {
            code.push(self.pad);
        }

        code
    }
}

/// Four-character soundex code of `word`.
pub fn soundex(word: &str) -> String {
    Soundex::<UnicodeStringStrategy>::default().encode(word)
}

/// Soundex code truncated or padded to exactly `length` characters.
pub fn soundex_of_length(word: &str, length: usize) -> Result<String, Error> {
    let encoder: Soundex<UnicodeStringStrategy> = SoundexBuilder::default()
        .code_length(length)
        .build()
        .map_err(|_| Error::InvalidCodeLength)?;

    Ok(encoder.encode(word))
}

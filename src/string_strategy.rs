#[cfg(not(target_arch = "wasm32"))]
use unidecode::unidecode;

/// How input words are prepared before phonetic encoding.
pub trait StringStrategy: Clone + Default {
    fn new() -> Self;
    fn prepare(&self, s: &str) -> String;
}

/// Transliterates input to ASCII, so accented letters still take part in the
/// encoding ("Müller" encodes like "Muller").
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Default)]
pub struct AsciiStringStrategy {}

#[cfg(not(target_arch = "wasm32"))]
impl StringStrategy for AsciiStringStrategy {
    fn new() -> Self {
        Self {}
    }

    fn prepare(&self, s: &str) -> String {
        unidecode(s)
    }
}

/// Leaves input untouched; non-ASCII letters are simply skipped by the
/// encoder.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Default)]
pub struct UnicodeStringStrategy {}

impl StringStrategy for UnicodeStringStrategy {
    fn new() -> Self {
        Self {}
    }

    fn prepare(&self, s: &str) -> String {
        s.to_string()
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_prepare() {
        assert_eq!(AsciiStringStrategy::new().prepare("čičina"), "cicina");
    }

    #[test]
    fn unicode_prepare() {
        assert_eq!(UnicodeStringStrategy::new().prepare("čičina"), "čičina");
    }
}

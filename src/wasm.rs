use serde_derive::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::edit_distance::levenshtein;
use crate::soundex::{Soundex, SoundexBuilder};
use crate::string_strategy::UnicodeStringStrategy;

#[derive(Serialize, Deserialize)]
pub struct EncoderParams {
    code_length: i32,
}

#[wasm_bindgen(js_name = Soundex)]
pub struct JSSoundex {
    encoder: Soundex<UnicodeStringStrategy>,
}

#[wasm_bindgen(js_class = Soundex)]
impl JSSoundex {
    // Numeric params are exposed as i32 bc BigInt doesn't play well in some
    // browsers.
    #[wasm_bindgen(constructor)]
    pub fn new(parameters: &JsValue) -> Result<JSSoundex, JsValue> {
        let params: EncoderParams;

        if let Ok(i) = parameters.into_serde() {
            params = i;
        } else {
            return Err(JsValue::from("Unable to parse arguments"));
        }

        if params.code_length <= 0 {
            return Err(JsValue::from("code_length must be positive"));
        }

        Ok(JSSoundex {
            encoder: SoundexBuilder::default()
                .code_length(params.code_length as usize)
                .build()
                .map_err(|e| JsValue::from(e.to_string()))?,
        })
    }

    pub fn encode(&self, word: &str) -> String {
        self.encoder.encode(word)
    }
}

#[wasm_bindgen]
pub fn edit_distance(a: &str, b: &str) -> i32 {
    levenshtein(a, b) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_encoder() {
        let init_args = EncoderParams { code_length: 4 };
        let encoder = JSSoundex::new(&JsValue::from_serde(&init_args).unwrap()).unwrap();
        assert_eq!(encoder.encode("Robert"), "R163");

        let bad_args = EncoderParams { code_length: 0 };
        assert!(JSSoundex::new(&JsValue::from_serde(&bad_args).unwrap()).is_err());
    }

    #[wasm_bindgen_test]
    fn test_distance() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
    }
}

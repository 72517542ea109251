// WASM bindings for fonema.
//
// Provides a `WasmTranscriber` class exported via wasm-bindgen that wraps
// `Transcriber` from fonema-es. Token lists are serialized to JavaScript
// values using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const t = new WasmTranscriber("es_MX", false);
//   t.transcribe("cielo");                // => "sjelo"
//   t.transcribeWith("cielo", "es_ES");   // => "θjelo"
//   t.transcribeText("¡Hola, amigo!");    // => "¡ola, amiɣo!"
//   t.tokens("¿Qué tal?");                // => [{ tokenType: "Punctuation", ... }, ...]
//   t.stressMarkerPositions("mExiko");    // => [1]

use serde::Serialize;
use wasm_bindgen::prelude::*;

use fonema_core::token::Token;
use fonema_es::{
    Locale, StressMarks, Transcriber, TranscriberOptions, TranscriptionError, stress_marker_positions,
    tokenizer,
};

/// Serializable representation of a token.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsToken {
    token_type: &'static str,
    text: String,
    token_len: usize,
    pos: usize,
}

impl From<Token> for JsToken {
    fn from(t: Token) -> Self {
        Self {
            token_type: t.token_type.name(),
            text: t.text,
            token_len: t.token_len,
            pos: t.pos,
        }
    }
}

fn transcription_error_to_js(e: TranscriptionError) -> JsError {
    JsError::new(&e.to_string())
}

/// Spanish IPA transcriber for WebAssembly.
#[wasm_bindgen]
pub struct WasmTranscriber {
    transcriber: Transcriber,
}

#[wasm_bindgen]
impl WasmTranscriber {
    /// Create a transcriber.
    ///
    /// - `locale`: `"es_ES"` or `"es_MX"`; `undefined` selects `es_ES`
    /// - `fold_stress`: return plain vowels instead of stress placeholders
    #[wasm_bindgen(constructor)]
    pub fn new(locale: Option<String>, fold_stress: bool) -> Result<WasmTranscriber, JsError> {
        let locale = match locale {
            Some(tag) => Locale::from_tag(&tag).map_err(transcription_error_to_js)?,
            None => Locale::default(),
        };
        let stress_marks = if fold_stress {
            StressMarks::Fold
        } else {
            StressMarks::Keep
        };
        Ok(WasmTranscriber {
            transcriber: Transcriber::new(TranscriberOptions {
                locale,
                stress_marks,
            }),
        })
    }

    /// Transcribe one word. Throws if the word has no Latin letters.
    pub fn transcribe(&self, word: &str) -> Result<String, JsError> {
        self.transcriber
            .transcribe(word)
            .map_err(transcription_error_to_js)
    }

    /// Transcribe one word with an explicit locale tag.
    #[wasm_bindgen(js_name = "transcribeWith")]
    pub fn transcribe_with(&self, word: &str, locale: &str) -> Result<String, JsError> {
        self.transcriber
            .transcribe_with(word, locale)
            .map_err(transcription_error_to_js)
    }

    /// Transcribe running text, copying punctuation and whitespace through.
    #[wasm_bindgen(js_name = "transcribeText")]
    pub fn transcribe_text(&self, text: &str) -> String {
        self.transcriber.transcribe_text(text)
    }

    /// Tokenize text into a list of tokens.
    ///
    /// Returns a JavaScript array of token objects with fields:
    /// `tokenType` ("Word", "Punctuation", "Whitespace", "Unknown"),
    /// `text`, `tokenLen`, `pos`.
    pub fn tokens(&self, text: &str) -> Result<JsValue, JsError> {
        let js_tokens: Vec<JsToken> = tokenizer::tokenize(text)
            .into_iter()
            .map(JsToken::from)
            .collect();
        serde_wasm_bindgen::to_value(&js_tokens).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Character offsets of the stress placeholders in a transcription.
    #[wasm_bindgen(js_name = "stressMarkerPositions")]
    pub fn stress_marker_positions(&self, transcription: &str) -> Vec<u32> {
        stress_marker_positions(transcription)
            .into_iter()
            .filter_map(|i| u32::try_from(i).ok())
            .collect()
    }

    /// The locale tag this transcriber was created with.
    #[wasm_bindgen(getter)]
    pub fn locale(&self) -> String {
        self.transcriber.options().locale.tag().to_string()
    }
}

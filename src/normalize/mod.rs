//! Script-aware text normalization and tokenization.
//!
//! Arabic and Latin-script text cannot share one cleaning rule: Arabic input
//! carries optional diacritics (harakat) that must be stripped before terms
//! can compare equal, while Latin-script input is reduced to ASCII
//! alphanumerics. [`normalize`] branches on the detected script and produces
//! the canonical form every other component tokenizes against.
//!
//! Everything here is a pure function over its input; identical input always
//! yields identical output.

/// Writing system of a piece of input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Arabic,
    Other,
}

/// The eight harakat combining marks stripped from Arabic text.
const HARAKAT: [char; 8] = [
    '\u{064B}', // fathatan
    '\u{064C}', // dammatan
    '\u{064D}', // kasratan
    '\u{064E}', // fatha
    '\u{064F}', // damma
    '\u{0650}', // kasra
    '\u{0651}', // shadda
    '\u{0652}', // sukun
];

fn is_arabic(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
}

/// Classify `text` by writing system.
///
/// A single Arabic-block character makes the whole text [`Script::Arabic`];
/// mixed input is cleaned under the Arabic rules.
pub fn detect_script(text: &str) -> Script {
    if text.chars().any(is_arabic) {
        Script::Arabic
    } else {
        Script::Other
    }
}

/// Produce the canonical comparable form of `text`.
///
/// Arabic input loses its harakat and every character outside the Arabic
/// block that is not whitespace. Other input keeps only ASCII alphanumerics
/// and whitespace, with whitespace runs collapsed to a single space. Both
/// paths finish lowercased and trimmed.
///
/// Empty or whitespace-only input is returned unchanged.
pub fn normalize(text: &str) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }

    let cleaned = match detect_script(text) {
        Script::Arabic => {
            // Harakat sit inside the Arabic block, so they must go before
            // the keep-Arabic filter or they would survive it.
            let stripped: String = text.chars().filter(|c| !HARAKAT.contains(c)).collect();
            stripped
                .chars()
                .filter(|c| is_arabic(*c) || c.is_whitespace())
                .collect::<String>()
        }
        Script::Other => {
            let kept: String = text
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
                .collect();
            kept.split_whitespace().collect::<Vec<_>>().join(" ")
        }
    };

    cleaned.to_lowercase().trim().to_string()
}

/// Normalize, then split on whitespace.
///
/// Zero-length tokens cannot survive the split, so the result is either
/// empty or made of non-empty tokens only.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(|t| t.to_string())
        .collect()
}

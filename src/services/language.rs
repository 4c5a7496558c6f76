// src/services/language.rs

/// Prompt language name and synthesis voice for one supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageProfile {
    pub code: &'static str,
    pub prompt_language: &'static str,
    pub voice: &'static str,
}

impl LanguageProfile {
    /// Locale tag expected by the speech service, encoded in the voice name
    /// as a fixed-width prefix ("es-MX-Neural2-F" -> "es-MX").
    pub fn voice_locale(&self) -> &'static str {
        self.voice.get(..5).unwrap_or(self.voice)
    }
}

pub const DEFAULT_LANG: &str = "en";

const ENGLISH: LanguageProfile = LanguageProfile {
    code: "en",
    prompt_language: "English",
    voice: "en-US-Neural2-F",
};

const PROFILES: [LanguageProfile; 3] = [
    LanguageProfile {
        code: "ja",
        prompt_language: "japonés formal (keigo)",
        voice: "ja-JP-Neural2-B",
    },
    ENGLISH,
    LanguageProfile {
        code: "es",
        prompt_language: "español",
        voice: "es-MX-Neural2-F",
    },
];

/// Resolve a request language code. Unknown codes get the English profile.
pub fn resolve(code: &str) -> LanguageProfile {
    PROFILES
        .iter()
        .find(|p| p.code == code)
        .copied()
        .unwrap_or(ENGLISH)
}

#[cfg(test)]
fn supported_codes() -> impl Iterator<Item = &'static str> {
    PROFILES.iter().map(|p| p.code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_codes_resolve_to_their_own_profile() {
        assert_eq!(resolve("ja").prompt_language, "japonés formal (keigo)");
        assert_eq!(resolve("ja").voice, "ja-JP-Neural2-B");
        assert_eq!(resolve("en").prompt_language, "English");
        assert_eq!(resolve("en").voice, "en-US-Neural2-F");
        assert_eq!(resolve("es").prompt_language, "español");
        assert_eq!(resolve("es").voice, "es-MX-Neural2-F");
    }

    #[test]
    fn unknown_codes_fall_back_to_english() {
        for code in ["fr", "", "EN", "es-MX", "jp"] {
            assert_eq!(resolve(code), resolve(DEFAULT_LANG), "code {code:?}");
        }
    }

    #[test]
    fn voice_locale_is_the_five_char_prefix() {
        assert_eq!(resolve("ja").voice_locale(), "ja-JP");
        assert_eq!(resolve("es").voice_locale(), "es-MX");
        assert_eq!(resolve("xx").voice_locale(), "en-US");
    }

    #[test]
    fn every_supported_code_has_both_mappings() {
        for code in supported_codes() {
            let profile = resolve(code);
            assert_eq!(profile.code, code);
            assert!(!profile.prompt_language.is_empty());
            assert!(profile.voice.len() > 5);
        }
    }
}

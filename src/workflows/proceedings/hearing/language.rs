use super::super::canonical::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageNeeds {
    pub documentation: Language,
    pub hearing: Language,
}

const LANGUAGE_TABLE: &[(&str, LanguageNeeds)] = &[
    (
        "E",
        LanguageNeeds {
            documentation: Language::English,
            hearing: Language::English,
        },
    ),
    (
        "W",
        LanguageNeeds {
            documentation: Language::Welsh,
            hearing: Language::Welsh,
        },
    ),
    // Welsh documents, English hearing
    (
        "D",
        LanguageNeeds {
            documentation: Language::Welsh,
            hearing: Language::English,
        },
    ),
    // English documents, Welsh hearing
    (
        "H",
        LanguageNeeds {
            documentation: Language::English,
            hearing: Language::Welsh,
        },
    ),
];

/// Unknown codes record no need at all.
pub fn language_needs(code: &str) -> Option<LanguageNeeds> {
    let code = code.trim();
    LANGUAGE_TABLE
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(code))
        .map(|(_, needs)| *needs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_split_language_codes() {
        let needs = language_needs("d").expect("known code");
        assert_eq!(needs.documentation, Language::Welsh);
        assert_eq!(needs.hearing, Language::English);

        assert_eq!(
            language_needs(" W ").map(|needs| needs.hearing),
            Some(Language::Welsh)
        );
        assert_eq!(language_needs("Q"), None);
    }
}

//! Reference data offered by the form: dietary filters and output languages.

/// A dietary filter the user can tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DietaryOption {
    pub id: &'static str,
    pub label: &'static str,
}

/// An output language; `value` goes into the prompt, `label` is shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const DIETARY_OPTIONS: &[DietaryOption] = &[
    DietaryOption {
        id: "non-veg",
        label: "Non-Veg",
    },
    DietaryOption {
        id: "vegetarian",
        label: "Vegetarian",
    },
    DietaryOption {
        id: "vegan",
        label: "Vegan",
    },
    DietaryOption {
        id: "gluten-free",
        label: "Gluten-Free",
    },
];

pub const LANGUAGES: &[LanguageOption] = &[
    LanguageOption {
        value: "English",
        label: "English",
    },
    LanguageOption {
        value: "Spanish",
        label: "Español",
    },
    LanguageOption {
        value: "French",
        label: "Français",
    },
    LanguageOption {
        value: "German",
        label: "Deutsch",
    },
    LanguageOption {
        value: "Italian",
        label: "Italiano",
    },
    LanguageOption {
        value: "Mandarin Chinese",
        label: "中文",
    },
    LanguageOption {
        value: "Hindi",
        label: "हिन्दी",
    },
    LanguageOption {
        value: "Japanese",
        label: "日本語",
    },
    LanguageOption {
        value: "Marathi",
        label: "मराठी",
    },
];

pub const DEFAULT_LANGUAGE: &str = "English";

/// Find a dietary option by id or label, ignoring case
pub fn find_dietary(query: &str) -> Option<&'static DietaryOption> {
    let query = query.trim();
    DIETARY_OPTIONS
        .iter()
        .find(|o| o.id.eq_ignore_ascii_case(query) || o.label.eq_ignore_ascii_case(query))
}

/// Find a language by value or label, ignoring case
pub fn find_language(query: &str) -> Option<&'static LanguageOption> {
    let query = query.trim();
    LANGUAGES
        .iter()
        .find(|l| l.value.eq_ignore_ascii_case(query) || l.label.eq_ignore_ascii_case(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_dietary_by_id_and_label() {
        assert_eq!(find_dietary("gluten-free").unwrap().label, "Gluten-Free");
        assert_eq!(find_dietary("VEGAN").unwrap().id, "vegan");
        assert_eq!(find_dietary(" Non-Veg ").unwrap().id, "non-veg");
        assert!(find_dietary("pescatarian").is_none());
    }

    #[test]
    fn test_find_language_by_value_and_label() {
        assert_eq!(find_language("español").unwrap().value, "Spanish");
        assert_eq!(find_language("japanese").unwrap().value, "Japanese");
        assert_eq!(find_language("中文").unwrap().value, "Mandarin Chinese");
        assert!(find_language("Klingon").is_none());
    }

    #[test]
    fn test_default_language_is_listed() {
        assert!(LANGUAGES.iter().any(|l| l.value == DEFAULT_LANGUAGE));
    }
}

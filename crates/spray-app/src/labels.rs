//! Display labels for the supported languages

use spray_types::Language;

/// Fixed label table consumed by reports and CLI output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub app_title: &'static str,
    pub parameters: &'static str,
    pub field_area: &'static str,
    pub spray_rate: &'static str,
    pub chemical_rate: &'static str,
    pub tank_capacity: &'static str,
    pub results: &'static str,
    pub working_fluid: &'static str,
    pub total_chemical_to_buy: &'static str,
    pub tank_fills: &'static str,
    pub full_tanks: &'static str,
    pub partial_tank: &'static str,
    pub water: &'static str,
    pub chemical: &'static str,
    pub full_tank_composition: &'static str,
    pub partial_tank_composition: &'static str,
    pub history: &'static str,
    pub favorites: &'static str,
    pub no_history: &'static str,
    pub no_favorites: &'static str,
    pub date: &'static str,
    pub page: &'static str,
    pub signature: &'static str,
}

const POLISH: Labels = Labels {
    app_title: "Kalkulator Oprysku",
    parameters: "Parametry",
    field_area: "Powierzchnia pola",
    spray_rate: "Dawka cieczy",
    chemical_rate: "Dawka środka",
    tank_capacity: "Pojemność opryskiwacza",
    results: "Wyniki",
    working_fluid: "Ciecz robocza",
    total_chemical_to_buy: "Środek do zakupu",
    tank_fills: "Napełnienia opryskiwacza",
    full_tanks: "pełne",
    partial_tank: "częściowe",
    water: "Woda",
    chemical: "Środek",
    full_tank_composition: "Skład pełnego zbiornika",
    partial_tank_composition: "Skład ostatniego zbiornika",
    history: "Historia",
    favorites: "Ulubione",
    no_history: "Brak historii obliczeń",
    no_favorites: "Brak zapisanych konfiguracji",
    date: "Data",
    page: "Strona",
    signature: "Wygenerowano przez Kalkulator Oprysku",
};

const ENGLISH: Labels = Labels {
    app_title: "Spray Calculator",
    parameters: "Parameters",
    field_area: "Field area",
    spray_rate: "Spray rate",
    chemical_rate: "Chemical rate",
    tank_capacity: "Tank capacity",
    results: "Results",
    working_fluid: "Working fluid",
    total_chemical_to_buy: "Chemical to buy",
    tank_fills: "Tank fills",
    full_tanks: "full",
    partial_tank: "partial",
    water: "Water",
    chemical: "Chemical",
    full_tank_composition: "Full tank composition",
    partial_tank_composition: "Last tank composition",
    history: "History",
    favorites: "Favorites",
    no_history: "No calculation history",
    no_favorites: "No saved configurations",
    date: "Date",
    page: "Page",
    signature: "Generated by Spray Calculator",
};

impl Labels {
    pub fn for_language(language: Language) -> &'static Labels {
        match language {
            Language::Polish => &POLISH,
            Language::English => &ENGLISH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tank_labels() {
        let pl = Labels::for_language(Language::Polish);
        assert_eq!(pl.full_tanks, "pełne");
        assert_eq!(pl.partial_tank, "częściowe");
        let en = Labels::for_language(Language::English);
        assert_eq!(en.full_tanks, "full");
        assert_eq!(en.partial_tank, "partial");
    }

    #[test]
    fn test_languages_differ() {
        assert_ne!(
            Labels::for_language(Language::Polish),
            Labels::for_language(Language::English)
        );
    }
}

//! Core UI strings for every supported language.

use super::Language;

/// The strings the hotspot view itself emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translations {
    pub language_label: &'static str,
    pub page_title: &'static str,
    pub page_subtitle: &'static str,
    pub loading: &'static str,
    pub loading_data: &'static str,
    pub loading_image: &'static str,
    pub retry: &'static str,
    pub error_loading_data: &'static str,
    pub error_loading_image: &'static str,
    pub no_hotspot_selected: &'static str,
    pub close: &'static str,
    pub continue_label: &'static str,
    pub change_language: &'static str,
    pub indicator_label: &'static str,
    pub aria_live_ready: &'static str,
    pub aria_live_error: &'static str,
    pub aria_live_loading: &'static str,
    hotspots_counter_suffix: &'static str,
    last_updated_prefix: &'static str,
}

impl Translations {
    pub fn for_language(language: Language) -> &'static Translations {
        match language {
            Language::En => &EN,
            Language::Lv => &LV,
        }
    }

    pub fn hotspots_counter(&self, count: usize) -> String {
        format!("{} {}", count, self.hotspots_counter_suffix)
    }

    pub fn last_updated(&self, value: &str) -> String {
        format!("{}: {}", self.last_updated_prefix, value)
    }
}

static EN: Translations = Translations {
    language_label: "English",
    page_title: "Interactive risk map",
    page_subtitle: "Explore 12 workplace risk zones. Tap a marker to learn about ergonomic, environmental and organizational safety tips.",
    loading: "Loading workspace…",
    loading_data: "Loading hotspots",
    loading_image: "Preparing visual…",
    retry: "Retry",
    error_loading_data: "We could not load hotspot information. Check your connection and try again.",
    error_loading_image: "We could not load the illustration. Refresh the page or check your connection.",
    no_hotspot_selected: "Select a hotspot to see the details.",
    close: "Close",
    continue_label: "Continue",
    change_language: "Change language",
    indicator_label: "Workspace loading progress",
    aria_live_ready: "Hotspot data loaded",
    aria_live_error: "Failed to load hotspot data",
    aria_live_loading: "Loading hotspot data",
    hotspots_counter_suffix: "interactive hotspots",
    last_updated_prefix: "Last updated",
};

static LV: Translations = Translations {
    language_label: "Latviešu",
    page_title: "Interaktīvā risku karte",
    page_subtitle: "Iepazīstiet 12 darba vides risku zonas. Pieskarieties punktam, lai uzzinātu ergonomikas, vides un organizatoriskos drošības padomus.",
    loading: "Notiek darba vides ielāde…",
    loading_data: "Ielādējam interaktīvos punktus",
    loading_image: "Sagatavojam ilustrāciju…",
    retry: "Mēģināt vēlreiz",
    error_loading_data: "Neizdevās ielādēt hotspotus. Pārbaudiet savienojumu un mēģiniet atkārtoti.",
    error_loading_image: "Neizdevās ielādēt ilustrāciju. Atsvaidziniet lapu vai pārbaudiet savienojumu.",
    no_hotspot_selected: "Izvēlieties punktu, lai apskatītu informāciju.",
    close: "Aizvērt",
    continue_label: "Turpināt",
    change_language: "Mainīt valodu",
    indicator_label: "Darba vietas ielādes progress",
    aria_live_ready: "Hotspot dati ielādēti",
    aria_live_error: "Hotspotu ielāde neizdevās",
    aria_live_loading: "Notiek hotspotu ielāde",
    hotspots_counter_suffix: "interaktīvie punkti",
    last_updated_prefix: "Pēdējo reizi atjaunots",
};

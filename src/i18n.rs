/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "hi" => Some(Language::Hi),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Hi => "HI",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Language::En => Language::Hi,
            Language::Hi => Language::En,
        }
    }

    pub fn strings(&self) -> &'static Strings {
        match self {
            Language::En => &EN,
            Language::Hi => &HI,
        }
    }
}

/// Localized labels for the page chrome.
#[derive(Debug)]
pub struct Strings {
    pub hero_title: &'static str,
    pub hero_sub: &'static str,
    pub get_started: &'static str,
    pub see_demo: &'static str,
    pub features: &'static str,
    pub dashboard: &'static str,
    pub onboarding: &'static str,
    pub brand: &'static str,
    pub test_backend: &'static str,
}

static EN: Strings = Strings {
    hero_title: "BizEdge — Smart Accounting & Billing",
    hero_sub: "Modern, fast, and insight-driven for small and medium businesses",
    get_started: "Get Started",
    see_demo: "See Demo",
    features: "Core Capabilities",
    dashboard: "Business Insights Dashboard",
    onboarding: "Guided Onboarding",
    brand: "Branding Kit",
    test_backend: "Backend Test",
};

static HI: Strings = Strings {
    hero_title: "BizEdge — स्मार्ट अकाउंटिंग और बिलिंग",
    hero_sub: "छोटे और मध्यम व्यवसायों के लिए आधुनिक, तेज़ और insights से भरपूर",
    get_started: "शुरू करें",
    see_demo: "डेमो देखें",
    features: "मुख्य क्षमताएँ",
    dashboard: "बिज़नेस इनसाइट्स डैशबोर्ड",
    onboarding: "गाइडेड ऑनबोर्डिंग",
    brand: "ब्रांडिंग किट",
    test_backend: "बैकएंड टेस्ट",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("en"), Some(Language::En));
        assert_eq!(Language::from_code("Hi"), Some(Language::Hi));
        assert_eq!(Language::from_code("de"), None);
        assert_eq!(Language::En.next(), Language::Hi);
        assert_eq!(Language::Hi.next(), Language::En);
    }

    #[test]
    fn test_tables_differ_per_language() {
        let en = Language::En.strings();
        let hi = Language::Hi.strings();
        assert_eq!(en.get_started, "Get Started");
        assert_eq!(hi.get_started, "शुरू करें");
        assert_ne!(en.dashboard, hi.dashboard);
        assert!(hi.hero_title.starts_with("BizEdge"));
    }
}

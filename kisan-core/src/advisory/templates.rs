//! Advisory message templates, one per (category, locale).
//!
//! Each template carries a single `{value}` placeholder for the reading that
//! triggered the rule.

use super::Category;
use crate::Locale;

pub const PLACEHOLDER: &str = "{value}";

pub fn template(category: Category, locale: Locale) -> &'static str {
    match (category, locale) {
        (Category::Heat, Locale::En) => {
            "High temperature alert ({value}°C)! Increase irrigation frequency and provide shade for livestock."
        }
        (Category::Heat, Locale::Hi) => {
            "उच्च तापमान चेतावनी ({value}°C)! सिंचाई की आवृत्ति बढ़ाएं और पशुओं के लिए छाया प्रदान करें।"
        }
        (Category::Humidity, Locale::En) => {
            "High humidity detected ({value}%). Monitor crops for fungal diseases and ensure proper ventilation."
        }
        (Category::Humidity, Locale::Hi) => {
            "उच्च आर्द्रता का पता चला ({value}%)। फंगल रोगों के लिए फसलों की निगरानी करें और उचित वेंटिलेशन सुनिश्चित करें।"
        }
        (Category::Wind, Locale::En) => {
            "Strong winds expected ({value} km/h). Avoid spraying pesticides and secure loose farm equipment."
        }
        (Category::Wind, Locale::Hi) => {
            "तेज हवाओं की उम्मीद ({value} किमी/घंटा)। कीटनाशकों का छिड़काव न करें और ढीले कृषि उपकरणों को सुरक्षित करें।"
        }
        (Category::Uv, Locale::En) => {
            "Very high UV index ({value}). Schedule field work for early morning or evening and protect workers from direct sun."
        }
        (Category::Uv, Locale::Hi) => {
            "बहुत अधिक यूवी सूचकांक ({value})। खेत का काम सुबह जल्दी या शाम को करें और मजदूरों को सीधी धूप से बचाएं।"
        }
        (Category::Precipitation, Locale::En) => {
            "Heavy rainfall recorded ({value} mm). Check field drainage and postpone fertilizer application."
        }
        (Category::Precipitation, Locale::Hi) => {
            "भारी वर्षा दर्ज की गई ({value} मिमी)। खेत की जल निकासी जांचें और उर्वरक डालना स्थगित करें।"
        }
        (Category::RainOutlook, Locale::En) => {
            "Rain expected in coming days ({value}% chance). Good time for sowing and transplanting activities."
        }
        (Category::RainOutlook, Locale::Hi) => {
            "आने वाले दिनों में बारिश की उम्मीद ({value}% संभावना)। बुआई और रोपाई गतिविधियों के लिए अच्छा समय।"
        }
    }
}

/// Resolve the template for `category` with `value` substituted.
pub fn render(category: Category, locale: Locale, value: f64) -> String {
    template(category, locale).replace(PLACEHOLDER, &format_value(value))
}

/// The reading as reported: whole numbers without a fraction, others unrounded.
pub fn format_value(value: f64) -> String {
    format!("{value}")
}

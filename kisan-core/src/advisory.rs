//! Agricultural advisory rules.
//!
//! A [`RuleSet`] is an ordered list of threshold rules over a [`WeatherSnapshot`].
//! Every rule is checked on every evaluation; the advisories come back in rule
//! order with their text already resolved for the requested [`Locale`].

use serde::{Deserialize, Serialize};

use crate::{Locale, WeatherSnapshot};

pub mod templates;

pub const HEAT_THRESHOLD_C: f64 = 35.0;
pub const HUMIDITY_THRESHOLD_PCT: f64 = 80.0;
pub const WIND_THRESHOLD_KPH: f64 = 20.0;
pub const UV_THRESHOLD: f64 = 8.0;
pub const PRECIPITATION_THRESHOLD_MM: f64 = 5.0;
pub const RAIN_CHANCE_THRESHOLD_PCT: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Heat,
    Humidity,
    Wind,
    Uv,
    Precipitation,
    RainOutlook,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Heat => "heat",
            Category::Humidity => "humidity",
            Category::Wind => "wind",
            Category::Uv => "uv",
            Category::Precipitation => "precipitation",
            Category::RainOutlook => "rain-outlook",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Success,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Success => "success",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisoryMessage {
    pub category: Category,
    pub severity: Severity,
    pub text: String,
}

/// Reads the value a rule compares against its threshold.
pub type Measure = fn(&WeatherSnapshot) -> f64;

/// A threshold predicate paired with the advisory it produces.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub category: Category,
    pub severity: Severity,
    pub threshold: f64,
    measure: Measure,
}

impl Rule {
    pub const fn new(
        category: Category,
        severity: Severity,
        threshold: f64,
        measure: Measure,
    ) -> Self {
        Self { category, severity, threshold, measure }
    }

    /// The triggering value, if it is strictly above the threshold.
    pub fn check(&self, snapshot: &WeatherSnapshot) -> Option<f64> {
        let value = (self.measure)(snapshot);
        (value > self.threshold).then_some(value)
    }

    pub fn apply(&self, snapshot: &WeatherSnapshot, locale: Locale) -> Option<AdvisoryMessage> {
        self.check(snapshot).map(|value| AdvisoryMessage {
            category: self.category,
            severity: self.severity,
            text: templates::render(self.category, locale, value),
        })
    }
}

pub const HEAT: Rule =
    Rule::new(Category::Heat, Severity::Warning, HEAT_THRESHOLD_C, |s| s.current.temperature_c);

pub const HUMIDITY: Rule = Rule::new(
    Category::Humidity,
    Severity::Info,
    HUMIDITY_THRESHOLD_PCT,
    |s| s.current.humidity_pct,
);

pub const WIND: Rule =
    Rule::new(Category::Wind, Severity::Warning, WIND_THRESHOLD_KPH, |s| s.current.wind_kph);

pub const UV: Rule =
    Rule::new(Category::Uv, Severity::Warning, UV_THRESHOLD, |s| s.current.uv_index);

pub const PRECIPITATION: Rule = Rule::new(
    Category::Precipitation,
    Severity::Info,
    PRECIPITATION_THRESHOLD_MM,
    WeatherSnapshot::precipitation_mm,
);

pub const RAIN_OUTLOOK: Rule =
    Rule::new(Category::RainOutlook, Severity::Success, RAIN_CHANCE_THRESHOLD_PCT, |s| {
        f64::from(s.max_rain_chance_pct())
    });

/// Which preset rule list to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSetKind {
    #[default]
    Standard,
    /// Heat, humidity, wind and rain outlook only.
    Basic,
}

#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn standard() -> Self {
        Self::new(vec![HEAT, HUMIDITY, WIND, UV, PRECIPITATION, RAIN_OUTLOOK])
    }

    pub fn basic() -> Self {
        Self::new(vec![HEAT, HUMIDITY, WIND, RAIN_OUTLOOK])
    }

    pub fn from_kind(kind: RuleSetKind) -> Self {
        match kind {
            RuleSetKind::Standard => Self::standard(),
            RuleSetKind::Basic => Self::basic(),
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Advisories for every rule that fires, in rule order.
    pub fn evaluate(&self, snapshot: &WeatherSnapshot, locale: Locale) -> Vec<AdvisoryMessage> {
        self.rules.iter().filter_map(|rule| rule.apply(snapshot, locale)).collect()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

/// Evaluate the standard rule set.
pub fn evaluate(snapshot: &WeatherSnapshot, locale: Locale) -> Vec<AdvisoryMessage> {
    RuleSet::standard().evaluate(snapshot, locale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CurrentConditions, DayForecast, Location};
    use chrono::NaiveDate;

    fn day(date: &str, rain_chance_pct: u8) -> DayForecast {
        DayForecast {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            max_temp_c: 30.0,
            min_temp_c: 18.0,
            condition: "Sunny".into(),
            rain_chance_pct,
            avg_humidity_pct: 60.0,
            max_wind_kph: 15.0,
            sunrise: "07:12 AM".into(),
            sunset: "05:47 PM".into(),
        }
    }

    /// Nothing fires: humidity 50, wind 10, UV 5, no rain, dry forecast.
    fn baseline() -> WeatherSnapshot {
        WeatherSnapshot {
            provider: "test".into(),
            location: Location {
                name: "Nagpur".into(),
                region: "Maharashtra".into(),
                country: "India".into(),
            },
            current: CurrentConditions {
                temperature_c: 28.0,
                feels_like_c: 30.0,
                humidity_pct: 50.0,
                wind_kph: 10.0,
                wind_dir: "NW".into(),
                uv_index: 5.0,
                precipitation_mm: Some(0.0),
                pressure_mb: 1013.0,
                visibility_km: 10.0,
                condition: "Sunny".into(),
            },
            forecast: vec![day("2024-01-20", 10), day("2024-01-21", 20), day("2024-01-22", 30)],
        }
    }

    fn categories(advisories: &[AdvisoryMessage]) -> Vec<Category> {
        advisories.iter().map(|a| a.category).collect()
    }

    #[test]
    fn baseline_produces_nothing() {
        assert!(evaluate(&baseline(), Locale::En).is_empty());
    }

    #[test]
    fn values_at_thresholds_produce_nothing() {
        let mut s = baseline();
        s.current.temperature_c = 35.0;
        s.current.humidity_pct = 80.0;
        s.current.wind_kph = 20.0;
        s.current.uv_index = 8.0;
        s.current.precipitation_mm = Some(5.0);
        s.forecast[2].rain_chance_pct = 60;

        assert!(evaluate(&s, Locale::En).is_empty());
    }

    #[test]
    fn heat_alone() {
        let mut s = baseline();
        s.current.temperature_c = 36.0;

        let out = evaluate(&s, Locale::En);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].category, Category::Heat);
        assert_eq!(out[0].severity, Severity::Warning);
        assert!(out[0].text.contains("36°C"));
    }

    #[test]
    fn heat_boundary_is_strict() {
        let mut s = baseline();
        s.current.temperature_c = 35.0;
        assert!(evaluate(&s, Locale::En).is_empty());

        s.current.temperature_c = 35.01;
        let out = evaluate(&s, Locale::En);
        assert_eq!(categories(&out), vec![Category::Heat]);
        assert!(out[0].text.contains("35.01°C"));
    }

    #[test]
    fn heat_then_humidity() {
        let mut s = baseline();
        s.current.temperature_c = 36.0;
        s.current.humidity_pct = 81.0;

        let out = evaluate(&s, Locale::En);
        assert_eq!(categories(&out), vec![Category::Heat, Category::Humidity]);
        assert_eq!(out[1].severity, Severity::Info);
    }

    #[test]
    fn rainy_day_in_forecast() {
        let mut s = baseline();
        s.forecast[1].rain_chance_pct = 61;

        let out = evaluate(&s, Locale::En);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].category, Category::RainOutlook);
        assert_eq!(out[0].severity, Severity::Success);
        assert!(out[0].text.contains("61%"));
    }

    #[test]
    fn every_rule_fires_in_order() {
        let mut s = baseline();
        s.current.temperature_c = 41.5;
        s.current.humidity_pct = 90.0;
        s.current.wind_kph = 32.0;
        s.current.uv_index = 11.0;
        s.current.precipitation_mm = Some(12.4);
        s.forecast[0].rain_chance_pct = 85;

        let out = evaluate(&s, Locale::En);
        assert_eq!(
            categories(&out),
            vec![
                Category::Heat,
                Category::Humidity,
                Category::Wind,
                Category::Uv,
                Category::Precipitation,
                Category::RainOutlook,
            ]
        );
        assert_eq!(
            out.iter().map(|a| a.severity).collect::<Vec<_>>(),
            vec![
                Severity::Warning,
                Severity::Info,
                Severity::Warning,
                Severity::Warning,
                Severity::Info,
                Severity::Success,
            ]
        );
        assert!(out[4].text.contains("12.4 mm"));
    }

    #[test]
    fn basic_set_skips_uv_and_precipitation() {
        let mut s = baseline();
        s.current.uv_index = 10.0;
        s.current.precipitation_mm = Some(20.0);
        s.current.wind_kph = 25.0;

        let out = RuleSet::basic().evaluate(&s, Locale::En);
        assert_eq!(categories(&out), vec![Category::Wind]);

        let out = RuleSet::from_kind(RuleSetKind::Standard).evaluate(&s, Locale::En);
        assert_eq!(categories(&out), vec![Category::Wind, Category::Uv, Category::Precipitation]);
    }

    #[test]
    fn missing_precipitation_does_not_fire() {
        let mut s = baseline();
        s.current.precipitation_mm = None;
        assert!(evaluate(&s, Locale::En).is_empty());
    }

    #[test]
    fn empty_forecast_has_no_outlook() {
        let mut s = baseline();
        s.forecast.clear();
        assert!(evaluate(&s, Locale::En).is_empty());
    }

    #[test]
    fn implausible_values_are_evaluated_literally() {
        let mut s = baseline();
        s.current.temperature_c = -60.0;
        s.current.humidity_pct = 250.0;

        assert_eq!(categories(&evaluate(&s, Locale::En)), vec![Category::Humidity]);
    }

    #[test]
    fn repeated_evaluation_is_identical() {
        let mut s = baseline();
        s.current.temperature_c = 38.0;
        s.current.wind_kph = 24.0;
        s.forecast[2].rain_chance_pct = 75;
        let before = s.clone();

        let first = evaluate(&s, Locale::Hi);
        let second = evaluate(&s, Locale::Hi);

        assert_eq!(first, second);
        assert_eq!(s, before);
    }

    #[test]
    fn locales_differ_only_in_text() {
        let mut s = baseline();
        s.current.temperature_c = 38.0;
        s.current.humidity_pct = 85.0;
        s.forecast[0].rain_chance_pct = 70;

        let en = evaluate(&s, Locale::En);
        let hi = evaluate(&s, Locale::Hi);

        assert_eq!(en.len(), hi.len());
        for (e, h) in en.iter().zip(&hi) {
            assert_eq!(e.category, h.category);
            assert_eq!(e.severity, h.severity);
            assert_ne!(e.text, h.text);
        }
    }

    #[test]
    fn custom_rule_list_keeps_given_order() {
        let mut s = baseline();
        s.current.temperature_c = 40.0;
        s.current.wind_kph = 30.0;

        let rules = RuleSet::new(vec![WIND, HEAT]);
        assert_eq!(
            categories(&rules.evaluate(&s, Locale::En)),
            vec![Category::Wind, Category::Heat]
        );
    }

    #[test]
    fn serializes_with_kebab_case_names() {
        let advisory = AdvisoryMessage {
            category: Category::RainOutlook,
            severity: Severity::Success,
            text: "ok".into(),
        };
        let json = serde_json::to_value(&advisory).unwrap();
        assert_eq!(json["category"], "rain-outlook");
        assert_eq!(json["severity"], "success");
    }
}

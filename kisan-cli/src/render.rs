//! Plain-text output for the terminal.

use std::fmt::Write;

use kisan_core::{
    AdvisoryMessage, Category, FarmingTip, Locale, Severity, WeatherSnapshot,
    advisory::templates::format_value,
};

/// Fixed UI strings for one language.
pub struct Labels {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub current_weather: &'static str,
    pub forecast: &'static str,
    pub alerts: &'static str,
    pub tips: &'static str,
    pub feels_like: &'static str,
    pub humidity: &'static str,
    pub wind_speed: &'static str,
    pub pressure: &'static str,
    pub visibility: &'static str,
    pub uv_index: &'static str,
    pub sunrise: &'static str,
    pub sunset: &'static str,
    pub rain_chance: &'static str,
    pub max_wind: &'static str,
    pub no_alerts: &'static str,
}

const EN: Labels = Labels {
    title: "Bharat Kisan Weather",
    subtitle: "Weather insights for Indian farmers",
    current_weather: "Current Weather",
    forecast: "Weather Forecast",
    alerts: "Agricultural Alerts",
    tips: "Farming Tips",
    feels_like: "Feels like",
    humidity: "Humidity",
    wind_speed: "Wind Speed",
    pressure: "Pressure",
    visibility: "Visibility",
    uv_index: "UV Index",
    sunrise: "Sunrise",
    sunset: "Sunset",
    rain_chance: "Rain Chance",
    max_wind: "Max Wind",
    no_alerts: "No alerts at this time. Weather conditions are favorable for farming.",
};

const HI: Labels = Labels {
    title: "भारत किसान मौसम",
    subtitle: "भारतीय किसानों के लिए मौसम जानकारी",
    current_weather: "वर्तमान मौसम",
    forecast: "मौसम पूर्वानुमान",
    alerts: "कृषि चेतावनी",
    tips: "खेती के सुझाव",
    feels_like: "महसूस होता है",
    humidity: "नमी",
    wind_speed: "हवा की गति",
    pressure: "दबाव",
    visibility: "दृश्यता",
    uv_index: "यूवी सूचकांक",
    sunrise: "सूर्योदय",
    sunset: "सूर्यास्त",
    rain_chance: "बारिश की संभावना",
    max_wind: "अधिकतम हवा",
    no_alerts: "इस समय कोई चेतावनी नहीं। मौसम की स्थिति खेती के लिए अनुकूल है।",
};

pub fn labels(locale: Locale) -> &'static Labels {
    match locale {
        Locale::En => &EN,
        Locale::Hi => &HI,
    }
}

fn severity_tag(severity: Severity) -> &'static str {
    match severity {
        Severity::Warning => "[!]",
        Severity::Info => "[i]",
        Severity::Success => "[+]",
    }
}

fn category_tag(category: Category) -> &'static str {
    match category {
        Category::Heat => "HEAT",
        Category::Humidity => "HUMIDITY",
        Category::Wind => "WIND",
        Category::Uv => "UV",
        Category::Precipitation => "RAIN",
        Category::RainOutlook => "OUTLOOK",
    }
}

pub fn report(
    snapshot: &WeatherSnapshot,
    advisories: &[AdvisoryMessage],
    locale: Locale,
) -> String {
    let t = labels(locale);
    let c = &snapshot.current;
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{} - {}", t.title, t.subtitle);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}: {}, {}",
        t.current_weather, snapshot.location.name, snapshot.location.region
    );
    let _ = writeln!(
        out,
        "  {}°C, {} ({} {}°C)",
        c.temperature_c.round(),
        c.condition,
        t.feels_like,
        c.feels_like_c.round()
    );
    let _ = writeln!(out, "  {}: {}%", t.humidity, format_value(c.humidity_pct));
    let _ = writeln!(out, "  {}: {} km/h {}", t.wind_speed, format_value(c.wind_kph), c.wind_dir);
    let _ = writeln!(out, "  {}: {} mb", t.pressure, format_value(c.pressure_mb));
    let _ = writeln!(out, "  {}: {} km", t.visibility, format_value(c.visibility_km));
    let _ = writeln!(out, "  {}: {}", t.uv_index, format_value(c.uv_index));

    if let Some(today) = snapshot.forecast.first() {
        let _ = writeln!(
            out,
            "  {}: {}  {}: {}",
            t.sunrise, today.sunrise, t.sunset, today.sunset
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}:", t.forecast);
    for day in &snapshot.forecast {
        let _ = writeln!(
            out,
            "  {}  {}°C / {}°C  {}  {}: {}%  {}: {} km/h",
            day.date.format("%a, %b %-d"),
            day.max_temp_c.round(),
            day.min_temp_c.round(),
            day.condition,
            t.rain_chance,
            day.rain_chance_pct,
            t.max_wind,
            format_value(day.max_wind_kph)
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}:", t.alerts);
    if advisories.is_empty() {
        let _ = writeln!(out, "  {}", t.no_alerts);
    }
    for advisory in advisories {
        let _ = writeln!(
            out,
            "  {} {:<8} {}",
            severity_tag(advisory.severity),
            category_tag(advisory.category),
            advisory.text
        );
    }

    out
}

pub fn tips(tips: &[FarmingTip], locale: Locale) -> String {
    let mut out = String::new();
    let mut section = None;

    let _ = writeln!(out, "{}", labels(locale).tips);
    for tip in tips {
        if section != Some(tip.section) {
            section = Some(tip.section);
            let _ = writeln!(out);
            let _ = writeln!(out, "{}:", tip.section.heading(locale));
        }
        let _ = writeln!(out, "  - {}: {}", tip.title, tip.body);
    }

    out
}

use serde::Serialize;

use crate::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TipSection {
    Seasonal,
    CropCare,
}

impl TipSection {
    pub fn heading(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (TipSection::Seasonal, Locale::En) => "Seasonal Tips",
            (TipSection::Seasonal, Locale::Hi) => "मौसमी सुझाव",
            (TipSection::CropCare, Locale::En) => "Crop Care",
            (TipSection::CropCare, Locale::Hi) => "फसल देखभाल",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FarmingTip {
    pub section: TipSection,
    pub title: &'static str,
    pub body: &'static str,
}

struct Entry {
    section: TipSection,
    en: (&'static str, &'static str),
    hi: (&'static str, &'static str),
}

const ENTRIES: &[Entry] = &[
    Entry {
        section: TipSection::Seasonal,
        en: (
            "Winter Season (Rabi Crops)",
            "Ideal time for wheat, barley, and mustard cultivation. Monitor for frost protection.",
        ),
        hi: (
            "शीत ऋतु (रबी फसलें)",
            "गेहूं, जौ और सरसों की खेती के लिए आदर्श समय। पाले से बचाव की निगरानी करें।",
        ),
    },
    Entry {
        section: TipSection::Seasonal,
        en: (
            "Irrigation Management",
            "Water crops early morning or evening to reduce evaporation losses.",
        ),
        hi: (
            "सिंचाई प्रबंधन",
            "वाष्पीकरण हानि को कम करने के लिए सुबह जल्दी या शाम को फसलों की सिंचाई करें।",
        ),
    },
    Entry {
        section: TipSection::CropCare,
        en: (
            "Pest Management",
            "Regular field inspection for early pest detection. Use integrated pest management.",
        ),
        hi: (
            "कीट प्रबंधन",
            "कीटों की जल्दी पहचान के लिए नियमित खेत निरीक्षण। एकीकृत कीट प्रबंधन का उपयोग करें।",
        ),
    },
    Entry {
        section: TipSection::CropCare,
        en: (
            "Soil Health",
            "Test soil pH regularly and add organic matter to improve soil structure.",
        ),
        hi: (
            "मिट्टी का स्वास्थ्य",
            "मिट्टी के पीएच की नियमित जांच करें और मिट्टी की संरचना सुधारने के लिए जैविक पदार्थ मिलाएं।",
        ),
    },
];

/// Static seasonal and crop-care tips, grouped by section in display order.
pub fn crop_calendar(locale: Locale) -> Vec<FarmingTip> {
    ENTRIES
        .iter()
        .map(|entry| {
            let (title, body) = match locale {
                Locale::En => entry.en,
                Locale::Hi => entry.hi,
            };
            FarmingTip { section: entry.section, title, body }
        })
        .collect()
}

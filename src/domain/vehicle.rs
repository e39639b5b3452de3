//! Built-in Kia Telluride tables

use serde::Serialize;

/// A labelled specification value (e.g. "Engine" → "3.8L V6 GDI")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpecEntry {
    pub label: &'static str,
    pub value: &'static str,
}

/// A trim level with its base price in whole US dollars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Trim {
    pub name: &'static str,
    pub price: u32,
    pub features: &'static [&'static str],
}

impl Trim {
    /// Card heading, e.g. "LX - $35,990"
    pub fn heading(&self) -> String {
        format!("{} - {}", self.name, format_price(self.price))
    }
}

/// Cargo volume for one seating configuration, in cubic feet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CargoEntry {
    pub configuration: &'static str,
    pub space: u64,
}

/// Subjective score for one feature, in `0..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RatingEntry {
    pub feature: &'static str,
    pub value: u8,
}

/// Titled bullet list shown on the overview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureList {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

/// All tables the dashboard renders
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Dataset {
    pub model: &'static str,
    pub specs: &'static [SpecEntry],
    pub feature_lists: &'static [FeatureList],
    pub trims: &'static [Trim],
    pub cargo: &'static [CargoEntry],
    pub ratings: &'static [RatingEntry],
}

impl Dataset {
    pub fn telluride() -> Self {
        Self {
            model: "Kia Telluride",
            specs: SPECS,
            feature_lists: FEATURE_LISTS,
            trims: TRIMS,
            cargo: CARGO,
            ratings: RATINGS,
        }
    }

    /// Short model name used as the radar series label ("Telluride")
    pub fn short_name(&self) -> &'static str {
        self.model
            .rsplit_once(' ')
            .map(|(_, name)| name)
            .unwrap_or(self.model)
    }
}

static SPECS: &[SpecEntry] = &[
    SpecEntry { label: "Engine", value: "3.8L V6 GDI" },
    SpecEntry { label: "Horsepower", value: "291 hp @ 6,000 rpm" },
    SpecEntry { label: "Torque", value: "262 lb-ft @ 5,200 rpm" },
    SpecEntry { label: "Transmission", value: "8-speed automatic" },
    SpecEntry { label: "Drivetrain", value: "FWD (AWD available)" },
    SpecEntry {
        label: "Fuel economy",
        value: "20 city / 26 highway / 23 combined mpg",
    },
    SpecEntry { label: "Seating", value: "Up to 8 passengers" },
    SpecEntry {
        label: "Cargo space",
        value: "21 cu. ft. (behind 3rd row) / 87 cu. ft. (maximum)",
    },
    SpecEntry { label: "Towing", value: "Up to 5,500 lbs" },
    SpecEntry {
        label: "Ground clearance",
        value: "8.0 inches (8.4 inches for X-Line/X-Pro)",
    },
];

static FEATURE_LISTS: &[FeatureList] = &[
    FeatureList {
        title: "Safety Features",
        items: &[
            "Forward Collision-Avoidance Assist",
            "Blind-Spot Collision-Avoidance Assist",
            "Rear Cross-Traffic Collision-Avoidance Assist",
            "Lane Keeping Assist",
            "Safe Exit Assist",
        ],
    },
    FeatureList {
        title: "Technology Features",
        items: &[
            "10.25-inch touchscreen infotainment system",
            "Apple CarPlay and Android Auto integration",
            "Harman Kardon premium audio system",
            "Wireless phone charging",
            "Head-Up Display (HUD)",
        ],
    },
];

static TRIMS: &[Trim] = &[
    Trim {
        name: "LX",
        price: 35_990,
        features: &["18-inch alloy wheels", "LED headlights", "8-inch touchscreen"],
    },
    Trim {
        name: "S",
        price: 38_390,
        features: &["20-inch alloy wheels", "Sunroof", "Heated front seats"],
    },
    Trim {
        name: "EX",
        price: 43_290,
        features: &["Leather seats", "Wireless phone charger", "Highway Driving Assist"],
    },
    Trim {
        name: "SX",
        price: 45_590,
        features: &[
            "20-inch black alloy wheels",
            "10.25-inch touchscreen",
            "Harman Kardon audio",
        ],
    },
    Trim {
        name: "X-Pro",
        price: 51_990,
        features: &[
            "All-terrain tires",
            "Increased towing capacity",
            "110V power inverter",
        ],
    },
];

static CARGO: &[CargoEntry] = &[
    CargoEntry { configuration: "Behind 3rd row", space: 21 },
    CargoEntry { configuration: "Behind 2nd row", space: 46 },
    CargoEntry { configuration: "Maximum capacity", space: 87 },
];

static RATINGS: &[RatingEntry] = &[
    RatingEntry { feature: "Performance", value: 85 },
    RatingEntry { feature: "Comfort", value: 90 },
    RatingEntry { feature: "Technology", value: 88 },
    RatingEntry { feature: "Safety", value: 95 },
    RatingEntry { feature: "Cargo space", value: 87 },
    RatingEntry { feature: "Value", value: 92 },
];

/// Format whole dollars with thousands separators: `35990` → `"$35,990"`
pub fn format_price(dollars: u32) -> String {
    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}")
}

//! Temperature bands and the static advice attached to each of them.
//!
//! The wording of every entry is part of the public response contract, so the
//! tables below must not be edited casually.

use serde::{Deserialize, Serialize};

/// One of five contiguous Celsius ranges driving suggestion selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureBand {
    /// Below 0°C.
    Freezing,
    /// 0°C up to (excluding) 10°C.
    Cold,
    /// 10°C up to (excluding) 20°C.
    Mild,
    /// 20°C up to (excluding) 30°C.
    Warm,
    /// 30°C and above.
    Hot,
}

impl TemperatureBand {
    /// Classify a Celsius reading. Each lower bound belongs to the band it opens,
    /// so exactly 0°C is `Cold`, not `Freezing`.
    pub fn from_celsius(temp_c: i64) -> Self {
        if temp_c < 0 {
            TemperatureBand::Freezing
        } else if temp_c < 10 {
            TemperatureBand::Cold
        } else if temp_c < 20 {
            TemperatureBand::Mild
        } else if temp_c < 30 {
            TemperatureBand::Warm
        } else {
            TemperatureBand::Hot
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureBand::Freezing => "freezing",
            TemperatureBand::Cold => "cold",
            TemperatureBand::Mild => "mild",
            TemperatureBand::Warm => "warm",
            TemperatureBand::Hot => "hot",
        }
    }

    pub const fn all() -> &'static [TemperatureBand] {
        &[
            TemperatureBand::Freezing,
            TemperatureBand::Cold,
            TemperatureBand::Mild,
            TemperatureBand::Warm,
            TemperatureBand::Hot,
        ]
    }

    fn table(&self) -> &'static BundleTable {
        match self {
            TemperatureBand::Freezing => &FREEZING,
            TemperatureBand::Cold => &COLD,
            TemperatureBand::Mild => &MILD,
            TemperatureBand::Warm => &WARM,
            TemperatureBand::Hot => &HOT,
        }
    }

    /// Owned copy of the bundle for this band, ready to be serialized.
    pub fn suggestions(&self) -> Suggestions {
        let table = self.table();
        Suggestions {
            clothing: to_owned(table.clothing),
            accessories: to_owned(table.accessories),
            travel: to_owned(table.travel),
            health: to_owned(table.health),
        }
    }
}

impl std::fmt::Display for TemperatureBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Advisory strings for a band, split into the four response categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestions {
    pub clothing: Vec<String>,
    pub accessories: Vec<String>,
    pub travel: Vec<String>,
    pub health: Vec<String>,
}

/// Shorthand for `TemperatureBand::from_celsius(temp_c).suggestions()`.
pub fn classify(temp_c: i64) -> Suggestions {
    TemperatureBand::from_celsius(temp_c).suggestions()
}

struct BundleTable {
    clothing: &'static [&'static str],
    accessories: &'static [&'static str],
    travel: &'static [&'static str],
    health: &'static [&'static str],
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

static FREEZING: BundleTable = BundleTable {
    clothing: &[
        "Heavy thermal jacket",
        "Insulated inner layers",
        "Waterproof outer shell",
        "Snow boots",
    ],
    accessories: &["Insulated gloves", "Wool balaclava", "Thermal scarf", "Hand warmers"],
    travel: &[
        "Carry emergency blanket",
        "Check road conditions before driving",
        "Avoid travelling alone in remote areas",
    ],
    health: &[
        "Limit skin exposure to under 10 minutes",
        "Watch for frostbite signs",
        "Stay hydrated — cold air dehydrates",
    ],
};

static COLD: BundleTable = BundleTable {
    clothing: &["Heavy winter jacket", "Wool sweater", "Thermal base layer", "Warm trousers"],
    accessories: &["Knit gloves", "Warm beanie", "Scarf", "Thick socks"],
    travel: &[
        "Allow extra travel time",
        "Roads may be slippery",
        "Keep vehicle emergency kit stocked",
    ],
    health: &[
        "Protect extremities",
        "Warm up gradually after being outdoors",
        "Vitamin D supplement recommended",
    ],
};

static MILD: BundleTable = BundleTable {
    clothing: &[
        "Light jacket or hoodie",
        "Full-sleeve shirt",
        "Jeans or chinos",
        "Comfortable sneakers",
    ],
    accessories: &["Light scarf", "Watch for wind-chill", "Carry a compact umbrella"],
    travel: &["Ideal conditions for most travel", "Evening temperatures may drop — layer up"],
    health: &[
        "Good conditions for outdoor exercise",
        "Stay hydrated",
        "Check pollen count if allergic",
    ],
};

static WARM: BundleTable = BundleTable {
    clothing: &["T-shirt or light shirt", "Shorts or light trousers", "Breathable footwear"],
    accessories: &["Sunglasses", "Light cap or hat", "Water bottle"],
    travel: &["Excellent travel conditions", "UV index may be moderate — apply SPF 30+"],
    health: &[
        "30 mins outdoor exercise is safe",
        "Stay hydrated — 2–3 litres per day",
        "Watch for heat rash if humid",
    ],
};

static HOT: BundleTable = BundleTable {
    clothing: &[
        "Loose cotton clothes",
        "Light linen shirt",
        "Moisture-wicking fabrics",
        "Open sandals or breathable shoes",
    ],
    accessories: &[
        "Polarised sunglasses",
        "Wide-brim hat",
        "High-SPF sunscreen (50+)",
        "Insulated water bottle",
    ],
    travel: &[
        "Avoid outdoor travel 11am–3pm peak heat",
        "Plan activities for early morning or evening",
        "Never leave children or pets in parked vehicles",
    ],
    health: &[
        "Drink water every 30 minutes",
        "Watch for heat exhaustion symptoms",
        "Cool showers help regulate body temp",
        "Seek shade frequently",
    ],
};

//! Condition icon and mood table
//!
//! Maps a lower-cased provider category to a day icon, a night icon and
//! a mood line. Unknown categories get [`FALLBACK_STYLE`].

/// Display tuple for one condition category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionStyle {
    pub day: &'static str,
    pub night: &'static str,
    pub mood: &'static str,
}

impl ConditionStyle {
    const fn new(day: &'static str, night: &'static str, mood: &'static str) -> Self {
        Self { day, night, mood }
    }

    #[must_use]
    pub const fn icon(&self, daytime: bool) -> &'static str {
        if daytime { self.day } else { self.night }
    }
}

pub const FALLBACK_STYLE: ConditionStyle =
    ConditionStyle::new("🌤️", "🌤️", "Interesting Weather!");

static CONDITION_STYLES: &[(&str, ConditionStyle)] = &[
    ("clear", ConditionStyle::new("☀️", "🌙", "Feeling Sunny!")),
    ("clouds", ConditionStyle::new("⛅", "☁️", "Cloudy Vibes!")),
    ("rain", ConditionStyle::new("🌧️", "🌧️", "Rainy Day!")),
    ("drizzle", ConditionStyle::new("🌦️", "🌦️", "Drizzly Weather!")),
    ("thunderstorm", ConditionStyle::new("⛈️", "⛈️", "Stormy Ahead!")),
    ("snow", ConditionStyle::new("❄️", "🌨️", "Snowy Wonderland!")),
    ("mist", ConditionStyle::new("🌫️", "🌫️", "Misty Morning!")),
    ("fog", ConditionStyle::new("🌫️", "🌫️", "Foggy Weather!")),
    ("haze", ConditionStyle::new("🌤️", "🌤️", "Hazy Day!")),
    ("dust", ConditionStyle::new("🌪️", "🌪️", "Dusty Winds!")),
    ("sand", ConditionStyle::new("🏜️", "🏜️", "Sandy Weather!")),
    ("ash", ConditionStyle::new("🌋", "🌋", "Ashy Skies!")),
    ("squall", ConditionStyle::new("💨", "💨", "Windy Squall!")),
    ("tornado", ConditionStyle::new("🌪️", "🌪️", "Tornado Warning!")),
];

/// Look up the style for a provider category, case-insensitively
#[must_use]
pub fn style_for(category: &str) -> &'static ConditionStyle {
    let key = category.trim().to_lowercase();
    CONDITION_STYLES
        .iter()
        .find(|(name, _)| *name == key)
        .map_or(&FALLBACK_STYLE, |(_, style)| style)
}

/// Local hours 06:00 up to but excluding 20:00 count as day
#[must_use]
pub const fn is_daytime(local_hour: u32) -> bool {
    local_hour >= 6 && local_hour < 20
}

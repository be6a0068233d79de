use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Categorical severity for snow and rain readings.
///
/// The ordinal position is the wire encoding: `None = 0` through `Heavy = 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Intensity {
    #[default]
    None,
    Light,
    Medium,
    Heavy,
}

const INTENSITY_TABLE: [(Intensity, &str); 4] = [
    (Intensity::None, "NONE"),
    (Intensity::Light, "LIGHT"),
    (Intensity::Medium, "MEDIUM"),
    (Intensity::Heavy, "HEAVY"),
];

impl Intensity {
    /// All levels in ordinal order.
    pub const ALL: [Intensity; 4] = [Self::None, Self::Light, Self::Medium, Self::Heavy];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: i64) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|i| INTENSITY_TABLE.get(i))
            .map(|(level, _)| *level)
    }

    pub fn name(self) -> &'static str {
        INTENSITY_TABLE[self as usize].1
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Intensity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        INTENSITY_TABLE
            .iter()
            .find(|(_, name)| *name == upper)
            .map(|(level, _)| *level)
            .ok_or_else(|| format!("Unknown intensity '{}', expected one of NONE, LIGHT, MEDIUM, HEAVY", s))
    }
}

/// The predicted (or target) subjective thermal-comfort category.
///
/// `Cool` is the category substituted whenever a prediction cannot be
/// mapped onto a known label or code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Feeling {
    Cold,
    #[default]
    Cool,
    Warm,
    Hot,
}

/// The single code/name table shared by the serializer and the decoder.
const FEELING_TABLE: [(Feeling, &str); 4] = [
    (Feeling::Cold, "COLD"),
    (Feeling::Cool, "COOL"),
    (Feeling::Warm, "WARM"),
    (Feeling::Hot, "HOT"),
];

impl Feeling {
    /// All categories in ordinal order.
    pub const ALL: [Feeling; 4] = [Self::Cold, Self::Cool, Self::Warm, Self::Hot];

    /// Ordinal used on the wire.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Looks up a category by its ordinal. Returns `None` when out of range.
    pub fn from_code(code: i64) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|i| FEELING_TABLE.get(i))
            .map(|(feeling, _)| *feeling)
    }

    /// Looks up a category by name, ignoring case. Returns `None` for unknown names.
    pub fn from_label(label: &str) -> Option<Self> {
        let upper = label.trim().to_uppercase();
        FEELING_TABLE
            .iter()
            .find(|(_, name)| *name == upper)
            .map(|(feeling, _)| *feeling)
    }

    pub fn name(self) -> &'static str {
        FEELING_TABLE[self as usize].1
    }
}

impl fmt::Display for Feeling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Feeling {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
            .ok_or_else(|| format!("Unknown feeling '{}', expected one of COLD, COOL, WARM, HOT", s))
    }
}

/// Identifies one input field of a [`Config`](super::Config).
///
/// Declaration order is the canonical field order: it drives the wire map
/// and the order in which missing fields are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    UpperClo,
    LowerClo,
    Temp,
    Sun,
    Headwind,
    Snow,
    Rain,
    Fatigued,
    Hr,
    Feels,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Self::UpperClo,
        Self::LowerClo,
        Self::Temp,
        Self::Sun,
        Self::Headwind,
        Self::Snow,
        Self::Rain,
        Self::Fatigued,
        Self::Hr,
        Self::Feels,
    ];

    /// Fields whose absence is reported by validation instead of being defaulted.
    pub const REQUIRED: [Field; 4] = [Self::UpperClo, Self::LowerClo, Self::Temp, Self::Feels];

    /// The key used for this field in the request instance.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::UpperClo => "upperClo",
            Self::LowerClo => "lowerClo",
            Self::Temp => "temp",
            Self::Sun => "sun",
            Self::Headwind => "headwind",
            Self::Snow => "snow",
            Self::Rain => "rain",
            Self::Fatigued => "fatigued",
            Self::Hr => "hr",
            Self::Feels => "feels",
        }
    }

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }

    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Records which fields were explicitly supplied, independently of their values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldSet(u16);

impl FieldSet {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, field: Field) {
        self.0 |= field.bit();
    }

    pub fn contains(self, field: Field) -> bool {
        self.0 & field.bit() != 0
    }
}

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// One scraped fight row: field name to raw value. Values may be strings,
/// numbers, booleans, null, or missing entirely.
pub type RawFight = HashMap<String, Value>;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FightResult {
    Win,
    Loss,
    Draw,
    NoContest,
    Unknown,
}

impl FightResult {
    /// Case-insensitive, whitespace-tolerant classification of result text.
    #[must_use]
    pub fn from_text(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "win" => Self::Win,
            "loss" => Self::Loss,
            "draw" => Self::Draw,
            "no contest" | "nc" => Self::NoContest,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Loss => "loss",
            Self::Draw => "draw",
            Self::NoContest => "no contest",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FightResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FightMethod {
    KoTko,
    Submission,
    DecisionUnanimous,
    DecisionMajority,
    DecisionSplit,
    Other,
}

impl FightMethod {
    /// Case-insensitive substring match, first hit wins:
    /// ko, sub, unanimous, majority, split. Anything else is `Other`.
    #[must_use]
    pub fn from_text(raw: &str) -> Self {
        let method = raw.trim().to_lowercase();
        if method.contains("ko") {
            Self::KoTko
        } else if method.contains("sub") {
            Self::Submission
        } else if method.contains("unanimous") {
            Self::DecisionUnanimous
        } else if method.contains("majority") {
            Self::DecisionMajority
        } else if method.contains("split") {
            Self::DecisionSplit
        } else {
            Self::Other
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::KoTko => "KO/TKO",
            Self::Submission => "Submission",
            Self::DecisionUnanimous => "Decision - Unanimous",
            Self::DecisionMajority => "Decision - Majority",
            Self::DecisionSplit => "Decision - Split",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for FightMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The raw fields the normalizer reads. Each has a set of accepted key
/// aliases; the first alias present in a row wins.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FightField {
    Fighter,
    Result,
    Method,
    StrikesSelf,
    StrikesOpponent,
    TimeFormat,
    Details,
    Event,
}

impl FightField {
    #[must_use]
    pub fn keys(&self) -> &'static [&'static str] {
        match self {
            Self::Fighter => &["fighter", "Fighter", "name"],
            Self::Result => &["result", "Result"],
            Self::Method => &["method_main", "method", "Method"],
            Self::StrikesSelf => &["TOT_fighter_SigStr_landed", "sig_str_landed", "self_strikes"],
            Self::StrikesOpponent => &[
                "TOT_opponent_SigStr_landed",
                "opp_sig_str_landed",
                "opp_strikes",
            ],
            Self::TimeFormat => &["TimeFormat", "time_format", "five_round"],
            Self::Details => &["Details", "details", "fotn"],
            Self::Event => &["Event", "event", "championship"],
        }
    }

    #[must_use]
    pub fn canonical_key(&self) -> &'static str {
        self.keys()[0]
    }
}

impl fmt::Display for FightField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_key())
    }
}

/// One completed bout seen from one fighter's side.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FightRecord {
    result: FightResult,
    method: FightMethod,
    strikes_landed_self: u32,
    strikes_landed_opponent: u32,
    five_round_format: bool,
    fight_of_the_night: bool,
    championship: bool,
}

impl FightRecord {
    #[must_use]
    pub fn new(result: FightResult, method: FightMethod) -> Self {
        Self {
            result,
            method,
            strikes_landed_self: 0,
            strikes_landed_opponent: 0,
            five_round_format: false,
            fight_of_the_night: false,
            championship: false,
        }
    }

    #[must_use]
    pub fn with_strikes(self, landed_self: u32, landed_opponent: u32) -> Self {
        Self {
            strikes_landed_self: landed_self,
            strikes_landed_opponent: landed_opponent,
            ..self
        }
    }

    #[must_use]
    pub fn with_five_round_format(self, five_round_format: bool) -> Self {
        Self {
            five_round_format,
            ..self
        }
    }

    #[must_use]
    pub fn with_fight_of_the_night(self, fight_of_the_night: bool) -> Self {
        Self {
            fight_of_the_night,
            ..self
        }
    }

    #[must_use]
    pub fn with_championship(self, championship: bool) -> Self {
        Self {
            championship,
            ..self
        }
    }

    #[must_use]
    pub fn result(&self) -> FightResult {
        self.result
    }

    #[must_use]
    pub fn method(&self) -> FightMethod {
        self.method
    }

    #[must_use]
    pub fn strikes_landed_self(&self) -> u32 {
        self.strikes_landed_self
    }

    #[must_use]
    pub fn strikes_landed_opponent(&self) -> u32 {
        self.strikes_landed_opponent
    }

    #[must_use]
    pub fn is_five_round_format(&self) -> bool {
        self.five_round_format
    }

    #[must_use]
    pub fn has_fight_of_the_night_bonus(&self) -> bool {
        self.fight_of_the_night
    }

    #[must_use]
    pub fn has_championship_bonus(&self) -> bool {
        self.championship
    }

    /// Renders the record back into raw row form. Normalizing the output
    /// yields this record again.
    #[must_use]
    pub fn to_raw(&self) -> RawFight {
        let time_format = if self.five_round_format {
            "5 Rnd (5-5-5-5-5)"
        } else {
            "3 Rnd (5-5-5)"
        };
        let details = if self.fight_of_the_night {
            "Fight of the Night"
        } else {
            ""
        };
        let event = if self.championship { "Championship" } else { "" };

        let mut raw = RawFight::new();
        raw.insert(
            FightField::Result.canonical_key().to_string(),
            Value::from(self.result.as_str()),
        );
        raw.insert(
            FightField::Method.canonical_key().to_string(),
            Value::from(self.method.as_str()),
        );
        raw.insert(
            FightField::StrikesSelf.canonical_key().to_string(),
            Value::from(self.strikes_landed_self),
        );
        raw.insert(
            FightField::StrikesOpponent.canonical_key().to_string(),
            Value::from(self.strikes_landed_opponent),
        );
        raw.insert(
            FightField::TimeFormat.canonical_key().to_string(),
            Value::from(time_format),
        );
        raw.insert(
            FightField::Details.canonical_key().to_string(),
            Value::from(details),
        );
        raw.insert(
            FightField::Event.canonical_key().to_string(),
            Value::from(event),
        );
        raw
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum WarningKind {
    Missing,
    Unparseable(String),
    Unrecognized(String),
}

/// A field the normalizer had to default.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FieldWarning {
    pub field: FightField,
    pub kind: WarningKind,
}

impl fmt::Display for FieldWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            WarningKind::Missing => write!(f, "{}: missing", self.field),
            WarningKind::Unparseable(raw) => write!(f, "{}: unparseable {raw:?}", self.field),
            WarningKind::Unrecognized(raw) => write!(f, "{}: unrecognized {raw:?}", self.field),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NormalizedFight {
    pub record: FightRecord,
    pub warnings: Vec<FieldWarning>,
}

/// A raw row tagged with the fighter it belongs to.
#[derive(Clone, Debug)]
pub struct FightRow {
    pub fighter: String,
    pub raw: RawFight,
}

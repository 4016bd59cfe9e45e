use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

use crate::model::{
    FieldWarning, FightField, FightMethod, FightRecord, FightResult, NormalizedFight, RawFight,
    WarningKind,
};

/// First alias of `field` holding a non-null value, with the key it was found
/// under.
fn lookup_entry(raw: &RawFight, field: FightField) -> Option<(&'static str, &Value)> {
    field.keys().iter().find_map(|key| {
        raw.get(*key)
            .filter(|value| !value.is_null())
            .map(|value| (*key, value))
    })
}

fn lookup(raw: &RawFight, field: FightField) -> Option<&Value> {
    lookup_entry(raw, field).map(|(_, value)| value)
}

fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Text of a field, `None` when absent, null, or blank.
fn field_text(raw: &RawFight, field: FightField) -> Option<String> {
    lookup(raw, field)
        .and_then(value_as_text)
        .filter(|s| !s.trim().is_empty())
}

/// Fighter name of a row, trimmed.
#[must_use]
pub fn fighter_name(raw: &RawFight) -> Option<String> {
    field_text(raw, FightField::Fighter).map(|s| s.trim().to_string())
}

fn strike_pattern() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"(?i)^(\d[\d,]*)(?:\.\d*)?(?:\s*of\s*\d[\d,]*)?$")
            .expect("Invalid regex pattern - this is a programming error")
    })
}

/// Parses a landed-strike count. Accepts plain integers, floats (truncated),
/// thousands separators, and "landed of attempted" text.
fn parse_strikes(value: Option<&Value>) -> Result<u32, WarningKind> {
    let Some(value) = value else {
        return Err(WarningKind::Missing);
    };

    match value {
        Value::Number(n) => {
            if let Some(v) = n.as_u64() {
                u32::try_from(v).map_err(|_| WarningKind::Unparseable(n.to_string()))
            } else {
                match n.as_f64() {
                    Some(f) if f.is_finite() && f >= 0.0 && f < f64::from(u32::MAX) => {
                        Ok(f.trunc() as u32)
                    }
                    _ => Err(WarningKind::Unparseable(n.to_string())),
                }
            }
        }
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Err(WarningKind::Missing);
            }
            strike_pattern()
                .captures(trimmed)
                .and_then(|caps| caps.get(1))
                .and_then(|landed| landed.as_str().replace(',', "").parse::<u32>().ok())
                .ok_or_else(|| WarningKind::Unparseable(trimmed.to_string()))
        }
        other => Err(WarningKind::Unparseable(other.to_string())),
    }
}

fn five_round_text(text: &str) -> bool {
    text.contains("5 Rnd") || text.to_lowercase().contains("5 round")
}

fn fight_of_the_night_text(text: &str) -> bool {
    let lowered = text.to_lowercase();
    lowered.contains("fight of the night") || lowered.contains("fight of night")
}

fn championship_text(text: &str) -> bool {
    text.to_lowercase().contains("championship")
}

/// Keys whose values are yes/no designations rather than descriptive text.
const FLAG_KEYS: [&str; 3] = ["five_round", "fotn", "championship"];

fn flag_text(text: &str) -> Option<bool> {
    match text.trim().to_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

/// Reads a bonus flag. Booleans are taken as-is, and so is `true`/`false`/`1`/`0`
/// text under a flag key (CSV cells arrive as strings). Other text goes
/// through `matches`. An absent designation is simply `false`.
fn flag(raw: &RawFight, field: FightField, matches: fn(&str) -> bool) -> bool {
    match lookup_entry(raw, field) {
        Some((_, Value::Bool(b))) => *b,
        Some((key, value)) => value_as_text(value).is_some_and(|text| {
            FLAG_KEYS
                .contains(&key)
                .then(|| flag_text(&text))
                .flatten()
                .unwrap_or_else(|| matches(&text))
        }),
        None => false,
    }
}

/// Builds a [`FightRecord`] from a raw row, recording every field that had to
/// fall back to its default. Never fails.
#[must_use]
pub fn normalize_with_warnings(raw: &RawFight) -> NormalizedFight {
    let mut warnings = Vec::new();
    let mut warn = |field: FightField, kind: WarningKind| {
        warnings.push(FieldWarning { field, kind });
    };

    let result = match field_text(raw, FightField::Result) {
        Some(text) => {
            let result = FightResult::from_text(&text);
            if result == FightResult::Unknown && !text.trim().eq_ignore_ascii_case("unknown") {
                warn(FightField::Result, WarningKind::Unrecognized(text));
            }
            result
        }
        None => {
            warn(FightField::Result, WarningKind::Missing);
            FightResult::Unknown
        }
    };

    let method = match field_text(raw, FightField::Method) {
        Some(text) => {
            let method = FightMethod::from_text(&text);
            if method == FightMethod::Other && !text.trim().eq_ignore_ascii_case("other") {
                warn(FightField::Method, WarningKind::Unrecognized(text));
            }
            method
        }
        None => {
            warn(FightField::Method, WarningKind::Missing);
            FightMethod::Other
        }
    };

    let strikes_self = parse_strikes(lookup(raw, FightField::StrikesSelf)).unwrap_or_else(|kind| {
        warn(FightField::StrikesSelf, kind);
        0
    });
    let strikes_opponent =
        parse_strikes(lookup(raw, FightField::StrikesOpponent)).unwrap_or_else(|kind| {
            warn(FightField::StrikesOpponent, kind);
            0
        });

    let record = FightRecord::new(result, method)
        .with_strikes(strikes_self, strikes_opponent)
        .with_five_round_format(flag(raw, FightField::TimeFormat, five_round_text))
        .with_fight_of_the_night(flag(raw, FightField::Details, fight_of_the_night_text))
        .with_championship(flag(raw, FightField::Event, championship_text));

    for warning in &warnings {
        log::debug!("defaulted {warning}");
    }

    NormalizedFight { record, warnings }
}

#[must_use]
pub fn normalize(raw: &RawFight) -> FightRecord {
    normalize_with_warnings(raw).record
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawFight {
        serde_json::from_value(value).expect("test row is an object")
    }

    #[test]
    fn reads_the_scraped_column_names() {
        let row = raw(json!({
            "result": "Win",
            "method_main": "KO/TKO",
            "TOT_fighter_SigStr_landed": "40",
            "TOT_opponent_SigStr_landed": 10.0,
            "TimeFormat": "5 Rnd (5-5-5-5-5)",
            "Details": "Punch to Head At Distance. Fight of the Night",
            "Event": "UFC 300: Pereira vs. Hill (Light Heavyweight Championship)"
        }));
        let normalized = normalize_with_warnings(&row);
        let record = normalized.record;

        assert!(normalized.warnings.is_empty(), "{:?}", normalized.warnings);
        assert_eq!(record.result(), FightResult::Win);
        assert_eq!(record.method(), FightMethod::KoTko);
        assert_eq!(record.strikes_landed_self(), 40);
        assert_eq!(record.strikes_landed_opponent(), 10);
        assert!(record.is_five_round_format());
        assert!(record.has_fight_of_the_night_bonus());
        assert!(record.has_championship_bonus());
    }

    #[test]
    fn strike_formats() {
        let cases = [
            (json!("1,234"), 1234),
            (json!("27 of 61"), 27),
            (json!("27of61"), 27),
            (json!("40.9"), 40),
            (json!(12), 12),
            (json!(12.7), 12),
            (json!("  8 "), 8),
        ];
        for (value, expected) in cases {
            let row = raw(json!({ "TOT_fighter_SigStr_landed": value.clone() }));
            assert_eq!(
                normalize(&row).strikes_landed_self(),
                expected,
                "parsing {value}"
            );
        }
    }

    #[test]
    fn bad_strikes_default_to_zero_with_a_warning() {
        for value in [json!("--"), json!(-3), json!("abc"), json!(true), json!([1])] {
            let row = raw(json!({ "TOT_opponent_SigStr_landed": value.clone() }));
            let normalized = normalize_with_warnings(&row);
            assert_eq!(normalized.record.strikes_landed_opponent(), 0);
            assert!(
                normalized.warnings.iter().any(|w| w.field == FightField::StrikesOpponent
                    && matches!(w.kind, WarningKind::Unparseable(_))),
                "no unparseable warning for {value}"
            );
        }
    }

    #[test]
    fn empty_row_degrades_to_defaults() {
        let normalized = normalize_with_warnings(&RawFight::new());
        assert_eq!(
            normalized.record,
            FightRecord::new(FightResult::Unknown, FightMethod::Other)
        );
        let missing: Vec<FightField> = normalized
            .warnings
            .iter()
            .filter(|w| w.kind == WarningKind::Missing)
            .map(|w| w.field)
            .collect();
        assert_eq!(
            missing,
            vec![
                FightField::Result,
                FightField::Method,
                FightField::StrikesSelf,
                FightField::StrikesOpponent
            ]
        );
    }

    #[test]
    fn five_round_detection() {
        let check = |text: &str| normalize(&raw(json!({ "TimeFormat": text }))).is_five_round_format();
        assert!(check("5 Rnd (5-5-5-5-5)"));
        assert!(check("5 Round Title Fight"));
        assert!(check("5 ROUNDS"));
        assert!(!check("5 rnd (5-5-5-5-5)"));
        assert!(!check("3 Rnd (5-5-5)"));
        assert!(normalize(&raw(json!({ "five_round": true }))).is_five_round_format());
    }

    #[test]
    fn flag_columns_accept_boolean_text() {
        let record = normalize(&raw(json!({
            "result": "win", "method": "KO/TKO",
            "self_strikes": "40", "opp_strikes": "10",
            "five_round": "true", "fotn": "TRUE", "championship": "1"
        })));
        assert!(record.is_five_round_format());
        assert!(record.has_fight_of_the_night_bonus());
        assert!(record.has_championship_bonus());

        let record = normalize(&raw(json!({ "five_round": "false", "fotn": "0", "championship": " False " })));
        assert!(!record.is_five_round_format());
        assert!(!record.has_fight_of_the_night_bonus());
        assert!(!record.has_championship_bonus());

        // Descriptive text under a descriptive key still goes through the matcher.
        assert!(!normalize(&raw(json!({ "Details": "true" }))).has_fight_of_the_night_bonus());
    }

    #[test]
    fn csv_flag_columns_score_like_json() {
        let rows = crate::controller::ingest::parse_csv_rows(
            "fighter,result,method,self_strikes,opp_strikes,five_round,fotn\n\
             A,win,KO/TKO,40,10,true,true\n",
        )
        .expect("valid csv");
        let from_csv = normalize(&rows[0]);
        let from_json = normalize(&raw(json!({
            "fighter": "A", "result": "win", "method": "KO/TKO",
            "self_strikes": 40, "opp_strikes": 10,
            "five_round": true, "fotn": true
        })));
        assert_eq!(from_csv, from_json);
        assert_eq!(
            crate::controller::score::score(&from_csv, &crate::controller::score::ScoringRules::default()),
            205
        );
    }

    #[test]
    fn null_alias_falls_through_to_the_next_key() {
        let normalized = normalize_with_warnings(&raw(json!({
            "method_main": null,
            "method": "KO/TKO",
            "TOT_fighter_SigStr_landed": null,
            "self_strikes": 7
        })));
        assert_eq!(normalized.record.method(), FightMethod::KoTko);
        assert_eq!(normalized.record.strikes_landed_self(), 7);
        assert!(
            !normalized
                .warnings
                .iter()
                .any(|w| w.field == FightField::Method || w.field == FightField::StrikesSelf)
        );
    }

    #[test]
    fn fight_of_the_night_variants() {
        let check =
            |text: &str| normalize(&raw(json!({ "Details": text }))).has_fight_of_the_night_bonus();
        assert!(check("FIGHT OF THE NIGHT"));
        assert!(check("Bonus: fight of night"));
        assert!(!check("Performance of the Night"));
        assert!(normalize(&raw(json!({ "fotn": true }))).has_fight_of_the_night_bonus());
    }

    #[test]
    fn unrecognized_text_is_reported() {
        let row = raw(json!({ "result": "pending", "method": "Unknown-Method-XYZ" }));
        let normalized = normalize_with_warnings(&row);
        assert_eq!(normalized.record.result(), FightResult::Unknown);
        assert_eq!(normalized.record.method(), FightMethod::Other);
        assert!(normalized.warnings.contains(&FieldWarning {
            field: FightField::Result,
            kind: WarningKind::Unrecognized("pending".to_string()),
        }));
        assert!(normalized.warnings.contains(&FieldWarning {
            field: FightField::Method,
            kind: WarningKind::Unrecognized("Unknown-Method-XYZ".to_string()),
        }));
    }

    #[test]
    fn renormalizing_a_record_is_a_no_op() {
        let records = [
            FightRecord::new(FightResult::Win, FightMethod::KoTko)
                .with_strikes(40, 10)
                .with_five_round_format(true)
                .with_fight_of_the_night(true),
            FightRecord::new(FightResult::Loss, FightMethod::DecisionSplit).with_strikes(3, 90),
            FightRecord::new(FightResult::NoContest, FightMethod::Other).with_championship(true),
            FightRecord::new(FightResult::Unknown, FightMethod::Submission),
            FightRecord::new(FightResult::Draw, FightMethod::DecisionMajority)
                .with_strikes(1_000_000, 0),
        ];
        for record in records {
            let once = normalize(&record.to_raw());
            assert_eq!(once, record);
            assert_eq!(normalize(&once.to_raw()), once);
        }
    }

    #[test]
    fn fighter_name_aliases() {
        assert_eq!(
            fighter_name(&raw(json!({ "Fighter": " Alex Pereira " }))),
            Some("Alex Pereira".to_string())
        );
        assert_eq!(fighter_name(&raw(json!({ "name": "" }))), None);
        assert_eq!(fighter_name(&RawFight::new()), None);
    }
}

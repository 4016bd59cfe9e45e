use super::rules::{
    BonusKind, CHAMPIONSHIP_BONUS, FIGHT_OF_THE_NIGHT_BONUS, FIVE_ROUND_BONUS, KO_TKO_WIN, LOSS,
    MAJORITY_DECISION_WIN, OTHER_WIN, SPLIT_DECISION_WIN, SUBMISSION_WIN, ScoringRules,
    UNANIMOUS_DECISION_WIN,
};
use crate::model::{FightMethod, FightRecord, FightResult, ScoreBreakdown};

#[must_use]
pub fn base_score(result: FightResult, method: FightMethod) -> u32 {
    match (result, method) {
        (FightResult::Win, FightMethod::KoTko) => KO_TKO_WIN,
        (FightResult::Win, FightMethod::Submission) => SUBMISSION_WIN,
        (FightResult::Win, FightMethod::DecisionUnanimous) => UNANIMOUS_DECISION_WIN,
        (FightResult::Win, FightMethod::DecisionMajority) => MAJORITY_DECISION_WIN,
        (FightResult::Win, FightMethod::DecisionSplit) => SPLIT_DECISION_WIN,
        (FightResult::Win, FightMethod::Other) => OTHER_WIN,
        (FightResult::Loss, _) => LOSS,
        // Draw and no-contest earn no participation credit.
        (FightResult::Draw | FightResult::NoContest | FightResult::Unknown, _) => 0,
    }
}

#[must_use]
pub fn score_breakdown(record: &FightRecord, rules: &ScoringRules) -> ScoreBreakdown {
    let bonus = |kind: BonusKind, applies: bool, points: u32| {
        if applies && rules.is_enabled(kind) { points } else { 0 }
    };

    ScoreBreakdown {
        base: base_score(record.result(), record.method()),
        strike_differential: bonus(
            BonusKind::StrikeDifferential,
            true,
            record
                .strikes_landed_self()
                .saturating_sub(record.strikes_landed_opponent()),
        ),
        five_round: bonus(
            BonusKind::FiveRoundFormat,
            record.is_five_round_format(),
            FIVE_ROUND_BONUS,
        ),
        fight_of_the_night: bonus(
            BonusKind::FightOfTheNight,
            record.has_fight_of_the_night_bonus(),
            FIGHT_OF_THE_NIGHT_BONUS,
        ),
        championship: bonus(
            BonusKind::Championship,
            record.has_championship_bonus(),
            CHAMPIONSHIP_BONUS,
        ),
    }
}

/// RAX score of one fight.
#[must_use]
pub fn score(record: &FightRecord, rules: &ScoringRules) -> u32 {
    score_breakdown(record, rules).total()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::normalize::normalize;
    use crate::model::RawFight;
    use serde_json::json;

    fn score_of(row: serde_json::Value) -> u32 {
        let raw: RawFight = serde_json::from_value(row).expect("object");
        score(&normalize(&raw), &ScoringRules::default())
    }

    #[test]
    fn ko_win_with_every_bonus() {
        let rax = score_of(json!({
            "result": "win", "method": "KO/TKO",
            "self_strikes": 40, "opp_strikes": 10,
            "five_round": true, "fotn": true
        }));
        assert_eq!(rax, 205);
    }

    #[test]
    fn loss_is_flat_credit() {
        let rax = score_of(json!({
            "result": "loss", "method": "KO/TKO",
            "self_strikes": 15, "opp_strikes": 30,
            "five_round": false, "fotn": false
        }));
        assert_eq!(rax, 25);
    }

    #[test]
    fn unanimous_decision_with_small_differential() {
        let rax = score_of(json!({
            "result": "win", "method": "Decision - Unanimous",
            "self_strikes": 50, "opp_strikes": 45
        }));
        assert_eq!(rax, 85);
    }

    #[test]
    fn unknown_method_win_falls_back() {
        let rax = score_of(json!({
            "result": "win", "method": "Unknown-Method-XYZ",
            "self_strikes": 0, "opp_strikes": 0
        }));
        assert_eq!(rax, 60);
    }

    #[test]
    fn base_table() {
        use FightMethod::*;
        let wins = [
            (KoTko, 100),
            (Submission, 90),
            (DecisionUnanimous, 80),
            (DecisionMajority, 75),
            (DecisionSplit, 70),
            (Other, 60),
        ];
        for (method, expected) in wins {
            assert_eq!(base_score(FightResult::Win, method), expected);
            assert_eq!(base_score(FightResult::Loss, method), 25);
            assert_eq!(base_score(FightResult::Draw, method), 0);
            assert_eq!(base_score(FightResult::NoContest, method), 0);
            assert_eq!(base_score(FightResult::Unknown, method), 0);
        }
    }

    #[test]
    fn no_credit_outcomes_score_zero_without_bonuses() {
        for result in [FightResult::Draw, FightResult::NoContest, FightResult::Unknown] {
            let record = FightRecord::new(result, FightMethod::KoTko).with_strikes(20, 20);
            assert_eq!(score(&record, &ScoringRules::with_championship()), 0);
        }
    }

    #[test]
    fn losses_score_at_least_the_loss_credit() {
        let loss = FightRecord::new(FightResult::Loss, FightMethod::Submission);
        let rules = ScoringRules::default();
        assert_eq!(score(&loss, &rules), 25);
        assert_eq!(score(&loss.with_strikes(31, 30), &rules), 26);
        assert_eq!(score(&loss.with_five_round_format(true), &rules), 50);
        assert_eq!(score(&loss.with_fight_of_the_night(true), &rules), 75);
    }

    #[test]
    fn monotone_in_own_strikes() {
        let rules = ScoringRules::default();
        let mut previous = 0;
        for landed in 0..200 {
            let record =
                FightRecord::new(FightResult::Win, FightMethod::DecisionSplit).with_strikes(landed, 57);
            let current = score(&record, &rules);
            assert!(current >= previous, "score dropped at {landed}");
            previous = current;
        }
    }

    #[test]
    fn components_sum_in_any_order() {
        let record = FightRecord::new(FightResult::Win, FightMethod::Submission)
            .with_strikes(33, 12)
            .with_five_round_format(true)
            .with_fight_of_the_night(true)
            .with_championship(true);
        let breakdown = score_breakdown(&record, &ScoringRules::with_championship());
        let forward: u32 = breakdown.components().iter().sum();
        let backward: u32 = breakdown.components().iter().rev().sum();
        let shuffled = breakdown.championship
            + breakdown.base
            + breakdown.fight_of_the_night
            + breakdown.strike_differential
            + breakdown.five_round;
        assert_eq!(forward, 90 + 21 + 25 + 50 + 25);
        assert_eq!(forward, backward);
        assert_eq!(forward, shuffled);
        assert_eq!(forward, breakdown.total());
    }

    #[test]
    fn championship_bonus_is_opt_in() {
        let record =
            FightRecord::new(FightResult::Win, FightMethod::KoTko).with_championship(true);
        assert_eq!(score(&record, &ScoringRules::default()), 100);
        assert_eq!(score(&record, &ScoringRules::with_championship()), 125);
    }

    #[test]
    fn disabled_bonuses_contribute_nothing() {
        let record = FightRecord::new(FightResult::Win, FightMethod::KoTko)
            .with_strikes(40, 10)
            .with_five_round_format(true)
            .with_fight_of_the_night(true);
        let rules = ScoringRules::default()
            .disable(BonusKind::StrikeDifferential)
            .disable(BonusKind::FightOfTheNight);
        assert_eq!(score(&record, &rules), 125);
    }
}

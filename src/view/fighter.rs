use maud::{Markup, html};

use super::index::render_page;
use crate::model::FighterDetail;

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "" }
}

#[must_use]
pub fn render_fighter_breakdown(detail: &FighterDetail) -> Markup {
    html! {
        p {
            (detail.total.fight_count) " fights, " (detail.total.total_score) " RAX total. "
            a href="./" { "Back to leaderboard" }
        }
        table id="fights" class="styled-table" {
            thead {
                tr {
                    th { "#" }
                    th { "RESULT" }
                    th { "METHOD" }
                    th { "SIG. STRIKES" }
                    th { "5 RND" }
                    th { "FOTN" }
                    th { "TITLE" }
                    th { "BASE" }
                    th { "STRIKE DIFF" }
                    th { "BONUSES" }
                    th { "RAX" }
                    th { "NOTES" }
                }
            }
            tbody {
                @for (idx, fight) in detail.fights.iter().enumerate() {
                    @let record = &fight.record;
                    @let breakdown = &fight.breakdown;
                    tr {
                        td { (idx + 1) }
                        td { (record.result().as_str()) }
                        td { (record.method().as_str()) }
                        td { (record.strikes_landed_self()) " - " (record.strikes_landed_opponent()) }
                        td { (yes_no(record.is_five_round_format())) }
                        td { (yes_no(record.has_fight_of_the_night_bonus())) }
                        td { (yes_no(record.has_championship_bonus())) }
                        td { (breakdown.base) }
                        td { (breakdown.strike_differential) }
                        td { (breakdown.five_round + breakdown.fight_of_the_night + breakdown.championship) }
                        td class="score" { (breakdown.total()) }
                        td class="notes" { (fight.warnings.join("; ")) }
                    }
                }
            }
        }
    }
}

#[must_use]
pub fn render_fighter_page(detail: &FighterDetail) -> Markup {
    render_page(&detail.total.name, render_fighter_breakdown(detail))
}

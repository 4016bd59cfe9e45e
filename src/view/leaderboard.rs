use chrono::{DateTime, Utc};
use maud::{Markup, html};

use super::index::{DEFAULT_TITLE, render_page};
use crate::controller::score::{SortDirection, SortKey, competition_place};
use crate::model::{LeaderboardData, format_time_ago};

fn sort_href(column: SortKey, current: SortKey, direction: SortDirection) -> String {
    let next = if column == current {
        direction.flipped()
    } else if column == SortKey::Name {
        SortDirection::Asc
    } else {
        SortDirection::Desc
    };
    format!("?sort={}&dir={}", column.as_param(), next.as_param())
}

fn header_label(label: &str, column: SortKey, current: SortKey, direction: SortDirection) -> String {
    if column != current {
        return label.to_string();
    }
    match direction {
        SortDirection::Asc => format!("{label} ▲"),
        SortDirection::Desc => format!("{label} ▼"),
    }
}

#[must_use]
pub fn render_leaderboard(data: &LeaderboardData, sort_key: SortKey, direction: SortDirection) -> Markup {
    let columns = [
        ("FIGHTER", SortKey::Name),
        ("RAX", SortKey::Score),
        ("FIGHTS", SortKey::Fights),
    ];

    html! {
        @if data.totals.is_empty() {
            p id="no-fighters" { "No fight data available" }
        } @else {
            table id="leaderboard" class="styled-table" {
                thead {
                    tr {
                        th { "PLACE" }
                        @for (label, column) in columns {
                            th {
                                a href=(sort_href(column, sort_key, direction)) {
                                    (header_label(label, column, sort_key, direction))
                                }
                            }
                        }
                    }
                }
                tbody {
                    @for total in &data.totals {
                        tr {
                            td class="place" { (competition_place(&data.totals, total)) }
                            td class="fighter" {
                                a href=(format!("fighter?name={}", urlencoding::encode(&total.name))) {
                                    (total.name)
                                }
                            }
                            td class="score" { (total.total_score) }
                            td class="fights" { (total.fight_count) }
                        }
                    }
                }
            }
        }
    }
}

#[must_use]
pub fn render_refresh_note(data: &LeaderboardData, now: DateTime<Utc>) -> Markup {
    html! {
        p class="refresh" {
            "Refreshed " (format_time_ago(now - data.last_refresh)) " ago from " (data.last_refresh_source.to_string()) "."
            @if data.warning_count > 0 {
                " " (data.warning_count) " fields were defaulted while reading fights."
            }
            @if data.skipped_rows > 0 {
                " " (data.skipped_rows) " rows had no fighter name."
            }
        }
    }
}

#[must_use]
pub fn render_leaderboard_page(
    data: &LeaderboardData,
    sort_key: SortKey,
    direction: SortDirection,
    now: DateTime<Utc>,
) -> Markup {
    render_page(
        DEFAULT_TITLE,
        html! {
            (render_leaderboard(data, sort_key, direction))
            (render_refresh_note(data, now))
        },
    )
}

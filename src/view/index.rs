use maud::{Markup, PreEscaped, html};

pub const DEFAULT_TITLE: &str = "RAX Leaderboard";

const STYLES: &str = "
body { font-family: sans-serif; margin: 2em; }
.styled-table { border-collapse: collapse; min-width: 400px; }
.styled-table th, .styled-table td { padding: 6px 12px; border-bottom: 1px solid #ddd; }
.styled-table thead tr { background-color: #2d3142; color: #fff; text-align: left; }
.styled-table thead a { color: #fff; }
.refresh { color: #666; font-size: 0.9em; }
";

/// Page shell shared by the leaderboard and fighter pages.
#[must_use]
pub fn render_page(title: &str, body: Markup) -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            title { (title) }
            style { (PreEscaped(STYLES)) }
        }
        body {
            h1 { (title) }
            (body)
        }
    }
}

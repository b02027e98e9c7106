use crate::config::{ColorToken, Palette};
use crate::utils::colors::paint;
use crate::utils::formatting::mins2readable;
use indexmap::IndexMap;

fn swatch(token: ColorToken, color: bool) -> String {
    if color {
        paint("  ", token.ansi_bg(), true)
    } else {
        format!("[{}]", token.as_str())
    }
}

/// Legend lines: every mapped game, then unmapped games seen this week.
///
/// Games present in `totals` are followed by their played time.
pub fn render_legend(palette: &Palette, totals: &IndexMap<String, i64>, color: bool) -> String {
    let mut out = String::from("Legend\n");

    let line = |game: &str, token: ColorToken| {
        let mut l = format!("  {} {}", swatch(token, color), game);
        if let Some(mins) = totals.get(game) {
            l.push_str(&format!("  {}", mins2readable(*mins)));
        }
        l.push('\n');
        l
    };

    for (game, token) in &palette.colors {
        out.push_str(&line(game, *token));
    }

    for game in totals.keys().filter(|g| !palette.is_mapped(g)) {
        out.push_str(&line(game, palette.default));
    }

    out
}

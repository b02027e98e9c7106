use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_day_rows;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::paint;
use crate::utils::date;
use crate::utils::formatting::mins2readable;
use crate::utils::table::{Column, Table};

/// Handle the `day` command.
///
/// Unlike `week`, a missing snapshot or a failing query is reported.
pub fn handle(cmd: &Commands, cfg: &Config, color: bool) -> AppResult<()> {
    if let Commands::Day { date: d } = cmd {
        let day = match d {
            Some(s) => date::parse_date(s)?,
            None => date::today(),
        };

        let pool = DbPool::open_snapshot(&cfg.database)?;
        let rows = load_day_rows(&pool, &day)?;

        if rows.is_empty() {
            info(format!("No sessions recorded on {day}"));
            return Ok(());
        }

        println!("{}", header(day.format("%Y-%m-%d (%a)"), color));

        for game in Core::day_detail(&rows) {
            let token = cfg.palette.color_for(&game.game);
            println!("\n{}", paint(&game.game, token.ansi_bg(), color));

            let mut table = Table::new(vec![
                Column::new("START", 6),
                Column::new("END", 6),
                Column::new("PLAYED", 8),
            ]);
            for s in &game.sessions {
                table.add_row(vec![
                    s.start_time.clone(),
                    s.end_time.clone(),
                    mins2readable(s.minutes),
                ]);
            }
            print!("{}", table.render());
            println!("Total: {}", mins2readable(game.total_minutes));
        }
    }
    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Core;
use crate::core::week::week_window;
use crate::errors::AppResult;
use crate::ui::legend::render_legend;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config, color: bool) -> AppResult<()> {
    if let Commands::Legend { offset } = cmd {
        let window = week_window(date::today(), cfg.first_day.weekday(), *offset)?;
        let days = Core::load_week(&cfg.database, &window);
        print!("{}", render_legend(&cfg.palette, &Core::week_totals(&days), color));
    }
    Ok(())
}

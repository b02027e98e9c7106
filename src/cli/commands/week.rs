use crate::cli::parser::{Commands, OutputFormat};
use crate::config::Config;
use crate::core::Core;
use crate::core::week::week_window;
use crate::errors::AppResult;
use crate::export::{build_week_export, ensure_writable, write_csv, write_json};
use crate::ui::grid::{GridOptions, render_week};
use crate::ui::legend::render_legend;
use crate::ui::messages::header;
use crate::utils::date;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config, color: bool) -> AppResult<()> {
    if let Commands::Week {
        offset,
        format,
        file,
        force,
        overflow,
    } = cmd
    {
        let window = week_window(date::today(), cfg.first_day.weekday(), *offset)?;
        let days = Core::load_week(&cfg.database, &window);
        let overflow = overflow.unwrap_or(cfg.overflow);

        match format {
            OutputFormat::Grid => {
                let opts = GridOptions {
                    cell_width: cfg.cell_width,
                    overflow,
                    color,
                };
                println!(
                    "{}",
                    header(format!("Week {} → {}", window.start, window.end), color)
                );
                print!("{}", render_week(&window, &days, &cfg.palette, &opts));
                println!();
                print!("{}", render_legend(&cfg.palette, &Core::week_totals(&days), color));
            }
            OutputFormat::Json | OutputFormat::Csv => {
                let week = build_week_export(
                    &window,
                    &days,
                    &cfg.palette,
                    cfg.unit_height,
                    cfg.gutter,
                    overflow,
                );

                let path = file.as_deref().map(Path::new);
                if let Some(p) = path {
                    ensure_writable(p, *force)?;
                }

                if *format == OutputFormat::Json {
                    write_json(&week, path)?;
                } else {
                    write_csv(&week, path)?;
                }
            }
        }
    }
    Ok(())
}

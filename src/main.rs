//! playweek main entrypoint.

use playweek::run;
use playweek::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

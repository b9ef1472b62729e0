//! rAttendance main entrypoint.

use rattendance::run;
use rattendance::ui::messages::{error, warning};

fn main() {
    if let Err(e) = run() {
        if e.is_expected() {
            warning(&e);
            std::process::exit(2);
        }
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

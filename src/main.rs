//! dronelog main entrypoint.

use dronelog::run;
use dronelog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

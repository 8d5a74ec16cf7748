//! punchsheet main entrypoint.

use punchsheet::run;
use punchsheet::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

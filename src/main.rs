//! dogcare main entrypoint.

use dogcare::run;
use dogcare::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}

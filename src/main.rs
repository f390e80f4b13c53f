//! punchlog main entrypoint.

use punchlog::run;

fn main() {
    if let Err(e) = run() {
        punchlog::ui::messages::error(e);
        std::process::exit(1);
    }
}

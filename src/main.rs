//! daykeeper main entrypoint.

use daykeeper::run;
use daykeeper::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}

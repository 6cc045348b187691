use std::time::Duration;

use confetti::{Confetti, OverlayError};

fn main() -> Result<(), OverlayError> {
    env_logger::init();

    Confetti::new()
        .with_duration(Duration::from_secs(15))
        .with_title("confetti (Space restarts, Escape cuts short)")
        .run()
}

//! Tile Maker entry point
//!
//! On the web this installs logging and the panic hook; the page drives
//! `WebSession`. Natively it plays the starter stage headless and logs how
//! it ends.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("Failed to init logger: {e}").into());
    }
    log::info!("Tile Maker starting...");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use tile_maker::level::default_level;
    use tile_maker::{InputState, Session, SessionState, Tuning};

    /// Ten seconds at 60 fps
    const MAX_FRAMES: usize = 600;

    env_logger::init();
    log::info!("Tile Maker (native) starting...");
    log::info!("Native mode runs the starter stage headless - serve the web build to play");

    let mut session = Session::new(default_level(), Tuning::default());
    let input = InputState {
        right: true,
        ..Default::default()
    };

    let mut frames = 0;
    while session.state() == SessionState::Playing && frames < MAX_FRAMES {
        session.step(&input);
        frames += 1;
    }

    let player = session.player();
    log::info!(
        "Finished after {frames} frames: {} at ({:.1}, {:.1}), score {}",
        session.state().as_str(),
        player.pos.x,
        player.pos.y,
        player.score
    );
}

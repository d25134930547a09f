//! Selection Sorter: carry the minimum of each pass to the front of the array.

use sortwalk_game::GameKind;

fn main() -> eframe::Result<()> {
    better_panic::install();
    env_logger::init();

    log::info!(
        "Starting Selection Sorter, version={}",
        sortwalk_app::version::build_version()
    );
    sortwalk_app::run(GameKind::Selection)
}

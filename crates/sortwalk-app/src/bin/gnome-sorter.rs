//! Gnome Sorter: walk a garden gnome between flower pots to gnome-sort them.

use sortwalk_game::GameKind;

fn main() -> eframe::Result<()> {
    better_panic::install();
    env_logger::init();

    log::info!(
        "Starting Gnome Sorter, version={}",
        sortwalk_app::version::build_version()
    );
    sortwalk_app::run(GameKind::Gnome)
}

use sortwalk_game::{GameKind, SortGame};

use crate::{
    state::AppState,
    ui::{
        game_screen::GameScreenViewModel,
        hud::HudViewModel,
        playfield::{AvatarView, ElementView, ElementVisualState, PlayfieldViewModel},
        sidebar::SidebarViewModel,
        theme::Palette,
    },
};

#[must_use]
pub(crate) fn build_playfield_vm(app_state: &AppState) -> PlayfieldViewModel {
    let game = app_state.game.as_ref();
    let display = &app_state.settings.display;
    let playfield = game.config().playfield;
    let board = game.board();

    let elements = board
        .elements()
        .iter()
        .map(|element| ElementView {
            value: element.value(),
            position: element.position(),
            visual_state: game
                .element_role(element.index())
                .map_or(ElementVisualState::empty(), ElementVisualState::from),
            hidden: element.is_hidden(),
        })
        .collect();

    let avatar = game.avatar();
    let avatar = AvatarView {
        position: avatar.position(),
        radius: avatar.radius(),
        carrying: avatar.carrying(),
    };

    let zone_boundary = game
        .sorted_boundary()
        .filter(|_| display.show_zones)
        .map(|boundary| playfield.slot_boundary_x(boundary, board.len()));

    PlayfieldViewModel::new(
        game.kind(),
        playfield,
        elements,
        avatar,
        zone_boundary,
        display.show_highlights,
    )
}

fn array_label(kind: GameKind) -> &'static str {
    match kind {
        GameKind::Gnome => "Array",
        GameKind::Selection => "Array State",
    }
}

#[must_use]
pub(crate) fn build_hud_vm(app_state: &AppState) -> HudViewModel {
    let game: &dyn SortGame = app_state.game.as_ref();
    let display = &app_state.settings.display;
    let kind = game.kind();
    HudViewModel {
        title: kind.title(),
        objective: game.objective(),
        array_line: display
            .show_array_line
            .then(|| format!("{}: {}", array_label(kind), game.array_line())),
        state_line: display
            .show_state_name
            .then(|| format!("Algorithm State: {}", game.state_name())),
    }
}

#[must_use]
pub(crate) fn build_game_screen_vm(app_state: &AppState) -> GameScreenViewModel {
    GameScreenViewModel::new(
        build_playfield_vm(app_state),
        build_hud_vm(app_state),
        Palette::for_kind(app_state.game.kind()),
    )
}

#[must_use]
pub(crate) fn build_sidebar_vm<'a>(
    app_state: &'a AppState,
    version: &'a str,
) -> SidebarViewModel<'a> {
    SidebarViewModel::new(app_state.game.is_finished(), &app_state.settings, version)
}

use eframe::egui::{Event, InputState, Key};
use sortwalk_core::Directions;

use crate::action::{Action, ActionRequestQueue};

struct Shortcut {
    key: Key,
    action: Action,
}

impl Shortcut {
    const fn plain(key: Key, action: Action) -> Self {
        Self { key, action }
    }
}

const SHORTCUTS: [Shortcut; 3] = [
    Shortcut::plain(Key::Space, Action::Confirm),
    Shortcut::plain(Key::R, Action::Reset),
    Shortcut::plain(Key::Escape, Action::Quit),
];

const MOVEMENT_KEYS: [(Key, Directions); 8] = [
    (Key::ArrowUp, Directions::UP),
    (Key::W, Directions::UP),
    (Key::ArrowDown, Directions::DOWN),
    (Key::S, Directions::DOWN),
    (Key::ArrowLeft, Directions::LEFT),
    (Key::A, Directions::LEFT),
    (Key::ArrowRight, Directions::RIGHT),
    (Key::D, Directions::RIGHT),
];

/// Turns key presses into actions.
///
/// Matching presses are consumed so a focused side panel widget does not
/// also react to SPACE.
pub(crate) fn handle_input(i: &mut InputState, action_queue: &mut ActionRequestQueue) {
    let pressed = take_shortcut_presses(&mut i.events);
    request_shortcuts(|key| pressed.contains(&key), action_queue);
}

/// Removes unmodified presses of shortcut keys from `events` and returns the
/// keys that went down this frame.
///
/// Auto-repeats are removed as well but not returned, so holding a key fires
/// its action once.
fn take_shortcut_presses(events: &mut Vec<Event>) -> Vec<Key> {
    let mut pressed = vec![];
    events.retain(|event| {
        let Event::Key {
            key,
            pressed: true,
            repeat,
            modifiers,
            ..
        } = event
        else {
            return true;
        };
        if !modifiers.is_none() || !SHORTCUTS.iter().any(|shortcut| shortcut.key == *key) {
            return true;
        }
        if !*repeat {
            pressed.push(*key);
        }
        false
    });
    pressed
}

fn request_shortcuts(
    mut take_press: impl FnMut(Key) -> bool,
    action_queue: &mut ActionRequestQueue,
) {
    for shortcut in SHORTCUTS {
        if take_press(shortcut.key) {
            action_queue.request(shortcut.action);
        }
    }
}

#[must_use]
pub(crate) fn held_directions(i: &InputState) -> Directions {
    directions_from(|key| i.key_down(key))
}

fn directions_from(is_down: impl Fn(Key) -> bool) -> Directions {
    MOVEMENT_KEYS
        .into_iter()
        .filter(|(key, _)| is_down(*key))
        .fold(Directions::empty(), |acc, (_, direction)| acc | direction)
}

#[cfg(test)]
mod tests {
    use eframe::egui::Modifiers;

    use super::*;

    fn key_event(key: Key, pressed: bool, repeat: bool, modifiers: Modifiers) -> Event {
        Event::Key {
            key,
            physical_key: None,
            pressed,
            repeat,
            modifiers,
        }
    }

    fn press(key: Key) -> Event {
        key_event(key, true, false, Modifiers::NONE)
    }

    fn auto_repeat(key: Key) -> Event {
        key_event(key, true, true, Modifiers::NONE)
    }

    fn actions_for(pressed: &[Key]) -> Vec<Action> {
        let mut queue = ActionRequestQueue::default();
        request_shortcuts(|key| pressed.contains(&key), &mut queue);
        queue.take_all()
    }

    #[test]
    fn shortcuts_map_to_actions() {
        assert_eq!(actions_for(&[Key::Space]), vec![Action::Confirm]);
        assert_eq!(actions_for(&[Key::R]), vec![Action::Reset]);
        assert_eq!(actions_for(&[Key::Escape]), vec![Action::Quit]);
        assert_eq!(
            actions_for(&[Key::Escape, Key::Space]),
            vec![Action::Confirm, Action::Quit]
        );
    }

    #[test]
    fn fresh_press_is_taken() {
        let mut events = vec![press(Key::Space), press(Key::W)];
        assert_eq!(take_shortcut_presses(&mut events), vec![Key::Space]);
        assert_eq!(events, vec![press(Key::W)]);
    }

    #[test]
    fn held_key_fires_once() {
        // Frame with the initial press, then frames with only auto-repeats.
        let mut events = vec![press(Key::Space)];
        assert_eq!(take_shortcut_presses(&mut events), vec![Key::Space]);
        for _ in 0..3 {
            let mut events = vec![auto_repeat(Key::Space)];
            assert!(take_shortcut_presses(&mut events).is_empty());
            // Not passed on to a focused widget either.
            assert!(events.is_empty());
        }
    }

    #[test]
    fn releases_and_modified_presses_are_kept() {
        let release = key_event(Key::Space, false, false, Modifiers::NONE);
        let ctrl_r = key_event(Key::R, true, false, Modifiers::CTRL);
        let mut events = vec![release.clone(), ctrl_r.clone()];
        assert!(take_shortcut_presses(&mut events).is_empty());
        assert_eq!(events, vec![release, ctrl_r]);
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert!(actions_for(&[Key::Q, Key::Enter]).is_empty());
    }

    #[test]
    fn arrows_and_wasd_combine() {
        let held = [Key::W, Key::ArrowRight];
        assert_eq!(
            directions_from(|key| held.contains(&key)),
            Directions::UP | Directions::RIGHT
        );
        assert_eq!(directions_from(|_| false), Directions::empty());
        assert_eq!(directions_from(|_| true), Directions::all());
    }
}

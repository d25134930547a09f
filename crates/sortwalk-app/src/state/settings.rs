use sortwalk_core::MovementPolicy;

#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct Settings {
    pub(crate) display: DisplaySettings,
    pub(crate) movement: MovementSettings,
}

#[derive(Debug, Clone, PartialEq)]
#[expect(clippy::struct_excessive_bools)]
pub(crate) struct DisplaySettings {
    pub(crate) show_state_name: bool,
    pub(crate) show_highlights: bool,
    pub(crate) show_zones: bool,
    pub(crate) show_array_line: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_state_name: true,
            show_highlights: true,
            show_zones: true,
            show_array_line: true,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct MovementSettings {
    pub(crate) normalize_diagonal: bool,
}

impl MovementSettings {
    #[must_use]
    pub(crate) fn policy(&self) -> MovementPolicy {
        if self.normalize_diagonal {
            MovementPolicy::Normalized
        } else {
            MovementPolicy::Unnormalized
        }
    }
}

use crate::theme::{Surface, ThemePreference};

/// Handle into the application's style catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeId {
    DefaultLight,
    DefaultDark,
    AlarmAlertLight,
    AlarmAlertDark,
    TimePickerLight,
    TimePickerDark,
}

impl ThemeId {
    /// Every catalog entry, in catalog order.
    pub const ALL: [ThemeId; 6] = [
        ThemeId::DefaultLight,
        ThemeId::DefaultDark,
        ThemeId::AlarmAlertLight,
        ThemeId::AlarmAlertDark,
        ThemeId::TimePickerLight,
        ThemeId::TimePickerDark,
    ];

    /// Name of the style this handle points at.
    pub fn style_name(self) -> &'static str {
        match self {
            ThemeId::DefaultLight => "DefaultLightTheme",
            ThemeId::DefaultDark => "DefaultDarkTheme",
            ThemeId::AlarmAlertLight => "AlarmAlertFullScreenLightTheme",
            ThemeId::AlarmAlertDark => "AlarmAlertFullScreenDarkTheme",
            ThemeId::TimePickerLight => "TimePickerDialogFragmentLight",
            ThemeId::TimePickerDark => "TimePickerDialogFragmentDark",
        }
    }

    /// The preference this style belongs to.
    pub fn preference(self) -> ThemePreference {
        match self {
            ThemeId::DefaultLight | ThemeId::AlarmAlertLight | ThemeId::TimePickerLight => {
                ThemePreference::Light
            }
            ThemeId::DefaultDark | ThemeId::AlarmAlertDark | ThemeId::TimePickerDark => {
                ThemePreference::Dark
            }
        }
    }

    /// The surface this style is dedicated to, `None` for the defaults.
    pub fn surface(self) -> Option<Surface> {
        match self {
            ThemeId::DefaultLight | ThemeId::DefaultDark => None,
            ThemeId::AlarmAlertLight | ThemeId::AlarmAlertDark => Some(Surface::AlarmAlert),
            ThemeId::TimePickerLight | ThemeId::TimePickerDark => Some(Surface::TimePicker),
        }
    }
}

impl std::fmt::Display for ThemeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.style_name())
    }
}

/// Look up a catalog entry by style name (e.g. `"DefaultDarkTheme"`).
pub fn get(style_name: &str) -> Option<ThemeId> {
    ThemeId::ALL
        .into_iter()
        .find(|id| id.style_name() == style_name)
}

/// List all style names in catalog order.
pub fn list() -> impl Iterator<Item = &'static str> {
    ThemeId::ALL.into_iter().map(ThemeId::style_name)
}

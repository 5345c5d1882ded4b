use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::ThemeId;
use crate::prefs::{PreferenceStore, StoreError};

/// Preference key holding the user's theme choice.
pub const KEY_THEME: &str = "theme";

/// The user's light/dark choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

#[derive(Debug, Error)]
#[error("unknown theme preference \"{0}\" (expected \"light\" or \"dark\")")]
pub struct UnknownPreference(pub String);

impl ThemePreference {
    /// The value persisted in the store.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Map a stored value to a preference. Matching is exact.
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }
}

impl FromStr for ThemePreference {
    type Err = UnknownPreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_stored(s).ok_or_else(|| UnknownPreference(s.to_owned()))
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A screen or dialog with its own light/dark styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Surface {
    /// Full-screen alert shown while an alarm rings.
    AlarmAlert,
    TimePicker,
}

impl Surface {
    pub const ALL: [Surface; 2] = [Surface::AlarmAlert, Surface::TimePicker];

    /// Identifier the host uses to name this surface when asking for a theme.
    pub fn identifier(self) -> &'static str {
        match self {
            Surface::AlarmAlert => "com.igbt6.lovelyclock.alert.AlarmAlertFullScreen",
            Surface::TimePicker => "com.igbt6.lovelyclock.presenter.TimePickerDialogFragment",
        }
    }

    /// Exact match against the known identifiers.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.identifier() == identifier)
    }
}

/// Resolves theme identifiers from the persisted theme preference.
///
/// Construction normalizes the stored value: anything other than `light` or
/// `dark` (including no value at all) is overwritten with `dark`. Lookups
/// re-read the store every time, so changes made elsewhere are picked up on
/// the next call. No operation fails; unknown inputs resolve to the dark
/// default.
#[derive(Debug)]
pub struct ThemeResolver<S> {
    store: S,
}

impl<S: PreferenceStore> ThemeResolver<S> {
    pub fn new(store: S) -> Self {
        // Absent must not pass as valid, so read with a sentinel default.
        let stored = store.get_string(KEY_THEME, "");
        if ThemePreference::from_stored(&stored).is_none() {
            tracing::debug!("theme: normalizing stored preference {stored:?} to dark");
            if let Err(e) = store
                .edit()
                .put_string(KEY_THEME, ThemePreference::Dark.as_str())
                .commit()
            {
                tracing::warn!("theme: failed to persist default preference: {e}");
            }
        }
        Self { store }
    }

    /// The preference as currently stored, `Dark` if it is missing or garbled.
    pub fn current_preference(&self) -> ThemePreference {
        let stored = self
            .store
            .get_string(KEY_THEME, ThemePreference::Dark.as_str());
        ThemePreference::from_stored(&stored).unwrap_or_else(|| {
            tracing::debug!("theme: unrecognized stored preference {stored:?}, using dark");
            ThemePreference::Dark
        })
    }

    /// Theme for surfaces without a dedicated style.
    pub fn resolve_default_theme(&self) -> ThemeId {
        default_theme(self.current_preference())
    }

    /// Theme for a known surface under the current preference.
    pub fn resolve_theme_for(&self, surface: Surface) -> ThemeId {
        match (self.current_preference(), surface) {
            (ThemePreference::Light, Surface::AlarmAlert) => ThemeId::AlarmAlertLight,
            (ThemePreference::Light, Surface::TimePicker) => ThemeId::TimePickerLight,
            (ThemePreference::Dark, Surface::AlarmAlert) => ThemeId::AlarmAlertDark,
            (ThemePreference::Dark, Surface::TimePicker) => ThemeId::TimePickerDark,
        }
    }

    /// Theme for the surface named by `identifier`, falling back to the
    /// default theme for identifiers that name no known surface.
    pub fn resolve_theme_for_surface(&self, identifier: &str) -> ThemeId {
        match Surface::from_identifier(identifier) {
            Some(surface) => self.resolve_theme_for(surface),
            None => {
                tracing::debug!("theme: no dedicated style for {identifier:?}");
                self.resolve_default_theme()
            }
        }
    }

    /// Store a new preference and commit it.
    pub fn set_preference(&self, preference: ThemePreference) -> Result<(), StoreError> {
        self.store
            .edit()
            .put_string(KEY_THEME, preference.as_str())
            .commit()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn default_theme(preference: ThemePreference) -> ThemeId {
    match preference {
        ThemePreference::Light => ThemeId::DefaultLight,
        ThemePreference::Dark => ThemeId::DefaultDark,
    }
}

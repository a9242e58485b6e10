//! Navigator hotkeys: parsing, display and matching against egui input.
//!
//! Hotkeys are written as `"N"`, `"Shift+C"` or `"Ctrl+Alt+Space"` and are
//! stored in that form in the YAML config.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HotkeyError {
    #[error("empty hotkey")]
    Empty,
    #[error("unknown modifier '{0}'")]
    UnknownModifier(String),
    #[error("modifier '{0}' given twice")]
    DuplicateModifier(String),
    #[error("unknown key '{0}'")]
    UnknownKey(String),
}

/// Set of held modifier keys. `ctrl` also covers the macOS command key.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifier {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifier {
    pub const NONE: Modifier = Modifier::new(false, false, false);
    pub const CTRL: Modifier = Modifier::new(true, false, false);
    pub const ALT: Modifier = Modifier::new(false, true, false);
    pub const SHIFT: Modifier = Modifier::new(false, false, true);

    pub const fn new(ctrl: bool, alt: bool, shift: bool) -> Self {
        Self { ctrl, alt, shift }
    }

    pub const fn with(self, other: Modifier) -> Self {
        Self::new(
            self.ctrl || other.ctrl,
            self.alt || other.alt,
            self.shift || other.shift,
        )
    }

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    pub fn from_egui(m: &egui::Modifiers) -> Self {
        Self::new(m.command || m.ctrl, m.alt, m.shift)
    }

    fn names(self) -> impl Iterator<Item = &'static str> {
        [(self.ctrl, "Ctrl"), (self.alt, "Alt"), (self.shift, "Shift")]
            .into_iter()
            .filter_map(|(held, name)| held.then_some(name))
    }

    fn parse_one(token: &str) -> Result<Self, HotkeyError> {
        match token.to_ascii_lowercase().as_str() {
            "ctrl" | "control" | "cmd" | "command" => Ok(Self::CTRL),
            "alt" | "option" => Ok(Self::ALT),
            "shift" => Ok(Self::SHIFT),
            _ => Err(HotkeyError::UnknownModifier(token.to_string())),
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.names().enumerate() {
            if i > 0 {
                f.write_str("+")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

/// Modifiers plus a key. Letters are stored uppercase; `' '` is Space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hotkey {
    pub modifier: Modifier,
    pub key: char,
}

impl Hotkey {
    pub fn new(modifier: Modifier, key: char) -> Self {
        Self {
            modifier,
            key: key.to_ascii_uppercase(),
        }
    }

    pub fn matches(&self, key: char, modifier: Modifier) -> bool {
        self.modifier == modifier && self.key.eq_ignore_ascii_case(&key)
    }

    /// egui key for the character, if egui knows it.
    pub fn egui_key(&self) -> Option<egui::Key> {
        match self.key {
            ' ' => Some(egui::Key::Space),
            c => egui::Key::from_name(&c.to_string()),
        }
    }

    /// True if this hotkey was pressed during the current frame.
    pub fn pressed(&self, input: &egui::InputState) -> bool {
        let Some(key) = self.egui_key() else {
            return false;
        };
        input.key_pressed(key) && Modifier::from_egui(&input.modifiers) == self.modifier
    }

    fn parse_key(token: &str) -> Result<char, HotkeyError> {
        if token.eq_ignore_ascii_case("space") {
            return Ok(' ');
        }
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(HotkeyError::Empty),
            (Some(c), None) if c.is_ascii_graphic() => Ok(c.to_ascii_uppercase()),
            _ => Err(HotkeyError::UnknownKey(token.to_string())),
        }
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.modifier.is_none() {
            write!(f, "{}+", self.modifier)?;
        }
        match self.key {
            ' ' => f.write_str("Space"),
            c => write!(f, "{c}"),
        }
    }
}

impl FromStr for Hotkey {
    type Err = HotkeyError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('+').map(str::trim).collect();
        let Some((last, mods)) = parts.split_last() else {
            return Err(HotkeyError::Empty);
        };
        let key = Self::parse_key(last)?;
        let mut modifier = Modifier::NONE;
        for token in mods {
            let m = Modifier::parse_one(token)?;
            if modifier.with(m) == modifier {
                return Err(HotkeyError::DuplicateModifier(token.to_string()));
            }
            modifier = modifier.with(m);
        }
        Ok(Hotkey { modifier, key })
    }
}

impl TryFrom<String> for Hotkey {
    type Error = HotkeyError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Hotkey> for String {
    fn from(hk: Hotkey) -> Self {
        hk.to_string()
    }
}

/// What a navigator hotkey does.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HotkeyAction {
    NextPoint,
    PrevPoint,
    ClearFocus,
    ClearLasso,
}

/// Bindings for every [`HotkeyAction`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorHotkeys {
    pub next_point: Hotkey,
    pub prev_point: Hotkey,
    pub clear_focus: Hotkey,
    pub clear_lasso: Hotkey,
}

impl Default for NavigatorHotkeys {
    fn default() -> Self {
        Self {
            next_point: Hotkey::new(Modifier::NONE, 'N'),
            prev_point: Hotkey::new(Modifier::NONE, 'P'),
            clear_focus: Hotkey::new(Modifier::NONE, 'C'),
            clear_lasso: Hotkey::new(Modifier::SHIFT, 'C'),
        }
    }
}

impl NavigatorHotkeys {
    fn bindings(&self) -> [(Hotkey, HotkeyAction); 4] {
        [
            (self.next_point, HotkeyAction::NextPoint),
            (self.prev_point, HotkeyAction::PrevPoint),
            (self.clear_focus, HotkeyAction::ClearFocus),
            (self.clear_lasso, HotkeyAction::ClearLasso),
        ]
    }

    pub fn action_for(&self, key: char, modifier: Modifier) -> Option<HotkeyAction> {
        self.bindings()
            .into_iter()
            .find(|(hk, _)| hk.matches(key, modifier))
            .map(|(_, action)| action)
    }

    /// Actions whose hotkey was pressed this frame.
    pub fn pressed_actions(&self, input: &egui::InputState) -> Vec<HotkeyAction> {
        self.bindings()
            .into_iter()
            .filter(|(hk, _)| hk.pressed(input))
            .map(|(_, action)| action)
            .collect()
    }

    pub fn get(&self, action: HotkeyAction) -> Hotkey {
        match action {
            HotkeyAction::NextPoint => self.next_point,
            HotkeyAction::PrevPoint => self.prev_point,
            HotkeyAction::ClearFocus => self.clear_focus,
            HotkeyAction::ClearLasso => self.clear_lasso,
        }
    }
}

/// Tooltip text for a button: `"Description [Hotkey]"`.
pub fn format_button_tooltip(description: &str, hotkey: Option<&Hotkey>) -> String {
    match hotkey {
        Some(hk) => format!("{} [{}]", description, hk),
        None => description.to_string(),
    }
}

// Global key hook: reports every press of the configured combination
use crate::domain::error::FtError;
use rdev::{EventType, Key};
use std::str::FromStr;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Ctrl,
    Alt,
    Shift,
    Meta,
}

impl Modifier {
    fn index(self) -> usize {
        match self {
            Modifier::Ctrl => 0,
            Modifier::Alt => 1,
            Modifier::Shift => 2,
            Modifier::Meta => 3,
        }
    }

    /// Which modifier (if any) a physical key belongs to
    fn of(key: Key) -> Option<Self> {
        match key {
            Key::ControlLeft | Key::ControlRight => Some(Modifier::Ctrl),
            Key::Alt | Key::AltGr => Some(Modifier::Alt),
            Key::ShiftLeft | Key::ShiftRight => Some(Modifier::Shift),
            Key::MetaLeft | Key::MetaRight => Some(Modifier::Meta),
            _ => None,
        }
    }
}

/// A key combination such as `ctrl+c`
#[derive(Debug, Clone, PartialEq)]
pub struct Hotkey {
    pub modifiers: Vec<Modifier>,
    pub key: Key,
}

impl FromStr for Hotkey {
    type Err = FtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<String> = s
            .split('+')
            .map(|p| p.trim().to_ascii_lowercase())
            .collect();
        let Some((last, mods)) = parts.split_last() else {
            return Err(FtError::Hotkey(format!("empty hotkey: {:?}", s)));
        };

        let mut modifiers = Vec::new();
        for m in mods {
            let modifier = match m.as_str() {
                "ctrl" | "control" => Modifier::Ctrl,
                "alt" | "option" => Modifier::Alt,
                "shift" => Modifier::Shift,
                "meta" | "cmd" | "super" | "win" => Modifier::Meta,
                other => return Err(FtError::Hotkey(format!("unknown modifier: {}", other))),
            };
            if !modifiers.contains(&modifier) {
                modifiers.push(modifier);
            }
        }

        let key = parse_key(last)
            .ok_or_else(|| FtError::Hotkey(format!("unknown key: {}", last)))?;
        Ok(Self { modifiers, key })
    }
}

fn parse_key(name: &str) -> Option<Key> {
    let key = match name {
        "a" => Key::KeyA,
        "b" => Key::KeyB,
        "c" => Key::KeyC,
        "d" => Key::KeyD,
        "e" => Key::KeyE,
        "f" => Key::KeyF,
        "g" => Key::KeyG,
        "h" => Key::KeyH,
        "i" => Key::KeyI,
        "j" => Key::KeyJ,
        "k" => Key::KeyK,
        "l" => Key::KeyL,
        "m" => Key::KeyM,
        "n" => Key::KeyN,
        "o" => Key::KeyO,
        "p" => Key::KeyP,
        "q" => Key::KeyQ,
        "r" => Key::KeyR,
        "s" => Key::KeyS,
        "t" => Key::KeyT,
        "u" => Key::KeyU,
        "v" => Key::KeyV,
        "w" => Key::KeyW,
        "x" => Key::KeyX,
        "y" => Key::KeyY,
        "z" => Key::KeyZ,
        "0" => Key::Num0,
        "1" => Key::Num1,
        "2" => Key::Num2,
        "3" => Key::Num3,
        "4" => Key::Num4,
        "5" => Key::Num5,
        "6" => Key::Num6,
        "7" => Key::Num7,
        "8" => Key::Num8,
        "9" => Key::Num9,
        "f1" => Key::F1,
        "f2" => Key::F2,
        "f3" => Key::F3,
        "f4" => Key::F4,
        "f5" => Key::F5,
        "f6" => Key::F6,
        "f7" => Key::F7,
        "f8" => Key::F8,
        "f9" => Key::F9,
        "f10" => Key::F10,
        "f11" => Key::F11,
        "f12" => Key::F12,
        "space" => Key::Space,
        "enter" | "return" => Key::Return,
        "tab" => Key::Tab,
        "esc" | "escape" => Key::Escape,
        "insert" => Key::Insert,
        _ => return None,
    };
    Some(key)
}

/// Tracks held modifiers across raw key events
#[derive(Debug)]
pub struct ComboTracker {
    hotkey: Hotkey,
    held: [bool; 4],
}

impl ComboTracker {
    pub fn new(hotkey: Hotkey) -> Self {
        Self {
            hotkey,
            held: [false; 4],
        }
    }

    /// Feed one raw event; true when it completes the combination
    pub fn observe(&mut self, event: &EventType) -> bool {
        match event {
            EventType::KeyPress(key) => {
                if let Some(m) = Modifier::of(*key) {
                    self.held[m.index()] = true;
                    return false;
                }
                *key == self.hotkey.key
                    && self.hotkey.modifiers.iter().all(|m| self.held[m.index()])
            }
            EventType::KeyRelease(key) => {
                if let Some(m) = Modifier::of(*key) {
                    self.held[m.index()] = false;
                }
                false
            }
            _ => false,
        }
    }
}

/// Run the OS key hook on its own thread.
///
/// Each completed combination sends its timestamp; the receiver closes if
/// the hook fails to start.
pub fn spawn_listener(hotkey: Hotkey) -> Result<mpsc::UnboundedReceiver<Instant>, FtError> {
    let (tx, rx) = mpsc::unbounded_channel();
    info!("Listening for {:?} + {:?}", hotkey.modifiers, hotkey.key);

    std::thread::Builder::new()
        .name("hotkey-listener".to_string())
        .spawn(move || {
            let mut tracker = ComboTracker::new(hotkey);
            let result = rdev::listen(move |event| {
                if tracker.observe(&event.event_type) {
                    debug!("Hotkey pressed");
                    // Receiver gone means the app is shutting down
                    let _ = tx.send(Instant::now());
                }
            });
            if let Err(e) = result {
                error!("Keyboard hook stopped: {:?}", e);
            }
        })?;

    Ok(rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker(combo: &str) -> ComboTracker {
        ComboTracker::new(combo.parse().unwrap())
    }

    #[test]
    fn parses_default_combo() {
        let hotkey: Hotkey = "ctrl+c".parse().unwrap();
        assert_eq!(hotkey.modifiers, vec![Modifier::Ctrl]);
        assert_eq!(hotkey.key, Key::KeyC);
    }

    #[test]
    fn parses_mixed_case_and_spaces() {
        let hotkey: Hotkey = " Ctrl + Shift + F5 ".parse().unwrap();
        assert_eq!(hotkey.modifiers, vec![Modifier::Ctrl, Modifier::Shift]);
        assert_eq!(hotkey.key, Key::F5);
    }

    #[test]
    fn rejects_unknown_names() {
        assert!("hyper+c".parse::<Hotkey>().is_err());
        assert!("ctrl+pagedown".parse::<Hotkey>().is_err());
        assert!("".parse::<Hotkey>().is_err());
    }

    #[test]
    fn combo_requires_modifier_held() {
        let mut t = tracker("ctrl+c");
        assert!(!t.observe(&EventType::KeyPress(Key::KeyC)));

        assert!(!t.observe(&EventType::KeyPress(Key::ControlLeft)));
        assert!(t.observe(&EventType::KeyPress(Key::KeyC)));
        assert!(!t.observe(&EventType::KeyRelease(Key::KeyC)));
        // held ctrl, second tap
        assert!(t.observe(&EventType::KeyPress(Key::KeyC)));

        assert!(!t.observe(&EventType::KeyRelease(Key::ControlLeft)));
        assert!(!t.observe(&EventType::KeyPress(Key::KeyC)));
    }

    #[test]
    fn either_side_modifier_counts() {
        let mut t = tracker("ctrl+c");
        t.observe(&EventType::KeyPress(Key::ControlRight));
        assert!(t.observe(&EventType::KeyPress(Key::KeyC)));
    }

    #[test]
    fn other_keys_do_not_match() {
        let mut t = tracker("ctrl+c");
        t.observe(&EventType::KeyPress(Key::ControlLeft));
        assert!(!t.observe(&EventType::KeyPress(Key::KeyV)));
    }
}

//! User configuration: dictionary API settings, keybindings, and persistence.
//!
//! Stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/wordgrid/config.toml` (default `~/.config/wordgrid/config.toml`).
//! `WORDGRID_API_KEY` in the environment wins over the file.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use anyhow::Context;
use tracing::{debug, warn};

use crate::core::client::ClientConfig;

pub const API_KEY_ENV: &str = "WORDGRID_API_KEY";

const DEFAULT_API_BASE_URL: &str = "https://wordsapiv1.p.rapidapi.com";
const DEFAULT_API_HOST: &str = "wordsapiv1.p.rapidapi.com";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

// ───────────────────────────────────────── actions ───────────

/// Configurable actions on the home grid and the details screen.
///
/// While the search bar has focus, printable keys are typed into it instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    OpenDetails,
    Back,
    FocusSearch,
    RefreshWord,
    Quit,
}

impl Action {
    /// Ordered list of all actions (config file order).
    pub const ALL: &[Action] = &[
        Action::MoveUp,
        Action::MoveDown,
        Action::MoveLeft,
        Action::MoveRight,
        Action::OpenDetails,
        Action::Back,
        Action::FocusSearch,
        Action::RefreshWord,
        Action::Quit,
    ];

    fn config_key(self) -> &'static str {
        match self {
            Action::MoveUp => "move_up",
            Action::MoveDown => "move_down",
            Action::MoveLeft => "move_left",
            Action::MoveRight => "move_right",
            Action::OpenDetails => "open_details",
            Action::Back => "back",
            Action::FocusSearch => "focus_search",
            Action::RefreshWord => "refresh_word",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.config_key() == s)
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A single key binding: key code + modifier combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    const MODIFIER_MASK: KeyModifiers = KeyModifiers::CONTROL
        .union(KeyModifiers::ALT)
        .union(KeyModifiers::SHIFT);

    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Only CTRL/ALT/SHIFT are compared; SUPER and friends are ignored.
    pub fn matches(&self, event: KeyEvent) -> bool {
        self.code == event.code
            && (self.modifiers & Self::MODIFIER_MASK) == (event.modifiers & Self::MODIFIER_MASK)
    }

    /// Short label for the status bar (e.g. `"Ctrl+r"`, `"↑"`).
    pub fn display(&self) -> String {
        self.render(true)
    }

    /// Config-file spelling (e.g. `"Ctrl+r"`, `"Up"`).
    fn to_config_string(&self) -> String {
        self.render(false)
    }

    fn render(&self, pretty: bool) -> String {
        let mut s = String::new();
        for (flag, prefix) in [
            (KeyModifiers::CONTROL, "Ctrl+"),
            (KeyModifiers::ALT, "Alt+"),
            (KeyModifiers::SHIFT, "Shift+"),
        ] {
            if self.modifiers.contains(flag) {
                s.push_str(prefix);
            }
        }
        let name = match (self.code, pretty) {
            (KeyCode::Char(' '), _) => "Space".into(),
            (KeyCode::Char(c), _) => c.to_string(),
            (KeyCode::Up, true) => "↑".into(),
            (KeyCode::Down, true) => "↓".into(),
            (KeyCode::Left, true) => "←".into(),
            (KeyCode::Right, true) => "→".into(),
            (KeyCode::Up, false) => "Up".into(),
            (KeyCode::Down, false) => "Down".into(),
            (KeyCode::Left, false) => "Left".into(),
            (KeyCode::Right, false) => "Right".into(),
            (KeyCode::Enter, _) => "Enter".into(),
            (KeyCode::Esc, _) => "Esc".into(),
            (KeyCode::Tab, _) => "Tab".into(),
            (KeyCode::Backspace, _) => "Backspace".into(),
            (KeyCode::Home, _) => "Home".into(),
            (KeyCode::End, _) => "End".into(),
            (KeyCode::PageUp, _) => "PageUp".into(),
            (KeyCode::PageDown, _) => "PageDown".into(),
            (KeyCode::F(n), _) => format!("F{n}"),
            (other, _) => format!("{other:?}"),
        };
        s.push_str(&name);
        s
    }

    /// Parse a key string like `"Ctrl+r"`, `"Up"`, `"q"`, `"Enter"`.
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let (mods, key_part) = match s.rsplit_once('+') {
            // A lone "+" is the plus key itself.
            Some((mods, "")) => (mods.strip_suffix('+').unwrap_or(mods), "+"),
            Some((mods, key)) => (mods, key),
            None => ("", s),
        };

        for part in mods.split('+').filter(|p| !p.is_empty()) {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match key_part.to_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backspace" | "bksp" => KeyCode::Backspace,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            k if k.starts_with('f') && k.len() > 1 => KeyCode::F(k[1..].parse().ok()?),
            _ => {
                let mut chars = key_part.chars();
                let c = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                KeyCode::Char(c)
            }
        };

        Some(KeyBind { code, modifiers })
    }
}

// ───────────────────────────────────────── config ────────────

/// Where the dictionary lives and how to authenticate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub base_url: String,
    pub host: Option<String>,
    pub key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.into(),
            host: Some(DEFAULT_API_HOST.into()),
            key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Application configuration: API settings and keybindings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiSettings,
    pub bindings: HashMap<Action, Vec<KeyBind>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiSettings::default(),
            bindings: Self::default_bindings(),
        }
    }
}

impl AppConfig {
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let ctrl = KeyModifiers::CONTROL;
        let mut m = HashMap::new();

        m.insert(MoveUp, vec![KeyBind::new(Up, n), KeyBind::new(Char('k'), n)]);
        m.insert(MoveDown, vec![KeyBind::new(Down, n), KeyBind::new(Char('j'), n)]);
        m.insert(MoveLeft, vec![KeyBind::new(Left, n), KeyBind::new(Char('h'), n)]);
        m.insert(MoveRight, vec![KeyBind::new(Right, n), KeyBind::new(Char('l'), n)]);
        m.insert(OpenDetails, vec![KeyBind::new(Enter, n)]);
        m.insert(Back, vec![KeyBind::new(Esc, n)]);
        m.insert(FocusSearch, vec![KeyBind::new(Char('/'), n)]);
        m.insert(RefreshWord, vec![KeyBind::new(Char('r'), ctrl), KeyBind::new(Char('r'), n)]);
        m.insert(Quit, vec![KeyBind::new(Char('q'), n)]);

        m
    }

    /// Find the action that matches a key event. When several bindings
    /// match, the one with the most modifiers wins.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .flat_map(|(&action, binds)| binds.iter().map(move |b| (action, b)))
            .filter(|(_, bind)| bind.matches(event))
            .max_by_key(|(_, bind)| bind.modifiers.bits().count_ones())
            .map(|(action, _)| action)
    }

    /// Short display of the first binding only (for the status bar).
    pub fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].display(),
            _ => "?".into(),
        }
    }

    /// Hint line for the home screen's status bar.
    pub fn status_bar_hint(&self) -> String {
        format!(
            "{}: search | {}: new word | {}/{}: browse | {}: details | {}: quit",
            self.short_binding(Action::FocusSearch),
            self.short_binding(Action::RefreshWord),
            self.short_binding(Action::MoveUp),
            self.short_binding(Action::MoveDown),
            self.short_binding(Action::OpenDetails),
            self.short_binding(Action::Quit),
        )
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api.base_url.clone(),
            api_key: self.api.key.clone(),
            api_host: self.api.host.clone(),
            timeout: Duration::from_secs(self.api.timeout_secs),
        }
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk, falling back to defaults, then apply the
    /// environment override.
    pub fn load() -> Self {
        let path = config_path();
        let config = match std::fs::read_to_string(&path) {
            Ok(contents) => {
                debug!(path = %path.display(), "loaded config");
                Self::parse(&contents)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable config, using defaults");
                Self::default()
            }
        };
        config.with_api_key_override(std::env::var(API_KEY_ENV).ok())
    }

    /// Replace the API key when `key` is non-empty.
    pub fn with_api_key_override(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.api.key = Some(key.trim().to_string());
        }
        self
    }

    /// Persist current config to the default location. Returns the path
    /// written.
    pub fn save(&self) -> anyhow::Result<PathBuf> {
        let path = config_path();
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, self.serialise())
            .with_context(|| format!("writing {}", path.display()))?;
        debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Unknown keys and unparseable values are skipped.
    pub fn parse(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            match key {
                "api_base_url" => {
                    if !value.is_empty() {
                        config.api.base_url = value.to_string();
                    }
                    continue;
                }
                "api_host" => {
                    config.api.host = (!value.is_empty()).then(|| value.to_string());
                    continue;
                }
                "api_key" => {
                    config.api.key = (!value.is_empty()).then(|| value.to_string());
                    continue;
                }
                "request_timeout_secs" => {
                    if let Ok(v) = value.parse::<u64>() {
                        config.api.timeout_secs = v.clamp(1, 120);
                    }
                    continue;
                }
                _ => {}
            }

            let Some(action) = Action::from_config_key(key) else {
                continue;
            };

            let parsed: Vec<KeyBind> = value
                .split(',')
                .filter_map(|part| KeyBind::parse(part.trim().trim_matches('"')))
                .collect();
            if !parsed.is_empty() {
                config.bindings.insert(action, parsed);
            }
        }

        config
    }

    fn serialise(&self) -> String {
        let mut lines = vec![
            "# wordgrid configuration".to_string(),
            String::new(),
            "# Dictionary API (WordsAPI-compatible)".to_string(),
            format!("api_base_url = {}", self.api.base_url),
            format!("api_host = {}", self.api.host.as_deref().unwrap_or("")),
            format!("api_key = {}", self.api.key.as_deref().unwrap_or("")),
            format!("request_timeout_secs = {}", self.api.timeout_secs),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            String::new(),
        ];

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(|b| b.to_config_string()).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// `$XDG_CONFIG_HOME/wordgrid/config.toml`.
fn config_path() -> PathBuf {
    xdg_dir("XDG_CONFIG_HOME", ".config").join("config.toml")
}

/// Default log directory: `$XDG_STATE_HOME/wordgrid/logs`.
pub fn default_log_dir() -> PathBuf {
    xdg_dir("XDG_STATE_HOME", ".local/state").join("logs")
}

fn xdg_dir(var: &str, home_fallback: &str) -> PathBuf {
    let base = std::env::var(var)
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(home_fallback)
        });
    base.join(env!("CARGO_PKG_NAME"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn parses_api_settings_and_bindings() {
        let config = AppConfig::parse(
            "# comment\n\
             api_base_url = http://localhost:8080\n\
             api_host =\n\
             api_key = \"abc123\"\n\
             request_timeout_secs = 500\n\
             quit = Ctrl+q, Esc\n\
             refresh_word = F5\n\
             not_an_action = x\n\
             garbage line\n",
        );

        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.api.host, None);
        assert_eq!(config.api.key.as_deref(), Some("abc123"));
        assert_eq!(config.api.timeout_secs, 120);
        assert_eq!(
            config.bindings[&Action::Quit],
            vec![
                KeyBind::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
                KeyBind::new(KeyCode::Esc, KeyModifiers::NONE),
            ]
        );
        assert_eq!(
            config.bindings[&Action::RefreshWord],
            vec![KeyBind::new(KeyCode::F(5), KeyModifiers::NONE)]
        );
        // Untouched actions keep their defaults.
        assert_eq!(
            config.bindings[&Action::MoveUp],
            AppConfig::default_bindings()[&Action::MoveUp]
        );
    }

    #[test]
    fn invalid_bindings_keep_defaults() {
        let config = AppConfig::parse("back = Hyper+x, Nonsense\n");
        assert_eq!(
            config.bindings[&Action::Back],
            AppConfig::default_bindings()[&Action::Back]
        );
    }

    #[test]
    fn serialised_config_parses_back() {
        let mut config = AppConfig::default();
        config.api.key = Some("k".into());
        config.api.timeout_secs = 30;
        config.bindings.insert(
            Action::FocusSearch,
            vec![KeyBind::new(KeyCode::Char('s'), KeyModifiers::ALT)],
        );

        let parsed = AppConfig::parse(&config.serialise());
        assert_eq!(parsed.api, config.api);
        assert_eq!(parsed.bindings, config.bindings);
    }

    #[test]
    fn saved_file_loads_back() {
        let dir = std::env::temp_dir().join(format!("wordgrid-config-{}", std::process::id()));
        let path = dir.join("nested").join("config.toml");
        let mut config = AppConfig::default();
        config.api.base_url = "http://localhost:9000".into();
        config.bindings.insert(
            Action::Quit,
            vec![KeyBind::new(KeyCode::Char('x'), KeyModifiers::CONTROL)],
        );

        config.save_to(&path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();

        assert!(contents.contains("quit = Ctrl+x"));
        let parsed = AppConfig::parse(&contents);
        assert_eq!(parsed.api, config.api);
        assert_eq!(parsed.bindings, config.bindings);
    }

    #[test]
    fn most_specific_binding_wins() {
        let config = AppConfig::default();
        assert_eq!(
            config.match_key(key(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            Some(Action::RefreshWord)
        );
        assert_eq!(
            config.match_key(key(KeyCode::Char('j'), KeyModifiers::NONE)),
            Some(Action::MoveDown)
        );
        assert_eq!(config.match_key(key(KeyCode::Char('z'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn env_key_overrides_file_but_blank_does_not() {
        let config = AppConfig::parse("api_key = from-file\n");
        let same = config.clone().with_api_key_override(Some("  ".into()));
        assert_eq!(same.api.key.as_deref(), Some("from-file"));
        let overridden = config.with_api_key_override(Some("from-env".into()));
        assert_eq!(overridden.api.key.as_deref(), Some("from-env"));
    }

    #[test]
    fn parses_plus_key_and_display_names() {
        assert_eq!(
            KeyBind::parse("Ctrl++"),
            Some(KeyBind::new(KeyCode::Char('+'), KeyModifiers::CONTROL))
        );
        assert_eq!(KeyBind::new(KeyCode::Up, KeyModifiers::ALT).display(), "Alt+↑");
        assert_eq!(KeyBind::new(KeyCode::Up, KeyModifiers::ALT).to_config_string(), "Alt+Up");
    }

    #[test]
    fn client_config_carries_api_settings() {
        let config = AppConfig::parse("api_key = k\nrequest_timeout_secs = 7\n");
        let client = config.client_config();
        assert_eq!(client.api_key.as_deref(), Some("k"));
        assert_eq!(client.timeout, Duration::from_secs(7));
        assert_eq!(client.base_url, DEFAULT_API_BASE_URL);
    }
}

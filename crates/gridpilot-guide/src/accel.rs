#![forbid(unsafe_code)]

//! Keyboard accelerators and their display labels.
//!
//! Accelerators are registered with platform-neutral strings such as
//! `CmdOrCtrl+Shift+ArrowUp`. [`KeyLabelPolicy`] rewrites them for display:
//! modifier names become the platform's symbols and arrow names become arrows.
//! The policy is deterministic given environment variables.

use gridpilot_core::warn;

/// Environment variable to override the modifier style (`mac` or `pc`).
const ENV_KEY_STYLE: &str = "GRIDPILOT_KEY_STYLE";
/// Environment variable to override Unicode arrow labels (`1/0/true/false`).
const ENV_GLYPH_ARROWS: &str = "GRIDPILOT_GLYPH_ARROWS";

/// Which modifier names labels use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStyle {
    /// `⌘`, `⌥`, `⇧`.
    Mac,
    /// `Ctrl`, `Alt`, `Shift`.
    Pc,
}

impl KeyStyle {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mac" | "macos" | "apple" => Some(Self::Mac),
            "pc" | "windows" | "linux" => Some(Self::Pc),
            _ => None,
        }
    }

    /// Style of the host platform.
    #[must_use]
    pub const fn host() -> Self {
        if cfg!(target_os = "macos") {
            Self::Mac
        } else {
            Self::Pc
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mac => "mac",
            Self::Pc => "pc",
        }
    }
}

/// Label rewriting policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyLabelPolicy {
    pub style: KeyStyle,
    /// Render `ArrowUp` as `↑` rather than `Up`.
    pub unicode_arrows: bool,
}

impl Default for KeyLabelPolicy {
    fn default() -> Self {
        Self {
            style: KeyStyle::host(),
            unicode_arrows: true,
        }
    }
}

impl KeyLabelPolicy {
    #[must_use]
    pub const fn new(style: KeyStyle) -> Self {
        Self {
            style,
            unicode_arrows: true,
        }
    }

    /// Detect policy from the process environment.
    #[must_use]
    pub fn detect() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Detect policy using a custom environment lookup (for tests).
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let style = get_env(ENV_KEY_STYLE)
            .and_then(|v| KeyStyle::parse(&v))
            .unwrap_or_else(KeyStyle::host);
        let unicode_arrows = get_env(ENV_GLYPH_ARROWS)
            .and_then(|v| parse_bool(&v))
            .unwrap_or(true);
        Self {
            style,
            unicode_arrows,
        }
    }

    /// Label of the primary modifier (`CmdOrCtrl`).
    #[must_use]
    pub const fn modifier_key(&self) -> &'static str {
        match self.style {
            KeyStyle::Mac => "⌘",
            KeyStyle::Pc => "Ctrl",
        }
    }

    #[must_use]
    pub const fn alt_key(&self) -> &'static str {
        match self.style {
            KeyStyle::Mac => "⌥",
            KeyStyle::Pc => "Alt",
        }
    }

    #[must_use]
    pub const fn shift_key(&self) -> &'static str {
        match self.style {
            KeyStyle::Mac => "⇧",
            KeyStyle::Pc => "Shift",
        }
    }

    /// Rewrite an accelerator for display.
    ///
    /// Each rule rewrites its first match only.
    #[must_use]
    pub fn format(&self, accelerator: &str) -> String {
        let mut label = accelerator.replacen("CmdOrCtrl", self.modifier_key(), 1);
        label = replace_first_ignore_case(&label, "Alt+", &format!("{}+", self.alt_key()));
        label = replace_first_ignore_case(&label, "Shift+", &format!("{}+", self.shift_key()));
        for (name, arrow, plain) in [
            ("ArrowUp", "↑", "Up"),
            ("ArrowRight", "→", "Right"),
            ("ArrowDown", "↓", "Down"),
            ("ArrowLeft", "←", "Left"),
        ] {
            let to = if self.unicode_arrows { arrow } else { plain };
            label = label.replacen(name, to, 1);
        }
        label
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Replace the first ASCII-case-insensitive match of `from`.
fn replace_first_ignore_case(haystack: &str, from: &str, to: &str) -> String {
    let found = haystack
        .char_indices()
        .map(|(i, _)| i)
        .find(|&i| {
            haystack
                .get(i..i + from.len())
                .is_some_and(|s| s.eq_ignore_ascii_case(from))
        });
    match found {
        Some(i) => format!("{}{}{}", &haystack[..i], to, &haystack[i + from.len()..]),
        None => haystack.to_string(),
    }
}

/// One registered binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accelerator {
    pub category: String,
    pub name: String,
    /// Platform-neutral key string; `None` for menu-only actions.
    pub accelerator: Option<String>,
}

/// Bindings in registration order, keyed by accelerator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcceleratorMap {
    bindings: Vec<Accelerator>,
}

impl AcceleratorMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Grid client bindings plus the synth bridge bindings.
    #[must_use]
    pub fn standard() -> Self {
        let mut map = Self::new();
        for (category, name, accel) in CLIENT_BINDINGS {
            map.set(*category, *name, *accel);
        }
        map.install_bridge();
        map
    }

    /// Register the synth bridge bindings.
    pub fn install_bridge(&mut self) {
        self.set("View", "Hide Pilot", "CmdOrCtrl+H");
        self.set("File", "Load Random Example", "CmdOrCtrl+R");
        self.set("File", "Share Link", "CmdOrCtrl+#");
    }

    /// Bind `accelerator` to `name` under `category`.
    ///
    /// Rebinding an accelerator replaces the earlier binding in place.
    pub fn set(
        &mut self,
        category: impl Into<String>,
        name: impl Into<String>,
        accelerator: impl Into<String>,
    ) {
        let binding = Accelerator {
            category: category.into(),
            name: name.into(),
            accelerator: Some(accelerator.into()),
        };
        let existing = self
            .bindings
            .iter_mut()
            .find(|b| b.accelerator.is_some() && b.accelerator == binding.accelerator);
        match existing {
            Some(old) => {
                warn!(
                    accelerator = ?binding.accelerator,
                    old = %old.name,
                    new = %binding.name,
                    "overwriting accelerator"
                );
                *old = binding;
            }
            None => self.bindings.push(binding),
        }
    }

    /// Register an action without a key.
    pub fn set_unbound(&mut self, category: impl Into<String>, name: impl Into<String>) {
        self.bindings.push(Accelerator {
            category: category.into(),
            name: name.into(),
            accelerator: None,
        });
    }

    /// Bindings grouped by category, categories in first-seen order.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&str, Vec<&Accelerator>)> {
        let mut groups: Vec<(&str, Vec<&Accelerator>)> = Vec::new();
        for binding in &self.bindings {
            match groups.iter_mut().find(|(c, _)| *c == binding.category) {
                Some((_, items)) => items.push(binding),
                None => groups.push((binding.category.as_str(), vec![binding])),
            }
        }
        groups
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Grid client bindings, in registration order.
const CLIENT_BINDINGS: &[(&str, &str, &str)] = &[
    ("File", "New", "Escape"),
    ("File", "Open", "CmdOrCtrl+O"),
    ("File", "Save", "CmdOrCtrl+S"),
    ("Edit", "Undo", "CmdOrCtrl+Z"),
    ("Edit", "Redo", "CmdOrCtrl+Shift+Z"),
    ("Edit", "Cut", "CmdOrCtrl+X"),
    ("Edit", "Copy", "CmdOrCtrl+C"),
    ("Edit", "Paste", "CmdOrCtrl+V"),
    ("Edit", "Select All", "CmdOrCtrl+A"),
    ("Move", "Move North", "ArrowUp"),
    ("Move", "Move East", "ArrowRight"),
    ("Move", "Move South", "ArrowDown"),
    ("Move", "Move West", "ArrowLeft"),
    ("Move", "Leap North", "CmdOrCtrl+ArrowUp"),
    ("Move", "Leap East", "CmdOrCtrl+ArrowRight"),
    ("Move", "Leap South", "CmdOrCtrl+ArrowDown"),
    ("Move", "Leap West", "CmdOrCtrl+ArrowLeft"),
    ("Select", "Select North", "Shift+ArrowUp"),
    ("Select", "Select East", "Shift+ArrowRight"),
    ("Select", "Select South", "Shift+ArrowDown"),
    ("Select", "Select West", "Shift+ArrowLeft"),
    ("Select", "Drag North", "Alt+ArrowUp"),
    ("Select", "Drag East", "Alt+ArrowRight"),
    ("Select", "Drag South", "Alt+ArrowDown"),
    ("Select", "Drag West", "Alt+ArrowLeft"),
    ("Play", "Play/Pause", "Space"),
    ("Play", "Frame By Frame", "CmdOrCtrl+F"),
    ("Play", "Reset Frame", "CmdOrCtrl+Shift+R"),
    ("Play", "Incr. Speed", "CmdOrCtrl+>"),
    ("Play", "Decr. Speed", "CmdOrCtrl+<"),
    ("View", "Toggle Guide", "CmdOrCtrl+G"),
    ("View", "Zoom In", "CmdOrCtrl+="),
    ("View", "Zoom Out", "CmdOrCtrl+-"),
];

use leptos::*;

use crate::utils::storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_class(&self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }
}

/// Saved selection wins; otherwise the system preference decides.
fn initial_theme() -> Theme {
    if let Ok(Some(saved)) = storage::get_item(storage::COLOR_MODE_KEY) {
        if let Some(theme) = Theme::parse(&saved) {
            return theme;
        }
    }
    system_theme()
}

#[cfg(target_arch = "wasm32")]
fn system_theme() -> Theme {
    let prefers_dark = web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .map(|media| media.matches())
        .unwrap_or(false);
    if prefers_dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn system_theme() -> Theme {
    Theme::Light
}

#[cfg(target_arch = "wasm32")]
fn apply_to_dom(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    {
        let class_list = root.class_list();
        let _ = class_list.remove_1("dark");
        if !theme.as_class().is_empty() {
            let _ = class_list.add_1(theme.as_class());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_to_dom(_theme: Theme) {}

#[derive(Clone, Copy)]
pub struct ThemeState {
    pub theme: RwSignal<Theme>,
}

impl ThemeState {
    pub fn new() -> Self {
        Self {
            theme: create_rw_signal(initial_theme()),
        }
    }

    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        let _ = storage::set_item(storage::COLOR_MODE_KEY, theme.as_str());
        apply_to_dom(theme);
    }

    pub fn toggle(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }

    pub fn current(&self) -> ReadSignal<Theme> {
        self.theme.read_only()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_theme() -> ThemeState {
    let state = ThemeState::new();
    provide_context(state);
    apply_to_dom(state.theme.get_untracked());
    state
}

pub fn use_theme() -> ThemeState {
    use_context::<ThemeState>().unwrap_or_else(ThemeState::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn toggled_flips_between_light_and_dark() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn parse_round_trips() {
        assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
        assert_eq!(Theme::parse(Theme::Light.as_str()), Some(Theme::Light));
        assert_eq!(Theme::parse("solarized"), None);
    }

    #[test]
    fn set_theme_persists_the_selection() {
        with_runtime(|| {
            let state = ThemeState::new();
            state.set_theme(Theme::Dark);
            assert_eq!(
                storage::get_item(storage::COLOR_MODE_KEY)
                    .unwrap()
                    .as_deref(),
                Some("dark")
            );
            assert_eq!(state.theme.get_untracked(), Theme::Dark);
        });
    }

    #[test]
    fn saved_selection_wins_over_system_preference() {
        storage::set_item(storage::COLOR_MODE_KEY, "dark").unwrap();
        assert_eq!(initial_theme(), Theme::Dark);
        storage::set_item(storage::COLOR_MODE_KEY, "garbage").unwrap();
        assert_eq!(initial_theme(), system_theme());
    }

    #[test]
    fn toggle_twice_returns_to_start() {
        with_runtime(|| {
            let state = ThemeState::new();
            let start = state.theme.get_untracked();
            state.toggle();
            state.toggle();
            assert_eq!(state.theme.get_untracked(), start);
        });
    }
}

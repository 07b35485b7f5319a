use crate::deps::EngineDeps;
use crate::usecases::*;

/// Use cases accessor for the engine runtime.
///
/// 用例访问器：端口到用例的连接集中在此处，用例本身不依赖 `EngineDeps`。
pub struct UseCases<'a> {
    deps: &'a EngineDeps,
}

impl<'a> UseCases<'a> {
    pub fn new(deps: &'a EngineDeps) -> Self {
        Self { deps }
    }

    pub fn load_history(&self) -> LoadHistory {
        LoadHistory::new(self.deps.clipboard.clone(), self.deps.registry.clone())
    }

    pub fn capture_clipboard(&self) -> CaptureClipboard {
        CaptureClipboard::new(
            self.deps.clipboard.clone(),
            self.deps.registry.clone(),
            self.deps.notifier.clone(),
        )
    }

    pub fn select_entry(&self) -> SelectEntry {
        SelectEntry::new(self.deps.clipboard.clone())
    }

    pub fn navigate_history(&self) -> NavigateHistory {
        NavigateHistory::new(
            self.deps.clipboard.clone(),
            self.deps.notifier.clone(),
            self.deps.scheduler.clone(),
        )
    }

    pub fn complete_delayed_selection(&self) -> CompleteDelayedSelection {
        CompleteDelayedSelection::new(self.deps.clipboard.clone())
    }

    pub fn toggle_favorite(&self) -> ToggleFavorite {
        ToggleFavorite::new(self.deps.registry.clone())
    }

    pub fn delete_entry(&self) -> DeleteEntry {
        DeleteEntry::new(self.deps.clipboard.clone(), self.deps.registry.clone())
    }

    pub fn clear_history(&self) -> ClearHistory {
        ClearHistory::new(self.deps.registry.clone(), self.deps.notifier.clone())
    }

    pub fn cancel_capture(&self) -> CancelCapture {
        CancelCapture::new(self.deps.clipboard.clone(), self.deps.registry.clone())
    }

    pub fn set_private_mode(&self) -> SetPrivateMode {
        SetPrivateMode::new(self.deps.clipboard.clone())
    }

    pub fn search_history(&self) -> SearchHistory {
        SearchHistory::new()
    }

    pub fn apply_settings(&self) -> ApplySettings {
        ApplySettings::new(self.deps.clipboard.clone(), self.deps.registry.clone())
    }

    pub fn reload_settings(&self) -> ReloadSettings {
        ReloadSettings::new(self.deps.settings.clone(), self.apply_settings())
    }

    pub fn update_settings(&self) -> UpdateSettings {
        UpdateSettings::new(self.deps.settings.clone(), self.apply_settings())
    }
}

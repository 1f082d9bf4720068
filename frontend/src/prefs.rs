//! 界面偏好上下文
//!
//! 深色模式与移动端菜单开关。原型把这两个标志在每个页面里
//! 各自声明一遍；这里收敛为一个全局 Context，导航栏与页面共用。

use leptos::prelude::*;

use crate::web::LocalStorage;

const STORAGE_THEME_KEY: &str = "dreams_theme";

/// 界面偏好
#[derive(Clone, Copy)]
pub struct PrefsContext {
    pub dark_mode: RwSignal<bool>,
    pub menu_open: RwSignal<bool>,
}

impl PrefsContext {
    /// 创建偏好上下文；主题从 LocalStorage 恢复，默认深色
    pub fn new() -> Self {
        let dark = !matches!(LocalStorage::get(STORAGE_THEME_KEY).as_deref(), Some("light"));
        Self {
            dark_mode: RwSignal::new(dark),
            menu_open: RwSignal::new(false),
        }
    }

    pub fn toggle_dark_mode(&self) {
        let next = !self.dark_mode.get_untracked();
        self.dark_mode.set(next);
        LocalStorage::set(STORAGE_THEME_KEY, if next { "dark" } else { "light" });
    }

    pub fn toggle_menu(&self) {
        self.menu_open.set(!self.menu_open.get_untracked());
    }

    /// daisyUI 主题名，挂在根元素的 data-theme 上
    pub fn theme(&self) -> Signal<&'static str> {
        let dark_mode = self.dark_mode;
        Signal::derive(move || if dark_mode.get() { "dark" } else { "light" })
    }
}

impl Default for PrefsContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取界面偏好
pub fn use_prefs() -> PrefsContext {
    use_context::<PrefsContext>().expect("PrefsContext should be provided")
}

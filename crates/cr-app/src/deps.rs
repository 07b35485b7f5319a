//! # Engine Dependencies / 引擎依赖
//!
//! Parameter grouping for engine construction. No build steps, no defaults.
//! 仅用于参数打包，无构建步骤，无默认值。

use std::sync::Arc;

use cr_core::ports::*;

/// Ports the engine needs, all required.
///
/// 引擎所需的全部端口。
#[derive(Clone)]
pub struct EngineDeps {
    // Clipboard / 剪贴板
    pub clipboard: Arc<dyn ClipboardPort>,

    // Persistence / 持久化
    pub registry: Arc<dyn RegistryPort>,
    pub settings: Arc<dyn SettingsPort>,

    // Outbound / 对外
    pub notifier: Arc<dyn NotificationPort>,

    // Timers / 定时器
    pub scheduler: Arc<dyn SchedulerPort>,
}

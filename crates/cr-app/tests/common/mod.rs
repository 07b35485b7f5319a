//! Shared fixtures for engine integration tests
//! 引擎集成测试的共享夹具

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use cr_app::{EngineDeps, EngineHandle, EngineRuntime};
use cr_core::ports::*;
use cr_core::registry::{PersistedRecord, RegistryRecord};
use cr_core::{HistoryView, Settings};
use cr_infra::TokioScheduler;
use tokio::task::JoinHandle;

static TRACING: Once = Once::new();

/// Route engine logs to the test writer; `RUST_LOG` narrows them.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// In-memory clipboard that can optionally report ownership changes.
pub struct TestClipboard {
    text: Mutex<Option<String>>,
    writes: Mutex<Vec<String>>,
    ownership_supported: bool,
    sink: Mutex<Option<OwnershipSink>>,
    watches: AtomicUsize,
    cancels: Arc<AtomicUsize>,
}

impl TestClipboard {
    pub fn with_ownership() -> Self {
        Self::new(true)
    }

    pub fn polling_only() -> Self {
        Self::new(false)
    }

    fn new(ownership_supported: bool) -> Self {
        Self {
            text: Mutex::new(None),
            writes: Mutex::new(Vec::new()),
            ownership_supported,
            sink: Mutex::new(None),
            watches: AtomicUsize::new(0),
            cancels: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Another application copies `text`.
    pub fn copy_externally(&self, text: &str) {
        *self.text.lock().unwrap() = Some(text.to_string());
    }

    /// Another application copies `text` and the platform reports it.
    pub fn copy_and_signal(&self, text: &str) {
        self.copy_externally(text);
        self.signal(SelectionKind::Clipboard);
    }

    pub fn signal(&self, kind: SelectionKind) {
        if let Some(sink) = self.sink.lock().unwrap().as_ref() {
            let _ = sink.send(kind);
        }
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }

    pub fn current(&self) -> Option<String> {
        self.text.lock().unwrap().clone()
    }

    pub fn watches(&self) -> usize {
        self.watches.load(Ordering::SeqCst)
    }

    pub fn cancels(&self) -> usize {
        self.cancels.load(Ordering::SeqCst)
    }
}

impl ClipboardPort for TestClipboard {
    fn read_text(&self) -> Result<Option<String>> {
        Ok(self.current())
    }

    fn write_text(&self, text: &str) -> Result<()> {
        *self.text.lock().unwrap() = Some(text.to_string());
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }

    fn watch_ownership(&self, sink: OwnershipSink) -> Result<CancelHandle> {
        if !self.ownership_supported {
            return Err(anyhow!("no selection owner notifications on this platform"));
        }
        *self.sink.lock().unwrap() = Some(sink);
        self.watches.fetch_add(1, Ordering::SeqCst);
        let cancels = self.cancels.clone();
        Ok(CancelHandle::new(move || {
            cancels.fetch_add(1, Ordering::SeqCst);
        }))
    }
}

#[derive(Default)]
pub struct MemoryRegistry {
    pub records: Mutex<Vec<PersistedRecord>>,
    pub saves: AtomicUsize,
}

impl MemoryRegistry {
    pub fn seeded(contents: &[&str]) -> Self {
        let registry = Self::default();
        *registry.records.lock().unwrap() = contents
            .iter()
            .map(|c| PersistedRecord::Structured(RegistryRecord::new(*c, false)))
            .collect();
        registry
    }

    pub fn snapshot(&self) -> Vec<RegistryRecord> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .cloned()
            .map(PersistedRecord::normalize)
            .collect()
    }
}

#[async_trait]
impl RegistryPort for MemoryRegistry {
    async fn load(&self) -> Result<Vec<PersistedRecord>> {
        Ok(self.records.lock().unwrap().clone())
    }

    async fn save(&self, records: &[RegistryRecord]) -> Result<()> {
        *self.records.lock().unwrap() = records.iter().cloned().map(Into::into).collect();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }

    /// Entry referenced by the most recent undo action.
    pub fn last_undo(&self) -> Option<cr_core::EntryId> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find_map(|n| match &n.action {
                Some(NotificationAction::UndoCapture { entry }) => Some(entry.clone()),
                None => None,
            })
    }
}

impl NotificationPort for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.sent.lock().unwrap().push(notification);
    }
}

#[derive(Default)]
pub struct MemorySettings {
    pub stored: Mutex<Settings>,
}

#[async_trait]
impl SettingsPort for MemorySettings {
    async fn load(&self) -> Result<Settings> {
        Ok(self.stored.lock().unwrap().clone())
    }

    async fn save(&self, settings: &Settings) -> Result<()> {
        *self.stored.lock().unwrap() = settings.clone();
        Ok(())
    }
}

pub struct TestEngine {
    pub clipboard: Arc<TestClipboard>,
    pub registry: Arc<dyn RegistryPort>,
    pub notifier: Arc<RecordingNotifier>,
    pub settings: Arc<MemorySettings>,
    pub handle: EngineHandle,
    pub task: JoinHandle<()>,
}

impl TestEngine {
    /// Spawn an engine on the current runtime.
    pub fn start(
        clipboard: TestClipboard,
        registry: Arc<dyn RegistryPort>,
        settings: Settings,
    ) -> Self {
        init_tracing();

        let clipboard = Arc::new(clipboard);
        let notifier = Arc::new(RecordingNotifier::default());
        let settings_port = Arc::new(MemorySettings {
            stored: Mutex::new(settings.clone()),
        });
        let (scheduler, task_rx) = TokioScheduler::channel();

        let deps = EngineDeps {
            clipboard: clipboard.clone(),
            registry: registry.clone(),
            settings: settings_port.clone(),
            notifier: notifier.clone(),
            scheduler: Arc::new(scheduler),
        };
        let (runtime, handle) = EngineRuntime::new(deps, settings, task_rx);
        let task = tokio::spawn(runtime.run());

        Self {
            clipboard,
            registry,
            notifier,
            settings: settings_port,
            handle,
            task,
        }
    }

    pub fn view(&self) -> HistoryView {
        self.handle.view()
    }

    /// Contents of the rows in display order.
    pub fn contents(&self) -> Vec<String> {
        self.view().rows.into_iter().map(|row| row.label).collect()
    }

    pub fn selected_label(&self) -> Option<String> {
        self.view()
            .rows
            .into_iter()
            .find(|row| row.selected)
            .map(|row| row.label)
    }

    /// Wait until startup has installed the ownership listener.
    pub async fn until_listening(&self) {
        while self.clipboard.watches() == 0 {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
    }

    pub async fn shutdown(self) {
        self.handle.shutdown().await.unwrap();
        self.task.await.unwrap();
    }
}

/// Let the engine drain everything it has been sent.
///
/// Tests run with paused time, so the clock only moves once every task is
/// idle.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(1)).await;
}

// ============================================================================
// UPLOAD SIMULATOR - Subida y procesado simulados, sin I/O real
// ============================================================================
// Por archivo:
//   uploading --(random walk, un tick cada N ms)--> progress = 100
//   processing --(retardo fijo)--> completed + resumen de extracción
// `error` existe en el modelo pero nunca se produce aquí.
//
// Cada entrada tiene como mucho una tarea viva (el intervalo mientras sube,
// el timeout mientras procesa). Eliminar la entrada o soltar el simulador
// suelta esa tarea y con ella el timer.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use crate::config::{UploadConfig, CONFIG};
use crate::models::{FileHandle, FileId, TickOutcome, UploadedFile, EXTRACTION_SUMMARY};
use crate::services::progress::{ProgressSource, RandomProgress};
use crate::services::scheduler::{GlooScheduler, Scheduler, TaskHandle};
use crate::state::{ReactiveState, SubscriptionId};
use crate::stores::UploadStore;

struct Shared {
    state: ReactiveState<UploadStore>,
    tasks: RefCell<HashMap<FileId, TaskHandle>>,
    scheduler: Rc<dyn Scheduler>,
    progress: RefCell<Box<dyn ProgressSource>>,
    config: UploadConfig,
}

pub struct UploadSimulator {
    shared: Rc<Shared>,
}

impl UploadSimulator {
    pub fn new(
        config: UploadConfig,
        scheduler: Rc<dyn Scheduler>,
        progress: Box<dyn ProgressSource>,
    ) -> Self {
        Self {
            shared: Rc::new(Shared {
                state: ReactiveState::default(),
                tasks: RefCell::new(HashMap::new()),
                scheduler,
                progress: RefCell::new(progress),
                config,
            }),
        }
    }

    /// Simulador del navegador: timers de gloo e incrementos aleatorios
    pub fn browser() -> Self {
        let config = CONFIG.upload.clone();
        let progress = RandomProgress::new(config.max_increment);
        Self::new(config, Rc::new(GlooScheduler), Box::new(progress))
    }

    pub fn config(&self) -> &UploadConfig {
        &self.shared.config
    }

    pub fn files(&self) -> Vec<UploadedFile> {
        self.shared.state.with(|store| store.files().to_vec())
    }

    pub fn get(&self, id: FileId) -> Option<UploadedFile> {
        self.shared.state.with(|store| store.get(id).cloned())
    }

    /// Número de timers vivos
    pub fn active_tasks(&self) -> usize {
        self.shared.tasks.borrow().len()
    }

    pub fn subscribe<F: Fn() + 'static>(&self, callback: F) -> SubscriptionId {
        self.shared.state.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.shared.state.unsubscribe(id)
    }

    /// Registra los archivos seleccionados y arranca su simulación.
    /// Tipo y tamaño solo generan avisos en el log: todo se acepta.
    pub fn select(&self, handles: Vec<FileHandle>) -> Vec<FileId> {
        if handles.is_empty() {
            return Vec::new();
        }

        let config = &self.shared.config;
        for handle in &handles {
            if !handle.matches_extension(&config.accepted_extension) {
                log::warn!("⚠️ {} no parece un {}, se acepta igualmente", handle.name, config.accepted_extension);
            }
            if handle.exceeds(config.advisory_max_bytes) {
                log::warn!("⚠️ {} ocupa {:.2} MB, por encima del límite orientativo", handle.name, handle.size_mb());
            }
        }

        let ids = self.shared.state.update(|store| store.add(handles));
        for id in &ids {
            Shared::start_upload(&self.shared, *id);
        }
        log::info!("📤 {} archivo(s) en subida", ids.len());
        ids
    }

    /// Elimina la entrada y cancela su timer pendiente, si lo hay
    pub fn remove(&self, id: FileId) -> Option<UploadedFile> {
        let task = self.shared.tasks.borrow_mut().remove(&id);
        let had_task = task.is_some();
        drop(task);

        let removed = self.shared.state.update(|store| store.remove(id));
        if let Some(file) = &removed {
            log::info!("🗑️ {} eliminado (timer cancelado: {})", file.file.name, had_task);
        }
        removed
    }

    /// Cancela todos los timers. Las entradas se quedan como estén.
    pub fn shutdown(&self) {
        let tasks: Vec<TaskHandle> = self.shared.tasks.borrow_mut().drain().map(|(_, t)| t).collect();
        if !tasks.is_empty() {
            log::debug!("⏹️ Cancelando {} timer(s) de subida", tasks.len());
        }
    }
}

impl Shared {
    fn start_upload(shared: &Rc<Self>, id: FileId) {
        let weak: Weak<Self> = Rc::downgrade(shared);
        let handle = shared.scheduler.every(
            shared.config.tick_interval_ms,
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    Shared::on_tick(&shared, id);
                }
            }),
        );
        shared.tasks.borrow_mut().insert(id, handle);
    }

    fn on_tick(shared: &Rc<Self>, id: FileId) {
        let increment = shared.progress.borrow_mut().next_increment();
        match shared.state.update(|store| store.advance(id, increment)) {
            Some(TickOutcome::Advanced(_)) => {}
            Some(TickOutcome::Reached) => {
                log::info!("✅ Subida completa ({}), procesando...", id);
                // Sustituir el intervalo por el timeout de procesado
                let interval = shared.tasks.borrow_mut().remove(&id);
                drop(interval);
                Shared::start_processing(shared, id);
            }
            Some(TickOutcome::Ignored) | None => {
                // Entrada eliminada o fuera de uploading: el intervalo sobra
                let stale = shared.tasks.borrow_mut().remove(&id);
                drop(stale);
            }
        }
    }

    fn start_processing(shared: &Rc<Self>, id: FileId) {
        let weak: Weak<Self> = Rc::downgrade(shared);
        let handle = shared.scheduler.after(
            shared.config.processing_delay_ms,
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    Shared::on_processed(&shared, id);
                }
            }),
        );
        shared.tasks.borrow_mut().insert(id, handle);
    }

    fn on_processed(shared: &Rc<Self>, id: FileId) {
        let done = shared.tasks.borrow_mut().remove(&id);
        drop(done);
        if shared.state.update(|store| store.complete(id, EXTRACTION_SUMMARY)) {
            log::info!("🎉 Procesado completado ({})", id);
        }
    }
}

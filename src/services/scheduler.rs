// ============================================================================
// SCHEDULER - Timers con handle de cancelación
// ============================================================================
// Todo timer programado devuelve un `TaskHandle`. Soltar el handle cancela el
// timer, de modo que quien guarda el handle decide cuánto vive la tarea.
// ============================================================================

use std::any::Any;

use gloo_timers::callback::{Interval, Timeout};

/// Handle de una tarea programada. Al hacer drop se cancela.
#[must_use = "soltar el handle cancela la tarea"]
pub struct TaskHandle {
    _guard: Box<dyn Any>,
}

impl TaskHandle {
    pub fn new<G: 'static>(guard: G) -> Self {
        Self { _guard: Box::new(guard) }
    }

    /// Cancela explícitamente (equivale a hacer drop)
    pub fn cancel(self) {}
}

impl std::fmt::Debug for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("TaskHandle")
    }
}

pub trait Scheduler {
    /// Ejecuta `task` cada `period_ms` hasta que se suelte el handle
    fn every(&self, period_ms: u32, task: Box<dyn FnMut()>) -> TaskHandle;

    /// Ejecuta `task` una vez tras `delay_ms`, salvo que se suelte antes el handle
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle;
}

/// Scheduler del navegador sobre `setInterval` / `setTimeout`.
/// `Interval` y `Timeout` de gloo ya se cancelan en su `Drop`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    fn every(&self, period_ms: u32, task: Box<dyn FnMut()>) -> TaskHandle {
        TaskHandle::new(Interval::new(period_ms, task))
    }

    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle {
        TaskHandle::new(Timeout::new(delay_ms, task))
    }
}

/// Scheduler con reloj virtual para los tests: el tiempo solo avanza con
/// `advance`, y las tareas vencidas se ejecutan en orden (vencimiento, alta).
#[cfg(test)]
pub mod manual {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::{Scheduler, TaskHandle};

    enum Action {
        Repeat(u32, Box<dyn FnMut()>),
        Once(Box<dyn FnOnce()>),
    }

    struct Task {
        due: u64,
        seq: u64,
        cancelled: Rc<Cell<bool>>,
        action: Action,
    }

    struct CancelOnDrop(Rc<Cell<bool>>);

    impl Drop for CancelOnDrop {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    #[derive(Default)]
    struct Inner {
        now: u64,
        seq: u64,
        tasks: Vec<Task>,
    }

    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        inner: Rc<RefCell<Inner>>,
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now(&self) -> u64 {
            self.inner.borrow().now
        }

        /// Tareas vivas (programadas y no canceladas)
        pub fn pending(&self) -> usize {
            self.inner
                .borrow()
                .tasks
                .iter()
                .filter(|t| !t.cancelled.get())
                .count()
        }

        fn push(&self, delay_ms: u32, action: Action) -> TaskHandle {
            let cancelled = Rc::new(Cell::new(false));
            let mut inner = self.inner.borrow_mut();
            let seq = inner.seq;
            inner.seq += 1;
            let due = inner.now + u64::from(delay_ms);
            inner.tasks.push(Task {
                due,
                seq,
                cancelled: cancelled.clone(),
                action,
            });
            TaskHandle::new(CancelOnDrop(cancelled))
        }

        fn take_next(&self, until: u64) -> Option<Task> {
            let mut inner = self.inner.borrow_mut();
            inner.tasks.retain(|t| !t.cancelled.get());
            let index = inner
                .tasks
                .iter()
                .enumerate()
                .filter(|(_, t)| t.due <= until)
                .min_by_key(|(_, t)| (t.due, t.seq))
                .map(|(i, _)| i)?;
            let task = inner.tasks.remove(index);
            inner.now = task.due;
            Some(task)
        }

        /// Avanza el reloj `ms` milisegundos ejecutando lo que venza
        pub fn advance(&self, ms: u64) {
            let until = self.now() + ms;
            while let Some(task) = self.take_next(until) {
                match task.action {
                    Action::Once(f) => f(),
                    Action::Repeat(period, mut f) => {
                        f();
                        if !task.cancelled.get() {
                            let mut inner = self.inner.borrow_mut();
                            inner.tasks.push(Task {
                                due: task.due + u64::from(period.max(1)),
                                seq: task.seq,
                                cancelled: task.cancelled,
                                action: Action::Repeat(period, f),
                            });
                        }
                    }
                }
            }
            self.inner.borrow_mut().now = until;
        }
    }

    impl Scheduler for ManualScheduler {
        fn every(&self, period_ms: u32, task: Box<dyn FnMut()>) -> TaskHandle {
            self.push(period_ms, Action::Repeat(period_ms, task))
        }

        fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle {
            self.push(delay_ms, Action::Once(task))
        }
    }
}

use yew::prelude::*;

use crate::models::{FileHandle, FileId, UploadedFile};
use crate::services::UploadSimulator;

pub struct UseUploadSimulatorHandle {
    pub files: Vec<UploadedFile>,
    pub select: Callback<Vec<FileHandle>>,
    pub remove: Callback<FileId>,
}

/// Un simulador por montaje de la página de subida. Al desmontar se cancelan
/// todos sus timers.
#[hook]
pub fn use_upload_simulator() -> UseUploadSimulatorHandle {
    let simulator = use_memo((), |_| UploadSimulator::browser());
    let trigger = use_force_update();

    // Re-render en cada cambio del simulador + limpieza al desmontar
    {
        let simulator = simulator.clone();
        use_effect_with((), move |_| {
            let subscription = simulator.subscribe(move || trigger.force_update());

            move || {
                simulator.unsubscribe(subscription);
                simulator.shutdown();
                log::debug!("⏹️ Página de subida desmontada, timers liberados");
            }
        });
    }

    let select = {
        let simulator = simulator.clone();
        Callback::from(move |handles: Vec<FileHandle>| {
            simulator.select(handles);
        })
    };

    let remove = {
        let simulator = simulator.clone();
        Callback::from(move |id: FileId| {
            simulator.remove(id);
        })
    };

    UseUploadSimulatorHandle {
        files: simulator.files(),
        select,
        remove,
    }
}

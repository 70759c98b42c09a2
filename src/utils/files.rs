use web_sys::FileList;

use crate::models::FileHandle;

/// Convierte la selección del input / drop en handles. No se lee el contenido.
pub fn file_handles(list: Option<FileList>) -> Vec<FileHandle> {
    let Some(list) = list else {
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| FileHandle::new(&file.name(), file.size().max(0.0) as u64, &file.type_()))
        .collect()
}

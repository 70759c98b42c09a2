// ============================================================================
// UPLOAD STORE - Entradas de la página de subida
// ============================================================================
// Todas las operaciones van por FileId; el orden de la lista es el orden de
// selección y solo cambia al eliminar.
// ============================================================================

use crate::models::{FileHandle, FileId, TickOutcome, UploadedFile};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadStore {
    files: Vec<UploadedFile>,
}

impl UploadStore {
    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn get(&self, id: FileId) -> Option<&UploadedFile> {
        self.files.iter().find(|f| f.id == id)
    }

    pub fn index_of(&self, id: FileId) -> Option<usize> {
        self.files.iter().position(|f| f.id == id)
    }

    /// Añade al final una entrada por archivo y devuelve sus ids en orden
    pub fn add<I>(&mut self, handles: I) -> Vec<FileId>
    where
        I: IntoIterator<Item = FileHandle>,
    {
        let start = self.files.len();
        self.files.extend(handles.into_iter().map(UploadedFile::new));
        self.files[start..].iter().map(|f| f.id).collect()
    }

    pub fn remove(&mut self, id: FileId) -> Option<UploadedFile> {
        let index = self.index_of(id)?;
        Some(self.files.remove(index))
    }

    /// None si la entrada ya no existe (p. ej. eliminada entre ticks)
    pub fn advance(&mut self, id: FileId, increment: f64) -> Option<TickOutcome> {
        self.files
            .iter_mut()
            .find(|f| f.id == id)
            .map(|f| f.advance(increment))
    }

    pub fn complete(&mut self, id: FileId, summary: &str) -> bool {
        self.files
            .iter_mut()
            .find(|f| f.id == id)
            .map(|f| f.complete(summary))
            .unwrap_or(false)
    }
}

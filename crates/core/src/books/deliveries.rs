//! Delivery notes; statuses are re-derived on every load and save.

use rotafin_shared::types::NoteId;

use super::invoicing::split;
use super::{Books, BooksError, ImportSummary};
use crate::clock::Clock;
use crate::import::{Table, import_rows};
use crate::notes::{Note, NoteInput, NoteService};
use crate::store::KeyValueStore;

impl<S: KeyValueStore, C: Clock> Books<S, C> {
    /// Stored notes with statuses derived against today.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Store` if the collection cannot be read.
    pub fn notes(&self) -> Result<Vec<Note>, BooksError> {
        let mut notes: Vec<Note> = self.load()?;
        NoteService::refresh(&mut notes, self.clock.today());
        Ok(notes)
    }

    /// Re-derives every status and persists the notes.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Store` on a write failure.
    pub fn save_notes(&mut self, mut notes: Vec<Note>) -> Result<Vec<Note>, BooksError> {
        let changed = NoteService::refresh(&mut notes, self.clock.today());
        self.save(&notes)?;
        tracing::info!(notes = notes.len(), status_changes = changed, "notes saved");
        Ok(notes)
    }

    /// Adds a note.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Record` for invalid input.
    pub fn create_note(&mut self, input: NoteInput) -> Result<(NoteId, Vec<Note>), BooksError> {
        let mut notes = self.notes()?;
        let id = NoteService::create(&mut notes, input, self.clock.today(), self.clock.now())?;
        Ok((id, self.save_notes(notes)?))
    }

    /// Edits a note.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Record` for an unknown id or invalid input.
    pub fn update_note(&mut self, id: NoteId, input: NoteInput) -> Result<Vec<Note>, BooksError> {
        let mut notes = self.notes()?;
        NoteService::update(&mut notes, id, input, self.clock.today(), self.clock.now())?;
        self.save_notes(notes)
    }

    /// Deletes a note.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Record` for an unknown id.
    pub fn delete_note(&mut self, id: NoteId) -> Result<Vec<Note>, BooksError> {
        let mut notes = self.notes()?;
        NoteService::delete(&mut notes, id)?;
        self.save_notes(notes)
    }

    /// Reconciles a notes table.
    ///
    /// # Errors
    ///
    /// Returns `BooksError::Import` for an empty table.
    pub fn import_notes(&mut self, table: &Table) -> Result<(ImportSummary, Vec<Note>), BooksError> {
        let outcome = import_rows(self.notes()?, table, self.clock.now())?;
        let (merged, summary) = split(outcome);
        Ok((summary, self.save_notes(merged)?))
    }
}

use std::fmt::Formatter;

use futures::lock::Mutex;
use log::{info, warn};
use uuid::Uuid;

use crate::data::draft::{Draft, DraftError, RatingField, TextField};
use crate::data::models::{Coordinates, RecordId, RestaurantRecord};
use crate::data::store::{RecordStore, Snapshot, StoreError};
use crate::geocode::Geocoder;
use crate::router::{Route, View};
use crate::utils::ExistsExtension;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    Creating,
    Editing { index: usize, id: RecordId }
}

#[derive(Debug, PartialEq)]
pub enum ActionError {
    InvalidIndex(StoreError),
    /// The index no longer designates the record the caller saw.
    StaleRecord { index: usize },
    SaveInFlight
}

impl std::fmt::Display for ActionError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            ActionError::InvalidIndex(inner) => write!(f, "Invalid index: {}", inner),
            ActionError::StaleRecord { index } => {
                write!(f, "Record at index {} has changed", index)
            },
            ActionError::SaveInFlight => write!(f, "A save is already in progress"),
        }
    }
}

impl From<StoreError> for ActionError {
    fn from(error: StoreError) -> Self {
        ActionError::InvalidIndex(error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created { index: usize },
    Updated { index: usize },
    /// The edited record was deleted while its save was in flight.
    Dropped { id: RecordId }
}

/// A save that has left the controller and is waiting on geocoding.
#[derive(Debug)]
pub struct PendingSave {
    draft: Draft,
    target: EditTarget
}

impl PendingSave {
    pub fn place(&self) -> &str {
        &self.draft.place
    }
}

/// Owns every piece of application state: the records, the form draft and
/// what the form is editing.
#[derive(Debug)]
pub struct PageController {
    store: RecordStore,
    draft: Draft,
    target: EditTarget,
    /// Copy of the draft whose save is waiting on geocoding.
    in_flight: Option<Draft>
}

impl Default for PageController {
    fn default() -> Self {
        PageController::new(RecordStore::new())
    }
}

impl PageController {
    pub fn new(store: RecordStore) -> Self {
        PageController {
            store,
            draft: Draft::default(),
            target: EditTarget::Creating,
            in_flight: None
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.store.snapshot()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn target(&self) -> EditTarget {
        self.target
    }

    pub fn is_saving(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether `draft` is the one already being saved, as sent again by a
    /// double click on the save button.
    pub fn is_in_flight(&self, draft: &Draft) -> bool {
        self.in_flight.as_ref() == Some(draft)
    }

    pub fn navigate(&mut self, route: Route) {
        if route.view == View::Form && route.fresh {
            self.begin_create();
        }
    }

    pub fn begin_create(&mut self) {
        self.draft = Draft::default();
        self.target = EditTarget::Creating;
    }

    pub fn begin_edit(&mut self, index: usize, id: RecordId) -> Result<(), ActionError> {
        let draft = Draft::from_record(self.checked_record(index, id)?);
        self.draft = draft;
        self.target = EditTarget::Editing { index, id };
        Ok(())
    }

    pub fn delete(&mut self, index: usize, id: RecordId) -> Result<RestaurantRecord, ActionError> {
        self.checked_record(index, id)?;
        let removed = self.store.remove(index)?;
        info!("Deleted restaurant {:?} at index {}", removed.name, index);

        if let EditTarget::Editing { index: target, id: target_id } = self.target {
            if target_id == id {
                self.begin_create();
            } else if target > index {
                self.target = EditTarget::Editing { index: target - 1, id: target_id };
            }
        }
        Ok(removed)
    }

    pub fn set_field(&mut self, field: TextField, value: impl Into<String>) {
        self.draft.set_field(field, value);
    }

    pub fn set_rating(&mut self, field: RatingField, value: &str) -> Result<(), DraftError> {
        self.draft.set_rating(field, value)
    }

    /// Takes the draft out of the form and marks a save as in flight. The
    /// form is back in `Creating` with an empty draft from here on.
    pub fn begin_save(&mut self) -> Result<PendingSave, ActionError> {
        if self.is_saving() {
            return Err(ActionError::SaveInFlight);
        }

        let draft = std::mem::take(&mut self.draft);
        self.in_flight = Some(draft.clone());
        let pending = PendingSave {
            draft,
            target: self.target
        };
        self.target = EditTarget::Creating;
        Ok(pending)
    }

    pub fn finish_save(
        &mut self,
        pending: PendingSave,
        coordinates: Option<Coordinates>
    ) -> SaveOutcome {
        self.in_flight = None;

        match pending.target {
            EditTarget::Creating => {
                let record = pending.draft.into_record(Uuid::new_v4(), coordinates);
                info!("Added restaurant {:?}", record.name);
                self.store.append(record);
                SaveOutcome::Created { index: self.store.len() - 1 }
            },
            EditTarget::Editing { index, id } => {
                let located = if self.store.get(index).exists(|r| r.id == id) {
                    Some(index)
                } else {
                    self.store.position(id)
                };

                match located {
                    Some(index) => {
                        let record = pending.draft.into_record(id, coordinates);
                        let name = record.name.clone();
                        match self.store.replace(index, record) {
                            Ok(()) => {
                                info!("Updated restaurant {:?} at index {}", name, index);
                                SaveOutcome::Updated { index }
                            },
                            Err(err) => {
                                warn!("Could not update restaurant {}: {}", id, err);
                                SaveOutcome::Dropped { id }
                            }
                        }
                    },
                    None => {
                        warn!("Restaurant {} was deleted before its edit was saved", id);
                        SaveOutcome::Dropped { id }
                    }
                }
            }
        }
    }

    fn checked_record(&self, index: usize, id: RecordId) -> Result<&RestaurantRecord, ActionError> {
        let record = self.store.get(index).ok_or(StoreError::OutOfRange {
            index,
            len: self.store.len()
        })?;

        if record.id != id {
            return Err(ActionError::StaleRecord { index });
        }
        Ok(record)
    }
}

/// Geocodes a pending save without holding the lock, then commits it.
pub async fn complete_save(
    controller: &Mutex<PageController>,
    geocoder: &dyn Geocoder,
    pending: PendingSave
) -> SaveOutcome {
    let coordinates = geocoder.resolve(pending.place()).await;
    controller.lock().await.finish_save(pending, coordinates)
}

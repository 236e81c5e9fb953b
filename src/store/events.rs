//! Agenda store: events plus the markers they reference.

use crate::core::recurrence;
use crate::db::kv;
use crate::errors::{AppError, AppResult};
use crate::models::event::EventPatch;
use crate::models::{ColorTag, Event, Marker, Recurrence};
use chrono::{NaiveDate, NaiveTime};
use rusqlite::Connection;

/// Fields of a new event before an id is assigned.
#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    pub title: String,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub description: Option<String>,
    pub recurrence: Option<Recurrence>,
    pub marker_id: Option<i64>,
}

pub struct EventStore<'c> {
    conn: &'c Connection,
    events: Vec<Event>,
    markers: Vec<Marker>,
}

impl<'c> EventStore<'c> {
    pub fn open(conn: &'c Connection) -> AppResult<Self> {
        Ok(Self {
            conn,
            events: kv::load(conn, kv::KEY_EVENTS)?,
            markers: kv::load(conn, kv::KEY_MARKERS)?,
        })
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn get(&self, id: i64) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Add one event; a recurring template with a date is expanded into the
    /// template plus six future occurrences, appended in a single batch and
    /// persisted once. Returns the ids of all created records.
    pub fn add(&mut self, draft: EventDraft) -> AppResult<Vec<i64>> {
        if draft.title.trim().is_empty() {
            return Err(AppError::Validation("event title is required".to_string()));
        }

        if let Some(mid) = draft.marker_id {
            self.require_marker(mid)?;
        }

        let mut taken: Vec<i64> = self.events.iter().map(|e| e.id).collect();
        let base_id = super::next_id(&taken);
        taken.push(base_id);

        let template = Event {
            id: base_id,
            title: draft.title,
            date: draft.date,
            time: draft.time,
            description: draft.description,
            recurrence: draft.recurrence,
            completed: false,
            marker_id: draft.marker_id,
        };

        let mut created = vec![base_id];
        let mut batch = vec![template.clone()];

        if let (Some(pattern), Some(anchor)) = (template.recurrence, template.date) {
            for date in recurrence::occurrence_dates(anchor, pattern)? {
                let id = super::next_id(&taken);
                taken.push(id);
                created.push(id);
                batch.push(Event {
                    id,
                    date: Some(date),
                    ..template.clone()
                });
            }
        }

        self.events.extend(batch);
        self.persist_events()?;
        Ok(created)
    }

    /// Merge the provided fields into the record. Absent id is an error,
    /// not a silent no-op.
    pub fn update(&mut self, id: i64, patch: EventPatch) -> AppResult<()> {
        if let Some(mid) = patch.marker_id {
            self.require_marker(mid)?;
        }

        let ev = self
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::not_found("event", id))?;

        if let Some(title) = patch.title {
            ev.title = title;
        }
        if let Some(date) = patch.date {
            ev.date = Some(date);
        }
        if let Some(time) = patch.time {
            ev.time = Some(time);
        }
        if let Some(desc) = patch.description {
            ev.description = Some(desc);
        }
        if patch.clear_marker {
            ev.marker_id = None;
        } else if let Some(mid) = patch.marker_id {
            ev.marker_id = Some(mid);
        }

        self.persist_events()
    }

    /// Flip the completed flag; returns the new state.
    pub fn toggle(&mut self, id: i64) -> AppResult<bool> {
        let ev = self
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::not_found("event", id))?;

        ev.completed = !ev.completed;
        let state = ev.completed;
        self.persist_events()?;
        Ok(state)
    }

    pub fn remove(&mut self, id: i64) -> AppResult<()> {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);

        if self.events.len() == before {
            return Err(AppError::not_found("event", id));
        }

        self.persist_events()
    }

    // ---------------------------
    // Markers
    // ---------------------------

    pub fn marker_add(&mut self, name: &str, color: ColorTag) -> AppResult<i64> {
        if name.trim().is_empty() {
            return Err(AppError::Validation("marker name is required".to_string()));
        }

        let taken: Vec<i64> = self.markers.iter().map(|m| m.id).collect();
        let id = super::next_id(&taken);

        self.markers.push(Marker {
            id,
            name: name.trim().to_string(),
            color,
        });

        kv::save(self.conn, kv::KEY_MARKERS, &self.markers)?;
        Ok(id)
    }

    /// Delete a marker and detach it from every event that references it;
    /// all other event fields are left untouched. Returns how many events
    /// were detached.
    pub fn marker_remove(&mut self, id: i64) -> AppResult<usize> {
        let before = self.markers.len();
        self.markers.retain(|m| m.id != id);

        if self.markers.len() == before {
            return Err(AppError::not_found("marker", id));
        }

        let mut detached = 0;
        for ev in self.events.iter_mut().filter(|e| e.marker_id == Some(id)) {
            ev.marker_id = None;
            detached += 1;
        }

        kv::save(self.conn, kv::KEY_MARKERS, &self.markers)?;
        self.persist_events()?;
        Ok(detached)
    }

    pub fn marker(&self, id: i64) -> Option<&Marker> {
        self.markers.iter().find(|m| m.id == id)
    }

    fn require_marker(&self, id: i64) -> AppResult<()> {
        if self.marker(id).is_none() {
            return Err(AppError::not_found("marker", id));
        }
        Ok(())
    }

    fn persist_events(&self) -> AppResult<()> {
        kv::save(self.conn, kv::KEY_EVENTS, &self.events)
    }
}

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use tokio::{
    sync::{watch, Mutex, RwLock},
    task::JoinHandle,
    time,
};
use tracing::{debug, info, warn};
use url::Url;

use crate::{
    error::AppError,
    models::{
        payload::SyncPayload,
        person::{self, Person},
        trip::TripRecord,
    },
    services::{remote::RemoteStore, storage::StorageService},
};

/// Best-effort synchronization of the shared part of the trip document
/// (group roster, predictions, race result) with a room document.
///
/// Two states: Disconnected (no room binding, every operation a no-op) and
/// Connected (binding present, a poll task reconciles every `poll_interval`).
/// The room service only offers whole-document get/put, so conflict handling
/// is compare-and-merge on read and overwrite on write.
pub struct SyncService {
    storage: StorageService,
    remote: RemoteStore,
    public_base: Url,
    poll_interval: Duration,
    room: RwLock<Option<String>>,
    syncing: AtomicBool,
    poll_task: Mutex<Option<JoinHandle<()>>>,
    updates: watch::Sender<u64>,
}

impl SyncService {
    pub fn new(
        storage: StorageService,
        remote: RemoteStore,
        public_base: Url,
        poll_interval: Duration,
    ) -> Arc<Self> {
        let (updates, _) = watch::channel(0);
        Arc::new(Self {
            storage,
            remote,
            public_base,
            poll_interval,
            room: RwLock::new(None),
            syncing: AtomicBool::new(false),
            poll_task: Mutex::new(None),
            updates,
        })
    }

    /// Picks up a room binding persisted by a previous run and resumes
    /// polling for it.
    pub async fn resume(self: &Arc<Self>) {
        if let Some(room_id) = self.storage.load_room_binding().await {
            info!(room = %room_id, "resuming group sync");
            *self.room.write().await = Some(room_id);
            self.start_polling().await;
        }
    }

    pub async fn room_id(&self) -> Option<String> {
        self.room.read().await.clone()
    }

    pub async fn is_connected(&self) -> bool {
        self.room.read().await.is_some()
    }

    /// Shareable link that lets another install join the current room.
    pub async fn share_url(&self) -> Option<Url> {
        let room_id = self.room.read().await.clone()?;
        let mut url = self.public_base.clone();
        url.query_pairs_mut().append_pair("room", &room_id);
        Some(url)
    }

    /// Monotonic counter bumped once per adopted remote change.
    pub fn update_generation(&self) -> u64 {
        *self.updates.borrow()
    }

    pub fn subscribe_updates(&self) -> watch::Receiver<u64> {
        self.updates.subscribe()
    }

    /// Publishes the local shared state as a fresh room document and binds to
    /// the id the service hands back. On failure nothing changes locally.
    pub async fn create_room(self: &Arc<Self>) -> Result<String, AppError> {
        let record = self.storage.load_trip().await;
        let payload = SyncPayload::of_record(&record);
        let room_id = self.remote.create(&payload).await?;
        info!(room = %room_id, "created sync room");
        self.adopt_room(room_id.clone()).await?;
        Ok(room_id)
    }

    /// Joins an existing room, overwriting the local group, predictions and
    /// race result with the remote state. This is a hard overwrite, not a
    /// merge: local ticket images survive only for people the periodic sync
    /// later matches back up.
    pub async fn join_room(self: &Arc<Self>, room_id: &str) -> Result<(), AppError> {
        let payload = self.remote.fetch(room_id).await?;
        let mut record = self.storage.load_trip().await;
        record.group = payload.group;
        record.predictions = payload.predictions;
        record.race_result = payload.race_result;
        self.storage.save_trip(&record).await;
        info!(room = %room_id, "joined sync room");
        self.adopt_room(room_id.to_string()).await?;
        Ok(())
    }

    async fn adopt_room(self: &Arc<Self>, room_id: String) -> Result<(), AppError> {
        self.storage.store_room_binding(&room_id).await?;
        *self.room.write().await = Some(room_id);
        self.start_polling().await;
        Ok(())
    }

    /// Leaves the room and stops polling. Safe to call repeatedly; a sync
    /// already in flight finishes but its result is discarded.
    pub async fn disconnect(&self) {
        self.stop_polling().await;
        self.storage.clear_room_binding().await;
        let previous = self.room.write().await.take();
        if previous.is_some() {
            info!("disconnected from sync room");
        }
    }

    async fn start_polling(self: &Arc<Self>) {
        self.stop_polling().await;
        let service = Arc::clone(self);
        let handle = tokio::spawn(async move {
            let mut ticker = time::interval(service.poll_interval);
            loop {
                // First tick fires immediately: one sync right on connect.
                ticker.tick().await;
                if let Err(err) = service.sync_once().await {
                    debug!("periodic sync failed: {err}");
                }
            }
        });
        *self.poll_task.lock().await = Some(handle);
    }

    async fn stop_polling(&self) {
        if let Some(handle) = self.poll_task.lock().await.take() {
            handle.abort();
        }
    }

    /// One reconciliation pass. Returns whether remote changes were adopted.
    ///
    /// Disconnected is a no-op without network. Overlapping calls collapse:
    /// while one pass is in flight every further trigger returns immediately,
    /// so timer fires can never interleave read-modify-write on the local
    /// document.
    pub async fn sync_once(&self) -> Result<bool, AppError> {
        let Some(room_id) = self.room_id().await else {
            return Ok(false);
        };
        if self
            .syncing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Ok(false);
        }
        let outcome = self.reconcile(&room_id).await;
        self.syncing.store(false, Ordering::Release);
        outcome
    }

    async fn reconcile(&self, room_id: &str) -> Result<bool, AppError> {
        let remote = self.remote.fetch(room_id).await?;

        // A disconnect or room switch while the fetch was in flight: the
        // response is stale, drop it.
        if self.room_id().await.as_deref() != Some(room_id) {
            return Ok(false);
        }

        let mut record = self.storage.load_trip().await;
        if !remote_differs(&record, &remote) {
            return Ok(false);
        }

        record.group = merge_remote_group(remote.group, &record.group);
        record.predictions = remote.predictions;
        record.race_result = remote.race_result;
        self.storage.save_trip(&record).await;
        self.updates.send_modify(|generation| *generation += 1);
        debug!(room = %room_id, "adopted remote changes");
        Ok(true)
    }

    /// Pushes the local shared state over the room document after a local
    /// edit. Whole-document overwrite, last writer wins; trivially succeeds
    /// when Disconnected.
    pub async fn push_group_change(&self) -> Result<(), AppError> {
        let Some(room_id) = self.room_id().await else {
            return Ok(());
        };
        let record = self.storage.load_trip().await;
        let payload = SyncPayload::of_record(&record);
        if let Err(err) = self.remote.replace(&room_id, &payload).await {
            warn!(room = %room_id, "push to sync room failed: {err}");
            return Err(err.into());
        }
        Ok(())
    }
}

/// `room` query parameter of a share link: the one-shot auto-join signal.
pub fn room_from_url(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == "room")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Change detection over the shared projection only: both rosters are
/// compared with ticket fields stripped, predictions and race result as-is.
fn remote_differs(record: &TripRecord, remote: &SyncPayload) -> bool {
    let local = SyncPayload::of_record(record);
    let remote = SyncPayload {
        group: person::strip_tickets(&remote.group),
        predictions: remote.predictions.clone(),
        race_result: remote.race_result.clone(),
    };
    local != remote
}

/// Adopts the remote roster while carrying over device-local ticket images.
/// Each remote person is matched to a local one by normalized name first,
/// then by list position; unmatched entries come through as new people.
pub fn merge_remote_group(remote: Vec<Person>, local: &[Person]) -> Vec<Person> {
    remote
        .into_iter()
        .enumerate()
        .map(|(index, mut member)| {
            if let Some(known) = match_local(&member, index, local) {
                if known.has_ticket() {
                    member.ticket_image = known.ticket_image.clone();
                    member.ticket_type = known.ticket_type.clone();
                }
            }
            member
        })
        .collect()
}

fn match_local<'a>(member: &Person, index: usize, local: &'a [Person]) -> Option<&'a Person> {
    let name = member.normalized_name();
    if !name.is_empty() {
        if let Some(found) = local
            .iter()
            .find(|candidate| candidate.normalized_name() == name)
        {
            return Some(found);
        }
    }
    local.get(index)
}

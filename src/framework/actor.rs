//! # Table Actor
//!
//! [`ResourceActor`] is the server side of a table. It owns the rows, the
//! unique index and the receiving end of the request channel, and processes
//! one request at a time.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages one table of rows.
///
/// **Concurrency Model**:
/// Each actor processes its own requests sequentially, so the rows need no
/// `Mutex`. That makes every request atomic with respect to the table: a
/// create, update or action either lands completely or leaves the table as
/// it was.
///
/// # Operations
///
/// * **Create**: allocates the next ID, awaits
///   [`ActorEntity::from_create_params`] with the injected context, checks
///   the unique index, then inserts. If the caller has already gone away the
///   built row is discarded instead of inserted.
/// * **Get** / **FindUnique** / **List**: return clones of stored rows.
/// * **Update** / **Action**: run the hook against a copy of the row and
///   store the copy only if the hook succeeds and the unique index still
///   holds.
/// * **Delete**: runs [`ActorEntity::on_delete`], then removes the row and
///   its index entry.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    unique: HashMap<String, T::Id>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the request channel capacity; callers wait for space
    /// when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            unique: HashMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client
    /// has been dropped.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    let item = match T::from_create_params(id.clone(), params, &context).await {
                        Ok(item) => item,
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                    };
                    if let Err(e) = self.check_unique(&id, &item) {
                        warn!(entity_type, %id, error = %e, "Create rejected");
                        let _ = respond_to.send(Err(e));
                        continue;
                    }
                    if respond_to.is_closed() {
                        warn!(entity_type, %id, "Caller went away, create discarded");
                        continue;
                    }
                    self.insert(id.clone(), item.clone());
                    info!(entity_type, %id, size = self.store.len(), "Created");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::FindUnique { key, respond_to } => {
                    let item = self
                        .unique
                        .get(&key)
                        .and_then(|id| self.store.get(id))
                        .cloned();
                    debug!(entity_type, found = item.is_some(), "FindUnique");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(current) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let mut draft = current.clone();
                    if let Err(e) = draft.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    if let Err(e) = self.check_unique(&id, &draft) {
                        warn!(entity_type, %id, error = %e, "Update rejected");
                        let _ = respond_to.send(Err(e));
                        continue;
                    }
                    self.insert(id.clone(), draft.clone());
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(draft));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(item) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = item.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.remove(&id);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(current) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let mut draft = current.clone();
                    let result = match draft.handle_action(action, &context).await {
                        Ok(result) => match self.check_unique(&id, &draft) {
                            Ok(()) => {
                                self.insert(id.clone(), draft);
                                Ok(result)
                            }
                            Err(e) => Err(e),
                        },
                        Err(e) => Err(FrameworkError::EntityError(Box::new(e))),
                    };
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    /// Fails if `item`'s unique key is already held by a different row.
    fn check_unique(&self, id: &T::Id, item: &T) -> Result<(), FrameworkError> {
        match item.unique_key() {
            Some(key) => match self.unique.get(&key) {
                Some(owner) if owner != id => Err(FrameworkError::Conflict(key)),
                _ => Ok(()),
            },
            None => Ok(()),
        }
    }

    fn insert(&mut self, id: T::Id, item: T) {
        if let Some(previous) = self.store.get(&id).and_then(|old| old.unique_key()) {
            self.unique.remove(&previous);
        }
        if let Some(key) = item.unique_key() {
            self.unique.insert(key, id.clone());
        }
        self.store.insert(id, item);
    }

    fn remove(&mut self, id: &T::Id) {
        if let Some(key) = self.store.remove(id).and_then(|old| old.unique_key()) {
            self.unique.remove(&key);
        }
    }
}

//! In-memory user repository.

use crate::traits::{Upserted, UserRepository};
use async_trait::async_trait;
use lobby_core::{LobbyError, LobbyResult, Page, PageRequest, UserEntity, UserId};
use parking_lot::RwLock;
use shaku::Component;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Users keyed by creation sequence, with an id index.
///
/// Iterating `entries` yields the canonical enumeration order. Overwriting a
/// user keeps its sequence number.
#[derive(Debug, Default)]
struct UserStore {
    next_seq: u64,
    entries: BTreeMap<u64, UserEntity>,
    index: HashMap<UserId, u64>,
}

impl UserStore {
    fn get(&self, id: &UserId) -> Option<&UserEntity> {
        self.index.get(id).and_then(|seq| self.entries.get(seq))
    }

    fn contains(&self, id: &UserId) -> bool {
        self.index.contains_key(id)
    }

    fn fresh_id(&self) -> UserId {
        loop {
            let id = UserId::new();
            if !self.contains(&id) {
                return id;
            }
        }
    }

    fn push(&mut self, user: UserEntity) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.index.insert(user.id, seq);
        self.entries.insert(seq, user);
    }

    /// Overwrites in place; false if the id is unknown.
    fn replace(&mut self, user: UserEntity) -> bool {
        match self.index.get(&user.id).and_then(|seq| self.entries.get_mut(seq)) {
            Some(slot) => {
                *slot = user;
                true
            }
            None => false,
        }
    }

    fn remove(&mut self, id: &UserId) -> bool {
        match self.index.remove(id) {
            Some(seq) => self.entries.remove(&seq).is_some(),
            None => false,
        }
    }

    fn window(&self, offset: usize, limit: usize) -> Vec<UserEntity> {
        self.entries
            .values()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// User repository holding every user in process memory.
///
/// A single lock guards the store: mutations hold the write lock for their
/// whole read-modify-write, reads share the read lock. The lock is never held
/// across an `.await`.
#[derive(Component)]
#[shaku(interface = UserRepository)]
pub struct InMemoryUserRepository {
    #[shaku(force_default)]
    store: RwLock<UserStore>,
}

impl InMemoryUserRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: RwLock::new(UserStore::default()),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InMemoryUserRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryUserRepository")
            .field("len", &self.store.read().len())
            .finish()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> LobbyResult<Option<UserEntity>> {
        debug!("Repository: find_by_id {}", id);
        Ok(self.store.read().get(&id).cloned())
    }

    async fn insert(&self, mut user: UserEntity) -> LobbyResult<UserEntity> {
        let mut store = self.store.write();
        if user.id.is_placeholder() {
            user.id = store.fresh_id();
        } else if store.contains(&user.id) {
            return Err(LobbyError::conflict(format!(
                "User with id {} already exists",
                user.id
            )));
        }
        debug!("Repository: insert user {}", user.id);
        store.push(user.clone());
        Ok(user)
    }

    async fn update(&self, user: &UserEntity) -> LobbyResult<()> {
        debug!("Repository: update user {}", user.id);
        if self.store.write().replace(user.clone()) {
            Ok(())
        } else {
            Err(LobbyError::not_found("User", user.id))
        }
    }

    async fn upsert(&self, user: UserEntity) -> LobbyResult<Upserted> {
        let mut store = self.store.write();
        let was_inserted = !store.replace(user.clone());
        if was_inserted {
            store.push(user.clone());
        }
        debug!("Repository: upsert user {} (inserted: {})", user.id, was_inserted);
        Ok(Upserted {
            entity: user,
            was_inserted,
        })
    }

    async fn delete(&self, id: UserId) -> LobbyResult<bool> {
        debug!("Repository: delete user {}", id);
        Ok(self.store.write().remove(&id))
    }

    async fn page(&self, request: PageRequest) -> LobbyResult<Page<UserEntity>> {
        debug!(
            "Repository: page number={} size={}",
            request.page_number, request.page_size
        );
        let store = self.store.read();
        let items = store.window(request.offset(), request.limit());
        Ok(Page::new(items, request, store.len() as u64))
    }

    async fn count(&self) -> LobbyResult<u64> {
        Ok(self.store.read().len() as u64)
    }
}

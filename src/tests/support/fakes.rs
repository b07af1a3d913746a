use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::helpers::UserIdentityResolver;
use crate::auth::application::ports::outgoing::user_query::{
    UserQuery, UserQueryError, UserQueryResult,
};
use crate::modules::membership::application::domain::entities::MembershipEntry;
use crate::modules::membership::application::membership_use_cases::MembershipUseCases;
use crate::modules::membership::application::ports::incoming::use_cases::{
    AddMembershipError, AddMembershipUseCase, ListMembershipsError, ListMembershipsUseCase,
    MembershipExistsError, MembershipExistsUseCase, RemoveMembershipError,
    RemoveMembershipUseCase,
};
use crate::modules::movie_list::application::domain::entities::{
    ListName, MovieList, MovieListItem,
};
use crate::modules::movie_list::application::movie_list_use_cases::MovieListUseCases;
use crate::modules::movie_list::application::ports::incoming::use_cases::{
    AddListItemError, AddListItemUseCase, CreateListError, CreateListUseCase, DeleteListError,
    DeleteListUseCase, GetListError, GetListUseCase, ListUserListsError, ListUserListsUseCase,
    RemoveListItemError, RemoveListItemUseCase, RenameListError, RenameListUseCase,
};
use crate::modules::social::application::domain::entities::{FollowView, PublicUser};
use crate::modules::social::application::ports::incoming::use_cases::{
    FollowUserError, FollowUserUseCase, ListConnectionsError, ListFollowersUseCase,
    ListFollowingUseCase, ListFriendsUseCase, UnfollowUserError, UnfollowUserUseCase,
};
use crate::modules::social::application::social_use_cases::SocialUseCases;
use crate::shared::movie_id::MovieId;

/// Membership set kept in memory, newest entry first.
#[derive(Clone, Default)]
pub struct InMemoryMembership {
    rows: Arc<Mutex<Vec<(UserId, MembershipEntry)>>>,
}

impl InMemoryMembership {
    pub fn use_cases(&self) -> MembershipUseCases {
        MembershipUseCases {
            add: Arc::new(self.clone()),
            exists: Arc::new(self.clone()),
            remove: Arc::new(self.clone()),
            list: Arc::new(self.clone()),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn position(&self, user: UserId, movie_id: &MovieId) -> Option<usize> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .position(|(u, e)| *u == user && e.movie_id == movie_id.as_str())
    }
}

#[async_trait]
impl AddMembershipUseCase for InMemoryMembership {
    async fn execute(&self, user: UserId, movie_id: MovieId) -> Result<bool, AddMembershipError> {
        if self.position(user, &movie_id).is_some() {
            return Ok(false);
        }
        let entry = MembershipEntry {
            id: Uuid::new_v4(),
            movie_id: movie_id.into_inner(),
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().insert(0, (user, entry));
        Ok(true)
    }
}

#[async_trait]
impl MembershipExistsUseCase for InMemoryMembership {
    async fn execute(
        &self,
        user: UserId,
        movie_id: MovieId,
    ) -> Result<bool, MembershipExistsError> {
        Ok(self.position(user, &movie_id).is_some())
    }
}

#[async_trait]
impl RemoveMembershipUseCase for InMemoryMembership {
    async fn execute(&self, user: UserId, movie_id: MovieId) -> Result<(), RemoveMembershipError> {
        if let Some(idx) = self.position(user, &movie_id) {
            self.rows.lock().unwrap().remove(idx);
        }
        Ok(())
    }
}

#[async_trait]
impl ListMembershipsUseCase for InMemoryMembership {
    async fn execute(&self, user: UserId) -> Result<Vec<MembershipEntry>, ListMembershipsError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|(u, _)| *u == user)
            .map(|(_, e)| e.clone())
            .collect())
    }
}

/// Movie lists kept in memory with the same ownership and uniqueness rules
/// the Postgres adapter enforces.
#[derive(Clone, Default)]
pub struct InMemoryMovieLists {
    lists: Arc<Mutex<Vec<MovieList>>>,
}

#[derive(Debug)]
enum ListAccess {
    Missing,
    Foreign,
}

impl InMemoryMovieLists {
    pub fn use_cases(&self) -> MovieListUseCases {
        MovieListUseCases {
            create: Arc::new(self.clone()),
            get: Arc::new(self.clone()),
            list_for_user: Arc::new(self.clone()),
            rename: Arc::new(self.clone()),
            delete: Arc::new(self.clone()),
            add_item: Arc::new(self.clone()),
            remove_item: Arc::new(self.clone()),
        }
    }

    pub fn seed(&self, owner: UserId, name: &str, movies: &[&str]) -> Uuid {
        let list = MovieList {
            id: Uuid::new_v4(),
            user_id: owner,
            name: name.to_string(),
            created_at: Utc::now(),
            items: movies
                .iter()
                .map(|m| MovieListItem {
                    id: Uuid::new_v4(),
                    movie_id: m.to_string(),
                    added_at: Utc::now(),
                })
                .collect(),
        };
        let id = list.id;
        self.lists.lock().unwrap().insert(0, list);
        id
    }

    pub fn get(&self, list_id: Uuid) -> Option<MovieList> {
        self.lists
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.id == list_id)
            .cloned()
    }

    fn with_owned<T>(
        &self,
        owner: UserId,
        list_id: Uuid,
        f: impl FnOnce(&mut Vec<MovieList>, usize) -> T,
    ) -> Result<T, ListAccess> {
        let mut lists = self.lists.lock().unwrap();
        let idx = lists
            .iter()
            .position(|l| l.id == list_id)
            .ok_or(ListAccess::Missing)?;
        if lists[idx].user_id != owner {
            return Err(ListAccess::Foreign);
        }
        Ok(f(&mut lists, idx))
    }

    fn name_taken(lists: &[MovieList], owner: UserId, name: &str, except: Option<Uuid>) -> bool {
        lists
            .iter()
            .any(|l| l.user_id == owner && l.name == name && Some(l.id) != except)
    }
}

#[async_trait]
impl CreateListUseCase for InMemoryMovieLists {
    async fn execute(&self, owner: UserId, name: ListName) -> Result<MovieList, CreateListError> {
        if Self::name_taken(&self.lists.lock().unwrap(), owner, name.as_str(), None) {
            return Err(CreateListError::NameTaken);
        }
        let id = self.seed(owner, name.as_str(), &[]);
        Ok(self.get(id).unwrap())
    }
}

#[async_trait]
impl GetListUseCase for InMemoryMovieLists {
    async fn execute(&self, list_id: Uuid) -> Result<MovieList, GetListError> {
        self.get(list_id).ok_or(GetListError::NotFound)
    }
}

#[async_trait]
impl ListUserListsUseCase for InMemoryMovieLists {
    async fn execute(&self, owner: UserId) -> Result<Vec<MovieList>, ListUserListsError> {
        Ok(self
            .lists
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.user_id == owner)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl RenameListUseCase for InMemoryMovieLists {
    async fn execute(
        &self,
        owner: UserId,
        list_id: Uuid,
        name: ListName,
    ) -> Result<MovieList, RenameListError> {
        self.with_owned(owner, list_id, |lists, idx| {
            if Self::name_taken(lists, owner, name.as_str(), Some(list_id)) {
                return Err(RenameListError::NameTaken);
            }
            lists[idx].name = name.as_str().to_string();
            Ok(lists[idx].clone())
        })
        .map_err(|access| match access {
            ListAccess::Missing => RenameListError::NotFound,
            ListAccess::Foreign => RenameListError::NotOwner,
        })?
    }
}

#[async_trait]
impl DeleteListUseCase for InMemoryMovieLists {
    async fn execute(&self, owner: UserId, list_id: Uuid) -> Result<(), DeleteListError> {
        self.with_owned(owner, list_id, |lists, idx| {
            lists.remove(idx);
        })
        .map_err(|access| match access {
            ListAccess::Missing => DeleteListError::NotFound,
            ListAccess::Foreign => DeleteListError::NotOwner,
        })
    }
}

#[async_trait]
impl AddListItemUseCase for InMemoryMovieLists {
    async fn execute(
        &self,
        owner: UserId,
        list_id: Uuid,
        movie_id: MovieId,
    ) -> Result<MovieListItem, AddListItemError> {
        self.with_owned(owner, list_id, |lists, idx| {
            let items = &mut lists[idx].items;
            if items.iter().any(|i| i.movie_id == movie_id.as_str()) {
                return Err(AddListItemError::AlreadyInList);
            }
            let item = MovieListItem {
                id: Uuid::new_v4(),
                movie_id: movie_id.to_string(),
                added_at: Utc::now(),
            };
            items.push(item.clone());
            Ok(item)
        })
        .map_err(|access| match access {
            ListAccess::Missing => AddListItemError::ListNotFound,
            ListAccess::Foreign => AddListItemError::NotOwner,
        })?
    }
}

#[async_trait]
impl RemoveListItemUseCase for InMemoryMovieLists {
    async fn execute(
        &self,
        owner: UserId,
        list_id: Uuid,
        movie_id: MovieId,
    ) -> Result<(), RemoveListItemError> {
        self.with_owned(owner, list_id, |lists, idx| {
            let items = &mut lists[idx].items;
            let pos = items
                .iter()
                .position(|i| i.movie_id == movie_id.as_str())
                .ok_or(RemoveListItemError::ItemNotFound)?;
            items.remove(pos);
            Ok(())
        })
        .map_err(|access| match access {
            ListAccess::Missing => RemoveListItemError::ListNotFound,
            ListAccess::Foreign => RemoveListItemError::NotOwner,
        })?
    }
}

/// Follow graph over a fixed set of registered users.
#[derive(Clone, Default)]
pub struct InMemorySocialGraph {
    users: Arc<Mutex<Vec<PublicUser>>>,
    edges: Arc<Mutex<Vec<(UserId, UserId, DateTime<Utc>)>>>,
}

impl InMemorySocialGraph {
    pub fn use_cases(&self) -> SocialUseCases {
        SocialUseCases {
            follow: Arc::new(self.clone()),
            unfollow: Arc::new(self.clone()),
            followers: Arc::new(self.clone()),
            following: Arc::new(self.clone()),
            friends: Arc::new(self.clone()),
        }
    }

    pub fn register(&self, username: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.users.lock().unwrap().push(PublicUser {
            id: UserId::from(id),
            username: username.to_string(),
            name: username.to_string(),
        });
        id
    }

    /// Adds an edge directly, bypassing the follow rules.
    pub fn connect(&self, from: Uuid, to: Uuid) {
        self.edges
            .lock()
            .unwrap()
            .insert(0, (UserId::from(from), UserId::from(to), Utc::now()));
    }

    pub fn edge_count(&self) -> usize {
        self.edges.lock().unwrap().len()
    }

    fn user(&self, id: UserId) -> Option<PublicUser> {
        self.users.lock().unwrap().iter().find(|u| u.id == id).cloned()
    }

    fn views(&self, pick: impl Fn(&(UserId, UserId, DateTime<Utc>)) -> Option<UserId>) -> Vec<FollowView> {
        let edges = self.edges.lock().unwrap().clone();
        edges
            .iter()
            .filter_map(|edge| {
                let other = pick(edge)?;
                Some(FollowView {
                    user: self.user(other)?,
                    followed_at: edge.2,
                })
            })
            .collect()
    }
}

#[async_trait]
impl FollowUserUseCase for InMemorySocialGraph {
    async fn execute(&self, from: UserId, to: UserId) -> Result<bool, FollowUserError> {
        if from == to {
            return Err(FollowUserError::SelfFollow);
        }
        if self.user(to).is_none() {
            return Err(FollowUserError::TargetNotFound);
        }
        let mut edges = self.edges.lock().unwrap();
        if edges.iter().any(|(f, t, _)| *f == from && *t == to) {
            return Ok(false);
        }
        edges.insert(0, (from, to, Utc::now()));
        Ok(true)
    }
}

#[async_trait]
impl UnfollowUserUseCase for InMemorySocialGraph {
    async fn execute(&self, from: UserId, to: UserId) -> Result<(), UnfollowUserError> {
        self.edges
            .lock()
            .unwrap()
            .retain(|(f, t, _)| !(*f == from && *t == to));
        Ok(())
    }
}

#[async_trait]
impl ListFollowersUseCase for InMemorySocialGraph {
    async fn execute(&self, user: UserId) -> Result<Vec<FollowView>, ListConnectionsError> {
        Ok(self.views(|(f, t, _)| (*t == user).then_some(*f)))
    }
}

#[async_trait]
impl ListFollowingUseCase for InMemorySocialGraph {
    async fn execute(&self, user: UserId) -> Result<Vec<FollowView>, ListConnectionsError> {
        Ok(self.views(|(f, t, _)| (*f == user).then_some(*t)))
    }
}

#[async_trait]
impl ListFriendsUseCase for InMemorySocialGraph {
    async fn execute(&self, user: UserId) -> Result<Vec<PublicUser>, ListConnectionsError> {
        let edges = self.edges.lock().unwrap().clone();
        let mut friends: Vec<PublicUser> = edges
            .iter()
            .filter(|(f, _, _)| *f == user)
            .filter(|(_, t, _)| edges.iter().any(|(f2, t2, _)| f2 == t && *t2 == user))
            .filter_map(|(_, t, _)| self.user(*t))
            .collect();
        friends.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(friends)
    }
}

/// Username directory backing `UserIdentityResolver` in route tests.
#[derive(Clone, Default)]
pub struct KnownUsers {
    users: Vec<UserQueryResult>,
}

impl KnownUsers {
    pub fn new(entries: &[(&str, Uuid)]) -> Self {
        let users = entries
            .iter()
            .map(|(username, id)| UserQueryResult {
                id: *id,
                username: username.to_string(),
                email: format!("{username}@example.com"),
                name: username.to_string(),
                password_hash: "hashed".to_string(),
                token_expiration: None,
                created_at: Utc::now(),
            })
            .collect();
        Self { users }
    }

    fn find(&self, pred: impl Fn(&UserQueryResult) -> bool) -> Option<UserQueryResult> {
        self.users.iter().find(|u| pred(u)).cloned()
    }
}

#[async_trait]
impl UserQuery for KnownUsers {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError> {
        Ok(self.find(|u| u.id == user_id))
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        Ok(self.find(|u| u.username == username))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError> {
        Ok(self.find(|u| u.email == email))
    }
}

pub fn resolver_for(entries: &[(&str, Uuid)]) -> UserIdentityResolver {
    UserIdentityResolver::new(Arc::new(KnownUsers::new(entries)))
}

mod get_photos_by_season;

use std::io;

use almanac_test_utils::prelude::*;
use async_trait::async_trait;

use crate::server::{
    error::{league::LeagueError, photo::PhotoError, Error},
    model::{
        db::{ApprovedOwnerModel, TeamModel},
        owner::OwnerContext,
    },
    service::photo::PhotoService,
    storage::{MemoryPhotoStorage, PhotoStorage},
};

const PUBLIC_URL: &str = "/media";

/// Storage whose writes and deletes always fail.
struct FailingStorage;

#[async_trait]
impl PhotoStorage for FailingStorage {
    async fn put(&self, _key: &str, _bytes: Vec<u8>) -> Result<(), io::Error> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
    }

    async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, io::Error> {
        Ok(None)
    }

    async fn delete(&self, _key: &str) -> Result<(), io::Error> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
    }

    fn view_url(&self, key: &str) -> String {
        format!("{}/{}", PUBLIC_URL, key)
    }
}

fn owner_context(owner: &ApprovedOwnerModel, team: &TeamModel) -> OwnerContext {
    OwnerContext {
        owner_id: owner.id,
        team_id: team.id,
        team_name: team.name.clone(),
        is_admin: owner.is_admin,
    }
}

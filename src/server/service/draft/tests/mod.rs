mod get_by_team;

use almanac_test_utils::prelude::*;

use crate::server::{
    error::{league::LeagueError, Error},
    service::draft::DraftService,
};

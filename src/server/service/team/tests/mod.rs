
use almanac_test_utils::prelude::*;

use crate::server::{
    error::{league::LeagueError, Error},
    service::team::TeamService,
};

mod get_draft_locations;

use almanac_test_utils::prelude::*;

use crate::server::{error::Error, service::season::SeasonService};

mod resolve;

use almanac_test_utils::prelude::*;

use crate::server::{
    error::{auth::AuthError, Error},
    service::owner::OwnerService,
    util::token::TokenVerifier,
};

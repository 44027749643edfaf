pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_JWT_SECRET, TEST_OWNER_EMAIL},
        fixtures::auth::{issue_expired_test_token, issue_test_token},
        fixtures::league::SeasonFixture,
        TestBuilder, TestContext, TestError,
    };
}

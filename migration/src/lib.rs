pub use sea_orm_migration::prelude::*;

mod m20251101_000001_team;
mod m20251101_000002_team_alias;
mod m20251101_000003_team_lineage;
mod m20251101_000004_draft_location;
mod m20251101_000005_season;
mod m20251101_000006_draft_position;
mod m20251101_000007_approved_owner;
mod m20251101_000008_draft_photo;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_team::Migration),
            Box::new(m20251101_000002_team_alias::Migration),
            Box::new(m20251101_000003_team_lineage::Migration),
            Box::new(m20251101_000004_draft_location::Migration),
            Box::new(m20251101_000005_season::Migration),
            Box::new(m20251101_000006_draft_position::Migration),
            Box::new(m20251101_000007_approved_owner::Migration),
            Box::new(m20251101_000008_draft_photo::Migration),
        ]
    }
}

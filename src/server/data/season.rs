use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::db::SeasonModel;

pub struct SeasonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SeasonRepository<'a, C> {
    /// Creates a new instance of [`SeasonRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every season, newest first
    pub async fn get_all(&self) -> Result<Vec<SeasonModel>, DbErr> {
        entity::prelude::Season::find()
            .order_by_desc(entity::season::Column::Year)
            .all(self.db)
            .await
    }

    pub async fn find_by_year(&self, year: i32) -> Result<Option<SeasonModel>, DbErr> {
        entity::prelude::Season::find()
            .filter(entity::season::Column::Year.eq(year))
            .one(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod get_all {
        use almanac_test_utils::prelude::*;

        use crate::server::data::season::SeasonRepository;

        /// Expect seasons ordered newest first
        #[tokio::test]
        async fn returns_newest_first() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_league_tables().build().await?;
            test.league().insert_season(SeasonFixture::new(2019)).await?;
            test.league().insert_season(SeasonFixture::new(2023)).await?;
            test.league().insert_season(SeasonFixture::new(2021)).await?;

            let season_repo = SeasonRepository::new(&test.db);
            let seasons = season_repo.get_all().await?;

            let years: Vec<i32> = seasons.iter().map(|s| s.year).collect();
            assert_eq!(years, vec![2023, 2021, 2019]);

            Ok(())
        }

        /// Expect Error when required tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let season_repo = SeasonRepository::new(&test.db);
            let result = season_repo.get_all().await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod find_by_year {
        use almanac_test_utils::prelude::*;

        use crate::server::data::season::SeasonRepository;

        /// Expect the season with matching results for an existing year
        #[tokio::test]
        async fn finds_existing_season() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_league_tables().build().await?;
            let champion = test.league().insert_team("Zebras", true).await?;
            test.league()
                .insert_season(SeasonFixture::new(2022).champion(champion.id))
                .await?;

            let season_repo = SeasonRepository::new(&test.db);
            let season = season_repo.find_by_year(2022).await?;

            let season = season.unwrap();
            assert_eq!(season.champion_id, Some(champion.id));
            assert!(!season.is_co_championship);

            Ok(())
        }

        /// Expect Ok(None) for a year without a season
        #[tokio::test]
        async fn returns_none_for_unknown_year() -> Result<(), TestError> {
            let test = TestBuilder::new().with_league_tables().build().await?;

            let season_repo = SeasonRepository::new(&test.db);
            let result = season_repo.find_by_year(1999).await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }
}

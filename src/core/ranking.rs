//! Ranking operations - Recording and reading leaderboard scores.
//!
//! One score per farm, keyed by the farm. Recording is an UPSERT so a farm's
//! score can be refreshed without a separate update path. Scores are stored
//! and read back verbatim; computing them is out of scope here.

use crate::{
    entities::{Ranking, ranking},
    errors::Result,
};
use sea_orm::sea_query::OnConflict;
use sea_orm::{QueryOrder, Set, prelude::*};

/// Records the score for a farm, inserting or replacing its ranking entry.
///
/// # Errors
/// Returns an error if the farm reference is dangling or the upsert fails.
pub async fn record_score(db: &DatabaseConnection, farm_id: i64, score: f64) -> Result<ranking::Model> {
    let entry = ranking::ActiveModel {
        farm_id: Set(farm_id),
        score: Set(Some(score)),
    };

    Ranking::insert(entry)
        .on_conflict(
            OnConflict::column(ranking::Column::FarmId)
                .update_column(ranking::Column::Score)
                .to_owned(),
        )
        .exec(db)
        .await?;

    Ok(ranking::Model {
        farm_id,
        score: Some(score),
    })
}

/// Retrieves the recorded score for a farm, None if the farm is unranked.
pub async fn get_score(db: &DatabaseConnection, farm_id: i64) -> Result<Option<f64>> {
    let entry = Ranking::find_by_id(farm_id).one(db).await?;
    Ok(entry.and_then(|e| e.score))
}

/// Retrieves all ranking entries, best score first.
pub async fn list_rankings(db: &DatabaseConnection) -> Result<Vec<ranking::Model>> {
    Ranking::find()
        .order_by_desc(ranking::Column::Score)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::errors::Error;
    use crate::test_utils::{seed_two_farms, setup_test_db};

    #[tokio::test]
    async fn test_score_persists_unchanged() -> Result<()> {
        let db = setup_test_db().await?;
        let (farm_id, _) = seed_two_farms(&db).await?;

        record_score(&db, farm_id, 98.5).await?;
        assert_eq!(get_score(&db, farm_id).await?, Some(98.5));
        Ok(())
    }

    #[tokio::test]
    async fn test_record_score_upserts() -> Result<()> {
        let db = setup_test_db().await?;
        let (farm_id, _) = seed_two_farms(&db).await?;

        record_score(&db, farm_id, 10.0).await?;
        record_score(&db, farm_id, 42.0).await?;

        assert_eq!(get_score(&db, farm_id).await?, Some(42.0));
        assert_eq!(list_rankings(&db).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_unranked_farm_has_no_score() -> Result<()> {
        let db = setup_test_db().await?;
        let (farm_id, _) = seed_two_farms(&db).await?;

        assert_eq!(get_score(&db, farm_id).await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_list_rankings_orders_best_first() -> Result<()> {
        let db = setup_test_db().await?;
        let (first, second) = seed_two_farms(&db).await?;

        record_score(&db, first, 12.0).await?;
        record_score(&db, second, 77.5).await?;

        let rankings = list_rankings(&db).await?;
        assert_eq!(rankings[0].farm_id, second);
        assert_eq!(rankings[1].farm_id, first);
        Ok(())
    }

    #[tokio::test]
    async fn test_score_for_dangling_farm_violates_foreign_key() -> Result<()> {
        let db = setup_test_db().await?;

        let result = record_score(&db, 9999, 1.0).await;
        assert!(matches!(result, Err(Error::Database(_))));
        Ok(())
    }
}

//! Account operations - Player account creation and lookup.
//!
//! Pseudonym uniqueness, the three-character minimum, and the one-account-per-
//! farm rule all live in the schema; violations surface as database errors.

use crate::{
    entities::{Account, account},
    errors::{Error, Result},
};
use sea_orm::{Set, prelude::*};

/// Creates a new player account, optionally linked to a farm.
///
/// # Errors
/// Returns an error if:
/// - The pseudonym is empty or whitespace-only
/// - The pseudonym is shorter than 3 characters or already taken (engine
///   CHECK / UNIQUE violation)
/// - The farm is already linked to another account (UNIQUE violation)
/// - The database insert operation fails
pub async fn create_account(
    db: &DatabaseConnection,
    pseudo: &str,
    farm_id: Option<i64>,
) -> Result<account::Model> {
    if pseudo.trim().is_empty() {
        return Err(Error::Validation {
            field: "pseudo",
            message: "Account pseudonym cannot be empty".to_string(),
        });
    }

    let new_account = account::ActiveModel {
        pseudo: Set(pseudo.trim().to_string()),
        farm_id: Set(farm_id),
        ..Default::default()
    };
    new_account.insert(db).await.map_err(Into::into)
}

/// Retrieves an account by its pseudonym, returning None if not found.
pub async fn get_account_by_pseudo(
    db: &DatabaseConnection,
    pseudo: &str,
) -> Result<Option<account::Model>> {
    Account::find()
        .filter(account::Column::Pseudo.eq(pseudo))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the account playing a given farm, returning None if the farm is
/// unclaimed.
pub async fn get_account_for_farm(
    db: &DatabaseConnection,
    farm_id: i64,
) -> Result<Option<account::Model>> {
    Account::find()
        .filter(account::Column::FarmId.eq(farm_id))
        .one(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{seed_two_farms, setup_test_db};

    #[tokio::test]
    async fn test_create_account_linked_to_farm() -> Result<()> {
        let db = setup_test_db().await?;
        let (farm_id, _) = seed_two_farms(&db).await?;

        let account = create_account(&db, "daisy_keeper", Some(farm_id)).await?;
        assert_eq!(account.pseudo, "daisy_keeper");
        assert_eq!(account.farm_id, Some(farm_id));
        assert_eq!(account.last_connection, None);

        let found = get_account_for_farm(&db, farm_id).await?.unwrap();
        assert_eq!(found.id, account.id);
        Ok(())
    }

    #[tokio::test]
    async fn test_account_without_farm() -> Result<()> {
        let db = setup_test_db().await?;

        let account = create_account(&db, "wanderer", None).await?;
        assert_eq!(account.farm_id, None);

        let found = get_account_by_pseudo(&db, "wanderer").await?.unwrap();
        assert_eq!(found.id, account.id);
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_pseudo_violates_unique_constraint() -> Result<()> {
        let db = setup_test_db().await?;

        create_account(&db, "daisy_keeper", None).await?;
        let result = create_account(&db, "daisy_keeper", None).await;
        assert!(matches!(result, Err(Error::Database(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_one_account_per_farm() -> Result<()> {
        let db = setup_test_db().await?;
        let (farm_id, _) = seed_two_farms(&db).await?;

        create_account(&db, "first_owner", Some(farm_id)).await?;
        let result = create_account(&db, "second_owner", Some(farm_id)).await;
        assert!(matches!(result, Err(Error::Database(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_short_pseudo_violates_check_constraint() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_account(&db, "ab", None).await;
        assert!(matches!(result, Err(Error::Database(_))));
        Ok(())
    }
}

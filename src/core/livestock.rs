//! Livestock operations - Chickens, cows, and rabbit hutches.
//!
//! Inserts take argument structs with optional fields: anything left as None
//! is omitted from the INSERT so the schema default applies (a new chicken
//! weighs 0.05 kg, a new hutch starts with 8 baby rabbits, and so on). Cows
//! and hutches are keyed by their owning farm, so a second insert for the
//! same farm is a primary-key conflict.

use crate::{
    entities::{Chicken, Cow, Hutch, Sex, chicken, cow, hutch},
    errors::Result,
};
use sea_orm::{Set, prelude::*};

/// Arguments for inserting a chicken. Fields left as None fall back to the
/// schema defaults; only the sex is required.
#[derive(Debug, Default)]
pub struct NewChicken {
    /// Owning farm, None for an unowned bird
    pub farm_id: Option<i64>,
    /// Sex of the animal (required by the schema)
    pub sex: Sex,
    /// Weight in kilograms (schema default 0.05)
    pub weight: Option<f64>,
    /// Age in days (schema default 0)
    pub age: Option<i32>,
    /// Eggs laid so far (schema default 0)
    pub egg_count: Option<i32>,
    /// Date last fed
    pub last_fed: Option<Date>,
    /// Date last watered
    pub last_watered: Option<Date>,
    /// Date last washed
    pub last_washed: Option<Date>,
    /// Date the bird fell sick
    pub sick_since: Option<Date>,
}

/// Arguments for inserting a cow. The owning farm is the primary key.
#[derive(Debug)]
pub struct NewCow {
    /// Owning farm - primary key of the cow row
    pub farm_id: i64,
    /// Weight in kilograms (schema default 1)
    pub weight: Option<i32>,
    /// Age in days (schema default 0)
    pub age: Option<i32>,
    /// Litres of milk available (schema default 0)
    pub milk_quantity: Option<i32>,
    /// Date last fed
    pub last_fed: Option<Date>,
    /// Date last watered
    pub last_watered: Option<Date>,
    /// Date last washed
    pub last_washed: Option<Date>,
    /// Date the cow fell sick
    pub sick_since: Option<Date>,
}

impl NewCow {
    /// A cow for the given farm with every other column left to its default.
    pub const fn for_farm(farm_id: i64) -> Self {
        Self {
            farm_id,
            weight: None,
            age: None,
            milk_quantity: None,
            last_fed: None,
            last_watered: None,
            last_washed: None,
            sick_since: None,
        }
    }
}

/// Arguments for inserting a rabbit hutch. The owning farm is the primary key.
#[derive(Debug)]
pub struct NewHutch {
    /// Owning farm - primary key of the hutch row
    pub farm_id: i64,
    /// Newborn rabbits (schema default 8)
    pub baby_count: Option<i32>,
    /// Small rabbits (schema default 0)
    pub small_count: Option<i32>,
    /// Large rabbits (schema default 0)
    pub large_count: Option<i32>,
    /// Adult males (schema default 0)
    pub adult_male_count: Option<i32>,
    /// Adult females (schema default 0)
    pub adult_female_count: Option<i32>,
    /// Date last fed
    pub last_fed: Option<Date>,
    /// Date last watered
    pub last_watered: Option<Date>,
    /// Date last cleaned
    pub last_washed: Option<Date>,
    /// Date sickness was detected
    pub sick_since: Option<Date>,
}

impl NewHutch {
    /// A hutch for the given farm with every count left to its default.
    pub const fn for_farm(farm_id: i64) -> Self {
        Self {
            farm_id,
            baby_count: None,
            small_count: None,
            large_count: None,
            adult_male_count: None,
            adult_female_count: None,
            last_fed: None,
            last_watered: None,
            last_washed: None,
            sick_since: None,
        }
    }
}

/// Inserts a chicken, applying schema defaults for any field left as None.
///
/// # Errors
/// Returns an error if a negative quantity trips a CHECK constraint, the farm
/// reference is dangling, or the insert fails.
pub async fn create_chicken(
    db: &DatabaseConnection,
    args: &NewChicken,
) -> Result<chicken::Model> {
    let mut model = chicken::ActiveModel {
        farm_id: Set(args.farm_id),
        sex: Set(args.sex),
        last_fed: Set(args.last_fed),
        last_watered: Set(args.last_watered),
        last_washed: Set(args.last_washed),
        sick_since: Set(args.sick_since),
        ..Default::default()
    };
    if let Some(weight) = args.weight {
        model.weight = Set(weight);
    }
    if let Some(age) = args.age {
        model.age = Set(age);
    }
    if let Some(egg_count) = args.egg_count {
        model.egg_count = Set(egg_count);
    }
    model.insert(db).await.map_err(Into::into)
}

/// Inserts the cow record for a farm.
///
/// # Errors
/// Returns an error if the farm already has a cow (primary-key conflict), a
/// negative quantity trips a CHECK constraint, or the insert fails.
pub async fn create_cow(db: &DatabaseConnection, args: &NewCow) -> Result<cow::Model> {
    let mut model = cow::ActiveModel {
        farm_id: Set(args.farm_id),
        last_fed: Set(args.last_fed),
        last_watered: Set(args.last_watered),
        last_washed: Set(args.last_washed),
        sick_since: Set(args.sick_since),
        ..Default::default()
    };
    if let Some(weight) = args.weight {
        model.weight = Set(weight);
    }
    if let Some(age) = args.age {
        model.age = Set(age);
    }
    if let Some(milk_quantity) = args.milk_quantity {
        model.milk_quantity = Set(milk_quantity);
    }
    model.insert(db).await.map_err(Into::into)
}

/// Inserts the rabbit hutch record for a farm.
///
/// # Errors
/// Returns an error if the farm already has a hutch (primary-key conflict), a
/// negative count trips a CHECK constraint, or the insert fails.
pub async fn create_hutch(db: &DatabaseConnection, args: &NewHutch) -> Result<hutch::Model> {
    let mut model = hutch::ActiveModel {
        farm_id: Set(args.farm_id),
        last_fed: Set(args.last_fed),
        last_watered: Set(args.last_watered),
        last_washed: Set(args.last_washed),
        sick_since: Set(args.sick_since),
        ..Default::default()
    };
    if let Some(baby_count) = args.baby_count {
        model.baby_count = Set(baby_count);
    }
    if let Some(small_count) = args.small_count {
        model.small_count = Set(small_count);
    }
    if let Some(large_count) = args.large_count {
        model.large_count = Set(large_count);
    }
    if let Some(adult_male_count) = args.adult_male_count {
        model.adult_male_count = Set(adult_male_count);
    }
    if let Some(adult_female_count) = args.adult_female_count {
        model.adult_female_count = Set(adult_female_count);
    }
    model.insert(db).await.map_err(Into::into)
}

/// Retrieves a chicken by its unique ID, returning None if not found.
pub async fn get_chicken_by_id(
    db: &DatabaseConnection,
    chicken_id: i64,
) -> Result<Option<chicken::Model>> {
    Chicken::find_by_id(chicken_id).one(db).await.map_err(Into::into)
}

/// Retrieves all chickens owned by a farm.
pub async fn get_chickens_for_farm(
    db: &DatabaseConnection,
    farm_id: i64,
) -> Result<Vec<chicken::Model>> {
    Chicken::find()
        .filter(chicken::Column::FarmId.eq(farm_id))
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the cow record for a farm, returning None if the farm has none.
pub async fn get_cow_for_farm(db: &DatabaseConnection, farm_id: i64) -> Result<Option<cow::Model>> {
    Cow::find_by_id(farm_id).one(db).await.map_err(Into::into)
}

/// Retrieves the hutch record for a farm, returning None if the farm has none.
pub async fn get_hutch_for_farm(
    db: &DatabaseConnection,
    farm_id: i64,
) -> Result<Option<hutch::Model>> {
    Hutch::find_by_id(farm_id).one(db).await.map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::errors::Error;
    use crate::test_utils::{seed_two_farms, setup_test_db, yesterday};
    use chrono::Utc;

    #[tokio::test]
    async fn test_chicken_insert_round_trips() -> Result<()> {
        let db = setup_test_db().await?;
        let (farm_id, _) = seed_two_farms(&db).await?;
        let today = Utc::now().date_naive();

        let hen = create_chicken(
            &db,
            &NewChicken {
                farm_id: Some(farm_id),
                sex: Sex::Female,
                weight: Some(2.5),
                age: Some(5),
                egg_count: Some(1),
                last_fed: Some(today),
                last_watered: Some(yesterday()),
                last_washed: Some(today),
                sick_since: None,
            },
        )
        .await?;

        let fetched = get_chicken_by_id(&db, hen.id).await?.unwrap();
        assert_eq!(fetched.farm_id, Some(farm_id));
        assert_eq!(fetched.sex, Sex::Female);
        assert_eq!(fetched.weight, 2.5);
        assert_eq!(fetched.age, 5);
        assert_eq!(fetched.egg_count, 1);
        assert_eq!(fetched.last_fed, Some(today));
        assert_eq!(fetched.last_watered, Some(yesterday()));
        assert_eq!(fetched.sick_since, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_chicken_defaults_apply() -> Result<()> {
        let db = setup_test_db().await?;

        // Only the required sex is provided
        let chick = create_chicken(
            &db,
            &NewChicken {
                sex: Sex::Unknown,
                ..Default::default()
            },
        )
        .await?;

        assert_eq!(chick.farm_id, None);
        assert_eq!(chick.weight, 0.05);
        assert_eq!(chick.age, 0);
        assert_eq!(chick.egg_count, 0);
        assert_eq!(chick.last_fed, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_negative_chicken_weight_violates_check() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_chicken(
            &db,
            &NewChicken {
                sex: Sex::Male,
                weight: Some(-1.0),
                ..Default::default()
            },
        )
        .await;
        assert!(matches!(result, Err(Error::Database(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_chicken_with_dangling_farm_violates_foreign_key() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_chicken(
            &db,
            &NewChicken {
                farm_id: Some(9999),
                sex: Sex::Female,
                ..Default::default()
            },
        )
        .await;
        assert!(matches!(result, Err(Error::Database(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_cow_per_farm_and_defaults() -> Result<()> {
        let db = setup_test_db().await?;
        let (first, second) = seed_two_farms(&db).await?;
        let today = Utc::now().date_naive();

        let lean = create_cow(
            &db,
            &NewCow {
                last_fed: Some(today),
                last_watered: Some(today),
                last_washed: Some(today),
                ..NewCow::for_farm(first)
            },
        )
        .await?;
        assert_eq!(lean.farm_id, first);
        assert_eq!(lean.weight, 1);
        assert_eq!(lean.age, 0);
        assert_eq!(lean.milk_quantity, 0);

        let stout = create_cow(
            &db,
            &NewCow {
                weight: Some(100),
                age: Some(19),
                milk_quantity: Some(8),
                ..NewCow::for_farm(second)
            },
        )
        .await?;
        assert_eq!(stout.milk_quantity, 8);

        let fetched = get_cow_for_farm(&db, second).await?.unwrap();
        assert_eq!(fetched.weight, 100);
        assert_eq!(fetched.age, 19);
        Ok(())
    }

    #[tokio::test]
    async fn test_second_cow_for_same_farm_conflicts() -> Result<()> {
        let db = setup_test_db().await?;
        let (farm_id, _) = seed_two_farms(&db).await?;

        create_cow(&db, &NewCow::for_farm(farm_id)).await?;
        let result = create_cow(&db, &NewCow::for_farm(farm_id)).await;
        assert!(matches!(result, Err(Error::Database(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_hutch_counts_round_trip() -> Result<()> {
        let db = setup_test_db().await?;
        let (first, second) = seed_two_farms(&db).await?;

        create_hutch(
            &db,
            &NewHutch {
                baby_count: Some(20),
                small_count: Some(14),
                large_count: Some(6),
                adult_male_count: Some(5),
                adult_female_count: Some(25),
                last_fed: Some(Utc::now().date_naive()),
                last_watered: Some(yesterday()),
                ..NewHutch::for_farm(first)
            },
        )
        .await?;

        let fetched = get_hutch_for_farm(&db, first).await?.unwrap();
        assert_eq!(fetched.baby_count, 20);
        assert_eq!(fetched.small_count, 14);
        assert_eq!(fetched.large_count, 6);
        assert_eq!(fetched.adult_male_count, 5);
        assert_eq!(fetched.adult_female_count, 25);

        // A bare hutch starts with 8 babies and nothing else
        let bare = create_hutch(&db, &NewHutch::for_farm(second)).await?;
        assert_eq!(bare.baby_count, 8);
        assert_eq!(bare.small_count, 0);
        assert_eq!(bare.adult_female_count, 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_negative_hutch_count_violates_check() -> Result<()> {
        let db = setup_test_db().await?;
        let (farm_id, _) = seed_two_farms(&db).await?;

        let result = create_hutch(
            &db,
            &NewHutch {
                baby_count: Some(-3),
                ..NewHutch::for_farm(farm_id)
            },
        )
        .await;
        assert!(matches!(result, Err(Error::Database(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_get_chickens_for_farm_excludes_other_farms() -> Result<()> {
        let db = setup_test_db().await?;
        let (first, second) = seed_two_farms(&db).await?;

        for _ in 0..3 {
            create_chicken(
                &db,
                &NewChicken {
                    farm_id: Some(first),
                    sex: Sex::Female,
                    ..Default::default()
                },
            )
            .await?;
        }
        create_chicken(
            &db,
            &NewChicken {
                farm_id: Some(second),
                sex: Sex::Male,
                ..Default::default()
            },
        )
        .await?;

        assert_eq!(get_chickens_for_farm(&db, first).await?.len(), 3);
        assert_eq!(get_chickens_for_farm(&db, second).await?.len(), 1);
        Ok(())
    }
}

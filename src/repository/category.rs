use diesel::prelude::*;

use crate::domain::category::{Category, NewCategory};
use crate::domain::types::{CategoryId, UserId};
use crate::models::category::{Category as DbCategory, NewCategory as DbNewCategory};
use crate::repository::errors::RepositoryError;
use crate::repository::{CategoryReader, CategoryWriter, DieselRepository, RepositoryResult};

impl CategoryReader for DieselRepository {
    fn list_categories(&self, user_id: UserId) -> RepositoryResult<Vec<Category>> {
        use crate::schema::event_categories;

        let mut conn = self.conn()?;

        let rows = event_categories::table
            .filter(event_categories::user_id.eq(user_id.get()))
            .order(event_categories::created_at.asc())
            .load::<DbCategory>(&mut conn)?;

        Ok(rows
            .into_iter()
            .filter_map(|row| match Category::try_from(row) {
                Ok(category) => Some(category),
                Err(e) => {
                    log::warn!("skipping category row failing domain validation: {e}");
                    None
                }
            })
            .collect())
    }

    fn has_categories(&self, user_id: UserId) -> RepositoryResult<bool> {
        use crate::schema::event_categories;

        let mut conn = self.conn()?;

        let total = event_categories::table
            .filter(event_categories::user_id.eq(user_id.get()))
            .count()
            .get_result::<i64>(&mut conn)?;

        Ok(total > 0)
    }

    fn get_category_by_id(
        &self,
        id: CategoryId,
        user_id: UserId,
    ) -> RepositoryResult<Option<Category>> {
        use crate::schema::event_categories;

        let mut conn = self.conn()?;

        let category = event_categories::table
            .filter(event_categories::id.eq(id.get()))
            .filter(event_categories::user_id.eq(user_id.get()))
            .first::<DbCategory>(&mut conn)
            .optional()?;

        category
            .map(Category::try_from)
            .transpose()
            .map_err(|e| RepositoryError::Validation(e.to_string()))
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category> {
        use crate::schema::event_categories;

        let mut conn = self.conn()?;
        let db_category: DbNewCategory = category.clone().into();

        let inserted = diesel::insert_into(event_categories::table)
            .values(db_category)
            .get_result::<DbCategory>(&mut conn)?;

        Category::try_from(inserted).map_err(|e| RepositoryError::Validation(e.to_string()))
    }

    fn create_categories(&self, categories: &[NewCategory]) -> RepositoryResult<usize> {
        use crate::schema::event_categories;

        let mut conn = self.conn()?;
        let db_categories: Vec<DbNewCategory> = categories
            .iter()
            .cloned()
            .map(DbNewCategory::from)
            .collect();

        let affected = diesel::insert_into(event_categories::table)
            .values(db_categories)
            .execute(&mut conn)?;

        Ok(affected)
    }
}

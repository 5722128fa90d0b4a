use diesel::prelude::*;

use crate::domain::types::UserId;
use crate::domain::user::{NewUser, ProfilePatch, ProfileStats, User};
use crate::models::user::{NewUser as DbNewUser, User as DbUser};
use crate::repository::errors::RepositoryError;
use crate::repository::{DieselRepository, RepositoryResult, UserReader, UserWriter};

impl UserReader for DieselRepository {
    fn get_user_by_id(&self, id: UserId) -> RepositoryResult<Option<User>> {
        use crate::schema::users;

        let mut conn = self.conn()?;

        let user = users::table
            .find(id.get())
            .first::<DbUser>(&mut conn)
            .optional()?;

        user.map(User::try_from)
            .transpose()
            .map_err(|e| RepositoryError::Validation(e.to_string()))
    }

    fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        use crate::schema::users;

        let mut conn = self.conn()?;

        let user = users::table
            .filter(users::email.eq(email))
            .first::<DbUser>(&mut conn)
            .optional()?;

        user.map(User::try_from)
            .transpose()
            .map_err(|e| RepositoryError::Validation(e.to_string()))
    }
}

impl UserWriter for DieselRepository {
    fn create_user(&self, user: &NewUser) -> RepositoryResult<User> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let db_user: DbNewUser = user.clone().into();

        let inserted = diesel::insert_into(users::table)
            .values(db_user)
            .get_result::<DbUser>(&mut conn)?;

        User::try_from(inserted).map_err(|e| RepositoryError::Validation(e.to_string()))
    }

    fn update_profile(&self, id: UserId, patch: &ProfilePatch) -> RepositoryResult<usize> {
        use crate::schema::users;

        if patch.is_empty() {
            return Ok(0);
        }

        let mut conn = self.conn()?;

        let affected = diesel::update(users::table.find(id.get()))
            .set((
                patch.username.clone().map(|v| users::username.eq(v)),
                patch.email.clone().map(|v| users::email.eq(v)),
                patch.theme.clone().map(|v| users::theme.eq(v)),
                patch
                    .password_hash
                    .clone()
                    .map(|v| users::password_hash.eq(v)),
            ))
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn adjust_task_counters(
        &self,
        id: UserId,
        total_delta: i32,
        completed_delta: i32,
    ) -> RepositoryResult<usize> {
        use crate::schema::users;

        let mut conn = self.conn()?;

        // Relative single-statement update; per-row atomicity in SQLite is
        // the only coordination between racing requests.
        let affected = diesel::update(users::table.find(id.get()))
            .set((
                users::total_tasks.eq(users::total_tasks + total_delta),
                users::completed_tasks.eq(users::completed_tasks + completed_delta),
            ))
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn store_profile_stats(&self, id: UserId, stats: &ProfileStats) -> RepositoryResult<usize> {
        use crate::schema::users;

        let mut conn = self.conn()?;

        let affected = diesel::update(users::table.find(id.get()))
            .set((
                users::completed_tasks.eq(stats.completed_tasks),
                users::total_days.eq(stats.total_days),
                users::streak_days.eq(stats.streak_days),
                users::avg_mood.eq(stats.avg_mood),
            ))
            .execute(&mut conn)?;

        Ok(affected)
    }
}

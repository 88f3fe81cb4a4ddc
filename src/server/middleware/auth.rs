use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Resolves the logged in user of a request.
///
/// Endpoints that need a user call [`AuthGuard::require`]; endpoints that merely
/// behave differently for logged in users call [`AuthGuard::optional`].
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the logged in user.
    ///
    /// # Returns
    /// - `Ok(User)` - Session holds a user that still exists
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session refers to a deleted user
    pub async fn require(&self) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db)
            .find_by_discord_id(user_id)
            .await?
        else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(user)
    }

    /// Returns the logged in user, or `None` for anonymous requests.
    ///
    /// A session pointing at a deleted user is treated as anonymous.
    pub async fn optional(&self) -> Result<Option<User>, AppError> {
        match self.require().await {
            Ok(user) => Ok(Some(user)),
            Err(AppError::AuthErr(AuthError::UserNotInSession))
            | Err(AppError::AuthErr(AuthError::UserNotInDatabase(_))) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

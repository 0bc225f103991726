/**
 * Account Deletion
 *
 * An account can only be deleted by its owner: the authenticated
 * principal's email must equal the target account's email.
 *
 * Checks run in this order:
 * 1. Target account exists, else `NotFound`
 * 2. Principal owns it, else `Unauthorized`
 */

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthenticatedUser;
use crate::backend::store::UserStore;

/// Delete account `id` on behalf of `principal`
pub async fn delete_account<S>(
    store: &S,
    principal: &AuthenticatedUser,
    id: i64,
) -> Result<(), BackendError>
where
    S: UserStore + ?Sized,
{
    let user = store
        .find_user_by_id(id)
        .await?
        .ok_or_else(|| BackendError::not_found(format!("User {} not found", id)))?;

    if user.email != principal.email {
        tracing::warn!(
            "{} attempted to delete account {} owned by {}",
            principal.email,
            id,
            user.email
        );
        return Err(BackendError::unauthorized(
            "You are not allowed to delete this account",
        ));
    }

    store.delete_user(id).await?;
    tracing::info!("Deleted account {} ({})", id, user.email);
    Ok(())
}

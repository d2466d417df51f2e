//! User resource implementation.
//!
//! Panel accounts, managed through `application/users`.
//!
//! # Example
//!
//! ```rust,ignore
//! use pterodactyl_api::rest::PanelResource;
//! use pterodactyl_api::rest::resources::{NewUser, User};
//!
//! let user = User::create(&client, &NewUser {
//!     email: "jane@example.com".to_string(),
//!     username: "jane".to_string(),
//!     first_name: "Jane".to_string(),
//!     last_name: "Doe".to_string(),
//!     ..Default::default()
//! }).await?;
//!
//! let pending = user.set_email(&client, "jane.doe@example.com")?;
//! let user = pending.confirm().await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{HttpMethod, RestClient};
use crate::rest::{
    EntityChanges, PaginationCursor, PanelResource, PendingUpdate, ResourceError,
    ResourceOperation, ResourcePath,
};

/// A panel account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// The numeric ID of the user.
    pub id: u64,
    /// An ID assigned by an external system (billing, SSO, ...).
    #[serde(default)]
    pub external_id: Option<String>,
    /// The user's UUID.
    pub uuid: String,
    /// The login name.
    pub username: String,
    /// The e-mail address.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Interface language code (e.g., `en`).
    pub language: String,
    /// Whether the user is a panel administrator.
    pub root_admin: bool,
    /// Whether two-factor authentication is enabled.
    #[serde(rename = "2fa")]
    pub two_factor: bool,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Cursor of the list call this user came from.
    #[serde(skip)]
    pub pagination: Option<PaginationCursor>,
}

/// Options for creating a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewUser {
    /// The e-mail address.
    pub email: String,
    /// The login name.
    pub username: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Initial password. Without one the panel mails a setup link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Whether the user is a panel administrator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_admin: Option<bool>,
    /// Interface language code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// An ID assigned by an external system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

/// Changes for a user update. Unset fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Write-only; never reflected on the entity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

impl EntityChanges<User> for UserChanges {
    fn apply_to(&self, user: &mut User) {
        if let Some(username) = &self.username {
            user.username.clone_from(username);
        }
        if let Some(email) = &self.email {
            user.email.clone_from(email);
        }
        if let Some(first_name) = &self.first_name {
            user.first_name.clone_from(first_name);
        }
        if let Some(last_name) = &self.last_name {
            user.last_name.clone_from(last_name);
        }
        if let Some(language) = &self.language {
            user.language.clone_from(language);
        }
        if let Some(root_admin) = self.root_admin {
            user.root_admin = root_admin;
        }
        if let Some(external_id) = &self.external_id {
            user.external_id = Some(external_id.clone());
        }
    }
}

/// Fields the update endpoint requires on every call.
#[derive(Serialize)]
struct UserUpdateBase<'a> {
    username: &'a str,
    email: &'a str,
    first_name: &'a str,
    last_name: &'a str,
    language: &'a str,
    external_id: Option<&'a str>,
}

impl User {
    fn update_base(&self) -> UserUpdateBase<'_> {
        UserUpdateBase {
            username: &self.username,
            email: &self.email,
            first_name: &self.first_name,
            last_name: &self.last_name,
            language: &self.language,
            external_id: self.external_id.as_deref(),
        }
    }

    /// Prepares an update of several fields at once.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the body can't be built.
    pub fn update<'c>(
        &self,
        client: &'c RestClient,
        changes: UserChanges,
    ) -> Result<PendingUpdate<'c, Self>, ResourceError> {
        self.prepare_update(client, &self.update_base(), &changes)
    }

    /// Prepares a username change.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the body can't be built.
    pub fn set_username<'c>(
        &self,
        client: &'c RestClient,
        username: impl Into<String>,
    ) -> Result<PendingUpdate<'c, Self>, ResourceError> {
        self.update(
            client,
            UserChanges {
                username: Some(username.into()),
                ..Default::default()
            },
        )
    }

    /// Prepares an e-mail change.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the body can't be built.
    pub fn set_email<'c>(
        &self,
        client: &'c RestClient,
        email: impl Into<String>,
    ) -> Result<PendingUpdate<'c, Self>, ResourceError> {
        self.update(
            client,
            UserChanges {
                email: Some(email.into()),
                ..Default::default()
            },
        )
    }

    /// Prepares a given-name change.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the body can't be built.
    pub fn set_first_name<'c>(
        &self,
        client: &'c RestClient,
        first_name: impl Into<String>,
    ) -> Result<PendingUpdate<'c, Self>, ResourceError> {
        self.update(
            client,
            UserChanges {
                first_name: Some(first_name.into()),
                ..Default::default()
            },
        )
    }

    /// Prepares a family-name change.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the body can't be built.
    pub fn set_last_name<'c>(
        &self,
        client: &'c RestClient,
        last_name: impl Into<String>,
    ) -> Result<PendingUpdate<'c, Self>, ResourceError> {
        self.update(
            client,
            UserChanges {
                last_name: Some(last_name.into()),
                ..Default::default()
            },
        )
    }

    /// Prepares a language change.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the body can't be built.
    pub fn set_language<'c>(
        &self,
        client: &'c RestClient,
        language: impl Into<String>,
    ) -> Result<PendingUpdate<'c, Self>, ResourceError> {
        self.update(
            client,
            UserChanges {
                language: Some(language.into()),
                ..Default::default()
            },
        )
    }

    /// Prepares a password change. The optimistic copy is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the body can't be built.
    pub fn set_password<'c>(
        &self,
        client: &'c RestClient,
        password: impl Into<String>,
    ) -> Result<PendingUpdate<'c, Self>, ResourceError> {
        self.update(
            client,
            UserChanges {
                password: Some(password.into()),
                ..Default::default()
            },
        )
    }

    /// Prepares granting or revoking administrator rights.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the body can't be built.
    pub fn set_root_admin<'c>(
        &self,
        client: &'c RestClient,
        root_admin: bool,
    ) -> Result<PendingUpdate<'c, Self>, ResourceError> {
        self.update(
            client,
            UserChanges {
                root_admin: Some(root_admin),
                ..Default::default()
            },
        )
    }

    /// Prepares an external ID change.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if the body can't be built.
    pub fn set_external_id<'c>(
        &self,
        client: &'c RestClient,
        external_id: impl Into<String>,
    ) -> Result<PendingUpdate<'c, Self>, ResourceError> {
        self.update(
            client,
            UserChanges {
                external_id: Some(external_id.into()),
                ..Default::default()
            },
        )
    }
}

impl PanelResource for User {
    type Id = u64;

    const NAME: &'static str = "User";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "application/users/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::FindByExternalId,
            &["external_id"],
            "application/users/external/{external_id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "application/users"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "application/users"),
        ResourcePath::new(
            HttpMethod::Patch,
            ResourceOperation::Update,
            &["id"],
            "application/users/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "application/users/{id}",
        ),
    ];

    fn get_id(&self) -> Self::Id {
        self.id
    }

    fn pagination(&self) -> Option<&PaginationCursor> {
        self.pagination.as_ref()
    }

    fn attach_pagination(&mut self, cursor: Option<PaginationCursor>) {
        self.pagination = cursor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::get_path;
    use crate::rest::resources::test_support::offline_client;
    use serde_json::json;

    fn sample_user() -> User {
        User::hydrate(json!({
            "id": 2,
            "external_id": null,
            "uuid": "4cbba6d2-923b-4630-b2bb-a3c4e5e3e26e",
            "username": "gameadmin",
            "email": "admin@example.com",
            "first_name": "Game",
            "last_name": "Admin",
            "language": "en",
            "root_admin": false,
            "2fa": true,
            "created_at": "2020-06-12T21:01:07+00:00",
            "updated_at": "2020-06-13T08:45:21+00:00"
        }))
        .unwrap()
    }

    #[test]
    fn test_user_hydration_maps_remote_names() {
        let user = sample_user();

        assert_eq!(user.id, 2);
        assert_eq!(user.username, "gameadmin");
        assert!(user.two_factor);
        assert_eq!(user.external_id, None);
        assert!(user.updated_at.is_some());
        assert!(user.pagination.is_none());
    }

    #[test]
    fn test_user_serializes_two_factor_under_remote_name() {
        let raw = sample_user().to_raw().unwrap();
        assert_eq!(raw["2fa"], true);
        assert!(raw.get("two_factor").is_none());
        assert!(raw.get("pagination").is_none());
    }

    #[test]
    fn test_user_paths() {
        assert_eq!(
            get_path(User::PATHS, ResourceOperation::FindByExternalId, &["external_id"])
                .map(|p| p.template),
            Some("application/users/external/{external_id}")
        );
        assert_eq!(
            get_path(User::PATHS, ResourceOperation::Update, &["id"]).map(|p| p.http_method),
            Some(HttpMethod::Patch)
        );
    }

    #[test]
    fn test_set_email_keeps_required_fields_in_body() {
        let client = offline_client();
        let user = sample_user();

        let pending = user.set_email(&client, "new@example.com").unwrap();

        assert_eq!(
            serde_json::Value::Object(pending.body().clone()),
            json!({
                "username": "gameadmin",
                "email": "new@example.com",
                "first_name": "Game",
                "last_name": "Admin",
                "language": "en",
                "external_id": null
            })
        );
        assert_eq!(pending.path(), "application/users/2");
    }

    #[test]
    fn test_optimistic_copy_does_not_touch_original() {
        let client = offline_client();
        let user = sample_user();

        let pending = user.set_first_name(&client, "Gaming").unwrap();

        assert_eq!(pending.optimistic().first_name, "Gaming");
        assert_eq!(user.first_name, "Game");
    }

    #[test]
    fn test_password_is_sent_but_not_applied() {
        let client = offline_client();
        let user = sample_user();

        let pending = user.set_password(&client, "correct horse").unwrap();

        assert_eq!(pending.body()["password"], "correct horse");
        assert_eq!(pending.optimistic(), &user);
    }

    #[test]
    fn test_new_user_skips_unset_options() {
        let options = NewUser {
            email: "jane@example.com".to_string(),
            username: "jane".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            ..Default::default()
        };

        let value = serde_json::to_value(&options).unwrap();
        assert!(value.get("password").is_none());
        assert!(value.get("root_admin").is_none());
        assert_eq!(value["email"], "jane@example.com");
    }
}

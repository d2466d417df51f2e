//! Nest resource implementation.
//!
//! Nests group eggs by game or software family. They are read-only through
//! the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Egg;
use crate::clients::{HttpMethod, RestClient};
use crate::rest::{
    PaginationCursor, PanelResource, ReadOnlyResource, ResourceError, ResourceOperation,
    ResourcePath, ResourceResponse,
};

/// A group of eggs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nest {
    pub id: u64,
    pub uuid: String,
    /// Contact address of the nest's author.
    pub author: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip)]
    pub pagination: Option<PaginationCursor>,
}

impl Nest {
    /// Lists one page of this nest's eggs.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the nest no longer exists.
    pub async fn eggs(
        &self,
        client: &RestClient,
        page: Option<u32>,
    ) -> Result<ResourceResponse<Vec<Egg>>, ResourceError> {
        Egg::all_in_nest(client, self.id, page).await
    }
}

impl PanelResource for Nest {
    type Id = u64;

    const NAME: &'static str = "Nest";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "application/nests/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "application/nests"),
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

impl ReadOnlyResource for Nest {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_nest_cannot_be_deleted() {
        let client = crate::rest::resources::test_support::offline_client();
        let nest = Nest::hydrate(json!({
            "id": 1,
            "uuid": "58a5f7c5-5c9a-4a5b-9b5e-3c3c6e1b7f0a",
            "author": "support@pterodactyl.io",
            "name": "Minecraft",
            "description": "Minecraft - the classic game from Mojang."
        }))
        .unwrap();

        let result = nest.delete(&client).await;

        assert!(matches!(
            result,
            Err(ResourceError::PathResolutionFailed { resource: "Nest", operation: "delete" })
        ));
    }
}

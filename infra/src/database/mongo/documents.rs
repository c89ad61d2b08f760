//! BSON document shapes and their mapping to domain entities
//!
//! Identifiers are `ObjectId`s in the store and hex strings in the domain.

use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gavel_core::domain::entities::auction_item::AuctionItem;
use gavel_core::domain::entities::user::{NewUserCredentials, UserCredentials};

/// Stored form of an auction item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuctionItemDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub description: String,
    pub category: String,
    pub status: String,
    pub estimated_value: f64,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl AuctionItemDocument {
    /// Map an entity to its document; an id that is not an ObjectId is dropped
    pub fn from_entity(item: AuctionItem) -> Self {
        Self {
            id: item.id.as_deref().and_then(|id| ObjectId::parse_str(id).ok()),
            title: item.title,
            description: item.description,
            category: item.category,
            status: item.status,
            estimated_value: item.estimated_value,
            created_at: item.created_at,
        }
    }

    pub fn into_entity(self) -> AuctionItem {
        let item = AuctionItem::new(
            self.title,
            self.description,
            self.category,
            self.status,
            self.estimated_value,
            self.created_at,
        );
        match self.id {
            Some(id) => item.with_id(id.to_hex()),
            None => item,
        }
    }
}

/// Stored form of a user's credentials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserCredentialsDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub email: String,
    pub password: String,
    #[serde(rename = "tokenVersion", default)]
    pub token_version: i64,
}

impl UserCredentialsDocument {
    /// Document for a new account under a freshly generated id
    pub fn new_account(user: NewUserCredentials) -> Self {
        Self {
            id: ObjectId::new(),
            email: user.email,
            password: user.password,
            token_version: user.token_version,
        }
    }

    pub fn into_entity(self) -> UserCredentials {
        UserCredentials {
            id: self.id.to_hex(),
            email: self.email,
            password: self.password,
            token_version: self.token_version,
        }
    }
}

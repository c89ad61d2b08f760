//! MongoDB implementation of the AuctionRepository trait.

use async_trait::async_trait;
use bson::doc;
use bson::oid::ObjectId;
use futures_util::TryStreamExt;
use mongodb::options::FindOptions;
use mongodb::{Collection, Database};

use gavel_core::domain::entities::auction_item::AuctionItem;
use gavel_core::errors::DomainError;
use gavel_core::repositories::AuctionRepository;
use gavel_shared::Pagination;

use super::documents::AuctionItemDocument;
use super::errors::{read_error, write_error};
use crate::database::connection::ping;
use crate::database::AUCTION_COLLECTION_NAME;

/// MongoDB implementation of AuctionRepository
pub struct MongoAuctionRepository {
    database: Database,
    collection: Collection<AuctionItemDocument>,
}

impl MongoAuctionRepository {
    /// Create a repository over the `auction_items` collection of `database`
    pub fn new(database: Database) -> Self {
        let collection = database.collection::<AuctionItemDocument>(AUCTION_COLLECTION_NAME);
        Self {
            database,
            collection,
        }
    }

    async fn find_many(
        &self,
        filter: bson::Document,
        options: Option<FindOptions>,
        operation: &str,
    ) -> Result<Vec<AuctionItem>, DomainError> {
        let cursor = self
            .collection
            .find(filter, options)
            .await
            .map_err(|e| read_error(operation, e))?;
        let documents: Vec<AuctionItemDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| read_error(operation, e))?;

        Ok(documents
            .into_iter()
            .map(AuctionItemDocument::into_entity)
            .collect())
    }
}

/// Case-insensitive `$regex` filter over title and description matching
/// `query` literally
pub(crate) fn search_filter(query: &str) -> bson::Document {
    let pattern = regex::escape(query);
    doc! {
        "$or": [
            { "title": { "$regex": pattern.as_str(), "$options": "i" } },
            { "description": { "$regex": pattern.as_str(), "$options": "i" } },
        ]
    }
}

/// Find options for one page; a zero limit means "no limit"
pub(crate) fn page_options(pagination: Pagination) -> FindOptions {
    FindOptions::builder()
        .skip(pagination.skip)
        .limit((pagination.limit > 0).then_some(i64::from(pagination.limit)))
        .build()
}

#[async_trait]
impl AuctionRepository for MongoAuctionRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<AuctionItem>, DomainError> {
        let object_id = match ObjectId::parse_str(id) {
            Ok(object_id) => object_id,
            Err(_) => {
                tracing::debug!(id, "Not an ObjectId, treating as missing");
                return Ok(None);
            }
        };

        let document = self
            .collection
            .find_one(doc! { "_id": object_id }, None)
            .await
            .map_err(|e| read_error("Finding auction item", e))?;

        Ok(document.map(AuctionItemDocument::into_entity))
    }

    async fn find_all(&self, pagination: Pagination) -> Result<Vec<AuctionItem>, DomainError> {
        self.find_many(doc! {}, Some(page_options(pagination)), "Listing auction items")
            .await
    }

    async fn create(&self, item: AuctionItem) -> Result<AuctionItem, DomainError> {
        let operation = format!("Creating auction item - {}", item.title);
        let mut document = AuctionItemDocument::from_entity(item);
        let id = ObjectId::new();
        document.id = Some(id);

        self.collection
            .insert_one(&document, None)
            .await
            .map_err(|e| write_error(&operation, e))?;

        Ok(document.into_entity())
    }

    async fn search(&self, query: &str) -> Result<Vec<AuctionItem>, DomainError> {
        self.find_many(search_filter(query), None, "Searching auction items")
            .await
    }

    async fn insert_many(&self, items: Vec<AuctionItem>) -> Result<(), DomainError> {
        let submitted = items.len();
        let documents: Vec<AuctionItemDocument> = items
            .into_iter()
            .map(AuctionItemDocument::from_entity)
            .collect();

        let result = self
            .collection
            .insert_many(documents, None)
            .await
            .map_err(|e| write_error("Inserting CSV data", e))?;

        let inserted = result.inserted_ids.len();
        if inserted != submitted {
            tracing::warn!(
                inserted,
                submitted,
                "Mismatch while inserting CSV data"
            );
        }
        Ok(())
    }

    async fn is_healthy(&self) -> bool {
        ping(&self.database).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_filter_escapes_regex_metacharacters() {
        let filter = search_filter("1.5 (ct)");
        let clauses = filter.get_array("$or").unwrap();
        let title = clauses[0].as_document().unwrap().get_document("title").unwrap();

        assert_eq!(title.get_str("$regex").unwrap(), r"1\.5 \(ct\)");
        assert_eq!(title.get_str("$options").unwrap(), "i");
        assert_eq!(clauses.len(), 2);
    }

    #[test]
    fn test_page_options() {
        let options = page_options(Pagination::new(10, 20));
        assert_eq!(options.limit, Some(10));
        assert_eq!(options.skip, Some(20));

        assert_eq!(page_options(Pagination::new(0, 0)).limit, None);
    }
}

//! Article and entry models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::schema::{split_records, FieldDefinition, FieldRecord, FieldSection};

/// A manufacturing item definition with its field schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Engineering metadata fields, filled once at creation
    pub attribute_fields: Vec<FieldDefinition>,
    /// Operator fields, filled per entry
    pub shop_floor_fields: Vec<FieldDefinition>,
    /// Values for `attribute_fields`
    #[serde(default)]
    pub attributes: Map<String, Value>,
    pub created_at: DateTime<Utc>,
}

impl Article {
    /// Builds a new article with a fresh id.
    pub fn from_request(request: NewArticle) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: request.name.trim().to_string(),
            description: request.description,
            attribute_fields: request.attribute_fields,
            shop_floor_fields: request.shop_floor_fields,
            attributes: request.attributes,
            created_at: Utc::now(),
        }
    }
}

/// Request body for creating an article
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewArticle {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub attribute_fields: Vec<FieldDefinition>,
    #[serde(default)]
    pub shop_floor_fields: Vec<FieldDefinition>,
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

/// A validated shop floor submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: Uuid,
    pub article_id: Uuid,
    pub data: Map<String, Value>,
    pub created_at: DateTime<Utc>,
}

impl Entry {
    pub fn new(article_id: Uuid, data: Map<String, Value>) -> Self {
        Self {
            id: Uuid::new_v4(),
            article_id,
            data,
            created_at: Utc::now(),
        }
    }
}

/// On-disk form of an article; fields are stored as flat records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleSnapshot {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub fields: Vec<FieldRecord>,
    #[serde(default)]
    pub attributes: Map<String, Value>,
    pub created_at: DateTime<Utc>,
}

impl From<&Article> for ArticleSnapshot {
    fn from(article: &Article) -> Self {
        let attribute = article
            .attribute_fields
            .iter()
            .map(|f| FieldRecord::from_definition(f, FieldSection::Attribute));
        let shop_floor = article
            .shop_floor_fields
            .iter()
            .map(|f| FieldRecord::from_definition(f, FieldSection::ShopFloor));

        Self {
            id: article.id,
            name: article.name.clone(),
            description: article.description.clone(),
            fields: attribute.chain(shop_floor).collect(),
            attributes: article.attributes.clone(),
            created_at: article.created_at,
        }
    }
}

impl From<ArticleSnapshot> for Article {
    fn from(snapshot: ArticleSnapshot) -> Self {
        let (attribute_fields, shop_floor_fields) = split_records(&snapshot.fields);
        Self {
            id: snapshot.id,
            name: snapshot.name,
            description: snapshot.description,
            attribute_fields,
            shop_floor_fields,
            attributes: snapshot.attributes,
            created_at: snapshot.created_at,
        }
    }
}

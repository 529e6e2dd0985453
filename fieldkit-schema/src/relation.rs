//! Relation custom-field values.
//!
//! A relation value is a read-only snapshot of the referenced entity: the id
//! that gets persisted, plus whatever display attributes the fetch selection
//! pulled in so a picker can show a preview. The referenced entity itself is
//! owned elsewhere.

use serde::{Deserialize, Serialize};

/// One selected related entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RelationValue {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_asset: Option<AssetRef>,
}

/// Denormalized pointer to an entity's featured asset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetRef {
    pub preview: String,
}

impl RelationValue {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Human-readable label for a picker preview. The accessor varies by
    /// target entity kind: assets show their preview image path, product
    /// variants show name plus SKU, products show their name. Anything else
    /// falls back to the featured asset's preview, then the bare id.
    pub fn display_label(&self, target_entity: &str) -> String {
        match target_entity {
            "asset" | "Asset" => {
                if let Some(preview) = &self.preview {
                    return preview.clone();
                }
            }
            "productVariant" | "ProductVariant" => {
                if let Some(name) = &self.name {
                    return match &self.sku {
                        Some(sku) => format!("{name} ({sku})"),
                        None => name.clone(),
                    };
                }
            }
            "product" | "Product" => {
                if let Some(name) = &self.name {
                    return name.clone();
                }
            }
            _ => {}
        }
        if let Some(asset) = &self.featured_asset {
            return asset.preview.clone();
        }
        self.id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn asset_label_is_preview() {
        let value = RelationValue {
            id: "a1".into(),
            preview: Some("/assets/cover.jpg".into()),
            ..Default::default()
        };
        assert_eq!(value.display_label("asset"), "/assets/cover.jpg");
    }

    #[test]
    fn variant_label_is_name_and_sku() {
        let value = RelationValue {
            id: "v1".into(),
            name: Some("Chair".into()),
            sku: Some("CH-01".into()),
            ..Default::default()
        };
        assert_eq!(value.display_label("productVariant"), "Chair (CH-01)");
    }

    #[test]
    fn product_label_is_name() {
        let value = RelationValue {
            id: "p1".into(),
            name: Some("Chair".into()),
            ..Default::default()
        };
        assert_eq!(value.display_label("product"), "Chair");
    }

    #[test]
    fn unknown_target_falls_back_to_featured_asset_then_id() {
        let with_asset = RelationValue {
            id: "c1".into(),
            featured_asset: Some(AssetRef {
                preview: "/assets/thumb.jpg".into(),
            }),
            ..Default::default()
        };
        assert_eq!(with_asset.display_label("collection"), "/assets/thumb.jpg");

        let bare = RelationValue::new("c2");
        assert_eq!(bare.display_label("collection"), "c2");
    }

    #[test]
    fn wire_round_trip() {
        let value: RelationValue = serde_json::from_value(json!({
            "id": "v1",
            "name": "Chair",
            "sku": "CH-01",
            "featuredAsset": {"preview": "/assets/thumb.jpg"}
        }))
        .unwrap();
        assert_eq!(value.sku.as_deref(), Some("CH-01"));
        let wire = serde_json::to_value(&value).unwrap();
        assert_eq!(wire["featuredAsset"]["preview"], "/assets/thumb.jpg");
    }
}

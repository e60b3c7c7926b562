// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Custom dimension merging

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::queue::Scalar;

/// A caller-supplied key/value pair merged into an event's metadata
///
/// Ephemeral: supplied per call and not retained by the tracker. Numeric
/// dimension ids are carried as their decimal string form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomDimension {
    /// Dimension id, used as the meta key
    pub id: String,
    /// Dimension value
    pub value: String,
}

impl CustomDimension {
    /// Create a new custom dimension
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }

    /// Create a dimension with a numeric id
    pub fn numeric(id: u32, value: impl Into<String>) -> Self {
        Self::new(id.to_string(), value)
    }
}

/// Fold custom dimensions into a metadata map
///
/// Last write wins, in input-list order. A dimension whose id matches a fixed
/// meta key overwrites that key.
pub fn merge_custom_dimensions(meta: &mut HashMap<String, Scalar>, dimensions: &[CustomDimension]) {
    for dimension in dimensions {
        meta.insert(
            dimension.id.clone(),
            Scalar::Text(dimension.value.clone()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_distinct_ids() {
        let mut meta = HashMap::new();
        merge_custom_dimensions(
            &mut meta,
            &[
                CustomDimension::new("user_city", "Amsterdam"),
                CustomDimension::new("user_role", "resident"),
            ],
        );

        assert_eq!(meta.len(), 2);
        assert_eq!(
            meta.get("user_city"),
            Some(&Scalar::Text("Amsterdam".into()))
        );
        assert_eq!(
            meta.get("user_role"),
            Some(&Scalar::Text("resident".into()))
        );
    }

    #[test]
    fn test_merge_overwrites_fixed_key() {
        let mut meta = HashMap::new();
        meta.insert("label".to_string(), Scalar::Text("/".into()));

        merge_custom_dimensions(&mut meta, &[CustomDimension::new("label", "overridden")]);

        assert_eq!(meta.get("label"), Some(&Scalar::Text("overridden".into())));
    }

    #[test]
    fn test_merge_last_write_wins() {
        let mut meta = HashMap::new();
        merge_custom_dimensions(
            &mut meta,
            &[
                CustomDimension::new("user_city", "Amsterdam"),
                CustomDimension::new("user_city", "Rotterdam"),
            ],
        );

        assert_eq!(
            meta.get("user_city"),
            Some(&Scalar::Text("Rotterdam".into()))
        );
    }

    #[test]
    fn test_numeric_id() {
        let dimension = CustomDimension::numeric(7, "north");
        assert_eq!(dimension.id, "7");
    }
}

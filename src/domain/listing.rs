use crate::domain::amenities::parse_amenities;
use crate::domain::format::parse_leading_float;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

pub const THUMBNAIL_PLACEHOLDER: &str = "https://via.placeholder.com/400x300?text=No+Image";
pub const THUMBNAIL_BROKEN_PLACEHOLDER: &str =
    "https://via.placeholder.com/400x300?text=Image+Not+Available";
pub const HOST_PHOTO_PLACEHOLDER: &str = "https://via.placeholder.com/50";
pub const HOST_PHOTO_BROKEN_PLACEHOLDER: &str = "https://via.placeholder.com/40?text=H";

/// One rental as it appears in the listings resource.
///
/// Every field is optional and loosely typed: scalars may arrive as strings,
/// numbers or booleans. Falsy values (`""`, `0`, `false`, `null`) count as
/// absent.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Listing {
    #[serde(default, deserialize_with = "de_opt_text")]
    pub name: Option<String>,
    /// Currency formatted, e.g. `"$1,250.00"`.
    #[serde(default, deserialize_with = "de_opt_text")]
    pub price: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub description: Option<String>,
    /// Either a JSON array or a serialized/delimited string.
    #[serde(default)]
    pub amenities: Value,

    #[serde(default, deserialize_with = "de_opt_text")]
    pub host_name: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub host_picture_url: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub host_thumbnail_url: Option<String>,
    /// `"t"` / `"f"` in the source data.
    #[serde(default, deserialize_with = "de_opt_text")]
    pub host_is_superhost: Option<String>,

    #[serde(default, deserialize_with = "de_opt_text")]
    pub picture_url: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub review_scores_rating: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub property_type: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub room_type: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub accommodates: Option<String>,

    /// Columns the cards don't use, kept so the record serializes back whole.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Listing {
    pub fn title(&self) -> &str {
        self.name.as_deref().unwrap_or("Untitled Listing")
    }

    pub fn thumbnail_alt(&self) -> &str {
        self.name.as_deref().unwrap_or("Listing")
    }

    pub fn thumbnail_url(&self) -> &str {
        self.picture_url.as_deref().unwrap_or(THUMBNAIL_PLACEHOLDER)
    }

    pub fn host_photo_url(&self) -> &str {
        self.host_picture_url
            .as_deref()
            .or(self.host_thumbnail_url.as_deref())
            .unwrap_or(HOST_PHOTO_PLACEHOLDER)
    }

    pub fn host_photo_alt(&self) -> &str {
        self.host_name.as_deref().unwrap_or("Host")
    }

    pub fn host_display_name(&self) -> &str {
        self.host_name.as_deref().unwrap_or("Unknown Host")
    }

    pub fn is_superhost(&self) -> bool {
        self.host_is_superhost.as_deref() == Some("t")
    }

    pub fn description_text(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or("No description available")
    }

    pub fn amenities(&self) -> Vec<String> {
        parse_amenities(&self.amenities)
    }

    pub fn rating(&self) -> Option<f64> {
        self.review_scores_rating
            .as_deref()
            .and_then(parse_leading_float)
    }
}

/// Accept a string, number or boolean where text is expected.
///
/// Falsy values (`""`, `0`, `false`, `null`) are absent; the string `"0"`
/// is not. `true` maps onto the dataset's `"t"` convention. Arrays and
/// objects carry no usable text and are dropped.
fn de_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    Ok(match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Some(Value::Bool(true)) => Some("t".to_string()),
        _ => None,
    })
}

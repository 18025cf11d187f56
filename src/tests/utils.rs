use crate::catalog::Catalog;
use crate::loader::parse_listings;
use astra::Response;
use std::io::Read;

pub const SAMPLE_LISTINGS: &str = r#"[
  {
    "id": 1,
    "name": "Lakeview Loft",
    "description": "Bright loft two blocks from the lake.",
    "picture_url": "https://img.example.com/loft.jpg",
    "host_name": "Rebecca",
    "host_is_superhost": "t",
    "host_picture_url": "https://img.example.com/rebecca.jpg",
    "property_type": "Entire loft",
    "room_type": "Entire home/apt",
    "accommodates": 4,
    "amenities": ["Wifi", "Kitchen", "Heating", "Washer", "Dryer", "Iron", "Hangers"],
    "price": "$1,250.00",
    "review_scores_rating": 4.86
  },
  {
    "id": 2,
    "host_is_superhost": "f",
    "amenities": "[\"\"Wifi\"\", \"\"Pool\"\"]"
  }
]"#;

/// A catalog loaded from `SAMPLE_LISTINGS`.
pub fn sample_catalog() -> Catalog {
    Catalog::Loaded(parse_listings(SAMPLE_LISTINGS).expect("sample listings should parse"))
}

pub fn body_string(resp: Response) -> String {
    let mut body = resp.into_body();
    let mut out = String::new();
    body.reader().read_to_string(&mut out).unwrap();
    out
}

//! Sample catalog shared by the integration tests and the dev server.
//!
//! The records are deliberately uneven, the way the real service returns
//! them: some have every field, some only an id and a category.

use payloads::responses::{CreatedBy, Exhibition};
use rust_decimal::Decimal;

fn exhibition(id: &str, title: &str, category: &str) -> Exhibition {
    Exhibition {
        id: id.into(),
        title: title.to_string(),
        category: category.to_string(),
        cover_image: None,
        created_at: None,
        created_by: None,
        is_for_sale: None,
        price: None,
    }
}

pub fn sample_catalog() -> Vec<Exhibition> {
    vec![
        Exhibition {
            cover_image: Some(
                "https://images.example.com/exhibitions/neon-grids.jpg".into(),
            ),
            created_at: Some("2023-04-18T09:30:00Z".into()),
            created_by: Some(CreatedBy {
                name: Some("Ada Okafor".into()),
            }),
            is_for_sale: Some(true),
            price: Some(Decimal::new(125_000, 2)),
            ..exhibition("665f1c2a01", "Neon Grids", "Modern")
        },
        Exhibition {
            cover_image: Some("uploads/marble-hall.png".into()),
            created_at: Some("2021-11-02T14:00:00Z".into()),
            created_by: Some(CreatedBy { name: None }),
            is_for_sale: Some(false),
            ..exhibition("665f1c2a02", "The Marble Hall", "Classic")
        },
        Exhibition {
            cover_image: Some(
                "https://images.example.com/exhibitions/still-water.jpg".into(),
            ),
            created_at: Some("2024-02-29T08:00:00Z".into()),
            created_by: Some(CreatedBy {
                name: Some("Kenji Mori".into()),
            }),
            is_for_sale: Some(true),
            price: Some(Decimal::new(48_000, 2)),
            ..exhibition("665f1c2a03", "Still Water", "Photography")
        },
        exhibition("665f1c2a04", "Untitled Forms", "Sculpture"),
        Exhibition {
            created_at: Some("2022-09-10".into()),
            ..exhibition("665f1c2a05", "After Hours", "Modern")
        },
    ]
}

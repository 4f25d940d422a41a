//! Display-ready exhibitions.
//!
//! The catalog service is loose about which fields it fills in. Everything
//! the gallery renders goes through [`DisplayExhibition::from_record`], which
//! never fails: missing or unusable values degrade to fixed fallbacks.

use std::collections::BTreeSet;

use jiff::{Timestamp, civil, tz::TimeZone};
use reqwest::Url;
use rust_decimal::Decimal;

use crate::ExhibitionId;
use crate::responses::{CreatedBy, Exhibition};

/// Year shown when an exhibition has no usable creation timestamp.
pub const FALLBACK_START_YEAR: &str = "2024";

/// Exhibitor shown when the creator has no name.
pub const FALLBACK_EXHIBITOR: &str = "Curator";

/// An exhibition normalized for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayExhibition {
    pub id: ExhibitionId,
    pub title: String,
    pub category: String,
    /// Same value as `category`, under the gallery's vocabulary.
    pub theme: String,
    /// The raw cover image if it is an absolute URL, empty otherwise.
    pub cover_image: String,
    pub created_at: Option<String>,
    pub created_by: Option<CreatedBy>,
    pub start_date: String,
    pub exhibitor: String,
    pub is_for_sale: bool,
    /// Never negative.
    pub price: Decimal,
}

impl DisplayExhibition {
    pub fn from_record(record: &Exhibition) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            category: record.category.clone(),
            theme: record.category.clone(),
            cover_image: record
                .cover_image
                .as_deref()
                .filter(|url| is_absolute_url(url))
                .map(str::to_string)
                .unwrap_or_default(),
            created_at: record.created_at.clone(),
            created_by: record.created_by.clone(),
            start_date: record
                .created_at
                .as_deref()
                .and_then(calendar_year)
                .map(|year| year.to_string())
                .unwrap_or_else(|| FALLBACK_START_YEAR.to_string()),
            exhibitor: record
                .created_by
                .as_ref()
                .and_then(|by| by.name.clone())
                .unwrap_or_else(|| FALLBACK_EXHIBITOR.to_string()),
            is_for_sale: record.is_for_sale.unwrap_or(false),
            price: record
                .price
                .filter(|price| !price.is_sign_negative())
                .unwrap_or(Decimal::ZERO),
        }
    }

    pub fn has_cover_image(&self) -> bool {
        !self.cover_image.is_empty()
    }
}

/// True when the value starts with an explicit scheme, e.g.
/// `https://cdn/x.png` or `data:image/png;base64,...`. Relative paths,
/// protocol-relative `//host/...` and bare file names are rejected.
fn is_absolute_url(value: &str) -> bool {
    Url::parse(value).is_ok()
}

/// Calendar year of a creation timestamp, in UTC.
///
/// Accepts RFC 3339 timestamps as well as civil dates and datetimes without
/// an offset.
fn calendar_year(value: &str) -> Option<i16> {
    let value = value.trim();
    if let Ok(timestamp) = value.parse::<Timestamp>() {
        return Some(timestamp.to_zoned(TimeZone::UTC).year());
    }
    if let Ok(datetime) = value.parse::<civil::DateTime>() {
        return Some(datetime.year());
    }
    value.parse::<civil::Date>().ok().map(|date| date.year())
}

/// A set of categories to keep. Empty means everything is kept.
///
/// Two matcher sets are equal when they hold the same categories, regardless
/// of the order or repetition they were built from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Matchers(BTreeSet<String>);

impl Matchers {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, category: &str) -> bool {
        self.0.contains(category)
    }

    /// Whether a record of the given category passes the filter.
    pub fn matches(&self, category: &str) -> bool {
        self.is_empty() || self.contains(category)
    }

    /// Adds the category if absent, removes it otherwise.
    pub fn toggled(&self, category: &str) -> Self {
        let mut next = self.0.clone();
        if !next.remove(category) {
            next.insert(category.to_string());
        }
        Self(next)
    }
}

impl<S: Into<String>> FromIterator<S> for Matchers {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Keep the records the matchers accept and normalize them, preserving the
/// order the service returned them in.
pub fn select(
    records: &[Exhibition],
    matchers: &Matchers,
) -> Vec<DisplayExhibition> {
    records
        .iter()
        .filter(|record| matchers.matches(&record.category))
        .map(DisplayExhibition::from_record)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    fn record(id: &str, category: &str) -> Exhibition {
        Exhibition {
            id: id.into(),
            title: format!("Exhibition {id}"),
            category: category.to_string(),
            cover_image: None,
            created_at: None,
            created_by: None,
            is_for_sale: None,
            price: None,
        }
    }

    #[test]
    fn bare_record_gets_fallbacks() {
        let raw: Vec<Exhibition> =
            serde_json::from_str(r#"[{"_id":"1","category":"Modern"}]"#)
                .unwrap();
        let shown = select(&raw, &Matchers::all());

        assert_eq!(shown.len(), 1);
        let item = &shown[0];
        assert_eq!(item.id, ExhibitionId::from("1"));
        assert_eq!(item.theme, "Modern");
        assert_eq!(item.cover_image, "");
        assert_eq!(item.start_date, FALLBACK_START_YEAR);
        assert_eq!(item.exhibitor, FALLBACK_EXHIBITOR);
        assert!(!item.is_for_sale);
        assert_eq!(item.price, Decimal::ZERO);
    }

    #[test]
    fn full_record_keeps_its_values() {
        let raw: Exhibition = serde_json::from_str(
            r#"{
                "_id": "abc",
                "title": "Light Studies",
                "category": "Photography",
                "coverImage": "https://cdn.example.com/light.jpg",
                "createdAt": "2021-03-04T10:00:00Z",
                "createdBy": { "name": "Ines" },
                "isForSale": true,
                "price": 120.5
            }"#,
        )
        .unwrap();
        let item = DisplayExhibition::from_record(&raw);

        assert_eq!(item.title, "Light Studies");
        assert_eq!(item.category, "Photography");
        assert_eq!(item.theme, "Photography");
        assert_eq!(item.cover_image, "https://cdn.example.com/light.jpg");
        assert_eq!(item.start_date, "2021");
        assert_eq!(item.exhibitor, "Ines");
        assert!(item.is_for_sale);
        assert_eq!(item.price, dec!(120.5));
        assert_eq!(item.created_at.as_deref(), Some("2021-03-04T10:00:00Z"));
    }

    #[test]
    fn relative_cover_images_are_dropped() {
        for cover in [
            "",
            "cover.png",
            "/uploads/cover.png",
            "//cdn.example.com/cover.png",
            "uploads/2021/cover.png",
        ] {
            let mut raw = record("1", "Modern");
            raw.cover_image = Some(cover.to_string());
            assert_eq!(
                DisplayExhibition::from_record(&raw).cover_image,
                "",
                "{cover:?} should not be shown"
            );
        }
    }

    #[test]
    fn absolute_cover_images_are_kept_verbatim() {
        for cover in [
            "http://localhost:5000/uploads/a.png",
            "https://images.example.org/b.jpg?w=400",
            "data:image/png;base64,iVBORw0KGgo=",
        ] {
            let mut raw = record("1", "Modern");
            raw.cover_image = Some(cover.to_string());
            let item = DisplayExhibition::from_record(&raw);
            assert_eq!(item.cover_image, cover);
            assert!(item.has_cover_image());
        }
    }

    #[test]
    fn start_date_is_calendar_year() {
        let cases = [
            ("2019-12-31T23:30:00Z", "2019"),
            ("2020-01-01T01:00:00+02:00", "2019"),
            ("2023-07-15T09:12:44.120Z", "2023"),
            ("2022-05-01", "2022"),
            ("2018-02-03T04:05:06", "2018"),
            ("not a date", FALLBACK_START_YEAR),
            ("", FALLBACK_START_YEAR),
        ];
        for (created_at, expected) in cases {
            let mut raw = record("1", "Modern");
            raw.created_at = Some(created_at.to_string());
            assert_eq!(
                DisplayExhibition::from_record(&raw).start_date,
                expected,
                "createdAt {created_at:?}"
            );
        }
    }

    #[test]
    fn exhibitor_needs_a_name() {
        let mut raw = record("1", "Modern");
        raw.created_by = Some(CreatedBy { name: None });
        assert_eq!(
            DisplayExhibition::from_record(&raw).exhibitor,
            FALLBACK_EXHIBITOR
        );

        raw.created_by = Some(CreatedBy {
            name: Some("Marta".into()),
        });
        assert_eq!(DisplayExhibition::from_record(&raw).exhibitor, "Marta");
    }

    #[test]
    fn null_fields_read_as_missing() {
        let raw: Exhibition = serde_json::from_str(
            r#"{
                "_id": "2",
                "title": null,
                "category": null,
                "coverImage": null,
                "createdAt": null,
                "createdBy": null,
                "isForSale": null,
                "price": null
            }"#,
        )
        .unwrap();
        let item = DisplayExhibition::from_record(&raw);

        assert_eq!(item.id, ExhibitionId::from("2"));
        assert_eq!(item.title, "");
        assert_eq!(item.theme, "");
        assert_eq!(item.cover_image, "");
        assert_eq!(item.start_date, FALLBACK_START_YEAR);
        assert_eq!(item.exhibitor, FALLBACK_EXHIBITOR);
        assert!(!item.is_for_sale);
        assert_eq!(item.price, Decimal::ZERO);
    }

    #[test]
    fn mistyped_fields_read_as_missing() {
        let raw: Exhibition = serde_json::from_str(
            r#"{
                "_id": "3",
                "title": 12,
                "category": "Modern",
                "coverImage": { "url": "https://cdn.example.com/a.jpg" },
                "createdAt": 1700000000,
                "createdBy": "64ab01",
                "isForSale": "yes",
                "price": "a lot"
            }"#,
        )
        .unwrap();
        let item = DisplayExhibition::from_record(&raw);

        assert_eq!(item.title, "");
        assert_eq!(item.theme, "Modern");
        assert_eq!(item.cover_image, "");
        assert_eq!(item.start_date, FALLBACK_START_YEAR);
        assert_eq!(raw.created_by, None);
        assert_eq!(item.exhibitor, FALLBACK_EXHIBITOR);
        assert!(!item.is_for_sale);
        assert_eq!(item.price, Decimal::ZERO);
    }

    #[test]
    fn creator_name_of_wrong_type_is_dropped() {
        let raw: Exhibition = serde_json::from_str(
            r#"{"_id": "4", "createdBy": {"name": 7}}"#,
        )
        .unwrap();
        assert_eq!(raw.created_by, Some(CreatedBy { name: None }));
        assert_eq!(
            DisplayExhibition::from_record(&raw).exhibitor,
            FALLBACK_EXHIBITOR
        );
    }

    #[test]
    fn odd_record_does_not_spoil_the_catalog() {
        let raw: Vec<Exhibition> = serde_json::from_str(
            r#"[
                {"_id": "1", "category": "Modern"},
                {"_id": "2", "title": null, "category": null, "createdBy": "64ab01"}
            ]"#,
        )
        .unwrap();
        let ids: Vec<_> = select(&raw, &Matchers::all())
            .into_iter()
            .map(|item| item.id.0)
            .collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn negative_price_becomes_zero() {
        let mut raw = record("1", "Modern");
        raw.price = Some(dec!(-3));
        assert_eq!(DisplayExhibition::from_record(&raw).price, Decimal::ZERO);
    }

    #[test]
    fn transform_is_idempotent() {
        let mut raw = record("7", "Classic");
        raw.created_at = Some("2020-06-01T00:00:00Z".into());
        raw.cover_image = Some("relative.png".into());
        assert_eq!(
            DisplayExhibition::from_record(&raw),
            DisplayExhibition::from_record(&raw)
        );
    }

    #[test]
    fn empty_matchers_keep_everything() {
        let raw = vec![
            record("1", "Modern"),
            record("2", "Classic"),
            record("3", ""),
        ];
        let ids: Vec<_> = select(&raw, &Matchers::all())
            .into_iter()
            .map(|item| item.id.0)
            .collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn matchers_keep_exactly_their_categories() {
        let raw = vec![
            record("1", "Modern"),
            record("2", "Classic"),
            record("3", "Sculpture"),
            record("4", "Modern"),
            record("5", "modern"),
        ];

        let shown = select(&raw, &Matchers::from_iter(["Modern"]));
        let ids: Vec<_> = shown.iter().map(|item| item.id.0.as_str()).collect();
        assert_eq!(ids, ["1", "4"]);
        assert!(shown.iter().all(|item| item.theme == "Modern"));

        let shown =
            select(&raw, &Matchers::from_iter(["Classic", "Sculpture"]));
        let ids: Vec<_> = shown.iter().map(|item| item.id.0.as_str()).collect();
        assert_eq!(ids, ["2", "3"]);
    }

    #[test]
    fn matchers_compare_by_value() {
        let a = Matchers::from_iter(["Modern", "Classic"]);
        let b = Matchers::from_iter(["Classic", "Modern", "Modern"]);
        assert_eq!(a, b);
        assert_ne!(a, Matchers::from_iter(["Modern"]));
    }

    #[test]
    fn toggling_adds_then_removes() {
        let on = Matchers::all().toggled("Modern");
        assert!(on.contains("Modern"));
        assert_eq!(on.toggled("Modern"), Matchers::all());
    }
}

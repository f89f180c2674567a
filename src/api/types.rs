//! Catalog records and the wire schemas they are decoded from.
//!
//! The API is loose about shapes: counts arrive under two different names,
//! prices arrive as numbers or decimal strings, and paged listings come back
//! either wrapped in an envelope or as a bare array. All of that is settled
//! here so the rest of the crate only ever sees one canonical form.

use serde::Deserialize;

/// A number that may be serialized as a JSON number or as a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum LenientNumber {
    Int(u64),
    Float(f64),
    Text(String),
}

impl LenientNumber {
    fn as_f64(&self) -> Option<f64> {
        match self {
            LenientNumber::Int(v) => Some(*v as f64),
            LenientNumber::Float(v) => Some(*v),
            LenientNumber::Text(s) => s.trim().parse().ok(),
        }
    }

    fn as_u64(&self) -> Option<u64> {
        match self {
            LenientNumber::Int(v) => Some(*v),
            LenientNumber::Float(v) if *v >= 0.0 => Some(*v as u64),
            LenientNumber::Float(_) => None,
            LenientNumber::Text(s) => s.trim().parse().ok(),
        }
    }
}

fn to_u32(value: Option<LenientNumber>) -> Option<u32> {
    value
        .as_ref()
        .and_then(LenientNumber::as_u64)
        .and_then(|v| u32::try_from(v).ok())
}

/// Treats a JSON `null` string field the same as a missing one.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// `totalPages` as a number, a float or a numeric string. Anything that is
/// not a usable count reads as missing.
fn lenient_page_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(to_u32(Option::<LenientNumber>::deserialize(deserializer)?))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[derive(Debug, Clone, PartialEq)]
pub struct Film {
    pub id: u32,
    pub title: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub release_year: Option<u32>,
    /// Running time in minutes.
    pub length: Option<u32>,
    pub rating: Option<String>,
    pub rental_rate: Option<f64>,
    /// Times rented. Wire name is either `rented` or `rental_count`.
    pub rental_count: u64,
}

#[derive(Debug, Deserialize)]
struct RawFilm {
    film_id: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    title: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    release_year: Option<LenientNumber>,
    #[serde(default)]
    length: Option<LenientNumber>,
    #[serde(default)]
    rating: Option<String>,
    #[serde(default)]
    rental_rate: Option<LenientNumber>,
    #[serde(default)]
    rented: Option<LenientNumber>,
    #[serde(default)]
    rental_count: Option<LenientNumber>,
}

impl<'de> Deserialize<'de> for Film {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawFilm::deserialize(deserializer)?;
        let rental_count = raw
            .rented
            .as_ref()
            .and_then(LenientNumber::as_u64)
            .filter(|count| *count > 0)
            .or_else(|| raw.rental_count.as_ref().and_then(LenientNumber::as_u64))
            .unwrap_or(0);

        Ok(Film {
            id: raw.film_id,
            title: raw.title,
            category: non_empty(raw.category),
            description: non_empty(raw.description),
            release_year: to_u32(raw.release_year),
            length: to_u32(raw.length),
            rating: non_empty(raw.rating),
            rental_rate: raw.rental_rate.as_ref().and_then(LenientNumber::as_f64),
            rental_count,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    /// Number of films the actor appears in. Wire name is `movies` or `film_count`.
    pub film_count: Option<u64>,
    pub top_films: Vec<Film>,
}

impl Actor {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Deserialize)]
struct RawActor {
    actor_id: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    first_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    last_name: String,
    #[serde(default)]
    movies: Option<LenientNumber>,
    #[serde(default)]
    film_count: Option<LenientNumber>,
    #[serde(default)]
    top_films: Option<Vec<Film>>,
}

impl<'de> Deserialize<'de> for Actor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawActor::deserialize(deserializer)?;
        let film_count = raw
            .movies
            .as_ref()
            .and_then(LenientNumber::as_u64)
            .or_else(|| raw.film_count.as_ref().and_then(LenientNumber::as_u64));

        Ok(Actor {
            id: raw.actor_id,
            first_name: raw.first_name,
            last_name: raw.last_name,
            film_count,
            top_films: raw.top_films.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Customer {
    #[serde(rename = "customer_id")]
    pub id: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One server-side page of a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Always at least 1.
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_pages: Option<u32>) -> Self {
        Self {
            items,
            total_pages: total_pages.unwrap_or(1).max(1),
        }
    }
}

/// `GET /films` body: `{films, totalPages}` or a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum FilmPageBody {
    Envelope {
        films: Vec<Film>,
        #[serde(rename = "totalPages", default, deserialize_with = "lenient_page_count")]
        total_pages: Option<u32>,
    },
    Bare(Vec<Film>),
}

impl From<FilmPageBody> for Page<Film> {
    fn from(body: FilmPageBody) -> Self {
        match body {
            FilmPageBody::Envelope { films, total_pages } => Page::new(films, total_pages),
            FilmPageBody::Bare(films) => Page::new(films, None),
        }
    }
}

/// `GET /customers` body: `{customers, totalPages}` or a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CustomerPageBody {
    Envelope {
        customers: Vec<Customer>,
        #[serde(rename = "totalPages", default, deserialize_with = "lenient_page_count")]
        total_pages: Option<u32>,
    },
    Bare(Vec<Customer>),
}

impl From<CustomerPageBody> for Page<Customer> {
    fn from(body: CustomerPageBody) -> Self {
        match body {
            CustomerPageBody::Envelope {
                customers,
                total_pages,
            } => Page::new(customers, total_pages),
            CustomerPageBody::Bare(customers) => Page::new(customers, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn film_rented_and_rental_count_normalize() {
        let a: Film = serde_json::from_value(json!({"film_id": 1, "title": "A", "rented": 33})).unwrap();
        let b: Film =
            serde_json::from_value(json!({"film_id": 2, "title": "B", "rental_count": 12})).unwrap();
        let c: Film = serde_json::from_value(json!({"film_id": 3, "title": "C"})).unwrap();
        assert_eq!(a.rental_count, 33);
        assert_eq!(b.rental_count, 12);
        assert_eq!(c.rental_count, 0);
    }

    #[test]
    fn film_optional_fields_and_decimal_string_price() {
        let film: Film = serde_json::from_value(json!({
            "film_id": 11,
            "title": "ALAMO VIDEOTAPE",
            "category": "Foreign",
            "description": "A Boring Epistle",
            "release_year": 2006,
            "length": 126,
            "rating": "G",
            "rental_rate": "0.99"
        }))
        .unwrap();
        assert_eq!(film.category.as_deref(), Some("Foreign"));
        assert_eq!(film.release_year, Some(2006));
        assert_eq!(film.length, Some(126));
        assert_eq!(film.rental_rate, Some(0.99));
    }

    #[test]
    fn blank_category_is_missing() {
        let film: Film =
            serde_json::from_value(json!({"film_id": 5, "title": "X", "category": ""})).unwrap();
        assert_eq!(film.category, None);
    }

    #[test]
    fn actor_embeds_top_films() {
        let actor: Actor = serde_json::from_value(json!({
            "actor_id": 107,
            "first_name": "GINA",
            "last_name": "DEGENERES",
            "movies": 42,
            "top_films": [{"film_id": 1, "title": "A", "rental_count": 30}]
        }))
        .unwrap();
        assert_eq!(actor.full_name(), "GINA DEGENERES");
        assert_eq!(actor.film_count, Some(42));
        assert_eq!(actor.top_films.len(), 1);
        assert_eq!(actor.top_films[0].rental_count, 30);
    }

    #[test]
    fn actor_without_top_films_has_empty_list() {
        let actor: Actor =
            serde_json::from_value(json!({"actor_id": 1, "first_name": "P", "last_name": "G", "film_count": "19"}))
                .unwrap();
        assert!(actor.top_films.is_empty());
        assert_eq!(actor.film_count, Some(19));
    }

    #[test]
    fn film_page_envelope_and_bare() {
        let wrapped: FilmPageBody = serde_json::from_value(json!({
            "films": [{"film_id": 1, "title": "A"}],
            "totalPages": 48
        }))
        .unwrap();
        let page: Page<Film> = wrapped.into();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total_pages, 48);

        let bare: FilmPageBody =
            serde_json::from_value(json!([{"film_id": 1, "title": "A"}, {"film_id": 2, "title": "B"}]))
                .unwrap();
        let page: Page<Film> = bare.into();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn total_pages_accepts_strings_and_floats() {
        let body: FilmPageBody = serde_json::from_value(json!({
            "films": [{"film_id": 1, "title": "A"}],
            "totalPages": "48"
        }))
        .unwrap();
        let page: Page<Film> = body.into();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total_pages, 48);

        let body: CustomerPageBody = serde_json::from_value(json!({
            "customers": [],
            "totalPages": 29.0
        }))
        .unwrap();
        assert_eq!(Page::<Customer>::from(body).total_pages, 29);

        let body: CustomerPageBody = serde_json::from_value(json!({
            "customers": [],
            "totalPages": null
        }))
        .unwrap();
        assert_eq!(Page::<Customer>::from(body).total_pages, 1);
    }

    #[test]
    fn customer_page_defaults_total_pages() {
        let body: CustomerPageBody = serde_json::from_value(json!({
            "customers": [{"customer_id": 1, "first_name": "MARY", "last_name": "SMITH", "email": "m@x.org"}]
        }))
        .unwrap();
        let page: Page<Customer> = body.into();
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.items[0].full_name(), "MARY SMITH");
    }

    #[test]
    fn zero_total_pages_is_clamped() {
        let page: Page<Customer> = Page::new(Vec::new(), Some(0));
        assert_eq!(page.total_pages, 1);
    }
}

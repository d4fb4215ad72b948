//! Upstream product shapes and their adapters
//!
//! Each catalogue backend returns records in its own shape. They are
//! converted into a [`DisplayProduct`] here, at the boundary, so rendering
//! code only ever sees one shape.

use serde::{Deserialize, Serialize};

/// Image used when a retail record carries none
pub const PLACEHOLDER_IMAGE: &str = "/assorted-products-display.png";
/// Currency of the grocery catalogue, and the retail fallback
pub const DEFAULT_CURRENCY: &str = "AED";
const FALLBACK_TITLE: &str = "Unknown Product";
const FALLBACK_BADGE: &str = "NEW";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Destructive,
    Outline,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub text: String,
    #[serde(default)]
    pub variant: BadgeVariant,
}

impl Badge {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            variant: BadgeVariant::Default,
        }
    }
}

/// The one shape product cards render
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayProduct {
    pub id: String,
    pub title: String,
    pub price: String,
    pub currency: String,
    pub image_url: String,
    pub badges: Vec<Badge>,
}

/// A string that some feeds send as a number
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(f64),
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Text(text) => f.write_str(text),
            Scalar::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Cinema catalogue record
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub age_rating: String,
    #[serde(default)]
    pub advance_badge: Option<String>,
    #[serde(default)]
    pub rating: Option<Scalar>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Grocery catalogue record
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryProduct {
    pub id: String,
    pub title: String,
    pub price: Scalar,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub badges: Vec<Badge>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RetailPrice {
    Amount(Scalar),
    Detailed(PriceDetail),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceDetail {
    #[serde(default)]
    pub formatted_value: Option<String>,
    #[serde(default)]
    pub value: Option<Scalar>,
    #[serde(default)]
    pub price: Option<Scalar>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub currency_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetailLinks {
    #[serde(default)]
    pub default_images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BadgeText {
    Plain(String),
    Rich {
        #[serde(rename = "boldText")]
        bold_text: Option<String>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RetailBadge {
    #[serde(default)]
    pub text: Option<BadgeText>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Retail search hit. Field names vary between the brands' backends.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetailProduct {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "_id")]
    pub alt_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub price: Option<RetailPrice>,
    #[serde(default)]
    pub links: Option<RetailLinks>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub promo_badges: Option<Vec<RetailBadge>>,
    #[serde(default)]
    pub badges: Option<Vec<RetailBadge>>,
}

/// Every known upstream record shape
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamProduct {
    Movie(Movie),
    Grocery(GroceryProduct),
    Retail(RetailProduct),
}

impl UpstreamProduct {
    pub fn into_display(self) -> DisplayProduct {
        match self {
            UpstreamProduct::Movie(movie) => movie.into(),
            UpstreamProduct::Grocery(product) => product.into(),
            UpstreamProduct::Retail(product) => product.into(),
        }
    }
}

impl From<Movie> for DisplayProduct {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            price: String::new(),
            currency: String::new(),
            image_url: movie.image_url,
            badges: vec![Badge::new(movie.age_rating)],
        }
    }
}

impl From<GroceryProduct> for DisplayProduct {
    fn from(product: GroceryProduct) -> Self {
        Self {
            id: product.id,
            title: product.title,
            price: product.price.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            image_url: product.image_url,
            badges: product.badges,
        }
    }
}

impl From<RetailProduct> for DisplayProduct {
    fn from(product: RetailProduct) -> Self {
        let (price, currency) = match &product.price {
            None => (String::new(), String::new()),
            Some(RetailPrice::Amount(amount)) => (amount.to_string(), String::new()),
            Some(RetailPrice::Detailed(detail)) => detailed_price(detail),
        };

        let image_url = product
            .links
            .as_ref()
            .and_then(|links| links.default_images.first())
            .or_else(|| product.images.first())
            .or(product.image_url.as_ref())
            .filter(|url| !url.is_empty())
            .cloned()
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

        let badges = product
            .promo_badges
            .as_ref()
            .or(product.badges.as_ref())
            .map(|badges| badges.iter().map(retail_badge).collect())
            .unwrap_or_default();

        Self {
            id: non_empty(product.id).or(non_empty(product.alt_id)).unwrap_or_default(),
            title: non_empty(product.name)
                .or(non_empty(product.title))
                .unwrap_or_else(|| FALLBACK_TITLE.to_string()),
            price,
            currency,
            image_url,
            badges,
        }
    }
}

fn detailed_price(detail: &PriceDetail) -> (String, String) {
    let formatted = detail
        .formatted_value
        .as_deref()
        .map(|text| {
            text.chars()
                .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
                .collect::<String>()
        })
        .filter(|digits| !digits.is_empty());

    let price = formatted
        .or_else(|| detail.value.as_ref().map(Scalar::to_string))
        .or_else(|| detail.price.as_ref().map(Scalar::to_string))
        .unwrap_or_default();

    let currency = non_empty(detail.currency.clone())
        .or(non_empty(detail.currency_code.clone()))
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

    (price, currency)
}

fn retail_badge(badge: &RetailBadge) -> Badge {
    let text = match &badge.text {
        Some(BadgeText::Rich { bold_text }) => non_empty(bold_text.clone()),
        Some(BadgeText::Plain(text)) => non_empty(Some(text.clone())),
        None => None,
    };

    Badge::new(
        text.or(non_empty(badge.name.clone()))
            .unwrap_or_else(|| FALLBACK_BADGE.to_string()),
    )
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

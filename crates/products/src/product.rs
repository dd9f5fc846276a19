use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use tessera_core::{validate, DomainResult, Entity, ValueObject};

use crate::tax::TaxTable;

pub const ELECTRONICS: &str = "Electronics";
pub const CLOTHING: &str = "Clothing";
pub const BOOKS: &str = "Books";

/// Fixed category, manufacturer, features and specification of a factory.
struct Preset {
    category: &'static str,
    manufacturer: &'static str,
    features: &'static [&'static str],
    specification: (&'static str, &'static str),
}

const ELECTRONICS_PRESET: Preset = Preset {
    category: ELECTRONICS,
    manufacturer: "Generic Electronics",
    features: &["Warranty", "User Manual"],
    specification: ("Voltage", "220V"),
};

const CLOTHING_PRESET: Preset = Preset {
    category: CLOTHING,
    manufacturer: "Generic Clothing",
    features: &["Washable", "Comfort Fit"],
    specification: ("Material", "Cotton"),
};

const BOOKS_PRESET: Preset = Preset {
    category: BOOKS,
    manufacturer: "Generic Publisher",
    features: &["Paperback", "English"],
    specification: ("Pages", "300"),
};

impl Preset {
    /// Goes through [`Product::new`], so presets get the same validation.
    fn build(
        &self,
        product_id: String,
        name: String,
        base_price: f64,
        weight: f64,
    ) -> DomainResult<Product> {
        let (key, value) = self.specification;
        Product::new(NewProduct {
            product_id,
            name,
            category: self.category.to_string(),
            manufacturer: self.manufacturer.to_string(),
            base_price,
            weight,
            features: self.features.iter().map(|f| f.to_string()).collect(),
            specifications: BTreeMap::from([(key.to_string(), value.to_string())]),
        })
    }
}

/// Input for [`Product::new`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewProduct {
    pub product_id: String,
    pub name: String,
    pub category: String,
    pub manufacturer: String,
    pub base_price: f64,
    pub weight: f64,
    pub features: Vec<String>,
    pub specifications: BTreeMap<String, String>,
}

/// Immutable catalog product.
///
/// Equality and hashing use the product id only.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    product_id: String,
    name: String,
    category: String,
    manufacturer: String,
    base_price: f64,
    weight: f64,
    features: Vec<String>,
    specifications: BTreeMap<String, String>,
}

impl Product {
    pub fn new(new: NewProduct) -> DomainResult<Self> {
        validate::non_blank("product_id", &new.product_id)?;
        validate::non_blank("name", &new.name)?;
        validate::non_blank("category", &new.category)?;
        validate::non_blank("manufacturer", &new.manufacturer)?;
        validate::non_negative("base_price", new.base_price)?;
        validate::non_negative("weight", new.weight)?;

        Ok(Self {
            product_id: new.product_id,
            name: new.name,
            category: new.category,
            manufacturer: new.manufacturer,
            base_price: new.base_price,
            weight: new.weight,
            features: new.features,
            specifications: new.specifications,
        })
    }

    /// Electronics preset: warranty and manual, 220V.
    pub fn create_electronics(
        product_id: impl Into<String>,
        name: impl Into<String>,
        base_price: f64,
        weight: f64,
    ) -> DomainResult<Self> {
        ELECTRONICS_PRESET.build(product_id.into(), name.into(), base_price, weight)
    }

    /// Clothing preset: washable cotton.
    pub fn create_clothing(
        product_id: impl Into<String>,
        name: impl Into<String>,
        base_price: f64,
        weight: f64,
    ) -> DomainResult<Self> {
        CLOTHING_PRESET.build(product_id.into(), name.into(), base_price, weight)
    }

    /// Books preset: English paperback, 300 pages.
    pub fn create_books(
        product_id: impl Into<String>,
        name: impl Into<String>,
        base_price: f64,
        weight: f64,
    ) -> DomainResult<Self> {
        BOOKS_PRESET.build(product_id.into(), name.into(), base_price, weight)
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn features(&self) -> Vec<String> {
        self.features.clone()
    }

    pub fn specifications(&self) -> BTreeMap<String, String> {
        self.specifications.clone()
    }

    /// Sales tax on the base price under the standard regional table.
    /// Unknown or absent regions pay the default rate.
    pub fn calculate_tax<'a>(&self, region: impl Into<Option<&'a str>>) -> f64 {
        TaxTable::standard().tax_on(self.base_price, region)
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.product_id == other.product_id
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.product_id.hash(state);
    }
}

impl ValueObject for Product {}

impl Entity for Product {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.product_id
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Product{{{}, category={}, price={}}}",
            self.name, self.category, self.base_price
        )
    }
}

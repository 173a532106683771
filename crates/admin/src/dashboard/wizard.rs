//! New-product wizard.
//!
//! Five tabs visited in order by "Next", with every tab header also directly
//! selectable. The final tab's primary action saves the accumulated fields as
//! a new product. Nothing is validated: numeric entries coerce, prices are
//! taken as typed.

use std::str::FromStr;

use serde::Deserialize;
use stockroom_core::{DisplayPrice, IdSequence, ImageId};

use super::seed::PLACEHOLDER_IMAGE;

/// Brands offered by the brand select.
pub const BRANDS: [&str; 6] = ["Zara", "H&M", "Uniqlo", "Mango", "Nike", "Adidas"];

/// Categories offered by the category select.
pub const CATEGORIES: [&str; 6] = ["T-Shirt", "Polo Shirt", "Hoodie", "Jacket", "Pants", "Shorts"];

/// Tax rules offered on the pricing tab.
pub const TAX_RULES: [&str; 4] = ["US-Tax (4%)", "EU-Tax (20%)", "UK-Tax (15%)", "No Tax"];

/// "Per" options next to the unit price.
pub const PER_OPTIONS: [&str; 6] = ["0", "1", "2", "3", "4", "5"];

const SEED_IMAGES: [&str; 3] = ["/static/img/t2.jfif", "/static/img/t3.jfif", "/static/img/t4.jfif"];

/// Wizard tabs in visiting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WizardTab {
    #[default]
    Information,
    Images,
    Pricing,
    Inventory,
    Shipping,
}

impl WizardTab {
    pub const ALL: [Self; 5] = [
        Self::Information,
        Self::Images,
        Self::Pricing,
        Self::Inventory,
        Self::Shipping,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Information => "Information",
            Self::Images => "Images",
            Self::Pricing => "Pricing",
            Self::Inventory => "Inventory",
            Self::Shipping => "Shipping",
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The tab after this one, or `None` on the last tab.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    #[must_use]
    pub fn is_last(self) -> bool {
        self.next().is_none()
    }
}

/// One row of the images table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardImage {
    pub id: ImageId,
    pub src: String,
    pub position: u32,
    pub is_cover: bool,
}

/// Field values posted from whichever tab is showing.
///
/// Fields missing from a post keep their current value.
#[derive(Debug, Default, Deserialize)]
pub struct WizardFields {
    pub name: Option<String>,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub tax_excluded_price: Option<String>,
    pub tax_included_price: Option<String>,
    pub tax_rule: Option<String>,
    pub unit_price: Option<String>,
    pub per: Option<String>,
    pub sku: Option<String>,
    pub quantity: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub depth: Option<String>,
    pub weight: Option<String>,
}

/// What a wizard button asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardIntent {
    /// Primary button: advance, or save on the last tab.
    Primary,
    Cancel,
    SelectTab(WizardTab),
    SetCover(ImageId),
    RemoveImage(ImageId),
    RemoveTag(String),
    IncrementQuantity,
    DecrementQuantity,
    /// Only store the posted fields.
    Update,
}

/// Error returned for a malformed intent value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid wizard intent: {0}")]
pub struct InvalidIntent(String);

impl FromStr for WizardIntent {
    type Err = InvalidIntent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidIntent(s.to_string());
        let parse_image = |raw: &str| raw.parse::<i32>().map(ImageId::new).map_err(|_| invalid());

        match s.split_once(':') {
            None => match s {
                "primary" => Ok(Self::Primary),
                "cancel" => Ok(Self::Cancel),
                "qty-up" => Ok(Self::IncrementQuantity),
                "qty-down" => Ok(Self::DecrementQuantity),
                "update" => Ok(Self::Update),
                _ => Err(invalid()),
            },
            Some(("tab", raw)) => raw
                .parse::<usize>()
                .ok()
                .and_then(WizardTab::from_index)
                .map(Self::SelectTab)
                .ok_or_else(invalid),
            Some(("cover", raw)) => parse_image(raw).map(Self::SetCover),
            Some(("remove-image", raw)) => parse_image(raw).map(Self::RemoveImage),
            Some(("remove-tag", tag)) => Ok(Self::RemoveTag(tag.to_string())),
            Some(_) => Err(invalid()),
        }
    }
}

/// Product fields assembled by "Save Product".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub brand: String,
    pub code: String,
    pub stock: u32,
    pub variants: u32,
    pub price: DisplayPrice,
    pub image: String,
}

/// State of an open new-product wizard.
#[derive(Debug, Clone)]
pub struct NewProductWizard {
    tab: WizardTab,
    pub name: String,
    pub description: String,
    pub brand: String,
    pub category: String,
    pub tags: Vec<String>,
    pub tax_excluded_price: String,
    pub tax_included_price: String,
    pub tax_rule: String,
    pub unit_price: String,
    pub per: String,
    pub sku: String,
    quantity: u32,
    pub width: String,
    pub height: String,
    pub depth: String,
    pub weight: String,
    images: Vec<WizardImage>,
}

impl Default for NewProductWizard {
    fn default() -> Self {
        let mut image_ids = IdSequence::<ImageId>::after(0);
        let images = SEED_IMAGES
            .iter()
            .zip(1..)
            .map(|(src, position)| WizardImage {
                id: image_ids.next_id(),
                src: (*src).to_string(),
                position,
                is_cover: position == 1,
            })
            .collect();

        Self {
            tab: WizardTab::default(),
            name: "© Novoneyra Text Patch T-Shirt".to_string(),
            description: String::new(),
            brand: "Zara".to_string(),
            category: "T-Shirt".to_string(),
            tags: vec!["Zara".to_string(), "T-Shirt".to_string()],
            tax_excluded_price: "35.90".to_string(),
            tax_included_price: "0.00".to_string(),
            tax_rule: "US-Tax (4%)".to_string(),
            unit_price: "0.00".to_string(),
            per: "0".to_string(),
            sku: "0".to_string(),
            quantity: 0,
            width: "8.2".to_string(),
            height: "4.5".to_string(),
            depth: "2.5".to_string(),
            weight: "11".to_string(),
            images,
        }
    }
}

impl NewProductWizard {
    #[must_use]
    pub const fn tab(&self) -> WizardTab {
        self.tab
    }

    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    #[must_use]
    pub fn images(&self) -> &[WizardImage] {
        &self.images
    }

    /// Label of the primary footer button.
    #[must_use]
    pub fn primary_label(&self) -> &'static str {
        if self.tab.is_last() { "Save Product" } else { "Next" }
    }

    /// Advance one tab. Returns `false` on the last tab, where "Next" is "Save".
    pub fn next(&mut self) -> bool {
        match self.tab.next() {
            Some(tab) => {
                self.tab = tab;
                true
            }
            None => false,
        }
    }

    /// Jump to any tab; headers are never gated.
    pub fn select_tab(&mut self, tab: WizardTab) {
        self.tab = tab;
    }

    /// Store posted field values.
    pub fn apply(&mut self, fields: WizardFields) {
        let WizardFields {
            name,
            description,
            brand,
            category,
            tax_excluded_price,
            tax_included_price,
            tax_rule,
            unit_price,
            per,
            sku,
            quantity,
            width,
            height,
            depth,
            weight,
        } = fields;

        let targets = [
            (name, &mut self.name),
            (description, &mut self.description),
            (brand, &mut self.brand),
            (category, &mut self.category),
            (tax_excluded_price, &mut self.tax_excluded_price),
            (tax_included_price, &mut self.tax_included_price),
            (tax_rule, &mut self.tax_rule),
            (unit_price, &mut self.unit_price),
            (per, &mut self.per),
            (sku, &mut self.sku),
            (width, &mut self.width),
            (height, &mut self.height),
            (depth, &mut self.depth),
            (weight, &mut self.weight),
        ];
        for (value, target) in targets {
            if let Some(value) = value {
                *target = value;
            }
        }

        if let Some(raw) = quantity {
            self.quantity = coerce_quantity(&raw);
        }
    }

    pub const fn increment_quantity(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Decrement, clamped at zero.
    pub const fn decrement_quantity(&mut self) {
        self.quantity = self.quantity.saturating_sub(1);
    }

    /// Make `id` the only cover image. Returns `false` if no such image exists.
    pub fn set_cover(&mut self, id: ImageId) -> bool {
        if !self.images.iter().any(|image| image.id == id) {
            return false;
        }
        for image in &mut self.images {
            image.is_cover = image.id == id;
        }
        true
    }

    /// Remove an image row. Returns `false` if no such image exists.
    pub fn remove_image(&mut self, id: ImageId) -> bool {
        let before = self.images.len();
        self.images.retain(|image| image.id != id);
        self.images.len() != before
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    /// Assemble the record "Save Product" emits.
    ///
    /// The display image is the first image row, not the cover.
    #[must_use]
    pub fn build(&self) -> NewProduct {
        NewProduct {
            name: self.name.clone(),
            brand: self.brand.clone(),
            code: self.sku.clone(),
            stock: self.quantity,
            variants: 1,
            price: DisplayPrice::from_entry(&self.tax_excluded_price),
            image: self
                .images
                .first()
                .map_or_else(|| PLACEHOLDER_IMAGE.to_string(), |image| image.src.clone()),
        }
    }
}

/// Read a typed quantity the way a lenient integer parse would.
///
/// Leading digits are taken; anything unreadable or negative becomes zero.
#[must_use]
pub fn coerce_quantity(raw: &str) -> u32 {
    let trimmed = raw.trim();
    if trimmed.starts_with('-') {
        return 0;
    }
    let digits: String = trimmed
        .trim_start_matches('+')
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    if digits.is_empty() {
        return 0;
    }
    digits.parse::<u32>().unwrap_or(u32::MAX)
}

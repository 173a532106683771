//! View types handed to templates.
//!
//! Everything a template needs is precomputed here (labels, badge classes,
//! selected flags), so templates only loop and print.

use stockroom_core::{Order, Product};

use crate::components::{BadgeTheme, fulfillment_badge_class, payment_badge_class};
use crate::dashboard::wizard::{BRANDS, CATEGORIES, PER_OPTIONS, TAX_RULES};
use crate::dashboard::{Dashboard, FulfillmentMethod, NewProductWizard, WizardTab};
use crate::models::NavbarPreferences;

/// One entry of a rendered `<select>`.
#[derive(Debug, Clone)]
pub struct OptionView {
    pub value: String,
    pub selected: bool,
}

fn options(values: &[&str], current: &str) -> Vec<OptionView> {
    values
        .iter()
        .map(|value| OptionView {
            value: (*value).to_string(),
            selected: *value == current,
        })
        .collect()
}

/// Navbar state for the current visitor.
#[derive(Debug, Clone, Copy)]
pub struct NavbarView {
    pub dark_mode: bool,
    pub mobile_menu_open: bool,
}

impl From<NavbarPreferences> for NavbarView {
    fn from(prefs: NavbarPreferences) -> Self {
        Self {
            dark_mode: prefs.dark_mode,
            mobile_menu_open: prefs.mobile_menu_open,
        }
    }
}

/// Product row for templates.
#[derive(Debug, Clone)]
pub struct ProductRow {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub code: String,
    pub stock: u32,
    pub variants: u32,
    pub price: String,
    pub image: String,
    pub selected: bool,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            code: product.code.clone(),
            stock: product.stock,
            variants: product.variants,
            price: product.price.to_string(),
            image: product.image.clone(),
            selected: product.selected,
        }
    }
}

/// Order row for templates.
#[derive(Debug, Clone)]
pub struct OrderRow {
    pub id: i32,
    pub code: String,
    pub date: String,
    pub customer: String,
    pub payment: &'static str,
    pub payment_class: &'static str,
    pub fulfillment: &'static str,
    pub fulfillment_class: &'static str,
    pub price: String,
    pub selected: bool,
}

impl OrderRow {
    #[must_use]
    pub fn new(order: &Order, theme: BadgeTheme) -> Self {
        Self {
            id: order.id.as_i32(),
            code: order.code.clone(),
            date: order.date.clone(),
            customer: order.customer.clone(),
            payment: order.payment.label(),
            payment_class: payment_badge_class(order.payment, theme),
            fulfillment: order.fulfillment.label(),
            fulfillment_class: fulfillment_badge_class(order.fulfillment, theme),
            price: order.price.to_string(),
            selected: order.selected,
        }
    }
}

/// Wizard tab header.
#[derive(Debug, Clone)]
pub struct TabView {
    pub index: usize,
    pub label: &'static str,
    pub active: bool,
}

/// Image row in the wizard.
#[derive(Debug, Clone)]
pub struct ImageRow {
    pub id: i32,
    pub src: String,
    pub position: u32,
    pub is_cover: bool,
}

/// The open new-product wizard.
#[derive(Debug, Clone)]
pub struct WizardView {
    pub tab: &'static str,
    pub tabs: Vec<TabView>,
    pub primary_label: &'static str,
    pub name: String,
    pub description: String,
    pub brand: String,
    pub brands: Vec<OptionView>,
    pub categories: Vec<OptionView>,
    pub tags: Vec<String>,
    pub images: Vec<ImageRow>,
    pub tax_excluded_price: String,
    pub tax_included_price: String,
    pub tax_rules: Vec<OptionView>,
    pub unit_price: String,
    pub per_options: Vec<OptionView>,
    pub sku: String,
    pub quantity: u32,
    pub width: String,
    pub height: String,
    pub depth: String,
    pub weight: String,
}

impl From<&NewProductWizard> for WizardView {
    fn from(wizard: &NewProductWizard) -> Self {
        Self {
            tab: wizard.tab().label(),
            tabs: WizardTab::ALL
                .iter()
                .map(|tab| TabView {
                    index: tab.index(),
                    label: tab.label(),
                    active: *tab == wizard.tab(),
                })
                .collect(),
            primary_label: wizard.primary_label(),
            name: wizard.name.clone(),
            description: wizard.description.clone(),
            brand: wizard.brand.clone(),
            brands: options(&BRANDS, &wizard.brand),
            categories: options(&CATEGORIES, &wizard.category),
            tags: wizard.tags.clone(),
            images: wizard
                .images()
                .iter()
                .map(|image| ImageRow {
                    id: image.id.as_i32(),
                    src: image.src.clone(),
                    position: image.position,
                    is_cover: image.is_cover,
                })
                .collect(),
            tax_excluded_price: wizard.tax_excluded_price.clone(),
            tax_included_price: wizard.tax_included_price.clone(),
            tax_rules: options(&TAX_RULES, &wizard.tax_rule),
            unit_price: wizard.unit_price.clone(),
            per_options: options(&PER_OPTIONS, &wizard.per),
            sku: wizard.sku.clone(),
            quantity: wizard.quantity(),
            width: wizard.width.clone(),
            height: wizard.height.clone(),
            depth: wizard.depth.clone(),
            weight: wizard.weight.clone(),
        }
    }
}

/// The order details drawer while it is in the page.
#[derive(Debug, Clone)]
pub struct OrderDetailsView {
    pub phase: &'static str,
    pub generation: u64,
    pub visible: bool,
    pub transition_ms: u128,
    pub code: String,
    pub code_digits: String,
    pub customer: String,
    pub payment: &'static str,
    pub payment_class: &'static str,
    pub fulfillment: &'static str,
    pub fulfillment_class: &'static str,
    pub placed_at: String,
    pub dropdown_open: bool,
    pub fulfillment_choice: &'static str,
    pub methods: Vec<OptionView>,
}

impl OrderDetailsView {
    /// Build the drawer view, or `None` when the drawer is fully closed.
    #[must_use]
    pub fn new(dashboard: &Dashboard, theme: BadgeTheme, transition_ms: u128) -> Option<Self> {
        let details = dashboard.details();
        if !details.is_rendered() {
            return None;
        }
        let order = dashboard.current_order()?;
        let choice = dashboard.dropdown().choice();
        let labels: Vec<&str> = FulfillmentMethod::ALL.iter().map(|m| m.label()).collect();

        Some(Self {
            phase: details.phase().as_str(),
            generation: details.generation(),
            visible: details.is_visible(),
            transition_ms,
            code: order.code.clone(),
            code_digits: order.code_digits(),
            customer: order.customer.clone(),
            payment: order.payment.label(),
            payment_class: payment_badge_class(order.payment, theme),
            fulfillment: order.fulfillment.label(),
            fulfillment_class: fulfillment_badge_class(order.fulfillment, theme),
            placed_at: dashboard
                .details_opened_at()
                .map(|at| at.format("%B %-d, %Y at %-I:%M %p").to_string())
                .unwrap_or_default(),
            dropdown_open: dashboard.dropdown().is_open(),
            fulfillment_choice: choice.label(),
            methods: options(&labels, choice.label()),
        })
    }
}

//! The dashboard controller.
//!
//! [`Dashboard`] is the single owner of every record and every piece of UI
//! state. Handlers never touch the lists directly; they call one of the
//! command methods below, then render from the query methods.

pub mod filter;
pub mod order_details;
pub mod seed;
pub mod view;
pub mod wizard;

use chrono::{DateTime, Local};
use stockroom_core::{IdSequence, Order, OrderId, Product, ProductId};
use tracing::{debug, info};

pub use filter::{filter_records, sort_products};
pub use order_details::{FulfillmentDropdown, FulfillmentMethod, ModalPhase, ModalVisibility};
pub use view::{FilterChoice, SortChoice, UnknownOption, View};
pub use wizard::{NewProductWizard, WizardFields, WizardIntent, WizardTab};

/// Errors from dashboard commands.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    #[error("product {0} not found")]
    ProductNotFound(ProductId),
    #[error("order {0} not found")]
    OrderNotFound(OrderId),
    #[error("the new product wizard is not open")]
    WizardClosed,
}

/// Which modal is in front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveModal {
    None,
    NewProduct,
    OrderDetails,
}

/// Result of a wizard intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardOutcome {
    /// The wizard is still open.
    Continue,
    /// The product was saved and the wizard closed.
    Saved(ProductId),
    /// The wizard was closed without saving.
    Cancelled,
}

/// Owning controller for the dashboard page.
#[derive(Debug, Clone)]
pub struct Dashboard {
    products: Vec<Product>,
    orders: Vec<Order>,
    view: View,
    filter: FilterChoice,
    sort: SortChoice,
    search: String,
    wizard: Option<NewProductWizard>,
    current_order: Option<OrderId>,
    details: ModalVisibility,
    dropdown: FulfillmentDropdown,
    details_opened_at: Option<DateTime<Local>>,
    product_ids: IdSequence<ProductId>,
    product_codes: IdSequence<i32>,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(seed::products(), seed::orders())
    }
}

impl Dashboard {
    /// Build a dashboard over the given records.
    ///
    /// ID and code sequences start after the largest values present.
    #[must_use]
    pub fn new(products: Vec<Product>, orders: Vec<Order>) -> Self {
        let last_id = products.iter().map(|p| p.id.as_i32()).max().unwrap_or(0);
        let last_code = products
            .iter()
            .filter_map(|p| p.code.parse::<i32>().ok())
            .max()
            .unwrap_or(seed::FIRST_PRODUCT_CODE - 1);

        Self {
            products,
            orders,
            view: View::default(),
            filter: FilterChoice::default(),
            sort: SortChoice::default(),
            search: String::new(),
            wizard: None,
            current_order: None,
            details: ModalVisibility::default(),
            dropdown: FulfillmentDropdown::default(),
            details_opened_at: None,
            product_ids: IdSequence::after(last_id),
            product_codes: IdSequence::after(last_code),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    #[must_use]
    pub const fn view(&self) -> View {
        self.view
    }

    #[must_use]
    pub const fn filter(&self) -> FilterChoice {
        self.filter
    }

    #[must_use]
    pub const fn sort(&self) -> SortChoice {
        self.sort
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// Products matching the search, in the chosen sort order.
    #[must_use]
    pub fn visible_products(&self) -> Vec<&Product> {
        let mut visible = filter_records(&self.products, &self.search);
        sort_products(&mut visible, self.sort);
        visible
    }

    /// Orders matching the search, in list order.
    #[must_use]
    pub fn visible_orders(&self) -> Vec<&Order> {
        filter_records(&self.orders, &self.search)
    }

    /// Summary line under the products table.
    #[must_use]
    pub fn product_summary(&self) -> String {
        format!(
            "Showing {} of {} products",
            self.visible_products().len(),
            self.products.len()
        )
    }

    /// Summary line under the orders table.
    #[must_use]
    pub fn order_summary(&self) -> String {
        format!(
            "Showing {} of {} orders",
            self.visible_orders().len(),
            self.orders.len()
        )
    }

    #[must_use]
    pub const fn active_modal(&self) -> ActiveModal {
        if self.wizard.is_some() {
            ActiveModal::NewProduct
        } else if self.details.is_rendered() {
            ActiveModal::OrderDetails
        } else {
            ActiveModal::None
        }
    }

    #[must_use]
    pub const fn wizard(&self) -> Option<&NewProductWizard> {
        self.wizard.as_ref()
    }

    /// The order the details drawer shows (kept after the drawer closes).
    #[must_use]
    pub fn current_order(&self) -> Option<&Order> {
        self.current_order.and_then(|id| self.order(id))
    }

    #[must_use]
    pub const fn details(&self) -> &ModalVisibility {
        &self.details
    }

    #[must_use]
    pub const fn dropdown(&self) -> &FulfillmentDropdown {
        &self.dropdown
    }

    #[must_use]
    pub const fn details_opened_at(&self) -> Option<DateTime<Local>> {
        self.details_opened_at
    }

    // =========================================================================
    // Table commands
    // =========================================================================

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Handle the "Show:" select. The chosen option always becomes the label.
    pub fn choose_filter(&mut self, choice: FilterChoice) {
        self.filter = choice;
        self.view = choice.view();
        debug!(filter = choice.label(), view = %self.view, "filter chosen");
    }

    pub fn choose_sort(&mut self, sort: SortChoice) {
        self.sort = sort;
        debug!(sort = sort.label(), "sort chosen");
    }

    /// Flip one product's selection flag. Returns the new flag.
    ///
    /// # Errors
    ///
    /// Returns `ProductNotFound` if no product has this ID.
    pub fn toggle_product_selection(&mut self, id: ProductId) -> Result<bool, DashboardError> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(DashboardError::ProductNotFound(id))?;
        product.selected = !product.selected;
        debug!(product_id = %id, selected = product.selected, "product selection toggled");
        Ok(product.selected)
    }

    /// Flip one order's selection flag. Returns the new flag.
    ///
    /// Selecting (never deselecting) also opens the details drawer for that order.
    ///
    /// # Errors
    ///
    /// Returns `OrderNotFound` if no order has this ID.
    pub fn toggle_order_selection(&mut self, id: OrderId) -> Result<bool, DashboardError> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(DashboardError::OrderNotFound(id))?;
        order.selected = !order.selected;
        let selected = order.selected;
        debug!(order_id = %id, selected, "order selection toggled");

        if selected {
            self.open_order_details(id)?;
        }
        Ok(selected)
    }

    /// Append a copy of a product with a fresh ID and code.
    ///
    /// # Errors
    ///
    /// Returns `ProductNotFound` if no product has this ID.
    pub fn duplicate_product(&mut self, id: ProductId) -> Result<ProductId, DashboardError> {
        let source = self
            .product(id)
            .ok_or(DashboardError::ProductNotFound(id))?
            .clone();
        let copy = Product {
            id: self.product_ids.next_id(),
            code: self.product_codes.next_id().to_string(),
            name: format!("{} (Copy)", source.name),
            selected: false,
            ..source
        };
        let new_id = copy.id;
        info!(source_id = %id, product_id = %new_id, "product duplicated");
        self.products.push(copy);
        Ok(new_id)
    }

    /// Remove a product from the list.
    ///
    /// # Errors
    ///
    /// Returns `ProductNotFound` if no product has this ID.
    pub fn delete_product(&mut self, id: ProductId) -> Result<Product, DashboardError> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(DashboardError::ProductNotFound(id))?;
        let removed = self.products.remove(index);
        info!(product_id = %id, name = %removed.name, "product deleted");
        Ok(removed)
    }

    /// The row menu's "Edit" entry. Editing is not wired up; the request is only logged.
    ///
    /// # Errors
    ///
    /// Returns `ProductNotFound` if no product has this ID.
    pub fn request_product_edit(&self, id: ProductId) -> Result<(), DashboardError> {
        let product = self.product(id).ok_or(DashboardError::ProductNotFound(id))?;
        info!(product_id = %id, name = %product.name, "edit product requested");
        Ok(())
    }

    // =========================================================================
    // New product wizard
    // =========================================================================

    /// Open a fresh wizard, discarding any previous draft.
    pub fn open_new_product(&mut self) {
        self.close_order_details();
        self.wizard = Some(NewProductWizard::default());
    }

    /// Close the wizard without saving.
    pub fn cancel_new_product(&mut self) {
        if self.wizard.take().is_some() {
            debug!("new product wizard cancelled");
        }
    }

    /// Save the wizard's record and close it.
    ///
    /// # Errors
    ///
    /// Returns `WizardClosed` if no wizard is open.
    pub fn save_new_product(&mut self) -> Result<ProductId, DashboardError> {
        let wizard = self.wizard.take().ok_or(DashboardError::WizardClosed)?;
        let draft = wizard.build();
        let product = Product {
            id: self.product_ids.next_id(),
            name: draft.name,
            brand: draft.brand,
            code: draft.code,
            stock: draft.stock,
            variants: draft.variants,
            price: draft.price,
            image: draft.image,
            selected: false,
        };
        let id = product.id;
        info!(product_id = %id, name = %product.name, "product created");
        self.products.push(product);
        Ok(id)
    }

    /// Store posted fields, then carry out one wizard button press.
    ///
    /// # Errors
    ///
    /// Returns `WizardClosed` if no wizard is open.
    pub fn apply_wizard_intent(
        &mut self,
        fields: WizardFields,
        intent: WizardIntent,
    ) -> Result<WizardOutcome, DashboardError> {
        let wizard = self.wizard.as_mut().ok_or(DashboardError::WizardClosed)?;
        wizard.apply(fields);

        match intent {
            WizardIntent::Primary => {
                if !wizard.next() {
                    return self.save_new_product().map(WizardOutcome::Saved);
                }
            }
            WizardIntent::Cancel => {
                self.cancel_new_product();
                return Ok(WizardOutcome::Cancelled);
            }
            WizardIntent::SelectTab(tab) => wizard.select_tab(tab),
            WizardIntent::SetCover(image) => {
                wizard.set_cover(image);
            }
            WizardIntent::RemoveImage(image) => {
                wizard.remove_image(image);
            }
            WizardIntent::RemoveTag(tag) => wizard.remove_tag(&tag),
            WizardIntent::IncrementQuantity => wizard.increment_quantity(),
            WizardIntent::DecrementQuantity => wizard.decrement_quantity(),
            WizardIntent::Update => {}
        }
        Ok(WizardOutcome::Continue)
    }

    // =========================================================================
    // Order details
    // =========================================================================

    /// Show the details drawer for an order without touching its selection.
    ///
    /// Returns the generation of the entrance transition, if one started.
    ///
    /// # Errors
    ///
    /// Returns `OrderNotFound` if no order has this ID.
    pub fn open_order_details(&mut self, id: OrderId) -> Result<Option<u64>, DashboardError> {
        if self.order(id).is_none() {
            return Err(DashboardError::OrderNotFound(id));
        }
        self.wizard = None;
        self.current_order = Some(id);
        self.details_opened_at = Some(Local::now());
        self.dropdown.dismiss();
        let generation = self.details.open();
        debug!(order_id = %id, ?generation, "order details opening");
        Ok(generation)
    }

    /// Start closing the drawer. Returns the generation of the exit transition, if one started.
    pub fn close_order_details(&mut self) -> Option<u64> {
        let generation = self.details.close();
        if generation.is_some() {
            self.dropdown.dismiss();
            debug!(?generation, "order details closing");
        }
        generation
    }

    /// Transition-end acknowledgment for the drawer.
    pub fn acknowledge_transition(&mut self, generation: u64) -> bool {
        let completed = self.details.acknowledge(generation);
        debug!(
            generation,
            completed,
            phase = %self.details.phase(),
            "order details transition acknowledged"
        );
        completed
    }

    pub const fn toggle_fulfillment_dropdown(&mut self) {
        self.dropdown.toggle();
    }

    pub const fn choose_fulfillment(&mut self, method: FulfillmentMethod) {
        self.dropdown.choose(method);
    }

    pub const fn fulfillment_pointer_down(&mut self, inside: bool) {
        self.dropdown.pointer_down(inside);
    }
}

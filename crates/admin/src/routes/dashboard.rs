//! Dashboard page and table controls.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::Redirect,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::{
    components::{BadgeTheme, DataTableConfig, orders_table_config, products_table_config},
    dashboard::{ActiveModal, FilterChoice, SortChoice, View},
    error::AppError,
    filters,
    models::NavbarPreferences,
    state::AppState,
};

use super::types::{NavbarView, OrderDetailsView, OrderRow, ProductRow, WizardView};

/// Dashboard query parameters.
#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    /// Search text. Absent keeps the current search; empty clears it.
    pub q: Option<String>,
}

/// A select posted from above the table.
#[derive(Debug, Deserialize)]
pub struct OptionForm {
    pub option: String,
}

/// Dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub navbar: NavbarView,
    pub show_orders: bool,
    pub filter_label: &'static str,
    pub sort_label: &'static str,
    pub search: String,
    pub table: DataTableConfig,
    pub products: Vec<ProductRow>,
    pub orders: Vec<OrderRow>,
    pub summary: String,
    pub wizard: Option<WizardView>,
    pub details: Option<OrderDetailsView>,
    pub scroll_locked: bool,
}

/// Dashboard page handler.
#[instrument(skip(state, session))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<DashboardQuery>,
) -> DashboardTemplate {
    let navbar = NavbarPreferences::load(&session).await;
    let theme = BadgeTheme::from_dark_mode(navbar.dark_mode);

    if let Some(q) = query.q {
        state.dashboard().write().await.set_search(q.trim());
    }
    let dashboard = state.dashboard().read().await;

    let show_orders = dashboard.view() == View::Orders;
    let (table, summary) = if show_orders {
        (orders_table_config(), dashboard.order_summary())
    } else {
        (products_table_config(), dashboard.product_summary())
    };

    DashboardTemplate {
        navbar: navbar.into(),
        show_orders,
        filter_label: dashboard.filter().label(),
        sort_label: dashboard.sort().label(),
        search: dashboard.search().to_string(),
        table,
        products: dashboard
            .visible_products()
            .into_iter()
            .map(ProductRow::from)
            .collect(),
        orders: dashboard
            .visible_orders()
            .into_iter()
            .map(|order| OrderRow::new(order, theme))
            .collect(),
        summary,
        wizard: dashboard.wizard().map(WizardView::from),
        details: OrderDetailsView::new(&dashboard, theme, state.transition_ms()),
        scroll_locked: dashboard.active_modal() != ActiveModal::None
            || dashboard.details().scroll_locked(),
    }
}

/// "Show:" select.
#[instrument(skip(state))]
pub async fn choose_filter(
    State(state): State<AppState>,
    Form(form): Form<OptionForm>,
) -> Result<Redirect, AppError> {
    let choice: FilterChoice = form.option.parse()?;
    state.dashboard().write().await.choose_filter(choice);
    Ok(Redirect::to("/"))
}

/// "Sort by:" select.
#[instrument(skip(state))]
pub async fn choose_sort(
    State(state): State<AppState>,
    Form(form): Form<OptionForm>,
) -> Result<Redirect, AppError> {
    let sort: SortChoice = form.option.parse()?;
    state.dashboard().write().await.choose_sort(sort);
    Ok(Redirect::to("/"))
}

/// Mobile menu button in the navbar.
#[instrument(skip(session))]
pub async fn toggle_menu(session: Session) -> Result<Redirect, AppError> {
    let prefs = NavbarPreferences::load(&session).await.toggle_mobile_menu();
    prefs.save(&session).await?;
    Ok(Redirect::to("/"))
}

/// Liveness health check endpoint.
pub async fn health() -> &'static str {
    "ok"
}

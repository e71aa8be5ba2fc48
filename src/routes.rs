//! Router construction, one router per service.

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{config::Service, handlers, state::AppState};

/// Build the router for `state.service`.
///
/// Every service answers `/health`. The wallet routes exist only in the users service
/// and only when `wallet_enabled` is set.
pub fn build_router(state: AppState, wallet_enabled: bool) -> Router {
    let routes = match state.service {
        Service::Users => users_routes(wallet_enabled),
        Service::Transactions => transactions_routes(),
        Service::Campaigns => campaigns_routes(),
    };

    let routes = if state.service == Service::Users {
        // Browser clients call the users service directly
        routes.layer(CorsLayer::very_permissive())
    } else {
        routes
    };

    routes
        .route("/health", get(handlers::health::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn users_routes(wallet_enabled: bool) -> Router<AppState> {
    let router = Router::new()
        // User management
        .route("/users", post(handlers::users::create_user))
        .route(
            "/users/{user_id}",
            get(handlers::users::get_user)
                .put(handlers::users::update_user)
                .delete(handlers::users::delete_user),
        )
        // Accounts
        .route(
            "/users/{user_id}/accounts",
            get(handlers::accounts::list_accounts).post(handlers::accounts::create_account),
        )
        .route(
            "/users/{user_id}/accounts/{account_id}",
            put(handlers::accounts::update_account)
                .delete(handlers::accounts::delete_account),
        )
        // Credit cards
        .route(
            "/users/{user_id}/credit-cards",
            get(handlers::credit_cards::list_cards).post(handlers::credit_cards::create_card),
        )
        .route(
            "/users/{user_id}/credit-cards/{card_id}",
            put(handlers::credit_cards::update_card)
                .delete(handlers::credit_cards::delete_card),
        );

    if wallet_enabled {
        router.route(
            "/users/{user_id}/wallet",
            get(handlers::wallet::get_wallet)
                .post(handlers::wallet::add_wallet_item)
                .put(handlers::wallet::replace_wallet),
        )
    } else {
        router
    }
}

fn transactions_routes() -> Router<AppState> {
    Router::new()
        .route("/transactions", post(handlers::transactions::create_transaction))
        .route(
            "/transactions/{transaction_id}",
            get(handlers::transactions::get_transaction)
                .put(handlers::transactions::update_transaction)
                .delete(handlers::transactions::delete_transaction),
        )
        .route(
            "/users/{user_id}/transactions",
            get(handlers::transactions::list_user_transactions),
        )
        // Operations
        .route("/operations", post(handlers::operations::create_operation))
        .route(
            "/operations/{operation_id}",
            get(handlers::operations::get_operation).put(handlers::operations::update_operation),
        )
        .route(
            "/users/{user_id}/operations",
            get(handlers::operations::list_user_operations),
        )
}

fn campaigns_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/campaigns",
            get(handlers::campaigns::list_campaigns).post(handlers::campaigns::create_campaign),
        )
        .route(
            "/campaigns/{campaign_id}",
            get(handlers::campaigns::get_campaign)
                .put(handlers::campaigns::update_campaign)
                .delete(handlers::campaigns::delete_campaign),
        )
        .route(
            "/users/{user_id}/campaigns",
            get(handlers::campaigns::list_user_campaigns),
        )
        .route(
            "/users/{user_id}/campaigns/{campaign_id}",
            post(handlers::campaigns::assign_campaign),
        )
}

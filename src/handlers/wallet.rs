//! Wallet handlers, mounted only when `WALLET_ENABLED` is set.

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    error::AppError,
    extract::{ApiJson, ApiPath},
    models::wallet::{WalletItem, WalletResponse, WalletUpdateResponse},
    services::wallet_service::WalletStore,
};

pub async fn get_wallet(
    State(wallets): State<WalletStore>,
    ApiPath(user_id): ApiPath<i64>,
) -> Result<Json<WalletResponse>, AppError> {
    Ok(Json(WalletResponse {
        wallet: wallets.get(user_id),
    }))
}

pub async fn add_wallet_item(
    State(wallets): State<WalletStore>,
    ApiPath(user_id): ApiPath<i64>,
    ApiJson(item): ApiJson<WalletItem>,
) -> Result<(StatusCode, Json<WalletUpdateResponse>), AppError> {
    let wallet = wallets.add(user_id, item);
    Ok((
        StatusCode::CREATED,
        Json(WalletUpdateResponse {
            message: "Wallet item added".to_string(),
            wallet,
        }),
    ))
}

/// Replace the user's wallet with the given list.
pub async fn replace_wallet(
    State(wallets): State<WalletStore>,
    ApiPath(user_id): ApiPath<i64>,
    ApiJson(items): ApiJson<Vec<WalletItem>>,
) -> Result<Json<WalletUpdateResponse>, AppError> {
    let wallet = wallets.replace(user_id, items);
    Ok(Json(WalletUpdateResponse {
        message: "Wallet updated".to_string(),
        wallet,
    }))
}

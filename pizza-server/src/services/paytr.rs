//! PayTR iFrame token (REST, no SDK dependency)
//!
//! Token = base64(HMAC-SHA256(merchant_key, hash_str + merchant_salt)), where
//! `hash_str` concatenates merchant_id, user_ip, merchant_oid, email,
//! payment_amount, the base64 basket, no_installment, max_installment,
//! currency and test_mode in that order.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use http::HeaderMap;
use serde::Deserialize;
use sha2::Sha256;

use crate::core::PaytrConfig;
use shared::AppError;

/// Fallback when neither the body nor X-Forwarded-For names the client
pub const DEFAULT_USER_IP: &str = "127.0.0.1";

const DEFAULT_CURRENCY: &str = "TL";

/// Basket line as sent by the storefront
#[derive(Debug, Clone, Deserialize)]
pub struct BasketItem {
    pub name: String,
    /// Unit price in TRY
    pub price: f64,
    pub quantity: u32,
}

/// POST /api/paytr/create-token request body
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRequest {
    pub merchant_oid: String,
    pub email: String,
    /// Amount in kuruş
    pub payment_amount: i64,
    pub user_basket: Vec<BasketItem>,
    pub user_ip: Option<String>,
    pub no_installment: Option<u8>,
    pub max_installment: Option<u8>,
    pub currency: Option<String>,
}

impl TokenRequest {
    fn validate(&self) -> Result<(), AppError> {
        if self.merchant_oid.is_empty()
            || !self.merchant_oid.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(AppError::validation(
                "merchant_oid yalnızca harf ve rakam içermeli",
            ));
        }
        if !self.email.contains('@') {
            return Err(AppError::validation("Geçerli bir e-posta adresi gerekli"));
        }
        if self.payment_amount <= 0 {
            return Err(AppError::validation("Ödeme tutarı sıfırdan büyük olmalı"));
        }
        if self.user_basket.is_empty() {
            return Err(AppError::validation("Sepet boş olamaz"));
        }
        Ok(())
    }
}

/// Client IP: explicit body value, then the first X-Forwarded-For entry
pub fn resolve_user_ip(explicit: Option<&str>, headers: &HeaderMap) -> String {
    explicit
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(str::to_string)
        .or_else(|| {
            headers
                .get("x-forwarded-for")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.split(',').next())
                .map(str::trim)
                .filter(|ip| !ip.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| DEFAULT_USER_IP.to_string())
}

/// base64 of the basket as PayTR expects it: `[["name","12.50",2], ...]`
pub fn encode_basket(basket: &[BasketItem]) -> Result<String, AppError> {
    let rows: Vec<(&str, String, u32)> = basket
        .iter()
        .map(|item| (item.name.as_str(), format!("{:.2}", item.price), item.quantity))
        .collect();
    let json = serde_json::to_string(&rows)
        .map_err(|e| AppError::internal(format!("Basket serialization failed: {e}")))?;
    Ok(STANDARD.encode(json))
}

/// Compute the iFrame token for a request
pub fn create_token(
    config: &PaytrConfig,
    request: &TokenRequest,
    user_ip: &str,
) -> Result<String, AppError> {
    let (merchant_id, merchant_key, merchant_salt) = config
        .credentials()
        .ok_or_else(|| AppError::payment_config("PayTR yapılandırması eksik"))?;

    request.validate()?;

    let hash_str = format!(
        "{merchant_id}{user_ip}{oid}{email}{amount}{basket}{no_inst}{max_inst}{currency}{test_mode}",
        oid = request.merchant_oid,
        email = request.email,
        amount = request.payment_amount,
        basket = encode_basket(&request.user_basket)?,
        no_inst = request.no_installment.unwrap_or(0),
        max_inst = request.max_installment.unwrap_or(0),
        currency = request.currency.as_deref().unwrap_or(DEFAULT_CURRENCY),
        test_mode = u8::from(config.test_mode),
    );

    sign(merchant_key, &format!("{hash_str}{merchant_salt}"))
}

fn sign(key: &str, payload: &str) -> Result<String, AppError> {
    let mut mac = Hmac::<Sha256>::new_from_slice(key.as_bytes())
        .map_err(|_| AppError::internal("HMAC key error"))?;
    mac.update(payload.as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn config() -> PaytrConfig {
        PaytrConfig {
            merchant_id: Some("123456".into()),
            merchant_key: Some("anahtar".into()),
            merchant_salt: Some("tuz".into()),
            test_mode: true,
        }
    }

    fn request() -> TokenRequest {
        TokenRequest {
            merchant_oid: "SIP1001".into(),
            email: "musteri@example.com".into(),
            payment_amount: 37980,
            user_basket: vec![BasketItem {
                name: "Margherita".into(),
                price: 189.9,
                quantity: 2,
            }],
            user_ip: None,
            no_installment: None,
            max_installment: None,
            currency: None,
        }
    }

    #[test]
    fn test_token_is_deterministic_sha256_base64() {
        let a = create_token(&config(), &request(), "10.0.0.1").unwrap();
        let b = create_token(&config(), &request(), "10.0.0.1").unwrap();
        assert_eq!(a, b);
        // 32 bytes -> 44 base64 chars
        assert_eq!(a.len(), 44);
    }

    #[test]
    fn test_token_matches_manual_hmac() {
        let basket = encode_basket(&request().user_basket).unwrap();
        let expected = sign(
            "anahtar",
            &format!("12345610.0.0.1SIP1001musteri@example.com37980{basket}00TL1tuz"),
        )
        .unwrap();
        assert_eq!(
            create_token(&config(), &request(), "10.0.0.1").unwrap(),
            expected
        );
    }

    #[test]
    fn test_token_changes_with_inputs() {
        let base = create_token(&config(), &request(), "10.0.0.1").unwrap();
        assert_ne!(base, create_token(&config(), &request(), "10.0.0.2").unwrap());

        let mut live = config();
        live.test_mode = false;
        assert_ne!(base, create_token(&live, &request(), "10.0.0.1").unwrap());

        let mut cheaper = request();
        cheaper.payment_amount = 100;
        assert_ne!(base, create_token(&config(), &cheaper, "10.0.0.1").unwrap());
    }

    #[test]
    fn test_basket_encoding() {
        let encoded = encode_basket(&request().user_basket).unwrap();
        let decoded = String::from_utf8(STANDARD.decode(encoded).unwrap()).unwrap();
        assert_eq!(decoded, r#"[["Margherita","189.90",2]]"#);
    }

    #[test]
    fn test_missing_credentials() {
        let err = create_token(&PaytrConfig::default(), &request(), "1.1.1.1").unwrap_err();
        assert_eq!(err.code, shared::ErrorCode::PaymentConfigError);
    }

    #[test]
    fn test_validation() {
        let mut bad = request();
        bad.payment_amount = 0;
        let err = create_token(&config(), &bad, "1.1.1.1").unwrap_err();
        assert_eq!(err.code, shared::ErrorCode::ValidationError);

        let mut bad = request();
        bad.merchant_oid = "SIP-1".into();
        assert!(create_token(&config(), &bad, "1.1.1.1").is_err());

        let mut bad = request();
        bad.user_basket.clear();
        assert!(create_token(&config(), &bad, "1.1.1.1").is_err());
    }

    #[test]
    fn test_resolve_user_ip() {
        let mut headers = HeaderMap::new();
        assert_eq!(resolve_user_ip(None, &headers), DEFAULT_USER_IP);

        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.7, 10.0.0.1"),
        );
        assert_eq!(resolve_user_ip(None, &headers), "203.0.113.7");
        assert_eq!(resolve_user_ip(Some("198.51.100.2"), &headers), "198.51.100.2");
        assert_eq!(resolve_user_ip(Some("  "), &headers), "203.0.113.7");
    }
}

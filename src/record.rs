use crate::error::RowError;

use serde::Deserialize;

/// One validated sales transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleRecord {
    pub date: String,
    pub product: String,
    pub quantity: i64,
    pub price: f64,
}

/// A row as it appears in the file, before the numeric fields are checked.
#[derive(Debug, Deserialize)]
pub struct RawSale {
    pub date: String,
    pub product: String,
    pub quantity: String,
    pub price: String,
}

impl TryFrom<RawSale> for SaleRecord {
    type Error = RowError;

    fn try_from(raw: RawSale) -> Result<Self, Self::Error> {
        let quantity: i64 = raw.quantity.parse().map_err(|source| RowError::Quantity {
            value: raw.quantity.clone(),
            source,
        })?;

        // f64's parser accepts "NaN" and "inf"/"infinity"; those are valid
        // prices here, not skips.
        let price: f64 = raw.price.parse().map_err(|source| RowError::Price {
            value: raw.price.clone(),
            source,
        })?;

        Ok(SaleRecord {
            date: raw.date,
            product: raw.product,
            quantity,
            price,
        })
    }
}

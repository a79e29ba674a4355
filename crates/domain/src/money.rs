// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Monetary totals carried by estimates, invoices and purchase orders.
///
/// `tax_rate` is a percentage: `8.25` means 8.25 %.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    pub subtotal: Decimal,
    pub tax_rate: Decimal,
    pub tax_amount: Decimal,
    pub total_amount: Decimal,
}

impl Totals {
    /// Computes tax and total from a subtotal and a percentage tax rate.
    ///
    /// The tax amount is rounded to cents (banker's rounding).
    ///
    /// # Errors
    ///
    /// * `DomainError::NegativeAmount` if either input is negative
    /// * `DomainError::InvalidAmount` if the tax or total does not fit in a
    ///   `Decimal`
    pub fn compute(subtotal: Decimal, tax_rate: Decimal) -> Result<Self, DomainError> {
        if subtotal.is_sign_negative() && !subtotal.is_zero() {
            return Err(DomainError::NegativeAmount {
                field: "subtotal",
                value: subtotal.to_string(),
            });
        }
        if tax_rate.is_sign_negative() && !tax_rate.is_zero() {
            return Err(DomainError::NegativeAmount {
                field: "tax_rate",
                value: tax_rate.to_string(),
            });
        }

        let tax_amount: Decimal = subtotal
            .checked_mul(tax_rate)
            .and_then(|product| product.checked_div(Decimal::ONE_HUNDRED))
            .ok_or_else(|| DomainError::InvalidAmount {
                field: "tax_amount",
                value: format!("{subtotal} x {tax_rate}%"),
            })?
            .round_dp(2);
        let total_amount: Decimal = subtotal
            .checked_add(tax_amount)
            .ok_or_else(|| DomainError::InvalidAmount {
                field: "total_amount",
                value: format!("{subtotal} + {tax_amount}"),
            })?;

        Ok(Self {
            subtotal,
            tax_rate,
            tax_amount,
            total_amount,
        })
    }
}

//! 浮點數與精確十進位之間的轉換
//!
//! 轉換路徑固定為 `f64 → 標準十進位字串 → BigDecimal`，
//! 不可直接由二進位浮點值建立十進位值 (0.1 的二進位近似值並非 0.1)。
//! `BigDecimal` 為任意精度，整個有限 `f64` 範圍 (含次正規數) 皆可精確表示。

use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::utils::error::{MathError, Result};

/// 最短且可還原的十進位字串 (`0.1` 而非 `0.1000000000000000055511151231257827...`)
///
/// `f64` 的 `Display` 產生最短 round-trip 表示，且永遠不使用指數記號。
pub fn canonical_string(value: f64) -> Result<String> {
    if !value.is_finite() {
        return Err(MathError::NonFiniteInput { value });
    }
    Ok(value.to_string())
}

pub fn to_exact_decimal(value: f64) -> Result<BigDecimal> {
    let text = canonical_string(value)?;
    BigDecimal::from_str(&text).map_err(|e| MathError::ConversionError {
        message: format!("cannot parse {} as a decimal: {}", text, e),
    })
}

/// 唯一一次捨入：精確十進位結果 → 最接近的 `f64`
///
/// 以 `digits × 10^-scale` 的科學記號字串交給 `f64::from_str` (正確捨入)。
/// 超過 `f64::MAX` 的結果得到 `±inf`；由呼叫端決定如何呈現。
pub fn to_float(value: &BigDecimal) -> Result<f64> {
    let (digits, scale) = value.as_bigint_and_exponent();
    let text = format!("{}e{}", digits, -scale);
    text.parse::<f64>().map_err(|e| MathError::ConversionError {
        message: format!("cannot convert {} to a float: {}", text, e),
    })
}

/// CLI 顯示格式：整數結果保留 `.0` (例如 `5.0`、`-4.0`)
pub fn format_result(value: f64) -> String {
    format!("{:?}", value)
}

use std::str::FromStr;
use rust_decimal::{prelude::ToPrimitive, Decimal};
use rust_decimal_macros::dec;

use super::errors::AppError;

const MAX_FRACTION_DIGITS: usize = 6;
const NANOTONS_PER_TON: Decimal = dec!(1000000000);

// readout easing
const EASE_DIVISOR: f64 = 6.0;
const SNAP_EPSILON: f64 = 0.01;

/// Cosmetic "projected gain", never persisted. `None` when the amount is too large to multiply.
pub fn projected_gain(amount: Decimal, growth: Decimal) -> Option<Decimal> {
  amount.checked_mul(growth)?
    .checked_div(dec!(100))
    .map(|gain| gain.round_dp(2))
}

/// Share of the gift bought with `amount`, in percent.
pub fn share_percent(amount: Decimal, price: Decimal) -> Option<Decimal> {
  if price.is_zero() {
    return Some(Decimal::ZERO);
  }
  amount.checked_div(price)?.checked_mul(dec!(100))
}

/* Input normalization while typing:
   "0134" -> "134", ".5" -> "0.5", "0050.1.2" -> "50.1", "5." stays "5." */
pub fn normalize_amount_input(raw: &str) -> String {
  let filtered: String = raw.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();

  let mut parts = filtered.split('.');
  let int_part = parts.next().unwrap_or("");
  let int_normalized = strip_leading_zeros(int_part);

  match parts.next() {
    Some(frac_part) => {
      let frac: String = frac_part.chars().take(MAX_FRACTION_DIGITS).collect();
      format!("{}.{}", int_normalized, frac)
    },
    None => int_normalized
  }
}

fn strip_leading_zeros(digits: &str) -> String {
  let trimmed = digits.trim_start_matches('0');
  if trimmed.is_empty() {
    "0".to_string()
  } else {
    trimmed.to_string()
  }
}

pub fn parse_amount(text: &str) -> Result<Decimal, AppError> {
  let trimmed = text.trim();
  let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);
  let amount = Decimal::from_str(trimmed).map_err(|e| AppError::InvalidAmount(format!("{}: {}", text, e)))?;
  if amount <= Decimal::ZERO {
    return Err(AppError::InvalidAmount(format!("{} is not positive", text)));
  }
  Ok(amount)
}

/// Lenient parse for live readouts, anything unparsable reads as zero.
pub fn amount_or_zero(text: &str) -> Decimal {
  let trimmed = text.trim();
  let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);
  Decimal::from_str(trimmed).unwrap_or(Decimal::ZERO)
}

pub fn to_nanotons(amount: Decimal) -> Result<u64, AppError> {
  if amount.is_sign_negative() {
    return Err(AppError::InvalidAmount(format!("{} is negative", amount)));
  }
  let nanos = amount.checked_mul(NANOTONS_PER_TON)
    .ok_or_else(|| AppError::InvalidAmount(format!("{} TON overflows", amount)))?;
  if !nanos.fract().is_zero() {
    return Err(AppError::InvalidAmount(format!("{} has more than 9 decimals", amount)));
  }
  nanos.to_u64().ok_or_else(|| AppError::InvalidAmount(format!("{} TON overflows", amount)))
}

/// Exponential smoothing toward a target, one `step` per animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EasedValue {
  current: f64,
  target: f64
}

impl EasedValue {
  pub fn new(start: f64) -> Self {
    EasedValue { current: start, target: start }
  }

  pub fn retarget(&mut self, target: f64) {
    self.target = target;
  }

  pub fn step(&mut self) -> f64 {
    self.current += (self.target - self.current) / EASE_DIVISOR;
    if (self.current - self.target).abs() < SNAP_EPSILON {
      self.current = self.target;
    }
    self.current
  }

  pub fn is_settled(&self) -> bool {
    self.current == self.target
  }

  pub fn current(&self) -> f64 {
    self.current
  }

  pub fn display(&self) -> String {
    format!("{:.2}", self.current)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn gain_is_amount_times_growth_percent() {
    assert_eq!(projected_gain(dec!(100), dec!(10)), Some(dec!(10)));
    assert_eq!(projected_gain(dec!(250), dec!(12)), Some(dec!(30)));
    assert_eq!(projected_gain(dec!(33.33), dec!(7)), Some(dec!(2.33)));
    assert_eq!(projected_gain(dec!(100), dec!(-5)), Some(dec!(-5)));
    assert_eq!(projected_gain(Decimal::ZERO, dec!(15)), Some(Decimal::ZERO));
  }

  #[test]
  fn share_percent_of_price() {
    assert_eq!(share_percent(dec!(9), dec!(18)), Some(dec!(50)));
    assert_eq!(share_percent(dec!(1), Decimal::ZERO), Some(Decimal::ZERO));
  }

  #[test]
  fn huge_typed_amount_does_not_overflow() {
    let typed = normalize_amount_input("9999999999999999999999999999");
    let amount = amount_or_zero(&typed);
    assert_eq!(amount, dec!(9999999999999999999999999999));
    assert_eq!(projected_gain(amount, dec!(15)), None);
    assert_eq!(share_percent(amount, dec!(0.5)), None);
    assert!(share_percent(amount, dec!(18)).is_some());
    assert_eq!(parse_amount(&typed), Ok(amount));
  }

  #[test]
  fn normalization_strips_zeros_and_extra_dots() {
    assert_eq!(normalize_amount_input("0050.1.2"), "50.1");
    assert_eq!(normalize_amount_input("0134"), "134");
    assert_eq!(normalize_amount_input("000"), "0");
    assert_eq!(normalize_amount_input(""), "0");
    assert_eq!(normalize_amount_input(".5"), "0.5");
    assert_eq!(normalize_amount_input("0.5"), "0.5");
    assert_eq!(normalize_amount_input("5."), "5.");
    assert_eq!(normalize_amount_input("1a2b"), "12");
    assert_eq!(normalize_amount_input("-3"), "3");
    assert_eq!(normalize_amount_input("1.23456789"), "1.234567");
  }

  #[test]
  fn parse_rejects_non_positive_and_garbage() {
    assert_eq!(parse_amount("12.5"), Ok(dec!(12.5)));
    assert_eq!(parse_amount("5."), Ok(dec!(5)));
    assert!(matches!(parse_amount("0"), Err(AppError::InvalidAmount(_))));
    assert!(matches!(parse_amount("-1"), Err(AppError::InvalidAmount(_))));
    assert!(matches!(parse_amount("abc"), Err(AppError::InvalidAmount(_))));
    assert!(matches!(parse_amount(""), Err(AppError::InvalidAmount(_))));
  }

  #[test]
  fn lenient_parse_defaults_to_zero() {
    assert_eq!(amount_or_zero("7."), dec!(7));
    assert_eq!(amount_or_zero("oops"), Decimal::ZERO);
  }

  #[test]
  fn nanoton_conversion() {
    assert_eq!(to_nanotons(dec!(1)), Ok(1_000_000_000));
    assert_eq!(to_nanotons(dec!(0.5)), Ok(500_000_000));
    assert_eq!(to_nanotons(dec!(0.000000001)), Ok(1));
    assert!(to_nanotons(dec!(0.0000000001)).is_err());
    assert!(to_nanotons(dec!(-1)).is_err());
  }

  #[test]
  fn eased_value_converges_without_overshoot() {
    let mut eased = EasedValue::new(0.0);
    eased.retarget(50.0);
    let mut frames = 0;
    let mut last = eased.current();
    while !eased.is_settled() {
      let next = eased.step();
      assert!(next >= last && next <= 50.0);
      last = next;
      frames += 1;
      assert!(frames < 200);
    }
    assert_eq!(eased.current(), 50.0);
    assert_eq!(eased.display(), "50.00");
  }

  #[test]
  fn eased_value_follows_a_lower_target() {
    let mut eased = EasedValue::new(30.0);
    eased.retarget(0.0);
    let first = eased.step();
    assert_eq!(first, 25.0);
    while !eased.is_settled() {
      eased.step();
    }
    assert_eq!(eased.current(), 0.0);
  }
}

use rand::{rngs::SmallRng, Rng, SeedableRng};
use rust_decimal::Decimal;

use super::catalog::Gift;

const MIN_INVESTED: i64 = 1_000;
const MAX_INVESTED: i64 = 6_000; // exclusive

/// Demo portfolio: every catalog gift with a random notional investment.
pub fn seed_portfolio(gifts: &[Gift], seed: u64) -> Vec<Gift> {
  let mut rng = SmallRng::seed_from_u64(seed);
  gifts.iter()
    .map(|g| Gift {
      invested: Some(Decimal::from(rng.random_range(MIN_INVESTED..MAX_INVESTED))),
      ..g.clone()
    })
    .collect()
}

pub fn total_invested(holdings: &[Gift]) -> Decimal {
  holdings.iter().map(|g| g.invested_or_zero()).sum()
}

// drawn once per seed so the headline number does not change on every render
pub fn mock_growth_percent(seed: u64) -> Decimal {
  let mut rng = SmallRng::seed_from_u64(seed.rotate_left(17));
  let basis_points: i64 = rng.random_range(0..2_000);
  Decimal::new(basis_points, 2)
}

/// Space separated thousands, "12345" -> "12 345".
pub fn format_thousands(value: Decimal) -> String {
  let rounded = value.round_dp(2).normalize();
  let text = rounded.abs().to_string();
  let (int_part, frac_part) = match text.split_once('.') {
    Some((i, f)) => (i.to_string(), Some(f.to_string())),
    None => (text, None)
  };

  let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
  for (idx, ch) in int_part.chars().enumerate() {
    if idx > 0 && (int_part.len() - idx) % 3 == 0 {
      grouped.push(' ');
    }
    grouped.push(ch);
  }

  let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
  match frac_part {
    Some(f) => format!("{}{}.{}", sign, grouped, f),
    None => format!("{}{}", sign, grouped)
  }
}

/// Holdings table cell, grouped the same way as the portfolio total.
pub fn invested_label(gift: &Gift) -> String {
  format!("{} TON", format_thousands(gift.invested_or_zero()))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::utils::catalog::gifts;
  use rust_decimal_macros::dec;

  #[test]
  fn seeded_amounts_stay_in_range() {
    for seed in 0..50 {
      let holdings = seed_portfolio(&gifts(), seed);
      assert_eq!(holdings.len(), 6);
      for h in &holdings {
        let invested = h.invested.expect("seeded holding has an amount");
        assert!(invested >= dec!(1000) && invested <= dec!(5999), "{} out of range", invested);
        assert!(invested.fract().is_zero());
      }
    }
  }

  #[test]
  fn same_seed_same_portfolio() {
    let a = seed_portfolio(&gifts(), 42);
    let b = seed_portfolio(&gifts(), 42);
    assert_eq!(a, b);
    assert_eq!(mock_growth_percent(42), mock_growth_percent(42));
  }

  #[test]
  fn seeding_keeps_catalog_fields() {
    let catalog = gifts();
    let holdings = seed_portfolio(&catalog, 7);
    for (g, h) in catalog.iter().zip(holdings.iter()) {
      assert_eq!((g.id, &g.name, g.price, g.growth), (h.id, &h.name, h.price, h.growth));
    }
  }

  #[test]
  fn total_sums_with_missing_as_zero() {
    let mut holdings = gifts();
    holdings[0].invested = Some(dec!(1500));
    holdings[1].invested = None;
    holdings[2].invested = Some(dec!(2500.5));
    assert_eq!(total_invested(&holdings), dec!(4000.5));
    assert_eq!(total_invested(&[]), Decimal::ZERO);
  }

  #[test]
  fn growth_percent_below_twenty() {
    for seed in 0..100 {
      let pct = mock_growth_percent(seed);
      assert!(pct >= Decimal::ZERO && pct < dec!(20));
      assert!(pct.scale() <= 2);
    }
  }

  #[test]
  fn thousands_are_space_grouped() {
    assert_eq!(format_thousands(dec!(12345)), "12 345");
    assert_eq!(format_thousands(dec!(999)), "999");
    assert_eq!(format_thousands(dec!(1000000)), "1 000 000");
    assert_eq!(format_thousands(dec!(4000.50)), "4 000.5");
    assert_eq!(format_thousands(dec!(-2500)), "-2 500");
  }

  #[test]
  fn table_rows_group_thousands_like_the_total() {
    let mut gift = gifts().remove(0);
    gift.invested = Some(dec!(4250));
    assert_eq!(invested_label(&gift), "4 250 TON");
    gift.invested = None;
    assert_eq!(invested_label(&gift), "0 TON");
  }
}

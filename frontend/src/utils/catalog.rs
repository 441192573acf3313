use std::cmp::Ordering;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const TON_LOGO: &str = "https://ton.org/download/ton_symbol.png";

pub const WEEK_DAYS: [&str; 7] = ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"];

// mocked 7 day curves, applied to a gift price or to the portfolio total
pub const GIFT_WEEK: [Decimal; 7] = [dec!(0.95), dec!(1.05), dec!(1.10), dec!(1.15), dec!(1.20), dec!(1.18), dec!(1.22)];
pub const PORTFOLIO_WEEK: [Decimal; 7] = [dec!(0.95), dec!(1.05), dec!(1.10), dec!(1.15), dec!(1.20), dec!(1.25), dec!(1.30)];

#[derive(Debug, Clone, PartialEq)]
pub struct Gift {
  pub id: u32,
  pub name: String,
  pub price: Decimal,
  pub growth: Decimal,
  pub img: String,
  pub invested: Option<Decimal>,
}

impl Gift {
  fn new(id: u32, name: &str, price: Decimal, growth: Decimal, img: &str) -> Self {
    Gift { id, name: name.to_string(), price, growth, img: img.to_string(), invested: Some(Decimal::ZERO) }
  }

  pub fn is_growing(&self) -> bool {
    self.growth >= Decimal::ZERO
  }

  pub fn invested_or_zero(&self) -> Decimal {
    self.invested.unwrap_or(Decimal::ZERO)
  }
}

pub fn gifts() -> Vec<Gift> {
  vec![
    Gift::new(1, "Push Pepe", dec!(3450), dec!(5), "https://cdn.changes.tg/gifts/models/Plush%20Pepe/png/Original.png"),
    Gift::new(2, "Durov Cap", dec!(2322), dec!(10), "https://cdn.changes.tg/gifts/models/Durov%27s%20Cap/png/Original.png"),
    Gift::new(3, "Signet Ring", dec!(20), dec!(8), "https://telegifter.ru/wp-content/themes/gifts/assets/img/gifts/signetring/Rose%20Gold.webp"),
    Gift::new(4, "Snoop Sigare", dec!(25), dec!(12), "https://storage.beee.pro/game_items/39238/NTtmBjZ3yUxIToDTrHFLseN2YaJKWWgXPj32B1V6.webp"),
    Gift::new(5, "Genie Lamp", dec!(30), dec!(7), "https://telegifter.ru/wp-content/themes/gifts/assets/img/gifts/genielamp/Lightning.webp"),
    Gift::new(6, "Scared Cat", dec!(18), dec!(15), "https://podarki-tg.com/wp-content/uploads/2025/06/image-863.png"),
  ]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortKey {
  Price,
  Growth,
  Name,
  Invested
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortDirection {
  Asc,
  Desc
}

fn compare_by(a: &Gift, b: &Gift, key: SortKey) -> Ordering {
  match key {
    SortKey::Price => a.price.cmp(&b.price),
    SortKey::Growth => a.growth.cmp(&b.growth),
    SortKey::Name => a.name.cmp(&b.name),
    SortKey::Invested => a.invested_or_zero().cmp(&b.invested_or_zero()),
  }
}

/// Stable sort, equal keys keep their catalog order in both directions.
pub fn sort_gifts(gifts: &mut [Gift], key: SortKey, direction: SortDirection) {
  gifts.sort_by(|a, b| {
    let ord = compare_by(a, b, key);
    match direction {
      SortDirection::Asc => ord,
      SortDirection::Desc => ord.reverse()
    }
  });
}

/* Market page dropdown */
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarketSort {
  PriceAsc,
  GrowthDesc
}

impl MarketSort {
  pub fn from_value(value: &str) -> Self {
    match value {
      "growth" => MarketSort::GrowthDesc,
      _ => MarketSort::PriceAsc
    }
  }

  pub fn value(&self) -> &'static str {
    match self {
      MarketSort::PriceAsc => "price",
      MarketSort::GrowthDesc => "growth",
    }
  }

  pub fn apply(&self, gifts: &mut [Gift]) {
    match self {
      MarketSort::PriceAsc => sort_gifts(gifts, SortKey::Price, SortDirection::Asc),
      MarketSort::GrowthDesc => sort_gifts(gifts, SortKey::Growth, SortDirection::Desc),
    }
  }
}

/* Portfolio page column toggle */
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SortConfig {
  pub key: SortKey,
  pub direction: SortDirection
}

impl Default for SortConfig {
  fn default() -> Self {
    SortConfig { key: SortKey::Growth, direction: SortDirection::Desc }
  }
}

impl SortConfig {
  // asking twice for an ascending key flips it, anything else starts ascending
  pub fn request(&self, key: SortKey) -> SortConfig {
    let direction = if self.key == key && self.direction == SortDirection::Asc {
      SortDirection::Desc
    } else {
      SortDirection::Asc
    };
    SortConfig { key, direction }
  }

  pub fn apply(&self, gifts: &mut [Gift]) {
    sort_gifts(gifts, self.key, self.direction)
  }
}

pub fn weekly_series(base: Decimal, multipliers: &[Decimal; 7]) -> Vec<(&'static str, Decimal)> {
  WEEK_DAYS.iter()
    .zip(multipliers.iter())
    .map(|(day, m)| (*day, (base * m).round_dp(2)))
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn ids(gifts: &[Gift]) -> Vec<u32> {
    gifts.iter().map(|g| g.id).collect()
  }

  #[test]
  fn price_ascending_orders_cheapest_first() {
    let mut list = gifts();
    sort_gifts(&mut list, SortKey::Price, SortDirection::Asc);
    assert_eq!(ids(&list), vec![6, 3, 4, 5, 2, 1]);
  }

  #[test]
  fn price_descending_orders_most_expensive_first() {
    let mut list = gifts();
    sort_gifts(&mut list, SortKey::Price, SortDirection::Desc);
    assert_eq!(ids(&list), vec![1, 2, 5, 4, 3, 6]);
  }

  #[test]
  fn equal_prices_keep_input_order() {
    let mut list = gifts();
    list[0].price = dec!(20);
    list[4].price = dec!(20);
    sort_gifts(&mut list, SortKey::Price, SortDirection::Asc);
    assert_eq!(ids(&list), vec![6, 1, 3, 5, 4, 2]);

    sort_gifts(&mut list, SortKey::Price, SortDirection::Desc);
    assert_eq!(ids(&list), vec![2, 4, 1, 3, 5, 6]);
  }

  #[test]
  fn market_growth_preset_is_descending() {
    let mut list = gifts();
    MarketSort::from_value("growth").apply(&mut list);
    assert_eq!(ids(&list), vec![6, 4, 2, 3, 5, 1]);
    assert_eq!(MarketSort::from_value("anything"), MarketSort::PriceAsc);
  }

  #[test]
  fn invested_sort_treats_missing_as_zero() {
    let mut list = gifts();
    list[0].invested = None;
    list[1].invested = Some(dec!(-5));
    list[2].invested = Some(dec!(40));
    sort_gifts(&mut list, SortKey::Invested, SortDirection::Asc);
    assert_eq!(list[0].id, 2);
    assert_eq!(list[list.len() - 1].id, 3);
  }

  #[test]
  fn sort_config_toggles_on_repeated_request() {
    let initial = SortConfig::default();
    assert_eq!(initial, SortConfig { key: SortKey::Growth, direction: SortDirection::Desc });

    // growth is descending, so asking for growth starts ascending
    let growth = initial.request(SortKey::Growth);
    assert_eq!(growth.direction, SortDirection::Asc);
    let growth = growth.request(SortKey::Growth);
    assert_eq!(growth.direction, SortDirection::Desc);

    let name = growth.request(SortKey::Name);
    assert_eq!(name, SortConfig { key: SortKey::Name, direction: SortDirection::Asc });
  }

  #[test]
  fn weekly_series_rounds_to_cents() {
    let series = weekly_series(dec!(18), &GIFT_WEEK);
    assert_eq!(series.len(), 7);
    assert_eq!(series[0], ("Пн", dec!(17.10)));
    assert_eq!(series[6], ("Вс", dec!(21.96)));

    let series = weekly_series(dec!(333.33), &PORTFOLIO_WEEK);
    assert_eq!(series[1].1, dec!(350.00));
  }
}

use dioxus::prelude::*;

pub struct Season {
  pub name: &'static str,
  pub info: &'static str
}

pub const SEASONS: [Season; 2] = [
  Season { name: "Весна 2025", info: "Специальные подарки и бонусы" },
  Season { name: "Лето 2025", info: "Сезонные розыгрыши" },
];

#[component]
pub fn GiftsStats() -> Element {
  rsx! {
    div {
      class: "seasons-page",
      h2 { "Сезоны" }
      for season in SEASONS.iter() {
        div {
          key: "{season.name}",
          class: "season-item",
          div { strong { "{season.name}" } }
          div { "{season.info}" }
        }
      }
    }
  }
}

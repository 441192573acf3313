#![allow(non_snake_case)]

use dioxus::prelude::*;

// outline icons, 24x24 grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconKind {
  ArrowUp,
  ArrowDown,
  ArrowRight,
  Plus,
  Minus,
  Gift,
  Wallet,
  User,
  Home,
  PieChart,
  ShoppingBag
}

#[component]
pub fn Icon(kind: IconKind, #[props(default = 24)] size: u32) -> Element {
  rsx! {
    svg {
      class: "icon",
      xmlns: "http://www.w3.org/2000/svg",
      width: "{size}",
      height: "{size}",
      view_box: "0 0 24 24",
      fill: "none",
      stroke: "currentcolor",
      stroke_width: "2",
      stroke_linecap: "round",
      stroke_linejoin: "round",
      {match kind {
        IconKind::ArrowUp => rsx! {
          path { d: "m5 12 7-7 7 7" }
          path { d: "M12 19V5" }
        },
        IconKind::ArrowDown => rsx! {
          path { d: "M12 5v14" }
          path { d: "m19 12-7 7-7-7" }
        },
        IconKind::ArrowRight => rsx! {
          path { d: "M5 12h14" }
          path { d: "m12 5 7 7-7 7" }
        },
        IconKind::Plus => rsx! {
          path { d: "M5 12h14" }
          path { d: "M12 5v14" }
        },
        IconKind::Minus => rsx! {
          path { d: "M5 12h14" }
        },
        IconKind::Gift => rsx! {
          rect { x: "3", y: "8", width: "18", height: "4", rx: "1" }
          path { d: "M12 8v13" }
          path { d: "M19 12v7a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2v-7" }
          path { d: "M7.5 8a2.5 2.5 0 0 1 0-5A4.8 8 0 0 1 12 8a4.8 8 0 0 1 4.5-5 2.5 2.5 0 0 1 0 5" }
        },
        IconKind::Wallet => rsx! {
          path { d: "M19 7V4a1 1 0 0 0-1-1H5a2 2 0 0 0 0 4h15a1 1 0 0 1 1 1v4h-3a2 2 0 0 0 0 4h3a1 1 0 0 0 1-1v-2a1 1 0 0 0-1-1" }
          path { d: "M3 5v14a2 2 0 0 0 2 2h15a1 1 0 0 0 1-1v-4" }
        },
        IconKind::User => rsx! {
          path { d: "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" }
          circle { cx: "12", cy: "7", r: "4" }
        },
        IconKind::Home => rsx! {
          path { d: "m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" }
          polyline { points: "9 22 9 12 15 12 15 22" }
        },
        IconKind::PieChart => rsx! {
          path { d: "M21.21 15.89A10 10 0 1 1 8 2.83" }
          path { d: "M22 12A10 10 0 0 0 12 2v10z" }
        },
        IconKind::ShoppingBag => rsx! {
          path { d: "M6 2 3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4Z" }
          path { d: "M3 6h18" }
          path { d: "M16 10a4 4 0 0 1-8 0" }
        },
      }}
    }
  }
}

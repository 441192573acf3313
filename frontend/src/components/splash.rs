#![allow(non_snake_case)]

use std::time::Duration;
use async_std::task::sleep;
use dioxus::{logger::tracing::info, prelude::*};
use web_sys::{window, Performance};

use crate::utils::{catalog::TON_LOGO, splash::{ParticleField, SplashDriver, SplashEvent, SplashPhase, SplashTimeline, FRAME_MS}};

const FIELD_SIZE: f64 = 240.0;
const PARTICLES: usize = 36;

// high resolution clock when available, Date otherwise
struct FrameClock {
  perf_inst: Option<Performance>,
  started: f64
}

impl FrameClock {
  fn start() -> Self {
    let perf_inst = window().and_then(|w| w.performance());
    let started = Self::read(&perf_inst);
    FrameClock { perf_inst, started }
  }

  fn read(perf_inst: &Option<Performance>) -> f64 {
    match perf_inst {
      Some(p) => p.now(),
      None => js_sys::Date::now()
    }
  }

  fn elapsed_ms(&self) -> u64 {
    (Self::read(&self.perf_inst) - self.started).max(0.0) as u64
  }
}

#[component]
pub fn SplashScreen(
  duration_ms: u64,
  #[props(default = TON_LOGO.to_string())] logo_url: String,
  on_complete: EventHandler<()>,
) -> Element {
  let timeline = SplashTimeline::new(duration_ms);
  let mut progress = use_signal(|| 0_u8);
  let mut phase = use_signal(|| SplashPhase::Visible);
  let mut dots = use_signal(Vec::<(f64, f64, f64)>::new);

  use_future(move || async move {
    let clock = FrameClock::start();
    let mut driver = SplashDriver::new(timeline);
    let center = FIELD_SIZE / 2.0;
    let mut field = ParticleField::seeded(PARTICLES, (center, center), center, js_sys::Date::now() as u64);
    let dt = FRAME_MS as f64 / 1_000.0;

    loop {
      let elapsed = clock.elapsed_ms();
      field.step(dt);
      dots.set(field.positions());

      let event = driver.tick(elapsed);
      progress.set(driver.progress());
      phase.set(timeline.phase(elapsed));

      if let Some(SplashEvent::Completed) = event {
        info!("splash completed after {} ms", elapsed);
        on_complete.call(());
        break;
      }
      sleep(Duration::from_millis(FRAME_MS)).await;
    }
  });

  let logo_style = match phase() {
    SplashPhase::Visible => "opacity: 1;".to_string(),
    _ => format!("opacity: 0; transition: opacity {}ms ease-out;", timeline.fade_ms()),
  };
  let pct = progress();
  let view_box = format!("0 0 {} {}", FIELD_SIZE, FIELD_SIZE);

  rsx! {
    div {
      class: "splash-screen",
      div {
        class: "splash-stage",
        svg {
          class: "splash-particles",
          view_box: view_box,
          for (idx, (x, y, size)) in dots().into_iter().enumerate() {
            circle { key: "{idx}", cx: "{x}", cy: "{y}", r: "{size}" }
          }
        }
        img { class: "splash-logo", style: logo_style, src: logo_url, alt: "logo" }
      }
      div {
        class: "splash-progress",
        div { class: "splash-progress-bar", style: "width: {pct}%;" }
      }
      span { class: "splash-progress-label", "{pct}%" }
    }
  }
}

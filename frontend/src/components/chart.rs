#![allow(non_snake_case)]

use charming::{component::{Axis, Grid}, element::{AxisLabel, AxisType, ItemStyle, LineStyle, SplitLine, Tooltip, Trigger}, series::Line, Chart, WasmRenderer};
use dioxus::{logger::tracing::error, prelude::*};
use rust_decimal::{prelude::ToPrimitive, Decimal};

use crate::utils::errors::AppError;

/// Mocked weekly line chart rendered by echarts into the div `canvas_id`.
#[component]
pub fn WeeklyChart(
  canvas_id: String,
  points: ReadOnlySignal<Vec<(&'static str, Decimal)>>,
  #[props(default = "#00c2ff".to_string())] color: String,
  #[props(default = true)] show_dots: bool,
) -> Element {
  let renderer = use_signal(|| WasmRenderer::new_opt(None, None));
  let target_id = canvas_id.clone();

  use_effect(move || {
    let series = points();
    let days = series.iter().map(|(day, _)| day.to_string()).collect::<Vec<String>>();
    let values = series.iter().map(|(_, v)| v.to_f64().unwrap_or(0.0)).collect::<Vec<f64>>();

    let chart = Chart::new()
    .background_color("transparent")
    .tooltip(
      Tooltip::new()
      .trigger(Trigger::Axis)
    )
    .grid(
      Grid::new()
      .left("3%")
      .right("4%")
      .top("8%")
      .bottom("3%")
      .contain_label(true)
    )
    .x_axis(
      Axis::new()
      .type_(AxisType::Category)
      .data(days)
      .axis_label(
        AxisLabel::new()
        .color("#7ed6ff")
      )
    )
    .y_axis(
      Axis::new()
      .type_(AxisType::Value)
      .scale(true)
      .split_line(
        SplitLine::new()
        .line_style(
          LineStyle::new()
          .color("rgba(255,255,255,0.05)")
        )
      )
      .axis_label(
        AxisLabel::new()
        .color("#7ed6ff")
      )
    )
    .series(
      Line::new()
      .name("TON")
      .smooth(true)
      .show_symbol(show_dots)
      .symbol_size(8.0)
      .line_style(
        LineStyle::new()
        .width(3.0)
        .color(color.as_str())
      )
      .item_style(
        ItemStyle::new()
        .color(color.as_str())
      )
      .data(values)
    );

    if let Err(e) = renderer.read_unchecked().render(&target_id, &chart) {
      error!("{}", AppError::ChartError(format!("{:?}", e)));
    }
  });

  let resize_js = format!(
    r#"
    var millis = 150;
    setTimeout(function() {{
        const element = document.getElementById('{id}');
        if (!element || !window.echarts) {{ return; }}
        var chart = echarts.getInstanceByDom(element);
        if (!chart) {{ return; }}
        window.addEventListener('resize', function() {{
            chart.resize();
        }});
    }}, millis)
    "#,
    id = canvas_id
  );

  rsx! {
    div {
      class: "chart-canvas",
      id: canvas_id,
      onmounted: move |_evt| {
        document::eval(&resize_js);
      }
    }
  }
}

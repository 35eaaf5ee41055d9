// Copyright 2025 the Stackplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command-line demo for `stackplot_charts`.
//!
//! Loads records from a JSON file (or a built-in sample), renders the stacked bar chart to SVG
//! and optionally simulates a pointer at a given position: the hovered bar gets a tooltip and
//! the click payload is logged.
mod data;
mod svg;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use kurbo::Point;
use stackplot_charts::{HoverState, StackedBarChart, StackedBarChartSpec};
use stackplot_transforms::ValuePolicy;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

#[derive(Parser, Debug)]
#[command(name = "stackplot_demo")]
#[command(about = "Render a stacked bar chart to SVG")]
#[command(version)]
struct Args {
    /// JSON file holding an array of objects; the built-in sample is used when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Where to write the SVG
    #[arg(short, long, default_value = "stackplot_demo.svg")]
    output: PathBuf,

    /// Outer chart width in pixels
    #[arg(long, default_value_t = 500.0)]
    width: f64,

    /// Outer chart height in pixels
    #[arg(long, default_value_t = 300.0)]
    height: f64,

    /// Band padding as a fraction of a band step
    #[arg(long, default_value_t = 0.05)]
    padding: f64,

    /// Field holding the category id in each input object
    #[arg(long, default_value = "x")]
    category_field: String,

    /// Reject non-numeric, negative or duplicate data instead of coercing it
    #[arg(long)]
    strict: bool,

    /// Category to draw as selected
    #[arg(long)]
    select: Option<String>,

    /// Simulated pointer position, as `x,y` in chart pixels
    #[arg(long, value_parser = parse_point)]
    hover: Option<Point>,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x `{x}`: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y `{y}`: {e}"))?;
    Ok(Point::new(x, y))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("stackplot=info"));
    Registry::default()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let records = match &args.input {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            data::records_from_json(&text, &args.category_field)
                .with_context(|| format!("failed to load records from {}", path.display()))?
        }
        None => data::sample_records(),
    };
    tracing::info!(records = records.len(), "loaded records");

    let mut spec = StackedBarChartSpec::new(args.width, args.height).with_padding(args.padding);
    if args.strict {
        spec = spec.with_value_policy(ValuePolicy::Strict);
    }
    if let Some(category) = &args.select {
        spec = spec.with_selected(category.as_str());
    }

    let chart = StackedBarChart::compute(&records, &spec).context("failed to compute chart")?;
    tracing::info!(
        series = ?chart.series_keys,
        domain = ?chart.domain,
        bars = chart.bars.len(),
        "computed chart"
    );

    let mut hover = HoverState::default();
    let tooltip = args.hover.and_then(|pointer| {
        hover.update(&chart, pointer);
        match hover.hit() {
            Some(hit) => {
                tracing::info!(
                    series = chart.series_key(hit).unwrap_or_default(),
                    category = chart.record(hit).map(|r| r.category()).unwrap_or_default(),
                    "pointer over bar"
                );
                if let Some(record) = chart.click(pointer) {
                    tracing::info!(record = ?record, "click");
                }
            }
            None => tracing::info!(x = pointer.x, y = pointer.y, "pointer over no bar"),
        }
        hover.tooltip(&chart)
    });

    let svg = svg::render_chart(&chart, tooltip.as_ref());
    std::fs::write(&args.output, svg)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    tracing::info!(path = %args.output.display(), "wrote chart");
    Ok(())
}

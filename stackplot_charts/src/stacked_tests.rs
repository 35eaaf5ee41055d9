// Copyright 2025 the Stackplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use stackplot_transforms::{Record, RecordError, ValuePolicy};

use crate::{
    BarHit, BarRect, ChartError, ConfigError, HoverState, Palette, StackedBarChart,
    StackedBarChartSpec,
};

fn two_by_two() -> Vec<Record> {
    vec![
        Record::new("A").with_value("s1", 3.0).with_value("s2", 5.0),
        Record::new("B").with_value("s1", 2.0).with_value("s2", 1.0),
    ]
}

fn assert_rect_close(a: Rect, b: Rect) {
    let eps = 1e-9;
    assert!((a.x0 - b.x0).abs() <= eps, "x0 {a:?} != {b:?}");
    assert!((a.y0 - b.y0).abs() <= eps, "y0 {a:?} != {b:?}");
    assert!((a.x1 - b.x1).abs() <= eps, "x1 {a:?} != {b:?}");
    assert!((a.y1 - b.y1).abs() <= eps, "y1 {a:?} != {b:?}");
}

fn find_bar(bars: &[BarRect], series: usize, record: usize) -> BarRect {
    *bars
        .iter()
        .find(|b| b.series == series && b.record == record)
        .expect("missing bar")
}

#[test]
fn bars_follow_stacks_and_scales() {
    let records = two_by_two();
    let spec = StackedBarChartSpec::new(500.0, 300.0).with_padding(0.0);
    let chart = StackedBarChart::compute(&records, &spec).expect("valid chart");

    assert_eq!(chart.series_keys, ["s1", "s2"]);
    assert_eq!(chart.domain, Some((0.0, 8.0)));
    assert_eq!(chart.layout.plot, Rect::new(50.0, 30.0, 470.0, 250.0));
    assert_eq!(chart.bars.len(), 4);

    // 220px of plot height for a domain of 8 => 27.5px per unit; 210px per band.
    assert_rect_close(
        find_bar(&chart.bars, 0, 0).rect,
        Rect::new(50.0, 167.5, 260.0, 250.0),
    );
    assert_rect_close(
        find_bar(&chart.bars, 1, 0).rect,
        Rect::new(50.0, 30.0, 260.0, 167.5),
    );
    assert_rect_close(
        find_bar(&chart.bars, 0, 1).rect,
        Rect::new(260.0, 195.0, 470.0, 250.0),
    );
    assert_rect_close(
        find_bar(&chart.bars, 1, 1).rect,
        Rect::new(260.0, 167.5, 470.0, 195.0),
    );
}

#[test]
fn bars_are_painted_series_major_with_palette_fills() {
    let records = two_by_two();
    let spec = StackedBarChartSpec::new(500.0, 300.0);
    let chart = StackedBarChart::compute(&records, &spec).expect("valid chart");

    let order: Vec<(usize, usize)> = chart.bars.iter().map(|b| (b.series, b.record)).collect();
    assert_eq!(order, [(0, 0), (0, 1), (1, 0), (1, 1)]);
    assert_eq!(chart.bars[0].fill, Palette::DEFAULT[0]);
    assert_eq!(chart.bars[2].fill, Palette::DEFAULT[1]);
    assert!(chart.bars.iter().all(|b| (b.opacity - 0.8).abs() < 1e-12));
}

#[test]
fn bar_heights_add_up_to_the_category_total() {
    let records = vec![
        Record::new("A")
            .with_value("s1", 1.5)
            .with_value("s2", 2.25)
            .with_value("s3", 0.75),
        Record::new("B").with_value("s3", 3.0),
        Record::new("C").with_value("s2", 4.0).with_value("s1", "0.5"),
    ];
    let spec = StackedBarChartSpec::new(640.0, 480.0);
    let chart = StackedBarChart::compute(&records, &spec).expect("valid chart");
    let y = chart.value_scale.expect("non-empty chart has a value scale");

    for (ri, record) in records.iter().enumerate() {
        let total: f64 = chart.series_keys.iter().map(|k| record.value(k)).sum();
        let pixels: f64 = chart
            .bars
            .iter()
            .filter(|b| b.record == ri)
            .map(|b| b.rect.height())
            .sum();
        let expected = y.map(0.0) - y.map(total);
        assert!((pixels - expected).abs() < 1e-9, "{pixels} != {expected}");
    }
}

#[test]
fn palette_wraps_for_many_series() {
    let mut record = Record::new("A");
    for i in 0..7 {
        record.set(std::format!("s{i}"), 1.0);
    }
    let records = vec![record];
    let chart = StackedBarChart::compute(&records, &StackedBarChartSpec::new(400.0, 300.0))
        .expect("valid chart");
    assert_eq!(chart.bars[5].fill, Palette::DEFAULT[0]);
    assert_eq!(chart.bars[6].fill, Palette::DEFAULT[1]);
}

#[test]
fn hit_test_finds_the_bar_under_the_pointer() {
    let records = two_by_two();
    let spec = StackedBarChartSpec::new(500.0, 300.0);
    let chart = StackedBarChart::compute(&records, &spec).expect("valid chart");

    let top_of_a = find_bar(&chart.bars, 1, 0).rect.center();
    let hit = chart.hit_test(top_of_a).expect("pointer is over a bar");
    assert_eq!(hit, BarHit {
        series: 1,
        record: 0
    });
    assert_eq!(chart.series_key(hit), Some("s2"));
    assert_eq!(chart.record(hit).map(Record::category), Some("A"));
    assert_eq!(chart.click(top_of_a), Some(&records[0]));

    // Between the two bands.
    let a = find_bar(&chart.bars, 0, 0).rect;
    let b = find_bar(&chart.bars, 0, 1).rect;
    let gap = Point::new(0.5 * (a.x1 + b.x0), 240.0);
    assert!(b.x0 > a.x1, "padding leaves a gap");
    assert_eq!(chart.hit_test(gap), None);

    // Above the shorter bar.
    let above_b = Point::new(b.center().x, 100.0);
    assert_eq!(chart.hit_test(above_b), None);
    assert_eq!(chart.click(above_b), None);
}

#[test]
fn zero_height_bars_are_not_hit() {
    let records = vec![
        Record::new("A").with_value("s1", 4.0),
        Record::new("B").with_value("s1", 1.0).with_value("s2", 2.0),
    ];
    let chart = StackedBarChart::compute(&records, &StackedBarChartSpec::new(500.0, 300.0))
        .expect("valid chart");
    let empty = find_bar(&chart.bars, 1, 0);
    assert_eq!(empty.rect.height(), 0.0);
    let just_below = Point::new(empty.rect.center().x, empty.rect.y0 + 0.5);
    assert_eq!(
        chart.hit_test(just_below),
        Some(BarHit {
            series: 0,
            record: 0
        })
    );
}

#[test]
fn hover_cycle_shows_and_hides_the_tooltip() {
    let records = two_by_two();
    let chart = StackedBarChart::compute(&records, &StackedBarChartSpec::new(500.0, 300.0))
        .expect("valid chart");
    let mut hover = HoverState::default();
    assert!(!hover.visible());

    let over = find_bar(&chart.bars, 0, 1).rect.center();
    assert!(hover.update(&chart, over));
    assert!(hover.visible());
    let (tip, anchor) = hover.tooltip(&chart).expect("tooltip while hovering");
    assert_eq!(tip.text_lines(), ["B", "s1: 2", "s2: 1"]);
    assert_eq!(anchor, Point::new(over.x + 15.0, over.y));

    let nudged = Point::new(over.x + 1.0, over.y);
    assert!(hover.update(&chart, nudged), "pointer moved");
    assert!(!hover.update(&chart, nudged), "nothing changed");

    assert!(hover.update(&chart, Point::new(5.0, 5.0)));
    assert!(!hover.visible());
    assert_eq!(hover.tooltip(&chart), None);
}

#[test]
fn selected_category_flags_its_bars() {
    let records = two_by_two();
    let spec = StackedBarChartSpec::new(500.0, 300.0).with_selected("B");
    let chart = StackedBarChart::compute(&records, &spec).expect("valid chart");
    for bar in &chart.bars {
        assert_eq!(bar.selected, bar.record == 1);
    }
}

#[test]
fn axes_cover_the_domain_and_categories() {
    let records = two_by_two();
    let spec = StackedBarChartSpec::new(500.0, 300.0).with_value_tick_count(4);
    let chart = StackedBarChart::compute(&records, &spec).expect("valid chart");

    let values: Vec<&str> = chart
        .value_axis
        .ticks
        .iter()
        .map(|t| t.label.as_str())
        .collect();
    assert_eq!(values, ["0", "2", "4", "6", "8"]);
    let categories: Vec<&str> = chart
        .category_axis
        .ticks
        .iter()
        .map(|t| t.label.as_str())
        .collect();
    assert_eq!(categories, ["A", "B"]);
    assert_eq!(chart.category_axis.style.font_size, 8.0);

    let a = find_bar(&chart.bars, 0, 0).rect;
    assert!((chart.category_axis.ticks[0].position - a.center().x).abs() < 1e-9);
}

#[test]
fn empty_records_give_an_empty_chart() {
    let chart = StackedBarChart::compute(&[], &StackedBarChartSpec::new(500.0, 300.0))
        .expect("empty input is not an error");
    assert_eq!(chart.domain, None);
    assert_eq!(chart.value_scale, None);
    assert!(chart.series_keys.is_empty());
    assert!(chart.bars.is_empty());
    assert!(chart.value_axis.ticks.is_empty());
    assert!(chart.category_axis.ticks.is_empty());
    assert_eq!(chart.hit_test(Point::new(100.0, 100.0)), None);
}

#[test]
fn strict_policy_rejects_malformed_records() {
    let records = vec![
        Record::new("A").with_value("s1", 1.0),
        Record::new("B").with_value("s1", "lots"),
    ];
    let lenient = StackedBarChartSpec::new(500.0, 300.0);
    assert!(StackedBarChart::compute(&records, &lenient).is_ok());

    let strict = lenient.with_value_policy(ValuePolicy::Strict);
    let err = StackedBarChart::compute(&records, &strict).expect_err("strict rejects text");
    assert_eq!(
        err,
        ChartError::Records(RecordError::NonNumeric {
            category: String::from("B"),
            series: String::from("s1"),
        })
    );
}

#[test]
fn invalid_configuration_is_reported() {
    let records = two_by_two();
    let padding = StackedBarChartSpec::new(500.0, 300.0).with_padding(1.0);
    assert_eq!(
        StackedBarChart::compute(&records, &padding).map(|_| ()),
        Err(ChartError::Config(ConfigError::InvalidPadding(1.0)))
    );

    let opacity = StackedBarChartSpec::new(500.0, 300.0).with_bar_opacity(1.5);
    assert_eq!(opacity.validate(), Err(ConfigError::InvalidOpacity(1.5)));

    let size = StackedBarChartSpec::new(f64::NAN, 300.0);
    assert_eq!(size.validate(), Err(ConfigError::InvalidSize));
}

#[test]
fn huge_values_still_give_finite_geometry() {
    let records = vec![
        Record::new("A")
            .with_value("s1", f64::MAX)
            .with_value("s2", f64::MAX),
        Record::new("B").with_value("s1", 1.0),
    ];
    let chart = StackedBarChart::compute(&records, &StackedBarChartSpec::new(500.0, 300.0))
        .expect("valid chart");
    assert_eq!(chart.domain, Some((0.0, f64::MAX)));
    for bar in &chart.bars {
        let r = bar.rect;
        assert!(
            [r.x0, r.y0, r.x1, r.y1].iter().all(|v| v.is_finite()),
            "non-finite bar {r:?}"
        );
    }
    assert!(!chart.value_axis.ticks.is_empty());
    assert!(chart.value_axis.ticks.iter().all(|t| t.position.is_finite()));
}

#[test]
fn compute_is_deterministic() {
    let records = two_by_two();
    let spec = StackedBarChartSpec::new(500.0, 300.0).with_nice(true);
    let a = StackedBarChart::compute(&records, &spec).expect("valid chart");
    let b = StackedBarChart::compute(&records, &spec).expect("valid chart");
    assert_eq!(a.bars, b.bars);
    assert_eq!(a.stacked, b.stacked);
    assert_eq!(a.value_axis, b.value_axis);
}

// Copyright 2025 the Stackplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG rendering for `stackplot_demo`.

use kurbo::{Line, Point};
use peniko::Color;
use stackplot_charts::{Axis, StackedBarChart, TextAnchor, TextBaseline, Tooltip};

const TOOLTIP_FONT_SIZE: f64 = 11.0;
const TOOLTIP_LINE_HEIGHT: f64 = 14.0;

/// Renders bars, axes and an optional tooltip into a standalone SVG document.
pub(crate) fn render_chart(
    chart: &StackedBarChart<'_>,
    tooltip: Option<&(Tooltip, Point)>,
) -> String {
    let view = chart.layout.view;
    let mut out = String::new();

    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    out.push_str(&format!(
        "viewBox=\"{} {} {} {}\" width=\"{}\" height=\"{}\">\n",
        view.x0,
        view.y0,
        view.width(),
        view.height(),
        view.width(),
        view.height()
    ));

    out.push_str("<g class=\"bars\">\n");
    for bar in &chart.bars {
        let r = bar.rect;
        out.push_str(&format!(
            r#"<rect class="{}" x="{}" y="{}" width="{}" height="{}""#,
            if bar.selected { "bar selected" } else { "bar" },
            r.x0,
            r.y0,
            r.width(),
            r.height(),
        ));
        write_color_attr(&mut out, "fill", bar.fill);
        out.push_str(&format!(r#" opacity="{}""#, bar.opacity));
        if bar.selected {
            out.push_str(r##" stroke="#000000" stroke-width="1.5""##);
        }
        out.push('>');
        if let Some(record) = chart.records().get(bar.record) {
            out.push_str("<title>");
            out.push_str(&escape_xml(&Tooltip::for_record(record).text_lines().join("\n")));
            out.push_str("</title>");
        }
        out.push_str("</rect>\n");
    }
    out.push_str("</g>\n");

    write_axis(&mut out, &chart.value_axis);
    write_axis(&mut out, &chart.category_axis);

    if let Some((tip, anchor)) = tooltip {
        write_tooltip(&mut out, tip, *anchor);
    }

    out.push_str("</svg>\n");
    out
}

fn write_axis(out: &mut String, axis: &Axis) {
    let style = &axis.style;
    out.push_str("<g class=\"axis\"");
    write_color_attr(out, "stroke", style.color);
    out.push_str(&format!(" stroke-width=\"{}\">\n", style.stroke_width));

    write_line(out, axis.domain);
    for tick in &axis.ticks {
        write_line(out, tick.line);
    }

    let anchor = match axis.anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };
    let baseline = match axis.baseline {
        TextBaseline::Middle => "middle",
        TextBaseline::Hanging => "hanging",
    };
    for tick in &axis.ticks {
        out.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="{}" text-anchor="{anchor}" dominant-baseline="{baseline}" stroke="none""#,
            tick.label_pos.x, tick.label_pos.y, style.font_size,
        ));
        write_color_attr(out, "fill", style.color);
        out.push('>');
        out.push_str(&escape_xml(&tick.label));
        out.push_str("</text>\n");
    }
    out.push_str("</g>\n");
}

fn write_line(out: &mut String, line: Line) {
    out.push_str(&format!(
        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"/>\n",
        line.p0.x, line.p0.y, line.p1.x, line.p1.y
    ));
}

fn write_tooltip(out: &mut String, tip: &Tooltip, anchor: Point) {
    let lines = tip.text_lines();
    let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    // Very rough heuristic: assume ~0.6em average glyph width.
    let width = 0.6 * TOOLTIP_FONT_SIZE * longest as f64 + 12.0;
    let height = TOOLTIP_LINE_HEIGHT * lines.len() as f64 + 8.0;

    out.push_str("<g class=\"tooltip\">\n");
    out.push_str(&format!(
        "<rect x=\"{}\" y=\"{}\" width=\"{width}\" height=\"{height}\" fill=\"#ffffff\" stroke=\"#333333\" rx=\"3\"/>\n",
        anchor.x, anchor.y,
    ));
    for (i, line) in lines.iter().enumerate() {
        out.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" font-size=\"{TOOLTIP_FONT_SIZE}\" dominant-baseline=\"hanging\">{}</text>\n",
            anchor.x + 6.0,
            anchor.y + 4.0 + TOOLTIP_LINE_HEIGHT * i as f64,
            escape_xml(line),
        ));
    }
    out.push_str("</g>\n");
}

fn write_color_attr(out: &mut String, name: &str, color: Color) {
    let rgba = color.to_rgba8();
    out.push_str(&format!(r##" {name}="#{:02x}{:02x}{:02x}""##, rgba.r, rgba.g, rgba.b));
    if rgba.a != 255 {
        out.push_str(&format!(r#" {name}-opacity="{}""#, f64::from(rgba.a) / 255.0));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

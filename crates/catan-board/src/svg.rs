//! SVG output for a laid-out scene.
//!
//! Draw order, back to front: sea, piers, port icons, tiles, number tokens, robber.

use crate::config::RenderConfig;
use crate::error::Result;
use crate::layout::{layout_board, NumberToken, PortMarker, RobberMarker, Scene, TileSprite};
use crate::model::GameState;
use std::fmt::{self, Display, Write};

const TOKEN_FILL: &str = "#eeeeee";
const HOT_NUMBER_FILL: &str = "#c0392b";
const PORT_FILL: &str = "#f5ecd7";
const TILE_STROKE: &str = "#f4e4bc";

/// Pixel value with at most two decimals and no trailing zeros
struct Num(f64);

impl Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = (self.0 * 100.0).round() / 100.0;
        // Avoid printing "-0"
        let value = if rounded == 0.0 { 0.0 } else { rounded };
        let text = format!("{:.2}", value);
        f.write_str(text.trim_end_matches('0').trim_end_matches('.'))
    }
}

/// Escape text for use in attributes and text nodes
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render a scene to an SVG document
pub fn render_svg(scene: &Scene, config: &RenderConfig) -> Result<String> {
    let mut out = String::new();
    write_svg(&mut out, scene, config)?;
    Ok(out)
}

/// Lay out and render a game-state snapshot
pub fn render_game_svg(state: &GameState, config: &RenderConfig) -> Result<String> {
    render_svg(&layout_board(&state.board, config), config)
}

/// Write a scene as SVG into any `fmt::Write` sink
pub fn write_svg<W: Write>(out: &mut W, scene: &Scene, config: &RenderConfig) -> fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = Num(scene.width),
        h = Num(scene.height),
    )?;
    writeln!(
        out,
        r#"<rect width="100%" height="100%" fill="{}"/>"#,
        escape_xml(&config.background)
    )?;

    writeln!(out, r#"<g class="piers">"#)?;
    for port in &scene.ports {
        write_piers(out, port, config)?;
    }
    writeln!(out, "</g>")?;

    writeln!(out, r#"<g class="ports">"#)?;
    for port in &scene.ports {
        write_port(out, port)?;
    }
    writeln!(out, "</g>")?;

    writeln!(out, r#"<g class="tiles">"#)?;
    for tile in &scene.tiles {
        write_tile(out, tile)?;
    }
    writeln!(out, "</g>")?;

    writeln!(out, r#"<g class="tokens">"#)?;
    for token in &scene.tokens {
        write_token(out, token, config)?;
    }
    writeln!(out, "</g>")?;

    if let Some(robber) = &scene.robber {
        write_robber(out, robber)?;
    }

    writeln!(out, "</svg>")
}

fn write_piers<W: Write>(out: &mut W, port: &PortMarker, config: &RenderConfig) -> fmt::Result {
    for pier in &port.piers {
        // A plank along +x from the corner, rotated into place
        writeln!(
            out,
            r#"<rect x="{x}" y="{y}" width="{len}" height="{pw}" fill="{fill}" transform="rotate({a} {x} {cy})"/>"#,
            x = Num(pier.start.x),
            y = Num(pier.start.y - config.pier_width / 2.0),
            cy = Num(pier.start.y),
            len = Num(pier.length),
            pw = Num(config.pier_width),
            fill = escape_xml(&config.pier_color),
            a = Num(pier.angle_degrees),
        )?;
    }
    Ok(())
}

fn write_port<W: Write>(out: &mut W, port: &PortMarker) -> fmt::Result {
    let r = port.radius;
    writeln!(
        out,
        r#"<g class="port" data-q="{}" data-r="{}" data-direction="{}" transform="translate({} {})">"#,
        port.coord.q,
        port.coord.r,
        port.direction.index(),
        Num(port.center.x),
        Num(port.center.y),
    )?;
    writeln!(
        out,
        r##"<circle r="{}" fill="{PORT_FILL}" stroke="#000" stroke-width="2"/>"##,
        Num(r)
    )?;
    match &port.href {
        Some(href) => {
            writeln!(
                out,
                r#"<image href="{}" x="{}" y="{}" width="{s}" height="{s}"/>"#,
                escape_xml(href),
                Num(-r * 0.5),
                Num(-r * 0.85),
                s = Num(r),
            )?;
            writeln!(
                out,
                r#"<text y="{}" text-anchor="middle" font-size="{}" font-weight="bold">{}</text>"#,
                Num(r * 0.6),
                Num(r * 0.55),
                escape_xml(&port.label),
            )?;
        }
        None => {
            writeln!(
                out,
                r#"<text y="{}" text-anchor="middle" font-size="{}" font-weight="bold">{}</text>"#,
                Num(r * 0.25),
                Num(r * 0.7),
                escape_xml(&port.label),
            )?;
        }
    }
    writeln!(out, "</g>")
}

fn write_tile<W: Write>(out: &mut W, tile: &TileSprite) -> fmt::Result {
    let points = tile
        .corners
        .iter()
        .map(|p| format!("{},{}", Num(p.x), Num(p.y)))
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(
        out,
        r#"<g class="tile" data-id="{}" data-q="{}" data-r="{}">"#,
        tile.tile_id, tile.coord.q, tile.coord.r
    )?;
    writeln!(
        out,
        r#"<polygon points="{}" fill="{}" stroke="{TILE_STROKE}" stroke-width="2"/>"#,
        points,
        tile.resource.fill_color()
    )?;
    writeln!(
        out,
        r#"<image href="{}" x="{}" y="{}" width="{}" height="{}"/>"#,
        escape_xml(&tile.href),
        Num(tile.x),
        Num(tile.y),
        Num(tile.width),
        Num(tile.height),
    )?;
    writeln!(out, "</g>")
}

fn write_token<W: Write>(out: &mut W, token: &NumberToken, config: &RenderConfig) -> fmt::Result {
    let fill = if token.hot { HOT_NUMBER_FILL } else { "#000" };
    writeln!(
        out,
        r#"<g class="token" transform="translate({} {})">"#,
        Num(token.center.x),
        Num(token.center.y)
    )?;
    writeln!(
        out,
        r##"<circle r="{}" fill="{TOKEN_FILL}" stroke="#000" stroke-width="2"/>"##,
        Num(token.radius)
    )?;
    writeln!(
        out,
        r#"<text x="0" y="0" text-anchor="middle" font-size="{}" font-weight="bold" fill="{fill}">{}</text>"#,
        Num(config.token_font_size),
        token.number
    )?;
    for pip in &token.pips {
        writeln!(
            out,
            r#"<circle class="pip" cx="{}" cy="{}" r="{}" fill="{fill}"/>"#,
            Num(pip.x - token.center.x),
            Num(pip.y - token.center.y),
            Num(config.pip_radius),
        )?;
    }
    writeln!(out, "</g>")
}

fn write_robber<W: Write>(out: &mut W, robber: &RobberMarker) -> fmt::Result {
    writeln!(
        out,
        r#"<image class="robber" href="{}" x="{}" y="{}" width="{}" height="{}"/>"#,
        escape_xml(&robber.href),
        Num(robber.center.x - robber.width / 2.0),
        Num(robber.center.y - robber.height / 2.0),
        Num(robber.width),
        Num(robber.height),
    )
}

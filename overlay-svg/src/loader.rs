//--------------------------------------------------------------------
// loader.rs
//--------------------------------------------------------------------
// Turns SVG path data into planar paths and path holes
//--------------------------------------------------------------------

use overlay_region::*;
use svg::node::element::path::*;

use crate::SvgError;

fn process_relative(cmd: Vec2, relative: Position, last_value: Vec2) -> Vec2 {
    match relative {
        Position::Absolute => cmd,
        Position::Relative => last_value + cmd
    }
}

fn process_update_relative(cmd: Vec2, relative: Position, last_value: &mut Vec2) -> Vec2 {
    let pos = process_relative(cmd, relative, *last_value);
    *last_value = pos;
    pos
}

fn vec(x: f32, y: f32) -> Vec2 { Vec2::new(x as Coord, y as Coord) }

pub fn path_from_string(data: &str) -> Result<PlanarPath, SvgError> {
    enum LastCmd { Quadratic, Cubic, Other }

    let data = Data::parse(data).map_err(|e| SvgError::PathData(e.to_string()))?;

    let mut last_value = Vec2::new(0.0, 0.0);
    let mut last_control = Vec2::new(0.0, 0.0);
    let mut last_command = LastCmd::Other;
    // Start of the current sub-path, where ClosePath brings the pen back to
    let mut subpath_start = Vec2::new(0.0, 0.0);

    let mut path = PlanarPath::new();
    for command in data.into_iter() {
        match command {
            Command::Move(pos, params) => {
                let mut not_first = false;
                for cmd in params.chunks_exact(2) {
                    let pos = process_update_relative(vec(cmd[0], cmd[1]), *pos, &mut last_value);
                    last_command = LastCmd::Other;
                    if not_first { path.line_to(pos); }
                    else {
                        path.move_to(pos);
                        subpath_start = pos;
                    }
                    not_first = true;
                }
            }
            Command::Line(pos, params) => {
                for cmd in params.chunks_exact(2) {
                    let pos = process_update_relative(vec(cmd[0], cmd[1]), *pos, &mut last_value);
                    last_command = LastCmd::Other;
                    path.line_to(pos);
                }
            }
            Command::HorizontalLine(pos, params) => {
                for cmd in params.iter() {
                    let v = if *pos == Position::Relative { 0.0 } else { last_value.y };
                    let pos = process_update_relative(Vec2::new(*cmd as Coord, v), *pos, &mut last_value);
                    last_command = LastCmd::Other;
                    path.line_to(pos);
                }
            }
            Command::VerticalLine(pos, params) => {
                for cmd in params.iter() {
                    let h = if *pos == Position::Relative { 0.0 } else { last_value.x };
                    let pos = process_update_relative(Vec2::new(h, *cmd as Coord), *pos, &mut last_value);
                    last_command = LastCmd::Other;
                    path.line_to(pos);
                }
            }
            Command::QuadraticCurve(pos, params) => {
                for cmd in params.chunks_exact(4) {
                    let ctl = process_relative(vec(cmd[0], cmd[1]), *pos, last_value);
                    let pos = process_update_relative(vec(cmd[2], cmd[3]), *pos, &mut last_value);
                    last_control = ctl;
                    last_command = LastCmd::Quadratic;
                    path.quadratic_to(ctl, pos);
                }
            }
            Command::CubicCurve(pos, params) => {
                for cmd in params.chunks_exact(6) {
                    let ctl1 = process_relative(vec(cmd[0], cmd[1]), *pos, last_value);
                    let ctl2 = process_relative(vec(cmd[2], cmd[3]), *pos, last_value);
                    let pos = process_update_relative(vec(cmd[4], cmd[5]), *pos, &mut last_value);
                    last_control = ctl2;
                    last_command = LastCmd::Cubic;
                    path.cubic_to(ctl1, ctl2, pos);
                }
            }
            Command::SmoothQuadraticCurve(pos, params) => {
                for cmd in params.chunks_exact(2) {
                    let lctl = if let LastCmd::Quadratic = last_command { last_control } else { last_value };
                    let ctl = last_value * 2.0 - lctl;
                    let pos = process_update_relative(vec(cmd[0], cmd[1]), *pos, &mut last_value);
                    last_control = ctl;
                    last_command = LastCmd::Quadratic;
                    path.quadratic_to(ctl, pos);
                }
            }
            Command::SmoothCubicCurve(pos, params) => {
                for cmd in params.chunks_exact(4) {
                    let lctl = if let LastCmd::Cubic = last_command { last_control } else { last_value };
                    let ctl1 = last_value * 2.0 - lctl;
                    let ctl2 = process_relative(vec(cmd[0], cmd[1]), *pos, last_value);
                    let pos = process_update_relative(vec(cmd[2], cmd[3]), *pos, &mut last_value);
                    last_control = ctl2;
                    last_command = LastCmd::Cubic;
                    path.cubic_to(ctl1, ctl2, pos);
                }
            }
            Command::EllipticalArc(pos, params) => {
                for cmd in params.chunks_exact(7) {
                    let radii = vec(cmd[0], cmd[1]);
                    let rangle = (cmd[2] as Coord).to_radians();
                    let large_arc = cmd[3] != 0.0;
                    let sweep = cmd[4] != 0.0;
                    let target = process_update_relative(vec(cmd[5], cmd[6]), *pos, &mut last_value);
                    last_command = LastCmd::Other;
                    last_control = target;
                    path.arc_to(radii, rangle, large_arc, sweep, target);
                }
            }
            Command::Close => {
                last_command = LastCmd::Other;
                last_value = subpath_start;
                path.close();
            }
        }
    }

    tracing::debug!(commands = path.len(), subpaths = path.subpath_count(), "loaded path from svg data");
    Ok(path)
}

// A hole whose outline comes from SVG path data
pub fn hole_from_string(data: &str, fill_rule: FillRule) -> Result<PathHole, SvgError> {
    Ok(PathHole::new(path_from_string(data)?).with_fill_rule(fill_rule))
}

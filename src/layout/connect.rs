use super::place::PlacedGate;
use super::types::{DiagramLine, LineKind};
use crate::graph::GateKind;

/// Post-placement pass: synthesize the line work expressing how each
/// expanded gate combines its children. Collapsed gates and gates without
/// children were never recorded, so they contribute nothing here.
pub(crate) fn build_lines(gates: &[PlacedGate]) -> Vec<DiagramLine> {
    let mut lines = Vec::new();
    for gate in gates {
        if gate.children.is_empty() {
            continue;
        }
        match gate.kind {
            GateKind::And => series_lines(gate, &mut lines),
            GateKind::Or | GateKind::Koon => rail_lines(gate, &mut lines),
        }
    }
    lines
}

/// AND: one chain segment between each consecutive pair of children, from
/// the previous child's right edge to the next child's left edge.
fn series_lines(gate: &PlacedGate, lines: &mut Vec<DiagramLine>) {
    for pair in gate.children.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        lines.push(DiagramLine {
            x1: prev.anchor.right_x,
            y1: prev.anchor.center_y,
            x2: next.anchor.left_x,
            y2: next.anchor.center_y,
            kind: LineKind::Series,
            arrow: next.arrow_into,
        });
    }
}

/// OR/K-of-N: twin vertical rails at the gate edges spanning the first to
/// the last branch, plus a pair of horizontal spurs per branch. The right
/// spur never carries an arrow; flow is modeled left-to-right into each
/// branch.
fn rail_lines(gate: &PlacedGate, lines: &mut Vec<DiagramLine>) {
    let first = &gate.children[0];
    let last = &gate.children[gate.children.len() - 1];
    let left_x = gate.x;
    let right_x = gate.x + gate.width;

    for x in [left_x, right_x] {
        lines.push(DiagramLine {
            x1: x,
            y1: first.anchor.center_y,
            x2: x,
            y2: last.anchor.center_y,
            kind: LineKind::Rail,
            arrow: false,
        });
    }

    for child in &gate.children {
        let y = child.anchor.center_y;
        lines.push(DiagramLine {
            x1: left_x,
            y1: y,
            x2: child.anchor.left_x,
            y2: y,
            kind: LineKind::Connector,
            arrow: child.arrow_into,
        });
        lines.push(DiagramLine {
            x1: child.anchor.right_x,
            y1: y,
            x2: right_x,
            y2: y,
            kind: LineKind::Connector,
            arrow: false,
        });
    }
}

//! SVG output of complete charts.

use hd_chart::{ALL_POINTS, Activation, ActivationEntry, ActivationSet, classify};
use hd_render::{CANVAS_HEIGHT, CANVAS_WIDTH, DiagramStyle, Primitive, render};

fn set(acts: &[(u8, u8)]) -> ActivationSet {
    acts.iter()
        .zip(ALL_POINTS)
        .map(|(&(g, l), p)| ActivationEntry::from_activation(p, Activation::new(g, l).unwrap()))
        .collect()
}

#[test]
fn svg_has_fixed_canvas_and_every_shape() {
    let facts = classify(&set(&[(20, 1), (34, 2), (1, 3)]), &set(&[(8, 4), (47, 5), (64, 6)]));
    let diagram = render(&facts, &DiagramStyle::default());
    assert_eq!(diagram.width(), CANVAS_WIDTH);
    assert_eq!(diagram.height(), CANVAS_HEIGHT);

    let svg = diagram.to_svg();
    assert!(svg.starts_with("<svg "));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains(r#"viewBox="0 0 500 760""#));
    assert_eq!(svg.matches("<polygon ").count(), 9);
    assert_eq!(svg.matches("<text ").count(), 64);
}

#[test]
fn custom_palette_is_used() {
    let style = DiagramStyle {
        design: "#0055aa".into(),
        ..DiagramStyle::default()
    };
    let facts = classify(&set(&[(64, 1)]), &set(&[(47, 1)]));
    let svg = render(&facts, &style).to_svg();
    assert!(svg.contains("#0055aa"));
    assert!(!svg.contains("#c62828"));
}

#[test]
fn layout_does_not_depend_on_activations() {
    let style = DiagramStyle::default();
    let empty = render(&classify(&set(&[]), &set(&[])), &style);
    let busy = render(&classify(&set(&[(20, 1), (34, 2)]), &set(&[(57, 1), (10, 1)])), &style);
    let outline = |d: &hd_render::Diagram| -> Vec<Vec<(f64, f64)>> {
        d.primitives()
            .iter()
            .filter_map(|p| match p {
                Primitive::Polygon { points, .. } => {
                    Some(points.iter().map(|p| (p.x, p.y)).collect())
                }
                _ => None,
            })
            .collect()
    };
    assert_eq!(outline(&empty), outline(&busy));
}

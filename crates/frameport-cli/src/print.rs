//! Plain-text rendering of a converted scene.

use std::fmt::Write;

use frameport_scene::ObjectSnapshot;

/// Render a snapshot as an indented tree, one object per line.
pub fn render_tree(snapshot: &ObjectSnapshot) -> String {
    let mut out = String::new();
    write_object(&mut out, snapshot, 0);
    out
}

fn write_object(out: &mut String, object: &ObjectSnapshot, depth: usize) {
    let _ = write!(out, "{:indent$}{}", "", object.name, indent = depth * 2);

    if let Some(placement) = &object.placement {
        let _ = write!(
            out,
            " @({}, {}) {}x{}",
            placement.position.x, placement.position.y, placement.size.x, placement.size.y
        );
    }
    if let Some(color) = object.fill.and_then(|fill| fill.color) {
        let _ = write!(out, " fill={}", color.to_hex());
    }
    if let Some(text) = &object.text {
        let _ = write!(out, " text={:?} font={}", text.content, text.font);
        if let Some(size) = text.font_size {
            let _ = write!(out, " size={size}");
        }
    }
    if let Some(interactive) = &object.interactive {
        match interactive.colors {
            Some(colors) => {
                let _ = write!(
                    out,
                    " pressable({} {} {})",
                    colors.normal.to_hex(),
                    colors.highlighted.to_hex(),
                    colors.pressed.to_hex()
                );
            }
            None => out.push_str(" pressable"),
        }
    }
    if !object.styles.is_empty() {
        let _ = write!(out, " styles={}", object.styles.len());
    }
    out.push('\n');

    for child in &object.children {
        write_object(out, child, depth + 1);
    }
}

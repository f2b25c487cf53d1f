//! View tree for the theme screen
//!
//! Rebuilt every frame from the current styles: a full-screen container
//! holding a heading and a circular container, with the switch centered in
//! the circle.

use crate::switch::SwitchControl;
use dusk_core::Color;
use dusk_theme::{ColorRole, ThemeStyles};

pub const CONTAINER_ID: &str = "container";
pub const HEADING_ID: &str = "heading";
pub const CIRCLE_ID: &str = "circle";
pub const SWITCH_ID: &str = "theme-switch";

pub const HEADING_TEXT: &str = "THEME";

/// Static text styling
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub font_weight: u16,
    pub letter_spacing: f32,
    pub margin_bottom: f32,
}

pub const HEADING_STYLE: TextStyle = TextStyle {
    font_size: 70.0,
    font_weight: 700,
    letter_spacing: 14.0,
    margin_bottom: 20.0,
};

/// Shadow depth of the circle
pub const CIRCLE_ELEVATION: f32 = 8.0;

/// Element-specific content
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    Container {
        background: Color,
    },
    Text {
        content: String,
        color: Color,
        style: TextStyle,
    },
    Circle {
        diameter: f32,
        corner_radius: f32,
        elevation: f32,
        background: Color,
    },
    Switch {
        value: bool,
        track: Color,
        thumb: Color,
    },
}

/// A node in the view tree
#[derive(Clone, Debug, PartialEq)]
pub struct ViewNode {
    pub id: &'static str,
    pub kind: NodeKind,
    pub children: Vec<ViewNode>,
}

impl ViewNode {
    fn leaf(id: &'static str, kind: NodeKind) -> Self {
        Self {
            id,
            kind,
            children: Vec::new(),
        }
    }

    fn with_child(mut self, child: ViewNode) -> Self {
        self.children.push(child);
        self
    }

    /// Depth-first search by id
    pub fn find(&self, id: &str) -> Option<&ViewNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Visit this node and its descendants depth-first, with their depth
    pub fn walk<'a>(&'a self, depth: usize, visit: &mut dyn FnMut(&'a ViewNode, usize)) {
        visit(self, depth);
        for child in &self.children {
            child.walk(depth + 1, visit);
        }
    }

    /// The animated color of this node: fill for containers, ink for text,
    /// track tint for the switch
    pub fn color(&self) -> Color {
        match &self.kind {
            NodeKind::Container { background } => *background,
            NodeKind::Text { color, .. } => *color,
            NodeKind::Circle { background, .. } => *background,
            NodeKind::Switch { track, .. } => *track,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text { content, .. } => Some(content),
            _ => None,
        }
    }

    /// Palette role that drives this node's color, if any
    pub fn role(&self) -> Option<ColorRole> {
        match &self.kind {
            NodeKind::Container { .. } => Some(ColorRole::Background),
            NodeKind::Text { .. } => Some(ColorRole::Text),
            NodeKind::Circle { .. } => Some(ColorRole::Circle),
            NodeKind::Switch { .. } => None,
        }
    }
}

/// The full screen for one frame
#[derive(Clone, Debug, PartialEq)]
pub struct ViewTree {
    root: ViewNode,
}

impl ViewTree {
    pub fn build(
        styles: &ThemeStyles,
        switch: &SwitchControl,
        switch_value: bool,
        circle_diameter: f32,
    ) -> Self {
        let heading = ViewNode::leaf(
            HEADING_ID,
            NodeKind::Text {
                content: HEADING_TEXT.to_string(),
                color: styles.text,
                style: HEADING_STYLE,
            },
        );

        let toggle = ViewNode::leaf(
            SWITCH_ID,
            NodeKind::Switch {
                value: switch_value,
                track: switch.track_color(switch_value),
                thumb: switch.style().thumb,
            },
        );

        let circle = ViewNode::leaf(
            CIRCLE_ID,
            NodeKind::Circle {
                diameter: circle_diameter,
                corner_radius: circle_diameter / 2.0,
                elevation: CIRCLE_ELEVATION,
                background: styles.circle,
            },
        )
        .with_child(toggle);

        let root = ViewNode::leaf(
            CONTAINER_ID,
            NodeKind::Container {
                background: styles.background,
            },
        )
        .with_child(heading)
        .with_child(circle);

        Self { root }
    }

    pub fn root(&self) -> &ViewNode {
        &self.root
    }

    pub fn find(&self, id: &str) -> Option<&ViewNode> {
        self.root.find(id)
    }

    /// All nodes, depth-first
    pub fn nodes(&self) -> Vec<(&ViewNode, usize)> {
        let mut out = Vec::with_capacity(4);
        self.root.walk(0, &mut |node, depth| out.push((node, depth)));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dusk_theme::{Palette, ThemeStyles};

    fn light_tree(value: bool) -> ViewTree {
        ViewTree::build(
            &ThemeStyles::from(Palette::light()),
            &SwitchControl::new(SWITCH_ID),
            value,
            273.0,
        )
    }

    #[test]
    fn tree_shape() {
        let tree = light_tree(false);
        let ids: Vec<_> = tree.nodes().iter().map(|(n, d)| (n.id, *d)).collect();
        assert_eq!(
            ids,
            vec![
                (CONTAINER_ID, 0),
                (HEADING_ID, 1),
                (CIRCLE_ID, 1),
                (SWITCH_ID, 2)
            ]
        );
    }

    #[test]
    fn nodes_carry_styles() {
        let tree = light_tree(false);
        assert_eq!(tree.root().color().to_hex_string(), "#f8f8f8");
        assert_eq!(tree.find(HEADING_ID).and_then(|n| n.text()), Some("THEME"));
        assert_eq!(
            tree.find(HEADING_ID).map(|n| n.color().to_hex_string()),
            Some("#1e1e1e".to_string())
        );

        let Some(NodeKind::Circle {
            diameter,
            corner_radius,
            ..
        }) = tree.find(CIRCLE_ID).map(|n| &n.kind)
        else {
            panic!("circle missing");
        };
        assert_eq!(*diameter, 273.0);
        assert_eq!(*corner_radius, 136.5);
    }

    #[test]
    fn switch_reflects_value() {
        let on = light_tree(true);
        let Some(NodeKind::Switch { value, track, .. }) = on.find(SWITCH_ID).map(|n| &n.kind)
        else {
            panic!("switch missing");
        };
        assert!(*value);
        assert_eq!(*track, SwitchControl::new(SWITCH_ID).track_color(true));
        assert!(on.find("missing").is_none());
    }
}
